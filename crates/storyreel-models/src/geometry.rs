//! Frame geometry and center-crop resolution.
//!
//! Reframing to a new aspect ratio is done in two steps: an
//! aspect-preserving resize that makes one axis match the target exactly,
//! followed by a centered crop along the other axis. The resize never
//! distorts and the crop never letterboxes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from geometry resolution.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    #[error("invalid frame dimensions: {width}x{height} (both must be positive)")]
    InvalidDimensions { width: u32, height: u32 },
}

/// Pixel dimensions of a video frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameGeometry {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl FrameGeometry {
    /// Create a new frame geometry.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width/height aspect ratio.
    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    fn validate(&self) -> Result<(), GeometryError> {
        if self.width == 0 || self.height == 0 {
            return Err(GeometryError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

impl std::fmt::Display for FrameGeometry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A crop window in pixel coordinates of a resized frame.
///
/// The window is exactly target-sized along the cropped axis and spans the
/// full frame along the other. Coordinates are top-left inclusive,
/// bottom-right exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropWindow {
    pub x1: u32,
    pub y1: u32,
    pub x2: u32,
    pub y2: u32,
}

impl CropWindow {
    /// Width of the window in pixels.
    pub fn width(&self) -> u32 {
        self.x2 - self.x1
    }

    /// Height of the window in pixels.
    pub fn height(&self) -> u32 {
        self.y2 - self.y1
    }
}

/// A resolved reframing plan: resize target plus centered crop window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropPlan {
    /// Aspect-preserving resize target; one axis matches the output exactly.
    pub resize_to: FrameGeometry,
    /// Centered crop window within the resized frame.
    pub crop: CropWindow,
}

impl CropPlan {
    /// Resolve the resize-and-crop plan that reframes `source` into exactly
    /// `target` dimensions without distortion.
    ///
    /// When the source is relatively wider than the target, the resize
    /// matches the target height and the crop removes the horizontal
    /// excess; otherwise (including an exact aspect match, which yields a
    /// zero-delta crop) the resize matches the target width and the crop
    /// removes the vertical excess. Odd crop remainders go to the low side.
    pub fn resolve(source: FrameGeometry, target: FrameGeometry) -> Result<Self, GeometryError> {
        source.validate()?;
        target.validate()?;

        let source_ar = source.aspect_ratio();
        let target_ar = target.aspect_ratio();

        if source_ar > target_ar {
            // Source relatively wider: match height, crop horizontally.
            let resized_width = (source_ar * target.height as f64).round() as u32;
            let resize_to = FrameGeometry::new(resized_width, target.height);
            let x1 = (resized_width - target.width) / 2;
            Ok(Self {
                resize_to,
                crop: CropWindow {
                    x1,
                    y1: 0,
                    x2: x1 + target.width,
                    y2: target.height,
                },
            })
        } else {
            // Source relatively taller, or exact match: match width, crop
            // vertically.
            let resized_height = (target.width as f64 / source_ar).round() as u32;
            let resize_to = FrameGeometry::new(target.width, resized_height);
            let y1 = (resized_height - target.height) / 2;
            Ok(Self {
                resize_to,
                crop: CropWindow {
                    x1: 0,
                    y1,
                    x2: target.width,
                    y2: y1 + target.height,
                },
            })
        }
    }

    /// Dimensions of the cropped output.
    pub fn output(&self) -> FrameGeometry {
        FrameGeometry::new(self.crop.width(), self.crop.height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PORTRAIT: FrameGeometry = FrameGeometry {
        width: 1080,
        height: 1920,
    };

    #[test]
    fn test_wide_source_crops_horizontally() {
        let source = FrameGeometry::new(1920, 1080);
        let plan = CropPlan::resolve(source, PORTRAIT).unwrap();

        // Resize matches target height, width preserves the source aspect.
        assert_eq!(plan.resize_to.height, 1920);
        assert_eq!(plan.resize_to.width, 3413); // round(16/9 * 1920)
        assert_eq!(plan.output(), PORTRAIT);
        assert_eq!(plan.crop.y1, 0);
        assert_eq!(plan.crop.y2, 1920);
    }

    #[test]
    fn test_tall_source_crops_vertically() {
        let source = FrameGeometry::new(1080, 2400);
        let plan = CropPlan::resolve(source, PORTRAIT).unwrap();

        assert_eq!(plan.resize_to.width, 1080);
        assert_eq!(plan.resize_to.height, 2400);
        assert_eq!(plan.crop.y1, 240);
        assert_eq!(plan.crop.y2, 2160);
        assert_eq!(plan.output(), PORTRAIT);
    }

    #[test]
    fn test_exact_aspect_match_takes_vertical_branch() {
        let source = FrameGeometry::new(2160, 3840); // same 9:16 as target
        let plan = CropPlan::resolve(source, PORTRAIT).unwrap();

        // Tie-break: resize to target width, zero-delta vertical crop.
        assert_eq!(plan.resize_to, PORTRAIT);
        assert_eq!(plan.crop.x1, 0);
        assert_eq!(plan.crop.y1, 0);
        assert_eq!(plan.output(), PORTRAIT);
    }

    #[test]
    fn test_crop_is_centered() {
        let source = FrameGeometry::new(1920, 1080);
        let plan = CropPlan::resolve(source, PORTRAIT).unwrap();

        let left = plan.crop.x1;
        let right = plan.resize_to.width - plan.crop.x2;
        // Symmetric within 1px; odd remainder goes to the low side.
        assert!(left.abs_diff(right) <= 1);
        assert!(left <= right);
    }

    #[test]
    fn test_resize_preserves_aspect_ratio() {
        let source = FrameGeometry::new(1280, 720);
        let plan = CropPlan::resolve(source, PORTRAIT).unwrap();

        let source_ar = source.aspect_ratio();
        let resized_ar = plan.resize_to.aspect_ratio();
        // Within rounding tolerance of one pixel on the derived axis.
        assert!((source_ar - resized_ar).abs() < 1.0 / PORTRAIT.height as f64);
    }

    #[test]
    fn test_landscape_target() {
        let source = FrameGeometry::new(1080, 1920);
        let target = FrameGeometry::new(1920, 1080);
        let plan = CropPlan::resolve(source, target).unwrap();

        // Tall source against wide target: vertical branch.
        assert_eq!(plan.resize_to.width, 1920);
        assert_eq!(plan.output(), target);
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let bad = FrameGeometry::new(0, 1080);
        assert_eq!(
            CropPlan::resolve(bad, PORTRAIT),
            Err(GeometryError::InvalidDimensions {
                width: 0,
                height: 1080
            })
        );
        assert!(CropPlan::resolve(PORTRAIT, FrameGeometry::new(1080, 0)).is_err());
    }
}
