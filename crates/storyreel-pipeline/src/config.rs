//! Pipeline configuration.
//!
//! All paths and parameters are carried explicitly on the config object
//! and passed into each stage; there are no process-wide mutable defaults.

use std::path::PathBuf;

use storyreel_models::{CaptionStyle, EncodingConfig, FrameGeometry};

/// Default segment length in seconds.
pub const DEFAULT_SEGMENT_LENGTH: f64 = 45.0;
/// Default target frame (9:16 portrait).
pub const DEFAULT_TARGET: FrameGeometry = FrameGeometry {
    width: 1080,
    height: 1920,
};

/// Pipeline configuration.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Nominal segment length in seconds (the last segment may be shorter)
    pub segment_length: f64,
    /// Output frame dimensions for reframed segments
    pub target: FrameGeometry,
    /// Directory for rendered segment files
    pub segments_dir: PathBuf,
    /// Directory for captioned final files
    pub output_dir: PathBuf,
    /// Encoding for the segment-cutting stage
    pub segment_encoding: EncodingConfig,
    /// Encoding for the caption-overlay stage (may differ from segments)
    pub final_encoding: EncodingConfig,
    /// Caption overlay styling
    pub caption_style: CaptionStyle,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            segment_length: DEFAULT_SEGMENT_LENGTH,
            target: DEFAULT_TARGET,
            segments_dir: PathBuf::from("segments"),
            output_dir: PathBuf::from("final"),
            segment_encoding: EncodingConfig::default(),
            final_encoding: EncodingConfig::default(),
            caption_style: CaptionStyle::default(),
        }
    }
}

impl PipelineConfig {
    /// Create config from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            segment_length: std::env::var("STORYREEL_SEGMENT_LENGTH")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.segment_length),
            target: FrameGeometry::new(
                std::env::var("STORYREEL_TARGET_WIDTH")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(defaults.target.width),
                std::env::var("STORYREEL_TARGET_HEIGHT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(defaults.target.height),
            ),
            segments_dir: std::env::var("STORYREEL_SEGMENTS_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.segments_dir),
            output_dir: std::env::var("STORYREEL_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
            segment_encoding: defaults.segment_encoding,
            final_encoding: defaults.final_encoding,
            caption_style: defaults.caption_style,
        }
    }

    /// Returns a new config with a different segment length.
    pub fn with_segment_length(mut self, seconds: f64) -> Self {
        self.segment_length = seconds;
        self
    }

    /// Returns a new config with a different target geometry.
    pub fn with_target(mut self, target: FrameGeometry) -> Self {
        self.target = target;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::default();
        assert_eq!(config.segment_length, 45.0);
        assert_eq!(config.target, FrameGeometry::new(1080, 1920));
        assert_eq!(config.caption_style.font_size, 70);
    }

    #[test]
    fn test_builders() {
        let config = PipelineConfig::default()
            .with_segment_length(60.0)
            .with_target(FrameGeometry::new(720, 1280));
        assert_eq!(config.segment_length, 60.0);
        assert_eq!(config.target.width, 720);
    }
}
