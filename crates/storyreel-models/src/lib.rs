//! Shared data models for the storyreel pipeline.
//!
//! This crate provides Serde-serializable types for:
//! - Frame geometry and center-crop resolution
//! - Segment time ranges and the segment planner
//! - Word-level caption timelines and styling
//! - Encoding configuration

pub mod captions;
pub mod encoding;
pub mod geometry;
pub mod timeline;

// Re-export common types
pub use captions::{CaptionDocument, CaptionStyle, CaptionTimeline, CaptionWord, TimelineError};
pub use encoding::EncodingConfig;
pub use geometry::{CropPlan, CropWindow, FrameGeometry, GeometryError};
pub use timeline::{plan_segments, PlanError, TimeRange};
