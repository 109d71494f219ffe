//! Orchestration for the storyreel pipeline.
//!
//! Two independent stages:
//! - [`cut_into_segments`]: probe, plan, and render all segments of a
//!   source video in parallel, reporting every outcome.
//! - [`caption_segment`]: load a word-timing document and composite the
//!   caption overlay onto one segment.

pub mod captioner;
pub mod config;
pub mod error;
pub mod report;
pub mod segmenter;

pub use captioner::caption_segment;
pub use config::PipelineConfig;
pub use error::{PipelineError, PipelineResult};
pub use report::SegmentBatch;
pub use segmenter::cut_into_segments;
