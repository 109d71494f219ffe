#![deny(unreachable_patterns)]
//! FFmpeg CLI wrapper for the storyreel pipeline.
//!
//! This crate provides:
//! - Type-safe FFmpeg command building
//! - FFprobe introspection (duration, frame geometry)
//! - Filter construction for center-crop reframing and drawtext captions
//! - The segment worker and the order-preserving parallel executor
//! - The caption overlay compositor

pub mod captions;
pub mod command;
pub mod error;
pub mod executor;
pub mod filters;
pub mod probe;
pub mod segment;

pub use captions::{captioned_output_path, overlay_captions};
pub use command::{check_ffmpeg, check_ffprobe, FfmpegCommand, FfmpegRunner};
pub use error::{MediaError, MediaResult};
pub use executor::{available_parallelism, execute_segments, run_all_ordered};
pub use filters::{caption_filter_chain, drawtext_filter, reframe_filter};
pub use probe::{get_duration, probe_video, VideoInfo};
pub use segment::{render_segment, segment_filename, SegmentJob, SegmentOutcome, SegmentResult};
