//! Segment time ranges and the segment planner.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from segment planning.
#[derive(Debug, Error, PartialEq)]
pub enum PlanError {
    #[error("total duration must be positive, got {0}")]
    InvalidDuration(f64),

    #[error("chunk length must be positive, got {0}")]
    InvalidChunkLength(f64),
}

/// A half-open time range `[start, end)` in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeRange {
    /// Start time in seconds (inclusive)
    pub start: f64,
    /// End time in seconds (exclusive)
    pub end: f64,
}

impl TimeRange {
    /// Create a new time range.
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Length of the range in seconds.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}s-{:.2}s", self.start, self.end)
    }
}

/// Plan non-overlapping segment ranges covering `[0, total_duration)`.
///
/// Steps by `chunk_length` from zero; every range is exactly
/// `chunk_length` long except possibly the last, which is clamped to the
/// total duration. Consecutive ranges share their boundary exactly, so the
/// plan is contiguous and gapless.
pub fn plan_segments(total_duration: f64, chunk_length: f64) -> Result<Vec<TimeRange>, PlanError> {
    if !(total_duration > 0.0) {
        return Err(PlanError::InvalidDuration(total_duration));
    }
    if !(chunk_length > 0.0) {
        return Err(PlanError::InvalidChunkLength(chunk_length));
    }

    let count = (total_duration / chunk_length).ceil() as usize;
    let mut ranges = Vec::with_capacity(count);

    // Boundaries are computed multiplicatively so range[i].end and
    // range[i+1].start are the same f64 value, not an accumulated sum.
    for i in 0..count {
        let start = i as f64 * chunk_length;
        let end = ((i + 1) as f64 * chunk_length).min(total_duration);
        ranges.push(TimeRange::new(start, end));
    }

    Ok(ranges)
}
