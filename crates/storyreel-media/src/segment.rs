//! Segment rendering: one reframed, encoded clip per planned time range.

use std::path::{Path, PathBuf};
use tracing::{debug, info};

use storyreel_models::{CropPlan, EncodingConfig, FrameGeometry, TimeRange};

use crate::command::{FfmpegCommand, FfmpegRunner};
use crate::error::{MediaError, MediaResult};
use crate::filters::reframe_filter;
use crate::probe::probe_video;

/// One segment rendering job. Immutable once created; consumed by exactly
/// one worker.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentJob {
    /// Source video path
    pub source: PathBuf,
    /// Time range to cut, half-open `[start, end)`
    pub range: TimeRange,
    /// Output frame dimensions
    pub target: FrameGeometry,
    /// Output file path
    pub output: PathBuf,
}

impl SegmentJob {
    /// Create a job whose output name is derived from the range.
    pub fn for_range(
        source: impl AsRef<Path>,
        range: TimeRange,
        target: FrameGeometry,
        output_dir: impl AsRef<Path>,
    ) -> Self {
        Self {
            source: source.as_ref().to_path_buf(),
            range,
            target,
            output: output_dir.as_ref().join(segment_filename(&range)),
        }
    }
}

/// A successfully rendered segment.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentResult {
    /// Rendered segment path
    pub output: PathBuf,
    /// The range it covers
    pub range: TimeRange,
}

/// Outcome of one segment job, success or failure, tagged with its range
/// so failures stay attributable to their input.
#[derive(Debug)]
pub struct SegmentOutcome {
    pub range: TimeRange,
    pub result: MediaResult<SegmentResult>,
}

/// Deterministic segment filename for a time range.
///
/// Start and end are embedded as whole seconds, so rerunning an identical
/// plan produces the same names and overwrites in place.
pub fn segment_filename(range: &TimeRange) -> String {
    format!(
        "segment_{}_{}.mp4",
        range.start as u64, range.end as u64
    )
}

/// Render one segment: decode only the job's time window, reframe it to
/// the target geometry, and encode to the job's output path.
///
/// Each invocation opens its own ffprobe and ffmpeg handles on the source
/// file; workers share nothing but the read-only source.
pub async fn render_segment(
    job: &SegmentJob,
    encoding: &EncodingConfig,
) -> MediaResult<SegmentResult> {
    if !job.source.exists() {
        return Err(MediaError::FileNotFound(job.source.clone()));
    }

    info!(
        "Rendering segment {} -> {}",
        job.range,
        job.output.display()
    );

    let info = probe_video(&job.source).await?;
    let plan = CropPlan::resolve(info.geometry, job.target)?;
    debug!(
        "Segment {}: {} resized to {} crop at ({},{})",
        job.range, info.geometry, plan.resize_to, plan.crop.x1, plan.crop.y1
    );

    if let Some(parent) = job.output.parent() {
        if !parent.exists() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    let cmd = FfmpegCommand::new(&job.source, &job.output)
        .seek(job.range.start)
        .duration(job.range.duration())
        .video_filter(reframe_filter(&plan))
        .encoding(encoding);

    FfmpegRunner::new().run(&cmd).await?;

    info!("Segment rendered: {}", job.output.display());
    Ok(SegmentResult {
        output: job.output.clone(),
        range: job.range,
    })
}
