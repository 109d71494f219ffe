//! Segment-cutting stage: probe, plan, execute, report.

use std::path::Path;
use tracing::{info, warn};

use storyreel_media::{execute_segments, get_duration, SegmentJob};
use storyreel_models::plan_segments;

use crate::config::PipelineConfig;
use crate::error::{PipelineError, PipelineResult};
use crate::report::SegmentBatch;

/// Cut a source video into reframed segments.
///
/// Plans contiguous ranges over the probed duration, renders them all in
/// parallel, and returns every outcome in planner order. A failing
/// segment does not abort the batch; the report carries the failure with
/// its range.
pub async fn cut_into_segments(
    source: impl AsRef<Path>,
    config: &PipelineConfig,
) -> PipelineResult<SegmentBatch> {
    let source = source.as_ref();

    if !source.exists() {
        return Err(PipelineError::FileNotFound(source.to_path_buf()));
    }

    let total_duration = get_duration(source).await?;
    let ranges = plan_segments(total_duration, config.segment_length)?;
    info!(
        "Cutting {} into {} segments of up to {:.0}s",
        source.display(),
        ranges.len(),
        config.segment_length
    );

    let jobs: Vec<SegmentJob> = ranges
        .into_iter()
        .map(|range| SegmentJob::for_range(source, range, config.target, &config.segments_dir))
        .collect();

    let outcomes = execute_segments(jobs, &config.segment_encoding).await;
    let batch = SegmentBatch::new(outcomes);

    for (range, error) in batch.failed() {
        warn!("Segment {} failed: {}", range, error);
    }
    info!("Segment batch finished: {}", batch.summary());

    Ok(batch)
}
