//! Batch report for a segment-cutting run.

use storyreel_media::{MediaError, SegmentOutcome, SegmentResult};
use storyreel_models::TimeRange;

/// Outcomes of one segment-cutting run, in planner order.
///
/// Under collect-all-then-report, a batch may be partially failed: every
/// job ran, and each failure stays attached to the range that produced it.
#[derive(Debug)]
pub struct SegmentBatch {
    outcomes: Vec<SegmentOutcome>,
}

impl SegmentBatch {
    /// Wrap executor outcomes (already in planner order).
    pub fn new(outcomes: Vec<SegmentOutcome>) -> Self {
        Self { outcomes }
    }

    /// All outcomes in planner order.
    pub fn outcomes(&self) -> &[SegmentOutcome] {
        &self.outcomes
    }

    /// Successfully rendered segments, in planner order.
    pub fn succeeded(&self) -> impl Iterator<Item = &SegmentResult> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().ok())
    }

    /// Failed ranges with their errors, in planner order.
    pub fn failed(&self) -> impl Iterator<Item = (TimeRange, &MediaError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o.range, e)))
    }

    /// Number of successful segments.
    pub fn success_count(&self) -> usize {
        self.succeeded().count()
    }

    /// Number of failed segments.
    pub fn failure_count(&self) -> usize {
        self.outcomes.len() - self.success_count()
    }

    /// True when every job in the batch succeeded.
    pub fn is_complete(&self) -> bool {
        self.failure_count() == 0
    }

    /// One-line summary for logs: successes, failures, failed ranges.
    pub fn summary(&self) -> String {
        if self.is_complete() {
            format!("{}/{} segments rendered", self.success_count(), self.outcomes.len())
        } else {
            let failed_ranges: Vec<String> =
                self.failed().map(|(range, _)| range.to_string()).collect();
            format!(
                "{}/{} segments rendered, {} failed: {}",
                self.success_count(),
                self.outcomes.len(),
                self.failure_count(),
                failed_ranges.join(", ")
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn ok_outcome(start: f64, end: f64) -> SegmentOutcome {
        let range = TimeRange::new(start, end);
        SegmentOutcome {
            range,
            result: Ok(SegmentResult {
                output: PathBuf::from(format!("segment_{}_{}.mp4", start as u64, end as u64)),
                range,
            }),
        }
    }

    fn failed_outcome(start: f64, end: f64) -> SegmentOutcome {
        SegmentOutcome {
            range: TimeRange::new(start, end),
            result: Err(MediaError::ffmpeg_failed("decode error", None, Some(1))),
        }
    }

    #[test]
    fn test_partial_failure_accounting() {
        let batch = SegmentBatch::new(vec![
            ok_outcome(0.0, 45.0),
            ok_outcome(45.0, 90.0),
            failed_outcome(90.0, 135.0),
            ok_outcome(135.0, 180.0),
            ok_outcome(180.0, 200.0),
        ]);

        assert_eq!(batch.success_count(), 4);
        assert_eq!(batch.failure_count(), 1);
        assert!(!batch.is_complete());

        let failed: Vec<_> = batch.failed().collect();
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].0, TimeRange::new(90.0, 135.0));
    }

    #[test]
    fn test_outcomes_keep_planner_order() {
        let batch = SegmentBatch::new(vec![
            ok_outcome(0.0, 45.0),
            failed_outcome(45.0, 90.0),
            ok_outcome(90.0, 130.0),
        ]);

        let starts: Vec<f64> = batch.outcomes().iter().map(|o| o.range.start).collect();
        assert_eq!(starts, vec![0.0, 45.0, 90.0]);

        let ok_starts: Vec<f64> = batch.succeeded().map(|r| r.range.start).collect();
        assert_eq!(ok_starts, vec![0.0, 90.0]);
    }

    #[test]
    fn test_summary_lists_failed_ranges() {
        let batch = SegmentBatch::new(vec![ok_outcome(0.0, 45.0), failed_outcome(45.0, 90.0)]);
        let summary = batch.summary();
        assert!(summary.contains("1/2"));
        assert!(summary.contains("45.00s-90.00s"));

        let complete = SegmentBatch::new(vec![ok_outcome(0.0, 45.0)]);
        assert_eq!(complete.summary(), "1/1 segments rendered");
    }
}
