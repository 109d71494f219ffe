//! Order-preserving parallel execution of segment jobs.
//!
//! Each job spawns its own FFmpeg process, so the actual decode/encode
//! work runs in isolated OS processes with no shared state; this module
//! only bounds how many are in flight and joins their results back into
//! planner order.

use std::future::Future;
use std::sync::Arc;

use futures::future::join_all;
use tokio::sync::Semaphore;
use tracing::info;

use storyreel_models::EncodingConfig;

use crate::segment::{render_segment, SegmentJob, SegmentOutcome};

/// Available CPU parallelism, with a floor of one.
pub fn available_parallelism() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Run futures with bounded concurrency, returning outputs in input order.
///
/// The join barrier is order-preserving by construction: outputs are
/// collected positionally, regardless of which future completes first.
pub async fn run_all_ordered<F>(futures: Vec<F>, limit: usize) -> Vec<F::Output>
where
    F: Future,
{
    let semaphore = Arc::new(Semaphore::new(limit.max(1)));

    let bounded = futures.into_iter().map(|fut| {
        let semaphore = Arc::clone(&semaphore);
        async move {
            // The semaphore lives for the whole join and is never closed.
            let _permit = semaphore.acquire().await.expect("semaphore closed");
            fut.await
        }
    });

    join_all(bounded).await
}

/// Execute all segment jobs in parallel, bounded by available CPU
/// parallelism, and collect every outcome in the jobs' original order.
///
/// Collect-all-then-report: a failing job never aborts its siblings. The
/// caller receives one [`SegmentOutcome`] per job and decides what a
/// partial failure means.
pub async fn execute_segments(
    jobs: Vec<SegmentJob>,
    encoding: &EncodingConfig,
) -> Vec<SegmentOutcome> {
    let limit = available_parallelism();
    info!(
        "Executing {} segment jobs ({} in parallel)",
        jobs.len(),
        limit
    );

    let futures = jobs
        .into_iter()
        .map(|job| async move {
            let result = render_segment(&job, encoding).await;
            SegmentOutcome {
                range: job.range,
                result,
            }
        })
        .collect();

    run_all_ordered(futures, limit).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[tokio::test]
    async fn test_results_preserve_input_order() {
        // Later inputs finish first; outputs must still match input order.
        let delays = [50u64, 30, 10, 40, 20];
        let futures = delays
            .iter()
            .enumerate()
            .map(|(i, &ms)| async move {
                tokio::time::sleep(Duration::from_millis(ms)).await;
                i
            })
            .collect();

        let results = run_all_ordered(futures, 5).await;
        assert_eq!(results, vec![0, 1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn test_concurrency_is_bounded() {
        let in_flight = Arc::new(AtomicUsize::new(0));
        let peak = Arc::new(AtomicUsize::new(0));

        let futures = (0..8)
            .map(|_| {
                let in_flight = Arc::clone(&in_flight);
                let peak = Arc::clone(&peak);
                async move {
                    let now = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
                    peak.fetch_max(now, Ordering::SeqCst);
                    tokio::time::sleep(Duration::from_millis(20)).await;
                    in_flight.fetch_sub(1, Ordering::SeqCst);
                }
            })
            .collect();

        run_all_ordered(futures, 2).await;
        assert!(peak.load(Ordering::SeqCst) <= 2);
    }

    #[tokio::test]
    async fn test_one_failure_does_not_abort_siblings() {
        let futures = (0..5)
            .map(|i| async move {
                tokio::time::sleep(Duration::from_millis(5)).await;
                if i == 2 {
                    Err(format!("job {i} failed"))
                } else {
                    Ok(i)
                }
            })
            .collect();

        let results = run_all_ordered(futures, 2).await;
        assert_eq!(results.len(), 5);
        assert_eq!(results.iter().filter(|r| r.is_err()).count(), 1);
        assert!(results[2].is_err());
        assert_eq!(results[4], Ok(4));
    }

    #[tokio::test]
    async fn test_zero_limit_clamped() {
        let futures: Vec<std::pin::Pin<Box<dyn Future<Output = i32>>>> =
            vec![Box::pin(async { 1 }), Box::pin(async { 2 })];
        let results = run_all_ordered(futures, 0).await;
        assert_eq!(results, vec![1, 2]);
    }
}
