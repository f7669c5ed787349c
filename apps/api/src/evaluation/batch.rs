//! Batch orchestration: sequentially evaluates a set of candidates with
//! fixed pacing between them, tallying successes and failures.
//!
//! This is deliberately not a job system. A batch runs to completion within
//! one invocation, holds no durable in-flight state, and never retries: a
//! failed candidate simply keeps no evaluation row and stays eligible for
//! the next batch.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::candidate::CandidateRow;
use crate::models::evaluation::EvaluationRow;

/// The orchestrator's view of evaluation. `EvaluationService` is the
/// production implementation; tests substitute a stub.
#[async_trait]
pub trait CandidateEvaluator: Send + Sync {
    async fn evaluate(&self, candidate: &CandidateRow) -> Result<EvaluationRow, AppError>;
}

/// Pacing policy between candidates. The fixed-delay implementation is a
/// crude throttle for external rate limits; the trait exists so it can be
/// swapped for an adaptive limiter (or a no-op under test).
#[async_trait]
pub trait Pacer: Send + Sync {
    async fn wait(&self);
}

/// Waits a fixed duration after each candidate.
pub struct FixedDelayPacer {
    delay: Duration,
}

impl FixedDelayPacer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl Pacer for FixedDelayPacer {
    async fn wait(&self) {
        tokio::time::sleep(self.delay).await;
    }
}

/// Outcome counts for one batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub success: u32,
    pub failed: u32,
}

/// Evaluates each candidate in order, strictly sequentially, waiting on the
/// pacer after every candidate. A failure is counted and logged but never
/// aborts the rest of the batch.
pub async fn run_batch(
    candidates: &[CandidateRow],
    evaluator: &dyn CandidateEvaluator,
    pacer: &dyn Pacer,
) -> BatchSummary {
    let mut success = 0;
    let mut failed = 0;

    for candidate in candidates {
        match evaluator.evaluate(candidate).await {
            Ok(_) => success += 1,
            Err(e) => {
                warn!("Evaluation failed for {}: {e}", candidate.name);
                failed += 1;
            }
        }
        pacer.wait().await;
    }

    info!("Batch complete: {success} succeeded, {failed} failed");
    BatchSummary { success, failed }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::sync::atomic::{AtomicU32, Ordering};
    use uuid::Uuid;

    fn make_candidates(count: usize) -> Vec<CandidateRow> {
        (0..count)
            .map(|i| CandidateRow {
                id: Uuid::new_v4(),
                name: format!("Candidate {i}"),
                email: format!("candidate{i}@example.com"),
                experience_years: 5,
                skills: vec!["Rust".to_string()],
                position: "Software Engineer".to_string(),
                created_at: Utc::now(),
            })
            .collect()
    }

    fn make_evaluation(candidate_id: Uuid) -> EvaluationRow {
        EvaluationRow {
            id: Uuid::new_v4(),
            candidate_id,
            crisis_management: 80,
            sustainability: 60,
            team_motivation: 100,
            overall_score: 80.0,
            evaluation_notes: None,
            evaluated_at: Utc::now(),
        }
    }

    /// Succeeds except on the call positions listed (1-based).
    struct StubEvaluator {
        calls: AtomicU32,
        fail_on: Vec<u32>,
    }

    impl StubEvaluator {
        fn new(fail_on: Vec<u32>) -> Self {
            Self {
                calls: AtomicU32::new(0),
                fail_on,
            }
        }
    }

    #[async_trait]
    impl CandidateEvaluator for StubEvaluator {
        async fn evaluate(&self, candidate: &CandidateRow) -> Result<EvaluationRow, AppError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            if self.fail_on.contains(&call) {
                Err(AppError::Scoring("gateway unavailable".to_string()))
            } else {
                Ok(make_evaluation(candidate.id))
            }
        }
    }

    /// Counts how many times the orchestrator paced.
    struct CountingPacer {
        waits: AtomicU32,
    }

    impl CountingPacer {
        fn new() -> Self {
            Self {
                waits: AtomicU32::new(0),
            }
        }
    }

    #[async_trait]
    impl Pacer for CountingPacer {
        async fn wait(&self) {
            self.waits.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[tokio::test]
    async fn test_batch_counts_failure_and_continues() {
        let candidates = make_candidates(5);
        let evaluator = StubEvaluator::new(vec![3]);
        let pacer = CountingPacer::new();

        let summary = run_batch(&candidates, &evaluator, &pacer).await;

        assert_eq!(summary, BatchSummary { success: 4, failed: 1 });
        // All five were attempted, and the pacer ran after each one.
        assert_eq!(evaluator.calls.load(Ordering::SeqCst), 5);
        assert_eq!(pacer.waits.load(Ordering::SeqCst), 5);
    }

    #[tokio::test]
    async fn test_batch_all_succeed() {
        let candidates = make_candidates(3);
        let evaluator = StubEvaluator::new(vec![]);
        let pacer = CountingPacer::new();

        let summary = run_batch(&candidates, &evaluator, &pacer).await;
        assert_eq!(summary, BatchSummary { success: 3, failed: 0 });
    }

    #[tokio::test]
    async fn test_batch_all_fail() {
        let candidates = make_candidates(2);
        let evaluator = StubEvaluator::new(vec![1, 2]);
        let pacer = CountingPacer::new();

        let summary = run_batch(&candidates, &evaluator, &pacer).await;
        assert_eq!(summary, BatchSummary { success: 0, failed: 2 });
    }

    #[tokio::test]
    async fn test_empty_batch() {
        let evaluator = StubEvaluator::new(vec![]);
        let pacer = CountingPacer::new();

        let summary = run_batch(&[], &evaluator, &pacer).await;
        assert_eq!(summary, BatchSummary { success: 0, failed: 0 });
        assert_eq!(pacer.waits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fixed_delay_pacer_sleeps_for_configured_delay() {
        let pacer = FixedDelayPacer::new(Duration::from_millis(1000));
        let before = tokio::time::Instant::now();
        pacer.wait().await;
        assert!(before.elapsed() >= Duration::from_millis(1000));
    }
}
