//! Per-candidate evaluation: runs the three criterion scores and upserts a
//! single evaluation row keyed by candidate id.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tracing::info;

use crate::errors::AppError;
use crate::evaluation::batch::CandidateEvaluator;
use crate::evaluation::scorer::{Criterion, CriterionScorer};
use crate::models::candidate::CandidateRow;
use crate::models::evaluation::EvaluationRow;

/// Evaluates candidates against the scorer and persists the result.
#[derive(Clone)]
pub struct EvaluationService {
    db: PgPool,
    scorer: Arc<dyn CriterionScorer>,
}

impl EvaluationService {
    pub fn new(db: PgPool, scorer: Arc<dyn CriterionScorer>) -> Self {
        Self { db, scorer }
    }

    /// Scores one candidate on all three criteria (concurrently — the calls
    /// are independent) and upserts the evaluation row. Re-evaluating a
    /// candidate overwrites its previous evaluation.
    pub async fn evaluate(&self, candidate: &CandidateRow) -> Result<EvaluationRow, AppError> {
        info!(
            "Evaluating candidate {} ({})",
            candidate.name, candidate.position
        );

        let (crisis, sustainability, team) = tokio::join!(
            self.scorer.score(candidate, Criterion::CrisisManagement),
            self.scorer.score(candidate, Criterion::Sustainability),
            self.scorer.score(candidate, Criterion::TeamMotivation),
        );
        let crisis = crisis?;
        let sustainability = sustainability?;
        let team = team?;

        let overall = overall_score(crisis, sustainability, team);
        let notes = format!("Evaluated using AI on {}", Utc::now().to_rfc3339());

        let row = sqlx::query_as::<_, EvaluationRow>(
            r#"
            INSERT INTO evaluations
                (candidate_id, crisis_management, sustainability, team_motivation,
                 overall_score, evaluation_notes)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (candidate_id) DO UPDATE SET
                crisis_management = EXCLUDED.crisis_management,
                sustainability = EXCLUDED.sustainability,
                team_motivation = EXCLUDED.team_motivation,
                overall_score = EXCLUDED.overall_score,
                evaluation_notes = EXCLUDED.evaluation_notes,
                evaluated_at = now()
            RETURNING *
            "#,
        )
        .bind(candidate.id)
        .bind(crisis)
        .bind(sustainability)
        .bind(team)
        .bind(overall)
        .bind(&notes)
        .fetch_one(&self.db)
        .await?;

        info!(
            "Stored evaluation for {}: crisis={crisis} sustainability={sustainability} \
             team={team} overall={overall:.1}",
            candidate.name
        );

        Ok(row)
    }
}

#[async_trait]
impl CandidateEvaluator for EvaluationService {
    async fn evaluate(&self, candidate: &CandidateRow) -> Result<EvaluationRow, AppError> {
        EvaluationService::evaluate(self, candidate).await
    }
}

/// Overall score: arithmetic mean of the three criterion scores, retained at
/// full precision. Rounding is a display concern.
pub fn overall_score(crisis: i32, sustainability: i32, team: i32) -> f64 {
    f64::from(crisis + sustainability + team) / 3.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overall_score_is_exact_mean() {
        assert_eq!(overall_score(80, 60, 100), 80.0);
    }

    #[test]
    fn test_overall_score_retains_precision() {
        let overall = overall_score(70, 70, 71);
        assert!((overall - 211.0 / 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_overall_score_bounds() {
        assert_eq!(overall_score(0, 0, 0), 0.0);
        assert_eq!(overall_score(100, 100, 100), 100.0);
    }
}
