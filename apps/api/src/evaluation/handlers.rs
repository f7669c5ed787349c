//! Axum route handlers for the Evaluation API.

use std::time::Duration;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::candidates::{get_candidate, unevaluated_candidates};
use crate::errors::AppError;
use crate::evaluation::aggregator::EvaluationService;
use crate::evaluation::batch::{run_batch, FixedDelayPacer};
use crate::models::evaluation::EvaluationRow;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

/// The scores stored for one candidate, as returned by the evaluate endpoint.
#[derive(Debug, Serialize)]
pub struct EvaluationResult {
    pub candidate_id: Uuid,
    pub crisis_management: i32,
    pub sustainability: i32,
    pub team_motivation: i32,
    pub overall_score: f64,
}

impl From<EvaluationRow> for EvaluationResult {
    fn from(row: EvaluationRow) -> Self {
        Self {
            candidate_id: row.candidate_id,
            crisis_management: row.crisis_management,
            sustainability: row.sustainability,
            team_motivation: row.team_motivation,
            overall_score: row.overall_score,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EvaluateResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluation: Option<EvaluationResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BatchResponse {
    pub attempted: usize,
    pub success: u32,
    pub failed: u32,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/candidates/:id/evaluate
///
/// Runs the three criterion scores for one candidate and upserts the
/// evaluation. Scoring-boundary errors come back as `success: false` with a
/// message; persistence errors propagate as 500s.
pub async fn handle_evaluate_candidate(
    State(state): State<AppState>,
    Path(candidate_id): Path<Uuid>,
) -> Result<Json<EvaluateResponse>, AppError> {
    let candidate = get_candidate(&state.db, candidate_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Candidate {candidate_id} not found")))?;

    let service = EvaluationService::new(state.db.clone(), state.scorer.clone());

    match service.evaluate(&candidate).await {
        Ok(row) => Ok(Json(EvaluateResponse {
            success: true,
            evaluation: Some(row.into()),
            error: None,
        })),
        Err(e @ AppError::Database(_)) => Err(e),
        Err(e) => Ok(Json(EvaluateResponse {
            success: false,
            evaluation: None,
            error: Some(e.to_string()),
        })),
    }
}

/// POST /api/v1/evaluations/batch
///
/// Evaluates every candidate that has no evaluation yet, sequentially with
/// the configured fixed delay between candidates, and returns the tallies.
/// Nothing here prevents overlapping batches; callers gate that.
pub async fn handle_batch_evaluate(
    State(state): State<AppState>,
) -> Result<Json<BatchResponse>, AppError> {
    let pending = unevaluated_candidates(&state.db).await?;
    if pending.is_empty() {
        return Ok(Json(BatchResponse {
            attempted: 0,
            success: 0,
            failed: 0,
        }));
    }

    info!("Starting batch evaluation of {} candidates", pending.len());

    let service = EvaluationService::new(state.db.clone(), state.scorer.clone());
    let pacer = FixedDelayPacer::new(Duration::from_millis(state.config.batch_delay_ms));

    let summary = run_batch(&pending, &service, &pacer).await;

    Ok(Json(BatchResponse {
        attempted: pending.len(),
        success: summary.success,
        failed: summary.failed,
    }))
}
