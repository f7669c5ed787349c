//! Axum route handlers for the Candidates API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::candidates::seed::{seed_candidates, DEFAULT_SEED_COUNT};
use crate::candidates::{
    candidate_stats, get_candidate, list_candidates_with_evaluation, CandidateStats,
};
use crate::errors::AppError;
use crate::models::candidate::CandidateWithEvaluation;
use crate::models::evaluation::EvaluationRow;
use crate::state::AppState;

const MAX_SEED_COUNT: u32 = 500;

#[derive(Debug, Deserialize)]
pub struct SeedRequest {
    pub count: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct SeedResponse {
    pub created: usize,
}

/// GET /api/v1/candidates
///
/// All candidates with their evaluation attached where one exists.
pub async fn handle_list_candidates(
    State(state): State<AppState>,
) -> Result<Json<Vec<CandidateWithEvaluation>>, AppError> {
    let candidates = list_candidates_with_evaluation(&state.db).await?;
    Ok(Json(candidates))
}

/// GET /api/v1/candidates/:id
pub async fn handle_get_candidate(
    State(state): State<AppState>,
    Path(candidate_id): Path<Uuid>,
) -> Result<Json<CandidateWithEvaluation>, AppError> {
    let candidate = get_candidate(&state.db, candidate_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Candidate {candidate_id} not found")))?;

    let evaluation =
        sqlx::query_as::<_, EvaluationRow>("SELECT * FROM evaluations WHERE candidate_id = $1")
            .bind(candidate_id)
            .fetch_optional(&state.db)
            .await?;

    Ok(Json(CandidateWithEvaluation {
        candidate,
        evaluation,
    }))
}

/// GET /api/v1/candidates/stats
pub async fn handle_candidate_stats(
    State(state): State<AppState>,
) -> Result<Json<CandidateStats>, AppError> {
    let stats = candidate_stats(&state.db).await?;
    Ok(Json(stats))
}

/// POST /api/v1/candidates/seed
///
/// Generates sample candidates. Body is optional; defaults to 40.
pub async fn handle_seed_candidates(
    State(state): State<AppState>,
    request: Option<Json<SeedRequest>>,
) -> Result<Json<SeedResponse>, AppError> {
    let count = request
        .and_then(|Json(r)| r.count)
        .unwrap_or(DEFAULT_SEED_COUNT);

    if count == 0 || count > MAX_SEED_COUNT {
        return Err(AppError::Validation(format!(
            "count must be between 1 and {MAX_SEED_COUNT}"
        )));
    }

    let rows = seed_candidates(&state.db, count).await?;
    Ok(Json(SeedResponse {
        created: rows.len(),
    }))
}
