//! Axum route handler for the Rankings API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::rankings::{list_rankings, Ranking};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RankingsQuery {
    pub limit: Option<i64>,
}

/// GET /api/v1/rankings?limit=N
///
/// Leaderboard ordered by rank ascending; empty when no evaluations exist.
pub async fn handle_list_rankings(
    State(state): State<AppState>,
    Query(query): Query<RankingsQuery>,
) -> Result<Json<Vec<Ranking>>, AppError> {
    if let Some(limit) = query.limit {
        if limit < 1 {
            return Err(AppError::Validation("limit must be at least 1".to_string()));
        }
    }

    let rankings = list_rankings(&state.db, query.limit).await?;
    Ok(Json(rankings))
}
