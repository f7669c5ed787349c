pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::candidates::handlers as candidate_handlers;
use crate::evaluation::handlers as evaluation_handlers;
use crate::rankings::handlers as ranking_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Candidates API
        .route(
            "/api/v1/candidates",
            get(candidate_handlers::handle_list_candidates),
        )
        .route(
            "/api/v1/candidates/stats",
            get(candidate_handlers::handle_candidate_stats),
        )
        .route(
            "/api/v1/candidates/seed",
            post(candidate_handlers::handle_seed_candidates),
        )
        .route(
            "/api/v1/candidates/:id",
            get(candidate_handlers::handle_get_candidate),
        )
        // Evaluation API
        .route(
            "/api/v1/candidates/:id/evaluate",
            post(evaluation_handlers::handle_evaluate_candidate),
        )
        .route(
            "/api/v1/evaluations/batch",
            post(evaluation_handlers::handle_batch_evaluate),
        )
        // Rankings API
        .route(
            "/api/v1/rankings",
            get(ranking_handlers::handle_list_rankings),
        )
        .with_state(state)
}
