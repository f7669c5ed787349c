use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::evaluation::scorer::CriterionScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Pluggable criterion scorer. Default: GatewayScorer over the AI gateway.
    pub scorer: Arc<dyn CriterionScorer>,
    pub config: Config,
}
