use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A stored evaluation. At most one per candidate; re-evaluation overwrites
/// the existing row (upsert on `candidate_id`).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EvaluationRow {
    pub id: Uuid,
    pub candidate_id: Uuid,
    pub crisis_management: i32,
    pub sustainability: i32,
    pub team_motivation: i32,
    /// Arithmetic mean of the three criterion scores, full precision.
    pub overall_score: f64,
    pub evaluation_notes: Option<String>,
    pub evaluated_at: DateTime<Utc>,
}
