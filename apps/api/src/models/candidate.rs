use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::evaluation::EvaluationRow;

/// A stored candidate. Immutable once created except by re-seeding.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CandidateRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub experience_years: i32,
    pub skills: Vec<String>,
    pub position: String,
    pub created_at: DateTime<Utc>,
}

/// Candidate fields supplied at creation time (id and timestamp are assigned by the store).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCandidate {
    pub name: String,
    pub email: String,
    pub experience_years: i32,
    pub skills: Vec<String>,
    pub position: String,
}

/// A candidate joined with its evaluation, if one exists.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateWithEvaluation {
    #[serde(flatten)]
    pub candidate: CandidateRow,
    pub evaluation: Option<EvaluationRow>,
}
