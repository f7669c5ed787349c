//! Candidate store access: listing, lookup, bulk insert, and the dashboard
//! counts. Evaluations are written by the aggregator; this module only reads
//! them for the joined views.

pub mod handlers;
pub mod seed;

use std::collections::HashMap;

use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::candidate::{CandidateRow, CandidateWithEvaluation, NewCandidate};
use crate::models::evaluation::EvaluationRow;

/// All candidates, newest first.
pub async fn list_candidates(db: &PgPool) -> Result<Vec<CandidateRow>, sqlx::Error> {
    sqlx::query_as::<_, CandidateRow>("SELECT * FROM candidates ORDER BY created_at DESC")
        .fetch_all(db)
        .await
}

pub async fn get_candidate(db: &PgPool, id: Uuid) -> Result<Option<CandidateRow>, sqlx::Error> {
    sqlx::query_as::<_, CandidateRow>("SELECT * FROM candidates WHERE id = $1")
        .bind(id)
        .fetch_optional(db)
        .await
}

/// All candidates with their evaluation attached where one exists,
/// newest candidate first.
pub async fn list_candidates_with_evaluation(
    db: &PgPool,
) -> Result<Vec<CandidateWithEvaluation>, sqlx::Error> {
    let candidates = list_candidates(db).await?;
    let evaluations = sqlx::query_as::<_, EvaluationRow>("SELECT * FROM evaluations")
        .fetch_all(db)
        .await?;

    let mut by_candidate: HashMap<Uuid, EvaluationRow> = evaluations
        .into_iter()
        .map(|e| (e.candidate_id, e))
        .collect();

    Ok(candidates
        .into_iter()
        .map(|candidate| {
            let evaluation = by_candidate.remove(&candidate.id);
            CandidateWithEvaluation {
                candidate,
                evaluation,
            }
        })
        .collect())
}

/// Candidates with no evaluation row yet, oldest first — the input order for
/// a batch run.
pub async fn unevaluated_candidates(db: &PgPool) -> Result<Vec<CandidateRow>, sqlx::Error> {
    sqlx::query_as::<_, CandidateRow>(
        r#"
        SELECT c.*
        FROM candidates c
        LEFT JOIN evaluations e ON e.candidate_id = c.id
        WHERE e.id IS NULL
        ORDER BY c.created_at ASC
        "#,
    )
    .fetch_all(db)
    .await
}

/// Bulk-inserts candidates in one transaction and returns the stored rows.
pub async fn insert_candidates(
    db: &PgPool,
    candidates: &[NewCandidate],
) -> Result<Vec<CandidateRow>, sqlx::Error> {
    let mut tx = db.begin().await?;
    let mut rows = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        let row = sqlx::query_as::<_, CandidateRow>(
            r#"
            INSERT INTO candidates (name, email, experience_years, skills, position)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&candidate.name)
        .bind(&candidate.email)
        .bind(candidate.experience_years)
        .bind(&candidate.skills)
        .bind(&candidate.position)
        .fetch_one(&mut *tx)
        .await?;
        rows.push(row);
    }

    tx.commit().await?;
    Ok(rows)
}

/// The dashboard panel counts.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateStats {
    pub total: i64,
    pub evaluated: i64,
    pub pending: i64,
}

pub async fn candidate_stats(db: &PgPool) -> Result<CandidateStats, sqlx::Error> {
    let (total, evaluated): (i64, i64) = sqlx::query_as(
        r#"
        SELECT count(c.id), count(e.id)
        FROM candidates c
        LEFT JOIN evaluations e ON e.candidate_id = c.id
        "#,
    )
    .fetch_one(db)
    .await?;

    Ok(CandidateStats {
        total,
        evaluated,
        pending: total - evaluated,
    })
}
