//! Rankings — the derived leaderboard view: candidates joined with their
//! evaluation, ordered by overall score descending.
//!
//! Rank is a strict 1-based position. Tie-break: equal overall scores are
//! ordered by earlier `evaluated_at`, then candidate id, so ties receive
//! distinct adjacent ranks rather than sharing one.

pub mod handlers;

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

/// One leaderboard row before rank assignment.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct RankingEntry {
    /// Candidate id.
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub position: String,
    pub experience_years: i32,
    pub skills: Vec<String>,
    pub crisis_management: i32,
    pub sustainability: i32,
    pub team_motivation: i32,
    pub overall_score: f64,
    pub evaluated_at: DateTime<Utc>,
}

/// A leaderboard row with its assigned rank.
#[derive(Debug, Clone, Serialize)]
pub struct Ranking {
    pub rank: u32,
    #[serde(flatten)]
    pub entry: RankingEntry,
}

/// Evaluated candidates ordered by rank ascending. Empty when nothing has
/// been evaluated yet. `limit` caps the result; `None` returns all.
pub async fn list_rankings(
    db: &PgPool,
    limit: Option<i64>,
) -> Result<Vec<Ranking>, sqlx::Error> {
    let entries = sqlx::query_as::<_, RankingEntry>(
        r#"
        SELECT c.id, c.name, c.email, c.position, c.experience_years, c.skills,
               e.crisis_management, e.sustainability, e.team_motivation,
               e.overall_score, e.evaluated_at
        FROM candidates c
        JOIN evaluations e ON e.candidate_id = c.id
        ORDER BY e.overall_score DESC, e.evaluated_at ASC, c.id ASC
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(db)
    .await?;

    Ok(assign_ranks(entries))
}

/// Assigns 1-based ranks in the order given (callers must pre-sort by score
/// descending with the documented tie-break).
pub fn assign_ranks(entries: Vec<RankingEntry>) -> Vec<Ranking> {
    entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| Ranking {
            rank: i as u32 + 1,
            entry,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_entry(name: &str, overall: f64) -> RankingEntry {
        RankingEntry {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            position: "Software Engineer".to_string(),
            experience_years: 5,
            skills: vec!["Rust".to_string()],
            crisis_management: overall as i32,
            sustainability: overall as i32,
            team_motivation: overall as i32,
            overall_score: overall,
            evaluated_at: Utc::now(),
        }
    }

    #[test]
    fn test_assign_ranks_strict_sequence_with_ties() {
        // Pre-sorted by score descending: the two 90s keep distinct,
        // adjacent ranks under the documented tie-break.
        let entries = vec![
            make_entry("first", 90.0),
            make_entry("second", 90.0),
            make_entry("third", 55.0),
            make_entry("fourth", 30.0),
        ];
        let rankings = assign_ranks(entries);
        let ranks: Vec<u32> = rankings.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4]);
        assert_eq!(rankings[2].entry.name, "third");
    }

    #[test]
    fn test_assign_ranks_empty() {
        assert!(assign_ranks(vec![]).is_empty());
    }

    #[test]
    fn test_assign_ranks_single_entry() {
        let rankings = assign_ranks(vec![make_entry("only", 77.0)]);
        assert_eq!(rankings.len(), 1);
        assert_eq!(rankings[0].rank, 1);
    }
}
