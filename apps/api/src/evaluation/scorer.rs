//! Criterion scoring — pluggable, trait-based scorer for a single competency.
//!
//! Default: `GatewayScorer`, which asks the AI gateway for a 0-100 rating and
//! falls back to an experience-based heuristic when no number can be
//! extracted from the reply. Gateway failures are absorbed here; a scoring
//! call degrades to the heuristic rather than failing the evaluation.
//!
//! `AppState` holds an `Arc<dyn CriterionScorer>`.

use async_trait::async_trait;
use rand::Rng;
use tracing::warn;

use crate::errors::AppError;
use crate::evaluation::prompts;
use crate::gateway::ScoringClient;
use crate::models::candidate::CandidateRow;

/// The three competencies every candidate is rated on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criterion {
    CrisisManagement,
    Sustainability,
    TeamMotivation,
}

impl Criterion {
    pub fn label(&self) -> &'static str {
        match self {
            Criterion::CrisisManagement => "crisis management",
            Criterion::Sustainability => "sustainability",
            Criterion::TeamMotivation => "team motivation",
        }
    }

    fn prompt(&self, candidate: &CandidateRow) -> String {
        let template = match self {
            Criterion::CrisisManagement => prompts::CRISIS_MANAGEMENT_PROMPT,
            Criterion::Sustainability => prompts::SUSTAINABILITY_PROMPT,
            Criterion::TeamMotivation => prompts::TEAM_MOTIVATION_PROMPT,
        };
        prompts::render_prompt(template, candidate)
    }
}

/// The criterion scorer trait. Implement this to swap scoring backends
/// without touching the aggregator or handlers.
///
/// Carried in `AppState` as `Arc<dyn CriterionScorer>`.
#[async_trait]
pub trait CriterionScorer: Send + Sync {
    /// Returns a score in [0,100] for one criterion of one candidate.
    async fn score(&self, candidate: &CandidateRow, criterion: Criterion)
        -> Result<i32, AppError>;
}

/// Production scorer backed by the AI gateway.
pub struct GatewayScorer {
    client: ScoringClient,
}

impl GatewayScorer {
    pub fn new(client: ScoringClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CriterionScorer for GatewayScorer {
    async fn score(
        &self,
        candidate: &CandidateRow,
        criterion: Criterion,
    ) -> Result<i32, AppError> {
        let prompt = criterion.prompt(candidate);

        let reply = match self.client.generate(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                warn!(
                    "Gateway call failed for {} ({}): {e}; using heuristic score",
                    candidate.name,
                    criterion.label()
                );
                return Ok(heuristic(candidate.experience_years));
            }
        };

        match extract_score(&reply) {
            Some(score) => Ok(score),
            None => {
                warn!(
                    "No numeric score in gateway reply for {} ({}); using heuristic score",
                    candidate.name,
                    criterion.label()
                );
                Ok(heuristic(candidate.experience_years))
            }
        }
    }
}

fn heuristic(experience_years: i32) -> i32 {
    let roll = rand::rng().random_range(0..20);
    fallback_score(experience_years, roll)
}

/// Extracts the first integer from a model reply and clamps it to [0,100].
/// Returns `None` when the reply contains no digits at all.
pub fn extract_score(text: &str) -> Option<i32> {
    let mut digits = String::new();
    for ch in text.chars() {
        if ch.is_ascii_digit() {
            digits.push(ch);
        } else if !digits.is_empty() {
            break;
        }
    }
    if digits.is_empty() {
        return None;
    }
    // Anything longer than three digits is already past the scale.
    let value = if digits.len() > 3 {
        100
    } else {
        digits.parse::<i32>().ok()?
    };
    Some(value.clamp(0, 100))
}

/// Heuristic score used when the gateway reply yields no number:
/// `clamp(50 + 3*experience_years + roll, 40, 100)` with `roll` drawn from
/// [0,20). The roll is a parameter so tests can pin the randomness.
pub fn fallback_score(experience_years: i32, roll: i32) -> i32 {
    (50 + experience_years * 3 + roll).clamp(40, 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_score_bare_number() {
        assert_eq!(extract_score("85"), Some(85));
    }

    #[test]
    fn test_extract_score_number_in_prose() {
        assert_eq!(
            extract_score("I would rate this candidate 72 out of 100."),
            Some(72)
        );
    }

    #[test]
    fn test_extract_score_clamps_above_100() {
        assert_eq!(extract_score("150"), Some(100));
        assert_eq!(extract_score("99999"), Some(100));
    }

    #[test]
    fn test_extract_score_zero() {
        assert_eq!(extract_score("0"), Some(0));
    }

    #[test]
    fn test_extract_score_no_digits() {
        assert_eq!(extract_score("unable to rate this candidate"), None);
        assert_eq!(extract_score(""), None);
    }

    #[test]
    fn test_extract_score_takes_first_number() {
        assert_eq!(extract_score("between 60 and 70"), Some(60));
    }

    #[test]
    fn test_fallback_score_floor_binds_at_low_experience() {
        // 50 + 0 + 0 = 50 is above the floor; the floor never binds for
        // experience >= 0, but verify the clamp holds anyway.
        assert_eq!(fallback_score(0, 0), 50);
        assert!(fallback_score(0, 0) >= 40);
    }

    #[test]
    fn test_fallback_score_ceiling_binds_at_high_experience() {
        assert_eq!(fallback_score(20, 19), 100);
        assert_eq!(fallback_score(100, 0), 100);
    }

    #[test]
    fn test_fallback_score_within_bounds_for_all_rolls() {
        for experience in 0..=30 {
            for roll in 0..20 {
                let score = fallback_score(experience, roll);
                assert!((40..=100).contains(&score), "score {score} out of bounds");
            }
        }
    }

    #[test]
    fn test_fallback_score_midrange_is_exact() {
        // 50 + 3*5 + 10 = 75
        assert_eq!(fallback_score(5, 10), 75);
    }

    #[test]
    fn test_criterion_labels() {
        assert_eq!(Criterion::CrisisManagement.label(), "crisis management");
        assert_eq!(Criterion::Sustainability.label(), "sustainability");
        assert_eq!(Criterion::TeamMotivation.label(), "team motivation");
    }
}
