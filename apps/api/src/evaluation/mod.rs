//! Candidate evaluation: criterion scoring, per-candidate aggregation, and
//! batch orchestration.

pub mod aggregator;
pub mod batch;
pub mod handlers;
pub mod prompts;
pub mod scorer;
