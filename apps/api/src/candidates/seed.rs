//! Sample-data seeding: generates plausible candidates across a fixed set of
//! positions, each with a matching skill set.

use rand::seq::IndexedRandom;
use rand::Rng;
use sqlx::PgPool;
use tracing::info;

use crate::candidates::insert_candidates;
use crate::models::candidate::{CandidateRow, NewCandidate};

pub const DEFAULT_SEED_COUNT: u32 = 40;

const POSITIONS: [&str; 15] = [
    "Software Engineer",
    "Product Manager",
    "Data Scientist",
    "UX Designer",
    "DevOps Engineer",
    "Marketing Manager",
    "Sales Director",
    "HR Manager",
    "Financial Analyst",
    "Operations Manager",
    "Business Analyst",
    "Project Manager",
    "Quality Assurance Engineer",
    "Security Analyst",
    "Customer Success Manager",
];

const SKILL_SETS: [[&str; 5]; 15] = [
    ["JavaScript", "React", "Node.js", "TypeScript", "AWS"],
    ["Python", "Machine Learning", "TensorFlow", "Data Analysis", "SQL"],
    ["Product Strategy", "Agile", "Roadmapping", "User Research", "Analytics"],
    ["UI/UX Design", "Figma", "Adobe XD", "Prototyping", "User Testing"],
    ["Docker", "Kubernetes", "CI/CD", "Linux", "Terraform"],
    ["Digital Marketing", "SEO", "Content Strategy", "Social Media", "Analytics"],
    ["Sales Strategy", "CRM", "Negotiation", "Lead Generation", "Account Management"],
    ["Recruitment", "Employee Relations", "Performance Management", "Training", "Compliance"],
    ["Financial Modeling", "Excel", "Forecasting", "Budgeting", "Risk Analysis"],
    ["Process Optimization", "Supply Chain", "Logistics", "Lean Six Sigma", "Project Management"],
    ["Business Intelligence", "SQL", "Tableau", "Requirements Gathering", "Process Mapping"],
    ["Scrum", "JIRA", "Risk Management", "Stakeholder Management", "Budgeting"],
    ["Test Automation", "Selenium", "API Testing", "Performance Testing", "Bug Tracking"],
    ["Cybersecurity", "Penetration Testing", "SIEM", "Compliance", "Incident Response"],
    ["Customer Onboarding", "Account Management", "Support", "Training", "Retention"],
];

const FIRST_NAMES: [&str; 20] = [
    "Alice", "Ben", "Carla", "David", "Elena", "Felix", "Grace", "Hassan", "Ingrid", "James",
    "Keiko", "Liam", "Maria", "Noah", "Olivia", "Pablo", "Quinn", "Rosa", "Samuel", "Tara",
];

const LAST_NAMES: [&str; 20] = [
    "Anderson", "Baker", "Chen", "Diaz", "Evans", "Fischer", "Garcia", "Hoffmann", "Ivanova",
    "Johnson", "Kim", "Lopez", "Mueller", "Nguyen", "Okafor", "Patel", "Quiroga", "Rossi",
    "Suzuki", "Tanaka",
];

/// Generates `count` candidates, rotating through the position/skill-set
/// pairs so the positions stay evenly represented.
pub fn generate_candidates(count: u32) -> Vec<NewCandidate> {
    let mut rng = rand::rng();
    let mut candidates = Vec::with_capacity(count as usize);

    for i in 0..count as usize {
        let position_index = i % POSITIONS.len();
        let first = FIRST_NAMES.choose(&mut rng).copied().unwrap_or("Alex");
        let last = LAST_NAMES.choose(&mut rng).copied().unwrap_or("Smith");
        let name = format!("{first} {last}");
        let email = format!(
            "{}.{}{}@example.com",
            first.to_lowercase(),
            last.to_lowercase(),
            rng.random_range(10..100)
        );

        candidates.push(NewCandidate {
            name,
            email,
            experience_years: rng.random_range(1..=20),
            skills: SKILL_SETS[position_index]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            position: POSITIONS[position_index].to_string(),
        });
    }

    candidates
}

/// Generates and bulk-inserts `count` sample candidates.
pub async fn seed_candidates(db: &PgPool, count: u32) -> Result<Vec<CandidateRow>, sqlx::Error> {
    let candidates = generate_candidates(count);
    let rows = insert_candidates(db, &candidates).await?;
    info!("Seeded {} candidates", rows.len());
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_candidates_count() {
        assert_eq!(generate_candidates(40).len(), 40);
        assert!(generate_candidates(0).is_empty());
    }

    #[test]
    fn test_skills_match_position() {
        let candidates = generate_candidates(30);
        for (i, candidate) in candidates.iter().enumerate() {
            let index = i % POSITIONS.len();
            assert_eq!(candidate.position, POSITIONS[index]);
            assert_eq!(candidate.skills, SKILL_SETS[index]);
        }
    }

    #[test]
    fn test_experience_within_range() {
        for candidate in generate_candidates(100) {
            assert!((1..=20).contains(&candidate.experience_years));
        }
    }

    #[test]
    fn test_emails_are_lowercase() {
        for candidate in generate_candidates(50) {
            assert_eq!(candidate.email, candidate.email.to_lowercase());
            assert!(candidate.email.ends_with("@example.com"));
        }
    }

    #[test]
    fn test_position_and_skill_tables_align() {
        assert_eq!(POSITIONS.len(), SKILL_SETS.len());
    }
}
