//! Prompt templates for the three evaluation criteria.

use crate::models::candidate::CandidateRow;

pub const CRISIS_MANAGEMENT_PROMPT: &str = "Evaluate the crisis management capabilities of {name}, a {position} with {experience_years} years of experience and skills in {skills}. Rate their ability to handle high-pressure situations, make quick decisions, and manage emergencies on a scale of 0-100. Respond with ONLY a number between 0 and 100.";

pub const SUSTAINABILITY_PROMPT: &str = "Evaluate the sustainability knowledge and environmental awareness of {name}, a {position} with {experience_years} years of experience and skills in {skills}. Rate their understanding of sustainable practices, green initiatives, and environmental responsibility on a scale of 0-100. Respond with ONLY a number between 0 and 100.";

pub const TEAM_MOTIVATION_PROMPT: &str = "Evaluate the team motivation and leadership skills of {name}, a {position} with {experience_years} years of experience and skills in {skills}. Rate their ability to inspire, motivate, and lead teams effectively on a scale of 0-100. Respond with ONLY a number between 0 and 100.";

/// Interpolates a candidate's attributes into a criterion prompt template.
pub fn render_prompt(template: &str, candidate: &CandidateRow) -> String {
    template
        .replace("{name}", &candidate.name)
        .replace("{position}", &candidate.position)
        .replace(
            "{experience_years}",
            &candidate.experience_years.to_string(),
        )
        .replace("{skills}", &candidate.skills.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn make_candidate() -> CandidateRow {
        CandidateRow {
            id: Uuid::new_v4(),
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            experience_years: 7,
            skills: vec!["Rust".to_string(), "SQL".to_string()],
            position: "Software Engineer".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_render_prompt_interpolates_all_fields() {
        let prompt = render_prompt(CRISIS_MANAGEMENT_PROMPT, &make_candidate());
        assert!(prompt.contains("Ada Lovelace"));
        assert!(prompt.contains("Software Engineer"));
        assert!(prompt.contains("7 years"));
        assert!(prompt.contains("Rust, SQL"));
        assert!(!prompt.contains('{'));
    }

    #[test]
    fn test_all_templates_demand_bare_number() {
        for template in [
            CRISIS_MANAGEMENT_PROMPT,
            SUSTAINABILITY_PROMPT,
            TEAM_MOTIVATION_PROMPT,
        ] {
            assert!(template.contains("ONLY a number between 0 and 100"));
        }
    }
}
