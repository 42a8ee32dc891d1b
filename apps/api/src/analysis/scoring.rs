//! Compatibility scoring: a pluggable, trait-based scorer over the extracted requirements.
//!
//! Default: `SimulatedScorer`. There is no candidate profile anywhere in the system, so the
//! score is a placeholder: a fixed match ratio splits the required skills positionally and
//! the remaining sub-scores are constants. A profile-aware scorer can replace it through the
//! `CompatibilityScorer` trait without touching the pipeline or the handlers.

use crate::models::analysis::{CompatibilityScore, ExperienceLevel, ScoreBreakdown};

/// Share of required skills treated as matched by the simulated scorer.
pub const PLACEHOLDER_MATCH_RATIO: f64 = 0.75;
/// Value used for every sub-score that has no input to derive it from.
pub const BASELINE_SUBSCORE: u32 = 75;
const MAX_RECOMMENDATIONS: usize = 5;

/// What a scorer gets to see: the extracted requirements, nothing about the candidate.
#[derive(Debug, Clone, Copy)]
pub struct ScoringInput<'a> {
    pub required_skills: &'a [String],
    pub preferred_skills: &'a [String],
    pub experience_level: ExperienceLevel,
}

/// Implement this to swap scoring backends. Carried by `JobAnalyzer` as `Arc<dyn CompatibilityScorer>`.
pub trait CompatibilityScorer: Send + Sync {
    fn score(&self, input: &ScoringInput<'_>) -> CompatibilityScore;
}

pub struct SimulatedScorer;

impl CompatibilityScorer for SimulatedScorer {
    fn score(&self, input: &ScoringInput<'_>) -> CompatibilityScore {
        compute_simulated_score(input)
    }
}

fn compute_simulated_score(input: &ScoringInput<'_>) -> CompatibilityScore {
    let required = input.required_skills;
    let matched = (required.len() as f64 * PLACEHOLDER_MATCH_RATIO).floor() as usize;
    let (matched_skills, missing_skills) = required.split_at(matched);

    // No required skills means nothing to match; report 0 rather than dividing by zero.
    let skills_match = if required.is_empty() {
        0
    } else {
        ((matched as f64 / required.len() as f64) * 100.0).round() as u32
    };
    let experience_score = experience_score(input.experience_level);
    let overall =
        ((skills_match + experience_score + BASELINE_SUBSCORE) as f64 / 3.0).round() as u32;

    CompatibilityScore {
        overall,
        skills_match,
        experience_level: experience_score,
        technical_stack: BASELINE_SUBSCORE,
        culture_fit: BASELINE_SUBSCORE,
        breakdown: ScoreBreakdown {
            required_skills_matched: matched_skills.to_vec(),
            missing_skills: missing_skills.to_vec(),
            additional_skills: input.preferred_skills.to_vec(),
        },
        recommendations: build_recommendations(
            missing_skills,
            input.preferred_skills,
            input.experience_level,
        ),
    }
}

pub fn experience_score(level: ExperienceLevel) -> u32 {
    match level {
        ExperienceLevel::Senior => 85,
        ExperienceLevel::Mid => 75,
        _ => 65,
    }
}

/// Builds preparation advice from the gaps and the experience tier.
fn build_recommendations(
    missing: &[String],
    preferred: &[String],
    level: ExperienceLevel,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if !missing.is_empty() {
        let top: Vec<&str> = missing.iter().take(3).map(String::as_str).collect();
        recommendations.push(format!("Focus on learning: {}", top.join(", ")));
    }

    if !preferred.is_empty() {
        let top: Vec<&str> = preferred.iter().take(2).map(String::as_str).collect();
        recommendations.push(format!(
            "Consider gaining experience with: {}",
            top.join(", ")
        ));
    }

    let tier_advice: [&str; 2] = match level {
        ExperienceLevel::Entry => [
            "Work on building a strong portfolio of personal projects",
            "Practice coding challenges on platforms like LeetCode",
        ],
        ExperienceLevel::Mid => [
            "Focus on system design and architectural concepts",
            "Develop leadership and mentoring skills",
        ],
        _ => [
            "Prepare to discuss past technical leadership experiences",
            "Review high-level system architecture patterns",
        ],
    };
    recommendations.extend(tier_advice.iter().map(|s| s.to_string()));

    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn score(required: &[String], preferred: &[String], level: ExperienceLevel) -> CompatibilityScore {
        SimulatedScorer.score(&ScoringInput {
            required_skills: required,
            preferred_skills: preferred,
            experience_level: level,
        })
    }

    #[test]
    fn test_positional_split_of_required_skills() {
        let required = skills(&["Rust", "Go", "Docker", "Redis"]);
        let s = score(&required, &[], ExperienceLevel::Mid);
        assert_eq!(s.breakdown.required_skills_matched, skills(&["Rust", "Go", "Docker"]));
        assert_eq!(s.breakdown.missing_skills, skills(&["Redis"]));
        assert_eq!(s.skills_match, 75);
    }

    #[test]
    fn test_matched_plus_missing_equals_required() {
        for n in 0..12 {
            let required: Vec<String> = (0..n).map(|i| format!("Skill{i}")).collect();
            let s = score(&required, &[], ExperienceLevel::Senior);
            assert_eq!(
                s.breakdown.required_skills_matched.len() + s.breakdown.missing_skills.len(),
                required.len()
            );
        }
    }

    #[test]
    fn test_floor_of_match_ratio() {
        // floor(3 * 0.75) = 2 → 67%
        let s = score(&skills(&["A", "B", "C"]), &[], ExperienceLevel::Mid);
        assert_eq!(s.breakdown.required_skills_matched.len(), 2);
        assert_eq!(s.skills_match, 67);
    }

    #[test]
    fn test_experience_lookup() {
        assert_eq!(experience_score(ExperienceLevel::Senior), 85);
        assert_eq!(experience_score(ExperienceLevel::Mid), 75);
        assert_eq!(experience_score(ExperienceLevel::Entry), 65);
        assert_eq!(experience_score(ExperienceLevel::Lead), 65);
    }

    #[test]
    fn test_overall_is_rounded_average() {
        // (75 + 85 + 75) / 3 = 78.33 → 78
        let s = score(&skills(&["A", "B", "C", "D"]), &[], ExperienceLevel::Senior);
        assert_eq!(s.overall, 78);
        assert_eq!(s.technical_stack, BASELINE_SUBSCORE);
        assert_eq!(s.culture_fit, BASELINE_SUBSCORE);
    }

    #[test]
    fn test_no_required_skills_scores_zero_match() {
        let s = score(&[], &[], ExperienceLevel::Entry);
        assert_eq!(s.skills_match, 0);
        // (0 + 65 + 75) / 3 = 46.67 → 47
        assert_eq!(s.overall, 47);
        assert!(s.overall <= 100);
    }

    #[test]
    fn test_preferred_become_additional_skills() {
        let preferred = skills(&["Kafka", "Terraform"]);
        let s = score(&skills(&["Rust"]), &preferred, ExperienceLevel::Mid);
        assert_eq!(s.breakdown.additional_skills, preferred);
    }

    #[test]
    fn test_recommendations_full_set() {
        let required = skills(&["A", "B", "C", "D", "E", "F", "G", "H"]);
        let preferred = skills(&["P1", "P2", "P3"]);
        let s = score(&required, &preferred, ExperienceLevel::Entry);
        assert_eq!(s.breakdown.missing_skills, skills(&["G", "H"]));
        assert_eq!(
            s.recommendations,
            vec![
                "Focus on learning: G, H",
                "Consider gaining experience with: P1, P2",
                "Work on building a strong portfolio of personal projects",
                "Practice coding challenges on platforms like LeetCode",
            ]
        );
    }

    #[test]
    fn test_recommendations_tier_for_senior_and_lead() {
        for level in [ExperienceLevel::Senior, ExperienceLevel::Lead] {
            let s = score(&[], &[], level);
            assert_eq!(
                s.recommendations,
                vec![
                    "Prepare to discuss past technical leadership experiences",
                    "Review high-level system architecture patterns",
                ]
            );
        }
    }

    #[test]
    fn test_recommendations_mid_tier() {
        let s = score(&skills(&["Rust"]), &[], ExperienceLevel::Mid);
        // floor(0.75) = 0 → Rust is missing
        assert_eq!(s.recommendations[0], "Focus on learning: Rust");
        assert_eq!(
            s.recommendations[1],
            "Focus on system design and architectural concepts"
        );
    }
}
