//! Turns one `JobPosting` into one `JobAnalysis`.
//!
//! Regex tables are compiled once at construction; `analyze` itself is synchronous,
//! side-effect free and safe to call concurrently through a shared reference.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rand::Rng;
use thiserror::Error;
use tracing::debug;

use crate::analysis::classify::Classifier;
use crate::analysis::company::CompanyProfiler;
use crate::analysis::questions;
use crate::analysis::responsibilities::ResponsibilityExtractor;
use crate::analysis::scoring::{CompatibilityScorer, ScoringInput, SimulatedScorer};
use crate::analysis::skills::{detect_stack, SkillMatcher};
use crate::models::analysis::{AnalysisResult, JobAnalysis};
use crate::models::posting::JobPosting;

pub const MIN_DESCRIPTION_CHARS: usize = 50;
const ID_SUFFIX_LEN: usize = 9;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

#[derive(Debug, Error, PartialEq)]
pub enum AnalysisError {
    #[error("{0}")]
    Validation(String),
}

pub struct JobAnalyzer {
    skills: SkillMatcher,
    classifier: Classifier,
    company: CompanyProfiler,
    responsibilities: ResponsibilityExtractor,
    scorer: Arc<dyn CompatibilityScorer>,
}

impl JobAnalyzer {
    /// Builds an analyzer with the simulated compatibility scorer.
    pub fn new() -> Result<Self, regex::Error> {
        Self::with_scorer(Arc::new(SimulatedScorer))
    }

    pub fn with_scorer(scorer: Arc<dyn CompatibilityScorer>) -> Result<Self, regex::Error> {
        Ok(Self {
            skills: SkillMatcher::new()?,
            classifier: Classifier::new()?,
            company: CompanyProfiler::new()?,
            responsibilities: ResponsibilityExtractor::new()?,
            scorer,
        })
    }

    /// Validates and analyzes a posting, stamping a fresh id and the current time.
    pub fn analyze(&self, posting: &JobPosting) -> Result<JobAnalysis, AnalysisError> {
        self.analyze_at(posting, Utc::now(), &mut rand::thread_rng())
    }

    /// Same as `analyze` with the clock and randomness supplied by the caller.
    pub fn analyze_at<R: Rng + ?Sized>(
        &self,
        posting: &JobPosting,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Result<JobAnalysis, AnalysisError> {
        let analysis = self.derive(posting)?;
        Ok(JobAnalysis {
            id: generate_id(now, rng),
            job_title: posting.job_title.clone(),
            job_description: posting.job_description.clone(),
            company: posting.company.clone(),
            analysis_date: now,
            analysis,
        })
    }

    /// The deterministic part of the analysis: everything except id and timestamp.
    pub fn derive(&self, posting: &JobPosting) -> Result<AnalysisResult, AnalysisError> {
        validate(posting)?;

        let description = posting.job_description.as_str();
        let context = format!("{} {}", posting.job_title, description);

        let candidates = self.skills.candidates(&context);
        let required_skills = self.skills.required(&candidates, description);
        let preferred_skills = self.skills.preferred(&candidates, description);
        let technical_stack = detect_stack(description);
        let role_type = self.classifier.role(&context);
        let experience_level = self.classifier.experience(&context);
        let key_responsibilities = self.responsibilities.extract(description);
        let company_info = self.company.profile(description);

        debug!(
            role = role_type.as_str(),
            level = experience_level.as_str(),
            required = required_skills.len(),
            preferred = preferred_skills.len(),
            "posting classified"
        );

        let interview_questions = questions::generate(role_type);
        let compatibility_score = self.scorer.score(&ScoringInput {
            required_skills: &required_skills,
            preferred_skills: &preferred_skills,
            experience_level,
        });

        Ok(AnalysisResult {
            required_skills,
            preferred_skills,
            experience_level,
            technical_stack,
            role_type,
            key_responsibilities,
            company_info,
            interview_questions,
            compatibility_score,
        })
    }
}

/// Fail-fast input checks; the first failing field is reported.
pub fn validate(posting: &JobPosting) -> Result<(), AnalysisError> {
    if posting.job_title.trim().is_empty() {
        return Err(AnalysisError::Validation("job title required".to_string()));
    }
    if posting.job_description.trim().chars().count() < MIN_DESCRIPTION_CHARS {
        return Err(AnalysisError::Validation(
            "description too short".to_string(),
        ));
    }
    if posting.company.trim().is_empty() {
        return Err(AnalysisError::Validation("company required".to_string()));
    }
    Ok(())
}

/// `job_{unix_millis}_{9 base-36 chars}`. Uniqueness is probabilistic; nothing checks it.
pub fn generate_id<R: Rng + ?Sized>(now: DateTime<Utc>, rng: &mut R) -> String {
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();
    format!("job_{}_{}", now.timestamp_millis(), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::responsibilities::FALLBACK_RESPONSIBILITIES;
    use crate::models::analysis::{CompatibilityScore, ExperienceLevel, RoleType, ScoreBreakdown};
    use crate::models::coding::Difficulty;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const BACKEND_DESCRIPTION: &str = "We are looking for an engineer to join our platform group. \
        You will work with Node.js, PostgreSQL and Docker every day on services used by millions.\n\n\
        Responsibilities: build APIs, own deployments, mentor juniors.";

    fn analyzer() -> JobAnalyzer {
        JobAnalyzer::new().unwrap()
    }

    fn backend_posting() -> JobPosting {
        JobPosting::new("Senior Backend Engineer", "Acme", BACKEND_DESCRIPTION)
    }

    #[test]
    fn test_end_to_end_backend_posting() {
        let result = analyzer().analyze(&backend_posting()).unwrap();
        let a = &result.analysis;

        assert_eq!(result.company, "Acme");
        assert_eq!(result.job_title, "Senior Backend Engineer");
        assert_eq!(a.role_type, RoleType::Backend);
        assert_eq!(a.experience_level, ExperienceLevel::Senior);
        for skill in ["Node.js", "Postgresql", "Docker"] {
            assert!(
                a.required_skills.contains(&skill.to_string()),
                "missing {skill} in {:?}",
                a.required_skills
            );
        }
        let responsibilities = a.key_responsibilities.join(" ");
        for fragment in ["build APIs", "own deployments", "mentor juniors"] {
            assert!(responsibilities.contains(fragment), "missing {fragment}");
        }
        assert!(a.compatibility_score.overall <= 100);
    }

    #[test]
    fn test_deterministic_apart_from_id_and_date() {
        let a = analyzer();
        let first = a.analyze(&backend_posting()).unwrap();
        let second = a.analyze(&backend_posting()).unwrap();
        assert_eq!(first.analysis, second.analysis);
    }

    #[test]
    fn test_fixed_clock_and_seed_reproduce_whole_record() {
        let a = analyzer();
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let first = a
            .analyze_at(&backend_posting(), now, &mut StdRng::seed_from_u64(42))
            .unwrap();
        let second = a
            .analyze_at(&backend_posting(), now, &mut StdRng::seed_from_u64(42))
            .unwrap();
        assert_eq!(first, second);
        assert_eq!(first.analysis_date, now);
    }

    #[test]
    fn test_description_boundary() {
        let a = analyzer();
        let short = JobPosting::new("Engineer", "Acme", "x".repeat(49));
        assert_eq!(
            a.analyze(&short).unwrap_err(),
            AnalysisError::Validation("description too short".to_string())
        );
        let exact = JobPosting::new("Engineer", "Acme", "x".repeat(50));
        assert!(a.analyze(&exact).is_ok());
    }

    #[test]
    fn test_description_length_ignores_surrounding_whitespace() {
        let padded = JobPosting::new("Engineer", "Acme", format!("   {}   ", "x".repeat(49)));
        assert!(validate(&padded).is_err());
    }

    #[test]
    fn test_title_and_company_required() {
        let description = "x".repeat(80);
        assert_eq!(
            validate(&JobPosting::new("  ", "Acme", description.clone())).unwrap_err(),
            AnalysisError::Validation("job title required".to_string())
        );
        assert_eq!(
            validate(&JobPosting::new("Engineer", "", description)).unwrap_err(),
            AnalysisError::Validation("company required".to_string())
        );
    }

    #[test]
    fn test_title_checked_before_description() {
        let err = validate(&JobPosting::new("", "", "short")).unwrap_err();
        assert_eq!(err.to_string(), "job title required");
    }

    #[test]
    fn test_skill_mentioned_three_times_listed_once() {
        let posting = JobPosting::new(
            "React Developer",
            "Acme",
            "React is our core. We write React all day, and React Native sometimes for mobile apps.",
        );
        let a = analyzer().derive(&posting).unwrap();
        assert_eq!(a.required_skills.iter().filter(|s| *s == "React").count(), 1);
    }

    #[test]
    fn test_fallback_responsibilities_never_empty() {
        let posting = JobPosting::new(
            "Engineer",
            "Acme",
            "A friendly company that makes accounting software for small businesses everywhere.",
        );
        let a = analyzer().derive(&posting).unwrap();
        assert_eq!(a.key_responsibilities, FALLBACK_RESPONSIBILITIES.to_vec());
    }

    #[test]
    fn test_frontend_and_backend_keywords_classify_frontend() {
        let posting = JobPosting::new(
            "Engineer",
            "Acme",
            "You will split your time between the backend services and the frontend application.",
        );
        assert_eq!(analyzer().derive(&posting).unwrap().role_type, RoleType::Frontend);
    }

    #[test]
    fn test_senior_lead_title_is_senior() {
        let posting = JobPosting::new("Senior Lead Engineer", "Acme", "x".repeat(60));
        assert_eq!(
            analyzer().derive(&posting).unwrap().experience_level,
            ExperienceLevel::Senior
        );
    }

    #[test]
    fn test_backend_coding_challenges() {
        let a = analyzer().derive(&backend_posting()).unwrap();
        let coding = &a.interview_questions.coding;
        assert_eq!(coding.len(), 3);
        assert_eq!(
            coding.iter().filter(|q| q.difficulty == Difficulty::Easy).count(),
            1
        );
        assert!(coding.iter().any(|q| q.tags.contains(&"rate-limiting".to_string())));
        assert!(coding.iter().any(|q| q.tags.contains(&"bst".to_string())));
    }

    #[test]
    fn test_score_breakdown_covers_required_skills() {
        let a = analyzer().derive(&backend_posting()).unwrap();
        let b = &a.compatibility_score.breakdown;
        assert_eq!(
            b.required_skills_matched.len() + b.missing_skills.len(),
            a.required_skills.len()
        );
    }

    #[test]
    fn test_custom_scorer_is_used() {
        struct FixedScorer;
        impl CompatibilityScorer for FixedScorer {
            fn score(&self, _input: &ScoringInput<'_>) -> CompatibilityScore {
                CompatibilityScore {
                    overall: 99,
                    skills_match: 99,
                    experience_level: 99,
                    technical_stack: 99,
                    culture_fit: 99,
                    breakdown: ScoreBreakdown {
                        required_skills_matched: vec![],
                        missing_skills: vec![],
                        additional_skills: vec![],
                    },
                    recommendations: vec![],
                }
            }
        }

        let a = JobAnalyzer::with_scorer(Arc::new(FixedScorer)).unwrap();
        let result = a.derive(&backend_posting()).unwrap();
        assert_eq!(result.compatibility_score.overall, 99);
    }

    #[test]
    fn test_id_format() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let id = generate_id(now, &mut StdRng::seed_from_u64(1));
        let prefix = format!("job_{}_", now.timestamp_millis());
        assert!(id.starts_with(&prefix));
        let suffix = &id[prefix.len()..];
        assert_eq!(suffix.len(), 9);
        assert!(suffix.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn test_ids_differ_between_calls() {
        let a = analyzer();
        let first = a.analyze(&backend_posting()).unwrap();
        let second = a.analyze(&backend_posting()).unwrap();
        assert_ne!(first.id, second.id);
    }
}
