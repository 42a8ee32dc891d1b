use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::coding::CodingQuestion;

/// Broad engineering discipline a posting targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleType {
    Frontend,
    Backend,
    Fullstack,
    Devops,
    Data,
    Mobile,
    #[default]
    Other,
}

impl RoleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleType::Frontend => "frontend",
            RoleType::Backend => "backend",
            RoleType::Fullstack => "fullstack",
            RoleType::Devops => "devops",
            RoleType::Data => "data",
            RoleType::Mobile => "mobile",
            RoleType::Other => "other",
        }
    }
}

/// Seniority band inferred from the posting text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Entry,
    #[default]
    Mid,
    Senior,
    Lead,
}

impl ExperienceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Entry => "entry",
            ExperienceLevel::Mid => "mid",
            ExperienceLevel::Senior => "senior",
            ExperienceLevel::Lead => "lead",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyInfo {
    pub size: String,
    pub industry: String,
    pub culture: Vec<String>,
}

/// An interview question with a model answer and delivery tips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionWithAnswer {
    pub question: String,
    pub answer: String,
    pub tips: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewQuestions {
    pub behavioral: Vec<QuestionWithAnswer>,
    pub technical: Vec<QuestionWithAnswer>,
    pub coding: Vec<CodingQuestion>,
    pub system_design: Vec<QuestionWithAnswer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub required_skills_matched: Vec<String>,
    pub missing_skills: Vec<String>,
    pub additional_skills: Vec<String>,
}

/// Simulated 0-100 match metric. Derived entirely from the analysis; no candidate
/// profile takes part in it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityScore {
    pub overall: u32,
    pub skills_match: u32,
    pub experience_level: u32,
    pub technical_stack: u32,
    pub culture_fit: u32,
    pub breakdown: ScoreBreakdown,
    pub recommendations: Vec<String>,
}

/// Everything derived from a posting. Deterministic for a given posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub required_skills: Vec<String>,
    pub preferred_skills: Vec<String>,
    pub experience_level: ExperienceLevel,
    pub technical_stack: Vec<String>,
    pub role_type: RoleType,
    pub key_responsibilities: Vec<String>,
    pub company_info: CompanyInfo,
    pub interview_questions: InterviewQuestions,
    pub compatibility_score: CompatibilityScore,
}

/// The persisted record. Written once under `job_analysis:{id}` and never edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobAnalysis {
    pub id: String,
    pub job_title: String,
    pub job_description: String,
    pub company: String,
    pub analysis_date: DateTime<Utc>,
    pub analysis: AnalysisResult,
}
