//! Role and experience-level classification.
//!
//! Both classifiers are ordered first-match-wins tables. The order is part of the contract:
//! a posting that mentions both frontend and backend work is `frontend`, and a
//! "Senior Lead" title is `senior`, because those groups are checked first.

use regex::Regex;

use crate::models::analysis::{ExperienceLevel, RoleType};

/// Role indicator groups in precedence order.
pub const ROLE_INDICATORS: &[(RoleType, &[&str])] = &[
    (
        RoleType::Frontend,
        &["frontend", "front-end", "ui", "ux", "web designer"],
    ),
    (
        RoleType::Backend,
        &["backend", "back-end", "server", "api developer"],
    ),
    (
        RoleType::Fullstack,
        &["fullstack", "full-stack", "full stack"],
    ),
    (
        RoleType::Devops,
        &["devops", "dev ops", "infrastructure", "site reliability", "sre"],
    ),
    (
        RoleType::Data,
        &["data scientist", "data engineer", "machine learning", "ml engineer", "ai"],
    ),
    (
        RoleType::Mobile,
        &["mobile", "ios", "android", "react native", "flutter"],
    ),
];

// Seniority terms match anywhere in the text, so "Internship" is entry and "15+ years" is senior.
const SENIOR_PATTERN: &str = r"(?i)senior|sr\.|staff|principal|architect|[57]\+\s*years";
const LEAD_PATTERN: &str = r"(?i)lead|principal|staff|architect|10\+\s*years";
const ENTRY_PATTERN: &str = r"(?i)junior|jr\.|entry|graduate|intern|0-2\s*years|new grad";

pub struct Classifier {
    roles: Vec<(RoleType, Regex)>,
    levels: Vec<(ExperienceLevel, Regex)>,
}

impl Classifier {
    pub fn new() -> Result<Self, regex::Error> {
        let roles = ROLE_INDICATORS
            .iter()
            .map(|(role, indicators)| Ok((*role, any_word(indicators)?)))
            .collect::<Result<Vec<_>, regex::Error>>()?;

        let levels = vec![
            (ExperienceLevel::Senior, Regex::new(SENIOR_PATTERN)?),
            (ExperienceLevel::Lead, Regex::new(LEAD_PATTERN)?),
            (ExperienceLevel::Entry, Regex::new(ENTRY_PATTERN)?),
        ];

        Ok(Self { roles, levels })
    }

    /// First role group with any indicator in `context`; `Other` when none match.
    pub fn role(&self, context: &str) -> RoleType {
        self.roles
            .iter()
            .find(|(_, re)| re.is_match(context))
            .map(|(role, _)| *role)
            .unwrap_or_default()
    }

    /// Senior, then lead, then entry; `Mid` when nothing matches.
    pub fn experience(&self, context: &str) -> ExperienceLevel {
        self.levels
            .iter()
            .find(|(_, re)| re.is_match(context))
            .map(|(level, _)| *level)
            .unwrap_or_default()
    }
}

/// Case-insensitive alternation of whole-word literals.
fn any_word(words: &[&str]) -> Result<Regex, regex::Error> {
    let alternation = words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{alternation})\b"))
}
