//! Skill and technical-stack detection against the static keyword tables.

use regex::Regex;
use tracing::debug;

use crate::analysis::sections::SectionPattern;

/// Recognized skill keywords, grouped by category. Lowercase; matched on word boundaries.
pub const SKILL_CATALOG: &[(&str, &[&str])] = &[
    (
        "languages",
        &[
            "javascript", "typescript", "python", "java", "c++", "c#", "go", "rust", "php",
            "ruby", "swift", "kotlin", "scala", "r", "matlab",
        ],
    ),
    (
        "frontend",
        &[
            "react", "angular", "vue", "svelte", "nextjs", "nuxt", "gatsby", "html", "css",
            "sass", "tailwind", "bootstrap", "material-ui",
        ],
    ),
    (
        "backend",
        &[
            "nodejs", "node.js", "express", "nestjs", "django", "flask", "fastapi", "spring",
            "spring boot", "laravel", "rails", "asp.net",
        ],
    ),
    (
        "databases",
        &[
            "mongodb", "postgresql", "mysql", "redis", "elasticsearch", "dynamodb", "cassandra",
            "oracle", "sql server",
        ],
    ),
    (
        "cloud",
        &[
            "aws", "azure", "gcp", "google cloud", "docker", "kubernetes", "terraform",
            "ansible", "jenkins", "gitlab ci", "github actions",
        ],
    ),
    (
        "tools",
        &[
            "git", "jira", "confluence", "figma", "webpack", "vite", "babel", "eslint",
            "prettier", "jest", "cypress", "selenium",
        ],
    ),
    (
        "concepts",
        &[
            "microservices", "serverless", "rest api", "graphql", "websocket", "oauth", "jwt",
            "ci/cd", "agile", "scrum", "tdd", "solid",
        ],
    ),
];

/// Named architecture patterns. A pattern is reported when ANY of its tokens appears.
pub const STACK_PATTERNS: &[(&str, &[&str])] = &[
    ("MERN", &["mongodb", "express", "react", "node"]),
    ("MEAN", &["mongodb", "express", "angular", "node"]),
    ("LAMP", &["linux", "apache", "mysql", "php"]),
    ("JAMstack", &["jamstack", "static site"]),
    ("Microservices", &["microservices", "micro-services"]),
    ("Serverless", &["serverless", "lambda", "cloud functions"]),
    ("REST API", &["rest api", "restful"]),
    ("GraphQL", &["graphql"]),
];

pub const REQUIRED_HEADINGS: &[&str] = &["required", "must have", "essential"];
pub const PREFERRED_HEADINGS: &[&str] = &["preferred", "nice to have", "bonus"];

struct CompiledSkill {
    category: &'static str,
    display: String,
    regex: Regex,
}

pub struct SkillMatcher {
    skills: Vec<CompiledSkill>,
    required: SectionPattern,
    preferred: SectionPattern,
}

impl SkillMatcher {
    pub fn new() -> Result<Self, regex::Error> {
        let mut skills = Vec::new();
        for (category, keywords) in SKILL_CATALOG {
            for keyword in keywords.iter() {
                skills.push(CompiledSkill {
                    category: *category,
                    display: title_case(keyword),
                    regex: Regex::new(&format!(r"(?i)\b{}\b", regex::escape(keyword)))?,
                });
            }
        }

        Ok(Self {
            skills,
            required: SectionPattern::new(REQUIRED_HEADINGS)?,
            preferred: SectionPattern::new(PREFERRED_HEADINGS)?,
        })
    }

    /// Every catalog skill mentioned in `context`, title-cased, deduplicated, in catalog order.
    pub fn candidates(&self, context: &str) -> Vec<String> {
        let mut found: Vec<String> = Vec::new();
        for skill in &self.skills {
            if skill.regex.is_match(context) && !found.contains(&skill.display) {
                debug!(category = skill.category, skill = %skill.display, "skill detected");
                found.push(skill.display.clone());
            }
        }
        found
    }

    /// Candidates named inside a "Required" section, or all candidates when there is none.
    pub fn required(&self, candidates: &[String], description: &str) -> Vec<String> {
        filter_to_section(candidates, self.required.capture(description))
    }

    /// Candidates named inside a "Preferred" section, or all candidates when there is none.
    pub fn preferred(&self, candidates: &[String], description: &str) -> Vec<String> {
        filter_to_section(candidates, self.preferred.capture(description))
    }
}

fn filter_to_section(candidates: &[String], section: Option<&str>) -> Vec<String> {
    match section {
        Some(body) => {
            let body = body.to_lowercase();
            candidates
                .iter()
                .filter(|skill| body.contains(&skill.to_lowercase()))
                .cloned()
                .collect()
        }
        None => candidates.to_vec(),
    }
}

/// Display names of every stack pattern with at least one token in `description`.
pub fn detect_stack(description: &str) -> Vec<String> {
    let lower = description.to_lowercase();
    STACK_PATTERNS
        .iter()
        .filter(|(_, tokens)| tokens.iter().any(|t| lower.contains(t)))
        .map(|(name, _)| name.to_string())
        .collect()
}

/// Capitalizes the first character of every space-separated token.
pub fn title_case(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().to_string() + chars.as_str(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
