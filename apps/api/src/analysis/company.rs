//! Company size, industry and culture signals.

use regex::Regex;

use crate::models::analysis::CompanyInfo;

const DEFAULT_SIZE: &str = "medium";
const DEFAULT_INDUSTRY: &str = "Technology";

// Later entries override earlier ones when several match.
const SIZE_RULES: &[(&str, &str)] = &[
    ("startup", r"(?i)startup|early-stage"),
    ("large", r"(?i)enterprise|fortune|large company"),
];

const INDUSTRY_RULES: &[(&str, &str)] = &[
    ("Financial Technology", r"(?i)fintech|finance"),
    ("Healthcare", r"(?i)healthcare|health tech"),
    ("E-commerce", r"(?i)e-commerce|ecommerce"),
];

// Independent: any subset may apply.
const CULTURE_RULES: &[(&str, &str)] = &[
    ("Collaborative", r"(?i)collaborative|team"),
    ("Innovative", r"(?i)innovative|cutting-edge"),
    ("Fast-paced", r"(?i)fast-paced|agile"),
    ("Flexible", r"(?i)flexible|remote|work-life"),
];

pub struct CompanyProfiler {
    size: Vec<(&'static str, Regex)>,
    industry: Vec<(&'static str, Regex)>,
    culture: Vec<(&'static str, Regex)>,
}

impl CompanyProfiler {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            size: compile(SIZE_RULES)?,
            industry: compile(INDUSTRY_RULES)?,
            culture: compile(CULTURE_RULES)?,
        })
    }

    pub fn profile(&self, description: &str) -> CompanyInfo {
        CompanyInfo {
            size: last_match(&self.size, description).unwrap_or(DEFAULT_SIZE).to_string(),
            industry: last_match(&self.industry, description)
                .unwrap_or(DEFAULT_INDUSTRY)
                .to_string(),
            culture: self
                .culture
                .iter()
                .filter(|(_, re)| re.is_match(description))
                .map(|(label, _)| label.to_string())
                .collect(),
        }
    }
}

fn compile(rules: &[(&'static str, &str)]) -> Result<Vec<(&'static str, Regex)>, regex::Error> {
    rules
        .iter()
        .map(|(label, pattern)| Ok((*label, Regex::new(pattern)?)))
        .collect()
}

fn last_match(rules: &[(&'static str, Regex)], text: &str) -> Option<&'static str> {
    rules
        .iter()
        .rev()
        .find(|(_, re)| re.is_match(text))
        .map(|(label, _)| *label)
}
