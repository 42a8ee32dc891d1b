//! Key responsibility extraction. Never returns an empty list.

use crate::analysis::sections::SectionPattern;

pub const RESPONSIBILITY_HEADINGS: &[&str] =
    &["responsibilities", "you will", "role", "what you'll do"];

pub const MAX_RESPONSIBILITIES: usize = 8;
/// Lines must be strictly longer than this many characters to count.
const MIN_LINE_CHARS: usize = 10;

pub const FALLBACK_RESPONSIBILITIES: [&str; 5] = [
    "Develop and maintain software applications",
    "Collaborate with cross-functional teams",
    "Write clean, maintainable, and well-documented code",
    "Participate in code reviews and technical discussions",
    "Debug and troubleshoot production issues",
];

const BULLET_DELIMITERS: &[char] = &['•', '-', '*', '\n'];

pub struct ResponsibilityExtractor {
    section: SectionPattern,
}

impl ResponsibilityExtractor {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            section: SectionPattern::new(RESPONSIBILITY_HEADINGS)?,
        })
    }

    pub fn extract(&self, description: &str) -> Vec<String> {
        let lines: Vec<String> = self
            .section
            .capture(description)
            .map(|body| {
                body.split(BULLET_DELIMITERS)
                    .map(str::trim)
                    .filter(|line| line.chars().count() > MIN_LINE_CHARS)
                    .take(MAX_RESPONSIBILITIES)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        if lines.is_empty() {
            FALLBACK_RESPONSIBILITIES.iter().map(|s| s.to_string()).collect()
        } else {
            lines
        }
    }
}
