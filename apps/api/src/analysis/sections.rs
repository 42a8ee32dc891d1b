//! Labeled-section capture: "<heading>: text up to the next blank line".

use regex::Regex;

/// Ordered set of heading keywords. The first heading that occurs anywhere in the
/// text wins, regardless of where the other headings appear.
#[derive(Debug, Clone)]
pub struct SectionPattern {
    headings: Vec<Regex>,
}

impl SectionPattern {
    pub fn new(headings: &[&str]) -> Result<Self, regex::Error> {
        let headings = headings
            .iter()
            .map(|h| Regex::new(&format!(r"(?is){}[:\s](.*?)(?:\n\n|\z)", regex::escape(h))))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { headings })
    }

    /// Returns the body of the first matching heading. An empty body counts as no section.
    pub fn capture<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.headings
            .iter()
            .find_map(|re| re.captures(text))
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .filter(|body| !body.is_empty())
    }
}
