//! Coding-question catalog: lookup and filtering over the static entries in `data`.

pub mod data;
pub mod handlers;

use std::collections::BTreeSet;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::models::coding::{CodingQuestion, Difficulty};
use data::{CatalogEntry, CODING_QUESTIONS};

impl CatalogEntry {
    pub fn to_question(&self) -> CodingQuestion {
        CodingQuestion {
            id: self.id.to_string(),
            question: self.question.to_string(),
            difficulty: self.difficulty,
            category: self.category.to_string(),
            tags: self.tags.iter().map(|t| t.to_string()).collect(),
            solution: self.solution.to_string(),
            code_example: self.code_example.map(str::to_string),
            time_complexity: self.time_complexity.map(str::to_string),
            space_complexity: self.space_complexity.map(str::to_string),
            explanation: self.explanation.map(str::to_string),
            hints: self.hints.iter().map(|h| h.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DifficultyCounts {
    pub easy: usize,
    pub medium: usize,
    pub hard: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub total: usize,
    pub by_difficulty: DifficultyCounts,
    pub categories: Vec<String>,
    pub all_tags: Vec<String>,
}

pub fn all() -> Vec<CodingQuestion> {
    CODING_QUESTIONS.iter().map(CatalogEntry::to_question).collect()
}

pub fn by_id(id: &str) -> Option<CodingQuestion> {
    CODING_QUESTIONS
        .iter()
        .find(|q| q.id == id)
        .map(CatalogEntry::to_question)
}

/// The first catalog entry of the given difficulty, in catalog order.
pub fn first_of(difficulty: Difficulty) -> Option<CodingQuestion> {
    CODING_QUESTIONS
        .iter()
        .find(|q| q.difficulty == difficulty)
        .map(CatalogEntry::to_question)
}

pub fn by_difficulty(difficulty: Difficulty) -> Vec<CodingQuestion> {
    CODING_QUESTIONS
        .iter()
        .filter(|q| q.difficulty == difficulty)
        .map(CatalogEntry::to_question)
        .collect()
}

pub fn by_category(category: &str) -> Vec<CodingQuestion> {
    CODING_QUESTIONS
        .iter()
        .filter(|q| q.category.eq_ignore_ascii_case(category))
        .map(CatalogEntry::to_question)
        .collect()
}

/// Entries carrying any of `tags`. An empty tag list returns the whole catalog.
pub fn search_by_tags(tags: &[String]) -> Vec<CodingQuestion> {
    if tags.is_empty() {
        return all();
    }
    let wanted: Vec<String> = tags.iter().map(|t| t.to_lowercase()).collect();
    CODING_QUESTIONS
        .iter()
        .filter(|q| q.tags.iter().any(|t| wanted.iter().any(|w| w == t)))
        .map(CatalogEntry::to_question)
        .collect()
}

pub fn random<R: Rng + ?Sized>(difficulty: Option<Difficulty>, rng: &mut R) -> Option<CodingQuestion> {
    let pool: Vec<&CatalogEntry> = CODING_QUESTIONS
        .iter()
        .filter(|q| difficulty.map_or(true, |d| q.difficulty == d))
        .collect();
    pool.choose(rng).map(|q| q.to_question())
}

pub fn stats() -> CatalogStats {
    let count = |d: Difficulty| CODING_QUESTIONS.iter().filter(|q| q.difficulty == d).count();

    let mut categories: Vec<String> = Vec::new();
    for q in CODING_QUESTIONS {
        if !categories.iter().any(|c| c == q.category) {
            categories.push(q.category.to_string());
        }
    }

    let all_tags: BTreeSet<&str> = CODING_QUESTIONS
        .iter()
        .flat_map(|q| q.tags.iter().copied())
        .collect();

    CatalogStats {
        total: CODING_QUESTIONS.len(),
        by_difficulty: DifficultyCounts {
            easy: count(Difficulty::Easy),
            medium: count(Difficulty::Medium),
            hard: count(Difficulty::Hard),
        },
        categories,
        all_tags: all_tags.into_iter().map(str::to_string).collect(),
    }
}
