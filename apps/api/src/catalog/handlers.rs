use axum::{
    extract::{Path, Query},
    Json,
};
use serde::Deserialize;

use crate::catalog::{self, CatalogStats};
use crate::errors::AppError;
use crate::models::coding::{CodingQuestion, Difficulty};

#[derive(Debug, Default, Deserialize)]
pub struct CatalogQuery {
    pub difficulty: Option<Difficulty>,
    pub category: Option<String>,
    /// Comma-separated; an entry matches if it carries any of them.
    pub tags: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RandomQuery {
    pub difficulty: Option<Difficulty>,
}

/// GET /api/v1/coding-questions
pub async fn handle_list_questions(Query(query): Query<CatalogQuery>) -> Json<Vec<CodingQuestion>> {
    Json(filter_catalog(&query))
}

/// GET /api/v1/coding-questions/stats
pub async fn handle_catalog_stats() -> Json<CatalogStats> {
    Json(catalog::stats())
}

/// GET /api/v1/coding-questions/random
pub async fn handle_random_question(
    Query(query): Query<RandomQuery>,
) -> Result<Json<CodingQuestion>, AppError> {
    catalog::random(query.difficulty, &mut rand::thread_rng())
        .map(Json)
        .ok_or_else(|| {
            let level = query.difficulty.map_or("any", |d| d.as_str());
            AppError::NotFound(format!("no coding question of difficulty {level}"))
        })
}

/// GET /api/v1/coding-questions/:id
pub async fn handle_get_question(Path(id): Path<String>) -> Result<Json<CodingQuestion>, AppError> {
    catalog::by_id(&id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("coding question {id}")))
}

/// Applies every supplied filter; an absent filter keeps everything.
fn filter_catalog(query: &CatalogQuery) -> Vec<CodingQuestion> {
    let tags: Vec<String> = query
        .tags
        .as_deref()
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    let mut results = catalog::search_by_tags(&tags);
    if let Some(difficulty) = query.difficulty {
        retain_ids(&mut results, &catalog::by_difficulty(difficulty));
    }
    if let Some(category) = query.category.as_deref() {
        retain_ids(&mut results, &catalog::by_category(category));
    }
    results
}

fn retain_ids(results: &mut Vec<CodingQuestion>, keep: &[CodingQuestion]) {
    results.retain(|q| keep.iter().any(|k| k.id == q.id));
}
