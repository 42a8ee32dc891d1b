use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::analysis::JobAnalysis;
use crate::models::posting::JobPosting;
use crate::state::AppState;

#[derive(Serialize)]
pub struct WipeResponse {
    pub deleted: usize,
}

/// POST /api/v1/analyses
pub async fn handle_create_analysis(
    State(state): State<AppState>,
    Json(posting): Json<JobPosting>,
) -> Result<(StatusCode, Json<JobAnalysis>), AppError> {
    let analysis = state.analyzer.analyze(&posting)?;
    state.analyses.save(&analysis).await?;
    info!(
        id = %analysis.id,
        company = %analysis.company,
        role = analysis.analysis.role_type.as_str(),
        "analysis stored"
    );
    Ok((StatusCode::CREATED, Json(analysis)))
}

/// GET /api/v1/analyses
pub async fn handle_list_analyses(
    State(state): State<AppState>,
) -> Result<Json<Vec<JobAnalysis>>, AppError> {
    Ok(Json(state.analyses.list().await?))
}

/// GET /api/v1/analyses/:id
pub async fn handle_get_analysis(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<JobAnalysis>, AppError> {
    state
        .analyses
        .load(&id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("analysis {id}")))
}

/// DELETE /api/v1/analyses/:id
pub async fn handle_delete_analysis(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    if !state.analyses.delete(&id).await? {
        return Err(AppError::NotFound(format!("analysis {id}")));
    }
    info!(%id, "analysis deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/analyses
pub async fn handle_wipe_analyses(
    State(state): State<AppState>,
) -> Result<Json<WipeResponse>, AppError> {
    let deleted = state.analyses.wipe().await?;
    info!(deleted, "analyses wiped");
    Ok(Json(WipeResponse { deleted }))
}
