pub mod health;

use axum::{routing::get, Router};

use crate::analysis::handlers as analyses;
use crate::catalog::handlers as catalog;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Job analyses
        .route(
            "/api/v1/analyses",
            get(analyses::handle_list_analyses)
                .post(analyses::handle_create_analysis)
                .delete(analyses::handle_wipe_analyses),
        )
        .route(
            "/api/v1/analyses/:id",
            get(analyses::handle_get_analysis).delete(analyses::handle_delete_analysis),
        )
        // Coding question catalog
        .route(
            "/api/v1/coding-questions",
            get(catalog::handle_list_questions),
        )
        .route(
            "/api/v1/coding-questions/stats",
            get(catalog::handle_catalog_stats),
        )
        .route(
            "/api/v1/coding-questions/random",
            get(catalog::handle_random_question),
        )
        .route(
            "/api/v1/coding-questions/:id",
            get(catalog::handle_get_question),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::analysis::pipeline::JobAnalyzer;
    use crate::config::Config;
    use crate::storage::memory::MemoryStore;
    use crate::storage::repository::AnalysisRepository;

    fn app() -> Router {
        let state = AppState {
            analyses: AnalysisRepository::new(Arc::new(MemoryStore::new())),
            analyzer: Arc::new(JobAnalyzer::new().unwrap()),
            config: Config {
                redis_url: None,
                port: 0,
                rust_log: "debug".to_string(),
            },
        };
        build_router(state)
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        let response = app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    fn posting() -> Value {
        json!({
            "jobTitle": "Senior Backend Engineer",
            "company": "Acme",
            "jobDescription": "We are looking for an engineer to work with Node.js, PostgreSQL and Docker.\n\nResponsibilities: build APIs, own deployments, mentor juniors."
        })
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(&app(), Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["service"], "jobprep");
        assert_eq!(body["storage"], "memory");
    }

    #[tokio::test]
    async fn test_create_then_fetch_and_list() {
        let app = app();
        let (status, created) = send(&app, Method::POST, "/api/v1/analyses", Some(posting())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["analysis"]["roleType"], "backend");
        assert_eq!(created["analysis"]["experienceLevel"], "senior");
        let id = created["id"].as_str().unwrap().to_string();
        assert!(id.starts_with("job_"));

        let (status, fetched) = send(&app, Method::GET, &format!("/api/v1/analyses/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, created);

        let (status, listed) = send(&app, Method::GET, "/api/v1/analyses", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(listed.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_validation_error_is_400() {
        let mut body = posting();
        body["jobDescription"] = json!("too short");
        let (status, error) = send(&app(), Method::POST, "/api/v1/analyses", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(error["error"]["message"], "description too short");
    }

    #[tokio::test]
    async fn test_missing_title_is_validation_error() {
        let body = json!({
            "company": "Acme",
            "jobDescription": "We are looking for an engineer to work with Node.js, PostgreSQL and Docker."
        });
        let (status, error) = send(&app(), Method::POST, "/api/v1/analyses", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(error["error"]["message"], "job title required");
    }

    #[tokio::test]
    async fn test_unknown_analysis_is_404() {
        let app = app();
        let (status, _) = send(&app, Method::GET, "/api/v1/analyses/job_0_nope", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _) = send(&app, Method::DELETE, "/api/v1/analyses/job_0_nope", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_and_wipe() {
        let app = app();
        let (_, first) = send(&app, Method::POST, "/api/v1/analyses", Some(posting())).await;
        send(&app, Method::POST, "/api/v1/analyses", Some(posting())).await;

        let id = first["id"].as_str().unwrap();
        let (status, _) = send(&app, Method::DELETE, &format!("/api/v1/analyses/{id}"), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, wiped) = send(&app, Method::DELETE, "/api/v1/analyses", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(wiped["deleted"], 1);
    }

    #[tokio::test]
    async fn test_catalog_routes() {
        let app = app();
        let (status, all) = send(&app, Method::GET, "/api/v1/coding-questions", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(all.as_array().unwrap().len(), 6);

        let (_, medium) = send(&app, Method::GET, "/api/v1/coding-questions?difficulty=medium", None).await;
        assert!(medium
            .as_array()
            .unwrap()
            .iter()
            .all(|q| q["difficulty"] == "medium"));

        let (_, stats) = send(&app, Method::GET, "/api/v1/coding-questions/stats", None).await;
        assert_eq!(stats["total"], 6);

        let (status, q) = send(&app, Method::GET, "/api/v1/coding-questions/random?difficulty=hard", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(q["id"], "3");

        let (status, q) = send(&app, Method::GET, "/api/v1/coding-questions/6", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(q["category"], "Trees");

        let (status, _) = send(&app, Method::GET, "/api/v1/coding-questions/99", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
