//! The static fixture server (the original site's public folder).
//!
//! Serves `plants.json` and `blogs.json` from a directory on disk, plus a
//! health endpoint. The store crate's `FetchClient` points at this.

use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

#[derive(Clone)]
struct FixtureDir(Arc<PathBuf>);

/// Build the fixture-serving app over the given directory.
pub fn build_app(fixtures: PathBuf) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/plants.json", get(plants))
        .route("/blogs.json", get(blogs))
        .with_state(FixtureDir(Arc::new(fixtures)))
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn plants(State(dir): State<FixtureDir>) -> axum::response::Response {
    serve_json(&dir, "plants.json").await
}

async fn blogs(State(dir): State<FixtureDir>) -> axum::response::Response {
    serve_json(&dir, "blogs.json").await
}

/// Read a fixture file per request; the content is static but this keeps
/// edits to the files visible without a restart.
async fn serve_json(dir: &FixtureDir, file: &str) -> axum::response::Response {
    match tokio::fs::read(dir.0.join(file)).await {
        Ok(bytes) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            bytes,
        )
            .into_response(),
        Err(err) => {
            tracing::error!(%err, file, "fixture read failed");
            json_error(StatusCode::NOT_FOUND, "not_found", format!("{file} not found"))
        }
    }
}

fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
