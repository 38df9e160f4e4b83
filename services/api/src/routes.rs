use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use textgrade::error::{AppError, InputError};
use textgrade::{MatchMode, ScoreResult, TextAnalyzer};
use tracing::debug;

#[derive(Debug, Deserialize)]
pub(crate) struct AnalyzeRequest {
    pub(crate) text: String,
    #[serde(default)]
    pub(crate) match_mode: Option<MatchMode>,
}

#[derive(Debug, Serialize)]
pub(crate) struct AnalyzeResponse {
    pub(crate) analyzed_at: DateTime<Utc>,
    pub(crate) match_mode: MatchMode,
    pub(crate) result: ScoreResult,
}

pub(crate) fn router() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/analyze", post(analyze_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Grades the posted text. Blank text is rejected the same way the CLI rejects it.
pub(crate) async fn analyze_endpoint(
    Extension(analyzer): Extension<Arc<TextAnalyzer>>,
    Json(payload): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let AnalyzeRequest { text, match_mode } = payload;
    if text.trim().is_empty() {
        return Err(InputError::Empty.into());
    }

    let match_mode = match_mode.unwrap_or_else(|| analyzer.match_mode());
    let result = analyzer.with_match_mode(match_mode).analyze(&text);

    debug!(bytes = text.len(), final_score = result.final_score, "analyze request served");

    Ok(Json(AnalyzeResponse {
        analyzed_at: Utc::now(),
        match_mode,
        result,
    }))
}
