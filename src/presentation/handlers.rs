// HTTP request handlers
use crate::application::dashboard_service::RenderSummary;
use crate::domain::chart::ChartConfig;
use crate::domain::error::RenderError;
use crate::domain::usage::UsageSamples;
use crate::infrastructure::http_response::{accepts_brotli, frame_response};
use crate::presentation::app_state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use std::sync::Arc;

const DASHBOARD_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>System Usage</title>
  <style>
    body { font-family: sans-serif; margin: 2rem; }
    .chart { max-width: 640px; margin-bottom: 2rem; }
    .chart img { width: 100%; }
  </style>
</head>
<body>
  <h1>System Usage</h1>
  <section class="chart">
    <h2>CPU Usage</h2>
    <img id="cpuChart" src="/surfaces/cpuChart" alt="CPU usage over time">
  </section>
  <section class="chart">
    <h2>Memory Usage</h2>
    <img id="memoryChart" src="/surfaces/memoryChart" alt="Memory usage over time">
  </section>
</body>
</html>
"#;

#[derive(Debug)]
pub enum ApiError {
    Render(RenderError),
    Body(JsonRejection),
    Internal(String),
}

impl From<RenderError> for ApiError {
    fn from(err: RenderError) -> Self {
        ApiError::Render(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Body(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Render(err) => {
                let status = match &err {
                    RenderError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
                    RenderError::SurfaceNotFound(_) => StatusCode::NOT_FOUND,
                    RenderError::RenderingLibrary(_) => StatusCode::INTERNAL_SERVER_ERROR,
                };
                (status, err.to_string())
            }
            ApiError::Body(rejection) => (rejection.status(), rejection.body_text()),
            ApiError::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            tracing::error!("Chart request failed: {}", message);
        } else {
            tracing::warn!("Chart request rejected: {}", message);
        }

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Dashboard page hosting both chart surfaces
pub async fn dashboard() -> Html<&'static str> {
    Html(DASHBOARD_PAGE)
}

/// Render the CPU and memory charts from the posted samples
pub async fn render_charts(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<UsageSamples>, JsonRejection>,
) -> Result<Json<RenderSummary>, ApiError> {
    let Json(samples) = payload?;
    let service = state.dashboard_service.clone();

    // Drawing is synchronous; keep it off the async workers
    let summary = tokio::task::spawn_blocking(move || service.render_usage(&samples))
        .await
        .map_err(|e| ApiError::Internal(format!("render task failed: {}", e)))??;

    Ok(Json(summary))
}

/// Chart configurations for the posted samples, without drawing
pub async fn chart_config(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<UsageSamples>, JsonRejection>,
) -> Result<Json<[ChartConfig; 2]>, ApiError> {
    let Json(samples) = payload?;
    Ok(Json(state.dashboard_service.chart_configs(&samples)?))
}

/// Latest frame drawn on a surface
pub async fn get_surface(
    Path(id): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    let Some(frame) = state.dashboard_service.latest_frame(&id) else {
        return (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": format!("no frame on surface {}", id) })),
        )
            .into_response();
    };

    match frame_response(frame, accepts_brotli(&headers)).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}
