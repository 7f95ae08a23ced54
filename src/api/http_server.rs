// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTTP server wiring and shared state

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;
use std::{net::SocketAddr, sync::Arc};
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};

use super::analyze::analyze_handler;
use super::errors::ApiError;
use super::results::{annotated_handler, download_handler, grid_handler};
use crate::config::AnalyzerConfig;
use crate::session::AnalysisSession;
use crate::vision::VlmClient;

/// Bundled single-page UI
const INDEX_HTML: &str = include_str!("../../static/index.html");

/// Shared state for all handlers
///
/// One session slot per process; a multi-user deployment gets isolation from
/// the hosting layer, not from here.
#[derive(Clone)]
pub struct AppState {
    pub vlm_client: Arc<VlmClient>,
    pub session: Arc<RwLock<Option<AnalysisSession>>>,
}

impl AppState {
    pub fn new(vlm_client: VlmClient) -> Self {
        Self {
            vlm_client: Arc::new(vlm_client),
            session: Arc::new(RwLock::new(None)),
        }
    }
}

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Single-page UI
        .route("/", get(index_handler))
        // Health check
        .route("/health", get(health_handler))
        // Analysis endpoint
        .route("/v1/analyze", post(analyze_handler))
        // Last-result surfaces
        .route("/v1/analysis/download", get(download_handler))
        .route("/v1/analysis/grid", get(grid_handler))
        .route("/v1/analysis/annotated", get(annotated_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Start the HTTP server and serve until shutdown
pub async fn start_server(config: &AnalyzerConfig, vlm_client: VlmClient) -> anyhow::Result<()> {
    let state = AppState::new(vlm_client);
    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.api_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("API server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    axum::response::Json(json!({
        "status": "ok",
        "model": state.vlm_client.model_name(),
    }))
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let error_response = self.to_response();

        (status, axum::response::Json(error_response)).into_response()
    }
}
