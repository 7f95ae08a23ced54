// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Result endpoints for the last completed analysis
//!
//! All three serve from the single session slot and return 404 until an
//! analysis has completed.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::vision::{draw_grid, draw_zone_highlights, encode_png};

/// GET /v1/analysis/download - the full analysis text as a plain-text file
pub async fn download_handler(State(state): State<AppState>) -> Result<Response, ApiError> {
    let guard = state.session.read().await;
    let session = guard.as_ref().ok_or(ApiError::NoAnalysis)?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"kitchen_analysis.txt\"",
            ),
        ],
        session.analysis.clone(),
    )
        .into_response())
}

/// GET /v1/analysis/grid - the last image with the 3x3 reference grid
pub async fn grid_handler(State(state): State<AppState>) -> Result<Response, ApiError> {
    let guard = state.session.read().await;
    let session = guard.as_ref().ok_or(ApiError::NoAnalysis)?;

    let rendered = draw_grid(&session.image);
    let png = encode_png(&rendered).map_err(|e| {
        warn!("Grid render failed: {}", e);
        ApiError::InternalError(format!("Failed to render grid overlay: {}", e))
    })?;

    Ok(([(header::CONTENT_TYPE, "image/png")], png).into_response())
}

/// GET /v1/analysis/annotated - the last image with detected zones highlighted
///
/// With no zones in the last analysis this is the plain image; the degraded
/// case renders without highlights rather than failing.
pub async fn annotated_handler(State(state): State<AppState>) -> Result<Response, ApiError> {
    let guard = state.session.read().await;
    let session = guard.as_ref().ok_or(ApiError::NoAnalysis)?;

    let rendered = draw_zone_highlights(&session.image, &session.zones);
    let png = encode_png(&rendered).map_err(|e| {
        warn!("Annotation render failed: {}", e);
        ApiError::InternalError(format!("Failed to render annotations: {}", e))
    })?;

    Ok(([(header::CONTENT_TYPE, "image/png")], png).into_response())
}
