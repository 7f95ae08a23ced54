// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Analyze endpoint handler

use axum::{extract::State, Json};
use tracing::{debug, info, warn};

use super::request::AnalyzeRequest;
use super::response::AnalyzeResponse;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::mapper::{extract_box_count, extract_zones};
use crate::session::AnalysisSession;
use crate::vision::{decode_base64_image, format_to_mime};

/// POST /v1/analyze - Analyze a delivery image
///
/// Accepts a base64-encoded image, forwards it to the hosted vision model
/// with the fixed analysis prompt, and returns the model's text together with
/// the extracted box count and zone annotations.
///
/// # Errors
/// - 400 Bad Request: missing/oversized image, unsupported format
/// - 502 Bad Gateway: the call to the hosted model failed; the previous
///   analysis (if any) is left untouched
pub async fn analyze_handler(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    // 1. Validate request
    if let Err(e) = request.validate() {
        warn!("Analyze validation failed: {}", e);
        return Err(e);
    }

    // 2. Decode the upload; validate() guarantees image is present
    let image_data = request
        .image
        .as_deref()
        .ok_or_else(|| ApiError::InvalidRequest("image is required".to_string()))?;

    let (image, image_info) = decode_base64_image(image_data).map_err(|e| {
        warn!("Failed to decode image: {}", e);
        ApiError::InvalidRequest(format!("Invalid image: {}", e))
    })?;

    debug!(
        "Decoded image: {}x{}, {} bytes, {:?}",
        image_info.width, image_info.height, image_info.size_bytes, image_info.format
    );

    // 3. One best-effort call to the hosted model. On failure the prior
    //    session state stays as it was.
    let result = state
        .vlm_client
        .analyze(image_data, format_to_mime(image_info.format))
        .await
        .map_err(|e| {
            warn!("VLM analysis failed: {}", e);
            ApiError::Upstream(format!("Error analyzing image: {}", e))
        })?;

    // 4. Map the free text to a count and zones; misses are degraded
    //    results, never errors
    let box_count = extract_box_count(&result.text);
    let zones = extract_zones(&result.text);

    info!(
        "Analysis complete: count={:?}, {} zone(s), {} chars, {}ms (model: {})",
        box_count,
        zones.len(),
        result.text.len(),
        result.processing_time_ms,
        result.model
    );

    let response = AnalyzeResponse::new(
        result.text.clone(),
        box_count,
        &zones,
        image_info.width,
        image_info.height,
        result.processing_time_ms,
        &result.model,
    );

    // 5. Overwrite the single session slot now that the analysis succeeded
    let session = AnalysisSession {
        image,
        analysis: result.text,
        box_count,
        zones,
        model: result.model,
    };
    *state.session.write().await = Some(session);

    Ok(Json(response))
}
