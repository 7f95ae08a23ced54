// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Analyze request types and validation

use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::vision::image_utils::MAX_IMAGE_SIZE;

/// Supported upload formats
const SUPPORTED_FORMATS: &[&str] = &["png", "jpg", "jpeg", "webp"];

/// Maximum accepted base64 payload: the 5MB byte cap plus base64 expansion
const MAX_ENCODED_SIZE: usize = MAX_IMAGE_SIZE / 3 * 4 + 4;

fn default_format() -> String {
    "jpg".to_string()
}

/// Request for delivery image analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    /// Base64-encoded image data
    #[serde(default)]
    pub image: Option<String>,

    /// Image format hint (png, jpg, jpeg, webp). The actual format is
    /// re-detected from magic bytes during decoding.
    #[serde(default = "default_format")]
    pub format: String,
}

impl AnalyzeRequest {
    /// Validate the analyze request
    pub fn validate(&self) -> Result<(), ApiError> {
        let image = self
            .image
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ApiError::ValidationError {
                field: "image".to_string(),
                message: "image is required".to_string(),
            })?;

        if image.len() > MAX_ENCODED_SIZE {
            return Err(ApiError::ValidationError {
                field: "image".to_string(),
                message: format!(
                    "image exceeds maximum size of {} bytes",
                    MAX_IMAGE_SIZE
                ),
            });
        }

        if !SUPPORTED_FORMATS.contains(&self.format.to_lowercase().as_str()) {
            return Err(ApiError::ValidationError {
                field: "format".to_string(),
                message: format!(
                    "unsupported format '{}', supported: {:?}",
                    self.format, SUPPORTED_FORMATS
                ),
            });
        }

        Ok(())
    }
}
