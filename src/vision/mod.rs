// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Vision plumbing for the analyzer
//!
//! This module provides:
//! - Image decoding and validation for uploads
//! - The client for the hosted vision-language model
//! - Grid and zone-highlight overlay rendering
//!
//! All image understanding happens in the hosted model; nothing here runs
//! local inference.

pub mod image_utils;
pub mod overlay;
pub mod vlm_client;

pub use image_utils::{
    decode_base64_image, decode_image_bytes, detect_format, format_to_mime, ImageError, ImageInfo,
};
pub use overlay::{draw_grid, draw_zone_highlights, encode_png};
pub use vlm_client::{VlmAnalysisResult, VlmClient};
