// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Analyze endpoint
//!
//! POST /v1/analyze - submit an image, get back the model's analysis plus the
//! extracted box count and zone annotations.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::analyze_handler;
pub use request::AnalyzeRequest;
pub use response::{AnalyzeResponse, ZoneAnnotation};
