// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod config;
pub mod mapper;
pub mod session;
pub mod vision;

// Re-export main types
pub use api::{build_router, start_server, AnalyzeRequest, AnalyzeResponse, ApiError, AppState};
pub use config::{AnalyzerConfig, ConfigError};
pub use mapper::{extract_box_count, extract_zones, zone_to_region, Region, ZoneLabel};
pub use session::AnalysisSession;
pub use vision::{VlmAnalysisResult, VlmClient};
