// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod analyze;
pub mod errors;
pub mod http_server;
pub mod results;

pub use analyze::{analyze_handler, AnalyzeRequest, AnalyzeResponse, ZoneAnnotation};
pub use errors::{ApiError, ErrorResponse};
pub use http_server::{build_router, start_server, AppState};
pub use results::{annotated_handler, download_handler, grid_handler};
