// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Environment-based configuration

use std::env;
use thiserror::Error;

/// Default hosted VLM endpoint
const DEFAULT_ENDPOINT: &str = "https://api.mistral.ai";
/// Default vision model
const DEFAULT_MODEL: &str = "pixtral-12b-2409";
/// Default HTTP port
const DEFAULT_API_PORT: u16 = 8080;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("MISTRAL_API_KEY not found. Set it in the environment or a .env file.")]
    MissingApiKey,

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}

/// Runtime configuration for the analyzer node
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// API credential for the hosted VLM (required)
    pub api_key: String,
    /// Base URL of the hosted VLM service
    pub endpoint: String,
    /// Vision model identifier
    pub model: String,
    /// Port for the local HTTP server
    pub api_port: u16,
}

impl AnalyzerConfig {
    /// Load configuration from process environment
    ///
    /// A missing API key is fatal: no analysis is ever attempted without the
    /// credential, and the error is reported before the server starts.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var("MISTRAL_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let endpoint =
            env::var("VLM_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        let model = env::var("VLM_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let api_port = match env::var("API_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidValue("API_PORT", raw))?,
            Err(_) => DEFAULT_API_PORT,
        };

        Ok(Self {
            api_key,
            endpoint,
            model,
            api_port,
        })
    }
}
