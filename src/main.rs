// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{Context, Result};
use kitchen_vision_node::{api, AnalyzerConfig, VlmClient};
use std::env;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    println!("📦 Starting Kitchen Vision Node...\n");

    // Missing credential is fatal before any analysis is attempted
    let config = AnalyzerConfig::from_env().context("configuration error")?;

    println!("🧠 VLM endpoint: {}", config.endpoint);
    println!("🧠 VLM model:    {}", config.model);

    let vlm_client = VlmClient::new(&config.endpoint, &config.api_key, &config.model)?;

    // Best-effort reachability probe; the node still starts when it fails
    if vlm_client.health_check().await {
        println!("✅ VLM service reachable");
    } else {
        tracing::warn!("VLM service not reachable at startup; analysis calls may fail");
    }

    api::start_server(&config, vlm_client).await?;

    Ok(())
}
