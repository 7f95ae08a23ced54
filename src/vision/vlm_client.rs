// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Client for the hosted vision-language model via OpenAI-compatible API

use anyhow::{bail, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

// --- OpenAI-compatible serde structs ---

#[derive(serde::Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(serde::Serialize)]
struct ChatMessage {
    role: String,
    content: serde_json::Value,
}

#[derive(serde::Deserialize)]
struct ChatUsage {
    total_tokens: u32,
}

#[derive(serde::Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
    usage: Option<ChatUsage>,
}

#[derive(serde::Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(serde::Deserialize)]
struct ChatResponseMessage {
    content: String,
}

/// Result of one analysis round-trip
pub struct VlmAnalysisResult {
    pub text: String,
    pub model: String,
    pub processing_time_ms: u64,
    pub tokens_used: u32,
}

/// The fixed five-question delivery analysis prompt. Answers are requested in
/// French; box locations are requested as relative positions on the 9-zone
/// grid so the text-to-zone mapper can pick them up.
const ANALYSIS_PROMPT: &str = "Please make full sentences when answering to the following questions, and answer in French:

1. Describe the overall context of the picture and specify if the picture is taken inside or outside?

2. How many boxes do you count on this picture? Are there logos on the boxes, if yes, which ones? Are there damaged boxes? Can you read brands on the boxes? If yes, how many boxes have brands?

3. If there is a box with \"fragile\" (or icon of a wine glass), is there a box on top?

4. If there is a box with arrows on it, are the arrows positioned vertically?

5. Is there a box that could contain a worksheet for a kitchen? If yes, is it stored on the side which is not protected by cardboard?

IMPORTANT: For bounding box detection, please provide coordinates as well. For each box you identify, if you can estimate its location, describe it using relative position (top-left, top-center, top-right, middle-left, center, middle-right, bottom-left, bottom-center, bottom-right) and describe the approximate size (small, medium, large).

Please structure your response clearly with numbered answers corresponding to each question.";

/// Client for the hosted vision-language model
pub struct VlmClient {
    client: Client,
    endpoint: String,
    api_key: String,
    model_name: String,
}

impl VlmClient {
    /// Create a new VLM client
    pub fn new(endpoint: &str, api_key: &str, model_name: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()?;

        let endpoint = endpoint.trim_end_matches('/').to_string();
        info!(
            "VLM client configured: endpoint={}, model={}",
            endpoint, model_name
        );

        Ok(Self {
            client,
            endpoint,
            api_key: api_key.to_string(),
            model_name: model_name.to_string(),
        })
    }

    /// Get the model name
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Check if the hosted service is reachable with the configured key
    pub async fn health_check(&self) -> bool {
        match self
            .client
            .get(format!("{}/v1/models", self.endpoint))
            .bearer_auth(&self.api_key)
            .send()
            .await
        {
            Ok(resp) => resp.status().is_success(),
            Err(e) => {
                debug!("VLM health check failed: {}", e);
                false
            }
        }
    }

    /// Run the delivery analysis prompt against an image
    ///
    /// One best-effort call, no retry. Transport and authentication failures
    /// surface as errors; the caller reports them and keeps its prior state.
    pub async fn analyze(&self, base64_image: &str, mime: &str) -> Result<VlmAnalysisResult> {
        let start = std::time::Instant::now();
        let data_url = format!("data:{};base64,{}", mime, base64_image);

        let request = ChatRequest {
            model: self.model_name.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: serde_json::json!([
                    {"type": "image_url", "image_url": {"url": data_url}},
                    {"type": "text", "text": ANALYSIS_PROMPT}
                ]),
            }],
        };

        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.endpoint))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!("VLM request failed with status {}: {}", status, body);
        }

        let chat_response: ChatResponse = response.json().await?;
        let text = chat_response
            .choices
            .first()
            .map(|c| c.message.content.clone())
            .unwrap_or_default();
        let tokens_used = chat_response.usage.map(|u| u.total_tokens).unwrap_or(0);

        debug!(
            "VLM analysis complete: {} chars, {} tokens",
            text.len(),
            tokens_used
        );

        Ok(VlmAnalysisResult {
            text,
            model: self.model_name.clone(),
            processing_time_ms: start.elapsed().as_millis() as u64,
            tokens_used,
        })
    }
}
