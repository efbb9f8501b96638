//! Generation probe
//!
//! Sends a non-streaming prompt to `POST /api/generate` and returns the
//! generated text.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{ProbeError, ProbeResult};

/// Generation request body
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    /// Model identifier
    pub model: String,
    /// Prompt text
    pub prompt: String,
    /// Streaming flag; always false so the full answer arrives in one body
    pub stream: bool,
}

impl GenerateRequest {
    /// Build a non-streaming request.
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            stream: false,
        }
    }
}

/// Generation response body
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    /// Generated text
    response: Option<String>,
}

/// Send a generation request and return the generated text
///
/// # Errors
/// Fails on transport errors, timeouts, non-success statuses, unparseable
/// bodies, or a missing `response` field.
pub async fn probe_generation(
    client: &Client,
    base_url: &str,
    request: &GenerateRequest,
    timeout: Duration,
) -> ProbeResult<String> {
    let url = format!("{}/api/generate", base_url.trim_end_matches('/'));

    let response = client
        .post(&url)
        .json(request)
        .timeout(timeout)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(ProbeError::Status {
            status: status.as_u16(),
        });
    }

    let body: GenerateResponse = response.json().await.map_err(|e| {
        ProbeError::InvalidResponse(format!("failed to parse generate response: {}", e))
    })?;

    body.response
        .ok_or_else(|| ProbeError::InvalidResponse("missing `response` field".to_string()))
}

/// Shorten generated text to a single report-friendly line.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let flat = text.trim().replace('\n', " ");
    if flat.chars().count() <= max_chars {
        flat
    } else {
        let head: String = flat.chars().take(max_chars).collect();
        format!("{}...", head)
    }
}
