//! Model listing probe
//!
//! Ollama-compatible servers expose `GET /api/tags` returning the locally
//! available models in Ollama-specific format.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::error::{ProbeError, ProbeResult};

/// Tags response structure
#[derive(Debug, Deserialize)]
struct TagsResponse {
    /// List of available models
    models: Option<Vec<ModelEntry>>,
}

/// Listed model info (minimal)
#[derive(Debug, Deserialize)]
pub struct ModelEntry {
    /// Model name (e.g., "gemma3:270m")
    pub name: String,
    /// Model size in bytes
    #[serde(default)]
    pub size: Option<i64>,
}

/// Outcome of a successful model listing probe
#[derive(Debug, Clone)]
pub struct ModelMatch {
    /// Full name of the matched entry
    pub name: String,
    /// Size of the matched entry in bytes, when reported
    pub size: Option<i64>,
    /// Total number of models the endpoint listed
    pub total: usize,
}

/// Query `GET /api/tags` and search the listing for the target model
///
/// # Arguments
/// * `client` - HTTP client
/// * `base_url` - Inference server base URL
/// * `model` - Substring a listed model name must contain
/// * `timeout` - Request deadline
///
/// # Errors
/// Fails on transport errors, non-success statuses, unparseable bodies, a
/// missing `models` field, or when no entry matches the target substring.
pub async fn probe_model_service(
    client: &Client,
    base_url: &str,
    model: &str,
    timeout: Duration,
) -> ProbeResult<ModelMatch> {
    let url = format!("{}/api/tags", base_url.trim_end_matches('/'));

    let response = client.get(&url).timeout(timeout).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(ProbeError::Status {
            status: status.as_u16(),
        });
    }

    let tags: TagsResponse = response.json().await.map_err(|e| {
        ProbeError::InvalidResponse(format!("failed to parse tags response: {}", e))
    })?;

    let models = tags
        .models
        .ok_or_else(|| ProbeError::InvalidResponse("missing `models` field".to_string()))?;

    let total = models.len();
    match models.into_iter().find(|m| m.name.contains(model)) {
        Some(entry) => Ok(ModelMatch {
            name: entry.name,
            size: entry.size,
            total,
        }),
        None => Err(ProbeError::ModelNotFound {
            model: model.to_string(),
            available: total,
        }),
    }
}
