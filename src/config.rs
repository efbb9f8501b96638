//! Configuration management via environment variables
//!
//! Provides helper functions for reading environment variables and the
//! `SmokeConfig` struct holding every knob a smoke run needs. Defaults match
//! the ports and model the MyAI stack ships with.

use std::time::Duration;

/// Default base URL of the web application
pub const DEFAULT_WEB_URL: &str = "http://localhost:8080";

/// Default base URL of the inference server
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";

/// Default target model name substring
pub const DEFAULT_MODEL: &str = "gemma3:270m";

/// Default timeout for the web app probe
pub const DEFAULT_WEB_TIMEOUT: Duration = Duration::from_secs(5);

/// Default timeout for the model listing probe
pub const DEFAULT_TAGS_TIMEOUT: Duration = Duration::from_secs(5);

/// Default timeout for generation requests (full suite)
pub const DEFAULT_GENERATE_TIMEOUT: Duration = Duration::from_secs(60);

/// Marker strings identifying the web app body
pub const DEFAULT_WEB_MARKERS: [&str; 2] = ["MyAI", "Flutter"];

/// Get an environment variable with a default value
///
/// # Arguments
/// * `name` - The environment variable name
/// * `default` - The default value to return if the variable is not set
pub fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Get an environment variable, parsing to a specific type
///
/// Returns the default if the variable is not set or parsing fails.
pub fn env_parse_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// Smoke run configuration
#[derive(Debug, Clone)]
pub struct SmokeConfig {
    /// Base URL of the web application
    pub web_url: String,
    /// Base URL of the Ollama-compatible inference server
    pub ollama_url: String,
    /// Substring a listed model name must contain
    pub model: String,
    /// Marker strings expected somewhere in the web app body
    pub web_markers: Vec<String>,
    /// Timeout for the web app probe
    pub web_timeout: Duration,
    /// Timeout for the model listing probe
    pub tags_timeout: Duration,
    /// Timeout for generation requests
    pub generate_timeout: Duration,
}

impl SmokeConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::with_generate_default(DEFAULT_GENERATE_TIMEOUT)
    }

    /// Load configuration from environment variables with a caller-supplied
    /// default for the generation timeout.
    ///
    /// The quick suite passes a shorter default here; an explicit
    /// `MYAI_SMOKE_GENERATE_TIMEOUT_SECS` still wins.
    pub fn with_generate_default(generate_default: Duration) -> Self {
        let web_markers = env_or("MYAI_SMOKE_WEB_MARKERS", &DEFAULT_WEB_MARKERS.join(","))
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Self {
            web_url: env_or("MYAI_SMOKE_WEB_URL", DEFAULT_WEB_URL),
            ollama_url: env_or("MYAI_SMOKE_OLLAMA_URL", DEFAULT_OLLAMA_URL),
            model: env_or("MYAI_SMOKE_MODEL", DEFAULT_MODEL),
            web_markers,
            web_timeout: Duration::from_secs(env_parse_or(
                "MYAI_SMOKE_WEB_TIMEOUT_SECS",
                DEFAULT_WEB_TIMEOUT.as_secs(),
            )),
            tags_timeout: Duration::from_secs(env_parse_or(
                "MYAI_SMOKE_TAGS_TIMEOUT_SECS",
                DEFAULT_TAGS_TIMEOUT.as_secs(),
            )),
            generate_timeout: Duration::from_secs(env_parse_or(
                "MYAI_SMOKE_GENERATE_TIMEOUT_SECS",
                generate_default.as_secs(),
            )),
        }
    }
}
