//! Smoke checks against the local MyAI stack
//!
//! Each check wraps one fallible HTTP probe. The probe returns
//! `Result<_, ProbeError>`; the check converts any error into a failed
//! `CheckResult` so nothing propagates past the check that produced it, and
//! no retry is attempted. Checks share one pooled `reqwest::Client` with
//! per-request timeouts.

pub mod generate;
pub mod models;
pub mod webapp;

pub use generate::GenerateRequest;
pub use models::{ModelEntry, ModelMatch};

use std::time::Instant;

use reqwest::Client;
use tracing::{debug, warn};

use crate::config::SmokeConfig;
use crate::report::CheckResult;

/// Runs the individual smoke checks over a shared HTTP client.
pub struct SmokeChecker {
    /// HTTPクライアント
    client: Client,
    /// Run configuration
    config: SmokeConfig,
}

impl SmokeChecker {
    /// Create a checker for the given configuration.
    pub fn new(config: SmokeConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Run configuration this checker was built with.
    pub fn config(&self) -> &SmokeConfig {
        &self.config
    }

    /// Check that the web application answers its root document.
    ///
    /// Passes on HTTP success. A body without any identifying marker still
    /// passes but carries a warning note.
    pub async fn check_webapp(&self) -> CheckResult {
        let start = Instant::now();
        let outcome =
            webapp::probe_webapp(&self.client, &self.config.web_url, self.config.web_timeout)
                .await;
        let latency_ms = start.elapsed().as_millis() as u64;

        match outcome {
            Ok(body) => {
                let result = match webapp::find_marker(&body, &self.config.web_markers) {
                    Some(marker) => {
                        debug!(marker, latency_ms, "web app check succeeded");
                        CheckResult::pass(
                            "web app",
                            format!("web app reachable ({} content detected)", marker),
                        )
                    }
                    None => {
                        warn!(
                            url = %self.config.web_url,
                            "web app reachable but body carries no identifying marker"
                        );
                        CheckResult::pass("web app", "web app reachable")
                            .with_note("⚠️  no identifying marker found in body")
                    }
                };
                result.with_latency(latency_ms)
            }
            Err(e) => {
                warn!(url = %self.config.web_url, error = %e, "web app check failed");
                CheckResult::fail("web app", format!("web app unreachable: {}", e))
                    .with_latency(latency_ms)
            }
        }
    }

    /// Check that the model service lists the target model.
    ///
    /// The detail line reports the matched entry's size and the listing size.
    pub async fn check_model_service(&self) -> CheckResult {
        let start = Instant::now();
        let outcome = models::probe_model_service(
            &self.client,
            &self.config.ollama_url,
            &self.config.model,
            self.config.tags_timeout,
        )
        .await;
        let latency_ms = start.elapsed().as_millis() as u64;

        match outcome {
            Ok(hit) => {
                debug!(model = %hit.name, total = hit.total, latency_ms, "model check succeeded");
                let size_part = match hit.size {
                    Some(size) => format!("size: {} bytes", size),
                    None => "size unknown".to_string(),
                };
                CheckResult::pass(
                    "model service",
                    format!("{} available ({}, {} models listed)", hit.name, size_part, hit.total),
                )
                .with_latency(latency_ms)
            }
            Err(e) => {
                warn!(url = %self.config.ollama_url, error = %e, "model check failed");
                CheckResult::fail("model service", format!("model service check failed: {}", e))
                    .with_latency(latency_ms)
            }
        }
    }

    /// Check that the generation endpoint answers a prompt.
    ///
    /// Passes on HTTP 200 with a parseable `response` field. When `expect` is
    /// given and the text is absent from the answer, the check still passes
    /// but carries a warning note.
    pub async fn check_generation(&self, prompt: &str, expect: Option<&str>) -> CheckResult {
        let request = GenerateRequest::new(self.config.model.clone(), prompt);
        let start = Instant::now();
        let outcome = generate::probe_generation(
            &self.client,
            &self.config.ollama_url,
            &request,
            self.config.generate_timeout,
        )
        .await;
        let elapsed = start.elapsed();
        let latency_ms = elapsed.as_millis() as u64;

        match outcome {
            Ok(response) => {
                debug!(latency_ms, "generation check succeeded");
                let mut result = CheckResult::pass(
                    "generation",
                    format!("generation answered in {:.2}s", elapsed.as_secs_f64()),
                )
                .with_note(format!("📝 Response: {}", generate::excerpt(&response, 200)))
                .with_latency(latency_ms);

                if let Some(expected) = expect {
                    if response.contains(expected) {
                        debug!(expected, "generation response contains the expected text");
                    } else {
                        warn!(expected, "generation response missing the expected text");
                        result = result.with_note(
                            "⚠️  response did not contain the expected text, but the API works",
                        );
                    }
                }
                result
            }
            Err(e) => {
                warn!(url = %self.config.ollama_url, error = %e, "generation check failed");
                CheckResult::fail("generation", format!("generation failed: {}", e))
                    .with_latency(latency_ms)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn unreachable_base_url() -> String {
        let listener =
            std::net::TcpListener::bind("127.0.0.1:0").expect("failed to reserve test port");
        let port = listener
            .local_addr()
            .expect("failed to read test port")
            .port();
        drop(listener);
        format!("http://127.0.0.1:{}", port)
    }

    fn test_config(web_url: String, ollama_url: String) -> SmokeConfig {
        SmokeConfig {
            web_url,
            ollama_url,
            model: "gemma3:270m".to_string(),
            web_markers: vec!["MyAI".to_string(), "Flutter".to_string()],
            web_timeout: Duration::from_secs(2),
            tags_timeout: Duration::from_secs(2),
            generate_timeout: Duration::from_secs(2),
        }
    }

    #[tokio::test]
    async fn connection_refused_becomes_failed_result() {
        let base = unreachable_base_url();
        let checker = SmokeChecker::new(test_config(base.clone(), base));

        let result = checker.check_webapp().await;
        assert!(!result.passed);
        assert!(result.detail.contains("unreachable"));
        assert!(result.latency_ms.is_some());
    }

    #[tokio::test]
    async fn marker_hit_is_reported_in_detail() {
        use wiremock::matchers::method;
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string("<html><title>MyAI</title></html>"),
            )
            .mount(&server)
            .await;

        let checker = SmokeChecker::new(test_config(server.uri(), unreachable_base_url()));
        let result = checker.check_webapp().await;

        assert!(result.passed);
        assert!(result.detail.contains("MyAI"));
        assert!(result.notes.is_empty());
    }
}
