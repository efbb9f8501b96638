//! Integration tests for the smoke checks against mock HTTP endpoints.

use std::time::{Duration, Instant};

use myai_smoke::checks::SmokeChecker;
use myai_smoke::config::SmokeConfig;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

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

fn test_config(web_url: &str, ollama_url: &str) -> SmokeConfig {
    SmokeConfig {
        web_url: web_url.to_string(),
        ollama_url: ollama_url.to_string(),
        model: "gemma3:270m".to_string(),
        web_markers: vec!["MyAI".to_string(), "Flutter".to_string()],
        web_timeout: Duration::from_secs(2),
        tags_timeout: Duration::from_secs(2),
        generate_timeout: Duration::from_secs(5),
    }
}

async fn mount_tags(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/api/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn all_checks_pass_against_healthy_stack() {
    let web = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("<html><title>MyAI</title></html>"),
        )
        .mount(&web)
        .await;

    let ollama = MockServer::start().await;
    mount_tags(
        &ollama,
        json!({"models": [{"name": "gemma3:270m", "size": 270000000}]}),
    )
    .await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .and(body_partial_json(
            json!({"model": "gemma3:270m", "stream": false}),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": "Paris is the capital of France."
        })))
        .mount(&ollama)
        .await;

    let checker = SmokeChecker::new(test_config(&web.uri(), &ollama.uri()));

    let web_result = checker.check_webapp().await;
    assert!(web_result.passed, "web app: {}", web_result.detail);

    let model_result = checker.check_model_service().await;
    assert!(model_result.passed, "models: {}", model_result.detail);
    assert!(
        model_result.detail.contains("270000000"),
        "size must be reported: {}",
        model_result.detail
    );

    let gen_result = checker
        .check_generation("What is the capital of France?", None)
        .await;
    assert!(gen_result.passed, "generation: {}", gen_result.detail);
    assert!(gen_result.latency_ms.is_some());
}

#[tokio::test]
async fn model_listing_without_target_fails() {
    let ollama = MockServer::start().await;
    mount_tags(
        &ollama,
        json!({"models": [{"name": "llama3:8b", "size": 4000000000i64}]}),
    )
    .await;

    let checker = SmokeChecker::new(test_config(&unreachable_base_url(), &ollama.uri()));
    let result = checker.check_model_service().await;

    assert!(!result.passed);
    assert!(result.detail.contains("not found"), "{}", result.detail);
}

#[tokio::test]
async fn model_listing_missing_models_field_fails() {
    let ollama = MockServer::start().await;
    mount_tags(&ollama, json!({})).await;

    let checker = SmokeChecker::new(test_config(&unreachable_base_url(), &ollama.uri()));
    let result = checker.check_model_service().await;

    assert!(!result.passed);
    assert!(result.detail.contains("models"), "{}", result.detail);
}

#[tokio::test]
async fn model_listing_malformed_body_fails() {
    let ollama = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&ollama)
        .await;

    let checker = SmokeChecker::new(test_config(&unreachable_base_url(), &ollama.uri()));
    let result = checker.check_model_service().await;

    assert!(!result.passed);
}

#[tokio::test]
async fn generation_http_500_fails_without_panic() {
    let ollama = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&ollama)
        .await;

    let checker = SmokeChecker::new(test_config(&unreachable_base_url(), &ollama.uri()));
    let result = checker.check_generation("hello", None).await;

    assert!(!result.passed);
    assert!(result.detail.contains("HTTP 500"), "{}", result.detail);
}

#[tokio::test]
async fn generation_missing_response_field_fails() {
    let ollama = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"done": true})))
        .mount(&ollama)
        .await;

    let checker = SmokeChecker::new(test_config(&unreachable_base_url(), &ollama.uri()));
    let result = checker.check_generation("hello", None).await;

    assert!(!result.passed);
    assert!(result.detail.contains("response"), "{}", result.detail);
}

#[tokio::test]
async fn generation_timeout_fails() {
    let ollama = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"response": "late"}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&ollama)
        .await;

    let mut config = test_config(&unreachable_base_url(), &ollama.uri());
    config.generate_timeout = Duration::from_secs(1);
    let checker = SmokeChecker::new(config);

    let result = checker.check_generation("hello", None).await;
    assert!(!result.passed);
    assert!(result.detail.contains("timed out"), "{}", result.detail);
}

#[tokio::test]
async fn webapp_connection_refused_fails_within_timeout() {
    let checker = SmokeChecker::new(test_config(
        &unreachable_base_url(),
        &unreachable_base_url(),
    ));

    let start = Instant::now();
    let result = checker.check_webapp().await;

    assert!(!result.passed);
    assert!(
        start.elapsed() < Duration::from_secs(4),
        "failure must surface within the timeout bound"
    );
}

#[tokio::test]
async fn webapp_http_error_fails() {
    let web = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&web)
        .await;

    let checker = SmokeChecker::new(test_config(&web.uri(), &unreachable_base_url()));
    let result = checker.check_webapp().await;

    assert!(!result.passed);
    assert!(result.detail.contains("HTTP 503"), "{}", result.detail);
}

#[tokio::test]
async fn webapp_marker_absent_passes_with_warning() {
    let web = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>plain page</html>"))
        .mount(&web)
        .await;

    let checker = SmokeChecker::new(test_config(&web.uri(), &unreachable_base_url()));
    let result = checker.check_webapp().await;

    assert!(result.passed, "marker absence must not fail the check");
    assert!(
        result.notes.iter().any(|n| n.contains("marker")),
        "warning note expected: {:?}",
        result.notes
    );
}

#[tokio::test]
async fn generation_expected_text_absent_passes_with_warning() {
    let ollama = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": "Your work authorization ends mid-December next year."
        })))
        .mount(&ollama)
        .await;

    let checker = SmokeChecker::new(test_config(&unreachable_base_url(), &ollama.uri()));
    let result = checker
        .check_generation("When does it expire?", Some("December 15, 2025"))
        .await;

    assert!(result.passed, "content mismatch must not fail the check");
    assert!(
        result.notes.iter().any(|n| n.contains("expected text")),
        "warning note expected: {:?}",
        result.notes
    );
}

#[tokio::test]
async fn generation_passes_regardless_of_exact_wording() {
    let ollama = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": "The capital city of France is Paris, of course."
        })))
        .mount(&ollama)
        .await;

    let checker = SmokeChecker::new(test_config(&unreachable_base_url(), &ollama.uri()));
    let result = checker
        .check_generation("What is the capital of France?", None)
        .await;

    assert!(result.passed, "{}", result.detail);
    assert!(result.detail.contains("answered in"), "{}", result.detail);
}
