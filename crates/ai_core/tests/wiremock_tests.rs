//! Integration tests for the Ollama inference engine using WireMock
//!
//! These tests mock the Ollama HTTP API to verify client behavior without
//! requiring an actual Ollama server.

use ai_core::{
    InferenceConfig, InferenceEngine, InferenceError, InferenceRequest, OllamaInferenceEngine,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_partial_json, method, path},
};

fn config_for_mock(base_url: &str) -> InferenceConfig {
    InferenceConfig {
        base_url: base_url.to_string(),
        default_model: "test-model".to_string(),
        timeout_ms: 5000,
        ..InferenceConfig::default()
    }
}

/// Sample Ollama chat success response
fn chat_success_response() -> serde_json::Value {
    serde_json::json!({
        "model": "test-model",
        "message": {
            "role": "assistant",
            "content": "It is a mild day with light rain, so take an umbrella."
        },
        "done": true,
        "prompt_eval_count": 42,
        "eval_count": 17
    })
}

/// Sample Ollama models list response
fn models_list_response() -> serde_json::Value {
    serde_json::json!({
        "models": [
            {"name": "qwen2.5-1.5b-instruct"},
            {"name": "llama3.2-1b-instruct"}
        ]
    })
}

#[tokio::test]
async fn generate_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_success_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let engine = OllamaInferenceEngine::new(config_for_mock(&mock_server.uri()))
        .expect("Failed to create engine");

    let response = engine
        .generate(InferenceRequest::simple("Describe the weather"))
        .await
        .expect("Expected success");

    assert_eq!(response.model, "test-model");
    assert!(response.content.contains("umbrella"));
    assert_eq!(response.finish_reason.as_deref(), Some("stop"));

    let usage = response.usage.expect("Expected token usage");
    assert_eq!(usage.prompt_tokens, 42);
    assert_eq!(usage.completion_tokens, 17);
    assert_eq!(usage.total_tokens, 59);
}

#[tokio::test]
async fn generate_sends_default_model_and_options() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(body_partial_json(serde_json::json!({
            "model": "test-model",
            "stream": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_success_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let engine = OllamaInferenceEngine::new(config_for_mock(&mock_server.uri()))
        .expect("Failed to create engine");

    let result = engine.generate(InferenceRequest::simple("hi")).await;
    assert!(result.is_ok(), "Expected success, got: {result:?}");
}

#[tokio::test]
async fn generate_with_system_prompt_sends_both_messages() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(body_partial_json(serde_json::json!({
            "messages": [
                {"role": "system", "content": "You explain weather simply."},
                {"role": "user", "content": "It is raining."}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_success_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let engine = OllamaInferenceEngine::new(config_for_mock(&mock_server.uri()))
        .expect("Failed to create engine");

    let request = InferenceRequest::with_system("You explain weather simply.", "It is raining.");
    let result = engine.generate(request).await;
    assert!(result.is_ok(), "Expected success, got: {result:?}");
}

#[tokio::test]
async fn generate_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(500).set_body_string("model crashed"))
        .mount(&mock_server)
        .await;

    let engine = OllamaInferenceEngine::new(config_for_mock(&mock_server.uri()))
        .expect("Failed to create engine");

    let result = engine.generate(InferenceRequest::simple("hi")).await;
    assert!(
        matches!(result, Err(InferenceError::ServerError(_))),
        "Expected ServerError, got: {result:?}"
    );
}

#[tokio::test]
async fn generate_invalid_response_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let engine = OllamaInferenceEngine::new(config_for_mock(&mock_server.uri()))
        .expect("Failed to create engine");

    let result = engine.generate(InferenceRequest::simple("hi")).await;
    assert!(
        matches!(result, Err(InferenceError::InvalidResponse(_))),
        "Expected InvalidResponse, got: {result:?}"
    );
}

#[tokio::test]
async fn list_models_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tags"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let engine = OllamaInferenceEngine::new(config_for_mock(&mock_server.uri()))
        .expect("Failed to create engine");

    let result = engine.list_models().await;
    assert!(
        matches!(result, Err(InferenceError::ServerError(_))),
        "Expected ServerError, got: {result:?}"
    );
}

#[tokio::test]
async fn list_models_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(models_list_response()))
        .mount(&mock_server)
        .await;

    let engine = OllamaInferenceEngine::new(config_for_mock(&mock_server.uri()))
        .expect("Failed to create engine");

    let models = engine.list_models().await.expect("Expected success");
    assert_eq!(models.len(), 2);
    assert!(models.contains(&"qwen2.5-1.5b-instruct".to_string()));
}
