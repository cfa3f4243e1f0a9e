//! Integration tests for the weather client using wiremock
//!
//! These tests verify the client's behavior against a mock HTTP server,
//! covering success payloads, upstream error codes, and malformed
//! responses.

use integration_weather::{OpenWeatherClient, OwmConfig, WeatherClient, WeatherError};
use secrecy::SecretString;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

/// Sample `/weather` response for testing
fn sample_current_response() -> serde_json::Value {
    serde_json::json!({
        "coord": {"lon": -0.1257, "lat": 51.5085},
        "weather": [{"id": 500, "main": "Rain", "description": "light rain", "icon": "10d"}],
        "main": {
            "temp": 9.64,
            "feels_like": 7.31,
            "temp_min": 8.2,
            "temp_max": 10.9,
            "pressure": 1012,
            "humidity": 81
        },
        "wind": {"speed": 4.12, "deg": 240},
        "dt": 1705320000,
        "name": "London",
        "cod": 200
    })
}

/// Sample `/forecast` response for testing (two days, noon entries included)
fn sample_forecast_response() -> serde_json::Value {
    serde_json::json!({
        "cod": "200",
        "cnt": 4,
        "list": [
            {"dt": 1705276800, "main": {"temp": 6.1}, "weather": [{"main": "Clouds", "description": "overcast clouds"}], "dt_txt": "2024-01-15 00:00:00"},
            {"dt": 1705320000, "main": {"temp": 9.6}, "weather": [{"main": "Rain", "description": "light rain"}], "dt_txt": "2024-01-15 12:00:00"},
            {"dt": 1705363200, "main": {"temp": 4.8}, "weather": [{"main": "Clouds", "description": "few clouds"}], "dt_txt": "2024-01-16 00:00:00"},
            {"dt": 1705406400, "main": {"temp": 7.2}, "weather": [{"main": "Clear", "description": "clear sky"}], "dt_txt": "2024-01-16 12:00:00"}
        ],
        "city": {"name": "London", "country": "GB"}
    })
}

/// Create a test client configured to use the mock server
///
/// # Panics
///
/// Panics if the client cannot be created (should not happen in tests).
fn create_test_client(mock_server: &MockServer) -> OpenWeatherClient {
    let config = OwmConfig {
        base_url: mock_server.uri(),
        api_key: SecretString::from("test-key"),
        timeout_secs: 5,
        units: "metric".to_string(),
    };
    #[allow(clippy::expect_used)]
    OpenWeatherClient::new(config).expect("Failed to create client")
}

/// Setup a mock for the given endpoint with the given response
async fn setup_mock(mock_server: &MockServer, endpoint: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(endpoint))
        .respond_with(response)
        .mount(mock_server)
        .await;
}

// ============================================================================
// Success scenarios
// ============================================================================

#[tokio::test]
async fn test_current_weather_success() {
    let mock_server = MockServer::start().await;

    setup_mock(
        &mock_server,
        "/weather",
        ResponseTemplate::new(200).set_body_json(sample_current_response()),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.current("London").await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");

    let weather = result.unwrap();
    assert!((weather.temperature - 9.64).abs() < 0.01);
    assert_eq!(weather.condition_main, "Rain");
    assert_eq!(weather.description, "light rain");
    assert_eq!(weather.humidity, 81);
    assert_eq!(weather.pressure, 1012);
    assert!((weather.wind_speed - 4.12).abs() < 0.01);
}

#[tokio::test]
async fn test_forecast_success() {
    let mock_server = MockServer::start().await;

    setup_mock(
        &mock_server,
        "/forecast",
        ResponseTemplate::new(200).set_body_json(sample_forecast_response()),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.forecast("London").await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");

    let samples = result.unwrap();
    assert_eq!(samples.len(), 4);
    assert!((samples[1].temperature - 9.6).abs() < 0.01);
    assert_eq!(samples[1].condition_main, "Rain");
    assert!(samples.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
}

#[tokio::test]
async fn test_health_check_success() {
    let mock_server = MockServer::start().await;

    setup_mock(
        &mock_server,
        "/weather",
        ResponseTemplate::new(200).set_body_json(sample_current_response()),
    )
    .await;

    let client = create_test_client(&mock_server);
    assert!(client.is_healthy().await, "Expected health check to succeed");
}

// ============================================================================
// Error handling scenarios
// ============================================================================

#[tokio::test]
async fn test_unknown_city_returns_not_found() {
    let mock_server = MockServer::start().await;

    setup_mock(
        &mock_server,
        "/weather",
        ResponseTemplate::new(404)
            .set_body_json(serde_json::json!({"cod": "404", "message": "city not found"})),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.current("Atlantis").await;

    match result {
        Err(WeatherError::CityNotFound(msg)) => {
            assert!(msg.contains("Atlantis"));
            assert!(msg.contains("city not found"));
        }
        other => panic!("Expected CityNotFound, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_rejected_key_returns_invalid_api_key() {
    let mock_server = MockServer::start().await;

    setup_mock(
        &mock_server,
        "/weather",
        ResponseTemplate::new(401).set_body_json(
            serde_json::json!({"cod": 401, "message": "Invalid API key."}),
        ),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.current("London").await;

    assert!(
        matches!(result, Err(WeatherError::InvalidApiKey)),
        "Expected InvalidApiKey, got: {result:?}"
    );
}

#[tokio::test]
async fn test_server_error_returns_service_unavailable() {
    let mock_server = MockServer::start().await;

    setup_mock(
        &mock_server,
        "/forecast",
        ResponseTemplate::new(500).set_body_string("Internal Server Error"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.forecast("London").await;

    assert!(
        matches!(result, Err(WeatherError::ServiceUnavailable(_))),
        "Expected ServiceUnavailable, got: {result:?}"
    );
}

#[tokio::test]
async fn test_rate_limit_error() {
    let mock_server = MockServer::start().await;

    setup_mock(
        &mock_server,
        "/weather",
        ResponseTemplate::new(429).set_body_string("Rate limit exceeded"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.current("London").await;

    assert!(
        matches!(result, Err(WeatherError::RateLimitExceeded)),
        "Expected RateLimitExceeded, got: {result:?}"
    );
}

#[tokio::test]
async fn test_invalid_json_response() {
    let mock_server = MockServer::start().await;

    setup_mock(
        &mock_server,
        "/weather",
        ResponseTemplate::new(200).set_body_string("not valid json"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.current("London").await;

    assert!(
        matches!(result, Err(WeatherError::ParseError(_))),
        "Expected ParseError, got: {result:?}"
    );
}

#[tokio::test]
async fn test_current_missing_main_is_parse_error() {
    let mock_server = MockServer::start().await;

    setup_mock(
        &mock_server,
        "/weather",
        ResponseTemplate::new(200)
            .set_body_json(serde_json::json!({"dt": 1705320000, "cod": 200})),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.current("London").await;

    assert!(
        matches!(result, Err(WeatherError::ParseError(_))),
        "Expected ParseError, got: {result:?}"
    );
}

#[tokio::test]
async fn test_forecast_missing_list_is_parse_error() {
    let mock_server = MockServer::start().await;

    setup_mock(
        &mock_server,
        "/forecast",
        ResponseTemplate::new(200).set_body_json(serde_json::json!({"cod": "200"})),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.forecast("London").await;

    assert!(
        matches!(result, Err(WeatherError::ParseError(_))),
        "Expected ParseError, got: {result:?}"
    );
}

#[tokio::test]
async fn test_health_check_fails_on_server_error() {
    let mock_server = MockServer::start().await;

    setup_mock(
        &mock_server,
        "/weather",
        ResponseTemplate::new(500).set_body_string("Internal Server Error"),
    )
    .await;

    let client = create_test_client(&mock_server);
    assert!(!client.is_healthy().await, "Expected health check to fail");
}

#[tokio::test]
async fn test_health_check_tolerates_auth_rejection() {
    let mock_server = MockServer::start().await;

    setup_mock(
        &mock_server,
        "/weather",
        ResponseTemplate::new(401).set_body_json(
            serde_json::json!({"cod": 401, "message": "Invalid API key."}),
        ),
    )
    .await;

    let client = create_test_client(&mock_server);
    assert!(
        client.is_healthy().await,
        "A reachable service with a rejected key is still up"
    );
}

// ============================================================================
// Query parameter verification
// ============================================================================

#[tokio::test]
async fn test_request_contains_correct_query_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "London"))
        .and(query_param("appid", "test-key"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_current_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.current("London").await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
}

#[tokio::test]
async fn test_forecast_uses_same_query_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("q", "Paris"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_forecast_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.forecast("Paris").await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
}
