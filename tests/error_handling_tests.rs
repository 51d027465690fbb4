//! Error taxonomy tests for circle-sdk

use circle_sdk::{config, ApiError, CircleError, Client, TransportError};

#[test]
fn test_config_error() {
    let error = CircleError::config("API key is required");

    let error_msg = error.to_string();
    assert!(
        error_msg.contains("Configuration error"),
        "Error message MUST contain 'Configuration error' - actual: {}",
        error_msg
    );
    assert!(
        error_msg.contains("API key is required"),
        "Error message MUST contain the specific reason - actual: {}",
        error_msg
    );
}

#[test]
fn test_invalid_option_error() {
    let error = CircleError::invalid_option("Invalid idempotency key 'abc'");

    let error_msg = error.to_string();
    assert!(
        error_msg.contains("Invalid call option"),
        "Error message MUST contain 'Invalid call option' - actual: {}",
        error_msg
    );
    assert!(error_msg.contains("abc"));
    assert!(error.status().is_none());
    assert!(!error.is_retryable());
}

#[test]
fn test_invalid_input_from_serde() {
    let serde_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error = CircleError::from(serde_error);

    assert!(
        matches!(error, CircleError::InvalidInput { .. }),
        "serde errors MUST map to InvalidInput - actual: {:?}",
        error
    );
}

#[test]
fn test_api_error_display_is_code_and_message() {
    let mut api = ApiError::new(1077, "Payment amount is invalid");
    api.http_status = Some(400);
    let error = CircleError::from(api);

    assert_eq!(error.to_string(), "1077: Payment amount is invalid");
    assert_eq!(error.status(), Some(400));
    assert!(!error.is_retryable());
}

#[test]
fn test_rate_limit_is_retryable() {
    let mut api = ApiError::new(429, "too many requests");
    api.http_status = Some(429);
    assert!(CircleError::Api(api).is_retryable());
}

#[test]
fn test_transport_errors() {
    let canceled = CircleError::from(TransportError::Canceled);
    assert!(
        canceled.to_string().contains("request canceled"),
        "Canceled MUST say so - actual: {}",
        canceled
    );
    assert!(canceled.is_retryable());

    let expired = TransportError::DeadlineExceeded;
    assert!(expired.is_timeout());
    assert!(!TransportError::Canceled.is_timeout());
}

#[test]
fn test_malformed_response_keeps_body() {
    let error = CircleError::malformed_response("502 Bad Gateway", "expected value", "<html/>");

    let error_msg = error.to_string();
    assert!(
        error_msg.contains("502 Bad Gateway"),
        "Error message MUST contain the status line - actual: {}",
        error_msg
    );
    match error {
        CircleError::MalformedResponse { body, .. } => assert_eq!(body, "<html/>"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_api_error_serializes_without_status() {
    let mut api = ApiError::new(2, "Invalid entity.");
    api.http_status = Some(400);

    let json = serde_json::to_value(&api).unwrap();
    assert_eq!(json, serde_json::json!({"code": 2, "message": "Invalid entity."}));
}

#[test]
fn test_client_construction_failures() {
    let error = Client::new([config::with_api_key("k"), config::with_max_connections(0)])
        .unwrap_err();
    assert!(
        matches!(error, CircleError::Config { .. }),
        "zero connections MUST be a configuration error - actual: {:?}",
        error
    );

    let error = Client::new([config::with_api_key_from_env(
        "CIRCLE_SDK_ERROR_TEST_NEVER_SET",
    )])
    .unwrap_err();
    assert!(error.to_string().contains("CIRCLE_SDK_ERROR_TEST_NEVER_SET"));
}
