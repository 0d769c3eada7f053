use serde_json::json;

use crate::prelude::*;

fn invalid_params() -> ApiError {
    ApiError::from_json(&json!({
        "code": 400,
        "status": "BadRequest",
        "error": "InvalidParams",
        "errorCode": 1000,
        "errorMessage": "Invalid input parameters",
        "errorDetails": {
            "FunctionName": ["The FunctionName field is required."],
            "Entity": ["The Entity field is required.", "Entity type is invalid."]
        }
    })).unwrap()
}

#[test]
pub fn test_api_error_envelope() {
    let error = invalid_params();

    assert_eq!(error.http_code, 400);
    assert_eq!(error.http_status, "BadRequest");
    assert_eq!(error.error, "InvalidParams");
    assert_eq!(error.error_code, 1000);
    assert_eq!(error.kind(), Some(ErrorCode::InvalidParams));
    assert_eq!(error.retry_after_seconds, None);

    assert_eq!(error.to_string(), "PlayFab API error InvalidParams (1000): Invalid input parameters");
}

#[test]
pub fn test_api_error_report() {
    assert_eq!(invalid_params().report(), [
        "Invalid input parameters",
        "Entity: The Entity field is required., Entity type is invalid.",
        "FunctionName: The FunctionName field is required."
    ].join("\n"));

    let error = ApiError {
        error_message: String::from("Nope"),
        ..ApiError::default()
    };

    assert_eq!(error.report(), "Nope");
}

#[test]
pub fn test_api_error_unknown_name() {
    let error = ApiError::from_json(&json!({
        "code": 400,
        "error": "SomeBrandNewError",
        "errorCode": 99999,
        "errorMessage": null,
        "errorDetails": null
    })).unwrap();

    assert_eq!(error.kind(), None);
    assert_eq!(error.error_code, 99999);
    assert!(error.error_message.is_empty());
    assert!(error.error_details.is_empty());
}

#[test]
pub fn test_api_error_retryable() {
    assert!(!invalid_params().is_retryable());

    let throttled = ApiError::from_json(&json!({
        "code": 429,
        "status": "TooManyRequests",
        "error": "APIClientRequestRateLimitExceeded",
        "errorCode": 1342,
        "retryAfterSeconds": 3
    })).unwrap();

    assert_eq!(throttled.retry_after_seconds, Some(3));
    assert!(throttled.is_retryable());

    let unavailable = ApiError {
        http_code: 400,
        error: String::from("ServiceUnavailable"),
        ..ApiError::default()
    };

    assert!(unavailable.is_retryable());

    let gateway = ApiError {
        http_code: 502,
        ..ApiError::default()
    };

    assert!(gateway.is_retryable());
}

#[test]
pub fn test_playfab_error_accessors() {
    let error = PlayFabError::from(invalid_params());

    assert_eq!(error.api_error(), Some(&invalid_params()));
    assert_eq!(error.to_string(), invalid_params().to_string());

    assert!(PlayFabError::TitleIdMissing.api_error().is_none());

    assert_eq!(
        PlayFabError::MissingCredentials(AuthKind::SecretKey).to_string(),
        "Missing credentials for secret key authentication"
    );
}
