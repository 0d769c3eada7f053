use serde_json::{json, Value};

use crate::prelude::*;
use crate::client::parse_response;

use super::server::serve_once;

#[test]
pub fn test_parse_success() {
    let body = br#"{"code":200,"status":"OK","data":{"Answer":42}}"#;

    assert_eq!(parse_response::<Value>(200, body).unwrap(), json!({ "Answer": 42 }));
}

#[test]
pub fn test_parse_success_without_data() {
    assert_eq!(parse_response::<Value>(200, br#"{"code":200,"status":"OK","data":null}"#).unwrap(), Value::Null);
    assert_eq!(parse_response::<Value>(200, br#"{"code":200,"status":"OK"}"#).unwrap(), Value::Null);
}

#[test]
pub fn test_parse_error_envelope() {
    // X-ReportErrorAsSuccess makes the server respond with 200
    let body = br#"{
        "code": 400,
        "status": "BadRequest",
        "error": "NotAuthenticated",
        "errorCode": 1074,
        "errorMessage": "This API method does not allow anonymous callers."
    }"#;

    let error = parse_response::<Value>(200, body).unwrap_err();
    let error = error.api_error().unwrap();

    assert_eq!(error.http_code, 400);
    assert_eq!(error.kind(), Some(ErrorCode::NotAuthenticated));
    assert_eq!(error.error_code, 1074);
}

#[test]
pub fn test_parse_error_without_code() {
    let error = parse_response::<Value>(401, br#"{"error":"EntityTokenExpired","errorCode":1335}"#).unwrap_err();

    assert_eq!(error.api_error().map(|error| error.http_code), Some(401));
    assert_eq!(error.api_error().and_then(ApiError::kind), Some(ErrorCode::EntityTokenExpired));
}

#[test]
pub fn test_parse_non_json() {
    match parse_response::<Value>(503, b"Service Unavailable") {
        Err(PlayFabError::HttpStatus { status, body }) => {
            assert_eq!(status, 503);
            assert_eq!(body, "Service Unavailable");
        }

        result => panic!("Unexpected result: {result:?}")
    }

    assert!(matches!(parse_response::<Value>(200, b"<html>"), Err(PlayFabError::Json(_))));
}

#[test]
pub fn test_missing_credentials() {
    let client = PlayFabClient::new(Settings::new("1A2B3"));

    let result = client.post::<_, Value>("/Group/GetGroup", AuthKind::EntityToken, &json!({}));

    assert!(matches!(result, Err(PlayFabError::MissingCredentials(AuthKind::EntityToken))));

    let client = PlayFabClient::with_auth(Settings::default(), AuthContext::with_entity_token("token"));

    let result = client.post::<_, Value>("/Group/GetGroup", AuthKind::EntityToken, &json!({}));

    assert!(matches!(result, Err(PlayFabError::TitleIdMissing)));
}

#[test]
pub fn test_post() {
    let (settings, server) = serve_once(200, r#"{"code":200,"status":"OK","data":{"Echo":"pong"}}"#);

    let client = PlayFabClient::with_auth(settings, AuthContext::with_entity_token("entity-token"));

    let response = client.post::<_, Value>("/Test/Ping", AuthKind::EntityToken, &json!({ "Message": "ping" })).unwrap();

    assert_eq!(response, json!({ "Echo": "pong" }));

    let request = server.join().unwrap();

    assert!(request.starts_with("post /test/ping http/1.1"));
    assert!(request.contains("content-type: application/json"));
    assert!(request.contains("x-playfabsdk: playfabrustsdk-"));
    assert!(request.contains("x-reporterrorassuccess: true"));
    assert!(request.contains("x-entitytoken: entity-token"));
    assert!(request.ends_with(r#"{"message":"ping"}"#));
}

#[test]
pub fn test_post_api_error() {
    let (settings, server) = serve_once(400, r#"{"code":400,"status":"BadRequest","error":"InvalidParams","errorCode":1000,"errorMessage":"Invalid input parameters","errorDetails":{"QueueName":["The QueueName field is required."]}}"#);

    let client = PlayFabClient::with_auth(settings, AuthContext::with_secret_key("secret"));

    let error = client.post::<_, Value>("/Test/Fail", AuthKind::SecretKey, &json!({})).unwrap_err();

    let request = server.join().unwrap();

    assert!(request.contains("x-secretkey: secret"));

    let error = error.api_error().unwrap();

    assert_eq!(error.http_code, 400);
    assert_eq!(error.kind(), Some(ErrorCode::InvalidParams));
    assert_eq!(error.report(), "Invalid input parameters\nQueueName: The QueueName field is required.");
}
