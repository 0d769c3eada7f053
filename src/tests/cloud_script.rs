use serde_json::json;

use crate::prelude::*;
use crate::cloud_script::{self, models::*};

use super::server::serve_once;

#[test]
pub fn test_execute_function_request() {
    assert_eq!(ExecuteFunctionRequest::default().to_json().unwrap(), json!({
        "CustomTags": {},
        "Entity": null,
        "FunctionName": null,
        "FunctionParameter": null,
        "GeneratePlayStreamEvent": null
    }));

    let request = ExecuteFunctionRequest {
        function_name: String::from("GrantReward"),
        function_parameter: json!({ "reward": "gold", "amount": 100 }),
        generate_play_stream_event: Some(false),
        ..ExecuteFunctionRequest::default()
    };

    let value = request.to_json().unwrap();

    assert_eq!(value["FunctionName"], "GrantReward");
    assert_eq!(value["FunctionParameter"]["amount"], 100);
    assert_eq!(value["GeneratePlayStreamEvent"], false);

    assert_eq!(ExecuteFunctionRequest::from_json(&value).unwrap(), request);
}

#[test]
pub fn test_execute_cloud_script_result() {
    let result = ExecuteCloudScriptResult::from_json(&json!({
        "APIRequestsIssued": 2,
        "ExecutionTimeSeconds": 0.125,
        "FunctionName": "helloWorld",
        "FunctionResult": { "messageValue": "Hello world!" },
        "Logs": [
            { "Level": "Info", "Message": "Hello", "Data": null },
            { "Level": "Error", "Message": "Oops", "Data": { "code": 1 } }
        ],
        "MemoryConsumedBytes": 4096,
        "Revision": 12
    })).unwrap();

    assert_eq!(result.api_requests_issued, 2);
    assert_eq!(result.execution_time_seconds, 0.125);
    assert_eq!(result.function_result["messageValue"], "Hello world!");
    assert_eq!(result.logs.len(), 2);
    assert_eq!(result.logs[1].level, "Error");
    assert_eq!(result.logs[1].data, json!({ "code": 1 }));
    assert_eq!(result.memory_consumed_bytes, 4096);
    assert_eq!(result.revision, 12);
    assert_eq!(result.error, None);
    assert_eq!(result.logs_too_large, None);

    let encoded = result.to_json().unwrap();

    assert_eq!(encoded["APIRequestsIssued"], 2);
    assert_eq!(encoded["HttpRequestsIssued"], 0);
    assert!(encoded["Error"].is_null());
}

#[test]
pub fn test_player_profile_locations() {
    let profile = PlayerProfileModel::from_json(&json!({
        "PlayerId": "ABCDEF",
        "Created": "2023-11-20T08:15:30.250Z",
        "Locations": [
            { "City": "Berlin", "ContinentCode": "EU", "CountryCode": "DE", "Latitude": 52.52 },
            { "City": "Nowhere", "ContinentCode": "Atlantis", "CountryCode": "US" }
        ],
        "Origination": "Steam"
    })).unwrap();

    assert_eq!(profile.player_id, "ABCDEF");
    assert_eq!(profile.origination, Some(LoginIdentityProvider::Steam));
    assert_eq!(profile.created.map(|time| time.timestamp_millis()), Some(1700468130250));

    assert_eq!(profile.locations[0].continent_code, Some(ContinentCode::EU));
    assert_eq!(profile.locations[0].country_code, Some(CountryCode::DE));
    assert_eq!(profile.locations[0].latitude, Some(52.52));

    assert_eq!(profile.locations[1].continent_code, None);
    assert_eq!(profile.locations[1].country_code, Some(CountryCode::US));
    assert_eq!(profile.locations[1].longitude, None);
}

#[test]
pub fn test_execute_function() {
    let (settings, server) = serve_once(200, r#"{
        "code": 200,
        "status": "OK",
        "data": {
            "ExecutionTimeMilliseconds": 37,
            "FunctionName": "GrantReward",
            "FunctionResult": [1, 2, 3]
        }
    }"#);

    let client = PlayFabClient::with_auth(settings, AuthContext::with_entity_token("token"));

    let result = cloud_script::execute_function(&client, &ExecuteFunctionRequest {
        function_name: String::from("GrantReward"),
        ..ExecuteFunctionRequest::default()
    }).unwrap();

    let request = server.join().unwrap();

    assert!(request.starts_with("post /cloudscript/executefunction "));
    assert!(request.contains(r#""functionname":"grantreward""#));

    assert_eq!(result.execution_time_milliseconds, 37);
    assert_eq!(result.function_result, json!([1, 2, 3]));
    assert_eq!(result.function_result_too_large, None);
}
