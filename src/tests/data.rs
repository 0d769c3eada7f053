use serde_json::json;

use crate::prelude::*;
use crate::data::models::*;

#[test]
pub fn test_set_objects_request() {
    let request = SetObjectsRequest {
        entity: EntityKey {
            id: String::from("ABCDEF"),
            r#type: String::from("title_player_account")
        },
        objects: vec![
            SetObject {
                object_name: String::from("Inventory"),
                data_object: json!({ "slots": 12 }),
                ..SetObject::default()
            },
            SetObject {
                object_name: String::from("Stale"),
                delete_object: Some(true),
                ..SetObject::default()
            }
        ],
        ..SetObjectsRequest::default()
    };

    assert_eq!(request.to_json().unwrap(), json!({
        "CustomTags": {},
        "Entity": { "Id": "ABCDEF", "Type": "title_player_account" },
        "ExpectedProfileVersion": null,
        "Objects": [
            {
                "DataObject": { "slots": 12 },
                "DeleteObject": null,
                "EscapedDataObject": null,
                "ObjectName": "Inventory"
            },
            {
                "DataObject": null,
                "DeleteObject": true,
                "EscapedDataObject": null,
                "ObjectName": "Stale"
            }
        ]
    }));
}

#[test]
pub fn test_set_objects_response() {
    let response = SetObjectsResponse::from_json(&json!({
        "ProfileVersion": 5,
        "SetResults": [
            { "ObjectName": "Inventory", "SetResult": "Updated" },
            { "ObjectName": "Stale", "SetResult": "Deleted" },
            { "ObjectName": "Other", "SetResult": "Archived", "OperationReason": "Unknown" }
        ]
    })).unwrap();

    assert_eq!(response.profile_version, 5);

    let results = response.set_results.iter()
        .map(|result| result.set_result)
        .collect::<Vec<_>>();

    assert_eq!(results, [Some(OperationTypes::Updated), Some(OperationTypes::Deleted), None]);
    assert_eq!(response.set_results[2].operation_reason, "Unknown");
}

#[test]
pub fn test_get_objects_response() {
    let response = GetObjectsResponse::from_json(&json!({
        "Entity": { "Id": "ABCDEF", "Type": "title_player_account" },
        "ProfileVersion": 5,
        "Objects": {
            "Inventory": { "ObjectName": "Inventory", "DataObject": { "slots": 12 } },
            "Settings": { "ObjectName": "Settings", "EscapedDataObject": "{\"volume\":0.5}" }
        }
    })).unwrap();

    assert_eq!(response.objects.len(), 2);
    assert_eq!(response.objects["Inventory"].data_object["slots"], 12);
    assert!(response.objects["Inventory"].escaped_data_object.is_empty());
    assert_eq!(response.objects["Settings"].escaped_data_object, r#"{"volume":0.5}"#);
    assert!(response.objects["Settings"].data_object.is_null());

    assert_eq!(GetObjectsResponse::from_json(&json!({ "Objects": null })).unwrap(), GetObjectsResponse::default());
}
