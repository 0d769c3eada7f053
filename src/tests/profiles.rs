use chrono::{TimeZone, Utc};
use serde_json::json;

use crate::prelude::*;
use crate::profiles::models::*;

#[test]
pub fn test_entity_profile() {
    let response = GetEntityProfileResponse::from_json(&json!({
        "Profile": {
            "Entity": { "Id": "ABCDEF", "Type": "title_player_account" },
            "EntityChain": "title_player_account!1A2B3/ABCDEF/",
            "Created": "2022-06-01T00:00:00Z",
            "DisplayName": null,
            "Language": "en",
            "VersionNumber": 3,
            "Files": {
                "avatar.png": {
                    "Checksum": "abc",
                    "FileName": "avatar.png",
                    "LastModified": "2022-06-02T10:20:30.000Z",
                    "Size": 2048
                }
            },
            "Objects": {
                "Settings": { "ObjectName": "Settings", "DataObject": { "volume": 0.5 } }
            },
            "Statistics": {
                "Score": { "Name": "Score", "Value": 120, "Version": 1 }
            },
            "Permissions": [
                {
                    "Action": "Read",
                    "Effect": "Allow",
                    "Resource": "pfrn:data--*!*/Profile/*",
                    "Principal": "[SELF]",
                    "Condition": { "CallingEntityType": "title_player_account" }
                }
            ]
        }
    })).unwrap();

    let profile = response.profile.unwrap();

    assert_eq!(profile.entity.unwrap().id, "ABCDEF");
    assert_eq!(profile.created, Utc.with_ymd_and_hms(2022, 6, 1, 0, 0, 0).unwrap());
    assert!(profile.display_name.is_empty());
    assert_eq!(profile.language, "en");
    assert_eq!(profile.version_number, 3);

    assert_eq!(profile.files["avatar.png"].size, 2048);
    assert_eq!(profile.files["avatar.png"].last_modified, Utc.with_ymd_and_hms(2022, 6, 2, 10, 20, 30).unwrap());

    assert_eq!(profile.objects["Settings"].data_object, json!({ "volume": 0.5 }));

    assert_eq!(profile.statistics["Score"].value, Some(120));
    assert!(profile.statistics["Score"].child_statistics.is_empty());

    assert_eq!(profile.permissions[0].effect, EffectType::Allow);
    assert_eq!(profile.permissions[0].principal, json!("[SELF]"));
    assert_eq!(profile.permissions[0].condition["CallingEntityType"], "title_player_account");

    assert!(profile.lineage.is_none());
    assert!(profile.experiment_variants.is_empty());
}

#[test]
pub fn test_profiles_request() {
    let request = GetEntityProfilesRequest {
        data_as_object: Some(true),
        entities: vec![
            EntityKey { id: String::from("A"), r#type: String::from("title_player_account") },
            EntityKey { id: String::from("B"), r#type: String::from("title_player_account") }
        ],
        ..GetEntityProfilesRequest::default()
    };

    let value = request.to_json().unwrap();

    assert_eq!(value["DataAsObject"], true);
    assert_eq!(value["Entities"][1], json!({ "Id": "B", "Type": "title_player_account" }));

    let request = GetEntityProfilesRequest::default().to_json().unwrap();

    assert_eq!(request, json!({
        "CustomTags": {},
        "DataAsObject": null,
        "Entities": null
    }));
}

#[test]
pub fn test_permission_statement_effect() {
    let statement = EntityPermissionStatement::from_json(&json!({
        "Action": "Read",
        "Effect": "Deny",
        "Resource": "pfrn:data--*!*/Profile/Objects/*"
    })).unwrap();

    assert_eq!(statement.effect, EffectType::Deny);

    assert_eq!(statement.to_json().unwrap(), json!({
        "Action": "Read",
        "Comment": null,
        "Condition": null,
        "Effect": "Deny",
        "Principal": null,
        "Resource": "pfrn:data--*!*/Profile/Objects/*"
    }));

    let statement = EntityPermissionStatement::from_json(&json!({ "Action": "Write", "Effect": "Audit" })).unwrap();

    assert_eq!(statement.action, "Write");
    assert_eq!(statement.effect, EffectType::Allow);
}
