use chrono::{TimeZone, Utc};

use crate::prelude::*;
use crate::authentication::{self, models::*};

use super::server::serve_once;

#[test]
pub fn test_get_entity_token_request() {
    let request = GetEntityTokenRequest {
        entity: Some(EntityKey {
            id: String::from("1A2B3"),
            r#type: String::from("title")
        }),
        ..GetEntityTokenRequest::default()
    };

    assert_eq!(request.to_json_string().unwrap(), r#"{"CustomTags":{},"Entity":{"Id":"1A2B3","Type":"title"}}"#);
}

#[test]
pub fn test_get_entity_token_stores_credentials() {
    let (settings, server) = serve_once(200, r#"{
        "code": 200,
        "status": "OK",
        "data": {
            "EntityToken": "new-entity-token",
            "TokenExpiration": "2024-05-01T10:00:00.000Z",
            "Entity": { "Id": "1A2B3", "Type": "title", "TypeString": "title" }
        }
    }"#);

    let mut client = PlayFabClient::with_auth(settings, AuthContext::with_secret_key("secret"));

    let response = authentication::get_entity_token(&mut client, &GetEntityTokenRequest::default()).unwrap();

    let request = server.join().unwrap();

    assert!(request.starts_with("post /authentication/getentitytoken "));
    assert!(request.contains("x-secretkey: secret"));

    assert_eq!(response.entity_token, "new-entity-token");
    assert_eq!(response.token_expiration, Some(Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap()));

    assert!(client.auth().is_entity_logged_in());
    assert_eq!(client.auth().entity_id.as_deref(), Some("1A2B3"));
    assert_eq!(client.auth().entity_type.as_deref(), Some("title"));
    assert_eq!(client.auth().header(AuthKind::EntityToken), Some((HEADER_ENTITY_TOKEN, "new-entity-token")));

    client.forget_all_credentials();

    assert!(!client.auth().is_entity_logged_in());
}

#[test]
pub fn test_get_entity_token_requires_credentials() {
    let mut client = PlayFabClient::new(Settings::new("1A2B3"));

    let result = authentication::get_entity_token(&mut client, &GetEntityTokenRequest::default());

    assert!(matches!(result, Err(PlayFabError::MissingCredentials(AuthKind::Any))));
    assert!(!client.auth().is_entity_logged_in());
}

#[test]
pub fn test_validate_entity_token_response() {
    let response = ValidateEntityTokenResponse::from_json_str(r#"{
        "Entity": { "Id": "ABCDEF", "Type": "title_player_account" },
        "IdentifiedDeviceType": "Scarlett",
        "IdentityProvider": "SomeFutureProvider",
        "Lineage": {
            "MasterPlayerAccountId": "111",
            "TitleId": "1A2B3",
            "TitlePlayerAccountId": "ABCDEF"
        }
    }"#).unwrap();

    assert_eq!(response.identified_device_type, Some(IdentifiedDeviceType::Scarlett));
    assert_eq!(response.identity_provider, None);
    assert!(response.identity_provider_issued_id.is_empty());

    let lineage = response.lineage.unwrap();

    assert_eq!(lineage.title_id, "1A2B3");
    assert!(lineage.group_id.is_empty());
}
