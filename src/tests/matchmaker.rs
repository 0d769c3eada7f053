use serde_json::json;

use crate::prelude::*;
use crate::matchmaker::{self, models::*};

use super::server::serve_once;

#[test]
pub fn test_auth_user() {
    let (settings, server) = serve_once(200, r#"{"code":200,"status":"OK","data":{"Authorized":true,"PlayFabId":"F00BA4"}}"#);

    let client = PlayFabClient::with_auth(settings, AuthContext::with_secret_key("secret"));

    let response = matchmaker::auth_user(&client, &AuthUserRequest {
        authorization_ticket: String::from("ticket")
    }).unwrap();

    let request = server.join().unwrap();

    assert!(request.starts_with("post /matchmaker/authuser "));
    assert!(request.contains("x-secretkey: secret"));
    assert!(!request.contains("x-entitytoken"));

    assert!(response.authorized);
    assert_eq!(response.play_fab_id, "F00BA4");
}

#[test]
pub fn test_matchmaker_requires_secret_key() {
    let client = PlayFabClient::with_auth(Settings::new("1A2B3"), AuthContext::with_entity_token("token"));

    let result = matchmaker::player_left(&client, &PlayerLeftRequest::default());

    assert!(matches!(result, Err(PlayFabError::MissingCredentials(AuthKind::SecretKey))));
}

#[test]
pub fn test_start_game_response() {
    let response = StartGameResponse::from_json(&json!({
        "GameID": "game-1",
        "ServerIPV4Address": "10.0.0.1",
        "ServerPort": 7777,
        "ServerPublicDNSName": "game-1.example.com"
    })).unwrap();

    assert_eq!(response.game_id, "game-1");
    assert_eq!(response.server_ipv4_address, "10.0.0.1");
    assert!(response.server_ipv6_address.is_empty());
    assert_eq!(response.server_port, 7777);
    assert_eq!(response.server_public_dns_name, "game-1.example.com");

    assert_eq!(response.to_json().unwrap(), json!({
        "GameID": "game-1",
        "ServerIPV4Address": "10.0.0.1",
        "ServerIPV6Address": null,
        "ServerPort": 7777,
        "ServerPublicDNSName": "game-1.example.com"
    }));
}

#[test]
pub fn test_user_info_response() {
    let response = UserInfoResponse::from_json(&json!({
        "PlayFabId": "F00BA4",
        "Username": "raider",
        "VirtualCurrency": { "GO": 150 },
        "Inventory": [
            { "ItemId": "sword", "ItemInstanceId": "i-1", "RemainingUses": null, "UnitPrice": 25 }
        ]
    })).unwrap();

    assert_eq!(response.virtual_currency["GO"], 150);
    assert_eq!(response.inventory[0].item_id, "sword");
    assert_eq!(response.inventory[0].remaining_uses, None);
    assert_eq!(response.inventory[0].unit_price, 25);
    assert!(!response.is_developer);
    assert!(response.virtual_currency_recharge_times.is_empty());
}

#[test]
pub fn test_start_game_request_region() {
    let request = StartGameRequest {
        build: String::from("build-1"),
        game_mode: String::from("ranked"),
        region: Region::EUWest,
        ..StartGameRequest::default()
    };

    let value = request.to_json().unwrap();

    assert_eq!(value["Region"], "EUWest");
    assert_eq!(StartGameRequest::from_json(&value).unwrap(), request);

    assert_eq!(StartGameRequest::default().to_json().unwrap()["Region"], "USCentral");
    assert_eq!(StartGameRequest::from_json(&json!({ "Region": "Moon" })).unwrap().region, Region::USCentral);
}
