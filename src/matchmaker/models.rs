use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};

use crate::json;

wire_enum! {
    /// Legacy matchmaking region
    pub enum Region {
        USCentral => "USCentral",
        USEast => "USEast",
        EUWest => "EUWest",
        Singapore => "Singapore",
        Japan => "Japan",
        Brazil => "Brazil",
        Australia => "Australia"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AuthUserRequest {
    #[serde(with = "json::string")]
    pub authorization_ticket: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AuthUserResponse {
    #[serde(deserialize_with = "json::or_default")]
    pub authorized: bool,

    #[serde(with = "json::string")]
    pub play_fab_id: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ItemInstance {
    #[serde(with = "json::string")]
    pub annotation: String,

    #[serde(with = "json::list")]
    pub bundle_contents: Vec<String>,

    #[serde(with = "json::string")]
    pub bundle_parent: String,

    #[serde(with = "json::string")]
    pub catalog_version: String,

    #[serde(deserialize_with = "json::or_default")]
    pub custom_data: HashMap<String, String>,

    #[serde(with = "json::string")]
    pub display_name: String,

    #[serde(with = "json::timestamp::optional")]
    pub expiration: Option<DateTime<Utc>>,

    #[serde(with = "json::string")]
    pub item_class: String,

    #[serde(with = "json::string")]
    pub item_id: String,

    #[serde(with = "json::string")]
    pub item_instance_id: String,

    #[serde(with = "json::timestamp::optional")]
    pub purchase_date: Option<DateTime<Utc>>,

    pub remaining_uses: Option<i32>,

    #[serde(with = "json::string")]
    pub unit_currency: String,

    #[serde(deserialize_with = "json::or_default")]
    pub unit_price: u32,

    pub uses_incremented_by: Option<i32>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PlayerJoinedRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(with = "json::string")]
    pub lobby_id: String,

    #[serde(with = "json::string")]
    pub play_fab_id: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PlayerJoinedResponse {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PlayerLeftRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(with = "json::string")]
    pub lobby_id: String,

    #[serde(with = "json::string")]
    pub play_fab_id: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PlayerLeftResponse {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct StartGameRequest {
    #[serde(with = "json::string")]
    pub build: String,

    #[serde(with = "json::string")]
    pub custom_command_line_data: String,

    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(with = "json::string")]
    pub external_matchmaker_event_endpoint: String,

    #[serde(with = "json::string")]
    pub game_mode: String,

    #[serde(with = "json::enumeration::required")]
    pub region: Region
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct StartGameResponse {
    #[serde(rename = "GameID", with = "json::string")]
    pub game_id: String,

    #[serde(rename = "ServerIPV4Address", with = "json::string")]
    pub server_ipv4_address: String,

    #[serde(rename = "ServerIPV6Address", with = "json::string")]
    pub server_ipv6_address: String,

    #[serde(deserialize_with = "json::or_default")]
    pub server_port: u32,

    #[serde(rename = "ServerPublicDNSName", with = "json::string")]
    pub server_public_dns_name: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct UserInfoRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(deserialize_with = "json::or_default")]
    pub min_catalog_version: i32,

    #[serde(with = "json::string")]
    pub play_fab_id: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct VirtualCurrencyRechargeTime {
    #[serde(deserialize_with = "json::or_default")]
    pub recharge_max: i32,

    #[serde(with = "json::timestamp")]
    pub recharge_time: DateTime<Utc>,

    #[serde(deserialize_with = "json::or_default")]
    pub seconds_to_recharge: i32
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct UserInfoResponse {
    #[serde(with = "json::list")]
    pub inventory: Vec<ItemInstance>,

    #[serde(deserialize_with = "json::or_default")]
    pub is_developer: bool,

    #[serde(with = "json::string")]
    pub play_fab_id: String,

    #[serde(with = "json::string")]
    pub steam_id: String,

    #[serde(with = "json::string")]
    pub title_display_name: String,

    #[serde(with = "json::string")]
    pub username: String,

    #[serde(deserialize_with = "json::or_default")]
    pub virtual_currency: HashMap<String, i32>,

    #[serde(deserialize_with = "json::or_default")]
    pub virtual_currency_recharge_times: HashMap<String, VirtualCurrencyRechargeTime>
}
