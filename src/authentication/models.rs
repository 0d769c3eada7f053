use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};

use crate::json;

wire_enum! {
    pub enum IdentifiedDeviceType {
        Unknown => "Unknown",
        XboxOne => "XboxOne",
        Scarlett => "Scarlett"
    }
}

wire_enum! {
    /// Service a player account is linked to
    pub enum LoginIdentityProvider {
        Unknown => "Unknown",
        PlayFab => "PlayFab",
        Custom => "Custom",
        GameCenter => "GameCenter",
        GooglePlay => "GooglePlay",
        Steam => "Steam",
        XBoxLive => "XBoxLive",
        PSN => "PSN",
        Kongregate => "Kongregate",
        Facebook => "Facebook",
        IOSDevice => "IOSDevice",
        AndroidDevice => "AndroidDevice",
        Twitch => "Twitch",
        WindowsHello => "WindowsHello",
        GameServer => "GameServer",
        CustomServer => "CustomServer",
        NintendoSwitch => "NintendoSwitch",
        FacebookInstantGames => "FacebookInstantGames",
        OpenIdConnect => "OpenIdConnect",
        Apple => "Apple",
        NintendoSwitchAccount => "NintendoSwitchAccount"
    }
}

/// Unique entity identifier
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct EntityKey {
    #[serde(with = "json::string")]
    pub id: String,

    #[serde(rename = "Type", with = "json::string")]
    pub r#type: String
}

/// Parent entities of an entity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct EntityLineage {
    #[serde(with = "json::string")]
    pub character_id: String,

    #[serde(with = "json::string")]
    pub group_id: String,

    #[serde(with = "json::string")]
    pub master_player_account_id: String,

    #[serde(with = "json::string")]
    pub namespace_id: String,

    #[serde(with = "json::string")]
    pub title_id: String,

    #[serde(with = "json::string")]
    pub title_player_account_id: String
}

/// Request entity token for the calling entity
///
/// If `entity` is not set then the token is issued for
/// the player, character or title of the used credentials.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetEntityTokenRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    pub entity: Option<EntityKey>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetEntityTokenResponse {
    pub entity: Option<EntityKey>,

    #[serde(with = "json::string")]
    pub entity_token: String,

    #[serde(with = "json::timestamp::optional")]
    pub token_expiration: Option<DateTime<Utc>>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ValidateEntityTokenRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(with = "json::string")]
    pub entity_token: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ValidateEntityTokenResponse {
    pub entity: Option<EntityKey>,

    #[serde(with = "json::enumeration")]
    pub identified_device_type: Option<IdentifiedDeviceType>,

    #[serde(with = "json::enumeration")]
    pub identity_provider: Option<LoginIdentityProvider>,

    #[serde(with = "json::string")]
    pub identity_provider_issued_id: String,

    pub lineage: Option<EntityLineage>
}
