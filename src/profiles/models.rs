use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};
use serde_json::Value;

use crate::json;

wire_enum! {
    pub enum EffectType {
        Allow => "Allow",
        Deny => "Deny"
    }
}

wire_enum! {
    /// Result of an object write
    pub enum OperationTypes {
        Created => "Created",
        Updated => "Updated",
        Deleted => "Deleted",
        None => "None"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct EntityDataObject {
    pub data_object: Value,

    #[serde(with = "json::string")]
    pub escaped_data_object: String,

    #[serde(with = "json::string")]
    pub object_name: String
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

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct EntityPermissionStatement {
    #[serde(with = "json::string")]
    pub action: String,

    #[serde(with = "json::string")]
    pub comment: String,

    pub condition: Value,

    #[serde(with = "json::enumeration::required")]
    pub effect: EffectType,

    pub principal: Value,

    #[serde(with = "json::string")]
    pub resource: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct EntityProfileFileMetadata {
    #[serde(with = "json::string")]
    pub checksum: String,

    #[serde(with = "json::string")]
    pub file_name: String,

    #[serde(with = "json::timestamp")]
    pub last_modified: DateTime<Utc>,

    #[serde(deserialize_with = "json::or_default")]
    pub size: i32
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct EntityStatisticChildValue {
    #[serde(with = "json::string")]
    pub child_name: String,

    #[serde(with = "json::string")]
    pub metadata: String,

    #[serde(deserialize_with = "json::or_default")]
    pub value: i32
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct EntityStatisticValue {
    #[serde(deserialize_with = "json::or_default")]
    pub child_statistics: HashMap<String, EntityStatisticChildValue>,

    #[serde(with = "json::string")]
    pub metadata: String,

    #[serde(with = "json::string")]
    pub name: String,

    pub value: Option<i32>,

    #[serde(deserialize_with = "json::or_default")]
    pub version: i32
}

/// Full entity profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct EntityProfileBody {
    #[serde(with = "json::string")]
    pub avatar_url: String,

    #[serde(with = "json::timestamp")]
    pub created: DateTime<Utc>,

    #[serde(with = "json::string")]
    pub display_name: String,

    pub entity: Option<EntityKey>,

    #[serde(with = "json::string")]
    pub entity_chain: String,

    #[serde(with = "json::list")]
    pub experiment_variants: Vec<String>,

    #[serde(deserialize_with = "json::or_default")]
    pub files: HashMap<String, EntityProfileFileMetadata>,

    #[serde(with = "json::string")]
    pub language: String,

    #[serde(with = "json::string")]
    pub leaderboard_metadata: String,

    pub lineage: Option<EntityLineage>,

    #[serde(deserialize_with = "json::or_default")]
    pub objects: HashMap<String, EntityDataObject>,

    #[serde(with = "json::list")]
    pub permissions: Vec<EntityPermissionStatement>,

    #[serde(deserialize_with = "json::or_default")]
    pub statistics: HashMap<String, EntityStatisticValue>,

    #[serde(deserialize_with = "json::or_default")]
    pub version_number: i32
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetEntityProfileRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    pub data_as_object: Option<bool>,
    pub entity: Option<EntityKey>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetEntityProfileResponse {
    pub profile: Option<EntityProfileBody>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetEntityProfilesRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    pub data_as_object: Option<bool>,

    #[serde(with = "json::list")]
    pub entities: Vec<EntityKey>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetEntityProfilesResponse {
    #[serde(with = "json::list")]
    pub profiles: Vec<EntityProfileBody>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetGlobalPolicyRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetGlobalPolicyResponse {
    #[serde(with = "json::list")]
    pub permissions: Vec<EntityPermissionStatement>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetTitlePlayersFromMasterPlayerAccountIdsRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(with = "json::list")]
    pub master_player_account_ids: Vec<String>,

    #[serde(with = "json::string")]
    pub title_id: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetTitlePlayersFromMasterPlayerAccountIdsResponse {
    #[serde(with = "json::string")]
    pub title_id: String,

    #[serde(deserialize_with = "json::or_default")]
    pub title_player_accounts: HashMap<String, EntityKey>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SetEntityProfilePolicyRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(deserialize_with = "json::or_default")]
    pub entity: EntityKey,

    #[serde(with = "json::list")]
    pub statements: Vec<EntityPermissionStatement>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SetEntityProfilePolicyResponse {
    #[serde(with = "json::list")]
    pub permissions: Vec<EntityPermissionStatement>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SetGlobalPolicyRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(with = "json::list")]
    pub permissions: Vec<EntityPermissionStatement>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SetGlobalPolicyResponse {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SetProfileLanguageRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    pub entity: Option<EntityKey>,
    pub expected_version: Option<i32>,

    #[serde(with = "json::string")]
    pub language: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SetProfileLanguageResponse {
    #[serde(with = "json::enumeration")]
    pub operation_result: Option<OperationTypes>,

    pub version_number: Option<i32>
}
