//! File and object storage models

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};
use serde_json::Value;

use crate::json;

wire_enum! {
    /// Result of an object write
    pub enum OperationTypes {
        Created => "Created",
        Updated => "Updated",
        Deleted => "Deleted",
        None => "None"
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

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AbortFileUploadsRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(deserialize_with = "json::or_default")]
    pub entity: EntityKey,

    #[serde(with = "json::list")]
    pub file_names: Vec<String>,

    pub profile_version: Option<i32>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AbortFileUploadsResponse {
    pub entity: Option<EntityKey>,

    #[serde(deserialize_with = "json::or_default")]
    pub profile_version: i32
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DeleteFilesRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(deserialize_with = "json::or_default")]
    pub entity: EntityKey,

    #[serde(with = "json::list")]
    pub file_names: Vec<String>,

    pub profile_version: Option<i32>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DeleteFilesResponse {
    pub entity: Option<EntityKey>,

    #[serde(deserialize_with = "json::or_default")]
    pub profile_version: i32
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct FinalizeFileUploadsRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(deserialize_with = "json::or_default")]
    pub entity: EntityKey,

    #[serde(with = "json::list")]
    pub file_names: Vec<String>,

    #[serde(deserialize_with = "json::or_default")]
    pub profile_version: i32
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetFileMetadata {
    #[serde(with = "json::string")]
    pub checksum: String,

    #[serde(with = "json::string")]
    pub download_url: String,

    #[serde(with = "json::string")]
    pub file_name: String,

    #[serde(with = "json::timestamp")]
    pub last_modified: DateTime<Utc>,

    #[serde(deserialize_with = "json::or_default")]
    pub size: i32
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct FinalizeFileUploadsResponse {
    pub entity: Option<EntityKey>,

    #[serde(deserialize_with = "json::or_default")]
    pub metadata: HashMap<String, GetFileMetadata>,

    #[serde(deserialize_with = "json::or_default")]
    pub profile_version: i32
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetFilesRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(deserialize_with = "json::or_default")]
    pub entity: EntityKey
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetFilesResponse {
    pub entity: Option<EntityKey>,

    #[serde(deserialize_with = "json::or_default")]
    pub metadata: HashMap<String, GetFileMetadata>,

    #[serde(deserialize_with = "json::or_default")]
    pub profile_version: i32
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetObjectsRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(deserialize_with = "json::or_default")]
    pub entity: EntityKey,

    pub escape_object: Option<bool>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ObjectResult {
    pub data_object: Value,

    #[serde(with = "json::string")]
    pub escaped_data_object: String,

    #[serde(with = "json::string")]
    pub object_name: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetObjectsResponse {
    pub entity: Option<EntityKey>,

    #[serde(deserialize_with = "json::or_default")]
    pub objects: HashMap<String, ObjectResult>,

    #[serde(deserialize_with = "json::or_default")]
    pub profile_version: i32
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct InitiateFileUploadMetadata {
    #[serde(with = "json::string")]
    pub file_name: String,

    #[serde(with = "json::string")]
    pub upload_url: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct InitiateFileUploadsRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(deserialize_with = "json::or_default")]
    pub entity: EntityKey,

    #[serde(with = "json::list")]
    pub file_names: Vec<String>,

    pub profile_version: Option<i32>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct InitiateFileUploadsResponse {
    pub entity: Option<EntityKey>,

    #[serde(deserialize_with = "json::or_default")]
    pub profile_version: i32,

    #[serde(with = "json::list")]
    pub upload_details: Vec<InitiateFileUploadMetadata>
}

/// Object to write
///
/// Either `data_object` or `escaped_data_object` should be set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SetObject {
    pub data_object: Value,
    pub delete_object: Option<bool>,

    #[serde(with = "json::string")]
    pub escaped_data_object: String,

    #[serde(with = "json::string")]
    pub object_name: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SetObjectInfo {
    #[serde(with = "json::string")]
    pub object_name: String,

    #[serde(with = "json::string")]
    pub operation_reason: String,

    #[serde(with = "json::enumeration")]
    pub set_result: Option<OperationTypes>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SetObjectsRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(deserialize_with = "json::or_default")]
    pub entity: EntityKey,

    pub expected_profile_version: Option<i32>,

    #[serde(with = "json::list")]
    pub objects: Vec<SetObject>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SetObjectsResponse {
    #[serde(deserialize_with = "json::or_default")]
    pub profile_version: i32,

    #[serde(with = "json::list")]
    pub set_results: Vec<SetObjectInfo>
}
