use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};

use crate::json;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct InsightsEmptyRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct InsightsPerformanceLevel {
    #[serde(deserialize_with = "json::or_default")]
    pub active_event_exports: i32,

    #[serde(rename = "CacheSizeMB", deserialize_with = "json::or_default")]
    pub cache_size_mb: i32,

    #[serde(deserialize_with = "json::or_default")]
    pub concurrency: i32,

    #[serde(deserialize_with = "json::or_default")]
    pub credits_per_minute: f64,

    #[serde(deserialize_with = "json::or_default")]
    pub events_per_second: i32,

    #[serde(deserialize_with = "json::or_default")]
    pub level: i32,

    #[serde(rename = "MaxMemoryPerQueryMB", deserialize_with = "json::or_default")]
    pub max_memory_per_query_mb: i32,

    #[serde(deserialize_with = "json::or_default")]
    pub virtual_cpu_cores: i32
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct InsightsGetLimitsResponse {
    #[serde(deserialize_with = "json::or_default")]
    pub default_performance_level: i32,

    #[serde(deserialize_with = "json::or_default")]
    pub default_storage_retention_days: i32,

    #[serde(deserialize_with = "json::or_default")]
    pub storage_max_retention_days: i32,

    #[serde(deserialize_with = "json::or_default")]
    pub storage_min_retention_days: i32,

    #[serde(with = "json::list")]
    pub sub_meters: Vec<InsightsPerformanceLevel>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct InsightsGetOperationStatusResponse {
    #[serde(with = "json::string")]
    pub message: String,

    #[serde(with = "json::timestamp")]
    pub operation_completed_time: DateTime<Utc>,

    #[serde(with = "json::string")]
    pub operation_id: String,

    #[serde(with = "json::timestamp")]
    pub operation_last_updated: DateTime<Utc>,

    #[serde(with = "json::timestamp")]
    pub operation_started_time: DateTime<Utc>,

    #[serde(with = "json::string")]
    pub operation_type: String,

    #[serde(deserialize_with = "json::or_default")]
    pub operation_value: i32,

    #[serde(with = "json::string")]
    pub status: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct InsightsGetDetailsResponse {
    #[serde(deserialize_with = "json::or_default")]
    pub data_usage_mb: u32,

    #[serde(with = "json::string")]
    pub error_message: String,

    pub limits: Option<InsightsGetLimitsResponse>,

    #[serde(with = "json::list")]
    pub pending_operations: Vec<InsightsGetOperationStatusResponse>,

    #[serde(deserialize_with = "json::or_default")]
    pub performance_level: i32,

    #[serde(deserialize_with = "json::or_default")]
    pub retention_days: i32
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct InsightsGetOperationStatusRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(with = "json::string")]
    pub operation_id: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct InsightsGetPendingOperationsRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(with = "json::string")]
    pub operation_type: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct InsightsGetPendingOperationsResponse {
    #[serde(with = "json::list")]
    pub pending_operations: Vec<InsightsGetOperationStatusResponse>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct InsightsOperationResponse {
    #[serde(with = "json::string")]
    pub message: String,

    #[serde(with = "json::string")]
    pub operation_id: String,

    #[serde(with = "json::string")]
    pub operation_type: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct InsightsSetPerformanceRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(deserialize_with = "json::or_default")]
    pub performance_level: i32
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct InsightsSetStorageRetentionRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(deserialize_with = "json::or_default")]
    pub retention_days: i32
}
