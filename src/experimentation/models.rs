use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};

use crate::json;

wire_enum! {
    pub enum AnalysisTaskState {
        Waiting => "Waiting",
        ReadyForSubmission => "ReadyForSubmission",
        SubmittingToPipeline => "SubmittingToPipeline",
        Running => "Running",
        Completed => "Completed",
        Failed => "Failed",
        Canceled => "Canceled"
    }
}

wire_enum! {
    pub enum ExperimentState {
        New => "New",
        Started => "Started",
        Stopped => "Stopped",
        Deleted => "Deleted"
    }
}

wire_enum! {
    pub enum ExperimentType {
        Active => "Active",
        Snapshot => "Snapshot"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CreateExclusionGroupRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(with = "json::string")]
    pub description: String,

    #[serde(with = "json::string")]
    pub name: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CreateExclusionGroupResult {
    #[serde(with = "json::string")]
    pub exclusion_group_id: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Variable {
    #[serde(with = "json::string")]
    pub name: String,

    #[serde(with = "json::string")]
    pub value: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Variant {
    #[serde(with = "json::string")]
    pub description: String,

    #[serde(with = "json::string")]
    pub id: String,

    #[serde(deserialize_with = "json::or_default")]
    pub is_control: bool,

    #[serde(with = "json::string")]
    pub name: String,

    #[serde(with = "json::string")]
    pub title_data_override_label: String,

    #[serde(deserialize_with = "json::or_default")]
    pub traffic_percentage: u32,

    #[serde(with = "json::list")]
    pub variables: Vec<Variable>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CreateExperimentRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(with = "json::string")]
    pub description: String,

    #[serde(with = "json::timestamp::optional")]
    pub end_date: Option<DateTime<Utc>>,

    #[serde(with = "json::string")]
    pub exclusion_group_id: String,

    pub exclusion_group_traffic_allocation: Option<u32>,

    #[serde(with = "json::enumeration")]
    pub experiment_type: Option<ExperimentType>,

    #[serde(with = "json::string")]
    pub name: String,

    #[serde(with = "json::string")]
    pub segment_id: String,

    #[serde(with = "json::timestamp")]
    pub start_date: DateTime<Utc>,

    #[serde(with = "json::list")]
    pub title_player_account_test_ids: Vec<String>,

    #[serde(with = "json::list")]
    pub variants: Vec<Variant>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CreateExperimentResult {
    #[serde(with = "json::string")]
    pub experiment_id: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DeleteExclusionGroupRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(with = "json::string")]
    pub exclusion_group_id: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DeleteExperimentRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(with = "json::string")]
    pub experiment_id: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct EmptyResponse {}

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
pub struct ExclusionGroupTrafficAllocation {
    #[serde(with = "json::string")]
    pub experiment_id: String,

    #[serde(deserialize_with = "json::or_default")]
    pub traffic_allocation: u32
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Experiment {
    #[serde(with = "json::string")]
    pub description: String,

    #[serde(with = "json::timestamp::optional")]
    pub end_date: Option<DateTime<Utc>>,

    #[serde(with = "json::string")]
    pub exclusion_group_id: String,

    pub exclusion_group_traffic_allocation: Option<u32>,

    #[serde(with = "json::enumeration")]
    pub experiment_type: Option<ExperimentType>,

    #[serde(with = "json::string")]
    pub id: String,

    #[serde(with = "json::string")]
    pub name: String,

    #[serde(with = "json::string")]
    pub segment_id: String,

    #[serde(with = "json::timestamp")]
    pub start_date: DateTime<Utc>,

    #[serde(with = "json::enumeration")]
    pub state: Option<ExperimentState>,

    #[serde(with = "json::list")]
    pub title_player_account_test_ids: Vec<String>,

    #[serde(with = "json::list")]
    pub variants: Vec<Variant>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ExperimentExclusionGroup {
    #[serde(with = "json::string")]
    pub description: String,

    #[serde(with = "json::string")]
    pub exclusion_group_id: String,

    #[serde(with = "json::string")]
    pub name: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetExclusionGroupsRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetExclusionGroupsResult {
    #[serde(with = "json::list")]
    pub exclusion_groups: Vec<ExperimentExclusionGroup>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetExclusionGroupTrafficRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(with = "json::string")]
    pub exclusion_group_id: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetExclusionGroupTrafficResult {
    #[serde(with = "json::list")]
    pub traffic_allocations: Vec<ExclusionGroupTrafficAllocation>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetExperimentsRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetExperimentsResult {
    #[serde(with = "json::list")]
    pub experiments: Vec<Experiment>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetLatestScorecardRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(with = "json::string")]
    pub experiment_id: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct MetricData {
    #[serde(deserialize_with = "json::or_default")]
    pub confidence_interval_end: f64,

    #[serde(deserialize_with = "json::or_default")]
    pub confidence_interval_start: f64,

    #[serde(deserialize_with = "json::or_default")]
    pub delta_absolute_change: f32,

    #[serde(deserialize_with = "json::or_default")]
    pub delta_relative_change: f32,

    #[serde(with = "json::string")]
    pub internal_name: String,

    #[serde(with = "json::string")]
    pub movement: String,

    #[serde(with = "json::string")]
    pub name: String,

    #[serde(deserialize_with = "json::or_default")]
    pub p_move: f32,

    #[serde(deserialize_with = "json::or_default")]
    pub p_value: f32,

    #[serde(deserialize_with = "json::or_default")]
    pub p_value_threshold: f32,

    #[serde(with = "json::string")]
    pub stat_sig_level: String,

    #[serde(deserialize_with = "json::or_default")]
    pub std_dev: f32,

    #[serde(deserialize_with = "json::or_default")]
    pub value: f32
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ScorecardDataRow {
    #[serde(deserialize_with = "json::or_default")]
    pub is_control: bool,

    #[serde(deserialize_with = "json::or_default")]
    pub metric_data_rows: HashMap<String, MetricData>,

    #[serde(deserialize_with = "json::or_default")]
    pub player_count: u32,

    #[serde(with = "json::string")]
    pub variant_name: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Scorecard {
    #[serde(with = "json::string")]
    pub date_generated: String,

    #[serde(with = "json::string")]
    pub duration: String,

    #[serde(deserialize_with = "json::or_default")]
    pub events_processed: f64,

    #[serde(with = "json::string")]
    pub experiment_id: String,

    #[serde(with = "json::string")]
    pub experiment_name: String,

    #[serde(with = "json::enumeration")]
    pub latest_job_status: Option<AnalysisTaskState>,

    #[serde(deserialize_with = "json::or_default")]
    pub sample_ratio_mismatch: bool,

    #[serde(with = "json::list")]
    pub scorecard_data_rows: Vec<ScorecardDataRow>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetLatestScorecardResult {
    pub scorecard: Option<Scorecard>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetTreatmentAssignmentRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    pub entity: Option<EntityKey>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct TreatmentAssignment {
    #[serde(with = "json::list")]
    pub variables: Vec<Variable>,

    #[serde(with = "json::list")]
    pub variants: Vec<String>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetTreatmentAssignmentResult {
    pub treatment_assignment: Option<TreatmentAssignment>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct StartExperimentRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(with = "json::string")]
    pub experiment_id: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct StopExperimentRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(with = "json::string")]
    pub experiment_id: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct UpdateExclusionGroupRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(with = "json::string")]
    pub description: String,

    #[serde(with = "json::string")]
    pub exclusion_group_id: String,

    #[serde(with = "json::string")]
    pub name: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct UpdateExperimentRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(with = "json::string")]
    pub description: String,

    #[serde(with = "json::timestamp::optional")]
    pub end_date: Option<DateTime<Utc>>,

    #[serde(with = "json::string")]
    pub exclusion_group_id: String,

    pub exclusion_group_traffic_allocation: Option<u32>,

    #[serde(with = "json::enumeration")]
    pub experiment_type: Option<ExperimentType>,

    #[serde(with = "json::string")]
    pub id: String,

    #[serde(with = "json::string")]
    pub name: String,

    #[serde(with = "json::string")]
    pub segment_id: String,

    #[serde(with = "json::timestamp")]
    pub start_date: DateTime<Utc>,

    #[serde(with = "json::list")]
    pub title_player_account_test_ids: Vec<String>,

    #[serde(with = "json::list")]
    pub variants: Vec<Variant>
}
