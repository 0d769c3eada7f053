//! Models of the multiplayer servers and matchmaking APIs

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};
use serde_json::Value;

use crate::json;

wire_enum! {
    /// Azure region multiplayer servers can be deployed to
    pub enum AzureRegion {
        AustraliaEast => "AustraliaEast",
        AustraliaSoutheast => "AustraliaSoutheast",
        BrazilSouth => "BrazilSouth",
        CentralUs => "CentralUs",
        EastAsia => "EastAsia",
        EastUs => "EastUs",
        EastUs2 => "EastUs2",
        JapanEast => "JapanEast",
        JapanWest => "JapanWest",
        NorthCentralUs => "NorthCentralUs",
        NorthEurope => "NorthEurope",
        SouthCentralUs => "SouthCentralUs",
        SoutheastAsia => "SoutheastAsia",
        WestEurope => "WestEurope",
        WestUs => "WestUs",
        SouthAfricaNorth => "SouthAfricaNorth",
        WestCentralUs => "WestCentralUs",
        KoreaCentral => "KoreaCentral",
        FranceCentral => "FranceCentral",
        WestUs2 => "WestUs2",
        CentralIndia => "CentralIndia",
        UaeNorth => "UaeNorth",
        UkSouth => "UkSouth"
    }
}

wire_enum! {
    pub enum AzureVmFamily {
        A => "A",
        Av2 => "Av2",
        Dv2 => "Dv2",
        Dv3 => "Dv3",
        F => "F",
        Fsv2 => "Fsv2",
        Dasv4 => "Dasv4",
        Dav4 => "Dav4",
        Eav4 => "Eav4",
        Easv4 => "Easv4",
        Ev4 => "Ev4",
        Esv4 => "Esv4",
        Dsv3 => "Dsv3",
        Dsv2 => "Dsv2",
        NCasT4V3 => "NCasT4_v3",
        Ddv4 => "Ddv4",
        Ddsv4 => "Ddsv4",
        HBv3 => "HBv3"
    }
}

wire_enum! {
    /// Azure VM sizes
    ///
    /// Wire names keep Azure underscores: `StandardD2V2` is `Standard_D2_v2`.
    pub enum AzureVmSize {
        StandardA1 => "Standard_A1",
        StandardA2 => "Standard_A2",
        StandardA3 => "Standard_A3",
        StandardA4 => "Standard_A4",
        StandardA1V2 => "Standard_A1_v2",
        StandardA2V2 => "Standard_A2_v2",
        StandardA4V2 => "Standard_A4_v2",
        StandardA8V2 => "Standard_A8_v2",
        StandardD1V2 => "Standard_D1_v2",
        StandardD2V2 => "Standard_D2_v2",
        StandardD3V2 => "Standard_D3_v2",
        StandardD4V2 => "Standard_D4_v2",
        StandardD5V2 => "Standard_D5_v2",
        StandardD2V3 => "Standard_D2_v3",
        StandardD4V3 => "Standard_D4_v3",
        StandardD8V3 => "Standard_D8_v3",
        StandardD16V3 => "Standard_D16_v3",
        StandardF1 => "Standard_F1",
        StandardF2 => "Standard_F2",
        StandardF4 => "Standard_F4",
        StandardF8 => "Standard_F8",
        StandardF16 => "Standard_F16",
        StandardF2sV2 => "Standard_F2s_v2",
        StandardF4sV2 => "Standard_F4s_v2",
        StandardF8sV2 => "Standard_F8s_v2",
        StandardF16sV2 => "Standard_F16s_v2",
        StandardD2asV4 => "Standard_D2as_v4",
        StandardD4asV4 => "Standard_D4as_v4",
        StandardD8asV4 => "Standard_D8as_v4",
        StandardD16asV4 => "Standard_D16as_v4",
        StandardD2aV4 => "Standard_D2a_v4",
        StandardD4aV4 => "Standard_D4a_v4",
        StandardD8aV4 => "Standard_D8a_v4",
        StandardD16aV4 => "Standard_D16a_v4",
        StandardE2aV4 => "Standard_E2a_v4",
        StandardE4aV4 => "Standard_E4a_v4",
        StandardE8aV4 => "Standard_E8a_v4",
        StandardE16aV4 => "Standard_E16a_v4",
        StandardE2asV4 => "Standard_E2as_v4",
        StandardE4asV4 => "Standard_E4as_v4",
        StandardE8asV4 => "Standard_E8as_v4",
        StandardE16asV4 => "Standard_E16as_v4",
        StandardD2sV3 => "Standard_D2s_v3",
        StandardD4sV3 => "Standard_D4s_v3",
        StandardD8sV3 => "Standard_D8s_v3",
        StandardD16sV3 => "Standard_D16s_v3",
        StandardDS1V2 => "Standard_DS1_v2",
        StandardDS2V2 => "Standard_DS2_v2",
        StandardDS3V2 => "Standard_DS3_v2",
        StandardDS4V2 => "Standard_DS4_v2",
        StandardDS5V2 => "Standard_DS5_v2",
        StandardNC4asT4V3 => "Standard_NC4as_T4_v3",
        StandardD2dV4 => "Standard_D2d_v4",
        StandardD4dV4 => "Standard_D4d_v4",
        StandardD8dV4 => "Standard_D8d_v4",
        StandardD16dV4 => "Standard_D16d_v4",
        StandardD2dsV4 => "Standard_D2ds_v4",
        StandardD4dsV4 => "Standard_D4ds_v4",
        StandardD8dsV4 => "Standard_D8ds_v4",
        StandardD16dsV4 => "Standard_D16ds_v4",
        StandardHB12016rsV3 => "Standard_HB120_16rs_v3",
        StandardHB12032rsV3 => "Standard_HB120_32rs_v3",
        StandardHB12064rsV3 => "Standard_HB120_64rs_v3",
        StandardHB12096rsV3 => "Standard_HB120_96rs_v3",
        StandardHB120rsV3 => "Standard_HB120rs_v3"
    }
}

wire_enum! {
    pub enum CancellationReason {
        Requested => "Requested",
        Internal => "Internal",
        Timeout => "Timeout"
    }
}

wire_enum! {
    pub enum ContainerFlavor {
        ManagedWindowsServerCore => "ManagedWindowsServerCore",
        CustomLinux => "CustomLinux",
        ManagedWindowsServerCorePreview => "ManagedWindowsServerCorePreview",
        Invalid => "Invalid"
    }
}

wire_enum! {
    pub enum OsPlatform {
        Windows => "Windows",
        Linux => "Linux"
    }
}

wire_enum! {
    pub enum ProtocolType {
        TCP => "TCP",
        UDP => "UDP"
    }
}

wire_enum! {
    pub enum ServerType {
        Container => "Container",
        Process => "Process"
    }
}

wire_enum! {
    pub enum TitleMultiplayerServerEnabledStatus {
        Initializing => "Initializing",
        Enabled => "Enabled",
        Disabled => "Disabled"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AssetReference {
    #[serde(with = "json::string")]
    pub file_name: String,

    #[serde(with = "json::string")]
    pub mount_path: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AssetReferenceParams {
    #[serde(with = "json::string")]
    pub file_name: String,

    #[serde(with = "json::string")]
    pub mount_path: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AssetSummary {
    #[serde(with = "json::string")]
    pub file_name: String,

    #[serde(deserialize_with = "json::or_default")]
    pub metadata: HashMap<String, String>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct BuildSelectionCriterion {
    #[serde(deserialize_with = "json::or_default")]
    pub build_weight_distribution: HashMap<String, u32>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct BuildAliasDetailsResponse {
    #[serde(with = "json::string")]
    pub alias_id: String,

    #[serde(with = "json::string")]
    pub alias_name: String,

    #[serde(with = "json::list")]
    pub build_selection_criteria: Vec<BuildSelectionCriterion>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct BuildAliasParams {
    #[serde(with = "json::string")]
    pub alias_id: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CurrentServerStats {
    #[serde(deserialize_with = "json::or_default")]
    pub active: i32,

    #[serde(deserialize_with = "json::or_default")]
    pub propping: i32,

    #[serde(deserialize_with = "json::or_default")]
    pub standing_by: i32,

    #[serde(deserialize_with = "json::or_default")]
    pub total: i32
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DynamicStandbyThreshold {
    #[serde(deserialize_with = "json::or_default")]
    pub multiplier: f64,

    #[serde(deserialize_with = "json::or_default")]
    pub trigger_threshold_percentage: f64
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DynamicStandbySettings {
    #[serde(with = "json::list")]
    pub dynamic_floor_multiplier_thresholds: Vec<DynamicStandbyThreshold>,

    #[serde(deserialize_with = "json::or_default")]
    pub is_enabled: bool,

    pub ramp_down_seconds: Option<i32>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Schedule {
    #[serde(with = "json::string")]
    pub description: String,

    #[serde(with = "json::timestamp")]
    pub end_time: DateTime<Utc>,

    #[serde(deserialize_with = "json::or_default")]
    pub is_disabled: bool,

    #[serde(deserialize_with = "json::or_default")]
    pub is_recurring_weekly: bool,

    #[serde(with = "json::timestamp")]
    pub start_time: DateTime<Utc>,

    #[serde(deserialize_with = "json::or_default")]
    pub target_standby: i32
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ScheduledStandbySettings {
    #[serde(deserialize_with = "json::or_default")]
    pub is_enabled: bool,

    #[serde(with = "json::list")]
    pub schedule_list: Vec<Schedule>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct BuildRegion {
    pub current_server_stats: Option<CurrentServerStats>,
    pub dynamic_standby_settings: Option<DynamicStandbySettings>,

    #[serde(deserialize_with = "json::or_default")]
    pub max_servers: i32,

    pub multiplayer_server_count_per_vm: Option<i32>,

    #[serde(with = "json::string")]
    pub region: String,

    pub scheduled_standby_settings: Option<ScheduledStandbySettings>,

    #[serde(deserialize_with = "json::or_default")]
    pub standby_servers: i32,

    #[serde(with = "json::string")]
    pub status: String,

    #[serde(with = "json::enumeration")]
    pub vm_size: Option<AzureVmSize>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct BuildRegionParams {
    pub dynamic_standby_settings: Option<DynamicStandbySettings>,

    #[serde(deserialize_with = "json::or_default")]
    pub max_servers: i32,

    pub multiplayer_server_count_per_vm: Option<i32>,

    #[serde(with = "json::string")]
    pub region: String,

    pub scheduled_standby_settings: Option<ScheduledStandbySettings>,

    #[serde(deserialize_with = "json::or_default")]
    pub standby_servers: i32,

    #[serde(with = "json::enumeration")]
    pub vm_size: Option<AzureVmSize>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct BuildSummary {
    #[serde(with = "json::string")]
    pub build_id: String,

    #[serde(with = "json::string")]
    pub build_name: String,

    #[serde(with = "json::timestamp::optional")]
    pub creation_time: Option<DateTime<Utc>>,

    #[serde(deserialize_with = "json::or_default")]
    pub metadata: HashMap<String, String>,

    #[serde(with = "json::list")]
    pub region_configurations: Vec<BuildRegion>
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
pub struct CancelAllMatchmakingTicketsForPlayerRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    pub entity: Option<EntityKey>,

    #[serde(with = "json::string")]
    pub queue_name: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CancelAllMatchmakingTicketsForPlayerResult {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CancelAllServerBackfillTicketsForPlayerRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(deserialize_with = "json::or_default")]
    pub entity: EntityKey,

    #[serde(with = "json::string")]
    pub queue_name: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CancelAllServerBackfillTicketsForPlayerResult {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CancelMatchmakingTicketRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(with = "json::string")]
    pub queue_name: String,

    #[serde(with = "json::string")]
    pub ticket_id: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CancelMatchmakingTicketResult {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CancelServerBackfillTicketRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(with = "json::string")]
    pub queue_name: String,

    #[serde(with = "json::string")]
    pub ticket_id: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CancelServerBackfillTicketResult {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Certificate {
    #[serde(with = "json::string")]
    pub base64_encoded_value: String,

    #[serde(with = "json::string")]
    pub name: String,

    #[serde(with = "json::string")]
    pub password: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CertificateSummary {
    #[serde(with = "json::string")]
    pub name: String,

    #[serde(with = "json::string")]
    pub thumbprint: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ConnectedPlayer {
    #[serde(with = "json::string")]
    pub player_id: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ContainerImageReference {
    #[serde(with = "json::string")]
    pub image_name: String,

    #[serde(with = "json::string")]
    pub tag: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CoreCapacity {
    #[serde(deserialize_with = "json::or_default")]
    pub available: i32,

    #[serde(with = "json::string")]
    pub region: String,

    #[serde(deserialize_with = "json::or_default")]
    pub total: i32,

    #[serde(with = "json::enumeration")]
    pub vm_family: Option<AzureVmFamily>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CoreCapacityChange {
    #[serde(deserialize_with = "json::or_default")]
    pub new_core_limit: i32,

    #[serde(with = "json::string")]
    pub region: String,

    #[serde(with = "json::enumeration::required")]
    pub vm_family: AzureVmFamily
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CreateBuildAliasRequest {
    #[serde(with = "json::string")]
    pub alias_name: String,

    #[serde(with = "json::list")]
    pub build_selection_criteria: Vec<BuildSelectionCriterion>,

    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GameCertificateReferenceParams {
    #[serde(with = "json::string")]
    pub gsdk_alias: String,

    #[serde(with = "json::string")]
    pub name: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct LinuxInstrumentationConfiguration {
    #[serde(deserialize_with = "json::or_default")]
    pub is_enabled: bool
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Port {
    #[serde(with = "json::string")]
    pub name: String,

    #[serde(deserialize_with = "json::or_default")]
    pub num: i32,

    #[serde(with = "json::enumeration::required")]
    pub protocol: ProtocolType
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CreateBuildWithCustomContainerRequest {
    pub are_assets_readonly: Option<bool>,

    #[serde(with = "json::string")]
    pub build_name: String,

    #[serde(with = "json::enumeration")]
    pub container_flavor: Option<ContainerFlavor>,

    pub container_image_reference: Option<ContainerImageReference>,

    #[serde(with = "json::string")]
    pub container_run_command: String,

    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(with = "json::list")]
    pub game_asset_references: Vec<AssetReferenceParams>,

    #[serde(with = "json::list")]
    pub game_certificate_references: Vec<GameCertificateReferenceParams>,

    pub linux_instrumentation_configuration: Option<LinuxInstrumentationConfiguration>,

    #[serde(deserialize_with = "json::or_default")]
    pub metadata: HashMap<String, String>,

    #[serde(deserialize_with = "json::or_default")]
    pub multiplayer_server_count_per_vm: i32,

    #[serde(with = "json::list")]
    pub ports: Vec<Port>,

    #[serde(with = "json::list")]
    pub region_configurations: Vec<BuildRegionParams>,

    pub use_streaming_for_asset_downloads: Option<bool>,

    #[serde(with = "json::enumeration")]
    pub vm_size: Option<AzureVmSize>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GameCertificateReference {
    #[serde(with = "json::string")]
    pub gsdk_alias: String,

    #[serde(with = "json::string")]
    pub name: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CreateBuildWithCustomContainerResponse {
    pub are_assets_readonly: Option<bool>,

    #[serde(with = "json::string")]
    pub build_id: String,

    #[serde(with = "json::string")]
    pub build_name: String,

    #[serde(with = "json::enumeration")]
    pub container_flavor: Option<ContainerFlavor>,

    #[serde(with = "json::string")]
    pub container_run_command: String,

    #[serde(with = "json::timestamp::optional")]
    pub creation_time: Option<DateTime<Utc>>,

    pub custom_game_container_image: Option<ContainerImageReference>,

    #[serde(with = "json::list")]
    pub game_asset_references: Vec<AssetReference>,

    #[serde(with = "json::list")]
    pub game_certificate_references: Vec<GameCertificateReference>,

    pub linux_instrumentation_configuration: Option<LinuxInstrumentationConfiguration>,

    #[serde(deserialize_with = "json::or_default")]
    pub metadata: HashMap<String, String>,

    #[serde(deserialize_with = "json::or_default")]
    pub multiplayer_server_count_per_vm: i32,

    #[serde(with = "json::string")]
    pub os_platform: String,

    #[serde(with = "json::list")]
    pub ports: Vec<Port>,

    #[serde(with = "json::list")]
    pub region_configurations: Vec<BuildRegion>,

    #[serde(with = "json::string")]
    pub server_type: String,

    pub use_streaming_for_asset_downloads: Option<bool>,

    #[serde(with = "json::enumeration")]
    pub vm_size: Option<AzureVmSize>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct InstrumentationConfiguration {
    pub is_enabled: Option<bool>,

    #[serde(with = "json::list")]
    pub processes_to_monitor: Vec<String>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CreateBuildWithManagedContainerRequest {
    pub are_assets_readonly: Option<bool>,

    #[serde(with = "json::string")]
    pub build_name: String,

    #[serde(with = "json::enumeration")]
    pub container_flavor: Option<ContainerFlavor>,

    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(with = "json::list")]
    pub game_asset_references: Vec<AssetReferenceParams>,

    #[serde(with = "json::list")]
    pub game_certificate_references: Vec<GameCertificateReferenceParams>,

    #[serde(with = "json::string")]
    pub game_working_directory: String,

    pub instrumentation_configuration: Option<InstrumentationConfiguration>,

    #[serde(deserialize_with = "json::or_default")]
    pub metadata: HashMap<String, String>,

    #[serde(deserialize_with = "json::or_default")]
    pub multiplayer_server_count_per_vm: i32,

    #[serde(with = "json::list")]
    pub ports: Vec<Port>,

    #[serde(with = "json::list")]
    pub region_configurations: Vec<BuildRegionParams>,

    #[serde(with = "json::string")]
    pub start_multiplayer_server_command: String,

    pub use_streaming_for_asset_downloads: Option<bool>,

    #[serde(with = "json::enumeration")]
    pub vm_size: Option<AzureVmSize>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CreateBuildWithManagedContainerResponse {
    pub are_assets_readonly: Option<bool>,

    #[serde(with = "json::string")]
    pub build_id: String,

    #[serde(with = "json::string")]
    pub build_name: String,

    #[serde(with = "json::enumeration")]
    pub container_flavor: Option<ContainerFlavor>,

    #[serde(with = "json::timestamp::optional")]
    pub creation_time: Option<DateTime<Utc>>,

    #[serde(with = "json::list")]
    pub game_asset_references: Vec<AssetReference>,

    #[serde(with = "json::list")]
    pub game_certificate_references: Vec<GameCertificateReference>,

    #[serde(with = "json::string")]
    pub game_working_directory: String,

    pub instrumentation_configuration: Option<InstrumentationConfiguration>,

    #[serde(deserialize_with = "json::or_default")]
    pub metadata: HashMap<String, String>,

    #[serde(deserialize_with = "json::or_default")]
    pub multiplayer_server_count_per_vm: i32,

    #[serde(with = "json::string")]
    pub os_platform: String,

    #[serde(with = "json::list")]
    pub ports: Vec<Port>,

    #[serde(with = "json::list")]
    pub region_configurations: Vec<BuildRegion>,

    #[serde(with = "json::string")]
    pub server_type: String,

    #[serde(with = "json::string")]
    pub start_multiplayer_server_command: String,

    pub use_streaming_for_asset_downloads: Option<bool>,

    #[serde(with = "json::enumeration")]
    pub vm_size: Option<AzureVmSize>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CreateBuildWithProcessBasedServerRequest {
    pub are_assets_readonly: Option<bool>,

    #[serde(with = "json::string")]
    pub build_name: String,

    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(with = "json::list")]
    pub game_asset_references: Vec<AssetReferenceParams>,

    #[serde(with = "json::list")]
    pub game_certificate_references: Vec<GameCertificateReferenceParams>,

    #[serde(with = "json::string")]
    pub game_working_directory: String,

    pub instrumentation_configuration: Option<InstrumentationConfiguration>,

    #[serde(rename = "IsOSPreview")]
    pub is_os_preview: Option<bool>,

    #[serde(deserialize_with = "json::or_default")]
    pub metadata: HashMap<String, String>,

    #[serde(deserialize_with = "json::or_default")]
    pub multiplayer_server_count_per_vm: i32,

    #[serde(with = "json::string")]
    pub os_platform: String,

    #[serde(with = "json::list")]
    pub ports: Vec<Port>,

    #[serde(with = "json::list")]
    pub region_configurations: Vec<BuildRegionParams>,

    #[serde(with = "json::string")]
    pub start_multiplayer_server_command: String,

    pub use_streaming_for_asset_downloads: Option<bool>,

    #[serde(with = "json::enumeration")]
    pub vm_size: Option<AzureVmSize>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CreateBuildWithProcessBasedServerResponse {
    pub are_assets_readonly: Option<bool>,

    #[serde(with = "json::string")]
    pub build_id: String,

    #[serde(with = "json::string")]
    pub build_name: String,

    #[serde(with = "json::enumeration")]
    pub container_flavor: Option<ContainerFlavor>,

    #[serde(with = "json::timestamp::optional")]
    pub creation_time: Option<DateTime<Utc>>,

    #[serde(with = "json::list")]
    pub game_asset_references: Vec<AssetReference>,

    #[serde(with = "json::list")]
    pub game_certificate_references: Vec<GameCertificateReference>,

    #[serde(with = "json::string")]
    pub game_working_directory: String,

    pub instrumentation_configuration: Option<InstrumentationConfiguration>,

    #[serde(rename = "IsOSPreview")]
    pub is_os_preview: Option<bool>,

    #[serde(deserialize_with = "json::or_default")]
    pub metadata: HashMap<String, String>,

    #[serde(deserialize_with = "json::or_default")]
    pub multiplayer_server_count_per_vm: i32,

    #[serde(with = "json::string")]
    pub os_platform: String,

    #[serde(with = "json::list")]
    pub ports: Vec<Port>,

    #[serde(with = "json::list")]
    pub region_configurations: Vec<BuildRegion>,

    #[serde(with = "json::string")]
    pub server_type: String,

    #[serde(with = "json::string")]
    pub start_multiplayer_server_command: String,

    pub use_streaming_for_asset_downloads: Option<bool>,

    #[serde(with = "json::enumeration")]
    pub vm_size: Option<AzureVmSize>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct MatchmakingPlayerAttributes {
    pub data_object: Value,

    #[serde(with = "json::string")]
    pub escaped_data_object: String
}

/// Player in a matchmaking ticket
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct MatchmakingPlayer {
    pub attributes: Option<MatchmakingPlayerAttributes>,

    #[serde(deserialize_with = "json::or_default")]
    pub entity: EntityKey
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CreateMatchmakingTicketRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub creator: MatchmakingPlayer,

    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(deserialize_with = "json::or_default")]
    pub give_up_after_seconds: i32,

    #[serde(with = "json::list")]
    pub members_to_match_with: Vec<EntityKey>,

    #[serde(with = "json::string")]
    pub queue_name: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CreateMatchmakingTicketResult {
    #[serde(with = "json::string")]
    pub ticket_id: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CreateRemoteUserRequest {
    #[serde(with = "json::string")]
    pub build_id: String,

    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(with = "json::timestamp::optional")]
    pub expiration_time: Option<DateTime<Utc>>,

    #[serde(with = "json::string")]
    pub region: String,

    #[serde(with = "json::string")]
    pub username: String,

    #[serde(with = "json::string")]
    pub vm_id: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CreateRemoteUserResponse {
    #[serde(with = "json::timestamp::optional")]
    pub expiration_time: Option<DateTime<Utc>>,

    #[serde(with = "json::string")]
    pub password: String,

    #[serde(with = "json::string")]
    pub username: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct MatchmakingPlayerWithTeamAssignment {
    pub attributes: Option<MatchmakingPlayerAttributes>,

    #[serde(deserialize_with = "json::or_default")]
    pub entity: EntityKey,

    #[serde(with = "json::string")]
    pub team_id: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ServerDetails {
    #[serde(with = "json::string")]
    pub fqdn: String,

    #[serde(rename = "IPV4Address", with = "json::string")]
    pub ipv4_address: String,

    #[serde(with = "json::list")]
    pub ports: Vec<Port>,

    #[serde(with = "json::string")]
    pub region: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CreateServerBackfillTicketRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(deserialize_with = "json::or_default")]
    pub give_up_after_seconds: i32,

    #[serde(with = "json::list")]
    pub members: Vec<MatchmakingPlayerWithTeamAssignment>,

    #[serde(with = "json::string")]
    pub queue_name: String,

    pub server_details: Option<ServerDetails>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CreateServerBackfillTicketResult {
    #[serde(with = "json::string")]
    pub ticket_id: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CreateServerMatchmakingTicketRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(deserialize_with = "json::or_default")]
    pub give_up_after_seconds: i32,

    #[serde(with = "json::list")]
    pub members: Vec<MatchmakingPlayer>,

    #[serde(with = "json::string")]
    pub queue_name: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CreateTitleMultiplayerServersQuotaChangeRequest {
    #[serde(with = "json::string")]
    pub change_description: String,

    #[serde(with = "json::list")]
    pub changes: Vec<CoreCapacityChange>,

    #[serde(with = "json::string")]
    pub contact_email: String,

    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(with = "json::string")]
    pub notes: String,

    #[serde(with = "json::timestamp::optional")]
    pub start_date: Option<DateTime<Utc>>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CreateTitleMultiplayerServersQuotaChangeResponse {
    #[serde(with = "json::string")]
    pub request_id: String,

    #[serde(deserialize_with = "json::or_default")]
    pub was_approved: bool
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DeleteAssetRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(with = "json::string")]
    pub file_name: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DeleteBuildAliasRequest {
    #[serde(with = "json::string")]
    pub alias_id: String,

    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DeleteBuildRegionRequest {
    #[serde(with = "json::string")]
    pub build_id: String,

    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(with = "json::string")]
    pub region: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DeleteBuildRequest {
    #[serde(with = "json::string")]
    pub build_id: String,

    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DeleteCertificateRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(with = "json::string")]
    pub name: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DeleteContainerImageRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(with = "json::string")]
    pub image_name: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DeleteRemoteUserRequest {
    #[serde(with = "json::string")]
    pub build_id: String,

    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(with = "json::string")]
    pub region: String,

    #[serde(with = "json::string")]
    pub username: String,

    #[serde(with = "json::string")]
    pub vm_id: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct EmptyResponse {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct EnableMultiplayerServersForTitleRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct EnableMultiplayerServersForTitleResponse {
    #[serde(with = "json::enumeration")]
    pub status: Option<TitleMultiplayerServerEnabledStatus>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetAssetDownloadUrlRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(with = "json::string")]
    pub file_name: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetAssetDownloadUrlResponse {
    #[serde(with = "json::string")]
    pub asset_download_url: String,

    #[serde(with = "json::string")]
    pub file_name: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetAssetUploadUrlRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(with = "json::string")]
    pub file_name: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetAssetUploadUrlResponse {
    #[serde(with = "json::string")]
    pub asset_upload_url: String,

    #[serde(with = "json::string")]
    pub file_name: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetBuildAliasRequest {
    #[serde(with = "json::string")]
    pub alias_id: String,

    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetBuildRequest {
    #[serde(with = "json::string")]
    pub build_id: String,

    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetBuildResponse {
    pub are_assets_readonly: Option<bool>,

    #[serde(with = "json::string")]
    pub build_id: String,

    #[serde(with = "json::string")]
    pub build_name: String,

    #[serde(with = "json::string")]
    pub build_status: String,

    #[serde(with = "json::enumeration")]
    pub container_flavor: Option<ContainerFlavor>,

    #[serde(with = "json::string")]
    pub container_run_command: String,

    #[serde(with = "json::timestamp::optional")]
    pub creation_time: Option<DateTime<Utc>>,

    pub custom_game_container_image: Option<ContainerImageReference>,

    #[serde(with = "json::list")]
    pub game_asset_references: Vec<AssetReference>,

    #[serde(with = "json::list")]
    pub game_certificate_references: Vec<GameCertificateReference>,

    pub instrumentation_configuration: Option<InstrumentationConfiguration>,

    #[serde(deserialize_with = "json::or_default")]
    pub metadata: HashMap<String, String>,

    #[serde(deserialize_with = "json::or_default")]
    pub multiplayer_server_count_per_vm: i32,

    #[serde(with = "json::string")]
    pub os_platform: String,

    #[serde(with = "json::list")]
    pub ports: Vec<Port>,

    #[serde(with = "json::list")]
    pub region_configurations: Vec<BuildRegion>,

    #[serde(with = "json::string")]
    pub server_type: String,

    #[serde(with = "json::string")]
    pub start_multiplayer_server_command: String,

    pub use_streaming_for_asset_downloads: Option<bool>,

    #[serde(with = "json::enumeration")]
    pub vm_size: Option<AzureVmSize>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetContainerRegistryCredentialsRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetContainerRegistryCredentialsResponse {
    #[serde(with = "json::string")]
    pub dns_name: String,

    #[serde(with = "json::string")]
    pub password: String,

    #[serde(with = "json::string")]
    pub username: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetMatchmakingTicketRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(deserialize_with = "json::or_default")]
    pub escape_object: bool,

    #[serde(with = "json::string")]
    pub queue_name: String,

    #[serde(with = "json::string")]
    pub ticket_id: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetMatchmakingTicketResult {
    #[serde(with = "json::string")]
    pub cancellation_reason_string: String,

    #[serde(with = "json::timestamp")]
    pub created: DateTime<Utc>,

    #[serde(deserialize_with = "json::or_default")]
    pub creator: EntityKey,

    #[serde(deserialize_with = "json::or_default")]
    pub give_up_after_seconds: i32,

    #[serde(with = "json::string")]
    pub match_id: String,

    #[serde(with = "json::list")]
    pub members: Vec<MatchmakingPlayer>,

    #[serde(with = "json::list")]
    pub members_to_match_with: Vec<EntityKey>,

    #[serde(with = "json::string")]
    pub queue_name: String,

    #[serde(with = "json::string")]
    pub status: String,

    #[serde(with = "json::string")]
    pub ticket_id: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetMatchRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(deserialize_with = "json::or_default")]
    pub escape_object: bool,

    #[serde(with = "json::string")]
    pub match_id: String,

    #[serde(with = "json::string")]
    pub queue_name: String,

    #[serde(deserialize_with = "json::or_default")]
    pub return_member_attributes: bool
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetMatchResult {
    #[serde(with = "json::string")]
    pub match_id: String,

    #[serde(with = "json::list")]
    pub members: Vec<MatchmakingPlayerWithTeamAssignment>,

    #[serde(with = "json::list")]
    pub region_preferences: Vec<String>,

    pub server_details: Option<ServerDetails>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetMultiplayerServerDetailsRequest {
    #[serde(with = "json::string")]
    pub build_id: String,

    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(with = "json::string")]
    pub region: String,

    #[serde(with = "json::string")]
    pub session_id: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetMultiplayerServerDetailsResponse {
    #[serde(with = "json::string")]
    pub build_id: String,

    #[serde(with = "json::list")]
    pub connected_players: Vec<ConnectedPlayer>,

    #[serde(rename = "FQDN", with = "json::string")]
    pub fqdn: String,

    #[serde(rename = "IPV4Address", with = "json::string")]
    pub ipv4_address: String,

    #[serde(with = "json::timestamp::optional")]
    pub last_state_transition_time: Option<DateTime<Utc>>,

    #[serde(with = "json::list")]
    pub ports: Vec<Port>,

    #[serde(with = "json::string")]
    pub region: String,

    #[serde(with = "json::string")]
    pub server_id: String,

    #[serde(with = "json::string")]
    pub session_id: String,

    #[serde(with = "json::string")]
    pub state: String,

    #[serde(with = "json::string")]
    pub vm_id: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetMultiplayerServerLogsRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(with = "json::string")]
    pub server_id: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetMultiplayerServerLogsResponse {
    #[serde(with = "json::string")]
    pub log_download_url: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetMultiplayerSessionLogsBySessionIdRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(with = "json::string")]
    pub session_id: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetQueueStatisticsRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(with = "json::string")]
    pub queue_name: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Statistics {
    #[serde(deserialize_with = "json::or_default")]
    pub average: f64,

    #[serde(deserialize_with = "json::or_default")]
    pub percentile50: f64,

    #[serde(deserialize_with = "json::or_default")]
    pub percentile90: f64,

    #[serde(deserialize_with = "json::or_default")]
    pub percentile99: f64
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetQueueStatisticsResult {
    pub number_of_players_matching: Option<u32>,
    pub time_to_match_statistics_in_seconds: Option<Statistics>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetRemoteLoginEndpointRequest {
    #[serde(with = "json::string")]
    pub build_id: String,

    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(with = "json::string")]
    pub region: String,

    #[serde(with = "json::string")]
    pub vm_id: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetRemoteLoginEndpointResponse {
    #[serde(rename = "IPV4Address", with = "json::string")]
    pub ipv4_address: String,

    #[serde(deserialize_with = "json::or_default")]
    pub port: i32
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetServerBackfillTicketRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(deserialize_with = "json::or_default")]
    pub escape_object: bool,

    #[serde(with = "json::string")]
    pub queue_name: String,

    #[serde(with = "json::string")]
    pub ticket_id: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetServerBackfillTicketResult {
    #[serde(with = "json::string")]
    pub cancellation_reason_string: String,

    #[serde(with = "json::timestamp")]
    pub created: DateTime<Utc>,

    #[serde(deserialize_with = "json::or_default")]
    pub give_up_after_seconds: i32,

    #[serde(with = "json::string")]
    pub match_id: String,

    #[serde(with = "json::list")]
    pub members: Vec<MatchmakingPlayerWithTeamAssignment>,

    #[serde(with = "json::string")]
    pub queue_name: String,

    #[serde(deserialize_with = "json::or_default")]
    pub server_details: ServerDetails,

    #[serde(with = "json::string")]
    pub status: String,

    #[serde(with = "json::string")]
    pub ticket_id: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetTitleEnabledForMultiplayerServersStatusRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetTitleEnabledForMultiplayerServersStatusResponse {
    #[serde(with = "json::enumeration")]
    pub status: Option<TitleMultiplayerServerEnabledStatus>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetTitleMultiplayerServersQuotaChangeRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(with = "json::string")]
    pub request_id: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct QuotaChange {
    #[serde(with = "json::string")]
    pub change_description: String,

    #[serde(with = "json::list")]
    pub changes: Vec<CoreCapacityChange>,

    #[serde(deserialize_with = "json::or_default")]
    pub is_pending_review: bool,

    #[serde(with = "json::string")]
    pub notes: String,

    #[serde(with = "json::string")]
    pub request_id: String,

    #[serde(with = "json::string")]
    pub review_comments: String,

    #[serde(deserialize_with = "json::or_default")]
    pub was_approved: bool
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetTitleMultiplayerServersQuotaChangeResponse {
    pub change: Option<QuotaChange>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetTitleMultiplayerServersQuotasRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct TitleMultiplayerServersQuotas {
    #[serde(with = "json::list")]
    pub core_capacities: Vec<CoreCapacity>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetTitleMultiplayerServersQuotasResponse {
    pub quotas: Option<TitleMultiplayerServersQuotas>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct JoinMatchmakingTicketRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(deserialize_with = "json::or_default")]
    pub member: MatchmakingPlayer,

    #[serde(with = "json::string")]
    pub queue_name: String,

    #[serde(with = "json::string")]
    pub ticket_id: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct JoinMatchmakingTicketResult {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListAssetSummariesRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    pub page_size: Option<i32>,

    #[serde(with = "json::string")]
    pub skip_token: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListAssetSummariesResponse {
    #[serde(with = "json::list")]
    pub asset_summaries: Vec<AssetSummary>,

    #[serde(deserialize_with = "json::or_default")]
    pub page_size: i32,

    #[serde(with = "json::string")]
    pub skip_token: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListBuildAliasesRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    pub page_size: Option<i32>,

    #[serde(with = "json::string")]
    pub skip_token: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListBuildAliasesResponse {
    #[serde(with = "json::list")]
    pub build_aliases: Vec<BuildAliasDetailsResponse>,

    #[serde(deserialize_with = "json::or_default")]
    pub page_size: i32,

    #[serde(with = "json::string")]
    pub skip_token: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListBuildSummariesRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    pub page_size: Option<i32>,

    #[serde(with = "json::string")]
    pub skip_token: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListBuildSummariesResponse {
    #[serde(with = "json::list")]
    pub build_summaries: Vec<BuildSummary>,

    #[serde(deserialize_with = "json::or_default")]
    pub page_size: i32,

    #[serde(with = "json::string")]
    pub skip_token: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListCertificateSummariesRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    pub page_size: Option<i32>,

    #[serde(with = "json::string")]
    pub skip_token: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListCertificateSummariesResponse {
    #[serde(with = "json::list")]
    pub certificate_summaries: Vec<CertificateSummary>,

    #[serde(deserialize_with = "json::or_default")]
    pub page_size: i32,

    #[serde(with = "json::string")]
    pub skip_token: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListContainerImagesRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    pub page_size: Option<i32>,

    #[serde(with = "json::string")]
    pub skip_token: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListContainerImagesResponse {
    #[serde(with = "json::list")]
    pub images: Vec<String>,

    #[serde(deserialize_with = "json::or_default")]
    pub page_size: i32,

    #[serde(with = "json::string")]
    pub skip_token: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListContainerImageTagsRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(with = "json::string")]
    pub image_name: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListContainerImageTagsResponse {
    #[serde(with = "json::list")]
    pub tags: Vec<String>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListMatchmakingTicketsForPlayerRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    pub entity: Option<EntityKey>,

    #[serde(with = "json::string")]
    pub queue_name: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListMatchmakingTicketsForPlayerResult {
    #[serde(with = "json::list")]
    pub ticket_ids: Vec<String>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListMultiplayerServersRequest {
    #[serde(with = "json::string")]
    pub build_id: String,

    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    pub page_size: Option<i32>,

    #[serde(with = "json::string")]
    pub region: String,

    #[serde(with = "json::string")]
    pub skip_token: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct MultiplayerServerSummary {
    #[serde(with = "json::list")]
    pub connected_players: Vec<ConnectedPlayer>,

    #[serde(with = "json::timestamp::optional")]
    pub last_state_transition_time: Option<DateTime<Utc>>,

    #[serde(with = "json::string")]
    pub region: String,

    #[serde(with = "json::string")]
    pub server_id: String,

    #[serde(with = "json::string")]
    pub session_id: String,

    #[serde(with = "json::string")]
    pub state: String,

    #[serde(with = "json::string")]
    pub vm_id: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListMultiplayerServersResponse {
    #[serde(with = "json::list")]
    pub multiplayer_server_summaries: Vec<MultiplayerServerSummary>,

    #[serde(deserialize_with = "json::or_default")]
    pub page_size: i32,

    #[serde(with = "json::string")]
    pub skip_token: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListPartyQosServersRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct QosServer {
    #[serde(with = "json::string")]
    pub region: String,

    #[serde(with = "json::string")]
    pub server_url: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListPartyQosServersResponse {
    #[serde(deserialize_with = "json::or_default")]
    pub page_size: i32,

    #[serde(with = "json::list")]
    pub qos_servers: Vec<QosServer>,

    #[serde(with = "json::string")]
    pub skip_token: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListQosServersForTitleRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    pub include_all_regions: Option<bool>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListQosServersForTitleResponse {
    #[serde(deserialize_with = "json::or_default")]
    pub page_size: i32,

    #[serde(with = "json::list")]
    pub qos_servers: Vec<QosServer>,

    #[serde(with = "json::string")]
    pub skip_token: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListServerBackfillTicketsForPlayerRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(deserialize_with = "json::or_default")]
    pub entity: EntityKey,

    #[serde(with = "json::string")]
    pub queue_name: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListServerBackfillTicketsForPlayerResult {
    #[serde(with = "json::list")]
    pub ticket_ids: Vec<String>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListTitleMultiplayerServersQuotaChangesRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListTitleMultiplayerServersQuotaChangesResponse {
    #[serde(with = "json::list")]
    pub changes: Vec<QuotaChange>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListVirtualMachineSummariesRequest {
    #[serde(with = "json::string")]
    pub build_id: String,

    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    pub page_size: Option<i32>,

    #[serde(with = "json::string")]
    pub region: String,

    #[serde(with = "json::string")]
    pub skip_token: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct VirtualMachineSummary {
    #[serde(with = "json::string")]
    pub health_status: String,

    #[serde(with = "json::string")]
    pub state: String,

    #[serde(with = "json::string")]
    pub vm_id: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListVirtualMachineSummariesResponse {
    #[serde(deserialize_with = "json::or_default")]
    pub page_size: i32,

    #[serde(with = "json::string")]
    pub skip_token: String,

    #[serde(with = "json::list")]
    pub virtual_machines: Vec<VirtualMachineSummary>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct RequestMultiplayerServerRequest {
    pub build_alias_params: Option<BuildAliasParams>,

    #[serde(with = "json::string")]
    pub build_id: String,

    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(with = "json::list")]
    pub initial_players: Vec<String>,

    #[serde(with = "json::list")]
    pub preferred_regions: Vec<String>,

    #[serde(with = "json::string")]
    pub session_cookie: String,

    #[serde(with = "json::string")]
    pub session_id: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct RequestMultiplayerServerResponse {
    #[serde(with = "json::string")]
    pub build_id: String,

    #[serde(with = "json::list")]
    pub connected_players: Vec<ConnectedPlayer>,

    #[serde(rename = "FQDN", with = "json::string")]
    pub fqdn: String,

    #[serde(rename = "IPV4Address", with = "json::string")]
    pub ipv4_address: String,

    #[serde(with = "json::timestamp::optional")]
    pub last_state_transition_time: Option<DateTime<Utc>>,

    #[serde(with = "json::list")]
    pub ports: Vec<Port>,

    #[serde(with = "json::string")]
    pub region: String,

    #[serde(with = "json::string")]
    pub server_id: String,

    #[serde(with = "json::string")]
    pub session_id: String,

    #[serde(with = "json::string")]
    pub state: String,

    #[serde(with = "json::string")]
    pub vm_id: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct RolloverContainerRegistryCredentialsRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct RolloverContainerRegistryCredentialsResponse {
    #[serde(with = "json::string")]
    pub dns_name: String,

    #[serde(with = "json::string")]
    pub password: String,

    #[serde(with = "json::string")]
    pub username: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ShutdownMultiplayerServerRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(with = "json::string")]
    pub session_id: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct UntagContainerImageRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(with = "json::string")]
    pub image_name: String,

    #[serde(with = "json::string")]
    pub tag: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct UpdateBuildAliasRequest {
    #[serde(with = "json::string")]
    pub alias_id: String,

    #[serde(with = "json::string")]
    pub alias_name: String,

    #[serde(with = "json::list")]
    pub build_selection_criteria: Vec<BuildSelectionCriterion>,

    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct UpdateBuildNameRequest {
    #[serde(with = "json::string")]
    pub build_id: String,

    #[serde(with = "json::string")]
    pub build_name: String,

    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct UpdateBuildRegionRequest {
    #[serde(with = "json::string")]
    pub build_id: String,

    #[serde(deserialize_with = "json::or_default")]
    pub build_region: BuildRegionParams,

    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct UpdateBuildRegionsRequest {
    #[serde(with = "json::string")]
    pub build_id: String,

    #[serde(with = "json::list")]
    pub build_regions: Vec<BuildRegionParams>,

    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct UploadCertificateRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(deserialize_with = "json::or_default")]
    pub game_certificate: Certificate
}
