//! Models of the Cloud Script API
//!
//! Entity keys, function registrations and execution results.
//! Every model decodes leniently: missing or `null` fields keep
//! their defaults and unknown enum values are dropped.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};
use serde_json::Value;

use crate::json;

wire_enum! {
    pub enum CloudScriptRevisionOption {
        Live => "Live",
        Latest => "Latest",
        Specific => "Specific"
    }
}

wire_enum! {
    /// Continent as two-letter code
    pub enum ContinentCode {
        AF => "AF",
        AN => "AN",
        AS => "AS",
        EU => "EU",
        NA => "NA",
        OC => "OC",
        SA => "SA"
    }
}

wire_enum! {
    /// ISO 3166-1 alpha-2 country code
    pub enum CountryCode {
        AF => "AF",
        AX => "AX",
        AL => "AL",
        DZ => "DZ",
        AS => "AS",
        AD => "AD",
        AO => "AO",
        AI => "AI",
        AQ => "AQ",
        AG => "AG",
        AR => "AR",
        AM => "AM",
        AW => "AW",
        AU => "AU",
        AT => "AT",
        AZ => "AZ",
        BS => "BS",
        BH => "BH",
        BD => "BD",
        BB => "BB",
        BY => "BY",
        BE => "BE",
        BZ => "BZ",
        BJ => "BJ",
        BM => "BM",
        BT => "BT",
        BO => "BO",
        BQ => "BQ",
        BA => "BA",
        BW => "BW",
        BV => "BV",
        BR => "BR",
        IO => "IO",
        BN => "BN",
        BG => "BG",
        BF => "BF",
        BI => "BI",
        KH => "KH",
        CM => "CM",
        CA => "CA",
        CV => "CV",
        KY => "KY",
        CF => "CF",
        TD => "TD",
        CL => "CL",
        CN => "CN",
        CX => "CX",
        CC => "CC",
        CO => "CO",
        KM => "KM",
        CG => "CG",
        CD => "CD",
        CK => "CK",
        CR => "CR",
        CI => "CI",
        HR => "HR",
        CU => "CU",
        CW => "CW",
        CY => "CY",
        CZ => "CZ",
        DK => "DK",
        DJ => "DJ",
        DM => "DM",
        DO => "DO",
        EC => "EC",
        EG => "EG",
        SV => "SV",
        GQ => "GQ",
        ER => "ER",
        EE => "EE",
        ET => "ET",
        FK => "FK",
        FO => "FO",
        FJ => "FJ",
        FI => "FI",
        FR => "FR",
        GF => "GF",
        PF => "PF",
        TF => "TF",
        GA => "GA",
        GM => "GM",
        GE => "GE",
        DE => "DE",
        GH => "GH",
        GI => "GI",
        GR => "GR",
        GL => "GL",
        GD => "GD",
        GP => "GP",
        GU => "GU",
        GT => "GT",
        GG => "GG",
        GN => "GN",
        GW => "GW",
        GY => "GY",
        HT => "HT",
        HM => "HM",
        VA => "VA",
        HN => "HN",
        HK => "HK",
        HU => "HU",
        IS => "IS",
        IN => "IN",
        ID => "ID",
        IR => "IR",
        IQ => "IQ",
        IE => "IE",
        IM => "IM",
        IL => "IL",
        IT => "IT",
        JM => "JM",
        JP => "JP",
        JE => "JE",
        JO => "JO",
        KZ => "KZ",
        KE => "KE",
        KI => "KI",
        KP => "KP",
        KR => "KR",
        KW => "KW",
        KG => "KG",
        LA => "LA",
        LV => "LV",
        LB => "LB",
        LS => "LS",
        LR => "LR",
        LY => "LY",
        LI => "LI",
        LT => "LT",
        LU => "LU",
        MO => "MO",
        MK => "MK",
        MG => "MG",
        MW => "MW",
        MY => "MY",
        MV => "MV",
        ML => "ML",
        MT => "MT",
        MH => "MH",
        MQ => "MQ",
        MR => "MR",
        MU => "MU",
        YT => "YT",
        MX => "MX",
        FM => "FM",
        MD => "MD",
        MC => "MC",
        MN => "MN",
        ME => "ME",
        MS => "MS",
        MA => "MA",
        MZ => "MZ",
        MM => "MM",
        NA => "NA",
        NR => "NR",
        NP => "NP",
        NL => "NL",
        NC => "NC",
        NZ => "NZ",
        NI => "NI",
        NE => "NE",
        NG => "NG",
        NU => "NU",
        NF => "NF",
        MP => "MP",
        NO => "NO",
        OM => "OM",
        PK => "PK",
        PW => "PW",
        PS => "PS",
        PA => "PA",
        PG => "PG",
        PY => "PY",
        PE => "PE",
        PH => "PH",
        PN => "PN",
        PL => "PL",
        PT => "PT",
        PR => "PR",
        QA => "QA",
        RE => "RE",
        RO => "RO",
        RU => "RU",
        RW => "RW",
        BL => "BL",
        SH => "SH",
        KN => "KN",
        LC => "LC",
        MF => "MF",
        PM => "PM",
        VC => "VC",
        WS => "WS",
        SM => "SM",
        ST => "ST",
        SA => "SA",
        SN => "SN",
        RS => "RS",
        SC => "SC",
        SL => "SL",
        SG => "SG",
        SX => "SX",
        SK => "SK",
        SI => "SI",
        SB => "SB",
        SO => "SO",
        ZA => "ZA",
        GS => "GS",
        SS => "SS",
        ES => "ES",
        LK => "LK",
        SD => "SD",
        SR => "SR",
        SJ => "SJ",
        SZ => "SZ",
        SE => "SE",
        CH => "CH",
        SY => "SY",
        TW => "TW",
        TJ => "TJ",
        TZ => "TZ",
        TH => "TH",
        TL => "TL",
        TG => "TG",
        TK => "TK",
        TO => "TO",
        TT => "TT",
        TN => "TN",
        TR => "TR",
        TM => "TM",
        TC => "TC",
        TV => "TV",
        UG => "UG",
        UA => "UA",
        AE => "AE",
        GB => "GB",
        US => "US",
        UM => "UM",
        UY => "UY",
        UZ => "UZ",
        VU => "VU",
        VE => "VE",
        VN => "VN",
        VG => "VG",
        VI => "VI",
        WF => "WF",
        EH => "EH",
        YE => "YE",
        ZM => "ZM",
        ZW => "ZW"
    }
}

wire_enum! {
    pub enum EmailVerificationStatus {
        Unverified => "Unverified",
        Pending => "Pending",
        Confirmed => "Confirmed"
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

wire_enum! {
    pub enum PushNotificationPlatform {
        ApplePushNotificationService => "ApplePushNotificationService",
        GoogleCloudMessaging => "GoogleCloudMessaging"
    }
}

wire_enum! {
    pub enum SubscriptionProviderStatus {
        NoError => "NoError",
        Cancelled => "Cancelled",
        UnknownError => "UnknownError",
        BillingError => "BillingError",
        ProductUnavailable => "ProductUnavailable",
        CustomerDidNotAcceptPriceChange => "CustomerDidNotAcceptPriceChange",
        FreeTrial => "FreeTrial",
        PaymentPending => "PaymentPending"
    }
}

wire_enum! {
    pub enum TriggerType {
        HTTP => "HTTP",
        Queue => "Queue"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AdCampaignAttributionModel {
    #[serde(with = "json::timestamp")]
    pub attributed_at: DateTime<Utc>,

    #[serde(with = "json::string")]
    pub campaign_id: String,

    #[serde(with = "json::string")]
    pub platform: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ContactEmailInfoModel {
    #[serde(with = "json::string")]
    pub email_address: String,

    #[serde(with = "json::string")]
    pub name: String,

    #[serde(with = "json::enumeration")]
    pub verification_status: Option<EmailVerificationStatus>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct EmptyResult {}

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
pub struct ScriptExecutionError {
    #[serde(with = "json::string")]
    pub error: String,

    #[serde(with = "json::string")]
    pub message: String,

    #[serde(with = "json::string")]
    pub stack_trace: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct LogStatement {
    pub data: Value,

    #[serde(with = "json::string")]
    pub level: String,

    #[serde(with = "json::string")]
    pub message: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ExecuteCloudScriptResult {
    #[serde(rename = "APIRequestsIssued", deserialize_with = "json::or_default")]
    pub api_requests_issued: i32,

    pub error: Option<ScriptExecutionError>,

    #[serde(deserialize_with = "json::or_default")]
    pub execution_time_seconds: f64,

    #[serde(with = "json::string")]
    pub function_name: String,

    pub function_result: Value,
    pub function_result_too_large: Option<bool>,

    #[serde(deserialize_with = "json::or_default")]
    pub http_requests_issued: i32,

    #[serde(with = "json::list")]
    pub logs: Vec<LogStatement>,

    pub logs_too_large: Option<bool>,

    #[serde(deserialize_with = "json::or_default")]
    pub memory_consumed_bytes: u32,

    #[serde(deserialize_with = "json::or_default")]
    pub processor_time_seconds: f64,

    #[serde(deserialize_with = "json::or_default")]
    pub revision: i32
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ExecuteEntityCloudScriptRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    pub entity: Option<EntityKey>,

    #[serde(with = "json::string")]
    pub function_name: String,

    pub function_parameter: Value,
    pub generate_play_stream_event: Option<bool>,

    #[serde(with = "json::enumeration")]
    pub revision_selection: Option<CloudScriptRevisionOption>,

    pub specific_revision: Option<i32>
}

/// Call registered Azure Function
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ExecuteFunctionRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    pub entity: Option<EntityKey>,

    #[serde(with = "json::string")]
    pub function_name: String,

    pub function_parameter: Value,
    pub generate_play_stream_event: Option<bool>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct FunctionExecutionError {
    #[serde(with = "json::string")]
    pub error: String,

    #[serde(with = "json::string")]
    pub message: String,

    #[serde(with = "json::string")]
    pub stack_trace: String
}

/// Result of an Azure Function
///
/// `function_result` is passed through as arbitrary JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ExecuteFunctionResult {
    pub error: Option<FunctionExecutionError>,

    #[serde(deserialize_with = "json::or_default")]
    pub execution_time_milliseconds: i32,

    #[serde(with = "json::string")]
    pub function_name: String,

    pub function_result: Value,
    pub function_result_too_large: Option<bool>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct FunctionModel {
    #[serde(with = "json::string")]
    pub function_address: String,

    #[serde(with = "json::string")]
    pub function_name: String,

    #[serde(with = "json::string")]
    pub trigger_type: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetFunctionRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(with = "json::string")]
    pub function_name: String,

    #[serde(with = "json::string")]
    pub title_id: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetFunctionResult {
    #[serde(with = "json::string")]
    pub connection_string: String,

    #[serde(with = "json::string")]
    pub function_url: String,

    #[serde(with = "json::string")]
    pub queue_name: String,

    #[serde(with = "json::string")]
    pub trigger_type: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct HttpFunctionModel {
    #[serde(with = "json::string")]
    pub function_name: String,

    #[serde(with = "json::string")]
    pub function_url: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct LinkedPlatformAccountModel {
    #[serde(with = "json::string")]
    pub email: String,

    #[serde(with = "json::enumeration")]
    pub platform: Option<LoginIdentityProvider>,

    #[serde(with = "json::string")]
    pub platform_user_id: String,

    #[serde(with = "json::string")]
    pub username: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListFunctionsRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListFunctionsResult {
    #[serde(with = "json::list")]
    pub functions: Vec<FunctionModel>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListHttpFunctionsResult {
    #[serde(with = "json::list")]
    pub functions: Vec<HttpFunctionModel>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct QueuedFunctionModel {
    #[serde(with = "json::string")]
    pub connection_string: String,

    #[serde(with = "json::string")]
    pub function_name: String,

    #[serde(with = "json::string")]
    pub queue_name: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListQueuedFunctionsResult {
    #[serde(with = "json::list")]
    pub functions: Vec<QueuedFunctionModel>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct LocationModel {
    #[serde(with = "json::string")]
    pub city: String,

    #[serde(with = "json::enumeration")]
    pub continent_code: Option<ContinentCode>,

    #[serde(with = "json::enumeration")]
    pub country_code: Option<CountryCode>,

    pub latitude: Option<f64>,
    pub longitude: Option<f64>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SubscriptionModel {
    #[serde(with = "json::timestamp")]
    pub expiration: DateTime<Utc>,

    #[serde(with = "json::timestamp")]
    pub initial_subscription_time: DateTime<Utc>,

    #[serde(deserialize_with = "json::or_default")]
    pub is_active: bool,

    #[serde(with = "json::enumeration")]
    pub status: Option<SubscriptionProviderStatus>,

    #[serde(with = "json::string")]
    pub subscription_id: String,

    #[serde(with = "json::string")]
    pub subscription_item_id: String,

    #[serde(with = "json::string")]
    pub subscription_provider: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct MembershipModel {
    #[serde(deserialize_with = "json::or_default")]
    pub is_active: bool,

    #[serde(with = "json::timestamp")]
    pub membership_expiration: DateTime<Utc>,

    #[serde(with = "json::string")]
    pub membership_id: String,

    #[serde(with = "json::timestamp::optional")]
    pub override_expiration: Option<DateTime<Utc>>,

    #[serde(with = "json::list")]
    pub subscriptions: Vec<SubscriptionModel>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct NameIdentifier {
    #[serde(with = "json::string")]
    pub id: String,

    #[serde(with = "json::string")]
    pub name: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PushNotificationRegistrationModel {
    #[serde(rename = "NotificationEndpointARN", with = "json::string")]
    pub notification_endpoint_arn: String,

    #[serde(with = "json::enumeration")]
    pub platform: Option<PushNotificationPlatform>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct StatisticModel {
    #[serde(with = "json::string")]
    pub name: String,

    #[serde(deserialize_with = "json::or_default")]
    pub value: i32,

    #[serde(deserialize_with = "json::or_default")]
    pub version: i32
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct TagModel {
    #[serde(with = "json::string")]
    pub tag_value: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ValueToDateModel {
    #[serde(with = "json::string")]
    pub currency: String,

    #[serde(deserialize_with = "json::or_default")]
    pub total_value: u32,

    #[serde(with = "json::string")]
    pub total_value_as_decimal: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PlayerProfileModel {
    #[serde(with = "json::list")]
    pub ad_campaign_attributions: Vec<AdCampaignAttributionModel>,

    #[serde(with = "json::string")]
    pub avatar_url: String,

    #[serde(with = "json::timestamp::optional")]
    pub banned_until: Option<DateTime<Utc>>,

    #[serde(with = "json::list")]
    pub contact_email_addresses: Vec<ContactEmailInfoModel>,

    #[serde(with = "json::timestamp::optional")]
    pub created: Option<DateTime<Utc>>,

    #[serde(with = "json::string")]
    pub display_name: String,

    #[serde(with = "json::list")]
    pub experiment_variants: Vec<String>,

    #[serde(with = "json::timestamp::optional")]
    pub last_login: Option<DateTime<Utc>>,

    #[serde(with = "json::list")]
    pub linked_accounts: Vec<LinkedPlatformAccountModel>,

    #[serde(with = "json::list")]
    pub locations: Vec<LocationModel>,

    #[serde(with = "json::list")]
    pub memberships: Vec<MembershipModel>,

    #[serde(with = "json::enumeration")]
    pub origination: Option<LoginIdentityProvider>,

    #[serde(with = "json::string")]
    pub player_id: String,

    #[serde(with = "json::string")]
    pub publisher_id: String,

    #[serde(with = "json::list")]
    pub push_notification_registrations: Vec<PushNotificationRegistrationModel>,

    #[serde(with = "json::list")]
    pub statistics: Vec<StatisticModel>,

    #[serde(with = "json::list")]
    pub tags: Vec<TagModel>,

    #[serde(with = "json::string")]
    pub title_id: String,

    #[serde(rename = "TotalValueToDateInUSD")]
    pub total_value_to_date_in_usd: Option<u32>,

    #[serde(with = "json::list")]
    pub values_to_date: Vec<ValueToDateModel>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PlayStreamEventEnvelopeModel {
    #[serde(with = "json::string")]
    pub entity_id: String,

    #[serde(with = "json::string")]
    pub entity_type: String,

    #[serde(with = "json::string")]
    pub event_data: String,

    #[serde(with = "json::string")]
    pub event_name: String,

    #[serde(with = "json::string")]
    pub event_namespace: String,

    #[serde(with = "json::string")]
    pub event_settings: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PostFunctionResultForEntityTriggeredActionRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(deserialize_with = "json::or_default")]
    pub entity: EntityKey,

    #[serde(deserialize_with = "json::or_default")]
    pub function_result: ExecuteFunctionResult
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PostFunctionResultForFunctionExecutionRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(deserialize_with = "json::or_default")]
    pub entity: EntityKey,

    #[serde(deserialize_with = "json::or_default")]
    pub function_result: ExecuteFunctionResult
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PostFunctionResultForPlayerTriggeredActionRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    pub entity: Option<EntityKey>,

    #[serde(deserialize_with = "json::or_default")]
    pub function_result: ExecuteFunctionResult,

    #[serde(deserialize_with = "json::or_default")]
    pub player_profile: PlayerProfileModel,

    pub play_stream_event_envelope: Option<PlayStreamEventEnvelopeModel>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PostFunctionResultForScheduledTaskRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(deserialize_with = "json::or_default")]
    pub entity: EntityKey,

    #[serde(deserialize_with = "json::or_default")]
    pub function_result: ExecuteFunctionResult,

    #[serde(deserialize_with = "json::or_default")]
    pub scheduled_task_id: NameIdentifier
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct RegisterHttpFunctionRequest {
    #[serde(with = "json::string")]
    pub azure_resource_id: String,

    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(with = "json::string")]
    pub function_name: String,

    #[serde(with = "json::string")]
    pub function_url: String,

    #[serde(with = "json::string")]
    pub title_id: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct RegisterQueuedFunctionRequest {
    #[serde(with = "json::string")]
    pub azure_resource_id: String,

    #[serde(with = "json::string")]
    pub connection_string: String,

    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(with = "json::string")]
    pub function_name: String,

    #[serde(with = "json::string")]
    pub queue_name: String,

    #[serde(with = "json::string")]
    pub title_id: String
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct UnregisterFunctionRequest {
    #[serde(deserialize_with = "json::or_default")]
    pub custom_tags: HashMap<String, String>,

    #[serde(with = "json::string")]
    pub function_name: String,

    #[serde(with = "json::string")]
    pub title_id: String
}
