/// Default domain suffix appended to the title id
pub const PRODUCTION_ENVIRONMENT_URL: &str = ".playfabapi.com";

/// Default requests timeout in seconds
pub const DEFAULT_REQUESTS_TIMEOUT: u64 = 10;

/// Value of the `X-PlayFabSDK` header sent with every request
pub const SDK_VERSION_STRING: &str = concat!("PlayFabRustSdk-", env!("CARGO_PKG_VERSION"));

pub const HEADER_SDK: &str = "X-PlayFabSDK";
pub const HEADER_REPORT_ERROR_AS_SUCCESS: &str = "X-ReportErrorAsSuccess";
pub const HEADER_ENTITY_TOKEN: &str = "X-EntityToken";
pub const HEADER_SECRET_KEY: &str = "X-SecretKey";
pub const HEADER_SESSION_TICKET: &str = "X-Authorization";
