use std::collections::HashMap;
use std::fmt::Write;

use serde::{Serialize, Deserialize};
use thiserror::Error;

use crate::auth::AuthKind;
use crate::json;

#[derive(Error, Debug)]
pub enum PlayFabError {
    /// Title id is required to build the request URL
    #[error("Title id is not set")]
    TitleIdMissing,

    /// Route requires credentials which are not stored in the auth context
    #[error("Missing credentials for {0} authentication")]
    MissingCredentials(AuthKind),

    #[error("Failed to send request: {0}")]
    Transport(#[from] minreq::Error),

    /// Server responded with non-successful status and non-JSON body
    #[error("Unexpected HTTP status {status}: {body}")]
    HttpStatus {
        status: i32,
        body: String
    },

    #[error("Failed to process JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Server processed the request and reported an error
    #[error(transparent)]
    Api(#[from] ApiError)
}

impl PlayFabError {
    /// Get API error info if the server reported an error
    #[inline]
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(error) => Some(error),
            _ => None
        }
    }
}

/// Error envelope returned by the API
///
/// ```json
/// {
///     "code": 400,
///     "status": "BadRequest",
///     "error": "InvalidParams",
///     "errorCode": 1000,
///     "errorMessage": "Invalid input parameters",
///     "errorDetails": { "Entity": ["The Entity field is required."] }
/// }
/// ```
#[derive(Error, Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[error("PlayFab API error {error} ({error_code}): {error_message}")]
pub struct ApiError {
    #[serde(rename = "code", deserialize_with = "json::or_default")]
    pub http_code: i32,

    #[serde(rename = "status", deserialize_with = "json::or_default")]
    pub http_status: String,

    #[serde(deserialize_with = "json::or_default")]
    pub error: String,

    #[serde(deserialize_with = "json::or_default")]
    pub error_code: i32,

    #[serde(deserialize_with = "json::or_default")]
    pub error_message: String,

    #[serde(deserialize_with = "json::or_default")]
    pub error_details: HashMap<String, Vec<String>>,

    pub retry_after_seconds: Option<u32>
}

impl ApiError {
    /// Try to recognize the error name
    #[inline]
    pub fn kind(&self) -> Option<ErrorCode> {
        ErrorCode::from_wire(&self.error)
    }

    /// Whether the same request may succeed later
    pub fn is_retryable(&self) -> bool {
        self.retry_after_seconds.is_some()
            || matches!(self.http_code, 429 | 500 | 502 | 503 | 504)
            || matches!(self.kind(), Some(ErrorCode::ServiceUnavailable | ErrorCode::DownstreamServiceUnavailable))
    }

    /// Human readable error message with all the details
    ///
    /// ```text
    /// Invalid input parameters
    /// Entity: The Entity field is required.
    /// FunctionName: The FunctionName field is required.
    /// ```
    pub fn report(&self) -> String {
        let mut report = self.error_message.clone();

        let mut keys = self.error_details.keys().collect::<Vec<_>>();

        keys.sort();

        for key in keys {
            let _ = write!(report, "\n{key}: {}", self.error_details[key].join(", "));
        }

        report
    }
}

wire_enum! {
    /// Well-known error names reported in the `error` field
    pub enum ErrorCode {
        InvalidParams => "InvalidParams",
        AccountNotFound => "AccountNotFound",
        AccountBanned => "AccountBanned",
        InvalidUsernameOrPassword => "InvalidUsernameOrPassword",
        InvalidTitleId => "InvalidTitleId",
        InvalidEmailAddress => "InvalidEmailAddress",
        EmailAddressNotAvailable => "EmailAddressNotAvailable",
        InvalidUsername => "InvalidUsername",
        InvalidPassword => "InvalidPassword",
        UsernameNotAvailable => "UsernameNotAvailable",
        AccountAlreadyLinked => "AccountAlreadyLinked",
        LinkedAccountAlreadyClaimed => "LinkedAccountAlreadyClaimed",
        AccountNotLinked => "AccountNotLinked",
        ItemNotFound => "ItemNotFound",
        InsufficientFunds => "InsufficientFunds",
        InvalidRequest => "InvalidRequest",
        NotAuthenticated => "NotAuthenticated",
        NotAuthorized => "NotAuthorized",
        EntityTokenExpired => "EntityTokenExpired",
        ServiceUnavailable => "ServiceUnavailable",
        DownstreamServiceUnavailable => "DownstreamServiceUnavailable",
        InternalServerError => "InternalServerError"
    }
}
