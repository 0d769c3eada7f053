use serde::Serialize;
use serde_json::Value;

use crate::consts::*;
use crate::model::Model;
use crate::error::{PlayFabError, ApiError};
use crate::settings::Settings;
use crate::auth::{AuthContext, AuthKind};

/// Blocking API client
///
/// Holds title settings and credentials. Route functions of every
/// namespace (e.g. `cloud_script::execute_function`) take it by reference.
#[derive(Debug, Clone, Default)]
pub struct PlayFabClient {
    settings: Settings,
    auth: AuthContext
}

impl PlayFabClient {
    #[inline]
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            auth: AuthContext::default()
        }
    }

    #[inline]
    pub fn with_auth(settings: Settings, auth: AuthContext) -> Self {
        Self {
            settings,
            auth
        }
    }

    #[inline]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[inline]
    pub fn auth(&self) -> &AuthContext {
        &self.auth
    }

    #[inline]
    pub fn auth_mut(&mut self) -> &mut AuthContext {
        &mut self.auth
    }

    #[inline]
    pub fn forget_all_credentials(&mut self) {
        self.auth.forget_all_credentials();
    }

    /// Post request model to the API route and decode the response model
    pub fn post<Request, Response>(&self, route: &str, auth: AuthKind, request: &Request) -> Result<Response, PlayFabError>
    where
        Request: Serialize,
        Response: Model
    {
        let url = self.settings.url(route)?;

        let Some((auth_header, auth_value)) = self.auth.header(auth) else {
            tracing::warn!("Can't call {route}: missing {auth} credentials");

            return Err(PlayFabError::MissingCredentials(auth));
        };

        let body = serde_json::to_vec(request)?;

        tracing::debug!("Sending request to {url} ({} bytes)", body.len());

        let response = minreq::post(&url)
            .with_header("Content-Type", "application/json")
            .with_header(HEADER_SDK, SDK_VERSION_STRING)
            .with_header(HEADER_REPORT_ERROR_AS_SUCCESS, "true")
            .with_header(auth_header, auth_value)
            .with_body(body)
            .with_timeout(self.settings.request_timeout)
            .send()?;

        parse_response(response.status_code, response.as_bytes())
    }
}

/// Decode API response envelope
///
/// ```json
/// { "code": 200, "status": "OK", "data": { ... } }
/// ```
///
/// Errors are reported in the same envelope with `error`, `errorCode`,
/// `errorMessage` and `errorDetails` fields instead of `data`.
pub fn parse_response<T: Model>(status: i32, body: &[u8]) -> Result<T, PlayFabError> {
    let envelope = match serde_json::from_slice::<Value>(body) {
        Ok(envelope) => envelope,

        Err(_) if !(200..300).contains(&status) => {
            return Err(PlayFabError::HttpStatus {
                status,
                body: String::from_utf8_lossy(body).to_string()
            });
        }

        Err(err) => return Err(err.into())
    };

    let code = envelope.get("code")
        .and_then(Value::as_i64)
        .unwrap_or(status as i64);

    let has_error = envelope.get("error")
        .is_some_and(|error| !error.is_null());

    if code == 200 && !has_error {
        tracing::debug!("Request succeeded");

        return Ok(T::from_json(envelope.get("data").unwrap_or(&Value::Null))?);
    }

    let mut error = ApiError::from_json(&envelope)?;

    if error.http_code == 0 {
        error.http_code = status;
    }

    tracing::warn!("API error: {error}");

    Err(PlayFabError::Api(error))
}
