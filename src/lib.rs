#[macro_use]
mod macros;

pub mod consts;
pub mod json;
pub mod model;
pub mod wire;
pub mod error;
pub mod settings;
pub mod auth;
pub mod client;

#[cfg(test)]
mod tests;

#[cfg(feature = "authentication")]
pub mod authentication;

#[cfg(feature = "cloud-script")]
pub mod cloud_script;

#[cfg(feature = "data")]
pub mod data;

#[cfg(feature = "experimentation")]
pub mod experimentation;

#[cfg(feature = "groups")]
pub mod groups;

#[cfg(feature = "insights")]
pub mod insights;

#[cfg(feature = "matchmaker")]
pub mod matchmaker;

#[cfg(feature = "multiplayer")]
pub mod multiplayer;

#[cfg(feature = "profiles")]
pub mod profiles;

pub mod prelude {
    pub use super::consts::*;
    pub use super::model::Model;
    pub use super::wire::WireEnum;
    pub use super::error::{PlayFabError, ApiError, ErrorCode};
    pub use super::settings::Settings;
    pub use super::auth::{AuthContext, AuthKind};
    pub use super::client::PlayFabClient;
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

lazy_static::lazy_static! {
    /// Requests timeout in seconds
    ///
    /// Can be overridden with `PLAYFAB_REQUESTS_TIMEOUT` environment variable
    pub static ref REQUESTS_TIMEOUT: u64 = match std::env::var("PLAYFAB_REQUESTS_TIMEOUT") {
        Ok(timeout) => timeout.parse().unwrap_or(consts::DEFAULT_REQUESTS_TIMEOUT),
        Err(_) => consts::DEFAULT_REQUESTS_TIMEOUT
    };
}
