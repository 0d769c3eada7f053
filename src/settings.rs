use anyhow::Context;

use crate::consts::PRODUCTION_ENVIRONMENT_URL;
use crate::error::PlayFabError;

/// Title-wide API settings
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Settings {
    /// Title id from the Game Manager, e.g. `1A2B3`
    pub title_id: String,

    /// Domain suffix appended to the title id, `.playfabapi.com` by default
    ///
    /// If it starts with `http://` or `https://` then it's used
    /// as is, without the title id. Handy for local endpoints.
    pub production_environment_url: String,

    /// Requests timeout in seconds
    pub request_timeout: u64
}

impl Default for Settings {
    #[inline]
    fn default() -> Self {
        Self {
            title_id: String::new(),
            production_environment_url: PRODUCTION_ENVIRONMENT_URL.to_string(),
            request_timeout: *crate::REQUESTS_TIMEOUT
        }
    }
}

impl Settings {
    #[inline]
    pub fn new(title_id: impl ToString) -> Self {
        Self {
            title_id: title_id.to_string(),
            ..Self::default()
        }
    }

    /// Read settings from `PLAYFAB_TITLE_ID` and optional
    /// `PLAYFAB_PRODUCTION_ENVIRONMENT_URL` variables
    pub fn from_env() -> anyhow::Result<Self> {
        let title_id = std::env::var("PLAYFAB_TITLE_ID")
            .context("PLAYFAB_TITLE_ID variable is not set")?;

        let mut settings = Self::new(title_id);

        if let Ok(url) = std::env::var("PLAYFAB_PRODUCTION_ENVIRONMENT_URL") {
            settings.production_environment_url = url;
        }

        Ok(settings)
    }

    /// Build full URL of the API route
    ///
    /// `/CloudScript/ExecuteFunction` -> `https://1A2B3.playfabapi.com/CloudScript/ExecuteFunction`
    pub fn url(&self, route: &str) -> Result<String, PlayFabError> {
        let base = self.production_environment_url.trim_end_matches('/');

        if base.starts_with("http://") || base.starts_with("https://") {
            return Ok(format!("{base}{route}"));
        }

        if self.title_id.is_empty() {
            return Err(PlayFabError::TitleIdMissing);
        }

        Ok(format!("https://{}{base}{route}", self.title_id))
    }
}
