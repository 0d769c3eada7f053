use std::fmt;

use crate::consts::*;

/// Credentials a route is called with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthKind {
    /// `X-EntityToken`, required by all entity APIs
    EntityToken,

    /// `X-SecretKey`, title developer secret key
    SecretKey,

    /// `X-Authorization`, client session ticket
    SessionTicket,

    /// Any of the above, preferring secret key, then session ticket,
    /// then entity token
    Any
}

impl fmt::Display for AuthKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::EntityToken   => "entity token",
            Self::SecretKey     => "secret key",
            Self::SessionTicket => "session ticket",
            Self::Any           => "any"
        })
    }
}

/// Credentials of a single player, title or service
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AuthContext {
    pub client_session_ticket: Option<String>,
    pub entity_token: Option<String>,
    pub entity_id: Option<String>,
    pub entity_type: Option<String>,
    pub developer_secret_key: Option<String>
}

impl AuthContext {
    /// Context with title developer secret key
    #[inline]
    pub fn with_secret_key(secret_key: impl ToString) -> Self {
        Self {
            developer_secret_key: Some(secret_key.to_string()),
            ..Self::default()
        }
    }

    /// Context with already obtained entity token
    #[inline]
    pub fn with_entity_token(entity_token: impl ToString) -> Self {
        Self {
            entity_token: Some(entity_token.to_string()),
            ..Self::default()
        }
    }

    /// Read `PLAYFAB_DEVELOPER_SECRET_KEY` and `PLAYFAB_ENTITY_TOKEN` variables
    pub fn from_env() -> Self {
        Self {
            developer_secret_key: std::env::var("PLAYFAB_DEVELOPER_SECRET_KEY").ok(),
            entity_token: std::env::var("PLAYFAB_ENTITY_TOKEN").ok(),
            ..Self::default()
        }
    }

    /// Remember entity credentials returned by the API
    pub fn handle_entity_login(&mut self, entity_token: impl ToString, entity_id: impl ToString, entity_type: impl ToString) {
        self.entity_token = Some(entity_token.to_string());
        self.entity_id = Some(entity_id.to_string());
        self.entity_type = Some(entity_type.to_string());
    }

    /// Drop player and entity credentials
    ///
    /// Developer secret key belongs to the title and is kept.
    pub fn forget_all_credentials(&mut self) {
        self.client_session_ticket = None;
        self.entity_token = None;
        self.entity_id = None;
        self.entity_type = None;
    }

    #[inline]
    pub fn is_entity_logged_in(&self) -> bool {
        self.entity_token.as_deref().is_some_and(|token| !token.is_empty())
    }

    /// Get header name and value for given credentials kind
    ///
    /// Returns `None` if needed credentials are not stored.
    pub fn header(&self, kind: AuthKind) -> Option<(&'static str, &str)> {
        fn non_empty(value: &Option<String>) -> Option<&str> {
            value.as_deref().filter(|value| !value.is_empty())
        }

        let secret_key = non_empty(&self.developer_secret_key).map(|value| (HEADER_SECRET_KEY, value));
        let session_ticket = non_empty(&self.client_session_ticket).map(|value| (HEADER_SESSION_TICKET, value));
        let entity_token = non_empty(&self.entity_token).map(|value| (HEADER_ENTITY_TOKEN, value));

        match kind {
            AuthKind::EntityToken   => entity_token,
            AuthKind::SecretKey     => secret_key,
            AuthKind::SessionTicket => session_ticket,

            AuthKind::Any => secret_key
                .or(session_ticket)
                .or(entity_token)
        }
    }
}

impl fmt::Debug for AuthContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthContext")
            .field("client_session_ticket", &self.client_session_ticket.is_some())
            .field("entity_token", &self.entity_token.is_some())
            .field("entity_id", &self.entity_id)
            .field("entity_type", &self.entity_type)
            .field("developer_secret_key", &self.developer_secret_key.is_some())
            .finish()
    }
}
