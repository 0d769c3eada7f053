use crate::prelude::*;

#[test]
pub fn test_auth_headers() {
    let auth = AuthContext::with_entity_token("entity-token");

    assert_eq!(auth.header(AuthKind::EntityToken), Some((HEADER_ENTITY_TOKEN, "entity-token")));
    assert_eq!(auth.header(AuthKind::SecretKey), None);
    assert_eq!(auth.header(AuthKind::SessionTicket), None);
    assert_eq!(auth.header(AuthKind::Any), Some((HEADER_ENTITY_TOKEN, "entity-token")));

    let auth = AuthContext::with_secret_key("secret");

    assert_eq!(auth.header(AuthKind::SecretKey), Some(("X-SecretKey", "secret")));
    assert_eq!(auth.header(AuthKind::EntityToken), None);
    assert_eq!(auth.header(AuthKind::Any), Some(("X-SecretKey", "secret")));
}

#[test]
pub fn test_any_auth_preference() {
    let mut auth = AuthContext {
        client_session_ticket: Some(String::from("ticket")),
        entity_token: Some(String::from("token")),
        developer_secret_key: Some(String::from("secret")),
        ..AuthContext::default()
    };

    assert_eq!(auth.header(AuthKind::Any), Some((HEADER_SECRET_KEY, "secret")));

    auth.developer_secret_key = None;

    assert_eq!(auth.header(AuthKind::Any), Some((HEADER_SESSION_TICKET, "ticket")));

    auth.client_session_ticket = Some(String::new());

    assert_eq!(auth.header(AuthKind::Any), Some((HEADER_ENTITY_TOKEN, "token")));
    assert_eq!(auth.header(AuthKind::SessionTicket), None);
}

#[test]
pub fn test_entity_login() {
    let mut auth = AuthContext::with_secret_key("secret");

    assert!(!auth.is_entity_logged_in());

    auth.handle_entity_login("token", "ABCDEF", "title_player_account");

    assert!(auth.is_entity_logged_in());
    assert_eq!(auth.entity_id.as_deref(), Some("ABCDEF"));
    assert_eq!(auth.entity_type.as_deref(), Some("title_player_account"));

    auth.forget_all_credentials();

    assert!(!auth.is_entity_logged_in());
    assert_eq!(auth.entity_id, None);
    assert_eq!(auth.entity_type, None);
    assert_eq!(auth.developer_secret_key.as_deref(), Some("secret"));
}

#[test]
pub fn test_auth_debug_hides_secrets() {
    let mut auth = AuthContext::with_secret_key("very-secret-key");

    auth.handle_entity_login("very-secret-token", "ABCDEF", "title");

    let debug = format!("{auth:?}");

    assert!(!debug.contains("very-secret-key"));
    assert!(!debug.contains("very-secret-token"));
    assert!(debug.contains("ABCDEF"));
}
