//! Entity tokens

pub mod models;

use models::*;

use crate::client::PlayFabClient;
use crate::auth::AuthKind;
use crate::error::PlayFabError;

/// Get entity token and remember it in the client
///
/// Can be called with any stored credentials: a developer secret key
/// gives a title token, a session ticket gives a player token.
/// Following entity API calls of the same client use the new token.
#[tracing::instrument(level = "trace", skip(client, request))]
pub fn get_entity_token(client: &mut PlayFabClient, request: &GetEntityTokenRequest) -> Result<GetEntityTokenResponse, PlayFabError> {
    let response = client.post::<_, GetEntityTokenResponse>("/Authentication/GetEntityToken", AuthKind::Any, request)?;

    if !response.entity_token.is_empty() {
        let (entity_id, entity_type) = match &response.entity {
            Some(entity) => (entity.id.as_str(), entity.r#type.as_str()),
            None => ("", "")
        };

        tracing::debug!(entity_type, "Received entity token");

        client.auth_mut().handle_entity_login(&response.entity_token, entity_id, entity_type);
    }

    Ok(response)
}

api_calls! {
    /// Check whether the token is valid and get the entity it was issued for
    fn validate_entity_token("/Authentication/ValidateEntityToken", EntityToken): ValidateEntityTokenRequest => ValidateEntityTokenResponse;
}
