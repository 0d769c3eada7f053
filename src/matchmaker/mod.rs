//! Custom matchmaker API
//!
//! Called by the matchmaker service with the title developer secret key.

pub mod models;

use models::*;

api_calls! {
    /// Validate user ticket and get player id
    fn auth_user("/Matchmaker/AuthUser", SecretKey): AuthUserRequest => AuthUserResponse;

    fn player_joined("/Matchmaker/PlayerJoined", SecretKey): PlayerJoinedRequest => PlayerJoinedResponse;

    fn player_left("/Matchmaker/PlayerLeft", SecretKey): PlayerLeftRequest => PlayerLeftResponse;

    fn start_game("/Matchmaker/StartGame", SecretKey): StartGameRequest => StartGameResponse;

    fn user_info("/Matchmaker/UserInfo", SecretKey): UserInfoRequest => UserInfoResponse;
}
