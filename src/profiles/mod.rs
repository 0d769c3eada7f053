//! Entity profiles and access policies

pub mod models;

use models::*;

api_calls! {
    fn get_global_policy("/Profile/GetGlobalPolicy", EntityToken): GetGlobalPolicyRequest => GetGlobalPolicyResponse;

    fn get_profile("/Profile/GetProfile", EntityToken): GetEntityProfileRequest => GetEntityProfileResponse;

    /// Get profiles of up to 25 entities
    fn get_profiles("/Profile/GetProfiles", EntityToken): GetEntityProfilesRequest => GetEntityProfilesResponse;

    fn get_title_players_from_master_player_account_ids("/Profile/GetTitlePlayersFromMasterPlayerAccountIds", EntityToken): GetTitlePlayersFromMasterPlayerAccountIdsRequest => GetTitlePlayersFromMasterPlayerAccountIdsResponse;

    fn set_global_policy("/Profile/SetGlobalPolicy", EntityToken): SetGlobalPolicyRequest => SetGlobalPolicyResponse;

    fn set_profile_language("/Profile/SetProfileLanguage", EntityToken): SetProfileLanguageRequest => SetProfileLanguageResponse;

    fn set_profile_policy("/Profile/SetProfilePolicy", EntityToken): SetEntityProfilePolicyRequest => SetEntityProfilePolicyResponse;
}
