//! Multiplayer servers and matchmaking
//!
//! Matchmaking routes live under `/Match`, everything else under `/MultiplayerServer`.

pub mod models;

use models::*;

api_calls! {
    fn cancel_all_matchmaking_tickets_for_player("/Match/CancelAllMatchmakingTicketsForPlayer", EntityToken): CancelAllMatchmakingTicketsForPlayerRequest => CancelAllMatchmakingTicketsForPlayerResult;

    fn cancel_all_server_backfill_tickets_for_player("/Match/CancelAllServerBackfillTicketsForPlayer", EntityToken): CancelAllServerBackfillTicketsForPlayerRequest => CancelAllServerBackfillTicketsForPlayerResult;

    fn cancel_matchmaking_ticket("/Match/CancelMatchmakingTicket", EntityToken): CancelMatchmakingTicketRequest => CancelMatchmakingTicketResult;

    fn cancel_server_backfill_ticket("/Match/CancelServerBackfillTicket", EntityToken): CancelServerBackfillTicketRequest => CancelServerBackfillTicketResult;

    fn create_build_alias("/MultiplayerServer/CreateBuildAlias", EntityToken): CreateBuildAliasRequest => BuildAliasDetailsResponse;

    fn create_build_with_custom_container("/MultiplayerServer/CreateBuildWithCustomContainer", EntityToken): CreateBuildWithCustomContainerRequest => CreateBuildWithCustomContainerResponse;

    fn create_build_with_managed_container("/MultiplayerServer/CreateBuildWithManagedContainer", EntityToken): CreateBuildWithManagedContainerRequest => CreateBuildWithManagedContainerResponse;

    fn create_build_with_process_based_server("/MultiplayerServer/CreateBuildWithProcessBasedServer", EntityToken): CreateBuildWithProcessBasedServerRequest => CreateBuildWithProcessBasedServerResponse;

    /// Create matchmaking ticket as a client
    fn create_matchmaking_ticket("/Match/CreateMatchmakingTicket", EntityToken): CreateMatchmakingTicketRequest => CreateMatchmakingTicketResult;

    fn create_remote_user("/MultiplayerServer/CreateRemoteUser", EntityToken): CreateRemoteUserRequest => CreateRemoteUserResponse;

    fn create_server_backfill_ticket("/Match/CreateServerBackfillTicket", EntityToken): CreateServerBackfillTicketRequest => CreateServerBackfillTicketResult;

    fn create_server_matchmaking_ticket("/Match/CreateServerMatchmakingTicket", EntityToken): CreateServerMatchmakingTicketRequest => CreateMatchmakingTicketResult;

    fn create_title_multiplayer_servers_quota_change("/MultiplayerServer/CreateTitleMultiplayerServersQuotaChange", EntityToken): CreateTitleMultiplayerServersQuotaChangeRequest => CreateTitleMultiplayerServersQuotaChangeResponse;

    fn delete_asset("/MultiplayerServer/DeleteAsset", EntityToken): DeleteAssetRequest => EmptyResponse;

    fn delete_build("/MultiplayerServer/DeleteBuild", EntityToken): DeleteBuildRequest => EmptyResponse;

    fn delete_build_alias("/MultiplayerServer/DeleteBuildAlias", EntityToken): DeleteBuildAliasRequest => EmptyResponse;

    fn delete_build_region("/MultiplayerServer/DeleteBuildRegion", EntityToken): DeleteBuildRegionRequest => EmptyResponse;

    fn delete_certificate("/MultiplayerServer/DeleteCertificate", EntityToken): DeleteCertificateRequest => EmptyResponse;

    fn delete_container_image_repository("/MultiplayerServer/DeleteContainerImageRepository", EntityToken): DeleteContainerImageRequest => EmptyResponse;

    fn delete_remote_user("/MultiplayerServer/DeleteRemoteUser", EntityToken): DeleteRemoteUserRequest => EmptyResponse;

    fn enable_multiplayer_servers_for_title("/MultiplayerServer/EnableMultiplayerServersForTitle", EntityToken): EnableMultiplayerServersForTitleRequest => EnableMultiplayerServersForTitleResponse;

    fn get_asset_download_url("/MultiplayerServer/GetAssetDownloadUrl", EntityToken): GetAssetDownloadUrlRequest => GetAssetDownloadUrlResponse;

    fn get_asset_upload_url("/MultiplayerServer/GetAssetUploadUrl", EntityToken): GetAssetUploadUrlRequest => GetAssetUploadUrlResponse;

    fn get_build("/MultiplayerServer/GetBuild", EntityToken): GetBuildRequest => GetBuildResponse;

    fn get_build_alias("/MultiplayerServer/GetBuildAlias", EntityToken): GetBuildAliasRequest => BuildAliasDetailsResponse;

    fn get_container_registry_credentials("/MultiplayerServer/GetContainerRegistryCredentials", EntityToken): GetContainerRegistryCredentialsRequest => GetContainerRegistryCredentialsResponse;

    fn get_match("/Match/GetMatch", EntityToken): GetMatchRequest => GetMatchResult;

    fn get_matchmaking_ticket("/Match/GetMatchmakingTicket", EntityToken): GetMatchmakingTicketRequest => GetMatchmakingTicketResult;

    fn get_multiplayer_server_details("/MultiplayerServer/GetMultiplayerServerDetails", EntityToken): GetMultiplayerServerDetailsRequest => GetMultiplayerServerDetailsResponse;

    fn get_multiplayer_server_logs("/MultiplayerServer/GetMultiplayerServerLogs", EntityToken): GetMultiplayerServerLogsRequest => GetMultiplayerServerLogsResponse;

    fn get_multiplayer_session_logs_by_session_id("/MultiplayerServer/GetMultiplayerSessionLogsBySessionId", EntityToken): GetMultiplayerSessionLogsBySessionIdRequest => GetMultiplayerServerLogsResponse;

    fn get_queue_statistics("/Match/GetQueueStatistics", EntityToken): GetQueueStatisticsRequest => GetQueueStatisticsResult;

    fn get_remote_login_endpoint("/MultiplayerServer/GetRemoteLoginEndpoint", EntityToken): GetRemoteLoginEndpointRequest => GetRemoteLoginEndpointResponse;

    fn get_server_backfill_ticket("/Match/GetServerBackfillTicket", EntityToken): GetServerBackfillTicketRequest => GetServerBackfillTicketResult;

    fn get_title_enabled_for_multiplayer_servers_status("/MultiplayerServer/GetTitleEnabledForMultiplayerServersStatus", EntityToken): GetTitleEnabledForMultiplayerServersStatusRequest => GetTitleEnabledForMultiplayerServersStatusResponse;

    fn get_title_multiplayer_servers_quota_change("/MultiplayerServer/GetTitleMultiplayerServersQuotaChange", EntityToken): GetTitleMultiplayerServersQuotaChangeRequest => GetTitleMultiplayerServersQuotaChangeResponse;

    fn get_title_multiplayer_servers_quotas("/MultiplayerServer/GetTitleMultiplayerServersQuotas", EntityToken): GetTitleMultiplayerServersQuotasRequest => GetTitleMultiplayerServersQuotasResponse;

    fn join_matchmaking_ticket("/Match/JoinMatchmakingTicket", EntityToken): JoinMatchmakingTicketRequest => JoinMatchmakingTicketResult;

    fn list_archived_multiplayer_servers("/MultiplayerServer/ListArchivedMultiplayerServers", EntityToken): ListMultiplayerServersRequest => ListMultiplayerServersResponse;

    fn list_asset_summaries("/MultiplayerServer/ListAssetSummaries", EntityToken): ListAssetSummariesRequest => ListAssetSummariesResponse;

    fn list_build_aliases("/MultiplayerServer/ListBuildAliases", EntityToken): ListBuildAliasesRequest => ListBuildAliasesResponse;

    fn list_build_summaries_v2("/MultiplayerServer/ListBuildSummariesV2", EntityToken): ListBuildSummariesRequest => ListBuildSummariesResponse;

    fn list_certificate_summaries("/MultiplayerServer/ListCertificateSummaries", EntityToken): ListCertificateSummariesRequest => ListCertificateSummariesResponse;

    fn list_container_images("/MultiplayerServer/ListContainerImages", EntityToken): ListContainerImagesRequest => ListContainerImagesResponse;

    fn list_container_image_tags("/MultiplayerServer/ListContainerImageTags", EntityToken): ListContainerImageTagsRequest => ListContainerImageTagsResponse;

    fn list_matchmaking_tickets_for_player("/Match/ListMatchmakingTicketsForPlayer", EntityToken): ListMatchmakingTicketsForPlayerRequest => ListMatchmakingTicketsForPlayerResult;

    fn list_multiplayer_servers("/MultiplayerServer/ListMultiplayerServers", EntityToken): ListMultiplayerServersRequest => ListMultiplayerServersResponse;

    fn list_party_qos_servers("/MultiplayerServer/ListPartyQosServers", EntityToken): ListPartyQosServersRequest => ListPartyQosServersResponse;

    fn list_qos_servers_for_title("/MultiplayerServer/ListQosServersForTitle", EntityToken): ListQosServersForTitleRequest => ListQosServersForTitleResponse;

    fn list_server_backfill_tickets_for_player("/Match/ListServerBackfillTicketsForPlayer", EntityToken): ListServerBackfillTicketsForPlayerRequest => ListServerBackfillTicketsForPlayerResult;

    fn list_title_multiplayer_servers_quota_changes("/MultiplayerServer/ListTitleMultiplayerServersQuotaChanges", EntityToken): ListTitleMultiplayerServersQuotaChangesRequest => ListTitleMultiplayerServersQuotaChangesResponse;

    fn list_virtual_machine_summaries("/MultiplayerServer/ListVirtualMachineSummaries", EntityToken): ListVirtualMachineSummariesRequest => ListVirtualMachineSummariesResponse;

    /// Request new multiplayer server session
    fn request_multiplayer_server("/MultiplayerServer/RequestMultiplayerServer", EntityToken): RequestMultiplayerServerRequest => RequestMultiplayerServerResponse;

    fn rollover_container_registry_credentials("/MultiplayerServer/RolloverContainerRegistryCredentials", EntityToken): RolloverContainerRegistryCredentialsRequest => RolloverContainerRegistryCredentialsResponse;

    fn shutdown_multiplayer_server("/MultiplayerServer/ShutdownMultiplayerServer", EntityToken): ShutdownMultiplayerServerRequest => EmptyResponse;

    fn untag_container_image("/MultiplayerServer/UntagContainerImage", EntityToken): UntagContainerImageRequest => EmptyResponse;

    fn update_build_alias("/MultiplayerServer/UpdateBuildAlias", EntityToken): UpdateBuildAliasRequest => BuildAliasDetailsResponse;

    fn update_build_name("/MultiplayerServer/UpdateBuildName", EntityToken): UpdateBuildNameRequest => EmptyResponse;

    fn update_build_region("/MultiplayerServer/UpdateBuildRegion", EntityToken): UpdateBuildRegionRequest => EmptyResponse;

    fn update_build_regions("/MultiplayerServer/UpdateBuildRegions", EntityToken): UpdateBuildRegionsRequest => EmptyResponse;

    fn upload_certificate("/MultiplayerServer/UploadCertificate", EntityToken): UploadCertificateRequest => EmptyResponse;
}
