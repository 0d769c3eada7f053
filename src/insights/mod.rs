pub mod models;

use models::*;

api_calls! {
    fn get_details("/Insights/GetDetails", EntityToken): InsightsEmptyRequest => InsightsGetDetailsResponse;

    fn get_limits("/Insights/GetLimits", EntityToken): InsightsEmptyRequest => InsightsGetLimitsResponse;

    fn get_operation_status("/Insights/GetOperationStatus", EntityToken): InsightsGetOperationStatusRequest => InsightsGetOperationStatusResponse;

    fn get_pending_operations("/Insights/GetPendingOperations", EntityToken): InsightsGetPendingOperationsRequest => InsightsGetPendingOperationsResponse;

    fn set_performance("/Insights/SetPerformance", EntityToken): InsightsSetPerformanceRequest => InsightsOperationResponse;

    fn set_storage_retention("/Insights/SetStorageRetention", EntityToken): InsightsSetStorageRetentionRequest => InsightsOperationResponse;
}
