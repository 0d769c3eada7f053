use serde_json::json;

use crate::prelude::*;
use crate::insights::models::*;

#[test]
pub fn test_insights_details() {
    let details = InsightsGetDetailsResponse::from_json(&json!({
        "DataUsageMb": 1024,
        "PerformanceLevel": 2,
        "RetentionDays": 90,
        "Limits": {
            "DefaultPerformanceLevel": 1,
            "SubMeters": [
                { "Level": 1, "CacheSizeMB": 256, "MaxMemoryPerQueryMB": 512, "CreditsPerMinute": 0.5 }
            ]
        },
        "PendingOperations": null
    })).unwrap();

    assert_eq!(details.data_usage_mb, 1024);
    assert_eq!(details.retention_days, 90);
    assert!(details.pending_operations.is_empty());

    let limits = details.limits.unwrap();
    let level = &limits.sub_meters[0];

    assert_eq!(limits.default_performance_level, 1);
    assert_eq!(level.cache_size_mb, 256);
    assert_eq!(level.max_memory_per_query_mb, 512);
    assert_eq!(level.credits_per_minute, 0.5);

    let encoded = level.to_json().unwrap();

    assert_eq!(encoded["CacheSizeMB"], 256);
    assert_eq!(encoded["MaxMemoryPerQueryMB"], 512);
    assert!(encoded.get("CacheSizeMb").is_none());
}

#[test]
pub fn test_insights_empty_request() {
    assert_eq!(InsightsEmptyRequest::default().to_json().unwrap(), json!({ "CustomTags": {} }));
}
