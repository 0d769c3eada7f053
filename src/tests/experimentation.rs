use chrono::{TimeZone, Utc};
use serde_json::json;

use crate::prelude::*;
use crate::experimentation::models::*;

#[test]
pub fn test_experiments() {
    let result = GetExperimentsResult::from_json(&json!({
        "Experiments": [
            {
                "Id": "exp-1",
                "Name": "Bigger rewards",
                "ExperimentType": "Active",
                "State": "Started",
                "StartDate": "2024-04-01T00:00:00Z",
                "EndDate": null,
                "Variants": [
                    { "Id": "a", "Name": "Control", "IsControl": true, "TrafficPercentage": 50 },
                    { "Id": "b", "Name": "Treatment", "TrafficPercentage": 50, "Variables": null }
                ]
            },
            {
                "Id": "exp-2",
                "State": "Archived"
            }
        ]
    })).unwrap();

    let experiment = &result.experiments[0];

    assert_eq!(experiment.experiment_type, Some(ExperimentType::Active));
    assert_eq!(experiment.state, Some(ExperimentState::Started));
    assert_eq!(experiment.start_date, Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap());
    assert_eq!(experiment.end_date, None);
    assert!(experiment.variants[0].is_control);
    assert!(!experiment.variants[1].is_control);
    assert_eq!(experiment.variants[1].traffic_percentage, 50);
    assert!(experiment.variants[1].variables.is_empty());

    assert_eq!(result.experiments[1].state, None);
    assert_eq!(result.experiments[1].start_date, Experiment::default().start_date);
}

#[test]
pub fn test_create_experiment_request() {
    let request = CreateExperimentRequest {
        name: String::from("Bigger rewards"),
        experiment_type: Some(ExperimentType::Snapshot),
        start_date: Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap(),
        ..CreateExperimentRequest::default()
    };

    let value = request.to_json().unwrap();

    assert_eq!(value["ExperimentType"], "Snapshot");
    assert_eq!(value["StartDate"], "2024-04-01T00:00:00.000Z");
    assert!(value["EndDate"].is_null());
    assert!(value["Variants"].is_null());
    assert!(value["ExclusionGroupTrafficAllocation"].is_null());
}
