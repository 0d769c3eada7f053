pub mod models;

use models::*;

api_calls! {
    fn create_exclusion_group("/Experimentation/CreateExclusionGroup", EntityToken): CreateExclusionGroupRequest => CreateExclusionGroupResult;

    fn create_experiment("/Experimentation/CreateExperiment", EntityToken): CreateExperimentRequest => CreateExperimentResult;

    fn delete_exclusion_group("/Experimentation/DeleteExclusionGroup", EntityToken): DeleteExclusionGroupRequest => EmptyResponse;

    fn delete_experiment("/Experimentation/DeleteExperiment", EntityToken): DeleteExperimentRequest => EmptyResponse;

    fn get_exclusion_groups("/Experimentation/GetExclusionGroups", EntityToken): GetExclusionGroupsRequest => GetExclusionGroupsResult;

    fn get_exclusion_group_traffic("/Experimentation/GetExclusionGroupTraffic", EntityToken): GetExclusionGroupTrafficRequest => GetExclusionGroupTrafficResult;

    fn get_experiments("/Experimentation/GetExperiments", EntityToken): GetExperimentsRequest => GetExperimentsResult;

    fn get_latest_scorecard("/Experimentation/GetLatestScorecard", EntityToken): GetLatestScorecardRequest => GetLatestScorecardResult;

    fn get_treatment_assignment("/Experimentation/GetTreatmentAssignment", EntityToken): GetTreatmentAssignmentRequest => GetTreatmentAssignmentResult;

    fn start_experiment("/Experimentation/StartExperiment", EntityToken): StartExperimentRequest => EmptyResponse;

    fn stop_experiment("/Experimentation/StopExperiment", EntityToken): StopExperimentRequest => EmptyResponse;

    fn update_exclusion_group("/Experimentation/UpdateExclusionGroup", EntityToken): UpdateExclusionGroupRequest => EmptyResponse;

    fn update_experiment("/Experimentation/UpdateExperiment", EntityToken): UpdateExperimentRequest => EmptyResponse;
}
