//! Cloud Script API
//!
//! All the routes require an entity token.
//!
//! ```no_run
//! use playfab_core::prelude::*;
//! use playfab_core::cloud_script::{self, models::ExecuteFunctionRequest};
//!
//! let client = PlayFabClient::with_auth(
//!     Settings::new("1A2B3"),
//!     AuthContext::with_entity_token("token")
//! );
//!
//! let result = cloud_script::execute_function(&client, &ExecuteFunctionRequest {
//!     function_name: String::from("HelloWorld"),
//!     ..ExecuteFunctionRequest::default()
//! })?;
//!
//! println!("{:?}", result.function_result);
//! # Ok::<(), PlayFabError>(())
//! ```

pub mod models;

use models::*;

api_calls! {
    /// Execute legacy Cloud Script revision in the context of the entity
    fn execute_entity_cloud_script("/CloudScript/ExecuteEntityCloudScript", EntityToken): ExecuteEntityCloudScriptRequest => ExecuteCloudScriptResult;

    /// Execute Azure Function registered for the title
    fn execute_function("/CloudScript/ExecuteFunction", EntityToken): ExecuteFunctionRequest => ExecuteFunctionResult;

    fn get_function("/CloudScript/GetFunction", EntityToken): GetFunctionRequest => GetFunctionResult;

    /// List all the registered functions
    fn list_functions("/CloudScript/ListFunctions", EntityToken): ListFunctionsRequest => ListFunctionsResult;

    fn list_http_functions("/CloudScript/ListHttpFunctions", EntityToken): ListFunctionsRequest => ListHttpFunctionsResult;

    fn list_queued_functions("/CloudScript/ListQueuedFunctions", EntityToken): ListFunctionsRequest => ListQueuedFunctionsResult;

    fn post_function_result_for_entity_triggered_action("/CloudScript/PostFunctionResultForEntityTriggeredAction", EntityToken): PostFunctionResultForEntityTriggeredActionRequest => EmptyResult;

    fn post_function_result_for_function_execution("/CloudScript/PostFunctionResultForFunctionExecution", EntityToken): PostFunctionResultForFunctionExecutionRequest => EmptyResult;

    fn post_function_result_for_player_triggered_action("/CloudScript/PostFunctionResultForPlayerTriggeredAction", EntityToken): PostFunctionResultForPlayerTriggeredActionRequest => EmptyResult;

    fn post_function_result_for_scheduled_task("/CloudScript/PostFunctionResultForScheduledTask", EntityToken): PostFunctionResultForScheduledTaskRequest => EmptyResult;

    fn register_http_function("/CloudScript/RegisterHttpFunction", EntityToken): RegisterHttpFunctionRequest => EmptyResult;

    fn register_queued_function("/CloudScript/RegisterQueuedFunction", EntityToken): RegisterQueuedFunctionRequest => EmptyResult;

    fn unregister_function("/CloudScript/UnregisterFunction", EntityToken): UnregisterFunctionRequest => EmptyResult;
}
