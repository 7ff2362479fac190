use rmcp::schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RunAutomatedTestsRequest {
    #[schemars(description = "ID of the test suite to run")]
    pub test_suite_id: Option<i64>,
    #[schemars(description = "ID of the test plan to run")]
    pub test_plan_id: Option<i64>,
    #[schemars(description = "Environment to run tests in")]
    pub test_environment: Option<String>,
    #[schemars(description = "Whether to run tests in parallel")]
    pub parallel_execution: Option<bool>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetTestAutomationStatusRequest {
    #[schemars(description = "ID of the test run to check status for")]
    pub test_run_id: i64,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigureTestAgentsRequest {
    #[schemars(description = "Name of the test agent to configure")]
    pub agent_name: String,
    #[schemars(description = "Capabilities to set for the agent")]
    pub capabilities: Option<Map<String, Value>>,
    #[schemars(description = "Whether the agent should be enabled")]
    pub enabled: Option<bool>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTestDataGeneratorRequest {
    #[schemars(description = "Name of the test data generator")]
    pub name: String,
    #[schemars(description = "Schema for the test data to generate")]
    pub data_schema: Map<String, Value>,
    #[schemars(description = "Number of records to generate")]
    pub record_count: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ManageTestEnvironmentsRequest {
    #[schemars(description = "Name of the test environment")]
    pub environment_name: String,
    #[schemars(description = "Action to perform")]
    pub action: String,
    #[schemars(description = "Properties for the environment")]
    pub properties: Option<Map<String, Value>>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetTestFlakinessRequest {
    #[schemars(description = "ID of a specific test to analyze")]
    pub test_id: Option<i64>,
    #[schemars(description = "Specific test runs to analyze")]
    pub test_run_ids: Option<Vec<i64>>,
    #[schemars(description = "Time range for analysis (e.g., '30d')")]
    pub time_range: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetTestGapAnalysisRequest {
    #[schemars(description = "Area path to analyze")]
    pub area_path: Option<String>,
    #[schemars(description = "Only analyze recent code changes")]
    pub code_changes_only: Option<bool>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RunTestImpactAnalysisRequest {
    #[schemars(description = "ID of the build to analyze")]
    pub build_id: i64,
    #[schemars(description = "List of changed files")]
    pub changed_files: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetTestHealthDashboardRequest {
    #[schemars(description = "Time range for metrics (e.g., '90d')")]
    pub time_range: Option<String>,
    #[schemars(description = "Include trend data")]
    pub include_trends: Option<bool>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RunTestOptimizationRequest {
    #[schemars(description = "ID of the test plan to optimize")]
    pub test_plan_id: i64,
    #[schemars(description = "Optimization goal")]
    pub optimization_goal: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateExploratorySessionsRequest {
    #[schemars(description = "Title of the exploratory session")]
    pub title: String,
    #[schemars(description = "Description of the session")]
    pub description: Option<String>,
    #[schemars(description = "Area path for the session")]
    pub area_path: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecordExploratoryTestResultsRequest {
    #[schemars(description = "ID of the exploratory session")]
    pub session_id: i64,
    #[schemars(description = "List of findings to record")]
    pub findings: Vec<String>,
    #[schemars(description = "Attachments for the findings")]
    pub attachments: Option<Vec<Value>>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConvertFindingsToWorkItemsRequest {
    #[schemars(description = "ID of the exploratory session")]
    pub session_id: i64,
    #[schemars(description = "IDs of findings to convert")]
    pub finding_ids: Vec<i64>,
    #[schemars(description = "Type of work item to create")]
    pub work_item_type: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetExploratoryTestStatisticsRequest {
    #[schemars(description = "Time range for statistics (e.g., '90d')")]
    pub time_range: Option<String>,
    #[schemars(description = "Filter by specific user")]
    pub user_id: Option<String>,
}
