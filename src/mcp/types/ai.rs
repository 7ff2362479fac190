use rmcp::schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetAiCodeReviewRequest {
    #[schemars(description = "ID of the pull request to review")]
    pub pull_request_id: Option<i64>,
    #[schemars(description = "ID of the repository")]
    pub repository_id: Option<String>,
    #[schemars(description = "ID of the commit to review")]
    pub commit_id: Option<String>,
    #[schemars(description = "Path to the file to review")]
    pub file_path: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuggestCodeOptimizationRequest {
    #[schemars(description = "ID of the repository")]
    pub repository_id: String,
    #[schemars(description = "Path to the file to optimize")]
    pub file_path: String,
    #[schemars(description = "Starting line number")]
    pub line_start: Option<u32>,
    #[schemars(description = "Ending line number")]
    pub line_end: Option<u32>,
    #[schemars(description = "Type of optimization to focus on")]
    pub optimization_type: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IdentifyCodeSmellsRequest {
    #[schemars(description = "ID of the repository")]
    pub repository_id: String,
    #[schemars(description = "Branch to analyze")]
    pub branch: Option<String>,
    #[schemars(description = "Path to the file to analyze")]
    pub file_path: Option<String>,
    #[schemars(description = "Severity level to filter by")]
    pub severity: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetPredictiveBugAnalysisRequest {
    #[schemars(description = "ID of the repository")]
    pub repository_id: String,
    #[schemars(description = "ID of the pull request")]
    pub pull_request_id: Option<i64>,
    #[schemars(description = "Branch to analyze")]
    pub branch: Option<String>,
    #[schemars(description = "Path to the file to analyze")]
    pub file_path: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetDeveloperProductivityRequest {
    #[schemars(description = "ID of the user")]
    pub user_id: Option<String>,
    #[schemars(description = "ID of the team")]
    pub team_id: Option<String>,
    #[schemars(description = "Time range for analysis (e.g., '30d', '3m')")]
    pub time_range: Option<String>,
    #[schemars(description = "Specific metrics to include")]
    pub include_metrics: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetPredictiveEffortEstimationRequest {
    #[schemars(description = "IDs of work items to estimate")]
    pub work_item_ids: Option<Vec<i64>>,
    #[schemars(description = "Type of work items to estimate")]
    pub work_item_type: Option<String>,
    #[schemars(description = "Area path to filter work items")]
    pub area_path: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetCodeQualityTrendsRequest {
    #[schemars(description = "ID of the repository")]
    pub repository_id: Option<String>,
    #[schemars(description = "Branch to analyze")]
    pub branch: Option<String>,
    #[schemars(description = "Time range for analysis (e.g., '90d', '6m')")]
    pub time_range: Option<String>,
    #[schemars(description = "Specific metrics to include")]
    pub metrics: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuggestWorkItemRefinementsRequest {
    #[schemars(description = "ID of the work item to refine")]
    pub work_item_id: Option<i64>,
    #[schemars(description = "Type of work item")]
    pub work_item_type: Option<String>,
    #[schemars(description = "Area path to filter work items")]
    pub area_path: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuggestAutomationOpportunitiesRequest {
    #[schemars(description = "ID of the project")]
    pub project_id: Option<String>,
    #[schemars(description = "Type of scope to analyze")]
    pub scope_type: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateIntelligentAlertsRequest {
    #[schemars(description = "Name of the alert")]
    pub alert_name: String,
    #[schemars(description = "Type of alert to create")]
    pub alert_type: String,
    #[schemars(description = "Conditions for the alert")]
    pub conditions: Map<String, Value>,
    #[schemars(description = "Actions to take when the alert triggers")]
    pub actions: Option<Map<String, Value>>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PredictBuildFailuresRequest {
    #[schemars(description = "ID of the build definition")]
    pub build_definition_id: i64,
    #[schemars(description = "Period to analyze for patterns (e.g., '30d')")]
    pub lookback_period: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeTestSelectionRequest {
    #[schemars(description = "ID of the build")]
    pub build_id: i64,
    #[schemars(description = "List of changed files")]
    pub changed_files: Option<Vec<String>>,
    #[schemars(description = "Maximum number of tests to select")]
    pub max_test_count: Option<u32>,
}
