use rmcp::schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::services::ProjectVisibility;

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListProjectsRequest {
    #[schemars(description = "Filter by project state")]
    pub state_filter: Option<String>,
    #[schemars(description = "Maximum number of projects to return")]
    pub top: Option<u32>,
    #[schemars(description = "Number of projects to skip")]
    pub skip: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetProjectDetailsRequest {
    #[schemars(description = "ID of the project")]
    pub project_id: String,
    #[schemars(description = "Include project capabilities")]
    pub include_capabilities: Option<bool>,
    #[schemars(description = "Include project history")]
    pub include_history: Option<bool>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    #[schemars(description = "Name of the project")]
    pub name: String,
    #[schemars(description = "Description of the project")]
    pub description: Option<String>,
    #[schemars(description = "Visibility of the project")]
    pub visibility: Option<ProjectVisibility>,
    #[schemars(description = "Project capabilities")]
    pub capabilities: Option<Map<String, Value>>,
    #[schemars(description = "Process template ID")]
    pub process_template_id: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetAreasRequest {
    #[schemars(description = "ID of the project")]
    pub project_id: String,
    #[schemars(description = "Maximum depth of the area hierarchy")]
    pub depth: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetIterationsRequest {
    #[schemars(description = "ID of the project")]
    pub project_id: String,
    #[schemars(description = "Include deleted iterations")]
    pub include_deleted: Option<bool>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAreaRequest {
    #[schemars(description = "ID of the project")]
    pub project_id: String,
    #[schemars(description = "Name of the area")]
    pub name: String,
    #[schemars(description = "Path of the parent area")]
    pub parent_path: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateIterationRequest {
    #[schemars(description = "ID of the project")]
    pub project_id: String,
    #[schemars(description = "Name of the iteration")]
    pub name: String,
    #[schemars(description = "Path of the parent iteration")]
    pub parent_path: Option<String>,
    #[schemars(description = "Start date of the iteration")]
    pub start_date: Option<String>,
    #[schemars(description = "End date of the iteration")]
    pub finish_date: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetProcessesRequest {
    #[schemars(description = "Include process icons")]
    pub expand_icon: Option<bool>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetWorkItemTypesRequest {
    #[schemars(description = "ID of the process")]
    pub process_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetWorkItemTypeFieldsRequest {
    #[schemars(description = "ID of the process")]
    pub process_id: String,
    #[schemars(description = "Reference name of the work item type")]
    pub wit_ref_name: String,
}
