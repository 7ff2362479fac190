use rmcp::schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListWorkItemsRequest {
    #[schemars(description = "WIQL query to get work items")]
    pub query: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetWorkItemByIdRequest {
    #[schemars(description = "Work item ID")]
    pub id: i64,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchWorkItemsRequest {
    #[schemars(description = "Text to search for in work items")]
    pub search_text: String,
    #[schemars(description = "Maximum number of work items to return")]
    pub top: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetRecentlyUpdatedWorkItemsRequest {
    #[schemars(description = "Maximum number of work items to return")]
    pub top: Option<u32>,
    #[schemars(description = "Number of work items to skip")]
    pub skip: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetMyWorkItemsRequest {
    #[schemars(description = "Filter by work item state")]
    pub state: Option<String>,
    #[schemars(description = "Maximum number of work items to return")]
    pub top: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkItemRequest {
    #[schemars(description = "Type of work item to create")]
    pub work_item_type: String,
    #[schemars(description = "Title of the work item")]
    pub title: String,
    #[schemars(description = "Description of the work item")]
    pub description: Option<String>,
    #[schemars(description = "User to assign the work item to")]
    pub assigned_to: Option<String>,
    #[schemars(description = "Initial state of the work item")]
    pub state: Option<String>,
    #[schemars(description = "Area path for the work item")]
    pub area_path: Option<String>,
    #[schemars(description = "Iteration path for the work item")]
    pub iteration_path: Option<String>,
    #[schemars(description = "Additional fields to set on the work item")]
    pub additional_fields: Option<Map<String, Value>>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWorkItemRequest {
    #[schemars(description = "ID of the work item to update")]
    pub id: i64,
    #[schemars(description = "Fields to update on the work item")]
    pub fields: Map<String, Value>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddWorkItemCommentRequest {
    #[schemars(description = "ID of the work item")]
    pub id: i64,
    #[schemars(description = "Comment text")]
    pub text: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWorkItemStateRequest {
    #[schemars(description = "ID of the work item")]
    pub id: i64,
    #[schemars(description = "New state for the work item")]
    pub state: String,
    #[schemars(description = "Comment explaining the state change")]
    pub comment: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignWorkItemRequest {
    #[schemars(description = "ID of the work item")]
    pub id: i64,
    #[schemars(description = "User to assign the work item to")]
    pub assigned_to: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkRequest {
    #[schemars(description = "ID of the source work item")]
    pub source_id: i64,
    #[schemars(description = "ID of the target work item")]
    pub target_id: i64,
    #[schemars(description = "Type of link to create")]
    pub link_type: String,
    #[schemars(description = "Comment explaining the link")]
    pub comment: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BulkCreateWorkItemsRequest {
    #[schemars(description = "Array of work items to create or update")]
    pub work_items: Vec<Value>,
}
