use rmcp::schemars::JsonSchema;
use serde::Deserialize;

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetBoardsRequest {
    #[schemars(description = "Team ID (uses default team if not specified)")]
    pub team_id: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetBoardColumnsRequest {
    #[schemars(description = "Team ID (uses default team if not specified)")]
    pub team_id: Option<String>,
    #[schemars(description = "ID of the board")]
    pub board_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetBoardItemsRequest {
    #[schemars(description = "Team ID (uses default team if not specified)")]
    pub team_id: Option<String>,
    #[schemars(description = "ID of the board")]
    pub board_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MoveCardOnBoardRequest {
    #[schemars(description = "Team ID (uses default team if not specified)")]
    pub team_id: Option<String>,
    #[schemars(description = "ID of the board")]
    pub board_id: String,
    #[schemars(description = "ID of the work item to move")]
    pub work_item_id: i64,
    #[schemars(description = "ID of the column to move to")]
    pub column_id: String,
    #[schemars(description = "Position within the column")]
    pub position: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetSprintsRequest {
    #[schemars(description = "Team ID (uses default team if not specified)")]
    pub team_id: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetCurrentSprintRequest {
    #[schemars(description = "Team ID (uses default team if not specified)")]
    pub team_id: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetSprintWorkItemsRequest {
    #[schemars(description = "Team ID (uses default team if not specified)")]
    pub team_id: Option<String>,
    #[schemars(description = "ID of the sprint")]
    pub sprint_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetSprintCapacityRequest {
    #[schemars(description = "Team ID (uses default team if not specified)")]
    pub team_id: Option<String>,
    #[schemars(description = "ID of the sprint")]
    pub sprint_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetTeamMembersRequest {
    #[schemars(description = "Team ID (uses default team if not specified)")]
    pub team_id: Option<String>,
}
