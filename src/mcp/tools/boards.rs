//! Board and sprint tools. Team-scoped: an omitted team ID resolves to the
//! project's default team.

use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters},
    model::CallToolResult,
    tool, tool_router, ErrorData as McpError,
};
use serde_json::Value;

use crate::mcp::envelope::ToolResponse;
use crate::mcp::types::*;
use crate::mcp::McpServer;

#[tool_router(router = boards_router)]
impl McpServer {
    #[tool(name = "getBoards", description = "Get all boards for a team")]
    async fn get_boards(
        &self,
        params: Parameters<GetBoardsRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        Ok(match self.boards.get_boards(req.team_id.as_deref()).await {
            Ok(boards) => {
                let message = format!("Found {} boards", boards.len());
                ToolResponse::success(boards, message).into()
            }
            Err(e) => ToolResponse::failure(e).into(),
        })
    }

    #[tool(name = "getBoardColumns", description = "Get columns for a specific board")]
    async fn get_board_columns(
        &self,
        params: Parameters<GetBoardColumnsRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        Ok(match self
            .boards
            .get_board_columns(req.team_id.as_deref(), &req.board_id)
            .await
        {
            Ok(columns) => {
                let message = format!("Found {} columns for board {}", columns.len(), req.board_id);
                ToolResponse::success(columns, message).into()
            }
            Err(e) => ToolResponse::failure(e).into(),
        })
    }

    #[tool(name = "getBoardItems", description = "Get items on a specific board")]
    async fn get_board_items(
        &self,
        params: Parameters<GetBoardItemsRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        Ok(match self
            .boards
            .get_board_items(req.team_id.as_deref(), &req.board_id)
            .await
        {
            Ok(items) => {
                let message = format!("Retrieved items for board {}", req.board_id);
                ToolResponse::success(items, message).into()
            }
            Err(e) => ToolResponse::failure(e).into(),
        })
    }

    #[tool(name = "moveCardOnBoard", description = "Move a card on a board")]
    async fn move_card_on_board(
        &self,
        params: Parameters<MoveCardOnBoardRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let result = self.boards.move_card(req.work_item_id, &req.column_id);
        let message = format!(
            "Moved work item {} to column {}",
            req.work_item_id, req.column_id
        );
        Ok(ToolResponse::success(result, message).into())
    }

    #[tool(name = "getSprints", description = "Get all sprints for a team")]
    async fn get_sprints(
        &self,
        params: Parameters<GetSprintsRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        Ok(match self.boards.get_sprints(req.team_id.as_deref()).await {
            Ok(sprints) => {
                let message = format!("Found {} sprints", sprints.len());
                ToolResponse::success(sprints, message).into()
            }
            Err(e) => ToolResponse::failure(e).into(),
        })
    }

    #[tool(name = "getCurrentSprint", description = "Get the current sprint")]
    async fn get_current_sprint(
        &self,
        params: Parameters<GetCurrentSprintRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        Ok(match self
            .boards
            .get_current_sprint(req.team_id.as_deref())
            .await
        {
            Ok(sprint) => {
                let message = sprint
                    .as_ref()
                    .map(|s| format!("Current sprint: {}", s["name"].as_str().unwrap_or_default()))
                    .unwrap_or_else(|| "No current sprint found".to_string());
                ToolResponse::success(sprint, message).into()
            }
            Err(e) => ToolResponse::failure(e).into(),
        })
    }

    #[tool(name = "getSprintWorkItems", description = "Get work items in a specific sprint")]
    async fn get_sprint_work_items(
        &self,
        params: Parameters<GetSprintWorkItemsRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        Ok(match self
            .boards
            .get_sprint_work_items(req.team_id.as_deref(), &req.sprint_id)
            .await
        {
            Ok(work_items) => {
                let count = work_items
                    .get("workItems")
                    .and_then(Value::as_array)
                    .map(|items| items.len())
                    .unwrap_or(0);
                let message = format!("Found {} work items in sprint {}", count, req.sprint_id);
                ToolResponse::success(work_items, message).into()
            }
            Err(e) => ToolResponse::failure(e).into(),
        })
    }

    #[tool(name = "getSprintCapacity", description = "Get capacity for a specific sprint")]
    async fn get_sprint_capacity(
        &self,
        params: Parameters<GetSprintCapacityRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        Ok(match self
            .boards
            .get_sprint_capacity(req.team_id.as_deref(), &req.sprint_id)
            .await
        {
            Ok(capacity) => {
                let message = format!("Retrieved capacity for sprint {}", req.sprint_id);
                ToolResponse::success(capacity, message).into()
            }
            Err(e) => ToolResponse::failure(e).into(),
        })
    }

    #[tool(name = "getTeamMembers", description = "Get members of a team")]
    async fn get_team_members(
        &self,
        params: Parameters<GetTeamMembersRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        Ok(match self.boards.get_team_members(req.team_id.as_deref()).await {
            Ok(members) => ToolResponse::success(members, "Retrieved team info").into(),
            Err(e) => ToolResponse::failure(e).into(),
        })
    }
}

pub(crate) fn router() -> ToolRouter<McpServer> {
    McpServer::boards_router()
}
