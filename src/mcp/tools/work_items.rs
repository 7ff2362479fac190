//! Work item tools: WIQL queries, CRUD, comments, links, bulk edits.

use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters},
    model::CallToolResult,
    tool, tool_router, ErrorData as McpError,
};

use crate::mcp::envelope::ToolResponse;
use crate::mcp::types::*;
use crate::mcp::McpServer;
use crate::services::NewWorkItem;

#[tool_router(router = work_items_router)]
impl McpServer {
    #[tool(
        name = "listWorkItems",
        description = "List work items based on a WIQL query"
    )]
    async fn list_work_items(
        &self,
        params: Parameters<ListWorkItemsRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        Ok(match self.work_items.list_work_items(&req.query).await {
            Ok(result) => {
                let message = format!("Found {} work items.", result.work_items.len());
                ToolResponse::success(result, message).into()
            }
            Err(e) => ToolResponse::failure(e).into(),
        })
    }

    #[tool(name = "getWorkItemById", description = "Get a specific work item by ID")]
    async fn get_work_item_by_id(
        &self,
        params: Parameters<GetWorkItemByIdRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        Ok(match self.work_items.get_work_item(req.id).await {
            Ok(work_item) => {
                let message = format!("Work item {} details", req.id);
                ToolResponse::success(work_item, message).into()
            }
            Err(e) => ToolResponse::failure(e).into(),
        })
    }

    #[tool(name = "searchWorkItems", description = "Search for work items by text")]
    async fn search_work_items(
        &self,
        params: Parameters<SearchWorkItemsRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        Ok(match self.work_items.search_work_items(&req.search_text).await {
            Ok(results) => {
                let message = format!("Found {} matching work items", results.work_items.len());
                ToolResponse::success(results, message).into()
            }
            Err(e) => ToolResponse::failure(e).into(),
        })
    }

    #[tool(
        name = "getRecentlyUpdatedWorkItems",
        description = "Get recently updated work items"
    )]
    async fn get_recently_updated_work_items(
        &self,
        params: Parameters<GetRecentlyUpdatedWorkItemsRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        Ok(match self
            .work_items
            .get_recent_work_items(req.top, req.skip)
            .await
        {
            Ok(results) => {
                let message = format!(
                    "Found {} recently updated work items",
                    results.work_items.len()
                );
                ToolResponse::success(results, message).into()
            }
            Err(e) => ToolResponse::failure(e).into(),
        })
    }

    #[tool(name = "getMyWorkItems", description = "Get work items assigned to you")]
    async fn get_my_work_items(
        &self,
        params: Parameters<GetMyWorkItemsRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        Ok(match self
            .work_items
            .get_my_work_items(req.state.as_deref(), req.top)
            .await
        {
            Ok(results) => {
                let message = format!("Found {} work items assigned to you", results.work_items.len());
                ToolResponse::success(results, message).into()
            }
            Err(e) => ToolResponse::failure(e).into(),
        })
    }

    #[tool(name = "createWorkItem", description = "Create a new work item")]
    async fn create_work_item(
        &self,
        params: Parameters<CreateWorkItemRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let item = NewWorkItem {
            work_item_type: req.work_item_type,
            title: req.title,
            description: req.description,
            assigned_to: req.assigned_to,
            state: req.state,
            area_path: req.area_path,
            iteration_path: req.iteration_path,
            additional_fields: req.additional_fields.unwrap_or_default(),
        };
        Ok(match self.work_items.create_work_item(&item).await {
            Ok(work_item) => {
                let message = format!("Created work item: {}", work_item["id"]);
                ToolResponse::success(work_item, message).into()
            }
            Err(e) => ToolResponse::failure(e).into(),
        })
    }

    #[tool(name = "updateWorkItem", description = "Update an existing work item")]
    async fn update_work_item(
        &self,
        params: Parameters<UpdateWorkItemRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        Ok(match self.work_items.update_work_item(req.id, &req.fields).await {
            Ok(work_item) => {
                let message = format!("Updated work item: {}", req.id);
                ToolResponse::success(work_item, message).into()
            }
            Err(e) => ToolResponse::failure(e).into(),
        })
    }

    #[tool(name = "addWorkItemComment", description = "Add a comment to a work item")]
    async fn add_work_item_comment(
        &self,
        params: Parameters<AddWorkItemCommentRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        Ok(match self.work_items.add_comment(req.id, &req.text).await {
            Ok(comment) => {
                let message = format!("Comment added to work item: {}", req.id);
                ToolResponse::success(comment, message).into()
            }
            Err(e) => ToolResponse::failure(e).into(),
        })
    }

    #[tool(name = "updateWorkItemState", description = "Update the state of a work item")]
    async fn update_work_item_state(
        &self,
        params: Parameters<UpdateWorkItemStateRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        Ok(match self
            .work_items
            .update_state(req.id, &req.state, req.comment.as_deref())
            .await
        {
            Ok(work_item) => {
                let message = format!("Updated state of work item {} to \"{}\"", req.id, req.state);
                ToolResponse::success(work_item, message).into()
            }
            Err(e) => ToolResponse::failure(e).into(),
        })
    }

    #[tool(name = "assignWorkItem", description = "Assign a work item to a user")]
    async fn assign_work_item(
        &self,
        params: Parameters<AssignWorkItemRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        Ok(match self.work_items.assign(req.id, &req.assigned_to).await {
            Ok(work_item) => {
                let message = format!("Assigned work item {} to {}", req.id, req.assigned_to);
                ToolResponse::success(work_item, message).into()
            }
            Err(e) => ToolResponse::failure(e).into(),
        })
    }

    #[tool(name = "createLink", description = "Create a link between work items")]
    async fn create_link(
        &self,
        params: Parameters<CreateLinkRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        Ok(match self
            .work_items
            .create_link(
                req.source_id,
                req.target_id,
                &req.link_type,
                req.comment.as_deref(),
            )
            .await
        {
            Ok(work_item) => {
                let message = format!(
                    "Created {} link from work item {} to {}",
                    req.link_type, req.source_id, req.target_id
                );
                ToolResponse::success(work_item, message).into()
            }
            Err(e) => ToolResponse::failure(e).into(),
        })
    }

    #[tool(
        name = "bulkCreateWorkItems",
        description = "Create or update multiple work items in a single operation"
    )]
    async fn bulk_create_work_items(
        &self,
        params: Parameters<BulkCreateWorkItemsRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        Ok(match self.work_items.bulk_create(&req.work_items).await {
            Ok(results) => {
                let message = format!("Processed {} work items", results["count"]);
                ToolResponse::success(results, message).into()
            }
            Err(e) => ToolResponse::failure(e).into(),
        })
    }
}

pub(crate) fn router() -> ToolRouter<McpServer> {
    McpServer::work_items_router()
}
