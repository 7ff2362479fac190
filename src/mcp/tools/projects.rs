//! Project, classification, and process tools.

use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters},
    model::CallToolResult,
    tool, tool_router, ErrorData as McpError,
};

use crate::mcp::envelope::ToolResponse;
use crate::mcp::types::*;
use crate::mcp::McpServer;

#[tool_router(router = projects_router)]
impl McpServer {
    #[tool(name = "listProjects", description = "List all projects")]
    async fn list_projects(
        &self,
        params: Parameters<ListProjectsRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        Ok(match self
            .projects
            .list_projects(req.state_filter.as_deref(), req.top, req.skip)
            .await
        {
            Ok(projects) => {
                let message = format!("Found {} projects", projects.len());
                ToolResponse::success(projects, message).into()
            }
            Err(e) => ToolResponse::failure(e).into(),
        })
    }

    #[tool(name = "getProjectDetails", description = "Get details of a specific project")]
    async fn get_project_details(
        &self,
        params: Parameters<GetProjectDetailsRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        Ok(match self
            .projects
            .get_project_details(&req.project_id, req.include_capabilities)
            .await
        {
            Ok(project) => {
                let message = format!("Project details for {}", project.name);
                ToolResponse::success(project, message).into()
            }
            Err(e) => ToolResponse::failure(e).into(),
        })
    }

    #[tool(name = "createProject", description = "Create a new project")]
    async fn create_project(
        &self,
        params: Parameters<CreateProjectRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        Ok(match self
            .projects
            .create_project(
                &req.name,
                req.description.as_deref(),
                req.visibility.unwrap_or_default(),
                req.capabilities.as_ref(),
            )
            .await
        {
            Ok(project) => {
                let message = format!("Project {} creation initiated", req.name);
                ToolResponse::success(project, message).into()
            }
            Err(e) => ToolResponse::failure(e).into(),
        })
    }

    #[tool(name = "getAreas", description = "Get areas for a project")]
    async fn get_areas(
        &self,
        params: Parameters<GetAreasRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        Ok(match self.projects.get_areas(&req.project_id).await {
            Ok(areas) => {
                let message = format!("Retrieved areas for project {}", req.project_id);
                ToolResponse::success(areas, message).into()
            }
            Err(e) => ToolResponse::failure(e).into(),
        })
    }

    #[tool(name = "getIterations", description = "Get iterations for a project")]
    async fn get_iterations(
        &self,
        params: Parameters<GetIterationsRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        Ok(match self.projects.get_iterations(&req.project_id).await {
            Ok(iterations) => {
                let message = format!("Retrieved iterations for project {}", req.project_id);
                ToolResponse::success(iterations, message).into()
            }
            Err(e) => ToolResponse::failure(e).into(),
        })
    }

    #[tool(name = "createArea", description = "Create a new area in a project")]
    async fn create_area(
        &self,
        params: Parameters<CreateAreaRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let area = self
            .projects
            .create_area(&req.name, req.parent_path.as_deref());
        let message = format!("Created area {} in project {}", req.name, req.project_id);
        Ok(ToolResponse::success(area, message).into())
    }

    #[tool(name = "createIteration", description = "Create a new iteration in a project")]
    async fn create_iteration(
        &self,
        params: Parameters<CreateIterationRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let iteration = self.projects.create_iteration(
            &req.name,
            req.parent_path.as_deref(),
            req.start_date.as_deref(),
            req.finish_date.as_deref(),
        );
        let message = format!("Created iteration {} in project {}", req.name, req.project_id);
        Ok(ToolResponse::success(iteration, message).into())
    }

    #[tool(name = "getProcesses", description = "Get all processes")]
    async fn get_processes(
        &self,
        params: Parameters<GetProcessesRequest>,
    ) -> Result<CallToolResult, McpError> {
        let _ = params.0;
        let processes = self.projects.get_processes();
        let count = processes.as_array().map(|list| list.len()).unwrap_or(0);
        let message = format!("Retrieved {} processes", count);
        Ok(ToolResponse::success(processes, message).into())
    }

    #[tool(name = "getWorkItemTypes", description = "Get work item types for a process")]
    async fn get_work_item_types(
        &self,
        params: Parameters<GetWorkItemTypesRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        Ok(match self.projects.get_work_item_types(&req.process_id).await {
            Ok(types) => {
                let message = format!("Retrieved work item types for process {}", req.process_id);
                ToolResponse::success(types, message).into()
            }
            Err(e) => ToolResponse::failure(e).into(),
        })
    }

    #[tool(name = "getWorkItemTypeFields", description = "Get fields for a work item type")]
    async fn get_work_item_type_fields(
        &self,
        params: Parameters<GetWorkItemTypeFieldsRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        Ok(match self
            .projects
            .get_work_item_type_fields(&req.process_id, &req.wit_ref_name)
            .await
        {
            Ok(fields) => {
                let message = format!("Retrieved fields for work item type {}", req.wit_ref_name);
                ToolResponse::success(fields, message).into()
            }
            Err(e) => ToolResponse::failure(e).into(),
        })
    }
}

pub(crate) fn router() -> ToolRouter<McpServer> {
    McpServer::projects_router()
}
