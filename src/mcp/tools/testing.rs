//! Testing capability tools.

use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters},
    model::CallToolResult,
    tool, tool_router, ErrorData as McpError,
};

use crate::mcp::envelope::ToolResponse;
use crate::mcp::types::*;
use crate::mcp::McpServer;

#[tool_router(router = testing_router)]
impl McpServer {
    #[tool(name = "runAutomatedTests", description = "Execute automated test suites")]
    async fn run_automated_tests(
        &self,
        params: Parameters<RunAutomatedTestsRequest>,
    ) -> Result<CallToolResult, McpError> {
        let _ = params.0;
        let result = self.testing.run_automated_tests();
        Ok(ToolResponse::success(result, "Automated tests started").into())
    }

    #[tool(
        name = "getTestAutomationStatus",
        description = "Check status of automated test execution"
    )]
    async fn get_test_automation_status(
        &self,
        params: Parameters<GetTestAutomationStatusRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let result = self.testing.get_test_automation_status(req.test_run_id);
        let message = format!("Test run {} status", req.test_run_id);
        Ok(ToolResponse::success(result, message).into())
    }

    #[tool(name = "configureTestAgents", description = "Configure and manage test agents")]
    async fn configure_test_agents(
        &self,
        params: Parameters<ConfigureTestAgentsRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let result =
            self.testing
                .configure_test_agents(&req.agent_name, req.capabilities.as_ref(), req.enabled);
        let message = format!("Test agent {} configured", req.agent_name);
        Ok(ToolResponse::success(result, message).into())
    }

    #[tool(
        name = "createTestDataGenerator",
        description = "Generate test data for automated tests"
    )]
    async fn create_test_data_generator(
        &self,
        params: Parameters<CreateTestDataGeneratorRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let result = self
            .testing
            .create_test_data_generator(&req.name, req.record_count);
        let message = format!("Test data generator created: {}", req.name);
        Ok(ToolResponse::success(result, message).into())
    }

    #[tool(
        name = "manageTestEnvironments",
        description = "Manage test environments for different test types"
    )]
    async fn manage_test_environments(
        &self,
        params: Parameters<ManageTestEnvironmentsRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let result = self.testing.manage_test_environments(
            &req.environment_name,
            &req.action,
            req.properties.as_ref(),
        );
        let message = format!("Test environment {} {}d", req.environment_name, req.action);
        Ok(ToolResponse::success(result, message).into())
    }

    #[tool(name = "getTestFlakiness", description = "Analyze and report on test flakiness")]
    async fn get_test_flakiness(
        &self,
        params: Parameters<GetTestFlakinessRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let result = self.testing.get_test_flakiness(req.time_range.as_deref());
        Ok(ToolResponse::success(result, "Test flakiness analysis").into())
    }

    #[tool(name = "getTestGapAnalysis", description = "Identify gaps in test coverage")]
    async fn get_test_gap_analysis(
        &self,
        params: Parameters<GetTestGapAnalysisRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let result = self.testing.get_test_gap_analysis(req.area_path.as_deref());
        Ok(ToolResponse::success(result, "Test gap analysis").into())
    }

    #[tool(
        name = "runTestImpactAnalysis",
        description = "Determine which tests to run based on code changes"
    )]
    async fn run_test_impact_analysis(
        &self,
        params: Parameters<RunTestImpactAnalysisRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let result = self.testing.run_test_impact_analysis(req.build_id);
        let message = format!("Test impact analysis for build {}", req.build_id);
        Ok(ToolResponse::success(result, message).into())
    }

    #[tool(name = "getTestHealthDashboard", description = "View overall test health metrics")]
    async fn get_test_health_dashboard(
        &self,
        params: Parameters<GetTestHealthDashboardRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let result = self.testing.get_test_health_dashboard(req.include_trends);
        Ok(ToolResponse::success(result, "Test health dashboard").into())
    }

    #[tool(
        name = "runTestOptimization",
        description = "Optimize test suite execution for faster feedback"
    )]
    async fn run_test_optimization(
        &self,
        params: Parameters<RunTestOptimizationRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let result = self
            .testing
            .run_test_optimization(req.test_plan_id, &req.optimization_goal);
        let message = format!("Test optimization for test plan {}", req.test_plan_id);
        Ok(ToolResponse::success(result, message).into())
    }

    #[tool(
        name = "createExploratorySessions",
        description = "Create new exploratory testing sessions"
    )]
    async fn create_exploratory_sessions(
        &self,
        params: Parameters<CreateExploratorySessionsRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let result = self
            .testing
            .create_exploratory_session(&req.title, req.description.as_deref());
        let message = format!("Created exploratory session: {}", req.title);
        Ok(ToolResponse::success(result, message).into())
    }

    #[tool(
        name = "recordExploratoryTestResults",
        description = "Record findings during exploratory testing"
    )]
    async fn record_exploratory_test_results(
        &self,
        params: Parameters<RecordExploratoryTestResultsRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let attachment_count = req.attachments.as_ref().map(|a| a.len()).unwrap_or(0);
        let result = self.testing.record_exploratory_test_results(
            req.session_id,
            &req.findings,
            attachment_count,
        );
        let message = format!(
            "Recorded {} findings for session {}",
            req.findings.len(),
            req.session_id
        );
        Ok(ToolResponse::success(result, message).into())
    }

    #[tool(
        name = "convertFindingsToWorkItems",
        description = "Convert exploratory test findings to work items"
    )]
    async fn convert_findings_to_work_items(
        &self,
        params: Parameters<ConvertFindingsToWorkItemsRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let result = self
            .testing
            .convert_findings_to_work_items(req.session_id, req.work_item_type.as_deref());
        let message = format!("Converted findings to work items for session {}", req.session_id);
        Ok(ToolResponse::success(result, message).into())
    }

    #[tool(
        name = "getExploratoryTestStatistics",
        description = "Get statistics on exploratory testing activities"
    )]
    async fn get_exploratory_test_statistics(
        &self,
        params: Parameters<GetExploratoryTestStatisticsRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let result = self
            .testing
            .get_exploratory_test_statistics(req.time_range.as_deref());
        Ok(ToolResponse::success(result, "Exploratory testing statistics").into())
    }
}

pub(crate) fn router() -> ToolRouter<McpServer> {
    McpServer::testing_router()
}
