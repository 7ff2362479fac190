//! AI-assisted development tools.

use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters},
    model::CallToolResult,
    tool, tool_router, ErrorData as McpError,
};

use crate::mcp::envelope::ToolResponse;
use crate::mcp::types::*;
use crate::mcp::McpServer;

#[tool_router(router = ai_router)]
impl McpServer {
    #[tool(name = "getAICodeReview", description = "Get AI-based code review suggestions")]
    async fn get_ai_code_review(
        &self,
        params: Parameters<GetAiCodeReviewRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let result = self
            .ai
            .code_review(req.pull_request_id, req.repository_id.as_deref());
        Ok(ToolResponse::success(result, "AI-powered code review").into())
    }

    #[tool(
        name = "suggestCodeOptimization",
        description = "Suggest code optimizations using AI"
    )]
    async fn suggest_code_optimization(
        &self,
        params: Parameters<SuggestCodeOptimizationRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let result = self.ai.code_optimization(
            &req.repository_id,
            &req.file_path,
            req.line_start,
            req.line_end,
            req.optimization_type.as_deref(),
        );
        let message = format!("Code optimization suggestions for {}", req.file_path);
        Ok(ToolResponse::success(result, message).into())
    }

    #[tool(
        name = "identifyCodeSmells",
        description = "Identify potential code smells and anti-patterns"
    )]
    async fn identify_code_smells(
        &self,
        params: Parameters<IdentifyCodeSmellsRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let result = self.ai.code_smells(
            &req.repository_id,
            req.branch.as_deref(),
            req.file_path.as_deref(),
            req.severity.as_deref(),
        );
        Ok(ToolResponse::success(result, "Code smell analysis").into())
    }

    #[tool(
        name = "getPredictiveBugAnalysis",
        description = "Predict potential bugs in code changes"
    )]
    async fn get_predictive_bug_analysis(
        &self,
        params: Parameters<GetPredictiveBugAnalysisRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let result = self.ai.bug_analysis(
            &req.repository_id,
            req.pull_request_id,
            req.branch.as_deref(),
            req.file_path.as_deref(),
        );
        Ok(ToolResponse::success(result, "Predictive bug analysis").into())
    }

    #[tool(
        name = "getDeveloperProductivity",
        description = "Measure developer productivity metrics"
    )]
    async fn get_developer_productivity(
        &self,
        params: Parameters<GetDeveloperProductivityRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let result = self.ai.developer_productivity(
            req.user_id.as_deref(),
            req.team_id.as_deref(),
            req.time_range.as_deref(),
        );
        Ok(ToolResponse::success(result, "Developer productivity metrics").into())
    }

    #[tool(
        name = "getPredictiveEffortEstimation",
        description = "AI-based effort estimation for work items"
    )]
    async fn get_predictive_effort_estimation(
        &self,
        params: Parameters<GetPredictiveEffortEstimationRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let result = self.ai.effort_estimation(req.work_item_ids.as_deref());
        Ok(ToolResponse::success(result, "Predictive effort estimations").into())
    }

    #[tool(
        name = "getCodeQualityTrends",
        description = "Track code quality trends over time"
    )]
    async fn get_code_quality_trends(
        &self,
        params: Parameters<GetCodeQualityTrendsRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let result = self.ai.code_quality_trends(
            req.repository_id.as_deref(),
            req.branch.as_deref(),
            req.time_range.as_deref(),
            req.metrics.as_deref(),
        );
        Ok(ToolResponse::success(result, "Code quality trends analysis").into())
    }

    #[tool(
        name = "suggestWorkItemRefinements",
        description = "Get AI suggestions for work item refinements"
    )]
    async fn suggest_work_item_refinements(
        &self,
        params: Parameters<SuggestWorkItemRefinementsRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let result = self
            .ai
            .work_item_refinements(req.work_item_id, req.work_item_type.as_deref());
        let subject = req
            .work_item_id
            .filter(|id| *id != 0)
            .map(|id| id.to_string())
            .unwrap_or_else(|| "work items".to_string());
        let message = format!("Work item refinement suggestions for {}", subject);
        Ok(ToolResponse::success(result, message).into())
    }

    #[tool(
        name = "suggestAutomationOpportunities",
        description = "Identify opportunities for automation"
    )]
    async fn suggest_automation_opportunities(
        &self,
        params: Parameters<SuggestAutomationOpportunitiesRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let result = self
            .ai
            .automation_opportunities(req.project_id.as_deref(), req.scope_type.as_deref());
        Ok(ToolResponse::success(result, "Automation opportunities analysis").into())
    }

    #[tool(
        name = "createIntelligentAlerts",
        description = "Set up intelligent alerts based on patterns"
    )]
    async fn create_intelligent_alerts(
        &self,
        params: Parameters<CreateIntelligentAlertsRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let result = self.ai.create_alert(
            &req.alert_name,
            &req.alert_type,
            &req.conditions,
            req.actions.as_ref(),
        );
        let message = format!("Created intelligent alert: {}", req.alert_name);
        Ok(ToolResponse::success(result, message).into())
    }

    #[tool(
        name = "predictBuildFailures",
        description = "Predict potential build failures before they occur"
    )]
    async fn predict_build_failures(
        &self,
        params: Parameters<PredictBuildFailuresRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let result = self
            .ai
            .build_failure_prediction(req.build_definition_id, req.lookback_period.as_deref());
        let message = format!(
            "Predictive build failure analysis for build definition {}",
            req.build_definition_id
        );
        Ok(ToolResponse::success(result, message).into())
    }

    #[tool(
        name = "optimizeTestSelection",
        description = "Intelligently select tests to run based on changes"
    )]
    async fn optimize_test_selection(
        &self,
        params: Parameters<OptimizeTestSelectionRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let result =
            self.ai
                .test_selection(req.build_id, req.changed_files.as_deref(), req.max_test_count);
        let message = format!("Optimized test selection for build {}", req.build_id);
        Ok(ToolResponse::success(result, message).into())
    }
}

pub(crate) fn router() -> ToolRouter<McpServer> {
    McpServer::ai_router()
}
