//! Security scanning, compliance, and secret management tools.

use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters},
    model::CallToolResult,
    tool, tool_router, ErrorData as McpError,
};

use crate::mcp::envelope::ToolResponse;
use crate::mcp::types::*;
use crate::mcp::McpServer;

#[tool_router(router = devsecops_router)]
impl McpServer {
    #[tool(name = "runSecurityScan", description = "Run security scans on repositories")]
    async fn run_security_scan(
        &self,
        params: Parameters<RunSecurityScanRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let result = self.devsecops.run_security_scan(
            &req.repository_id,
            req.branch.as_deref(),
            req.scan_type.as_deref(),
        );
        let message = format!("Security scan initiated for repository {}", req.repository_id);
        Ok(ToolResponse::success(result, message).into())
    }

    #[tool(name = "getSecurityScanResults", description = "Get results from security scans")]
    async fn get_security_scan_results(
        &self,
        params: Parameters<GetSecurityScanResultsRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let result = self
            .devsecops
            .get_security_scan_results(&req.scan_id, req.severity.as_deref());
        let message = format!("Security scan results for scan {}", req.scan_id);
        Ok(ToolResponse::success(result, message).into())
    }

    #[tool(
        name = "trackSecurityVulnerabilities",
        description = "Track and manage security vulnerabilities"
    )]
    async fn track_security_vulnerabilities(
        &self,
        params: Parameters<TrackSecurityVulnerabilitiesRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let result = self
            .devsecops
            .track_security_vulnerabilities(req.time_range.as_deref());
        Ok(ToolResponse::success(result, "Security vulnerabilities tracking information").into())
    }

    #[tool(
        name = "generateSecurityCompliance",
        description = "Generate security compliance reports"
    )]
    async fn generate_security_compliance(
        &self,
        params: Parameters<GenerateSecurityComplianceRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let result = self
            .devsecops
            .generate_security_compliance(req.standard_type.as_deref(), req.include_evidence);
        let message = format!(
            "Security compliance report for {} standard",
            req.standard_type.as_deref().unwrap_or("owasp")
        );
        Ok(ToolResponse::success(result, message).into())
    }

    #[tool(
        name = "integrateSarifResults",
        description = "Import and process SARIF format security results"
    )]
    async fn integrate_sarif_results(
        &self,
        params: Parameters<IntegrateSarifResultsRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let result = self
            .devsecops
            .integrate_sarif_results(&req.sarif_file_path, req.create_work_items);
        let message = format!("SARIF results integrated from {}", req.sarif_file_path);
        Ok(ToolResponse::success(result, message).into())
    }

    #[tool(name = "runComplianceChecks", description = "Run compliance checks against standards")]
    async fn run_compliance_checks(
        &self,
        params: Parameters<RunComplianceChecksRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let result = self
            .devsecops
            .run_compliance_checks(&req.compliance_standard, req.scope_id.as_deref());
        let message = format!("Compliance checks for {} standard", req.compliance_standard);
        Ok(ToolResponse::success(result, message).into())
    }

    #[tool(name = "getComplianceStatus", description = "Get current compliance status")]
    async fn get_compliance_status(
        &self,
        params: Parameters<GetComplianceStatusRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let result = self
            .devsecops
            .get_compliance_status(req.standard_id.as_deref(), req.include_history);
        let message = format!(
            "Compliance status for {}",
            req.standard_id.as_deref().unwrap_or("all standards")
        );
        Ok(ToolResponse::success(result, message).into())
    }

    #[tool(
        name = "createComplianceReport",
        description = "Create compliance reports for auditing"
    )]
    async fn create_compliance_report(
        &self,
        params: Parameters<CreateComplianceReportRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let result = self
            .devsecops
            .create_compliance_report(&req.standard_id, req.format.as_deref());
        let message = format!("Compliance report created for {}", req.standard_id);
        Ok(ToolResponse::success(result, message).into())
    }

    #[tool(name = "manageSecurityPolicies", description = "Manage security policies")]
    async fn manage_security_policies(
        &self,
        params: Parameters<ManageSecurityPoliciesRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let result = self.devsecops.manage_security_policies(
            &req.policy_name,
            &req.action,
            req.policy_definition.as_ref(),
        );
        let message = format!("Security policy '{}' {}d", req.policy_name, req.action);
        Ok(ToolResponse::success(result, message).into())
    }

    #[tool(
        name = "trackSecurityAwareness",
        description = "Track security awareness and training"
    )]
    async fn track_security_awareness(
        &self,
        params: Parameters<TrackSecurityAwarenessRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let result = self
            .devsecops
            .track_security_awareness(req.team_id.as_deref(), req.time_range.as_deref());
        let message = format!(
            "Security awareness tracking for {}",
            req.team_id.as_deref().unwrap_or("all teams")
        );
        Ok(ToolResponse::success(result, message).into())
    }

    #[tool(name = "rotateSecrets", description = "Rotate secrets and credentials")]
    async fn rotate_secrets(
        &self,
        params: Parameters<RotateSecretsRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let result = self.devsecops.rotate_secrets(
            req.secret_name.as_deref(),
            req.secret_type.as_deref(),
            req.force,
        );
        let message = format!(
            "Secrets rotation for {}",
            req.secret_name.as_deref().unwrap_or("all applicable secrets")
        );
        Ok(ToolResponse::success(result, message).into())
    }

    #[tool(name = "auditSecretUsage", description = "Audit usage of secrets across services")]
    async fn audit_secret_usage(
        &self,
        params: Parameters<AuditSecretUsageRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let result = self
            .devsecops
            .audit_secret_usage(req.secret_name.as_deref(), req.time_range.as_deref());
        let message = format!(
            "Secret usage audit for {}",
            req.secret_name.as_deref().unwrap_or("all secrets")
        );
        Ok(ToolResponse::success(result, message).into())
    }

    #[tool(name = "vaultIntegration", description = "Integrate with secret vaults")]
    async fn vault_integration(
        &self,
        params: Parameters<VaultIntegrationRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let result =
            self.devsecops
                .vault_integration(&req.vault_url, req.secret_path.as_deref(), &req.action);
        let message = format!("Vault integration: {} operation on {}", req.action, req.vault_url);
        Ok(ToolResponse::success(result, message).into())
    }
}

pub(crate) fn router() -> ToolRouter<McpServer> {
    McpServer::devsecops_router()
}
