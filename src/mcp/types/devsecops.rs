use rmcp::schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RunSecurityScanRequest {
    #[schemars(description = "ID of the repository to scan")]
    pub repository_id: String,
    #[schemars(description = "Branch to scan")]
    pub branch: Option<String>,
    #[schemars(description = "Type of security scan to run")]
    pub scan_type: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetSecurityScanResultsRequest {
    #[schemars(description = "ID of the scan to get results for")]
    pub scan_id: String,
    #[schemars(description = "Filter results by severity")]
    pub severity: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrackSecurityVulnerabilitiesRequest {
    #[schemars(description = "ID of a specific vulnerability to track")]
    pub vulnerability_id: Option<String>,
    #[schemars(description = "Filter by vulnerability status")]
    pub status: Option<String>,
    #[schemars(description = "Time range for tracking (e.g., '90d')")]
    pub time_range: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateSecurityComplianceRequest {
    #[schemars(description = "Compliance standard to report on")]
    pub standard_type: Option<String>,
    #[schemars(description = "Include evidence in the report")]
    pub include_evidence: Option<bool>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IntegrateSarifResultsRequest {
    #[schemars(description = "Path to the SARIF file to import")]
    pub sarif_file_path: String,
    #[schemars(description = "Create work items from findings")]
    pub create_work_items: Option<bool>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RunComplianceChecksRequest {
    #[schemars(description = "Compliance standard to check against")]
    pub compliance_standard: String,
    #[schemars(description = "Scope of the compliance check")]
    pub scope_id: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetComplianceStatusRequest {
    #[schemars(description = "ID of the compliance standard")]
    pub standard_id: Option<String>,
    #[schemars(description = "Include historical compliance data")]
    pub include_history: Option<bool>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateComplianceReportRequest {
    #[schemars(description = "ID of the compliance standard")]
    pub standard_id: String,
    #[schemars(description = "Format of the report")]
    pub format: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ManageSecurityPoliciesRequest {
    #[schemars(description = "Name of the security policy")]
    pub policy_name: String,
    #[schemars(description = "Action to perform on the policy")]
    pub action: String,
    #[schemars(description = "Definition of the policy")]
    pub policy_definition: Option<Map<String, Value>>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrackSecurityAwarenessRequest {
    #[schemars(description = "ID of the team to track")]
    pub team_id: Option<String>,
    #[schemars(description = "ID of specific training to track")]
    pub training_id: Option<String>,
    #[schemars(description = "Time range for tracking (e.g., '90d')")]
    pub time_range: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RotateSecretsRequest {
    #[schemars(description = "Name of the secret to rotate")]
    pub secret_name: Option<String>,
    #[schemars(description = "Type of secret to rotate")]
    pub secret_type: Option<String>,
    #[schemars(description = "Force rotation even if not expired")]
    pub force: Option<bool>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuditSecretUsageRequest {
    #[schemars(description = "Name of the secret to audit")]
    pub secret_name: Option<String>,
    #[schemars(description = "Time range for the audit (e.g., '30d')")]
    pub time_range: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VaultIntegrationRequest {
    #[schemars(description = "URL of the vault to integrate with")]
    pub vault_url: String,
    #[schemars(description = "Path to the secret in the vault")]
    pub secret_path: Option<String>,
    #[schemars(description = "Action to perform")]
    pub action: String,
    #[schemars(description = "Value to set (for 'set' action)")]
    pub secret_value: Option<String>,
}
