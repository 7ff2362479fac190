//! DevSecOps operations: scans, compliance, policies, and secrets.
//!
//! Like the testing group, these operations have no REST route on this
//! surface and return representative data echoing the caller's parameters.

use serde_json::{json, Map, Value};
use uuid::Uuid;

use super::{days_ago, days_from_now, minutes_from_now, now, timestamp_millis};

/// Service for the DevSecOps tool group.
#[derive(Debug, Clone, Default)]
pub struct DevSecOpsService;

impl DevSecOpsService {
    pub fn new() -> Self {
        Self
    }

    pub fn run_security_scan(
        &self,
        repository_id: &str,
        branch: Option<&str>,
        scan_type: Option<&str>,
    ) -> Value {
        let scan_id = format!("scan-{}", &Uuid::new_v4().simple().to_string()[..7]);
        json!({
            "scanId": scan_id,
            "repositoryId": repository_id,
            "branch": branch.unwrap_or("main"),
            "scanType": scan_type.unwrap_or("all"),
            "status": "initiated",
            "startTime": now(),
            "estimatedCompletionTime": minutes_from_now(10),
        })
    }

    pub fn get_security_scan_results(&self, scan_id: &str, severity: Option<&str>) -> Value {
        let severity = severity.unwrap_or("all");
        let count = |level: &str, n: u32| {
            if severity == "all" || severity == level {
                n
            } else {
                0
            }
        };
        json!({
            "scanId": scan_id,
            "status": "completed",
            "completionTime": now(),
            "summary": {
                "critical": count("critical", 3),
                "high": count("high", 8),
                "medium": count("medium", 15),
                "low": count("low", 24),
            },
            "findings": [
                {
                    "id": "vul-1",
                    "title": "SQL Injection vulnerability",
                    "severity": "critical",
                    "location": "src/data/queries.ts:42",
                    "description": "Potential SQL injection detected in unvalidated user input",
                },
                {
                    "id": "vul-2",
                    "title": "Cross-site scripting (XSS)",
                    "severity": "high",
                    "location": "src/ui/userProfile.tsx:67",
                    "description": "User input rendered directly to DOM without sanitization",
                },
                {
                    "id": "vul-3",
                    "title": "Outdated npm package",
                    "severity": "medium",
                    "location": "package.json",
                    "description": "Package 'axios' has known vulnerabilities in version 0.19.0",
                },
            ],
        })
    }

    pub fn track_security_vulnerabilities(&self, time_range: Option<&str>) -> Value {
        json!({
            "vulnerabilities": [
                {
                    "id": "vul-1",
                    "title": "SQL Injection vulnerability",
                    "status": "in-progress",
                    "assignedTo": "jane.developer@example.com",
                    "discoveredDate": days_ago(7),
                    "lastUpdatedDate": now(),
                },
                {
                    "id": "vul-2",
                    "title": "Cross-site scripting (XSS)",
                    "status": "mitigated",
                    "assignedTo": "john.securityexpert@example.com",
                    "discoveredDate": days_ago(14),
                    "lastUpdatedDate": days_ago(2),
                },
                {
                    "id": "vul-3",
                    "title": "Outdated npm package",
                    "status": "resolved",
                    "assignedTo": "deployment.team@example.com",
                    "discoveredDate": days_ago(30),
                    "lastUpdatedDate": days_ago(25),
                },
            ],
            "statistics": {
                "open": 5,
                "inProgress": 8,
                "mitigated": 12,
                "resolved": 27,
                "falsePositive": 4,
            },
            "timeRange": time_range.unwrap_or("90d"),
        })
    }

    pub fn generate_security_compliance(
        &self,
        standard_type: Option<&str>,
        include_evidence: Option<bool>,
    ) -> Value {
        let mut result = json!({
            "standardType": standard_type.unwrap_or("owasp"),
            "generatedDate": now(),
            "overallCompliance": 78.5,
            "categories": [
                {
                    "name": "Authentication Controls",
                    "compliance": 92.3,
                    "requirements": 12,
                    "passedRequirements": 11,
                },
                {
                    "name": "Access Controls",
                    "compliance": 85.7,
                    "requirements": 14,
                    "passedRequirements": 12,
                },
                {
                    "name": "Data Protection",
                    "compliance": 66.7,
                    "requirements": 9,
                    "passedRequirements": 6,
                },
            ],
        });
        if include_evidence == Some(true) {
            result["evidence"] = json!({
                "documentationLinks": [
                    "https://docs.example.com/security/auth",
                    "https://docs.example.com/security/data",
                ],
                "testResults": ["pipeline/security/results/123.json"],
                "screenshots": ["evidence/login-screen.png", "evidence/data-encryption.png"],
            });
        }
        result
    }

    pub fn integrate_sarif_results(
        &self,
        sarif_file_path: &str,
        create_work_items: Option<bool>,
    ) -> Value {
        json!({
            "filePath": sarif_file_path,
            "processed": true,
            "importedResults": 42,
            "workItemsCreated": if create_work_items == Some(true) { 18 } else { 0 },
            "summary": { "critical": 3, "high": 7, "medium": 12, "low": 20 },
            "tools": ["SonarQube", "ESLint Security Plugin"],
        })
    }

    pub fn run_compliance_checks(
        &self,
        compliance_standard: &str,
        scope_id: Option<&str>,
    ) -> Value {
        json!({
            "complianceStandard": compliance_standard,
            "scopeId": scope_id.unwrap_or("organization"),
            "status": "completed",
            "completionTime": now(),
            "overallCompliance": 82.5,
            "passedChecks": 33,
            "failedChecks": 7,
            "waivedChecks": 2,
            "criticalFailures": 1,
            "recommendations": [
                "Enable MFA for all developer accounts",
                "Implement branch protection policies",
                "Set up container vulnerability scanning",
            ],
        })
    }

    pub fn get_compliance_status(
        &self,
        standard_id: Option<&str>,
        include_history: Option<bool>,
    ) -> Value {
        let mut result = json!({
            "standardId": standard_id.unwrap_or("iso27001"),
            "lastChecked": now(),
            "overallCompliance": 87.3,
            "statusByCategory": {
                "Access Control": { "compliance": 92.0, "status": "compliant" },
                "System Acquisition": { "compliance": 76.5, "status": "partially-compliant" },
                "Cryptography": { "compliance": 100.0, "status": "compliant" },
                "Physical Security": { "compliance": 80.0, "status": "partially-compliant" },
            },
        });
        if include_history == Some(true) {
            result["history"] = json!([
                { "date": days_ago(30), "compliance": 78.9 },
                { "date": days_ago(60), "compliance": 75.2 },
                { "date": days_ago(90), "compliance": 72.1 },
            ]);
        }
        result
    }

    pub fn create_compliance_report(&self, standard_id: &str, format: Option<&str>) -> Value {
        let format = format.unwrap_or("pdf");
        json!({
            "standardId": standard_id,
            "format": format,
            "reportUrl": format!(
                "https://reports.example.com/compliance/{}/report-{}.{}",
                standard_id,
                timestamp_millis(),
                format
            ),
            "generatedDate": now(),
            "expiryDate": days_from_now(90),
            "reportSize": "2.4 MB",
        })
    }

    pub fn manage_security_policies(
        &self,
        policy_name: &str,
        action: &str,
        policy_definition: Option<&Map<String, Value>>,
    ) -> Value {
        let definition = match policy_definition {
            Some(definition) => Value::Object(definition.clone()),
            None => json!({
                "requiredReviewers": 2,
                "branchProtection": true,
                "requireSecurityScan": true,
            }),
        };
        json!({
            "policyName": policy_name,
            "action": action,
            "status": "success",
            "appliedTo": ["ProjectX", "ProjectY"],
            "effectiveDate": now(),
            "createdBy": "security.admin@example.com",
            "version": 3,
            "definition": definition,
        })
    }

    pub fn track_security_awareness(
        &self,
        team_id: Option<&str>,
        time_range: Option<&str>,
    ) -> Value {
        json!({
            "teamId": team_id.unwrap_or("all-teams"),
            "completionRate": 78.3,
            "trainingModules": [
                {
                    "id": "sec-101",
                    "name": "Security Basics",
                    "completionRate": 95.2,
                    "averageScore": 87.5,
                },
                {
                    "id": "secure-coding",
                    "name": "Secure Coding Practices",
                    "completionRate": 82.1,
                    "averageScore": 79.3,
                },
                {
                    "id": "threat-modeling",
                    "name": "Threat Modeling Workshop",
                    "completionRate": 64.5,
                    "averageScore": 81.9,
                },
            ],
            "topPerformers": [
                "alex.developer@example.com",
                "jamie.architect@example.com",
                "robin.qa@example.com",
            ],
            "needsAttention": [
                "new.hire@example.com",
                "busy.manager@example.com",
            ],
            "timeRange": time_range.unwrap_or("90d"),
        })
    }

    pub fn rotate_secrets(
        &self,
        secret_name: Option<&str>,
        secret_type: Option<&str>,
        force: Option<bool>,
    ) -> Value {
        json!({
            "secretName": secret_name.unwrap_or("all-applicable-secrets"),
            "secretType": secret_type.unwrap_or("all"),
            "status": "rotated",
            "rotatedCount": if secret_name.is_some() { 1 } else { 12 },
            "previousExpiryDate": now(),
            "newExpiryDate": days_from_now(180),
            "affectedServices": [
                "api-gateway",
                "authentication-service",
                "payment-processor",
            ],
            "force": force.unwrap_or(false),
        })
    }

    pub fn audit_secret_usage(&self, secret_name: Option<&str>, time_range: Option<&str>) -> Value {
        json!({
            "secretName": secret_name.unwrap_or("all-secrets"),
            "timeRange": time_range.unwrap_or("30d"),
            "totalUsage": 1842,
            "usageByService": {
                "api-gateway": 723,
                "user-service": 512,
                "payment-service": 318,
                "notification-service": 289,
            },
            "unusedSecrets": ["legacy-api-key", "test-database-password"],
            "highUsageSecrets": ["main-database-connection", "authentication-token"],
            "recommendations": [
                "Remove unused secrets 'legacy-api-key' and 'test-database-password'",
                "Consider creating service-specific credentials for 'authentication-token'",
            ],
        })
    }

    pub fn vault_integration(
        &self,
        vault_url: &str,
        secret_path: Option<&str>,
        action: &str,
    ) -> Value {
        let mut result = json!({
            "vaultUrl": vault_url,
            "secretPath": secret_path.unwrap_or("/"),
            "action": action,
            "status": "success",
            "timestamp": now(),
        });
        if action == "list" {
            result["secrets"] = json!(["api-key", "database-password", "jwt-signing-key"]);
        }
        if action == "get" {
            result["secretValue"] = json!({
                "value": "[SECRET_RETRIEVED]",
                "version": 3,
                "created": days_ago(30),
            });
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_ids_are_unique_per_scan() {
        let service = DevSecOpsService::new();
        let first = service.run_security_scan("web", None, None);
        let second = service.run_security_scan("web", None, None);
        assert!(first["scanId"].as_str().unwrap().starts_with("scan-"));
        assert_ne!(first["scanId"], second["scanId"]);
        assert_eq!(first["branch"], "main");
        assert_eq!(first["scanType"], "all");
    }

    #[test]
    fn severity_filter_zeroes_other_summary_buckets() {
        let service = DevSecOpsService::new();
        let all = service.get_security_scan_results("scan-1", None);
        assert_eq!(all["summary"]["critical"], 3);
        assert_eq!(all["summary"]["low"], 24);

        let high_only = service.get_security_scan_results("scan-1", Some("high"));
        assert_eq!(high_only["summary"]["high"], 8);
        assert_eq!(high_only["summary"]["critical"], 0);
        assert_eq!(high_only["summary"]["medium"], 0);
    }

    #[test]
    fn vault_payload_depends_on_action() {
        let service = DevSecOpsService::new();
        let listed = service.vault_integration("https://vault.example.com", None, "list");
        assert_eq!(listed["secrets"].as_array().unwrap().len(), 3);
        assert!(listed.get("secretValue").is_none());

        let fetched = service.vault_integration("https://vault.example.com", Some("/db"), "get");
        assert_eq!(fetched["secretValue"]["value"], "[SECRET_RETRIEVED]");
        assert!(fetched.get("secrets").is_none());
        assert_eq!(fetched["secretPath"], "/db");
    }

    #[test]
    fn named_secret_rotation_counts_one() {
        let service = DevSecOpsService::new();
        let one = service.rotate_secrets(Some("signing-key"), None, None);
        assert_eq!(one["rotatedCount"], 1);
        let all = service.rotate_secrets(None, Some("token"), Some(true));
        assert_eq!(all["rotatedCount"], 12);
        assert_eq!(all["force"], true);
    }
}
