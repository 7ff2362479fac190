//! AI-assisted development insights.
//!
//! Another route-less group: reviews, predictions, and suggestions come back
//! as representative data echoing the caller's parameters.

use serde_json::{json, Map, Value};

use super::{now, timestamp_millis};

/// Service for the AI-assisted development tool group.
#[derive(Debug, Clone, Default)]
pub struct AiInsightsService;

impl AiInsightsService {
    pub fn new() -> Self {
        Self
    }

    pub fn code_review(
        &self,
        pull_request_id: Option<i64>,
        repository_id: Option<&str>,
    ) -> Value {
        let mut result = json!({
            "suggestions": [
                {
                    "file": "src/main.ts",
                    "line": 45,
                    "issue": "Potential null reference",
                    "recommendation": "Add null check before accessing properties",
                },
                {
                    "file": "src/utils/helper.ts",
                    "line": 23,
                    "issue": "Inefficient loop",
                    "recommendation": "Consider using map() instead of forEach()",
                },
            ],
            "analysisDate": now(),
        });
        if let Some(id) = pull_request_id {
            result["pullRequestId"] = json!(id);
        }
        if let Some(repo) = repository_id {
            result["repositoryId"] = json!(repo);
        }
        result
    }

    pub fn code_optimization(
        &self,
        repository_id: &str,
        file_path: &str,
        line_start: Option<u32>,
        line_end: Option<u32>,
        optimization_type: Option<&str>,
    ) -> Value {
        let range_start = line_start.filter(|n| *n > 0).unwrap_or(1);
        let range_end = line_end.filter(|n| *n > 0).unwrap_or(100);
        json!({
            "repositoryId": repository_id,
            "filePath": file_path,
            "lineRange": format!("{}-{}", range_start, range_end),
            "optimizationType": optimization_type.unwrap_or("all"),
            "suggestions": [
                {
                    "line": line_start.filter(|n| *n > 0).unwrap_or(10),
                    "issue": "Memory leak",
                    "recommendation": "Dispose resources properly",
                    "code": "resource.dispose();",
                },
                {
                    "line": line_end.filter(|n| *n > 0).unwrap_or(50),
                    "issue": "Performance bottleneck",
                    "recommendation": "Cache expensive operation",
                    "code": "const cachedResult = memoize(expensiveOperation);",
                },
            ],
        })
    }

    pub fn code_smells(
        &self,
        repository_id: &str,
        branch: Option<&str>,
        file_path: Option<&str>,
        severity: Option<&str>,
    ) -> Value {
        json!({
            "repositoryId": repository_id,
            "branch": branch.unwrap_or("main"),
            "codeSmells": [
                {
                    "file": file_path.unwrap_or("src/components/App.tsx"),
                    "line": 120,
                    "smell": "Long method",
                    "severity": "high",
                    "recommendation": "Extract logic into smaller methods",
                },
                {
                    "file": file_path.unwrap_or("src/services/DataService.ts"),
                    "line": 45,
                    "smell": "Duplicate code",
                    "severity": "medium",
                    "recommendation": "Create a shared utility function",
                },
                {
                    "file": file_path.unwrap_or("src/utils/helpers.ts"),
                    "line": 78,
                    "smell": "God class",
                    "severity": "high",
                    "recommendation": "Split into multiple focused classes",
                },
            ],
            "severity": severity.unwrap_or("all"),
        })
    }

    pub fn bug_analysis(
        &self,
        repository_id: &str,
        pull_request_id: Option<i64>,
        branch: Option<&str>,
        file_path: Option<&str>,
    ) -> Value {
        let mut result = json!({
            "repositoryId": repository_id,
            "branch": branch.unwrap_or("main"),
            "potentialIssues": [
                {
                    "file": file_path.unwrap_or("src/controllers/UserController.ts"),
                    "line": 58,
                    "risk": "high",
                    "issue": "Race condition in concurrent user updates",
                    "confidence": 0.85,
                },
                {
                    "file": file_path.unwrap_or("src/services/AuthService.ts"),
                    "line": 124,
                    "risk": "medium",
                    "issue": "Token validation could be bypassed",
                    "confidence": 0.72,
                },
            ],
            "analysisDate": now(),
        });
        if let Some(id) = pull_request_id {
            result["pullRequestId"] = json!(id);
        }
        result
    }

    pub fn developer_productivity(
        &self,
        user_id: Option<&str>,
        team_id: Option<&str>,
        time_range: Option<&str>,
    ) -> Value {
        let mut result = json!({
            "userId": user_id.unwrap_or("current-user"),
            "timeRange": time_range.unwrap_or("30d"),
            "metrics": {
                "codeCommitted": { "lines": 2450, "commits": 48, "pullRequests": 15 },
                "workItemsCompleted": 28,
                "codeReviewsPerformed": 32,
                "averageReviewTime": "1.5h",
                "buildSuccessRate": 94.2,
                "testCoverage": 78.5,
            },
            "trends": {
                "productivity": [82, 85, 89, 87, 92],
                "qualityScore": [76, 78, 81, 80, 83],
            },
        });
        if let Some(team) = team_id {
            result["teamId"] = json!(team);
        }
        result
    }

    pub fn effort_estimation(&self, work_item_ids: Option<&[i64]>) -> Value {
        let ids = match work_item_ids {
            Some(ids) => json!(ids),
            None => json!([1001, 1002, 1003]),
        };
        json!({
            "workItemIds": ids,
            "estimations": [
                {
                    "workItemId": 1001,
                    "title": "Implement login page",
                    "predictedHours": 12.5,
                    "confidenceScore": 0.85,
                    "similarWorkItems": [845, 921],
                },
                {
                    "workItemId": 1002,
                    "title": "Fix navigation bug",
                    "predictedHours": 4.2,
                    "confidenceScore": 0.92,
                    "similarWorkItems": [678, 782],
                },
                {
                    "workItemId": 1003,
                    "title": "Add unit tests",
                    "predictedHours": 8.0,
                    "confidenceScore": 0.78,
                    "similarWorkItems": [512, 634],
                },
            ],
            "modelFactors": [
                "historical completion time",
                "complexity",
                "developer experience",
                "similar work items",
            ],
        })
    }

    pub fn code_quality_trends(
        &self,
        repository_id: Option<&str>,
        branch: Option<&str>,
        time_range: Option<&str>,
        metrics: Option<&[String]>,
    ) -> Value {
        let metrics = match metrics {
            Some(metrics) => json!(metrics),
            None => json!(["complexity", "duplication", "test_coverage", "code_smells"]),
        };
        let mut result = json!({
            "branch": branch.unwrap_or("main"),
            "timeRange": time_range.unwrap_or("90d"),
            "metrics": metrics,
            "trends": {
                "complexity": [24, 26, 23, 21, 20, 18],
                "duplication": [12.5, 11.8, 10.5, 9.8, 8.5, 8.2],
                "testCoverage": [68.2, 72.5, 75.8, 76.4, 78.2, 81.5],
                "codeSmells": [45, 42, 38, 35, 30, 28],
            },
            "timePoints": ["Jan", "Feb", "Mar", "Apr", "May", "Jun"],
        });
        if let Some(repo) = repository_id {
            result["repositoryId"] = json!(repo);
        }
        result
    }

    pub fn work_item_refinements(
        &self,
        work_item_id: Option<i64>,
        work_item_type: Option<&str>,
    ) -> Value {
        json!({
            "workItemId": work_item_id.filter(|id| *id != 0).unwrap_or(1234),
            "workItemType": work_item_type.unwrap_or("User Story"),
            "suggestions": [
                {
                    "field": "Title",
                    "issue": "Too vague",
                    "recommendation": "Specify the user role and action in the title",
                },
                {
                    "field": "Description",
                    "issue": "Missing acceptance criteria",
                    "recommendation": "Add clear acceptance criteria with examples",
                },
                {
                    "field": "Effort",
                    "issue": "Estimate may be too low",
                    "recommendation": "Consider increasing estimate based on similar completed stories",
                },
                {
                    "field": "Tags",
                    "issue": "Missing relevant tags",
                    "recommendation": "Add 'frontend', 'ux' tags for better categorization",
                },
            ],
            "similarWorkItems": [5678, 5912, 6023],
        })
    }

    pub fn automation_opportunities(
        &self,
        project_id: Option<&str>,
        scope_type: Option<&str>,
    ) -> Value {
        let mut result = json!({
            "scopeType": scope_type.unwrap_or("all"),
            "opportunities": [
                {
                    "type": "build",
                    "area": "Continuous Integration",
                    "description": "Automate build verification tests",
                    "benefit": "Reduce failed builds by 35%",
                    "complexity": "medium",
                    "implementation": "Add BVT step to pipeline yaml",
                },
                {
                    "type": "release",
                    "area": "Deployment",
                    "description": "Implement blue-green deployments",
                    "benefit": "Reduce downtime by 90%",
                    "complexity": "high",
                    "implementation": "Configure traffic manager and deployment slots",
                },
                {
                    "type": "tests",
                    "area": "Regression Testing",
                    "description": "Implement test impact analysis",
                    "benefit": "Reduce test execution time by 45%",
                    "complexity": "medium",
                    "implementation": "Configure TIA plugin in test tasks",
                },
            ],
        });
        if let Some(project) = project_id {
            result["projectId"] = json!(project);
        }
        result
    }

    pub fn create_alert(
        &self,
        alert_name: &str,
        alert_type: &str,
        conditions: &Map<String, Value>,
        actions: Option<&Map<String, Value>>,
    ) -> Value {
        let actions = match actions {
            Some(actions) => Value::Object(actions.clone()),
            None => json!({ "notificationType": "email" }),
        };
        json!({
            "alertId": format!("alert-{}", timestamp_millis()),
            "alertName": alert_name,
            "alertType": alert_type,
            "conditions": conditions,
            "actions": actions,
            "status": "created",
            "createdDate": now(),
        })
    }

    pub fn build_failure_prediction(
        &self,
        build_definition_id: i64,
        lookback_period: Option<&str>,
    ) -> Value {
        json!({
            "buildDefinitionId": build_definition_id,
            "lookbackPeriod": lookback_period.unwrap_or("30d"),
            "prediction": {
                "failureRisk": 0.35,
                "confidenceScore": 0.82,
                "potentialIssues": [
                    {
                        "area": "Dependencies",
                        "risk": "high",
                        "description": "Outdated NuGet packages may cause conflicts",
                    },
                    {
                        "area": "Test Coverage",
                        "risk": "medium",
                        "description": "Recent code changes have low test coverage",
                    },
                    {
                        "area": "Build Configuration",
                        "risk": "low",
                        "description": "Build agent pool has capacity issues during peak hours",
                    },
                ],
                "recommendedActions": [
                    "Update NuGet packages to latest compatible versions",
                    "Add tests for the authentication module",
                    "Schedule builds during off-peak hours",
                ],
            },
        })
    }

    pub fn test_selection(
        &self,
        build_id: i64,
        changed_files: Option<&[String]>,
        max_test_count: Option<u32>,
    ) -> Value {
        let changed_files = match changed_files {
            Some(files) => json!(files),
            None => json!(["src/services/authentication.ts", "src/components/login.tsx"]),
        };
        let excluded = if max_test_count.filter(|n| *n > 0).is_some() {
            120
        } else {
            0
        };
        json!({
            "buildId": build_id,
            "changedFiles": changed_files,
            "selectedTests": [
                {
                    "testId": "test-001",
                    "name": "AuthenticationTests",
                    "priority": "high",
                    "reason": "Direct dependency on changed files",
                },
                {
                    "testId": "test-002",
                    "name": "LoginComponentTests",
                    "priority": "high",
                    "reason": "Direct dependency on changed files",
                },
                {
                    "testId": "test-003",
                    "name": "UserSessionTests",
                    "priority": "medium",
                    "reason": "Indirect dependency on authentication",
                },
                {
                    "testId": "test-004",
                    "name": "NavigationTests",
                    "priority": "low",
                    "reason": "Previously failed with similar changes",
                },
            ],
            "excludedTests": excluded,
            "estimatedTimeReduction": "45%",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_omits_identifiers_when_absent() {
        let service = AiInsightsService::new();
        let bare = service.code_review(None, None);
        assert!(bare.get("pullRequestId").is_none());
        assert!(bare.get("repositoryId").is_none());

        let full = service.code_review(Some(42), Some("repo-1"));
        assert_eq!(full["pullRequestId"], 42);
        assert_eq!(full["repositoryId"], "repo-1");
    }

    #[test]
    fn optimization_defaults_the_line_range() {
        let service = AiInsightsService::new();
        let result = service.code_optimization("repo-1", "src/app.ts", None, None, None);
        assert_eq!(result["lineRange"], "1-100");
        assert_eq!(result["suggestions"][0]["line"], 10);
        assert_eq!(result["suggestions"][1]["line"], 50);

        let ranged = service.code_optimization("repo-1", "src/app.ts", Some(5), Some(20), None);
        assert_eq!(ranged["lineRange"], "5-20");
        assert_eq!(ranged["suggestions"][0]["line"], 5);
    }

    #[test]
    fn estimation_echoes_supplied_ids() {
        let service = AiInsightsService::new();
        let defaulted = service.effort_estimation(None);
        assert_eq!(defaulted["workItemIds"], json!([1001, 1002, 1003]));

        let supplied = service.effort_estimation(Some(&[7, 8]));
        assert_eq!(supplied["workItemIds"], json!([7, 8]));
    }

    #[test]
    fn excluded_tests_follow_the_cap() {
        let service = AiInsightsService::new();
        let uncapped = service.test_selection(10, None, None);
        assert_eq!(uncapped["excludedTests"], 0);

        let capped = service.test_selection(10, None, Some(25));
        assert_eq!(capped["excludedTests"], 120);
    }
}
