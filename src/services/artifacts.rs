//! Artifact feed, package, and container registry operations.
//!
//! No REST route serves these through this surface; each operation returns
//! representative data echoing the caller's parameters. All methods are
//! infallible.

use serde_json::{json, Map, Value};

use super::{days_ago, now, timestamp_millis};

/// Stem of the last path segment of a package file. Empty input names the
/// package `unknown`.
fn package_name_from_path(path: &str) -> &str {
    let file = path.rsplit('/').next().unwrap_or("");
    let stem = file.split('.').next().unwrap_or("");
    if stem.is_empty() {
        "unknown"
    } else {
        stem
    }
}

/// Service for the artifact management tool group.
#[derive(Debug, Clone, Default)]
pub struct ArtifactService;

impl ArtifactService {
    pub fn new() -> Self {
        Self
    }

    pub fn list_artifact_feeds(
        &self,
        feed_type: Option<&str>,
        include_deleted: Option<bool>,
    ) -> Value {
        let feed_type = feed_type.unwrap_or("all");
        let feeds = [
            json!({
                "id": "feed-npm-1",
                "name": "npm-packages",
                "description": "NPM packages for the organization",
                "type": "npm",
                "visibility": "organization",
                "url": "https://feeds.dev.azure.com/organization/project/_packaging/npm-packages/npm",
                "createdDate": days_ago(90),
            }),
            json!({
                "id": "feed-nuget-1",
                "name": "nuget-packages",
                "description": "NuGet packages for .NET projects",
                "type": "nuget",
                "visibility": "project",
                "url": "https://feeds.dev.azure.com/organization/project/_packaging/nuget-packages/nuget",
                "createdDate": days_ago(60),
            }),
            json!({
                "id": "feed-universal-1",
                "name": "universal-packages",
                "description": "Universal packages for deployments",
                "type": "universal",
                "visibility": "organization",
                "url": "https://feeds.dev.azure.com/organization/project/_packaging/universal-packages/universal",
                "createdDate": days_ago(30),
            }),
        ];
        let matching: Vec<Value> = feeds
            .into_iter()
            .filter(|feed| feed_type == "all" || feed["type"] == feed_type)
            .collect();
        json!({
            "feeds": matching,
            "count": 3,
            "includeDeleted": include_deleted.unwrap_or(false),
        })
    }

    pub fn get_package_versions(
        &self,
        feed_id: &str,
        package_name: &str,
        top: Option<u32>,
    ) -> Value {
        let versions = vec![
            json!({
                "version": "1.0.0",
                "publishedDate": days_ago(90),
                "views": ["release", "prerelease"],
                "downloadsCount": 1250,
                "isLatest": false,
            }),
            json!({
                "version": "1.1.0",
                "publishedDate": days_ago(60),
                "views": ["release", "prerelease"],
                "downloadsCount": 945,
                "isLatest": false,
            }),
            json!({
                "version": "1.2.0",
                "publishedDate": days_ago(30),
                "views": ["release", "prerelease"],
                "downloadsCount": 1587,
                "isLatest": true,
            }),
        ];
        let total = versions.len();
        let versions = match top.filter(|n| *n > 0) {
            Some(top) => super::slice_page(versions, 0, top as usize),
            None => versions,
        };
        json!({
            "feedId": feed_id,
            "packageName": package_name,
            "totalVersions": total,
            "versions": versions,
        })
    }

    pub fn publish_package(
        &self,
        feed_id: &str,
        package_type: &str,
        package_path: &str,
        package_version: Option<&str>,
    ) -> Value {
        let name = package_name_from_path(package_path);
        let version = package_version.unwrap_or("1.0.0");
        json!({
            "feedId": feed_id,
            "packageType": package_type,
            "packageName": name,
            "packageVersion": version,
            "publishDate": now(),
            "status": "published",
            "packageUrl": format!(
                "https://feeds.dev.azure.com/organization/project/_packaging/{}/npm/registry/{}/v/{}",
                feed_id, name, version
            ),
        })
    }

    pub fn promote_package(
        &self,
        feed_id: &str,
        package_name: &str,
        package_version: &str,
        source_view: &str,
        target_view: &str,
    ) -> Value {
        json!({
            "feedId": feed_id,
            "packageName": package_name,
            "packageVersion": package_version,
            "sourceView": source_view,
            "targetView": target_view,
            "promotionDate": now(),
            "status": "promoted",
            "promotedBy": "user@example.com",
        })
    }

    pub fn delete_package_version(
        &self,
        feed_id: &str,
        package_name: &str,
        package_version: &str,
        permanent: Option<bool>,
    ) -> Value {
        json!({
            "feedId": feed_id,
            "packageName": package_name,
            "packageVersion": package_version,
            "deletionDate": now(),
            "permanent": permanent.unwrap_or(false),
            "status": "deleted",
            "deletedBy": "user@example.com",
        })
    }

    pub fn list_container_images(
        &self,
        repository_name: Option<&str>,
        include_manifests: Option<bool>,
        include_deleted: Option<bool>,
    ) -> Value {
        let manifests = include_manifests == Some(true);
        let mut api_service = json!({
            "name": "api-service",
            "tags": ["latest", "v1.0.0", "v1.1.0"],
            "size": "256MB",
            "lastUpdated": days_ago(15),
            "pullCount": 1250,
        });
        let mut web_frontend = json!({
            "name": "web-frontend",
            "tags": ["latest", "v2.0.0", "v2.1.0", "v2.2.0"],
            "size": "124MB",
            "lastUpdated": days_ago(7),
            "pullCount": 2189,
        });
        if manifests {
            api_service["manifest"] = json!({
                "schemaVersion": 2,
                "mediaType": "application/vnd.docker.distribution.manifest.v2+json",
                "layers": [{
                    "digest": "sha256:a3ed95caeb02ffe68cdd9fd84406680ae93d633cb16422d00e8a7c22955b46d4",
                    "size": 32456234,
                }],
            });
            web_frontend["manifest"] = json!({
                "schemaVersion": 2,
                "mediaType": "application/vnd.docker.distribution.manifest.v2+json",
                "layers": [{
                    "digest": "sha256:b3ed95caeb02ffe68cdd9fd84406680ae93d633cb16422d00e8a7c22955b46d5",
                    "size": 24567890,
                }],
            });
        }
        json!({
            "repositoryName": repository_name.unwrap_or("all"),
            "images": [api_service, web_frontend],
            "count": 2,
            "includeDeleted": include_deleted.unwrap_or(false),
        })
    }

    pub fn get_container_image_tags(
        &self,
        repository_name: &str,
        image_name: &str,
        top: Option<u32>,
    ) -> Value {
        let tags = vec![
            json!({
                "tag": "latest",
                "createdDate": days_ago(7),
                "size": "256MB",
                "digest": "sha256:a3ed95caeb02ffe68cdd9fd84406680ae93d633cb16422d00e8a7c22955b46d4",
                "pullCount": 523,
            }),
            json!({
                "tag": "v1.0.0",
                "createdDate": days_ago(90),
                "size": "245MB",
                "digest": "sha256:b3ed95caeb02ffe68cdd9fd84406680ae93d633cb16422d00e8a7c22955b46d5",
                "pullCount": 412,
            }),
            json!({
                "tag": "v1.1.0",
                "createdDate": days_ago(30),
                "size": "255MB",
                "digest": "sha256:c3ed95caeb02ffe68cdd9fd84406680ae93d633cb16422d00e8a7c22955b46d6",
                "pullCount": 315,
            }),
        ];
        let total = tags.len();
        let tags = match top.filter(|n| *n > 0) {
            Some(top) => super::slice_page(tags, 0, top as usize),
            None => tags,
        };
        json!({
            "repositoryName": repository_name,
            "imageName": image_name,
            "totalTags": total,
            "tags": tags,
        })
    }

    pub fn scan_container_image(
        &self,
        repository_name: &str,
        image_tag: &str,
        scan_type: Option<&str>,
    ) -> Value {
        let vulnerabilities = if scan_type == Some("compliance") {
            json!([])
        } else {
            json!([
                {
                    "id": "CVE-2023-1234",
                    "severity": "high",
                    "description": "Vulnerability in base image affecting OpenSSL",
                    "package": "openssl",
                    "installedVersion": "1.1.1k",
                    "fixedVersion": "1.1.1l",
                    "remediation": "Update to latest base image",
                },
                {
                    "id": "CVE-2023-5678",
                    "severity": "medium",
                    "description": "Vulnerability in package manager",
                    "package": "apt",
                    "installedVersion": "2.2.4",
                    "fixedVersion": "2.2.5",
                    "remediation": "Run apt-get update && apt-get upgrade",
                },
            ])
        };
        let compliance_issues = if scan_type == Some("vulnerability") {
            json!([])
        } else {
            json!([
                {
                    "id": "COMP-1",
                    "severity": "high",
                    "description": "Root user used for application execution",
                    "standard": "CIS Docker Benchmark 4.1",
                    "remediation": "Use non-root user in Dockerfile",
                },
                {
                    "id": "COMP-2",
                    "severity": "medium",
                    "description": "No healthcheck defined",
                    "standard": "CIS Docker Benchmark 4.6",
                    "remediation": "Add HEALTHCHECK instruction to Dockerfile",
                },
            ])
        };
        json!({
            "repositoryName": repository_name,
            "imageTag": image_tag,
            "scanType": scan_type.unwrap_or("both"),
            "scanDate": now(),
            "vulnerabilities": vulnerabilities,
            "complianceIssues": compliance_issues,
            "overallRisk": "high",
            "scanStatus": "completed",
        })
    }

    pub fn manage_container_policies(
        &self,
        repository_name: &str,
        policy_type: &str,
        action: &str,
        policy_settings: Option<&Map<String, Value>>,
    ) -> Value {
        let policy_details = match policy_type {
            "retention" => json!({
                "daysToKeep": 90,
                "maxImagesPerRepository": 50,
                "keepLatestImage": true,
            }),
            "security" => json!({
                "blockHighVulnerabilities": true,
                "requireVulnerabilityScan": true,
                "complianceStandards": ["CIS", "NIST"],
            }),
            _ => json!({
                "allowedUsers": ["project-admins", "project-contributors"],
                "allowAnonymousPull": false,
                "requireAuthentication": true,
            }),
        };
        let settings = if action == "get" {
            policy_details
        } else {
            match policy_settings {
                Some(settings) => Value::Object(settings.clone()),
                None => policy_details,
            }
        };
        json!({
            "repositoryName": repository_name,
            "policyType": policy_type,
            "action": action,
            "status": "success",
            "appliedDate": now(),
            "appliedBy": "user@example.com",
            "policySettings": settings,
        })
    }

    pub fn manage_universal_packages(
        &self,
        package_name: &str,
        action: &str,
        package_path: Option<&str>,
        package_version: Option<&str>,
    ) -> Value {
        let version = package_version.unwrap_or("1.0.0");
        let path = match package_path {
            Some(path) => path.to_string(),
            None => format!("/path/to/{}_{}.zip", package_name, version),
        };
        json!({
            "packageName": package_name,
            "action": action,
            "packageVersion": version,
            "status": "success",
            "timestamp": now(),
            "size": "45MB",
            "packagePath": path,
            "packageUrl": format!(
                "https://feeds.dev.azure.com/organization/_packaging/universal-packages/universal/download/{}/{}",
                package_name, version
            ),
        })
    }

    pub fn create_package_download_report(
        &self,
        feed_id: Option<&str>,
        package_name: Option<&str>,
        time_range: Option<&str>,
        format: Option<&str>,
    ) -> Value {
        json!({
            "feedId": feed_id.unwrap_or("all-feeds"),
            "packageName": package_name.unwrap_or("all-packages"),
            "timeRange": time_range.unwrap_or("30d"),
            "format": format.unwrap_or("csv"),
            "reportDate": now(),
            "totalDownloads": 5782,
            "reportUrl": format!(
                "https://dev.azure.com/organization/project/_apis/packaging/reports/{}-{}.{}",
                feed_id.unwrap_or("all"),
                timestamp_millis(),
                format.unwrap_or("csv")
            ),
            "packages": [
                {
                    "name": "core-library",
                    "version": "3.2.1",
                    "downloads": 2345,
                    "lastDownloaded": days_ago(2),
                },
                {
                    "name": "ui-components",
                    "version": "2.0.0",
                    "downloads": 1897,
                    "lastDownloaded": days_ago(5),
                },
                {
                    "name": "data-access",
                    "version": "1.5.0",
                    "downloads": 1540,
                    "lastDownloaded": days_ago(1),
                },
            ],
            "topConsumers": [
                { "name": "API Project", "downloads": 1250 },
                { "name": "Frontend Project", "downloads": 986 },
                { "name": "Mobile App", "downloads": 754 },
            ],
        })
    }

    pub fn check_package_dependencies(
        &self,
        package_name: &str,
        package_version: Option<&str>,
        include_transitive: Option<bool>,
        check_vulnerabilities: Option<bool>,
    ) -> Value {
        let transitive = include_transitive == Some(true);
        let vulnerable = check_vulnerabilities == Some(true);
        json!({
            "packageName": package_name,
            "packageVersion": package_version.unwrap_or("latest"),
            "directDependencies": [
                { "name": "lodash", "version": "4.17.21", "isVulnerable": false },
                { "name": "axios", "version": "0.21.1", "isVulnerable": true },
            ],
            "transitiveDependencies": if transitive {
                json!([
                    {
                        "name": "follow-redirects",
                        "version": "1.14.1",
                        "isVulnerable": true,
                        "parentPackage": "axios",
                    },
                    {
                        "name": "debug",
                        "version": "4.3.2",
                        "isVulnerable": false,
                        "parentPackage": "axios",
                    },
                ])
            } else {
                json!([])
            },
            "vulnerabilities": if vulnerable {
                json!([
                    {
                        "id": "CVE-2021-3749",
                        "packageName": "axios",
                        "severity": "medium",
                        "description": "Server-Side Request Forgery vulnerability",
                        "fixedVersion": "0.21.2",
                        "references": ["https://nvd.nist.gov/vuln/detail/CVE-2021-3749"],
                    },
                    {
                        "id": "CVE-2021-26500",
                        "packageName": "follow-redirects",
                        "severity": "high",
                        "description": "Memory consumption DoS vulnerability",
                        "fixedVersion": "1.14.2",
                        "references": ["https://nvd.nist.gov/vuln/detail/CVE-2021-26500"],
                    },
                ])
            } else {
                json!([])
            },
            "summary": {
                "totalDependencies": if transitive { 4 } else { 2 },
                "vulnerableDependencies": if vulnerable { 2 } else { 0 },
                "riskLevel": if vulnerable { "medium" } else { "unknown" },
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_list_filters_by_type_but_count_stays_fixed() {
        let service = ArtifactService::new();
        let all = service.list_artifact_feeds(None, None);
        assert_eq!(all["feeds"].as_array().unwrap().len(), 3);

        let npm = service.list_artifact_feeds(Some("npm"), None);
        assert_eq!(npm["feeds"].as_array().unwrap().len(), 1);
        assert_eq!(npm["feeds"][0]["type"], "npm");
        assert_eq!(npm["count"], 3);
    }

    #[test]
    fn package_name_is_the_file_stem() {
        assert_eq!(package_name_from_path("dist/my-lib.1.2.0.tgz"), "my-lib");
        assert_eq!(package_name_from_path("tool.nupkg"), "tool");
        assert_eq!(package_name_from_path(""), "unknown");
        assert_eq!(package_name_from_path("dist/"), "unknown");
    }

    #[test]
    fn version_list_is_capped_by_top() {
        let service = ArtifactService::new();
        let capped = service.get_package_versions("feed-npm-1", "core-library", Some(2));
        assert_eq!(capped["versions"].as_array().unwrap().len(), 2);
        assert_eq!(capped["totalVersions"], 3);

        let full = service.get_package_versions("feed-npm-1", "core-library", None);
        assert_eq!(full["versions"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn scan_type_empties_the_other_finding_list() {
        let service = ArtifactService::new();
        let compliance = service.scan_container_image("registry", "latest", Some("compliance"));
        assert!(compliance["vulnerabilities"].as_array().unwrap().is_empty());
        assert_eq!(compliance["complianceIssues"].as_array().unwrap().len(), 2);

        let vulnerability =
            service.scan_container_image("registry", "latest", Some("vulnerability"));
        assert_eq!(vulnerability["vulnerabilities"].as_array().unwrap().len(), 2);
        assert!(vulnerability["complianceIssues"].as_array().unwrap().is_empty());
    }

    #[test]
    fn get_action_ignores_caller_policy_settings() {
        let service = ArtifactService::new();
        let mut custom = Map::new();
        custom.insert("daysToKeep".into(), json!(7));

        let got = service.manage_container_policies("registry", "retention", "get", Some(&custom));
        assert_eq!(got["policySettings"]["daysToKeep"], 90);

        let set = service.manage_container_policies("registry", "retention", "set", Some(&custom));
        assert_eq!(set["policySettings"]["daysToKeep"], 7);
    }
}
