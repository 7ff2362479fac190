//! Package feed and container registry tools.

use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters},
    model::CallToolResult,
    tool, tool_router, ErrorData as McpError,
};
use serde_json::Value;

use crate::mcp::envelope::ToolResponse;
use crate::mcp::types::*;
use crate::mcp::McpServer;

fn list_len(result: &Value, key: &str) -> usize {
    result
        .get(key)
        .and_then(Value::as_array)
        .map(|items| items.len())
        .unwrap_or(0)
}

#[tool_router(router = artifacts_router)]
impl McpServer {
    #[tool(
        name = "listArtifactFeeds",
        description = "List artifact feeds in the organization"
    )]
    async fn list_artifact_feeds(
        &self,
        params: Parameters<ListArtifactFeedsRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let result = self
            .artifacts
            .list_artifact_feeds(req.feed_type.as_deref(), req.include_deleted);
        let message = format!("Found {} artifact feeds", list_len(&result, "feeds"));
        Ok(ToolResponse::success(result, message).into())
    }

    #[tool(name = "getPackageVersions", description = "Get versions of a package in a feed")]
    async fn get_package_versions(
        &self,
        params: Parameters<GetPackageVersionsRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let result = self
            .artifacts
            .get_package_versions(&req.feed_id, &req.package_name, req.top);
        let message = format!(
            "Found {} versions for package {}",
            list_len(&result, "versions"),
            req.package_name
        );
        Ok(ToolResponse::success(result, message).into())
    }

    #[tool(name = "publishPackage", description = "Publish a package to a feed")]
    async fn publish_package(
        &self,
        params: Parameters<PublishPackageRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let result = self.artifacts.publish_package(
            &req.feed_id,
            &req.package_type,
            &req.package_path,
            req.package_version.as_deref(),
        );
        let message = format!(
            "Published package {} version {} to feed {}",
            result["packageName"].as_str().unwrap_or_default(),
            result["packageVersion"].as_str().unwrap_or_default(),
            req.feed_id
        );
        Ok(ToolResponse::success(result, message).into())
    }

    #[tool(name = "promotePackage", description = "Promote a package version between views")]
    async fn promote_package(
        &self,
        params: Parameters<PromotePackageRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let result = self.artifacts.promote_package(
            &req.feed_id,
            &req.package_name,
            &req.package_version,
            &req.source_view,
            &req.target_view,
        );
        let message = format!(
            "Promoted package {} version {} from {} to {}",
            req.package_name, req.package_version, req.source_view, req.target_view
        );
        Ok(ToolResponse::success(result, message).into())
    }

    #[tool(name = "deletePackageVersion", description = "Delete a version of a package")]
    async fn delete_package_version(
        &self,
        params: Parameters<DeletePackageVersionRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let result = self.artifacts.delete_package_version(
            &req.feed_id,
            &req.package_name,
            &req.package_version,
            req.permanent,
        );
        let permanently = if req.permanent == Some(true) {
            " permanently"
        } else {
            ""
        };
        let message = format!(
            "Deleted package {} version {}{}",
            req.package_name, req.package_version, permanently
        );
        Ok(ToolResponse::success(result, message).into())
    }

    #[tool(name = "listContainerImages", description = "List container images in a repository")]
    async fn list_container_images(
        &self,
        params: Parameters<ListContainerImagesRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let result = self.artifacts.list_container_images(
            req.repository_name.as_deref(),
            req.include_manifests,
            req.include_deleted,
        );
        let message = format!(
            "Found {} container images in repository {}",
            list_len(&result, "images"),
            req.repository_name.as_deref().unwrap_or("all")
        );
        Ok(ToolResponse::success(result, message).into())
    }

    #[tool(name = "getContainerImageTags", description = "Get tags for a container image")]
    async fn get_container_image_tags(
        &self,
        params: Parameters<GetContainerImageTagsRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let result =
            self.artifacts
                .get_container_image_tags(&req.repository_name, &req.image_name, req.top);
        let message = format!(
            "Found {} tags for image {}",
            list_len(&result, "tags"),
            req.image_name
        );
        Ok(ToolResponse::success(result, message).into())
    }

    #[tool(
        name = "scanContainerImage",
        description = "Scan a container image for vulnerabilities and compliance issues"
    )]
    async fn scan_container_image(
        &self,
        params: Parameters<ScanContainerImageRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let result = self.artifacts.scan_container_image(
            &req.repository_name,
            &req.image_tag,
            req.scan_type.as_deref(),
        );
        let message = format!(
            "Completed {} scan of image {} with overall risk {}",
            req.scan_type.as_deref().unwrap_or("both"),
            req.image_tag,
            result["overallRisk"].as_str().unwrap_or_default()
        );
        Ok(ToolResponse::success(result, message).into())
    }

    #[tool(
        name = "manageContainerPolicies",
        description = "Manage policies for container repositories"
    )]
    async fn manage_container_policies(
        &self,
        params: Parameters<ManageContainerPoliciesRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let result = self.artifacts.manage_container_policies(
            &req.repository_name,
            &req.policy_type,
            &req.action,
            req.policy_settings.as_ref(),
        );
        let verb = match req.action.as_str() {
            "get" => "Retrieved",
            "set" => "Set",
            _ => "Deleted",
        };
        let message = format!(
            "{} {} policy for repository {}",
            verb, req.policy_type, req.repository_name
        );
        Ok(ToolResponse::success(result, message).into())
    }

    #[tool(name = "manageUniversalPackages", description = "Manage universal packages")]
    async fn manage_universal_packages(
        &self,
        params: Parameters<ManageUniversalPackagesRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let result = self.artifacts.manage_universal_packages(
            &req.package_name,
            &req.action,
            req.package_path.as_deref(),
            req.package_version.as_deref(),
        );
        let verb = match req.action.as_str() {
            "download" => "Downloaded",
            "upload" => "Uploaded",
            _ => "Deleted",
        };
        let version = req
            .package_version
            .as_deref()
            .map(|v| format!(" version {}", v))
            .unwrap_or_default();
        let message = format!("{} universal package {}{}", verb, req.package_name, version);
        Ok(ToolResponse::success(result, message).into())
    }

    #[tool(
        name = "createPackageDownloadReport",
        description = "Create reports on package downloads"
    )]
    async fn create_package_download_report(
        &self,
        params: Parameters<CreatePackageDownloadReportRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let result = self.artifacts.create_package_download_report(
            req.feed_id.as_deref(),
            req.package_name.as_deref(),
            req.time_range.as_deref(),
            req.format.as_deref(),
        );
        let message = format!(
            "Created download report for {} in {}",
            req.package_name.as_deref().unwrap_or("all packages"),
            req.feed_id.as_deref().unwrap_or("all feeds")
        );
        Ok(ToolResponse::success(result, message).into())
    }

    #[tool(
        name = "checkPackageDependencies",
        description = "Check package dependencies and vulnerabilities"
    )]
    async fn check_package_dependencies(
        &self,
        params: Parameters<CheckPackageDependenciesRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let result = self.artifacts.check_package_dependencies(
            &req.package_name,
            req.package_version.as_deref(),
            req.include_transitive,
            req.check_vulnerabilities,
        );
        let version = req
            .package_version
            .as_deref()
            .map(|v| format!(" version {}", v))
            .unwrap_or_default();
        let message = format!(
            "Checked dependencies for {}{}: {} total, {} vulnerable",
            req.package_name,
            version,
            result["summary"]["totalDependencies"],
            result["summary"]["vulnerableDependencies"]
        );
        Ok(ToolResponse::success(result, message).into())
    }
}

pub(crate) fn router() -> ToolRouter<McpServer> {
    McpServer::artifacts_router()
}
