use rmcp::schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListArtifactFeedsRequest {
    #[schemars(description = "Type of feeds to list")]
    pub feed_type: Option<String>,
    #[schemars(description = "Include deleted feeds")]
    pub include_deleted: Option<bool>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetPackageVersionsRequest {
    #[schemars(description = "ID of the feed")]
    pub feed_id: String,
    #[schemars(description = "Name of the package")]
    pub package_name: String,
    #[schemars(description = "Maximum number of versions to return")]
    pub top: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublishPackageRequest {
    #[schemars(description = "ID of the feed to publish to")]
    pub feed_id: String,
    #[schemars(description = "Type of package")]
    pub package_type: String,
    #[schemars(description = "Path to the package file")]
    pub package_path: String,
    #[schemars(description = "Version of the package")]
    pub package_version: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PromotePackageRequest {
    #[schemars(description = "ID of the feed")]
    pub feed_id: String,
    #[schemars(description = "Name of the package")]
    pub package_name: String,
    #[schemars(description = "Version of the package")]
    pub package_version: String,
    #[schemars(description = "Source view (e.g., 'prerelease')")]
    pub source_view: String,
    #[schemars(description = "Target view (e.g., 'release')")]
    pub target_view: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeletePackageVersionRequest {
    #[schemars(description = "ID of the feed")]
    pub feed_id: String,
    #[schemars(description = "Name of the package")]
    pub package_name: String,
    #[schemars(description = "Version of the package to delete")]
    pub package_version: String,
    #[schemars(description = "Permanently delete the package version")]
    pub permanent: Option<bool>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListContainerImagesRequest {
    #[schemars(description = "Name of the container repository")]
    pub repository_name: Option<String>,
    #[schemars(description = "Include image manifests")]
    pub include_manifests: Option<bool>,
    #[schemars(description = "Include deleted images")]
    pub include_deleted: Option<bool>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetContainerImageTagsRequest {
    #[schemars(description = "Name of the container repository")]
    pub repository_name: String,
    #[schemars(description = "Name of the container image")]
    pub image_name: String,
    #[schemars(description = "Maximum number of tags to return")]
    pub top: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanContainerImageRequest {
    #[schemars(description = "Name of the container repository")]
    pub repository_name: String,
    #[schemars(description = "Tag of the container image to scan")]
    pub image_tag: String,
    #[schemars(description = "Type of scan to perform")]
    pub scan_type: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ManageContainerPoliciesRequest {
    #[schemars(description = "Name of the container repository")]
    pub repository_name: String,
    #[schemars(description = "Type of policy to manage")]
    pub policy_type: String,
    #[schemars(description = "Action to perform on the policy")]
    pub action: String,
    #[schemars(description = "Settings for the policy when setting")]
    pub policy_settings: Option<Map<String, Value>>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ManageUniversalPackagesRequest {
    #[schemars(description = "Name of the universal package")]
    pub package_name: String,
    #[schemars(description = "Action to perform")]
    pub action: String,
    #[schemars(description = "Path for package upload or download")]
    pub package_path: Option<String>,
    #[schemars(description = "Version of the package")]
    pub package_version: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePackageDownloadReportRequest {
    #[schemars(description = "ID of the feed")]
    pub feed_id: Option<String>,
    #[schemars(description = "Name of the package")]
    pub package_name: Option<String>,
    #[schemars(description = "Time range for the report (e.g., '30d')")]
    pub time_range: Option<String>,
    #[schemars(description = "Format of the report")]
    pub format: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckPackageDependenciesRequest {
    #[schemars(description = "Name of the package to check")]
    pub package_name: String,
    #[schemars(description = "Version of the package")]
    pub package_version: Option<String>,
    #[schemars(description = "Include transitive dependencies")]
    pub include_transitive: Option<bool>,
    #[schemars(description = "Check for known vulnerabilities")]
    pub check_vulnerabilities: Option<bool>,
}
