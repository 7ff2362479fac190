use rmcp::schemars::JsonSchema;
use serde::Deserialize;

use crate::services::{MergeStrategy, PullRequestStatus};

/// Pinpoints a commit, branch, or tag. Accepted for wire compatibility;
/// lookups always read the default branch.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VersionDescriptor {
    #[schemars(description = "Version (branch, tag, or commit)")]
    pub version: Option<String>,
    #[schemars(description = "Version options")]
    pub version_options: Option<String>,
    #[schemars(description = "Version type")]
    pub version_type: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListRepositoriesRequest {
    #[schemars(description = "Filter by project")]
    pub project_id: Option<String>,
    #[schemars(description = "Include hidden repositories")]
    pub include_hidden: Option<bool>,
    #[schemars(description = "Include all URLs")]
    pub include_all_urls: Option<bool>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetRepositoryRequest {
    #[schemars(description = "ID of the project")]
    pub project_id: String,
    #[schemars(description = "ID of the repository")]
    pub repository_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRepositoryRequest {
    #[schemars(description = "Name of the repository")]
    pub name: String,
    #[schemars(description = "ID of the project")]
    pub project_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListBranchesRequest {
    #[schemars(description = "ID of the repository")]
    pub repository_id: String,
    #[schemars(description = "Filter branches by name")]
    pub filter: Option<String>,
    #[schemars(description = "Maximum number of branches to return")]
    pub top: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchCodeRequest {
    #[schemars(description = "Text to search for")]
    pub search_text: String,
    #[schemars(description = "ID of the project")]
    pub project_id: Option<String>,
    #[schemars(description = "ID of the repository")]
    pub repository_id: Option<String>,
    #[schemars(description = "File extension to filter by")]
    pub file_extension: Option<String>,
    #[schemars(description = "Maximum number of results to return")]
    pub top: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BrowseRepositoryRequest {
    #[schemars(description = "ID of the repository")]
    pub repository_id: String,
    #[schemars(description = "Path within the repository")]
    pub path: Option<String>,
    #[schemars(description = "Version descriptor")]
    pub version_descriptor: Option<VersionDescriptor>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetFileContentRequest {
    #[schemars(description = "ID of the repository")]
    pub repository_id: String,
    #[schemars(description = "Path to the file")]
    pub path: String,
    #[schemars(description = "Version descriptor")]
    pub version_descriptor: Option<VersionDescriptor>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetCommitHistoryRequest {
    #[schemars(description = "ID of the repository")]
    pub repository_id: String,
    #[schemars(description = "Path to filter commits by")]
    pub item_path: Option<String>,
    #[schemars(description = "Maximum number of commits to return")]
    pub top: Option<u32>,
    #[schemars(description = "Number of commits to skip")]
    pub skip: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListPullRequestsRequest {
    #[schemars(description = "ID of the repository")]
    pub repository_id: String,
    #[schemars(description = "Filter by status")]
    pub status: Option<PullRequestStatus>,
    #[schemars(description = "Filter by creator")]
    pub creator_id: Option<String>,
    #[schemars(description = "Filter by reviewer")]
    pub reviewer_id: Option<String>,
    #[schemars(description = "Maximum number of pull requests to return")]
    pub top: Option<u32>,
    #[schemars(description = "Number of pull requests to skip")]
    pub skip: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePullRequestRequest {
    #[schemars(description = "ID of the repository")]
    pub repository_id: String,
    #[schemars(description = "Source branch")]
    pub source_ref_name: String,
    #[schemars(description = "Target branch")]
    pub target_ref_name: String,
    #[schemars(description = "Title of the pull request")]
    pub title: String,
    #[schemars(description = "Description of the pull request")]
    pub description: Option<String>,
    #[schemars(description = "List of reviewers")]
    pub reviewers: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetPullRequestRequest {
    #[schemars(description = "ID of the repository")]
    pub repository_id: String,
    #[schemars(description = "ID of the pull request")]
    pub pull_request_id: i64,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetPullRequestCommentsRequest {
    #[schemars(description = "ID of the repository")]
    pub repository_id: String,
    #[schemars(description = "ID of the pull request")]
    pub pull_request_id: i64,
    #[schemars(description = "ID of a specific thread")]
    pub thread_id: Option<i64>,
    #[schemars(description = "Maximum number of comments to return")]
    pub top: Option<u32>,
    #[schemars(description = "Number of comments to skip")]
    pub skip: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApprovePullRequestRequest {
    #[schemars(description = "ID of the repository")]
    pub repository_id: String,
    #[schemars(description = "ID of the pull request")]
    pub pull_request_id: i64,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MergePullRequestRequest {
    #[schemars(description = "ID of the repository")]
    pub repository_id: String,
    #[schemars(description = "ID of the pull request")]
    pub pull_request_id: i64,
    #[schemars(description = "Merge strategy")]
    pub merge_strategy: Option<MergeStrategy>,
    #[schemars(description = "Comment for the merge commit")]
    pub comment: Option<String>,
}
