//! Repository, branch, commit, and pull request tools.

use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters},
    model::CallToolResult,
    tool, tool_router, ErrorData as McpError,
};

use crate::mcp::envelope::ToolResponse;
use crate::mcp::types::*;
use crate::mcp::McpServer;
use crate::services::PullRequestSearch;

#[tool_router(router = git_router)]
impl McpServer {
    #[tool(name = "listRepositories", description = "List all repositories")]
    async fn list_repositories(
        &self,
        params: Parameters<ListRepositoriesRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        Ok(match self
            .git
            .list_repositories(
                req.project_id.as_deref(),
                req.include_hidden,
                req.include_all_urls,
            )
            .await
        {
            Ok(repositories) => {
                let message = format!("Found {} repositories", repositories.len());
                ToolResponse::success(repositories, message).into()
            }
            Err(e) => ToolResponse::failure(e).into(),
        })
    }

    #[tool(name = "getRepository", description = "Get details of a specific repository")]
    async fn get_repository(
        &self,
        params: Parameters<GetRepositoryRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        Ok(match self
            .git
            .get_repository(&req.project_id, &req.repository_id)
            .await
        {
            Ok(repository) => {
                let message = format!(
                    "Repository details for {}",
                    repository["name"].as_str().unwrap_or_default()
                );
                ToolResponse::success(repository, message).into()
            }
            Err(e) => ToolResponse::failure(e).into(),
        })
    }

    #[tool(name = "createRepository", description = "Create a new repository")]
    async fn create_repository(
        &self,
        params: Parameters<CreateRepositoryRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        Ok(match self.git.create_repository(&req.name, &req.project_id).await {
            Ok(repository) => {
                let message = format!(
                    "Created repository: {}",
                    repository["name"].as_str().unwrap_or_default()
                );
                ToolResponse::success(repository, message).into()
            }
            Err(e) => ToolResponse::failure(e).into(),
        })
    }

    #[tool(name = "listBranches", description = "List branches in a repository")]
    async fn list_branches(
        &self,
        params: Parameters<ListBranchesRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        Ok(match self
            .git
            .list_branches(&req.repository_id, req.filter.as_deref(), req.top)
            .await
        {
            Ok(branches) => {
                let message = format!("Found {} branches", branches.len());
                ToolResponse::success(branches, message).into()
            }
            Err(e) => ToolResponse::failure(e).into(),
        })
    }

    #[tool(name = "searchCode", description = "Search for code in repositories")]
    async fn search_code(
        &self,
        params: Parameters<SearchCodeRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        Ok(match self
            .git
            .search_code(
                &req.search_text,
                req.repository_id.as_deref(),
                req.file_extension.as_deref(),
                req.top,
            )
            .await
        {
            Ok(items) => {
                let message = format!("Found {} matching files", items.len());
                ToolResponse::success(items, message).into()
            }
            Err(e) => ToolResponse::failure(e).into(),
        })
    }

    #[tool(name = "browseRepository", description = "Browse the contents of a repository")]
    async fn browse_repository(
        &self,
        params: Parameters<BrowseRepositoryRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        Ok(match self
            .git
            .browse_repository(&req.repository_id, req.path.as_deref())
            .await
        {
            Ok(items) => {
                let message = format!("Found {} items in repository", items.len());
                ToolResponse::success(items, message).into()
            }
            Err(e) => ToolResponse::failure(e).into(),
        })
    }

    #[tool(name = "getFileContent", description = "Get the content of a file")]
    async fn get_file_content(
        &self,
        params: Parameters<GetFileContentRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        Ok(match self
            .git
            .get_file_content(&req.repository_id, &req.path)
            .await
        {
            Ok(file) => {
                let message = format!("Content of file: {}", req.path);
                ToolResponse::success(file, message).into()
            }
            Err(e) => ToolResponse::failure(e).into(),
        })
    }

    #[tool(name = "getCommitHistory", description = "Get commit history for a repository")]
    async fn get_commit_history(
        &self,
        params: Parameters<GetCommitHistoryRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        Ok(match self
            .git
            .get_commit_history(
                &req.repository_id,
                req.item_path.as_deref(),
                req.top,
                req.skip,
            )
            .await
        {
            Ok(commits) => {
                let message = format!("Found {} commits", commits.len());
                ToolResponse::success(commits, message).into()
            }
            Err(e) => ToolResponse::failure(e).into(),
        })
    }

    #[tool(name = "listPullRequests", description = "List pull requests")]
    async fn list_pull_requests(
        &self,
        params: Parameters<ListPullRequestsRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let search = PullRequestSearch {
            status: req.status,
            creator_id: req.creator_id,
            reviewer_id: req.reviewer_id,
            ..Default::default()
        };
        Ok(match self
            .git
            .list_pull_requests(&req.repository_id, &search)
            .await
        {
            Ok(pull_requests) => {
                let message = format!("Found {} pull requests", pull_requests.len());
                ToolResponse::success(pull_requests, message).into()
            }
            Err(e) => ToolResponse::failure(e).into(),
        })
    }

    #[tool(name = "createPullRequest", description = "Create a new pull request")]
    async fn create_pull_request(
        &self,
        params: Parameters<CreatePullRequestRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        Ok(match self
            .git
            .create_pull_request(
                &req.repository_id,
                &req.source_ref_name,
                &req.target_ref_name,
                &req.title,
                req.description.as_deref(),
                req.reviewers.as_deref(),
            )
            .await
        {
            Ok(pull_request) => {
                let message = format!("Created pull request: {}", pull_request["pullRequestId"]);
                ToolResponse::success(pull_request, message).into()
            }
            Err(e) => ToolResponse::failure(e).into(),
        })
    }

    #[tool(name = "getPullRequest", description = "Get details of a specific pull request")]
    async fn get_pull_request(
        &self,
        params: Parameters<GetPullRequestRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        Ok(match self
            .git
            .get_pull_request(&req.repository_id, req.pull_request_id)
            .await
        {
            Ok(pull_request) => {
                let message = format!("Pull request {} details", req.pull_request_id);
                ToolResponse::success(pull_request, message).into()
            }
            Err(e) => ToolResponse::failure(e).into(),
        })
    }

    #[tool(name = "getPullRequestComments", description = "Get comments on a pull request")]
    async fn get_pull_request_comments(
        &self,
        params: Parameters<GetPullRequestCommentsRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        Ok(match self
            .git
            .get_pull_request_comments(&req.repository_id, req.pull_request_id, req.thread_id)
            .await
        {
            Ok(comments) => {
                let message = format!(
                    "Retrieved comments for pull request {}",
                    req.pull_request_id
                );
                ToolResponse::success(comments, message).into()
            }
            Err(e) => ToolResponse::failure(e).into(),
        })
    }

    #[tool(name = "approvePullRequest", description = "Approve a pull request")]
    async fn approve_pull_request(
        &self,
        params: Parameters<ApprovePullRequestRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        Ok(match self
            .git
            .approve_pull_request(&req.repository_id, req.pull_request_id)
            .await
        {
            Ok(result) => {
                let message = format!("Approved pull request {}", req.pull_request_id);
                ToolResponse::success(result, message).into()
            }
            Err(e) => ToolResponse::failure(e).into(),
        })
    }

    #[tool(name = "mergePullRequest", description = "Merge a pull request")]
    async fn merge_pull_request(
        &self,
        params: Parameters<MergePullRequestRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        Ok(match self
            .git
            .merge_pull_request(
                &req.repository_id,
                req.pull_request_id,
                req.merge_strategy.unwrap_or_default(),
            )
            .await
        {
            Ok(result) => {
                let message = format!("Merged pull request {}", req.pull_request_id);
                ToolResponse::success(result, message).into()
            }
            Err(e) => ToolResponse::failure(e).into(),
        })
    }
}

pub(crate) fn router() -> ToolRouter<McpServer> {
    McpServer::git_router()
}
