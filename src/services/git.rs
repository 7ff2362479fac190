//! Repository, branch, commit, and pull request operations on git routes.
//!
//! Git routes accept an optional project override; everything else is scoped
//! to the configured project. Status and merge strategy values cross the wire
//! as their numeric codes.

use std::sync::Arc;

use reqwest::header::ACCEPT;
use reqwest::Method;
use rmcp::schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::azdo::{AzdoConnection, AzdoError};
use crate::models::{GitBranchStats, GitCommitRef, GitItem, ListResponse};

/// Reviewer vote that approves a pull request.
const APPROVE_VOTE: i32 = 10;

/// Placeholder returned when a file has no textual content to show.
const CONTENT_UNAVAILABLE: &str = "[Content not available in this format]";

/// How a completed pull request is merged, sent as its numeric wire code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum MergeStrategy {
    #[default]
    NoFastForward,
    Rebase,
    RebaseMerge,
    Squash,
}

impl MergeStrategy {
    pub fn code(&self) -> u8 {
        match self {
            MergeStrategy::NoFastForward => 1,
            MergeStrategy::Rebase => 2,
            MergeStrategy::RebaseMerge => 3,
            MergeStrategy::Squash => 4,
        }
    }
}

/// Pull request status filter. `All` omits the status criterion entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum PullRequestStatus {
    Abandoned,
    Active,
    All,
    Completed,
    NotSet,
}

impl PullRequestStatus {
    pub fn code(&self) -> Option<u8> {
        match self {
            PullRequestStatus::NotSet => Some(0),
            PullRequestStatus::Active => Some(1),
            PullRequestStatus::Abandoned => Some(2),
            PullRequestStatus::Completed => Some(3),
            PullRequestStatus::All => None,
        }
    }
}

/// Criteria for listing pull requests. Unset fields are left off the query.
#[derive(Debug, Clone, Default)]
pub struct PullRequestSearch {
    pub status: Option<PullRequestStatus>,
    pub creator_id: Option<String>,
    pub reviewer_id: Option<String>,
    pub source_ref_name: Option<String>,
    pub target_ref_name: Option<String>,
}

/// Service for the git tool group.
#[derive(Debug, Clone)]
pub struct GitService {
    connection: Arc<AzdoConnection>,
}

impl GitService {
    pub fn new(connection: Arc<AzdoConnection>) -> Self {
        Self { connection }
    }

    /// Repositories in a project, defaulting to the configured one.
    pub async fn list_repositories(
        &self,
        project_id: Option<&str>,
        include_hidden: Option<bool>,
        include_all_urls: Option<bool>,
    ) -> Result<Vec<Value>, AzdoError> {
        let project = project_id.unwrap_or_else(|| self.connection.project());
        let mut request = self
            .connection
            .scoped_request(Method::GET, project, "git/repositories");
        if let Some(hidden) = include_hidden {
            request = request.query(&[("includeHidden", hidden)]);
        }
        if let Some(all_urls) = include_all_urls {
            request = request.query(&[("includeAllUrls", all_urls)]);
        }
        let response = request.send().await?;
        let list: ListResponse<Value> = self.connection.handle_response(response).await?;
        Ok(list.value)
    }

    /// One repository by ID or name.
    pub async fn get_repository(
        &self,
        project_id: &str,
        repository_id: &str,
    ) -> Result<Value, AzdoError> {
        let response = self
            .connection
            .scoped_request(
                Method::GET,
                project_id,
                &format!("git/repositories/{}", repository_id),
            )
            .send()
            .await?;
        self.connection.handle_response(response).await
    }

    /// Create an empty repository in a project.
    pub async fn create_repository(
        &self,
        name: &str,
        project_id: &str,
    ) -> Result<Value, AzdoError> {
        let response = self
            .connection
            .scoped_request(Method::POST, project_id, "git/repositories")
            .json(&json!({
                "name": name,
                "project": { "id": project_id },
            }))
            .send()
            .await?;
        self.connection.handle_response(response).await
    }

    /// Branches of a repository with their stats, optionally narrowed to
    /// names containing `filter` and capped at `top`.
    pub async fn list_branches(
        &self,
        repository_id: &str,
        filter: Option<&str>,
        top: Option<u32>,
    ) -> Result<Vec<GitBranchStats>, AzdoError> {
        let response = self
            .connection
            .project_request(
                Method::GET,
                &format!("git/repositories/{}/stats/branches", repository_id),
            )
            .send()
            .await?;
        let list: ListResponse<GitBranchStats> = self.connection.handle_response(response).await?;

        let mut branches = match filter {
            Some(filter) => list
                .value
                .into_iter()
                .filter(|branch| branch.name.contains(filter))
                .collect(),
            None => list.value,
        };
        if let Some(top) = top.filter(|n| *n > 0) {
            branches.truncate(top as usize);
        }
        Ok(branches)
    }

    /// Path-based code search: walk the full tree of one repository and keep
    /// items whose path contains the search text, case-insensitively.
    pub async fn search_code(
        &self,
        search_text: &str,
        repository_id: Option<&str>,
        file_extension: Option<&str>,
        top: Option<u32>,
    ) -> Result<Vec<GitItem>, AzdoError> {
        let repository = repository_id.unwrap_or("");
        let response = self
            .connection
            .project_request(
                Method::GET,
                &format!("git/repositories/{}/items", repository),
            )
            .query(&[
                ("recursionLevel", "full"),
                ("includeContentMetadata", "true"),
            ])
            .send()
            .await?;
        let items: ListResponse<GitItem> = self.connection.handle_response(response).await?;

        let needle = search_text.to_lowercase();
        let mut matches: Vec<GitItem> = items
            .value
            .into_iter()
            .filter(|item| match &item.path {
                Some(path) => path.to_lowercase().contains(&needle),
                None => false,
            })
            .collect();
        if let Some(extension) = file_extension {
            matches.retain(|item| match &item.path {
                Some(path) => path.ends_with(extension),
                None => false,
            });
        }
        if let Some(top) = top.filter(|n| *n > 0) {
            matches.truncate(top as usize);
        }
        Ok(matches)
    }

    /// Direct children of a path in a repository tree.
    pub async fn browse_repository(
        &self,
        repository_id: &str,
        path: Option<&str>,
    ) -> Result<Vec<GitItem>, AzdoError> {
        let mut request = self
            .connection
            .project_request(
                Method::GET,
                &format!("git/repositories/{}/items", repository_id),
            )
            .query(&[
                ("recursionLevel", "oneLevel"),
                ("includeContentMetadata", "true"),
            ]);
        if let Some(path) = path {
            request = request.query(&[("scopePath", path)]);
        }
        let response = request.send().await?;
        let items: ListResponse<GitItem> = self.connection.handle_response(response).await?;
        Ok(items.value)
    }

    /// Text content of one file, or a placeholder when the item carries no
    /// textual content.
    pub async fn get_file_content(
        &self,
        repository_id: &str,
        path: &str,
    ) -> Result<Value, AzdoError> {
        let response = self
            .connection
            .project_request(
                Method::GET,
                &format!("git/repositories/{}/items", repository_id),
            )
            .query(&[("path", path), ("includeContent", "true")])
            .header(ACCEPT, "application/json")
            .send()
            .await?;
        let item: GitItem = self.connection.handle_response(response).await?;
        let content = item
            .content
            .unwrap_or_else(|| CONTENT_UNAVAILABLE.to_string());
        Ok(json!({ "content": content }))
    }

    /// Commit history of a repository. The path filter matches against the
    /// commit message text, and paging happens after filtering.
    pub async fn get_commit_history(
        &self,
        repository_id: &str,
        item_path: Option<&str>,
        top: Option<u32>,
        skip: Option<u32>,
    ) -> Result<Vec<GitCommitRef>, AzdoError> {
        let mut commits = self.fetch_commits(repository_id).await?;
        if let Some(needle) = item_path {
            commits.retain(|commit| match &commit.comment {
                Some(comment) => comment.contains(needle),
                None => false,
            });
        }
        if let Some(skip) = skip.filter(|n| *n > 0) {
            commits = commits.into_iter().skip(skip as usize).collect();
        }
        if let Some(top) = top.filter(|n| *n > 0) {
            commits.truncate(top as usize);
        }
        Ok(commits)
    }

    /// Commit history without paging, with the same message-text filter.
    pub async fn get_commits(
        &self,
        repository_id: &str,
        path: Option<&str>,
    ) -> Result<Vec<GitCommitRef>, AzdoError> {
        let mut commits = self.fetch_commits(repository_id).await?;
        if let Some(needle) = path {
            commits.retain(|commit| match &commit.comment {
                Some(comment) => comment.contains(needle),
                None => false,
            });
        }
        Ok(commits)
    }

    /// Pull requests of a repository matching the search criteria.
    pub async fn list_pull_requests(
        &self,
        repository_id: &str,
        search: &PullRequestSearch,
    ) -> Result<Vec<Value>, AzdoError> {
        let mut request = self.connection.project_request(
            Method::GET,
            &format!("git/repositories/{}/pullrequests", repository_id),
        );
        if let Some(code) = search.status.and_then(|status| status.code()) {
            request = request.query(&[("searchCriteria.status", code)]);
        }
        if let Some(creator) = &search.creator_id {
            request = request.query(&[("searchCriteria.creatorId", creator)]);
        }
        if let Some(reviewer) = &search.reviewer_id {
            request = request.query(&[("searchCriteria.reviewerId", reviewer)]);
        }
        if let Some(source) = &search.source_ref_name {
            request = request.query(&[("searchCriteria.sourceRefName", source)]);
        }
        if let Some(target) = &search.target_ref_name {
            request = request.query(&[("searchCriteria.targetRefName", target)]);
        }
        let response = request.send().await?;
        let list: ListResponse<Value> = self.connection.handle_response(response).await?;
        Ok(list.value)
    }

    /// Open a pull request.
    pub async fn create_pull_request(
        &self,
        repository_id: &str,
        source_ref_name: &str,
        target_ref_name: &str,
        title: &str,
        description: Option<&str>,
        reviewers: Option<&[String]>,
    ) -> Result<Value, AzdoError> {
        let mut body = json!({
            "sourceRefName": source_ref_name,
            "targetRefName": target_ref_name,
            "title": title,
        });
        if let Some(description) = description {
            body["description"] = json!(description);
        }
        if let Some(reviewers) = reviewers {
            body["reviewers"] = reviewers.iter().map(|id| json!({ "id": id })).collect();
        }
        let response = self
            .connection
            .project_request(
                Method::POST,
                &format!("git/repositories/{}/pullrequests", repository_id),
            )
            .json(&body)
            .send()
            .await?;
        self.connection.handle_response(response).await
    }

    /// One pull request by ID.
    pub async fn get_pull_request(
        &self,
        repository_id: &str,
        pull_request_id: i64,
    ) -> Result<Value, AzdoError> {
        let response = self
            .connection
            .project_request(
                Method::GET,
                &format!(
                    "git/repositories/{}/pullrequests/{}",
                    repository_id, pull_request_id
                ),
            )
            .send()
            .await?;
        self.connection.handle_response(response).await
    }

    /// Comment threads on a pull request, or a single thread when an ID is
    /// given.
    pub async fn get_pull_request_comments(
        &self,
        repository_id: &str,
        pull_request_id: i64,
        thread_id: Option<i64>,
    ) -> Result<Value, AzdoError> {
        match thread_id {
            Some(thread_id) => {
                let response = self
                    .connection
                    .project_request(
                        Method::GET,
                        &format!(
                            "git/repositories/{}/pullrequests/{}/threads/{}",
                            repository_id, pull_request_id, thread_id
                        ),
                    )
                    .send()
                    .await?;
                self.connection.handle_response(response).await
            }
            None => {
                let response = self
                    .connection
                    .project_request(
                        Method::GET,
                        &format!(
                            "git/repositories/{}/pullrequests/{}/threads",
                            repository_id, pull_request_id
                        ),
                    )
                    .send()
                    .await?;
                let list: ListResponse<Value> = self.connection.handle_response(response).await?;
                Ok(Value::Array(list.value))
            }
        }
    }

    /// Cast an approving vote as the authenticated reviewer.
    pub async fn approve_pull_request(
        &self,
        repository_id: &str,
        pull_request_id: i64,
    ) -> Result<Value, AzdoError> {
        let response = self
            .connection
            .project_request(
                Method::PUT,
                &format!(
                    "git/repositories/{}/pullrequests/{}/reviewers/me",
                    repository_id, pull_request_id
                ),
            )
            .json(&json!({ "vote": APPROVE_VOTE }))
            .send()
            .await?;
        self.connection.handle_response(response).await
    }

    /// Complete a pull request with the chosen merge strategy.
    pub async fn merge_pull_request(
        &self,
        repository_id: &str,
        pull_request_id: i64,
        strategy: MergeStrategy,
    ) -> Result<Value, AzdoError> {
        let body = json!({
            "status": PullRequestStatus::Completed.code(),
            "completionOptions": { "mergeStrategy": strategy.code() },
        });
        self.update_pull_request(repository_id, pull_request_id, &body)
            .await
    }

    /// Complete a pull request after confirming it exists, optionally
    /// deleting the source branch.
    pub async fn complete_pull_request(
        &self,
        repository_id: &str,
        pull_request_id: i64,
        strategy: MergeStrategy,
        delete_source_branch: Option<bool>,
    ) -> Result<Value, AzdoError> {
        let response = self
            .connection
            .org_request(
                Method::GET,
                &format!("git/pullrequests/{}", pull_request_id),
            )
            .send()
            .await?;
        let _: Value = self.connection.handle_response(response).await?;

        let mut completion_options = json!({ "mergeStrategy": strategy.code() });
        if let Some(delete) = delete_source_branch {
            completion_options["deleteSourceBranch"] = json!(delete);
        }
        let body = json!({
            "status": PullRequestStatus::Completed.code(),
            "completionOptions": completion_options,
        });
        self.update_pull_request(repository_id, pull_request_id, &body)
            .await
    }

    async fn fetch_commits(&self, repository_id: &str) -> Result<Vec<GitCommitRef>, AzdoError> {
        let response = self
            .connection
            .project_request(
                Method::GET,
                &format!("git/repositories/{}/commits", repository_id),
            )
            .send()
            .await?;
        let list: ListResponse<GitCommitRef> = self.connection.handle_response(response).await?;
        Ok(list.value)
    }

    async fn update_pull_request(
        &self,
        repository_id: &str,
        pull_request_id: i64,
        body: &Value,
    ) -> Result<Value, AzdoError> {
        let response = self
            .connection
            .project_request(
                Method::PATCH,
                &format!(
                    "git/repositories/{}/pullrequests/{}",
                    repository_id, pull_request_id
                ),
            )
            .json(body)
            .send()
            .await?;
        self.connection.handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_strategies_cover_all_wire_codes() {
        assert_eq!(MergeStrategy::NoFastForward.code(), 1);
        assert_eq!(MergeStrategy::Rebase.code(), 2);
        assert_eq!(MergeStrategy::RebaseMerge.code(), 3);
        assert_eq!(MergeStrategy::Squash.code(), 4);
        assert_eq!(MergeStrategy::default(), MergeStrategy::NoFastForward);
    }

    #[test]
    fn merge_strategy_parses_from_camel_case() {
        let strategy: MergeStrategy = serde_json::from_str("\"rebaseMerge\"").unwrap();
        assert_eq!(strategy, MergeStrategy::RebaseMerge);
        assert!(serde_json::from_str::<MergeStrategy>("\"fast-forward\"").is_err());
    }

    #[test]
    fn status_all_omits_the_criterion() {
        assert_eq!(PullRequestStatus::All.code(), None);
        assert_eq!(PullRequestStatus::NotSet.code(), Some(0));
        assert_eq!(PullRequestStatus::Active.code(), Some(1));
        assert_eq!(PullRequestStatus::Abandoned.code(), Some(2));
        assert_eq!(PullRequestStatus::Completed.code(), Some(3));
    }

    #[test]
    fn status_parses_from_camel_case() {
        let status: PullRequestStatus = serde_json::from_str("\"notSet\"").unwrap();
        assert_eq!(status, PullRequestStatus::NotSet);
    }
}
