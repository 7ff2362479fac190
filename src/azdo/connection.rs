//! Shared REST connection for all upstream calls.
//!
//! Every request is authenticated with basic auth (empty username, personal
//! access token as password) and pinned to `api-version=7.1`. One instance is
//! created at startup and shared by every service through an `Arc`.

use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::AzdoConfig;

const API_VERSION: &str = "7.1";

/// Errors surfaced by upstream calls.
#[derive(Debug, Error)]
pub enum AzdoError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: personal access token missing or rejected")]
    Unauthorized,

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("No teams found for project {0}")]
    NoTeams(String),
}

/// Connection handle: organization URL, default project, token, HTTP client.
#[derive(Debug, Clone)]
pub struct AzdoConnection {
    org_url: String,
    project: String,
    pat: String,
    client: Client,
}

impl AzdoConnection {
    pub fn new(config: &AzdoConfig) -> Self {
        Self {
            org_url: config.org_url.trim_end_matches('/').to_string(),
            project: config.project.clone(),
            pat: config.pat.clone(),
            client: Client::new(),
        }
    }

    pub fn org_url(&self) -> &str {
        &self.org_url
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    /// Build a request against an organization-level route (`_apis/{path}`).
    pub fn org_request(&self, method: Method, path: &str) -> RequestBuilder {
        self.request(method, format!("{}/_apis/{}", self.org_url, path))
    }

    /// Build a request against a project-scoped route
    /// (`{project}/_apis/{path}`) using the configured default project.
    pub fn project_request(&self, method: Method, path: &str) -> RequestBuilder {
        let project = self.project.clone();
        self.scoped_request(method, &project, path)
    }

    /// Build a request scoped to an explicit project
    /// (`{project}/_apis/{path}`). Git routes accept a project override and
    /// fall back to the configured one.
    pub fn scoped_request(&self, method: Method, project: &str, path: &str) -> RequestBuilder {
        self.request(
            method,
            format!("{}/{}/_apis/{}", self.org_url, project, path),
        )
    }

    /// Build a request against a team-scoped route
    /// (`{project}/{team}/_apis/{path}`).
    pub fn team_request(&self, method: Method, team: &str, path: &str) -> RequestBuilder {
        self.request(
            method,
            format!("{}/{}/{}/_apis/{}", self.org_url, self.project, team, path),
        )
    }

    /// Build a project-scoped request pinned to a non-default api-version.
    /// Work item comments are only served from a preview version.
    pub fn project_request_with_version(
        &self,
        method: Method,
        path: &str,
        version: &str,
    ) -> RequestBuilder {
        self.client
            .request(
                method,
                format!("{}/{}/_apis/{}", self.org_url, self.project, path),
            )
            .basic_auth("", Some(&self.pat))
            .query(&[("api-version", version)])
    }

    fn request(&self, method: Method, url: String) -> RequestBuilder {
        self.client
            .request(method, &url)
            .basic_auth("", Some(&self.pat))
            .query(&[("api-version", API_VERSION)])
    }

    /// Handle a response, converting HTTP errors to AzdoError.
    pub async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, AzdoError> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let message = error_message(response).await;
            match status {
                StatusCode::NOT_FOUND => Err(AzdoError::NotFound(message)),
                StatusCode::BAD_REQUEST => Err(AzdoError::BadRequest(message)),
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(AzdoError::Unauthorized),
                _ => Err(AzdoError::Upstream(format!("{}: {}", status, message))),
            }
        }
    }
}

/// Error bodies carry a `message` field; fall back to the raw body text.
async fn error_message(response: reqwest::Response) -> String {
    let body = response.text().await.unwrap_or_default();
    match serde_json::from_str::<serde_json::Value>(&body) {
        Ok(v) => v
            .get("message")
            .and_then(|m| m.as_str())
            .map(str::to_string)
            .unwrap_or(body),
        Err(_) => body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> AzdoConfig {
        AzdoConfig {
            org_url: "https://dev.azure.com/contoso/".to_string(),
            project: "Fabrikam".to_string(),
            pat: "secret".to_string(),
        }
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let conn = AzdoConnection::new(&test_config());
        assert_eq!(conn.org_url(), "https://dev.azure.com/contoso");
    }

    #[tokio::test]
    async fn routes_are_scoped_correctly() {
        let conn = AzdoConnection::new(&test_config());

        let req = conn.org_request(Method::GET, "projects").build().unwrap();
        assert_eq!(req.url().path(), "/contoso/_apis/projects");
        assert_eq!(req.url().query(), Some("api-version=7.1"));

        let req = conn
            .project_request(Method::GET, "wit/workitems/7")
            .build()
            .unwrap();
        assert_eq!(req.url().path(), "/contoso/Fabrikam/_apis/wit/workitems/7");

        let req = conn
            .team_request(Method::GET, "Fabrikam Team", "work/boards")
            .build()
            .unwrap();
        assert_eq!(
            req.url().path(),
            "/contoso/Fabrikam/Fabrikam%20Team/_apis/work/boards"
        );

        let req = conn
            .scoped_request(Method::GET, "Other", "git/repositories")
            .build()
            .unwrap();
        assert_eq!(req.url().path(), "/contoso/Other/_apis/git/repositories");

        let req = conn
            .project_request_with_version(Method::GET, "wit/workItems/7/comments", "7.1-preview.3")
            .build()
            .unwrap();
        assert_eq!(req.url().query(), Some("api-version=7.1-preview.3"));
    }
}
