//! Pass-through tests against a local stand-in for the Azure DevOps REST API.
//!
//! The stand-in records every request it receives so tests can assert on the
//! method, route, query, and body exactly as they cross the wire, and answers
//! with whatever payload the test supplies.

use std::sync::{Arc, Mutex};

use axum::body::to_bytes;
use axum::extract::{Request, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::{Json, Router};
use serde_json::{json, Map, Value};

use azdo_mcp::azdo::{AzdoConnection, AzdoError};
use azdo_mcp::config::AzdoConfig;
use azdo_mcp::services::{
    BoardsService, GitService, MergeStrategy, NewWorkItem, ProjectService, PullRequestSearch,
    PullRequestStatus, WorkItemService,
};

#[derive(Debug, Clone)]
struct CapturedRequest {
    method: String,
    path: String,
    query: String,
    content_type: Option<String>,
    body: Value,
}

type Responder = Arc<dyn Fn(&CapturedRequest) -> (StatusCode, Value) + Send + Sync>;

#[derive(Clone)]
struct MockState {
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
    respond: Responder,
}

async fn handle(State(state): State<MockState>, request: Request) -> impl IntoResponse {
    let (parts, body) = request.into_parts();
    let bytes = to_bytes(body, usize::MAX).await.expect("request body");
    let captured = CapturedRequest {
        method: parts.method.to_string(),
        path: parts.uri.path().to_string(),
        query: parts.uri.query().unwrap_or("").to_string(),
        content_type: parts
            .headers
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(String::from),
        body: serde_json::from_slice(&bytes).unwrap_or(Value::Null),
    };
    let (status, payload) = (state.respond)(&captured);
    state.requests.lock().unwrap().push(captured);
    (status, Json(payload))
}

/// Upstream stand-in bound to an ephemeral local port, wired into an
/// [`AzdoConnection`] configured for project `Fabrikam`.
struct MockUpstream {
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
    connection: Arc<AzdoConnection>,
}

impl MockUpstream {
    async fn start<F>(respond: F) -> Self
    where
        F: Fn(&CapturedRequest) -> (StatusCode, Value) + Send + Sync + 'static,
    {
        let state = MockState {
            requests: Arc::new(Mutex::new(Vec::new())),
            respond: Arc::new(respond),
        };
        let requests = state.requests.clone();
        let app = Router::new().fallback(handle).with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock upstream");
        let addr = listener.local_addr().expect("mock upstream address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve mock upstream");
        });

        let config = AzdoConfig {
            org_url: format!("http://{}", addr),
            project: "Fabrikam".to_string(),
            pat: "test-pat".to_string(),
        };
        Self {
            requests,
            connection: Arc::new(AzdoConnection::new(&config)),
        }
    }

    /// All requests received so far, in arrival order.
    fn recorded(&self) -> Vec<CapturedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

fn list_payload(items: Vec<Value>) -> Value {
    json!({ "count": items.len(), "value": items })
}

mod work_items {
    use super::*;

    #[tokio::test]
    async fn list_work_items_posts_the_wiql_verbatim() {
        let mock = MockUpstream::start(|_| {
            (
                StatusCode::OK,
                json!({ "queryType": "flat", "workItems": [{ "id": 12 }] }),
            )
        })
        .await;
        let service = WorkItemService::new(mock.connection.clone());

        let result = service
            .list_work_items("SELECT [System.Id] FROM WorkItems")
            .await
            .expect("query should succeed");
        assert_eq!(result.work_items.len(), 1);
        assert_eq!(result.work_items[0].id, 12);

        let recorded = mock.recorded();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].method, "POST");
        assert_eq!(recorded[0].path, "/Fabrikam/_apis/wit/wiql");
        assert!(recorded[0].query.contains("api-version=7.1"));
        assert_eq!(recorded[0].body["query"], "SELECT [System.Id] FROM WorkItems");
    }

    #[tokio::test]
    async fn search_keeps_quotes_and_returns_references_untrimmed() {
        let refs: Vec<Value> = (1..=15).map(|id| json!({ "id": id })).collect();
        let mock =
            MockUpstream::start(move |_| (StatusCode::OK, json!({ "workItems": refs }))).await;
        let service = WorkItemService::new(mock.connection.clone());

        let result = service
            .search_work_items("O'Brien")
            .await
            .expect("search should succeed");
        assert_eq!(result.work_items.len(), 15);

        let wiql = mock.recorded()[0].body["query"].as_str().unwrap().to_string();
        assert!(wiql.contains("[System.Title] CONTAINS 'O'Brien'"));
        assert!(wiql.contains("[System.Description] CONTAINS 'O'Brien'"));
    }

    #[tokio::test]
    async fn recent_items_page_client_side() {
        let refs: Vec<Value> = (1..=5).map(|id| json!({ "id": id })).collect();
        let mock =
            MockUpstream::start(move |_| (StatusCode::OK, json!({ "workItems": refs }))).await;
        let service = WorkItemService::new(mock.connection.clone());

        let result = service
            .get_recent_work_items(Some(2), Some(1))
            .await
            .expect("recent query should succeed");
        let ids: Vec<i64> = result.work_items.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![2, 3]);

        let recorded = mock.recorded();
        assert_eq!(recorded.len(), 1, "paging must not issue extra requests");
        assert!(!recorded[0].query.contains("top"));
    }

    #[tokio::test]
    async fn create_posts_a_single_title_patch() {
        let mock = MockUpstream::start(|_| (StatusCode::OK, json!({ "id": 99 }))).await;
        let service = WorkItemService::new(mock.connection.clone());

        let item = NewWorkItem {
            work_item_type: "Bug".into(),
            title: "Crash on login".into(),
            description: None,
            assigned_to: None,
            state: None,
            area_path: None,
            iteration_path: None,
            additional_fields: Map::new(),
        };
        let created = service.create_work_item(&item).await.expect("create should succeed");
        assert_eq!(created["id"], 99);

        let recorded = mock.recorded();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].method, "POST");
        assert_eq!(recorded[0].path, "/Fabrikam/_apis/wit/workitems/$Bug");
        assert_eq!(
            recorded[0].content_type.as_deref(),
            Some("application/json-patch+json")
        );
        let ops = recorded[0].body.as_array().expect("patch document");
        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0]["op"], "add");
        assert_eq!(ops[0]["path"], "/fields/System.Title");
        assert_eq!(ops[0]["value"], "Crash on login");
    }

    #[tokio::test]
    async fn bulk_stops_at_the_first_failure() {
        let mock = MockUpstream::start(|req| {
            if req.body[0]["value"] == "boom" {
                (StatusCode::BAD_REQUEST, json!({ "message": "title rejected" }))
            } else {
                (StatusCode::OK, json!({ "id": 1 }))
            }
        })
        .await;
        let service = WorkItemService::new(mock.connection.clone());

        let items = vec![
            json!({ "workItemType": "Bug", "title": "first" }),
            json!({ "workItemType": "Bug", "title": "boom" }),
            json!({ "workItemType": "Bug", "title": "never sent" }),
        ];
        let err = service.bulk_create(&items).await.expect_err("second entry fails");
        assert_eq!(err.to_string(), "Bad request: title rejected");

        let recorded = mock.recorded();
        assert_eq!(recorded.len(), 2, "the failure must abort the remaining entries");
        assert_eq!(recorded[1].body[0]["value"], "boom");
    }

    #[tokio::test]
    async fn bulk_mixes_updates_and_creates_in_order() {
        let mock = MockUpstream::start(|req| {
            let id = if req.method == "PATCH" { 7 } else { 8 };
            (StatusCode::OK, json!({ "id": id }))
        })
        .await;
        let service = WorkItemService::new(mock.connection.clone());

        let items = vec![
            json!({ "id": 7, "fields": { "System.State": "Active" } }),
            json!({ "workItemType": "Task", "title": "New one" }),
        ];
        let result = service.bulk_create(&items).await.expect("bulk should succeed");
        assert_eq!(result["count"], 2);
        assert_eq!(result["workItems"][0]["id"], 7);
        assert_eq!(result["workItems"][1]["id"], 8);

        let recorded = mock.recorded();
        assert_eq!(recorded[0].method, "PATCH");
        assert_eq!(recorded[0].path, "/Fabrikam/_apis/wit/workitems/7");
        assert_eq!(recorded[0].body[0]["path"], "/fields/System.State");
        assert_eq!(recorded[1].method, "POST");
        assert_eq!(recorded[1].path, "/Fabrikam/_apis/wit/workitems/$Task");
    }
}

mod boards {
    use super::*;

    #[tokio::test]
    async fn resolving_the_default_team_puts_its_id_in_the_route() {
        let mock = MockUpstream::start(|req| {
            if req.path == "/_apis/projects/Fabrikam/teams" {
                (
                    StatusCode::OK,
                    list_payload(vec![
                        json!({ "id": "t1", "name": "Platform" }),
                        json!({ "id": "t2", "name": "Fabrikam" }),
                    ]),
                )
            } else {
                (
                    StatusCode::OK,
                    list_payload(vec![json!({ "id": "board-1", "name": "Stories" })]),
                )
            }
        })
        .await;
        let service = BoardsService::new(mock.connection.clone());

        let boards = service.get_boards(None).await.expect("boards should succeed");
        assert_eq!(boards.len(), 1);

        let recorded = mock.recorded();
        assert_eq!(recorded.len(), 2);
        assert_eq!(recorded[0].path, "/_apis/projects/Fabrikam/teams");
        assert_eq!(recorded[1].path, "/Fabrikam/t2/_apis/work/boards");
    }

    #[tokio::test]
    async fn a_project_without_teams_is_an_error() {
        let mock = MockUpstream::start(|_| (StatusCode::OK, list_payload(vec![]))).await;
        let service = BoardsService::new(mock.connection.clone());

        let err = service.get_boards(None).await.expect_err("no teams to pick from");
        assert!(matches!(err, AzdoError::NoTeams(_)));
        assert_eq!(err.to_string(), "No teams found for project Fabrikam");
        assert_eq!(mock.recorded().len(), 1);
    }

    #[tokio::test]
    async fn an_explicit_team_skips_resolution() {
        let mock = MockUpstream::start(|_| (StatusCode::OK, list_payload(vec![]))).await;
        let service = BoardsService::new(mock.connection.clone());

        service
            .get_sprints(Some("team-x"))
            .await
            .expect("sprints should succeed");

        let recorded = mock.recorded();
        assert_eq!(recorded.len(), 1);
        assert_eq!(
            recorded[0].path,
            "/Fabrikam/team-x/_apis/work/teamsettings/iterations"
        );
    }

    #[tokio::test]
    async fn current_sprint_requests_the_current_timeframe() {
        let mock = MockUpstream::start(|_| {
            (
                StatusCode::OK,
                list_payload(vec![json!({ "id": "s1", "name": "Sprint 9" })]),
            )
        })
        .await;
        let service = BoardsService::new(mock.connection.clone());

        let sprint = service
            .get_current_sprint(Some("team-x"))
            .await
            .expect("current sprint should succeed")
            .expect("one iteration is current");
        assert_eq!(sprint["name"], "Sprint 9");
        assert!(mock.recorded()[0].query.contains("timeframe=current"));
    }
}

mod projects {
    use super::*;

    #[tokio::test]
    async fn list_pages_upstream_and_filters_state_locally() {
        let mock = MockUpstream::start(|_| {
            (
                StatusCode::OK,
                list_payload(vec![
                    json!({ "id": "p1", "name": "Alpha", "state": "wellFormed" }),
                    json!({ "id": "p2", "name": "Beta", "state": "createPending" }),
                ]),
            )
        })
        .await;
        let service = ProjectService::new(mock.connection.clone());

        let projects = service
            .list_projects(Some("wellFormed"), Some(10), Some(5))
            .await
            .expect("list should succeed");
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].name, "Alpha");

        let recorded = mock.recorded();
        assert_eq!(recorded[0].path, "/_apis/projects");
        assert!(recorded[0].query.contains("top=10"));
        assert!(recorded[0].query.contains("skip=5"));
    }

    #[tokio::test]
    async fn state_filter_all_passes_everything() {
        let mock = MockUpstream::start(|_| {
            (
                StatusCode::OK,
                list_payload(vec![
                    json!({ "id": "p1", "name": "Alpha", "state": "wellFormed" }),
                    json!({ "id": "p2", "name": "Beta", "state": "deleting" }),
                ]),
            )
        })
        .await;
        let service = ProjectService::new(mock.connection.clone());

        let projects = service
            .list_projects(Some("all"), None, None)
            .await
            .expect("list should succeed");
        assert_eq!(projects.len(), 2);
    }
}

mod git {
    use super::*;

    #[tokio::test]
    async fn merge_sends_numeric_status_and_strategy() {
        let mock =
            MockUpstream::start(|_| (StatusCode::OK, json!({ "pullRequestId": 42, "status": 3 })))
                .await;
        let service = GitService::new(mock.connection.clone());

        service
            .merge_pull_request("repo1", 42, MergeStrategy::Squash)
            .await
            .expect("merge should succeed");

        let recorded = mock.recorded();
        assert_eq!(recorded[0].method, "PATCH");
        assert_eq!(
            recorded[0].path,
            "/Fabrikam/_apis/git/repositories/repo1/pullrequests/42"
        );
        assert_eq!(recorded[0].body["status"], 3);
        assert_eq!(recorded[0].body["completionOptions"]["mergeStrategy"], 4);
    }

    #[tokio::test]
    async fn pull_request_search_maps_status_and_omits_all() {
        let mock = MockUpstream::start(|_| (StatusCode::OK, list_payload(vec![]))).await;
        let service = GitService::new(mock.connection.clone());

        let active = PullRequestSearch {
            status: Some(PullRequestStatus::Active),
            creator_id: Some("abc".to_string()),
            ..Default::default()
        };
        service
            .list_pull_requests("repo1", &active)
            .await
            .expect("active search should succeed");

        let all = PullRequestSearch {
            status: Some(PullRequestStatus::All),
            ..Default::default()
        };
        service
            .list_pull_requests("repo1", &all)
            .await
            .expect("all search should succeed");

        let recorded = mock.recorded();
        assert!(recorded[0].query.contains("searchCriteria.status=1"));
        assert!(recorded[0].query.contains("searchCriteria.creatorId=abc"));
        assert!(!recorded[1].query.contains("searchCriteria.status"));
    }

    #[tokio::test]
    async fn branch_stats_filter_and_top_are_applied_locally() {
        let mock = MockUpstream::start(|_| {
            (
                StatusCode::OK,
                list_payload(vec![
                    json!({ "name": "main" }),
                    json!({ "name": "feature/a" }),
                    json!({ "name": "feature/b" }),
                ]),
            )
        })
        .await;
        let service = GitService::new(mock.connection.clone());

        let branches = service
            .list_branches("repo1", Some("feature"), Some(1))
            .await
            .expect("branches should succeed");
        assert_eq!(branches.len(), 1);
        assert_eq!(branches[0].name, "feature/a");

        let recorded = mock.recorded();
        assert_eq!(recorded.len(), 1);
        assert_eq!(
            recorded[0].path,
            "/Fabrikam/_apis/git/repositories/repo1/stats/branches"
        );
    }

    #[tokio::test]
    async fn commit_history_filters_on_message_then_pages() {
        let mock = MockUpstream::start(|_| {
            (
                StatusCode::OK,
                list_payload(vec![
                    json!({ "comment": "Update readme" }),
                    json!({ "comment": "fix: crash" }),
                    json!({ "comment": "Add tests" }),
                    json!({ "comment": "fix: typo" }),
                    json!({ "comment": "fix: logging" }),
                ]),
            )
        })
        .await;
        let service = GitService::new(mock.connection.clone());

        let commits = service
            .get_commit_history("repo1", Some("fix"), Some(1), Some(1))
            .await
            .expect("history should succeed");
        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].comment.as_deref(), Some("fix: typo"));

        let recorded = mock.recorded();
        assert_eq!(recorded.len(), 1);
        assert_eq!(
            recorded[0].path,
            "/Fabrikam/_apis/git/repositories/repo1/commits"
        );
        assert!(!recorded[0].query.contains("itemPath"));
    }

    #[tokio::test]
    async fn plain_commit_listing_filters_without_paging() {
        let mock = MockUpstream::start(|_| {
            (
                StatusCode::OK,
                list_payload(vec![
                    json!({ "comment": "fix: crash" }),
                    json!({ "comment": "Add tests" }),
                    json!({ "comment": "fix: typo" }),
                ]),
            )
        })
        .await;
        let service = GitService::new(mock.connection.clone());

        let commits = service
            .get_commits("repo1", Some("fix"))
            .await
            .expect("commit listing should succeed");
        assert_eq!(commits.len(), 2);
        assert_eq!(mock.recorded().len(), 1);
    }

    #[tokio::test]
    async fn completing_a_pull_request_verifies_it_first() {
        let mock = MockUpstream::start(|req| {
            if req.method == "GET" {
                (StatusCode::OK, json!({ "pullRequestId": 42, "status": 1 }))
            } else {
                (StatusCode::OK, json!({ "pullRequestId": 42, "status": 3 }))
            }
        })
        .await;
        let service = GitService::new(mock.connection.clone());

        service
            .complete_pull_request("repo1", 42, MergeStrategy::Rebase, Some(true))
            .await
            .expect("completion should succeed");

        let recorded = mock.recorded();
        assert_eq!(recorded.len(), 2);
        assert_eq!(recorded[0].method, "GET");
        assert_eq!(recorded[0].path, "/_apis/git/pullrequests/42");
        assert_eq!(recorded[1].method, "PATCH");
        assert_eq!(recorded[1].body["completionOptions"]["mergeStrategy"], 2);
        assert_eq!(recorded[1].body["completionOptions"]["deleteSourceBranch"], true);
    }

    #[tokio::test]
    async fn missing_file_content_yields_the_placeholder() {
        let mock = MockUpstream::start(|_| {
            (
                StatusCode::OK,
                json!({ "path": "/logo.png", "isFolder": false }),
            )
        })
        .await;
        let service = GitService::new(mock.connection.clone());

        let result = service
            .get_file_content("repo1", "/logo.png")
            .await
            .expect("content fetch should succeed");
        assert_eq!(result["content"], "[Content not available in this format]");
        assert!(mock.recorded()[0].query.contains("includeContent=true"));
    }

    #[tokio::test]
    async fn approve_casts_vote_ten_as_reviewer_me() {
        let mock = MockUpstream::start(|_| (StatusCode::OK, json!({ "vote": 10 }))).await;
        let service = GitService::new(mock.connection.clone());

        service
            .approve_pull_request("repo1", 42)
            .await
            .expect("approve should succeed");

        let recorded = mock.recorded();
        assert_eq!(recorded[0].method, "PUT");
        assert_eq!(
            recorded[0].path,
            "/Fabrikam/_apis/git/repositories/repo1/pullrequests/42/reviewers/me"
        );
        assert_eq!(recorded[0].body["vote"], 10);
    }
}

mod errors {
    use super::*;

    #[tokio::test]
    async fn not_found_surfaces_the_upstream_message() {
        let mock = MockUpstream::start(|_| {
            (
                StatusCode::NOT_FOUND,
                json!({ "message": "Work item 123 not found" }),
            )
        })
        .await;
        let service = WorkItemService::new(mock.connection.clone());

        let err = service.get_work_item(123).await.expect_err("404 maps to NotFound");
        assert!(matches!(err, AzdoError::NotFound(_)));
        assert_eq!(err.to_string(), "Not found: Work item 123 not found");
    }

    #[tokio::test]
    async fn unauthorized_is_reported_without_the_body() {
        let mock = MockUpstream::start(|_| (StatusCode::UNAUTHORIZED, json!({}))).await;
        let service = WorkItemService::new(mock.connection.clone());

        let err = service.get_work_item(123).await.expect_err("401 maps to Unauthorized");
        assert!(matches!(err, AzdoError::Unauthorized));
        assert_eq!(
            err.to_string(),
            "Unauthorized: personal access token missing or rejected"
        );
    }
}
