//! MCP server exposing Azure DevOps operations as tools.

mod envelope;
mod tools;
mod types;

pub use envelope::ToolResponse;
pub use types::*;

use std::sync::Arc;

use rmcp::{
    handler::server::tool::ToolRouter, model::ServerInfo, tool_handler, ServerHandler, ServiceExt,
};

use crate::azdo::AzdoConnection;
use crate::config::AzdoConfig;
use crate::services::{
    AiInsightsService, ArtifactService, BoardsService, DevSecOpsService, GitService,
    ProjectService, TestingService, WorkItemService,
};

#[derive(Clone)]
pub struct McpServer {
    work_items: WorkItemService,
    boards: BoardsService,
    projects: ProjectService,
    git: GitService,
    testing: TestingService,
    devsecops: DevSecOpsService,
    artifacts: ArtifactService,
    ai: AiInsightsService,
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    pub fn new(config: &AzdoConfig) -> Self {
        let connection = Arc::new(AzdoConnection::new(config));

        Self {
            work_items: WorkItemService::new(connection.clone()),
            boards: BoardsService::new(connection.clone()),
            projects: ProjectService::new(connection.clone()),
            git: GitService::new(connection),
            testing: TestingService::new(),
            devsecops: DevSecOpsService::new(),
            artifacts: ArtifactService::new(),
            ai: AiInsightsService::new(),
            tool_router: tools::work_items::router()
                + tools::boards::router()
                + tools::projects::router()
                + tools::git::router()
                + tools::testing::router()
                + tools::devsecops::router()
                + tools::artifacts::router()
                + tools::ai::router(),
        }
    }
}

#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: rmcp::model::Implementation {
                name: "azdo-mcp".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                title: None,
                icons: None,
                website_url: None,
            },
            capabilities: rmcp::model::ServerCapabilities::builder()
                .enable_tools()
                .build(),
            instructions: Some(
                r#"Azure DevOps tools for work tracking, boards, projects, repositories, and delivery insights.

CONFIGURATION:
The server connects to one organization and one default project, read from the
environment (a .env file next to the binary is honored):
- AZURE_DEVOPS_ORG_URL: organization URL, e.g. https://dev.azure.com/yourorg
- AZURE_DEVOPS_PROJECT: default project name
- AZURE_DEVOPS_PERSONAL_ACCESS_TOKEN: PAT used to authenticate every request

RESPONSE SHAPE:
Every tool returns two text blocks - a one-line summary followed by the JSON
payload - and the same payload as structured content. Failures are reported
in-band as tool results with isError set, so read the summary line before
parsing the payload.

WORK ITEMS:
- listWorkItems runs a raw WIQL query; searchWorkItems, getRecentlyUpdatedWorkItems,
  and getMyWorkItems are prebuilt queries for the common cases
- getWorkItemById returns the full field set for one item
- createWorkItem/updateWorkItem take field names as-is (System.Title,
  Microsoft.VSTS.Common.Priority, ...); updateWorkItemState, assignWorkItem,
  and addWorkItemComment cover the frequent single-field updates
- createLink relates two existing items; bulkCreateWorkItems creates a batch
  sequentially and stops at the first failure

BOARDS & SPRINTS:
- getBoards/getBoardColumns/getBoardItems inspect a team board
- getSprints lists iterations; getCurrentSprint picks the one in progress
- getSprintWorkItems, getSprintCapacity, and getTeamMembers report on a sprint
- Team parameters are optional; the project's first team is used when omitted

PROJECTS & PROCESS:
- listProjects/getProjectDetails/createProject manage projects
- getAreas/getIterations browse classification nodes; createArea/createIteration
  extend them
- getProcesses, getWorkItemTypes, and getWorkItemTypeFields describe the
  process template behind a project

GIT:
- listRepositories/getRepository/createRepository manage repos
- listBranches, searchCode, browseRepository, getFileContent, and
  getCommitHistory read repository content
- listPullRequests/createPullRequest/getPullRequest/getPullRequestComments
  cover PR review; approvePullRequest votes, mergePullRequest completes

TESTING:
- Test automation, flakiness, gap analysis, impact analysis, environment and
  agent management, plus exploratory session tracking

DEVSECOPS:
- Security scans, vulnerability tracking, compliance checks and reports,
  security policies, and secret rotation/audit helpers

ARTIFACTS:
- Package feeds, package versions, publish/promote/delete, container images,
  image scanning, container policies, and universal packages

AI INSIGHTS:
- Code review, optimization, and smell analysis; predictive bug/effort/build
  analysis; productivity and quality trends; intelligent alerts and test
  selection

IMPORTANT:
- WIQL strings are passed through verbatim; quote values yourself
- IDs are numeric for work items and pull requests, GUIDs or names elsewhere
- Write operations take effect immediately against the configured organization"#
                    .into(),
            ),
            ..Default::default()
        }
    }
}

pub async fn run_stdio_server(config: AzdoConfig) -> anyhow::Result<()> {
    use tokio::io::{stdin, stdout};

    tracing::info!("Starting MCP server via stdio");

    let service = McpServer::new(&config);
    let server = service.serve((stdin(), stdout())).await?;

    let quit_reason = server.waiting().await?;
    tracing::info!("MCP server stopped: {:?}", quit_reason);

    Ok(())
}
