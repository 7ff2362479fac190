//! Board and sprint operations on team-scoped work routes.
//!
//! Tools in this group take an optional team ID. When it is absent the
//! project's default team is resolved first: the team named after the
//! project, else the first team listed. A project with no teams is an error.

use std::sync::Arc;

use reqwest::Method;
use serde_json::{json, Value};

use crate::azdo::{AzdoConnection, AzdoError};
use crate::models::{ListResponse, WebApiTeam};

/// The default team is the one named after the project, else the first one.
pub fn pick_default_team<'a>(teams: &'a [WebApiTeam], project: &str) -> Option<&'a WebApiTeam> {
    teams
        .iter()
        .find(|team| team.name == project)
        .or_else(|| teams.first())
}

/// Service for the boards and sprints tool group.
#[derive(Debug, Clone)]
pub struct BoardsService {
    connection: Arc<AzdoConnection>,
}

impl BoardsService {
    pub fn new(connection: Arc<AzdoConnection>) -> Self {
        Self { connection }
    }

    /// All boards visible to the team.
    pub async fn get_boards(&self, team_id: Option<&str>) -> Result<Vec<Value>, AzdoError> {
        let team = self.resolve_team(team_id).await?;
        let response = self
            .connection
            .team_request(Method::GET, &team, "work/boards")
            .send()
            .await?;
        let list: ListResponse<Value> = self.connection.handle_response(response).await?;
        Ok(list.value)
    }

    /// Columns of one board.
    pub async fn get_board_columns(
        &self,
        team_id: Option<&str>,
        board_id: &str,
    ) -> Result<Vec<Value>, AzdoError> {
        let team = self.resolve_team(team_id).await?;
        self.board_columns(&team, board_id).await
    }

    /// Board details together with its columns.
    pub async fn get_board_items(
        &self,
        team_id: Option<&str>,
        board_id: &str,
    ) -> Result<Value, AzdoError> {
        let team = self.resolve_team(team_id).await?;
        let response = self
            .connection
            .team_request(Method::GET, &team, &format!("work/boards/{}", board_id))
            .send()
            .await?;
        let board: Value = self.connection.handle_response(response).await?;
        let columns = self.board_columns(&team, board_id).await?;
        Ok(json!({ "board": board, "columns": columns }))
    }

    /// Echo of a board move. There is no single REST call for repositioning a
    /// card, so this reports the column the caller asked for without an
    /// upstream request.
    pub fn move_card(&self, work_item_id: i64, column_id: &str) -> Value {
        json!({
            "id": work_item_id,
            "fields": { "System.BoardColumn": column_id },
        })
    }

    /// All iterations assigned to the team.
    pub async fn get_sprints(&self, team_id: Option<&str>) -> Result<Vec<Value>, AzdoError> {
        let team = self.resolve_team(team_id).await?;
        let response = self
            .connection
            .team_request(Method::GET, &team, "work/teamsettings/iterations")
            .send()
            .await?;
        let list: ListResponse<Value> = self.connection.handle_response(response).await?;
        Ok(list.value)
    }

    /// The iteration the team is currently in, if any.
    pub async fn get_current_sprint(
        &self,
        team_id: Option<&str>,
    ) -> Result<Option<Value>, AzdoError> {
        let team = self.resolve_team(team_id).await?;
        let response = self
            .connection
            .team_request(Method::GET, &team, "work/teamsettings/iterations")
            .query(&[("$timeframe", "current")])
            .send()
            .await?;
        let list: ListResponse<Value> = self.connection.handle_response(response).await?;
        Ok(list.value.into_iter().next())
    }

    /// Work items scheduled in one sprint.
    pub async fn get_sprint_work_items(
        &self,
        team_id: Option<&str>,
        sprint_id: &str,
    ) -> Result<Value, AzdoError> {
        let team = self.resolve_team(team_id).await?;
        let response = self
            .connection
            .team_request(
                Method::GET,
                &team,
                &format!("work/teamsettings/iterations/{}/workitems", sprint_id),
            )
            .send()
            .await?;
        self.connection.handle_response(response).await
    }

    /// Team settings in place of per-person capacity, which has no direct
    /// REST surface here.
    pub async fn get_sprint_capacity(
        &self,
        team_id: Option<&str>,
        sprint_id: &str,
    ) -> Result<Value, AzdoError> {
        let team = self.resolve_team(team_id).await?;
        let response = self
            .connection
            .team_request(Method::GET, &team, "work/teamsettings")
            .send()
            .await?;
        let settings: Value = self.connection.handle_response(response).await?;
        Ok(json!({
            "teamSettings": settings,
            "sprintId": sprint_id,
            "message": "Direct capacity API not available, returning team settings instead",
        }))
    }

    /// Team descriptor in place of a member list. Falls back to the project
    /// name as the team name when no team ID is given.
    pub async fn get_team_members(&self, team_id: Option<&str>) -> Result<Value, AzdoError> {
        let team = team_id.unwrap_or_else(|| self.connection.project());
        let response = self
            .connection
            .org_request(
                Method::GET,
                &format!("projects/{}/teams/{}", self.connection.project(), team),
            )
            .send()
            .await?;
        let info: Value = self.connection.handle_response(response).await?;
        Ok(json!({
            "team": info,
            "message": "Direct team members API not available, returning team info instead",
        }))
    }

    async fn resolve_team(&self, team_id: Option<&str>) -> Result<String, AzdoError> {
        match team_id {
            Some(team) => Ok(team.to_string()),
            None => self.default_team_id().await,
        }
    }

    async fn default_team_id(&self) -> Result<String, AzdoError> {
        let project = self.connection.project();
        let response = self
            .connection
            .org_request(Method::GET, &format!("projects/{}/teams", project))
            .send()
            .await?;
        let teams: ListResponse<WebApiTeam> = self.connection.handle_response(response).await?;
        pick_default_team(&teams.value, project)
            .map(|team| team.id.clone())
            .ok_or_else(|| AzdoError::NoTeams(project.to_string()))
    }

    async fn board_columns(&self, team: &str, board_id: &str) -> Result<Vec<Value>, AzdoError> {
        let response = self
            .connection
            .team_request(
                Method::GET,
                team,
                &format!("work/boards/{}/columns", board_id),
            )
            .send()
            .await?;
        let list: ListResponse<Value> = self.connection.handle_response(response).await?;
        Ok(list.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;

    fn team(id: &str, name: &str) -> WebApiTeam {
        WebApiTeam {
            id: id.to_string(),
            name: name.to_string(),
            extra: Map::new(),
        }
    }

    #[test]
    fn default_team_prefers_the_one_named_after_the_project() {
        let teams = vec![team("a", "Platform"), team("b", "Fabrikam")];
        let picked = pick_default_team(&teams, "Fabrikam").unwrap();
        assert_eq!(picked.id, "b");
    }

    #[test]
    fn default_team_falls_back_to_the_first_listed() {
        let teams = vec![team("a", "Platform"), team("b", "Tooling")];
        let picked = pick_default_team(&teams, "Fabrikam").unwrap();
        assert_eq!(picked.id, "a");
    }

    #[test]
    fn no_teams_means_no_default() {
        assert!(pick_default_team(&[], "Fabrikam").is_none());
    }

    #[test]
    fn move_card_echoes_the_target_column() {
        let config = crate::config::AzdoConfig {
            org_url: "https://dev.azure.com/contoso".into(),
            project: "Fabrikam".into(),
            pat: "secret".into(),
        };
        let service = BoardsService::new(Arc::new(AzdoConnection::new(&config)));
        let moved = service.move_card(42, "Doing");
        assert_eq!(moved["id"], 42);
        assert_eq!(moved["fields"]["System.BoardColumn"], "Doing");
    }
}
