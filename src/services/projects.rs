//! Project, classification, and process operations on the core routes.
//!
//! Classification nodes and process fields have no dedicated route through
//! this surface, so several operations return project info or labeled stand-in
//! data with a `message` explaining the substitution.

use std::sync::Arc;

use reqwest::Method;
use rmcp::schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{json, Map, Value};

use crate::azdo::{AzdoConnection, AzdoError};
use crate::models::{ListResponse, ProcessWorkItemType, TeamProjectReference};

/// Project visibility, sent as its numeric wire code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ProjectVisibility {
    #[default]
    Private,
    Public,
}

impl ProjectVisibility {
    pub fn code(&self) -> u8 {
        match self {
            ProjectVisibility::Private => 0,
            ProjectVisibility::Public => 2,
        }
    }
}

/// Service for the project management tool group.
#[derive(Debug, Clone)]
pub struct ProjectService {
    connection: Arc<AzdoConnection>,
}

impl ProjectService {
    pub fn new(connection: Arc<AzdoConnection>) -> Self {
        Self { connection }
    }

    /// Projects in the organization, paged upstream and filtered by state
    /// here. A filter of `all` passes everything.
    pub async fn list_projects(
        &self,
        state_filter: Option<&str>,
        top: Option<u32>,
        skip: Option<u32>,
    ) -> Result<Vec<TeamProjectReference>, AzdoError> {
        let mut request = self.connection.org_request(Method::GET, "projects");
        if let Some(top) = top {
            request = request.query(&[("$top", top)]);
        }
        if let Some(skip) = skip {
            request = request.query(&[("$skip", skip)]);
        }
        let response = request.send().await?;
        let list: ListResponse<TeamProjectReference> =
            self.connection.handle_response(response).await?;

        let projects = match state_filter {
            None | Some("all") => list.value,
            Some(filter) => list
                .value
                .into_iter()
                .filter(|project| project.state.as_deref() == Some(filter))
                .collect(),
        };
        Ok(projects)
    }

    /// One project by ID or name.
    pub async fn get_project_details(
        &self,
        project_id: &str,
        include_capabilities: Option<bool>,
    ) -> Result<TeamProjectReference, AzdoError> {
        let mut request = self
            .connection
            .org_request(Method::GET, &format!("projects/{}", project_id));
        if let Some(include) = include_capabilities {
            request = request.query(&[("includeCapabilities", include)]);
        }
        let response = request.send().await?;
        self.connection.handle_response(response).await
    }

    /// Queue creation of a project. The response is the queued operation,
    /// not the project itself.
    pub async fn create_project(
        &self,
        name: &str,
        description: Option<&str>,
        visibility: ProjectVisibility,
        capabilities: Option<&Map<String, Value>>,
    ) -> Result<Value, AzdoError> {
        let mut body = json!({
            "name": name,
            "visibility": visibility.code(),
            "capabilities": capabilities.cloned().unwrap_or_default(),
        });
        if let Some(description) = description {
            body["description"] = json!(description);
        }
        let response = self
            .connection
            .org_request(Method::POST, "projects")
            .json(&body)
            .send()
            .await?;
        self.connection.handle_response(response).await
    }

    /// Project info in place of the area hierarchy.
    pub async fn get_areas(&self, project_id: &str) -> Result<Value, AzdoError> {
        let project = self.fetch_project(project_id).await?;
        Ok(json!({
            "project": project,
            "message": "Direct classification node API not available, returning project info instead",
        }))
    }

    /// Project info in place of the iteration hierarchy.
    pub async fn get_iterations(&self, project_id: &str) -> Result<Value, AzdoError> {
        let project = self.fetch_project(project_id).await?;
        Ok(json!({
            "project": project,
            "message": "Direct classification node API not available, returning project info instead",
        }))
    }

    /// Labeled stand-in for area creation.
    pub fn create_area(&self, name: &str, parent_path: Option<&str>) -> Value {
        json!({
            "id": "mock-area-id",
            "name": name,
            "path": parent_path.unwrap_or(""),
            "structureType": "area",
            "message": "Direct classification node creation API not available, returning mock data",
        })
    }

    /// Labeled stand-in for iteration creation. Date attributes appear only
    /// when at least one date was given.
    pub fn create_iteration(
        &self,
        name: &str,
        parent_path: Option<&str>,
        start_date: Option<&str>,
        finish_date: Option<&str>,
    ) -> Value {
        let mut iteration = json!({
            "id": "mock-iteration-id",
            "name": name,
            "path": parent_path.unwrap_or(""),
            "structureType": "iteration",
            "message": "Direct classification node creation API not available, returning mock data",
        });
        let mut attributes = Map::new();
        if let Some(start) = start_date {
            attributes.insert("startDate".into(), json!(start));
        }
        if let Some(finish) = finish_date {
            attributes.insert("finishDate".into(), json!(finish));
        }
        if !attributes.is_empty() {
            iteration["attributes"] = Value::Object(attributes);
        }
        iteration
    }

    /// Labeled stand-in for the process list.
    pub fn get_processes(&self) -> Value {
        json!([{
            "id": "mock-process-id",
            "name": "Agile",
            "description": "Agile process template",
            "message": "Direct process API not available, returning mock data",
        }])
    }

    /// Work item types defined by a process.
    pub async fn get_work_item_types(
        &self,
        process_id: &str,
    ) -> Result<Vec<ProcessWorkItemType>, AzdoError> {
        let response = self
            .connection
            .org_request(
                Method::GET,
                &format!("work/processes/{}/workitemtypes", process_id),
            )
            .send()
            .await?;
        let list: ListResponse<ProcessWorkItemType> =
            self.connection.handle_response(response).await?;
        Ok(list.value)
    }

    /// The matching work item type in place of its field list.
    pub async fn get_work_item_type_fields(
        &self,
        process_id: &str,
        wit_ref_name: &str,
    ) -> Result<Value, AzdoError> {
        let types = self.get_work_item_types(process_id).await?;
        let matching: Vec<ProcessWorkItemType> = types
            .into_iter()
            .filter(|wit| wit.reference_name.as_deref() == Some(wit_ref_name))
            .collect();
        Ok(json!({
            "types": matching,
            "message": "Direct field API not available, returning work item types instead",
        }))
    }

    async fn fetch_project(&self, project_id: &str) -> Result<Value, AzdoError> {
        let response = self
            .connection
            .org_request(Method::GET, &format!("projects/{}", project_id))
            .send()
            .await?;
        self.connection.handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AzdoConfig;

    fn service() -> ProjectService {
        let config = AzdoConfig {
            org_url: "https://dev.azure.com/contoso".into(),
            project: "Fabrikam".into(),
            pat: "secret".into(),
        };
        ProjectService::new(Arc::new(AzdoConnection::new(&config)))
    }

    #[test]
    fn visibility_codes_match_the_wire_enum() {
        assert_eq!(ProjectVisibility::Private.code(), 0);
        assert_eq!(ProjectVisibility::Public.code(), 2);
        assert_eq!(ProjectVisibility::default(), ProjectVisibility::Private);
    }

    #[test]
    fn iteration_stand_in_omits_empty_attributes() {
        let service = service();
        let bare = service.create_iteration("Sprint 9", None, None, None);
        assert!(bare.get("attributes").is_none());
        assert_eq!(bare["path"], "");

        let dated = service.create_iteration("Sprint 9", Some("\\Release 2"), Some("2024-06-01"), None);
        assert_eq!(dated["attributes"]["startDate"], "2024-06-01");
        assert!(dated["attributes"].get("finishDate").is_none());
        assert_eq!(dated["path"], "\\Release 2");
    }

    #[test]
    fn area_stand_in_is_labeled() {
        let area = service().create_area("Payments", None);
        assert_eq!(area["id"], "mock-area-id");
        assert_eq!(area["structureType"], "area");
        assert!(area["message"]
            .as_str()
            .unwrap()
            .contains("not available"));
    }
}
