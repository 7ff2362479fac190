//! Work item operations: WIQL queries, CRUD, comments, links, bulk edits.

use std::sync::Arc;

use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde::Deserialize;
use serde_json::{json, Map, Value};

use crate::azdo::{AzdoConnection, AzdoError};
use crate::models::WorkItemQueryResult;

/// Work item comments are only served from the preview api-version.
const COMMENTS_API_VERSION: &str = "7.1-preview.3";

/// Create and update routes require json-patch bodies.
const PATCH_CONTENT_TYPE: &str = "application/json-patch+json";

/// Fields for a new work item. Also the shape of a creation entry in a bulk
/// request, which arrives as loose JSON and is deserialized into this.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWorkItem {
    pub work_item_type: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub area_path: Option<String>,
    #[serde(default)]
    pub iteration_path: Option<String>,
    #[serde(default)]
    pub additional_fields: Map<String, Value>,
}

/// An update entry in a bulk request.
#[derive(Debug, Clone, Deserialize)]
struct WorkItemUpdate {
    id: i64,
    #[serde(default)]
    fields: Map<String, Value>,
}

/// WIQL text used by the canned queries.
pub mod queries {
    /// Every work item in the project, most recently changed first.
    pub const RECENTLY_CHANGED: &str = "SELECT [System.Id], [System.Title], [System.State], \
         [System.ChangedDate] FROM WorkItems WHERE [System.TeamProject] = @project \
         ORDER BY [System.ChangedDate] DESC";

    /// Title/description text search. The search text is interpolated as-is,
    /// so a quote in it becomes part of the WIQL syntax.
    pub fn search(text: &str) -> String {
        format!(
            "SELECT [System.Id], [System.Title], [System.State], [System.CreatedDate] \
             FROM WorkItems WHERE [System.TeamProject] = @project \
             AND ([System.Title] CONTAINS '{text}' \
             OR [System.Description] CONTAINS '{text}') \
             ORDER BY [System.CreatedDate] DESC"
        )
    }

    /// Items assigned to the authenticated identity, optionally narrowed to
    /// one state. The state is interpolated as-is.
    pub fn assigned_to_me(state: Option<&str>) -> String {
        let state_condition = match state {
            Some(state) => format!(" AND [System.State] = '{state}'"),
            None => String::new(),
        };
        format!(
            "SELECT [System.Id], [System.Title], [System.State], [System.CreatedDate] \
             FROM WorkItems WHERE [System.TeamProject] = @project \
             AND [System.AssignedTo] = @me{state_condition} \
             ORDER BY [System.CreatedDate] DESC"
        )
    }
}

/// Service for the work item tool group.
#[derive(Debug, Clone)]
pub struct WorkItemService {
    connection: Arc<AzdoConnection>,
}

impl WorkItemService {
    pub fn new(connection: Arc<AzdoConnection>) -> Self {
        Self { connection }
    }

    /// Run a WIQL query and return the raw query result.
    pub async fn list_work_items(&self, query: &str) -> Result<WorkItemQueryResult, AzdoError> {
        self.query(query).await
    }

    /// Fetch a single work item by ID.
    pub async fn get_work_item(&self, id: i64) -> Result<Value, AzdoError> {
        let response = self
            .connection
            .project_request(Method::GET, &format!("wit/workitems/{}", id))
            .send()
            .await?;
        self.connection.handle_response(response).await
    }

    /// Text search across titles and descriptions. The full reference list
    /// comes back untrimmed; `top` is accepted by the tool but not applied.
    pub async fn search_work_items(&self, text: &str) -> Result<WorkItemQueryResult, AzdoError> {
        self.query(&queries::search(text)).await
    }

    /// Most recently changed work items, paged client-side.
    pub async fn get_recent_work_items(
        &self,
        top: Option<u32>,
        skip: Option<u32>,
    ) -> Result<WorkItemQueryResult, AzdoError> {
        let mut result = self.query(queries::RECENTLY_CHANGED).await?;
        let top = top.filter(|n| *n > 0).unwrap_or(10) as usize;
        let skip = skip.unwrap_or(0) as usize;
        result.work_items = super::slice_page(result.work_items, skip, top);
        Ok(result)
    }

    /// Work items assigned to the caller, optionally filtered by state.
    pub async fn get_my_work_items(
        &self,
        state: Option<&str>,
        top: Option<u32>,
    ) -> Result<WorkItemQueryResult, AzdoError> {
        let mut result = self.query(&queries::assigned_to_me(state)).await?;
        let top = top.filter(|n| *n > 0).unwrap_or(100) as usize;
        result.work_items = super::slice_page(result.work_items, 0, top);
        Ok(result)
    }

    /// Create a work item of the given type.
    pub async fn create_work_item(&self, item: &NewWorkItem) -> Result<Value, AzdoError> {
        let response = self
            .connection
            .project_request(
                Method::POST,
                &format!("wit/workitems/${}", item.work_item_type),
            )
            .header(CONTENT_TYPE, PATCH_CONTENT_TYPE)
            .json(&create_patch(item))
            .send()
            .await?;
        self.connection.handle_response(response).await
    }

    /// Update fields on an existing work item.
    pub async fn update_work_item(
        &self,
        id: i64,
        fields: &Map<String, Value>,
    ) -> Result<Value, AzdoError> {
        self.patch_work_item(id, &update_patch(fields)).await
    }

    /// Add a discussion comment to a work item.
    pub async fn add_comment(&self, id: i64, text: &str) -> Result<Value, AzdoError> {
        let response = self
            .connection
            .project_request_with_version(
                Method::POST,
                &format!("wit/workItems/{}/comments", id),
                COMMENTS_API_VERSION,
            )
            .json(&json!({ "text": text }))
            .send()
            .await?;
        self.connection.handle_response(response).await
    }

    /// Move a work item to a new state, with an optional history note.
    pub async fn update_state(
        &self,
        id: i64,
        state: &str,
        comment: Option<&str>,
    ) -> Result<Value, AzdoError> {
        let mut patch = vec![json!({
            "op": "add",
            "path": "/fields/System.State",
            "value": state,
        })];
        if let Some(comment) = comment {
            patch.push(json!({
                "op": "add",
                "path": "/fields/System.History",
                "value": comment,
            }));
        }
        self.patch_work_item(id, &patch).await
    }

    /// Assign a work item to a user.
    pub async fn assign(&self, id: i64, assigned_to: &str) -> Result<Value, AzdoError> {
        let patch = vec![json!({
            "op": "add",
            "path": "/fields/System.AssignedTo",
            "value": assigned_to,
        })];
        self.patch_work_item(id, &patch).await
    }

    /// Link two work items. The relation is added on the source item and
    /// points at the target's canonical URL.
    pub async fn create_link(
        &self,
        source_id: i64,
        target_id: i64,
        link_type: &str,
        comment: Option<&str>,
    ) -> Result<Value, AzdoError> {
        let patch = vec![json!({
            "op": "add",
            "path": "/relations/-",
            "value": {
                "rel": link_type,
                "url": format!(
                    "{}/_apis/wit/workItems/{}",
                    self.connection.org_url(),
                    target_id
                ),
                "attributes": { "comment": comment.unwrap_or("") },
            },
        })];
        self.patch_work_item(source_id, &patch).await
    }

    /// Create or update a batch of work items, one upstream call per entry,
    /// in order. An entry with an `id` is an update; anything else is a
    /// creation. The first failure aborts the rest.
    pub async fn bulk_create(&self, work_items: &[Value]) -> Result<Value, AzdoError> {
        let mut results = Vec::with_capacity(work_items.len());
        for entry in work_items {
            let result = if entry.get("id").is_some() {
                let update: WorkItemUpdate = parse_entry(entry)?;
                self.update_work_item(update.id, &update.fields).await?
            } else {
                let item: NewWorkItem = parse_entry(entry)?;
                self.create_work_item(&item).await?
            };
            results.push(result);
        }
        Ok(json!({ "count": results.len(), "workItems": results }))
    }

    async fn query(&self, query: &str) -> Result<WorkItemQueryResult, AzdoError> {
        let response = self
            .connection
            .project_request(Method::POST, "wit/wiql")
            .json(&json!({ "query": query }))
            .send()
            .await?;
        self.connection.handle_response(response).await
    }

    async fn patch_work_item(&self, id: i64, patch: &[Value]) -> Result<Value, AzdoError> {
        let response = self
            .connection
            .project_request(Method::PATCH, &format!("wit/workitems/{}", id))
            .header(CONTENT_TYPE, PATCH_CONTENT_TYPE)
            .json(patch)
            .send()
            .await?;
        self.connection.handle_response(response).await
    }
}

/// json-patch document for a creation. Title leads; optional fields follow in
/// a fixed order; additional fields come last.
pub fn create_patch(item: &NewWorkItem) -> Vec<Value> {
    let mut patch = vec![json!({
        "op": "add",
        "path": "/fields/System.Title",
        "value": item.title,
    })];
    let optional = [
        ("System.Description", &item.description),
        ("System.AssignedTo", &item.assigned_to),
        ("System.State", &item.state),
        ("System.AreaPath", &item.area_path),
        ("System.IterationPath", &item.iteration_path),
    ];
    for (field, value) in optional {
        if let Some(value) = value {
            patch.push(json!({
                "op": "add",
                "path": format!("/fields/{}", field),
                "value": value,
            }));
        }
    }
    for (field, value) in &item.additional_fields {
        patch.push(json!({
            "op": "add",
            "path": format!("/fields/{}", field),
            "value": value,
        }));
    }
    patch
}

/// json-patch document for a field update.
pub fn update_patch(fields: &Map<String, Value>) -> Vec<Value> {
    fields
        .iter()
        .map(|(field, value)| {
            json!({
                "op": "add",
                "path": format!("/fields/{}", field),
                "value": value,
            })
        })
        .collect()
}

fn parse_entry<T: serde::de::DeserializeOwned>(entry: &Value) -> Result<T, AzdoError> {
    serde_json::from_value(entry.clone())
        .map_err(|e| AzdoError::BadRequest(format!("invalid bulk work item entry: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_query_embeds_text_verbatim() {
        let query = queries::search("O'Brien");
        assert!(query.contains("[System.Title] CONTAINS 'O'Brien'"));
        assert!(query.contains("ORDER BY [System.CreatedDate] DESC"));
    }

    #[test]
    fn assigned_to_me_adds_state_clause_only_when_present() {
        let without = queries::assigned_to_me(None);
        assert!(without.contains("[System.AssignedTo] = @me ORDER BY"));

        let with = queries::assigned_to_me(Some("Active"));
        assert!(with.contains("@me AND [System.State] = 'Active' ORDER BY"));
    }

    #[test]
    fn create_patch_leads_with_title() {
        let item = NewWorkItem {
            work_item_type: "Bug".into(),
            title: "Crash on save".into(),
            description: None,
            assigned_to: None,
            state: None,
            area_path: None,
            iteration_path: None,
            additional_fields: Map::new(),
        };
        let patch = create_patch(&item);
        assert_eq!(patch.len(), 1);
        assert_eq!(patch[0]["path"], "/fields/System.Title");
        assert_eq!(patch[0]["op"], "add");
    }

    #[test]
    fn create_patch_appends_optionals_and_extra_fields() {
        let mut extra = Map::new();
        extra.insert("Microsoft.VSTS.Common.Priority".into(), json!(1));
        let item = NewWorkItem {
            work_item_type: "Task".into(),
            title: "Wire up login".into(),
            description: Some("details".into()),
            assigned_to: None,
            state: Some("New".into()),
            area_path: None,
            iteration_path: None,
            additional_fields: extra,
        };
        let patch = create_patch(&item);
        let paths: Vec<&str> = patch.iter().map(|op| op["path"].as_str().unwrap()).collect();
        assert_eq!(
            paths,
            vec![
                "/fields/System.Title",
                "/fields/System.Description",
                "/fields/System.State",
                "/fields/Microsoft.VSTS.Common.Priority",
            ]
        );
    }

    #[test]
    fn update_patch_maps_every_field() {
        let mut fields = Map::new();
        fields.insert("System.Title".into(), json!("Renamed"));
        fields.insert("System.State".into(), json!("Closed"));
        let patch = update_patch(&fields);
        assert_eq!(patch.len(), 2);
        assert!(patch.iter().all(|op| op["op"] == "add"));
    }

    #[test]
    fn bulk_entry_with_id_parses_as_update() {
        let entry = json!({ "id": 42, "fields": { "System.State": "Active" } });
        let update: WorkItemUpdate = parse_entry(&entry).unwrap();
        assert_eq!(update.id, 42);
        assert_eq!(update.fields["System.State"], "Active");
    }

    #[test]
    fn bulk_entry_without_title_is_rejected() {
        let entry = json!({ "workItemType": "Bug" });
        let result: Result<NewWorkItem, AzdoError> = parse_entry(&entry);
        assert!(matches!(result, Err(AzdoError::BadRequest(_))));
    }
}
