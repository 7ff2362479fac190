use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A `{ id, url }` reference returned by a WIQL query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkItemRef {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Result of a flat WIQL query. The reference list is typed so it can be
/// sliced client-side; query metadata rides along untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkItemQueryResult {
    #[serde(default)]
    pub work_items: Vec<WorkItemRef>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn query_result_round_trips_metadata() {
        let payload = json!({
            "queryType": "flat",
            "asOf": "2024-05-01T00:00:00Z",
            "workItems": [
                {"id": 12, "url": "https://dev.azure.com/_apis/wit/workItems/12"},
                {"id": 15}
            ]
        });

        let result: WorkItemQueryResult = serde_json::from_value(payload.clone()).unwrap();
        assert_eq!(result.work_items.len(), 2);
        assert_eq!(result.work_items[0].id, 12);

        let back = serde_json::to_value(&result).unwrap();
        assert_eq!(back["queryType"], payload["queryType"]);
        assert_eq!(back["workItems"][1]["id"], 15);
    }
}
