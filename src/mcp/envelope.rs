//! Response envelope shared by every tool.

use rmcp::model::{CallToolResult, Content};
use serde::Serialize;
use serde_json::{json, Value};

/// Outcome of a tool call, rendered to the wire as two content blocks: a
/// one-line summary, then the payload as pretty JSON (strings pass through
/// unchanged, absent payloads render as `null`). The payload also rides
/// along as structured content.
#[derive(Debug, Clone)]
pub struct ToolResponse {
    data: Value,
    message: String,
    is_error: bool,
}

impl ToolResponse {
    /// Successful outcome carrying `data` and a summary line. An empty
    /// summary falls back to "Request successful".
    pub fn success(data: impl Serialize, message: impl Into<String>) -> Self {
        match serde_json::to_value(data) {
            Ok(data) => Self {
                data,
                message: message.into(),
                is_error: false,
            },
            Err(e) => Self::failure(e),
        }
    }

    /// Failed outcome. The payload becomes `{"error": <message>}` and the
    /// summary line gets an `Error: ` prefix.
    pub fn failure(error: impl std::fmt::Display) -> Self {
        let message = error.to_string();
        tracing::error!("tool call failed: {}", message);
        Self {
            data: json!({ "error": &message }),
            message: format!("Error: {}", message),
            is_error: true,
        }
    }
}

impl From<ToolResponse> for CallToolResult {
    fn from(response: ToolResponse) -> Self {
        let summary = if response.message.is_empty() {
            let fallback = if response.is_error {
                "Error occurred"
            } else {
                "Request successful"
            };
            fallback.to_string()
        } else {
            response.message
        };
        let body = match &response.data {
            Value::String(text) => text.clone(),
            other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
        };
        CallToolResult {
            content: vec![Content::text(summary), Content::text(body)],
            structured_content: Some(response.data),
            is_error: Some(response.is_error),
            meta: None,
        }
    }
}
