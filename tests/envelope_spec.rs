//! Response envelope integration tests.
//!
//! Every tool renders its outcome through `ToolResponse`: a one-line summary,
//! the payload as a second text block, and the payload again as structured
//! content. These tests assert on the serialized wire shape.

use azdo_mcp::mcp::ToolResponse;
use rmcp::model::CallToolResult;
use serde_json::{json, Value};

fn render(response: ToolResponse) -> Value {
    let result: CallToolResult = response.into();
    serde_json::to_value(result).expect("CallToolResult should serialize")
}

fn text_block(rendered: &Value, index: usize) -> &str {
    rendered["content"][index]["text"]
        .as_str()
        .expect("content block should be text")
}

#[test]
fn success_renders_summary_then_pretty_json() {
    let rendered = render(ToolResponse::success(
        json!({ "id": 7, "fields": { "System.Title": "Crash on login" } }),
        "Work item 7 details",
    ));

    assert_eq!(text_block(&rendered, 0), "Work item 7 details");
    let body: Value = serde_json::from_str(text_block(&rendered, 1)).unwrap();
    assert_eq!(body["id"], 7);
    assert!(text_block(&rendered, 1).contains('\n'), "body should be pretty-printed");
    assert_eq!(rendered["structuredContent"]["id"], 7);
    assert_eq!(rendered["isError"], false);
}

#[test]
fn string_payload_passes_through_unquoted() {
    let rendered = render(ToolResponse::success("plain text result", "Done"));

    assert_eq!(text_block(&rendered, 1), "plain text result");
    assert_eq!(rendered["structuredContent"], "plain text result");
}

#[test]
fn absent_payload_renders_as_null() {
    let rendered = render(ToolResponse::success(Option::<Value>::None, "Nothing found"));

    assert_eq!(text_block(&rendered, 1), "null");
    assert_eq!(rendered["structuredContent"], Value::Null);
}

#[test]
fn empty_summary_falls_back_to_request_successful() {
    let rendered = render(ToolResponse::success(json!([]), ""));

    assert_eq!(text_block(&rendered, 0), "Request successful");
}

#[test]
fn failure_prefixes_the_summary_and_sets_the_flag() {
    let rendered = render(ToolResponse::failure("connection refused"));

    assert_eq!(text_block(&rendered, 0), "Error: connection refused");
    assert_eq!(rendered["isError"], true);
    let body: Value = serde_json::from_str(text_block(&rendered, 1)).unwrap();
    assert_eq!(body, json!({ "error": "connection refused" }));
    assert_eq!(rendered["structuredContent"]["error"], "connection refused");
}
