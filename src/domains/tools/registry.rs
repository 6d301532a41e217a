//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - Direct (in-process) dispatch for tool calls
//! - Tool metadata for listing

use rmcp::model::{CallToolResult, Tool};
use tracing::warn;

use super::ToolError;
use super::definitions::MyTool;

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
///
/// This struct provides a central point for:
/// - Listing all available tools
/// - Dispatching calls by tool name
#[derive(Debug, Clone, Default)]
pub struct ToolRegistry;

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new() -> Self {
        Self
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![MyTool::NAME]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for all available tools.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![MyTool::to_tool()]
    }

    /// Dispatch a call to the named tool.
    ///
    /// Argument validation failures come back as an error-flagged call
    /// result; only an unknown tool name is an `Err`.
    pub fn dispatch(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<CallToolResult, ToolError> {
        match name {
            MyTool::NAME => Ok(MyTool::handle(arguments)),
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    fn result_text(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(t) => &t.text,
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_registry_tool_names() {
        let registry = ToolRegistry::new();
        let names = registry.tool_names();
        assert_eq!(names.len(), 1);
        assert!(names.contains(&"mytool"));
    }

    #[test]
    fn test_registry_tool_models() {
        let tools = ToolRegistry::get_all_tools();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name, "mytool");
        assert!(tools[0].input_schema.get("properties").is_some());
    }

    #[test]
    fn test_registry_dispatch_success() {
        let registry = ToolRegistry::new();
        let result = registry
            .dispatch(
                "mytool",
                serde_json::json!({ "requiredParam": "foo", "optionalStr": "bar" }),
            )
            .unwrap();
        assert_eq!(result.is_error, Some(false));
        assert_eq!(result_text(&result), "requiredParam=foo, optionalStr=bar");
    }

    #[test]
    fn test_registry_dispatch_invalid_arguments_is_error_result() {
        let registry = ToolRegistry::new();
        let result = registry
            .dispatch("mytool", serde_json::json!({ "optionalStr": "bar" }))
            .unwrap();
        assert_eq!(result.is_error, Some(true));
    }

    #[test]
    fn test_registry_dispatch_unknown() {
        let registry = ToolRegistry::new();
        let err = registry
            .dispatch("unknown", serde_json::json!({}))
            .unwrap_err();
        assert!(matches!(err, ToolError::NotFound(_)));
        assert!(err.to_string().contains("unknown"));
    }
}
