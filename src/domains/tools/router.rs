//! Tool Router - builds the rmcp ToolRouter from registry.
//!
//! This module builds the ToolRouter for STDIO transport by delegating
//! to the tool definitions themselves. Each tool knows how to create its own route.

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::MyTool;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>() -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new().with_route(MyTool::create_route())
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;

    struct TestServer {}

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router();
        let tools = router.list_all();
        assert_eq!(tools.len(), 1);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"mytool"));
    }

    #[test]
    fn test_router_exposes_nullable_union_schema() {
        // The listed tool must carry the derived schema, including the
        // two-member type union for the optional parameter.
        let router: ToolRouter<TestServer> = build_tool_router();
        let tools = router.list_all();
        let tool = tools.iter().find(|t| t.name == "mytool").unwrap();

        let types = tool
            .input_schema
            .get("properties")
            .and_then(|v| v.get("optionalStr"))
            .and_then(|v| v.get("type"))
            .and_then(|v| v.as_array())
            .expect("optionalStr type should be a union");
        assert_eq!(types.len(), 2);
        assert!(types.contains(&serde_json::json!("null")));
        assert!(types.contains(&serde_json::json!("string")));
    }

    #[test]
    fn test_registry_matches_router() {
        // Ensure registry and router have the same tools
        let registry = ToolRegistry::new();
        let registry_names = registry.tool_names();

        let router: ToolRouter<TestServer> = build_tool_router();
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
