//! README resource definition.

use super::ResourceDefinition;

/// Static document describing the server's purpose.
pub struct ReadmeResource;

impl ResourceDefinition for ReadmeResource {
    const URI: &'static str = "cursor-mcp-test://readme";
    const NAME: &'static str = "README";
    const DESCRIPTION: &'static str = "Information about this test server";
    const MIME_TYPE: &'static str = "text/plain";

    fn text() -> String {
        README.to_string()
    }
}

const README: &str = r"Cursor MCP Test Server
======================
This is a minimal MCP server for testing optional parameters";
