//! Error types and handling for the MCP server.
//!
//! This module defines a unified error type that can represent errors from
//! all domains, providing consistent error handling across the entire
//! application.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
///
/// This enum captures all possible error conditions that can occur during
/// server operation. None of them are fatal: they surface to MCP clients as
/// reported errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the tools domain.
    #[error("Tool error: {0}")]
    Tool(#[from] crate::domains::tools::ToolError),

    /// Error originating from the resources domain.
    #[error("Resource error: {0}")]
    Resource(#[from] crate::domains::resources::ResourceError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::resources::ResourceError;
    use crate::domains::tools::ToolError;

    #[test]
    fn test_tool_error_conversion() {
        let err: Error = ToolError::not_found("mytool2").into();
        assert!(err.to_string().contains("mytool2"));
    }

    #[test]
    fn test_resource_error_conversion() {
        let err: Error = ResourceError::not_found("cursor-mcp-test://missing").into();
        assert!(matches!(err, Error::Resource(_)));
    }
}
