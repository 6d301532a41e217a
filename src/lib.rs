//! Cursor MCP Test Server Library
//!
//! This crate provides a minimal Model Context Protocol (MCP) server used to
//! verify how optional tool parameters surface as nullable union types in
//! auto-generated JSON Schema, and how argument validation treats absent,
//! null, and wrong-typed values.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling, and the main server
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: MCP tools that can be executed by clients
//!   - **resources**: Data resources that can be read by clients
//!
//! # Example
//!
//! ```rust,no_run
//! use cursor_mcp_test::{core::McpServer, core::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
