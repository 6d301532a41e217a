//! Transport layer for the MCP server.
//!
//! The server speaks MCP over standard input/output, the default transport
//! for the protocol. The one configurable aspect is wire logging: when
//! enabled, every protocol line crossing the transport is mirrored to a log
//! file so a session can be inspected after the fact.
//!
//! - `stdio.rs` - the STDIO transport itself
//! - `logging.rs` - line-buffered tee wrappers feeding the wire log
//! - `service.rs` - transport lifecycle (wire log creation, run, shutdown)

mod config;
mod error;
mod logging;
mod service;
mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use logging::{LoggedReader, LoggedWriter, WireLog};
pub use service::TransportService;
