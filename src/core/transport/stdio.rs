//! STDIO transport implementation.
//!
//! Standard input/output transport for MCP - the default and recommended
//! mode. When a wire log is supplied, both directions of the stream are
//! wrapped in the tee adapters from `logging.rs` so every protocol line is
//! mirrored to the log file.

use std::sync::Arc;

use rmcp::ServiceExt;
use tracing::info;

use super::logging::{LoggedReader, LoggedWriter, WireLog};
use super::{TransportError, TransportResult};
use crate::core::McpServer;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Run the STDIO transport, blocking until the client closes the stream.
    pub async fn run(server: McpServer, wire_log: Option<Arc<WireLog>>) -> TransportResult<()> {
        info!("Ready - communicating via stdin/stdout");

        let service = match wire_log {
            Some(log) => {
                let stdin = LoggedReader::new(tokio::io::stdin(), log.clone());
                let stdout = LoggedWriter::new(tokio::io::stdout(), log);
                server
                    .serve((stdin, stdout))
                    .await
                    .map_err(|e| TransportError::init(e.to_string()))?
            }
            None => server
                .serve(rmcp::transport::stdio())
                .await
                .map_err(|e| TransportError::init(e.to_string()))?,
        };

        service
            .waiting()
            .await
            .map_err(|e| TransportError::ServiceError(e.to_string()))?;

        info!("STDIO transport finished");
        Ok(())
    }
}
