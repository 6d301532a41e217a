//! Transport service - orchestrates transport setup and lifecycle.
//!
//! This service provides a unified interface for starting the MCP server:
//! it creates the wire log when configured (a startup-fatal step, matching
//! the process contract) and hands the transport to the STDIO runner.

use std::sync::Arc;

use tracing::info;

use super::logging::WireLog;
use super::stdio::StdioTransport;
use super::{TransportConfig, TransportError, TransportResult};
use crate::core::McpServer;

/// Transport service - manages the transport layer for the MCP server.
pub struct TransportService {
    config: TransportConfig,
}

impl TransportService {
    /// Create a new transport service with the given configuration.
    pub fn new(config: TransportConfig) -> Self {
        Self { config }
    }

    /// Create a transport service from environment variables.
    pub fn from_env() -> Self {
        Self::new(TransportConfig::from_env())
    }

    /// Get the transport configuration.
    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    /// Log information about the configured transport.
    pub fn log_info(&self) {
        info!("Starting transport: {}", self.config.description());
    }

    /// Create the wire log file, if traffic logging is configured.
    ///
    /// Failure to create the file is fatal at startup.
    fn open_wire_log(&self) -> TransportResult<Option<Arc<WireLog>>> {
        let Some(path) = &self.config.wire_log else {
            return Ok(None);
        };

        let log = WireLog::create(path)
            .map_err(|e| TransportError::wire_log(path.display().to_string(), e))?;
        info!("MCP communication will be logged to {}", path.display());
        Ok(Some(Arc::new(log)))
    }

    /// Start the transport with the given MCP server.
    ///
    /// This method blocks until the transport is shut down.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        self.log_info();

        let wire_log = self.open_wire_log()?;
        StdioTransport::run(server, wire_log).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_open_wire_log_disabled() {
        let service = TransportService::new(TransportConfig { wire_log: None });
        let log = service.open_wire_log().unwrap();
        assert!(log.is_none());
    }

    #[test]
    fn test_open_wire_log_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wire.log");
        let service = TransportService::new(TransportConfig {
            wire_log: Some(path.clone()),
        });

        let log = service.open_wire_log().unwrap();
        assert!(log.is_some());
        assert!(path.exists());
    }

    #[test]
    fn test_open_wire_log_failure_is_error() {
        let service = TransportService::new(TransportConfig {
            wire_log: Some(PathBuf::from("/nonexistent-dir/wire.log")),
        });

        let err = service.open_wire_log().unwrap_err();
        assert!(matches!(err, TransportError::WireLogError { .. }));
        assert!(err.to_string().contains("/nonexistent-dir/wire.log"));
    }
}
