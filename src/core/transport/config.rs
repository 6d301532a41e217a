//! Transport configuration types.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Transport configuration options.
///
/// The server always speaks MCP over stdin/stdout; what varies is whether
/// the raw traffic is mirrored to a wire log file on the side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransportConfig {
    /// Path of the wire log file, or `None` to disable traffic logging.
    pub wire_log: Option<PathBuf>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            wire_log: Some(default_wire_log_path()),
        }
    }
}

fn default_wire_log_path() -> PathBuf {
    std::env::temp_dir().join("cursor-mcp-test.log")
}

impl TransportConfig {
    /// Load transport config from environment variables.
    ///
    /// `MCP_WIRE_LOG` overrides the wire log path; the values `off`, `false`
    /// and `0` disable traffic logging entirely.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(value) = std::env::var("MCP_WIRE_LOG") {
            config.wire_log = match value.to_lowercase().as_str() {
                "off" | "false" | "0" | "" => None,
                _ => Some(PathBuf::from(value)),
            };
        }

        config
    }

    /// Get a description of this transport for logging.
    pub fn description(&self) -> String {
        match &self.wire_log {
            Some(path) => format!(
                "STDIO (standard MCP mode), traffic logged to {}",
                path.display()
            ),
            None => "STDIO (standard MCP mode)".to_string(),
        }
    }
}
