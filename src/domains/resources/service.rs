//! Resource service implementation.
//!
//! The ResourceService manages resource discovery and access.
//! It maintains a registry of available resources and handles read requests.
//!
//! Resources are defined in `definitions/` and registered via `registry.rs`.
//! Adding a new resource does NOT require modifying this file.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents};
use std::collections::HashMap;
use tracing::info;

use super::error::ResourceError;
use super::registry::get_all_resources;

/// Service for managing and accessing resources.
///
/// This service maintains a registry of available resources and handles
/// resource listing and reading operations.
pub struct ResourceService {
    /// Registry of available resources.
    /// Key: resource URI, Value: resource metadata and content
    resources: HashMap<String, ResourceEntry>,
}

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// The static text content of this resource.
    pub text: String,
}

impl ResourceService {
    /// Create a new ResourceService.
    pub fn new() -> Self {
        info!("Initializing ResourceService");

        let mut service = Self {
            resources: HashMap::new(),
        };

        // Register all resources from registry
        service.register_from_registry();

        service
    }

    /// Register all resources from the registry.
    fn register_from_registry(&mut self) {
        info!("Registering resources from registry");
        for entry in get_all_resources() {
            self.register_resource(entry);
        }
    }

    /// Register a resource.
    pub fn register_resource(&mut self, entry: ResourceEntry) {
        info!("Registering resource: {}", entry.resource.raw.uri);
        self.resources
            .insert(entry.resource.raw.uri.to_string(), entry);
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resources
            .values()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// Read a resource by URI.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let entry = self
            .resources
            .get(uri)
            .ok_or_else(|| ResourceError::not_found(uri))?;

        let content = ResourceContents::TextResourceContents {
            uri: uri.to_string(),
            mime_type: entry.resource.raw.mime_type.clone(),
            text: entry.text.clone(),
            meta: None,
        };

        Ok(ReadResourceResult {
            contents: vec![content],
        })
    }
}

impl Default for ResourceService {
    fn default() -> Self {
        Self::new()
    }
}
