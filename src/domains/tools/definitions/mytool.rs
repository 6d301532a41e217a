//! Example tool definition.
//!
//! A tool with one required and one optional string parameter, used to verify
//! how the derived input schema exposes the optional field as a nullable
//! union type and how argument validation treats absent, null, and wrong-typed
//! values.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute},
    model::{CallToolResult, Content, JsonObject, Tool},
};
use schemars::{JsonSchema, generate::SchemaSettings};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::domains::tools::{Nullable, ToolError};

/// Derive the JSON Schema for `T` with plain draft 2020-12 settings.
///
/// rmcp's `schema_for_type` runs an `AddNullable` transform that rewrites
/// the union schemars emits for `Option` fields into OpenAPI-style
/// `"nullable": true`. Generating here without that transform keeps the
/// literal `["string", "null"]` type union in the advertised schema.
fn schema_object<T: JsonSchema>() -> Arc<JsonObject> {
    let schema = SchemaSettings::draft2020_12()
        .into_generator()
        .into_root_schema_for::<T>();
    match schema.to_value() {
        serde_json::Value::Object(object) => Arc::new(object),
        _ => Arc::new(JsonObject::default()),
    }
}

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the example tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MyToolParams {
    /// A required string parameter
    pub required_param: String,

    /// An optional string parameter
    #[serde(default)]
    #[schemars(with = "Option<String>")]
    pub optional_str: Nullable<String>,
}

// ============================================================================
// Output Structure (JSON format for AI agents)
// ============================================================================

/// Result of an example tool call.
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
struct MyToolOutput {
    /// Output message
    message: String,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Example tool - echoes its parameters back as a message.
pub struct MyTool;

impl MyTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "mytool";

    /// Tool title shown to clients.
    pub const TITLE: &'static str = "Example Tool";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "A test tool with optional parameters.";

    /// Execute the tool logic on validated parameters.
    ///
    /// Pure and infallible: the message is built from `requiredParam`, with
    /// an `optionalStr` suffix only when the argument carried an actual
    /// value. An explicit `null` behaves exactly like an absent field.
    #[instrument(skip_all, fields(required_param = %params.required_param))]
    pub fn execute(params: &MyToolParams) -> CallToolResult {
        let mut message = format!("requiredParam={}", params.required_param);
        if let Some(value) = params.optional_str.as_value() {
            message.push_str(&format!(", optionalStr={}", value));
        }
        info!("mytool produced: '{}'", message);

        let output = MyToolOutput { message };

        // Return structured result
        match serde_json::to_value(&output) {
            Ok(structured) => CallToolResult {
                content: vec![Content::text(output.message)],
                structured_content: Some(structured),
                is_error: Some(false),
                meta: None,
            },
            Err(e) => {
                warn!("Failed to serialize structured content: {}", e);
                // Fallback to text-only
                CallToolResult::success(vec![Content::text(output.message)])
            }
        }
    }

    /// Deserialize raw JSON arguments into typed parameters.
    ///
    /// A missing `requiredParam` or a non-string, non-null `optionalStr`
    /// fails here, before the tool logic runs.
    pub fn parse_args(arguments: serde_json::Value) -> Result<MyToolParams, ToolError> {
        serde_json::from_value(arguments).map_err(|e| ToolError::invalid_arguments(e.to_string()))
    }

    /// Validate raw arguments and run the tool.
    ///
    /// Rejected arguments surface as an error-flagged call result carrying
    /// the violated constraint; the tool logic is never invoked for them.
    pub fn handle(arguments: serde_json::Value) -> CallToolResult {
        match Self::parse_args(arguments) {
            Ok(params) => Self::execute(&params),
            Err(e) => {
                warn!("mytool rejected arguments: {}", e);
                CallToolResult::error(vec![Content::text(e.to_string())])
            }
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_object::<MyToolParams>(),
            annotations: None,
            output_schema: Some(schema_object::<MyToolOutput>()),
            icons: None,
            meta: None,
            title: Some(Self::TITLE.to_string()),
        }
    }

    /// Create a ToolRoute for STDIO transport.
    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            async move { Ok(Self::handle(serde_json::Value::Object(args))) }.boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
