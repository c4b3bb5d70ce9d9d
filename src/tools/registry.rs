//! Tool registry and handler trait.
//!
//! Tools are registered explicitly in a name-to-handler map built once at
//! startup, rather than discovered by reflection. An orchestration layer
//! (an LLM agent runtime, the CLI) asks the registry for tool definitions and
//! dispatches calls by name with JSON arguments.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

/// JSON-schema object describing a tool's input.
#[derive(Debug, Clone, Serialize)]
pub struct InputSchema {
  #[serde(rename = "type")]
  schema_type: &'static str,
  properties: serde_json::Map<String, serde_json::Value>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  required: Vec<String>,
}

impl InputSchema {
  /// Create an empty object schema.
  pub fn new() -> Self {
    Self {
      schema_type: "object",
      properties: serde_json::Map::new(),
      required: Vec::new(),
    }
  }

  /// Add a named property with its JSON-schema description.
  pub fn with_property(mut self, name: &str, schema: serde_json::Value) -> Self {
    self.properties.insert(name.to_string(), schema);
    self
  }

  /// Mark properties as required.
  pub fn with_required(mut self, names: &[&str]) -> Self {
    self.required = names.iter().map(|n| n.to_string()).collect();
    self
  }
}

impl Default for InputSchema {
  fn default() -> Self {
    Self::new()
  }
}

/// A tool's name, description, and declared input schema.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDefinition {
  /// Unique tool name used for dispatch.
  pub name: String,
  /// Human/model-readable description of what the tool does.
  pub description: String,
  /// Declared input schema.
  pub input_schema: InputSchema,
}

impl ToolDefinition {
  /// Create a definition with an empty input schema.
  pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      description: description.into(),
      input_schema: InputSchema::new(),
    }
  }

  /// Attach an input schema.
  pub fn with_schema(mut self, schema: InputSchema) -> Self {
    self.input_schema = schema;
    self
  }
}

/// Output from executing a tool.
///
/// Failures are carried as strings, never as errors: every operational
/// failure is rendered into a labeled message at the tool boundary so the
/// caller (which may be a language model) always receives displayable text.
#[derive(Debug, Clone)]
pub struct ToolOutput {
  /// The result text handed back to the caller.
  pub content: String,
  /// Whether the call succeeded.
  pub success: bool,
}

impl ToolOutput {
  /// Create a successful output.
  pub fn success(content: impl Into<String>) -> Self {
    Self {
      content: content.into(),
      success: true,
    }
  }

  /// Create a failed output.
  pub fn error(content: impl Into<String>) -> Self {
    Self {
      content: content.into(),
      success: false,
    }
  }
}

/// Trait that all tool handlers implement.
#[async_trait]
pub trait ToolHandler: Send + Sync {
  /// Get the tool definition (name, description, input schema).
  fn definition(&self) -> ToolDefinition;

  /// Execute the tool with the given JSON arguments.
  async fn execute(&self, input: serde_json::Value) -> ToolOutput;
}

/// Registry of available tools, mapping names to handlers.
pub struct ToolRegistry {
  handlers: HashMap<String, Arc<dyn ToolHandler>>,
}

impl ToolRegistry {
  /// Create an empty registry.
  pub fn new() -> Self {
    Self {
      handlers: HashMap::new(),
    }
  }

  /// Register a handler under its declared name.
  pub fn register(&mut self, handler: impl ToolHandler + 'static) {
    let name = handler.definition().name;
    self.handlers.insert(name, Arc::new(handler));
  }

  /// List the definitions of every registered tool, sorted by name.
  pub fn definitions(&self) -> Vec<ToolDefinition> {
    let mut definitions: Vec<ToolDefinition> = self.handlers.values().map(|h| h.definition()).collect();
    definitions.sort_by(|a, b| a.name.cmp(&b.name));
    definitions
  }

  /// Whether a tool with this name is registered.
  pub fn contains(&self, name: &str) -> bool {
    self.handlers.contains_key(name)
  }

  /// Dispatch a call to the named tool.
  ///
  /// # Errors
  /// Returns an error only when no tool with this name exists; operational
  /// failures inside a tool surface as an unsuccessful [`ToolOutput`].
  pub async fn dispatch(&self, name: &str, input: serde_json::Value) -> Result<ToolOutput> {
    let handler = self
      .handlers
      .get(name)
      .ok_or_else(|| anyhow!("unknown tool: {name}"))?;

    debug!(tool = name, "dispatching tool call");
    Ok(handler.execute(input).await)
  }
}

impl Default for ToolRegistry {
  fn default() -> Self {
    Self::new()
  }
}
