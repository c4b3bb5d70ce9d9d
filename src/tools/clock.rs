//! Current date/time tool.

use async_trait::async_trait;
use chrono::Local;

use super::registry::{ToolDefinition, ToolHandler, ToolOutput};

/// Timestamp format handed back to callers.
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Handler for the `get_current_datetime` tool.
pub struct CurrentDatetimeTool;

#[async_trait]
impl ToolHandler for CurrentDatetimeTool {
  fn definition(&self) -> ToolDefinition {
    ToolDefinition::new("get_current_datetime", "Get the current date and time")
  }

  async fn execute(&self, _input: serde_json::Value) -> ToolOutput {
    ToolOutput::success(Local::now().format(DATETIME_FORMAT).to_string())
  }
}
