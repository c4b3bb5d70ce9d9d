//! Confluence tool handlers.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use super::registry::{InputSchema, ToolDefinition, ToolHandler, ToolOutput};
use super::{parse_arguments, to_pretty_json};
use crate::confluence::models::SpaceList;
use crate::confluence::ConfluenceApi;

/// Default page size for content searches.
const DEFAULT_LIMIT: u32 = 25;

fn credentials_error(label: &str) -> ToolOutput {
  ToolOutput::error(format!(
    "{label}: Confluence credentials are not configured (set CONFLUENCE_URL, CONFLUENCE_USERNAME, and \
     CONFLUENCE_API_TOKEN)"
  ))
}

fn default_limit() -> u32 {
  DEFAULT_LIMIT
}

/// Handler for the `confluence_search_content` tool.
pub struct SearchContentTool {
  api: Option<Arc<dyn ConfluenceApi>>,
}

#[derive(Debug, Deserialize)]
struct SearchContentArgs {
  query: String,
  #[serde(default = "default_limit")]
  limit: u32,
}

impl SearchContentTool {
  /// Create the handler over an optional Confluence client.
  pub fn new(api: Option<Arc<dyn ConfluenceApi>>) -> Self {
    Self { api }
  }
}

#[async_trait]
impl ToolHandler for SearchContentTool {
  fn definition(&self) -> ToolDefinition {
    ToolDefinition::new("confluence_search_content", "Search for Confluence content").with_schema(
      InputSchema::new()
        .with_property(
          "query",
          serde_json::json!({"type": "string", "description": "Search query string"}),
        )
        .with_property(
          "limit",
          serde_json::json!({
            "type": "integer",
            "description": "Maximum number of results (default: 25)"
          }),
        )
        .with_required(&["query"]),
    )
  }

  async fn execute(&self, input: serde_json::Value) -> ToolOutput {
    let label = "Error searching Confluence";
    let Some(api) = &self.api else {
      return credentials_error(label);
    };
    let args: SearchContentArgs = match parse_arguments(&input) {
      Ok(args) => args,
      Err(msg) => return ToolOutput::error(format!("{label}: {msg}")),
    };

    match api.search_content(&args.query, args.limit).await {
      Ok(results) => ToolOutput::success(to_pretty_json(&results)),
      Err(err) => ToolOutput::error(err.describe(label)),
    }
  }
}

/// Handler for the `confluence_get_page` tool.
pub struct GetPageTool {
  api: Option<Arc<dyn ConfluenceApi>>,
}

#[derive(Debug, Deserialize)]
struct GetPageArgs {
  page_id: String,
}

impl GetPageTool {
  /// Create the handler over an optional Confluence client.
  pub fn new(api: Option<Arc<dyn ConfluenceApi>>) -> Self {
    Self { api }
  }
}

#[async_trait]
impl ToolHandler for GetPageTool {
  fn definition(&self) -> ToolDefinition {
    ToolDefinition::new("confluence_get_page", "Get content from a Confluence page").with_schema(
      InputSchema::new()
        .with_property(
          "page_id",
          serde_json::json!({"type": "string", "description": "The page ID"}),
        )
        .with_required(&["page_id"]),
    )
  }

  async fn execute(&self, input: serde_json::Value) -> ToolOutput {
    let label = "Error getting Confluence page";
    let Some(api) = &self.api else {
      return credentials_error(label);
    };
    let args: GetPageArgs = match parse_arguments(&input) {
      Ok(args) => args,
      Err(msg) => return ToolOutput::error(format!("{label}: {msg}")),
    };

    match api.get_page(&args.page_id).await {
      Ok(page) => ToolOutput::success(to_pretty_json(&page)),
      Err(err) => ToolOutput::error(err.describe(label)),
    }
  }
}

/// Handler for the `confluence_list_spaces` tool.
pub struct ListSpacesTool {
  api: Option<Arc<dyn ConfluenceApi>>,
}

impl ListSpacesTool {
  /// Create the handler over an optional Confluence client.
  pub fn new(api: Option<Arc<dyn ConfluenceApi>>) -> Self {
    Self { api }
  }
}

#[async_trait]
impl ToolHandler for ListSpacesTool {
  fn definition(&self) -> ToolDefinition {
    ToolDefinition::new("confluence_list_spaces", "List all Confluence spaces")
  }

  async fn execute(&self, _input: serde_json::Value) -> ToolOutput {
    let label = "Error listing Confluence spaces";
    let Some(api) = &self.api else {
      return credentials_error(label);
    };

    match api.list_spaces().await {
      Ok(spaces) => ToolOutput::success(to_pretty_json(&SpaceList { spaces })),
      Err(err) => ToolOutput::error(err.describe(label)),
    }
  }
}
