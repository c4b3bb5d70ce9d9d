//! Tool system exposing the Atlassian adapters (and a few local utilities)
//! to an orchestration layer.
//!
//! Tools are registered explicitly: [`ToolRegistry::from_config`] wires the
//! REST clients from an [`AtlassianConfig`] and registers every handler under
//! its declared name. A product left unconfigured still registers its tools;
//! they return a labeled credential error at call time, matching how the
//! adapter treats partial configuration everywhere else.

pub mod calc;
pub mod clock;
pub mod confluence;
pub mod fs;
pub mod jira;
pub mod registry;

use std::sync::Arc;

use anyhow::Result;
use serde::Deserialize;

pub use registry::{InputSchema, ToolDefinition, ToolHandler, ToolOutput, ToolRegistry};

use crate::config::AtlassianConfig;
use crate::confluence::{ConfluenceApi, ConfluenceClient};
use crate::jira::{JiraApi, JiraClient};

/// Default HTTP timeout for the REST clients, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Parse JSON arguments into a typed struct.
///
/// # Returns
/// The typed arguments, or a message describing which field failed to parse.
pub fn parse_arguments<T>(input: &serde_json::Value) -> Result<T, String>
where
  T: for<'de> Deserialize<'de>,
{
  serde_json::from_value(input.clone()).map_err(|err| format!("invalid arguments: {err}"))
}

/// Serialize a result payload as pretty-printed JSON.
pub(crate) fn to_pretty_json<T: serde::Serialize>(value: &T) -> String {
  serde_json::to_string_pretty(value).unwrap_or_else(|err| format!("Error serializing result: {err}"))
}

impl ToolRegistry {
  /// Build the default registry from Atlassian credentials.
  ///
  /// # Arguments
  /// * `config` - Credentials for Jira and/or Confluence; either may be
  ///   absent.
  /// * `timeout_secs` - HTTP timeout applied to both REST clients.
  ///
  /// # Errors
  /// Returns an error if an HTTP client cannot be constructed.
  pub fn from_config(config: &AtlassianConfig, timeout_secs: u64) -> Result<Self> {
    let jira: Option<Arc<dyn JiraApi>> = match &config.jira {
      Some(product) => Some(Arc::new(JiraClient::new(product, timeout_secs)?)),
      None => None,
    };
    let confluence: Option<Arc<dyn ConfluenceApi>> = match &config.confluence {
      Some(product) => Some(Arc::new(ConfluenceClient::new(product, timeout_secs)?)),
      None => None,
    };

    Ok(Self::with_clients(jira, confluence))
  }

  /// Build the default registry from pre-constructed API clients.
  ///
  /// This is the seam used by tests to substitute fake implementations.
  pub fn with_clients(jira: Option<Arc<dyn JiraApi>>, confluence: Option<Arc<dyn ConfluenceApi>>) -> Self {
    let mut registry = Self::new();

    registry.register(jira::SearchIssuesTool::new(jira.clone()));
    registry.register(jira::GetIssueTool::new(jira.clone()));
    registry.register(jira::CreateIssueTool::new(jira.clone()));
    registry.register(jira::UpdateIssueTool::new(jira.clone()));
    registry.register(jira::AddCommentTool::new(jira));

    registry.register(confluence::SearchContentTool::new(confluence.clone()));
    registry.register(confluence::GetPageTool::new(confluence.clone()));
    registry.register(confluence::ListSpacesTool::new(confluence));

    registry.register(calc::CalculateTool);
    registry.register(clock::CurrentDatetimeTool);
    registry.register(fs::ReadFileTool);
    registry.register(fs::WriteFileTool);
    registry.register(fs::ListFilesTool);

    registry
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_registry_contains_every_tool() {
    let registry = ToolRegistry::with_clients(None, None);
    for name in [
      "jira_search_issues",
      "jira_get_issue",
      "jira_create_issue",
      "jira_update_issue",
      "jira_add_comment",
      "confluence_search_content",
      "confluence_get_page",
      "confluence_list_spaces",
      "calculate",
      "get_current_datetime",
      "read_file",
      "write_file",
      "list_files",
    ] {
      assert!(registry.contains(name), "missing tool {name}");
    }
  }
}
