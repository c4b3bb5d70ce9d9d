//! Jira tool handlers.
//!
//! Each handler wraps one [`JiraApi`] operation and renders its outcome as
//! text: pretty-printed JSON on success, a labeled message on failure. Errors
//! never propagate past `execute`.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use super::registry::{InputSchema, ToolDefinition, ToolHandler, ToolOutput};
use super::{parse_arguments, to_pretty_json};
use crate::jira::models::{IssueUpdate, NewIssue, UpdateOutcome};
use crate::jira::JiraApi;

/// Default page size for issue searches.
const DEFAULT_MAX_RESULTS: u32 = 50;
/// Issue type used when the caller does not name one.
const DEFAULT_ISSUE_TYPE: &str = "Task";

fn credentials_error(label: &str) -> ToolOutput {
  ToolOutput::error(format!(
    "{label}: Jira credentials are not configured (set JIRA_URL, JIRA_USERNAME, and JIRA_API_TOKEN)"
  ))
}

fn default_max_results() -> u32 {
  DEFAULT_MAX_RESULTS
}

fn default_issue_type() -> String {
  DEFAULT_ISSUE_TYPE.to_string()
}

/// Handler for the `jira_search_issues` tool.
pub struct SearchIssuesTool {
  api: Option<Arc<dyn JiraApi>>,
}

#[derive(Debug, Deserialize)]
struct SearchIssuesArgs {
  jql: String,
  #[serde(default = "default_max_results")]
  max_results: u32,
}

impl SearchIssuesTool {
  /// Create the handler over an optional Jira client.
  pub fn new(api: Option<Arc<dyn JiraApi>>) -> Self {
    Self { api }
  }
}

#[async_trait]
impl ToolHandler for SearchIssuesTool {
  fn definition(&self) -> ToolDefinition {
    ToolDefinition::new("jira_search_issues", "Search for Jira issues using JQL (Jira Query Language)").with_schema(
      InputSchema::new()
        .with_property(
          "jql",
          serde_json::json!({
            "type": "string",
            "description": "JQL query string (e.g., \"project = PROJ AND status = Open\")"
          }),
        )
        .with_property(
          "max_results",
          serde_json::json!({
            "type": "integer",
            "description": "Maximum number of results to return (default: 50)"
          }),
        )
        .with_required(&["jql"]),
    )
  }

  async fn execute(&self, input: serde_json::Value) -> ToolOutput {
    let label = "Error searching Jira";
    let Some(api) = &self.api else {
      return credentials_error(label);
    };
    let args: SearchIssuesArgs = match parse_arguments(&input) {
      Ok(args) => args,
      Err(msg) => return ToolOutput::error(format!("{label}: {msg}")),
    };

    match api.search_issues(&args.jql, args.max_results).await {
      Ok(results) => ToolOutput::success(to_pretty_json(&results)),
      Err(err) => ToolOutput::error(err.describe(label)),
    }
  }
}

/// Handler for the `jira_get_issue` tool.
pub struct GetIssueTool {
  api: Option<Arc<dyn JiraApi>>,
}

#[derive(Debug, Deserialize)]
struct GetIssueArgs {
  issue_key: String,
}

impl GetIssueTool {
  /// Create the handler over an optional Jira client.
  pub fn new(api: Option<Arc<dyn JiraApi>>) -> Self {
    Self { api }
  }
}

#[async_trait]
impl ToolHandler for GetIssueTool {
  fn definition(&self) -> ToolDefinition {
    ToolDefinition::new("jira_get_issue", "Get detailed information about a specific Jira issue").with_schema(
      InputSchema::new()
        .with_property(
          "issue_key",
          serde_json::json!({
            "type": "string",
            "description": "The issue key (e.g., \"PROJ-123\")"
          }),
        )
        .with_required(&["issue_key"]),
    )
  }

  async fn execute(&self, input: serde_json::Value) -> ToolOutput {
    let label = "Error getting Jira issue";
    let Some(api) = &self.api else {
      return credentials_error(label);
    };
    let args: GetIssueArgs = match parse_arguments(&input) {
      Ok(args) => args,
      Err(msg) => return ToolOutput::error(format!("{label}: {msg}")),
    };

    match api.get_issue(&args.issue_key).await {
      Ok(detail) => ToolOutput::success(to_pretty_json(&detail)),
      Err(err) => ToolOutput::error(err.describe(label)),
    }
  }
}

/// Handler for the `jira_create_issue` tool.
pub struct CreateIssueTool {
  api: Option<Arc<dyn JiraApi>>,
}

#[derive(Debug, Deserialize)]
struct CreateIssueArgs {
  project_key: String,
  summary: String,
  description: String,
  #[serde(default = "default_issue_type")]
  issue_type: String,
}

impl CreateIssueTool {
  /// Create the handler over an optional Jira client.
  pub fn new(api: Option<Arc<dyn JiraApi>>) -> Self {
    Self { api }
  }
}

#[async_trait]
impl ToolHandler for CreateIssueTool {
  fn definition(&self) -> ToolDefinition {
    ToolDefinition::new("jira_create_issue", "Create a new Jira issue").with_schema(
      InputSchema::new()
        .with_property(
          "project_key",
          serde_json::json!({"type": "string", "description": "The project key (e.g., \"PROJ\")"}),
        )
        .with_property(
          "summary",
          serde_json::json!({"type": "string", "description": "Issue summary/title"}),
        )
        .with_property(
          "description",
          serde_json::json!({"type": "string", "description": "Issue description"}),
        )
        .with_property(
          "issue_type",
          serde_json::json!({
            "type": "string",
            "description": "Type of issue (default: \"Task\", can be \"Bug\", \"Story\", etc.)"
          }),
        )
        .with_required(&["project_key", "summary", "description"]),
    )
  }

  async fn execute(&self, input: serde_json::Value) -> ToolOutput {
    let label = "Error creating Jira issue";
    let Some(api) = &self.api else {
      return credentials_error(label);
    };
    let args: CreateIssueArgs = match parse_arguments(&input) {
      Ok(args) => args,
      Err(msg) => return ToolOutput::error(format!("{label}: {msg}")),
    };

    let issue = NewIssue {
      project_key: args.project_key,
      summary: args.summary,
      description: args.description,
      issue_type: args.issue_type,
    };

    match api.create_issue(&issue).await {
      Ok(created) => ToolOutput::success(to_pretty_json(&created)),
      Err(err) => ToolOutput::error(err.describe(label)),
    }
  }
}

/// Handler for the `jira_update_issue` tool.
pub struct UpdateIssueTool {
  api: Option<Arc<dyn JiraApi>>,
}

#[derive(Debug, Deserialize)]
struct UpdateIssueArgs {
  issue_key: String,
  summary: Option<String>,
  description: Option<String>,
  status: Option<String>,
}

impl UpdateIssueTool {
  /// Create the handler over an optional Jira client.
  pub fn new(api: Option<Arc<dyn JiraApi>>) -> Self {
    Self { api }
  }
}

#[async_trait]
impl ToolHandler for UpdateIssueTool {
  fn definition(&self) -> ToolDefinition {
    ToolDefinition::new("jira_update_issue", "Update a Jira issue's fields and/or transition its status").with_schema(
      InputSchema::new()
        .with_property(
          "issue_key",
          serde_json::json!({"type": "string", "description": "The issue key (e.g., \"PROJ-123\")"}),
        )
        .with_property(
          "summary",
          serde_json::json!({"type": "string", "description": "New summary (optional)"}),
        )
        .with_property(
          "description",
          serde_json::json!({"type": "string", "description": "New description (optional)"}),
        )
        .with_property(
          "status",
          serde_json::json!({
            "type": "string",
            "description": "New status (optional, e.g., \"In Progress\", \"Done\")"
          }),
        )
        .with_required(&["issue_key"]),
    )
  }

  async fn execute(&self, input: serde_json::Value) -> ToolOutput {
    let label = "Error updating Jira issue";
    let Some(api) = &self.api else {
      return credentials_error(label);
    };
    let args: UpdateIssueArgs = match parse_arguments(&input) {
      Ok(args) => args,
      Err(msg) => return ToolOutput::error(format!("{label}: {msg}")),
    };

    let update = IssueUpdate {
      summary: args.summary,
      description: args.description,
      status: args.status,
    };

    match api.update_issue(&args.issue_key, &update).await {
      Ok(UpdateOutcome::Completed) => ToolOutput::success(to_pretty_json(&serde_json::json!({
        "success": true,
        "message": format!("Issue {} updated successfully", args.issue_key),
      }))),
      Ok(UpdateOutcome::TransitionNotFound { status }) => ToolOutput::success(format!(
        "Warning: Could not find transition to status '{status}'. Fields updated successfully."
      )),
      Err(err) => ToolOutput::error(err.describe(label)),
    }
  }
}

/// Handler for the `jira_add_comment` tool.
pub struct AddCommentTool {
  api: Option<Arc<dyn JiraApi>>,
}

#[derive(Debug, Deserialize)]
struct AddCommentArgs {
  issue_key: String,
  comment: String,
}

impl AddCommentTool {
  /// Create the handler over an optional Jira client.
  pub fn new(api: Option<Arc<dyn JiraApi>>) -> Self {
    Self { api }
  }
}

#[async_trait]
impl ToolHandler for AddCommentTool {
  fn definition(&self) -> ToolDefinition {
    ToolDefinition::new("jira_add_comment", "Add a comment to a Jira issue").with_schema(
      InputSchema::new()
        .with_property(
          "issue_key",
          serde_json::json!({"type": "string", "description": "The issue key (e.g., \"PROJ-123\")"}),
        )
        .with_property(
          "comment",
          serde_json::json!({"type": "string", "description": "The comment text"}),
        )
        .with_required(&["issue_key", "comment"]),
    )
  }

  async fn execute(&self, input: serde_json::Value) -> ToolOutput {
    let label = "Error adding comment";
    let Some(api) = &self.api else {
      return credentials_error(label);
    };
    let args: AddCommentArgs = match parse_arguments(&input) {
      Ok(args) => args,
      Err(msg) => return ToolOutput::error(format!("{label}: {msg}")),
    };

    match api.add_comment(&args.issue_key, &args.comment).await {
      Ok(()) => ToolOutput::success(to_pretty_json(&serde_json::json!({
        "success": true,
        "message": format!("Comment added to {}", args.issue_key),
      }))),
      Err(err) => ToolOutput::error(err.describe(label)),
    }
  }
}
