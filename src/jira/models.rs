//! Data transfer objects for the Jira Cloud v3 REST API.
//!
//! Wire types (deserialized straight from responses) live alongside the flat
//! projections handed back to callers. Optional relations on the wire are
//! flattened to fixed sentinel strings so callers never see a null: an absent
//! assignee becomes `"Unassigned"`, an absent priority `"None"`, and an
//! absent reporter `"Unknown"`.

use serde::{Deserialize, Serialize};

use crate::document::DocumentBody;

/// Sentinel used when an issue has no assignee.
pub const UNASSIGNED: &str = "Unassigned";
/// Sentinel used when an issue has no priority.
pub const NO_PRIORITY: &str = "None";
/// Sentinel used when an issue has no reporter.
pub const UNKNOWN_REPORTER: &str = "Unknown";
/// Sentinel used when an issue has no description.
pub const NO_DESCRIPTION: &str = "No description";

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// Response page from the issue search endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
  /// Issues included in this page of results.
  #[serde(default)]
  pub issues: Vec<Issue>,
}

/// A single issue resource.
#[derive(Debug, Clone, Deserialize)]
pub struct Issue {
  /// Issue key such as `PROJ-123`.
  pub key: String,
  /// Field container holding everything else.
  pub fields: IssueFields,
}

/// Fields of an issue resource, limited to what the adapter projects.
#[derive(Debug, Clone, Deserialize)]
pub struct IssueFields {
  /// One-line summary.
  pub summary: String,
  /// Current workflow status.
  pub status: NamedResource,
  /// Assigned user, absent when unassigned.
  pub assignee: Option<UserResource>,
  /// Priority, absent when the project has none configured.
  pub priority: Option<NamedResource>,
  /// Reporting user, absent on some imported issues.
  pub reporter: Option<UserResource>,
  /// Issue type, only expanded on full issue reads.
  #[serde(rename = "issuetype")]
  pub issue_type: Option<NamedResource>,
  /// Structured-document description, only expanded on full issue reads.
  pub description: Option<DocumentBody>,
  /// Creation timestamp as reported by Jira.
  pub created: String,
  /// Last-update timestamp as reported by Jira.
  pub updated: String,
}

/// A resource referenced only by its display name (status, priority, type).
#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
  /// Display name of the resource.
  pub name: String,
}

/// A user reference on an issue.
#[derive(Debug, Clone, Deserialize)]
pub struct UserResource {
  /// Display name shown in the Jira UI.
  #[serde(rename = "displayName")]
  pub display_name: String,
}

/// Response from the issue-create endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateResponse {
  /// Numeric identifier of the new issue.
  pub id: String,
  /// Key of the new issue.
  pub key: String,
}

/// Response from the transitions listing endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TransitionsResponse {
  /// Transitions currently available from the issue's status.
  #[serde(default)]
  pub transitions: Vec<Transition>,
}

/// A workflow transition available on an issue.
#[derive(Debug, Clone, Deserialize)]
pub struct Transition {
  /// Identifier used to invoke the transition.
  pub id: String,
  /// Status the transition leads to.
  pub to: NamedResource,
}

/// Find the first transition whose target status matches `status`
/// case-insensitively.
///
/// Only the immediate transition list is consulted; there is no search
/// through intermediate statuses.
pub fn find_transition<'a>(transitions: &'a [Transition], status: &str) -> Option<&'a Transition> {
  transitions.iter().find(|t| t.to.name.eq_ignore_ascii_case(status))
}

// ---------------------------------------------------------------------------
// Projections
// ---------------------------------------------------------------------------

/// Flat projection of an issue from a search result page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueSummary {
  /// Issue key such as `PROJ-123`.
  pub key: String,
  /// One-line summary.
  pub summary: String,
  /// Current status name.
  pub status: String,
  /// Assignee display name, or `"Unassigned"`.
  pub assignee: String,
  /// Priority name, or `"None"`.
  pub priority: String,
  /// Creation timestamp.
  pub created: String,
  /// Last-update timestamp.
  pub updated: String,
}

impl From<Issue> for IssueSummary {
  fn from(issue: Issue) -> Self {
    let fields = issue.fields;
    Self {
      key: issue.key,
      summary: fields.summary,
      status: fields.status.name,
      assignee: fields.assignee.map_or_else(|| UNASSIGNED.to_string(), |u| u.display_name),
      priority: fields.priority.map_or_else(|| NO_PRIORITY.to_string(), |p| p.name),
      created: fields.created,
      updated: fields.updated,
    }
  }
}

/// Search results with the count pinned to the projected list.
///
/// The reported `total` is always the length of `issues`; the adapter never
/// echoes an upstream total that disagrees with the page it actually built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueSearchResults {
  /// Number of issues in `issues`.
  pub total: usize,
  /// Projected issues.
  pub issues: Vec<IssueSummary>,
}

impl IssueSearchResults {
  /// Build results from a projected list, deriving the count from it.
  pub fn from_issues(issues: Vec<IssueSummary>) -> Self {
    Self {
      total: issues.len(),
      issues,
    }
  }
}

/// Full projection of a single issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueDetail {
  /// Issue key such as `PROJ-123`.
  pub key: String,
  /// One-line summary.
  pub summary: String,
  /// Plain text extracted from the structured description, or
  /// `"No description"`.
  pub description: String,
  /// Current status name.
  pub status: String,
  /// Assignee display name, or `"Unassigned"`.
  pub assignee: String,
  /// Reporter display name, or `"Unknown"`.
  pub reporter: String,
  /// Priority name, or `"None"`.
  pub priority: String,
  /// Creation timestamp.
  pub created: String,
  /// Last-update timestamp.
  pub updated: String,
  /// Issue type name (e.g. `"Task"`, `"Bug"`).
  pub issue_type: String,
}

impl From<Issue> for IssueDetail {
  fn from(issue: Issue) -> Self {
    let fields = issue.fields;
    Self {
      key: issue.key,
      summary: fields.summary,
      description: fields
        .description
        .map_or_else(|| NO_DESCRIPTION.to_string(), |d| d.plain_text()),
      status: fields.status.name,
      assignee: fields.assignee.map_or_else(|| UNASSIGNED.to_string(), |u| u.display_name),
      reporter: fields
        .reporter
        .map_or_else(|| UNKNOWN_REPORTER.to_string(), |u| u.display_name),
      priority: fields.priority.map_or_else(|| NO_PRIORITY.to_string(), |p| p.name),
      created: fields.created,
      updated: fields.updated,
      issue_type: fields.issue_type.map_or_else(String::new, |t| t.name),
    }
  }
}

/// Request to create a new issue.
#[derive(Debug, Clone)]
pub struct NewIssue {
  /// Project key (e.g. `"PROJ"`).
  pub project_key: String,
  /// Issue summary/title.
  pub summary: String,
  /// Free-text description; wrapped into a structured document on the wire.
  pub description: String,
  /// Issue type name; `"Task"` when unspecified.
  pub issue_type: String,
}

/// Result of a successful issue creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedIssue {
  /// Always `true`; kept in the payload for orchestrator convenience.
  pub success: bool,
  /// Key of the new issue.
  pub key: String,
  /// Numeric identifier of the new issue.
  pub id: String,
  /// Browse URL of the new issue.
  pub url: String,
}

/// Requested changes for an issue update. All fields optional; an update with
/// nothing set performs no network calls.
#[derive(Debug, Clone, Default)]
pub struct IssueUpdate {
  /// Replacement summary.
  pub summary: Option<String>,
  /// Replacement description (free text, wrapped on the wire).
  pub description: Option<String>,
  /// Target status name for a workflow transition.
  pub status: Option<String>,
}

impl IssueUpdate {
  /// Whether any plain field (summary/description) is being changed.
  pub fn has_field_changes(&self) -> bool {
    self.summary.is_some() || self.description.is_some()
  }
}

/// Outcome of an issue update.
///
/// A missing transition is deliberately not an error: field updates have
/// already been applied by the time the transition lookup runs, so the caller
/// gets a warning naming the status instead of a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
  /// Every requested change was applied.
  Completed,
  /// Fields were updated, but no available transition leads to the requested
  /// status.
  TransitionNotFound {
    /// The status name that had no matching transition.
    status: String,
  },
}
