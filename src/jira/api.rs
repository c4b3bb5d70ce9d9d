//! Trait definitions for interacting with Jira.

use async_trait::async_trait;

use super::models::{CreatedIssue, IssueDetail, IssueSearchResults, IssueUpdate, NewIssue, UpdateOutcome};
use crate::error::ApiError;

/// Trait for Jira API operations (enables testing with fake implementations).
#[async_trait]
pub trait JiraApi: Send + Sync {
  /// Search for issues with a JQL query.
  ///
  /// # Arguments
  /// * `jql` - JQL filter expression (e.g. `project = PROJ AND status = Open`).
  /// * `max_results` - Page-size cap for the request.
  ///
  /// # Returns
  /// The projected issues together with a count derived from the list itself.
  async fn search_issues(&self, jql: &str, max_results: u32) -> Result<IssueSearchResults, ApiError>;

  /// Fetch a single issue by key.
  ///
  /// # Arguments
  /// * `issue_key` - Issue key such as `PROJ-123`.
  async fn get_issue(&self, issue_key: &str) -> Result<IssueDetail, ApiError>;

  /// Create a new issue.
  ///
  /// # Returns
  /// The new issue's key, id, and browse URL.
  async fn create_issue(&self, issue: &NewIssue) -> Result<CreatedIssue, ApiError>;

  /// Update an issue's fields and optionally transition its status.
  ///
  /// Field updates and the status transition are separate requests: a field
  /// update failure propagates before any transition is attempted, and a
  /// requested status with no matching transition degrades to
  /// [`UpdateOutcome::TransitionNotFound`] rather than an error.
  async fn update_issue(&self, issue_key: &str, update: &IssueUpdate) -> Result<UpdateOutcome, ApiError>;

  /// Append a comment to an issue.
  ///
  /// # Arguments
  /// * `issue_key` - Issue key such as `PROJ-123`.
  /// * `comment` - Free text; wrapped into a structured document on the wire.
  async fn add_comment(&self, issue_key: &str, comment: &str) -> Result<(), ApiError>;
}
