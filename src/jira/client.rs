//! HTTP client implementation for talking to the Jira Cloud REST API.

use std::time::Duration;

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::api::JiraApi;
use super::models::{
  CreateResponse, CreatedIssue, Issue, IssueDetail, IssueSearchResults, IssueSummary, IssueUpdate, NewIssue,
  SearchResponse, TransitionsResponse, UpdateOutcome,
};
use crate::config::ProductConfig;
use crate::document::DocumentBody;
use crate::error::ApiError;

/// Fields requested for search projections.
const SEARCH_FIELDS: &str = "summary,status,assignee,priority,created,updated";

/// Jira API client.
#[derive(Clone)]
pub struct JiraClient {
  base_url: String,
  username: String,
  token: String,
  client: reqwest::Client,
}

impl JiraClient {
  /// Create a new Jira client.
  ///
  /// # Arguments
  /// * `config` - Base URL, username, and API token for the instance.
  /// * `timeout_secs` - Request timeout in seconds.
  ///
  /// # Errors
  /// Returns an error if the underlying `reqwest::Client` cannot be built.
  pub fn new(config: &ProductConfig, timeout_secs: u64) -> Result<Self, ApiError> {
    let client = reqwest::Client::builder()
      .timeout(Duration::from_secs(timeout_secs))
      .user_agent(format!(
        "atlassian-tools/{} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("TARGET")
      ))
      .build()?;

    Ok(Self {
      base_url: config.base_url.clone(),
      username: config.username.clone(),
      token: config.api_token.clone(),
      client,
    })
  }

  /// Get the authorization header value (Basic auth).
  fn auth_header(&self) -> String {
    let credentials = format!("{}:{}", self.username, self.token);
    format!("Basic {}", BASE64.encode(credentials.as_bytes()))
  }

  /// Send a request with auth headers attached, returning the decoded body.
  ///
  /// Non-2xx responses become [`ApiError::Http`] with the raw body preserved;
  /// decode failures name the offending field via serde's error message.
  async fn execute<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<T, ApiError> {
    let response = request
      .header("Authorization", self.auth_header())
      .header("Content-Type", "application/json")
      .header("Accept", "application/json")
      .send()
      .await?;

    let status = response.status();
    if !status.is_success() {
      let body = response.text().await.unwrap_or_else(|_| String::from("(no error details)"));
      return Err(ApiError::Http {
        status: status.as_u16(),
        body,
      });
    }

    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|err| ApiError::Decode(err.to_string()))
  }

  /// As [`execute`](Self::execute), but for endpoints whose success body is
  /// empty or irrelevant (PUT field updates, transition POSTs).
  async fn execute_no_content(&self, request: reqwest::RequestBuilder) -> Result<(), ApiError> {
    let response = request
      .header("Authorization", self.auth_header())
      .header("Content-Type", "application/json")
      .send()
      .await?;

    let status = response.status();
    if !status.is_success() {
      let body = response.text().await.unwrap_or_else(|_| String::from("(no error details)"));
      return Err(ApiError::Http {
        status: status.as_u16(),
        body,
      });
    }
    Ok(())
  }
}

#[async_trait]
impl JiraApi for JiraClient {
  async fn search_issues(&self, jql: &str, max_results: u32) -> Result<IssueSearchResults, ApiError> {
    // The /search endpoint was retired in August 2025; /search/jql replaces it.
    let url = format!("{}/rest/api/3/search/jql", self.base_url);
    debug!(jql, max_results, "searching Jira issues");

    let response: SearchResponse = self
      .execute(self.client.get(&url).query(&[
        ("jql", jql.to_string()),
        ("maxResults", max_results.to_string()),
        ("fields", SEARCH_FIELDS.to_string()),
      ]))
      .await?;

    let issues = response.issues.into_iter().map(IssueSummary::from).collect();
    Ok(IssueSearchResults::from_issues(issues))
  }

  async fn get_issue(&self, issue_key: &str) -> Result<IssueDetail, ApiError> {
    let url = format!("{}/rest/api/3/issue/{issue_key}", self.base_url);
    debug!(issue_key, "fetching Jira issue");

    let issue: Issue = self.execute(self.client.get(&url)).await?;
    Ok(IssueDetail::from(issue))
  }

  async fn create_issue(&self, issue: &NewIssue) -> Result<CreatedIssue, ApiError> {
    let url = format!("{}/rest/api/3/issue", self.base_url);
    debug!(project = %issue.project_key, issue_type = %issue.issue_type, "creating Jira issue");

    let payload = serde_json::json!({
      "fields": {
        "project": {"key": issue.project_key},
        "summary": issue.summary,
        "description": DocumentBody::from_text(&issue.description),
        "issuetype": {"name": issue.issue_type},
      }
    });

    let created: CreateResponse = self.execute(self.client.post(&url).json(&payload)).await?;
    Ok(CreatedIssue {
      success: true,
      url: format!("{}/browse/{}", self.base_url, created.key),
      key: created.key,
      id: created.id,
    })
  }

  async fn update_issue(&self, issue_key: &str, update: &IssueUpdate) -> Result<UpdateOutcome, ApiError> {
    if update.has_field_changes() {
      let url = format!("{}/rest/api/3/issue/{issue_key}", self.base_url);
      let mut fields = serde_json::Map::new();
      if let Some(summary) = &update.summary {
        fields.insert("summary".to_string(), serde_json::Value::String(summary.clone()));
      }
      if let Some(description) = &update.description {
        fields.insert(
          "description".to_string(),
          serde_json::to_value(DocumentBody::from_text(description))
            .map_err(|err| ApiError::Decode(err.to_string()))?,
        );
      }

      debug!(issue_key, "updating Jira issue fields");
      self
        .execute_no_content(self.client.put(&url).json(&serde_json::json!({"fields": fields})))
        .await?;
    }

    // The status transition is a separate request pair; by this point any
    // field changes have already been applied.
    if let Some(status) = &update.status {
      let url = format!("{}/rest/api/3/issue/{issue_key}/transitions", self.base_url);
      let transitions: TransitionsResponse = self.execute(self.client.get(&url)).await?;

      match super::models::find_transition(&transitions.transitions, status) {
        Some(transition) => {
          debug!(issue_key, status, transition_id = %transition.id, "applying Jira transition");
          self
            .execute_no_content(
              self
                .client
                .post(&url)
                .json(&serde_json::json!({"transition": {"id": transition.id}})),
            )
            .await?;
        }
        None => {
          return Ok(UpdateOutcome::TransitionNotFound {
            status: status.clone(),
          });
        }
      }
    }

    Ok(UpdateOutcome::Completed)
  }

  async fn add_comment(&self, issue_key: &str, comment: &str) -> Result<(), ApiError> {
    let url = format!("{}/rest/api/3/issue/{issue_key}/comment", self.base_url);
    debug!(issue_key, "adding Jira comment");

    let payload = serde_json::json!({"body": DocumentBody::from_text(comment)});
    self.execute_no_content(self.client.post(&url).json(&payload)).await
  }
}

#[cfg(test)]
mod tests {
  use base64::Engine as _;

  use super::*;

  fn test_client() -> JiraClient {
    let config = ProductConfig::new("https://example.atlassian.net/", "user@example.com", "test-token");
    JiraClient::new(&config, 30).unwrap()
  }

  #[test]
  fn new_normalizes_base_url() {
    let client = test_client();
    assert_eq!(client.base_url, "https://example.atlassian.net");
  }

  #[test]
  fn auth_header_encodes_username_and_token() {
    let client = test_client();
    let auth_header = client.auth_header();
    assert!(auth_header.starts_with("Basic "));

    let encoded = auth_header.strip_prefix("Basic ").unwrap();
    let decoded = BASE64.decode(encoded.as_bytes()).unwrap();
    assert_eq!(String::from_utf8(decoded).unwrap(), "user@example.com:test-token");
  }
}
