//! Fake Jira API client for testing.
//!
//! Returns predefined responses without making any network requests. The
//! fixture payloads are decoded through the real serde wire models so the
//! projection code is exercised the same way the HTTP client exercises it.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use atlassian_tools::error::ApiError;
use atlassian_tools::jira::JiraApi;
use atlassian_tools::jira::models::{
  CreatedIssue, Issue, IssueDetail, IssueSearchResults, IssueSummary, IssueUpdate, NewIssue, SearchResponse,
  Transition, TransitionsResponse, UpdateOutcome, find_transition,
};

use crate::common::fixtures;

const BASE_URL: &str = "https://example.atlassian.net";

/// A fake Jira client that returns predefined responses for testing.
pub struct FakeJiraClient {
  search_results: Vec<IssueSummary>,
  issues: HashMap<String, IssueDetail>,
  transitions: Vec<Transition>,
  fail_field_update: bool,
  created_count: Mutex<u64>,
  applied_transitions: Mutex<Vec<String>>,
}

impl FakeJiraClient {
  /// Create a fake client with no data.
  pub fn new() -> Self {
    Self {
      search_results: Vec::new(),
      issues: HashMap::new(),
      transitions: Vec::new(),
      fail_field_update: false,
      created_count: Mutex::new(0),
      applied_transitions: Mutex::new(Vec::new()),
    }
  }

  /// Create a fake client loaded from the sample fixtures.
  pub fn with_sample_data() -> Self {
    let mut client = Self::new();

    let search: SearchResponse = serde_json::from_value(fixtures::sample_search_response()).unwrap();
    client.search_results = search.issues.into_iter().map(IssueSummary::from).collect();

    client.add_issue_from_json(fixtures::sample_issue_response());
    client.add_issue_from_json(fixtures::sample_bare_issue_response());

    let transitions: TransitionsResponse = serde_json::from_value(fixtures::sample_transitions_response()).unwrap();
    client.transitions = transitions.transitions;

    client
  }

  /// Decode a wire-shaped issue payload and store its projection.
  pub fn add_issue_from_json(&mut self, json: serde_json::Value) {
    let issue: Issue = serde_json::from_value(json).unwrap();
    let detail = IssueDetail::from(issue);
    self.issues.insert(detail.key.clone(), detail);
  }

  /// Make any field update request fail with HTTP 400.
  pub fn set_fail_field_update(&mut self, fail: bool) {
    self.fail_field_update = fail;
  }

  /// Transition ids applied through `update_issue` so far.
  pub fn applied_transitions(&self) -> Vec<String> {
    self.applied_transitions.lock().unwrap().clone()
  }
}

impl Default for FakeJiraClient {
  fn default() -> Self {
    Self::new()
  }
}

#[async_trait]
impl JiraApi for FakeJiraClient {
  async fn search_issues(&self, _jql: &str, max_results: u32) -> Result<IssueSearchResults, ApiError> {
    let issues = self
      .search_results
      .iter()
      .take(max_results as usize)
      .cloned()
      .collect();
    Ok(IssueSearchResults::from_issues(issues))
  }

  async fn get_issue(&self, issue_key: &str) -> Result<IssueDetail, ApiError> {
    self.issues.get(issue_key).cloned().ok_or_else(|| ApiError::Http {
      status: 404,
      body: fixtures::issue_not_found_body(),
    })
  }

  async fn create_issue(&self, issue: &NewIssue) -> Result<CreatedIssue, ApiError> {
    let mut count = self.created_count.lock().unwrap();
    *count += 1;
    let key = format!("{}-{}", issue.project_key, *count);
    Ok(CreatedIssue {
      success: true,
      url: format!("{BASE_URL}/browse/{key}"),
      id: format!("1000{count}"),
      key,
    })
  }

  async fn update_issue(&self, issue_key: &str, update: &IssueUpdate) -> Result<UpdateOutcome, ApiError> {
    if !self.issues.contains_key(issue_key) {
      return Err(ApiError::Http {
        status: 404,
        body: fixtures::issue_not_found_body(),
      });
    }

    if update.has_field_changes() && self.fail_field_update {
      return Err(ApiError::Http {
        status: 400,
        body: r#"{"errorMessages":[],"errors":{"summary":"Field 'summary' cannot be set."}}"#.to_string(),
      });
    }

    if let Some(status) = &update.status {
      match find_transition(&self.transitions, status) {
        Some(transition) => {
          self.applied_transitions.lock().unwrap().push(transition.id.clone());
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

  async fn add_comment(&self, issue_key: &str, _comment: &str) -> Result<(), ApiError> {
    if !self.issues.contains_key(issue_key) {
      return Err(ApiError::Http {
        status: 404,
        body: fixtures::issue_not_found_body(),
      });
    }
    Ok(())
  }
}
