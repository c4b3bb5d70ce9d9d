//! Jira module providing the API abstraction, the HTTP client, and data
//! models for the Jira Cloud v3 REST API.

pub mod api;
pub mod client;
pub mod models;

pub use api::JiraApi;
pub use client::JiraClient;
#[allow(unused_imports)]
pub use models::{
  CreatedIssue, IssueDetail, IssueSearchResults, IssueSummary, IssueUpdate, NewIssue, UpdateOutcome,
};
