//! Fake Confluence API client for testing.

use std::collections::HashMap;

use async_trait::async_trait;
use atlassian_tools::confluence::ConfluenceApi;
use atlassian_tools::confluence::models::{
  Content, ContentSearchResponse, ContentSearchResults, PageDetail, PageSummary, SpaceSummary, SpacesResponse,
};
use atlassian_tools::error::ApiError;

use crate::common::fixtures;

const BASE_URL: &str = "https://example.atlassian.net";

/// A fake Confluence client that returns predefined responses for testing.
pub struct FakeConfluenceClient {
  search_results: Vec<PageSummary>,
  search_total: u64,
  pages: HashMap<String, PageDetail>,
  spaces: Vec<SpaceSummary>,
}

impl FakeConfluenceClient {
  /// Create a fake client with no data.
  pub fn new() -> Self {
    Self {
      search_results: Vec::new(),
      search_total: 0,
      pages: HashMap::new(),
      spaces: Vec::new(),
    }
  }

  /// Create a fake client loaded from the sample fixtures.
  pub fn with_sample_data() -> Self {
    let mut client = Self::new();

    let search: ContentSearchResponse = serde_json::from_value(fixtures::sample_content_search_response()).unwrap();
    client.search_results = search.results.into_iter().map(|c| project_summary(&c)).collect();
    client.search_total = search.total_size.unwrap_or(client.search_results.len() as u64);

    client.add_page_from_json(fixtures::sample_page_response());

    let spaces: SpacesResponse = serde_json::from_value(fixtures::sample_spaces_response()).unwrap();
    client.spaces = spaces.results.into_iter().map(SpaceSummary::from).collect();

    client
  }

  /// Decode a wire-shaped page payload and store its projection.
  pub fn add_page_from_json(&mut self, json: serde_json::Value) {
    let content: Content = serde_json::from_value(json).unwrap();
    let detail = PageDetail {
      url: web_url(&content),
      version: content.version.as_ref().map(|v| v.number).unwrap_or(1),
      content: content
        .body
        .as_ref()
        .and_then(|b| b.storage.as_ref())
        .map(|s| s.value.clone())
        .unwrap_or_default(),
      id: content.id,
      title: content.title,
      content_type: content.content_type,
    };
    self.pages.insert(detail.id.clone(), detail);
  }
}

impl Default for FakeConfluenceClient {
  fn default() -> Self {
    Self::new()
  }
}

fn web_url(content: &Content) -> String {
  match content.links.as_ref().and_then(|l| l.web_ui.as_deref()) {
    Some(path) => format!("{BASE_URL}/wiki{path}"),
    None => BASE_URL.to_string(),
  }
}

fn project_summary(content: &Content) -> PageSummary {
  PageSummary {
    id: content.id.clone(),
    title: content.title.clone(),
    content_type: content.content_type.clone(),
    url: web_url(content),
  }
}

#[async_trait]
impl ConfluenceApi for FakeConfluenceClient {
  async fn search_content(&self, _query: &str, limit: u32) -> Result<ContentSearchResults, ApiError> {
    let results: Vec<PageSummary> = self.search_results.iter().take(limit as usize).cloned().collect();
    Ok(ContentSearchResults {
      total: self.search_total,
      results,
    })
  }

  async fn get_page(&self, page_id: &str) -> Result<PageDetail, ApiError> {
    self.pages.get(page_id).cloned().ok_or_else(|| ApiError::Http {
      status: 404,
      body: r#"{"statusCode":404,"message":"No content found with id: ContentId{id=0}"}"#.to_string(),
    })
  }

  async fn list_spaces(&self) -> Result<Vec<SpaceSummary>, ApiError> {
    Ok(self.spaces.clone())
  }
}
