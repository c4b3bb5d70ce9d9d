//! HTTP client implementation for talking to the Confluence REST API.

use std::time::Duration;

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::api::ConfluenceApi;
use super::models::{
  Content, ContentSearchResponse, ContentSearchResults, PageDetail, PageSummary, SpaceSummary, SpacesResponse,
};
use crate::config::ProductConfig;
use crate::error::ApiError;

/// Fixed page size for the space listing endpoint.
const SPACES_PAGE_SIZE: u32 = 50;

/// Confluence API client.
#[derive(Clone)]
pub struct ConfluenceClient {
  base_url: String,
  username: String,
  token: String,
  client: reqwest::Client,
}

impl ConfluenceClient {
  /// Create a new Confluence client.
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

  /// Resolve a `webui` link to an absolute URL under `/wiki`.
  fn web_url(&self, web_ui_path: Option<&str>) -> String {
    match web_ui_path {
      Some(path) => format!("{}/wiki{path}", self.base_url),
      None => self.base_url.clone(),
    }
  }

  async fn execute<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<T, ApiError> {
    let response = request
      .header("Authorization", self.auth_header())
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
}

#[async_trait]
impl ConfluenceApi for ConfluenceClient {
  async fn search_content(&self, query: &str, limit: u32) -> Result<ContentSearchResults, ApiError> {
    let url = format!("{}/wiki/rest/api/content/search", self.base_url);
    let cql = format!("text ~ \"{query}\"");
    debug!(query, limit, "searching Confluence content");

    let response: ContentSearchResponse = self
      .execute(self.client.get(&url).query(&[("cql", cql), ("limit", limit.to_string())]))
      .await?;

    let results: Vec<PageSummary> = response
      .results
      .into_iter()
      .map(|item| PageSummary {
        url: self.web_url(item.links.as_ref().and_then(|l| l.web_ui.as_deref())),
        id: item.id,
        title: item.title,
        content_type: item.content_type,
      })
      .collect();

    Ok(ContentSearchResults {
      total: response.total_size.unwrap_or(results.len() as u64),
      results,
    })
  }

  async fn get_page(&self, page_id: &str) -> Result<PageDetail, ApiError> {
    let url = format!("{}/wiki/rest/api/content/{page_id}", self.base_url);
    debug!(page_id, "fetching Confluence page");

    let content: Content = self
      .execute(self.client.get(&url).query(&[("expand", "body.storage,version")]))
      .await?;

    let version = content
      .version
      .as_ref()
      .map(|v| v.number)
      .ok_or_else(|| ApiError::Decode("missing field `version` in page response".to_string()))?;
    let body = content
      .body
      .as_ref()
      .and_then(|b| b.storage.as_ref())
      .map(|s| s.value.clone())
      .ok_or_else(|| ApiError::Decode("missing field `body.storage` in page response".to_string()))?;

    Ok(PageDetail {
      url: self.web_url(content.links.as_ref().and_then(|l| l.web_ui.as_deref())),
      id: content.id,
      title: content.title,
      content_type: content.content_type,
      version,
      content: body,
    })
  }

  async fn list_spaces(&self) -> Result<Vec<SpaceSummary>, ApiError> {
    let url = format!("{}/wiki/rest/api/space", self.base_url);
    debug!("listing Confluence spaces");

    let response: SpacesResponse = self
      .execute(self.client.get(&url).query(&[("limit", SPACES_PAGE_SIZE.to_string())]))
      .await?;

    Ok(response.results.into_iter().map(SpaceSummary::from).collect())
  }
}
