//! Trait definitions for interacting with Confluence.

use async_trait::async_trait;

use super::models::{ContentSearchResults, PageDetail, SpaceSummary};
use crate::error::ApiError;

/// Trait for Confluence API operations (enables testing with fake
/// implementations).
#[async_trait]
pub trait ConfluenceApi: Send + Sync {
  /// Search content with a free-text query.
  ///
  /// # Arguments
  /// * `query` - Free text, wrapped into a `text ~ "…"` CQL expression.
  /// * `limit` - Page-size cap for the request.
  async fn search_content(&self, query: &str, limit: u32) -> Result<ContentSearchResults, ApiError>;

  /// Fetch a page by ID, including its storage-format body and version.
  ///
  /// # Arguments
  /// * `page_id` - Unique Confluence identifier for the page.
  async fn get_page(&self, page_id: &str) -> Result<PageDetail, ApiError>;

  /// List visible spaces (first page, fixed size 50).
  async fn list_spaces(&self) -> Result<Vec<SpaceSummary>, ApiError>;
}
