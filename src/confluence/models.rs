//! Data transfer objects for the Confluence REST API.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// Response page from the content search endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentSearchResponse {
  /// Content items in this page of results.
  #[serde(default)]
  pub results: Vec<Content>,
  /// Total number of matches reported by the server, when provided.
  #[serde(rename = "totalSize")]
  pub total_size: Option<u64>,
}

/// A content resource (page, blog post) as returned by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct Content {
  /// Unique numeric identifier assigned by Confluence.
  pub id: String,
  /// Human-readable title displayed in the UI.
  pub title: String,
  #[serde(rename = "type")]
  /// Content type (typically `"page"` or `"blogpost"`).
  pub content_type: String,
  /// Rich body content, present only when expanded.
  pub body: Option<ContentBody>,
  /// Version metadata, present only when expanded.
  pub version: Option<ContentVersion>,
  #[serde(rename = "_links")]
  /// Hyperlinks, including the web UI path.
  pub links: Option<ContentLinks>,
}

/// Body renderings of a content resource.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentBody {
  /// Confluence storage-format representation.
  pub storage: Option<StorageFormat>,
}

/// Storage format (Confluence's internal markup).
#[derive(Debug, Clone, Deserialize)]
pub struct StorageFormat {
  /// Raw markup returned by the API.
  pub value: String,
}

/// Version metadata on a content resource.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentVersion {
  /// Monotonically increasing version number.
  pub number: i64,
}

/// Content links.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentLinks {
  #[serde(rename = "webui")]
  /// Path to the content within the Confluence web UI.
  pub web_ui: Option<String>,
}

/// Response page from the space listing endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SpacesResponse {
  /// Spaces in this page of results.
  #[serde(default)]
  pub results: Vec<Space>,
}

/// A space resource.
#[derive(Debug, Clone, Deserialize)]
pub struct Space {
  /// Short key that uniquely identifies the space.
  pub key: String,
  /// Human-readable space name.
  pub name: String,
  #[serde(rename = "type")]
  /// Space classification such as `"global"` or `"personal"`.
  pub space_type: String,
}

// ---------------------------------------------------------------------------
// Projections
// ---------------------------------------------------------------------------

/// Flat projection of a content resource from search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSummary {
  /// Unique identifier.
  pub id: String,
  /// Title displayed in the UI.
  pub title: String,
  #[serde(rename = "type")]
  /// Content type (`"page"`, `"blogpost"`).
  pub content_type: String,
  /// Absolute web UI URL.
  pub url: String,
}

/// Search results with total count and projected pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentSearchResults {
  /// Total matches: the server-reported figure when available, otherwise the
  /// number of results in this page.
  pub total: u64,
  /// Projected content items.
  pub results: Vec<PageSummary>,
}

/// Full projection of a single page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageDetail {
  /// Unique identifier.
  pub id: String,
  /// Title displayed in the UI.
  pub title: String,
  #[serde(rename = "type")]
  /// Content type.
  pub content_type: String,
  /// Current version number.
  pub version: i64,
  /// Raw storage-format markup of the page body.
  pub content: String,
  /// Absolute web UI URL.
  pub url: String,
}

/// Flat projection of a space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpaceSummary {
  /// Short key that uniquely identifies the space.
  pub key: String,
  /// Human-readable space name.
  pub name: String,
  #[serde(rename = "type")]
  /// Space classification.
  pub space_type: String,
}

impl From<Space> for SpaceSummary {
  fn from(space: Space) -> Self {
    Self {
      key: space.key,
      name: space.name,
      space_type: space.space_type,
    }
  }
}

/// Space listing envelope matching the adapter's output shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpaceList {
  /// Projected spaces; empty when the instance has none visible.
  pub spaces: Vec<SpaceSummary>,
}
