//! Confluence module providing the API abstraction, the HTTP client, and data
//! models for the Confluence wiki REST API.

pub mod api;
pub mod client;
pub mod models;

pub use api::ConfluenceApi;
pub use client::ConfluenceClient;
#[allow(unused_imports)]
pub use models::{ContentSearchResults, PageDetail, PageSummary, SpaceSummary};
