//! Error types shared by the Jira and Confluence clients.
//!
//! The API layer distinguishes HTTP-status failures (which preserve the
//! numeric status code and the raw response body) from transport and decode
//! failures, so the tool layer can render each the way callers expect.

use std::fmt;

/// Errors produced by the REST clients.
#[derive(Debug)]
pub enum ApiError {
  /// The server responded with a non-2xx status. The raw response body is
  /// preserved verbatim for diagnostics.
  Http { status: u16, body: String },
  /// The request could not be sent or the response could not be read.
  Request(reqwest::Error),
  /// The response body could not be decoded into the expected shape.
  Decode(String),
}

impl fmt::Display for ApiError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Http { status, body } => write!(f, "HTTP {status}: {body}"),
      Self::Request(err) => write!(f, "request failed: {err}"),
      Self::Decode(msg) => write!(f, "failed to decode response: {msg}"),
    }
  }
}

impl std::error::Error for ApiError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::Request(err) => Some(err),
      _ => None,
    }
  }
}

impl From<reqwest::Error> for ApiError {
  fn from(err: reqwest::Error) -> Self {
    Self::Request(err)
  }
}

impl ApiError {
  /// Render this error as a human-readable string under an operation label
  /// (e.g. `"Error searching Jira"`).
  ///
  /// HTTP errors embed the status code in the label so callers can see at a
  /// glance whether the upstream rejected the request; all other failures are
  /// appended after a plain colon.
  pub fn describe(&self, label: &str) -> String {
    match self {
      Self::Http { status, body } => format!("{label} (HTTP {status}): {body}"),
      other => format!("{label}: {other}"),
    }
  }
}
