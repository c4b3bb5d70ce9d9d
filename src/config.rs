//! Process configuration for the Atlassian clients.
//!
//! Credentials are read from the environment exactly once, into an explicit
//! [`AtlassianConfig`] that is passed by reference wherever a client is
//! constructed. A partially configured environment is a valid state: the
//! missing product's operations fail at call time with a credential error
//! rather than at startup.
//!
//! # Atlassian API Tokens
//!
//! Atlassian Cloud requires **API tokens** for authentication, not
//! traditional passwords. Create one at:
//! <https://id.atlassian.com/manage-profile/security/api-tokens>
//! and use your email address as the username.

/// Connection settings for one Atlassian product (Jira or Confluence).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductConfig {
  /// Base URL of the instance (e.g. `https://example.atlassian.net`),
  /// normalized to have no trailing slash.
  pub base_url: String,
  /// Email address of the account owning the API token.
  pub username: String,
  /// The API token used as the Basic-auth password.
  pub api_token: String,
}

impl ProductConfig {
  /// Create a product config, trimming any trailing slash from the base URL.
  pub fn new(base_url: impl Into<String>, username: impl Into<String>, api_token: impl Into<String>) -> Self {
    Self {
      base_url: base_url.into().trim_end_matches('/').to_string(),
      username: username.into(),
      api_token: api_token.into(),
    }
  }
}

/// Credentials for both products, either of which may be absent.
#[derive(Debug, Clone, Default)]
pub struct AtlassianConfig {
  /// Jira credentials, when JIRA_URL/JIRA_USERNAME/JIRA_API_TOKEN are all set.
  pub jira: Option<ProductConfig>,
  /// Confluence credentials, when the CONFLUENCE_* variables are all set.
  pub confluence: Option<ProductConfig>,
}

impl AtlassianConfig {
  /// Build the configuration from the process environment.
  ///
  /// # Returns
  /// A config whose `jira`/`confluence` fields are populated only when all
  /// three of the corresponding variables are present and non-empty.
  pub fn from_env() -> Self {
    Self::from_lookup(|name| std::env::var(name).ok())
  }

  /// Build the configuration from an arbitrary variable lookup.
  ///
  /// # Arguments
  /// * `lookup` - Resolver for a variable name, returning `None` when unset.
  ///
  /// This is the seam the tests use to exercise partial configuration without
  /// mutating process-global environment state.
  pub fn from_lookup<F>(lookup: F) -> Self
  where
    F: Fn(&str) -> Option<String>,
  {
    Self {
      jira: Self::product(&lookup, "JIRA_URL", "JIRA_USERNAME", "JIRA_API_TOKEN"),
      confluence: Self::product(&lookup, "CONFLUENCE_URL", "CONFLUENCE_USERNAME", "CONFLUENCE_API_TOKEN"),
    }
  }

  fn product<F>(lookup: &F, url_var: &str, user_var: &str, token_var: &str) -> Option<ProductConfig>
  where
    F: Fn(&str) -> Option<String>,
  {
    let url = lookup(url_var).filter(|v| !v.trim().is_empty())?;
    let username = lookup(user_var).filter(|v| !v.trim().is_empty())?;
    let token = lookup(token_var).filter(|v| !v.trim().is_empty())?;
    Some(ProductConfig::new(url, username, token))
  }
}
