//! Shared test support: fake API clients and JSON fixtures.

pub mod fake_confluence;
pub mod fake_jira;
pub mod fixtures;
