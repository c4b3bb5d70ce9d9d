//! atlassian-tools library
//!
//! Typed clients for the Jira Cloud and Confluence REST APIs, plus a tool
//! registry that exposes them (and a few local utility tools) to an
//! orchestration layer such as an LLM agent runtime.

pub mod cli;
pub mod config;
pub mod confluence;
pub mod document;
pub mod error;
pub mod jira;
pub mod tools;
