//! Command-line interface definitions for atlassian-tools.
//!
//! The binary is a thin, non-interactive front end over the tool registry:
//! it can list the registered tool definitions and invoke a single tool with
//! JSON arguments. Agent loops and REPLs live in the orchestration layer,
//! not here.

use clap::{Parser, Subcommand};

use crate::tools::DEFAULT_TIMEOUT_SECS;

/// atlassian-tools - invoke Jira/Confluence tools from the command line
#[derive(Debug, Parser)]
#[command(
  name = "atlassian-tools",
  version,
  about = "Typed Jira/Confluence REST adapter with an agent-facing tool registry",
  long_about = "Lists and invokes the registered tools directly. Credentials are read from\n\
                JIRA_URL/JIRA_USERNAME/JIRA_API_TOKEN and the CONFLUENCE_* equivalents."
)]
pub struct Cli {
  /// Subcommand to execute
  #[command(subcommand)]
  pub command: Command,

  /// Behavior options
  #[command(flatten)]
  pub behavior: BehaviorOptions,

  /// HTTP timeout for REST calls, in seconds
  #[arg(long, value_name = "SECONDS", default_value_t = DEFAULT_TIMEOUT_SECS)]
  pub timeout: u64,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
  /// List the registered tools and their input schemas
  Tools {
    /// Output the full definitions as JSON
    #[arg(long)]
    json: bool,
  },

  /// Invoke a single tool by name
  Invoke {
    /// Name of the tool to invoke (e.g. jira_search_issues)
    #[arg(value_name = "TOOL")]
    tool: String,

    /// JSON object with the tool's arguments
    #[arg(long, value_name = "JSON", default_value = "{}")]
    args: String,
  },
}

/// Verbosity flags shared by every subcommand.
#[derive(Debug, clap::Args)]
pub struct BehaviorOptions {
  /// Increase logging verbosity (-v, -vv, -vvv)
  #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Only log errors
  #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
  pub quiet: bool,
}

impl Cli {
  /// Parse arguments from the process command line.
  pub fn parse_args() -> Self {
    Self::parse()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_invoke_with_args() {
    let cli = Cli::try_parse_from([
      "atlassian-tools",
      "invoke",
      "jira_get_issue",
      "--args",
      r#"{"issue_key":"PROJ-1"}"#,
    ])
    .unwrap();

    match cli.command {
      Command::Invoke { tool, args } => {
        assert_eq!(tool, "jira_get_issue");
        assert!(args.contains("PROJ-1"));
      }
      _ => panic!("expected invoke subcommand"),
    }
  }

  #[test]
  fn invoke_args_default_to_empty_object() {
    let cli = Cli::try_parse_from(["atlassian-tools", "invoke", "confluence_list_spaces"]).unwrap();
    match cli.command {
      Command::Invoke { args, .. } => assert_eq!(args, "{}"),
      _ => panic!("expected invoke subcommand"),
    }
  }

  #[test]
  fn quiet_conflicts_with_verbose() {
    assert!(Cli::try_parse_from(["atlassian-tools", "-q", "-v", "tools"]).is_err());
  }
}
