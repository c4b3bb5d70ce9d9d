//! atlassian-tools - list and invoke Jira/Confluence tools
//!
//! This is the main entry point for the CLI application.

use std::process;

use anyhow::{Context, Result};
use atlassian_tools::cli::{BehaviorOptions, Cli, Command};
use atlassian_tools::config::AtlassianConfig;
use atlassian_tools::tools::ToolRegistry;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

#[tokio::main]
async fn main() {
  let cli = Cli::parse_args();

  init_tracing(&cli.behavior);

  if let Err(e) = run(&cli).await {
    eprintln!("Error: {e:#}");
    process::exit(1);
  }
}

async fn run(cli: &Cli) -> Result<()> {
  let config = AtlassianConfig::from_env();
  let registry = ToolRegistry::from_config(&config, cli.timeout)?;

  match &cli.command {
    Command::Tools { json } => handle_tools_command(&registry, *json),
    Command::Invoke { tool, args } => handle_invoke_command(&registry, tool, args).await,
  }
}

/// Print the registered tool definitions.
fn handle_tools_command(registry: &ToolRegistry, json: bool) -> Result<()> {
  let definitions = registry.definitions();

  if json {
    println!("{}", serde_json::to_string_pretty(&definitions)?);
    return Ok(());
  }

  for definition in definitions {
    println!("{:<28} {}", definition.name, definition.description);
  }
  Ok(())
}

/// Dispatch a single tool call and print its result.
async fn handle_invoke_command(registry: &ToolRegistry, tool: &str, args: &str) -> Result<()> {
  let input: serde_json::Value = serde_json::from_str(args).context("--args must be a JSON object")?;

  let output = registry.dispatch(tool, input).await?;
  println!("{}", output.content);

  if !output.success {
    process::exit(2);
  }
  Ok(())
}

fn init_tracing(behavior: &BehaviorOptions) {
  let level = if behavior.quiet {
    LevelFilter::ERROR
  } else {
    match behavior.verbose {
      0 => LevelFilter::WARN,
      1 => LevelFilter::INFO,
      2 => LevelFilter::DEBUG,
      _ => LevelFilter::TRACE,
    }
  };

  let env_filter = EnvFilter::builder()
    .with_default_directive(level.into())
    .from_env_lossy();

  let _ = tracing_subscriber::fmt()
    .with_env_filter(env_filter)
    .with_target(false)
    .with_writer(std::io::stderr)
    .try_init();
}
