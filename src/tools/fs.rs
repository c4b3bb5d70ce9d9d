//! File read/write/list tools.

use async_trait::async_trait;
use serde::Deserialize;
use tokio::fs;

use super::registry::{InputSchema, ToolDefinition, ToolHandler, ToolOutput};
use super::parse_arguments;

fn default_directory() -> String {
  ".".to_string()
}

/// Handler for the `read_file` tool.
pub struct ReadFileTool;

#[derive(Debug, Deserialize)]
struct ReadFileArgs {
  filename: String,
}

#[async_trait]
impl ToolHandler for ReadFileTool {
  fn definition(&self) -> ToolDefinition {
    ToolDefinition::new("read_file", "Read content from a file").with_schema(
      InputSchema::new()
        .with_property(
          "filename",
          serde_json::json!({"type": "string", "description": "Name of the file to read"}),
        )
        .with_required(&["filename"]),
    )
  }

  async fn execute(&self, input: serde_json::Value) -> ToolOutput {
    let args: ReadFileArgs = match parse_arguments(&input) {
      Ok(args) => args,
      Err(msg) => return ToolOutput::error(format!("Error reading file: {msg}")),
    };

    match fs::read_to_string(&args.filename).await {
      Ok(content) => ToolOutput::success(content),
      Err(err) => ToolOutput::error(format!("Error reading file: {err}")),
    }
  }
}

/// Handler for the `write_file` tool.
pub struct WriteFileTool;

#[derive(Debug, Deserialize)]
struct WriteFileArgs {
  filename: String,
  content: String,
}

#[async_trait]
impl ToolHandler for WriteFileTool {
  fn definition(&self) -> ToolDefinition {
    ToolDefinition::new("write_file", "Write content to a file").with_schema(
      InputSchema::new()
        .with_property(
          "filename",
          serde_json::json!({"type": "string", "description": "Name of the file to write"}),
        )
        .with_property(
          "content",
          serde_json::json!({"type": "string", "description": "Content to write to the file"}),
        )
        .with_required(&["filename", "content"]),
    )
  }

  async fn execute(&self, input: serde_json::Value) -> ToolOutput {
    let args: WriteFileArgs = match parse_arguments(&input) {
      Ok(args) => args,
      Err(msg) => return ToolOutput::error(format!("Error writing file: {msg}")),
    };

    match fs::write(&args.filename, &args.content).await {
      Ok(()) => ToolOutput::success(format!("Successfully wrote to {}", args.filename)),
      Err(err) => ToolOutput::error(format!("Error writing file: {err}")),
    }
  }
}

/// Handler for the `list_files` tool.
pub struct ListFilesTool;

#[derive(Debug, Deserialize)]
struct ListFilesArgs {
  #[serde(default = "default_directory")]
  directory: String,
}

#[async_trait]
impl ToolHandler for ListFilesTool {
  fn definition(&self) -> ToolDefinition {
    ToolDefinition::new("list_files", "List files in a directory").with_schema(InputSchema::new().with_property(
      "directory",
      serde_json::json!({
        "type": "string",
        "description": "Directory path to list (defaults to current directory)"
      }),
    ))
  }

  async fn execute(&self, input: serde_json::Value) -> ToolOutput {
    let args: ListFilesArgs = match parse_arguments(&input) {
      Ok(args) => args,
      Err(msg) => return ToolOutput::error(format!("Error listing directory: {msg}")),
    };

    match list_directory(&args.directory).await {
      Ok(listing) => ToolOutput::success(listing),
      Err(err) => ToolOutput::error(format!("Error listing directory: {err}")),
    }
  }
}

/// Render a directory listing with directories and files in separate
/// sections, each sorted by name.
async fn list_directory(directory: &str) -> std::io::Result<String> {
  let mut entries = fs::read_dir(directory).await?;
  let mut dirs = Vec::new();
  let mut files = Vec::new();

  while let Some(entry) = entries.next_entry().await? {
    let name = entry.file_name().to_string_lossy().into_owned();
    if entry.file_type().await?.is_dir() {
      dirs.push(name);
    } else {
      files.push(name);
    }
  }

  dirs.sort();
  files.sort();

  let mut result = format!("Directory: {directory}\n\n");
  result.push_str(&format!("Directories ({}):\n", dirs.len()));
  for dir in &dirs {
    result.push_str(&format!("  [DIR] {dir}\n"));
  }
  result.push_str(&format!("\nFiles ({}):\n", files.len()));
  for file in &files {
    result.push_str(&format!("  [FILE] {file}\n"));
  }

  Ok(result)
}
