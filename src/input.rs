//! Input parsing for hook requests
//!
//! The host sends `{ "tool_name": ..., "tool_input": {...} }` on stdin. Tool
//! arguments are decoded by tool name into a closed set of variants; unknown
//! tools and known tools with missing fields become [`ToolInput::Unknown`],
//! which the engine lets through.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::Result;

/// Main input structure from the hook host
#[derive(Debug, Clone)]
pub struct HookInput {
    /// Name of the tool being invoked (e.g., "Edit", "Write", "Bash")
    pub tool_name: String,

    /// Tool-specific input parameters
    pub tool_input: ToolInput,

    /// Optional session identifier
    pub session_id: Option<String>,

    /// Hook event name (e.g., "PreToolUse")
    pub hook_event_name: Option<String>,

    /// Working directory of the session, used for relative paths
    pub cwd: Option<String>,
}

/// Tool-specific input variants
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolInput {
    /// Edit / MultiEdit
    Edit { file_path: String },

    /// Write
    Write { file_path: String },

    /// NotebookEdit
    NotebookEdit { notebook_path: String },

    /// Bash
    Bash { command: String },

    /// Anything else - pass through
    Unknown,
}

#[derive(Debug, Deserialize)]
struct RawHookInput {
    #[serde(alias = "toolName")]
    tool_name: Option<String>,

    #[serde(default, alias = "toolInput")]
    tool_input: serde_json::Value,

    #[serde(default, alias = "sessionId")]
    session_id: Option<String>,

    #[serde(default, alias = "hookEventName")]
    hook_event_name: Option<String>,

    #[serde(default)]
    cwd: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FileArgs {
    #[serde(alias = "filePath")]
    file_path: String,
}

#[derive(Debug, Deserialize)]
struct NotebookArgs {
    #[serde(alias = "notebookPath")]
    notebook_path: String,
}

#[derive(Debug, Deserialize)]
struct BashArgs {
    command: String,
}

impl ToolInput {
    /// Decode tool arguments by tool name
    ///
    /// Missing or empty paths and commands give `Unknown`.
    pub fn from_tool(tool_name: &str, args: serde_json::Value) -> Self {
        match tool_name {
            "Edit" | "MultiEdit" => decode(args)
                .and_then(|a: FileArgs| non_empty(a.file_path))
                .map(|file_path| ToolInput::Edit { file_path })
                .unwrap_or(ToolInput::Unknown),
            "Write" => decode(args)
                .and_then(|a: FileArgs| non_empty(a.file_path))
                .map(|file_path| ToolInput::Write { file_path })
                .unwrap_or(ToolInput::Unknown),
            "NotebookEdit" => decode(args)
                .and_then(|a: NotebookArgs| non_empty(a.notebook_path))
                .map(|notebook_path| ToolInput::NotebookEdit { notebook_path })
                .unwrap_or(ToolInput::Unknown),
            "Bash" => decode(args)
                .and_then(|a: BashArgs| non_empty(a.command))
                .map(|command| ToolInput::Bash { command })
                .unwrap_or(ToolInput::Unknown),
            _ => ToolInput::Unknown,
        }
    }
}

fn decode<T: DeserializeOwned>(args: serde_json::Value) -> Option<T> {
    serde_json::from_value(args).ok()
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

impl HookInput {
    /// Parse input from JSON string
    ///
    /// Fails only when the text is not JSON of the right outer shape; a
    /// missing tool name yields an `Unknown` input rather than an error.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawHookInput = serde_json::from_str(json)?;
        let tool_name = raw.tool_name.unwrap_or_default();
        let tool_input = ToolInput::from_tool(&tool_name, raw.tool_input);

        Ok(HookInput {
            tool_name,
            tool_input,
            session_id: raw.session_id,
            hook_event_name: raw.hook_event_name,
            cwd: raw.cwd,
        })
    }

    /// Get a summary of the input for logging
    pub fn summary(&self) -> String {
        match &self.tool_input {
            ToolInput::Bash { command } => {
                let truncated: String = command.chars().take(100).collect();
                if truncated.len() < command.len() {
                    format!("Bash: {}...", truncated)
                } else {
                    format!("Bash: {}", command)
                }
            }
            ToolInput::Edit { file_path } | ToolInput::Write { file_path } => {
                format!("{}: {}", self.tool_name, file_path)
            }
            ToolInput::NotebookEdit { notebook_path } => {
                format!("{}: {}", self.tool_name, notebook_path)
            }
            ToolInput::Unknown => format!("Unknown tool: {}", self.tool_name),
        }
    }
}
