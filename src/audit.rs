//! JSONL audit logging for block-guard
//!
//! Records every decision to a JSONL file. Logging problems are reported on
//! stderr and never change a decision.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::input::HookInput;
use crate::output::Decision;

/// Log level for audit entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    Allowed,
    Blocked,
    ConfigError,
    /// Would have blocked, but --dry-run let it through
    DryRun,
}

/// An audit log entry
#[derive(Debug, Serialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,

    pub level: LogLevel,

    /// Tool that was invoked
    pub tool: String,

    /// Summary of the input
    pub input_summary: String,

    /// Reason for the decision
    pub reason: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

impl AuditEntry {
    /// Create a new audit entry from input and decision
    pub fn new(input: &HookInput, decision: &Decision, dry_run: bool) -> Self {
        let level = match decision {
            Decision::Allow { .. } => LogLevel::Allowed,
            Decision::Block { .. } if dry_run => LogLevel::DryRun,
            Decision::Block {
                config_error: true, ..
            } => LogLevel::ConfigError,
            Decision::Block { .. } => LogLevel::Blocked,
        };

        Self {
            timestamp: Utc::now(),
            level,
            tool: input.tool_name.clone(),
            input_summary: input.summary(),
            reason: decision.reason().to_string(),
            session_id: input.session_id.clone(),
        }
    }
}

/// Audit logger
#[derive(Default)]
pub struct AuditLogger {
    writer: Option<BufWriter<File>>,
}

impl AuditLogger {
    /// Create a new audit logger; `None` or an unopenable path disables it
    pub fn new(path: Option<&Path>) -> Self {
        let writer = path.and_then(|p| {
            if let Some(parent) = p.parent() {
                let _ = std::fs::create_dir_all(parent);
            }

            OpenOptions::new()
                .create(true)
                .append(true)
                .open(p)
                .map_err(|e| eprintln!("Warning: Failed to open audit log {}: {}", p.display(), e))
                .ok()
                .map(BufWriter::new)
        });

        Self { writer }
    }

    /// Log an audit entry
    pub fn log(&mut self, entry: &AuditEntry) -> Result<()> {
        if let Some(ref mut writer) = self.writer {
            let json = serde_json::to_string(entry)?;
            writeln!(writer, "{}", json)?;
            writer.flush()?;
        }
        Ok(())
    }

    /// Log a decision
    pub fn log_decision(&mut self, input: &HookInput, decision: &Decision, dry_run: bool) -> Result<()> {
        let entry = AuditEntry::new(input, decision, dry_run);
        self.log(&entry)
    }

    /// Check if logging is enabled
    pub fn is_enabled(&self) -> bool {
        self.writer.is_some()
    }
}
