//! Protection engine for block-guard
//!
//! Turns one hook request into one decision: derive the target paths, guard
//! the marker files themselves, find the nearest marker directory for each
//! target and evaluate its configuration. The first block wins.

pub mod evaluate;
pub mod walker;

use std::env;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::input::{HookInput, ToolInput};
use crate::output::Decision;
use crate::parser::targets;

/// The main protection engine
pub struct ProtectionEngine {
    config: Config,
}

impl ProtectionEngine {
    /// Create a new engine with the given configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Main entry point: check an input and return a decision
    pub fn check(&self, input: &HookInput) -> Decision {
        let raw_targets = match &input.tool_input {
            ToolInput::Edit { file_path } | ToolInput::Write { file_path } => {
                vec![file_path.clone()]
            }
            ToolInput::NotebookEdit { notebook_path } => vec![notebook_path.clone()],
            ToolInput::Bash { command } => {
                let found = targets::extract_targets(command);
                if found.is_empty() {
                    return Decision::allow("no file targets in command");
                }
                found
            }
            ToolInput::Unknown => return Decision::allow("unknown tool type - passing through"),
        };

        let cwd = working_dir(input.cwd.as_deref());
        self.check_targets(&raw_targets, &cwd)
    }

    /// Check several raw target paths; the first block is returned
    pub fn check_targets(&self, raw_targets: &[String], cwd: &Path) -> Decision {
        for raw in raw_targets {
            let target = walker::resolve_target(raw, cwd);
            let decision = self.check_path(&target);
            if decision.is_block() {
                return decision;
            }
        }
        Decision::allow("no target is protected")
    }

    /// Check a single absolute target path
    pub fn check_path(&self, target: &Path) -> Decision {
        let markers = &self.config.markers;

        if let Some(name) = target.file_name().and_then(|n| n.to_str()) {
            if markers.is_marker_name(name) && target.exists() {
                return Decision::block(
                    format!(
                        "Cannot modify {}: marker files can be created but never changed or removed. \
                         Edit or delete it by hand if the protection really needs to change.",
                        target.display()
                    ),
                    "",
                );
            }
        }

        if !walker::has_any_marker(target, markers) {
            return Decision::allow("no marker file above target");
        }

        match walker::find_nearest_protection(target, markers) {
            Some(info) => evaluate::evaluate(&info),
            None => Decision::allow("no marker file above target"),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Base directory for relative targets: the request's cwd, else our own
fn working_dir(request_cwd: Option<&str>) -> PathBuf {
    match request_cwd {
        Some(cwd) if !cwd.is_empty() => PathBuf::from(cwd),
        _ => env::current_dir().unwrap_or_else(|_| PathBuf::from("/")),
    }
}
