//! Configuration loading for block-guard
//!
//! These are settings for the hook itself, read from TOML. Protection rules
//! live in the marker files, not here.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// General configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Enable audit logging
    pub audit_log: bool,

    /// Path to audit log file
    pub audit_path: Option<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            audit_log: true,
            audit_path: Some("~/.claude/block-guard/audit.jsonl".to_string()),
        }
    }
}

/// Marker file names
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MarkersConfig {
    /// Main marker file, usually committed
    pub main: String,

    /// Local marker file layered on top of the main one
    pub local: String,
}

impl Default for MarkersConfig {
    fn default() -> Self {
        Self {
            main: ".block".to_string(),
            local: ".block.local".to_string(),
        }
    }
}

impl MarkersConfig {
    /// Whether a file name is one of the marker names
    pub fn is_marker_name(&self, file_name: &str) -> bool {
        file_name == self.main || file_name == self.local
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub markers: MarkersConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load() -> Self {
        let config_paths = [
            // User-specific config
            dirs::home_dir().map(|p| p.join(".claude/block-guard/config.toml")),
            // System-wide config
            Some(PathBuf::from("/etc/block-guard/config.toml")),
        ];

        for path in config_paths.into_iter().flatten() {
            if path.exists() {
                match Self::load_from(&path) {
                    Ok(config) => return config,
                    Err(e) => {
                        eprintln!("Warning: Failed to load {}: {}", path.display(), e);
                    }
                }
            }
        }

        Config::default()
    }

    /// Load from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Expand ~ in path strings
    pub fn expand_path(path: &str) -> PathBuf {
        if let Some(rest) = path.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(rest);
            }
        }
        PathBuf::from(path)
    }

    /// Get the audit log path (expanded), if logging is on
    pub fn audit_path(&self) -> Option<PathBuf> {
        if !self.general.audit_log {
            return None;
        }
        self.general.audit_path.as_deref().map(Self::expand_path)
    }
}

/// Embedded default configuration
pub const DEFAULT_CONFIG_TOML: &str = r#"
[general]
audit_log = true
audit_path = "~/.claude/block-guard/audit.jsonl"

[markers]
main = ".block"
local = ".block.local"
"#;
