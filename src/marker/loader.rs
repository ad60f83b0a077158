//! Marker file loading
//!
//! Anything short of a well-formed marker fails closed: a missing, empty,
//! unreadable or unparseable file is the "block everything" configuration.

use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use super::{MarkerConfig, PatternEntry, BOTH_LISTS_ERROR};

/// On-disk shape of a marker file
#[derive(Debug, Deserialize)]
struct MarkerFile {
    #[serde(default)]
    allowed: Option<Vec<PatternEntry>>,

    #[serde(default)]
    blocked: Option<Vec<PatternEntry>>,

    #[serde(default)]
    guide: Option<String>,
}

/// Load a marker file from disk
pub fn load(path: &Path) -> MarkerConfig {
    match fs::read_to_string(path) {
        Ok(content) => parse(&content, path),
        Err(e) if e.kind() == ErrorKind::NotFound => MarkerConfig::block_all(""),
        Err(e) => {
            eprintln!(
                "Warning: Failed to read {} (blocking everything): {}",
                path.display(),
                e
            );
            MarkerConfig::block_all("")
        }
    }
}

/// Parse marker file content; `origin` is only used for warnings
pub fn parse(content: &str, origin: &Path) -> MarkerConfig {
    if content.trim().is_empty() {
        return MarkerConfig::block_all("");
    }

    let file: MarkerFile = match serde_json::from_str(content) {
        Ok(file) => file,
        Err(e) => {
            eprintln!(
                "Warning: Failed to parse {} (blocking everything): {}",
                origin.display(),
                e
            );
            return MarkerConfig::block_all("");
        }
    };

    let guide = file.guide.unwrap_or_default();

    match (file.allowed, file.blocked) {
        (Some(_), Some(_)) => MarkerConfig::invalid(BOTH_LISTS_ERROR),
        (Some(allowed), None) => MarkerConfig {
            allowed: Some(allowed),
            guide,
            ..MarkerConfig::default()
        },
        (None, Some(blocked)) => MarkerConfig {
            blocked: Some(blocked),
            guide,
            ..MarkerConfig::default()
        },
        (None, None) => MarkerConfig::block_all(guide),
    }
}
