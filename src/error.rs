//! Error type for block-guard plumbing
//!
//! Policy outcomes are never errors; they are always a [`crate::Decision`].
//! This type only covers reading settings, parsing hook requests and writing
//! the audit log.

use thiserror::Error;

/// Unified error type for block-guard
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
