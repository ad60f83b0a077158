//! Marker file model for block-guard
//!
//! A marker file (`.block`, `.block.local`) switches on protection for the
//! directory it lives in and everything below it. This module holds the
//! parsed form of one marker file, and of a main + local pair after merging.

pub mod loader;
pub mod merge;
pub mod pattern;

use serde::Deserialize;

/// Error text for a single file that declares both lists
pub const BOTH_LISTS_ERROR: &str =
    "cannot specify both 'allowed' and 'blocked' lists in the same marker file";

/// Error text for a main/local pair whose modes disagree
pub const MIXED_MODES_ERROR: &str =
    "main and local marker files use incompatible modes: one declares 'allowed', the other 'blocked'";

/// One item of an `allowed` or `blocked` list
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PatternEntry {
    /// `"*.secret"`
    Pattern(String),

    /// `{ "pattern": "*.secret", "guide": "..." }`
    Guided {
        pattern: String,
        #[serde(default)]
        guide: String,
    },
}

impl PatternEntry {
    /// The glob pattern text
    pub fn pattern(&self) -> &str {
        match self {
            PatternEntry::Pattern(pattern) => pattern,
            PatternEntry::Guided { pattern, .. } => pattern,
        }
    }

    /// Entry-specific guide, if one was given and is non-empty
    pub fn guide(&self) -> Option<&str> {
        match self {
            PatternEntry::Pattern(_) => None,
            PatternEntry::Guided { guide, .. } if !guide.is_empty() => Some(guide),
            PatternEntry::Guided { .. } => None,
        }
    }
}

impl From<&str> for PatternEntry {
    fn from(pattern: &str) -> Self {
        PatternEntry::Pattern(pattern.to_string())
    }
}

/// Effective configuration of one protection point
///
/// `allowed` and `blocked` distinguish "key absent" (`None`) from
/// "declared but empty" (`Some(vec![])`): an explicit empty allow-list
/// allows nothing, an explicit empty block-list blocks nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MarkerConfig {
    pub allowed: Option<Vec<PatternEntry>>,
    pub blocked: Option<Vec<PatternEntry>>,

    /// Fallback message shown when a block has no entry guide
    pub guide: String,

    /// Neither list declared: block everything
    pub is_empty: bool,

    /// Self-contradictory configuration; always blocks
    pub error: Option<String>,
}

impl MarkerConfig {
    /// The canonical "block everything" configuration
    pub fn block_all(guide: impl Into<String>) -> Self {
        Self {
            guide: guide.into(),
            is_empty: true,
            ..Self::default()
        }
    }

    /// An allow-list configuration
    pub fn allowed<I, E>(entries: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<PatternEntry>,
    {
        Self {
            allowed: Some(entries.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    /// A block-list configuration
    pub fn blocked<I, E>(entries: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<PatternEntry>,
    {
        Self {
            blocked: Some(entries.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    /// A configuration that is in error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn with_guide(mut self, guide: impl Into<String>) -> Self {
        self.guide = guide.into();
        self
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Allowed entries, empty when not declared
    pub fn allowed_entries(&self) -> &[PatternEntry] {
        self.allowed.as_deref().unwrap_or(&[])
    }

    /// Blocked entries, empty when not declared
    pub fn blocked_entries(&self) -> &[PatternEntry] {
        self.blocked.as_deref().unwrap_or(&[])
    }
}
