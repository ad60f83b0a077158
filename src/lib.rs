//! block-guard - Directory protection for Claude Code hooks
//!
//! Protects directory trees from file-modifying tool calls. A directory is
//! protected by dropping a `.block` marker file into it (and optionally a
//! personal `.block.local` next to it); the nearest marker above a target
//! path decides whether the operation may go ahead.
//!
//! # Features
//!
//! - **Marker files**: `{}` blocks everything, `{"allowed": [...]}` and
//!   `{"blocked": [...]}` narrow it down with wildcard patterns
//! - **Local overrides**: `.block.local` is merged with `.block`
//! - **Bash target extraction**: `rm`, `mv`, `cp`, `touch`, `mkdir`, `rmdir`,
//!   `tee`, `dd of=` and `>`/`>>` redirections
//! - **Self-protection**: existing marker files cannot be edited or removed
//! - **Audit logging**: JSONL log of all decisions
//!
//! # Example
//!
//! ```
//! use block_guard::{Config, HookInput, ProtectionEngine};
//!
//! let dir = std::env::temp_dir().join("block-guard-doc");
//! std::fs::create_dir_all(&dir).unwrap();
//! std::fs::write(dir.join(".block"), r#"{"blocked": ["*.secret"]}"#).unwrap();
//!
//! let engine = ProtectionEngine::new(Config::default());
//! let json = serde_json::json!({
//!     "tool_name": "Edit",
//!     "tool_input": { "file_path": dir.join("config.secret") },
//! });
//! let input = HookInput::from_json(&json.to_string()).unwrap();
//!
//! let decision = engine.check(&input);
//! assert!(decision.is_block());
//! ```

pub mod audit;
pub mod config;
pub mod engine;
pub mod error;
pub mod hook;
pub mod input;
pub mod marker;
pub mod output;
pub mod parser;

// Re-exports for convenience
pub use config::{Config, MarkersConfig};
pub use engine::ProtectionEngine;
pub use error::{Error, Result};
pub use hook::respond;
pub use input::{HookInput, ToolInput};
pub use marker::{MarkerConfig, PatternEntry};
pub use output::{Decision, HookOutput};
