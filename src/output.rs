//! Output formatting for hook responses
//!
//! A block is `{"decision":"block","reason":"..."}`; an allow is `{}`.

use serde::Serialize;

/// Response body written to stdout
#[derive(Debug, Serialize)]
pub struct HookOutput {
    /// "block" or absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision: Option<&'static str>,

    /// Human-readable justification for a block
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Decision result from the protection engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Allow the operation
    Allow { reason: String },

    /// Block the operation
    Block {
        reason: String,
        /// Guide text from the marker configuration, possibly empty
        guide: String,
        /// The marker configuration itself is broken
        config_error: bool,
    },
}

impl Decision {
    /// Create an allow decision
    pub fn allow(reason: impl Into<String>) -> Self {
        Decision::Allow {
            reason: reason.into(),
        }
    }

    /// Create a block decision carrying a guide
    pub fn block(reason: impl Into<String>, guide: impl Into<String>) -> Self {
        Decision::Block {
            reason: reason.into(),
            guide: guide.into(),
            config_error: false,
        }
    }

    /// Create a block decision for a broken configuration
    pub fn config_error(reason: impl Into<String>) -> Self {
        Decision::Block {
            reason: reason.into(),
            guide: String::new(),
            config_error: true,
        }
    }

    pub fn is_allow(&self) -> bool {
        matches!(self, Decision::Allow { .. })
    }

    pub fn is_block(&self) -> bool {
        matches!(self, Decision::Block { .. })
    }

    pub fn is_config_error(&self) -> bool {
        matches!(self, Decision::Block { config_error: true, .. })
    }

    /// Get the reason
    pub fn reason(&self) -> &str {
        match self {
            Decision::Allow { reason } => reason,
            Decision::Block { reason, .. } => reason,
        }
    }

    /// Guide to show with a block; never set for config errors
    pub fn guide(&self) -> Option<&str> {
        match self {
            Decision::Block {
                guide,
                config_error: false,
                ..
            } if !guide.is_empty() => Some(guide),
            _ => None,
        }
    }

    /// Reason and guide combined for display
    pub fn message(&self) -> String {
        match self.guide() {
            Some(guide) => format!("{}\n\n{}", self.reason(), guide),
            None => self.reason().to_string(),
        }
    }
}

impl HookOutput {
    /// Create an allow response (empty output = allow)
    pub fn allow() -> Self {
        HookOutput {
            decision: None,
            reason: None,
        }
    }

    /// Create a block response with reason
    pub fn block(reason: impl Into<String>) -> Self {
        HookOutput {
            decision: Some("block"),
            reason: Some(reason.into()),
        }
    }

    /// Create output from a Decision
    pub fn from_decision(decision: &Decision) -> Self {
        match decision {
            Decision::Allow { .. } => HookOutput::allow(),
            Decision::Block { .. } => HookOutput::block(decision.message()),
        }
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}
