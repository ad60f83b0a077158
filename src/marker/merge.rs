//! Merging a main marker file with its local companion
//!
//! Precedence, most restrictive first: an error in either file, then a
//! block-everything file, then list modes. Block-lists are unioned;
//! an allow-list in the local file replaces the main one outright.

use super::{MarkerConfig, PatternEntry, MIXED_MODES_ERROR};

/// Combine `main` with an optional `local` configuration from the same directory
pub fn merge(main: MarkerConfig, local: Option<MarkerConfig>) -> MarkerConfig {
    let Some(local) = local else {
        return main;
    };

    if main.has_error() {
        return main;
    }
    if local.has_error() {
        return local;
    }

    let guide = merged_guide(&main, &local);

    if main.is_empty || local.is_empty {
        return MarkerConfig::block_all(guide);
    }

    let main_allowed = !main.allowed_entries().is_empty();
    let main_blocked = !main.blocked_entries().is_empty();
    let local_allowed = !local.allowed_entries().is_empty();
    let local_blocked = !local.blocked_entries().is_empty();

    if (main_allowed && local_blocked) || (main_blocked && local_allowed) {
        return MarkerConfig::invalid(MIXED_MODES_ERROR);
    }

    if main_blocked || local_blocked {
        let blocked = union(main.blocked_entries(), local.blocked_entries());
        return MarkerConfig {
            blocked: Some(blocked),
            guide,
            ..MarkerConfig::default()
        };
    }

    if main_allowed || local_allowed {
        let allowed = local.allowed.or(main.allowed);
        return MarkerConfig {
            allowed,
            guide,
            ..MarkerConfig::default()
        };
    }

    // Only explicitly empty lists remain. An empty allow-list allows nothing,
    // so it outranks an empty block-list.
    if main.allowed.is_some() || local.allowed.is_some() {
        return MarkerConfig {
            allowed: Some(Vec::new()),
            guide,
            ..MarkerConfig::default()
        };
    }
    if main.blocked.is_some() || local.blocked.is_some() {
        return MarkerConfig {
            blocked: Some(Vec::new()),
            guide,
            ..MarkerConfig::default()
        };
    }

    MarkerConfig::block_all(guide)
}

fn merged_guide(main: &MarkerConfig, local: &MarkerConfig) -> String {
    if local.guide.is_empty() {
        main.guide.clone()
    } else {
        local.guide.clone()
    }
}

/// Order-preserving union; entries compare by pattern and guide
fn union(main: &[PatternEntry], local: &[PatternEntry]) -> Vec<PatternEntry> {
    let mut merged: Vec<PatternEntry> = Vec::with_capacity(main.len() + local.len());
    for entry in main.iter().chain(local) {
        if !merged.contains(entry) {
            merged.push(entry.clone());
        }
    }
    merged
}
