//! Evaluation of one target against its effective marker configuration

use crate::marker::pattern::PatternMatcher;
use crate::marker::PatternEntry;
use crate::output::Decision;

use super::walker::ProtectionInfo;

/// Decide a single target path
pub fn evaluate(info: &ProtectionInfo) -> Decision {
    let config = &info.config;
    let dir = info.protecting_dir.display().to_string();
    let label = &info.marker_label;

    if let Some(error) = &config.error {
        return Decision::config_error(format!(
            "Invalid {} in {}: {}",
            label, dir, error
        ));
    }

    if config.is_empty {
        return Decision::block(
            format!("Directory {} is fully protected by {}", dir, label),
            &config.guide,
        );
    }

    let relative = info.relative_path();

    if let Some(allowed) = &config.allowed {
        return match first_match(allowed, &relative) {
            Ok(Some(entry)) => Decision::allow(format!(
                "'{}' matches allowed pattern '{}'",
                relative,
                entry.pattern()
            )),
            Ok(None) => Decision::block(
                format!(
                    "'{}' is not in the allowed list of {} in {}",
                    relative, label, dir
                ),
                &config.guide,
            ),
            Err(e) => invalid_pattern(label, &dir, e),
        };
    }

    if let Some(blocked) = &config.blocked {
        return match first_match(blocked, &relative) {
            Ok(Some(entry)) => Decision::block(
                format!(
                    "'{}' matches blocked pattern '{}' in {} ({})",
                    relative,
                    entry.pattern(),
                    label,
                    dir
                ),
                entry.guide().unwrap_or(config.guide.as_str()),
            ),
            Ok(None) => Decision::allow(format!("'{}' matches no blocked pattern", relative)),
            Err(e) => invalid_pattern(label, &dir, e),
        };
    }

    Decision::block(
        format!("Directory {} is protected by {}", dir, label),
        &config.guide,
    )
}

/// First entry whose pattern matches, in list order
fn first_match<'a>(
    entries: &'a [PatternEntry],
    relative: &str,
) -> Result<Option<&'a PatternEntry>, regex::Error> {
    for entry in entries {
        if PatternMatcher::compile(entry.pattern())?.matches(relative) {
            return Ok(Some(entry));
        }
    }
    Ok(None)
}

fn invalid_pattern(label: &str, dir: &str, error: regex::Error) -> Decision {
    Decision::config_error(format!("Invalid pattern in {} in {}: {}", label, dir, error))
}
