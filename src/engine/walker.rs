//! Marker discovery
//!
//! Walks from a target's parent directory up to the filesystem root and
//! stops at the first directory holding a marker file. That directory is
//! authoritative: its parents are never consulted.

use std::path::{Component, Path, PathBuf};

use crate::config::MarkersConfig;
use crate::marker::{loader, merge, MarkerConfig};

/// The nearest protecting directory of one target path
#[derive(Debug, Clone)]
pub struct ProtectionInfo {
    /// Absolute, normalized target path
    pub target: PathBuf,

    /// Directory holding the marker file(s)
    pub protecting_dir: PathBuf,

    /// Which marker file(s) applied, e.g. `.block + .block.local`
    pub marker_label: String,

    /// Effective configuration after merging main and local
    pub config: MarkerConfig,
}

impl ProtectionInfo {
    /// Target path relative to the protecting directory, `/`-separated
    pub fn relative_path(&self) -> String {
        relative_path(&self.target, &self.protecting_dir)
    }
}

/// Find and load the nearest marker files above `target`
///
/// `target` must already be absolute (see [`resolve_target`]).
pub fn find_nearest_protection(target: &Path, markers: &MarkersConfig) -> Option<ProtectionInfo> {
    let mut dir = target.parent()?;

    loop {
        let main_path = dir.join(&markers.main);
        let local_path = dir.join(&markers.local);
        let has_main = main_path.exists();
        let has_local = local_path.exists();

        if has_main || has_local {
            let (config, marker_label) = match (has_main, has_local) {
                (true, true) => (
                    merge::merge(loader::load(&main_path), Some(loader::load(&local_path))),
                    format!("{} + {}", markers.main, markers.local),
                ),
                (true, false) => (loader::load(&main_path), markers.main.clone()),
                _ => (loader::load(&local_path), markers.local.clone()),
            };

            return Some(ProtectionInfo {
                target: target.to_path_buf(),
                protecting_dir: dir.to_path_buf(),
                marker_label,
                config,
            });
        }

        dir = dir.parent()?;
    }
}

/// Existence-only probe: is there any marker file above `target`?
///
/// Parses nothing; used to skip loading entirely for unprotected trees.
pub fn has_any_marker(target: &Path, markers: &MarkersConfig) -> bool {
    target
        .ancestors()
        .skip(1)
        .any(|dir| dir.join(&markers.main).exists() || dir.join(&markers.local).exists())
}

/// Turn a raw path from a tool request into an absolute, normalized path
///
/// Expands a leading `~/`, joins relative paths onto `cwd`, and removes `.`
/// and `..` components lexically (symlinks are left alone).
pub fn resolve_target(raw: &str, cwd: &Path) -> PathBuf {
    let expanded = expand_home(raw);
    let joined = if expanded.is_absolute() {
        expanded
    } else {
        cwd.join(expanded)
    };
    normalize(&joined)
}

fn expand_home(raw: &str) -> PathBuf {
    if raw == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    if let Some(rest) = raw.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(raw)
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Path of `target` relative to `dir`
///
/// The directory prefix is compared case-insensitively; the remainder keeps
/// its case. Separators are normalized to `/` and the leading one dropped.
pub fn relative_path(target: &Path, dir: &Path) -> String {
    let target = target.to_string_lossy().replace('\\', "/");
    let dir = dir.to_string_lossy().replace('\\', "/");

    let rest = strip_prefix_ignore_case(&target, &dir).unwrap_or(&target);
    rest.trim_start_matches('/').to_string()
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let mut chars = s.char_indices();
    let mut end = 0;
    for expected in prefix.chars() {
        let (idx, actual) = chars.next()?;
        if !actual.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
        end = idx + actual.len_utf8();
    }
    Some(&s[end..])
}
