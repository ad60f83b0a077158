//! Wildcard pattern compilation and matching
//!
//! Patterns are matched against a path relative to the protecting directory:
//!
//! - `**` matches anything, including `/`; `**/` also matches nothing at all,
//!   so `**/config.json` covers `config.json` at the top level
//! - `*` matches anything except `/`
//! - `?` matches exactly one character
//! - everything else is literal
//!
//! Backslashes are treated as `/` on both sides.

use regex::Regex;

/// A compiled wildcard pattern
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    pattern: String,
    regex: Regex,
}

impl PatternMatcher {
    /// Compile a wildcard pattern
    pub fn compile(pattern: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(&glob_to_regex(pattern))?;
        Ok(Self {
            pattern: pattern.to_string(),
            regex,
        })
    }

    /// Test a path relative to the protecting directory
    pub fn matches(&self, relative_path: &str) -> bool {
        let normalized = normalize_separators(relative_path);
        self.regex.is_match(normalized.trim_start_matches('/'))
    }

    /// The original pattern text
    pub fn as_str(&self) -> &str {
        &self.pattern
    }
}

/// Compile and test in one go
pub fn matches(pattern: &str, relative_path: &str) -> Result<bool, regex::Error> {
    Ok(PatternMatcher::compile(pattern)?.matches(relative_path))
}

/// Replace backslashes with forward slashes
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

/// Translate a wildcard pattern into an anchored regex
pub fn glob_to_regex(pattern: &str) -> String {
    let normalized = normalize_separators(pattern);
    let chars: Vec<char> = normalized.chars().collect();

    // (?s) so `?` and `**` also match newlines in odd file names
    let mut regex = String::with_capacity(normalized.len() * 2 + 8);
    regex.push_str("(?s)^");

    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '*' if chars.get(i + 1) == Some(&'*') => {
                if chars.get(i + 2) == Some(&'/') {
                    regex.push_str("(?:.*/)?");
                    i += 3;
                } else {
                    regex.push_str(".*");
                    i += 2;
                }
            }
            '*' => {
                regex.push_str("[^/]*");
                i += 1;
            }
            '?' => {
                regex.push('.');
                i += 1;
            }
            c => {
                let mut buf = [0u8; 4];
                regex.push_str(&regex::escape(c.encode_utf8(&mut buf)));
                i += 1;
            }
        }
    }

    regex.push('$');
    regex
}
