//! Shell tokenization helpers
//!
//! Best-effort only: no variable expansion, globbing or substitution.

use once_cell::sync::Lazy;
use regex::Regex;

/// Split a command line into simple-command segments
///
/// Splits on `;`, `&&`, `||`, `|`, a background `&` and newlines. An `&` that
/// belongs to a redirection (`&>`, `>&`, `2>&1`) does not split. Quotes are
/// not respected, so a separator inside a quoted string also splits.
pub fn split_segments(command: &str) -> Vec<String> {
    let chars: Vec<char> = command.chars().collect();
    let mut segments = Vec::new();
    let mut current = String::new();

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        let next = chars.get(i + 1).copied();
        let is_separator = match c {
            ';' | '\n' | '|' => true,
            '&' if next == Some('&') => true,
            '&' => {
                let prev = i.checked_sub(1).map(|p| chars[p]);
                !matches!(prev, Some('>') | Some('<')) && next != Some('>')
            }
            _ => false,
        };

        if is_separator {
            segments.push(std::mem::take(&mut current));
            // `&&` and `||` are one separator
            if (c == '&' || c == '|') && next == Some(c) {
                i += 1;
            }
        } else {
            current.push(c);
        }
        i += 1;
    }
    segments.push(current);

    segments
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Tokenize a shell fragment into words
///
/// Uses shlex for quoting; if the quotes don't balance, falls back to
/// whitespace splitting with stray quotes stripped.
pub fn tokenize(fragment: &str) -> Vec<String> {
    match shlex::split(fragment) {
        Some(tokens) => tokens,
        None => fragment.split_whitespace().map(strip_quotes).collect(),
    }
}

/// Trim whitespace and surrounding quote characters
pub fn strip_quotes(word: &str) -> String {
    word.trim()
        .trim_matches(|c| c == '"' || c == '\'')
        .trim()
        .to_string()
}

/// True for tokens that end a command's operand list
///
/// Covers redirections (`>`, `>>`, `2>&1`, `<`), a bare `&`, the `)` closing
/// a subshell and comments.
pub fn is_operand_terminator(token: &str) -> bool {
    static REDIRECT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:\d+|&)?[<>]").unwrap());

    token == "&" || token.starts_with(')') || token.starts_with('#') || REDIRECT.is_match(token)
}

/// Drop `)` characters closing a subshell from the end of a word
///
/// Only unbalanced parentheses go, so `report(1)` stays intact.
pub fn strip_subshell_close(word: &str) -> &str {
    let mut word = word;
    while word.ends_with(')') && word.matches(')').count() > word.matches('(').count() {
        word = &word[..word.len() - 1];
    }
    word
}

/// True for flag tokens like `-rf` or `--force`
pub fn is_flag(token: &str) -> bool {
    token.starts_with('-')
}
