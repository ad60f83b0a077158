//! File targets of shell commands
//!
//! Finds the paths a command line would create, overwrite, move into or
//! delete. Each command family has its own recognizer and a command may hit
//! several of them. Unrecognized forms yield nothing; recognized forms err on
//! the side of capturing too much.

use once_cell::sync::Lazy;
use regex::Regex;

use super::shell::{
    is_flag, is_operand_terminator, split_segments, strip_quotes, strip_subshell_close, tokenize,
};

/// How a recognizer turns its match into paths
#[derive(Debug, Clone, Copy)]
enum Capture {
    /// Every non-flag operand after the command name; the regex matches
    /// only the command name itself
    Operands,
    /// The single captured word
    Word,
}

struct Recognizer {
    regex: Regex,
    capture: Capture,
}

impl Recognizer {
    fn command(name: &'static str) -> Self {
        // preceded by start, whitespace, `(` or a path (`/bin/rm`)
        let pattern = format!(r"(?:^|[\s(/]){}\s+", regex::escape(name));
        Self {
            regex: Regex::new(&pattern).unwrap(),
            capture: Capture::Operands,
        }
    }

    fn word(pattern: &str) -> Self {
        Self {
            regex: Regex::new(pattern).unwrap(),
            capture: Capture::Word,
        }
    }

    fn collect(&self, segment: &str, targets: &mut Vec<String>) {
        match self.capture {
            // every occurrence of the command word starts its own operand list
            Capture::Operands => {
                for head in self.regex.find_iter(segment) {
                    for operand in operands(&segment[head.end()..]) {
                        push_unique(targets, operand);
                    }
                }
            }
            Capture::Word => {
                for caps in self.regex.captures_iter(segment) {
                    if let Some(word) = caps.name("arg") {
                        push_unique(targets, strip_quotes(word.as_str()));
                    }
                }
            }
        }
    }
}

static RECOGNIZERS: Lazy<Vec<Recognizer>> = Lazy::new(|| {
    vec![
        Recognizer::command("rm"),
        Recognizer::command("mv"),
        Recognizer::command("cp"),
        Recognizer::command("touch"),
        Recognizer::command("mkdir"),
        Recognizer::command("rmdir"),
        Recognizer::command("tee"),
        // dd ... of=PATH
        Recognizer::word(
            r#"(?:^|[\s(/])dd\s.*?\bof=(?P<arg>"[^"]*"|'[^']*'|[^\s;&|<>()]+)"#,
        ),
        // > and >>, but not fd duplication like 2>&1
        Recognizer::word(
            r#"(?:^|[^<>])(?:&|\d*)>>?\s*(?P<arg>"[^"]*"|'[^']*'|[^\s;&|<>()]+)"#,
        ),
    ]
});

/// Extract the set of paths a shell command would write to or remove
///
/// Paths come back in the order they were found, without duplicates, quotes
/// stripped. Relative paths are returned as written.
pub fn extract_targets(command: &str) -> Vec<String> {
    let mut targets = Vec::new();

    for segment in split_segments(command) {
        for recognizer in RECOGNIZERS.iter() {
            recognizer.collect(&segment, &mut targets);
        }
    }

    targets
}

/// Non-flag operands up to the first redirection or control token, or the
/// end of the enclosing subshell
fn operands(args: &str) -> Vec<String> {
    let mut found = Vec::new();

    for token in tokenize(args) {
        if is_operand_terminator(&token) {
            break;
        }
        let word = strip_subshell_close(&token);
        let closes_subshell = word.len() < token.len();
        if !is_flag(word) {
            let word = strip_quotes(word);
            if !word.is_empty() {
                found.push(word);
            }
        }
        if closes_subshell {
            break;
        }
    }

    found
}

fn push_unique(targets: &mut Vec<String>, target: String) {
    if !target.is_empty() && !targets.contains(&target) {
        targets.push(target);
    }
}
