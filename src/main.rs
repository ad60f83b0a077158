//! block-guard - Directory protection for Claude Code hooks
//!
//! Reads one hook request from stdin and writes the decision to stdout.
//!
//! # Usage
//!
//! ```bash
//! # As a PreToolUse hook (reads JSON from stdin, writes JSON to stdout)
//! echo '{"tool_name":"Edit","tool_input":{"file_path":"/p/a.txt"}}' | block-guard
//!
//! # Dry-run mode (report what would be blocked, but allow)
//! block-guard --dry-run
//! ```

use std::env;
use std::io::{self, Read, Write};
use std::path::Path;

use block_guard::{
    audit::AuditLogger, config::Config, engine::ProtectionEngine, hook, output::HookOutput,
};

/// Print version information
fn print_version() {
    println!("block-guard {}", env!("CARGO_PKG_VERSION"));
}

/// Print help message
fn print_help() {
    println!(
        r#"block-guard - Directory protection for Claude Code hooks

USAGE:
    block-guard [OPTIONS]

OPTIONS:
    -h, --help              Print this help message
    -v, --version           Print version information
    -d, --dry-run           Report what would be blocked, but allow
    -c, --config PATH       Path to config file

MARKER FILES:
    .block                  Protects its directory and everything below
    .block.local            Personal additions, merged with .block

    {{}}                                   block everything
    {{"allowed": ["src/**/*.ts"]}}         block all but these
    {{"blocked": ["*.secret"]}}            block only these
    {{"guide": "why, and what to do"}}     message shown on block

USAGE AS HOOK:
    Configure in ~/.claude/settings.json:
    {{
      "hooks": {{
        "PreToolUse": [{{
          "matcher": "Edit|MultiEdit|Write|NotebookEdit|Bash",
          "hooks": [{{ "type": "command", "command": "block-guard" }}]
        }}]
      }}
    }}
"#
    );
}

/// Parse command line arguments
struct Args {
    help: bool,
    version: bool,
    dry_run: bool,
    config_path: Option<String>,
}

impl Args {
    fn parse() -> Self {
        let args: Vec<String> = env::args().collect();
        let mut result = Args {
            help: false,
            version: false,
            dry_run: false,
            config_path: None,
        };

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "-h" | "--help" => result.help = true,
                "-v" | "--version" => result.version = true,
                "-d" | "--dry-run" => result.dry_run = true,
                "-c" | "--config" => {
                    if i + 1 < args.len() {
                        i += 1;
                        result.config_path = Some(args[i].clone());
                    }
                }
                arg if arg.starts_with("--config=") => {
                    let path = arg.trim_start_matches("--config=");
                    result.config_path = Some(path.to_string());
                }
                _ => {}
            }
            i += 1;
        }

        result
    }
}

/// Write a response line to stdout
fn emit(output: &HookOutput) {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let _ = writeln!(handle, "{}", output.to_json());
    let _ = handle.flush();
}

fn main() {
    let args = Args::parse();

    if args.help {
        print_help();
        return;
    }

    if args.version {
        print_version();
        return;
    }

    let config = match args.config_path {
        Some(ref path) => Config::load_from(Path::new(path)).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to load config from {}: {}", path, e);
            Config::default()
        }),
        None => Config::load(),
    };

    let mut input_json = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input_json) {
        eprintln!("Warning: Failed to read stdin (allowing): {}", e);
        emit(&HookOutput::allow());
        return;
    }

    let engine = ProtectionEngine::new(config.clone());
    let mut logger = AuditLogger::new(config.audit_path().as_deref());
    emit(&hook::respond(&input_json, &engine, args.dry_run, &mut logger));
}
