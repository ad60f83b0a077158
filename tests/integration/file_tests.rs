//! Edit/Write/NotebookEdit requests against marker files

use block_guard::audit::AuditLogger;
use block_guard::{respond, Config, ProtectionEngine};
use serde_json::json;

use super::{edit, run, write, Fixture};

// ============================================================================
// Discovery
// ============================================================================

#[test]
fn test_no_marker_allows() {
    let fx = Fixture::new();
    assert!(edit(&fx.project().join("test.txt")).is_allow());
    assert!(write(&fx.project().join("deep/nested/new.txt")).is_allow());
}

#[test]
fn test_empty_marker_blocks_everything_below() {
    let fx = Fixture::new();
    fx.write("project/.block", "{}");

    for rel in ["a.txt", "src/main.rs", "a/b/c/d.json"] {
        let decision = edit(&fx.project().join(rel));
        assert!(decision.is_block(), "{} should be blocked", rel);
        assert!(decision.reason().contains("fully protected"));
    }
}

#[test]
fn test_zero_byte_marker_blocks_everything() {
    let fx = Fixture::new();
    fx.write("project/.block", "");
    assert!(write(&fx.project().join("x.txt")).is_block());
}

#[test]
fn test_marker_in_parent_directory() {
    let fx = Fixture::new();
    fx.write("project/.block", "{}");
    assert!(edit(&fx.project().join("child/test.txt")).is_block());
}

#[test]
fn test_local_marker_alone_blocks() {
    let fx = Fixture::new();
    fx.write("project/.block.local", "{}");
    assert!(edit(&fx.project().join("test.txt")).is_block());
}

#[test]
fn test_sibling_directory_unaffected() {
    let fx = Fixture::new();
    fx.write("project/.block", "{}");
    assert!(edit(&fx.path("other/test.txt")).is_allow());
}

#[test]
fn test_nearest_marker_wins() {
    let fx = Fixture::new();
    fx.write("project/.block", "{}");
    fx.write("project/docs/.block", r#"{"allowed": ["*.txt"]}"#);

    assert!(edit(&fx.project().join("docs/notes.txt")).is_allow());
    assert!(edit(&fx.project().join("docs/notes.md")).is_block());
    assert!(edit(&fx.project().join("notes.txt")).is_block());
}

// ============================================================================
// Allowed / blocked lists
// ============================================================================

#[test]
fn test_blocked_pattern_scenario() {
    let fx = Fixture::new();
    fx.write("project/.block", r#"{"blocked": ["*.secret"]}"#);

    let decision = edit(&fx.project().join("config.secret"));
    assert!(decision.is_block());
    assert!(decision.reason().contains("*.secret"));

    assert!(edit(&fx.project().join("config.json")).is_allow());
}

#[test]
fn test_allowed_pattern_scenario() {
    let fx = Fixture::new();
    fx.write("project/.block", r#"{"allowed": ["src/**/*.ts"]}"#);

    assert!(edit(&fx.project().join("src/deep/a.ts")).is_allow());

    let decision = edit(&fx.project().join("lib/a.ts"));
    assert!(decision.is_block());
    assert!(decision.reason().contains("not in the allowed list"));
}

#[test]
fn test_single_star_does_not_cross_directories() {
    let fx = Fixture::new();
    fx.write("project/.block", r#"{"blocked": ["src/*.ts"]}"#);

    assert!(edit(&fx.project().join("src/index.ts")).is_block());
    assert!(edit(&fx.project().join("src/deep/nested.ts")).is_allow());
}

#[test]
fn test_double_star_slash_matches_top_level_and_nested() {
    let fx = Fixture::new();
    fx.write("project/.block", r#"{"blocked": ["**/file.txt"]}"#);

    assert!(edit(&fx.project().join("file.txt")).is_block());
    assert!(edit(&fx.project().join("nested/file.txt")).is_block());
    assert!(edit(&fx.project().join("a/b/c/d/file.txt")).is_block());
    assert!(edit(&fx.project().join("other.txt")).is_allow());
}

#[test]
fn test_question_mark_and_literal_dots() {
    let fx = Fixture::new();
    fx.write("project/.block", r#"{"blocked": ["file?.txt", "*.config.ts"]}"#);

    assert!(edit(&fx.project().join("file1.txt")).is_block());
    assert!(edit(&fx.project().join("file12.txt")).is_allow());
    assert!(edit(&fx.project().join("app.config.ts")).is_block());
    assert!(edit(&fx.project().join("appXconfigXts")).is_allow());
}

#[test]
fn test_entry_guide_overrides_file_guide() {
    let fx = Fixture::new();
    fx.write(
        "project/.block",
        r#"{
            "blocked": [{"pattern": "*.lock", "guide": "Run the package manager instead"}, "*.env"],
            "guide": "Protected project files"
        }"#,
    );

    let decision = edit(&fx.project().join("Cargo.lock"));
    assert_eq!(decision.guide(), Some("Run the package manager instead"));

    let decision = edit(&fx.project().join("prod.env"));
    assert_eq!(decision.guide(), Some("Protected project files"));
}

#[test]
fn test_explicit_empty_lists() {
    let fx = Fixture::new();
    fx.write("project/a/.block", r#"{"allowed": []}"#);
    fx.write("project/b/.block", r#"{"blocked": []}"#);

    assert!(edit(&fx.project().join("a/x.txt")).is_block());
    assert!(edit(&fx.project().join("b/x.txt")).is_allow());
}

// ============================================================================
// Config errors
// ============================================================================

#[test]
fn test_invalid_marker_content_fails_closed() {
    let fx = Fixture::new();
    fx.write("project/.block", "not json");

    let decision = edit(&fx.project().join("file.txt"));
    assert!(decision.is_block());
    assert!(!decision.is_config_error());
}

#[test]
fn test_both_lists_in_one_file_is_config_error() {
    let fx = Fixture::new();
    fx.write(
        "project/.block",
        r#"{"allowed": ["*.txt"], "blocked": ["*.md"], "guide": "never shown"}"#,
    );

    for rel in ["a.txt", "a.md", "a.rs"] {
        let decision = edit(&fx.project().join(rel));
        assert!(decision.is_config_error(), "{} should hit the config error", rel);
        assert!(decision.reason().contains("'allowed' and 'blocked'"));
        assert_eq!(decision.guide(), None);
    }
}

// ============================================================================
// Marker self-protection
// ============================================================================

#[test]
fn test_existing_marker_cannot_be_edited() {
    let fx = Fixture::new();
    let marker = fx.write("project/.block", r#"{"allowed": ["*"]}"#);

    let decision = edit(&marker);
    assert!(decision.is_block());
    assert!(decision.reason().contains("Cannot modify"));
    assert!(write(&marker).is_block());

    // the same config still allows ordinary files
    assert!(edit(&fx.project().join("anything.txt")).is_allow());
}

#[test]
fn test_existing_local_marker_cannot_be_edited() {
    let fx = Fixture::new();
    let local = fx.write("project/.block.local", r#"{"blocked": []}"#);
    assert!(edit(&local).is_block());
}

#[test]
fn test_new_marker_may_be_created() {
    let fx = Fixture::new();
    assert!(write(&fx.project().join(".block")).is_allow());
}

#[test]
fn test_new_marker_under_protection_is_still_evaluated() {
    let fx = Fixture::new();
    fx.write("project/.block", "{}");
    assert!(write(&fx.project().join("sub/.block")).is_block());
}

// ============================================================================
// Request handling
// ============================================================================

#[test]
fn test_notebook_edit() {
    let fx = Fixture::new();
    fx.write("project/.block", r#"{"blocked": ["*.ipynb"]}"#);

    let decision = run(json!({
        "tool_name": "NotebookEdit",
        "tool_input": { "notebook_path": fx.project().join("analysis.ipynb"), "new_source": "" },
    }));
    assert!(decision.is_block());
}

#[test]
fn test_relative_path_uses_request_cwd() {
    let fx = Fixture::new();
    fx.write("project/.block", r#"{"blocked": ["keys/*.secret"]}"#);

    let decision = run(json!({
        "tool_name": "Write",
        "tool_input": { "file_path": "keys/api.secret", "content": "" },
        "cwd": fx.project(),
    }));
    assert!(decision.is_block());
}

#[test]
fn test_parent_components_are_resolved() {
    let fx = Fixture::new();
    fx.write("project/.block", "{}");
    let sneaky = fx.path("other/../project/file.txt");
    assert!(edit(&sneaky).is_block());
}

#[test]
fn test_unknown_tools_pass_through() {
    let fx = Fixture::new();
    fx.write("project/.block", "{}");

    let decision = run(json!({
        "tool_name": "Read",
        "tool_input": { "file_path": fx.project().join("a.txt") },
    }));
    assert!(decision.is_allow());
}

#[test]
fn test_unusable_requests_fail_open() {
    let fx = Fixture::new();
    fx.write("project/.block", "{}");
    let engine = ProtectionEngine::new(Config::default());

    let missing_tool =
        json!({ "tool_input": { "file_path": fx.project().join("a.txt") } }).to_string();
    for request in ["", "not json", "[1,2]", missing_tool.as_str()] {
        let output = respond(request, &engine, false, &mut AuditLogger::default());
        assert_eq!(output.to_json(), "{}", "{:?} should be allowed", request);
    }
}

#[test]
fn test_empty_file_path_fails_open() {
    let fx = Fixture::new();
    fx.write("project/.block", "{}");

    let decision = run(json!({
        "tool_name": "Edit",
        "tool_input": { "file_path": "" },
        "cwd": fx.project(),
    }));
    assert!(decision.is_allow());
}

#[test]
fn test_dry_run_turns_block_into_allow() {
    let fx = Fixture::new();
    fx.write("project/.block", "{}");
    let engine = ProtectionEngine::new(Config::default());
    let request = json!({
        "tool_name": "Write",
        "tool_input": { "file_path": fx.project().join("a.txt"), "content": "" },
    })
    .to_string();

    let output = respond(&request, &engine, false, &mut AuditLogger::default());
    assert_eq!(output.decision, Some("block"));

    let output = respond(&request, &engine, true, &mut AuditLogger::default());
    assert_eq!(output.to_json(), "{}");
}
