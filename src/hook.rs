//! One hook round trip: request text in, response out
//!
//! Requests that can't be understood are let through; only marker files
//! ever block.

use crate::audit::AuditLogger;
use crate::engine::ProtectionEngine;
use crate::input::HookInput;
use crate::output::HookOutput;

/// Answer one hook request
///
/// Empty or unparseable input is allowed. In dry-run mode a block is
/// reported on stderr and turned into an allow.
pub fn respond(
    input_json: &str,
    engine: &ProtectionEngine,
    dry_run: bool,
    logger: &mut AuditLogger,
) -> HookOutput {
    // No input = nothing to check
    if input_json.trim().is_empty() {
        return HookOutput::allow();
    }

    let input = match HookInput::from_json(input_json) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Warning: Failed to parse hook input (allowing): {}", e);
            return HookOutput::allow();
        }
    };

    let decision = engine.check(&input);

    if let Err(e) = logger.log_decision(&input, &decision, dry_run) {
        eprintln!("Warning: Failed to write audit log: {}", e);
    }

    if dry_run && decision.is_block() {
        eprintln!("[block-guard] dry-run, would block: {}", decision.message());
        return HookOutput::allow();
    }

    HookOutput::from_decision(&decision)
}
