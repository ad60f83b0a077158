//! Shell parsing utilities for block-guard
//!
//! Tokenization helpers and extraction of the paths a command writes to.

pub mod shell;
pub mod targets;
