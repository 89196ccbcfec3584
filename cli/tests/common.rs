//! # cidrsmash CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration test files in `cli/tests/`. Each other
//! `.rs` file in this directory is compiled as a separate test crate that
//! drives the compiled `cidrsmash` binary.
//!

// Allow potentially unused code in this common module, as different test files
// might use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;

/// Creates an `assert_cmd::Command` pointing at the compiled `cidrsmash`
/// binary for the current test run.
///
/// ## Panics
/// Panics if the binary cannot be found via `Command::cargo_bin`.
pub fn cidrsmash_cmd() -> Command {
    Command::cargo_bin("cidrsmash").expect("Failed to find cidrsmash binary for testing")
}

/// Collects stdout as a sorted list of lines, so assertions do not depend on
/// the set's unspecified iteration order.
pub fn sorted_stdout_lines(output: &std::process::Output) -> Vec<String> {
    let stdout = String::from_utf8(output.stdout.clone()).expect("stdout was not UTF-8");
    let mut lines: Vec<String> = stdout.lines().map(str::to_string).collect();
    lines.sort_unstable();
    lines
}
