//! # cidrsmash Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the command handlers of the cidrsmash CLI and makes
//! them accessible to the entry point (`main.rs`). The tool currently has a
//! single operation, so there is exactly one handler module.
//!
/// The smash pipeline: filter, validate, mask, deduplicate, print.
pub mod smash;
