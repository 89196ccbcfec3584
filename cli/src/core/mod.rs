//! # cidrsmash Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the core infrastructure components of cidrsmash:
//! error management and the run configuration. Both are used by the command
//! handler in `commands::smash`.
//!
//! ## Architecture
//!
//! - `config`: the immutable per-run configuration (CIDR prefix + input
//!   source), built and validated once at startup.
//! - `error`: the domain error type and the shared `Result` alias.
//!
pub mod config;
pub mod error;
