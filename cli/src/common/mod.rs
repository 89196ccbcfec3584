//! # cidrsmash Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! This module is the organizational entry point for the shared utility
//! modules of cidrsmash, separating reusable building blocks from the
//! command-specific pipeline logic in `commands::` and the infrastructure in
//! `core::`.
//!
//! ## Architecture
//!
//! - **`input`**: the polymorphic line source. Both variants (a file path or
//!   standard input) expose the same open-and-read contract, so the pipeline
//!   driver never cares which one it was handed.
//! - **`net`**: IPv4 prefix-mask arithmetic and the [`net::Network`] value
//!   type that the dedup set and the output formatting are built on.
//!
/// Line sources: read the input file or standard input through one contract.
pub mod input;
/// IPv4 prefix masks and the network value type.
pub mod net;
