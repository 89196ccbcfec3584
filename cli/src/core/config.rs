//! # cidrsmash Configuration
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module implements the run configuration for cidrsmash. Unlike tools
//! with layered config files, cidrsmash has exactly two knobs, both supplied
//! on the command line: the CIDR prefix length and the input source. They are
//! gathered into a single immutable [`Config`] struct, built once in `main`
//! and passed by reference to the pipeline handler. No process-wide mutable
//! state exists.
//!
//! ## Architecture
//!
//! [`Config::new`] is the one place the prefix length is range-checked.
//! Everything downstream (the masker in `common::net`, the pipeline in
//! `commands::smash`) may assume `prefix <= 32` and therefore carries no
//! range errors of its own. An out-of-range value yields
//! [`CidrsmashError::MaskOutOfRange`], which `main` reports and converts to
//! the EX_USAGE exit code before any input is read.
//!
//! Note the permissive lower bound: a prefix of `0` is accepted and collapses
//! every address to `0.0.0.0/0`.
//!
use crate::common::input::InputSource;
use crate::common::net;
use crate::core::error::{CidrsmashError, Result};
use std::path::PathBuf;
use tracing::debug;

/// Immutable per-run configuration, constructed once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// CIDR prefix length, guaranteed to be in 0..=32.
    pub prefix: u8,
    /// Where the address lines come from (a file or standard input).
    pub input: InputSource,
}

impl Config {
    /// Builds the configuration from the raw CLI values.
    ///
    /// # Arguments
    ///
    /// * `mask` - The requested CIDR prefix length, still as the raw signed
    ///   integer from the command line so negative values reach the range
    ///   check instead of failing argument parsing.
    /// * `infile` - Optional input file path; `None` selects standard input.
    ///
    /// # Errors
    ///
    /// Returns [`CidrsmashError::MaskOutOfRange`] when `mask` is outside
    /// 0..=32. This is the tool's only configuration error.
    pub fn new(mask: i64, infile: Option<PathBuf>) -> Result<Self> {
        if !(0..=i64::from(net::MAX_PREFIX)).contains(&mask) {
            anyhow::bail!(CidrsmashError::MaskOutOfRange { value: mask });
        }
        let config = Config {
            prefix: mask as u8,
            input: InputSource::from_arg(infile),
        };
        debug!("Run configuration: {:?}", config);
        Ok(config)
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_full_prefix_range() -> Result<()> {
        for mask in [0, 1, 24, 31, 32] {
            let cfg = Config::new(mask, None)?;
            assert_eq!(cfg.prefix, mask as u8);
        }
        Ok(())
    }

    #[test]
    fn test_rejects_out_of_range_masks() {
        for mask in [-1, 33, 255, i64::MAX, i64::MIN] {
            let err = Config::new(mask, None).unwrap_err();
            // The usage error must be recognizable by main for exit-code mapping.
            assert!(matches!(
                err.downcast_ref::<CidrsmashError>(),
                Some(CidrsmashError::MaskOutOfRange { value }) if *value == mask
            ));
            assert!(err.to_string().contains("out of range"));
        }
    }

    #[test]
    fn test_input_source_selection() -> Result<()> {
        let cfg = Config::new(24, None)?;
        assert!(matches!(cfg.input, InputSource::Stdin));

        let cfg = Config::new(24, Some(PathBuf::from("ips.txt")))?;
        assert!(matches!(cfg.input, InputSource::File(ref p) if p == &PathBuf::from("ips.txt")));
        Ok(())
    }
}
