//! # cidrsmash Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! Defines the error types used throughout cidrsmash. The taxonomy is small
//! by design: the only domain error the tool can produce is an out-of-range
//! CIDR mask, which is fatal and reported before any input is read.
//! Everything else (an unopenable input file, a failed read) propagates as an
//! `anyhow::Error` with context attached at the failure site. Malformed
//! address lines are *not* errors; they are filtered out silently.
//!
//! ## Architecture
//!
//! Two components:
//! - `CidrsmashError`: a custom error enum using `thiserror`.
//! - `Result<T>`: a type alias for `anyhow::Result<T>` used by handlers.
//!
//! `main` distinguishes the usage error from runtime failures to pick the
//! process exit code (64 vs 1).
//!
use thiserror::Error;

/// Custom error type for the cidrsmash application.
#[derive(Error, Debug)]
pub enum CidrsmashError {
    /// The requested CIDR mask falls outside the valid 0-32 range.
    /// Carries the offending value so the user sees what they typed.
    #[error("CIDR mask out of range: {value}")]
    MaskOutOfRange { value: i64 },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
/// Anyhow allows for easy context addition and flexible error handling.
pub type Result<T> = anyhow::Result<T>;

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CidrsmashError::MaskOutOfRange { value: 33 };
        assert_eq!(err.to_string(), "CIDR mask out of range: 33");

        let err = CidrsmashError::MaskOutOfRange { value: -1 };
        assert_eq!(err.to_string(), "CIDR mask out of range: -1");
    }
}
