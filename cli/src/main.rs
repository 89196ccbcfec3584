//! # cidrsmash Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the cidrsmash CLI. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Building the immutable run configuration (mask + input source)
//! - Routing execution to the pipeline handler and mapping failures to
//!   exit codes
//!
//! ## Architecture
//!
//! cidrsmash is a one-shot batch transform: it reads IPv4 addresses from a
//! file (or standard input), computes the CIDR network each belongs to for a
//! fixed prefix length, and prints the deduplicated set of networks. All
//! errors propagate to this level for consistent handling:
//! - A mask outside 0-32 is a usage error and exits with code 64 (EX_USAGE)
//!   before any input is read.
//! - Any runtime failure (e.g. an unreadable input file) is printed to
//!   stderr and exits with code 1.
//!
//! ## Examples
//!
//! ```bash
//! # Condense a file of addresses into /24 networks
//! cidrsmash -m 24 ips.txt
//!
//! # Read from stdin, default mask of 24
//! cat ips.txt | cidrsmash
//!
//! # Wider networks, with debug logging on stderr
//! cidrsmash -vv --mask 16 ips.txt
//! ```
//!
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

// Declare the top-level modules of the CLI crate.
mod commands; // Command logic (the smash pipeline).
mod common; // Shared utilities (net masking, input sources).
mod core; // Core infrastructure (errors, config).

/// Exit code for command-line usage errors, per BSD sysexits.h EX_USAGE.
const EX_USAGE: i32 = 64;

/// Defines the command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "cidrsmash",
    about = "Condense a list of IPv4 addresses into CIDR networks",
    long_about = "Reads IPv4 addresses (one per line) from a file or standard input,\n\
                  masks each to its network for the given CIDR prefix length, and\n\
                  prints every distinct network exactly once.",
    version
)]
struct Cli {
    /// Input file. Default is stdin.
    infile: Option<PathBuf>,

    /// CIDR mask: 0-32.
    #[arg(
        short = 'm',
        long = "mask",
        default_value_t = 24,
        allow_negative_numbers = true
    )]
    mask: i64,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). Logs go to stderr.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    // Validate the mask once, before any input is touched. An out-of-range
    // value is a usage error and must not read the input at all.
    let config = match core::config::Config::new(cli.mask, cli.infile) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(EX_USAGE);
        }
    };

    if let Err(e) = commands::smash::handle_smash(&config) {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

// --- Basic Integration Tests ---
#[cfg(test)]
mod tests {
    use assert_cmd::Command;
    use predicates::prelude::*;
    fn cidrsmash_cmd() -> Command {
        Command::cargo_bin("cidrsmash").expect("Failed to find cidrsmash binary for testing")
    }
    #[test]
    fn test_main_help_flag() {
        cidrsmash_cmd().arg("--help").assert().success();
    }
    #[test]
    fn test_main_version_flag() {
        cidrsmash_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}
