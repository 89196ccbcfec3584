//! # cidrsmash Pipeline Handler
//!
//! File: cli/src/commands/smash.rs
//!
//! ## Overview
//!
//! This module implements the tool's single operation: condensing a list of
//! IPv4 addresses into the deduplicated set of CIDR networks they belong to.
//!
//! ## Architecture
//!
//! The command flow is a single synchronous pass:
//! 1. Open the configured input source (file or stdin).
//! 2. For each line: trim it, skip blanks and `#`/`;` comments, and skip
//!    anything that is not a strict dotted-quad IPv4 address. Skipping is
//!    silent; these are expected in log-scraping input, not errors.
//! 3. Mask each surviving address to its network for the configured prefix
//!    and insert the resulting [`Network`] into a `HashSet`, which is what
//!    deduplicates.
//! 4. Write each distinct network to stdout, one per line. The set has no
//!    defined iteration order and none is promised.
//!
//! ## Usage
//!
//! ```bash
//! $ printf '10.0.0.1\n10.0.0.254\n10.0.1.5\n' | cidrsmash -m 24
//! 10.0.0.0/24
//! 10.0.1.0/24
//! ```
//!
use crate::common::net::Network;
use crate::core::config::Config;
use crate::core::error::Result;
use anyhow::Context;
use std::collections::HashSet;
use std::io::{self, BufRead, Write};
use std::net::Ipv4Addr;
use tracing::{debug, info, trace};

/// Runs the smash pipeline for one invocation.
///
/// # Arguments
///
/// * `config` - The validated run configuration (prefix length + input
///   source).
///
/// # Returns
///
/// * `Result<()>` - `Ok(())` after all distinct networks have been written
///   to stdout. Zero valid input addresses is a normal completion that
///   prints nothing.
///
/// # Errors
///
/// Returns an `Err` if the input source cannot be opened, a line cannot be
/// read, or writing to stdout fails. Malformed address lines are skipped,
/// never surfaced as errors.
pub fn handle_smash(config: &Config) -> Result<()> {
    info!("Smashing addresses into /{} networks", config.prefix);

    // The reader is dropped at the end of this function on every path,
    // releasing the file handle.
    let reader = config.input.open()?;
    let networks = collect_networks(reader, config.prefix)?;
    debug!("Collected {} distinct networks", networks.len());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for network in &networks {
        writeln!(out, "{}", network).context("Failed to write to stdout")?;
    }

    Ok(())
}

/// Streams lines through filter → validator → masker, collecting the
/// deduplicated set of networks.
fn collect_networks(reader: impl BufRead, prefix: u8) -> Result<HashSet<Network>> {
    let mut networks = HashSet::new();

    for line in reader.lines() {
        let line = line.context("Failed to read input line")?;
        let line = line.trim();
        if is_skippable(line) {
            continue;
        }
        // Only strict dotted-quad addresses pass; anything else is dropped.
        match line.parse::<Ipv4Addr>() {
            Ok(addr) => {
                networks.insert(Network::containing(addr, prefix));
            }
            Err(_) => trace!("Skipping non-address line: {:?}", line),
        }
    }

    Ok(networks)
}

/// Line filter: blank lines and `#`/`;` comment lines carry no addresses.
fn is_skippable(line: &str) -> bool {
    line.is_empty() || line.starts_with('#') || line.starts_with(';')
}
