//! # cidrsmash Network Masking Utilities
//!
//! File: cli/src/common/net/mod.rs
//!
//! ## Overview
//!
//! IPv4 prefix-mask arithmetic: turning a CIDR prefix length into a 32-bit
//! mask, masking an address down to its network address, and the [`Network`]
//! value type the pipeline deduplicates and prints.
//!
//! ## Architecture
//!
//! The functions here are pure and infallible. The prefix length is
//! range-checked exactly once, in `core::config`, so by the time a value
//! reaches this module it is guaranteed to be in 0..=32 (enforced here with
//! debug assertions only). The mask is computed through a `u64` widening so
//! that a prefix of 0 never produces a shift by 32 bits, which would be
//! undefined for `u32`.
//!
//! ## Examples
//!
//! ```rust
//! use crate::common::net::{network_of, Network};
//! use std::net::Ipv4Addr;
//!
//! let addr: Ipv4Addr = "10.0.0.254".parse().unwrap();
//! assert_eq!(network_of(addr, 24), Ipv4Addr::new(10, 0, 0, 0));
//! assert_eq!(Network::containing(addr, 24).to_string(), "10.0.0.0/24");
//! ```
//!
use std::fmt;
use std::net::Ipv4Addr;

/// Maximum CIDR prefix length for an IPv4 address (32 bits).
pub const MAX_PREFIX: u8 = 32;

/// Converts a CIDR prefix length to a subnet mask.
///
/// The returned `u32` has the top `prefix` bits set and the remaining host
/// bits cleared; `prefix = 0` yields an all-zero mask.
///
/// Callers must pass `prefix <= 32` (guaranteed by `Config`).
pub fn prefix_mask(prefix: u8) -> u32 {
    debug_assert!(prefix <= MAX_PREFIX, "prefix was range-checked at startup");
    let host_bits = u32::from(MAX_PREFIX - prefix);
    // Widen to u64: shifting a u32 by 32 (prefix = 0) would overflow.
    let all_bits = u64::from(u32::MAX);
    ((all_bits >> host_bits) << host_bits) as u32
}

/// Returns the network address of `addr` under the given prefix length,
/// i.e. `addr` with its low `32 - prefix` bits zeroed.
pub fn network_of(addr: Ipv4Addr, prefix: u8) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(addr) & prefix_mask(prefix))
}

/// An IPv4 network in CIDR notation.
///
/// The address component is always the masked network address, never a host
/// address; [`Network::containing`] is the only constructor and enforces
/// this. `Eq` and `Hash` are structural, so a `HashSet<Network>` deduplicates
/// networks directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Network {
    addr: Ipv4Addr,
    prefix: u8,
}

impl Network {
    /// Returns the network that `addr` belongs to under `prefix`.
    pub fn containing(addr: Ipv4Addr, prefix: u8) -> Self {
        Network {
            addr: network_of(addr, prefix),
            prefix,
        }
    }

    /// The masked network address.
    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    /// The prefix length.
    pub fn prefix(&self) -> u8 {
        self.prefix
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}
