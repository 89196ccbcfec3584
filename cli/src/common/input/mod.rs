//! # cidrsmash Input Sources
//!
//! File: cli/src/common/input/mod.rs
//!
//! ## Overview
//!
//! The pipeline reads address lines from either an input file or standard
//! input, decided by whether a path was given on the command line. This
//! module hides that choice behind [`InputSource`]: both variants open into
//! the same `BufRead` contract, and the handle is dropped (closing the file)
//! when the reader goes out of scope on any exit path.
//!
//! ## Architecture
//!
//! - [`InputSource::from_arg`] maps the optional CLI path to a variant.
//! - [`InputSource::open`] produces a boxed `BufRead`. A missing or
//!   unreadable file is fatal: the underlying I/O error propagates with
//!   context naming the file.
//!
use crate::core::error::Result;
use anyhow::Context;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use tracing::debug;

/// Where the address lines come from.
#[derive(Debug, Clone)]
pub enum InputSource {
    /// Read from standard input.
    Stdin,
    /// Read from the file at this path.
    File(PathBuf),
}

impl InputSource {
    /// Maps the optional `infile` CLI argument to a source.
    pub fn from_arg(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => InputSource::File(path),
            None => InputSource::Stdin,
        }
    }

    /// Opens the source for buffered line-by-line reading.
    ///
    /// # Errors
    ///
    /// Returns an `Err` if the input file cannot be opened (e.g. it does not
    /// exist or is not readable). Standard input cannot fail to open.
    pub fn open(&self) -> Result<Box<dyn BufRead>> {
        match self {
            InputSource::Stdin => {
                debug!("Reading addresses from standard input");
                Ok(Box::new(io::stdin().lock()))
            }
            InputSource::File(path) => {
                debug!("Reading addresses from file: {:?}", path);
                let file = File::open(path)
                    .with_context(|| format!("Failed to open input file {:?}", path))?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }
}
