//! Error types for deck synthesis and library decoding
//!
//! Every failure in the crate is reported through [Error], so callers can
//! match on the kind of problem rather than inspecting strings.

// standard library
use std::path::PathBuf;

// internal modules
use crate::deck::Block;

// external crates
use thiserror::Error;

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Failure modes for wrapping, decoding, synthesis, and persistence
#[derive(Debug, Error)]
pub enum Error {
    /// Caller supplied something malformed
    ///
    /// For example a wrap width of zero, or fine interval counts that do not
    /// line up with the coarse mesh divisions.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A library or deck file could not be opened, read, or written
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// The library ended before the fixed header and name fields did
    #[error("truncated record in {}: expected at least {expected} bytes, found {found}", .path.display())]
    TruncatedRecord {
        path: PathBuf,
        expected: u64,
        found: u64,
    },

    /// A deck block still contains placeholder text
    #[error("block {0} is not yet implemented and only contains placeholder text")]
    UnimplementedBlock(Block),

    /// The input does not provide a capability the operation requires
    #[error("unsupported operation: '{capability}' is required but not provided by {provider}")]
    UnsupportedOperation {
        capability: &'static str,
        provider: String,
    },
}

impl Error {
    /// Shorthand for [Error::InvalidArgument]
    pub fn invalid(details: impl Into<String>) -> Self {
        Self::InvalidArgument(details.into())
    }
}
