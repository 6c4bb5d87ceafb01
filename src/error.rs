//! Error types for fuzzdup
//!
//! Only [`ScanError::InvalidSizeFormat`] is fatal. The traversal errors are
//! reported on the diagnostic channel and the scan carries on with whatever
//! it can still read.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    /// The `--limit-size` argument could not be turned into a byte count
    #[error("invalid size '{input}': {reason}")]
    InvalidSizeFormat { input: String, reason: String },

    /// A root given on the command line could not be opened at all
    #[error("cannot read root {}: {source}", .root.display())]
    RootUnreadable {
        root: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A single entry inside a root could not be read or stat'd
    #[error("walk error: {message}")]
    EntryTraversal { message: String },
}

impl From<ignore::Error> for ScanError {
    fn from(err: ignore::Error) -> Self {
        ScanError::EntryTraversal {
            message: err.to_string(),
        }
    }
}
