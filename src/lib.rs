//! # fuzzdup - fuzzy file-name duplicate finder
//!
//! Walks one or more directory trees and reports files whose base names are
//! fuzzily similar to a name seen earlier in the same run. Intended for
//! manual deduplication or migration triage, e.g. when merging backup roots:
//! the output is a candidate list for a human to review. Nothing is ever
//! modified or deleted.
//!
//! ## Quick Start
//!
//! ```bash
//! # Compare two backup roots, ignoring files under 1 MB
//! fuzzdup --limit-size 1M --limit-score 80 /mnt/backup-a /mnt/backup-b
//! ```
//!
//! Matches go to stdout, one tab-separated line each. Progress summaries and
//! errors go to stderr.

pub mod cli;
pub mod config;
pub mod error;
pub mod reports;
pub mod scanner;
pub mod utils;

pub use cli::{Cli, Output};
pub use config::ScanConfig;
pub use error::ScanError;

/// Result type alias for fuzzdup operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
