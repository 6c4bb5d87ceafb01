//! Run configuration for fuzzdup
//!
//! There is no configuration file. Everything comes from the command line
//! (with environment fallbacks handled by clap) and is validated here into a
//! [`ScanConfig`] before any traversal starts.

use anyhow::{Context, Result};

mod size;

pub use size::parse_size;

/// Validated settings for a single scan run
#[derive(Debug, Clone, PartialEq)]
pub struct ScanConfig {
    /// A comparison must score strictly above this to be reported
    pub limit_score: i64,

    /// Files smaller than this many bytes never enter the corpus
    pub min_size: f64,

    /// Follow symbolic links while walking
    pub follow_symlinks: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            limit_score: 0,
            min_size: 0.0,
            follow_symlinks: false,
        }
    }
}

impl ScanConfig {
    /// Build a config from raw command-line values.
    ///
    /// Fails when `limit_size` is not a valid size; this is the only fatal
    /// configuration error.
    pub fn new(limit_score: i64, limit_size: &str) -> Result<Self> {
        let min_size = parse_size(limit_size)
            .with_context(|| format!("can not parse limitSize '{}'", limit_size))?;

        tracing::debug!("Resolved min_size={} limit_score={}", min_size, limit_score);

        Ok(Self {
            limit_score,
            min_size,
            ..Self::default()
        })
    }

    /// Whether a file of `size` bytes passes the size filter (inclusive)
    pub fn accepts_size(&self, size: u64) -> bool {
        size as f64 >= self.min_size
    }
}
