//! Command-line interface for fuzzdup
//!
//! A single batch command: walk every root in order and print each file
//! whose name is fuzzily similar to a file seen earlier in the run.

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser};

mod output;

pub use output::Output;

use crate::config::ScanConfig;
use crate::reports::MatchReporter;
use crate::scanner::{DirectoryScanner, ScanContext, SkimScorer};

/// fuzzdup - find files with similar names across directory trees
#[derive(Parser, Debug)]
#[command(
    name = crate::PKG_NAME,
    version = crate::VERSION,
    about = crate::PKG_DESCRIPTION,
    long_about = None
)]
pub struct Cli {
    /// Root directories to scan, in order
    #[arg(value_name = "ROOT", required = true)]
    pub roots: Vec<PathBuf>,

    /// Minimum similarity score; a match must score strictly above this
    #[arg(
        long,
        visible_alias = "limitScore",
        env = "FUZZDUP_LIMIT_SCORE",
        default_value_t = 0,
        allow_negative_numbers = true
    )]
    pub limit_score: i64,

    /// Minimum file size to consider, like 500, 10K or 1.5G
    #[arg(
        long,
        visible_alias = "limitSize",
        env = "FUZZDUP_LIMIT_SIZE",
        default_value = "0"
    )]
    pub limit_size: String,

    /// Follow symbolic links
    #[arg(long)]
    pub follow_symlinks: bool,

    /// Enable verbose output (repeat for more detail)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only print matches and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Execute the scan
    pub fn run(self) -> Result<()> {
        setup_logging(self.verbose, self.quiet);

        // Size parsing is the only fatal error and must fail before any walk
        let mut config = ScanConfig::new(self.limit_score, &self.limit_size)?;
        config.follow_symlinks = self.follow_symlinks;
        let output = Output::new(self.verbose > 0, self.quiet);

        let scanner = DirectoryScanner::new(&config, &output);
        let mut ctx = ScanContext::new(config.limit_score, SkimScorer::new());
        let mut reporter = MatchReporter::new(io::stdout().lock());

        let summary = scanner.scan_roots(&self.roots, &mut ctx, &mut reporter)?;
        tracing::info!(
            "Reported {} matches over {} files",
            reporter.reported(),
            summary.stats.analyzed
        );

        Ok(())
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info,ignore=warn"),
            2 => tracing_subscriber::EnvFilter::new("debug,ignore=warn"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    // try_init: a subscriber may already be installed when embedded
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}
