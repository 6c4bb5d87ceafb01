use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ignore::WalkBuilder;

use super::context::ScanContext;
use super::similarity::SimilarityScorer;
use super::types::{FileRecord, RootSummary};
use crate::cli::Output;
use crate::config::ScanConfig;
use crate::error::ScanError;
use crate::reports::MatchReporter;

/// Walks the scan roots and feeds qualifying files into the corpus
///
/// # Traversal
///
/// Each root is walked depth-first, pre-order: a directory is visited before
/// its contents, and siblings are visited in lexical order of their file
/// names so repeated runs over the same trees report the same matches.
/// Nothing is filtered out of the walk; hidden files and ignore files are
/// treated like any other entry. For every entry:
///
/// - `visited` is incremented and the reported size is added to `bytes_scanned`
/// - directories stop there
/// - anything else that passes the size filter is inserted into the corpus
///   with its root prefix stripped, then counted as `analyzed`
///
/// # Errors
///
/// Only failing to write a match line is returned as an error. A root that
/// cannot be opened, or an entry that cannot be read, is reported on the
/// diagnostic channel and skipped.
pub struct DirectoryScanner<'a> {
    config: &'a ScanConfig,
    output: &'a Output,
}

impl<'a> DirectoryScanner<'a> {
    pub fn new(config: &'a ScanConfig, output: &'a Output) -> Self {
        Self { config, output }
    }

    /// Scan every root in order, printing a summary after each one and a
    /// final summary at the end. Returns the final summary.
    pub fn scan_roots<S, W>(
        &self,
        roots: &[PathBuf],
        ctx: &mut ScanContext<S>,
        reporter: &mut MatchReporter<W>,
    ) -> Result<RootSummary>
    where
        S: SimilarityScorer,
        W: Write,
    {
        for (root_index, root) in roots.iter().enumerate() {
            self.scan_root(root_index, root, ctx, reporter)?;
            self.output
                .progress(&ctx.summary(Some(root_index)).to_string());
        }

        reporter.flush().context("failed to flush match output")?;

        let summary = ctx.summary(None);
        self.output.progress(&summary.to_string());
        Ok(summary)
    }

    /// Walk a single root
    pub fn scan_root<S, W>(
        &self,
        root_index: usize,
        root: &Path,
        ctx: &mut ScanContext<S>,
        reporter: &mut MatchReporter<W>,
    ) -> Result<()>
    where
        S: SimilarityScorer,
        W: Write,
    {
        if let Err(err) = Self::check_root(root) {
            self.report_error(&err);
            return Ok(());
        }

        self.output
            .verbose(&format!("Scanning root {}: {}", root_index, root.display()));

        for entry in self.build_walker(root).build() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    self.skip_entry(err);
                    continue;
                }
            };

            let metadata = match entry.metadata() {
                Ok(metadata) => metadata,
                Err(err) => {
                    self.skip_entry(err);
                    continue;
                }
            };

            let size = metadata.len();
            ctx.record_entry(size);

            if metadata.is_dir() || !self.config.accepts_size(size) {
                continue;
            }

            let record = Self::file_record(root, entry.path(), size, root_index);
            tracing::debug!("Analyzing {} ({} bytes)", entry.path().display(), size);

            ctx.analyze(record, |event| reporter.report(event))
                .context("failed to write match")?;
        }

        Ok(())
    }

    /// Build the walker for one root. Standard filters are off so that every
    /// entry is visited.
    fn build_walker(&self, root: &Path) -> WalkBuilder {
        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .follow_links(self.config.follow_symlinks)
            .sort_by_file_name(|a, b| a.cmp(b));
        builder
    }

    /// Make sure the root exists and, for directories, can be listed
    fn check_root(root: &Path) -> Result<(), ScanError> {
        let unreadable = |source| ScanError::RootUnreadable {
            root: root.to_path_buf(),
            source,
        };

        let metadata = fs::metadata(root).map_err(unreadable)?;
        if metadata.is_dir() {
            fs::read_dir(root).map_err(unreadable)?;
        }
        Ok(())
    }

    /// Build the corpus record for `path`, relative to `root`
    fn file_record(root: &Path, path: &Path, size: u64, root_index: usize) -> FileRecord {
        let relative = path.strip_prefix(root).unwrap_or(path);

        // The root itself is a file
        if relative.as_os_str().is_empty() {
            let name = root
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| root.to_string_lossy().into_owned());
            return FileRecord::new(name, "", size, root_index);
        }

        FileRecord::from_relative_path(relative, size, root_index)
    }

    /// Report an entry the walker could not read. The walk carries on.
    fn skip_entry(&self, err: ignore::Error) -> ScanError {
        let err = ScanError::from(err);
        self.report_error(&err);
        err
    }

    fn report_error(&self, err: &ScanError) {
        tracing::warn!("Skipping: {}", err);
        self.output.error(&err.to_string());
    }
}
