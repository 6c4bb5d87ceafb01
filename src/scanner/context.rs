//! Run state shared by every root of a scan

use super::corpus::Corpus;
use super::similarity::SimilarityScorer;
use super::types::{FileRecord, MatchEvent, RootSummary, ScanStats};

/// All mutable state of a run: the corpus and the running statistics.
///
/// Created once before the first root is scanned and passed by `&mut` to the
/// scanner, which is its only writer. Nothing is shared across threads.
pub struct ScanContext<S> {
    corpus: Corpus<S>,
    stats: ScanStats,
}

impl<S: SimilarityScorer> ScanContext<S> {
    pub fn new(limit_score: i64, scorer: S) -> Self {
        Self {
            corpus: Corpus::new(limit_score, scorer),
            stats: ScanStats::default(),
        }
    }

    pub fn corpus(&self) -> &Corpus<S> {
        &self.corpus
    }

    pub fn stats(&self) -> ScanStats {
        self.stats
    }

    /// Count a visited entry, file or directory, and its reported size
    pub fn record_entry(&mut self, size: u64) {
        self.stats.visited += 1;
        self.stats.bytes_scanned = self.stats.bytes_scanned.saturating_add(size);
    }

    /// Insert a file that passed the size filter and count it as analyzed
    pub fn analyze<F, E>(&mut self, record: FileRecord, on_match: F) -> Result<usize, E>
    where
        F: FnMut(&MatchEvent<'_>) -> Result<(), E>,
    {
        let matched = self.corpus.insert(record, on_match)?;
        self.stats.analyzed += 1;
        Ok(matched)
    }

    pub fn summary(&self, root_index: Option<usize>) -> RootSummary {
        RootSummary {
            root_index,
            stats: self.stats,
        }
    }
}
