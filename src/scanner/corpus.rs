//! The append-only file corpus and its matching policy

use super::similarity::SimilarityScorer;
use super::types::{FileRecord, MatchEvent};

/// Append-only collection of discovered files
///
/// Every insertion compares the new record against all records stored before
/// it, oldest first, and reports each comparison that scores strictly above
/// `limit_score`. The new record is stored afterwards whether or not anything
/// matched, so it is only ever compared against strictly older records.
///
/// Total work is quadratic in the number of stored records.
pub struct Corpus<S> {
    files: Vec<FileRecord>,
    limit_score: i64,
    scorer: S,
}

impl<S: SimilarityScorer> Corpus<S> {
    pub fn new(limit_score: i64, scorer: S) -> Self {
        Self {
            files: Vec::new(),
            limit_score,
            scorer,
        }
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Stored records in insertion order
    pub fn files(&self) -> &[FileRecord] {
        &self.files
    }

    /// Compare `candidate` against every stored record, then append it.
    ///
    /// `on_match` is called once per qualifying comparison, in insertion
    /// order of the older record. Returns the number of matches reported.
    /// If `on_match` fails, the candidate is not stored and the error is
    /// returned.
    pub fn insert<F, E>(&mut self, candidate: FileRecord, mut on_match: F) -> Result<usize, E>
    where
        F: FnMut(&MatchEvent<'_>) -> Result<(), E>,
    {
        let ordinal = self.files.len();
        let mut matched = 0;

        for old in &self.files {
            let ranked = self.scorer.rank(&candidate.name, &[old.name.as_str()]);
            let Some(best) = ranked.first() else {
                continue;
            };

            tracing::trace!(
                "Compared {:?} with {:?}: score {}",
                candidate.name,
                old.name,
                best.score
            );

            if best.score > self.limit_score {
                matched += 1;
                on_match(&MatchEvent {
                    ordinal,
                    score: best.score,
                    new_file: &candidate,
                    old_file: old,
                })?;
            }
        }

        self.files.push(candidate);
        Ok(matched)
    }
}
