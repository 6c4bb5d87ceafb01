//! Name similarity scoring
//!
//! The corpus only needs "rank these candidates against this query". Anything
//! implementing [`SimilarityScorer`] can be plugged in; [`SkimScorer`] is the
//! default and wraps the skim fuzzy matcher.

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

/// One candidate that matched the query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedMatch {
    /// Position of the candidate in the slice passed to [`SimilarityScorer::rank`]
    pub index: usize,
    pub score: i64,
}

pub trait SimilarityScorer {
    /// Score every candidate against `query`, best match first.
    ///
    /// Candidates that do not match at all are left out of the result.
    fn rank(&self, query: &str, candidates: &[&str]) -> Vec<RankedMatch>;
}

/// Fuzzy subsequence scoring backed by `SkimMatcherV2`
///
/// Case is ignored, so `IMG_0001.JPG` and `img_0001.jpg` match in either
/// insertion order.
pub struct SkimScorer {
    matcher: SkimMatcherV2,
}

impl SkimScorer {
    pub fn new() -> Self {
        Self {
            matcher: SkimMatcherV2::default().ignore_case(),
        }
    }
}

impl Default for SkimScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SimilarityScorer for SkimScorer {
    fn rank(&self, query: &str, candidates: &[&str]) -> Vec<RankedMatch> {
        let mut ranked: Vec<RankedMatch> = candidates
            .iter()
            .enumerate()
            .filter_map(|(index, candidate)| {
                self.matcher
                    .fuzzy_match(candidate, query)
                    .map(|score| RankedMatch { index, score })
            })
            .collect();

        // Stable sort keeps candidate order for equal scores
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked
    }
}
