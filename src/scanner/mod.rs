pub mod context;
pub mod corpus;
pub mod directory;
pub mod similarity;
pub mod types;


// Re-export main types for easier access
pub use context::ScanContext;
pub use corpus::Corpus;
pub use directory::DirectoryScanner;
pub use similarity::{RankedMatch, SimilarityScorer, SkimScorer};
pub use types::{FileRecord, MatchEvent, RootSummary, ScanStats};
