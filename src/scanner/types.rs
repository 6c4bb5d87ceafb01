//! Records, match events and scan statistics

use std::fmt;
use std::path::{MAIN_SEPARATOR, Path};

/// A file that passed the size filter and was added to the corpus
///
/// Records are created in discovery order and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Base name (last path component)
    pub name: String,
    /// Parent directory relative to the scan root, without a leading separator
    pub directory: String,
    /// Size in bytes as reported by the filesystem
    pub size: u64,
    /// Position of the scan root in the list given on the command line
    pub root_index: usize,
}

impl FileRecord {
    pub fn new(
        name: impl Into<String>,
        directory: impl Into<String>,
        size: u64,
        root_index: usize,
    ) -> Self {
        Self {
            name: name.into(),
            directory: directory.into(),
            size,
            root_index,
        }
    }

    /// Build a record from a path already stripped of its root prefix
    pub fn from_relative_path(relative: &Path, size: u64, root_index: usize) -> Self {
        let name = relative
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let directory = relative
            .parent()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            name,
            directory,
            size,
            root_index,
        }
    }
}

impl fmt::Display for FileRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}){}{}\t{}",
            self.root_index, MAIN_SEPARATOR, self.directory, self.name
        )
    }
}

/// A qualifying similarity hit between a newly inserted record and an older one
///
/// Emitted once during insertion and not stored anywhere.
#[derive(Debug, Clone, Copy)]
pub struct MatchEvent<'a> {
    /// Number of records stored before `new_file` was appended
    pub ordinal: usize,
    pub score: i64,
    pub new_file: &'a FileRecord,
    pub old_file: &'a FileRecord,
}

/// Counters accumulated over the whole run, across all roots
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanStats {
    /// Every filesystem entry seen, directories included
    pub visited: u64,
    /// Records appended to the corpus
    pub analyzed: u64,
    /// Sum of the reported sizes of every visited entry
    pub bytes_scanned: u64,
}

/// Snapshot of [`ScanStats`] taken after a root, or at the end of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootSummary {
    /// `None` for the final summary
    pub root_index: Option<usize>,
    pub stats: ScanStats,
}

impl fmt::Display for RootSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scanned = crate::utils::format_bytes(self.stats.bytes_scanned);
        match self.root_index {
            Some(index) => write!(
                f,
                "root {} - visiting {} analyzing {}, scanned {}",
                index, self.stats.visited, self.stats.analyzed, scanned
            ),
            None => write!(
                f,
                "Finished after visiting {} and analyzing {}, scanned {}",
                self.stats.visited, self.stats.analyzed, scanned
            ),
        }
    }
}
