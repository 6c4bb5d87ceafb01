//! Match report written to the primary output channel
//!
//! One tab-separated line per match, no header and no trailing summary:
//!
//! ```text
//! <ordinal>\t<score>\t<new size>/<old size>\t<old record>\t<new record>
//! ```

use std::io::{self, Write};

use crate::scanner::MatchEvent;
use crate::utils::{format_bytes, format_si};

/// Render a single match as a report line (without the newline)
pub fn format_match_line(event: &MatchEvent<'_>) -> String {
    format!(
        "{}\t{}\t{}/{}\t{}\t{}",
        event.ordinal,
        format_si(event.score as f64),
        format_bytes(event.new_file.size),
        format_bytes(event.old_file.size),
        event.old_file,
        event.new_file
    )
}

/// Writes match lines as soon as they are discovered
pub struct MatchReporter<W: Write> {
    writer: W,
    reported: usize,
}

impl<W: Write> MatchReporter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            reported: 0,
        }
    }

    pub fn report(&mut self, event: &MatchEvent<'_>) -> io::Result<()> {
        writeln!(self.writer, "{}", format_match_line(event))?;
        self.reported += 1;
        Ok(())
    }

    /// Number of lines written so far
    pub fn reported(&self) -> usize {
        self.reported
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
