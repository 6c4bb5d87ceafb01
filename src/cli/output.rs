//! Diagnostic output for fuzzdup
//!
//! stdout is reserved for match lines, so everything printed here goes to
//! stderr. Errors are always shown; progress and verbose messages respect
//! the quiet and verbose flags.

use console::style;

/// Output handler for the diagnostic channel
pub struct Output {
    verbose: bool,
    quiet: bool,
}

impl Output {
    /// Create a new output handler
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        // Errors are always shown, even in quiet mode
        eprintln!("{} {}", style("✖").red().for_stderr(), message);
    }

    /// Print a progress line, such as a per-root summary
    pub fn progress(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}", message);
        }
    }

    /// Print a verbose message (only if verbose mode is enabled)
    pub fn verbose(&self, message: &str) {
        if self.verbose && !self.quiet {
            eprintln!(
                "{} {}",
                style("ℹ").dim().for_stderr(),
                style(message).dim().for_stderr()
            );
        }
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new(false, false)
    }
}
