//! Console output utilities.

use std::fmt::Display;
use std::io::{self, Write};

use console::style;

/// Styled user-facing messages written to any `io::Write`.
///
/// The binary writes to stdout; tests hand in a `Vec<u8>` and read it back.
pub struct Console<W> {
    out: W,
}

impl Console<io::Stdout> {
    /// Console on standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write one unstyled line.
    pub fn line(&mut self, text: impl Display) {
        // Console output is best effort; a closed stdout must not fail the run.
        let _ = writeln!(self.out, "{}", text);
    }

    /// Print an info message.
    pub fn info(&mut self, message: &str) {
        self.line(format!("{} {}", style("INFO").cyan().bold(), message));
    }

    /// Print a success message.
    pub fn success(&mut self, message: &str) {
        self.line(format!("{} {}", style("OK").green().bold(), message));
    }

    /// Print a warning message.
    pub fn warning(&mut self, message: &str) {
        self.line(format!("{} {}", style("WARN").yellow().bold(), message));
    }

    /// Print an error message.
    pub fn error(&mut self, message: &str) {
        self.line(format!("{} {}", style("ERROR").red().bold(), message));
    }

    /// Print the application banner.
    pub fn banner(&mut self) {
        let banner = r#"
╔═══════════════════════════════════════════════════════╗
║     Graph Media Export                                ║
║     Recent Instagram media metadata to JSON           ║
╚═══════════════════════════════════════════════════════╝
"#;
        self.line(style(banner).cyan());
    }

    /// Print configuration summary.
    pub fn config_summary(&mut self, owner: &str, fetch_mode: &str, limit: usize, output: &str) {
        self.line("");
        self.line(style("Configuration:").bold());
        self.line(format!("  Account: {}", owner));
        self.line(format!("  Mode: {}", fetch_mode));
        self.line(format!("  Limit: {}", limit));
        self.line(format!("  Output: {}", output));
        self.line("");
    }
}
