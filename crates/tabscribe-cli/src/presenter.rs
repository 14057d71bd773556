//! CLI export summary presenter.

use crate::output::format_number;
use crate::ui;

/// Facts about one finished export, for display.
#[derive(Debug, Clone)]
pub struct ExportSummary {
    /// Instrument name.
    pub instrument: String,
    /// Number of strings rendered.
    pub strings: usize,
    /// Number of riffs staged.
    pub riffs: usize,
    /// Symbol bytes rendered per string.
    pub columns: usize,
    /// Number of wrapped blocks emitted.
    pub blocks: usize,
    /// Wrap width used for the export.
    pub wrap: usize,
    /// Where the tablature went ("stdout" or a file path).
    pub destination: String,
}

/// CLI summary presenter.
///
/// All presenter output goes to stderr: stdout carries the rendered
/// tablature and must stay clean for piping.
pub struct CliPresenter {
    verbose: bool,
    quiet: bool,
}

impl CliPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Present the post-export summary.
    pub fn present_summary(&self, summary: &ExportSummary) {
        if self.quiet {
            return;
        }

        ui::print_success(&format!(
            "{} tablature exported to {}",
            summary.instrument, summary.destination
        ));

        if self.verbose {
            eprintln!("Strings: {}", summary.strings);
            eprintln!("Riffs staged: {}", summary.riffs);
            eprintln!("Columns: {}", format_number(summary.columns));
            eprintln!("Blocks: {} (wrap width {})", summary.blocks, summary.wrap);
        }
    }

    /// Present an error.
    pub fn present_error(&self, error: &str) {
        ui::print_error(error);
    }
}
