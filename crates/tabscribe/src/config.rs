//! Application configuration from CLI flags and environment.

use clap::Parser;

/// tabscribe — stringed-instrument tablature composer.
#[derive(Parser, Debug)]
#[command(name = "tabscribe", version, about)]
pub struct AppConfig {
    /// Riff lines in tab notation (e.g. "e3 B0 G0 | e3,B0,G0").
    ///
    /// When no riffs are given and --file is absent, riffs are read from
    /// stdin, one per line. Use "--" before riffs that start with "-".
    pub riffs: Vec<String>,

    /// Instrument: guitar, seven-string, bass, ukulele, mandolin, banjo.
    #[arg(short, long, default_value = "guitar", env = "TABSCRIBE_INSTRUMENT")]
    pub instrument: String,

    /// Wrap width: symbol bytes per string per block (0 = default).
    #[arg(short, long, default_value = "20", env = "TABSCRIBE_WRAP")]
    pub wrap: usize,

    /// Read riff lines from a file (one riff per line, '#' comments).
    #[arg(short, long)]
    pub file: Option<String>,

    /// Output file path (defaults to stdout).
    #[arg(short, long)]
    pub output: Option<String>,

    /// Verbose summary output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode (suppress the export summary).
    #[arg(short, long)]
    pub quiet: bool,

    /// List supported instruments and tunings.
    #[arg(long)]
    pub list: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
