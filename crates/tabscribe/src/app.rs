//! Application entry point and dispatch.

use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use tracing::debug;

use tabscribe_cli::completion::generate_completion;
use tabscribe_cli::output::write_to_file;
use tabscribe_cli::{ui, CliPresenter, ExportSummary};
use tabscribe_core::{LayoutWriter, TabSource};
use tabscribe_instrument::{parse_line, Instrument, InstrumentKind};

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        generate_completion(&mut cmd, shell, &mut io::stdout());
        return Ok(());
    }

    // Handle instrument listing
    if config.list {
        list_instruments();
        return Ok(());
    }

    compose(config)
}

fn list_instruments() {
    ui::print_header("Instruments");
    for kind in InstrumentKind::ALL {
        println!("  {:<13} {}", kind.name(), kind.tuning());
    }
}

fn compose(config: &AppConfig) -> Result<()> {
    let kind: InstrumentKind = config.instrument.parse()?;
    let mut instrument = Instrument::new(kind);

    let riffs = read_riffs(config)?;

    let mut rendered = Vec::new();
    let mut writer = LayoutWriter::with_wrap(&mut rendered, config.wrap);
    let mut staged = 0usize;
    for line in &riffs {
        let ops = parse_line(line, instrument.order())?;
        if ops.is_empty() {
            continue; // comment or blank line
        }
        instrument.apply(&ops);
        writer.stage(&instrument);
        instrument.clear();
        staged += 1;
    }
    debug!(riffs = staged, columns = writer.total_len(), "riffs staged");

    let columns = writer.total_len();
    let blocks = writer.block_count();
    let wrap = writer.wrap();
    writer.export(&instrument)?;
    drop(writer);

    match &config.output {
        Some(path) => {
            write_to_file(path, &rendered).with_context(|| format!("failed to write {path}"))?;
        }
        None => {
            io::stdout()
                .write_all(&rendered)
                .context("failed to write stdout")?;
        }
    }

    let presenter = CliPresenter::new(config.verbose, config.quiet);
    presenter.present_summary(&ExportSummary {
        instrument: kind.name().to_string(),
        strings: instrument.order().len(),
        riffs: staged,
        columns,
        blocks,
        wrap,
        destination: config
            .output
            .clone()
            .unwrap_or_else(|| "stdout".to_string()),
    });

    Ok(())
}

fn read_riffs(config: &AppConfig) -> Result<Vec<String>> {
    if !config.riffs.is_empty() {
        return Ok(config.riffs.clone());
    }
    if let Some(path) = &config.file {
        let text =
            std::fs::read_to_string(path).with_context(|| format!("failed to read {path}"))?;
        return Ok(text.lines().map(str::to_string).collect());
    }
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("failed to read stdin")?;
    Ok(text.lines().map(str::to_string).collect())
}
