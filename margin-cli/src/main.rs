use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tokio::io::BufReader;
use tracing::{debug, warn};

use margin_cli::app;
use margin_cli::config::Settings;
use margin_cli::export::ExportFormat;
use margin_cli::logging::{configure_logging, init_default_logging};
use margin_cli::{CalculatorSession, ConsoleNotifier};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Gross profit margin calculator.
///
/// Computes gross profit and margin from revenue and cost of goods sold,
/// rates the margin, and can write a report of the result.
#[derive(Debug, Parser)]
struct Cli {
    /// Settings file. Defaults to `margin.toml` when present.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `margin_core=trace`.
    #[arg(long)]
    log_level: Option<String>,

    /// Append log output to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Hide log output on the terminal.
    #[arg(long, short)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Mode>,
}

#[derive(Debug, Subcommand)]
enum Mode {
    /// Calculate once from the given values and exit.
    Calculate {
        /// Revenue, as typed into the form.
        #[arg(long, allow_hyphen_values = true)]
        revenue: String,

        /// Cost of goods sold, as typed into the form.
        #[arg(long, allow_hyphen_values = true)]
        cost: String,

        /// Also write a report in this format.
        #[arg(long, value_enum)]
        export: Option<ExportFormat>,

        /// Directory for the report. Defaults to the settings value.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Read commands from stdin until `quit`.
    Interactive,
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    init_default_logging();

    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;
    configure_logging(
        cli.log_level.as_deref(),
        cli.log_file.as_deref(),
        cli.quiet,
        &settings,
    )?;
    debug!(?settings, "starting");

    let mut session = CalculatorSession::new(Arc::new(ConsoleNotifier));
    let mut stdout = io::stdout().lock();

    match cli.command.unwrap_or(Mode::Interactive) {
        Mode::Calculate {
            revenue,
            cost,
            export,
            out,
        } => {
            let dir = out.unwrap_or_else(|| settings.export_dir.clone());
            let export = export.map(|format| (format, dir.as_path()));
            if let Err(error) = app::run_once(&mut session, &revenue, &cost, export, &mut stdout).await {
                warn!(?error, "calculation failed");
                return Err(error);
            }
        }
        Mode::Interactive => {
            let stdin = BufReader::new(tokio::io::stdin());
            app::run_interactive(&mut session, &settings, stdin, &mut stdout).await?;
        }
    }

    Ok(())
}
