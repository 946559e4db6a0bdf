//! Shell actions wired to the calculator session.
//!
//! Each action mirrors one button of the calculator form: calculate, reset,
//! email and export. The interactive loop and the one-shot `calculate`
//! command are built from the same actions.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use anyhow::{Context, Result};
use chrono::Local;
use margin_core::presentation::{summary_panel, to_series};
use margin_core::{Notice, Notifier};
use regex::Regex;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::commands::{Command, HELP_TEXT};
use crate::config::Settings;
use crate::export::{ExportFormat, ReportDocument};
use crate::logging::log_task_error;
use crate::state::CalculatorSession;
use crate::views::{
    CHART_WIDTH, render_bars, render_donut, render_fields, render_gauge, render_guide,
    render_summary,
};

pub const INVALID_EMAIL: Notice = Notice {
    title: "Invalid email address",
    description: "Please enter a valid email address.",
};

pub const NOTHING_TO_SEND: Notice = Notice {
    title: "No calculation to send",
    description: "Please calculate your profit margin first.",
};

pub const EMAIL_SENT: Notice = Notice {
    title: "Email sent!",
    description: "The calculation results have been sent to your email.",
};

pub const NOTHING_TO_EXPORT: Notice = Notice {
    title: "No calculation to export",
    description: "Please calculate your profit margin first.",
};

pub const EXPORT_STARTED: Notice = Notice {
    title: "Generating report...",
    description: "Please wait while we prepare your document.",
};

pub const EXPORT_DONE: Notice = Notice {
    title: "Report generated successfully!",
    description: "Your document is ready for download.",
};

pub const EXPORT_FAILED: Notice = Notice {
    title: "Error generating report",
    description: "There was a problem creating your document. Please try again.",
};

fn email_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"\S+@\S+\.\S+").ok())
        .as_ref()
}

/// Checks an address the way the email form does: something, `@`,
/// something, `.`, something.
pub fn is_valid_email(address: &str) -> bool {
    !address.is_empty() && email_pattern().is_some_and(|re| re.is_match(address))
}

/// Pretends to email the current result. Nothing is delivered.
///
/// Returns `true` when the "sent" notice was emitted.
pub fn send_email(
    session: &CalculatorSession,
    address: &str,
) -> bool {
    let notifier = session.notifier();

    if !is_valid_email(address) {
        debug!(address, "rejected email address");
        notifier.notify(&INVALID_EMAIL);
        return false;
    }

    if !session.has_result() {
        notifier.notify(&NOTHING_TO_SEND);
        return false;
    }

    info!(address, "email delivery is not implemented; reporting success");
    notifier.notify(&EMAIL_SENT);
    true
}

/// Starts exporting the current result on a background task.
///
/// The task gets its own snapshot of the result and reports completion
/// through the session's notifier. Returns `None` when there is nothing to
/// export.
pub fn start_export(
    session: &CalculatorSession,
    format: ExportFormat,
    dir: &Path,
) -> Option<JoinHandle<Result<PathBuf>>> {
    let notifier = Arc::clone(session.notifier());

    let Some(result) = session.result() else {
        notifier.notify(&NOTHING_TO_EXPORT);
        return None;
    };

    let document = ReportDocument::snapshot(result, Local::now());
    let dir = dir.to_path_buf();
    notifier.notify(&EXPORT_STARTED);

    Some(tokio::spawn(async move {
        let exporter = format.exporter();
        match exporter.export(&document, &dir).await {
            Ok(path) => {
                notifier.notify(&EXPORT_DONE);
                Ok(path)
            }
            Err(error) => {
                warn!(?error, "report export failed");
                notifier.notify(&EXPORT_FAILED);
                Err(error)
            }
        }
    }))
}

/// Waits for export tasks and logs any that failed. Returns the written paths.
pub async fn finish_exports(handles: Vec<JoinHandle<Result<PathBuf>>>) -> Vec<PathBuf> {
    let mut written = Vec::with_capacity(handles.len());
    for handle in handles {
        let joined = handle.await.context("export task panicked").and_then(|r| r);
        if let Some(path) = log_task_error("export", joined) {
            written.push(path);
        }
    }
    written
}

/// Writes the results panel and all charts for the current result.
pub fn write_results<W: Write>(
    session: &CalculatorSession,
    out: &mut W,
) -> Result<()> {
    let Some(result) = session.result() else {
        writeln!(out, "Calculate your profit margin to see the visualization")?;
        return Ok(());
    };

    let series = to_series(result);
    writeln!(out, "{}", render_summary(&summary_panel(result)))?;
    writeln!(out, "{}", render_bars(&series, CHART_WIDTH))?;
    writeln!(out, "{}", render_donut(&series))?;
    write!(out, "{}", render_gauge(&series, CHART_WIDTH))?;
    Ok(())
}

/// Runs a single calculation from command-line values.
///
/// Prints the results, optionally exports a report, and returns the export
/// path if one was written.
pub async fn run_once<W: Write>(
    session: &mut CalculatorSession,
    revenue: &str,
    cost: &str,
    export: Option<(ExportFormat, &Path)>,
    out: &mut W,
) -> Result<Option<PathBuf>> {
    session.set_revenue_text(revenue);
    session.set_cost_text(cost);
    session.calculate()?;
    write_results(session, out)?;

    let Some((format, dir)) = export else {
        return Ok(None);
    };
    let handles: Vec<_> = start_export(session, format, dir).into_iter().collect();
    let written = finish_exports(handles).await;
    match written.into_iter().next() {
        Some(path) => {
            writeln!(out, "Report written to {}", path.display())?;
            Ok(Some(path))
        }
        None => anyhow::bail!("report export failed"),
    }
}

/// Runs the line-oriented calculator until `quit` or end of input.
///
/// Pending exports are awaited before returning.
pub async fn run_interactive<R, W>(
    session: &mut CalculatorSession,
    settings: &Settings,
    input: R,
    out: &mut W,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    let mut exports = Vec::new();

    writeln!(out, "Gross Profit Margin Calculator (type 'help' for commands)")?;
    write!(out, "{}", render_fields(session.raw_input()))?;

    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            break;
        };

        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(out, "{e}")?;
                continue;
            }
        };

        match command {
            Command::Revenue(text) => session.set_revenue_text(text),
            Command::Cost(text) => session.set_cost_text(text),
            Command::Calculate => {
                if session.calculate().is_ok() {
                    write_results(session, out)?;
                }
            }
            Command::Show => {
                write!(out, "{}", render_fields(session.raw_input()))?;
                write_results(session, out)?;
            }
            Command::Export(format) => {
                let format = format.unwrap_or(settings.export_format);
                exports.extend(start_export(session, format, &settings.export_dir));
            }
            Command::Email(address) => {
                send_email(session, &address);
            }
            Command::Reset => {
                session.reset();
                write!(out, "{}", render_fields(session.raw_input()))?;
            }
            Command::Guide => write!(out, "{}", render_guide())?,
            Command::Help => writeln!(out, "{HELP_TEXT}")?,
            Command::Quit => break,
        }
    }

    for path in finish_exports(exports).await {
        writeln!(out, "Report written to {}", path.display())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use margin_core::testing::RecordingNotifier;

    fn session() -> (CalculatorSession, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::default());
        (CalculatorSession::new(notifier.clone()), notifier)
    }

    // =========================================================================
    // is_valid_email tests
    // =========================================================================

    #[test]
    fn is_valid_email_accepts_simple_address() {
        assert!(is_valid_email("owner@shop.in"));
    }

    #[test]
    fn is_valid_email_rejects_malformed_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("owner"));
        assert!(!is_valid_email("owner@shop"));
        assert!(!is_valid_email("@."));
    }

    // =========================================================================
    // send_email tests
    // =========================================================================

    #[test]
    fn send_email_checks_address_first() {
        let (session, notifier) = session();

        assert!(!send_email(&session, "nope"));
        assert_eq!(notifier.titles(), vec!["Invalid email address"]);
    }

    #[test]
    fn send_email_requires_result() {
        let (session, notifier) = session();

        assert!(!send_email(&session, "owner@shop.in"));
        assert_eq!(notifier.titles(), vec!["No calculation to send"]);
    }

    #[test]
    fn send_email_after_calculation() {
        let (mut session, notifier) = session();
        session.calculate().unwrap();

        assert!(send_email(&session, "owner@shop.in"));
        assert_eq!(
            notifier.titles(),
            vec!["Calculation complete", "Email sent!"]
        );
    }

    // =========================================================================
    // write_results tests
    // =========================================================================

    #[test]
    fn write_results_without_result_shows_placeholder() {
        let (session, _) = session();
        let mut out = Vec::new();

        write_results(&session, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Calculate your profit margin to see the visualization\n"
        );
    }

    #[test]
    fn write_results_includes_every_surface() {
        let (mut session, _) = session();
        session.calculate().unwrap();
        let mut out = Vec::new();

        write_results(&session, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Gross Profit Margin: 40.00%"));
        assert!(text.contains("Financial Breakdown"));
        assert!(text.contains("COGS: 60.00% (₹60,000)"));
        assert!(text.contains("Gross Profit Margin Indicator"));
    }

    // =========================================================================
    // start_export tests
    // =========================================================================

    #[tokio::test]
    async fn start_export_without_result_notifies() {
        let (session, notifier) = session();

        let handle = start_export(&session, ExportFormat::Csv, Path::new("unused"));

        assert!(handle.is_none());
        assert_eq!(notifier.titles(), vec!["No calculation to export"]);
    }
}
