//! Log setup for the `margin` binary.
//!
//! Events go to stderr so rendered results on stdout stay clean. The level,
//! the console output and the log file can all be changed after startup,
//! once the settings file has been read.

use std::fmt;
use std::fs::File;
use std::io::{self, IsTerminal, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use anyhow::{Context, Result, anyhow};
use chrono::Local;
use tracing::{Event, Level, Subscriber, error};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::format::{FormatEvent, FormatFields, Writer};
use tracing_subscriber::fmt::{FmtContext, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, reload};

use crate::config::Settings;

const DEFAULT_FILTER: &str = "warn";

// --- Event format ---

/// `HH:MM:SS.mmm LEVEL target: fields`, local time, colored on a terminal.
struct CalcFormat;

fn level_color(level: Level) -> &'static str {
    match level {
        Level::ERROR => "\x1b[1;31m",
        Level::WARN => "\x1b[1;33m",
        Level::INFO => "\x1b[1;32m",
        Level::DEBUG => "\x1b[1;34m",
        Level::TRACE => "\x1b[1;35m",
    }
}

impl<S, N> FormatEvent<S, N> for CalcFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();
        let time = Local::now().format("%H:%M:%S%.3f");
        let level = *meta.level();

        if writer.has_ansi_escapes() {
            write!(
                writer,
                "\x1b[2m{time}\x1b[0m {}{level:>5}\x1b[0m \x1b[36m{}\x1b[0m: ",
                level_color(level),
                meta.target()
            )?;
        } else {
            write!(writer, "{time} {level:>5} {}: ", meta.target())?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

// --- Log file ---

/// Writer target whose file is opened after the subscriber is installed.
/// Output is dropped until then.
#[derive(Clone, Default)]
struct LogFile(Arc<Mutex<Option<File>>>);

impl LogFile {
    fn slot(&self) -> MutexGuard<'_, Option<File>> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

struct LogFileWriter<'a>(MutexGuard<'a, Option<File>>);

impl Write for LogFileWriter<'_> {
    fn write(
        &mut self,
        buf: &[u8],
    ) -> io::Result<usize> {
        self.0.as_mut().map_or(Ok(buf.len()), |f| f.write(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.as_mut().map_or(Ok(()), |f| f.flush())
    }
}

impl<'a> MakeWriter<'a> for LogFile {
    type Writer = LogFileWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        LogFileWriter(self.slot())
    }
}

// --- Runtime controls ---

type Reloader<T> = Box<dyn Fn(T) -> Result<()> + Send + Sync>;

struct Controls {
    level: Reloader<EnvFilter>,
    console: Reloader<LevelFilter>,
    file: LogFile,
}

static CONTROLS: OnceLock<Controls> = OnceLock::new();

fn controls() -> Result<&'static Controls> {
    CONTROLS.get().context("logging not yet initialized")
}

fn reloader<L, S>(handle: reload::Handle<L, S>) -> Reloader<L>
where
    L: 'static,
    S: 'static,
    reload::Handle<L, S>: Send + Sync,
{
    Box::new(move |value| {
        handle
            .reload(value)
            .map_err(|e| anyhow!("log filter reload failed: {e}"))
    })
}

// --- Public API ---

/// Installs the global subscriber. Call once, before anything logs.
///
/// The level comes from `RUST_LOG` if set, otherwise `warn`. The console
/// layer writes to stderr; the file layer is idle until
/// [`enable_file_logging`] is called.
pub fn init_default_logging() {
    let level = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let (level_layer, level_handle) = reload::Layer::new(level);
    let (console_gate, console_handle) = reload::Layer::new(LevelFilter::TRACE);
    let file = LogFile::default();

    let console = tracing_subscriber::fmt::layer()
        .event_format(CalcFormat)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .with_filter(console_gate);

    let to_file = tracing_subscriber::fmt::layer()
        .event_format(CalcFormat)
        .with_ansi(false)
        .with_writer(file.clone());

    let installed = tracing_subscriber::registry()
        .with(level_layer)
        .with(console)
        .with(to_file)
        .try_init()
        .is_ok();

    if installed {
        let _ = CONTROLS.set(Controls {
            level: reloader(level_handle),
            console: reloader(console_handle),
            file,
        });
    }
}

/// Replaces the active filter. Takes a bare level such as `debug` or any
/// `EnvFilter` directive such as `margin_core=trace`.
pub fn set_log_level(directive: &str) -> Result<()> {
    let filter = EnvFilter::try_new(directive)
        .map_err(|e| anyhow!("invalid log level '{directive}': {e}"))?;
    (controls()?.level)(filter)
}

/// Turns stderr log output on or off. The log file is unaffected.
pub fn set_console_enabled(enabled: bool) -> Result<()> {
    let gate = if enabled {
        LevelFilter::TRACE
    } else {
        LevelFilter::OFF
    };
    (controls()?.console)(gate)
}

/// Appends log output to `path`, replacing any file already in use.
/// The parent directory must exist.
pub fn enable_file_logging(path: &Path) -> Result<()> {
    let controls = controls()?;
    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file '{}'", path.display()))?;

    *controls.file.slot() = Some(file);
    Ok(())
}

/// Picks the filter directive to apply once settings are known.
///
/// A command-line level wins, then `RUST_LOG` (already applied at
/// startup, so `None` is returned), then the settings file.
pub fn effective_log_level<'a>(
    cli_level: Option<&'a str>,
    rust_log_set: bool,
    settings_level: &'a str,
) -> Option<&'a str> {
    match cli_level {
        Some(level) => Some(level),
        None if rust_log_set => None,
        None => Some(settings_level),
    }
}

/// Applies the level, log file and console settings after startup.
///
/// Level precedence follows [`effective_log_level`]. A log file given on the
/// command line replaces the one from the settings file.
pub fn configure_logging(
    cli_level: Option<&str>,
    cli_log_file: Option<&Path>,
    quiet: bool,
    settings: &Settings,
) -> Result<()> {
    let rust_log_set = std::env::var_os(EnvFilter::DEFAULT_ENV).is_some();
    if let Some(level) = effective_log_level(cli_level, rust_log_set, &settings.log_level) {
        set_log_level(level)?;
    }

    if let Some(path) = cli_log_file.or(settings.log_file.as_deref()) {
        enable_file_logging(path)?;
    }

    if quiet {
        set_console_enabled(false)?;
    }
    Ok(())
}

/// Unwraps the outcome of a background task, logging the failure.
pub fn log_task_error<T>(
    task_name: &'static str,
    result: Result<T>,
) -> Option<T> {
    result
        .inspect_err(|error| error!(task = task_name, ?error, "background task failed"))
        .ok()
}
