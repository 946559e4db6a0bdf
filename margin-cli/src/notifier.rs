//! Notifier that writes notices to the terminal.

use std::io::{self, Write};

use margin_core::{Notice, Notifier};
use tracing::info;

/// Prints each notice as `title: description` on stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(
        &self,
        notice: &Notice,
    ) {
        info!(title = notice.title, description = notice.description, "notice");
        let _ = writeln!(io::stderr().lock(), "{}: {}", notice.title, notice.description);
    }
}
