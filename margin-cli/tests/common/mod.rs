//! Shared helpers for the shell integration tests.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use margin_cli::CalculatorSession;
use margin_core::testing::RecordingNotifier;

pub fn session() -> (CalculatorSession, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::default());
    (CalculatorSession::new(notifier.clone()), notifier)
}

/// A fresh, empty directory under the cargo target tmp dir.
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join(name);
    let _ = std::fs::remove_dir_all(&dir);
    dir
}
