//! Test doubles shared by this workspace's test suites.

use std::sync::{Mutex, PoisonError};

use crate::{Notice, Notifier};

/// Keeps every notice it receives, in order.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn titles(&self) -> Vec<&'static str> {
        self.notices().into_iter().map(|n| n.title).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(
        &self,
        notice: &Notice,
    ) {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(*notice);
    }
}
