use crate::{Console, PatternError};
use std::sync::Mutex;

/// In-memory console that keeps every printed line in order.
///
/// Used by tests to observe product behavior, and by the CLI `--capture`
/// mode to print a numbered transcript after a run.
#[derive(Debug, Default)]
pub struct RecordingConsole {
    lines: Mutex<Vec<String>>,
}

impl RecordingConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the recorded lines.
    pub fn lines(&self) -> Vec<String> {
        self.guard().clone()
    }

    pub fn len(&self) -> usize {
        self.guard().len()
    }

    pub fn is_empty(&self) -> bool {
        self.guard().is_empty()
    }

    fn guard(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        // A poisoned lock still holds a usable transcript.
        self.lines.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Console for RecordingConsole {
    fn print_line(&self, line: &str) -> Result<(), PatternError> {
        self.guard().push(line.to_string());
        Ok(())
    }
}
