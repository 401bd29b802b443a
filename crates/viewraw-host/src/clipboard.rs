use std::sync::Mutex;

use tracing::debug;

use viewraw_core::{ClipboardNotifier, CollaboratorError};

/// Toast wording when the caller doesn't supply one.
pub const DEFAULT_CONFIRMATION: &str = "Copied to clipboard!";

/// A toast shown after a copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
}

/// Clipboard that keeps every write in memory, most recent last.
#[derive(Default)]
pub struct RecordingClipboard {
    writes: Mutex<Vec<String>>,
    toasts: Mutex<Vec<Toast>>,
}

impl RecordingClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current clipboard contents.
    pub fn contents(&self) -> Option<String> {
        self.writes.lock().ok()?.last().cloned()
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().map(|w| w.clone()).unwrap_or_default()
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.lock().map(|t| t.clone()).unwrap_or_default()
    }
}

impl ClipboardNotifier for RecordingClipboard {
    fn copy_with_notification(
        &self,
        text: &str,
        confirmation: Option<&str>,
    ) -> Result<(), CollaboratorError> {
        self.writes
            .lock()
            .map_err(|e| CollaboratorError::clipboard(e))?
            .push(text.to_owned());

        let message = confirmation.unwrap_or(DEFAULT_CONFIRMATION).to_owned();
        debug!(bytes = text.len(), toast = %message, "clipboard write");
        self.toasts
            .lock()
            .map_err(|e| CollaboratorError::clipboard(e))?
            .push(Toast { message });
        Ok(())
    }
}
