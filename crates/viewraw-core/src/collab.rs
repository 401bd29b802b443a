//! Narrow interfaces onto the host client. The core only ever talks to the
//! host through these.

use std::fmt;

use uuid::Uuid;

use viewraw_types::{ChannelRef, ClickPolicy};

use crate::error::CollaboratorError;
use crate::present::DetailView;

/// Live plugin settings. Read on every gesture, never cached.
pub trait SettingsSource: Send + Sync {
    fn click_policy(&self) -> Result<ClickPolicy, CollaboratorError>;
}

/// A fixed policy, for hosts without persistent settings and for tests.
impl SettingsSource for ClickPolicy {
    fn click_policy(&self) -> Result<ClickPolicy, CollaboratorError> {
        Ok(*self)
    }
}

/// Clipboard write followed by a toast.
pub trait ClipboardNotifier: Send + Sync {
    /// `confirmation: None` lets the host pick its own wording.
    fn copy_with_notification(
        &self,
        text: &str,
        confirmation: Option<&str>,
    ) -> Result<(), CollaboratorError>;
}

/// Identity of one open modal, allocated by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModalHandle(Uuid);

impl ModalHandle {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ModalHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ModalHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Builds the modal body once the host has picked its handle.
pub type ViewFactory<'a> = Box<dyn FnOnce(ModalHandle) -> DetailView + 'a>;

pub trait ModalHost: Send + Sync {
    fn open(&self, factory: ViewFactory<'_>) -> Result<ModalHandle, CollaboratorError>;
    fn close(&self, handle: ModalHandle) -> Result<(), CollaboratorError>;
}

/// Renders a selectable code region. `lang` is empty for plain text.
pub trait RichText {
    fn code_block(&self, content: &str, lang: &str) -> String;
}

/// Resolves a message's channel id to the host's channel entity.
pub trait ChannelLookup: Send + Sync {
    fn channel(&self, channel_id: &str) -> Option<ChannelRef>;
}
