//! View Raw: inspect and copy the data behind a chat message.
//!
//! - `sanitize`: redacts a message record into a key-ordered snapshot
//! - `dispatch`: maps primary/secondary clicks onto view or copy
//! - `present`: the read-only detail view with its two copy buttons
//! - `popover`: the per-message action button and its registry
//! - `plugin`: start/stop wiring against the host
//!
//! All host UI (clipboard, modals, settings, channel lookup) comes in through
//! the traits in `collab`.

pub mod collab;
pub mod dispatch;
pub mod error;
pub mod plugin;
pub mod popover;
pub mod present;
pub mod sanitize;

pub use collab::{
    ChannelLookup, ClipboardNotifier, ModalHandle, ModalHost, RichText, SettingsSource, ViewFactory,
};
pub use dispatch::Dispatcher;
pub use error::{Collaborator, CollaboratorError, Result, ViewRawError};
pub use plugin::{BUTTON_NAME, Collaborators, ViewRaw};
pub use popover::{ActionButtonDescriptor, ActionSurface, ButtonFactory, Icon, PopoverRegistry};
pub use present::{Block, DetailView, FooterAction, Presenter};
pub use sanitize::{SanitizedSnapshot, sanitize, sanitize_serialize};
