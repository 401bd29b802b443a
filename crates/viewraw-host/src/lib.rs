/// Reference host for the View Raw plugin.
///
/// In-process stand-ins for the client's clipboard, toast, modal, rich-text
/// and channel services, plus the error boundary and startup config. Used
/// to embed the plugin in simple hosts and to drive it end to end in tests.

pub mod boundary;
pub mod channels;
pub mod clipboard;
pub mod config;
pub mod modal;
pub mod render;

pub use boundary::ErrorBoundary;
pub use channels::ChannelDirectory;
pub use clipboard::{DEFAULT_CONFIRMATION, RecordingClipboard, Toast};
pub use config::{HostConfig, init_tracing};
pub use modal::ModalStack;
pub use render::MarkdownCodeBlocks;
