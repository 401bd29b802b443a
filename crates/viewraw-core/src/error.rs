use std::fmt;

use thiserror::Error;

/// Errors surfaced by the view-raw pipeline. Nothing here is retried; the
/// host's isolation boundary decides what the user sees.
#[derive(Debug, Error)]
pub enum ViewRawError {
    /// The record could not be deep-copied as JSON.
    #[error("message record can't be serialized: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Collaborator(#[from] CollaboratorError),
}

/// Which host collaborator raised a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collaborator {
    Clipboard,
    Modal,
    Settings,
}

impl fmt::Display for Collaborator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Clipboard => "clipboard",
            Self::Modal => "modal",
            Self::Settings => "settings",
        })
    }
}

#[derive(Debug, Error)]
#[error("{collaborator} collaborator failed: {message}")]
pub struct CollaboratorError {
    pub collaborator: Collaborator,
    pub message: String,
}

impl CollaboratorError {
    pub fn new(collaborator: Collaborator, message: impl fmt::Display) -> Self {
        Self {
            collaborator,
            message: message.to_string(),
        }
    }

    pub fn clipboard(message: impl fmt::Display) -> Self {
        Self::new(Collaborator::Clipboard, message)
    }

    pub fn modal(message: impl fmt::Display) -> Self {
        Self::new(Collaborator::Modal, message)
    }

    pub fn settings(message: impl fmt::Display) -> Self {
        Self::new(Collaborator::Settings, message)
    }
}

pub type Result<T, E = ViewRawError> = std::result::Result<T, E>;
