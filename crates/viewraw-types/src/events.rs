use serde::{Deserialize, Serialize};

/// Which pointer action produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GestureKind {
    /// Left click.
    Primary,
    /// Right click / context menu.
    Secondary,
}

/// What a gesture ends up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Open the detail view on the sanitized snapshot.
    Present,
    /// Copy the raw text content.
    CopyContent,
}

/// A pointer event delivered by the host, with the two flags the host
/// inspects after the handler returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub kind: GestureKind,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl PointerEvent {
    pub fn new(kind: GestureKind) -> Self {
        Self {
            kind,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    pub fn primary() -> Self {
        Self::new(GestureKind::Primary)
    }

    pub fn secondary() -> Self {
        Self::new(GestureKind::Secondary)
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}
