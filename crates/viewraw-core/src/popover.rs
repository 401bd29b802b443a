use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use viewraw_types::{ChannelRef, MessageRecord, Outcome, PointerEvent};

use crate::dispatch::Dispatcher;
use crate::error::Result;

/// Icon shown on the message action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Copy,
}

impl Icon {
    pub fn view_box(self) -> &'static str {
        "0 0 20 20"
    }

    pub fn size(self) -> u32 {
        22
    }

    pub fn svg_path(self) -> &'static str {
        match self {
            Self::Copy => {
                "M16 1H4c-1.1 0-2 .9-2 2v14h2V3h12V1zm3 4H8c-1.1 0-2 .9-2 2v14c0 1.1.9 2 2 2h11c1.1 0 2-.9 2-2V7c0-1.1-.9-2-2-2zm0 16H8V7h11v14z"
            }
        }
    }
}

/// One message action button, built fresh for every render.
pub struct ActionButtonDescriptor {
    pub label: String,
    pub icon: Icon,
    pub message: MessageRecord,
    pub channel: Option<ChannelRef>,
    dispatcher: Dispatcher,
}

impl ActionButtonDescriptor {
    pub fn new(
        label: impl Into<String>,
        icon: Icon,
        message: MessageRecord,
        channel: Option<ChannelRef>,
        dispatcher: Dispatcher,
    ) -> Self {
        Self {
            label: label.into(),
            icon,
            message,
            channel,
            dispatcher,
        }
    }

    /// Primary click.
    pub fn on_click(&self) -> Result<Outcome> {
        self.dispatcher.dispatch(&self.message, &mut PointerEvent::primary())
    }

    /// Secondary click; the host inspects `event` afterwards.
    pub fn on_context_menu(&self, event: &mut PointerEvent) -> Result<Outcome> {
        self.dispatcher.dispatch(&self.message, event)
    }
}

impl std::fmt::Debug for ActionButtonDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionButtonDescriptor")
            .field("label", &self.label)
            .field("icon", &self.icon)
            .field("message", &self.message.id())
            .field("channel", &self.channel)
            .finish_non_exhaustive()
    }
}

/// Produces the button for one message render.
pub type ButtonFactory =
    Arc<dyn Fn(&MessageRecord) -> Result<ActionButtonDescriptor> + Send + Sync>;

/// The host's message action surface, as seen by a plugin.
pub trait ActionSurface: Send + Sync {
    fn add_button(&self, name: &str, factory: ButtonFactory);
    fn remove_button(&self, name: &str);
}

/// In-memory action surface keyed by button name.
#[derive(Clone, Default)]
pub struct PopoverRegistry {
    buttons: Arc<RwLock<BTreeMap<String, ButtonFactory>>>,
}

impl PopoverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn names(&self) -> Vec<String> {
        self.buttons
            .read()
            .map(|b| b.keys().cloned().collect())
            .unwrap_or_default()
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.buttons.read().is_ok_and(|b| b.contains_key(name))
    }

    /// Run every registered factory for one message, in name order.
    pub fn render(&self, message: &MessageRecord) -> Vec<Result<ActionButtonDescriptor>> {
        // Factories run outside the lock so they may touch the registry.
        let factories: Vec<ButtonFactory> = match self.buttons.read() {
            Ok(buttons) => buttons.values().cloned().collect(),
            Err(_) => return Vec::new(),
        };
        factories.iter().map(|factory| factory(message)).collect()
    }
}

impl ActionSurface for PopoverRegistry {
    fn add_button(&self, name: &str, factory: ButtonFactory) {
        if let Ok(mut buttons) = self.buttons.write() {
            buttons.insert(name.to_owned(), factory);
        }
    }

    fn remove_button(&self, name: &str) {
        if let Ok(mut buttons) = self.buttons.write() {
            buttons.remove(name);
        }
    }
}
