use std::sync::Arc;

use tracing::info;

use viewraw_types::{MessageRecord, SelectOption};

use crate::collab::{ChannelLookup, ClipboardNotifier, ModalHost, SettingsSource};
use crate::dispatch::Dispatcher;
use crate::error::Result;
use crate::popover::{ActionButtonDescriptor, ActionSurface, Icon};
use crate::present::Presenter;

/// Name the button is registered under, for both add and remove.
pub const BUTTON_NAME: &str = "ViewRaw";

pub const PLUGIN_NAME: &str = "ViewRaw";
pub const DESCRIPTION: &str = "Copy and view the raw content/data of any message.";

/// Everything the plugin needs from the host.
#[derive(Clone)]
pub struct Collaborators {
    pub settings: Arc<dyn SettingsSource>,
    pub clipboard: Arc<dyn ClipboardNotifier>,
    pub modals: Arc<dyn ModalHost>,
    pub channels: Arc<dyn ChannelLookup>,
}

/// The "View Raw" message action.
#[derive(Clone)]
pub struct ViewRaw {
    dispatcher: Dispatcher,
    channels: Arc<dyn ChannelLookup>,
}

impl ViewRaw {
    pub fn new(host: Collaborators) -> Self {
        let presenter = Presenter::new(host.modals, host.clipboard.clone());
        Self {
            dispatcher: Dispatcher::new(host.settings, host.clipboard, presenter),
            channels: host.channels,
        }
    }

    /// The single setting this plugin exposes.
    pub fn settings() -> SelectOption {
        SelectOption::click_method()
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Build the action button for one render of `message`.
    pub fn button_for(&self, message: &MessageRecord) -> Result<ActionButtonDescriptor> {
        let label = self.dispatcher.label()?;
        let channel = message
            .channel_id()
            .and_then(|id| self.channels.channel(id));
        Ok(ActionButtonDescriptor::new(
            label,
            Icon::Copy,
            message.clone(),
            channel,
            self.dispatcher.clone(),
        ))
    }

    pub fn start(&self, surface: &dyn ActionSurface) {
        let plugin = self.clone();
        surface.add_button(BUTTON_NAME, Arc::new(move |message: &MessageRecord| plugin.button_for(message)));
        info!(plugin = PLUGIN_NAME, "started");
    }

    pub fn stop(&self, surface: &dyn ActionSurface) {
        surface.remove_button(BUTTON_NAME);
        info!(plugin = PLUGIN_NAME, "stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collab::{ModalHandle, ViewFactory};
    use crate::error::CollaboratorError;
    use crate::popover::PopoverRegistry;
    use serde_json::json;
    use std::sync::Mutex;
    use viewraw_types::{ChannelRef, ClickPolicy, Outcome, PointerEvent};

    /// Click policy that configuration UI can flip mid-test.
    struct LivePolicy(Mutex<ClickPolicy>);

    impl SettingsSource for LivePolicy {
        fn click_policy(&self) -> Result<ClickPolicy, CollaboratorError> {
            Ok(*self.0.lock().unwrap())
        }
    }

    #[derive(Default)]
    struct Clipboard(Mutex<Vec<String>>);

    impl ClipboardNotifier for Clipboard {
        fn copy_with_notification(&self, text: &str, _: Option<&str>) -> Result<(), CollaboratorError> {
            self.0.lock().unwrap().push(text.to_owned());
            Ok(())
        }
    }

    #[derive(Default)]
    struct Modals(Mutex<usize>);

    impl ModalHost for Modals {
        fn open(&self, factory: ViewFactory<'_>) -> Result<ModalHandle, CollaboratorError> {
            let handle = ModalHandle::new();
            let _view = factory(handle);
            *self.0.lock().unwrap() += 1;
            Ok(handle)
        }

        fn close(&self, _: ModalHandle) -> Result<(), CollaboratorError> {
            Ok(())
        }
    }

    struct Channels;

    impl ChannelLookup for Channels {
        fn channel(&self, channel_id: &str) -> Option<ChannelRef> {
            (channel_id == "900").then(|| ChannelRef {
                id: "900".into(),
                name: Some("general".into()),
            })
        }
    }

    fn plugin(policy: Arc<LivePolicy>) -> (ViewRaw, Arc<Clipboard>, Arc<Modals>) {
        let clipboard = Arc::new(Clipboard::default());
        let modals = Arc::new(Modals::default());
        let plugin = ViewRaw::new(Collaborators {
            settings: policy,
            clipboard: clipboard.clone(),
            modals: modals.clone(),
            channels: Arc::new(Channels),
        });
        (plugin, clipboard, modals)
    }

    fn message() -> MessageRecord {
        MessageRecord::try_from(json!({ "id": "1", "channel_id": "900", "content": "hey" })).unwrap()
    }

    #[test]
    fn start_and_stop_use_the_same_name() {
        let registry = PopoverRegistry::new();
        let (plugin, _, _) = plugin(Arc::new(LivePolicy(Mutex::new(ClickPolicy::Left))));

        plugin.start(&registry);
        assert!(registry.is_registered(BUTTON_NAME));

        plugin.stop(&registry);
        assert!(registry.names().is_empty());
    }

    #[test]
    fn descriptor_carries_message_channel_and_icon() {
        let (plugin, _, _) = plugin(Arc::new(LivePolicy(Mutex::new(ClickPolicy::Left))));
        let button = plugin.button_for(&message()).unwrap();

        assert_eq!(button.icon, Icon::Copy);
        assert_eq!(button.message, message());
        assert_eq!(button.channel.as_ref().and_then(|c| c.name.as_deref()), Some("general"));

        let orphan = MessageRecord::try_from(json!({ "id": "2", "channel_id": "404" })).unwrap();
        assert!(plugin.button_for(&orphan).unwrap().channel.is_none());
    }

    #[test]
    fn label_and_handlers_follow_live_policy() {
        let policy = Arc::new(LivePolicy(Mutex::new(ClickPolicy::Left)));
        let (plugin, clipboard, modals) = plugin(policy.clone());
        let registry = PopoverRegistry::new();
        plugin.start(&registry);

        let button = registry.render(&message()).pop().unwrap().unwrap();
        assert_eq!(button.label, ClickPolicy::Left.label());
        assert_eq!(button.on_click().unwrap(), Outcome::Present);

        // Flip the setting; the already-built button reads it at click time.
        *policy.0.lock().unwrap() = ClickPolicy::Right;
        assert_eq!(button.on_click().unwrap(), Outcome::CopyContent);
        let mut event = PointerEvent::secondary();
        assert_eq!(button.on_context_menu(&mut event).unwrap(), Outcome::Present);
        assert!(event.default_prevented() && event.propagation_stopped());

        let rerendered = registry.render(&message()).pop().unwrap().unwrap();
        assert_eq!(rerendered.label, ClickPolicy::Right.label());

        assert_eq!(*clipboard.0.lock().unwrap(), ["hey"]);
        assert_eq!(*modals.0.lock().unwrap(), 2);
    }

    #[test]
    fn declares_click_method_setting() {
        let option = ViewRaw::settings();
        assert_eq!(option.key, "clickMethod");
        assert_eq!(option.default_value(), ClickPolicy::Left);
    }
}
