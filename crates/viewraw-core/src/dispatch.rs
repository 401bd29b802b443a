use std::sync::Arc;

use tracing::debug;

use viewraw_types::{GestureKind, MessageRecord, Outcome, PointerEvent};

use crate::collab::{ClipboardNotifier, SettingsSource};
use crate::error::Result;
use crate::present::Presenter;
use crate::sanitize::sanitize;

/// Maps pointer gestures onto "open the detail view" or "copy the content",
/// according to the live click policy.
#[derive(Clone)]
pub struct Dispatcher {
    settings: Arc<dyn SettingsSource>,
    clipboard: Arc<dyn ClipboardNotifier>,
    presenter: Presenter,
}

impl Dispatcher {
    pub fn new(
        settings: Arc<dyn SettingsSource>,
        clipboard: Arc<dyn ClipboardNotifier>,
        presenter: Presenter,
    ) -> Self {
        Self {
            settings,
            clipboard,
            presenter,
        }
    }

    /// Handle one gesture on `record`.
    ///
    /// A secondary gesture always replaces the host's context menu, so its
    /// default action is suppressed and propagation stopped whichever way
    /// the policy sends it.
    pub fn dispatch(&self, record: &MessageRecord, event: &mut PointerEvent) -> Result<Outcome> {
        if event.kind == GestureKind::Secondary {
            event.prevent_default();
            event.stop_propagation();
        }

        let policy = self.settings.click_policy()?;
        let outcome = policy.outcome_for(event.kind);
        debug!(
            message_id = record.id().unwrap_or("?"),
            %policy,
            gesture = ?event.kind,
            ?outcome,
            "view raw gesture"
        );

        match outcome {
            // Content is plain text, so it goes out unsanitized.
            Outcome::CopyContent => {
                self.clipboard.copy_with_notification(record.content(), None)?;
            }
            Outcome::Present => {
                self.presenter.present(&sanitize(record))?;
            }
        }
        Ok(outcome)
    }

    /// Button label for the current policy. Recomputed on every call.
    pub fn label(&self) -> Result<&'static str> {
        Ok(self.settings.click_policy()?.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collab::{ModalHandle, ModalHost, ViewFactory};
    use crate::error::{CollaboratorError, ViewRawError};
    use crate::present::DetailView;
    use serde_json::json;
    use std::sync::Mutex;
    use viewraw_types::ClickPolicy;

    #[derive(Default)]
    struct Clipboard {
        writes: Mutex<Vec<(String, Option<String>)>>,
    }

    impl ClipboardNotifier for Clipboard {
        fn copy_with_notification(
            &self,
            text: &str,
            confirmation: Option<&str>,
        ) -> Result<(), CollaboratorError> {
            self.writes
                .lock()
                .unwrap()
                .push((text.to_owned(), confirmation.map(str::to_owned)));
            Ok(())
        }
    }

    #[derive(Default)]
    struct Modals {
        open: Mutex<Vec<DetailView>>,
    }

    impl ModalHost for Modals {
        fn open(&self, factory: ViewFactory<'_>) -> Result<ModalHandle, CollaboratorError> {
            let handle = ModalHandle::new();
            self.open.lock().unwrap().push(factory(handle));
            Ok(handle)
        }

        fn close(&self, _handle: ModalHandle) -> Result<(), CollaboratorError> {
            Ok(())
        }
    }

    struct BrokenSettings;

    impl SettingsSource for BrokenSettings {
        fn click_policy(&self) -> Result<ClickPolicy, CollaboratorError> {
            Err(CollaboratorError::settings("store unavailable"))
        }
    }

    struct Harness {
        clipboard: Arc<Clipboard>,
        modals: Arc<Modals>,
        dispatcher: Dispatcher,
    }

    fn harness(settings: Arc<dyn SettingsSource>) -> Harness {
        let clipboard = Arc::new(Clipboard::default());
        let modals = Arc::new(Modals::default());
        let presenter = Presenter::new(modals.clone(), clipboard.clone());
        let dispatcher = Dispatcher::new(settings, clipboard.clone(), presenter);
        Harness {
            clipboard,
            modals,
            dispatcher,
        }
    }

    fn message() -> MessageRecord {
        MessageRecord::try_from(json!({
            "id": "5",
            "content": "hello",
            "author": { "id": "1", "email": "a@b.com" }
        }))
        .unwrap()
    }

    #[test]
    fn left_secondary_copies_raw_content() {
        let h = harness(Arc::new(ClickPolicy::Left));
        let mut event = PointerEvent::secondary();

        let outcome = h.dispatcher.dispatch(&message(), &mut event).unwrap();

        assert_eq!(outcome, Outcome::CopyContent);
        assert_eq!(*h.clipboard.writes.lock().unwrap(), [("hello".to_owned(), None)]);
        assert!(h.modals.open.lock().unwrap().is_empty());
        assert!(event.default_prevented());
        assert!(event.propagation_stopped());
    }

    #[test]
    fn left_primary_presents_sanitized_snapshot() {
        let h = harness(Arc::new(ClickPolicy::Left));
        let mut event = PointerEvent::primary();

        let outcome = h.dispatcher.dispatch(&message(), &mut event).unwrap();

        assert_eq!(outcome, Outcome::Present);
        assert!(h.clipboard.writes.lock().unwrap().is_empty());
        let open = h.modals.open.lock().unwrap();
        assert_eq!(open.len(), 1);
        assert!(!open[0].message_json().contains("email"));
        assert!(!event.default_prevented());
        assert!(!event.propagation_stopped());
    }

    #[test]
    fn right_policy_is_the_mirror() {
        let h = harness(Arc::new(ClickPolicy::Right));

        let mut primary = PointerEvent::primary();
        assert_eq!(h.dispatcher.dispatch(&message(), &mut primary).unwrap(), Outcome::CopyContent);

        let mut secondary = PointerEvent::secondary();
        assert_eq!(h.dispatcher.dispatch(&message(), &mut secondary).unwrap(), Outcome::Present);
        assert!(secondary.default_prevented());
        assert!(secondary.propagation_stopped());

        assert_eq!(h.clipboard.writes.lock().unwrap().len(), 1);
        assert_eq!(h.modals.open.lock().unwrap().len(), 1);
    }

    #[test]
    fn copy_skips_sanitization() {
        let h = harness(Arc::new(ClickPolicy::Right));
        let record = MessageRecord::try_from(json!({ "content": "token a@b.com", "deleted": true })).unwrap();

        h.dispatcher.dispatch(&record, &mut PointerEvent::primary()).unwrap();
        assert_eq!(h.clipboard.writes.lock().unwrap()[0].0, "token a@b.com");
    }

    #[test]
    fn label_tracks_policy() {
        assert_eq!(
            harness(Arc::new(ClickPolicy::Left)).dispatcher.label().unwrap(),
            "View Raw (Left Click) / Copy Raw (Right Click)"
        );
        assert_eq!(
            harness(Arc::new(ClickPolicy::Right)).dispatcher.label().unwrap(),
            "Copy Raw (Left Click) / View Raw (Right Click)"
        );
    }

    #[test]
    fn settings_failure_surfaces_but_secondary_is_still_suppressed() {
        let h = harness(Arc::new(BrokenSettings));
        let mut event = PointerEvent::secondary();

        let err = h.dispatcher.dispatch(&message(), &mut event).unwrap_err();
        assert!(matches!(err, ViewRawError::Collaborator(_)));
        assert!(event.default_prevented());
        assert!(h.clipboard.writes.lock().unwrap().is_empty());
    }
}
