use std::sync::{Arc, Mutex};

use tracing::debug;

use viewraw_core::{CollaboratorError, DetailView, ModalHandle, ModalHost, ViewFactory};

/// Open modals in the order they were opened. Each `open` is a separate
/// instance; there is no singleton.
#[derive(Default)]
pub struct ModalStack {
    open: Mutex<Vec<Arc<DetailView>>>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.open.lock().map(|o| o.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn handles(&self) -> Vec<ModalHandle> {
        self.open
            .lock()
            .map(|o| o.iter().map(|v| v.handle()).collect())
            .unwrap_or_default()
    }

    /// An open view, shared with the stack. Pressing its close button
    /// removes it from the stack.
    pub fn view(&self, handle: ModalHandle) -> Option<Arc<DetailView>> {
        let open = self.open.lock().ok()?;
        open.iter().find(|v| v.handle() == handle).cloned()
    }

    /// The most recently opened view.
    pub fn top(&self) -> Option<Arc<DetailView>> {
        self.open.lock().ok()?.last().cloned()
    }
}

impl ModalHost for ModalStack {
    fn open(&self, factory: ViewFactory<'_>) -> Result<ModalHandle, CollaboratorError> {
        let handle = ModalHandle::new();
        let view = factory(handle);
        self.open
            .lock()
            .map_err(|e| CollaboratorError::modal(e))?
            .push(Arc::new(view));
        debug!(modal = %handle, "modal pushed");
        Ok(handle)
    }

    /// Unknown handles are ignored.
    fn close(&self, handle: ModalHandle) -> Result<(), CollaboratorError> {
        let mut open = self.open.lock().map_err(|e| CollaboratorError::modal(e))?;
        let before = open.len();
        open.retain(|v| v.handle() != handle);
        if open.len() < before {
            debug!(modal = %handle, "modal popped");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use viewraw_core::{Presenter, sanitize};
    use viewraw_types::MessageRecord;

    use crate::clipboard::RecordingClipboard;

    fn presenter(stack: &Arc<ModalStack>) -> Presenter {
        Presenter::new(stack.clone(), Arc::new(RecordingClipboard::new()))
    }

    fn snapshot() -> viewraw_core::SanitizedSnapshot {
        let record = MessageRecord::from_serialize(&std::collections::BTreeMap::from([("content", "hi")]))
            .unwrap();
        sanitize(&record)
    }

    #[test]
    fn close_button_pops_its_own_view() {
        let stack = Arc::new(ModalStack::new());
        let presenter = presenter(&stack);
        let first = presenter.present(&snapshot()).unwrap();
        let second = presenter.present(&snapshot()).unwrap();
        assert_eq!(stack.handles(), [first, second]);

        stack.view(first).unwrap().close().unwrap();
        assert_eq!(stack.handles(), [second]);
        assert_eq!(stack.top().unwrap().handle(), second);
    }

    #[test]
    fn closing_unknown_handle_is_ignored() {
        let stack = ModalStack::new();
        stack.close(ModalHandle::new()).unwrap();
        assert!(stack.is_empty());
    }
}
