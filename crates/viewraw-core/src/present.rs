/// The read-only "View Raw" modal.

use std::sync::{Arc, Weak};

use tracing::info;

use crate::collab::{ClipboardNotifier, ModalHandle, ModalHost, RichText};
use crate::error::Result;
use crate::sanitize::SanitizedSnapshot;

pub const TITLE: &str = "View Raw";
pub const CONTENT_SECTION: &str = "Content";
pub const DATA_SECTION: &str = "Message Data";

/// Buttons in the modal footer, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterAction {
    CopyMessageJson,
    CopyRawContent,
}

impl FooterAction {
    pub const ALL: [FooterAction; 2] = [FooterAction::CopyMessageJson, FooterAction::CopyRawContent];

    pub fn label(self) -> &'static str {
        match self {
            Self::CopyMessageJson => "Copy Message JSON",
            Self::CopyRawContent => "Copy Raw Content",
        }
    }

    pub fn confirmation(self) -> &'static str {
        match self {
            Self::CopyMessageJson => "Message data copied to clipboard!",
            Self::CopyRawContent => "Content copied to clipboard!",
        }
    }
}

/// One piece of the modal layout, top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block<'a> {
    Header { title: &'static str },
    SectionTitle(&'static str),
    CodeBlock { content: &'a str, lang: &'static str },
    Divider,
    Footer(&'static [FooterAction]),
}

/// An open detail view. Holds its own text; nothing in it is editable.
pub struct DetailView {
    handle: ModalHandle,
    message_json: String,
    content: String,
    clipboard: Arc<dyn ClipboardNotifier>,
    modals: Weak<dyn ModalHost>,
}

impl DetailView {
    pub fn handle(&self) -> ModalHandle {
        self.handle
    }

    pub fn message_json(&self) -> &str {
        &self.message_json
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// The content section only shows up for non-empty content.
    pub fn has_content_section(&self) -> bool {
        !self.content.is_empty()
    }

    pub fn layout(&self) -> Vec<Block<'_>> {
        let mut blocks = vec![Block::Header { title: TITLE }];
        if self.has_content_section() {
            blocks.push(Block::SectionTitle(CONTENT_SECTION));
            blocks.push(Block::CodeBlock {
                content: &self.content,
                lang: "",
            });
            blocks.push(Block::Divider);
        }
        blocks.push(Block::SectionTitle(DATA_SECTION));
        blocks.push(Block::CodeBlock {
            content: &self.message_json,
            lang: "json",
        });
        blocks.push(Block::Footer(&FooterAction::ALL));
        blocks
    }

    /// Plain-text rendering of [`layout`](Self::layout) for text hosts.
    pub fn render(&self, rich: &dyn RichText) -> String {
        let mut out = String::new();
        for block in self.layout() {
            match block {
                Block::Header { title } => {
                    out.push_str(&format!("## {title}  [x]\n\n"));
                }
                Block::SectionTitle(title) => {
                    out.push_str(&format!("### {title}\n"));
                }
                Block::CodeBlock { content, lang } => {
                    out.push_str(&rich.code_block(content, lang));
                    out.push('\n');
                }
                Block::Divider => out.push_str("\n---\n\n"),
                Block::Footer(actions) => {
                    let buttons: Vec<String> =
                        actions.iter().map(|a| format!("[{}]", a.label())).collect();
                    out.push('\n');
                    out.push_str(&buttons.join(" "));
                    out.push('\n');
                }
            }
        }
        out
    }

    pub fn activate(&self, action: FooterAction) -> Result<()> {
        let text = match action {
            FooterAction::CopyMessageJson => &self.message_json,
            FooterAction::CopyRawContent => &self.content,
        };
        self.clipboard
            .copy_with_notification(text, Some(action.confirmation()))?;
        Ok(())
    }

    pub fn copy_message_json(&self) -> Result<()> {
        self.activate(FooterAction::CopyMessageJson)
    }

    pub fn copy_raw_content(&self) -> Result<()> {
        self.activate(FooterAction::CopyRawContent)
    }

    /// Close button. A no-op once the host itself is gone.
    pub fn close(&self) -> Result<()> {
        if let Some(modals) = self.modals.upgrade() {
            modals.close(self.handle)?;
            info!(modal = %self.handle, "view raw modal closed");
        }
        Ok(())
    }
}

impl std::fmt::Debug for DetailView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DetailView")
            .field("handle", &self.handle)
            .field("content", &self.content)
            .field("message_json", &self.message_json)
            .finish_non_exhaustive()
    }
}

/// Opens detail views. Every call opens an independent modal.
#[derive(Clone)]
pub struct Presenter {
    modals: Arc<dyn ModalHost>,
    clipboard: Arc<dyn ClipboardNotifier>,
}

impl Presenter {
    pub fn new(modals: Arc<dyn ModalHost>, clipboard: Arc<dyn ClipboardNotifier>) -> Self {
        Self { modals, clipboard }
    }

    pub fn present(&self, snapshot: &SanitizedSnapshot) -> Result<ModalHandle> {
        let message_json = snapshot.to_pretty_json()?;
        let content = snapshot.content().to_owned();
        let clipboard = self.clipboard.clone();
        let modals = Arc::downgrade(&self.modals);

        let handle = self.modals.open(Box::new(move |handle| DetailView {
            handle,
            message_json,
            content,
            clipboard,
            modals,
        }))?;

        info!(modal = %handle, "view raw modal opened");
        Ok(handle)
    }
}
