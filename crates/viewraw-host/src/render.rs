use viewraw_core::RichText;

/// Renders code blocks as markdown fences, the way the chat client's own
/// markdown does. Content is left verbatim so it stays selectable and
/// copyable.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownCodeBlocks;

impl RichText for MarkdownCodeBlocks {
    fn code_block(&self, content: &str, lang: &str) -> String {
        let fence = fence_for(content);
        format!("{fence}{lang}\n{content}\n{fence}")
    }
}

/// A fence longer than any backtick run inside the content.
fn fence_for(content: &str) -> String {
    let mut longest = 0;
    let mut run = 0;
    for c in content.chars() {
        if c == '`' {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }
    "`".repeat((longest + 1).max(3))
}
