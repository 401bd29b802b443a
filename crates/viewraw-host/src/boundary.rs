use std::fmt::Display;

use tracing::error;

/// Contains failures from one UI section so the rest of the host keeps
/// running. The section gets a fallback instead.
#[derive(Debug, Clone, Copy)]
pub struct ErrorBoundary {
    section: &'static str,
}

impl ErrorBoundary {
    pub fn new(section: &'static str) -> Self {
        Self { section }
    }

    /// `None` means the section failed and should render its fallback.
    pub fn run<T, E: Display>(&self, f: impl FnOnce() -> Result<T, E>) -> Option<T> {
        match f() {
            Ok(value) => Some(value),
            Err(e) => {
                error!(section = self.section, "{}", e);
                None
            }
        }
    }

    pub fn run_or<T, E: Display>(&self, fallback: T, f: impl FnOnce() -> Result<T, E>) -> T {
        self.run(f).unwrap_or(fallback)
    }
}
