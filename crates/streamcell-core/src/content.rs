//! Deferred cell content
//!
//! The reader that produces cells may not have materialised a cell's text
//! when the cell is handed out (a shared-string lookup, say). It attaches a
//! [`ContentSource`] instead, which runs the first time the content is needed.

use std::cell::Cell;
use std::fmt;

use once_cell::unsync::OnceCell;

/// A one-shot producer of a cell's resolved content
///
/// Returning `None` means the cell has no content, which classifies as blank.
pub trait ContentSource {
    /// Produce the content, consuming the source
    fn resolve(self: Box<Self>) -> Option<String>;
}

impl<F> ContentSource for F
where
    F: FnOnce() -> Option<String>,
{
    fn resolve(self: Box<Self>) -> Option<String> {
        (*self)()
    }
}

/// Cell content that is resolved at most once
pub struct LazyContent {
    source: Cell<Option<Box<dyn ContentSource>>>,
    resolved: OnceCell<Option<String>>,
}

impl LazyContent {
    /// Content that resolves to nothing
    pub fn absent() -> Self {
        Self {
            source: Cell::new(None),
            resolved: OnceCell::new(),
        }
    }

    /// Content that is already known
    pub fn ready(content: Option<String>) -> Self {
        Self {
            source: Cell::new(None),
            resolved: OnceCell::with_value(content),
        }
    }

    /// Content produced by `source` on first access
    pub fn deferred<S>(source: S) -> Self
    where
        S: ContentSource + 'static,
    {
        let source: Box<dyn ContentSource> = Box::new(source);
        Self {
            source: Cell::new(Some(source)),
            resolved: OnceCell::new(),
        }
    }

    /// Get the content, running the source if it has not run yet
    pub fn get(&self) -> Option<&str> {
        self.resolved
            .get_or_init(|| match self.source.take() {
                Some(source) => {
                    log::trace!("resolving deferred cell content");
                    source.resolve()
                }
                None => None,
            })
            .as_deref()
    }

    /// Check if the content has been resolved
    pub fn is_resolved(&self) -> bool {
        self.resolved.get().is_some()
    }
}

impl Default for LazyContent {
    fn default() -> Self {
        Self::absent()
    }
}

impl fmt::Debug for LazyContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.resolved.get() {
            Some(content) => f.debug_tuple("LazyContent").field(content).finish(),
            None => f.write_str("LazyContent(<pending>)"),
        }
    }
}
