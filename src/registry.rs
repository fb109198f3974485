//! Content-kind to renderer lookup.
//!
//! The store only keeps the `content_kind` tag; hosts register whatever
//! renderer type they draw with and resolve it per window at draw time.

use std::collections::BTreeMap;

use crate::window::WindowRecord;

#[derive(Debug, Clone)]
pub struct ContentRegistry<R> {
    renderers: BTreeMap<String, R>,
}

impl<R> Default for ContentRegistry<R> {
    fn default() -> Self {
        Self {
            renderers: BTreeMap::new(),
        }
    }
}

impl<R> ContentRegistry<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `renderer` for `kind`, returning the one it replaced.
    pub fn register(&mut self, kind: impl Into<String>, renderer: R) -> Option<R> {
        self.renderers.insert(kind.into(), renderer)
    }

    pub fn unregister(&mut self, kind: &str) -> Option<R> {
        self.renderers.remove(kind)
    }

    pub fn get(&self, kind: &str) -> Option<&R> {
        self.renderers.get(kind)
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.renderers.contains_key(kind)
    }

    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.renderers.keys().map(String::as_str)
    }

    /// Looks up the renderer for a window. A miss is logged and left to the
    /// caller to skip; the window itself stays open.
    pub fn resolve<P>(&self, window: &WindowRecord<P>) -> Option<&R> {
        let renderer = self.get(&window.content_kind);
        if renderer.is_none() {
            tracing::warn!(
                window_id = %window.id,
                content_kind = %window.content_kind,
                "no renderer registered for content kind"
            );
        }
        renderer
    }
}
