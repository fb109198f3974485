//! Window record model.
//!
//! A [`WindowRecord`] is the canonical state of one managed window. Records
//! are created, mutated and destroyed exclusively by [`WindowStore`]; readers
//! only ever see shared references.

pub mod store;
pub mod subscribers;

use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;

use crate::geometry::{Bounds, Point, Size};

pub use store::{ManagerState, WindowStore};
pub use subscribers::SubscriptionId;

/// Opaque window identifier, stable for the window's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowId(String);

impl WindowId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for WindowId {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for WindowId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WindowId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for WindowId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl PartialEq<str> for WindowId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for WindowId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WindowState {
    #[default]
    Normal,
    Maximized,
    Minimized,
    Fullscreen,
}

impl WindowState {
    /// Whether the window occupies screen space at all.
    pub fn is_visible(self) -> bool {
        !matches!(self, WindowState::Minimized)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WindowRecord<P = ()> {
    pub id: WindowId,
    /// Tag used to look up a renderer; never inspected by the store.
    pub content_kind: String,
    pub content_params: P,
    /// Only meaningful while `state == Normal`.
    pub position: Point,
    /// Only meaningful while `state == Normal`.
    pub size: Size,
    pub state: WindowState,
    pub z_index: u32,
    pub is_focused: bool,
    pub is_pinned: bool,
}

impl<P> WindowRecord<P> {
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.position, self.size)
    }

    /// Key that orders windows bottom-to-top: the pinned band first, then
    /// the plain stacking value.
    pub fn stacking_key(&self) -> (bool, u32) {
        (self.is_pinned, self.z_index)
    }
}

/// Optional geometry and identity for [`WindowStore::open`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpenOptions {
    pub id: Option<WindowId>,
    pub position: Option<Point>,
    pub size: Option<Size>,
}

impl OpenOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<WindowId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn position(mut self, position: Point) -> Self {
        self.position = Some(position);
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }
}
