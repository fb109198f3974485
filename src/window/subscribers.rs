//! Read subscriptions over the store.
//!
//! Callbacks run synchronously on the mutating thread right after the
//! mutation that triggered them, and only receive shared references, so a
//! subscriber can never re-enter the store.

use std::fmt;

use super::{WindowId, WindowRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

type WindowsCallback<P> = Box<dyn FnMut(&[WindowRecord<P>])>;
type FocusedCallback<P> = Box<dyn FnMut(Option<&WindowRecord<P>>)>;
type CountCallback = Box<dyn FnMut(usize)>;

/// What a single mutation changed, as seen by the derived projections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Change {
    pub focus_changed: bool,
    pub count_changed: bool,
}

impl Change {
    pub fn between(
        before_focus: Option<&WindowId>,
        before_len: usize,
        after_focus: Option<&WindowId>,
        after_len: usize,
    ) -> Self {
        Self {
            focus_changed: before_focus != after_focus,
            count_changed: before_len != after_len,
        }
    }
}

pub(crate) struct Subscribers<P> {
    next_id: u64,
    windows: Vec<(SubscriptionId, WindowsCallback<P>)>,
    focused: Vec<(SubscriptionId, FocusedCallback<P>)>,
    count: Vec<(SubscriptionId, CountCallback)>,
}

impl<P> Default for Subscribers<P> {
    fn default() -> Self {
        Self {
            next_id: 0,
            windows: Vec::new(),
            focused: Vec::new(),
            count: Vec::new(),
        }
    }
}

impl<P> fmt::Debug for Subscribers<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("windows", &self.windows.len())
            .field("focused", &self.focused.len())
            .field("count", &self.count.len())
            .finish()
    }
}

impl<P> Subscribers<P> {
    fn allocate(&mut self) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    pub fn add_windows(&mut self, callback: WindowsCallback<P>) -> SubscriptionId {
        let id = self.allocate();
        self.windows.push((id, callback));
        id
    }

    pub fn add_focused(&mut self, callback: FocusedCallback<P>) -> SubscriptionId {
        let id = self.allocate();
        self.focused.push((id, callback));
        id
    }

    pub fn add_count(&mut self, callback: CountCallback) -> SubscriptionId {
        let id = self.allocate();
        self.count.push((id, callback));
        id
    }

    pub fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.len();
        self.windows.retain(|(sub, _)| *sub != id);
        self.focused.retain(|(sub, _)| *sub != id);
        self.count.retain(|(sub, _)| *sub != id);
        self.len() != before
    }

    pub fn len(&self) -> usize {
        self.windows.len() + self.focused.len() + self.count.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn notify(&mut self, windows: &[WindowRecord<P>], change: Change) {
        for (_, callback) in &mut self.windows {
            callback(windows);
        }
        if change.focus_changed {
            let focused = windows.iter().find(|w| w.is_focused);
            for (_, callback) in &mut self.focused {
                callback(focused);
            }
        }
        if change.count_changed {
            for (_, callback) in &mut self.count {
                callback(windows.len());
            }
        }
    }
}
