use crate::config::StoreConfig;
use crate::constants::{FIRST_Z_INDEX, GENERATED_ID_PREFIX};
use crate::error::WmError;
use crate::geometry::{Point, Size};

use super::subscribers::{Change, Subscribers, SubscriptionId};
use super::{OpenOptions, WindowId, WindowRecord, WindowState};

/// Read-only view of everything the store owns.
#[derive(Debug, Clone, Copy)]
pub struct ManagerState<'a, P> {
    pub windows: &'a [WindowRecord<P>],
    /// Advisory; the store never clamps against it.
    pub container_size: Size,
    pub next_z_index: u32,
}

/// Owns the window collection and is its only mutator.
///
/// Every action is total: an id that is not present turns the action into a
/// silent no-op, and a duplicate id passed to [`open`](Self::open) is logged
/// and ignored. Subscribers are notified synchronously after each action that
/// changed the collection.
///
/// Stacking is arbitrated per band. Non-pinned windows draw from a plain
/// counter (`next_z_index`); pinned windows live `pinned_offset` above the
/// highest of them and are lifted whenever the plain band catches up, so
/// comparing `(is_pinned, z_index)` and comparing `z_index` alone agree.
#[derive(Debug)]
pub struct WindowStore<P = ()> {
    config: StoreConfig,
    windows: Vec<WindowRecord<P>>,
    container_size: Size,
    next_z_index: u32,
    next_generated_id: u64,
    subscribers: Subscribers<P>,
}

impl<P> Default for WindowStore<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> WindowStore<P> {
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            config,
            windows: Vec::new(),
            container_size: Size::default(),
            next_z_index: FIRST_Z_INDEX,
            next_generated_id: 1,
            subscribers: Subscribers::default(),
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    // ----- reads ---------------------------------------------------------

    pub fn state(&self) -> ManagerState<'_, P> {
        ManagerState {
            windows: &self.windows,
            container_size: self.container_size,
            next_z_index: self.next_z_index,
        }
    }

    pub fn windows(&self) -> &[WindowRecord<P>] {
        &self.windows
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn container_size(&self) -> Size {
        self.container_size
    }

    /// Next value of the plain stacking counter.
    ///
    /// The counter saturates at `u32::MAX`. Past that point a focus no longer
    /// raises a window and two windows may share a `z_index`; reaching it
    /// takes on the order of four billion raises.
    pub fn next_z_index(&self) -> u32 {
        self.next_z_index
    }

    pub fn get_window(&self, id: &str) -> Option<&WindowRecord<P>> {
        self.windows.iter().find(|w| w.id == id)
    }

    pub fn get_windows_by_type(&self, content_kind: &str) -> Vec<&WindowRecord<P>> {
        self.windows
            .iter()
            .filter(|w| w.content_kind == content_kind)
            .collect()
    }

    pub fn get_focused_window(&self) -> Option<&WindowRecord<P>> {
        self.windows.iter().find(|w| w.is_focused)
    }

    pub fn focused_id(&self) -> Option<&WindowId> {
        self.get_focused_window().map(|w| &w.id)
    }

    /// Visible windows, bottom-most first.
    pub fn paint_order(&self) -> Vec<&WindowRecord<P>> {
        let mut visible: Vec<&WindowRecord<P>> = self
            .windows
            .iter()
            .filter(|w| w.state.is_visible())
            .collect();
        visible.sort_by_key(|w| w.stacking_key());
        visible
    }

    pub fn top_visible(&self) -> Option<&WindowRecord<P>> {
        self.windows
            .iter()
            .filter(|w| w.state.is_visible())
            .max_by_key(|w| w.stacking_key())
    }

    // ----- subscriptions -------------------------------------------------

    pub fn subscribe_windows<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&[WindowRecord<P>]) + 'static,
    {
        self.subscribers.add_windows(Box::new(callback))
    }

    pub fn subscribe_focused<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(Option<&WindowRecord<P>>) + 'static,
    {
        self.subscribers.add_focused(Box::new(callback))
    }

    pub fn subscribe_count<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(usize) + 'static,
    {
        self.subscribers.add_count(Box::new(callback))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(id)
    }

    // ----- actions -------------------------------------------------------

    /// Opens a window, or reports why it could not.
    pub fn try_open(
        &mut self,
        content_kind: impl Into<String>,
        content_params: P,
        options: OpenOptions,
    ) -> Result<WindowId, WmError> {
        let id = match options.id {
            Some(id) if self.index_of(&id).is_some() => return Err(WmError::DuplicateId(id)),
            Some(id) => id,
            None => self.generate_id(),
        };
        let content_kind = content_kind.into();
        let record = WindowRecord {
            id: id.clone(),
            content_kind,
            content_params,
            position: options.position.unwrap_or(self.config.default_position),
            size: options.size.unwrap_or(self.config.default_size),
            state: WindowState::Normal,
            z_index: self.next_z_index,
            is_focused: true,
            is_pinned: false,
        };
        self.commit(|store| {
            for window in &mut store.windows {
                window.is_focused = false;
            }
            let z = record.z_index;
            tracing::debug!(window_id = %record.id, content_kind = %record.content_kind, z_index = z, "opened window");
            store.windows.push(record);
            let idx = store.windows.len() - 1;
            store.assign_z(idx, z);
            true
        });
        Ok(id)
    }

    /// Opens a window and focuses it on top of the non-pinned band.
    ///
    /// A duplicate id is logged and ignored; `None` is returned in that case.
    pub fn open(
        &mut self,
        content_kind: impl Into<String>,
        content_params: P,
        options: OpenOptions,
    ) -> Option<WindowId> {
        match self.try_open(content_kind, content_params, options) {
            Ok(id) => Some(id),
            Err(err) => {
                tracing::warn!(error = %err, "ignoring open");
                None
            }
        }
    }

    /// Removes the window. Focus is not handed to another window.
    pub fn close(&mut self, id: &str) {
        self.commit(|store| {
            let Some(idx) = store.index_of(id) else {
                return false;
            };
            let removed = store.windows.remove(idx);
            tracing::debug!(window_id = %removed.id, "closed window");
            true
        });
    }

    pub fn close_all(&mut self) {
        self.commit(|store| {
            if store.windows.is_empty() {
                return false;
            }
            tracing::debug!(count = store.windows.len(), "closing all windows");
            store.windows.clear();
            true
        });
    }

    pub fn close_by_type(&mut self, content_kind: &str) {
        self.commit(|store| {
            let before = store.windows.len();
            store.windows.retain(|w| w.content_kind != content_kind);
            let removed = before - store.windows.len();
            if removed > 0 {
                tracing::debug!(content_kind, removed, "closed windows by type");
            }
            removed > 0
        });
    }

    /// Focuses the window and raises it to the top of its band.
    ///
    /// Focusing the already-focused window is a no-op, so repeated calls do
    /// not churn the stacking counter.
    pub fn focus(&mut self, id: &str) {
        self.commit(|store| {
            let Some(idx) = store.index_of(id) else {
                return false;
            };
            if store.windows[idx].is_focused {
                return false;
            }
            let z = store.raised_z(store.windows[idx].is_pinned);
            for window in &mut store.windows {
                window.is_focused = false;
            }
            store.windows[idx].is_focused = true;
            store.assign_z(idx, z);
            true
        });
    }

    /// Focuses the next (or previous) visible window in stacking order,
    /// wrapping around.
    pub fn cycle_focus(&mut self, forward: bool) {
        let order: Vec<WindowId> = self.paint_order().iter().map(|w| w.id.clone()).collect();
        if order.is_empty() {
            return;
        }
        let next = match self.focused_id().and_then(|f| order.iter().position(|id| id == f)) {
            Some(idx) => {
                let step = if forward { 1isize } else { -1isize };
                (idx as isize + step).rem_euclid(order.len() as isize) as usize
            }
            None if forward => order.len() - 1,
            None => 0,
        };
        self.focus(&order[next]);
    }

    pub fn move_window(&mut self, id: &str, position: Point) {
        self.update(id, |window| {
            let changed = window.position != position;
            window.position = position;
            changed
        });
    }

    pub fn resize_window(&mut self, id: &str, size: Size) {
        self.update(id, |window| {
            let changed = window.size != size;
            window.size = size;
            changed
        });
    }

    /// Hides the window. Focus and stacking are left untouched; callers that
    /// want focus to move elsewhere re-focus explicitly.
    pub fn minimize(&mut self, id: &str) {
        self.set_state(id, WindowState::Minimized);
    }

    pub fn maximize(&mut self, id: &str) {
        self.set_state(id, WindowState::Maximized);
    }

    pub fn fullscreen(&mut self, id: &str) {
        self.set_state(id, WindowState::Fullscreen);
    }

    /// Returns the window to `Normal`, from any other state.
    pub fn unfullscreen(&mut self, id: &str) {
        self.set_state(id, WindowState::Normal);
    }

    /// Moves the window into the pinned band, above every non-pinned window.
    pub fn pin(&mut self, id: &str) {
        self.commit(|store| {
            let Some(idx) = store.index_of(id) else {
                return false;
            };
            if store.windows[idx].is_pinned {
                return false;
            }
            let base = store
                .highest_z(false, None)
                .unwrap_or(0)
                .saturating_add(store.config.pinned_offset);
            let z = match store.highest_z(true, None) {
                Some(top) => base.max(top.saturating_add(1)),
                None => base,
            };
            store.windows[idx].is_pinned = true;
            store.assign_z(idx, z);
            tracing::debug!(window_id = %store.windows[idx].id, z_index = z, "pinned window");
            true
        });
    }

    /// Drops the window back into the non-pinned band, directly above the
    /// other non-pinned windows.
    pub fn unpin(&mut self, id: &str) {
        self.commit(|store| {
            let Some(idx) = store.index_of(id) else {
                return false;
            };
            if !store.windows[idx].is_pinned {
                return false;
            }
            let z = store
                .highest_z(false, Some(idx))
                .map_or(FIRST_Z_INDEX, |top| top.saturating_add(1));
            store.windows[idx].is_pinned = false;
            store.assign_z(idx, z);
            tracing::debug!(window_id = %store.windows[idx].id, z_index = z, "unpinned window");
            true
        });
    }

    pub fn set_container_size(&mut self, size: Size) {
        self.container_size = size;
    }

    // ----- internals -----------------------------------------------------

    fn index_of(&self, id: &str) -> Option<usize> {
        self.windows.iter().position(|w| w.id == id)
    }

    fn generate_id(&mut self) -> WindowId {
        loop {
            let candidate = format!("{GENERATED_ID_PREFIX}{}", self.next_generated_id);
            self.next_generated_id = self.next_generated_id.saturating_add(1);
            if self.index_of(&candidate).is_none() {
                return WindowId::new(candidate);
            }
        }
    }

    /// Highest stacking value in one band, optionally skipping one record.
    fn highest_z(&self, pinned: bool, skip: Option<usize>) -> Option<u32> {
        self.windows
            .iter()
            .enumerate()
            .filter(|(idx, w)| w.is_pinned == pinned && Some(*idx) != skip)
            .map(|(_, w)| w.z_index)
            .max()
    }

    fn raised_z(&self, pinned: bool) -> u32 {
        self.highest_z(pinned, None)
            .map_or(FIRST_Z_INDEX, |top| top.saturating_add(1))
    }

    fn lowest_z(&self, pinned: bool) -> Option<u32> {
        self.windows
            .iter()
            .filter(|w| w.is_pinned == pinned)
            .map(|w| w.z_index)
            .min()
    }

    /// Stores `z` on the record and advances the plain counter. Pinned
    /// assignments only consume one plain slot so the counter never jumps
    /// into the pinned band.
    ///
    /// A non-pinned assignment that catches up with the pinned band lifts the
    /// band back above it.
    fn assign_z(&mut self, idx: usize, z: u32) {
        self.windows[idx].z_index = z;
        let bumped = self.next_z_index.saturating_add(1);
        if self.windows[idx].is_pinned {
            self.next_z_index = bumped;
            return;
        }
        self.next_z_index = bumped.max(z.saturating_add(1));
        if self.lowest_z(true).is_some_and(|floor| floor <= z) {
            self.lift_pinned_band();
        }
    }

    /// Re-seats every pinned window `pinned_offset` above the highest
    /// non-pinned one, keeping their relative order.
    fn lift_pinned_band(&mut self) {
        let base = self
            .highest_z(false, None)
            .unwrap_or(0)
            .saturating_add(self.config.pinned_offset);
        let mut pinned: Vec<usize> = (0..self.windows.len())
            .filter(|&idx| self.windows[idx].is_pinned)
            .collect();
        pinned.sort_by_key(|&idx| self.windows[idx].z_index);
        for (rank, idx) in pinned.into_iter().enumerate() {
            self.windows[idx].z_index = base.saturating_add(rank as u32);
        }
        tracing::debug!(base, "lifted pinned band");
    }

    fn set_state(&mut self, id: &str, state: WindowState) {
        self.update(id, |window| {
            let changed = window.state != state;
            window.state = state;
            changed
        });
    }

    fn update<F>(&mut self, id: &str, mutate: F)
    where
        F: FnOnce(&mut WindowRecord<P>) -> bool,
    {
        self.commit(|store| match store.index_of(id) {
            Some(idx) => mutate(&mut store.windows[idx]),
            None => false,
        });
    }

    /// Runs one action and notifies subscribers if it reports a change.
    fn commit<F>(&mut self, mutate: F)
    where
        F: FnOnce(&mut Self) -> bool,
    {
        if self.subscribers.is_empty() {
            mutate(self);
            return;
        }
        let before_focus = self.focused_id().cloned();
        let before_len = self.windows.len();
        if !mutate(self) {
            return;
        }
        let change = Change::between(
            before_focus.as_ref(),
            before_len,
            self.focused_id(),
            self.windows.len(),
        );
        self.subscribers.notify(&self.windows, change);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn store_with(ids: &[&str]) -> WindowStore {
        let mut store = WindowStore::new();
        for id in ids {
            store.open("calc", (), OpenOptions::new().id(*id));
        }
        store
    }

    fn z(store: &WindowStore, id: &str) -> u32 {
        store.get_window(id).map(|w| w.z_index).unwrap_or_default()
    }

    #[test]
    fn first_open_gets_generated_id_and_focus() {
        let mut store = WindowStore::new();
        let id = store.open("calc", (), OpenOptions::new());
        assert_eq!(id.as_deref(), Some("w1"));
        let w = &store.windows()[0];
        assert!(w.is_focused);
        assert_eq!(w.z_index, 1);
        assert_eq!(w.state, WindowState::Normal);
        assert!(!w.is_pinned);
        assert_eq!(store.next_z_index(), 2);
    }

    #[test]
    fn open_applies_default_geometry() {
        let mut store: WindowStore = WindowStore::new();
        store.open("calc", (), OpenOptions::new());
        let w = &store.windows()[0];
        assert_eq!(w.position, Point::new(100, 100));
        assert_eq!(w.size, Size::new(400, 300));
    }

    #[test]
    fn generated_ids_skip_caller_supplied_ones() {
        let mut store = store_with(&["w1"]);
        let id = store.open("calc", (), OpenOptions::new());
        assert_eq!(id.as_deref(), Some("w2"));
    }

    #[test]
    fn duplicate_open_is_ignored() {
        let mut store = store_with(&["a"]);
        assert_eq!(
            store.try_open("notes", (), OpenOptions::new().id("a")),
            Err(WmError::DuplicateId(WindowId::from("a")))
        );
        assert!(store.open("notes", (), OpenOptions::new().id("a")).is_none());
        assert_eq!(store.len(), 1);
        assert_eq!(store.windows()[0].content_kind, "calc");
        assert_eq!(store.next_z_index(), 2);
    }

    #[test]
    fn focus_raises_above_all_and_advances_counter() {
        let mut store = store_with(&["w1", "w2"]);
        assert_eq!(store.focused_id().map(|id| id.as_str()), Some("w2"));
        assert_eq!(z(&store, "w2"), 2);

        store.focus("w1");
        assert_eq!(store.focused_id().map(|id| id.as_str()), Some("w1"));
        assert!(!store.get_window("w2").is_some_and(|w| w.is_focused));
        assert_eq!(z(&store, "w1"), 3);
        assert_eq!(store.next_z_index(), 4);
    }

    #[test]
    fn refocusing_is_idempotent() {
        let mut store = store_with(&["a", "b"]);
        store.focus("a");
        let (za, next) = (z(&store, "a"), store.next_z_index());
        store.focus("a");
        assert_eq!(z(&store, "a"), za);
        assert_eq!(store.next_z_index(), next);
    }

    #[test]
    fn close_does_not_transfer_focus() {
        let mut store = store_with(&["a", "b"]);
        store.close("b");
        assert_eq!(store.len(), 1);
        assert!(store.get_focused_window().is_none());
        store.close("missing");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn state_changes_leave_focus_and_stacking_alone() {
        let mut store = store_with(&["a"]);
        store.minimize("a");
        let w = store.get_window("a").cloned();
        assert_eq!(w.as_ref().map(|w| w.state), Some(WindowState::Minimized));
        assert_eq!(w.as_ref().map(|w| w.is_focused), Some(true));
        assert_eq!(z(&store, "a"), 1);

        store.maximize("a");
        assert_eq!(store.get_window("a").map(|w| w.state), Some(WindowState::Maximized));
        store.fullscreen("a");
        assert_eq!(store.get_window("a").map(|w| w.state), Some(WindowState::Fullscreen));
        store.unfullscreen("a");
        assert_eq!(store.get_window("a").map(|w| w.state), Some(WindowState::Normal));
        assert_eq!(store.next_z_index(), 2);
    }

    #[test]
    fn move_and_resize_replace_geometry_in_any_state() {
        let mut store = store_with(&["a"]);
        store.maximize("a");
        store.move_window("a", Point::new(-5, 7));
        store.resize_window("a", Size::new(10, 20));
        let w = store.get_window("a");
        assert_eq!(w.map(|w| w.position), Some(Point::new(-5, 7)));
        assert_eq!(w.map(|w| w.size), Some(Size::new(10, 20)));
    }

    #[test]
    fn pinned_band_stacking_and_unpin() {
        let mut store = store_with(&["w1", "w2", "w3", "w4", "w5"]);
        // w5 holds z=5; w3 keeps z=3.
        store.pin("w1");
        assert_eq!(z(&store, "w1"), 1005);
        store.pin("w2");
        assert_eq!(z(&store, "w2"), 1006);

        store.close("w4");
        store.close("w5");
        store.unpin("w1");
        assert_eq!(z(&store, "w1"), 4);
        assert!(!store.get_window("w1").is_some_and(|w| w.is_pinned));
        assert!(store.next_z_index() > 4);
    }

    #[test]
    fn pin_and_unpin_are_noops_when_already_in_band() {
        let mut store = store_with(&["a"]);
        store.unpin("a");
        assert_eq!(z(&store, "a"), 1);
        store.pin("a");
        let (za, next) = (z(&store, "a"), store.next_z_index());
        store.pin("a");
        assert_eq!(z(&store, "a"), za);
        assert_eq!(store.next_z_index(), next);
    }

    #[test]
    fn focusing_unpinned_window_stays_below_pinned_band() {
        let mut store = store_with(&["a", "b", "c"]);
        store.pin("a");
        store.focus("b");
        assert!(z(&store, "b") < z(&store, "a"));
        store.open("calc", (), OpenOptions::new().id("d"));
        assert!(z(&store, "d") < z(&store, "a"));
        let top = store.top_visible().map(|w| w.id.to_string());
        assert_eq!(top.as_deref(), Some("a"));
    }

    #[test]
    fn focusing_pinned_window_raises_within_band() {
        let mut store = store_with(&["a", "b"]);
        store.pin("a");
        store.pin("b");
        store.focus("a");
        assert!(z(&store, "a") > z(&store, "b"));
        assert!(store.get_window("a").is_some_and(|w| w.is_pinned));
    }

    #[test]
    fn close_by_type_and_close_all() {
        let mut store: WindowStore = WindowStore::new();
        store.open("calc", (), OpenOptions::new());
        store.open("notes", (), OpenOptions::new());
        store.open("calc", (), OpenOptions::new());
        assert_eq!(store.get_windows_by_type("calc").len(), 2);
        store.close_by_type("calc");
        assert_eq!(store.len(), 1);
        assert_eq!(store.windows()[0].content_kind, "notes");
        store.close_all();
        assert!(store.is_empty());
    }

    #[test]
    fn paint_order_skips_minimized_and_sorts_by_band() {
        let mut store = store_with(&["a", "b", "c"]);
        store.pin("a");
        store.minimize("b");
        let order: Vec<String> = store.paint_order().iter().map(|w| w.id.to_string()).collect();
        assert_eq!(order, vec!["c".to_string(), "a".to_string()]);
    }

    #[test]
    fn cycle_focus_wraps_through_visible_windows() {
        let mut store = store_with(&["a", "b", "c"]);
        store.cycle_focus(true);
        assert_eq!(store.focused_id().map(|id| id.as_str()), Some("a"));
        store.cycle_focus(false);
        assert_eq!(store.focused_id().map(|id| id.as_str()), Some("c"));
    }

    #[test]
    fn subscribers_see_each_change_once() {
        let mut store: WindowStore = WindowStore::new();
        let counts = Rc::new(RefCell::new(Vec::new()));
        let focused = Rc::new(RefCell::new(Vec::new()));
        let all = Rc::new(RefCell::new(0usize));

        let c = Rc::clone(&counts);
        store.subscribe_count(move |n| c.borrow_mut().push(n));
        let f = Rc::clone(&focused);
        store.subscribe_focused(move |w| f.borrow_mut().push(w.map(|w| w.id.to_string())));
        let a = Rc::clone(&all);
        let sub = store.subscribe_windows(move |_| *a.borrow_mut() += 1);

        store.open("calc", (), OpenOptions::new().id("x"));
        store.open("calc", (), OpenOptions::new().id("y"));
        store.move_window("y", Point::new(1, 1));
        store.focus("missing");
        store.close("x");

        assert_eq!(*counts.borrow(), vec![1, 2, 1]);
        assert_eq!(
            *focused.borrow(),
            vec![Some("x".to_string()), Some("y".to_string())]
        );
        assert_eq!(*all.borrow(), 4);

        assert!(store.unsubscribe(sub));
        store.close("y");
        assert_eq!(*all.borrow(), 4);
        assert_eq!(focused.borrow().last(), Some(&None));
    }

    #[test]
    fn container_size_is_advisory() {
        let mut store = store_with(&["a"]);
        store.set_container_size(Size::new(50, 50));
        assert_eq!(store.state().container_size, Size::new(50, 50));
        assert_eq!(store.get_window("a").map(|w| w.size), Some(Size::new(400, 300)));
    }

    #[test]
    fn long_focus_runs_lift_the_pinned_band() {
        let mut store = store_with(&["a", "b", "c", "d"]);
        store.pin("a");
        store.pin("d");
        store.focus("a");
        for i in 0..1100 {
            store.focus(if i % 2 == 0 { "b" } else { "c" });
        }
        let plain = z(&store, "b").max(z(&store, "c"));
        assert!(z(&store, "d") > plain);
        assert!(z(&store, "a") > z(&store, "d"));
        assert!(store.get_window("a").is_some_and(|w| w.is_pinned));
    }
}
