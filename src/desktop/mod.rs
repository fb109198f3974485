//! Terminal desktop host built on [`WindowStore`].
//!
//! The desktop owns a store of `String`-parameterized windows, maps crossterm
//! input onto store actions and gestures, and paints every visible window in
//! stacking order with a taskbar along the bottom row. One cell is one
//! coordinate unit.

pub mod content;
pub mod decorator;
pub mod taskbar;

use std::collections::BTreeSet;
use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::config::{InteractionConfig, StoreConfig};
use crate::geometry::{Bounds, Point, Size};
use crate::interaction::{GestureController, ResizeEdge};
use crate::keybindings::{Action, KeyBindings};
use crate::log_buffer::LogHandle;
use crate::runner::ControlFlow;
use crate::theme;
use crate::ui::UiFrame;
use crate::window::{OpenOptions, WindowId, WindowRecord, WindowState, WindowStore};

use content::{ContentContext, ContentRenderers};
use decorator::{Chrome, FrameHit, HeaderButton, OpenStepDecorator, WindowDecorator};

pub const HELP_WINDOW_ID: &str = "help";

const DOUBLE_CLICK: Duration = Duration::from_millis(400);
const CASCADE_SLOTS: usize = 8;

pub struct Desktop {
    store: WindowStore<String>,
    gestures: GestureController,
    renderers: ContentRenderers,
    decorator: Box<dyn WindowDecorator>,
    bindings: KeyBindings,
    log: Option<LogHandle>,
    started: Instant,
    area: Rect,
    // Windows already reported as having no renderer.
    missing_renderer: BTreeSet<WindowId>,
    last_header_click: Option<(WindowId, Instant)>,
    spawned: usize,
}

impl Desktop {
    pub fn new(store_config: StoreConfig, interaction: InteractionConfig) -> Self {
        Self {
            store: WindowStore::with_config(store_config),
            gestures: GestureController::new(interaction),
            renderers: content::default_registry(),
            decorator: Box::new(OpenStepDecorator),
            bindings: KeyBindings::default(),
            log: None,
            started: Instant::now(),
            area: Rect::default(),
            missing_renderer: BTreeSet::new(),
            last_header_click: None,
            spawned: 0,
        }
    }

    pub fn with_log(mut self, log: LogHandle) -> Self {
        self.log = Some(log);
        self
    }

    pub fn store(&self) -> &WindowStore<String> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut WindowStore<String> {
        &mut self.store
    }

    pub fn gestures(&self) -> &GestureController {
        &self.gestures
    }

    pub fn renderers_mut(&mut self) -> &mut ContentRenderers {
        &mut self.renderers
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    /// Resizes the desktop to `area`; the bottom row is kept for the taskbar.
    pub fn set_area(&mut self, area: Rect) {
        self.area = area;
        self.store.set_container_size(Size::new(
            u32::from(area.width),
            u32::from(area.height.saturating_sub(1)),
        ));
    }

    fn has_fullscreen(&self) -> bool {
        self.store
            .windows()
            .iter()
            .any(|w| w.state == WindowState::Fullscreen)
    }

    /// The taskbar row, hidden while a window is fullscreen.
    pub fn taskbar_area(&self) -> Option<Rect> {
        if self.area.height < 2 || self.has_fullscreen() {
            return None;
        }
        Some(Rect::new(
            self.area.x,
            self.area.y + self.area.height - 1,
            self.area.width,
            1,
        ))
    }

    /// Where `window` is drawn, in desktop coordinates.
    pub fn display_frame(&self, window: &WindowRecord<String>) -> Bounds {
        match window.state {
            WindowState::Normal | WindowState::Minimized => window.bounds(),
            WindowState::Maximized => Bounds::new(Point::default(), self.store.container_size()),
            WindowState::Fullscreen => Bounds::new(
                Point::default(),
                Size::new(u32::from(self.area.width), u32::from(self.area.height)),
            ),
        }
    }

    fn to_desktop(&self, column: u16, row: u16) -> Point {
        Point::new(
            i32::from(column) - i32::from(self.area.x),
            i32::from(row) - i32::from(self.area.y),
        )
    }

    fn to_screen(&self, bounds: Bounds) -> Bounds {
        Bounds::new(
            bounds.origin + Point::new(i32::from(self.area.x), i32::from(self.area.y)),
            bounds.size,
        )
    }

    /// Topmost visible window under `point`.
    pub fn window_at(&self, point: Point) -> Option<&WindowRecord<String>> {
        self.store
            .paint_order()
            .into_iter()
            .rev()
            .find(|w| self.display_frame(w).contains(point))
    }

    // ----- window actions --------------------------------------------------

    /// Opens a window at the next cascade slot, sized to half the desktop.
    pub fn open(&mut self, kind: &str, params: impl Into<String>) -> Option<WindowId> {
        self.open_with(kind, params, OpenOptions::new())
    }

    pub fn open_with(
        &mut self,
        kind: &str,
        params: impl Into<String>,
        options: OpenOptions,
    ) -> Option<WindowId> {
        let slot = (self.spawned % CASCADE_SLOTS) as i32;
        let min = self.gestures.config().min_size;
        let container = self.store.container_size();
        let options = OpenOptions {
            position: options.position.or(Some(Point::new(2 + slot * 3, 1 + slot))),
            size: options.size.or(Some(
                Size::new(container.width / 2, container.height / 2).max(min),
            )),
            ..options
        };
        let id = self.store.open(kind, params.into(), options)?;
        self.spawned += 1;
        Some(id)
    }

    /// Opens the stock set of windows a fresh session starts with.
    pub fn open_defaults(&mut self) {
        self.open(content::NOTES, "welcome\nPress F1 for key bindings.");
        self.open(content::CLOCK, "");
        self.open(content::STACK, "");
        if self.log.is_some() {
            self.open(content::LOG, "");
        }
    }

    fn refocus_top(&mut self) {
        if let Some(id) = self.store.top_visible().map(|w| w.id.clone()) {
            self.store.focus(&id);
        }
    }

    fn forget_gesture_for(&mut self, id: &str) {
        if self
            .gestures
            .active()
            .is_some_and(|g| g.window_id().as_str() == id)
        {
            self.gestures.cancel();
        }
    }

    pub fn close(&mut self, id: &str) {
        self.forget_gesture_for(id);
        self.store.close(id);
        self.refocus_top();
    }

    pub fn minimize(&mut self, id: &str) {
        self.forget_gesture_for(id);
        self.store.minimize(id);
        self.refocus_top();
    }

    pub fn restore(&mut self, id: &str) {
        self.store.unfullscreen(id);
        self.store.focus(id);
    }

    pub fn toggle_maximize(&mut self, id: &str) {
        match self.store.get_window(id).map(|w| w.state) {
            Some(WindowState::Maximized) => self.store.unfullscreen(id),
            Some(_) => {
                self.forget_gesture_for(id);
                self.store.maximize(id);
            }
            None => {}
        }
    }

    pub fn toggle_fullscreen(&mut self, id: &str) {
        match self.store.get_window(id).map(|w| w.state) {
            Some(WindowState::Fullscreen) => self.store.unfullscreen(id),
            Some(_) => {
                self.forget_gesture_for(id);
                self.store.fullscreen(id);
            }
            None => {}
        }
    }

    pub fn toggle_pin(&mut self, id: &str) {
        match self.store.get_window(id).map(|w| w.is_pinned) {
            Some(true) => self.store.unpin(id),
            Some(false) => self.store.pin(id),
            None => {}
        }
    }

    pub fn toggle_help(&mut self) {
        if self.store.get_window(HELP_WINDOW_ID).is_some() {
            self.close(HELP_WINDOW_ID);
        } else {
            self.open_with(
                content::HELP,
                "",
                OpenOptions::new().id(HELP_WINDOW_ID),
            );
        }
    }

    fn restore_all(&mut self) {
        let minimized: Vec<WindowId> = self
            .store
            .windows()
            .iter()
            .filter(|w| w.state == WindowState::Minimized)
            .map(|w| w.id.clone())
            .collect();
        for id in &minimized {
            self.store.unfullscreen(id);
        }
        if let Some(last) = minimized.last() {
            self.store.focus(last);
        }
    }

    // ----- input -----------------------------------------------------------

    pub fn handle_event(&mut self, event: &Event) -> ControlFlow {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => {
                self.handle_mouse(mouse);
                ControlFlow::Continue
            }
            Event::Resize(width, height) => {
                self.set_area(Rect::new(self.area.x, self.area.y, *width, *height));
                ControlFlow::Continue
            }
            _ => ControlFlow::Continue,
        }
    }

    pub fn handle_key(&mut self, key: &KeyEvent) -> ControlFlow {
        let Some(resolved) = self.bindings.resolve(key) else {
            return ControlFlow::Continue;
        };
        let focused = self.store.focused_id().cloned();
        let large = resolved.large;
        match (resolved.action, focused) {
            (Action::Quit, _) => return ControlFlow::Quit,
            (Action::ToggleHelp, _) => self.toggle_help(),
            (Action::FocusNext, _) => self.store.cycle_focus(true),
            (Action::FocusPrev, _) => self.store.cycle_focus(false),
            (Action::NewWindow, _) => {
                let note = format!("note {}", self.spawned + 1);
                self.open(content::NOTES, note);
            }
            (Action::CloseAll, _) => {
                self.gestures.cancel();
                self.store.close_all();
            }
            (Action::RestoreAll, _) => self.restore_all(),
            (_, None) => {}
            (Action::CloseWindow, Some(id)) => self.close(&id),
            (Action::CloseKind, Some(id)) => {
                if let Some(kind) = self.store.get_window(&id).map(|w| w.content_kind.clone()) {
                    self.gestures.cancel();
                    self.store.close_by_type(&kind);
                    self.refocus_top();
                }
            }
            (Action::Minimize, Some(id)) => self.minimize(&id),
            (Action::ToggleMaximize, Some(id)) => self.toggle_maximize(&id),
            (Action::ToggleFullscreen, Some(id)) => self.toggle_fullscreen(&id),
            (Action::TogglePin, Some(id)) => self.toggle_pin(&id),
            (Action::Move(step), Some(id)) if self.is_normal(&id) => {
                self.gestures.step_move(&mut self.store, &id, step, large);
            }
            (Action::Grow(step), Some(id)) if self.is_normal(&id) => {
                self.gestures
                    .step_resize(&mut self.store, &id, ResizeEdge::BottomRight, step, large);
            }
            (Action::Shift(step), Some(id)) if self.is_normal(&id) => {
                self.gestures
                    .step_resize(&mut self.store, &id, ResizeEdge::TopLeft, step, large);
            }
            (Action::Move(_) | Action::Grow(_) | Action::Shift(_), Some(_)) => {}
        }
        ControlFlow::Continue
    }

    fn is_normal(&self, id: &str) -> bool {
        self.store
            .get_window(id)
            .is_some_and(|w| w.state == WindowState::Normal)
    }

    pub fn handle_mouse(&mut self, mouse: &MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.press(mouse.column, mouse.row),
            MouseEventKind::Drag(MouseButton::Left) => {
                let point = self.to_desktop(mouse.column, mouse.row);
                self.gestures.pointer_moved(&mut self.store, point);
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some(gesture) = self.gestures.pointer_released() {
                    tracing::trace!(window_id = %gesture.window_id(), "gesture ended");
                }
            }
            _ => {}
        }
    }

    fn press(&mut self, column: u16, row: u16) {
        if let Some(bar) = self.taskbar_area()
            && row == bar.y
        {
            let entries = taskbar::layout(&self.store, bar);
            if let Some(id) = taskbar::hit(&entries, column).cloned() {
                self.taskbar_click(&id);
            }
            return;
        }

        let point = self.to_desktop(column, row);
        let Some((id, frame, resizable)) = self.window_at(point).map(|w| {
            (
                w.id.clone(),
                self.display_frame(w),
                w.state == WindowState::Normal,
            )
        }) else {
            return;
        };
        self.store.focus(&id);

        match self.decorator.hit_test(frame, point, resizable) {
            Some(FrameHit::Button(HeaderButton::Close)) => self.close(&id),
            Some(FrameHit::Button(HeaderButton::Minimize)) => self.minimize(&id),
            Some(FrameHit::Button(HeaderButton::Maximize)) => self.toggle_maximize(&id),
            Some(FrameHit::Button(HeaderButton::Pin)) => self.toggle_pin(&id),
            Some(FrameHit::Header) => {
                let now = Instant::now();
                let double = self
                    .last_header_click
                    .take()
                    .is_some_and(|(last, at)| last == id && now.duration_since(at) <= DOUBLE_CLICK);
                if double {
                    self.toggle_maximize(&id);
                } else {
                    self.last_header_click = Some((id.clone(), now));
                    if resizable {
                        self.gestures.begin_move(&self.store, &id, point);
                    }
                }
            }
            Some(FrameHit::Resize(edge)) => {
                self.gestures.begin_resize(&self.store, &id, edge, point);
            }
            Some(FrameHit::Body) | None => {}
        }
    }

    fn taskbar_click(&mut self, id: &str) {
        let Some(window) = self.store.get_window(id) else {
            return;
        };
        match (window.state, window.is_focused) {
            (WindowState::Minimized, _) => self.restore(id),
            (_, true) => self.minimize(id),
            (_, false) => self.store.focus(id),
        }
    }

    // ----- drawing ---------------------------------------------------------

    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        if area != self.area {
            self.set_area(area);
        }
        let mut ui = UiFrame::new(frame);
        self.render_into(&mut ui);
    }

    pub fn render_into(&mut self, ui: &mut UiFrame<'_>) {
        let screen = ui.area();
        ui.fill(
            Bounds::new(
                Point::new(i32::from(screen.x), i32::from(screen.y)),
                Size::new(u32::from(screen.width), u32::from(screen.height)),
            ),
            " ",
            Style::default().bg(theme::desktop_bg()),
        );

        let store = &self.store;
        self.missing_renderer
            .retain(|id| store.get_window(id).is_some());

        let uptime = self.started.elapsed();
        for window in store.paint_order() {
            // Warn once per window, but keep looking so a renderer
            // registered later takes effect.
            let view = if self.missing_renderer.contains(&window.id) {
                self.renderers.get(&window.content_kind)
            } else {
                self.renderers.resolve(window)
            };
            let Some(view) = view else {
                self.missing_renderer.insert(window.id.clone());
                continue;
            };
            let frame = self.to_screen(self.display_frame(window));
            ui.fill(frame, " ", theme::body_style());
            let chrome = Chrome {
                focused: window.is_focused,
                pinned: window.is_pinned,
                maximized: window.state == WindowState::Maximized,
            };
            self.decorator
                .render_window(ui, frame, &view.title(window), chrome);

            let inner = self.decorator.content_bounds(frame);
            let ctx = ContentContext {
                focused: window.is_focused,
                uptime,
                windows: store.windows(),
                next_z_index: store.next_z_index(),
                size: inner.size,
                log: self.log.as_ref(),
                bindings: &self.bindings,
            };
            let x = i64::from(inner.origin.x);
            let y = i64::from(inner.origin.y);
            for (row, line) in view
                .lines(window, &ctx)
                .iter()
                .take(inner.size.height as usize)
                .enumerate()
            {
                ui.put_line(x, y + row as i64, line, inner.size.width as usize);
            }
        }

        if let Some(bar) = self.taskbar_area() {
            taskbar::render(ui, &self.store, bar);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::buffer::Buffer;

    fn desktop() -> Desktop {
        let interaction = InteractionConfig::new(Size::new(12, 5), 1, 4).unwrap();
        let mut desktop = Desktop::new(StoreConfig::default(), interaction);
        desktop.set_area(Rect::new(0, 0, 80, 25));
        desktop
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn key(code: KeyCode, mods: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, mods))
    }

    fn place(desktop: &mut Desktop, id: &str, x: i32, y: i32) {
        desktop.open_with(
            content::NOTES,
            id,
            OpenOptions::new()
                .id(id)
                .position(Point::new(x, y))
                .size(Size::new(20, 8)),
        );
    }

    #[test]
    fn container_excludes_taskbar_row() {
        let desktop = desktop();
        assert_eq!(desktop.store().container_size(), Size::new(80, 24));
        assert_eq!(desktop.taskbar_area(), Some(Rect::new(0, 24, 80, 1)));
    }

    #[test]
    fn open_cascades_and_sizes_to_half_the_desktop() {
        let mut desktop = desktop();
        let a = desktop.open(content::NOTES, "a").unwrap();
        let b = desktop.open(content::NOTES, "b").unwrap();
        let a = desktop.store().get_window(&a).unwrap().bounds();
        let b = desktop.store().get_window(&b).unwrap().bounds();
        assert_eq!(a.size, Size::new(40, 12));
        assert_eq!(b.origin, a.origin + Point::new(3, 1));
    }

    #[test]
    fn header_drag_moves_window() {
        let mut desktop = desktop();
        place(&mut desktop, "a", 10, 5);
        desktop.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 12, 6));
        assert!(desktop.gestures().is_active());
        desktop.handle_event(&mouse(MouseEventKind::Drag(MouseButton::Left), 17, 9));
        desktop.handle_event(&mouse(MouseEventKind::Up(MouseButton::Left), 17, 9));
        assert!(!desktop.gestures().is_active());
        let window = desktop.store().get_window("a").unwrap();
        assert_eq!(window.position, Point::new(15, 8));
    }

    #[test]
    fn left_border_drag_keeps_right_edge_fixed() {
        let mut desktop = desktop();
        place(&mut desktop, "a", 10, 5);
        desktop.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 10, 8));
        desktop.handle_event(&mouse(MouseEventKind::Drag(MouseButton::Left), 30, 8));
        let window = desktop.store().get_window("a").unwrap();
        assert_eq!(window.size.width, 12);
        assert_eq!(window.bounds().right(), 30);
    }

    #[test]
    fn press_focuses_topmost_window_under_pointer() {
        let mut desktop = desktop();
        place(&mut desktop, "a", 10, 5);
        place(&mut desktop, "b", 15, 7);
        desktop.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 16, 10));
        assert_eq!(desktop.store().focused_id().map(WindowId::as_str), Some("b"));
        desktop.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 11, 8));
        assert_eq!(desktop.store().focused_id().map(WindowId::as_str), Some("a"));
    }

    #[test]
    fn close_button_removes_window_and_refocuses() {
        let mut desktop = desktop();
        place(&mut desktop, "a", 0, 0);
        place(&mut desktop, "b", 40, 0);
        // b spans columns 40..60; close sits two left of the right border.
        desktop.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 57, 1));
        assert!(desktop.store().get_window("b").is_none());
        assert_eq!(desktop.store().focused_id().map(WindowId::as_str), Some("a"));
    }

    #[test]
    fn minimize_then_taskbar_restores() {
        let mut desktop = desktop();
        place(&mut desktop, "a", 0, 0);
        place(&mut desktop, "b", 40, 0);
        desktop.handle_event(&key(KeyCode::Char('m'), KeyModifiers::ALT));
        let b = desktop.store().get_window("b").unwrap();
        assert_eq!(b.state, WindowState::Minimized);
        assert_eq!(desktop.store().focused_id().map(WindowId::as_str), Some("a"));

        let bar = desktop.taskbar_area().unwrap();
        let entries = taskbar::layout(desktop.store(), bar);
        let column = entries.iter().find(|e| e.id == "b").unwrap().x;
        desktop.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), column, bar.y));
        let b = desktop.store().get_window("b").unwrap();
        assert_eq!(b.state, WindowState::Normal);
        assert!(b.is_focused);
    }

    #[test]
    fn keyboard_steps_respect_minimum_and_large_step() {
        let mut desktop = desktop();
        place(&mut desktop, "a", 10, 5);
        desktop.handle_event(&key(KeyCode::Right, KeyModifiers::SHIFT));
        assert_eq!(
            desktop.store().get_window("a").unwrap().position,
            Point::new(14, 5)
        );
        for _ in 0..20 {
            desktop.handle_event(&key(KeyCode::Left, KeyModifiers::CONTROL));
        }
        let window = desktop.store().get_window("a").unwrap();
        assert_eq!(window.size.width, 12);
        assert_eq!(window.position, Point::new(14, 5));
    }

    #[test]
    fn fullscreen_hides_taskbar_and_toggles_back() {
        let mut desktop = desktop();
        place(&mut desktop, "a", 10, 5);
        desktop.handle_event(&key(KeyCode::F(11), KeyModifiers::NONE));
        assert!(desktop.taskbar_area().is_none());
        let window = desktop.store().get_window("a").unwrap();
        assert_eq!(
            desktop.display_frame(window),
            Bounds::new(Point::default(), Size::new(80, 25))
        );
        desktop.handle_event(&key(KeyCode::F(11), KeyModifiers::NONE));
        assert_eq!(
            desktop.store().get_window("a").unwrap().state,
            WindowState::Normal
        );
    }

    #[test]
    fn help_toggles_fixed_window() {
        let mut desktop = desktop();
        desktop.toggle_help();
        assert!(desktop.store().get_window(HELP_WINDOW_ID).is_some());
        desktop.toggle_help();
        assert!(desktop.store().get_window(HELP_WINDOW_ID).is_none());
    }

    #[test]
    fn quit_key_stops_the_loop() {
        let mut desktop = desktop();
        assert_eq!(
            desktop.handle_event(&key(KeyCode::Char('q'), KeyModifiers::CONTROL)),
            ControlFlow::Quit
        );
    }

    #[test]
    fn unknown_kind_is_skipped_but_stays_open() {
        let mut desktop = desktop();
        desktop.open_with(
            "mystery",
            "",
            OpenOptions::new().id("m").position(Point::new(1, 1)).size(Size::new(20, 6)),
        );
        let area = desktop.area();
        let mut buffer = Buffer::empty(area);
        let mut ui = UiFrame::from_parts(area, &mut buffer);
        desktop.render_into(&mut ui);
        desktop.render_into(&mut ui);
        assert_eq!(buffer.cell((1, 1)).unwrap().symbol(), " ");
        assert!(desktop.store().get_window("m").is_some());
    }

    #[test]
    fn renderer_registered_later_shows_hidden_window() {
        let mut desktop = desktop();
        desktop.open_with(
            "mystery",
            "",
            OpenOptions::new().id("m").position(Point::new(1, 1)).size(Size::new(20, 6)),
        );
        let area = desktop.area();
        let mut buffer = Buffer::empty(area);
        {
            let mut ui = UiFrame::from_parts(area, &mut buffer);
            desktop.render_into(&mut ui);
        }
        assert_eq!(buffer.cell((1, 1)).unwrap().symbol(), " ");

        desktop
            .renderers_mut()
            .register("mystery", Box::new(content::NotesView));
        let mut ui = UiFrame::from_parts(area, &mut buffer);
        desktop.render_into(&mut ui);
        assert_eq!(buffer.cell((1, 1)).unwrap().symbol(), "┌");
    }

    #[test]
    fn render_paints_topmost_window_last() {
        let mut desktop = desktop();
        place(&mut desktop, "a", 0, 0);
        place(&mut desktop, "b", 5, 0);
        let area = desktop.area();
        let mut buffer = Buffer::empty(area);
        let mut ui = UiFrame::from_parts(area, &mut buffer);
        desktop.render_into(&mut ui);
        // b's top-left corner overlaps a's top border.
        assert_eq!(buffer.cell((5, 0)).unwrap().symbol(), "┌");
        assert_eq!(buffer.cell((4, 0)).unwrap().symbol(), "─");
    }
}
