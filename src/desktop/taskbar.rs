//! One-row taskbar listing every open window, minimized ones included.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::geometry::{Bounds, Point, Size};
use crate::ui::UiFrame;
use crate::theme;
use crate::window::{WindowId, WindowRecord, WindowState, WindowStore};

const CRATE_NAME: &str = env!("CARGO_PKG_NAME");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskbarEntry {
    pub id: WindowId,
    pub x: u16,
    pub width: u16,
}

fn label<P>(window: &WindowRecord<P>) -> String {
    let pin = if window.is_pinned { "◆" } else { "" };
    format!(" {pin}{} ", window.id)
}

fn menu_label() -> String {
    format!("≡ {CRATE_NAME} ")
}

/// Entry positions for `area`, in store order. Entries that do not fit are
/// left out.
pub fn layout<P>(store: &WindowStore<P>, area: Rect) -> Vec<TaskbarEntry> {
    let max_x = area.x.saturating_add(area.width);
    let mut x = area.x.saturating_add(menu_label().chars().count() as u16);
    let mut entries = Vec::new();
    for window in store.windows() {
        let width = label(window).chars().count() as u16;
        if x.saturating_add(width) > max_x {
            break;
        }
        entries.push(TaskbarEntry {
            id: window.id.clone(),
            x,
            width,
        });
        x = x.saturating_add(width).saturating_add(1);
    }
    entries
}

pub fn hit(entries: &[TaskbarEntry], column: u16) -> Option<&WindowId> {
    entries
        .iter()
        .find(|e| column >= e.x && column < e.x.saturating_add(e.width))
        .map(|e| &e.id)
}

pub fn render<P>(ui: &mut UiFrame<'_>, store: &WindowStore<P>, area: Rect) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let base = Style::default()
        .bg(theme::panel_bg())
        .fg(theme::panel_fg());
    let y = i64::from(area.y);
    ui.fill(
        Bounds::new(
            Point::new(i32::from(area.x), i32::from(area.y)),
            Size::new(u32::from(area.width), 1),
        ),
        " ",
        base,
    );
    let width = area.width as usize;
    ui.put_str(i64::from(area.x), y, &menu_label(), base, width);

    for entry in layout(store, area) {
        let Some(window) = store.get_window(&entry.id) else {
            continue;
        };
        let style = if window.is_focused && window.state.is_visible() {
            Style::default()
                .bg(theme::panel_active_bg())
                .fg(theme::panel_active_fg())
                .add_modifier(Modifier::BOLD)
        } else if window.state == WindowState::Minimized {
            base.fg(theme::panel_inactive_fg())
                .add_modifier(Modifier::DIM)
        } else {
            base
        };
        ui.put_str(
            i64::from(entry.x),
            y,
            &label(window),
            style,
            entry.width as usize,
        );
    }
}
