//! Window chrome: border, header row with title and buttons, and the hit
//! regions that map pointer presses back onto them.
//!
//! Frames are in screen cells. Row 0 is the top border, row 1 the header,
//! the last row the bottom border.

use std::fmt;

use crate::geometry::{Bounds, Point, Size};
use crate::interaction::ResizeEdge;
use crate::theme;
use crate::ui::{UiFrame, truncate_to_width};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderButton {
    Pin,
    Minimize,
    Maximize,
    Close,
}

/// Header buttons and their column offset from the right border.
const BUTTONS: [(HeaderButton, i64); 4] = [
    (HeaderButton::Close, 2),
    (HeaderButton::Maximize, 4),
    (HeaderButton::Minimize, 6),
    (HeaderButton::Pin, 8),
];

/// Narrower frames show the title only.
const MIN_WIDTH_FOR_BUTTONS: u32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameHit {
    Resize(ResizeEdge),
    Button(HeaderButton),
    Header,
    Body,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Chrome {
    pub focused: bool,
    pub pinned: bool,
    pub maximized: bool,
}

pub trait WindowDecorator: fmt::Debug {
    fn render_window(&self, ui: &mut UiFrame<'_>, frame: Bounds, title: &str, chrome: Chrome);

    /// Area left for content once chrome is drawn.
    fn content_bounds(&self, frame: Bounds) -> Bounds;

    /// Which part of the chrome `pointer` is over. Border cells only report
    /// resize edges when `resizable` is set.
    fn hit_test(&self, frame: Bounds, pointer: Point, resizable: bool) -> Option<FrameHit>;
}

#[derive(Debug, Default)]
pub struct OpenStepDecorator;

fn button_glyph(button: HeaderButton, chrome: Chrome) -> &'static str {
    match button {
        HeaderButton::Pin if chrome.pinned => "◆",
        HeaderButton::Pin => "◇",
        HeaderButton::Minimize => "_",
        HeaderButton::Maximize if chrome.maximized => "▣",
        HeaderButton::Maximize => "□",
        HeaderButton::Close => "×",
    }
}

impl WindowDecorator for OpenStepDecorator {
    fn render_window(&self, ui: &mut UiFrame<'_>, frame: Bounds, title: &str, chrome: Chrome) {
        if frame.size.is_empty() {
            return;
        }
        let left = i64::from(frame.origin.x);
        let top = i64::from(frame.origin.y);
        let right = frame.right() - 1;
        let bottom = frame.bottom() - 1;
        let border = theme::border_style(chrome.pinned);
        let header = theme::header_style(chrome.focused);

        let area = ui.area();
        let visible_left = left.max(i64::from(area.x) - 1);
        let visible_right = right.min(i64::from(area.right()));
        for x in visible_left..=visible_right {
            let (top_glyph, bottom_glyph) = if x == left {
                ("┌", "└")
            } else if x == right {
                ("┐", "┘")
            } else {
                ("─", "─")
            };
            ui.put(x, top, top_glyph, border);
            if bottom > top {
                ui.put(x, bottom, bottom_glyph, border);
            }
        }
        let visible_top = (top + 1).max(i64::from(area.y));
        let visible_bottom = bottom.min(i64::from(area.bottom()));
        for y in visible_top..visible_bottom {
            ui.put(left, y, "│", border);
            ui.put(right, y, "│", border);
        }

        let header_y = top + 1;
        if header_y >= bottom {
            return;
        }
        for x in (left + 1).max(visible_left)..right.min(visible_right + 1) {
            ui.put(x, header_y, " ", header);
        }
        let inner_width = frame.size.width.saturating_sub(2) as usize;
        let buttons_width = if frame.size.width >= MIN_WIDTH_FOR_BUTTONS {
            for (button, offset) in BUTTONS {
                ui.put(right - offset, header_y, button_glyph(button, chrome), header);
            }
            BUTTONS.len() * 2 + 1
        } else {
            0
        };
        let room = inner_width.saturating_sub(buttons_width + 1);
        let label = truncate_to_width(title, room);
        ui.put_str(left + 2, header_y, &label, header, room);
    }

    fn content_bounds(&self, frame: Bounds) -> Bounds {
        Bounds::new(
            Point::new(frame.origin.x.saturating_add(1), frame.origin.y.saturating_add(2)),
            Size::new(
                frame.size.width.saturating_sub(2),
                frame.size.height.saturating_sub(3),
            ),
        )
    }

    fn hit_test(&self, frame: Bounds, pointer: Point, resizable: bool) -> Option<FrameHit> {
        if !frame.contains(pointer) {
            return None;
        }
        let x = i64::from(pointer.x);
        let y = i64::from(pointer.y);
        let left = i64::from(frame.origin.x);
        let top = i64::from(frame.origin.y);
        let right = frame.right() - 1;
        let bottom = frame.bottom() - 1;

        if resizable {
            let edge = match (x == left, x == right, y == top, y == bottom) {
                (true, _, true, _) => Some(ResizeEdge::TopLeft),
                (_, true, true, _) => Some(ResizeEdge::TopRight),
                (true, _, _, true) => Some(ResizeEdge::BottomLeft),
                (_, true, _, true) => Some(ResizeEdge::BottomRight),
                (_, _, true, _) => Some(ResizeEdge::Top),
                (_, _, _, true) => Some(ResizeEdge::Bottom),
                (true, _, _, _) => Some(ResizeEdge::Left),
                (_, true, _, _) => Some(ResizeEdge::Right),
                _ => None,
            };
            if let Some(edge) = edge {
                return Some(FrameHit::Resize(edge));
            }
        }

        if y == top + 1 && y < bottom {
            if frame.size.width >= MIN_WIDTH_FOR_BUTTONS
                && let Some((button, _)) = BUTTONS.iter().find(|(_, offset)| x == right - offset)
            {
                return Some(FrameHit::Button(*button));
            }
            return Some(FrameHit::Header);
        }
        Some(FrameHit::Body)
    }
}
