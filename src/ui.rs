//! UiFrame: a thin wrapper around a ratatui `Buffer` that clamps drawing to
//! the visible area.
//!
//! Windows live in signed desktop coordinates and may hang off any edge of
//! the terminal. Every draw call here takes signed coordinates and silently
//! drops the cells that fall outside the frame, so callers never guard
//! their own writes.
use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;

use crate::geometry::Bounds;

pub struct UiFrame<'a> {
    area: Rect,
    buffer: &'a mut Buffer,
}

impl<'a> UiFrame<'a> {
    pub fn new(frame: &'a mut Frame<'_>) -> Self {
        let area = frame.area();
        let buffer = frame.buffer_mut();
        Self { area, buffer }
    }

    pub fn from_parts(area: Rect, buffer: &'a mut Buffer) -> Self {
        Self { area, buffer }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn buffer_mut(&mut self) -> &mut Buffer {
        self.buffer
    }

    fn cell_at(&self, x: i64, y: i64) -> Option<(u16, u16)> {
        let x0 = i64::from(self.area.x);
        let y0 = i64::from(self.area.y);
        let x1 = x0 + i64::from(self.area.width);
        let y1 = y0 + i64::from(self.area.height);
        if x < x0 || x >= x1 || y < y0 || y >= y1 {
            return None;
        }
        Some((x as u16, y as u16))
    }

    pub fn put(&mut self, x: i64, y: i64, symbol: &str, style: Style) {
        if let Some(pos) = self.cell_at(x, y)
            && let Some(cell) = self.buffer.cell_mut(pos)
        {
            cell.set_symbol(symbol);
            cell.set_style(style);
        }
    }

    /// Writes `text` one cell per char, stopping after `max_width` cells.
    /// Returns the number of cells consumed, visible or not.
    pub fn put_str(&mut self, x: i64, y: i64, text: &str, style: Style, max_width: usize) -> usize {
        let mut written = 0;
        let mut utf8 = [0u8; 4];
        for ch in text.chars().take(max_width) {
            let symbol = ch.encode_utf8(&mut utf8);
            self.put(x + written as i64, y, symbol, style);
            written += 1;
        }
        written
    }

    pub fn put_line(&mut self, x: i64, y: i64, line: &Line<'_>, max_width: usize) {
        let mut offset = 0usize;
        for span in &line.spans {
            if offset >= max_width {
                break;
            }
            let style = line.style.patch(span.style);
            offset += self.put_str(
                x + offset as i64,
                y,
                &span.content,
                style,
                max_width - offset,
            );
        }
    }

    pub fn fill(&mut self, bounds: Bounds, symbol: &str, style: Style) {
        let x0 = i64::from(bounds.origin.x).max(i64::from(self.area.x));
        let y0 = i64::from(bounds.origin.y).max(i64::from(self.area.y));
        let x1 = bounds.right().min(i64::from(self.area.right()));
        let y1 = bounds.bottom().min(i64::from(self.area.bottom()));
        for y in y0..y1 {
            for x in x0..x1 {
                self.put(x, y, symbol, style);
            }
        }
    }
}

pub fn truncate_to_width(value: &str, width: usize) -> String {
    value.chars().take(width).collect()
}
