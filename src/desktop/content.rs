//! Built-in content kinds for the desktop host.

use std::fmt;
use std::time::Duration;

use indoc::indoc;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::geometry::Size;
use crate::keybindings::KeyBindings;
use crate::log_buffer::LogHandle;
use crate::registry::ContentRegistry;
use crate::theme;
use crate::window::{WindowRecord, WindowState};

pub const NOTES: &str = "notes";
pub const CLOCK: &str = "clock";
pub const STACK: &str = "stack";
pub const LOG: &str = "log";
pub const HELP: &str = "help";

/// Read-only view of the desktop handed to a renderer for one window.
pub struct ContentContext<'a> {
    pub focused: bool,
    pub uptime: Duration,
    pub windows: &'a [WindowRecord<String>],
    pub next_z_index: u32,
    pub size: Size,
    pub log: Option<&'a LogHandle>,
    pub bindings: &'a KeyBindings,
}

pub trait ContentView: fmt::Debug {
    fn title(&self, window: &WindowRecord<String>) -> String {
        format!("{} [{}]", window.content_kind, window.id)
    }

    fn lines(&self, window: &WindowRecord<String>, ctx: &ContentContext<'_>) -> Vec<Line<'static>>;
}

pub type ContentRenderers = ContentRegistry<Box<dyn ContentView>>;

pub fn default_registry() -> ContentRenderers {
    let mut registry: ContentRenderers = ContentRegistry::new();
    registry.register(NOTES, Box::new(NotesView));
    registry.register(CLOCK, Box::new(ClockView));
    registry.register(STACK, Box::new(StackView));
    registry.register(LOG, Box::new(LogView));
    registry.register(HELP, Box::new(HelpView));
    registry
}

fn state_label(state: WindowState) -> &'static str {
    match state {
        WindowState::Normal => "normal",
        WindowState::Maximized => "maximized",
        WindowState::Minimized => "minimized",
        WindowState::Fullscreen => "fullscreen",
    }
}

/// Free text carried in the window's params.
#[derive(Debug)]
pub struct NotesView;

impl ContentView for NotesView {
    fn title(&self, window: &WindowRecord<String>) -> String {
        let first = window.content_params.lines().next().unwrap_or_default();
        if first.is_empty() {
            format!("notes [{}]", window.id)
        } else {
            format!("{first} [{}]", window.id)
        }
    }

    fn lines(&self, window: &WindowRecord<String>, _ctx: &ContentContext<'_>) -> Vec<Line<'static>> {
        if window.content_params.is_empty() {
            return vec![Line::styled(
                "(empty note)",
                Style::default().add_modifier(Modifier::DIM),
            )];
        }
        window
            .content_params
            .lines()
            .map(|line| Line::raw(line.to_string()))
            .collect()
    }
}

#[derive(Debug)]
pub struct ClockView;

impl ContentView for ClockView {
    fn lines(&self, window: &WindowRecord<String>, ctx: &ContentContext<'_>) -> Vec<Line<'static>> {
        let secs = ctx.uptime.as_secs();
        let uptime = format!("{:02}:{:02}:{:02}", secs / 3600, (secs / 60) % 60, secs % 60);
        vec![
            Line::from(vec![
                Span::raw("uptime   "),
                Span::styled(uptime, Style::default().add_modifier(Modifier::BOLD)),
            ]),
            Line::raw(format!(
                "at       {},{}",
                window.position.x, window.position.y
            )),
            Line::raw(format!(
                "size     {}x{}",
                window.size.width, window.size.height
            )),
            Line::raw(format!("z        {}", window.z_index)),
            Line::raw(format!("state    {}", state_label(window.state))),
        ]
    }
}

/// Live listing of the stacking order, topmost first.
#[derive(Debug)]
pub struct StackView;

impl ContentView for StackView {
    fn title(&self, window: &WindowRecord<String>) -> String {
        format!("stack [{}]", window.id)
    }

    fn lines(&self, _window: &WindowRecord<String>, ctx: &ContentContext<'_>) -> Vec<Line<'static>> {
        let mut ordered: Vec<&WindowRecord<String>> = ctx.windows.iter().collect();
        ordered.sort_by_key(|w| std::cmp::Reverse(w.stacking_key()));

        let mut lines = vec![Line::styled(
            format!("{} open, next z {}", ctx.windows.len(), ctx.next_z_index),
            Style::default().add_modifier(Modifier::UNDERLINED),
        )];
        for w in ordered {
            let marker = if w.is_focused { ">" } else { " " };
            let pin = if w.is_pinned { "pin" } else { "   " };
            let style = if w.is_focused {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            lines.push(Line::styled(
                format!(
                    "{marker} {:<8} z{:<6} {pin} {}",
                    w.id.as_str(),
                    w.z_index,
                    state_label(w.state)
                ),
                style,
            ));
        }
        lines
    }
}

#[derive(Debug)]
pub struct LogView;

impl ContentView for LogView {
    fn title(&self, window: &WindowRecord<String>) -> String {
        format!("log [{}]", window.id)
    }

    fn lines(&self, _window: &WindowRecord<String>, ctx: &ContentContext<'_>) -> Vec<Line<'static>> {
        let Some(log) = ctx.log else {
            return vec![Line::raw("logging to file")];
        };
        log.tail(ctx.size.height as usize)
            .into_iter()
            .map(|line| {
                if line.contains("WARN") || line.contains("ERROR") {
                    Line::styled(line, Style::default().fg(theme::warn_fg()))
                } else {
                    Line::raw(line)
                }
            })
            .collect()
    }
}

const HELP_INTRO: &str = indoc! {"
    Drag a header to move, drag a border to resize.
    Header buttons: pin, minimize, maximize, close.
    Click a taskbar entry to focus, minimize or restore.
"};

#[derive(Debug)]
pub struct HelpView;

impl ContentView for HelpView {
    fn title(&self, _window: &WindowRecord<String>) -> String {
        "help".to_string()
    }

    fn lines(&self, _window: &WindowRecord<String>, ctx: &ContentContext<'_>) -> Vec<Line<'static>> {
        let mut lines: Vec<Line<'static>> = HELP_INTRO
            .lines()
            .map(|line| Line::raw(line.to_string()))
            .collect();
        lines.push(Line::raw(""));
        for (action, combos) in ctx.bindings.help_entries() {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:<18}", combos.join(", ")),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(action.to_string()),
            ]));
        }
        lines.push(Line::raw("Shift with any arrow chord uses the large step."));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::{OpenOptions, WindowStore};

    fn ctx<'a>(
        windows: &'a [WindowRecord<String>],
        bindings: &'a KeyBindings,
        log: Option<&'a LogHandle>,
    ) -> ContentContext<'a> {
        ContentContext {
            focused: true,
            uptime: Duration::from_secs(3723),
            windows,
            next_z_index: 9,
            size: Size::new(30, 3),
            log,
            bindings,
        }
    }

    fn text(lines: &[Line<'_>]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn default_registry_covers_builtin_kinds() {
        let registry = default_registry();
        assert_eq!(
            registry.kinds().collect::<Vec<_>>(),
            vec![CLOCK, HELP, LOG, NOTES, STACK]
        );
    }

    #[test]
    fn notes_title_uses_first_line() {
        let mut store: WindowStore<String> = WindowStore::new();
        store.open(NOTES, "todo\nbuy milk".to_string(), OpenOptions::new().id("n"));
        let bindings = KeyBindings::default();
        let window = store.get_window("n").unwrap();
        assert_eq!(NotesView.title(window), "todo [n]");
        let lines = NotesView.lines(window, &ctx(store.windows(), &bindings, None));
        assert_eq!(text(&lines), vec!["todo", "buy milk"]);
    }

    #[test]
    fn clock_formats_uptime() {
        let mut store: WindowStore<String> = WindowStore::new();
        store.open(CLOCK, String::new(), OpenOptions::new().id("c"));
        let bindings = KeyBindings::default();
        let window = store.get_window("c").unwrap();
        let lines = ClockView.lines(window, &ctx(store.windows(), &bindings, None));
        assert_eq!(lines[0].to_string(), "uptime   01:02:03");
    }

    #[test]
    fn stack_lists_topmost_first() {
        let mut store: WindowStore<String> = WindowStore::new();
        store.open(NOTES, String::new(), OpenOptions::new().id("a"));
        store.open(NOTES, String::new(), OpenOptions::new().id("b"));
        store.pin("a");
        let bindings = KeyBindings::default();
        let window = store.get_window("b").unwrap();
        let lines = text(&StackView.lines(window, &ctx(store.windows(), &bindings, None)));
        assert!(lines[1].contains("a ") && lines[1].contains("pin"));
        assert!(lines[2].contains("b "));
    }

    #[test]
    fn log_shows_tail_sized_to_window() {
        let log = LogHandle::new(10);
        for i in 0..5 {
            log.push(format!("line {i}"));
        }
        let mut store: WindowStore<String> = WindowStore::new();
        store.open(LOG, String::new(), OpenOptions::new().id("l"));
        let bindings = KeyBindings::default();
        let window = store.get_window("l").unwrap();
        let lines = LogView.lines(window, &ctx(store.windows(), &bindings, Some(&log)));
        assert_eq!(text(&lines), vec!["line 2", "line 3", "line 4"]);
    }
}
