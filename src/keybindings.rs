use std::collections::HashMap;
use std::fmt;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::interaction::StepKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    ToggleHelp,
    FocusNext,
    FocusPrev,
    NewWindow,
    CloseWindow,
    CloseKind,
    CloseAll,
    Minimize,
    RestoreAll,
    ToggleMaximize,
    ToggleFullscreen,
    TogglePin,
    Move(StepKey),
    // Bottom-right corner follows the arrow, top-left stays put.
    Grow(StepKey),
    // Top-left corner follows the arrow, bottom-right stays put.
    Shift(StepKey),
}

impl Action {
    /// Step actions honor Shift for the large step.
    pub fn is_step(self) -> bool {
        matches!(self, Action::Move(_) | Action::Grow(_) | Action::Shift(_))
    }
}

fn step_name(key: StepKey) -> &'static str {
    match key {
        StepKey::Left => "left",
        StepKey::Right => "right",
        StepKey::Up => "up",
        StepKey::Down => "down",
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Quit => write!(f, "Quit"),
            Action::ToggleHelp => write!(f, "Toggle help window"),
            Action::FocusNext => write!(f, "Focus next window"),
            Action::FocusPrev => write!(f, "Focus previous window"),
            Action::NewWindow => write!(f, "New notes window"),
            Action::CloseWindow => write!(f, "Close focused window"),
            Action::CloseKind => write!(f, "Close all windows of the focused kind"),
            Action::CloseAll => write!(f, "Close every window"),
            Action::Minimize => write!(f, "Minimize"),
            Action::RestoreAll => write!(f, "Restore minimized windows"),
            Action::ToggleMaximize => write!(f, "Toggle maximize"),
            Action::ToggleFullscreen => write!(f, "Toggle fullscreen"),
            Action::TogglePin => write!(f, "Toggle always-on-top"),
            Action::Move(key) => write!(f, "Move {}", step_name(*key)),
            Action::Grow(key) => write!(f, "Resize bottom-right {}", step_name(*key)),
            Action::Shift(key) => write!(f, "Resize top-left {}", step_name(*key)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub mods: KeyModifiers,
}

impl KeyCombo {
    pub fn new(code: KeyCode, mods: KeyModifiers) -> Self {
        Self { code, mods }
    }

    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.code == self.code && key.modifiers == self.mods
    }

    pub fn display(&self) -> String {
        let mut parts = Vec::new();
        if self.mods.contains(KeyModifiers::CONTROL) {
            parts.push("Ctrl".to_string());
        }
        if self.mods.contains(KeyModifiers::SHIFT) {
            parts.push("Shift".to_string());
        }
        if self.mods.contains(KeyModifiers::ALT) {
            parts.push("Alt".to_string());
        }
        let code = match self.code {
            KeyCode::Char(c) => c.to_ascii_uppercase().to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::BackTab => "Shift+Tab".to_string(),
            KeyCode::Left => "Left".to_string(),
            KeyCode::Right => "Right".to_string(),
            KeyCode::Up => "Up".to_string(),
            KeyCode::Down => "Down".to_string(),
            KeyCode::F(n) => format!("F{n}"),
            _ => format!("{:?}", self.code),
        };
        parts.push(code);
        parts.join("+")
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// A resolved key press: the action plus whether Shift asked for the
/// large step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub action: Action,
    pub large: bool,
}

#[derive(Debug, Clone)]
pub struct KeyBindings {
    map: HashMap<Action, Vec<KeyCombo>>,
    // Registration order, so help output is stable.
    order: Vec<Action>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        use Action::*;
        let none = KeyModifiers::NONE;
        let ctrl = KeyModifiers::CONTROL;
        let alt = KeyModifiers::ALT;

        let mut kb = Self::new();
        kb.add(Quit, KeyCombo::new(KeyCode::Char('q'), ctrl));
        kb.add(ToggleHelp, KeyCombo::new(KeyCode::F(1), none));
        kb.add(FocusNext, KeyCombo::new(KeyCode::Tab, none));
        kb.add(FocusPrev, KeyCombo::new(KeyCode::BackTab, none));
        kb.add(NewWindow, KeyCombo::new(KeyCode::Char('n'), ctrl));
        kb.add(CloseWindow, KeyCombo::new(KeyCode::Char('w'), ctrl));
        kb.add(CloseKind, KeyCombo::new(KeyCode::Char('k'), alt));
        kb.add(CloseAll, KeyCombo::new(KeyCode::Char('c'), alt));
        kb.add(Minimize, KeyCombo::new(KeyCode::Char('m'), alt));
        kb.add(RestoreAll, KeyCombo::new(KeyCode::Char('r'), alt));
        kb.add(ToggleMaximize, KeyCombo::new(KeyCode::Char('x'), alt));
        kb.add(ToggleFullscreen, KeyCombo::new(KeyCode::Char('f'), alt));
        kb.add(ToggleFullscreen, KeyCombo::new(KeyCode::F(11), none));
        kb.add(TogglePin, KeyCombo::new(KeyCode::Char('p'), alt));

        for (code, key) in [
            (KeyCode::Left, StepKey::Left),
            (KeyCode::Right, StepKey::Right),
            (KeyCode::Up, StepKey::Up),
            (KeyCode::Down, StepKey::Down),
        ] {
            kb.add(Move(key), KeyCombo::new(code, none));
            kb.add(Grow(key), KeyCombo::new(code, ctrl));
            kb.add(Shift(key), KeyCombo::new(code, alt));
        }
        kb
    }
}

impl KeyBindings {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
            order: Vec::new(),
        }
    }

    pub fn add(&mut self, action: Action, combo: KeyCombo) {
        if !self.map.contains_key(&action) {
            self.order.push(action);
        }
        self.map.entry(action).or_default().push(combo);
    }

    pub fn matches(&self, action: Action, key: &KeyEvent) -> bool {
        self.map
            .get(&action)
            .is_some_and(|list| list.iter().any(|c| c.matches(key)))
    }

    pub fn action_for_key(&self, key: &KeyEvent) -> Option<Action> {
        self.order
            .iter()
            .copied()
            .find(|action| self.matches(*action, key))
    }

    /// Like [`Self::action_for_key`], but an unbound Shift chord falls back to
    /// the unshifted binding when that binding is a step action.
    pub fn resolve(&self, key: &KeyEvent) -> Option<Resolved> {
        if let Some(action) = self.action_for_key(key) {
            return Some(Resolved {
                action,
                large: false,
            });
        }
        if !key.modifiers.contains(KeyModifiers::SHIFT) {
            return None;
        }
        let mut plain = *key;
        plain.modifiers.remove(KeyModifiers::SHIFT);
        self.action_for_key(&plain)
            .filter(|action| action.is_step())
            .map(|action| Resolved {
                action,
                large: true,
            })
    }

    pub fn help_entries(&self) -> Vec<(Action, Vec<String>)> {
        self.order
            .iter()
            .map(|action| (*action, self.combos_for(*action)))
            .collect()
    }

    pub fn combos_for(&self, action: Action) -> Vec<String> {
        self.map
            .get(&action)
            .map(|list| list.iter().map(KeyCombo::display).collect())
            .unwrap_or_default()
    }

    pub fn first_combo(&self, action: Action) -> Option<KeyCombo> {
        self.map.get(&action).and_then(|list| list.first().cloned())
    }
}
