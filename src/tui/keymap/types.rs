use crate::tui::app::Mode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pagegrid_core::TextAlign;

/// Available keybinding schemes.
///
/// Pagegrid ships two keybinding schemes:
/// - [`Vim`](Keymap::Vim): hjkl navigation, `u`/`C-r` history, `/` search
/// - [`Emacs`](Keymap::Emacs): C-n/p/f/b navigation, C-/ undo, C-s search
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Keymap {
    /// Vim-style keybindings.
    Vim,
    /// Emacs-style keybindings.
    Emacs,
    /// Custom keymap loaded from user config.
    Custom(CustomKeymap),
}

impl Keymap {
    pub fn name(&self) -> &str {
        match self {
            Keymap::Vim => "vim",
            Keymap::Emacs => "emacs",
            Keymap::Custom(custom) => &custom.name,
        }
    }

    pub fn status_hint(&self) -> String {
        match self {
            Keymap::Vim => {
                "hjkl:move  i:edit  spc:select  u/C-r:undo/redo  </=/>:align  [/]:page  /:search  ?:help  q:quit".to_string()
            }
            Keymap::Emacs => {
                "C-n/p/f/b:move  Enter:edit  C-SPC:select  C-//M-/:undo/redo  M-l/c/r:align  C-v/M-v:page  C-s:search  C-q:quit".to_string()
            }
            Keymap::Custom(custom) => {
                format!("custom keymap: {}  F1 for bindings", custom.name)
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CustomKeymap {
    pub name: String,
    pub description: Option<String>,
    pub bindings: KeymapBindings,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeymapBindings {
    pub normal: Vec<Binding>,
    pub edit: Vec<Binding>,
    pub search: Vec<Binding>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binding {
    pub combo: KeyCombo,
    pub action: Action,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    fn matches(&self, key: KeyEvent) -> bool {
        if self.code != key.code {
            return false;
        }
        if self.modifiers.is_empty() {
            return true;
        }
        key.modifiers.contains(self.modifiers)
    }

    pub fn display(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            parts.push("C");
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            parts.push("M");
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            parts.push("S");
        }
        let key = match self.code {
            KeyCode::Backspace => "Backspace".to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Left => "Left".to_string(),
            KeyCode::Right => "Right".to_string(),
            KeyCode::Up => "Up".to_string(),
            KeyCode::Down => "Down".to_string(),
            KeyCode::Home => "Home".to_string(),
            KeyCode::End => "End".to_string(),
            KeyCode::PageUp => "PageUp".to_string(),
            KeyCode::PageDown => "PageDown".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::Delete => "Delete".to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::F(n) => format!("F{n}"),
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(c) => c.to_string(),
            _ => "Unknown".to_string(),
        };
        if parts.is_empty() {
            key
        } else {
            format!("{}-{}", parts.join("-"), key)
        }
    }
}

impl CustomKeymap {
    /// Bindings with modifiers win over plain ones for the same key.
    pub(crate) fn translate(&self, mode: Mode, key: KeyEvent) -> Option<Action> {
        let bindings = self.bindings.for_mode(mode);
        bindings
            .iter()
            .filter(|binding| !binding.combo.modifiers.is_empty())
            .find(|binding| binding.combo.matches(key))
            .or_else(|| {
                bindings
                    .iter()
                    .filter(|binding| binding.combo.modifiers.is_empty())
                    .find(|binding| binding.combo.matches(key))
            })
            .map(|binding| binding.action)
    }
}

impl KeymapBindings {
    fn for_mode(&self, mode: Mode) -> &Vec<Binding> {
        match mode {
            Mode::Normal => &self.normal,
            Mode::Edit => &self.edit,
            Mode::Search => &self.search,
        }
    }
}

/// Actions that can be triggered by key presses.
///
/// The keymap translates key events into actions, which are then applied to
/// the application state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Leave Edit or Search mode.
    Cancel,
    /// Select the cell under the cursor and start typing into it.
    EnterEdit,
    /// Leave Edit mode. Keystrokes are already applied.
    CommitEdit,
    /// Select the cell under the cursor (mouse click equivalent).
    SelectCell,
    /// Focus the search box.
    EnterSearch,
    /// Undo the last edit or format.
    Undo,
    /// Redo the last undone change.
    Redo,
    /// Align the selected cell.
    Align(TextAlign),
    /// Previous page.
    PrevPage,
    /// Next page.
    NextPage,
    /// Move cursor by (dx, dy) on the current page.
    Move(i32, i32),
    /// First cell of the page.
    FirstCell,
    /// Last cell of the page.
    LastCell,
    /// Toggle the help modal.
    Help,
    /// Exit the application.
    Quit,
}
