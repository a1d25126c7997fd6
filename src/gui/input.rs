//! Keyboard input handling and event translation to actions.

use crate::gui::actions::Action;
use eframe::egui;
use egui::{Key, KeyboardShortcut, Modifiers};

/// Check if a keyboard shortcut was consumed.
/// `COMMAND` maps to Ctrl on Windows/Linux and Cmd on macOS.
pub fn consume_shortcut(ctx: &egui::Context, modifiers: Modifiers, key: Key) -> bool {
    ctx.input_mut(|i| i.consume_shortcut(&KeyboardShortcut::new(modifiers, key)))
}

/// Keys that acknowledge the alert window.
pub fn alert_dismissed(ctx: &egui::Context) -> bool {
    ctx.input_mut(|i| {
        i.consume_key(Modifiers::NONE, Key::Enter) || i.consume_key(Modifiers::NONE, Key::Escape)
    })
}

/// Translate window-level shortcuts to actions.
///
/// These are consumed before the text fields see them, so Ctrl+Z undoes the
/// grid history rather than the focused field's own edit buffer.
pub fn handle_keyboard_input(ctx: &egui::Context) -> Option<Action> {
    // Check Ctrl+Shift+Z before Ctrl+Z; consume_shortcut ignores extra Shift.
    if consume_shortcut(ctx, Modifiers::COMMAND | Modifiers::SHIFT, Key::Z) {
        return Some(Action::Redo);
    }
    if consume_shortcut(ctx, Modifiers::COMMAND, Key::Z) {
        return Some(Action::Undo);
    }
    if consume_shortcut(ctx, Modifiers::COMMAND, Key::Y) {
        return Some(Action::Redo);
    }
    if consume_shortcut(ctx, Modifiers::COMMAND, Key::F) {
        return Some(Action::FocusSearch);
    }
    // Page keys belong to a focused text field.
    if ctx.wants_keyboard_input() {
        return None;
    }
    if consume_shortcut(ctx, Modifiers::NONE, Key::PageUp) {
        return Some(Action::PreviousPage);
    }
    if consume_shortcut(ctx, Modifiers::NONE, Key::PageDown) {
        return Some(Action::NextPage);
    }
    None
}
