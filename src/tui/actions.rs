use crossterm::event::{self, KeyCode, KeyModifiers};

use super::app::{App, Mode};
use super::keymap::Action;

/// Handle text editing operations on a buffer with UTF-8 aware cursor movement.
fn handle_text_input(buffer: &mut String, cursor: &mut usize, key: event::KeyEvent) {
    match key.code {
        KeyCode::Left => {
            if *cursor > 0 {
                let mut new_pos = *cursor - 1;
                while new_pos > 0 && !buffer.is_char_boundary(new_pos) {
                    new_pos -= 1;
                }
                *cursor = new_pos;
            }
        }
        KeyCode::Right => {
            if *cursor < buffer.len() {
                let mut new_pos = *cursor + 1;
                while new_pos < buffer.len() && !buffer.is_char_boundary(new_pos) {
                    new_pos += 1;
                }
                *cursor = new_pos;
            }
        }
        KeyCode::Home => {
            *cursor = 0;
        }
        KeyCode::End => {
            *cursor = buffer.len();
        }
        KeyCode::Backspace | KeyCode::Char('h')
            if key.code == KeyCode::Backspace || key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            if *cursor > 0 {
                let mut del_start = *cursor - 1;
                while del_start > 0 && !buffer.is_char_boundary(del_start) {
                    del_start -= 1;
                }
                buffer.drain(del_start..*cursor);
                *cursor = del_start;
            }
        }
        KeyCode::Delete => {
            if *cursor < buffer.len() {
                let mut del_end = *cursor + 1;
                while del_end < buffer.len() && !buffer.is_char_boundary(del_end) {
                    del_end += 1;
                }
                buffer.drain(*cursor..del_end);
            }
        }
        KeyCode::Char(c) => {
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT {
                buffer.insert(*cursor, c);
                *cursor += c.len_utf8();
            }
        }
        _ => {}
    }
}

/// Result of applying an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApplyResult {
    Continue,
    Quit,
}

/// Apply an action to the application state.
///
/// Returns `ApplyResult::Quit` if the application should exit.
pub fn apply_action(app: &mut App, action: Action) -> ApplyResult {
    match action {
        Action::Cancel => match app.mode {
            Mode::Edit => app.leave_edit_mode(),
            Mode::Search => app.mode = Mode::Normal,
            Mode::Normal => app.status_message.clear(),
        },

        Action::EnterEdit => app.enter_edit_mode(),
        // Keystrokes were applied as they were typed.
        Action::CommitEdit => app.leave_edit_mode(),
        Action::SelectCell => {
            if app.select_cursor() {
                app.status_message = format!("Selected cell {}", app.cursor_index().unwrap_or(0) + 1);
            }
        }
        Action::EnterSearch => app.enter_search_mode(),

        Action::Undo => app.undo(),
        Action::Redo => app.redo(),
        Action::Align(text_align) => app.align(text_align),

        Action::PrevPage => app.prev_page(),
        Action::NextPage => app.next_page(),
        Action::Move(dx, dy) => app.move_cursor(dx, dy),
        Action::FirstCell => app.goto_first(),
        Action::LastCell => app.goto_last(),

        Action::Help => app.toggle_help_modal(),
        Action::Quit => return ApplyResult::Quit,
    }
    ApplyResult::Continue
}

/// Apply a keystroke to the selected cell's value.
///
/// Cursor-only keys never reach the grid. A keystroke that changes the text
/// is proposed as a whole new value; if the cell rejects it the value and
/// cursor stay as they were and an alert is raised.
pub fn handle_edit_text(app: &mut App, key: event::KeyEvent) {
    let mut buffer = app.editing_value().to_string();
    let mut cursor = app.edit_cursor;
    handle_text_input(&mut buffer, &mut cursor, key);
    if buffer == app.editing_value() {
        app.edit_cursor = cursor;
        return;
    }
    app.propose_edit(buffer, cursor);
}

pub fn handle_search_text(app: &mut App, key: event::KeyEvent) {
    let mut buffer = app.grid.search_term().to_string();
    let mut cursor = app.search_cursor;
    handle_text_input(&mut buffer, &mut cursor, key);
    if buffer == app.grid.search_term() {
        app.search_cursor = cursor;
        return;
    }
    app.set_search_term(buffer, cursor);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;
    use pagegrid_core::{Breakpoints, TextAlign};

    use crate::tui::keymap::Keymap;

    fn app() -> App {
        App::new(Keymap::Vim, Breakpoints::TERMINAL)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            handle_edit_text(app, press(KeyCode::Char(c)));
        }
    }

    #[test]
    fn text_input_is_utf8_aware() {
        let mut buffer = "aé".to_string();
        let mut cursor = buffer.len();
        handle_text_input(&mut buffer, &mut cursor, press(KeyCode::Left));
        assert_eq!(cursor, 1);
        handle_text_input(&mut buffer, &mut cursor, press(KeyCode::Delete));
        assert_eq!(buffer, "a");
        handle_text_input(&mut buffer, &mut cursor, press(KeyCode::Backspace));
        assert_eq!(buffer, "");
        assert_eq!(cursor, 0);
    }

    #[test]
    fn typing_into_numeric_cell_records_each_keystroke() {
        let mut app = app();
        apply_action(&mut app, Action::EnterEdit);
        type_str(&mut app, "42");
        assert_eq!(app.grid.cells()[0].value, "42");
        assert_eq!(app.grid.undo_depth(), 2);
        assert!(app.alert.is_none());
    }

    #[test]
    fn rejected_keystroke_keeps_value_and_alerts() {
        let mut app = app();
        apply_action(&mut app, Action::EnterEdit);
        type_str(&mut app, "4x");
        assert_eq!(app.grid.cells()[0].value, "4");
        assert_eq!(app.alert.as_deref(), Some("This cell only accepts numeric values."));
        assert_eq!(app.grid.undo_depth(), 1);
    }

    #[test]
    fn clearing_a_text_cell_is_rejected() {
        let mut app = app();
        app.move_to(1);
        apply_action(&mut app, Action::EnterEdit);
        type_str(&mut app, "a");
        handle_edit_text(&mut app, press(KeyCode::Backspace));
        assert_eq!(app.grid.cells()[1].value, "a");
        assert_eq!(app.alert.as_deref(), Some("This cell only accepts letters."));
    }

    #[test]
    fn cursor_keys_do_not_touch_history() {
        let mut app = app();
        apply_action(&mut app, Action::EnterEdit);
        type_str(&mut app, "12");
        handle_edit_text(&mut app, press(KeyCode::Home));
        assert_eq!(app.edit_cursor, 0);
        assert_eq!(app.grid.undo_depth(), 2);
        handle_edit_text(&mut app, press(KeyCode::Char('3')));
        assert_eq!(app.grid.cells()[0].value, "312");
    }

    #[test]
    fn commit_and_cancel_leave_edit_mode_keeping_value() {
        let mut app = app();
        apply_action(&mut app, Action::EnterEdit);
        type_str(&mut app, "7");
        apply_action(&mut app, Action::CommitEdit);
        assert_eq!(app.mode, Mode::Normal);
        apply_action(&mut app, Action::EnterEdit);
        apply_action(&mut app, Action::Cancel);
        assert_eq!(app.mode, Mode::Normal);
        assert_eq!(app.grid.cells()[0].value, "7");
    }

    #[test]
    fn align_after_select() {
        let mut app = app();
        app.move_to(2);
        apply_action(&mut app, Action::SelectCell);
        apply_action(&mut app, Action::Align(TextAlign::Left));
        assert_eq!(
            app.grid.cells()[2].formatting.text_align,
            Some(TextAlign::Left)
        );
        assert_eq!(app.status_message, "Aligned left");
    }

    #[test]
    fn search_text_is_stored_without_history() {
        let mut app = app();
        apply_action(&mut app, Action::EnterSearch);
        assert_eq!(app.mode, Mode::Search);
        for c in "abc".chars() {
            handle_search_text(&mut app, press(KeyCode::Char(c)));
        }
        assert_eq!(app.grid.search_term(), "abc");
        assert_eq!(app.search_cursor, 3);
        assert!(!app.grid.can_undo());
        apply_action(&mut app, Action::Cancel);
        assert_eq!(app.mode, Mode::Normal);
    }

    #[test]
    fn quit_stops_the_loop() {
        let mut app = app();
        assert_eq!(apply_action(&mut app, Action::Quit), ApplyResult::Quit);
        assert_eq!(apply_action(&mut app, Action::Help), ApplyResult::Continue);
        assert!(app.help_modal);
    }
}
