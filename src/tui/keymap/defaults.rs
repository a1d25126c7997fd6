use crate::tui::app::Mode;
use crate::tui::keymap::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pagegrid_core::TextAlign;

pub(crate) fn translate_vim(mode: Mode, key: KeyEvent) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match mode {
        Mode::Normal => match key.code {
            KeyCode::Char('r') if ctrl => Some(Action::Redo),
            KeyCode::Char('u') => Some(Action::Undo),

            KeyCode::Up | KeyCode::Char('k') => Some(Action::Move(0, -1)),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::Move(0, 1)),
            KeyCode::Left | KeyCode::Char('h') => Some(Action::Move(-1, 0)),
            KeyCode::Right | KeyCode::Char('l') => Some(Action::Move(1, 0)),
            KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(Action::Move(-1, 0)),
            KeyCode::Tab => Some(Action::Move(1, 0)),
            KeyCode::BackTab => Some(Action::Move(-1, 0)),
            KeyCode::Home | KeyCode::Char('g') => Some(Action::FirstCell),
            KeyCode::End | KeyCode::Char('G') => Some(Action::LastCell),

            KeyCode::PageUp | KeyCode::Char('[') => Some(Action::PrevPage),
            KeyCode::PageDown | KeyCode::Char(']') => Some(Action::NextPage),

            KeyCode::Enter | KeyCode::Char('i') | KeyCode::Char('a') => Some(Action::EnterEdit),
            KeyCode::Char(' ') => Some(Action::SelectCell),
            KeyCode::Char('<') => Some(Action::Align(TextAlign::Left)),
            KeyCode::Char('=') => Some(Action::Align(TextAlign::Center)),
            KeyCode::Char('>') => Some(Action::Align(TextAlign::Right)),
            KeyCode::Char('/') => Some(Action::EnterSearch),
            KeyCode::Char('?') | KeyCode::F(1) => Some(Action::Help),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        },

        Mode::Edit => match key.code {
            KeyCode::Esc => Some(Action::Cancel),
            KeyCode::Enter => Some(Action::CommitEdit),
            _ => None,
        },

        Mode::Search => match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(Action::Cancel),
            _ => None,
        },
    }
}

pub(crate) fn translate_emacs(mode: Mode, key: KeyEvent) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match mode {
        Mode::Normal => match key.code {
            // Movement
            KeyCode::Up => Some(Action::Move(0, -1)),
            KeyCode::Down => Some(Action::Move(0, 1)),
            KeyCode::Left => Some(Action::Move(-1, 0)),
            KeyCode::Right => Some(Action::Move(1, 0)),
            KeyCode::Char('p') if ctrl => Some(Action::Move(0, -1)),
            KeyCode::Char('n') if ctrl => Some(Action::Move(0, 1)),
            KeyCode::Char('b') if ctrl => Some(Action::Move(-1, 0)),
            KeyCode::Char('f') if ctrl => Some(Action::Move(1, 0)),
            KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(Action::Move(-1, 0)),
            KeyCode::Tab => Some(Action::Move(1, 0)),
            KeyCode::BackTab => Some(Action::Move(-1, 0)),
            KeyCode::Char('<') if alt => Some(Action::FirstCell),
            KeyCode::Char('>') if alt => Some(Action::LastCell),
            KeyCode::Home => Some(Action::FirstCell),
            KeyCode::End => Some(Action::LastCell),

            // Pages
            KeyCode::Char('v') if ctrl => Some(Action::NextPage),
            KeyCode::Char('v') if alt => Some(Action::PrevPage),
            KeyCode::PageUp => Some(Action::PrevPage),
            KeyCode::PageDown => Some(Action::NextPage),

            // Cells
            KeyCode::Enter => Some(Action::EnterEdit),
            KeyCode::Char(' ') if ctrl => Some(Action::SelectCell),

            // History
            KeyCode::Char('/') | KeyCode::Char('_') if ctrl => Some(Action::Undo),
            KeyCode::Char('/') if alt => Some(Action::Redo),

            // Alignment
            KeyCode::Char('l') if alt => Some(Action::Align(TextAlign::Left)),
            KeyCode::Char('c') if alt => Some(Action::Align(TextAlign::Center)),
            KeyCode::Char('r') if alt => Some(Action::Align(TextAlign::Right)),

            KeyCode::Char('s') if ctrl => Some(Action::EnterSearch),
            KeyCode::F(1) => Some(Action::Help),
            KeyCode::Char('q') if ctrl => Some(Action::Quit),
            _ => None,
        },

        Mode::Edit => match key.code {
            KeyCode::Char('g') if ctrl => Some(Action::Cancel),
            KeyCode::Esc => Some(Action::Cancel),
            KeyCode::Enter => Some(Action::CommitEdit),
            _ => None,
        },

        Mode::Search => match key.code {
            KeyCode::Char('g') if ctrl => Some(Action::Cancel),
            KeyCode::Esc | KeyCode::Enter => Some(Action::Cancel),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn vim_history_and_alignment() {
        assert_eq!(
            translate_vim(Mode::Normal, key(KeyCode::Char('u'), KeyModifiers::NONE)),
            Some(Action::Undo)
        );
        assert_eq!(
            translate_vim(Mode::Normal, key(KeyCode::Char('r'), KeyModifiers::CONTROL)),
            Some(Action::Redo)
        );
        assert_eq!(
            translate_vim(Mode::Normal, key(KeyCode::Char('>'), KeyModifiers::SHIFT)),
            Some(Action::Align(TextAlign::Right))
        );
    }

    #[test]
    fn vim_edit_mode_leaves_letters_for_text_entry() {
        assert_eq!(
            translate_vim(Mode::Edit, key(KeyCode::Char('u'), KeyModifiers::NONE)),
            None
        );
        assert_eq!(
            translate_vim(Mode::Edit, key(KeyCode::Enter, KeyModifiers::NONE)),
            Some(Action::CommitEdit)
        );
    }

    #[test]
    fn emacs_is_strict_about_plain_letters() {
        assert_eq!(
            translate_emacs(Mode::Normal, key(KeyCode::Char('u'), KeyModifiers::NONE)),
            None
        );
        assert_eq!(
            translate_emacs(Mode::Normal, key(KeyCode::Char('/'), KeyModifiers::CONTROL)),
            Some(Action::Undo)
        );
        assert_eq!(
            translate_emacs(Mode::Normal, key(KeyCode::Char('v'), KeyModifiers::ALT)),
            Some(Action::PrevPage)
        );
    }
}
