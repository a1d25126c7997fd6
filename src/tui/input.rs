use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::prelude::*;
use std::io;

use super::actions::{ApplyResult, apply_action, handle_edit_text, handle_search_text};
use super::app::{App, Mode};
use super::keymap::translate;
use super::ui::{self, HitTarget, ToolbarButton};

fn handle_mouse_event(app: &mut App, terminal_area: Rect, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    // Any click acknowledges the alert, like its OK button.
    if app.alert.is_some() {
        app.dismiss_alert();
        return;
    }
    if app.help_modal {
        return;
    }

    let layout = ui::split_main_chunks(terminal_area);
    let Some(target) = ui::hit_test(app, &layout, mouse.column, mouse.row) else {
        return;
    };
    log::trace!("click on {target:?}");

    match target {
        HitTarget::Search => app.enter_search_mode(),
        HitTarget::Toolbar(ToolbarButton::Undo) => app.undo(),
        HitTarget::Toolbar(ToolbarButton::Redo) => app.redo(),
        HitTarget::Toolbar(ToolbarButton::Align(text_align)) => app.align(text_align),
        HitTarget::Previous => app.prev_page(),
        HitTarget::Next => app.next_page(),
        HitTarget::Cell(visible) => {
            app.move_to(visible);
            app.enter_edit_mode();
        }
    }
}

/// Alert modal takes over input until dismissed.
fn handle_alert_key(app: &mut App, key: KeyEvent) {
    if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
        app.dismiss_alert();
    }
}

fn handle_help_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::F(1) => {
            app.close_help_modal();
        }
        KeyCode::Char('g') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.close_help_modal();
        }
        KeyCode::Down | KeyCode::Char('j') => app.scroll_help_by(1),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_help_by(-1),
        KeyCode::PageDown => app.scroll_help_by(12),
        KeyCode::PageUp => app.scroll_help_by(-12),
        KeyCode::Home => app.help_scroll = 0,
        _ => {}
    }
}

/// Route one key press. Returns `ApplyResult::Quit` when the app should exit.
pub(crate) fn handle_key_event(app: &mut App, key: KeyEvent) -> ApplyResult {
    if app.alert.is_some() {
        handle_alert_key(app, key);
        return ApplyResult::Continue;
    }

    if app.help_modal {
        handle_help_key(app, key);
        return ApplyResult::Continue;
    }

    if let Some(action) = translate(&app.keymap, app.mode, key) {
        return apply_action(app, action);
    }

    // Text entry fallbacks (not bound in keymaps).
    match app.mode {
        Mode::Edit => handle_edit_text(app, key),
        Mode::Search => handle_search_text(app, key),
        Mode::Normal => {}
    }
    ApplyResult::Continue
}

pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        match event::read()? {
            Event::Key(key) => {
                // Only process key press events (Windows reports Press + Release)
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(app, key) == ApplyResult::Quit {
                    return Ok(());
                }
            }
            Event::Mouse(mouse) => {
                let size = terminal.size()?;
                let terminal_area = Rect::new(0, 0, size.width, size.height);
                handle_mouse_event(app, terminal_area, mouse);
            }
            Event::Resize(width, _) => app.set_width(width),
            _ => {}
        }
    }
}
