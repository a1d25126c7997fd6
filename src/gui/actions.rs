//! Action types and dispatch logic.
//!
//! Drawing code records what the user did as [`Action`]s and the frame
//! applies them once rendering is done.

use crate::gui::app::GuiApp;
use crate::gui::state::GuiState;
use pagegrid_core::TextAlign;

/// All possible user actions in the GUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A cell's text field changed. `visible` indexes the current page.
    Edit { visible: usize, value: String },

    /// A cell was clicked or focused.
    Select(usize),

    /// The search box changed.
    Search(String),

    /// Move keyboard focus to the search box.
    FocusSearch,

    Undo,
    Redo,
    Align(TextAlign),
    PreviousPage,
    NextPage,

    /// Acknowledge the alert window.
    DismissAlert,
}

/// Apply an action to update app and state.
pub fn apply_action(app: &mut GuiApp, state: &mut GuiState, action: Action) {
    match action {
        Action::Edit { visible, value } => app.edit_visible(visible, value),
        Action::Select(visible) => app.select_visible(visible),
        Action::Search(term) => app.set_search_term(term),
        Action::FocusSearch => state.request_focus_search = true,
        Action::Undo => app.undo(),
        Action::Redo => app.redo(),
        Action::Align(text_align) => app.align(text_align),
        Action::PreviousPage => app.prev_page(),
        Action::NextPage => app.next_page(),
        Action::DismissAlert => app.dismiss_alert(),
    }
}
