//! Core application state for the desktop front-end (UI-agnostic).

use pagegrid_core::{ActionOutcome, GridAction, SpreadsheetGrid, TextAlign};

/// Widget state plus the pieces of feedback the window shows around it.
/// This is independent of the UI framework and can be tested in isolation.
pub struct GuiApp {
    pub grid: SpreadsheetGrid,
    /// Blocking alert, shown in a modal window until acknowledged.
    pub alert: Option<String>,
    pub status: String,
}

impl GuiApp {
    pub fn new(grid: SpreadsheetGrid) -> Self {
        Self {
            grid,
            alert: None,
            status: String::new(),
        }
    }

    /// Run one widget action. User-facing rejections become the alert.
    pub fn dispatch(&mut self, action: GridAction) -> Option<ActionOutcome> {
        match self.grid.apply(action) {
            Ok(outcome) => Some(outcome),
            Err(err) if err.is_user_facing() => {
                log::debug!("alert: {err}");
                self.alert = Some(err.to_string());
                None
            }
            Err(err) => {
                log::warn!("rejected action: {err}");
                self.status = format!("✗ {err}");
                None
            }
        }
    }

    /// Propose a new value for a cell on the current page.
    pub fn edit_visible(&mut self, visible: usize, value: String) {
        self.dispatch(GridAction::EditVisible { visible, value });
    }

    pub fn select_visible(&mut self, visible: usize) {
        self.dispatch(GridAction::SelectVisible(visible));
    }

    pub fn set_search_term(&mut self, term: String) {
        self.dispatch(GridAction::Search(term));
    }

    pub fn undo(&mut self) {
        self.status = match self.dispatch(GridAction::Undo) {
            Some(ActionOutcome::Changed) => "✓ Undo".to_string(),
            Some(ActionOutcome::Unchanged) => "Nothing to undo".to_string(),
            None => return,
        };
    }

    pub fn redo(&mut self) {
        self.status = match self.dispatch(GridAction::Redo) {
            Some(ActionOutcome::Changed) => "✓ Redo".to_string(),
            Some(ActionOutcome::Unchanged) => "Nothing to redo".to_string(),
            None => return,
        };
    }

    pub fn align(&mut self, text_align: TextAlign) {
        if self.dispatch(GridAction::align(text_align)).is_some() {
            self.status = format!("✓ Aligned {text_align}");
        }
    }

    pub fn prev_page(&mut self) {
        if self.dispatch(GridAction::PreviousPage) == Some(ActionOutcome::Changed) {
            self.status = self.grid.pager().label();
        }
    }

    pub fn next_page(&mut self) {
        if self.dispatch(GridAction::NextPage) == Some(ActionOutcome::Changed) {
            self.status = self.grid.pager().label();
        }
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Human-readable label for the selection (e.g. "Cell 7").
    pub fn selection_label(&self) -> String {
        match self.grid.selected() {
            Some(index) => format!("Cell {}", index + 1),
            None => "No cell selected".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> GuiApp {
        GuiApp::new(SpreadsheetGrid::new())
    }

    #[test]
    fn rejected_edit_sets_alert_and_keeps_value() {
        let mut app = app();
        app.edit_visible(0, "12".to_string());
        app.edit_visible(0, "12a".to_string());
        assert_eq!(app.grid.cells()[0].value, "12");
        assert_eq!(app.alert.as_deref(), Some("This cell only accepts numeric values."));
        app.dismiss_alert();
        assert!(app.alert.is_none());
    }

    #[test]
    fn align_requires_selection() {
        let mut app = app();
        app.align(TextAlign::Center);
        assert_eq!(app.alert.as_deref(), Some("Please select a cell first."));
        app.dismiss_alert();

        app.select_visible(4);
        app.align(TextAlign::Right);
        assert!(app.alert.is_none());
        assert_eq!(app.status, "✓ Aligned right");
        assert_eq!(app.selection_label(), "Cell 5");
    }

    #[test]
    fn undo_redo_status() {
        let mut app = app();
        app.undo();
        assert_eq!(app.status, "Nothing to undo");
        app.edit_visible(1, "ab".to_string());
        app.undo();
        assert_eq!(app.status, "✓ Undo");
        app.redo();
        assert_eq!(app.status, "✓ Redo");
        assert_eq!(app.grid.cells()[1].value, "ab");
    }

    #[test]
    fn paging_reports_label_and_edits_follow_page() {
        let mut app = app();
        app.prev_page();
        assert!(app.status.is_empty());
        app.next_page();
        assert_eq!(app.status, "Page 2 of 20");
        app.edit_visible(0, "9".to_string());
        assert_eq!(app.grid.cells()[50].value, "9");
    }
}
