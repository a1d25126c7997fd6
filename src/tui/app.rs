//! Application state and logic.
//!
//! This module contains the main [`App`] struct which wraps the
//! [`SpreadsheetGrid`] with terminal-only state: the keyboard cursor, the
//! responsive column count, text cursors for the edit and search boxes and
//! the modal alert. The app operates in different [`Mode`]s (Normal, Edit,
//! Search) similar to Vim's modal editing.

use pagegrid_core::{
    ActionOutcome, Breakpoints, GridAction, SpreadsheetGrid, TextAlign, layout,
};

use super::keymap::Keymap;

/// Modal editing state for the application.
///
/// - [`Normal`](Mode::Normal): Navigate the page and run single-key commands
/// - [`Edit`](Mode::Edit): Every keystroke proposes a new value for the selected cell
/// - [`Search`](Mode::Search): Type into the search box
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Edit,
    Search,
}

/// Main application state container.
pub struct App {
    /// The widget state. Every change goes through [`SpreadsheetGrid::apply`].
    pub grid: SpreadsheetGrid,
    /// Current mode
    pub mode: Mode,
    /// Keyboard cursor as an index into the current page
    pub cursor: usize,
    /// Grid columns for the current terminal width
    pub columns: usize,
    /// Grid rows that fit on screen
    pub visible_rows: usize,
    /// First grid row on screen
    pub viewport_row: usize,
    /// Width thresholds for 2/3/5 columns
    pub breakpoints: Breakpoints,
    /// Cursor within the selected cell's value (byte offset)
    pub edit_cursor: usize,
    /// Cursor within the search term (byte offset)
    pub search_cursor: usize,
    /// Blocking alert shown in a modal until dismissed
    pub alert: Option<String>,
    /// Status message to display
    pub status_message: String,
    /// Help modal state
    pub help_modal: bool,
    /// Scroll offset (in lines) for the help modal
    pub help_scroll: usize,
    /// Active keymap
    pub keymap: Keymap,
}

impl App {
    pub fn new(keymap: Keymap, breakpoints: Breakpoints) -> Self {
        Self::with_grid(SpreadsheetGrid::new(), keymap, breakpoints)
    }

    pub fn with_grid(grid: SpreadsheetGrid, keymap: Keymap, breakpoints: Breakpoints) -> Self {
        App {
            grid,
            mode: Mode::Normal,
            cursor: 0,
            columns: Breakpoints::NARROW_COLUMNS,
            visible_rows: 10,
            viewport_row: 0,
            breakpoints,
            edit_cursor: 0,
            search_cursor: 0,
            alert: None,
            status_message: String::new(),
            help_modal: false,
            help_scroll: 0,
            keymap,
        }
    }

    /// Run one widget action, routing failures to the alert or status bar.
    ///
    /// Returns `None` when the action was rejected.
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
                self.status_message = format!("Error: {err}");
                None
            }
        }
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Number of cells on the current page.
    pub fn page_len(&self) -> usize {
        self.grid.visible_cells().len()
    }

    pub fn cursor_row(&self) -> usize {
        self.cursor / self.columns.max(1)
    }

    pub fn cursor_col(&self) -> usize {
        self.cursor % self.columns.max(1)
    }

    /// Absolute index of the cell under the cursor.
    pub fn cursor_index(&self) -> Option<usize> {
        self.grid.pager().to_absolute(self.cursor)
    }

    /// Recompute the column count for a new terminal width.
    pub fn set_width(&mut self, width: u16) {
        let columns = self.breakpoints.columns_for(u32::from(width));
        if columns != self.columns {
            log::trace!("layout: {} -> {} columns at width {}", self.columns, columns, width);
            self.columns = columns;
            self.update_viewport();
        }
    }

    pub fn total_rows(&self) -> usize {
        layout::rows_for(self.page_len(), self.columns)
    }

    pub fn move_cursor(&mut self, dx: i32, dy: i32) {
        let len = self.page_len();
        if len == 0 {
            return;
        }
        let columns = self.columns.max(1) as i32;
        let last_row = self.total_rows() as i32 - 1;
        let row = (self.cursor_row() as i32 + dy).clamp(0, last_row.max(0));
        let col = (self.cursor_col() as i32 + dx).clamp(0, columns - 1);
        self.cursor = ((row * columns + col) as usize).min(len - 1);
        self.update_viewport();
    }

    pub fn move_to(&mut self, visible: usize) {
        self.cursor = visible.min(self.page_len().saturating_sub(1));
        self.update_viewport();
    }

    pub fn update_viewport(&mut self) {
        let row = self.cursor_row();
        let visible_rows = self.visible_rows.max(1);
        if row < self.viewport_row {
            self.viewport_row = row;
        } else if row >= self.viewport_row + visible_rows {
            self.viewport_row = row - visible_rows + 1;
        }
        let max_start = self.total_rows().saturating_sub(visible_rows);
        self.viewport_row = self.viewport_row.min(max_start);
    }

    /// Select the cell under the cursor. Returns false if it was rejected.
    pub fn select_cursor(&mut self) -> bool {
        self.dispatch(GridAction::SelectVisible(self.cursor)).is_some()
    }

    pub fn enter_edit_mode(&mut self) {
        if !self.select_cursor() {
            return;
        }
        self.mode = Mode::Edit;
        self.edit_cursor = self.editing_value().len();
        self.status_message.clear();
    }

    /// Value of the cell being edited.
    pub fn editing_value(&self) -> &str {
        self.grid
            .selected_cell()
            .map(|cell| cell.value.as_str())
            .unwrap_or("")
    }

    /// Propose `value` for the selected cell, moving the edit cursor only if
    /// the cell accepts it.
    pub fn propose_edit(&mut self, value: String, cursor: usize) -> bool {
        let Some(index) = self.grid.selected() else {
            self.mode = Mode::Normal;
            return false;
        };
        if self.dispatch(GridAction::Edit { index, value }).is_none() {
            return false;
        }
        self.edit_cursor = cursor;
        true
    }

    pub fn leave_edit_mode(&mut self) {
        self.mode = Mode::Normal;
        self.edit_cursor = 0;
    }

    pub fn enter_search_mode(&mut self) {
        self.mode = Mode::Search;
        self.search_cursor = self.grid.search_term().len();
    }

    pub fn set_search_term(&mut self, term: String, cursor: usize) {
        if self.dispatch(GridAction::Search(term)).is_some() {
            self.search_cursor = cursor;
        }
    }

    pub fn undo(&mut self) {
        self.status_message = match self.dispatch(GridAction::Undo) {
            Some(ActionOutcome::Changed) => "Undone".to_string(),
            Some(ActionOutcome::Unchanged) => "Nothing to undo".to_string(),
            None => return,
        };
        self.clamp_edit_cursor();
    }

    pub fn redo(&mut self) {
        self.status_message = match self.dispatch(GridAction::Redo) {
            Some(ActionOutcome::Changed) => "Redone".to_string(),
            Some(ActionOutcome::Unchanged) => "Nothing to redo".to_string(),
            None => return,
        };
        self.clamp_edit_cursor();
    }

    pub fn align(&mut self, text_align: TextAlign) {
        if self.dispatch(GridAction::align(text_align)).is_some() {
            self.status_message = format!("Aligned {text_align}");
        }
    }

    pub fn prev_page(&mut self) {
        self.turn_page(GridAction::PreviousPage);
    }

    pub fn next_page(&mut self) {
        self.turn_page(GridAction::NextPage);
    }

    fn turn_page(&mut self, action: GridAction) {
        if self.dispatch(action) != Some(ActionOutcome::Changed) {
            return;
        }
        // The selected cell is no longer on screen.
        if self.mode == Mode::Edit {
            self.leave_edit_mode();
        }
        self.move_to(self.cursor);
        self.status_message = self.grid.pager().label();
    }

    pub fn goto_first(&mut self) {
        self.move_to(0);
    }

    pub fn goto_last(&mut self) {
        self.move_to(self.page_len().saturating_sub(1));
    }

    pub fn toggle_help_modal(&mut self) {
        self.help_modal = !self.help_modal;
        self.help_scroll = 0;
    }

    pub fn close_help_modal(&mut self) {
        self.help_modal = false;
        self.help_scroll = 0;
    }

    pub fn scroll_help_by(&mut self, delta: i32) {
        if delta.is_negative() {
            self.help_scroll = self.help_scroll.saturating_sub(delta.unsigned_abs() as usize);
        } else {
            self.help_scroll = self.help_scroll.saturating_add(delta as usize);
        }
    }

    /// Undo/redo may shorten the value under the edit cursor.
    fn clamp_edit_cursor(&mut self) {
        let value = self.editing_value();
        let mut cursor = self.edit_cursor.min(value.len());
        while cursor > 0 && !value.is_char_boundary(cursor) {
            cursor -= 1;
        }
        self.edit_cursor = cursor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagegrid_core::PAGE_SIZE;

    fn app() -> App {
        App::new(Keymap::Vim, Breakpoints::TERMINAL)
    }

    #[test]
    fn set_width_follows_breakpoints() {
        let mut app = app();
        app.set_width(60);
        assert_eq!(app.columns, 2);
        app.set_width(100);
        assert_eq!(app.columns, 3);
        app.set_width(160);
        assert_eq!(app.columns, 5);
    }

    #[test]
    fn move_cursor_clamps_to_page() {
        let mut app = app();
        app.set_width(160);
        app.move_cursor(-1, -1);
        assert_eq!(app.cursor, 0);
        app.move_cursor(10, 0);
        assert_eq!(app.cursor, 4);
        app.move_cursor(0, 100);
        assert_eq!(app.cursor, PAGE_SIZE - 1);
    }

    #[test]
    fn move_cursor_clamps_to_short_last_row() {
        let mut app = app();
        app.set_width(100);
        // 50 cells in 3 columns leaves 2 cells on the last row.
        app.move_to(46);
        app.move_cursor(2, 1);
        assert_eq!(app.cursor, PAGE_SIZE - 1);
    }

    #[test]
    fn viewport_follows_cursor() {
        let mut app = app();
        app.visible_rows = 4;
        app.move_cursor(0, 10);
        assert_eq!(app.cursor_row(), 10);
        assert_eq!(app.viewport_row, 7);
        app.goto_first();
        assert_eq!(app.viewport_row, 0);
    }

    #[test]
    fn enter_edit_mode_selects_cursor_cell() {
        let mut app = app();
        app.move_to(3);
        app.enter_edit_mode();
        assert_eq!(app.mode, Mode::Edit);
        assert_eq!(app.grid.selected(), Some(3));
    }

    #[test]
    fn rejected_edit_raises_alert_and_keeps_value() {
        let mut app = app();
        app.enter_edit_mode();
        assert!(app.propose_edit("4".to_string(), 1));
        assert!(!app.propose_edit("4x".to_string(), 2));
        assert_eq!(app.alert.as_deref(), Some("This cell only accepts numeric values."));
        assert_eq!(app.grid.cells()[0].value, "4");
        assert_eq!(app.edit_cursor, 1);
    }

    #[test]
    fn align_without_selection_raises_alert() {
        let mut app = app();
        app.align(TextAlign::Right);
        assert_eq!(app.alert.as_deref(), Some("Please select a cell first."));
        app.dismiss_alert();
        assert!(app.alert.is_none());
    }

    #[test]
    fn undo_reports_empty_history() {
        let mut app = app();
        app.undo();
        assert_eq!(app.status_message, "Nothing to undo");
        app.redo();
        assert_eq!(app.status_message, "Nothing to redo");
    }

    #[test]
    fn undo_clamps_edit_cursor() {
        let mut app = app();
        app.move_to(1);
        app.enter_edit_mode();
        assert!(app.propose_edit("a".to_string(), 1));
        assert!(app.propose_edit("abc".to_string(), 3));
        app.undo();
        assert_eq!(app.status_message, "Undone");
        assert_eq!(app.editing_value(), "a");
        assert_eq!(app.edit_cursor, 1);
    }

    #[test]
    fn turning_page_leaves_edit_mode() {
        let mut app = app();
        app.enter_edit_mode();
        app.next_page();
        assert_eq!(app.mode, Mode::Normal);
        assert_eq!(app.status_message, "Page 2 of 20");
        assert_eq!(app.cursor_index(), Some(PAGE_SIZE));
    }

    #[test]
    fn previous_page_at_start_is_silent() {
        let mut app = app();
        app.prev_page();
        assert!(app.status_message.is_empty());
        assert_eq!(app.grid.pager().page(), 0);
    }
}
