//! Action types and dispatch.
//!
//! Front-ends translate their input events into [`GridAction`]s and hand them
//! to [`SpreadsheetGrid::apply`]. Each action runs to completion synchronously.

use super::SpreadsheetGrid;
use crate::cell::{Formatting, TextAlign};
use crate::error::Result;

/// Every handler of the widget as a value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridAction {
    /// Propose a new value for an absolute cell index.
    Edit { index: usize, value: String },
    /// Propose a new value for a cell on the current page.
    EditVisible { visible: usize, value: String },
    /// Select an absolute cell index.
    Select(usize),
    /// Select a cell on the current page.
    SelectVisible(usize),
    /// Merge formatting into the selected cell.
    Format(Formatting),
    Undo,
    Redo,
    PreviousPage,
    NextPage,
    /// Replace the search term.
    Search(String),
}

impl GridAction {
    pub fn align(text_align: TextAlign) -> Self {
        GridAction::Format(Formatting::align(text_align))
    }
}

/// Whether an accepted action changed anything.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    Changed,
    /// Undo/redo with an empty stack, or a page move at a boundary.
    Unchanged,
}

impl From<bool> for ActionOutcome {
    fn from(changed: bool) -> Self {
        if changed {
            ActionOutcome::Changed
        } else {
            ActionOutcome::Unchanged
        }
    }
}

impl SpreadsheetGrid {
    /// Dispatch an action to its handler.
    pub fn apply(&mut self, action: GridAction) -> Result<ActionOutcome> {
        match action {
            GridAction::Edit { index, value } => self.edit(index, value)?,
            GridAction::EditVisible { visible, value } => self.edit_visible(visible, value)?,
            GridAction::Select(index) => self.select(index)?,
            GridAction::SelectVisible(visible) => self.select_visible(visible)?,
            GridAction::Format(patch) => self.apply_format(patch)?,
            GridAction::Undo => return Ok(self.undo().into()),
            GridAction::Redo => return Ok(self.redo().into()),
            GridAction::PreviousPage => return Ok(self.prev_page().into()),
            GridAction::NextPage => return Ok(self.next_page().into()),
            GridAction::Search(term) => self.set_search_term(term),
        }
        Ok(ActionOutcome::Changed)
    }
}
