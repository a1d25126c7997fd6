use super::SpreadsheetGrid;
use crate::cell::{Cell, Formatting};
use crate::error::{GridError, Result};
use log::{debug, trace};
use std::sync::Arc;

impl SpreadsheetGrid {
    /// Record the current cells for undo, then mutate a private copy.
    fn mutate(&mut self, f: impl FnOnce(&mut Vec<Cell>)) {
        self.history.record(Arc::clone(&self.cells));
        f(Arc::make_mut(&mut self.cells));
    }

    fn visible_to_absolute(&self, visible: usize) -> Result<usize> {
        self.pager
            .to_absolute(visible)
            .ok_or(GridError::IndexOutOfRange {
                index: visible,
                len: self.pager.range().len(),
            })
    }

    /// Replace the value of the cell at `index` if it passes the cell's rule.
    ///
    /// Formatting and validation of the cell are left untouched.
    pub fn edit(&mut self, index: usize, value: impl Into<String>) -> Result<()> {
        let value = value.into();
        if let Err(err) = self.cell(index)?.validation.check(&value) {
            debug!("rejected edit of cell {index} with {value:?}: {err}");
            return Err(err);
        }

        debug!("cell {index} = {value:?}");
        self.mutate(|cells| cells[index].value = value);
        Ok(())
    }

    /// [`SpreadsheetGrid::edit`] addressed by position on the current page.
    pub fn edit_visible(&mut self, visible: usize, value: impl Into<String>) -> Result<()> {
        let index = self.visible_to_absolute(visible)?;
        self.edit(index, value)
    }

    /// Make `index` the single selected cell.
    pub fn select(&mut self, index: usize) -> Result<()> {
        self.cell(index)?;
        trace!("selected cell {index}");
        self.selected = Some(index);
        Ok(())
    }

    pub fn select_visible(&mut self, visible: usize) -> Result<()> {
        let index = self.visible_to_absolute(visible)?;
        self.select(index)
    }

    /// Merge `patch` into the selected cell's formatting.
    pub fn apply_format(&mut self, patch: Formatting) -> Result<()> {
        let Some(index) = self.selected else {
            debug!("format refused: no cell selected");
            return Err(GridError::NoSelection);
        };
        self.cell(index)?;

        debug!("cell {index} formatting += {patch:?}");
        self.mutate(|cells| cells[index].formatting.merge(&patch));
        Ok(())
    }

    /// Restore the previous snapshot. Returns false if there was none.
    pub fn undo(&mut self) -> bool {
        match self.history.undo(Arc::clone(&self.cells)) {
            Some(previous) => {
                self.cells = previous;
                debug!("undo (depth now {})", self.history.undo_depth());
                true
            }
            None => false,
        }
    }

    /// Re-apply the most recently undone snapshot. Returns false if there was none.
    pub fn redo(&mut self) -> bool {
        match self.history.redo(Arc::clone(&self.cells)) {
            Some(next) => {
                self.cells = next;
                debug!("redo (depth now {})", self.history.redo_depth());
                true
            }
            None => false,
        }
    }

    pub fn prev_page(&mut self) -> bool {
        let moved = self.pager.previous();
        if moved {
            trace!("page {}", self.pager.page());
        }
        moved
    }

    pub fn next_page(&mut self) -> bool {
        let moved = self.pager.next();
        if moved {
            trace!("page {}", self.pager.page());
        }
        moved
    }

    /// Store the search box contents. Nothing reads it back except the UI.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }
}
