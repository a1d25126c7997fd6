use crate::cell::Cell;
use crate::error::{GridError, Result};
use crate::history::History;
use crate::pager::{PAGE_SIZE, Pager};
use crate::validation::Validation;
use std::sync::Arc;

/// Number of cells in a fresh grid.
pub const CELL_COUNT: usize = 1000;

/// An immutable, shareable copy of every cell in the grid.
pub type Snapshot = Arc<Vec<Cell>>;

/// UI-agnostic state of the spreadsheet widget.
///
/// Holds the cells, the single selected index, the current page, the
/// (inert) search term and the undo/redo snapshot stacks.
pub struct SpreadsheetGrid {
    /// Current cells. Shared with history entries until the next mutation.
    pub(super) cells: Snapshot,
    /// Full-grid snapshots for undo/redo
    pub(super) history: History<Snapshot>,
    /// Absolute index of the selected cell
    pub(super) selected: Option<usize>,
    /// Current page over `cells`
    pub(super) pager: Pager,
    /// Search box contents. Not used for filtering.
    pub(super) search_term: String,
}

impl SpreadsheetGrid {
    /// 1000 empty cells, alternating numeric / letters-only, 50 per page.
    pub fn new() -> Self {
        Self::with_len(CELL_COUNT, PAGE_SIZE)
    }

    /// A grid of `len` cells with the alternating rule.
    pub fn with_len(len: usize, page_size: usize) -> Self {
        let cells = (0..len)
            .map(|index| Cell::new(Validation::alternating(index)))
            .collect();
        Self::from_cells(cells, page_size)
    }

    /// A grid over caller-supplied cells. The length is fixed from here on.
    pub fn from_cells(cells: Vec<Cell>, page_size: usize) -> Self {
        let pager = Pager::new(cells.len(), page_size);
        Self {
            cells: Arc::new(cells),
            history: History::new(),
            selected: None,
            pager,
            search_term: String::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cheap handle to the current cells (shares storage).
    pub fn snapshot(&self) -> Snapshot {
        Arc::clone(&self.cells)
    }

    pub fn cell(&self, index: usize) -> Result<&Cell> {
        self.cells.get(index).ok_or(GridError::IndexOutOfRange {
            index,
            len: self.cells.len(),
        })
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_cell(&self) -> Option<&Cell> {
        self.selected.and_then(|index| self.cells.get(index))
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    /// Cells on the current page.
    pub fn visible_cells(&self) -> &[Cell] {
        &self.cells[self.pager.range()]
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo_depth(&self) -> usize {
        self.history.undo_depth()
    }

    pub fn redo_depth(&self) -> usize {
        self.history.redo_depth()
    }
}

impl Default for SpreadsheetGrid {
    fn default() -> Self {
        Self::new()
    }
}
