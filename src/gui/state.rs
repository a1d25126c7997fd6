//! UI-specific state (layout, focus).

use pagegrid_core::Breakpoints;

/// Layout and focus state.
pub struct GuiState {
    /// Window widths (in points) at which the grid widens.
    pub breakpoints: Breakpoints,

    /// Number of grid columns for the current window width.
    pub columns: usize,

    /// True if we should move keyboard focus to the search box this frame.
    pub request_focus_search: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            breakpoints: Breakpoints::PIXELS,
            columns: Breakpoints::NARROW_COLUMNS,
            request_focus_search: false,
        }
    }
}

impl GuiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute the column count from the window width.
    pub fn update_columns(&mut self, width: f32) {
        let columns = self.breakpoints.columns_for(width.max(0.0) as u32);
        if columns != self.columns {
            log::trace!("layout: {} -> {} columns at {width:.0}pt", self.columns, columns);
            self.columns = columns;
        }
    }
}
