//! Responsive column layout for the cell grid.

/// Viewport widths at which the grid widens from 2 to 3 to 5 columns.
///
/// Units are whatever the front-end measures in (pixels, terminal columns).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Breakpoints {
    pub medium: u32,
    pub large: u32,
}

impl Breakpoints {
    pub const NARROW_COLUMNS: usize = 2;
    pub const MEDIUM_COLUMNS: usize = 3;
    pub const LARGE_COLUMNS: usize = 5;

    /// Pixel breakpoints for desktop windows.
    pub const PIXELS: Breakpoints = Breakpoints {
        medium: 768,
        large: 1024,
    };

    /// Character-cell breakpoints for terminals.
    pub const TERMINAL: Breakpoints = Breakpoints {
        medium: 80,
        large: 120,
    };

    /// Column count for a viewport of the given width.
    pub fn columns_for(&self, width: u32) -> usize {
        if width >= self.large {
            Self::LARGE_COLUMNS
        } else if width >= self.medium {
            Self::MEDIUM_COLUMNS
        } else {
            Self::NARROW_COLUMNS
        }
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self::PIXELS
    }
}

/// Rows needed to show `items` cells in `columns` columns.
pub fn rows_for(items: usize, columns: usize) -> usize {
    items.div_ceil(columns.max(1))
}
