//! pagegrid-core - UI-agnostic spreadsheet widget.
//!
//! A fixed grid of text cells with per-cell validation, text alignment,
//! 50-cell pagination and snapshot undo/redo. Front-ends own a
//! [`SpreadsheetGrid`] and feed it [`GridAction`]s.

pub mod cell;
pub mod error;
pub mod grid;
pub mod history;
pub mod layout;
pub mod pager;
pub mod validation;

pub use cell::{Cell, Formatting, TextAlign};
pub use error::{GridError, Result};
pub use grid::{ActionOutcome, CELL_COUNT, GridAction, Snapshot, SpreadsheetGrid};
pub use layout::Breakpoints;
pub use pager::{PAGE_SIZE, Pager};
pub use validation::{LETTERS_PATTERN, TextPattern, Validation};
