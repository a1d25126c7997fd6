//! Spreadsheet widget state and handlers (UI-agnostic).

mod action;
mod ops;
mod state;

pub use action::{ActionOutcome, GridAction};
pub use state::{CELL_COUNT, Snapshot, SpreadsheetGrid};
