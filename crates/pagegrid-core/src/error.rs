//! Error types for pagegrid core.

use thiserror::Error;

/// Errors returned by [`SpreadsheetGrid`](crate::SpreadsheetGrid) handlers.
///
/// Every handler leaves the grid untouched when it returns an error.
#[derive(Error, Debug)]
pub enum GridError {
    #[error("This cell only accepts numeric values.")]
    NotNumeric,

    #[error("This cell only accepts letters.")]
    NotLetters,

    #[error("Please select a cell first.")]
    NoSelection,

    #[error("Cell index {index} is out of range (grid has {len} cells)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Invalid validation pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl GridError {
    /// True for errors caused by user input, which front-ends show as an alert.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            GridError::NotNumeric | GridError::NotLetters | GridError::NoSelection
        )
    }
}

pub type Result<T> = std::result::Result<T, GridError>;

#[cfg(test)]
mod tests {
    use super::GridError;

    #[test]
    fn alert_messages_are_fixed() {
        assert_eq!(
            GridError::NotNumeric.to_string(),
            "This cell only accepts numeric values."
        );
        assert_eq!(
            GridError::NotLetters.to_string(),
            "This cell only accepts letters."
        );
        assert_eq!(
            GridError::NoSelection.to_string(),
            "Please select a cell first."
        );
    }

    #[test]
    fn out_of_range_is_not_user_facing() {
        let err = GridError::IndexOutOfRange { index: 1000, len: 1000 };
        assert!(!err.is_user_facing());
        assert!(GridError::NoSelection.is_user_facing());
    }
}
