//! Cell data structures.

use crate::validation::Validation;
use std::fmt;

/// Horizontal text alignment of a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

impl TextAlign {
    pub const ALL: [TextAlign; 3] = [TextAlign::Left, TextAlign::Center, TextAlign::Right];

    pub fn as_str(self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

impl fmt::Display for TextAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Style keys of a cell. Every key is optional so the same type doubles as
/// a partial update for [`Formatting::merge`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Formatting {
    pub text_align: Option<TextAlign>,
}

impl Formatting {
    pub fn align(text_align: TextAlign) -> Self {
        Self {
            text_align: Some(text_align),
        }
    }

    /// Shallow merge: keys set in `patch` overwrite, the rest are kept.
    pub fn merge(&mut self, patch: &Formatting) {
        if let Some(align) = patch.text_align {
            self.text_align = Some(align);
        }
    }

    /// Effective alignment, falling back to the browser default for inputs.
    pub fn effective_align(&self) -> TextAlign {
        self.text_align.unwrap_or(TextAlign::Left)
    }
}

/// A single spreadsheet entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub value: String,
    pub formatting: Formatting,
    pub validation: Validation,
}

impl Cell {
    /// Empty, center-aligned cell with the given rule.
    pub fn new(validation: Validation) -> Self {
        Self {
            value: String::new(),
            formatting: Formatting::align(TextAlign::Center),
            validation,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self.validation, Validation::Numeric)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cell_is_empty_and_centered() {
        let cell = Cell::new(Validation::Numeric);
        assert!(cell.value.is_empty());
        assert_eq!(cell.formatting.text_align, Some(TextAlign::Center));
        assert!(cell.is_numeric());
    }

    #[test]
    fn merge_overwrites_only_present_keys() {
        let mut formatting = Formatting::align(TextAlign::Center);
        formatting.merge(&Formatting::default());
        assert_eq!(formatting.text_align, Some(TextAlign::Center));

        formatting.merge(&Formatting::align(TextAlign::Right));
        assert_eq!(formatting.text_align, Some(TextAlign::Right));
    }

    #[test]
    fn effective_align_defaults_to_left() {
        assert_eq!(Formatting::default().effective_align(), TextAlign::Left);
        assert_eq!(
            Formatting::align(TextAlign::Right).effective_align(),
            TextAlign::Right
        );
    }
}
