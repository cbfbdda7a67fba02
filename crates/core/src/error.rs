use thiserror::Error;

/// Errors raised by the simulation core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A raw slot lookup fell outside the buffered window.
    #[error("column slot {slot} is outside the buffered window of {len} columns")]
    OutOfRange { slot: usize, len: usize },

    /// A column window was built with the wrong number of columns.
    #[error("column window has {actual} columns, expected {expected}")]
    WindowLength { expected: usize, actual: usize },

    /// A sprite sheet is smaller than the layout requires.
    #[error("{sheet} sheet is {width}x{height}, need at least {min_width}x{min_height}")]
    SheetTooSmall {
        sheet: &'static str,
        width: u32,
        height: u32,
        min_width: u32,
        min_height: u32,
    },
}

impl CoreError {
    pub fn code(self) -> &'static str {
        match self {
            CoreError::OutOfRange { .. } => "out_of_range",
            CoreError::WindowLength { .. } => "window_length",
            CoreError::SheetTooSmall { .. } => "sheet_too_small",
        }
    }
}
