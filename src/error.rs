use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BoardError {
    #[error("board dimensions must be positive, got {width}x{height}")]
    InvalidDimension { width: usize, height: usize },
    #[error("board of {width}x{height} cells does not fit in memory")]
    TooLarge { width: usize, height: usize },
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unexpected character {found:?} at row {row}, column {column}")]
    InvalidCell {
        row: usize,
        column: usize,
        found: char,
    },
    #[error("fill probability must be within 0..=1, got {0}")]
    InvalidFill(f32),
}
