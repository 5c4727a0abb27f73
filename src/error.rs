//! Error types for board construction, path building and the search driver.

use std::path::PathBuf;

use thiserror::Error;

use crate::board::MAX_DIM;

/// Errors raised while building or querying a [`crate::board::Board`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The requested dimension cannot be represented.
    #[error("board dimension {0} is outside 1..={}", MAX_DIM)]
    InvalidDimension(usize),

    /// A lookup fell outside the grid.
    #[error("position ({row}, {col}) is outside a {dim}x{dim} board")]
    OutOfBounds { row: usize, col: usize, dim: usize },

    /// The board text ended before all rows were read.
    #[error("board has {found} rows, expected {expected}")]
    MissingRows { expected: usize, found: usize },

    /// A board row held fewer letters than the dimension.
    #[error("board row {row} has {found} letters, expected {expected}")]
    ShortRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Errors raised while constructing a [`crate::path::PathState`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("position ({row}, {col}) is outside a {dim}x{dim} board")]
    OutOfBounds { row: usize, col: usize, dim: usize },

    /// Extending into a cell the path already visits. Neighbor enumeration
    /// never yields such a cell, so this signals a broken caller.
    #[error("position ({row}, {col}) is already on the path")]
    Occupied { row: usize, col: usize },
}

/// Errors raised by a [`crate::storage::Storage`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StorageError {
    #[error("retrieve called on an empty store")]
    Empty,
}

/// Errors surfaced by a full search.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error(transparent)]
    Path(#[from] PathError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors raised while reading boards or dictionaries from disk, or writing reports.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to access {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Board(#[from] BoardError),
}
