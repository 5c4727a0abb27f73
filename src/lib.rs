//! Boggle Word Search Library
//!
//! Enumerates every simple path on a square letter grid under king-move
//! adjacency and reports the paths that spell dictionary words.

pub mod board;
pub mod dice;
pub mod dictionary;
pub mod error;
pub mod geometry;
pub mod path;
pub mod persistence;
pub mod solver;
pub mod storage;

pub use board::{format_path, Board, Position};
pub use dictionary::{Dictionary, WordList};
pub use error::{BoardError, LoadError, PathError, SearchError, StorageError};
pub use path::{Link, PathState};
pub use solver::{solve, FoundWord, FoundWords, SearchConfig, SearchOutcome, MIN_WORD_LENGTH};
pub use storage::{Discipline, Queue, Stack, Storage};
