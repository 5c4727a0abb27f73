//! Board representation for the word-path search.
//!
//! The board is a square NxN grid of uppercase letters, stored as a flat
//! row-major array. Cells are addressed either by `(row, col)` or by their
//! linear index `row * dim + col`, which is what the per-path occupancy
//! mask is keyed on.

use std::fmt;

use rand::Rng;

use crate::dice;
use crate::error::BoardError;
use crate::path::PathState;

/// A grid position as `(row, col)`.
pub type Position = (usize, usize);

/// Largest supported board dimension.
///
/// Paths track occupied cells in a `u64`, so a board may hold at most 64 cells.
pub const MAX_DIM: usize = 8;

/// Maximum number of cells on any board (`MAX_DIM^2`).
pub const MAX_CELLS: usize = MAX_DIM * MAX_DIM;

/// Converts a `(row, col)` position to a linear cell index.
#[inline(always)]
pub const fn pos_to_idx(pos: Position, dim: usize) -> usize {
    pos.0 * dim + pos.1
}

/// Converts a linear cell index back to a `(row, col)` position.
#[inline(always)]
pub const fn idx_to_pos(cell_index: usize, dim: usize) -> Position {
    (cell_index / dim, cell_index % dim)
}

/// An immutable NxN grid of letters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    dim: usize,
    letters: Vec<char>,
}

impl Board {
    /// Builds a board from `dim * dim` letters in row-major order.
    ///
    /// Letters are upper-cased. Extra letters past `dim * dim` are ignored.
    pub fn from_letters<I>(dim: usize, letters: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = char>,
    {
        check_dimension(dim)?;

        let letters: Vec<char> = letters
            .into_iter()
            .take(dim * dim)
            .map(|letter| letter.to_ascii_uppercase())
            .collect();

        if letters.len() < dim * dim {
            let found_rows = letters.len() / dim;
            return Err(BoardError::ShortRow {
                row: found_rows,
                expected: dim,
                found: letters.len() % dim,
            });
        }

        Ok(Self { dim, letters })
    }

    /// Parses a board from text.
    ///
    /// Reads `dim` lines. Each line is upper-cased and any non-letter
    /// characters (spaces, commas, digits) are skipped; the first `dim`
    /// letters become that row. Lines and letters beyond the board are ignored.
    pub fn parse(dim: usize, text: &str) -> Result<Self, BoardError> {
        check_dimension(dim)?;

        let mut letters = Vec::with_capacity(dim * dim);
        let mut lines = text.lines();

        for row in 0..dim {
            let line = lines.next().ok_or(BoardError::MissingRows {
                expected: dim,
                found: row,
            })?;

            let row_letters: Vec<char> = line
                .to_uppercase()
                .chars()
                .filter(|c| c.is_alphabetic())
                .take(dim)
                .collect();

            if row_letters.len() < dim {
                return Err(BoardError::ShortRow {
                    row,
                    expected: dim,
                    found: row_letters.len(),
                });
            }
            letters.extend(row_letters);
        }

        Ok(Self { dim, letters })
    }

    /// Rolls a fresh board from the standard Boggle dice.
    pub fn random<R: Rng + ?Sized>(dim: usize, rng: &mut R) -> Result<Self, BoardError> {
        check_dimension(dim)?;
        Ok(Self {
            dim,
            letters: dice::roll(dim * dim, rng),
        })
    }

    /// Board dimension N.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Returns `true` if `(row, col)` lies on the board.
    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.dim && col < self.dim
    }

    /// Returns the letter at `(row, col)`.
    pub fn letter_at(&self, row: usize, col: usize) -> Result<char, BoardError> {
        if !self.contains(row, col) {
            return Err(BoardError::OutOfBounds {
                row,
                col,
                dim: self.dim,
            });
        }
        Ok(self.letters[pos_to_idx((row, col), self.dim)])
    }

    /// Letter lookup by linear index; callers guarantee the index is in range.
    #[inline(always)]
    pub(crate) fn letter(&self, cell_index: usize) -> char {
        self.letters[cell_index]
    }
}

fn check_dimension(dim: usize) -> Result<(), BoardError> {
    if dim == 0 || dim > MAX_DIM {
        return Err(BoardError::InvalidDimension(dim));
    }
    Ok(())
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.letters.chunks(self.dim) {
            for (col, letter) in row.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{letter}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Formats a path as a grid of step numbers.
///
/// Cells on the path show their 1-based position in the path; all other
/// cells show `.`. Columns are right-aligned to the widest step number.
pub fn format_path(path: &PathState) -> String {
    let dim = path.dim();
    let mut steps = vec![0usize; dim * dim];
    for (step, &pos) in path.cells().iter().enumerate() {
        steps[pos_to_idx(pos, dim)] = step + 1;
    }

    let width = path.len().to_string().len();
    let mut output = String::new();
    for row in steps.chunks(dim) {
        for (col, &step) in row.iter().enumerate() {
            if col > 0 {
                output.push(' ');
            }
            if step == 0 {
                output.push_str(&format!("{:>width$}", '.'));
            } else {
                output.push_str(&format!("{:>width$}", step));
            }
        }
        output.push('\n');
    }

    output
}
