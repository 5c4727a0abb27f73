//! Simple paths through the board and the words they spell.
//!
//! A [`PathState`] owns a fixed-size occupancy record: a `u64` bitmask of
//! visited cells plus, for every visited cell, the index of the cell it was
//! entered from. Extending a path copies that record by value, so sibling
//! paths never share state.

use crate::board::{idx_to_pos, pos_to_idx, Board, Position, MAX_CELLS};
use crate::error::PathError;
use crate::geometry;

/// Predecessor marker stored for the first cell of a path.
const START: u8 = u8::MAX;

/// The predecessor recorded for an occupied cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Link {
    /// The cell where the path begins.
    Start,
    /// The cell was entered from this position.
    From(Position),
}

/// One simple path on the board plus the word it spells.
///
/// Immutable once built; [`PathState::extend`] returns a new state and
/// leaves `self` untouched so it can spawn further siblings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathState {
    /// Bit `i` is set if cell `i` is on the path.
    occupied: u64,
    /// Predecessor cell index for each occupied cell, [`START`] for the first.
    predecessors: [u8; MAX_CELLS],
    /// Board dimension N.
    dim: u8,
    /// Cell index of the path's endpoint.
    last: u8,
    /// Number of cells on the path.
    len: u8,
    word: String,
}

/// Appends the letter for one cell, expanding `Q` to `QU`.
#[inline]
fn push_letter(word: &mut String, letter: char) {
    word.push(letter);
    if letter == 'Q' {
        word.push('U');
    }
}

impl PathState {
    /// Starts a one-cell path at `(row, col)`.
    pub fn start(board: &Board, row: usize, col: usize) -> Result<Self, PathError> {
        if !board.contains(row, col) {
            return Err(PathError::OutOfBounds {
                row,
                col,
                dim: board.dim(),
            });
        }

        let cell = pos_to_idx((row, col), board.dim());
        let mut predecessors = [0u8; MAX_CELLS];
        predecessors[cell] = START;

        let mut word = String::with_capacity(4);
        push_letter(&mut word, board.letter(cell));

        Ok(Self {
            occupied: 1 << cell,
            predecessors,
            dim: board.dim() as u8,
            last: cell as u8,
            len: 1,
            word,
        })
    }

    /// Returns a new path that continues this one into `(row, col)`.
    ///
    /// The target must be on the board and not yet visited. Adjacency to the
    /// current endpoint is the caller's responsibility; the search only
    /// extends through [`PathState::valid_neighbors`].
    pub fn extend(&self, board: &Board, row: usize, col: usize) -> Result<Self, PathError> {
        if !board.contains(row, col) {
            return Err(PathError::OutOfBounds {
                row,
                col,
                dim: board.dim(),
            });
        }

        let cell = pos_to_idx((row, col), board.dim());
        if self.occupied & (1 << cell) != 0 {
            return Err(PathError::Occupied { row, col });
        }

        let mut predecessors = self.predecessors;
        predecessors[cell] = self.last;

        let mut word = String::with_capacity(self.word.len() + 2);
        word.push_str(&self.word);
        push_letter(&mut word, board.letter(cell));

        Ok(Self {
            occupied: self.occupied | (1 << cell),
            predecessors,
            dim: self.dim,
            last: cell as u8,
            len: self.len + 1,
            word,
        })
    }

    /// The letters spelled by this path, with `Q` expanded to `QU`.
    #[inline]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// The path's current endpoint.
    #[inline]
    pub fn last_position(&self) -> Position {
        idx_to_pos(self.last as usize, self.dim as usize)
    }

    /// Number of cells on the path.
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Always `false`; every path holds at least its start cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Dimension of the board this path was built on.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim as usize
    }

    /// Returns `true` if `(row, col)` is on the path.
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        let dim = self.dim();
        row < dim && col < dim && self.occupied & (1 << pos_to_idx((row, col), dim)) != 0
    }

    /// The predecessor marker for `(row, col)`, or `None` if the cell is not on the path.
    pub fn predecessor(&self, row: usize, col: usize) -> Option<Link> {
        if !self.is_occupied(row, col) {
            return None;
        }
        let dim = self.dim();
        match self.predecessors[pos_to_idx((row, col), dim)] {
            START => Some(Link::Start),
            prev => Some(Link::From(idx_to_pos(prev as usize, dim))),
        }
    }

    /// The full NxN occupancy grid: `None` for free cells, otherwise the
    /// cell's predecessor marker.
    pub fn occupancy(&self) -> Vec<Vec<Option<Link>>> {
        let dim = self.dim();
        (0..dim)
            .map(|row| (0..dim).map(|col| self.predecessor(row, col)).collect())
            .collect()
    }

    /// The path's cells from start to end, traced back through the predecessors.
    pub fn cells(&self) -> Vec<Position> {
        let dim = self.dim();
        let mut cells = Vec::with_capacity(self.len());
        let mut cell = self.last;
        loop {
            cells.push(idx_to_pos(cell as usize, dim));
            match self.predecessors[cell as usize] {
                START => break,
                prev => cell = prev,
            }
        }
        cells.reverse();
        cells
    }

    /// Neighbors of the endpoint that are on the board and not yet visited,
    /// in king-move order.
    pub fn valid_neighbors(&self) -> impl Iterator<Item = Position> + '_ {
        let dim = self.dim();
        geometry::neighbors(self.last_position(), dim)
            .filter(move |&pos| self.occupied & (1 << pos_to_idx(pos, dim)) == 0)
    }
}
