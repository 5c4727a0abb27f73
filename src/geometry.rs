//! King-move adjacency on a square grid.
//!
//! A cell has up to eight neighbors: the cells that differ by at most one in
//! both row and column. The order of [`KING_MOVES`] fixes the order in which
//! paths are extended, and therefore the order states reach the store.

use crate::board::Position;

/// The eight `(d_row, d_col)` offsets, in row-major delta order.
///
/// Ordering note: changing this changes which representative path is kept
/// for a word reachable in more than one way.
pub const KING_MOVES: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `pos`, returning `None` if the result leaves a `dim`x`dim` grid.
#[inline]
pub fn step(pos: Position, delta: (isize, isize), dim: usize) -> Option<Position> {
    let row = pos.0.checked_add_signed(delta.0)?;
    let col = pos.1.checked_add_signed(delta.1)?;
    (row < dim && col < dim).then_some((row, col))
}

/// All in-bounds king-move neighbors of `pos`, in [`KING_MOVES`] order.
pub fn neighbors(pos: Position, dim: usize) -> impl Iterator<Item = Position> {
    KING_MOVES
        .iter()
        .filter_map(move |&delta| step(pos, delta, dim))
}

/// Returns `true` if `a` and `b` are distinct cells at Chebyshev distance 1.
#[inline]
pub fn is_adjacent(a: Position, b: Position) -> bool {
    let d_row = a.0.abs_diff(b.0);
    let d_col = a.1.abs_diff(b.1);
    d_row.max(d_col) == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_exclude_origin_and_are_unique() {
        for (i, a) in KING_MOVES.iter().enumerate() {
            assert_ne!(*a, (0, 0), "Move {i} is the null move");
            for b in &KING_MOVES[i + 1..] {
                assert_ne!(a, b, "Duplicate move {a:?}");
            }
        }
    }

    #[test]
    fn test_neighbor_counts() {
        // corner, edge and interior cells on a 3x3 board
        assert_eq!(neighbors((0, 0), 3).count(), 3);
        assert_eq!(neighbors((0, 1), 3).count(), 5);
        assert_eq!(neighbors((1, 1), 3).count(), 8);
        assert_eq!(neighbors((0, 0), 1).count(), 0);
    }

    #[test]
    fn test_neighbors_follow_move_order() {
        let found: Vec<Position> = neighbors((0, 1), 2).collect();
        assert_eq!(found, vec![(0, 0), (1, 0), (1, 1)]);
    }

    #[test]
    fn test_step_bounds() {
        assert_eq!(step((0, 0), (-1, 0), 4), None);
        assert_eq!(step((3, 3), (1, 1), 4), None);
        assert_eq!(step((2, 2), (1, -1), 4), Some((3, 1)));
    }

    #[test]
    fn test_every_neighbor_is_adjacent() {
        let dim = 4;
        for row in 0..dim {
            for col in 0..dim {
                for next in neighbors((row, col), dim) {
                    assert!(
                        is_adjacent((row, col), next),
                        "({row},{col}) -> {next:?} is not adjacent"
                    );
                }
            }
        }
        assert!(!is_adjacent((1, 1), (1, 1)));
        assert!(!is_adjacent((0, 0), (2, 1)));
    }
}
