//! Four-in-a-row scan over the whole board.

use super::board::{Board, COLS, ROWS, Side};

const RUN: usize = 4;

/// Returns the side owning a run of four, if any.
///
/// Windows are scanned horizontally, vertically, then along both diagonals.
/// A legal game can only ever produce a run for one side at a time, so the
/// scan order does not affect the answer.
pub fn detect(board: &Board) -> Option<Side> {
    // (start rows, start cols, row step, col step)
    let directions: [(std::ops::Range<usize>, std::ops::Range<usize>, isize, isize); 4] = [
        (0..ROWS, 0..COLS - 3, 0, 1),
        (0..ROWS - 3, 0..COLS, 1, 0),
        (0..ROWS - 3, 0..COLS - 3, 1, 1),
        (3..ROWS, 0..COLS - 3, -1, 1),
    ];

    for (rows, cols, dr, dc) in directions {
        for row in rows {
            for col in cols.clone() {
                if let Some(side) = run_at(board, row, col, dr, dc) {
                    return Some(side);
                }
            }
        }
    }
    None
}

fn run_at(board: &Board, row: usize, col: usize, dr: isize, dc: isize) -> Option<Side> {
    let first = board.get(row, col).side()?;
    (1..RUN as isize)
        .all(|k| {
            let r = (row as isize + k * dr) as usize;
            let c = (col as isize + k * dc) as usize;
            board.get(r, c).side() == Some(first)
        })
        .then_some(first)
}
