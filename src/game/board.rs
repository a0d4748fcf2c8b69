//! The 6x7 grid and gravity drops.

use serde::{Deserialize, Serialize};

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// One of the two players' markers. Red always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Red,
    Yellow,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Red => Side::Yellow,
            Side::Yellow => Side::Red,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Red => "red",
            Side::Yellow => "yellow",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Taken(Side),
}

impl Cell {
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Taken(side) => Some(side),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropError {
    #[error("column {0} is outside the board")]
    OutOfRange(i64),
    #[error("column {0} is full")]
    ColumnFull(usize),
}

/// Row 0 is the top, row 5 the bottom. Pieces only ever land on the lowest
/// empty cell of a column, so each column is a contiguous run from the bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self { cells: [[Cell::Empty; COLS]; ROWS] }
    }

    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Drop `side` into `column`, returning the row it landed on.
    ///
    /// `column` is signed because it comes straight off the wire.
    pub fn drop_piece(&mut self, column: i64, side: Side) -> Result<usize, DropError> {
        let col = usize::try_from(column)
            .ok()
            .filter(|c| *c < COLS)
            .ok_or(DropError::OutOfRange(column))?;

        let row = (0..ROWS)
            .rev()
            .find(|&r| self.cells[r][col] == Cell::Empty)
            .ok_or(DropError::ColumnFull(col))?;
        self.cells[row][col] = Cell::Taken(side);
        Ok(row)
    }

    pub fn is_full(&self) -> bool {
        self.cells[0].iter().all(|c| *c != Cell::Empty)
    }

    pub fn reset(&mut self) {
        self.cells = [[Cell::Empty; COLS]; ROWS];
    }

    /// Row-major view used for the wire format: `None` is an empty cell.
    pub fn to_grid(&self) -> Vec<Vec<Option<Side>>> {
        self.cells
            .iter()
            .map(|row| row.iter().map(|c| c.side()).collect())
            .collect()
    }

    #[cfg(test)]
    pub(crate) fn set(&mut self, row: usize, col: usize, side: Side) {
        self.cells[row][col] = Cell::Taken(side);
    }
}
