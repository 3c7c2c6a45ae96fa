//! Rectangular game board with gravity-fed columns.
//!
//! Cells are stored row-major. Row 0 is the top of the board; tokens enter
//! a column from the top and settle in the lowest empty cell.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Cell, Token};

/// A `rows x cols` grid of cells.
///
/// Always holds exactly `rows * cols` cells; deserialization rejects any
/// other count.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

/// Unchecked wire form of a `Board`.
#[derive(Deserialize)]
struct RawBoard {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl TryFrom<RawBoard> for Board {
    type Error = String;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        if raw.rows.checked_mul(raw.cols) != Some(raw.cells.len()) {
            return Err(format!(
                "{}x{} board cannot hold {} cells",
                raw.rows,
                raw.cols,
                raw.cells.len()
            ));
        }
        Ok(Self {
            rows: raw.rows,
            cols: raw.cols,
            cells: raw.cells,
        })
    }
}

impl Board {
    /// Create an all-empty board.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    /// Build a board from a row-major matrix of raw ids (0 = empty).
    ///
    /// Returns `None` if the rows are ragged.
    pub fn from_rows(grid: &[Vec<u8>]) -> Option<Self> {
        let rows = grid.len();
        let cols = grid.first().map_or(0, Vec::len);
        if grid.iter().any(|row| row.len() != cols) {
            return None;
        }

        let cells = grid
            .iter()
            .flat_map(|row| row.iter().map(|&raw| Token::decode_cell(raw)))
            .collect();

        Some(Self { rows, cols, cells })
    }

    /// Export as a row-major matrix of raw ids (0 = empty).
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.rows)
            .map(|row| self.row(row).map(Token::encode_cell).collect())
            .collect()
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get a cell. Out-of-range coordinates read as empty.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        if row < self.rows && col < self.cols {
            self.cells[row * self.cols + col]
        } else {
            None
        }
    }

    /// Overwrite a cell. Returns false if out of range.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        if row < self.rows && col < self.cols {
            self.cells[row * self.cols + col] = cell;
            true
        } else {
            false
        }
    }

    /// Iterate over one row, left to right.
    pub fn row(&self, row: usize) -> impl Iterator<Item = Cell> + '_ {
        (0..self.cols).map(move |col| self.get(row, col))
    }

    /// Iterate over one column, top to bottom.
    pub fn column(&self, col: usize) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows).map(move |row| self.get(row, col))
    }

    /// Iterate over every cell, row-major.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// A column accepts a token iff its top cell is empty.
    #[must_use]
    pub fn is_open(&self, col: usize) -> bool {
        col < self.cols && self.rows > 0 && self.get(0, col).is_none()
    }

    /// Open columns in ascending order.
    pub fn open_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.cols).filter(move |&col| self.is_open(col))
    }

    /// No empty cell remains.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Drop a token into a column.
    ///
    /// The token settles in the lowest empty cell. Returns the row it landed
    /// in, or `None` if the column is full or out of range.
    pub fn drop_token(&mut self, col: usize, token: Token) -> Option<usize> {
        if !self.is_open(col) {
            return None;
        }
        let row = (0..self.rows).rev().find(|&row| self.get(row, col).is_none())?;
        self.cells[row * self.cols + col] = Some(token);
        Some(row)
    }

    /// Every column's tokens form a contiguous run ending at the bottom row.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        (0..self.cols).all(|col| {
            let mut seen_token = false;
            self.column(col).all(|cell| {
                if cell.is_some() {
                    seen_token = true;
                    true
                } else {
                    !seen_token
                }
            })
        })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for (col, cell) in self.row(row).enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                match cell {
                    Some(token) => write!(f, "{}", token)?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
