//! Line detection: scan every length-`k` window in each direction.
//!
//! A window is a line iff its first cell holds a token and every cell in the
//! window holds that same token. The whole board is scanned on every call.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::core::{Board, Cell, Token};

/// Orientation of a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Left to right along a row.
    Horizontal,
    /// Top to bottom along a column.
    Vertical,
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

/// A winning run of `k` identical tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line {
    /// Topmost (then leftmost) cell of the run, as `(row, col)`.
    pub start: (usize, usize),
    pub direction: Direction,
    pub token: Token,
}

impl Line {
    /// The `k` cells covered by this line, starting at `start`.
    pub fn cells(&self, k: usize) -> impl Iterator<Item = (usize, usize)> {
        let (row, col) = self.start;
        let direction = self.direction;
        (0..k).map(move |i| match direction {
            Direction::Horizontal => (row, col + i),
            Direction::Vertical => (row + i, col),
            Direction::Diagonal => (row + i, col + i),
            Direction::AntiDiagonal => (row + i, col + k - 1 - i),
        })
    }
}

/// Window start offsets along an axis of length `len`.
fn starts(len: usize, k: usize) -> Range<usize> {
    if k == 0 || k > len {
        0..0
    } else {
        0..len - k + 1
    }
}

/// The token shared by every cell, if the window is non-empty and uniform.
fn uniform(mut cells: impl Iterator<Item = Cell>) -> Option<Token> {
    let first = cells.next()??;
    cells.all(|cell| cell == Some(first)).then_some(first)
}

fn horizontal(board: &Board, k: usize) -> Option<Line> {
    for row in 0..board.rows() {
        for col in starts(board.cols(), k) {
            if let Some(token) = uniform((0..k).map(|i| board.get(row, col + i))) {
                return Some(Line {
                    start: (row, col),
                    direction: Direction::Horizontal,
                    token,
                });
            }
        }
    }
    None
}

fn vertical(board: &Board, k: usize) -> Option<Line> {
    for col in 0..board.cols() {
        for row in starts(board.rows(), k) {
            if let Some(token) = uniform((0..k).map(|i| board.get(row + i, col))) {
                return Some(Line {
                    start: (row, col),
                    direction: Direction::Vertical,
                    token,
                });
            }
        }
    }
    None
}

/// Both diagonals of every `k x k` sub-block.
fn diagonal(board: &Board, k: usize) -> Option<Line> {
    for row in starts(board.rows(), k) {
        for col in starts(board.cols(), k) {
            if let Some(token) = uniform((0..k).map(|i| board.get(row + i, col + i))) {
                return Some(Line {
                    start: (row, col),
                    direction: Direction::Diagonal,
                    token,
                });
            }
            if let Some(token) = uniform((0..k).map(|i| board.get(row + i, col + k - 1 - i))) {
                return Some(Line {
                    start: (row, col),
                    direction: Direction::AntiDiagonal,
                    token,
                });
            }
        }
    }
    None
}

/// First line found, checking rows, then columns, then diagonals.
pub fn find_line(board: &Board, k: usize) -> Option<Line> {
    horizontal(board, k)
        .or_else(|| vertical(board, k))
        .or_else(|| diagonal(board, k))
}
