use std::fmt;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::error::{Error, Locator, Result};

pub const BOARD_SIZE: usize = 8;
pub const N_POSITIONS: usize = BOARD_SIZE * BOARD_SIZE / 2;
const DIAGONALS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// `(row, column)` of every playable square, in index order.
static SQUARES: Lazy<[(u8, u8); N_POSITIONS]> = Lazy::new(|| {
    let mut squares = [(0u8, 0u8); N_POSITIONS];
    let mut next = 0;
    for row in 0..BOARD_SIZE as i32 {
        for column in 0..BOARD_SIZE as i32 {
            if Coordinate::is_valid(row, column) {
                squares[next] = (row as u8, column as u8);
                next += 1;
            }
        }
    }
    debug_assert_eq!(next, N_POSITIONS);
    squares
});

/// One of the 32 playable (dark) squares.
///
/// Row 0 is the row farthest from side First; column 0 is on First's left. Squares are numbered
/// row by row, left to right, from 0 to 31. A coordinate is just that number, so equality,
/// ordering and hashing all go through the index.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Coordinate(u8);

impl Coordinate {
    pub fn from_row_column(row: i32, column: i32) -> Result<Self> {
        if !Self::is_valid(row, column) {
            return Err(Error::OutOfRange(Locator::RowColumn(row, column)));
        }
        Ok(Self(((row * BOARD_SIZE as i32 + column) / 2) as u8))
    }

    pub fn from_index(index: usize) -> Result<Self> {
        if index >= N_POSITIONS {
            return Err(Error::OutOfRange(Locator::Index(index)));
        }
        Ok(Self(index as u8))
    }

    /// Only for indices already known to be in range, such as bitboard bit positions.
    pub(crate) fn from_index_unchecked(index: usize) -> Self {
        debug_assert!(index < N_POSITIONS, "index {index} out of range");
        Self(index as u8)
    }

    pub fn is_valid(row: i32, column: i32) -> bool {
        let size = BOARD_SIZE as i32;
        (0..size).contains(&row) && (0..size).contains(&column) && (row + column) % 2 == 1
    }

    /// Every playable square in index order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..N_POSITIONS).map(Self::from_index_unchecked)
    }

    pub fn row(self) -> u8 {
        SQUARES[self.index()].0
    }

    pub fn column(self) -> u8 {
        SQUARES[self.index()].1
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// True when `self` sits on a lower-numbered row than `other`.
    pub fn is_above(self, other: Coordinate) -> bool {
        self.row() < other.row()
    }

    pub fn is_below(self, other: Coordinate) -> bool {
        self.row() > other.row()
    }

    pub fn is_adjacent_to(self, other: Coordinate) -> bool {
        self.distance_to(other) == Some(1)
    }

    pub fn is_jump_adjacent_to(self, other: Coordinate) -> bool {
        self.distance_to(other) == Some(2)
    }

    /// Returns the square a jump from `self` to `other` passes over.
    pub fn find_jumped_position(self, other: Coordinate) -> Result<Coordinate> {
        if !self.is_jump_adjacent_to(other) {
            return Err(Error::NotJumpAdjacent {
                from: self,
                to: other,
            });
        }
        let row = (self.row() as i32 + other.row() as i32) / 2;
        let column = (self.column() as i32 + other.column() as i32) / 2;
        Self::from_row_column(row, column)
    }

    pub fn adjacent_coordinates(self) -> impl Iterator<Item = Coordinate> {
        self.coordinates_at(1)
    }

    pub fn jump_adjacent_coordinates(self) -> impl Iterator<Item = Coordinate> {
        self.coordinates_at(2)
    }

    /// Diagonal neighbours at `distance`, up-left, up-right, down-left, down-right, skipping
    /// anything off the board.
    pub(crate) fn coordinates_at(self, distance: i32) -> impl Iterator<Item = Coordinate> {
        let row = self.row() as i32;
        let column = self.column() as i32;
        DIAGONALS.into_iter().filter_map(move |(dr, dc)| {
            Self::from_row_column(row + dr * distance, column + dc * distance).ok()
        })
    }

    fn distance_to(self, other: Coordinate) -> Option<u8> {
        let dr = self.row().abs_diff(other.row());
        let dc = self.column().abs_diff(other.column());
        (dr == dc).then_some(dr)
    }
}

impl fmt::Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coordinate({} @ {}, {})", self.0, self.row(), self.column())
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row(), self.column())
    }
}
