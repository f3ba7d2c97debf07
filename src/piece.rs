use std::fmt;

use serde::Serialize;

use crate::coordinate::{BOARD_SIZE, Coordinate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Side {
    /// Starts on rows 5..=7 and moves toward row 0. Moves first.
    First,
    /// Starts on rows 0..=2 and moves toward row 7.
    Second,
}

impl Side {
    pub fn other(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }

    /// The row on which an uncrowned piece of this side is crowned.
    pub fn crowning_row(self) -> u8 {
        match self {
            Self::First => 0,
            Self::Second => BOARD_SIZE as u8 - 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => f.write_str("First"),
            Self::Second => f.write_str("Second"),
        }
    }
}

/// Which diagonals a piece may travel along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    /// Toward row 0.
    Up,
    /// Toward row 7.
    Down,
    Both,
}

impl Heading {
    pub fn allows(self, from: Coordinate, to: Coordinate) -> bool {
        match self {
            Self::Up => to.is_above(from),
            Self::Down => to.is_below(from),
            Self::Both => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Piece {
    side: Side,
    crowned: bool,
}

impl Piece {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            crowned: false,
        }
    }

    pub fn king(side: Side) -> Self {
        Self {
            side,
            crowned: true,
        }
    }

    pub fn side(self) -> Side {
        self.side
    }

    pub fn is_crowned(self) -> bool {
        self.crowned
    }

    /// Returns the crowned version of this piece. Crowning a king is a no-op.
    pub fn crown(self) -> Self {
        Self::king(self.side)
    }

    pub fn heading(self) -> Heading {
        match (self.side, self.crowned) {
            (_, true) => Heading::Both,
            (Side::First, false) => Heading::Up,
            (Side::Second, false) => Heading::Down,
        }
    }

    /// Single-character glyph for text boards.
    pub fn symbol(self) -> char {
        match (self.side, self.crowned) {
            (Side::First, false) => '+',
            (Side::First, true) => 'X',
            (Side::Second, false) => 'o',
            (Side::Second, true) => 'O',
        }
    }
}

/// A piece together with the square it occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Checker {
    pub coordinate: Coordinate,
    pub piece: Piece,
}

impl Checker {
    pub fn side(self) -> Side {
        self.piece.side()
    }
}
