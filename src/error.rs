use std::fmt;

use thiserror::Error;

use crate::coordinate::Coordinate;

pub type Result<T> = std::result::Result<T, Error>;

/// What the caller used to name a square that does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locator {
    RowColumn(i32, i32),
    Index(usize),
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RowColumn(row, column) => write!(f, "row {row}, column {column}"),
            Self::Index(index) => write!(f, "index {index}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("{0} is not a playable square")]
    OutOfRange(Locator),
    #[error("{from} and {to} are not jump-adjacent")]
    NotJumpAdjacent { from: Coordinate, to: Coordinate },
    #[error("no movable checker #{index} (only {available} available)")]
    NoSuchChecker { index: usize, available: usize },
    #[error("no destination #{index} (only {available} available)")]
    NoSuchDestination { index: usize, available: usize },
    #[error("the game is not over yet")]
    GameNotOver,
    #[error("the game is already over")]
    GameIsOver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let err = Error::OutOfRange(Locator::RowColumn(0, 0));
        assert_eq!(err.to_string(), "row 0, column 0 is not a playable square");

        let err = Error::NoSuchChecker {
            index: 4,
            available: 4,
        };
        assert!(err.to_string().contains("#4"));
    }
}
