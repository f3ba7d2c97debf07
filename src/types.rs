use serde::Serialize;

use crate::coordinate::Coordinate;
use crate::piece::Side;

/// A board coordinate as seen by a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Square {
    pub index: u8,
    pub row: u8,
    pub col: u8,
}

impl From<Coordinate> for Square {
    fn from(coord: Coordinate) -> Self {
        Self {
            index: coord.index() as u8,
            row: coord.row(),
            col: coord.column(),
        }
    }
}

/// What a single call to `apply_chosen_action` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActionRecord {
    pub side: Side,
    pub from: Coordinate,
    pub to: Coordinate,
    /// Square of the captured checker; `None` for a plain move.
    pub captured: Option<Coordinate>,
    pub promoted: bool,
    /// Contract:
    /// - `true` when the other side is now to move.
    /// - `false` when the same checker must keep jumping. If that jump also ended the game,
    ///   nobody moves again.
    pub turn_passed: bool,
}

/// Public game state handed to presentation layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// One cell per playable square, in index order:
    /// 0=empty, 1=First, 2=Second, 3=crowned First, 4=crowned Second.
    pub board: Vec<u8>,
    pub current_side: Side,
    pub first_count: u8,
    pub second_count: u8,
    pub is_game_over: bool,
    pub winner: Option<Side>,
    /// Whether the board should be drawn from Second's point of view.
    pub flipped: bool,
    /// Checkers the side to move may pick, in selection order.
    pub movable: Vec<Square>,
    pub last_action: Option<ActionRecord>,
}

/// Final result after game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    pub winner: Side,
    pub first_count: u8,
    pub second_count: u8,
}
