pub mod board;
pub mod coordinate;
pub mod error;
pub mod game;
pub mod piece;
pub mod rules;
pub mod types;
pub mod wasm;

pub use crate::{
    board::PieceSet,
    coordinate::{BOARD_SIZE, Coordinate, N_POSITIONS},
    error::{Error, Locator, Result},
    game::{GameOptions, TurnController, TurnState},
    piece::{Checker, Heading, Piece, Side},
    rules::RulesEngine,
    types::{ActionRecord, GameResult, GameState, Square},
};
