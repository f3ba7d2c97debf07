use log::debug;
use serde::Deserialize;

use crate::board::PieceSet;
use crate::coordinate::Coordinate;
use crate::error::{Error, Result};
use crate::piece::{Checker, Side};
use crate::rules::RulesEngine;
use crate::types::{ActionRecord, GameResult, GameState, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameOptions {
    /// Report the board as flipped while Second is to move.
    pub auto_flip: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self { auto_flip: true }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    ToMove(Side),
    GameOver { winner: Side },
}

/// Owns one game: the pieces, whose turn it is, and any multi-jump in progress.
#[derive(Debug, Clone)]
pub struct TurnController {
    board: PieceSet,
    side: Side,
    winner: Option<Side>,
    /// Square of the checker that has to continue jumping, if any.
    chain: Option<Coordinate>,
    last_action: Option<ActionRecord>,
    options: GameOptions,
}

impl TurnController {
    pub fn new() -> Self {
        Self::with_options(GameOptions::default())
    }

    pub fn with_options(options: GameOptions) -> Self {
        Self {
            board: PieceSet::new(),
            side: Side::First,
            winner: None,
            chain: None,
            last_action: None,
            options,
        }
    }

    /// Starts from an arbitrary position with `side` to move. The position may already be
    /// finished.
    pub fn from_position(board: PieceSet, side: Side) -> Self {
        let mut game = Self {
            board,
            side,
            winner: None,
            chain: None,
            last_action: None,
            options: GameOptions::default(),
        };
        game.settle();
        game
    }

    pub fn reset(&mut self) {
        self.board.reset();
        self.side = Side::First;
        self.winner = None;
        self.chain = None;
        self.last_action = None;
        debug!("new game, {} to move", self.side);
    }

    pub fn board(&self) -> &PieceSet {
        &self.board
    }

    pub fn rules(&self) -> RulesEngine<'_> {
        RulesEngine::new(&self.board)
    }

    pub fn state(&self) -> TurnState {
        match self.winner {
            Some(winner) => TurnState::GameOver { winner },
            None => TurnState::ToMove(self.side),
        }
    }

    /// The side whose turn it is. After the game ends this is the side that would have moved
    /// next.
    pub fn current_side(&self) -> Side {
        self.side
    }

    pub fn is_game_over(&self) -> bool {
        self.winner.is_some()
    }

    pub fn winner(&self) -> Result<Side> {
        self.winner.ok_or(Error::GameNotOver)
    }

    pub fn is_flipped(&self) -> bool {
        self.options.auto_flip && self.side == Side::Second
    }

    pub fn last_action(&self) -> Option<ActionRecord> {
        self.last_action
    }

    /// Checkers the side to move may pick, ascending by coordinate index. During a multi-jump
    /// this is only the jumping checker; once the game is over it is empty.
    pub fn movable_checkers(&self) -> Vec<Checker> {
        if self.is_game_over() {
            return Vec::new();
        }
        match self.chain {
            Some(coord) => self.board.checker_at(coord).into_iter().collect(),
            None => self.rules().movable_checkers(self.side),
        }
    }

    /// Destinations of the `checker_index`-th entry of [`Self::movable_checkers`].
    pub fn legal_destinations(&self, checker_index: usize) -> Result<Vec<Coordinate>> {
        let checker = self.movable_checker(checker_index)?;
        Ok(self.rules().legal_destinations(checker))
    }

    /// Destinations of the checker on `coord`, or nothing if that checker may not act now.
    pub fn destinations_from(&self, coord: Coordinate) -> Vec<Coordinate> {
        self.movable_checkers()
            .into_iter()
            .find(|checker| checker.coordinate == coord)
            .map(|checker| self.rules().legal_destinations(checker))
            .unwrap_or_default()
    }

    /// Plays destination `destination_index` of movable checker `checker_index`.
    ///
    /// A capture that leaves the same checker with another capture keeps the turn; everything
    /// else passes it to the other side.
    pub fn apply_chosen_action(
        &mut self,
        checker_index: usize,
        destination_index: usize,
    ) -> Result<ActionRecord> {
        if self.is_game_over() {
            return Err(Error::GameIsOver);
        }

        let checker = self.movable_checker(checker_index)?;
        let destinations = self.rules().legal_destinations(checker);
        let to = destinations
            .get(destination_index)
            .copied()
            .ok_or(Error::NoSuchDestination {
                index: destination_index,
                available: destinations.len(),
            })?;

        let side = self.side;
        let from = checker.coordinate;
        let captured = if from.is_jump_adjacent_to(to) {
            Some(self.board.apply_jump(from, to)?)
        } else {
            self.board.apply_move(from, to);
            None
        };
        let promoted = self.board.promote_if_eligible(to);

        let keeps_jumping = captured.is_some()
            && self
                .board
                .checker_at(to)
                .is_some_and(|moved| self.rules().has_jump(moved));

        if keeps_jumping {
            self.chain = Some(to);
            debug!("{side} {from} -> {to}, must keep jumping");
        } else {
            self.chain = None;
            self.side = side.other();
            debug!("{side} {from} -> {to}, {} to move", self.side);
        }

        let record = ActionRecord {
            side,
            from,
            to,
            captured,
            promoted,
            turn_passed: !keeps_jumping,
        };
        self.last_action = Some(record);
        self.settle();

        Ok(record)
    }

    pub fn to_game_state(&self) -> GameState {
        let (first_count, second_count) = self.board.count();
        GameState {
            board: self.board.to_array().to_vec(),
            current_side: self.side,
            first_count,
            second_count,
            is_game_over: self.is_game_over(),
            winner: self.winner,
            flipped: self.is_flipped(),
            movable: self
                .movable_checkers()
                .into_iter()
                .map(|checker| Square::from(checker.coordinate))
                .collect(),
            last_action: self.last_action,
        }
    }

    pub fn to_game_result(&self) -> Result<GameResult> {
        let winner = self.winner()?;
        let (first_count, second_count) = self.board.count();
        Ok(GameResult {
            winner,
            first_count,
            second_count,
        })
    }

    fn movable_checker(&self, checker_index: usize) -> Result<Checker> {
        let movable = self.movable_checkers();
        movable
            .get(checker_index)
            .copied()
            .ok_or(Error::NoSuchChecker {
                index: checker_index,
                available: movable.len(),
            })
    }

    fn settle(&mut self) {
        let rules = RulesEngine::new(&self.board);
        if !rules.is_game_over() {
            return;
        }
        if let Ok(winner) = rules.winner() {
            self.winner = Some(winner);
            self.chain = None;
            debug!("game over, {winner} wins");
        }
    }
}

impl Default for TurnController {
    fn default() -> Self {
        Self::new()
    }
}
