use crate::board::PieceSet;
use crate::coordinate::Coordinate;
use crate::error::{Error, Result};
use crate::piece::{Checker, Side};

const SIDES: [Side; 2] = [Side::First, Side::Second];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reach {
    Step,
    Jump,
}

impl Reach {
    fn distance(self) -> i32 {
        match self {
            Self::Step => 1,
            Self::Jump => 2,
        }
    }
}

/// Move generation and game-end queries over a read-only view of a [`PieceSet`].
#[derive(Debug, Clone, Copy)]
pub struct RulesEngine<'a> {
    board: &'a PieceSet,
}

impl<'a> RulesEngine<'a> {
    pub fn new(board: &'a PieceSet) -> Self {
        Self { board }
    }

    /// Empty squares `checker` can step to, in coordinate-neighbour order.
    pub fn moves_for(&self, checker: Checker) -> Vec<Coordinate> {
        self.destinations(checker, Reach::Step).collect()
    }

    /// Empty squares `checker` can land on by jumping an opposing checker.
    pub fn jumps_for(&self, checker: Checker) -> Vec<Coordinate> {
        self.destinations(checker, Reach::Jump).collect()
    }

    pub fn has_move(&self, checker: Checker) -> bool {
        self.destinations(checker, Reach::Step).next().is_some()
    }

    pub fn has_jump(&self, checker: Checker) -> bool {
        self.destinations(checker, Reach::Jump).next().is_some()
    }

    /// Jumps if the checker has any, otherwise plain moves.
    pub fn legal_destinations(&self, checker: Checker) -> Vec<Coordinate> {
        let jumps = self.jumps_for(checker);
        if jumps.is_empty() {
            self.moves_for(checker)
        } else {
            jumps
        }
    }

    pub fn has_any_jump(&self, side: Side) -> bool {
        self.board
            .checkers_of(side)
            .into_iter()
            .any(|checker| self.has_jump(checker))
    }

    pub fn has_any_action(&self, side: Side) -> bool {
        self.board
            .checkers_of(side)
            .into_iter()
            .any(|checker| self.has_jump(checker) || self.has_move(checker))
    }

    /// Checkers of `side` that may act this turn, ascending by coordinate index.
    ///
    /// When any checker of `side` can capture, only capturing checkers are returned.
    pub fn movable_checkers(&self, side: Side) -> Vec<Checker> {
        let checkers = self.board.checkers_of(side);
        if checkers.iter().any(|&checker| self.has_jump(checker)) {
            checkers
                .into_iter()
                .filter(|&checker| self.has_jump(checker))
                .collect()
        } else {
            checkers
                .into_iter()
                .filter(|&checker| self.has_move(checker))
                .collect()
        }
    }

    /// The game is over once either side is out of checkers or out of actions, whoever is to
    /// move.
    pub fn is_game_over(&self) -> bool {
        SIDES
            .into_iter()
            .any(|side| self.board.count_of(side) == 0 || !self.has_any_action(side))
    }

    /// First wins when it still has a checker that can act; otherwise Second does. If neither
    /// side can act, this resolves in favour of Second.
    pub fn winner(&self) -> Result<Side> {
        if !self.is_game_over() {
            return Err(Error::GameNotOver);
        }

        if self.board.count_of(Side::First) > 0 && self.has_any_action(Side::First) {
            Ok(Side::First)
        } else {
            Ok(Side::Second)
        }
    }

    fn destinations(&self, checker: Checker, reach: Reach) -> impl Iterator<Item = Coordinate> {
        let board = self.board;
        let from = checker.coordinate;
        let heading = checker.piece.heading();

        from.coordinates_at(reach.distance())
            .filter(move |&to| heading.allows(from, to) && !board.is_occupied(to))
            .filter(move |&to| match reach {
                Reach::Step => true,
                Reach::Jump => from
                    .find_jumped_position(to)
                    .ok()
                    .and_then(|jumped| board.piece_at(jumped))
                    .is_some_and(|piece| piece.side() == checker.side().other()),
            })
    }
}
