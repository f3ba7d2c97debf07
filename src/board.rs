use log::trace;

use crate::coordinate::{Coordinate, N_POSITIONS};
use crate::error::Result;
use crate::piece::{Checker, Piece, Side};

const NUM_CHECKERS: usize = 12;
const SECOND_START: u32 = (1 << NUM_CHECKERS) - 1;
const FIRST_START: u32 = !((1 << (N_POSITIONS - NUM_CHECKERS)) - 1);

/// Checkers board state represented by three bitboards over the 32 playable squares.
///
/// Bit `i` stands for the coordinate with index `i`. `crowned` is always a subset of
/// `first | second`, and `first & second` is always empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceSet {
    first: u32,
    second: u32,
    crowned: u32,
}

impl PieceSet {
    /// Creates the opening position:
    /// Second on indices 0..12, First on indices 20..32, nobody crowned.
    pub fn new() -> Self {
        Self {
            first: FIRST_START,
            second: SECOND_START,
            crowned: 0,
        }
    }

    pub fn empty() -> Self {
        Self {
            first: 0,
            second: 0,
            crowned: 0,
        }
    }

    /// Builds an arbitrary position. Squares claimed by both sides go to First, and crown bits
    /// on empty squares are dropped.
    pub fn from_bitboards(first: u32, second: u32, crowned: u32) -> Self {
        let second = second & !first;
        Self {
            first,
            second,
            crowned: crowned & (first | second),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
        trace!("piece set reset to the opening position");
    }

    pub fn piece_at(&self, coord: Coordinate) -> Option<Piece> {
        let square = bit(coord);
        let side = if (self.first & square) != 0 {
            Side::First
        } else if (self.second & square) != 0 {
            Side::Second
        } else {
            return None;
        };

        Some(if (self.crowned & square) != 0 {
            Piece::king(side)
        } else {
            Piece::new(side)
        })
    }

    pub fn checker_at(&self, coord: Coordinate) -> Option<Checker> {
        self.piece_at(coord).map(|piece| Checker {
            coordinate: coord,
            piece,
        })
    }

    pub fn is_occupied(&self, coord: Coordinate) -> bool {
        ((self.first | self.second) & bit(coord)) != 0
    }

    /// Checkers of `side`, ascending by coordinate index.
    pub fn checkers_of(&self, side: Side) -> Vec<Checker> {
        self.collect(self.mask_of(side))
    }

    /// Every checker on the board, ascending by coordinate index.
    pub fn checkers(&self) -> Vec<Checker> {
        self.collect(self.first | self.second)
    }

    /// Returns `(first_count, second_count)`.
    pub fn count(&self) -> (u8, u8) {
        (self.first.count_ones() as u8, self.second.count_ones() as u8)
    }

    pub fn count_of(&self, side: Side) -> u8 {
        self.mask_of(side).count_ones() as u8
    }

    /// Places `piece` on `coord`, returning whatever stood there before.
    pub fn put(&mut self, coord: Coordinate, piece: Piece) -> Option<Piece> {
        let previous = self.remove(coord);
        let square = bit(coord);
        match piece.side() {
            Side::First => self.first |= square,
            Side::Second => self.second |= square,
        }
        if piece.is_crowned() {
            self.crowned |= square;
        }
        previous
    }

    pub fn remove(&mut self, coord: Coordinate) -> Option<Piece> {
        let previous = self.piece_at(coord);
        let keep = !bit(coord);
        self.first &= keep;
        self.second &= keep;
        self.crowned &= keep;
        previous
    }

    /// Slides the checker on `from` to the adjacent empty square `to`.
    /// Legality is the rules engine's job; only debug builds re-check it.
    pub fn apply_move(&mut self, from: Coordinate, to: Coordinate) {
        debug_assert!(from.is_adjacent_to(to), "{from} -> {to} is not a step");
        debug_assert!(!self.is_occupied(to), "{to} is occupied");

        let piece = self.remove(from);
        debug_assert!(piece.is_some(), "no checker on {from}");
        if let Some(piece) = piece {
            self.put(to, piece);
            trace!("{:?} moved {from} -> {to}", piece.side());
        }
    }

    /// Jumps the checker on `from` to `to`, removing the checker it passes over.
    /// Returns the square of the captured checker.
    pub fn apply_jump(&mut self, from: Coordinate, to: Coordinate) -> Result<Coordinate> {
        let jumped = from.find_jumped_position(to)?;
        debug_assert!(!self.is_occupied(to), "{to} is occupied");

        let piece = self.remove(from);
        debug_assert!(piece.is_some(), "no checker on {from}");
        if let Some(piece) = piece {
            let captured = self.remove(jumped);
            debug_assert!(
                captured.is_some_and(|c| c.side() != piece.side()),
                "{jumped} does not hold an opposing checker"
            );
            self.put(to, piece);
            trace!("{:?} jumped {from} -> {to}, capturing {jumped}", piece.side());
        }

        Ok(jumped)
    }

    /// Crowns the checker on `coord` if it is uncrowned and stands on its crowning row.
    /// Returns whether a crown was added.
    pub fn promote_if_eligible(&mut self, coord: Coordinate) -> bool {
        match self.piece_at(coord) {
            Some(piece) if !piece.is_crowned() && coord.row() == piece.side().crowning_row() => {
                self.crowned |= bit(coord);
                trace!("{:?} crowned on {coord}", piece.side());
                true
            }
            _ => false,
        }
    }

    /// Converts the board to `[u8; 32]` where
    /// 0=empty, 1=First, 2=Second, 3=crowned First, 4=crowned Second.
    pub fn to_array(&self) -> [u8; N_POSITIONS] {
        let mut cells = [0u8; N_POSITIONS];
        for (coord, cell) in Coordinate::all().zip(cells.iter_mut()) {
            *cell = match self.piece_at(coord) {
                None => 0,
                Some(piece) => match (piece.side(), piece.is_crowned()) {
                    (Side::First, false) => 1,
                    (Side::Second, false) => 2,
                    (Side::First, true) => 3,
                    (Side::Second, true) => 4,
                },
            };
        }
        cells
    }

    fn mask_of(&self, side: Side) -> u32 {
        match side {
            Side::First => self.first,
            Side::Second => self.second,
        }
    }

    fn collect(&self, mask: u32) -> Vec<Checker> {
        let mut bits = mask;
        let mut out = Vec::with_capacity(bits.count_ones() as usize);

        while bits != 0 {
            let coord = Coordinate::from_index_unchecked(bits.trailing_zeros() as usize);
            if let Some(checker) = self.checker_at(coord) {
                out.push(checker);
            }
            bits &= bits - 1;
        }

        out
    }
}

impl Default for PieceSet {
    fn default() -> Self {
        Self::new()
    }
}

fn bit(coord: Coordinate) -> u32 {
    1u32 << coord.index()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idx(index: usize) -> Coordinate {
        Coordinate::from_index(index).unwrap()
    }

    fn mask(indices: &[usize]) -> u32 {
        indices.iter().fold(0, |acc, &i| acc | (1 << i))
    }

    #[test]
    fn opening_position_has_twelve_checkers_a_side() {
        let board = PieceSet::new();

        assert_eq!(board.count(), (12, 12));
        let indices = |side| -> Vec<usize> {
            board
                .checkers_of(side)
                .iter()
                .map(|c| c.coordinate.index())
                .collect()
        };
        assert_eq!(indices(Side::Second), (0..12).collect::<Vec<_>>());
        assert_eq!(indices(Side::First), (20..32).collect::<Vec<_>>());
        assert!((12..20).all(|i| board.piece_at(idx(i)).is_none()));
        assert!(board.checkers().iter().all(|c| !c.piece.is_crowned()));
    }

    #[test]
    fn overlapping_bitboards_resolve_to_first() {
        let board = PieceSet::from_bitboards(mask(&[9]), mask(&[9, 2]), mask(&[9, 14]));

        assert_eq!(board.piece_at(idx(9)), Some(Piece::king(Side::First)));
        assert_eq!(board.piece_at(idx(2)), Some(Piece::new(Side::Second)));
        assert_eq!(board.piece_at(idx(14)), None);
        assert_eq!(board.count(), (1, 1));
    }

    #[test]
    fn reset_restores_the_opening_position() {
        let mut board = PieceSet::from_bitboards(mask(&[5]), mask(&[9]), mask(&[5]));
        board.reset();

        assert_eq!(board, PieceSet::new());
    }

    #[test]
    fn apply_move_relocates_the_checker() {
        let mut board = PieceSet::new();

        board.apply_move(idx(21), idx(17));

        assert_eq!(board.piece_at(idx(21)), None);
        assert_eq!(board.piece_at(idx(17)), Some(Piece::new(Side::First)));
        assert_eq!(board.count(), (12, 12));
    }

    #[test]
    fn apply_jump_removes_the_jumped_checker() {
        let mut board = PieceSet::from_bitboards(mask(&[13, 28]), mask(&[9]), 0);

        let captured = board.apply_jump(idx(9), idx(16)).unwrap();

        assert_eq!(captured, idx(13));
        assert_eq!(board.piece_at(idx(13)), None);
        assert_eq!(board.piece_at(idx(9)), None);
        assert_eq!(board.piece_at(idx(16)), Some(Piece::new(Side::Second)));
        assert_eq!(board.count(), (1, 1));
    }

    #[test]
    fn apply_jump_rejects_non_jump_geometry() {
        let mut board = PieceSet::from_bitboards(mask(&[13]), mask(&[9]), 0);
        let before = board;

        assert!(board.apply_jump(idx(9), idx(13)).is_err());
        assert_eq!(board, before);
    }

    #[test]
    fn crowned_pieces_keep_their_crown_when_moving() {
        let mut board = PieceSet::from_bitboards(mask(&[17]), 0, mask(&[17]));

        board.apply_move(idx(17), idx(22));

        assert_eq!(board.piece_at(idx(22)), Some(Piece::king(Side::First)));
        assert_eq!(board.piece_at(idx(17)), None);
    }

    #[test]
    fn promotion_happens_only_on_the_crowning_row() {
        let mut board = PieceSet::from_bitboards(mask(&[0, 4]), mask(&[31, 27]), 0);

        assert!(board.promote_if_eligible(idx(0)));
        assert!(!board.promote_if_eligible(idx(0)));
        assert!(!board.promote_if_eligible(idx(4)));
        assert!(board.promote_if_eligible(idx(31)));
        assert!(!board.promote_if_eligible(idx(27)));
        assert!(!board.promote_if_eligible(idx(15)));

        assert_eq!(board.piece_at(idx(0)), Some(Piece::king(Side::First)));
        assert_eq!(board.piece_at(idx(31)), Some(Piece::king(Side::Second)));
        assert_eq!(board.piece_at(idx(4)), Some(Piece::new(Side::First)));
    }

    #[test]
    fn put_and_remove_swap_pieces() {
        let mut board = PieceSet::empty();

        assert_eq!(board.put(idx(10), Piece::king(Side::Second)), None);
        assert_eq!(
            board.put(idx(10), Piece::new(Side::First)),
            Some(Piece::king(Side::Second))
        );
        assert_eq!(board.remove(idx(10)), Some(Piece::new(Side::First)));
        assert_eq!(board, PieceSet::empty());
    }

    #[test]
    fn to_array_encodes_side_and_crown() {
        let board = PieceSet::from_bitboards(mask(&[0, 20]), mask(&[31, 3]), mask(&[0, 31]));
        let cells = board.to_array();

        assert_eq!(cells[20], 1);
        assert_eq!(cells[3], 2);
        assert_eq!(cells[0], 3);
        assert_eq!(cells[31], 4);
        assert_eq!(cells.iter().filter(|&&c| c == 0).count(), 28);
    }
}
