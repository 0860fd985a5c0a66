use crate::constants::{NUM_FILES, NUM_RANKS};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub const fn opponent(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Back rank as stored: rank 0 is the top row (FEN rank 8).
    pub const fn home_rank(self) -> i8 {
        match self {
            Side::White => 7,
            Side::Black => 0,
        }
    }

    pub const fn pawn_start_rank(self) -> i8 {
        match self {
            Side::White => 6,
            Side::Black => 1,
        }
    }

    /// Rank delta of a single pawn step.
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Side::White => -1,
            Side::Black => 1,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub side: Side,
    pub kind: PieceKind,
}

impl Piece {
    pub const fn new(side: Side, kind: PieceKind) -> Self {
        Self { side, kind }
    }
}

/// Verdict of the board occupancy validator. The tri-state lets
/// sliding and stepping pieces share one generation loop: `ValidStop`
/// is includable but terminates a ray.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveStatus {
    /// Empty square.
    Valid,
    /// Enemy-occupied square (capturable).
    ValidStop,
    /// Off-board or friendly-occupied.
    Invalid,
}

/// A board coordinate. Rank 0 is the topmost stored row (FEN rank 8).
/// Fields are signed so candidate generation can step off the board
/// and let the validator reject the result.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub rank: i8,
    pub file: i8,
}

impl Position {
    pub const fn new(rank: i8, file: i8) -> Self {
        Self { rank, file }
    }

    pub const fn offset(self, rank_delta: i8, file_delta: i8) -> Self {
        Self {
            rank: self.rank + rank_delta,
            file: self.file + file_delta,
        }
    }

    pub fn on_board(self) -> bool {
        (0..NUM_RANKS as i8).contains(&self.rank) && (0..NUM_FILES as i8).contains(&self.file)
    }

    /// Parse an algebraic square like "e3". File a..h maps to 0..7;
    /// digit 8..1 maps to rank 0..7.
    pub fn from_algebraic(s: &str) -> Option<Position> {
        let mut chars = s.chars();
        let file_char = chars.next()?;
        let rank_char = chars.next()?;

        if chars.next().is_some() {
            return None;
        }

        if !('a'..='h').contains(&file_char) || !('1'..='8').contains(&rank_char) {
            return None;
        }

        let file = file_char as i8 - 'a' as i8;
        let rank = 8 - (rank_char as i8 - '0' as i8);

        Some(Position::new(rank, file))
    }

    pub fn to_algebraic(self) -> String {
        let file = (b'a' + self.file as u8) as char;
        let rank = (b'0' + (8 - self.rank) as u8) as char;
        format!("{file}{rank}")
    }
}
