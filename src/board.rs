use crate::{
    constants::{NUM_FILES, NUM_RANKS},
    error::{EngineError, EngineResult},
    types::{MoveStatus, Piece, Position, Side},
};

/// The 8x8 mailbox. Each square owns the piece standing on it; a
/// capture drops the captured piece.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; NUM_FILES]; NUM_RANKS],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Self {
            squares: [[None; NUM_FILES]; NUM_RANKS],
        }
    }

    fn get(&self, position: Position) -> Option<Piece> {
        if !position.on_board() {
            return None;
        }
        self.squares[position.rank as usize][position.file as usize]
    }

    fn bounds_check(position: Position) -> EngineResult<()> {
        if position.on_board() {
            Ok(())
        } else {
            Err(EngineError::OutOfBounds {
                rank: position.rank,
                file: position.file,
            })
        }
    }

    /// Piece standing on `position`, if any.
    pub fn piece_at(&self, position: Position) -> EngineResult<Option<Piece>> {
        Self::bounds_check(position)?;
        Ok(self.get(position))
    }

    pub fn set_piece(&mut self, position: Position, piece: Option<Piece>) -> EngineResult<()> {
        Self::bounds_check(position)?;
        self.squares[position.rank as usize][position.file as usize] = piece;
        Ok(())
    }

    /// Remove and return the piece on `position`.
    pub fn take_piece(&mut self, position: Position) -> EngineResult<Option<Piece>> {
        Self::bounds_check(position)?;
        Ok(self.squares[position.rank as usize][position.file as usize].take())
    }

    /// All occupied squares, top rank first.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.squares.iter().enumerate().flat_map(|(rank, row)| {
            row.iter().enumerate().filter_map(move |(file, square)| {
                square.map(|piece| (Position::new(rank as i8, file as i8), piece))
            })
        })
    }

    fn is_occupied_by_friendly(&self, side: Side, position: Position) -> bool {
        self.get(position).is_some_and(|piece| piece.side == side)
    }

    fn is_occupied_by_enemy(&self, side: Side, position: Position) -> bool {
        self.get(position).is_some_and(|piece| piece.side != side)
    }

    /// The occupancy validator handed to piece generation. Off-board
    /// candidates resolve to `Invalid` here; pieces never bounds-check
    /// themselves.
    pub fn validate_move(&self, side: Side, candidate: Position) -> MoveStatus {
        if !candidate.on_board() || self.is_occupied_by_friendly(side, candidate) {
            MoveStatus::Invalid
        } else if self.is_occupied_by_enemy(side, candidate) {
            MoveStatus::ValidStop
        } else {
            MoveStatus::Valid
        }
    }

    /// Geometric candidate squares for the piece on `origin`, checked
    /// live against occupancy. Not yet filtered by game rules (turn
    /// order, pawn capture legality, castling rights).
    pub fn basic_moves(&self, origin: Position) -> EngineResult<Vec<Position>> {
        Self::bounds_check(origin)?;

        let Some(piece) = self.get(origin) else {
            return Ok(Vec::new());
        };

        Ok(piece.basic_moves(origin, |side, candidate| self.validate_move(side, candidate)))
    }
}
