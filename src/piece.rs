use crate::{
    constants::{BISHOP_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS},
    types::{MoveStatus, Piece, PieceKind, Position, Side},
};

impl PieceKind {
    /// Traditional material value. The king is invaluable and scores 0.
    pub const fn material_score(self) -> u8 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        }
    }

    pub fn from_fen_char(c: char) -> Option<(Side, PieceKind)> {
        let side = if c.is_ascii_uppercase() {
            Side::White
        } else {
            Side::Black
        };

        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };

        Some((side, kind))
    }
}

impl Piece {
    pub const fn fen_char(self) -> char {
        let c = match self.kind {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };

        match self.side {
            Side::White => c.to_ascii_uppercase(),
            Side::Black => c,
        }
    }

    pub const fn symbol(self) -> char {
        match (self.side, self.kind) {
            (Side::White, PieceKind::Pawn) => '♙',
            (Side::White, PieceKind::Knight) => '♘',
            (Side::White, PieceKind::Bishop) => '♗',
            (Side::White, PieceKind::Rook) => '♖',
            (Side::White, PieceKind::Queen) => '♕',
            (Side::White, PieceKind::King) => '♔',
            (Side::Black, PieceKind::Pawn) => '♟',
            (Side::Black, PieceKind::Knight) => '♞',
            (Side::Black, PieceKind::Bishop) => '♝',
            (Side::Black, PieceKind::Rook) => '♜',
            (Side::Black, PieceKind::Queen) => '♛',
            (Side::Black, PieceKind::King) => '♚',
        }
    }

    /// Generate geometrically-plausible candidate squares from `origin`.
    ///
    /// `validate` answers purely from occupancy (off-board and friendly
    /// squares are `Invalid`, enemy squares `ValidStop`, empty squares
    /// `Valid`); it knows nothing about turn order or special rules.
    /// Pawn diagonals and king castling candidates deliberately
    /// over-generate here and are narrowed by the game-rule filter.
    pub fn basic_moves<V>(self, origin: Position, validate: V) -> Vec<Position>
    where
        V: Fn(Side, Position) -> MoveStatus,
    {
        match self.kind {
            PieceKind::Pawn => self.pawn_moves(origin, &validate),
            PieceKind::Knight => self.step_moves(origin, &KNIGHT_OFFSETS, &validate),
            PieceKind::Bishop => self.sliding_moves(origin, &BISHOP_DIRECTIONS, &validate),
            PieceKind::Rook => self.sliding_moves(origin, &ROOK_DIRECTIONS, &validate),
            PieceKind::Queen => self.sliding_moves(origin, &QUEEN_DIRECTIONS, &validate),
            PieceKind::King => self.king_moves(origin, &validate),
        }
    }

    fn pawn_moves<V>(self, origin: Position, validate: &V) -> Vec<Position>
    where
        V: Fn(Side, Position) -> MoveStatus,
    {
        let mut moves = Vec::new();
        let direction = self.side.pawn_direction();

        let forward_one = origin.offset(direction, 0);
        if validate(self.side, forward_one) == MoveStatus::Valid {
            moves.push(forward_one);

            // The double push may not jump over an occupant.
            if origin.rank == self.side.pawn_start_rank() {
                let forward_two = origin.offset(2 * direction, 0);
                if validate(self.side, forward_two) == MoveStatus::Valid {
                    moves.push(forward_two);
                }
            }
        }

        for file_delta in [-1, 1] {
            let diagonal = origin.offset(direction, file_delta);
            if validate(self.side, diagonal) != MoveStatus::Invalid {
                moves.push(diagonal);
            }
        }

        moves
    }

    fn step_moves<V>(self, origin: Position, offsets: &[(i8, i8)], validate: &V) -> Vec<Position>
    where
        V: Fn(Side, Position) -> MoveStatus,
    {
        offsets
            .iter()
            .map(|&(rank_delta, file_delta)| origin.offset(rank_delta, file_delta))
            .filter(|&candidate| validate(self.side, candidate) != MoveStatus::Invalid)
            .collect()
    }

    fn sliding_moves<V>(self, origin: Position, directions: &[(i8, i8)], validate: &V) -> Vec<Position>
    where
        V: Fn(Side, Position) -> MoveStatus,
    {
        let mut moves = Vec::new();

        for &(rank_delta, file_delta) in directions {
            let mut distance = 1;
            loop {
                let candidate = origin.offset(rank_delta * distance, file_delta * distance);
                match validate(self.side, candidate) {
                    MoveStatus::Valid => moves.push(candidate),
                    MoveStatus::ValidStop => {
                        moves.push(candidate);
                        break;
                    }
                    MoveStatus::Invalid => break,
                }
                distance += 1;
            }
        }

        moves
    }

    fn king_moves<V>(self, origin: Position, validate: &V) -> Vec<Position>
    where
        V: Fn(Side, Position) -> MoveStatus,
    {
        let mut moves = self.step_moves(origin, &KING_OFFSETS, validate);

        // Castling candidates are offered from the home rank only;
        // rights, rook presence, and path emptiness are checked by the
        // game-rule filter.
        if origin.rank == self.side.home_rank() {
            for file_delta in [2, -2] {
                let candidate = origin.offset(0, file_delta);
                if validate(self.side, candidate) == MoveStatus::Valid {
                    moves.push(candidate);
                }
            }
        }

        moves
    }
}
