use std::fmt::Write as _;

use tracing::{debug, trace};

use crate::{
    board::Board,
    constants::{
        CASTLE_BLACK_KINGSIDE, CASTLE_BLACK_QUEENSIDE, CASTLE_WHITE_KINGSIDE,
        CASTLE_WHITE_QUEENSIDE, KINGSIDE_ROOK_FILE, NUM_FILES, NUM_RANKS, QUEENSIDE_ROOK_FILE,
        STARTING_POSITION_FEN,
    },
    error::{EngineError, EngineResult},
    types::{MoveStatus, Piece, PieceKind, Position, Side},
};

/// The currently selected square and its highlighted legal targets.
/// Derived state: recomputed whole on every selection change, cleared
/// on deselect or completed move.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    pub origin: Option<Position>,
    pub targets: Vec<Position>,
}

impl Selection {
    pub fn is_active(&self) -> bool {
        self.origin.is_some()
    }

    pub fn is_target(&self, position: Position) -> bool {
        self.targets.contains(&position)
    }
}

/// What a click did. A click on nothing relevant is a deselect, never
/// an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    Selected(Selection),
    Deselected,
    Moved { from: Position, to: Position },
}

/// Full game state: board plus turn, castling rights, en-passant
/// target and move counters, orchestrating legality filtering and
/// special-move execution on top of the board's geometric candidates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub turn: Side,
    /// Castle permission bits, "KQkq" order.
    pub castle: u8,
    pub en_passant: Option<Position>,
    pub half_move_clock: u32,
    pub full_move_number: u32,
    selection: Selection,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self::from_fen(STARTING_POSITION_FEN).expect("starting position FEN is well-formed")
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Legal target squares for the piece on `origin`. Empty when the
    /// square is empty, holds the wrong color, or has no legal moves.
    pub fn legal_targets(&self, origin: Position) -> Vec<Position> {
        let Ok(Some(piece)) = self.board.piece_at(origin) else {
            return Vec::new();
        };

        if piece.side != self.turn {
            return Vec::new();
        }

        let Ok(mut candidates) = self.board.basic_moves(origin) else {
            return Vec::new();
        };

        candidates.retain(|&candidate| match piece.kind {
            PieceKind::Pawn => self.pawn_move_is_legal(piece.side, origin, candidate),
            PieceKind::King => self.king_move_is_legal(piece.side, origin, candidate),
            _ => true,
        });

        candidates
    }

    /// Diagonal pawn candidates are only legal as captures: either an
    /// enemy piece stands on the square, or it is the en-passant
    /// target. Forward candidates were already occupancy-checked.
    fn pawn_move_is_legal(&self, side: Side, origin: Position, candidate: Position) -> bool {
        if candidate.file == origin.file {
            return true;
        }

        if self.en_passant == Some(candidate) {
            return true;
        }

        self.board.validate_move(side, candidate) == MoveStatus::ValidStop
    }

    /// One-square king moves pass as-is. A two-file candidate is a
    /// castling attempt: the matching right must be held, the rook
    /// must be home, and every square strictly between king and rook
    /// must be empty. Check-safety of the path is not verified.
    fn king_move_is_legal(&self, side: Side, origin: Position, candidate: Position) -> bool {
        let file_delta = candidate.file - origin.file;
        if file_delta.abs() <= 1 {
            return true;
        }

        let kingside = file_delta > 0;
        let (right, rook_file) = match (side, kingside) {
            (Side::White, true) => (CASTLE_WHITE_KINGSIDE, KINGSIDE_ROOK_FILE),
            (Side::White, false) => (CASTLE_WHITE_QUEENSIDE, QUEENSIDE_ROOK_FILE),
            (Side::Black, true) => (CASTLE_BLACK_KINGSIDE, KINGSIDE_ROOK_FILE),
            (Side::Black, false) => (CASTLE_BLACK_QUEENSIDE, QUEENSIDE_ROOK_FILE),
        };

        if self.castle & right == 0 {
            return false;
        }

        let rook_home = Position::new(side.home_rank(), rook_file);
        if self.board.piece_at(rook_home) != Ok(Some(Piece::new(side, PieceKind::Rook))) {
            return false;
        }

        let (low, high) = if origin.file < rook_file {
            (origin.file, rook_file)
        } else {
            (rook_file, origin.file)
        };

        ((low + 1)..high).all(|file| {
            self.board.piece_at(Position::new(origin.rank, file)) == Ok(None)
        })
    }

    /// Select `origin`, recomputing the highlighted target set. A
    /// square without a piece of the side to move clears the
    /// selection.
    pub fn select(&mut self, origin: Position) -> Selection {
        let owns_piece = matches!(
            self.board.piece_at(origin),
            Ok(Some(piece)) if piece.side == self.turn
        );

        self.selection = if owns_piece {
            Selection {
                origin: Some(origin),
                targets: self.legal_targets(origin),
            }
        } else {
            Selection::default()
        };

        trace!(selection = ?self.selection, "selection updated");
        self.selection.clone()
    }

    pub fn deselect(&mut self) -> Selection {
        self.selection = Selection::default();
        self.selection.clone()
    }

    /// Handle a click on `position`: commit a move if a highlighted
    /// target was clicked, otherwise (re)select or deselect.
    pub fn click(&mut self, position: Position) -> EngineResult<ClickOutcome> {
        if !position.on_board() {
            return Err(EngineError::OutOfBounds {
                rank: position.rank,
                file: position.file,
            });
        }

        if let Some(origin) = self.selection.origin {
            if self.selection.is_target(position) {
                self.apply_move(origin, position)?;
                self.selection = Selection::default();
                return Ok(ClickOutcome::Moved {
                    from: origin,
                    to: position,
                });
            }
        }

        let selection = self.select(position);
        if selection.is_active() {
            Ok(ClickOutcome::Selected(selection))
        } else {
            Ok(ClickOutcome::Deselected)
        }
    }

    /// Commit a validated move: execute en passant / castling side
    /// effects, relocate the mover, then run the bookkeeping sequence.
    fn apply_move(&mut self, from: Position, to: Position) -> EngineResult<()> {
        let Some(piece) = self.board.take_piece(from)? else {
            return Ok(());
        };

        let mut captured = self.board.take_piece(to)?.is_some();

        // En passant: the captured pawn is beside the origin, not on
        // the target square.
        if piece.kind == PieceKind::Pawn && self.en_passant == Some(to) {
            let bypassed = Position::new(from.rank, to.file);
            if self.board.take_piece(bypassed)?.is_some() {
                captured = true;
            }
        }

        // Castling: drop the rook on the far side of the king.
        if piece.kind == PieceKind::King && (to.file - from.file).abs() == 2 {
            let (rook_from_file, rook_to_file) = if to.file > from.file {
                (KINGSIDE_ROOK_FILE, to.file - 1)
            } else {
                (QUEENSIDE_ROOK_FILE, to.file + 1)
            };

            let rook = self.board.take_piece(Position::new(from.rank, rook_from_file))?;
            self.board
                .set_piece(Position::new(from.rank, rook_to_file), rook)?;
        }

        self.board.set_piece(to, Some(piece))?;

        self.en_passant = if piece.kind == PieceKind::Pawn && (to.rank - from.rank).abs() == 2 {
            Some(Position::new((from.rank + to.rank) / 2, from.file))
        } else {
            None
        };

        match piece.kind {
            PieceKind::King => {
                self.revoke_castle_rights(piece.side, true);
                self.revoke_castle_rights(piece.side, false);
            }
            PieceKind::Rook if from.file == QUEENSIDE_ROOK_FILE => {
                self.revoke_castle_rights(piece.side, false);
            }
            PieceKind::Rook if from.file == KINGSIDE_ROOK_FILE => {
                self.revoke_castle_rights(piece.side, true);
            }
            _ => {}
        }

        if piece.kind == PieceKind::Pawn || captured {
            self.half_move_clock = 0;
        } else {
            self.half_move_clock += 1;
        }

        if self.turn == Side::Black {
            self.full_move_number += 1;
        }

        self.turn = self.turn.opponent();

        debug!(
            from = %from.to_algebraic(),
            to = %to.to_algebraic(),
            piece = piece.kind.name(),
            captured,
            "move applied"
        );

        Ok(())
    }

    fn revoke_castle_rights(&mut self, side: Side, kingside: bool) {
        let right = match (side, kingside) {
            (Side::White, true) => CASTLE_WHITE_KINGSIDE,
            (Side::White, false) => CASTLE_WHITE_QUEENSIDE,
            (Side::Black, true) => CASTLE_BLACK_KINGSIDE,
            (Side::Black, false) => CASTLE_BLACK_QUEENSIDE,
        };
        self.castle &= !right;
    }

    /// Total material for `side`, in traditional pawn units.
    pub fn material_score(&self, side: Side) -> u32 {
        self.board
            .pieces()
            .filter(|(_, piece)| piece.side == side)
            .map(|(_, piece)| piece.kind.material_score() as u32)
            .sum()
    }

    pub fn from_fen(fen: &str) -> EngineResult<GameState> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() != 6 {
            return Err(EngineError::FenFieldCount {
                found: fields.len(),
            });
        }

        let board = Self::parse_placement(fields[0])?;

        let turn = match fields[1] {
            "w" => Side::White,
            "b" => Side::Black,
            other => {
                return Err(EngineError::FenField {
                    field: "active color",
                    value: other.to_string(),
                });
            }
        };

        let castle = Self::parse_castle_rights(fields[2])?;

        let en_passant = match fields[3] {
            "-" => None,
            square => Some(Position::from_algebraic(square).ok_or_else(|| {
                EngineError::FenField {
                    field: "en passant target",
                    value: square.to_string(),
                }
            })?),
        };

        let half_move_clock = fields[4].parse().map_err(|_| EngineError::FenField {
            field: "half-move clock",
            value: fields[4].to_string(),
        })?;

        let full_move_number: u32 = fields[5].parse().map_err(|_| EngineError::FenField {
            field: "full-move number",
            value: fields[5].to_string(),
        })?;

        if full_move_number == 0 {
            return Err(EngineError::FenField {
                field: "full-move number",
                value: fields[5].to_string(),
            });
        }

        debug!(fen, "position loaded");

        Ok(GameState {
            board,
            turn,
            castle,
            en_passant,
            half_move_clock,
            full_move_number,
            selection: Selection::default(),
        })
    }

    /// Replace this game with the position in `fen`. Parsing happens
    /// on a scratch state, so a malformed string leaves the current
    /// game untouched.
    pub fn load_fen(&mut self, fen: &str) -> EngineResult<()> {
        *self = Self::from_fen(fen)?;
        Ok(())
    }

    fn parse_placement(placement: &str) -> EngineResult<Board> {
        let malformed = || EngineError::FenField {
            field: "placement",
            value: placement.to_string(),
        };

        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != NUM_RANKS {
            return Err(malformed());
        }

        let mut board = Board::empty();

        for (rank, rank_str) in ranks.iter().enumerate() {
            let mut file = 0i8;

            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as i8;
                } else {
                    let (side, kind) = PieceKind::from_fen_char(c).ok_or_else(malformed)?;
                    let position = Position::new(rank as i8, file);
                    board
                        .set_piece(position, Some(Piece::new(side, kind)))
                        .map_err(|_| malformed())?;
                    file += 1;
                }
            }

            if file != NUM_FILES as i8 {
                return Err(malformed());
            }
        }

        Ok(board)
    }

    fn parse_castle_rights(field: &str) -> EngineResult<u8> {
        if field == "-" {
            return Ok(0);
        }

        let mut castle = 0;
        for c in field.chars() {
            castle |= match c {
                'K' => CASTLE_WHITE_KINGSIDE,
                'Q' => CASTLE_WHITE_QUEENSIDE,
                'k' => CASTLE_BLACK_KINGSIDE,
                'q' => CASTLE_BLACK_QUEENSIDE,
                _ => {
                    return Err(EngineError::FenField {
                        field: "castling rights",
                        value: field.to_string(),
                    });
                }
            };
        }

        Ok(castle)
    }

    pub fn to_fen(&self) -> String {
        let mut fen = String::new();

        for rank in 0..NUM_RANKS as i8 {
            if rank > 0 {
                fen.push('/');
            }

            let mut empty_run = 0;
            for file in 0..NUM_FILES as i8 {
                match self.board.piece_at(Position::new(rank, file)) {
                    Ok(Some(piece)) => {
                        if empty_run > 0 {
                            let _ = write!(fen, "{empty_run}");
                            empty_run = 0;
                        }
                        fen.push(piece.fen_char());
                    }
                    _ => empty_run += 1,
                }
            }

            if empty_run > 0 {
                let _ = write!(fen, "{empty_run}");
            }
        }

        fen.push(' ');
        fen.push(match self.turn {
            Side::White => 'w',
            Side::Black => 'b',
        });

        fen.push(' ');
        if self.castle == 0 {
            fen.push('-');
        } else {
            for (bit, c) in [
                (CASTLE_WHITE_KINGSIDE, 'K'),
                (CASTLE_WHITE_QUEENSIDE, 'Q'),
                (CASTLE_BLACK_KINGSIDE, 'k'),
                (CASTLE_BLACK_QUEENSIDE, 'q'),
            ] {
                if self.castle & bit != 0 {
                    fen.push(c);
                }
            }
        }

        fen.push(' ');
        match self.en_passant {
            Some(target) => fen.push_str(&target.to_algebraic()),
            None => fen.push('-'),
        }

        let _ = write!(fen, " {} {}", self.half_move_clock, self.full_move_number);

        fen
    }

    /// Render the board as a unicode grid, oriented for the side to
    /// move: with Black to play the board is mirrored on both axes and
    /// the rank/file labels flip with it. Read-only view.
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        let ranks: Vec<i8> = match self.turn {
            Side::White => (0..NUM_RANKS as i8).collect(),
            Side::Black => (0..NUM_RANKS as i8).rev().collect(),
        };
        let files: Vec<i8> = match self.turn {
            Side::White => (0..NUM_FILES as i8).collect(),
            Side::Black => (0..NUM_FILES as i8).rev().collect(),
        };

        out.push_str("    -------------------------------\n");

        for (row, &rank) in ranks.iter().enumerate() {
            let _ = write!(out, " {} ", 8 - rank);

            for &file in &files {
                let symbol = match self.board.piece_at(Position::new(rank, file)) {
                    Ok(Some(piece)) => piece.symbol(),
                    _ => ' ',
                };
                let _ = write!(out, "| {symbol} ");
            }
            out.push_str("|\n");

            if row == NUM_RANKS - 1 {
                out.push_str("    -------------------------------\n");
            } else {
                out.push_str("   |---+---+---+---+---+---+---+---|\n");
            }
        }

        out.push_str("  ");
        for &file in &files {
            let _ = write!(out, "   {}", (b'a' + file as u8) as char);
        }
        out.push('\n');

        out
    }
}
