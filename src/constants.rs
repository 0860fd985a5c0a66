pub const NUM_RANKS: usize = 8;
pub const NUM_FILES: usize = 8;
pub const NUM_SQUARES: usize = NUM_RANKS * NUM_FILES;

pub const STARTING_POSITION_FEN: &str =
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

// Castle permission bits, packed into a single u8 in "KQkq" order.
pub const CASTLE_WHITE_KINGSIDE: u8 = 1;
pub const CASTLE_WHITE_QUEENSIDE: u8 = 2;
pub const CASTLE_BLACK_KINGSIDE: u8 = 4;
pub const CASTLE_BLACK_QUEENSIDE: u8 = 8;

pub const QUEENSIDE_ROOK_FILE: i8 = 0;
pub const KINGSIDE_ROOK_FILE: i8 = 7;

/// (rank delta, file delta) pairs. Rank 0 is the top of the stored
/// board (FEN rank 8), so White pawns move toward negative ranks.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, 1),
    (-2, -1),
    (-1, 2),
    (-1, -2),
    (1, 2),
    (1, -2),
    (2, 1),
    (2, -1),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];
