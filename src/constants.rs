use crate::types::PieceType;

pub const NUM_SQUARES: usize = 64;
pub const NUM_PIECE_TYPES: usize = 6;
pub const NUM_SIDES: usize = 2;
pub const NUM_RANKS: usize = 8;
pub const NUM_FILES: usize = 8;

/// Number of space-separated fields in a FEN record.
pub const NUM_FEN_FIELDS: usize = 6;

/// Number of leading FEN fields that make up an EPD key (placement, turn, castling, en passant).
pub const NUM_EPD_FIELDS: usize = 4;

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Piece types on the first and eighth ranks of the start position, a-file to h-file.
pub const BACK_RANK: [PieceType; NUM_FILES] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// (file, rank) offsets of a knight jump.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-1, 2),
    (1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, 1),
    (2, -1),
];

/// 0-indexed file of both kings in the start position.
pub const KING_HOME_FILE: u8 = 4;

/// Half-move clock value at which the fifty-move rule applies (up to 100-ply).
pub const FIFTY_MOVE_RULE_HALFMOVES: u32 = 100;

/// Upper bound on moves in a position, used to size move lists.
pub const MOVE_LIST_CAPACITY: usize = 256;
