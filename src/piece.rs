use std::fmt;

use crate::{
    error::ChessError,
    types::{Piece, PieceType, Side},
};

impl PieceType {
    /// Order in which a promoting pawn fans out.
    pub const PROMOTIONS: [PieceType; 4] = [
        PieceType::Queen,
        PieceType::Knight,
        PieceType::Rook,
        PieceType::Bishop,
    ];

    pub fn iter() -> impl Iterator<Item = PieceType> {
        [
            PieceType::Pawn,
            PieceType::Knight,
            PieceType::Bishop,
            PieceType::Rook,
            PieceType::Queen,
            PieceType::King,
        ]
        .into_iter()
    }

    /// Upper-case letter, as used in SAN and for white pieces in FEN
    pub const fn letter(self) -> char {
        match self {
            PieceType::Pawn => 'P',
            PieceType::Knight => 'N',
            PieceType::Bishop => 'B',
            PieceType::Rook => 'R',
            PieceType::Queen => 'Q',
            PieceType::King => 'K',
        }
    }

    /// Case-insensitive
    pub fn from_letter(letter: char) -> Option<PieceType> {
        match letter.to_ascii_lowercase() {
            'p' => Some(PieceType::Pawn),
            'n' => Some(PieceType::Knight),
            'b' => Some(PieceType::Bishop),
            'r' => Some(PieceType::Rook),
            'q' => Some(PieceType::Queen),
            'k' => Some(PieceType::King),
            _ => None,
        }
    }
}

impl Side {
    pub const fn opponent(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    pub fn iter() -> impl Iterator<Item = Side> {
        [Side::White, Side::Black].into_iter()
    }

    /// 0-indexed rank of the side's king and rooks at the start
    pub const fn home_rank(self) -> u8 {
        match self {
            Side::White => 0,
            Side::Black => 7,
        }
    }

    /// 0-indexed rank the side's pawns start on
    pub const fn pawn_rank(self) -> u8 {
        match self {
            Side::White => 1,
            Side::Black => 6,
        }
    }

    /// 0-indexed rank a pawn of this side promotes on
    pub const fn promotion_rank(self) -> u8 {
        self.opponent().home_rank()
    }

    /// Rank delta of a pawn push
    pub const fn forward(self) -> i8 {
        match self {
            Side::White => 1,
            Side::Black => -1,
        }
    }

    pub const fn fen_char(self) -> char {
        match self {
            Side::White => 'w',
            Side::Black => 'b',
        }
    }
}

impl Piece {
    pub const fn new(side: Side, kind: PieceType) -> Self {
        Self { side, kind }
    }

    /// Upper case is white, lower case is black.
    pub fn from_fen_char(letter: char) -> Result<Piece, ChessError> {
        let kind = PieceType::from_letter(letter)
            .ok_or_else(|| ChessError::malformed(format!("unknown piece letter '{letter}'")))?;
        let side = if letter.is_ascii_uppercase() {
            Side::White
        } else {
            Side::Black
        };

        Ok(Piece::new(side, kind))
    }

    pub fn fen_char(self) -> char {
        match self.side {
            Side::White => self.kind.letter(),
            Side::Black => self.kind.letter().to_ascii_lowercase(),
        }
    }

    /// Unicode chess symbol
    pub const fn glyph(self) -> char {
        match (self.side, self.kind) {
            (Side::White, PieceType::King) => '♔',
            (Side::White, PieceType::Queen) => '♕',
            (Side::White, PieceType::Rook) => '♖',
            (Side::White, PieceType::Bishop) => '♗',
            (Side::White, PieceType::Knight) => '♘',
            (Side::White, PieceType::Pawn) => '♙',
            (Side::Black, PieceType::King) => '♚',
            (Side::Black, PieceType::Queen) => '♛',
            (Side::Black, PieceType::Rook) => '♜',
            (Side::Black, PieceType::Bishop) => '♝',
            (Side::Black, PieceType::Knight) => '♞',
            (Side::Black, PieceType::Pawn) => '♟',
        }
    }
}

impl TryFrom<char> for Piece {
    type Error = ChessError;

    fn try_from(letter: char) -> Result<Self, Self::Error> {
        Piece::from_fen_char(letter)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
