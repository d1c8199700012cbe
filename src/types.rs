#[cfg(feature = "api")]
use serde::{Deserialize, Serialize};

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "api", derive(Serialize, Deserialize))]
#[rustfmt::skip]
pub enum Square {
  A1 = 0, B1, C1, D1, E1, F1, G1, H1,
  A2, B2, C2, D2, E2, F2, G2, H2,
  A3, B3, C3, D3, E3, F3, G3, H3,
  A4, B4, C4, D4, E4, F4, G4, H4,
  A5, B5, C5, D5, E5, F5, G5, H5,
  A6, B6, C6, D6, E6, F6, G6, H6,
  A7, B7, C7, D7, E7, F7, G7, H7,
  A8, B8, C8, D8, E8, F8, G8, H8,
}

/// From white's viewpoint. Used in move generation.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    N = 0,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "api", derive(Serialize, Deserialize))]
pub enum PieceType {
    Pawn = 0,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "api", derive(Serialize, Deserialize))]
pub enum Side {
    White = 0,
    Black = 1,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "api", derive(Serialize, Deserialize))]
pub struct Piece {
    pub side: Side,
    pub kind: PieceType,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "api", derive(Serialize, Deserialize))]
pub enum CastlingSide {
    /// King side, `O-O`
    Short,
    /// Queen side, `O-O-O`
    Long,
}

/// Four independent castling permissions, as in the third FEN field.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "api", derive(Serialize, Deserialize))]
pub struct CastlingRights {
    pub white_kingside: bool,
    pub white_queenside: bool,
    pub black_kingside: bool,
    pub black_queenside: bool,
}

/// Raw description of a move, independent of the position it was generated from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "api", derive(Serialize, Deserialize))]
pub struct MoveData {
    pub from: Square,
    pub to: Square,
    pub castling: Option<CastlingSide>,
    pub promotion: Option<PieceType>,
    /// Square of the pawn removed by an en passant capture
    pub en_passant: Option<Square>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "api", derive(Serialize, Deserialize))]
pub enum GameStatus {
    InProgress,
    /// Holds the winning side
    Checkmate(Side),
    Stalemate,
    DrawByFiftyMoveRule,
}

/// When a pawn double step records an en passant target square.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "api", derive(Serialize, Deserialize))]
pub enum EnPassantPolicy {
    /// Only when an enemy pawn stands beside the landing square.
    #[default]
    WhenCapturable,
    /// After every double step.
    Always,
}
