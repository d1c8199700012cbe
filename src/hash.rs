use std::hash::{Hash, Hasher};

use crate::{
    board::Board,
    types::{CastlingRights, Side, Square},
    zobrist_hash::zobrist_tables,
};

/// The part of a position that decides which moves are legal: placement, turn, castling
/// rights and en passant target. Move counters are left out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PositionKey {
    pub board: Board,
    pub turn: Side,
    pub castling: CastlingRights,
    pub en_passant: Option<Square>,
}

impl PositionKey {
    pub fn zobrist_key(&self) -> u64 {
        let tables = zobrist_tables();
        let mut key = 0u64;

        for (square, piece) in self.board.pieces() {
            key ^= tables.pieces[piece.side as usize][piece.kind as usize][square as usize];
        }

        if self.turn == Side::Black {
            key ^= tables.black_to_move;
        }

        key ^= tables.castle[self.castling.bits() as usize];

        if let Some(square) = self.en_passant {
            key ^= tables.en_passant_file[square.file() as usize];
        }

        key
    }
}

/// Equal keys always share a Zobrist key; full equality still settles collisions.
impl Hash for PositionKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.zobrist_key());
    }
}
