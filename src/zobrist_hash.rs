use rand::{RngCore, thread_rng};
use std::sync::OnceLock;

use crate::constants::{NUM_FILES, NUM_PIECE_TYPES, NUM_SIDES, NUM_SQUARES};

/// Number of distinct castling-rights states (4 independent flags).
pub const NUM_CASTLE_STATES: usize = 16;

pub struct ZobristTables {
    pub pieces: [[[u64; NUM_SQUARES]; NUM_PIECE_TYPES]; NUM_SIDES],
    pub black_to_move: u64,
    pub castle: [u64; NUM_CASTLE_STATES],
    pub en_passant_file: [u64; NUM_FILES],
}

// Global random keys for Zobrist hashing, filled on first use
static ZOBRIST_TABLES: OnceLock<ZobristTables> = OnceLock::new();

fn random_tables() -> ZobristTables {
    let mut rng = thread_rng();

    let mut pieces = [[[0u64; NUM_SQUARES]; NUM_PIECE_TYPES]; NUM_SIDES];
    for side in pieces.iter_mut() {
        for piece in side.iter_mut() {
            for key in piece.iter_mut() {
                *key = rng.next_u64();
            }
        }
    }

    let mut castle = [0u64; NUM_CASTLE_STATES];
    // No rights hashes to zero so that castling-free positions only depend on the board
    for key in castle.iter_mut().skip(1) {
        *key = rng.next_u64();
    }

    let mut en_passant_file = [0u64; NUM_FILES];
    for key in en_passant_file.iter_mut() {
        *key = rng.next_u64();
    }

    ZobristTables {
        pieces,
        black_to_move: rng.next_u64(),
        castle,
        en_passant_file,
    }
}

/// The process-wide key tables, initialized with random values the first time they are needed.
pub fn zobrist_tables() -> &'static ZobristTables {
    ZOBRIST_TABLES.get_or_init(random_tables)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_initialized_once() {
        let first = zobrist_tables() as *const ZobristTables;
        let second = zobrist_tables() as *const ZobristTables;
        assert_eq!(first, second);
    }

    #[test]
    fn piece_keys_are_distinct() {
        let tables = zobrist_tables();
        let mut keys: Vec<u64> = tables.pieces.iter().flatten().flatten().copied().collect();
        let total = keys.len();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), total);
    }
}
