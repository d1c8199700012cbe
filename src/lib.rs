#[cfg(feature = "api")]
pub mod api;
pub mod board;
pub mod cache;
pub mod castling;
pub mod constants;
pub mod error;
pub mod hash;
pub mod line;
pub mod movegen;
pub mod moves;
pub mod piece;
pub mod position;
pub mod square;
pub mod types;
pub mod zobrist_hash;

pub use cache::LegalMoveCache;
pub use error::ChessError;
pub use moves::Move;
pub use position::Position;
