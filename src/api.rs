use serde::{Deserialize, Serialize};

use crate::{
    cache::LegalMoveCache,
    error::ChessError,
    line::play_line,
    position::Position,
    types::GameStatus,
};

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ReplayRequest {
    #[serde(default)]
    pub fen: Option<String>, // Starting position; the standard one when absent
    pub moves: Vec<String>,  // SAN or long algebraic, move numbers allowed
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ReplayResponse {
    pub fen: String,
    pub epd: String,
    pub san: Vec<String>,
    pub la: Vec<String>,
    pub legal_moves: Vec<String>, // Long algebraic, in generation order
    pub check: bool,
    pub status: GameStatus,
}

/// Main entry point for API consumers.
/// Replays the requested moves and describes the resulting position.
pub fn replay_line(
    request: &ReplayRequest,
    cache: &LegalMoveCache,
) -> Result<ReplayResponse, ChessError> {
    let start = match &request.fen {
        Some(fen) => Position::from_fen(fen)?,
        None => Position::new(),
    };

    let outcome = play_line(&start, &request.moves.join(" "), cache)?;
    let position = outcome.position;

    let legal_moves = position
        .legal_moves(cache)?
        .iter()
        .map(|chess_move| chess_move.la())
        .collect();

    Ok(ReplayResponse {
        fen: position.to_fen(),
        epd: position.epd(),
        san: outcome.san,
        la: outcome.la,
        legal_moves,
        check: position.check(),
        status: position.status(cache)?,
    })
}

/// JSON in, JSON out
pub fn replay_line_json(json: &str, cache: &LegalMoveCache) -> Result<String, String> {
    let request: ReplayRequest =
        serde_json::from_str(json).map_err(|e| format!("Invalid request: {e}"))?;

    let response = replay_line(&request, cache).map_err(|e| e.to_string())?;

    serde_json::to_string(&response).map_err(|e| format!("Failed to encode response: {e}"))
}
