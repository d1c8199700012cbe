use crate::{
    cache::LegalMoveCache,
    error::ChessError,
    moves::{Move, parse_long_algebraic},
    position::Position,
};

/// Result of replaying a move line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineOutcome {
    pub position: Position,
    pub san: Vec<String>,
    pub la: Vec<String>,
}

/// Splits a move line into move tokens, dropping move numbers such as `1.`, `12...` and the
/// number in front of `1.e4`.
pub fn move_tokens(line: &str) -> Vec<&str> {
    line.split_whitespace()
        .map(|token| {
            let digits = token.len() - token.trim_start_matches(|c: char| c.is_ascii_digit()).len();
            if digits > 0 && token[digits..].starts_with('.') {
                token[digits..].trim_start_matches('.')
            } else {
                token
            }
        })
        .filter(|token| !token.is_empty())
        .collect()
}

/// Reads one token as long algebraic when it has that shape, as SAN otherwise.
pub fn parse_move<'a>(
    position: &'a Position,
    token: &str,
    cache: &LegalMoveCache,
) -> Result<Move<'a>, ChessError> {
    if parse_long_algebraic(token).is_ok() {
        Move::from_la(position, token)
    } else {
        Move::from_san(position, token, cache)
    }
}

/// Plays every move of `line` from `start`. Each move must be legal.
pub fn play_line(
    start: &Position,
    line: &str,
    cache: &LegalMoveCache,
) -> Result<LineOutcome, ChessError> {
    let mut position = start.clone();
    let mut san = Vec::new();
    let mut la = Vec::new();

    for token in move_tokens(line) {
        let next = {
            let chess_move = parse_move(&position, token, cache)?;
            let next = chess_move.make()?;

            san.push(chess_move.san(cache)?);
            la.push(chess_move.la());
            next
        };

        log::trace!("{token} -> {}", next.to_fen());
        position = next;
    }

    Ok(LineOutcome { position, san, la })
}
