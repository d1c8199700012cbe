use std::{fmt, str::FromStr};

use crate::{
    board::Board,
    cache::LegalMoveCache,
    constants::{FIFTY_MOVE_RULE_HALFMOVES, NUM_EPD_FIELDS, NUM_FEN_FIELDS},
    error::ChessError,
    hash::PositionKey,
    moves::Move,
    types::{CastlingRights, EnPassantPolicy, GameStatus, MoveData, Side, Square},
};

/// A chess position as described by one FEN record.
///
/// Positions are values: [`Move::make`] works on a copy and never touches the position
/// the move was built from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub(crate) board: Board,
    pub(crate) turn: Side,
    pub(crate) castling: CastlingRights,
    pub(crate) en_passant: Option<Square>,
    pub(crate) halfmove_clock: u32, // Moves since last pawn move or capture
    pub(crate) fullmove_number: u32,
    pub(crate) en_passant_policy: EnPassantPolicy,
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

impl Position {
    /// The standard starting position.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Side::White,
            castling: CastlingRights::ALL,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            en_passant_policy: EnPassantPolicy::default(),
        }
    }

    /// Decodes `placement turn castling en-passant halfmove fullmove`.
    pub fn from_fen(fen: &str) -> Result<Self, ChessError> {
        let fields: Vec<&str> = fen.split(' ').collect();

        if fields.len() != NUM_FEN_FIELDS {
            return Err(ChessError::malformed(format!(
                "wrong FEN format, expected {NUM_FEN_FIELDS} fields: '{fen}'"
            )));
        }

        let board = Board::from_placement(fields[0])?;

        let turn = match fields[1] {
            "w" => Side::White,
            "b" => Side::Black,
            other => {
                return Err(ChessError::malformed(format!(
                    "wrong side to move '{other}'"
                )));
            }
        };

        let castling = CastlingRights::from_fen_field(fields[2])?;

        let en_passant = match fields[3] {
            "-" => None,
            name => {
                let square: Square = name.parse()?;
                if square.rank() != 2 && square.rank() != 5 {
                    return Err(ChessError::malformed(format!(
                        "en passant square {name} must be on the third or sixth rank"
                    )));
                }
                Some(square)
            }
        };

        Ok(Self {
            board,
            turn,
            castling,
            en_passant,
            halfmove_clock: parse_counter(fields[4], "half-move clock")?,
            fullmove_number: parse_counter(fields[5], "full-move number")?,
            en_passant_policy: EnPassantPolicy::default(),
        })
    }

    pub fn to_fen(&self) -> String {
        format!(
            "{} {} {}",
            self.epd(),
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// The first four FEN fields; what opening databases key positions on.
    pub fn epd(&self) -> String {
        let fields: [String; NUM_EPD_FIELDS] = [
            self.board.placement(),
            self.turn.fen_char().to_string(),
            self.castling.to_fen_field(),
            self.en_passant
                .map_or_else(|| "-".to_string(), |square| square.to_string()),
        ];

        fields.join(" ")
    }

    pub fn with_en_passant_policy(mut self, policy: EnPassantPolicy) -> Self {
        self.en_passant_policy = policy;
        self
    }

    pub fn key(&self) -> PositionKey {
        PositionKey {
            board: self.board,
            turn: self.turn,
            castling: self.castling,
            en_passant: self.en_passant,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    pub fn en_passant_policy(&self) -> EnPassantPolicy {
        self.en_passant_policy
    }

    /// A side without a king on the board is never in check.
    pub fn is_in_check(&self, side: Side) -> bool {
        self.board
            .king_square(side)
            .is_some_and(|king| self.is_square_attacked_by_side(side.opponent(), king))
    }

    /// Whether the side to move is in check.
    pub fn check(&self) -> bool {
        self.is_in_check(self.turn)
    }

    /// Pseudo-legal moves that survive [`Move::make`], served from `cache` when this
    /// placement, turn, castling and en passant state has been seen before.
    pub fn legal_moves(&self, cache: &LegalMoveCache) -> Result<Vec<Move<'_>>, ChessError> {
        let moves = cache.get_or_compute(self.key(), || self.compute_legal_moves())?;

        Ok(moves
            .iter()
            .map(|&data| Move::from_data(self, data))
            .collect())
    }

    fn compute_legal_moves(&self) -> Result<Vec<MoveData>, ChessError> {
        log::debug!("computing legal moves for {}", self.epd());

        let mut legal = Vec::new();

        for data in self.pseudo_legal_moves() {
            let candidate = Move::from_data(self, data);

            match candidate.make() {
                Ok(_) => legal.push(data),
                Err(ChessError::IllegalMove(reason)) => {
                    log::trace!("rejecting {}: {reason}", candidate.la());
                }
                Err(error) => return Err(error),
            }
        }

        Ok(legal)
    }

    pub fn status(&self, cache: &LegalMoveCache) -> Result<GameStatus, ChessError> {
        let has_legal_moves = !self.legal_moves(cache)?.is_empty();

        Ok(match (has_legal_moves, self.check()) {
            (false, true) => GameStatus::Checkmate(self.turn.opponent()),
            (false, false) => GameStatus::Stalemate,
            _ if self.halfmove_clock >= FIFTY_MOVE_RULE_HALFMOVES => {
                GameStatus::DrawByFiftyMoveRule
            }
            _ => GameStatus::InProgress,
        })
    }
}

fn parse_counter(field: &str, name: &str) -> Result<u32, ChessError> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ChessError::malformed(format!("wrong {name} '{field}'")));
    }

    field
        .parse()
        .map_err(|_| ChessError::malformed(format!("{name} '{field}' is out of range")))
}

impl FromStr for Position {
    type Err = ChessError;

    fn from_str(fen: &str) -> Result<Self, Self::Err> {
        Position::from_fen(fen)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_fen())
    }
}
