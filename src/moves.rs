use std::fmt;

use crate::{
    cache::LegalMoveCache,
    error::ChessError,
    position::Position,
    types::{CastlingSide, MoveData, Piece, PieceType, Side, Square},
};

/// Parses long algebraic notation (e.g. "e2e4", "e7e8q") into from/to squares and promotion piece.
pub fn parse_long_algebraic(text: &str) -> Result<(Square, Square, Option<PieceType>), ChessError> {
    if !text.is_ascii() || text.len() < 4 || text.len() > 5 {
        return Err(ChessError::malformed(format!(
            "invalid move string length: {text}"
        )));
    }

    let from: Square = text[0..2].parse()?;
    let to: Square = text[2..4].parse()?;

    let promotion = match text[4..].chars().next() {
        None => None,
        Some(letter) => match PieceType::from_letter(letter) {
            Some(kind) if PieceType::PROMOTIONS.contains(&kind) => Some(kind),
            _ => {
                return Err(ChessError::malformed(format!(
                    "invalid promotion piece: {letter}"
                )));
            }
        },
    };

    Ok((from, to, promotion))
}

/// A pseudo-legal move bound to the position it was generated from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move<'a> {
    position: &'a Position,
    data: MoveData,
}

impl<'a> Move<'a> {
    /// Finds the pseudo-legal move of `position` going from `from` to `to`. The first match
    /// wins; `promotion` picks among the promotion variants of a pawn move.
    pub fn new(
        position: &'a Position,
        from: Square,
        to: Square,
        promotion: Option<PieceType>,
    ) -> Result<Self, ChessError> {
        position
            .pseudo_legal_moves()
            .into_iter()
            .find(|candidate| {
                candidate.from == from
                    && candidate.to == to
                    && (promotion.is_none() || candidate.promotion == promotion)
            })
            .map(|data| Move::from_data(position, data))
            .ok_or_else(|| {
                ChessError::illegal(format!("{from}{to} is not even pseudo legal"))
            })
    }

    /// "e2e4", "e7e8q"
    pub fn from_la(position: &'a Position, text: &str) -> Result<Self, ChessError> {
        let (from, to, promotion) = parse_long_algebraic(text)?;
        Move::new(position, from, to, promotion)
    }

    /// Matches a SAN token against the SAN of every legal move. Check, mate and annotation
    /// suffixes are ignored and `0-0` is read as `O-O`.
    pub fn from_san(
        position: &'a Position,
        san: &str,
        cache: &LegalMoveCache,
    ) -> Result<Self, ChessError> {
        let wanted = san
            .trim()
            .trim_end_matches(['+', '#', '!', '?'])
            .replace('0', "O");

        if wanted.is_empty() {
            return Err(ChessError::malformed("empty move"));
        }

        for candidate in position.legal_moves(cache)? {
            if candidate.san(cache)?.trim_end_matches('+') == wanted {
                return Ok(candidate);
            }
        }

        Err(ChessError::illegal(format!(
            "{san} does not match any legal move in {}",
            position.to_fen()
        )))
    }

    pub(crate) fn from_data(position: &'a Position, data: MoveData) -> Self {
        Self { position, data }
    }

    pub fn position(&self) -> &'a Position {
        self.position
    }

    pub fn data(&self) -> MoveData {
        self.data
    }

    pub fn from(&self) -> Square {
        self.data.from
    }

    pub fn to(&self) -> Square {
        self.data.to
    }

    pub fn promotion(&self) -> Option<PieceType> {
        self.data.promotion
    }

    pub fn castling(&self) -> Option<CastlingSide> {
        self.data.castling
    }

    /// Square of the pawn an en passant capture removes.
    pub fn en_passant(&self) -> Option<Square> {
        self.data.en_passant
    }

    fn moving_piece(&self) -> Result<Piece, ChessError> {
        self.position.board.get(self.data.from).ok_or_else(|| {
            ChessError::InvariantViolation(format!("no piece on {}", self.data.from))
        })
    }

    pub fn is_capture(&self) -> bool {
        self.data.en_passant.is_some() || self.position.board.get(self.data.to).is_some()
    }

    /// Applies the move to a copy of its position.
    ///
    /// Fails with [`ChessError::IllegalMove`] when castling lacks its right, its rook or
    /// an unattacked king path, or when the mover's king is left in check.
    pub fn make(&self) -> Result<Position, ChessError> {
        let MoveData {
            from,
            to,
            castling,
            promotion,
            en_passant,
        } = self.data;

        let moved = self.moving_piece()?;
        let side = moved.side;

        let mut next = self.position.clone();
        next.halfmove_clock = next.halfmove_clock.saturating_add(1);

        if let Some(captured) = next.board.get(to) {
            if captured.kind == PieceType::King {
                return Err(ChessError::InvariantViolation(format!(
                    "a king cannot be taken ({}{} in {})",
                    from,
                    to,
                    self.position.to_fen()
                )));
            }

            next.halfmove_clock = 0;
            next.castling.clear_rook_square(to);
        }

        next.en_passant = None;

        if moved.kind == PieceType::Pawn {
            next.halfmove_clock = 0;

            if from.rank().abs_diff(to.rank()) == 2 {
                next.en_passant = self.position.double_step_target(side, from, to);
            }
        }

        if let Some(castling_side) = castling {
            self.validate_castling(side, castling_side)?;

            let (rook_from, rook_to) = castling_side.rook_squares(side);
            next.board.update_piece(rook_from, rook_to);
        }

        match moved.kind {
            PieceType::King => next.castling.clear_side(side),
            PieceType::Rook => next.castling.clear_rook_square(from),
            _ => {}
        }

        let placed = promotion.map_or(moved, |kind| Piece::new(side, kind));
        next.board.remove_piece(from);
        next.board.add_piece(placed, to);

        if let Some(captured_square) = en_passant {
            next.board.remove_piece(captured_square);
        }

        if next.is_in_check(side) {
            return Err(ChessError::illegal("check must be evaded"));
        }

        next.turn = side.opponent();
        if side == Side::Black {
            next.fullmove_number = next.fullmove_number.saturating_add(1);
        }

        Ok(next)
    }

    fn validate_castling(&self, side: Side, castling_side: CastlingSide) -> Result<(), ChessError> {
        if !self.position.castling.has(side, castling_side) {
            return Err(ChessError::illegal(format!(
                "{castling_side} castling is not allowed"
            )));
        }

        let (rook_from, _) = castling_side.rook_squares(side);
        if self.position.board.get(rook_from) != Some(Piece::new(side, PieceType::Rook)) {
            return Err(ChessError::illegal(format!(
                "no rook on {rook_from} to castle with"
            )));
        }

        for square in castling_side.king_path(side) {
            if self
                .position
                .is_square_attacked_by_side(side.opponent(), square)
            {
                return Err(ChessError::illegal(format!(
                    "square {square} is attacked, so castling is not allowed"
                )));
            }
        }

        Ok(())
    }

    /// Long algebraic notation, "la" for short
    pub fn la(&self) -> String {
        let mut text = format!("{}{}", self.data.from, self.data.to);

        if let Some(kind) = self.data.promotion {
            text.push(kind.letter().to_ascii_lowercase());
        }

        text
    }

    /// Standard algebraic notation, with `+` when the move gives check.
    pub fn san(&self, cache: &LegalMoveCache) -> Result<String, ChessError> {
        self.notation(cache, |piece| piece.kind.letter())
    }

    /// Figurine algebraic notation: SAN with chess symbols for the pieces.
    pub fn fan(&self, cache: &LegalMoveCache) -> Result<String, ChessError> {
        self.notation(cache, Piece::glyph)
    }

    fn notation(
        &self,
        cache: &LegalMoveCache,
        piece_name: impl Fn(Piece) -> char,
    ) -> Result<String, ChessError> {
        let piece = self.moving_piece()?;
        let capture = self.is_capture();
        let mut text = String::new();

        if let Some(castling_side) = self.data.castling {
            text.push_str(castling_side.san());
        } else if piece.kind == PieceType::Pawn {
            if capture {
                text.push(self.data.from.file_char());
                text.push('x');
            }
            text.push_str(&self.data.to.to_string());

            if let Some(kind) = self.data.promotion {
                text.push('=');
                text.push(piece_name(Piece::new(piece.side, kind)));
            }
        } else {
            text.push(piece_name(piece));
            text.push_str(&self.disambiguation(cache, piece.kind)?);
            if capture {
                text.push('x');
            }
            text.push_str(&self.data.to.to_string());
        }

        if self.make()?.check() {
            text.push('+');
        }

        Ok(text)
    }

    /// Source file, else source rank, else the full source square, when another piece of
    /// the same kind can also legally reach the destination.
    fn disambiguation(&self, cache: &LegalMoveCache, kind: PieceType) -> Result<String, ChessError> {
        let from = self.data.from;

        let rivals: Vec<Square> = self
            .position
            .legal_moves(cache)?
            .iter()
            .filter(|other| other.to() == self.data.to && other.from() != from)
            .filter(|other| {
                self.position
                    .board
                    .get(other.from())
                    .is_some_and(|piece| piece.kind == kind)
            })
            .map(|other| other.from())
            .collect();

        if rivals.is_empty() {
            return Ok(String::new());
        }

        log::debug!("disambiguation is needed for {}", self.la());

        Ok(if rivals.iter().all(|rival| rival.file() != from.file()) {
            from.file_char().to_string()
        } else if rivals.iter().all(|rival| rival.rank() != from.rank()) {
            from.rank_char().to_string()
        } else {
            from.to_string()
        })
    }
}

impl fmt::Display for Move<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.la())
    }
}
