use std::fmt;

use crate::{
    constants::{KING_HOME_FILE, NUM_FILES},
    error::ChessError,
    types::{CastlingRights, CastlingSide, Side, Square},
};

impl CastlingSide {
    pub fn iter() -> impl Iterator<Item = CastlingSide> {
        [CastlingSide::Short, CastlingSide::Long].into_iter()
    }

    pub const fn san(self) -> &'static str {
        match self {
            CastlingSide::Short => "O-O",
            CastlingSide::Long => "O-O-O",
        }
    }

    const fn king_destination_file(self) -> u8 {
        match self {
            CastlingSide::Short => 6,
            CastlingSide::Long => 2,
        }
    }

    const fn rook_files(self) -> (u8, u8) {
        match self {
            CastlingSide::Short => (7, 5),
            CastlingSide::Long => (0, 3),
        }
    }

    fn square(side: Side, file: u8) -> Square {
        Square::ALL[side.home_rank() as usize * NUM_FILES + file as usize]
    }

    pub fn king_from(self, side: Side) -> Square {
        CastlingSide::square(side, KING_HOME_FILE)
    }

    pub fn king_to(self, side: Side) -> Square {
        CastlingSide::square(side, self.king_destination_file())
    }

    /// Rook origin and destination.
    pub fn rook_squares(self, side: Side) -> (Square, Square) {
        let (from, to) = self.rook_files();
        (CastlingSide::square(side, from), CastlingSide::square(side, to))
    }

    /// Squares strictly between king and rook; all must be empty to castle.
    pub fn between(self, side: Side) -> Vec<Square> {
        let (rook_file, _) = self.rook_files();
        let (low, high) = if rook_file < KING_HOME_FILE {
            (rook_file + 1, KING_HOME_FILE)
        } else {
            (KING_HOME_FILE + 1, rook_file)
        };

        (low..high).map(|file| CastlingSide::square(side, file)).collect()
    }

    /// King start, transit and destination; none may be attacked.
    pub fn king_path(self, side: Side) -> [Square; 3] {
        let transit = match self {
            CastlingSide::Short => KING_HOME_FILE + 1,
            CastlingSide::Long => KING_HOME_FILE - 1,
        };

        [
            self.king_from(side),
            CastlingSide::square(side, transit),
            self.king_to(side),
        ]
    }
}

impl fmt::Display for CastlingSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CastlingSide::Short => write!(f, "short"),
            CastlingSide::Long => write!(f, "long"),
        }
    }
}

impl CastlingRights {
    pub const ALL: CastlingRights = CastlingRights {
        white_kingside: true,
        white_queenside: true,
        black_kingside: true,
        black_queenside: true,
    };

    pub const NONE: CastlingRights = CastlingRights {
        white_kingside: false,
        white_queenside: false,
        black_kingside: false,
        black_queenside: false,
    };

    pub fn has(&self, side: Side, castling_side: CastlingSide) -> bool {
        match (side, castling_side) {
            (Side::White, CastlingSide::Short) => self.white_kingside,
            (Side::White, CastlingSide::Long) => self.white_queenside,
            (Side::Black, CastlingSide::Short) => self.black_kingside,
            (Side::Black, CastlingSide::Long) => self.black_queenside,
        }
    }

    pub fn clear(&mut self, side: Side, castling_side: CastlingSide) {
        match (side, castling_side) {
            (Side::White, CastlingSide::Short) => self.white_kingside = false,
            (Side::White, CastlingSide::Long) => self.white_queenside = false,
            (Side::Black, CastlingSide::Short) => self.black_kingside = false,
            (Side::Black, CastlingSide::Long) => self.black_queenside = false,
        }
    }

    /// The king has moved
    pub fn clear_side(&mut self, side: Side) {
        self.clear(side, CastlingSide::Short);
        self.clear(side, CastlingSide::Long);
    }

    /// Something left or landed on `square`; drops the right tied to a rook corner there.
    pub fn clear_rook_square(&mut self, square: Square) {
        match square {
            Square::A1 => self.white_queenside = false,
            Square::H1 => self.white_kingside = false,
            Square::A8 => self.black_queenside = false,
            Square::H8 => self.black_kingside = false,
            _ => {}
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == CastlingRights::NONE
    }

    /// K=1, Q=2, k=4, q=8
    pub fn bits(&self) -> u8 {
        (self.white_kingside as u8)
            | (self.white_queenside as u8) << 1
            | (self.black_kingside as u8) << 2
            | (self.black_queenside as u8) << 3
    }

    /// Parses `-` or an in-order, non-empty subsequence of `KQkq`.
    pub fn from_fen_field(field: &str) -> Result<CastlingRights, ChessError> {
        if field == "-" {
            return Ok(CastlingRights::NONE);
        }

        let mut rights = CastlingRights::NONE;
        let mut remaining = field;

        for (letter, flag) in [
            ('K', &mut rights.white_kingside),
            ('Q', &mut rights.white_queenside),
            ('k', &mut rights.black_kingside),
            ('q', &mut rights.black_queenside),
        ] {
            if let Some(rest) = remaining.strip_prefix(letter) {
                *flag = true;
                remaining = rest;
            }
        }

        if field.is_empty() || !remaining.is_empty() {
            return Err(ChessError::malformed(format!(
                "wrong castling rights field '{field}'"
            )));
        }

        Ok(rights)
    }

    pub fn to_fen_field(&self) -> String {
        if self.is_empty() {
            return "-".to_string();
        }

        [
            (self.white_kingside, 'K'),
            (self.white_queenside, 'Q'),
            (self.black_kingside, 'k'),
            (self.black_queenside, 'q'),
        ]
        .into_iter()
        .filter_map(|(allowed, letter)| allowed.then_some(letter))
        .collect()
    }
}
