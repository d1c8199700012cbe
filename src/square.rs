use std::{fmt, str::FromStr};

use crate::{
    constants::{NUM_FILES, NUM_RANKS, NUM_SQUARES},
    error::ChessError,
    types::{Direction, Square},
};

impl Square {
    #[rustfmt::skip]
    pub const ALL: [Square; NUM_SQUARES] = [
        Square::A1, Square::B1, Square::C1, Square::D1, Square::E1, Square::F1, Square::G1, Square::H1,
        Square::A2, Square::B2, Square::C2, Square::D2, Square::E2, Square::F2, Square::G2, Square::H2,
        Square::A3, Square::B3, Square::C3, Square::D3, Square::E3, Square::F3, Square::G3, Square::H3,
        Square::A4, Square::B4, Square::C4, Square::D4, Square::E4, Square::F4, Square::G4, Square::H4,
        Square::A5, Square::B5, Square::C5, Square::D5, Square::E5, Square::F5, Square::G5, Square::H5,
        Square::A6, Square::B6, Square::C6, Square::D6, Square::E6, Square::F6, Square::G6, Square::H6,
        Square::A7, Square::B7, Square::C7, Square::D7, Square::E7, Square::F7, Square::G7, Square::H7,
        Square::A8, Square::B8, Square::C8, Square::D8, Square::E8, Square::F8, Square::G8, Square::H8,
    ];

    pub fn iter() -> impl Iterator<Item = Square> {
        Square::ALL.into_iter()
    }

    /// `None` when either coordinate is off the board. Both 0-indexed.
    pub fn from_coords(file: u8, rank: u8) -> Option<Square> {
        if file as usize >= NUM_FILES || rank as usize >= NUM_RANKS {
            return None;
        }

        Some(Square::ALL[rank as usize * NUM_FILES + file as usize])
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// 0-indexed (0-7)
    pub fn rank(self) -> u8 {
        self as u8 / NUM_FILES as u8
    }
    /// 0-indexed (0-7)
    pub fn file(self) -> u8 {
        (self as u8) % (NUM_FILES as u8)
    }

    pub fn file_char(self) -> char {
        (b'a' + self.file()) as char
    }

    pub fn rank_char(self) -> char {
        (b'1' + self.rank()) as char
    }

    /// Board-drawing column, 0 on the a-file.
    pub fn x(self) -> u8 {
        self.file()
    }

    /// Board-drawing row, 0 on the eighth rank.
    pub fn y(self) -> u8 {
        (NUM_RANKS as u8 - 1) - self.rank()
    }

    /// The square `file_delta` files and `rank_delta` ranks away, without wrapping around edges.
    pub fn offset(self, file_delta: i8, rank_delta: i8) -> Option<Square> {
        let file = self.file() as i8 + file_delta;
        let rank = self.rank() as i8 + rank_delta;

        if file < 0 || rank < 0 {
            return None;
        }

        Square::from_coords(file as u8, rank as u8)
    }

    pub fn step(self, direction: Direction) -> Option<Square> {
        let (file_delta, rank_delta) = direction.delta();
        self.offset(file_delta, rank_delta)
    }

    pub fn left(self) -> Option<Square> {
        self.step(Direction::W)
    }

    pub fn right(self) -> Option<Square> {
        self.step(Direction::E)
    }

    pub fn up(self) -> Option<Square> {
        self.step(Direction::N)
    }

    pub fn down(self) -> Option<Square> {
        self.step(Direction::S)
    }
}

impl Direction {
    pub const ROOK: [Direction; 4] = [Direction::N, Direction::E, Direction::S, Direction::W];
    pub const BISHOP: [Direction; 4] = [Direction::NE, Direction::SE, Direction::SW, Direction::NW];
    /// The eight directions a king or queen moves in.
    pub const ROYAL: [Direction; 8] = [
        Direction::N,
        Direction::NE,
        Direction::E,
        Direction::SE,
        Direction::S,
        Direction::SW,
        Direction::W,
        Direction::NW,
    ];

    /// (file, rank) step
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::N => (0, 1),
            Direction::NE => (1, 1),
            Direction::E => (1, 0),
            Direction::SE => (1, -1),
            Direction::S => (0, -1),
            Direction::SW => (-1, -1),
            Direction::W => (-1, 0),
            Direction::NW => (-1, 1),
        }
    }
}

impl TryFrom<u8> for Square {
    type Error = &'static str;

    /// Converts from a number representing the square index
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Square::ALL
            .get(value as usize)
            .copied()
            .ok_or("Square index out of range (must be 0-63)")
    }
}

impl FromStr for Square {
    type Err = ChessError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.as_bytes() {
            &[file @ b'a'..=b'h', rank @ b'1'..=b'8'] => {
                Square::from_coords(file - b'a', rank - b'1')
                    .ok_or_else(|| ChessError::malformed(format!("wrong square name {name}")))
            }
            _ => Err(ChessError::malformed(format!("wrong square name {name}"))),
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}
