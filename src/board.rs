use crate::{
    constants::{BACK_RANK, NUM_FILES, NUM_RANKS, NUM_SQUARES},
    error::ChessError,
    types::{Piece, PieceType, Side, Square},
};

/// Piece placement. Unoccupied squares hold `None`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Board {
    squares: [Option<Piece>; NUM_SQUARES],
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

impl Board {
    pub fn new() -> Self {
        let mut board = Board::empty();

        for side in Side::iter() {
            for (file, &kind) in BACK_RANK.iter().enumerate() {
                if let Some(square) = Square::from_coords(file as u8, side.home_rank()) {
                    board.add_piece(Piece::new(side, kind), square);
                }
                if let Some(square) = Square::from_coords(file as u8, side.pawn_rank()) {
                    board.add_piece(Piece::new(side, PieceType::Pawn), square);
                }
            }
        }

        board
    }

    pub fn empty() -> Self {
        Self {
            squares: [None; NUM_SQUARES],
        }
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square as usize]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.squares[square as usize].is_none()
    }

    /// Replaces whatever stood on `square`.
    pub fn add_piece(&mut self, piece: Piece, square: Square) {
        self.squares[square as usize] = Some(piece);
    }

    pub fn remove_piece(&mut self, square: Square) -> Option<Piece> {
        self.squares[square as usize].take()
    }

    /// Moves the piece on `from` to `to`, returning whatever was captured there.
    pub fn update_piece(&mut self, from: Square, to: Square) -> Option<Piece> {
        let moving = self.remove_piece(from);
        std::mem::replace(&mut self.squares[to as usize], moving)
    }

    /// Occupied squares in a1..h8 order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::iter().filter_map(|square| self.get(square).map(|piece| (square, piece)))
    }

    pub fn king_square(&self, side: Side) -> Option<Square> {
        self.pieces()
            .find(|&(_, piece)| piece == Piece::new(side, PieceType::King))
            .map(|(square, _)| square)
    }

    /// Decodes the first FEN field, expanding empty-square counts.
    pub fn from_placement(placement: &str) -> Result<Board, ChessError> {
        let ranks: Vec<&str> = placement.split('/').collect();

        if ranks.len() != NUM_RANKS {
            return Err(ChessError::malformed(format!(
                "expected {NUM_RANKS} ranks in piece placement '{placement}'"
            )));
        }

        let mut board = Board::empty();

        // FEN lists the eighth rank first
        for (row, rank_text) in ranks.iter().enumerate() {
            let rank = (NUM_RANKS - 1 - row) as u8;
            let mut file = 0u8;

            for c in rank_text.chars() {
                if let Some(run) = c.to_digit(10).filter(|run| (1..=8).contains(run)) {
                    file += run as u8;
                } else {
                    let piece = Piece::from_fen_char(c)?;
                    let square = Square::from_coords(file, rank).ok_or_else(|| {
                        ChessError::malformed(format!("rank '{rank_text}' is longer than 8 files"))
                    })?;
                    board.add_piece(piece, square);
                    file += 1;
                }

                if file as usize > NUM_FILES {
                    return Err(ChessError::malformed(format!(
                        "rank '{rank_text}' is longer than 8 files"
                    )));
                }
            }

            if file as usize != NUM_FILES {
                return Err(ChessError::malformed(format!(
                    "rank '{rank_text}' does not cover 8 files"
                )));
            }
        }

        Ok(board)
    }

    /// Encodes the first FEN field, rank 8 to 1, a-file to h-file.
    pub fn placement(&self) -> String {
        let mut placement = String::with_capacity(NUM_SQUARES + NUM_RANKS);

        for rank in (0..NUM_RANKS as u8).rev() {
            let mut empty_run = 0;

            for file in 0..NUM_FILES as u8 {
                match Square::from_coords(file, rank).and_then(|square| self.get(square)) {
                    Some(piece) => {
                        if empty_run > 0 {
                            placement.push_str(&empty_run.to_string());
                            empty_run = 0;
                        }
                        placement.push(piece.fen_char());
                    }
                    None => empty_run += 1,
                }
            }

            if empty_run > 0 {
                placement.push_str(&empty_run.to_string());
            }
            if rank > 0 {
                placement.push('/');
            }
        }

        placement
    }

    /// Text diagram with rank and file labels. `flip` puts black at the bottom.
    pub fn diagram(&self, flip: bool) -> String {
        let mut ranks: Vec<u8> = (0..NUM_RANKS as u8).rev().collect();
        let mut files: Vec<u8> = (0..NUM_FILES as u8).collect();

        if flip {
            ranks.reverse();
            files.reverse();
        }

        let mut diagram = String::new();

        for &rank in &ranks {
            diagram.push_str(&format!("{} ", rank + 1));

            for &file in &files {
                let symbol = Square::from_coords(file, rank)
                    .and_then(|square| self.get(square))
                    .map_or('.', Piece::fen_char);
                diagram.push(' ');
                diagram.push(symbol);
            }

            diagram.push('\n');
        }

        diagram.push_str("  ");
        for &file in &files {
            diagram.push(' ');
            diagram.push((b'a' + file) as char);
        }
        diagram.push('\n');

        diagram
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_placement() {
        assert_eq!(
            Board::new().placement(),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"
        );
    }

    #[test]
    fn placement_round_trip() {
        let placement = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R";
        assert_eq!(Board::from_placement(placement).unwrap().placement(), placement);
    }

    #[test]
    fn rejects_ranks_of_wrong_width() {
        for placement in [
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBN",
            "rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR",
            "rnbqkbnr/ppppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
            "rnbqkbnr/pppppppp/44/8/8/8/PPPPPPPP/RNBQKBNRR",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP",
        ] {
            assert!(
                matches!(
                    Board::from_placement(placement),
                    Err(ChessError::MalformedInput(_))
                ),
                "{placement} should be rejected"
            );
        }
    }

    #[test]
    fn update_piece_returns_capture() {
        let mut board = Board::new();
        let captured = board.update_piece(Square::D1, Square::D8);

        assert_eq!(captured, Some(Piece::new(Side::Black, PieceType::Queen)));
        assert_eq!(
            board.get(Square::D8),
            Some(Piece::new(Side::White, PieceType::Queen))
        );
        assert!(board.is_empty(Square::D1));
    }

    #[test]
    fn finds_kings() {
        let board = Board::new();
        assert_eq!(board.king_square(Side::White), Some(Square::E1));
        assert_eq!(board.king_square(Side::Black), Some(Square::E8));
        assert_eq!(Board::empty().king_square(Side::White), None);
    }

    #[test]
    fn diagram_labels() {
        let diagram = Board::new().diagram(false);
        let first_line = diagram.lines().next().unwrap();
        assert_eq!(first_line, "8  r n b q k b n r");
        assert!(diagram.ends_with("   a b c d e f g h\n"));

        let flipped = Board::new().diagram(true);
        assert_eq!(flipped.lines().next().unwrap(), "1  R N B K Q B N R");
    }
}
