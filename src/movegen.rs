use crate::{
    constants::{KING_HOME_FILE, KNIGHT_OFFSETS, MOVE_LIST_CAPACITY},
    position::Position,
    types::{CastlingSide, Direction, EnPassantPolicy, MoveData, Piece, PieceType, Side, Square},
};

fn add_move(moves: &mut Vec<MoveData>, from: Square, to: Square) {
    moves.push(MoveData {
        from,
        to,
        castling: None,
        promotion: None,
        en_passant: None,
    });
}

/// Adds a pawn move, fanning out into one move per promotion piece on the last rank.
fn add_pawn_move(moves: &mut Vec<MoveData>, side: Side, from: Square, to: Square) {
    if to.rank() != side.promotion_rank() {
        add_move(moves, from, to);
        return;
    }

    for kind in PieceType::PROMOTIONS {
        moves.push(MoveData {
            from,
            to,
            castling: None,
            promotion: Some(kind),
            en_passant: None,
        });
    }
}

impl Position {
    /// Moves that follow the movement rules of each piece of the side to move, without
    /// regard to the safety of its king. Castling candidates only check for empty squares
    /// between king and rook; rights and attacks are checked when the move is made.
    pub fn pseudo_legal_moves(&self) -> Vec<MoveData> {
        self.generate_moves(self.turn)
    }

    fn generate_moves(&self, side: Side) -> Vec<MoveData> {
        let mut moves = Vec::with_capacity(MOVE_LIST_CAPACITY);

        for (from, piece) in self.board.pieces().filter(|&(_, piece)| piece.side == side) {
            match piece.kind {
                PieceType::King => {
                    self.generate_step_moves(side, from, Direction::ROYAL.map(Direction::delta), &mut moves);
                    self.generate_castle_moves(side, from, &mut moves);
                }
                PieceType::Queen => self.generate_sliding_moves(side, from, &Direction::ROYAL, &mut moves),
                PieceType::Rook => self.generate_sliding_moves(side, from, &Direction::ROOK, &mut moves),
                PieceType::Bishop => self.generate_sliding_moves(side, from, &Direction::BISHOP, &mut moves),
                PieceType::Knight => self.generate_step_moves(side, from, KNIGHT_OFFSETS, &mut moves),
                PieceType::Pawn => self.generate_pawn_moves(side, from, &mut moves),
            }
        }

        moves
    }

    /// Empty or holding an enemy piece
    fn can_land_on(&self, side: Side, square: Square) -> bool {
        self.board.get(square).is_none_or(|piece| piece.side != side)
    }

    fn generate_step_moves<const N: usize>(
        &self,
        side: Side,
        from: Square,
        offsets: [(i8, i8); N],
        moves: &mut Vec<MoveData>,
    ) {
        for (file_delta, rank_delta) in offsets {
            if let Some(to) = from.offset(file_delta, rank_delta) {
                if self.can_land_on(side, to) {
                    add_move(moves, from, to);
                }
            }
        }
    }

    fn generate_sliding_moves(
        &self,
        side: Side,
        from: Square,
        directions: &[Direction],
        moves: &mut Vec<MoveData>,
    ) {
        for &direction in directions {
            let mut current = from;

            while let Some(to) = current.step(direction) {
                match self.board.get(to) {
                    None => add_move(moves, from, to),
                    Some(blocker) => {
                        if blocker.side != side {
                            add_move(moves, from, to);
                        }
                        break;
                    }
                }

                current = to;
            }
        }
    }

    fn generate_castle_moves(&self, side: Side, from: Square, moves: &mut Vec<MoveData>) {
        if from.rank() != side.home_rank() || from.file() != KING_HOME_FILE {
            return;
        }

        for castling_side in CastlingSide::iter() {
            if castling_side
                .between(side)
                .into_iter()
                .all(|square| self.board.is_empty(square))
            {
                moves.push(MoveData {
                    from,
                    to: castling_side.king_to(side),
                    castling: Some(castling_side),
                    promotion: None,
                    en_passant: None,
                });
            }
        }
    }

    fn generate_pawn_moves(&self, side: Side, from: Square, moves: &mut Vec<MoveData>) {
        let forward = side.forward();

        if let Some(to) = from.offset(0, forward) {
            if self.board.is_empty(to) {
                add_pawn_move(moves, side, from, to);

                if from.rank() == side.pawn_rank() {
                    if let Some(double) = to.offset(0, forward) {
                        if self.board.is_empty(double) {
                            add_move(moves, from, double);
                        }
                    }
                }
            }
        }

        for file_delta in [-1, 1] {
            let Some(to) = from.offset(file_delta, forward) else {
                continue;
            };

            if self.board.get(to).is_some_and(|piece| piece.side != side) {
                add_pawn_move(moves, side, from, to);
            }
        }

        if let Some(target) = self.en_passant {
            self.generate_en_passant_move(side, from, target, moves);
        }
    }

    fn generate_en_passant_move(
        &self,
        side: Side,
        from: Square,
        target: Square,
        moves: &mut Vec<MoveData>,
    ) {
        let forward = side.forward();
        // Target sits on the 6th rank for white, 3rd for black; the capturing pawn one rank behind
        let target_rank = side.promotion_rank() as i8 - 2 * forward;

        if target.rank() as i8 != target_rank
            || from.rank() as i8 != target_rank - forward
            || from.file().abs_diff(target.file()) != 1
            || !self.board.is_empty(target)
        {
            return;
        }

        if let Some(captured) = target.offset(0, -forward) {
            moves.push(MoveData {
                from,
                to: target,
                castling: None,
                promotion: None,
                en_passant: Some(captured),
            });
        }
    }

    /// Whether any piece of `side` attacks `square`. Pawn pushes and castling never attack.
    pub fn is_square_attacked_by_side(&self, side: Side, square: Square) -> bool {
        let holds = |target: Option<Square>, kinds: &[PieceType]| {
            target
                .and_then(|target| self.board.get(target))
                .is_some_and(|piece| piece.side == side && kinds.contains(&piece.kind))
        };

        // A pawn of `side` attacks diagonally forward, so look one rank behind from its view
        let behind = -side.forward();
        if [-1, 1]
            .into_iter()
            .any(|file_delta| holds(square.offset(file_delta, behind), &[PieceType::Pawn]))
        {
            return true;
        }

        if KNIGHT_OFFSETS
            .into_iter()
            .any(|(file_delta, rank_delta)| holds(square.offset(file_delta, rank_delta), &[PieceType::Knight]))
        {
            return true;
        }

        if Direction::ROYAL
            .into_iter()
            .any(|direction| holds(square.step(direction), &[PieceType::King]))
        {
            return true;
        }

        let sliders = [
            (Direction::ROOK, [PieceType::Rook, PieceType::Queen]),
            (Direction::BISHOP, [PieceType::Bishop, PieceType::Queen]),
        ];

        for (directions, kinds) in sliders {
            for direction in directions {
                let mut current = square;

                while let Some(next) = current.step(direction) {
                    if let Some(piece) = self.board.get(next) {
                        if piece.side == side && kinds.contains(&piece.kind) {
                            return true;
                        }
                        break;
                    }

                    current = next;
                }
            }
        }

        false
    }

    /// The square skipped by a double step from `from` to `to`, when the policy records one.
    pub(crate) fn double_step_target(&self, side: Side, from: Square, to: Square) -> Option<Square> {
        let skipped = from.offset(0, side.forward())?;
        let enemy_pawn = Piece::new(side.opponent(), PieceType::Pawn);
        let capturable = [to.left(), to.right()]
            .into_iter()
            .flatten()
            .any(|beside| self.board.get(beside) == Some(enemy_pawn));

        match self.en_passant_policy {
            EnPassantPolicy::Always => Some(skipped),
            EnPassantPolicy::WhenCapturable => capturable.then_some(skipped),
        }
    }
}
