
use chess_rules::{
    cache::LegalMoveCache,
    error::ChessError,
    moves::Move,
    position::Position,
    types::{CastlingRights, CastlingSide, Piece, PieceType, Side, Square},
};
use test_utils::*;

#[test]
fn e2e4_from_the_start_position() {
    let position = recording_position_from_fen(START_FEN);
    let next = play(&position, "e2e4");

    assert_eq!(
        next.to_fen(),
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
    );
}

#[test]
fn e2e4_records_no_target_without_a_capturing_pawn() {
    let next = play(&position_from_fen(START_FEN), "e2e4");

    assert_eq!(
        next.to_fen(),
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1"
    );
}

#[test]
fn the_en_passant_policy_survives_moves() {
    let position = recording_position_from_fen(START_FEN);
    let next = play(&play(&position, "g1f3"), "a7a5");

    assert_eq!(next.en_passant(), Some(Square::A6));
    assert_eq!(next.en_passant_policy(), position.en_passant_policy());
}

#[cfg(test)]
mod en_passant {
    use super::*;

    #[test]
    fn double_step_beside_an_enemy_pawn_records_the_target() {
        let position = position_from_fen("4k3/3p4/8/4P3/8/8/8/4K3 b - - 0 1");
        let next = play(&position, "d7d5");

        assert_eq!(next.en_passant(), Some(Square::D6));
        assert_eq!(next.to_fen(), "4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2");
    }

    #[test]
    fn capture_removes_the_pawn_behind_the_target() {
        let position = position_from_fen("4k3/3p4/8/4P3/8/8/8/4K3 b - - 0 1");
        let after_double_step = play(&position, "d7d5");
        let after_capture = play(&after_double_step, "e5d6");

        let board = after_capture.board();
        assert_eq!(board.get(Square::D6), Some(Piece::new(Side::White, PieceType::Pawn)));
        assert!(board.is_empty(Square::D5));
        assert!(board.is_empty(Square::E5));
        assert_eq!(after_capture.en_passant(), None);
        assert_eq!(after_capture.halfmove_clock(), 0);
    }

    #[test]
    fn target_expires_after_one_move() {
        let position = position_from_fen("4k3/3p4/8/4P3/8/8/8/4K3 b - - 0 1");
        let after_double_step = play(&position, "d7d5");
        let later = play(&play(&after_double_step, "e1d1"), "e8d8");

        assert_eq!(later.en_passant(), None);
        assert!(Move::from_la(&later, "e5d6").is_err());
    }

    #[test]
    fn capture_exposing_the_king_is_illegal() {
        // Taking en passant would open the fifth rank to the rook
        let position = position_from_fen("8/8/8/K2pP2r/8/8/8/4k3 w - d6 0 1");
        let capture = Move::from_la(&position, "e5d6").unwrap();

        assert!(matches!(capture.make(), Err(ChessError::IllegalMove(_))));
    }
}

#[cfg(test)]
mod castling {
    use super::*;

    #[test]
    fn short_castle_relocates_the_rook() {
        let position = position_from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 3 10");
        let next = play(&position, "e1g1");

        assert_eq!(next.to_fen(), "r3k2r/8/8/8/8/8/8/R4RK1 b kq - 4 10");
    }

    #[test]
    fn long_castle_relocates_the_rook() {
        let position = position_from_fen("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 10");
        let next = play(&position, "e8c8");

        assert_eq!(next.to_fen(), "2kr3r/8/8/8/8/8/8/R3K2R w KQ - 1 11");
    }

    #[test]
    fn attacked_transit_square_rejects_castling() {
        // Bishop on a6 watches f1
        let position = position_from_fen("4k3/8/b7/8/8/8/8/4K2R w K - 0 1");
        let castle = Move::from_la(&position, "e1g1").unwrap();

        assert_eq!(castle.castling(), Some(CastlingSide::Short));
        assert!(position.pseudo_legal_moves().contains(&castle.data()));
        assert!(matches!(castle.make(), Err(ChessError::IllegalMove(_))));
    }

    #[test]
    fn castling_out_of_check_is_rejected() {
        let position = position_from_fen("4k3/8/8/8/8/8/8/r3K2R w K - 0 1");
        let castle = Move::from_la(&position, "e1g1").unwrap();

        assert!(matches!(castle.make(), Err(ChessError::IllegalMove(_))));
    }

    #[test]
    fn missing_right_rejects_castling() {
        let position = position_from_fen("4k3/8/8/8/8/8/8/4K2R w Q - 0 1");
        let castle = Move::from_la(&position, "e1g1").unwrap();

        assert!(matches!(castle.make(), Err(ChessError::IllegalMove(_))));
    }

    #[test]
    fn missing_rook_rejects_castling() {
        let position = position_from_fen("4k3/8/8/8/8/8/8/4K3 w K - 0 1");
        let castle = Move::from_la(&position, "e1g1").unwrap();

        assert!(matches!(castle.make(), Err(ChessError::IllegalMove(_))));
    }

    #[test]
    fn attacked_b_file_square_does_not_stop_long_castling() {
        let position = position_from_fen("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1");
        let next = play(&position, "e1c1");

        assert_eq!(next.board().get(Square::D1), Some(Piece::new(Side::White, PieceType::Rook)));
    }

    #[test]
    fn king_move_clears_both_rights() {
        let position = position_from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let next = play(&position, "e1e2");

        assert!(!next.castling_rights().white_kingside);
        assert!(!next.castling_rights().white_queenside);
        assert!(next.castling_rights().black_kingside);
        assert!(next.castling_rights().black_queenside);
    }

    #[test]
    fn rook_move_clears_its_right() {
        let position = position_from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let next = play(&position, "a1a5");

        assert_eq!(next.castling_rights().to_fen_field(), "Kkq");
    }

    #[test]
    fn capturing_a_rook_on_its_corner_clears_the_right() {
        let position = position_from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let next = play(&position, "h1h8");

        assert_eq!(next.castling_rights().to_fen_field(), "Qq");
    }

    #[test]
    fn rights_collapse_to_none() {
        let position = position_from_fen("4k3/8/8/8/8/8/8/4K2R w K - 0 1");
        let next = play(&position, "h1h2");

        assert_eq!(next.castling_rights(), CastlingRights::NONE);
        assert_eq!(next.to_fen(), "4k3/8/8/8/8/8/7R/4K3 b - - 1 1");
    }
}

#[cfg(test)]
mod counters {
    use super::*;

    #[test]
    fn halfmove_clock_counts_quiet_moves() {
        let position = position_from_fen("4k3/8/8/8/8/8/4P3/4K1N1 w - - 7 20");
        let knight_move = play(&position, "g1f3");
        assert_eq!(knight_move.halfmove_clock(), 8);
        assert_eq!(knight_move.fullmove_number(), 20);

        let after_black = play(&knight_move, "e8d8");
        assert_eq!(after_black.halfmove_clock(), 9);
        assert_eq!(after_black.fullmove_number(), 21);

        let pawn_move = play(&after_black, "e2e3");
        assert_eq!(pawn_move.halfmove_clock(), 0);
    }

    #[test]
    fn capture_resets_the_halfmove_clock() {
        let position = position_from_fen("4k3/8/8/8/8/5p2/8/4K1N1 w - - 30 40");
        let next = play(&position, "g1f3");

        assert_eq!(next.halfmove_clock(), 0);
    }

    #[test]
    fn halfmove_clock_saturates_at_its_largest_value() {
        let position = position_from_fen("4k3/8/8/8/8/8/8/4K1N1 w - - 4294967295 1");
        let next = play(&position, "g1f3");

        assert_eq!(next.halfmove_clock(), u32::MAX);
        assert_eq!(next.to_fen(), "4k3/8/8/8/8/5N2/8/4K3 b - - 4294967295 1");
    }

    #[test]
    fn fullmove_number_saturates_at_its_largest_value() {
        let position = position_from_fen("4k3/8/8/8/8/8/8/4K1n1 b - - 0 4294967295");
        let next = play(&position, "g1f3");

        assert_eq!(next.fullmove_number(), u32::MAX);
        assert_eq!(next.halfmove_clock(), 1);
    }

    #[test]
    fn counters_beyond_32_bits_are_malformed() {
        assert!(matches!(
            Position::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 4294967296 1"),
            Err(ChessError::MalformedInput(_))
        ));
    }
}

#[cfg(test)]
mod promotion {
    use super::*;

    #[test]
    fn explicit_promotion_piece_is_placed() {
        let position = position_from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1");
        let next = play(&position, "a7a8n");

        assert_eq!(next.board().get(Square::A8), Some(Piece::new(Side::White, PieceType::Knight)));
    }

    #[test]
    fn promotion_defaults_to_the_first_variant() {
        let position = position_from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1");
        let promotion = Move::new(&position, Square::A7, Square::A8, None).unwrap();

        assert_eq!(promotion.promotion(), Some(PieceType::Queen));
    }

    #[test]
    fn black_promotes_on_the_first_rank() {
        let position = position_from_fen("4k3/8/8/8/8/8/p7/4K3 b - - 0 1");
        let next = play(&position, "a2a1r");

        assert_eq!(next.board().get(Square::A1), Some(Piece::new(Side::Black, PieceType::Rook)));
        assert_eq!(next.to_fen(), "4k3/8/8/8/8/8/8/r3K3 w - - 0 2");
    }
}

#[cfg(test)]
mod failures {
    use super::*;

    #[test]
    fn move_that_is_not_pseudo_legal_is_rejected() {
        let position = position_from_fen(START_FEN);

        assert!(matches!(
            Move::from_la(&position, "e2e5"),
            Err(ChessError::IllegalMove(_))
        ));
        assert!(matches!(
            Move::new(&position, Square::E7, Square::E5, None),
            Err(ChessError::IllegalMove(_))
        ));
    }

    #[test]
    fn malformed_move_text_is_rejected() {
        let position = position_from_fen(START_FEN);

        assert!(matches!(
            Move::from_la(&position, "e2-e4"),
            Err(ChessError::MalformedInput(_))
        ));
    }

    #[test]
    fn leaving_the_king_in_check_is_rejected() {
        let position = position_from_fen("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1");
        let knight_move = Move::from_la(&position, "e2c3").unwrap();

        assert_eq!(
            knight_move.make(),
            Err(ChessError::IllegalMove("check must be evaded".to_string()))
        );
    }

    #[test]
    fn capturing_a_king_is_an_invariant_violation() {
        // Black king left en prise with white to move; not reachable by legal play
        let position = position_from_fen("4k3/8/8/8/8/8/8/4RK2 w - - 0 1");
        let capture = Move::from_la(&position, "e1e8").unwrap();

        assert!(matches!(
            capture.make(),
            Err(ChessError::InvariantViolation(_))
        ));

        let cache = LegalMoveCache::new();
        assert!(matches!(
            position.legal_moves(&cache),
            Err(ChessError::InvariantViolation(_))
        ));
    }
}

#[test]
fn positions_are_independent_values() {
    let position = position_from_fen(START_FEN);
    let copy = position.clone();

    let next = play(&copy, "d2d4");

    assert_eq!(position.to_fen(), START_FEN);
    assert_eq!(copy, position);
    assert_ne!(next, position);
}
