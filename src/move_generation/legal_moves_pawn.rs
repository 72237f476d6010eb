//! Pseudo-legal pawn move generation: pushes, double pushes, diagonal
//! captures, en passant, and promotion fan-out.

use crate::game_state::chess_types::{Color, GameState, PieceKind, Square};
use crate::move_generation::legal_move_shared::{
    enemy_piece_on, pawn_home_rank, promotion_rank,
};
use crate::moves::move_descriptions::{
    MoveDescription, FLAG_CAPTURE, FLAG_DOUBLE_PAWN_PUSH, FLAG_EN_PASSANT,
};

const PROMOTION_CHOICES: [PieceKind; 4] = [
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
];

pub fn generate_pawn_moves(game_state: &GameState, out: &mut Vec<MoveDescription>) {
    let side = game_state.side_to_move;
    let enemy_occ = game_state.board.color_occupancy(side.opposite());
    let empty = !game_state.board.occupancy();

    let mut pawns = game_state.board.piece_mask(side, PieceKind::Pawn);
    while pawns != 0 {
        let from = pawns.trailing_zeros() as Square;
        let file = from % 8;
        let rank = from / 8;

        let one_step = if side == Color::Light {
            from.checked_add(8)
        } else {
            from.checked_sub(8)
        };

        if let Some(to) = one_step {
            if (1u64 << to) & empty != 0 {
                if to / 8 == promotion_rank(side) {
                    for promotion in PROMOTION_CHOICES {
                        out.push(MoveDescription::pack(
                            from,
                            to,
                            PieceKind::Pawn,
                            None,
                            Some(promotion),
                            0,
                        ));
                    }
                } else {
                    out.push(MoveDescription::pack(from, to, PieceKind::Pawn, None, None, 0));

                    // Double push only through two consecutive empty squares.
                    if rank == pawn_home_rank(side) {
                        let two_step = if side == Color::Light {
                            from + 16
                        } else {
                            from - 16
                        };
                        if (1u64 << two_step) & empty != 0 {
                            out.push(MoveDescription::pack(
                                from,
                                two_step,
                                PieceKind::Pawn,
                                None,
                                None,
                                FLAG_DOUBLE_PAWN_PUSH,
                            ));
                        }
                    }
                }
            }
        }

        for file_delta in [-1i8, 1i8] {
            let capture_file = file as i8 + file_delta;
            if !(0..=7).contains(&capture_file) {
                continue;
            }

            let to_opt = if side == Color::Light {
                from.checked_add((8 + file_delta) as u8)
            } else {
                from.checked_sub((8 - file_delta) as u8)
            };
            let Some(to) = to_opt else { continue };

            if (1u64 << to) & enemy_occ != 0 {
                let captured = enemy_piece_on(game_state, to);
                if to / 8 == promotion_rank(side) {
                    for promotion in PROMOTION_CHOICES {
                        out.push(MoveDescription::pack(
                            from,
                            to,
                            PieceKind::Pawn,
                            captured,
                            Some(promotion),
                            FLAG_CAPTURE,
                        ));
                    }
                } else {
                    out.push(MoveDescription::pack(
                        from,
                        to,
                        PieceKind::Pawn,
                        captured,
                        None,
                        FLAG_CAPTURE,
                    ));
                }
            } else if game_state.en_passant_square == Some(to) {
                out.push(MoveDescription::pack(
                    from,
                    to,
                    PieceKind::Pawn,
                    Some(PieceKind::Pawn),
                    None,
                    FLAG_CAPTURE | FLAG_EN_PASSANT,
                ));
            }
        }

        pawns &= pawns - 1;
    }
}

#[cfg(test)]
mod tests {
    use super::generate_pawn_moves;
    use crate::moves::move_descriptions::MoveDescription;
    use crate::utils::fen_parser::parse_fen;
    use crate::utils::long_algebraic::long_algebraic_to_move_description;

    fn pawn_moves(fen: &str) -> Vec<MoveDescription> {
        let game = parse_fen(fen).expect("FEN should parse");
        let mut out = Vec::new();
        generate_pawn_moves(&game, &mut out);
        out
    }

    #[test]
    fn home_rank_pawn_gets_single_and_double_push() {
        let moves = pawn_moves("8/8/8/8/8/8/4P3/8 w - - 0 1");
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().any(|m| m.to_string() == "e2e3"));
        assert!(moves
            .iter()
            .any(|m| m.to_string() == "e2e4" && m.is_double_pawn_push()));
    }

    #[test]
    fn blocked_pawn_has_no_pushes() {
        let moves = pawn_moves("8/8/8/8/8/4p3/4P3/8 w - - 0 1");
        assert!(moves.is_empty());
    }

    #[test]
    fn double_push_blocked_on_the_skipped_square() {
        let moves = pawn_moves("8/8/8/8/4p3/8/4P3/8 w - - 0 1");
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].to_string(), "e2e3");
    }

    #[test]
    fn promotion_fans_out_over_all_four_choices() {
        let moves = pawn_moves("8/P7/8/8/8/8/8/8 w - - 0 1");
        assert_eq!(moves.len(), 4);
        assert!(moves.iter().all(|m| m.promotion_piece().is_some()));
        assert!(moves.iter().all(|m| m.to_square() == 56));
    }

    #[test]
    fn capture_promotion_also_fans_out() {
        let moves = pawn_moves("1r6/P7/8/8/8/8/8/8 w - - 0 1");
        // Four push promotions to a8 plus four capture promotions on b8.
        assert_eq!(moves.len(), 8);
        assert_eq!(moves.iter().filter(|m| m.is_capture()).count(), 4);
    }

    #[test]
    fn en_passant_capture_is_emitted_toward_the_target_square() {
        let moves = pawn_moves("8/8/8/3pP3/8/8/8/8 w - d6 0 1");
        let ep: Vec<_> = moves.iter().filter(|m| m.is_en_passant()).collect();
        assert_eq!(ep.len(), 1);
        assert_eq!(ep[0].to_string(), "e5d6");
        assert!(ep[0].is_capture());
    }

    #[test]
    fn double_push_grants_the_adjacent_pawn_exactly_one_extra_capture() {
        // Baseline: the c4 pawn has a single quiet push.
        let before = pawn_moves("k7/8/8/8/2p5/8/1P1P4/K7 b - - 0 1");
        assert_eq!(before.len(), 1);
        assert_eq!(before[0].to_string(), "c4c3");

        // After b2b4 the bypassed b3 square is capturable, and nothing else
        // changed for the c4 pawn.
        let mut game =
            parse_fen("k7/8/8/8/2p5/8/1P1P4/K7 w - - 0 1").expect("FEN should parse");
        let push = long_algebraic_to_move_description("b2b4", &game)
            .expect("move text should parse");
        game.make_move(push).expect("b2b4 should be legal");

        let mut after = Vec::new();
        generate_pawn_moves(&game, &mut after);
        assert_eq!(after.len(), before.len() + 1);
        let extra: Vec<_> = after.iter().filter(|m| m.is_en_passant()).collect();
        assert_eq!(extra.len(), 1);
        assert_eq!(extra[0].to_string(), "c4b3");
    }

    #[test]
    fn dark_pawns_move_toward_rank_one() {
        let moves = pawn_moves("8/4p3/8/8/8/8/8/8 b - - 0 1");
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().any(|m| m.to_string() == "e7e6"));
        assert!(moves.iter().any(|m| m.to_string() == "e7e5"));
    }
}
