use crate::game_state::chess_types::{GameState, PieceKind, Square};
use crate::move_generation::legal_move_shared::enemy_piece_on;
use crate::moves::move_descriptions::{MoveDescription, FLAG_CAPTURE};
use crate::moves::rook_moves::rook_attacks;

pub fn generate_rook_moves(game_state: &GameState, out: &mut Vec<MoveDescription>) {
    let side = game_state.side_to_move;
    let own_occ = game_state.board.color_occupancy(side);
    let enemy_occ = game_state.board.color_occupancy(side.opposite());

    let mut rooks = game_state.board.piece_mask(side, PieceKind::Rook);
    while rooks != 0 {
        let from = rooks.trailing_zeros() as Square;
        let mut targets = rook_attacks(from, game_state.board.occupancy()) & !own_occ;

        while targets != 0 {
            let to = targets.trailing_zeros() as Square;
            let is_capture = (1u64 << to) & enemy_occ != 0;
            let captured = if is_capture {
                enemy_piece_on(game_state, to)
            } else {
                None
            };
            out.push(MoveDescription::pack(
                from,
                to,
                PieceKind::Rook,
                captured,
                None,
                if is_capture { FLAG_CAPTURE } else { 0 },
            ));
            targets &= targets - 1;
        }

        rooks &= rooks - 1;
    }
}

#[cfg(test)]
mod tests {
    use super::generate_rook_moves;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn lone_rook_covers_its_rank_and_file() {
        let game = parse_fen("8/8/8/8/3R4/8/8/8 w - - 0 1").expect("FEN should parse");
        let mut moves = Vec::new();
        generate_rook_moves(&game, &mut moves);
        assert_eq!(moves.len(), 14);
        assert!(moves.iter().all(|m| !m.is_capture()));
    }
}
