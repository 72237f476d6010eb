use crate::game_state::chess_types::{GameState, PieceKind, Square};
use crate::move_generation::legal_move_shared::enemy_piece_on;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::move_descriptions::{MoveDescription, FLAG_CAPTURE};

pub fn generate_bishop_moves(game_state: &GameState, out: &mut Vec<MoveDescription>) {
    let side = game_state.side_to_move;
    let own_occ = game_state.board.color_occupancy(side);
    let enemy_occ = game_state.board.color_occupancy(side.opposite());

    let mut bishops = game_state.board.piece_mask(side, PieceKind::Bishop);
    while bishops != 0 {
        let from = bishops.trailing_zeros() as Square;
        let mut targets = bishop_attacks(from, game_state.board.occupancy()) & !own_occ;

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
                PieceKind::Bishop,
                captured,
                None,
                if is_capture { FLAG_CAPTURE } else { 0 },
            ));
            targets &= targets - 1;
        }

        bishops &= bishops - 1;
    }
}

#[cfg(test)]
mod tests {
    use super::generate_bishop_moves;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn bishop_rays_stop_at_the_first_piece_of_either_color() {
        let game = parse_fen("8/8/5p2/8/3B4/8/1P6/8 w - - 0 1").expect("FEN should parse");
        let mut moves = Vec::new();
        generate_bishop_moves(&game, &mut moves);

        // d4 bishop: own pawn b2 cuts the a1 ray; the f6 pawn is captured
        // and cuts the h8 ray.
        assert!(moves.iter().all(|m| m.to_string() != "d4b2"));
        assert!(moves.iter().all(|m| m.to_string() != "d4g7"));
        assert!(moves
            .iter()
            .any(|m| m.to_string() == "d4f6" && m.is_capture()));
    }
}
