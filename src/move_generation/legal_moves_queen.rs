use crate::game_state::chess_types::{GameState, PieceKind, Square};
use crate::move_generation::legal_move_shared::enemy_piece_on;
use crate::moves::move_descriptions::{MoveDescription, FLAG_CAPTURE};
use crate::moves::queen_moves::queen_attacks;

pub fn generate_queen_moves(game_state: &GameState, out: &mut Vec<MoveDescription>) {
    let side = game_state.side_to_move;
    let own_occ = game_state.board.color_occupancy(side);
    let enemy_occ = game_state.board.color_occupancy(side.opposite());

    let mut queens = game_state.board.piece_mask(side, PieceKind::Queen);
    while queens != 0 {
        let from = queens.trailing_zeros() as Square;
        let mut targets = queen_attacks(from, game_state.board.occupancy()) & !own_occ;

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
                PieceKind::Queen,
                captured,
                None,
                if is_capture { FLAG_CAPTURE } else { 0 },
            ));
            targets &= targets - 1;
        }

        queens &= queens - 1;
    }
}
