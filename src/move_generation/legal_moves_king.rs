use crate::game_state::chess_rules::{king_home, CASTLE_LANES};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::push_step_moves;
use crate::moves::king_moves::king_targets;

pub fn generate_king_moves(game_state: &GameState, from: Square, piece: Piece, out: &mut Vec<Move>) {
    push_step_moves(game_state, from, piece, king_targets(from), out);
}

/// Castling moves for the side to move. Kept apart from the per-piece
/// generators because attack detection does not need them.
pub fn generate_castle_moves(game_state: &GameState, out: &mut Vec<Move>) {
    let side = game_state.side_to_move;
    let enemy = side.opposite();
    let home = king_home(side);
    let king = Piece::new(side, PieceKind::King);

    if game_state.king_square(side) != home || game_state.piece_at(home) != Some(king) {
        return;
    }

    // Cannot castle out of check.
    if is_square_attacked(&game_state.board, home, enemy) {
        return;
    }

    for lane in CASTLE_LANES.iter() {
        if !game_state.castle_rights.allows(side, lane.side) {
            continue;
        }

        let path_clear = lane
            .empty_cols
            .iter()
            .all(|&col| game_state.piece_at(Square::new(home.row, col)).is_none());
        if !path_clear {
            continue;
        }

        let path_safe = lane
            .safe_cols
            .iter()
            .all(|&col| !is_square_attacked(&game_state.board, Square::new(home.row, col), enemy));
        if path_safe {
            out.push(Move::castle(home, Square::new(home.row, lane.king_to_col), king));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::generate_castle_moves;
    use crate::game_state::chess_types::*;
    use crate::utils::board_diagram::board_from_diagram;

    fn castles(diagram: &str, side: Color) -> Vec<String> {
        let board = board_from_diagram(diagram).expect("diagram should parse");
        let game = GameState::from_position(board, side, CastleRights::ALL)
            .expect("position should load");
        let mut out = Vec::new();
        generate_castle_moves(&game, &mut out);
        out.iter().map(Move::notation).collect()
    }

    #[test]
    fn both_sides_available_on_open_back_rank() {
        let found = castles(
            "r...k..r\n\
             ........\n\
             ........\n\
             ........\n\
             ........\n\
             ........\n\
             ........\n\
             R...K..R",
            Color::Light,
        );
        assert_eq!(found, vec!["e1g1".to_owned(), "e1c1".to_owned()]);
    }

    #[test]
    fn no_castling_through_an_attacked_square() {
        let found = castles(
            "r...k..r\n\
             ........\n\
             ........\n\
             ........\n\
             ........\n\
             ........\n\
             .....r..\n\
             R...K..R",
            Color::Light,
        );
        assert_eq!(found, vec!["e1c1".to_owned()]);
    }

    #[test]
    fn no_castling_out_of_check() {
        let found = castles(
            "r...k..r\n\
             ........\n\
             ........\n\
             ........\n\
             ........\n\
             ........\n\
             ....r...\n\
             R...K..R",
            Color::Light,
        );
        assert!(found.is_empty());
    }

    #[test]
    fn queenside_needs_the_knight_square_empty_but_not_safe() {
        let found = castles(
            "r...k..r\n\
             ........\n\
             ........\n\
             ........\n\
             ........\n\
             ........\n\
             .R......\n\
             R...K..R",
            Color::Dark,
        );
        assert_eq!(found, vec!["e8g8".to_owned(), "e8c8".to_owned()]);

        let found = castles(
            "rn..k..r\n\
             ........\n\
             ........\n\
             ........\n\
             ........\n\
             ........\n\
             ........\n\
             R...K..R",
            Color::Dark,
        );
        assert_eq!(found, vec!["e8g8".to_owned()]);
    }
}
