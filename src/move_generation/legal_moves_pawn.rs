use crate::game_state::chess_rules::pawn_start_row;
use crate::game_state::chess_types::*;
use crate::moves::pawn_moves::pawn_attack_squares;

pub fn generate_pawn_moves(game_state: &GameState, from: Square, piece: Piece, out: &mut Vec<Move>) {
    let color = piece.color;
    let d_row = color.pawn_direction();

    // Advances onto empty squares only.
    if let Some(one_step) = from.offset(d_row, 0) {
        if game_state.piece_at(one_step).is_none() {
            out.push(Move::with_piece(from, one_step, piece, &game_state.board));

            if from.row == pawn_start_row(color) {
                if let Some(two_step) = from.offset(2 * d_row, 0) {
                    if game_state.piece_at(two_step).is_none() {
                        out.push(Move::with_piece(from, two_step, piece, &game_state.board));
                    }
                }
            }
        }
    }

    // Captures, including en passant onto the passed-over square.
    for to in pawn_attack_squares(color, from) {
        match game_state.piece_at(to) {
            Some(target) if target.color != color => {
                out.push(Move::with_piece(from, to, piece, &game_state.board));
            }
            None if game_state.en_passant_target == Some(to)
                && game_state.piece_at(Square::new(from.row, to.col))
                    == Some(Piece::new(color.opposite(), PieceKind::Pawn)) =>
            {
                out.push(Move::en_passant(from, to, piece));
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::generate_pawn_moves;
    use crate::game_state::chess_types::*;
    use crate::utils::board_diagram::board_from_diagram;

    fn pawn_moves_from(diagram: &str, side: Color, from: Square) -> Vec<Move> {
        let board = board_from_diagram(diagram).expect("diagram should parse");
        let game = GameState::from_position(board, side, CastleRights::NONE)
            .expect("position should load");
        let piece = game.piece_at(from).expect("origin should hold a pawn");
        let mut out = Vec::new();
        generate_pawn_moves(&game, from, piece, &mut out);
        out
    }

    #[test]
    fn double_advance_is_blocked_by_a_piece_on_the_intermediate_square() {
        let moves = pawn_moves_from(
            "....k...\n\
             ........\n\
             ........\n\
             ........\n\
             ........\n\
             ....n...\n\
             ....P...\n\
             ....K...",
            Color::Light,
            Square::new(6, 4),
        );
        assert!(moves.is_empty(), "blocked pawn should have no advances, got {moves:?}");
    }

    #[test]
    fn double_advance_requires_an_empty_destination() {
        let moves = pawn_moves_from(
            "....k...\n\
             ........\n\
             ........\n\
             ........\n\
             ...n....\n\
             ........\n\
             ...P....\n\
             ....K...",
            Color::Light,
            Square::new(6, 3),
        );
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].end, Square::new(5, 3));
    }

    #[test]
    fn captures_only_enemy_pieces() {
        let moves = pawn_moves_from(
            "....k...\n\
             ........\n\
             ........\n\
             ........\n\
             ........\n\
             ..nRn...\n\
             ...P....\n\
             ....K...",
            Color::Light,
            Square::new(6, 3),
        );
        let ends: Vec<_> = moves.iter().map(|m| m.end).collect();
        assert_eq!(ends.len(), 2);
        assert!(ends.contains(&Square::new(5, 2)));
        assert!(ends.contains(&Square::new(5, 4)));
        assert!(moves.iter().all(|m| m.is_capture()));
    }
}
