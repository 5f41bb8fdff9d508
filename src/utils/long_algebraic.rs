//! Coordinate move text (`e2e4`) to engine moves.
//!
//! Parsed squares are only a lookup key: the returned move is always the
//! matching entry from a legal move list, so castling, en passant and
//! promotion flags come from the generator rather than from the text.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::utils::algebraic::algebraic_to_square;

/// Find the legal move named by `text`.
///
/// Accepts four characters, or five when the last is `q` (promotion is
/// always to a queen).
pub fn parse_long_algebraic(text: &str, legal_moves: &[Move]) -> ChessResult<Move> {
    let text = text.trim();
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(ChessError::InvalidMoveText(text.to_owned()));
    }

    let start = algebraic_to_square(&text[0..2])
        .map_err(|_| ChessError::InvalidMoveText(text.to_owned()))?;
    let end = algebraic_to_square(&text[2..4])
        .map_err(|_| ChessError::InvalidMoveText(text.to_owned()))?;

    let promotion_suffix = text.len() == 5;
    if promotion_suffix && !text.ends_with(['q', 'Q']) {
        return Err(ChessError::InvalidMoveText(text.to_owned()));
    }

    let found = legal_moves
        .iter()
        .find(|mv| mv.start == start && mv.end == end)
        .copied()
        .ok_or_else(|| ChessError::IllegalMove(text.to_owned()))?;

    if promotion_suffix && !found.is_promotion {
        return Err(ChessError::InvalidMoveText(text.to_owned()));
    }

    Ok(found)
}

/// Apply a sequence of coordinate moves, checking each against the legal list.
///
/// Stops at the first bad entry; moves already applied stay applied.
pub fn play_long_algebraic(game_state: &mut GameState, moves: &[&str]) -> ChessResult<()> {
    for text in moves {
        let legal = game_state.legal_moves();
        let mv = parse_long_algebraic(text, &legal)?;
        game_state.apply_move(&mv);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{parse_long_algebraic, play_long_algebraic};
    use crate::errors::ChessError;
    use crate::game_state::chess_types::*;

    #[test]
    fn parses_a_legal_opening_move() {
        let mut game = GameState::new();
        let legal = game.legal_moves();
        let mv = parse_long_algebraic("g1f3", &legal).expect("knight move should parse");
        assert_eq!(mv.start, Square::new(7, 6));
        assert_eq!(mv.end, Square::new(5, 5));
        assert_eq!(mv.piece_moved, Piece::new(Color::Light, PieceKind::Knight));
    }

    #[test]
    fn rejects_malformed_and_illegal_text() {
        let mut game = GameState::new();
        let legal = game.legal_moves();

        assert!(matches!(
            parse_long_algebraic("e2", &legal),
            Err(ChessError::InvalidMoveText(_))
        ));
        assert!(matches!(
            parse_long_algebraic("z2e4", &legal),
            Err(ChessError::InvalidMoveText(_))
        ));
        assert!(matches!(
            parse_long_algebraic("e2e5", &legal),
            Err(ChessError::IllegalMove(_))
        ));
        assert!(matches!(
            parse_long_algebraic("e2e4q", &legal),
            Err(ChessError::InvalidMoveText(_))
        ));
    }

    #[test]
    fn en_passant_flag_comes_from_the_generator() {
        let mut game = GameState::new();
        play_long_algebraic(&mut game, &["e2e4", "a7a6", "e4e5", "d7d5"])
            .expect("opening sequence should be legal");

        let legal = game.legal_moves();
        let mv = parse_long_algebraic("e5d6", &legal).expect("en passant should be legal");
        assert!(mv.is_en_passant);
        assert_eq!(mv.piece_captured, Some(Piece::new(Color::Dark, PieceKind::Pawn)));
    }

    #[test]
    fn play_stops_at_the_first_illegal_move() {
        let mut game = GameState::new();
        let err = play_long_algebraic(&mut game, &["e2e4", "e7e5", "e4e5"])
            .expect_err("pawn cannot advance into a blocked square");
        assert_eq!(err, ChessError::IllegalMove("e4e5".to_owned()));
        assert_eq!(game.ply_count(), 2);
    }
}
