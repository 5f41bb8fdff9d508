//! Perft node counting over the shared state.
//!
//! Walks the legal move tree with apply/reverse and tallies leaf move kinds;
//! used to validate move generation against published counts.

use crate::game_state::chess_types::*;
use crate::game_state::made_move::MadeMove;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

pub fn perft(game_state: &mut GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in game_state.legal_moves() {
        perft_recurse(game_state, &mv, depth, 1, &mut total);
    }
    total
}

/// Leaf node count only, skipping the per-kind tallies.
pub fn perft_nodes(game_state: &mut GameState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = game_state.legal_moves();
    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .iter()
        .map(|mv| {
            let mut child = MadeMove::new(game_state, mv);
            perft_nodes(&mut child, depth - 1)
        })
        .sum()
}

fn perft_recurse(
    game_state: &mut GameState,
    mv: &Move,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) {
    let mut child = MadeMove::new(game_state, mv);

    if current_depth == search_depth {
        counts.nodes += 1;

        if mv.is_capture() {
            counts.captures += 1;
        }
        if mv.is_en_passant {
            counts.en_passant += 1;
        }
        if mv.is_castle {
            counts.castles += 1;
        }
        if mv.is_promotion {
            counts.promotions += 1;
        }
        if child.is_in_check() {
            counts.checks += 1;
            if child.legal_moves().is_empty() {
                counts.checkmates += 1;
            }
        }
        return;
    }

    for next in child.legal_moves() {
        perft_recurse(&mut child, &next, search_depth, current_depth + 1, counts);
    }
}
