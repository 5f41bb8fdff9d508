//! Scoped apply/reverse.
//!
//! `MadeMove` applies a move when created and reverses it when dropped, so a
//! search frame or legality probe cannot leave the shared board out of step
//! with its history, whether it returns normally, breaks on a cutoff, or
//! unwinds.

use std::ops::{Deref, DerefMut};

use crate::game_state::chess_types::{GameState, Move};

pub struct MadeMove<'a> {
    state: &'a mut GameState,
}

impl<'a> MadeMove<'a> {
    #[inline]
    pub fn new(state: &'a mut GameState, mv: &Move) -> Self {
        state.apply_move(mv);
        Self { state }
    }
}

impl Deref for MadeMove<'_> {
    type Target = GameState;

    #[inline]
    fn deref(&self) -> &GameState {
        self.state
    }
}

impl DerefMut for MadeMove<'_> {
    #[inline]
    fn deref_mut(&mut self) -> &mut GameState {
        self.state
    }
}

impl Drop for MadeMove<'_> {
    #[inline]
    fn drop(&mut self) {
        self.state.reverse_move();
    }
}
