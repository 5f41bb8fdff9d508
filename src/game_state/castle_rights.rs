use crate::game_state::chess_rules::{
    CastleSide, DARK_KINGSIDE_ROOK_HOME, DARK_QUEENSIDE_ROOK_HOME, LIGHT_KINGSIDE_ROOK_HOME,
    LIGHT_QUEENSIDE_ROOK_HOME,
};
use crate::game_state::chess_types::{Color, Square};

/// Snapshot of the four castling permissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastleRights {
    pub light_kingside: bool,
    pub light_queenside: bool,
    pub dark_kingside: bool,
    pub dark_queenside: bool,
}

impl CastleRights {
    pub const ALL: CastleRights = CastleRights {
        light_kingside: true,
        light_queenside: true,
        dark_kingside: true,
        dark_queenside: true,
    };

    pub const NONE: CastleRights = CastleRights {
        light_kingside: false,
        light_queenside: false,
        dark_kingside: false,
        dark_queenside: false,
    };

    #[inline]
    pub fn allows(&self, color: Color, side: CastleSide) -> bool {
        match (color, side) {
            (Color::Light, CastleSide::Kingside) => self.light_kingside,
            (Color::Light, CastleSide::Queenside) => self.light_queenside,
            (Color::Dark, CastleSide::Kingside) => self.dark_kingside,
            (Color::Dark, CastleSide::Queenside) => self.dark_queenside,
        }
    }

    pub fn revoke_king(&mut self, color: Color) {
        match color {
            Color::Light => {
                self.light_kingside = false;
                self.light_queenside = false;
            }
            Color::Dark => {
                self.dark_kingside = false;
                self.dark_queenside = false;
            }
        }
    }

    /// Clear the right tied to a rook home corner; other squares are ignored.
    pub fn revoke_corner(&mut self, square: Square) {
        match square {
            LIGHT_QUEENSIDE_ROOK_HOME => self.light_queenside = false,
            LIGHT_KINGSIDE_ROOK_HOME => self.light_kingside = false,
            DARK_QUEENSIDE_ROOK_HOME => self.dark_queenside = false,
            DARK_KINGSIDE_ROOK_HOME => self.dark_kingside = false,
            _ => {}
        }
    }
}

impl Default for CastleRights {
    fn default() -> Self {
        Self::ALL
    }
}
