use crate::game_state::chess_types::Square;

/// Fixed-capacity list of destination squares precomputed for one origin.
#[derive(Debug, Clone, Copy)]
pub struct TargetList {
    squares: [Square; 8],
    len: u8,
}

impl TargetList {
    const EMPTY: TargetList = TargetList {
        squares: [Square::new(0, 0); 8],
        len: 0,
    };

    #[inline]
    pub fn as_slice(&self) -> &[Square] {
        &self.squares[..self.len as usize]
    }
}

/// Build, for every square, the on-board squares reached by `offsets`.
pub(crate) const fn generate_target_table(offsets: &[(i8, i8); 8]) -> [TargetList; 64] {
    let mut table = [TargetList::EMPTY; 64];
    let mut index = 0usize;

    while index < 64 {
        let row = (index / 8) as i8;
        let col = (index % 8) as i8;
        let mut list = TargetList::EMPTY;
        let mut k = 0usize;

        while k < offsets.len() {
            let r = row + offsets[k].0;
            let c = col + offsets[k].1;
            if r >= 0 && r < 8 && c >= 0 && c < 8 {
                list.squares[list.len as usize] = Square::new(r as u8, c as u8);
                list.len += 1;
            }
            k += 1;
        }

        table[index] = list;
        index += 1;
    }

    table
}

#[inline]
pub(crate) const fn table_index(square: Square) -> usize {
    square.row as usize * 8 + square.col as usize
}
