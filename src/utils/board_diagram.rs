//! Plain-text board diagrams.
//!
//! Eight lines of eight cells, top line first (rank 8). `.` marks an empty
//! cell, uppercase letters are light pieces and lowercase letters are dark.
//! Surrounding whitespace on each line is ignored so diagrams can be indented
//! inside string literals.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;

pub fn board_from_diagram(diagram: &str) -> ChessResult<Board> {
    let rows: Vec<&str> = diagram
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if rows.len() != 8 {
        return Err(ChessError::InvalidDiagram(format!(
            "expected 8 rows, found {}",
            rows.len()
        )));
    }

    let mut board = EMPTY_BOARD;
    for (row, line) in rows.iter().enumerate() {
        let cells: Vec<char> = line.chars().collect();
        if cells.len() != 8 {
            return Err(ChessError::InvalidDiagram(format!(
                "row {row} has {} cells: {line:?}",
                cells.len()
            )));
        }

        for (col, cell) in cells.into_iter().enumerate() {
            board[row][col] = piece_from_char(cell)?;
        }
    }

    Ok(board)
}

/// Inverse of [`board_from_diagram`]; rows are joined with `\n`.
pub fn board_to_diagram(board: &Board) -> String {
    board
        .iter()
        .map(|cells| {
            cells
                .iter()
                .map(|cell| cell.map_or('.', piece_to_char))
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn piece_from_char(cell: char) -> ChessResult<Option<Piece>> {
    if cell == '.' {
        return Ok(None);
    }

    let kind = PieceKind::from_code(cell.to_ascii_uppercase())
        .ok_or_else(|| ChessError::InvalidDiagram(format!("unknown piece symbol {cell:?}")))?;
    let color = if cell.is_ascii_uppercase() {
        Color::Light
    } else {
        Color::Dark
    };
    Ok(Some(Piece::new(color, kind)))
}

fn piece_to_char(piece: Piece) -> char {
    match piece.color {
        Color::Light => piece.kind.code(),
        Color::Dark => piece.kind.code().to_ascii_lowercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::{board_from_diagram, board_to_diagram};
    use crate::errors::ChessError;
    use crate::game_state::chess_rules::STARTING_BOARD;

    const START: &str = "rnbqkbnr\n\
                         pppppppp\n\
                         ........\n\
                         ........\n\
                         ........\n\
                         ........\n\
                         PPPPPPPP\n\
                         RNBQKBNR";

    #[test]
    fn start_diagram_matches_starting_board() {
        let board = board_from_diagram(START).expect("diagram should parse");
        assert_eq!(board, STARTING_BOARD);
        assert_eq!(board_to_diagram(&board), START);
    }

    #[test]
    fn indented_lines_are_accepted() {
        let indented = START
            .lines()
            .map(|line| format!("    {line}  "))
            .collect::<Vec<_>>()
            .join("\n");
        assert_eq!(board_from_diagram(&indented), Ok(STARTING_BOARD));
    }

    #[test]
    fn wrong_shape_is_rejected() {
        let short = "rnbqkbnr\npppppppp";
        assert!(matches!(board_from_diagram(short), Err(ChessError::InvalidDiagram(_))));

        let wide = START.replacen("RNBQKBNR", "RNBQKBNRR", 1);
        assert!(matches!(board_from_diagram(&wide), Err(ChessError::InvalidDiagram(_))));
    }

    #[test]
    fn unknown_symbols_are_rejected() {
        let bad = START.replacen("........", "...x....", 1);
        assert!(matches!(board_from_diagram(&bad), Err(ChessError::InvalidDiagram(_))));
    }
}
