use super::serialization::parse_rows;
use super::{Board, Color, Position};
use crate::error::EngineError;

/// Builds a board from text rows (`B`, `W`, `.`), e.g. `["....", ".WB.", ".BW.", "...."]`.
pub fn setup_from_strings(setup: &[&str]) -> Result<Board, EngineError> {
    parse_rows(setup)
}

/// Standard opening: the four centre cells, White on the main diagonal.
///
/// For odd sizes the block sits just above/left of the middle.
pub fn standard_board(rows: usize, cols: usize) -> Result<Board, EngineError> {
    if rows < 2 || cols < 2 {
        return Err(EngineError::MalformedBoard(format!(
            "a {}x{} board cannot hold the opening block",
            rows, cols
        )));
    }
    let mut board = Board::new(rows, cols);
    let r = rows / 2 - 1;
    let c = cols / 2 - 1;
    board.place(Position::new(r, c), Color::White);
    board.place(Position::new(r, c + 1), Color::Black);
    board.place(Position::new(r + 1, c), Color::Black);
    board.place(Position::new(r + 1, c + 1), Color::White);
    Ok(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_8x8() {
        let board = standard_board(8, 8).unwrap();
        assert_eq!(board.get(Position::new(3, 3)), Some(Color::White));
        assert_eq!(board.get(Position::new(3, 4)), Some(Color::Black));
        assert_eq!(board.get(Position::new(4, 3)), Some(Color::Black));
        assert_eq!(board.get(Position::new(4, 4)), Some(Color::White));
        assert_eq!(board.empty_count(), 60);
    }

    #[test]
    fn test_standard_matches_text_setup() {
        let board = standard_board(4, 4).unwrap();
        let text = setup_from_strings(&["....", ".WB.", ".BW.", "...."]).unwrap();
        assert_eq!(board, text);
    }

    #[test]
    fn test_too_small_rejected() {
        assert!(standard_board(1, 8).is_err());
    }
}
