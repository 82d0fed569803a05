use super::board::Board;
use super::types::Color;
use crate::error::EngineError;
use serde::{Deserialize, Serialize};

/// Wire form of a board: one string per row, `B` / `W` / `.`.
///
/// A space or `-` is also read as an empty cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub rows: Vec<String>,
}

impl From<Board> for BoardSnapshot {
    fn from(board: Board) -> Self {
        let rows = (0..board.rows())
            .map(|row| {
                board
                    .row_cells(row)
                    .iter()
                    .map(|c| c.map_or('.', Color::symbol))
                    .collect()
            })
            .collect();
        BoardSnapshot { rows }
    }
}

impl TryFrom<BoardSnapshot> for Board {
    type Error = EngineError;

    fn try_from(snapshot: BoardSnapshot) -> Result<Self, Self::Error> {
        parse_rows(&snapshot.rows)
    }
}

pub(crate) fn parse_rows<S: AsRef<str>>(rows: &[S]) -> Result<Board, EngineError> {
    let height = rows.len();
    if height == 0 {
        return Err(EngineError::MalformedBoard("board has no rows".to_string()));
    }
    let width = rows[0].as_ref().chars().count();
    if width == 0 {
        return Err(EngineError::MalformedBoard("board has no columns".to_string()));
    }

    let mut cells = Vec::with_capacity(height * width);
    for (y, row) in rows.iter().enumerate() {
        let row = row.as_ref();
        if row.chars().count() != width {
            return Err(EngineError::MalformedBoard(format!(
                "row {} has {} cells, expected {}",
                y,
                row.chars().count(),
                width
            )));
        }
        for ch in row.chars() {
            let cell = match ch {
                '.' | ' ' | '-' => None,
                other => match Color::from_symbol(other) {
                    Some(color) => Some(color),
                    None => {
                        return Err(EngineError::MalformedBoard(format!(
                            "unexpected cell `{}` in row {}",
                            other, y
                        )))
                    }
                },
            };
            cells.push(cell);
        }
    }
    Ok(Board::from_cells(height, width, cells))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Position;

    #[test]
    fn test_board_json_uses_row_strings() {
        let mut board = Board::new(2, 3);
        board.place(Position::new(0, 2), Color::White);
        board.place(Position::new(1, 0), Color::Black);

        let json = serde_json::to_value(&board).unwrap();
        assert_eq!(json, serde_json::json!({ "rows": ["..W", "B.."] }));

        let restored: Board = serde_json::from_value(json).unwrap();
        assert_eq!(restored, board);
    }

    #[test]
    fn test_blank_cells_accepted() {
        let board = parse_rows(&["B W", "   "]).unwrap();
        assert_eq!(board.count(Color::Black), 1);
        assert_eq!(board.count(Color::White), 1);
        assert_eq!(board.empty_count(), 4);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = parse_rows(&["BW.", "B."]).unwrap_err();
        assert!(matches!(err, EngineError::MalformedBoard(_)));
    }

    #[test]
    fn test_unknown_symbol_rejected() {
        assert!(parse_rows(&["BX"]).is_err());
        let json = serde_json::json!({ "rows": ["B?"] });
        assert!(serde_json::from_value::<Board>(json).is_err());
    }
}
