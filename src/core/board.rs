use super::serialization::BoardSnapshot;
use super::types::{Color, Position};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Game board. Cells are stored row-major; `None` is an empty cell.
///
/// A board is never shared between search nodes. Deriving a position always
/// goes through `clone`, so the parent's board stays untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "BoardSnapshot", try_from = "BoardSnapshot")]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Option<Color>>,
}

impl Board {
    pub fn new(rows: usize, cols: usize) -> Self {
        Board {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    pub fn contains(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    fn index(&self, pos: Position) -> usize {
        assert!(
            pos.row < self.rows && pos.col < self.cols,
            "{} is off a {}x{} board",
            pos,
            self.rows,
            self.cols
        );
        pos.row * self.cols + pos.col
    }

    pub fn get(&self, pos: Position) -> Option<Color> {
        self.cells[self.index(pos)]
    }

    pub fn set(&mut self, pos: Position, cell: Option<Color>) {
        let idx = self.index(pos);
        self.cells[idx] = cell;
    }

    pub fn place(&mut self, pos: Position, color: Color) {
        self.set(pos, Some(color));
    }

    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.get(pos).is_none()
    }

    /// All coordinates in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| Position::new(row, col)))
    }

    pub fn count(&self, color: Color) -> usize {
        self.cells.iter().filter(|c| **c == Some(color)).count()
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    pub(crate) fn row_cells(&self, row: usize) -> &[Option<Color>] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    pub(crate) fn from_cells(rows: usize, cols: usize, cells: Vec<Option<Color>>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Board { rows, cols, cells }
    }
}

/// One text row per board row, `B` / `W` / `.`.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.rows {
            let line: String = self
                .row_cells(row)
                .iter()
                .map(|c| c.map_or('.', Color::symbol))
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(4, 6);
        assert_eq!(board.cell_count(), 24);
        assert_eq!(board.empty_count(), 24);
        assert_eq!(board.count(Color::Black), 0);
    }

    #[test]
    #[should_panic(expected = "off a 2x3 board")]
    fn test_column_past_the_edge_does_not_wrap() {
        let mut board = Board::new(2, 3);
        board.place(Position::new(0, 3), Color::Black);
    }

    #[test]
    fn test_positions_are_row_major() {
        let board = Board::new(2, 3);
        let order: Vec<Position> = board.positions().collect();
        assert_eq!(order.len(), 6);
        assert_eq!(order[0], Position::new(0, 0));
        assert_eq!(order[1], Position::new(0, 1));
        assert_eq!(order[3], Position::new(1, 0));
    }

    #[test]
    fn test_clone_does_not_share_cells() {
        let mut board = Board::new(4, 4);
        board.place(Position::new(1, 1), Color::White);
        let mut copy = board.clone();
        copy.place(Position::new(1, 1), Color::Black);
        assert_eq!(board.get(Position::new(1, 1)), Some(Color::White));
        assert_eq!(copy.get(Position::new(1, 1)), Some(Color::Black));
    }

    #[test]
    fn test_contains() {
        let board = Board::new(3, 5);
        assert!(board.contains(0, 4));
        assert!(!board.contains(3, 0));
        assert!(!board.contains(-1, 2));
        assert!(!board.contains(1, 5));
    }

    #[test]
    fn test_display() {
        let mut board = Board::new(2, 2);
        board.place(Position::new(0, 1), Color::Black);
        board.place(Position::new(1, 0), Color::White);
        assert_eq!(board.to_string(), ".B\nW.\n");
    }
}
