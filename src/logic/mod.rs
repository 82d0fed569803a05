//! Move simulation: legality and capture flipping for a single placement.

use crate::core::{Board, Color, Position};

/// The eight compass directions a capture run can follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// (row, col) step
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
        }
    }
}

/// Neighbouring cell in `dir`, or `None` off the board.
pub fn offset_pos(board: &Board, pos: Position, dir: Direction) -> Option<Position> {
    let (dr, dc) = dir.delta();
    let row = pos.row as isize + dr;
    let col = pos.col as isize + dc;
    if board.contains(row, col) {
        Some(Position::new(row as usize, col as usize))
    } else {
        None
    }
}

/// Opponent cells that a disc of `color` at `from` would flip along `dir`.
///
/// Empty when the run is not closed by an own disc before an empty cell or the edge.
fn capture_run(board: &Board, from: Position, color: Color, dir: Direction) -> Vec<Position> {
    let mut run = Vec::new();
    let mut curr = from;
    for _ in 0..board.rows().max(board.cols()) {
        let next = match offset_pos(board, curr, dir) {
            Some(p) => p,
            None => return Vec::new(),
        };
        match board.get(next) {
            Some(c) if c == color => return run,
            Some(_) => run.push(next),
            None => return Vec::new(),
        }
        curr = next;
    }
    Vec::new()
}

/// Plays `color` at `pos` on a copy of `board`.
///
/// Returns the number of flipped discs and the resulting board. A count of
/// zero means the move is illegal (off the board, occupied, or nothing
/// captured) and the returned board equals the input.
pub fn evaluate_move(board: &Board, pos: Position, color: Color) -> (usize, Board) {
    let mut next = board.clone();
    if !board.contains(pos.row as isize, pos.col as isize) || !board.is_empty_at(pos) {
        return (0, next);
    }

    let mut captured = 0;
    for dir in Direction::ALL {
        let run = capture_run(board, pos, color, dir);
        captured += run.len();
        for p in run {
            next.place(p, color);
        }
    }

    if captured > 0 {
        next.place(pos, color);
    }
    (captured, next)
}

/// Legal placements for `color`, row-major, with their resulting boards.
pub fn legal_moves(board: &Board, color: Color) -> Vec<(Position, Board)> {
    board
        .positions()
        .filter_map(|pos| {
            let (captured, next) = evaluate_move(board, pos, color);
            (captured > 0).then_some((pos, next))
        })
        .collect()
}

pub fn has_legal_move(board: &Board, color: Color) -> bool {
    board
        .positions()
        .any(|pos| evaluate_move(board, pos, color).0 > 0)
}

/// Neither side can place a disc.
pub fn is_game_over(board: &Board) -> bool {
    !has_legal_move(board, Color::Black) && !has_legal_move(board, Color::White)
}

/// Color with more discs, `None` on a tie.
pub fn leader(board: &Board) -> Option<Color> {
    let black = board.count(Color::Black);
    let white = board.count(Color::White);
    match black.cmp(&white) {
        std::cmp::Ordering::Greater => Some(Color::Black),
        std::cmp::Ordering::Less => Some(Color::White),
        std::cmp::Ordering::Equal => None,
    }
}
