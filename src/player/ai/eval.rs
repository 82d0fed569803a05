//! # Evaluation Module
//!
//! Static evaluation of a board from the searching player's point of view
//! (positive = good for `me`).
//!
//! ## Scoring Strategy
//! Every occupied cell is classified by where it sits on the board:
//! 1. **Corner**: can never be flipped back, worth `corner_value`.
//! 2. **Edge**: border cells other than corners, worth `edge_value`.
//! 3. **Near edge**: one row or column in from a border. Holding one of these
//!    hands the neighbouring edge to the opponent, so the sign is inverted:
//!    own discs cost `single_flip_value`, opponent discs earn it.
//! 4. **Interior**: everything else, worth `single_flip_value`.
//!
//! Own discs add their weight, opponent discs subtract it. A decided game
//! (one side wiped out, or a full board with a leader) adds or subtracts
//! `win_value` on top.

use super::config::EvaluationConfig;
use crate::core::{Board, Color, Position};

/// Positional class of a cell. Checked in declaration order, so a corner is
/// never also reported as an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Corner,
    Edge,
    NearEdge,
    Interior,
}

pub fn classify(pos: Position, rows: usize, cols: usize) -> Region {
    let top = pos.row == 0;
    let bottom = pos.row + 1 == rows;
    let left = pos.col == 0;
    let right = pos.col + 1 == cols;

    if (top || bottom) && (left || right) {
        Region::Corner
    } else if top || bottom || left || right {
        Region::Edge
    } else if pos.row == 1 || pos.row + 2 == rows || pos.col == 1 || pos.col + 2 == cols {
        Region::NearEdge
    } else {
        Region::Interior
    }
}

/// Signed weight of a cell held by `me`. Opponent cells use the negation.
fn region_value(region: Region, weights: &EvaluationConfig) -> i32 {
    match region {
        Region::Corner => weights.corner_value,
        Region::Edge => weights.edge_value,
        Region::NearEdge => -weights.single_flip_value,
        Region::Interior => weights.single_flip_value,
    }
}

/// `mine` has won: the other side has no discs left, or the board is full and `mine` leads.
fn is_winning(mine: usize, theirs: usize, cells: usize) -> bool {
    (theirs == 0 && mine > 0) || (mine + theirs >= cells && mine > theirs)
}

/// Scores `board` for `me`. Swapping `me` for the opponent negates the result.
pub fn calculate_score(board: &Board, me: Color, weights: &EvaluationConfig) -> i32 {
    let (rows, cols) = (board.rows(), board.cols());
    let mut score: i32 = 0;
    let mut my_count = 0;
    let mut their_count = 0;

    for pos in board.positions() {
        let owner = match board.get(pos) {
            Some(c) => c,
            None => continue,
        };
        let value = region_value(classify(pos, rows, cols), weights);
        if owner == me {
            my_count += 1;
            score = score.saturating_add(value);
        } else {
            their_count += 1;
            score = score.saturating_sub(value);
        }
    }

    let cells = board.cell_count();
    if is_winning(my_count, their_count, cells) {
        score = score.saturating_add(weights.win_value);
    } else if is_winning(their_count, my_count, cells) {
        score = score.saturating_sub(weights.win_value);
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{setup_from_strings, standard_board};

    fn weights() -> EvaluationConfig {
        EvaluationConfig::default()
    }

    #[test]
    fn test_classify_8x8() {
        assert_eq!(classify(Position::new(0, 0), 8, 8), Region::Corner);
        assert_eq!(classify(Position::new(7, 7), 8, 8), Region::Corner);
        assert_eq!(classify(Position::new(0, 3), 8, 8), Region::Edge);
        assert_eq!(classify(Position::new(5, 7), 8, 8), Region::Edge);
        assert_eq!(classify(Position::new(1, 1), 8, 8), Region::NearEdge);
        assert_eq!(classify(Position::new(6, 3), 8, 8), Region::NearEdge);
        assert_eq!(classify(Position::new(3, 4), 8, 8), Region::Interior);
    }

    #[test]
    fn test_classify_4x4_has_no_interior() {
        let board = Board::new(4, 4);
        assert!(board
            .positions()
            .all(|p| classify(p, 4, 4) != Region::Interior));
        assert_eq!(classify(Position::new(1, 2), 4, 4), Region::NearEdge);
    }

    #[test]
    fn test_opening_is_balanced() {
        let board = standard_board(8, 8).unwrap();
        assert_eq!(calculate_score(&board, Color::Black, &weights()), 0);
    }

    #[test]
    fn test_weights_by_region() {
        let w = weights();
        let corner =
            setup_from_strings(&["B.......", "........", "........", "..W.....", "........"])
                .unwrap();
        // corner for B, near-edge for W (second row from the bottom)
        assert_eq!(
            calculate_score(&corner, Color::Black, &w),
            w.corner_value + w.single_flip_value
        );

        let edge = setup_from_strings(&[
            "...B....", "........", "........", "...W....", "........", "........", "........",
            "........",
        ])
        .unwrap();
        // edge for B, interior for W
        assert_eq!(
            calculate_score(&edge, Color::Black, &w),
            w.edge_value - w.single_flip_value
        );
    }

    #[test]
    fn test_wipeout_bonus() {
        let w = weights();
        let board = setup_from_strings(&["....", ".BB.", "....", "...."]).unwrap();
        let expected = -2 * w.single_flip_value + w.win_value;
        assert_eq!(calculate_score(&board, Color::Black, &w), expected);
        assert_eq!(calculate_score(&board, Color::White, &w), -expected);
    }

    #[test]
    fn test_full_board_bonus() {
        let w = weights();
        let board = setup_from_strings(&["BB", "BW"]).unwrap();
        // all four are corners: 3 - 1 corners for B, plus the win
        assert_eq!(
            calculate_score(&board, Color::Black, &w),
            2 * w.corner_value + w.win_value
        );
    }

    #[test]
    fn test_empty_board_scores_zero() {
        let board = Board::new(6, 6);
        assert_eq!(calculate_score(&board, Color::White, &weights()), 0);
    }
}
