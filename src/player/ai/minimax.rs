use super::config::EvaluationConfig;
use super::eval::calculate_score;
use crate::core::{Board, Color, Placement};
use crate::error::EngineResult;
use crate::logic::legal_moves;
use crate::player::PlayerController;

/// Plain minimax without pruning. Visits the full tree to `depth`, so it is
/// only practical on small boards; it serves as the reference the pruned
/// search must agree with.
pub struct MinimaxAI {
    pub color: Color,
    pub name: String,
    pub depth: usize,
    pub weights: EvaluationConfig,
}

impl MinimaxAI {
    pub fn new(color: Color, name: &str, depth: usize, weights: EvaluationConfig) -> Self {
        Self {
            color,
            name: name.to_string(),
            depth: depth.max(1),
            weights,
        }
    }

    fn minimax(&self, board: &Board, depth: usize) -> i32 {
        if depth >= self.depth {
            return calculate_score(board, self.color, &self.weights);
        }

        // children of an even-depth node are our moves
        let mover = if depth % 2 == 0 {
            self.color
        } else {
            self.color.opponent()
        };
        let moves = legal_moves(board, mover);
        if moves.is_empty() {
            return calculate_score(board, self.color, &self.weights);
        }

        let scores = moves.iter().map(|(_, next)| self.minimax(next, depth + 1));
        if depth % 2 == 0 {
            scores.max().unwrap_or(i32::MIN)
        } else {
            scores.min().unwrap_or(i32::MAX)
        }
    }

    /// First root move with the highest minimax value, and that value.
    pub fn best_move(&self, board: &Board) -> Option<(Placement, i32)> {
        let mut best: Option<(Placement, i32)> = None;
        for (position, next) in legal_moves(board, self.color) {
            let value = self.minimax(&next, 1);
            if best.as_ref().map_or(true, |(_, v)| value > *v) {
                best = Some((
                    Placement {
                        position,
                        board: next,
                    },
                    value,
                ));
            }
        }
        best
    }
}

impl PlayerController for MinimaxAI {
    fn choose_move(&self, board: &Board) -> EngineResult<Option<Placement>> {
        Ok(self.best_move(board).map(|(placement, _)| placement))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn color(&self) -> Color {
        self.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{standard_board, Position};

    #[test]
    fn test_depth_one_is_greedy_on_eval() {
        let board = standard_board(4, 4).unwrap();
        let weights = EvaluationConfig::default();
        let ai = MinimaxAI::new(Color::Black, "MM", 1, weights);
        let (placement, value) = ai.best_move(&board).unwrap();

        let expected = legal_moves(&board, Color::Black)
            .iter()
            .map(|(_, b)| calculate_score(b, Color::Black, &weights))
            .max()
            .unwrap();
        assert_eq!(value, expected);
        assert_eq!(placement.position, Position::new(0, 1));
    }
}
