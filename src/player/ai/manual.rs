use crate::core::{Board, Color, Placement, Position};
use crate::error::{EngineError, EngineResult};
use crate::logic::evaluate_move;
use crate::player::PlayerController;

/// Plays a position chosen outside the engine, after checking it is legal.
pub struct ManualAI {
    pub color: Color,
    pub name: String,
    pub requested: Position,
}

impl ManualAI {
    pub fn new(color: Color, name: &str, requested: Position) -> Self {
        Self {
            color,
            name: name.to_string(),
            requested,
        }
    }
}

impl PlayerController for ManualAI {
    /// `Ok(None)` when this color has no move at all, so the caller can pass.
    fn choose_move(&self, board: &Board) -> EngineResult<Option<Placement>> {
        if !crate::logic::has_legal_move(board, self.color) {
            return Ok(None);
        }
        let pos = self.requested;
        if pos.row >= board.rows() || pos.col >= board.cols() {
            return Err(EngineError::IllegalManualMove(pos));
        }
        match evaluate_move(board, pos, self.color) {
            (0, _) => Err(EngineError::IllegalManualMove(pos)),
            (_, next) => Ok(Some(Placement {
                position: pos,
                board: next,
            })),
        }
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
    use crate::core::standard_board;

    #[test]
    fn test_manual_legal_move() {
        let board = standard_board(4, 4).unwrap();
        let ai = ManualAI::new(Color::Black, "You", Position::new(1, 0));
        let placement = ai.choose_move(&board).unwrap().unwrap();
        assert_eq!(placement.position, Position::new(1, 0));
        assert_eq!(placement.board.count(Color::Black), 4);
    }

    #[test]
    fn test_manual_illegal_move() {
        let board = standard_board(4, 4).unwrap();
        for pos in [Position::new(0, 0), Position::new(1, 1), Position::new(9, 9)] {
            let err = ManualAI::new(Color::Black, "You", pos)
                .choose_move(&board)
                .unwrap_err();
            assert!(matches!(err, EngineError::IllegalManualMove(p) if p == pos));
        }
    }
}
