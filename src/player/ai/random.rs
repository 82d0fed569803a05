use crate::core::{Board, Color, Placement};
use crate::error::EngineResult;
use crate::logic::legal_moves;
use crate::player::PlayerController;
use rand::seq::SliceRandom;

pub struct RandomAI {
    pub color: Color,
    pub name: String,
}

impl RandomAI {
    pub fn new(color: Color, name: &str) -> Self {
        RandomAI {
            color,
            name: name.to_string(),
        }
    }
}

impl PlayerController for RandomAI {
    fn choose_move(&self, board: &Board) -> EngineResult<Option<Placement>> {
        let moves = legal_moves(board, self.color);
        let mut rng = rand::thread_rng();
        Ok(moves
            .choose(&mut rng)
            .map(|(position, next)| Placement {
                position: *position,
                board: next.clone(),
            }))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn color(&self) -> Color {
        self.color
    }
}
