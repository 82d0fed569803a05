use crate::core::{Board, Color, Position};
use crate::error::EngineResult;
use crate::logic::leader;
use crate::player::PlayerController;
use serde::{Deserialize, Serialize};

/// One ply of a game record. `position` is `None` for a pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KifuEntry {
    pub color: Color,
    pub position: Option<Position>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KifuData {
    pub initial: Board,
    pub moves: Vec<KifuEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    pub winner: Option<Color>,
    pub black: usize,
    pub white: usize,
    /// Placements made, passes excluded
    pub moves: usize,
}

pub struct Game {
    pub initial: Board,
    pub board: Board,
    pub current_player: Color,
    pub history: Vec<KifuEntry>,
    consecutive_passes: usize,
}

impl Game {
    /// Black moves first.
    pub fn new(board: Board) -> Self {
        Game {
            initial: board.clone(),
            board,
            current_player: Color::Black,
            history: Vec::new(),
            consecutive_passes: 0,
        }
    }

    /// Two passes in a row end the game.
    pub fn is_over(&self) -> bool {
        self.consecutive_passes >= 2
    }

    /// Lets `controller` play for the side to move and hands the turn over.
    pub fn step(&mut self, controller: &dyn PlayerController) -> EngineResult<()> {
        debug_assert_eq!(controller.color(), self.current_player);

        let position = match controller.choose_move(&self.board)? {
            Some(placement) => {
                self.board = placement.board;
                self.consecutive_passes = 0;
                Some(placement.position)
            }
            None => {
                log::debug!("{} passes", self.current_player);
                self.consecutive_passes += 1;
                None
            }
        };
        self.history.push(KifuEntry {
            color: self.current_player,
            position,
        });
        self.current_player = self.current_player.opponent();
        Ok(())
    }

    pub fn play(
        &mut self,
        black: &dyn PlayerController,
        white: &dyn PlayerController,
    ) -> EngineResult<GameOutcome> {
        while !self.is_over() {
            let controller = match self.current_player {
                Color::Black => black,
                Color::White => white,
            };
            self.step(controller)?;
        }
        Ok(self.outcome())
    }

    pub fn outcome(&self) -> GameOutcome {
        GameOutcome {
            winner: leader(&self.board),
            black: self.board.count(Color::Black),
            white: self.board.count(Color::White),
            moves: self.history.iter().filter(|e| e.position.is_some()).count(),
        }
    }

    pub fn kifu(&self) -> KifuData {
        KifuData {
            initial: self.initial.clone(),
            moves: self.history.clone(),
        }
    }
}
