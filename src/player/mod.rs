pub mod ai;
pub mod controller;

pub use ai::{AIConfig, AlphaBetaAI, ManualAI, MinimaxAI, PlayMode, RandomAI};
pub use controller::PlayerController;

use crate::core::{Board, Color, Placement, Position};
use crate::error::{EngineError, EngineResult};

/// Builds the controller for `config.search.play_mode`.
///
/// Manual play needs `requested`; the other modes ignore it.
pub fn build_controller(
    color: Color,
    config: &AIConfig,
    requested: Option<Position>,
) -> EngineResult<Box<dyn PlayerController>> {
    config.validate()?;
    let name = format!("{} {:?}", color, config.search.play_mode);
    Ok(match config.search.play_mode {
        PlayMode::Manual => {
            let pos = requested.ok_or(EngineError::MissingManualMove)?;
            Box::new(ManualAI::new(color, &name, pos))
        }
        PlayMode::Random => Box::new(RandomAI::new(color, &name)),
        PlayMode::Intelligent => Box::new(AlphaBetaAI::new(color, &name, config.clone())),
    })
}

/// One-shot entry point: the move `color` plays on `board`, or `None` for a pass.
pub fn make_move(
    board: &Board,
    color: Color,
    config: &AIConfig,
    requested: Option<Position>,
) -> EngineResult<Option<Placement>> {
    build_controller(color, config, requested)?.choose_move(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::standard_board;

    #[test]
    fn test_manual_mode_requires_position() {
        let mut config = AIConfig::fixed_depth(2);
        config.search.play_mode = PlayMode::Manual;
        let board = standard_board(4, 4).unwrap();
        assert!(matches!(
            make_move(&board, Color::Black, &config, None),
            Err(EngineError::MissingManualMove)
        ));
        let placement = make_move(&board, Color::Black, &config, Some(Position::new(3, 2)))
            .unwrap()
            .unwrap();
        assert_eq!(placement.position, Position::new(3, 2));
    }

    #[test]
    fn test_each_mode_moves() {
        let board = standard_board(4, 4).unwrap();
        for mode in [PlayMode::Random, PlayMode::Intelligent] {
            let mut config = AIConfig::fixed_depth(2);
            config.search.play_mode = mode;
            let controller = build_controller(Color::White, &config, None).unwrap();
            assert_eq!(controller.color(), Color::White);
            assert!(controller.choose_move(&board).unwrap().is_some());
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = AIConfig::default();
        config.search.min_depth = 0;
        assert!(matches!(
            build_controller(Color::Black, &config, None),
            Err(EngineError::InvalidConfig(_))
        ));
    }
}
