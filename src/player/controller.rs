use crate::core::{Board, Color, Placement};
use crate::error::EngineResult;

/// Something that picks moves for one color.
pub trait PlayerController {
    /// The chosen placement, or `None` when there is no legal move (a pass).
    fn choose_move(&self, board: &Board) -> EngineResult<Option<Placement>>;
    fn name(&self) -> &str;
    fn color(&self) -> Color;
}
