use super::board::Board;
use super::types::Position;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A chosen move together with the board it produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub position: Position,
    pub board: Board,
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.position)
    }
}
