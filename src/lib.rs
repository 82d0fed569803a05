//! Move selection for Othello-style games on rectangular boards.
//!
//! [`logic`] simulates single placements, [`player::ai::alpha_beta`] searches
//! the game tree, and [`player::make_move`] is the one-call entry point.

pub mod core;
pub mod error;
pub mod game;
pub mod logic;
pub mod player;
pub mod selfplay;


pub use crate::core::{Board, Color, Placement, Position};
pub use crate::error::{EngineError, EngineResult};
pub use crate::player::ai::{AIConfig, AlphaBetaAI, PlayMode, SearchReport};
pub use crate::player::{make_move, PlayerController};
