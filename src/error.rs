//! Error types for the engine
//!
//! Illegal moves, passes and an exhausted time budget are ordinary search
//! outcomes and never show up here. These variants cover malformed input and
//! broken invariants.

use crate::core::Position;

/// Errors that can surface from the engine
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Play mode code outside 1 (manual), 2 (random), 3 (intelligent)
    #[error("Unknown play mode code: {0}")]
    UnknownPlayMode(u8),

    /// A node was asked to evaluate past the depth limit of its search
    #[error("Search reached depth {depth} past the limit of {max_depth}")]
    DepthOverrun { depth: usize, max_depth: usize },

    /// Configuration values out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Board snapshot could not be parsed
    #[error("Malformed board: {0}")]
    MalformedBoard(String),

    /// Unparseable color or position text
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Manual mode was selected without a requested position
    #[error("Manual play requires a requested position")]
    MissingManualMove,

    /// The requested manual position is not a legal move
    #[error("Illegal move requested at {0}")]
    IllegalManualMove(Position),
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
