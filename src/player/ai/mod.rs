pub mod alpha_beta;
pub mod config;
pub mod eval;
pub mod manual;
pub mod minimax;
pub mod random;

pub use alpha_beta::{AlphaBetaAI, SearchNode, SearchReport};
pub use config::{AIConfig, EvaluationConfig, PlayMode, SearchConfig};
pub use eval::calculate_score;
pub use manual::ManualAI;
pub use minimax::MinimaxAI;
pub use random::RandomAI;
