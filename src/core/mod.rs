pub mod board;
pub mod r#move;
pub mod serialization;
pub mod setup;
pub mod types;

pub use board::Board;
pub use r#move::Placement;
pub use serialization::BoardSnapshot;
pub use setup::{setup_from_strings, standard_board};
pub use types::{Color, Position};
