pub mod board;
pub mod card;
pub mod reorder;
pub mod seed;

pub use board::{BoardConfig, BoardState, Column};
pub use card::{Card, CardId, Lane};
pub use reorder::{reorder, DropEvent};
