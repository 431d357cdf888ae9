pub mod board;
pub mod capture;
pub mod config;
pub mod error;
pub mod game;
pub mod group;
pub mod ko;
pub mod score;
pub mod stone;
pub mod turn;
pub mod validate;

/// An intersection as `(row, col)`, 0-indexed from the top-left corner.
pub type Point = (u8, u8);

pub use board::Board;
pub use capture::{Captures, apply_captures};
pub use config::{GameConfig, Rules, SUPPORTED_SIZES, ScoringMode};
pub use error::GoError;
pub use game::{Game, GameRecord, Phase};
pub use group::{Group, group_and_liberties};
pub use ko::Ko;
pub use score::{Score, TerritoryMap};
pub use stone::Stone;
pub use turn::{Move, Turn};
pub use validate::{Guards, Placement};
