use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Point;
use crate::stone::Stone;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Play,
    Pass,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Play => write!(f, "play"),
            Move::Pass => write!(f, "pass"),
        }
    }
}

/// One entry of the game history: who moved, where, and how many stones it took.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub kind: Move,
    pub stone: Stone,
    pub pos: Option<Point>,
    #[serde(default)]
    pub captured: u32,
}

impl Turn {
    pub fn play(stone: Stone, point: Point, captured: u32) -> Self {
        Turn {
            kind: Move::Play,
            stone,
            pos: Some(point),
            captured,
        }
    }

    pub fn pass(stone: Stone) -> Self {
        Turn {
            kind: Move::Pass,
            stone,
            pos: None,
            captured: 0,
        }
    }

    pub fn is_play(&self) -> bool {
        self.kind == Move::Play
    }

    pub fn is_pass(&self) -> bool {
        self.kind == Move::Pass
    }
}
