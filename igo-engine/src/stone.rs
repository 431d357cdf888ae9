use std::fmt;
use std::str::FromStr;

use serde_repr::{Deserialize_repr, Serialize_repr};

/// Stone color. The discriminants double as the cell encoding used by `Board`,
/// with `0` meaning empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(i8)]
pub enum Stone {
    Black = 1,
    White = -1,
}

impl Stone {
    /// Black first, the order both scoring and rendering use.
    pub const BOTH: [Stone; 2] = [Stone::Black, Stone::White];

    /// Decode a board cell. Only the sign matters; `0` is empty.
    pub fn from_cell(cell: i8) -> Option<Self> {
        match cell.signum() {
            1 => Some(Stone::Black),
            -1 => Some(Stone::White),
            _ => None,
        }
    }

    pub fn cell(self) -> i8 {
        self as i8
    }

    pub fn opp(self) -> Self {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
        }
    }
}

impl fmt::Display for Stone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stone::Black => "Black",
            Stone::White => "White",
        })
    }
}

/// Accepts `b`/`black` and `w`/`white` in any case, as typed on the command line.
impl FromStr for Stone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "b" | "black" => Ok(Stone::Black),
            "w" | "white" => Ok(Stone::White),
            _ => Err(format!("expected black or white, got `{s}`")),
        }
    }
}
