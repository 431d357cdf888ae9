use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::GoError;

pub const SUPPORTED_SIZES: [u8; 3] = [9, 13, 19];

/// How live stones and prisoners are weighed at the end of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringMode {
    /// Stones on the board + territory + captures.
    #[default]
    AreaPlusCaptures,
    /// Territory + captures.
    TerritoryPlusCaptures,
}

impl fmt::Display for ScoringMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringMode::AreaPlusCaptures => write!(f, "area"),
            ScoringMode::TerritoryPlusCaptures => write!(f, "territory"),
        }
    }
}

impl std::str::FromStr for ScoringMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "area" | "area_plus_captures" => Ok(ScoringMode::AreaPlusCaptures),
            "territory" | "territory_plus_captures" => Ok(ScoringMode::TerritoryPlusCaptures),
            _ => Err(format!("unknown scoring mode: {s}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    pub scoring: ScoringMode,
    /// Added to White's total.
    pub komi: f64,
    /// Reject moves that recreate any earlier whole-board position.
    pub enforce_superko: bool,
    /// Reject the immediate single-stone retake of a ko.
    pub enforce_simple_ko: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: u8,
    #[serde(default)]
    pub rules: Rules,
}

impl GameConfig {
    pub fn new(size: u8) -> Self {
        GameConfig {
            size,
            rules: Rules::default(),
        }
    }

    pub fn with_rules(size: u8, rules: Rules) -> Self {
        GameConfig { size, rules }
    }

    pub fn validate(&self) -> Result<(), GoError> {
        if !SUPPORTED_SIZES.contains(&self.size) {
            return Err(GoError::InvalidSize(self.size));
        }
        if !self.rules.komi.is_finite() {
            return Err(GoError::InvalidKomi);
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(19)
    }
}
