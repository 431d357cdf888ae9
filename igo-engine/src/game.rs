use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Point;
use crate::board::Board;
use crate::capture::Captures;
use crate::config::{GameConfig, Rules};
use crate::error::GoError;
use crate::ko::{Ko, PositionHistory};
use crate::score::{self, Score};
use crate::stone::Stone;
use crate::turn::{Move, Turn};
use crate::validate::{self, Guards};

/// Where the game stands. `Terminal` is absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Phase {
    InProgress { to_move: Stone, passes: u8 },
    Terminal,
}

impl Phase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Terminal)
    }

    pub fn to_move(&self) -> Option<Stone> {
        match self {
            Phase::InProgress { to_move, .. } => Some(*to_move),
            Phase::Terminal => None,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::InProgress { to_move, .. } => write!(f, "{to_move} to play"),
            Phase::Terminal => write!(f, "game over"),
        }
    }
}

/// The serializable move history of a game, replayable into an identical `Game`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub config: GameConfig,
    pub moves: Vec<Turn>,
}

impl GameRecord {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    board: Board,
    phase: Phase,
    moves: Vec<Turn>,
    captures: Captures,
    ko: Option<Ko>,
    positions: PositionHistory,
}

impl Game {
    /// Start a game on an empty board with Black to move.
    pub fn new(config: GameConfig) -> Result<Self, GoError> {
        config.validate()?;
        let board = Board::new(config.size);
        let positions = PositionHistory::starting_from(&board);

        Ok(Game {
            config,
            board,
            phase: Phase::InProgress {
                to_move: Stone::Black,
                passes: 0,
            },
            moves: Vec::new(),
            captures: Captures::new(),
            ko: None,
            positions,
        })
    }

    pub fn with_size(size: u8) -> Result<Self, GoError> {
        Self::new(GameConfig::new(size))
    }

    /// Rebuild a game by replaying its record. Fails with the first move's error.
    pub fn replay(record: &GameRecord) -> Result<Self, GoError> {
        let mut game = Self::new(record.config)?;
        for turn in &record.moves {
            match turn.kind {
                Move::Play => {
                    let point = turn.pos.ok_or(GoError::OutOfBounds)?;
                    game.place(turn.stone, point)?;
                }
                Move::Pass => {
                    game.pass(turn.stone)?;
                }
            }
        }
        Ok(game)
    }

    // -- Accessors --

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn rules(&self) -> &Rules {
        &self.config.rules
    }

    pub fn size(&self) -> u8 {
        self.config.size
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_terminal(&self) -> bool {
        self.phase.is_terminal()
    }

    pub fn to_move(&self) -> Option<Stone> {
        self.phase.to_move()
    }

    pub fn passes(&self) -> u8 {
        match self.phase {
            Phase::InProgress { passes, .. } => passes,
            Phase::Terminal => 2,
        }
    }

    pub fn moves(&self) -> &[Turn] {
        &self.moves
    }

    pub fn captures(&self) -> &Captures {
        &self.captures
    }

    pub fn ko(&self) -> Option<&Ko> {
        self.ko.as_ref()
    }

    pub fn record(&self) -> GameRecord {
        GameRecord {
            config: self.config,
            moves: self.moves.clone(),
        }
    }

    // -- Queries --

    /// Whether `stone` could legally play at `point` on the current board, ignoring turn order.
    pub fn is_legal(&self, stone: Stone, point: Point) -> bool {
        validate::is_legal(&self.board, stone, point, self.guards())
    }

    /// Every point where `stone` may legally play, in row-major order.
    pub fn legal_moves(&self, stone: Stone) -> Vec<Point> {
        if self.is_terminal() {
            return Vec::new();
        }
        let guards = self.guards();
        self.board
            .points()
            .filter(|&p| validate::is_legal(&self.board, stone, p, guards))
            .collect()
    }

    /// Final score; only available once both players have passed in succession.
    pub fn score(&self) -> Result<Score, GoError> {
        if !self.is_terminal() {
            return Err(GoError::NotFinished);
        }
        Ok(score::score(&self.board, &self.captures, self.rules()))
    }

    // -- Game actions --

    pub fn place(&mut self, stone: Stone, point: Point) -> Result<Phase, GoError> {
        self.check_turn(stone)?;

        let placement = validate::validate(&self.board, stone, point, self.guards())
            .inspect_err(|e| tracing::trace!(%stone, ?point, "move rejected: {e}"))?;

        let captured = placement.captured.len() as u32;
        self.board = placement.board;
        self.ko = placement.ko;
        self.captures.add(stone, captured);
        self.positions.record(&self.board);
        self.moves.push(Turn::play(stone, point, captured));
        self.phase = Phase::InProgress {
            to_move: stone.opp(),
            passes: 0,
        };

        tracing::debug!(%stone, ?point, captured, "stone placed");
        Ok(self.phase)
    }

    pub fn pass(&mut self, stone: Stone) -> Result<Phase, GoError> {
        let passes = self.check_turn(stone)? + 1;

        self.ko = None;
        self.moves.push(Turn::pass(stone));
        self.phase = if passes >= 2 {
            tracing::debug!(moves = self.moves.len(), "both players passed, game over");
            Phase::Terminal
        } else {
            tracing::debug!(%stone, "pass");
            Phase::InProgress {
                to_move: stone.opp(),
                passes,
            }
        };

        Ok(self.phase)
    }

    // -- Internal helpers --

    /// Returns the current pass count if `stone` is allowed to act.
    fn check_turn(&self, stone: Stone) -> Result<u8, GoError> {
        match self.phase {
            Phase::Terminal => Err(GoError::GameOver),
            Phase::InProgress { to_move, .. } if to_move != stone => Err(GoError::WrongTurn),
            Phase::InProgress { passes, .. } => Ok(passes),
        }
    }

    fn guards(&self) -> Guards<'_> {
        let rules = self.rules();
        Guards {
            ko: self.ko.as_ref().filter(|_| rules.enforce_simple_ko),
            superko: rules.enforce_superko.then_some(&self.positions),
        }
    }
}
