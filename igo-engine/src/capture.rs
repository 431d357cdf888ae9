use serde::{Deserialize, Serialize};

use crate::Point;
use crate::board::Board;
use crate::group::GroupAnalyzer;
use crate::stone::Stone;

/// Prisoners taken, indexed by the capturing color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Captures {
    pub black: u32,
    pub white: u32,
}

impl Captures {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, stone: Stone) -> u32 {
        match stone {
            Stone::Black => self.black,
            Stone::White => self.white,
        }
    }

    pub(crate) fn add(&mut self, stone: Stone, count: u32) {
        match stone {
            Stone::Black => self.black += count,
            Stone::White => self.white += count,
        }
    }
}

/// Remove every opposing group adjacent to `point` that has no liberties left.
///
/// Dead groups are collected first and only then cleared, so the result does
/// not depend on the order the neighbors are visited. Returns the removed points.
pub fn apply_captures(board: &mut Board, just_played: Stone, point: Point) -> Vec<Point> {
    let mut analyzer = GroupAnalyzer::for_board(board);
    apply_captures_with(board, &mut analyzer, just_played, point)
}

pub(crate) fn apply_captures_with(
    board: &mut Board,
    analyzer: &mut GroupAnalyzer,
    just_played: Stone,
    point: Point,
) -> Vec<Point> {
    let opponent = just_played.opp();
    let mut checked: Vec<Point> = Vec::new();
    let mut dead: Vec<Point> = Vec::new();

    for n in board.neighbors(point) {
        if board.get(n) != Some(opponent) || checked.contains(&n) {
            continue;
        }
        let Some(group) = analyzer.analyze(board, n) else {
            continue;
        };
        if group.is_dead() {
            dead.extend_from_slice(&group.stones);
        }
        checked.extend(group.stones);
    }

    for &p in &dead {
        board.set(p, None);
    }

    if !dead.is_empty() {
        tracing::trace!(%just_played, ?point, removed = dead.len(), "captured stones");
    }

    dead
}
