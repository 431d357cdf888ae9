use serde::Serialize;

use crate::Point;
use crate::board::Board;
use crate::capture::Captures;
use crate::config::{Rules, ScoringMode};
use crate::group::VisitSet;
use crate::stone::Stone;

/// A maximal 4-connected set of empty points and the colors that border it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Region {
    pub points: Vec<Point>,
    pub borders_black: bool,
    pub borders_white: bool,
}

impl Region {
    /// The color credited with this region, or `None` for dame.
    pub fn owner(&self) -> Option<Stone> {
        match (self.borders_black, self.borders_white) {
            (true, false) => Some(Stone::Black),
            (false, true) => Some(Stone::White),
            _ => None,
        }
    }
}

/// Per-point territory ownership. Occupied points and dame are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TerritoryMap {
    size: u8,
    owners: Vec<Option<Stone>>,
}

impl TerritoryMap {
    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn owner(&self, (row, col): Point) -> Option<Stone> {
        if row < self.size && col < self.size {
            self.owners[row as usize * self.size as usize + col as usize]
        } else {
            None
        }
    }

    pub fn count(&self, stone: Stone) -> u32 {
        self.owners.iter().filter(|&&o| o == Some(stone)).count() as u32
    }
}

/// Partition the empty points of `board` into regions and classify each one.
pub fn classify_regions(board: &Board) -> (Vec<Region>, TerritoryMap) {
    let mut owners = vec![None; board.len()];
    let mut regions = Vec::new();
    let mut visited = VisitSet::for_board(board);
    let mut stack = Vec::new();

    for start in board.points() {
        if board.get(start).is_some() || !visited.insert(board.idx(start)) {
            continue;
        }

        let mut region = Region {
            points: Vec::new(),
            borders_black: false,
            borders_white: false,
        };
        stack.push(start);

        while let Some(p) = stack.pop() {
            region.points.push(p);
            for n in board.neighbors(p) {
                match board.get(n) {
                    Some(Stone::Black) => region.borders_black = true,
                    Some(Stone::White) => region.borders_white = true,
                    None => {
                        if visited.insert(board.idx(n)) {
                            stack.push(n);
                        }
                    }
                }
            }
        }

        let owner = region.owner();
        for &p in &region.points {
            owners[board.idx(p)] = owner;
        }
        regions.push(region);
    }

    let map = TerritoryMap {
        size: board.size(),
        owners,
    };
    (regions, map)
}

/// One color's share of the final count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlayerPoints {
    pub stones: u32,
    pub territory: u32,
    pub captures: u32,
}

impl PlayerPoints {
    pub fn total(&self, mode: ScoringMode) -> u32 {
        match mode {
            ScoringMode::AreaPlusCaptures => self.stones + self.territory + self.captures,
            ScoringMode::TerritoryPlusCaptures => self.territory + self.captures,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Score {
    pub black: PlayerPoints,
    pub white: PlayerPoints,
    pub komi: f64,
    pub mode: ScoringMode,
    pub territory: TerritoryMap,
    pub regions: Vec<Region>,
}

impl Score {
    pub fn black_total(&self) -> f64 {
        self.black.total(self.mode) as f64
    }

    pub fn white_total(&self) -> f64 {
        self.white.total(self.mode) as f64 + self.komi
    }

    pub fn total(&self, stone: Stone) -> f64 {
        match stone {
            Stone::Black => self.black_total(),
            Stone::White => self.white_total(),
        }
    }

    /// The winning color, or `None` for an exact tie.
    pub fn winner(&self) -> Option<Stone> {
        let (b, w) = (self.black_total(), self.white_total());
        if b > w {
            Some(Stone::Black)
        } else if w > b {
            Some(Stone::White)
        } else {
            None
        }
    }

    /// Winning margin in the usual `B+3.5` / `W+0.5` notation, or `Draw`.
    pub fn result(&self) -> String {
        let margin = (self.black_total() - self.white_total()).abs();
        match self.winner() {
            Some(Stone::Black) => format!("B+{margin}"),
            Some(Stone::White) => format!("W+{margin}"),
            None => "Draw".to_string(),
        }
    }
}

/// Score a finished board. `captures` are the prisoners each color took during play.
pub fn score(board: &Board, captures: &Captures, rules: &Rules) -> Score {
    let (regions, territory) = classify_regions(board);

    let points_for = |stone: Stone| PlayerPoints {
        stones: board.count(Some(stone)) as u32,
        territory: territory.count(stone),
        captures: captures.get(stone),
    };

    Score {
        black: points_for(Stone::Black),
        white: points_for(Stone::White),
        komi: rules.komi,
        mode: rules.scoring,
        territory,
        regions,
    }
}
