use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::Point;
use crate::board::Board;
use crate::stone::Stone;

/// Simple ko marker: the point that was just emptied by a single-stone
/// capture and the color that may not immediately retake there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ko {
    pub point: Point,
    pub illegal: Stone,
}

impl Ko {
    pub fn forbids(&self, point: Point, stone: Stone) -> bool {
        self.point == point && self.illegal == stone
    }

    /// A ko arises when a lone stone captures exactly one stone and is left
    /// with that captured point as its only liberty.
    pub(crate) fn detect(
        board: &Board,
        captured: &[Point],
        liberties: &[Point],
        point: Point,
        stone: Stone,
    ) -> Option<Ko> {
        let is_ko = captured.len() == 1
            && liberties.len() == 1
            && liberties[0] == captured[0]
            && board
                .neighbors(point)
                .iter()
                .all(|&n| board.get(n) != Some(stone));

        is_ko.then(|| Ko {
            point: captured[0],
            illegal: stone.opp(),
        })
    }
}

/// Every whole-board position reached so far in a game.
#[derive(Debug, Clone, Default)]
pub struct PositionHistory {
    seen: HashSet<Vec<i8>>,
}

impl PositionHistory {
    pub fn starting_from(board: &Board) -> Self {
        let mut history = Self::default();
        history.record(board);
        history
    }

    pub fn record(&mut self, board: &Board) {
        self.seen.insert(board.cells().to_vec());
    }

    pub fn contains(&self, board: &Board) -> bool {
        self.seen.contains(board.cells())
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
