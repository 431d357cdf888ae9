use crate::Point;
use crate::board::Board;
use crate::stone::Stone;

/// Board-sized visited marks that are reset in O(1) by bumping a generation counter.
#[derive(Debug, Clone)]
pub struct VisitSet {
    marks: Vec<u32>,
    epoch: u32,
}

impl VisitSet {
    pub fn new(len: usize) -> Self {
        VisitSet {
            marks: vec![0; len],
            epoch: 1,
        }
    }

    pub fn for_board(board: &Board) -> Self {
        Self::new(board.len())
    }

    pub fn clear(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
        if self.epoch == 0 {
            self.marks.fill(0);
            self.epoch = 1;
        }
    }

    /// Mark `i`; returns false if it was already marked in this generation.
    pub fn insert(&mut self, i: usize) -> bool {
        if self.marks[i] == self.epoch {
            return false;
        }
        self.marks[i] = self.epoch;
        true
    }

    pub fn contains(&self, i: usize) -> bool {
        self.marks[i] == self.epoch
    }
}

/// A maximal 4-connected set of same-colored stones and its liberties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub stone: Stone,
    pub stones: Vec<Point>,
    pub liberties: Vec<Point>,
}

impl Group {
    pub fn len(&self) -> usize {
        self.stones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stones.is_empty()
    }

    pub fn is_dead(&self) -> bool {
        self.liberties.is_empty()
    }

    pub fn contains(&self, point: Point) -> bool {
        self.stones.contains(&point)
    }
}

/// Reusable flood-fill state for group and liberty queries on one board size.
#[derive(Debug, Clone)]
pub struct GroupAnalyzer {
    seen: VisitSet,
    libs: VisitSet,
    stack: Vec<Point>,
}

impl GroupAnalyzer {
    pub fn for_board(board: &Board) -> Self {
        GroupAnalyzer {
            seen: VisitSet::for_board(board),
            libs: VisitSet::for_board(board),
            stack: Vec::new(),
        }
    }

    /// Flood-fill the group at `origin`. Returns `None` if `origin` is empty or off the board.
    pub fn analyze(&mut self, board: &Board, origin: Point) -> Option<Group> {
        let stone = board.get(origin)?;

        self.seen.clear();
        self.libs.clear();
        self.stack.clear();

        let mut stones = Vec::new();
        let mut liberties = Vec::new();

        self.seen.insert(board.idx(origin));
        self.stack.push(origin);

        while let Some(p) = self.stack.pop() {
            stones.push(p);
            for n in board.neighbors(p) {
                let ni = board.idx(n);
                match board.get(n) {
                    Some(s) if s == stone => {
                        if self.seen.insert(ni) {
                            self.stack.push(n);
                        }
                    }
                    Some(_) => {}
                    None => {
                        if self.libs.insert(ni) {
                            liberties.push(n);
                        }
                    }
                }
            }
        }

        Some(Group {
            stone,
            stones,
            liberties,
        })
    }
}

/// Compute the group containing `origin` and its liberties.
pub fn group_and_liberties(board: &Board, origin: Point) -> Option<Group> {
    GroupAnalyzer::for_board(board).analyze(board, origin)
}
