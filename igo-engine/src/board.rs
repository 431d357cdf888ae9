use std::fmt;

use arrayvec::ArrayVec;

use crate::Point;
use crate::stone::Stone;

/// A square Go board stored as a flat row-major array of cell values
/// (`0` empty, otherwise `Stone::cell`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: Vec<i8>,
    size: u8,
}

impl Board {
    /// Create an empty board of `size` x `size` intersections.
    pub fn new(size: u8) -> Self {
        Board {
            cells: vec![0; size as usize * size as usize],
            size,
        }
    }

    /// Build a board from an ASCII layout. `B` = Black, `W` = White, anything else is empty.
    pub fn from_layout(layout: &[&str]) -> Self {
        let size = layout.len();
        assert!(
            layout.iter().all(|row| row.chars().count() == size),
            "layout must be square"
        );

        let cells = layout
            .iter()
            .flat_map(|row| {
                row.chars().map(|c| match c {
                    'B' => Stone::Black.cell(),
                    'W' => Stone::White.cell(),
                    _ => 0,
                })
            })
            .collect();

        Board {
            cells,
            size: size as u8,
        }
    }

    // -- Accessors --

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn cells(&self) -> &[i8] {
        &self.cells
    }

    pub fn get(&self, point: Point) -> Option<Stone> {
        if self.on_board(point) {
            Stone::from_cell(self.cells[self.idx(point)])
        } else {
            None
        }
    }

    pub fn on_board(&self, (row, col): Point) -> bool {
        row < self.size && col < self.size
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&c| c == 0)
    }

    /// Number of intersections holding `state` (`None` counts empty points).
    pub fn count(&self, state: Option<Stone>) -> usize {
        let want = state.map_or(0, Stone::cell);
        self.cells.iter().filter(|&&c| c == want).count()
    }

    /// Every point on the board in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        let n = self.size;
        (0..n).flat_map(move |row| (0..n).map(move |col| (row, col)))
    }

    /// The 4-connected neighbors that are on the board. Empty for an off-board point.
    pub fn neighbors(&self, (row, col): Point) -> ArrayVec<Point, 4> {
        let mut result = ArrayVec::new();
        if !self.on_board((row, col)) {
            return result;
        }
        if row > 0 {
            result.push((row - 1, col));
        }
        if row + 1 < self.size {
            result.push((row + 1, col));
        }
        if col > 0 {
            result.push((row, col - 1));
        }
        if col + 1 < self.size {
            result.push((row, col + 1));
        }
        result
    }

    // -- Crate-internal mutation --

    pub(crate) fn set(&mut self, point: Point, state: Option<Stone>) {
        if self.on_board(point) {
            let i = self.idx(point);
            self.cells[i] = state.map_or(0, Stone::cell);
        }
    }

    #[inline]
    pub(crate) fn idx(&self, (row, col): Point) -> usize {
        row as usize * self.size as usize + col as usize
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.cells.len()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size.max(1) as usize) {
            let line: String = row
                .iter()
                .map(|&c| match Stone::from_cell(c) {
                    Some(Stone::Black) => 'B',
                    Some(Stone::White) => 'W',
                    None => '+',
                })
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
