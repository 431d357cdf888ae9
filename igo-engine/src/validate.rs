use crate::Point;
use crate::board::Board;
use crate::capture::apply_captures_with;
use crate::error::GoError;
use crate::group::GroupAnalyzer;
use crate::ko::{Ko, PositionHistory};
use crate::stone::Stone;

/// Optional repetition rules consulted after the capture and suicide checks.
#[derive(Debug, Clone, Copy, Default)]
pub struct Guards<'a> {
    pub ko: Option<&'a Ko>,
    pub superko: Option<&'a PositionHistory>,
}

impl Guards<'_> {
    pub fn none() -> Self {
        Self::default()
    }
}

/// The outcome of a legal placement, resolved on a copy of the board.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub board: Board,
    pub captured: Vec<Point>,
    pub liberties: Vec<Point>,
    pub ko: Option<Ko>,
}

/// Decide whether `stone` may be placed at `point`, resolving captures on a
/// disposable copy. `board` itself is never modified.
pub fn validate(
    board: &Board,
    stone: Stone,
    point: Point,
    guards: Guards<'_>,
) -> Result<Placement, GoError> {
    if !board.on_board(point) {
        return Err(GoError::OutOfBounds);
    }

    if board.get(point).is_some() {
        return Err(GoError::Occupied);
    }

    let mut next = board.clone();
    let mut analyzer = GroupAnalyzer::for_board(&next);
    next.set(point, Some(stone));

    // Opponent captures must be fully resolved before the suicide check.
    let captured = apply_captures_with(&mut next, &mut analyzer, stone, point);

    let liberties = analyzer
        .analyze(&next, point)
        .map(|group| group.liberties)
        .unwrap_or_default();
    if liberties.is_empty() {
        return Err(GoError::Suicide);
    }

    if guards.ko.is_some_and(|ko| ko.forbids(point, stone)) {
        return Err(GoError::Repetition);
    }

    if guards.superko.is_some_and(|seen| seen.contains(&next)) {
        return Err(GoError::Repetition);
    }

    let ko = Ko::detect(&next, &captured, &liberties, point, stone);

    Ok(Placement {
        board: next,
        captured,
        liberties,
        ko,
    })
}

pub fn is_legal(board: &Board, stone: Stone, point: Point, guards: Guards<'_>) -> bool {
    validate(board, stone, point, guards).is_ok()
}
