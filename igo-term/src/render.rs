use std::fmt::Write as _;

use igo_engine::score::Score;
use igo_engine::{Board, Point, Stone};

use crate::command::COLUMNS;

/// Star points (hoshi) for the standard board sizes; empty for anything else.
pub fn star_points(size: u8) -> Vec<Point> {
    let off = if size >= 13 { 3 } else { 2 };
    let far = size.saturating_sub(1 + off);
    let mid = size / 2;

    match size {
        9 => vec![(mid, mid)],
        13 => vec![(off, off), (off, far), (far, off), (far, far), (mid, mid)],
        19 => [off, mid, far]
            .iter()
            .flat_map(|&r| [off, mid, far].map(move |c| (r, c)))
            .collect(),
        _ => Vec::new(),
    }
}

/// Draw the board with coordinates. `last` is highlighted with parentheses.
pub fn board(board: &Board, last: Option<Point>) -> String {
    let size = board.size();
    let hoshi = star_points(size);
    let header: String = COLUMNS
        .chars()
        .take(size as usize)
        .map(|c| format!(" {c}"))
        .collect();

    let mut out = String::new();
    let _ = writeln!(out, "   {header}");
    for row in 0..size {
        let label = size - row;
        let _ = write!(out, "{label:>2} ");
        for col in 0..size {
            let point = (row, col);
            let glyph = match board.get(point) {
                Some(Stone::Black) => 'X',
                Some(Stone::White) => 'O',
                None if hoshi.contains(&point) => '+',
                None => '.',
            };
            if last == Some(point) {
                let _ = write!(out, "({glyph}");
            } else if col > 0 && last == Some((row, col - 1)) {
                let _ = write!(out, "){glyph}");
            } else {
                let _ = write!(out, " {glyph}");
            }
        }
        if last == Some((row, size - 1)) {
            out.push(')');
        }
        let _ = writeln!(out, " {label}");
    }
    let _ = writeln!(out, "   {header}");
    out
}

pub fn score(score: &Score) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "scoring: {} (komi {})", score.mode, score.komi);
    for stone in Stone::BOTH {
        let points = match stone {
            Stone::Black => score.black,
            Stone::White => score.white,
        };
        let _ = writeln!(
            out,
            "{stone:<6} stones {:>3}  territory {:>3}  captures {:>3}  total {}",
            points.stones,
            points.territory,
            points.captures,
            score.total(stone)
        );
    }
    let _ = write!(out, "result: {}", score.result());
    out
}
