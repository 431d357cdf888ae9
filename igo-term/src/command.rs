//! Line commands understood by the shell.

use std::path::PathBuf;

use igo_engine::Point;

/// Column letters, skipping `I` as Go boards traditionally do.
pub const COLUMNS: &str = "ABCDEFGHJKLMNOPQRST";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Play(Point),
    Pass,
    Show,
    Legal,
    Score,
    Save(PathBuf),
    Load(PathBuf),
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  play <point>   place a stone, e.g. `play D4` or `play 3 4` (row col, 0-based)
  pass           pass the turn; two passes in a row end the game
  show           print the board
  legal          list legal points for the side to move
  score          print the score of a finished game
  save <file>    write the game record as JSON
  load <file>    replay a game record from JSON
  help           this text
  quit           leave";

impl Command {
    pub fn parse(line: &str, size: u8) -> Result<Self, String> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err("empty command".to_string());
        };
        let rest: Vec<&str> = words.collect();

        match head.to_ascii_lowercase().as_str() {
            "play" | "p" => parse_point(&rest, size).map(Command::Play),
            "pass" => Ok(Command::Pass),
            "show" | "board" => Ok(Command::Show),
            "legal" => Ok(Command::Legal),
            "score" => Ok(Command::Score),
            "save" => file_arg(&rest).map(Command::Save),
            "load" => file_arg(&rest).map(Command::Load),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            // A bare vertex is shorthand for `play`.
            _ if rest.is_empty() => parse_point(&[head], size).map(Command::Play),
            other => Err(format!("unknown command: {other}")),
        }
    }
}

fn file_arg(rest: &[&str]) -> Result<PathBuf, String> {
    match rest {
        [path] => Ok(PathBuf::from(path)),
        _ => Err("expected a single file path".to_string()),
    }
}

/// Parse either a vertex such as `D4` (rows counted from the bottom) or a
/// `row col` pair of 0-based indices from the top-left corner.
pub fn parse_point(args: &[&str], size: u8) -> Result<Point, String> {
    match args {
        [vertex] => parse_vertex(vertex, size),
        [row, col] => {
            let row: u8 = row.parse().map_err(|_| format!("bad row: {row}"))?;
            let col: u8 = col.parse().map_err(|_| format!("bad column: {col}"))?;
            Ok((row, col))
        }
        _ => Err("expected a point like D4 or `3 4`".to_string()),
    }
}

fn parse_vertex(vertex: &str, size: u8) -> Result<Point, String> {
    let mut chars = vertex.chars();
    let letter = chars
        .next()
        .map(|c| c.to_ascii_uppercase())
        .ok_or_else(|| "empty point".to_string())?;
    let col = COLUMNS
        .find(letter)
        .ok_or_else(|| format!("bad column letter: {letter}"))?;
    let number: u8 = chars
        .as_str()
        .parse()
        .map_err(|_| format!("bad row number in {vertex}"))?;
    if number == 0 || number > size {
        return Err(format!("row {number} is off a {size}x{size} board"));
    }
    Ok((size - number, col as u8))
}

/// Inverse of `parse_vertex`.
pub fn vertex_name((row, col): Point, size: u8) -> String {
    let letter = COLUMNS.chars().nth(col as usize).unwrap_or('?');
    format!("{letter}{}", size.saturating_sub(row))
}
