use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Context;
use igo_engine::{Game, GameRecord, GoError, Phase, Point, Stone};

use crate::command::{Command, HELP, vertex_name};
use crate::opponent::RandomOpponent;
use crate::render;

/// One interactive game: the engine state plus the optional computer side.
pub struct Session {
    game: Game,
    opponent: Option<RandomOpponent>,
}

impl Session {
    pub fn new(game: Game, opponent: Option<RandomOpponent>) -> Self {
        Session { game, opponent }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Read commands until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> anyhow::Result<()> {
        self.computer_turns(out)?;
        self.show(out)?;

        for line in input.lines() {
            let line = line.context("reading command")?;
            if line.trim().is_empty() {
                continue;
            }
            match Command::parse(&line, self.game.size()) {
                Ok(Command::Quit) => break,
                Ok(command) => self.execute(command, out)?,
                Err(e) => writeln!(out, "? {e}")?,
            }
        }
        Ok(())
    }

    fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> anyhow::Result<()> {
        match command {
            Command::Play(point) => {
                let Some(stone) = self.human_to_move(out)? else {
                    return Ok(());
                };
                match self.game.place(stone, point) {
                    Ok(_) => self.after_move(out)?,
                    Err(e) => self.report(e, point, out)?,
                }
            }
            Command::Pass => {
                let Some(stone) = self.human_to_move(out)? else {
                    return Ok(());
                };
                self.game.pass(stone)?;
                writeln!(out, "{stone} passes")?;
                self.after_move(out)?;
            }
            Command::Show => self.show(out)?,
            Command::Legal => match self.game.to_move() {
                Some(stone) => {
                    let size = self.game.size();
                    let names: Vec<String> = self
                        .game
                        .legal_moves(stone)
                        .into_iter()
                        .map(|p| vertex_name(p, size))
                        .collect();
                    writeln!(out, "{} legal for {stone}: {}", names.len(), names.join(" "))?;
                }
                None => writeln!(out, "game is over")?,
            },
            Command::Score => match self.game.score() {
                Ok(score) => writeln!(out, "{}", render::score(&score))?,
                Err(e) => writeln!(out, "? {e}")?,
            },
            Command::Save(path) => match self.save(&path) {
                Ok(()) => writeln!(out, "saved {}", path.display())?,
                Err(e) => writeln!(out, "? {e:#}")?,
            },
            Command::Load(path) => match load(&path) {
                Ok(game) => {
                    self.game = game;
                    writeln!(out, "loaded {}", path.display())?;
                    self.after_move(out)?;
                }
                Err(e) => writeln!(out, "? {e:#}")?,
            },
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => {}
        }
        Ok(())
    }

    /// The stone the human should play, or `None` after explaining why they can't.
    fn human_to_move<W: Write>(&self, out: &mut W) -> anyhow::Result<Option<Stone>> {
        match self.game.to_move() {
            None => {
                writeln!(out, "? {}", GoError::GameOver)?;
                Ok(None)
            }
            Some(stone) if self.opponent.as_ref().is_some_and(|o| o.stone == stone) => {
                writeln!(out, "? {}", GoError::WrongTurn)?;
                Ok(None)
            }
            Some(stone) => Ok(Some(stone)),
        }
    }

    fn after_move<W: Write>(&mut self, out: &mut W) -> anyhow::Result<()> {
        self.computer_turns(out)?;
        self.show(out)?;
        if let Ok(score) = self.game.score() {
            writeln!(out, "{}", render::score(&score))?;
        }
        Ok(())
    }

    fn computer_turns<W: Write>(&mut self, out: &mut W) -> anyhow::Result<()> {
        let Some(opponent) = self.opponent.as_mut() else {
            return Ok(());
        };
        while self.game.to_move() == Some(opponent.stone) {
            let stone = opponent.stone;
            match opponent.choose(&self.game) {
                Some(point) => {
                    self.game.place(stone, point)?;
                    writeln!(out, "{stone} plays {}", vertex_name(point, self.game.size()))?;
                }
                None => {
                    self.game.pass(stone)?;
                    writeln!(out, "{stone} passes")?;
                }
            }
        }
        Ok(())
    }

    fn report<W: Write>(&self, error: GoError, point: Point, out: &mut W) -> anyhow::Result<()> {
        tracing::debug!(?point, "declined: {error}");
        let name = if self.game.board().on_board(point) {
            vertex_name(point, self.game.size())
        } else {
            format!("{point:?}")
        };
        writeln!(out, "? {name}: {error}")?;
        Ok(())
    }

    fn show<W: Write>(&self, out: &mut W) -> anyhow::Result<()> {
        let last = self.game.moves().last().and_then(|t| t.pos);
        write!(out, "{}", render::board(self.game.board(), last))?;
        let captures = self.game.captures();
        writeln!(
            out,
            "captures: Black {}  White {}  |  {}",
            captures.black,
            captures.white,
            self.game.phase()
        )?;
        if let Phase::InProgress { passes: 1, .. } = self.game.phase() {
            writeln!(out, "(one pass; another ends the game)")?;
        }
        Ok(())
    }

    fn save(&self, path: &Path) -> anyhow::Result<()> {
        let json = self.game.record().to_json()?;
        std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        tracing::info!(path = %path.display(), moves = self.game.moves().len(), "game saved");
        Ok(())
    }
}

fn load(path: &Path) -> anyhow::Result<Game> {
    let json =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let record = GameRecord::from_json(&json).context("parsing game record")?;
    let game = Game::replay(&record).context("replaying game record")?;
    tracing::info!(path = %path.display(), moves = record.moves.len(), "game loaded");
    Ok(game)
}
