//! igo-term: play Go in the terminal.
//!
//! Two people can share the keyboard, or one side can be left to a random
//! computer player with `--computer white`. Type `help` at the prompt for the
//! list of commands.

mod command;
mod opponent;
mod render;
mod session;

use clap::Parser;
use igo_engine::{Game, GameConfig, Rules, ScoringMode, Stone};

use crate::opponent::RandomOpponent;
use crate::session::Session;

#[derive(Parser, Debug)]
#[command(name = "igo-term")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board size: 9, 13 or 19
    #[arg(long, env = "IGO_SIZE", default_value_t = 9)]
    size: u8,

    /// Points added to White's total
    #[arg(long, env = "IGO_KOMI", default_value_t = 0.0)]
    komi: f64,

    /// `area` (stones + territory + captures) or `territory` (territory + captures)
    #[arg(long, env = "IGO_SCORING", default_value = "area")]
    scoring: ScoringMode,

    /// Forbid recreating any earlier whole-board position
    #[arg(long, env = "IGO_SUPERKO")]
    superko: bool,

    /// Forbid the immediate retake of a single-stone ko
    #[arg(long, env = "IGO_KO")]
    ko: bool,

    /// Let the computer play this color
    #[arg(long, env = "IGO_COMPUTER")]
    computer: Option<Stone>,

    /// Seed for the computer player
    #[arg(long, env = "IGO_SEED")]
    seed: Option<u64>,
}

impl Cli {
    fn config(&self) -> GameConfig {
        GameConfig::with_rules(
            self.size,
            Rules {
                scoring: self.scoring,
                komi: self.komi,
                enforce_superko: self.superko,
                enforce_simple_ko: self.ko,
            },
        )
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "igo_term=info,igo_engine=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config();
    let game = Game::new(config)?;
    tracing::info!(
        size = config.size,
        scoring = %config.rules.scoring,
        komi = config.rules.komi,
        "new game"
    );

    let opponent = cli
        .computer
        .map(|stone| RandomOpponent::new(stone, cli.seed));
    let mut session = Session::new(game, opponent);

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    session.run(stdin.lock(), &mut stdout)?;

    let game = session.game();
    tracing::info!(
        moves = game.moves().len(),
        finished = game.is_terminal(),
        "session ended"
    );
    Ok(())
}
