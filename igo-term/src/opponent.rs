use igo_engine::{Game, Point, Stone};

/// The computer side: plays a uniformly random legal point, or passes when
/// there is none.
pub struct RandomOpponent {
    pub stone: Stone,
    rng: fastrand::Rng,
}

impl RandomOpponent {
    pub fn new(stone: Stone, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        RandomOpponent { stone, rng }
    }

    /// Pick a move for the current position. `None` means pass.
    pub fn choose(&mut self, game: &Game) -> Option<Point> {
        let legal = game.legal_moves(self.stone);
        if legal.is_empty() {
            return None;
        }
        Some(legal[self.rng.usize(..legal.len())])
    }
}
