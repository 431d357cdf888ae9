#![allow(dead_code)]

use igo_engine::{Board, Game, GameConfig, Point, Rules, Stone, group_and_liberties};

pub fn new_game(size: u8) -> Game {
    Game::with_size(size).unwrap()
}

pub fn game_with_rules(size: u8, rules: Rules) -> Game {
    Game::new(GameConfig::with_rules(size, rules)).unwrap()
}

/// Play alternating moves starting with whoever is to move. `None` passes.
pub fn play_all(game: &mut Game, moves: &[Option<Point>]) {
    for mv in moves {
        let stone = game.to_move().expect("game ended early");
        match mv {
            Some(point) => {
                game.place(stone, *point)
                    .unwrap_or_else(|e| panic!("{stone} at {point:?}: {e}"));
            }
            None => {
                game.pass(stone).unwrap();
            }
        }
    }
}

/// Black + White + Empty must cover the whole board.
pub fn assert_counts_cover_board(board: &Board) {
    let n = board.size() as usize;
    let total = board.count(Some(Stone::Black))
        + board.count(Some(Stone::White))
        + board.count(None);
    assert_eq!(total, n * n);
}

/// Every group on the board has at least one liberty.
pub fn assert_no_dead_groups(board: &Board) {
    for p in board.points() {
        if let Some(group) = group_and_liberties(board, p) {
            assert!(!group.is_dead(), "dead group left at {p:?}:\n{board}");
        }
    }
}

/// Drive a seeded random game: each turn either passes (rarely) or plays a
/// random legal move. Calls `observe` after every accepted action.
pub fn random_game(
    seed: u64,
    size: u8,
    rules: Rules,
    max_turns: usize,
    mut observe: impl FnMut(&Game, &Game),
) -> Game {
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut game = game_with_rules(size, rules);

    for _ in 0..max_turns {
        let Some(stone) = game.to_move() else {
            break;
        };
        let before = game.clone();
        let legal = game.legal_moves(stone);
        if legal.is_empty() || rng.u8(..100) < 3 {
            game.pass(stone).unwrap();
        } else {
            let point = legal[rng.usize(..legal.len())];
            game.place(stone, point).unwrap();
        }
        observe(&before, &game);
    }

    game
}
