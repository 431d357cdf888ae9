use igo_engine::{Game, GoError, Move, Rules, Stone, group_and_liberties};

use crate::common::{assert_counts_cover_board, new_game, random_game};

const SEEDS: std::ops::Range<u64> = 0..12;

fn rule_sets() -> [Rules; 3] {
    [
        Rules::default(),
        Rules {
            enforce_simple_ko: true,
            ..Rules::default()
        },
        Rules {
            enforce_superko: true,
            ..Rules::default()
        },
    ]
}

#[test]
fn stone_counts_always_cover_board() {
    for seed in SEEDS {
        random_game(seed, 9, Rules::default(), 250, |_, after| {
            assert_counts_cover_board(after.board());
        });
    }
}

#[test]
fn committed_moves_always_keep_a_liberty() {
    for rules in rule_sets() {
        for seed in SEEDS {
            random_game(seed, 9, rules, 250, |_, after| {
                let last = after.moves().last().unwrap();
                if let (Move::Play, Some(point)) = (last.kind, last.pos) {
                    let group = group_and_liberties(after.board(), point)
                        .expect("placed stone must remain on the board");
                    assert_eq!(group.stone, last.stone);
                    assert!(!group.is_dead());
                }
            });
        }
    }
}

#[test]
fn captures_remove_whole_groups() {
    for seed in SEEDS {
        random_game(seed, 9, Rules::default(), 300, |before, after| {
            let last = after.moves().last().unwrap();
            let Some(point) = last.pos else {
                return;
            };
            let victim = last.stone.opp();

            let removed: Vec<_> = before
                .board()
                .points()
                .filter(|&p| {
                    before.board().get(p) == Some(victim) && after.board().get(p).is_none()
                })
                .collect();
            assert_eq!(removed.len() as u32, last.captured);

            // Each removed stone's whole group in the prior position is gone.
            for &p in &removed {
                let group = group_and_liberties(before.board(), p).unwrap();
                for &q in &group.stones {
                    assert_eq!(after.board().get(q), None, "partial capture near {point:?}");
                }
            }
        });
    }
}

#[test]
fn capture_totals_match_history() {
    for seed in SEEDS {
        let game = random_game(seed, 13, Rules::default(), 400, |_, _| {});
        for stone in Stone::BOTH {
            let from_history: u32 = game
                .moves()
                .iter()
                .filter(|t| t.stone == stone)
                .map(|t| t.captured)
                .sum();
            assert_eq!(game.captures().get(stone), from_history);
        }
    }
}

#[test]
fn rejected_moves_change_nothing() {
    for seed in SEEDS {
        let game = random_game(seed, 9, Rules::default(), 120, |_, _| {});
        let Some(stone) = game.to_move() else {
            continue;
        };

        let legal = game.legal_moves(stone);
        let illegal: Vec<_> = game
            .board()
            .points()
            .filter(|p| !legal.contains(p))
            .collect();

        for point in illegal.into_iter().chain([(9, 0), (0, 9)]) {
            let mut probe = game.clone();
            let err = probe.place(stone, point).unwrap_err();
            assert!(err.is_rejection(), "unexpected {err:?}");
            assert_same_state(&game, &probe);
        }

        let mut probe = game.clone();
        assert_eq!(probe.place(stone.opp(), (4, 4)), Err(GoError::WrongTurn));
        assert_same_state(&game, &probe);
    }
}

#[test]
fn replaying_a_record_reproduces_the_game() {
    for seed in SEEDS {
        let game = random_game(seed, 9, Rules::default(), 200, |_, _| {});
        let replayed = Game::replay(&game.record()).unwrap();
        assert_same_state(&game, &replayed);
        assert_eq!(replayed.captures(), game.captures());
        if game.is_terminal() {
            assert_eq!(replayed.score().unwrap(), game.score().unwrap());
        }
    }
}

#[test]
fn superko_never_repeats_a_position() {
    let rules = Rules {
        enforce_superko: true,
        ..Rules::default()
    };
    for seed in SEEDS {
        let mut seen = std::collections::HashSet::new();
        seen.insert(new_game(9).board().clone());
        random_game(seed, 9, rules, 300, |_, after| {
            if after.moves().last().unwrap().is_play() {
                assert!(seen.insert(after.board().clone()), "position repeated");
            }
        });
    }
}

fn assert_same_state(a: &Game, b: &Game) {
    assert_eq!(a.board(), b.board());
    assert_eq!(a.moves(), b.moves());
    assert_eq!(a.phase(), b.phase());
    assert_eq!(a.passes(), b.passes());
}
