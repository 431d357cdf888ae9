use igo_engine::{GoError, Point, Rules, ScoringMode, Stone};

use crate::common::{game_with_rules, new_game, play_all};

/// A wall down column 4: Black owns the left side, White the right,
/// and nothing is contested.
fn walled_moves() -> Vec<Option<Point>> {
    let mut moves = Vec::new();
    for row in 0..9 {
        moves.push(Some((row, 3)));
        moves.push(Some((row, 5)));
    }
    moves.push(None);
    moves.push(None);
    moves
}

#[test]
fn score_before_end_is_refused() {
    let mut game = new_game(9);
    play_all(&mut game, &[Some((4, 4))]);
    assert_eq!(game.score().unwrap_err(), GoError::NotFinished);
}

#[test]
fn walls_split_board_into_territories() {
    let mut game = new_game(9);
    play_all(&mut game, &walled_moves());
    let score = game.score().unwrap();

    assert_eq!(score.black.territory, 27);
    assert_eq!(score.white.territory, 27);
    assert_eq!(score.territory.owner((0, 0)), Some(Stone::Black));
    assert_eq!(score.territory.owner((0, 4)), None);
    assert_eq!(score.territory.owner((8, 8)), Some(Stone::White));
    assert_eq!(score.territory.owner((0, 3)), None);
    assert_eq!(score.black_total(), 36.0);
    assert_eq!(score.white_total(), 36.0);
    assert_eq!(score.result(), "Draw");
}

#[test]
fn komi_decides_an_even_game() {
    let rules = Rules {
        komi: 6.5,
        ..Rules::default()
    };
    let mut game = game_with_rules(9, rules);
    play_all(&mut game, &walled_moves());
    let score = game.score().unwrap();
    assert_eq!(score.winner(), Some(Stone::White));
    assert_eq!(score.result(), "W+6.5");
}

#[test]
fn territory_mode_leaves_out_stones() {
    let rules = Rules {
        scoring: ScoringMode::TerritoryPlusCaptures,
        ..Rules::default()
    };
    let mut game = game_with_rules(9, rules);
    play_all(&mut game, &walled_moves());
    let score = game.score().unwrap();
    assert_eq!(score.black_total(), 27.0);
    assert_eq!(score.white_total(), 27.0);
}

#[test]
fn captures_count_toward_the_capturer() {
    let mut game = new_game(9);
    // Black takes a corner stone, then both pass.
    play_all(
        &mut game,
        &[Some((0, 1)), Some((0, 0)), Some((1, 0)), None, None],
    );
    let score = game.score().unwrap();
    assert_eq!(score.black.captures, 1);
    assert_eq!(score.black.stones, 2);
    // All 79 empty points border only Black.
    assert_eq!(score.black.territory, 79);
    assert_eq!(score.black_total(), 82.0);
    assert_eq!(score.white_total(), 0.0);
}

#[test]
fn same_final_layout_scores_the_same_regardless_of_order() {
    let mut forward = new_game(9);
    play_all(&mut forward, &walled_moves());

    let mut reversed_moves: Vec<Option<Point>> = Vec::new();
    for row in (0..9).rev() {
        reversed_moves.push(Some((row, 3)));
        reversed_moves.push(Some((row, 5)));
    }
    reversed_moves.extend([None, None]);
    let mut backward = new_game(9);
    play_all(&mut backward, &reversed_moves);

    assert_eq!(forward.board(), backward.board());
    assert_eq!(forward.score().unwrap(), backward.score().unwrap());
}
