use igo_engine::{GoError, Phase, Stone};

use crate::common::{new_game, play_all};

#[test]
fn consecutive_passes_end_the_game() {
    let mut game = new_game(13);
    play_all(&mut game, &[Some((6, 6)), None]);
    assert!(!game.is_terminal());
    assert_eq!(game.pass(Stone::Black), Ok(Phase::Terminal));
}

#[test]
fn placement_between_passes_resets_counter() {
    let mut game = new_game(9);
    play_all(&mut game, &[None, Some((0, 0)), None]);
    assert_eq!(game.passes(), 1);
    assert!(!game.is_terminal());

    play_all(&mut game, &[None]);
    assert!(game.is_terminal());
}

#[test]
fn nothing_moves_after_game_over() {
    let mut game = new_game(9);
    play_all(&mut game, &[None, None]);
    let moves = game.moves().len();

    for stone in Stone::BOTH {
        assert_eq!(game.place(stone, (4, 4)), Err(GoError::GameOver));
        assert_eq!(game.pass(stone), Err(GoError::GameOver));
    }
    assert_eq!(game.moves().len(), moves);
    assert!(game.board().is_empty());
}

#[test]
fn out_of_turn_pass_does_not_count() {
    let mut game = new_game(9);
    game.pass(Stone::Black).unwrap();
    assert_eq!(game.pass(Stone::Black), Err(GoError::WrongTurn));
    assert_eq!(game.passes(), 1);
    assert!(!game.is_terminal());
}
