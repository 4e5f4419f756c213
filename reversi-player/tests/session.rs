use reversi_player::{BestScore, Console, Controller};
use std::io::Cursor;

/// Run a whole console session on scripted input, returning the transcript.
fn session(input: String) -> (String, BestScore) {
    let console = Console::new(Cursor::new(input.into_bytes()), Vec::new());
    let mut controller = Controller::new(console);
    controller.run(None).unwrap();

    let best = controller.best_score();
    let output = controller.into_console().into_inner().1;
    (String::from_utf8(output).unwrap(), best)
}

/// A menu choice followed by enough "always take the first move" answers to finish a game.
fn first_move_script(mode: &str) -> String {
    let mut script = format!("{}\n", mode);
    script.push_str(&"1\n".repeat(64));
    script
}

#[test]
fn easy_game_records_best_score() {
    let (text, best) = session(first_move_script("easy"));

    assert!(text.contains("It is your turn."));
    assert!(text.contains("The computer made its move on the cell"));
    assert!(text.contains("The game is over."));
    assert!(text.contains("Final count: dark "));
    assert!(text.ends_with("Goodbye!\n"));

    let score = best.get().expect("an easy game sets the best score");
    assert!(score <= 64);
}

#[test]
fn easy_games_are_reproducible() {
    assert_eq!(
        session(first_move_script("easy")),
        session(first_move_script("easy"))
    );
}

#[test]
fn two_player_game_leaves_best_score_alone() {
    let (text, best) = session(first_move_script("player"));

    assert!(text.contains("It is the first player's turn."));
    assert!(text.contains("It is the second player's turn."));
    assert!(!text.contains("The computer made its move"));
    assert!(text.contains("The game is over."));
    assert_eq!(best.get(), None);
}

#[test]
fn best_score_is_reported_after_an_easy_game() {
    // Leftover "1" answers go to the replay prompt and then the menu (rejected),
    // so append "best" after them and read it back at the end.
    let mut script = first_move_script("easy");
    script.push_str("best\n");
    let (text, best) = session(script);

    let score = best.get().unwrap();
    assert!(text.contains(&format!("Congratulations! Your best score is {}.", score)));
}
