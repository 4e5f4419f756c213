//! The main menu loop: picks a mode, runs games and remembers the best score.

use crate::connectors::Console;
use crate::mode::Mode;
use reversi_engine::{EndReason, Game, GameError, GameState, Greedy, Outcome, Side, Turn};
use std::io::{self, BufRead, Write};
use tracing::{info, instrument};

const GREETING: &str = "\nHello! You are playing Reversi.
If you want to play versus a second player, type \"player\".
If you want to play versus the computer, type \"easy\" or \"medium\".
If you want to see your best score, type \"best\".";

const MEDIUM_NOTICE: &str = "The clever bot has fallen ill. Please, try this option later.";
const PASS_NOTICE: &str = "No possible moves, the turn passes to the other player.";
const REPLAY_PROMPT: &str =
    "If you want to play once more, press enter. If you want to exit, type \"exit\".";
const FAREWELL: &str = "Goodbye!";

/// The highest dark chip count a human reached against the computer.
/// Lives as long as the [`Controller`]; nothing is written to disk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BestScore(Option<u8>);

impl BestScore {
    pub fn get(self) -> Option<u8> {
        self.0
    }

    /// Keep `score` if it beats the current best.
    pub fn record(&mut self, score: u8) {
        self.0 = Some(self.0.map_or(score, |best| best.max(score)));
    }
}

/// Runs the console session: menu, games, results and the replay prompt.
pub struct Controller<R, W> {
    console: Console<R, W>,
    best: BestScore,
}

impl<R: BufRead, W: Write> Controller<R, W> {
    pub fn new(console: Console<R, W>) -> Self {
        Self {
            console,
            best: BestScore::default(),
        }
    }

    pub fn best_score(&self) -> BestScore {
        self.best
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Run menus and games until the player exits or input runs out.
    /// `preselected` answers the first menu prompt.
    #[instrument(skip(self))]
    pub fn run(&mut self, mut preselected: Option<Mode>) -> io::Result<()> {
        loop {
            let mode = match preselected.take() {
                Some(mode) => mode,
                None => match self.select_mode()? {
                    Some(mode) => mode,
                    None => break,
                },
            };
            info!(%mode, "mode selected");

            match mode {
                Mode::Best => self.show_best()?,
                Mode::Medium => self.console.say(MEDIUM_NOTICE)?,
                Mode::Player | Mode::Easy => {
                    let game = match self.play(mode)? {
                        Some(game) => game,
                        None => break,
                    };
                    self.report(mode, &game)?;
                    if !self.wants_replay()? {
                        break;
                    }
                }
            }
        }

        self.console.say(FAREWELL)
    }

    /// Show the menu until a known mode is typed. None at end of input.
    fn select_mode(&mut self) -> io::Result<Option<Mode>> {
        self.console.say(GREETING)?;
        loop {
            match self.console.read_line()? {
                None => return Ok(None),
                Some(line) => match line.parse() {
                    Ok(mode) => return Ok(Some(mode)),
                    Err(_) => self.console.say("Wrong input. Please, try again.")?,
                },
            }
        }
    }

    fn show_best(&mut self) -> io::Result<()> {
        match self.best.get() {
            None => self
                .console
                .say("You have not played versus the computer yet, so your best score is 0!"),
            Some(score) => self
                .console
                .say(format_args!("Congratulations! Your best score is {}.", score)),
        }
    }

    fn turn_prompt(mode: Mode, side: Side) -> Option<&'static str> {
        match (mode, side) {
            (Mode::Easy, Side::Dark) => {
                Some("It is your turn. Please, choose the cell you want to place your chip.")
            }
            (Mode::Player, Side::Dark) => Some(
                "It is the first player's turn. Please, choose the cell you want to place your chip.",
            ),
            (Mode::Player, Side::Light) => Some(
                "It is the second player's turn. Please, choose the cell you want to place your chip.",
            ),
            _ => None,
        }
    }

    /// Play one game to the end. None if input ran out mid-game.
    #[instrument(skip(self))]
    fn play(&mut self, mode: Mode) -> io::Result<Option<Game>> {
        let mut game = Game::new();

        while let Some(side) = game.to_move() {
            if side == Side::Dark {
                self.console.say(game.board())?;
            }
            if let Some(prompt) = Self::turn_prompt(mode, side) {
                self.console.say(prompt)?;
            }

            let computer = mode.computer_plays(side);
            let turn = if computer {
                game.advance(&mut Greedy)
            } else {
                game.advance(&mut self.console)
            };

            match turn {
                Ok(Turn::Pass(_)) => self.console.say(PASS_NOTICE)?,
                Ok(Turn::Play(_, mv)) if computer => {
                    let (row, col) = mv.to_coords();
                    self.console.say(format_args!(
                        "\nThe computer made its move on the cell ({}, {})",
                        row + 1,
                        col + 1
                    ))?;
                }
                Ok(Turn::Play(..)) => {
                    self.console.say("\nNow the board looks that way.")?;
                    self.console.say(game.board())?;
                }
                Err(GameError::Aborted) => {
                    return match self.console.take_error() {
                        Some(e) => Err(e),
                        None => Ok(None),
                    };
                }
                Err(e) => return Err(io::Error::new(io::ErrorKind::Other, e)),
            }
        }

        if game.state() == GameState::GameOver(EndReason::DoublePass) {
            self.console.say("No possible moves for both players!")?;
        }
        Ok(Some(game))
    }

    fn report(&mut self, mode: Mode, game: &Game) -> io::Result<()> {
        let tally = game.tally();
        self.console.say("The game is over.\n")?;
        self.console.say(format_args!("Final count: {}.", tally))?;

        match tally.outcome() {
            Outcome::Winner(side, score) => self.console.say(format_args!(
                "The winner is the {} player with a score of {}.",
                side, score
            ))?,
            Outcome::Tie(score) => self.console.say(format_args!(
                "The game has ended with a tie. The score of both players is {}.",
                score
            ))?,
        }

        if mode == Mode::Easy {
            self.best.record(tally.get(Side::Dark));
            info!(best = ?self.best.get(), "best score updated");
        }
        Ok(())
    }

    /// Anything but "exit" (including an empty line) plays again.
    fn wants_replay(&mut self) -> io::Result<bool> {
        self.console.say(REPLAY_PROMPT)?;
        Ok(match self.console.read_line()? {
            Some(line) => line != "exit",
            None => false,
        })
    }
}
