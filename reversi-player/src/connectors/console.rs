//! A [`Chooser`] that shows the legal moves on a terminal and reads the player's pick.

use reversi_engine::{Board, Chooser, MoveList, Side, MOVE_MARKER};
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};

/// Line-oriented console I/O, generic so games can be scripted in tests.
pub struct Console<R, W> {
    input: R,
    output: W,
    error: Option<io::Error>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            error: None,
        }
    }

    /// Write `text` followed by a newline.
    pub fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", text)?;
        self.output.flush()
    }

    /// Read one line with surrounding whitespace trimmed. None at end of input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Take the I/O error that made the last [`Chooser::choose`] give up, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn list_moves(&mut self, board: &Board, moves: &MoveList) -> io::Result<()> {
        self.say(format_args!(
            "\nPossible moves are marked with {}",
            MOVE_MARKER
        ))?;
        self.say(board.marked(moves))?;
        self.say(format_args!(
            "You have {} possible moves, they are presented below:",
            moves.len()
        ))?;
        for (index, mv) in moves.iter().enumerate() {
            let (row, col) = mv.to_coords();
            self.say(format_args!("{}. {} {}", index + 1, row + 1, col + 1))?;
        }
        Ok(())
    }

    /// Ask for a 1-based move number until a valid one is entered.
    /// Returns the 0-based index, or None at end of input.
    fn read_choice(&mut self, count: usize) -> io::Result<Option<usize>> {
        loop {
            self.say("Make your move, entering the number of the suitable move")?;
            let line = match self.read_line()? {
                Some(line) => line,
                None => return Ok(None),
            };

            match line.parse::<usize>() {
                Ok(number) if (1..=count).contains(&number) => return Ok(Some(number - 1)),
                _ => debug!(input = %line, count, "rejected move number"),
            }
        }
    }
}

impl<R: BufRead, W: Write> Chooser for Console<R, W> {
    fn choose(&mut self, board: &Board, side: Side, moves: &MoveList) -> Option<usize> {
        let choice = self
            .list_moves(board, moves)
            .and_then(|_| self.read_choice(moves.len()));

        match choice {
            Ok(Some(index)) => Some(index),
            Ok(None) => {
                debug!(%side, "input closed while choosing a move");
                None
            }
            Err(e) => {
                warn!(error = %e, "console failed while choosing a move");
                self.error = Some(e);
                None
            }
        }
    }
}
