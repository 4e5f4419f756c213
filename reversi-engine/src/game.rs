//! Implements game-level Reversi logic: whose turn it is, passes, and when the game ends.
//!
//! [`Game`] is the only public way to change a [`Board`]: every move it plays is
//! drawn from [`Board::legal_moves`], so the board's unchecked move application
//! never sees an illegal move.

use crate::board::Board;
use crate::location::{Location, MoveList};
use derive_more::{Display, Error};
use tracing::{debug, info, instrument};

/// One of the two sides in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum Side {
    #[display(fmt = "dark")]
    Dark,
    #[display(fmt = "light")]
    Light,
}

impl Default for Side {
    /// Gets the starting side (dark).
    fn default() -> Self {
        Self::Dark
    }
}

impl std::ops::Not for Side {
    type Output = Self;

    /// Gets the other side.
    fn not(self) -> Self {
        match self {
            Side::Dark => Side::Light,
            Side::Light => Side::Dark,
        }
    }
}

/// Chip counts for both sides.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display)]
#[display(fmt = "dark {}, light {}", dark, light)]
pub struct Tally {
    pub dark: u8,
    pub light: u8,
}

/// The result of a finished game, with the winning (or shared) chip count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Winner(Side, u8),
    Tie(u8),
}

impl Tally {
    /// The side with more chips wins; equal counts tie.
    pub fn outcome(self) -> Outcome {
        if self.dark > self.light {
            Outcome::Winner(Side::Dark, self.dark)
        } else if self.light > self.dark {
            Outcome::Winner(Side::Light, self.light)
        } else {
            Outcome::Tie(self.dark)
        }
    }

    pub fn get(self, side: Side) -> u8 {
        match side {
            Side::Dark => self.dark,
            Side::Light => self.light,
        }
    }
}

/// Why a game stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum EndReason {
    #[display(fmt = "the board is full")]
    BoardFull,
    #[display(fmt = "neither side could move")]
    DoublePass,
}

/// Where the turn state machine currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    AwaitingMove(Side),
    GameOver(EndReason),
}

/// What happened during one turn attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    Play(Side, Location),
    Pass(Side),
}

/// Raised when the side to move has no legal move.
/// The session recovers from it immediately by recording a pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "no legal move for {}", side)]
struct NoLegalMove {
    side: Side,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum GameError {
    #[display(fmt = "the game is already over")]
    Finished,
    #[display(fmt = "move {} does not exist ({} legal moves)", index, available)]
    InvalidChoice { index: usize, available: usize },
    #[display(fmt = "no move was chosen")]
    Aborted,
}

/// Something that picks one of the legal moves for a side.
pub trait Chooser {
    /// Pick a 0-based index into `moves`, which is never empty.
    /// Returns None to abandon the game.
    fn choose(&mut self, board: &Board, side: Side, moves: &MoveList) -> Option<usize>;
}

/// The complete state of a Reversi game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Game {
    board: Board,
    state: GameState,
    /// Turn attempts made in the current round (0 or 1).
    round_turns: u8,
    /// Passes recorded in the current round.
    round_passes: u8,
}

impl Default for Game {
    /// Gets the starting position with dark to move.
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self::from_board(Board::new(), Side::default())
    }

    /// Start a game from an arbitrary position. A full board is already over.
    pub fn from_board(board: Board, to_move: Side) -> Self {
        let state = if board.is_full() {
            GameState::GameOver(EndReason::BoardFull)
        } else {
            GameState::AwaitingMove(to_move)
        };

        Self {
            board,
            state,
            round_turns: 0,
            round_passes: 0,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Get the side to move, or None once the game is over.
    pub fn to_move(&self) -> Option<Side> {
        match self.state {
            GameState::AwaitingMove(side) => Some(side),
            GameState::GameOver(_) => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, GameState::GameOver(_))
    }

    /// Get the legal moves for the side to move (empty once the game is over).
    pub fn legal_moves(&self) -> MoveList {
        self.to_move()
            .map(|side| self.board.legal_moves(side))
            .unwrap_or_default()
    }

    pub fn tally(&self) -> Tally {
        self.board.tally()
    }

    /// Get the result, once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        if self.is_finished() {
            Some(self.tally().outcome())
        } else {
            None
        }
    }

    fn moves_for(&self, side: Side) -> Result<MoveList, NoLegalMove> {
        let moves = self.board.legal_moves(side);
        if moves.is_empty() {
            Err(NoLegalMove { side })
        } else {
            Ok(moves)
        }
    }

    /// Make one turn attempt for the side to move.
    ///
    /// With no legal move the side passes without consulting `chooser`.
    /// Otherwise `chooser` picks a move, which is played. Either way the turn
    /// passes to the other side, and at the end of every round the game ends if
    /// both sides passed or the board is full.
    ///
    /// # Errors
    ///
    /// [`GameError::Finished`] if the game is over, [`GameError::InvalidChoice`] if
    /// `chooser` picks a nonexistent move and [`GameError::Aborted`] if it gives up.
    /// On error the game is unchanged.
    #[instrument(skip(self, chooser), fields(side = ?self.to_move()))]
    pub fn advance(&mut self, chooser: &mut dyn Chooser) -> Result<Turn, GameError> {
        let side = self.to_move().ok_or(GameError::Finished)?;

        let turn = match self.moves_for(side) {
            Err(no_move) => {
                info!("{}, passing", no_move);
                self.round_passes += 1;
                Turn::Pass(side)
            }
            Ok(moves) => {
                let index = chooser
                    .choose(&self.board, side, &moves)
                    .ok_or(GameError::Aborted)?;
                let loc = moves.get(index).ok_or(GameError::InvalidChoice {
                    index,
                    available: moves.len(),
                })?;

                self.board.apply_move(loc, side);
                debug!(%loc, tally = %self.board.tally(), "played");
                Turn::Play(side, loc)
            }
        };

        self.state = GameState::AwaitingMove(!side);
        self.round_turns += 1;
        if self.round_turns == 2 {
            self.end_round();
        }
        Ok(turn)
    }

    fn end_round(&mut self) {
        let reason = if self.round_passes == 2 {
            Some(EndReason::DoublePass)
        } else if self.board.is_full() {
            Some(EndReason::BoardFull)
        } else {
            None
        };

        self.round_turns = 0;
        self.round_passes = 0;
        if let Some(reason) = reason {
            info!(%reason, tally = %self.board.tally(), "game over");
            self.state = GameState::GameOver(reason);
        }
    }
}
