//! The choices offered by the main menu.

use derive_more::{Display, Error};
use reversi_engine::Side;

/// What the player picked from the main menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum Mode {
    /// Two humans sharing the console.
    #[display(fmt = "player")]
    Player,
    /// A human (dark) against the greedy computer (light).
    #[display(fmt = "easy")]
    Easy,
    /// A stronger computer opponent. Not available yet.
    #[display(fmt = "medium")]
    Medium,
    /// Show the best score against the computer.
    #[display(fmt = "best")]
    Best,
}

impl Mode {
    /// Whether the computer plays `side` in this mode.
    pub fn computer_plays(self, side: Side) -> bool {
        self == Mode::Easy && side == Side::Light
    }
}

#[derive(Debug, PartialEq, Display, Error)]
#[display(fmt = "unknown mode (expected player, easy, medium or best)")]
pub struct ParseModeError;

/// Parse the exact menu word for a mode.
impl std::str::FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "player" => Ok(Mode::Player),
            "easy" => Ok(Mode::Easy),
            "medium" => Ok(Mode::Medium),
            "best" => Ok(Mode::Best),
            _ => Err(ParseModeError),
        }
    }
}
