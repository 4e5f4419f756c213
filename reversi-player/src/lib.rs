//! Console front end for `reversi-engine`: a menu, human players reading moves
//! from a terminal, and the greedy computer opponent.

pub mod connectors;

mod controller;
mod mode;

pub use connectors::Console;
pub use controller::{BestScore, Controller};
pub use mode::{Mode, ParseModeError};
