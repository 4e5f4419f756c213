//! Connectors let a person at the console take part in a game.

mod console;

pub use console::Console;
