//! Miscellaneous project utilities.

use crate::location::Location;
use crate::EDGE_LENGTH;
use itertools::Itertools;
use std::fmt::{self, Formatter};

/// Draw the board grid with column letters across the top and row numbers down
/// the side. `symbol` picks the character shown at each location.
pub fn draw_grid<F: Fn(Location) -> char>(f: &mut Formatter, symbol: F) -> fmt::Result {
    writeln!(f, "   {}", "ABCDEFGH".chars().join(" "))?;

    for row in 0..EDGE_LENGTH {
        write!(f, " {} ", row + 1)?;
        for col in 0..EDGE_LENGTH {
            let loc = Location::from_coords(row, col).ok_or(fmt::Error)?;
            write!(f, "{} ", symbol(loc))?;
        }
        writeln!(f)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Diagonal;

    impl fmt::Display for Diagonal {
        fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
            draw_grid(f, |loc| if loc.row() == loc.col() { 'X' } else { '.' })
        }
    }

    #[test]
    fn draws_labels_and_symbols() {
        let text = Diagonal.to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "   A B C D E F G H");
        assert_eq!(lines[1], " 1 X . . . . . . . ");
        assert_eq!(lines[5], " 5 . . . . X . . . ");
        assert_eq!(lines[8], " 8 . . . . . . . X ");
    }
}
