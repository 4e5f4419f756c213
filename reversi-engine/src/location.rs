//! Code for working with [`Location`]s on the Reversi board.

use crate::EDGE_LENGTH;
use arrayvec::ArrayVec;
use derive_more::{Display, Error};
use itertools::Itertools;
use std::fmt::{self, Formatter, Write};

const LAST: u8 = EDGE_LENGTH as u8 - 1;

/// A location on the Reversi board, as 0-indexed row and column.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Location {
    row: u8,
    col: u8,
}

/// An ordered list of locations, in the order they were discovered.
/// A list never holds more entries than there are spaces on the board.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MoveList(ArrayVec<[Location; 64]>);

impl Location {
    /// Construct a Location from row and column coordinates.
    /// Returns None if the coordinates provided are not valid.
    pub fn from_coords(row: usize, col: usize) -> Option<Self> {
        if row >= EDGE_LENGTH || col >= EDGE_LENGTH {
            None
        } else {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        }
    }

    /// Get the row and column coordinates.
    pub fn to_coords(self) -> (usize, usize) {
        (self.row as usize, self.col as usize)
    }

    #[inline]
    pub fn row(self) -> usize {
        self.row as usize
    }

    #[inline]
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Step one space in the direction `(d_row, d_col)`.
    /// Returns None if that would leave the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if row < 0 || col < 0 {
            return None;
        }
        Self::from_coords(row as usize, col as usize)
    }

    /// Whether this location lies in the outermost ring of the board.
    pub fn is_edge(self) -> bool {
        self.row == 0 || self.col == 0 || self.row == LAST || self.col == LAST
    }

    /// Whether this location is one of the four corners.
    pub fn is_corner(self) -> bool {
        (self.row == 0 || self.row == LAST) && (self.col == 0 || self.col == LAST)
    }
}

/// Convert this [`Location`] into string notation ("D3": column letter, then 1-indexed row).
impl fmt::Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let col_str = "ABCDEFGH".chars().nth(self.col()).ok_or(fmt::Error)?;
        let row_str = "12345678".chars().nth(self.row()).ok_or(fmt::Error)?;
        f.write_char(col_str)?;
        f.write_char(row_str)
    }
}

#[derive(Debug, PartialEq, Display, Error)]
#[display(fmt = "invalid location string")]
pub struct ParseLocationError;

/// Build a [`Location`] from a 1-indexed string notation ("D3").
impl std::str::FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let col_str = chars.next().ok_or(ParseLocationError)?.to_ascii_uppercase();
        let col = "ABCDEFGH".find(col_str).ok_or(ParseLocationError)?;
        let row = chars
            .next()
            .ok_or(ParseLocationError)?
            .to_digit(10)
            .ok_or(ParseLocationError)? as usize;

        if row == 0 || chars.next() != None {
            return Err(ParseLocationError);
        }

        Self::from_coords(row - 1, col).ok_or(ParseLocationError)
    }
}

impl MoveList {
    /// Returns whether the move list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get the move at 0-based position `index`, in discovery order.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Location> {
        self.0.get(index).copied()
    }

    /// Returns whether `loc` is in this list.
    pub fn contains(&self, loc: Location) -> bool {
        self.0.contains(&loc)
    }

    pub fn iter(&self) -> impl Iterator<Item = Location> + '_ {
        self.0.iter().copied()
    }

    pub(crate) fn push(&mut self, loc: Location) {
        self.0.push(loc)
    }
}

impl IntoIterator for MoveList {
    type Item = Location;
    type IntoIter = arrayvec::IntoIter<[Location; 64]>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for MoveList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.iter().join(", "))
    }
}
