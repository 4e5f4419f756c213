//! The Reversi grid and its rules: legal moves, flips and chip counts.
//!
//! The board is a plain 8×8 array of [`Cell`]s in row-major order, with row 0 at
//! the top. Every rule is built on one scan that walks outward from a cell along
//! one of eight unit directions.

use crate::game::{Side, Tally};
use crate::location::{Location, MoveList};
use crate::{utils, EDGE_LENGTH};
use derive_more::{Display, Error};
use itertools::iproduct;
use std::fmt;

/// Unit steps as (row, column) deltas: N, S, W, E, NW, NE, SW, SE.
const DIRECTIONS: [(i8, i8); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Rendering symbol for a legal move in [`MarkedBoard`].
pub const MOVE_MARKER: char = '*';

/// The contents of one space on the board.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Cell {
    Empty,
    Dark,
    Light,
}

impl Cell {
    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Dark => '#',
            Cell::Light => 'O',
        }
    }
}

impl From<Side> for Cell {
    fn from(side: Side) -> Self {
        match side {
            Side::Dark => Cell::Dark,
            Side::Light => Cell::Light,
        }
    }
}

/// The 8×8 grid.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Board {
    cells: [[Cell; EDGE_LENGTH]; EDGE_LENGTH],
}

impl Default for Board {
    /// Gets the starting position.
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The starting position: two chips per side crossed in the center.
    pub fn new() -> Self {
        let mut cells = [[Cell::Empty; EDGE_LENGTH]; EDGE_LENGTH];
        cells[3][3] = Cell::Light;
        cells[4][4] = Cell::Light;
        cells[3][4] = Cell::Dark;
        cells[4][3] = Cell::Dark;
        Self { cells }
    }

    /// Iterate over every location in row-major order.
    pub fn locations() -> impl Iterator<Item = Location> {
        iproduct!(0..EDGE_LENGTH, 0..EDGE_LENGTH)
            .filter_map(|(row, col)| Location::from_coords(row, col))
    }

    #[inline]
    pub fn get(&self, loc: Location) -> Cell {
        self.cells[loc.row()][loc.col()]
    }

    #[inline]
    fn set(&mut self, loc: Location, cell: Cell) {
        self.cells[loc.row()][loc.col()] = cell;
    }

    /// Count the opposing chips that a `side` chip at `loc` would bracket
    /// along `direction`. Zero if the line runs into an empty space or off the
    /// board before reaching one of `side`'s own chips.
    fn bracketed(&self, loc: Location, side: Side, direction: (i8, i8)) -> usize {
        let (d_row, d_col) = direction;
        let own = Cell::from(side);
        let opponent = Cell::from(!side);

        let mut count = 0;
        let mut cursor = loc.offset(d_row, d_col);
        while let Some(next) = cursor {
            match self.get(next) {
                cell if cell == opponent => count += 1,
                cell if cell == own => return count,
                _ => return 0,
            }
            cursor = next.offset(d_row, d_col);
        }
        0
    }

    /// Whether `side` may place a chip at `loc`.
    pub fn is_legal(&self, loc: Location, side: Side) -> bool {
        self.get(loc) == Cell::Empty
            && DIRECTIONS
                .iter()
                .any(|&direction| self.bracketed(loc, side, direction) > 0)
    }

    /// Get the legal moves for `side`, in row-major order.
    pub fn legal_moves(&self, side: Side) -> MoveList {
        let mut moves = MoveList::default();
        for loc in Self::locations().filter(|&loc| self.is_legal(loc, side)) {
            moves.push(loc);
        }
        moves
    }

    /// Place a `side` chip at `loc` and flip every bracketed opposing line.
    /// `loc` must be a legal move for `side`; this is not checked in release builds.
    pub(crate) fn apply_move(&mut self, loc: Location, side: Side) {
        debug_assert!(self.is_legal(loc, side), "{} is not legal for {}", loc, side);
        self.place(loc, side);
    }

    /// Like [`Board::apply_move`], but `loc` may be any empty space, including
    /// one that brackets nothing.
    pub(crate) fn place(&mut self, loc: Location, side: Side) {
        let mut lines = [0; 8];
        for (line, &direction) in lines.iter_mut().zip(DIRECTIONS.iter()) {
            *line = self.bracketed(loc, side, direction);
        }

        let own = Cell::from(side);
        self.set(loc, own);
        for (&count, &(d_row, d_col)) in lines.iter().zip(DIRECTIONS.iter()) {
            let mut cursor = loc;
            for _ in 0..count {
                match cursor.offset(d_row, d_col) {
                    Some(next) => {
                        self.set(next, own);
                        cursor = next;
                    }
                    None => break,
                }
            }
        }
    }

    /// Count the chips belonging to `side`.
    pub fn count_chips(&self, side: Side) -> u8 {
        self.count_cells(Cell::from(side))
    }

    /// Count the empty spaces.
    pub fn count_empty(&self) -> u8 {
        self.count_cells(Cell::Empty)
    }

    fn count_cells(&self, target: Cell) -> u8 {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == target)
            .count() as u8
    }

    /// Whether no empty space remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|&cell| cell != Cell::Empty)
    }

    /// Get the chip counts of both sides.
    pub fn tally(&self) -> Tally {
        Tally {
            dark: self.count_chips(Side::Dark),
            light: self.count_chips(Side::Light),
        }
    }

    /// Render this board with `moves` overlaid by [`MOVE_MARKER`].
    pub fn marked<'a>(&'a self, moves: &'a MoveList) -> MarkedBoard<'a> {
        MarkedBoard { board: self, moves }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        utils::draw_grid(f, |loc| self.get(loc).symbol())
    }
}

/// A board rendered together with a set of candidate moves.
/// The markers exist only in the rendering, never in board state.
#[derive(Clone, Copy, Debug)]
pub struct MarkedBoard<'a> {
    board: &'a Board,
    moves: &'a MoveList,
}

impl fmt::Display for MarkedBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        utils::draw_grid(f, |loc| {
            if self.moves.contains(loc) {
                MOVE_MARKER
            } else {
                self.board.get(loc).symbol()
            }
        })
    }
}

#[derive(Debug, PartialEq, Display, Error)]
#[display(fmt = "invalid board string")]
pub struct ParseBoardError;

/// Build a [`Board`] from 64 cell characters in row-major order:
/// `.` for empty, `#` or `X` for Dark, `O` for Light. Whitespace is ignored.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [[Cell::Empty; EDGE_LENGTH]; EDGE_LENGTH];
        let mut symbols = s.chars().filter(|c| !c.is_whitespace());

        for (row, col) in iproduct!(0..EDGE_LENGTH, 0..EDGE_LENGTH) {
            cells[row][col] = match symbols.next().ok_or(ParseBoardError)? {
                '.' => Cell::Empty,
                '#' | 'X' | 'x' => Cell::Dark,
                'O' | 'o' => Cell::Light,
                _ => return Err(ParseBoardError),
            };
        }

        if symbols.next().is_some() {
            return Err(ParseBoardError);
        }
        Ok(Self { cells })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn loc(s: &str) -> Location {
        Location::from_str(s).unwrap()
    }

    fn coords(moves: &MoveList) -> Vec<(usize, usize)> {
        moves.iter().map(Location::to_coords).collect()
    }

    #[test]
    fn starting_position() {
        let board = Board::new();
        assert_eq!(board.count_chips(Side::Dark), 2);
        assert_eq!(board.count_chips(Side::Light), 2);
        assert_eq!(board.count_empty(), 60);
        assert_eq!(board.get(Location::from_coords(3, 3).unwrap()), Cell::Light);
        assert_eq!(board.get(Location::from_coords(4, 4).unwrap()), Cell::Light);
        assert_eq!(board.get(Location::from_coords(3, 4).unwrap()), Cell::Dark);
        assert_eq!(board.get(Location::from_coords(4, 3).unwrap()), Cell::Dark);
        assert!(!board.is_full());
    }

    #[test]
    fn opening_moves_for_both_sides() {
        let board = Board::new();
        assert_eq!(
            coords(&board.legal_moves(Side::Dark)),
            vec![(2, 3), (3, 2), (4, 5), (5, 4)]
        );
        assert_eq!(
            coords(&board.legal_moves(Side::Light)),
            vec![(2, 4), (3, 5), (4, 2), (5, 3)]
        );
    }

    #[test]
    fn opening_move_flips_one_chip() {
        let mut board = Board::new();
        let mv = Location::from_coords(2, 3).unwrap();
        board.apply_move(mv, Side::Dark);

        assert_eq!(board.get(Location::from_coords(3, 3).unwrap()), Cell::Dark);
        assert_eq!(board.count_chips(Side::Dark), 4);
        assert_eq!(board.count_chips(Side::Light), 1);
        assert!(!board.legal_moves(Side::Dark).contains(mv));
        assert!(!board.legal_moves(Side::Light).contains(mv));
    }

    #[test]
    fn adjacent_own_chip_does_not_bracket() {
        let board = Board::from_str(
            "
            # # . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . O
            ",
        )
        .unwrap();
        assert!(board.legal_moves(Side::Dark).is_empty());
        assert!(board.legal_moves(Side::Light).is_empty());
    }

    #[test]
    fn line_broken_by_gap_is_not_legal() {
        let board = Board::from_str(
            "
            . O O . # . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            ",
        )
        .unwrap();
        assert!(!board.is_legal(loc("A1"), Side::Dark));
        assert!(board.legal_moves(Side::Dark).is_empty());
    }

    #[test]
    fn line_running_off_the_edge_is_not_legal() {
        let board = Board::from_str(
            "
            . O O O O O O O
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . #
            ",
        )
        .unwrap();
        assert!(!board.is_legal(loc("A1"), Side::Dark));
    }

    #[test]
    fn occupied_cells_are_never_legal() {
        let board = Board::new();
        for loc in Board::locations() {
            if board.get(loc) != Cell::Empty {
                assert!(!board.is_legal(loc, Side::Dark));
                assert!(!board.is_legal(loc, Side::Light));
            }
        }
    }

    #[test]
    fn flips_every_bracketing_direction_independently() {
        // Dark at D4 brackets to the north, west, south-east and (long) east.
        let mut board = Board::from_str(
            "
            . . . # . . . .
            . . . O . . . .
            . . . O . . . .
            # O O . O O O #
            . . . . O . . .
            . . . . . # . .
            . . . . . . . .
            . . . O . . . .
            ",
        )
        .unwrap();
        board.apply_move(loc("D4"), Side::Dark);

        let expected = Board::from_str(
            "
            . . . # . . . .
            . . . # . . . .
            . . . # . . . .
            # # # # # # # #
            . . . . # . . .
            . . . . . # . .
            . . . . . . . .
            . . . O . . . .
            ",
        )
        .unwrap();
        assert_eq!(board, expected);
    }

    #[test]
    fn unbracketed_directions_are_left_alone() {
        // The north-west line ends in an empty cell, the east line at the edge.
        let mut board = Board::from_str(
            "
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . O . . . . .
            . # O . O O O O
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            ",
        )
        .unwrap();
        board.apply_move(loc("D5"), Side::Dark);

        let expected = Board::from_str(
            "
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . O . . . . .
            . # # # O O O O
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            ",
        )
        .unwrap();
        assert_eq!(board, expected);
    }

    #[test]
    fn full_board() {
        let board = Board::from_str(&"#O".repeat(32)).unwrap();
        assert!(board.is_full());
        assert_eq!(board.count_empty(), 0);
        assert_eq!(board.tally(), Tally { dark: 32, light: 32 });
    }

    #[test]
    fn parse_board_fail() {
        assert_eq!(Board::from_str(""), Err(ParseBoardError));
        assert_eq!(Board::from_str(&".".repeat(63)), Err(ParseBoardError));
        assert_eq!(Board::from_str(&".".repeat(65)), Err(ParseBoardError));
        assert_eq!(Board::from_str(&"?".repeat(64)), Err(ParseBoardError));
    }

    #[test]
    fn display_round_trips_through_parse() {
        let board = Board::new();
        let rendered = board.to_string();
        let cells: String = rendered
            .lines()
            .skip(1)
            .flat_map(|line| line.split_whitespace().skip(1))
            .collect();
        assert_eq!(Board::from_str(&cells), Ok(board));
    }

    #[test]
    fn marked_board_shows_moves() {
        let board = Board::new();
        let moves = board.legal_moves(Side::Dark);
        let rendered = board.marked(&moves).to_string();

        assert_eq!(rendered.matches(MOVE_MARKER).count(), 4);
        assert!(rendered.contains(" 3 . . . * . . . . "));
        assert_eq!(board.count_empty(), 60);
    }
}
