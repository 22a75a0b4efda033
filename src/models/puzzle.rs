use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Check if two positions are adjacent (including diagonals)
    pub fn is_adjacent(&self, other: &Position) -> bool {
        let row_diff = self.row.abs_diff(other.row);
        let col_diff = self.col.abs_diff(other.col);

        row_diff <= 1 && col_diff <= 1 && (row_diff + col_diff > 0)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Orientation a hidden word is written along, starting at its anchor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Horizontal,
    Vertical,
    DiagonalDownRight,
    DiagonalDownLeft,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDownRight,
        Direction::DiagonalDownLeft,
    ];

    /// Row and column step between consecutive letters
    pub fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDownRight => (1, 1),
            Direction::DiagonalDownLeft => (1, -1),
        }
    }

    /// Cells covered by a word of `len` letters written from `anchor` in
    /// this direction, or `None` if any of them falls outside a
    /// `size`×`size` grid.
    pub fn cells(self, anchor: Position, len: usize, size: usize) -> Option<Vec<Position>> {
        let (d_row, d_col) = self.step();
        let mut cells = Vec::with_capacity(len);

        for i in 0..len {
            let row = anchor.row.checked_add_signed(d_row * i as isize)?;
            let col = anchor.col.checked_add_signed(d_col * i as isize)?;
            if row >= size || col >= size {
                return None;
            }
            cells.push(Position { row, col });
        }

        Some(cells)
    }
}

pub type Grid = Vec<Vec<char>>;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlacedWord {
    pub word: String,
    pub direction: Direction,
    pub anchor: Position,
    /// Occupied cells in letter order
    pub cells: Vec<Position>,
    pub found: bool,
}

impl PlacedWord {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, pos: &Position) -> bool {
        self.cells.contains(pos)
    }
}

/// A generated word search. Owned by a single caller; the only mutation
/// after generation is a word's `found` flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Puzzle {
    pub id: Uuid,
    pub size: usize,
    pub grid: Grid,
    pub words: Vec<PlacedWord>,
}

impl Puzzle {
    pub fn letter_at(&self, pos: &Position) -> Option<char> {
        self.grid.get(pos.row)?.get(pos.col).copied()
    }

    pub fn in_bounds(&self, pos: &Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// True once every placed word has been found. A puzzle with no placed
    /// words never completes.
    pub fn is_complete(&self) -> bool {
        !self.words.is_empty() && self.words.iter().all(|w| w.found)
    }

    pub fn found_count(&self) -> usize {
        self.words.iter().filter(|w| w.found).count()
    }

    pub fn remaining(&self) -> impl Iterator<Item = &PlacedWord> {
        self.words.iter().filter(|w| !w.found)
    }

    /// Whether the cell belongs to a word the player already found
    pub fn is_cell_found(&self, pos: &Position) -> bool {
        self.words.iter().any(|w| w.found && w.contains(pos))
    }
}
