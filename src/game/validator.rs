use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    game::Scorer,
    models::{Grid, Position, Puzzle},
};

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("no drag gesture in progress")]
    NoGesture,
    #[error("cell {0} is outside the grid")]
    OutOfBounds(Position),
    #[error("cell {to} is not adjacent to {from}")]
    NotAdjacent { from: Position, to: Position },
}

/// Cells traced during one drag gesture
#[derive(Debug, Clone, Default)]
pub struct SelectionPath {
    grid_size: usize,
    cells: Vec<Position>,
    active: bool,
}

impl SelectionPath {
    pub fn new(grid_size: usize) -> Self {
        Self {
            grid_size,
            cells: Vec::new(),
            active: false,
        }
    }

    /// Begin a gesture at `pos`, discarding any previous path
    pub fn start(&mut self, pos: Position) -> Result<(), SelectionError> {
        self.check_bounds(pos)?;
        self.cells.clear();
        self.cells.push(pos);
        self.active = true;
        Ok(())
    }

    /// Append `pos` if it is one step away from the last traced cell
    pub fn extend(&mut self, pos: Position) -> Result<(), SelectionError> {
        let last = match (self.active, self.cells.last()) {
            (true, Some(last)) => *last,
            _ => return Err(SelectionError::NoGesture),
        };
        self.check_bounds(pos)?;
        if !last.is_adjacent(&pos) {
            return Err(SelectionError::NotAdjacent { from: last, to: pos });
        }
        self.cells.push(pos);
        Ok(())
    }

    /// End the gesture, handing back the traced cells
    pub fn finish(&mut self) -> Vec<Position> {
        self.active = false;
        std::mem::take(&mut self.cells)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    pub fn contains(&self, pos: &Position) -> bool {
        self.cells.contains(pos)
    }

    /// Letters currently traced, in order
    pub fn letters(&self, grid: &Grid) -> String {
        WordValidator::extract_word(grid, &self.cells)
    }

    fn check_bounds(&self, pos: Position) -> Result<(), SelectionError> {
        if pos.row < self.grid_size && pos.col < self.grid_size {
            Ok(())
        } else {
            Err(SelectionError::OutOfBounds(pos))
        }
    }
}

/// A hidden word matched by a selection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WordMatch {
    pub word: String,
    pub points: u32,
}

pub struct WordValidator;

impl WordValidator {
    /// Check whether the traced cells spell an unfound hidden word, forwards
    /// or backwards. On a match the word is marked found; otherwise the
    /// puzzle is left untouched.
    pub fn submit_selection(
        puzzle: &mut Puzzle,
        path: &[Position],
        scorer: &Scorer,
    ) -> Option<WordMatch> {
        if path.len() < 2 || !Self::is_valid_path(puzzle.size, path) {
            return None;
        }

        let forward = Self::extract_word(&puzzle.grid, path);
        let reverse: String = forward.chars().rev().collect();

        let placed = puzzle
            .words
            .iter_mut()
            .find(|w| !w.found && (w.word == forward || w.word == reverse))?;
        placed.found = true;

        tracing::debug!("Found {} in puzzle {}", placed.word, puzzle.id);

        Some(WordMatch {
            points: scorer.word_score(&placed.word),
            word: placed.word.clone(),
        })
    }

    /// Validate that positions form a step-adjacent path inside the grid
    pub fn is_valid_path(grid_size: usize, positions: &[Position]) -> bool {
        if positions.is_empty() {
            return false;
        }

        if !positions.windows(2).all(|w| w[0].is_adjacent(&w[1])) {
            return false;
        }

        positions
            .iter()
            .all(|pos| pos.row < grid_size && pos.col < grid_size)
    }

    /// Extract word from grid positions
    pub fn extract_word(grid: &Grid, positions: &[Position]) -> String {
        positions
            .iter()
            .filter_map(|pos| grid.get(pos.row)?.get(pos.col).copied())
            .collect()
    }
}
