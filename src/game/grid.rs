use std::ops::RangeInclusive;

use rand::{seq::SliceRandom, Rng};
use uuid::Builder;

use crate::{
    models::{Direction, Grid, PlacedWord, Position, Puzzle},
    utils::letters::{normalize_word, random_letter},
};

/// Default attempts per word before it is left out of the puzzle
pub const DEFAULT_MAX_ATTEMPTS: usize = 100;

/// Parameters for building a puzzle
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Side length of the square grid
    pub grid_size: usize,
    /// How many pool words to try to hide
    pub word_count: RangeInclusive<usize>,
    /// Random placements tried per word
    pub max_attempts: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            grid_size: 15,
            word_count: 8..=12,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Cells are `None` until a word or filler letter lands on them
type DraftGrid = Vec<Vec<Option<char>>>;

pub struct GridGenerator;

impl GridGenerator {
    /// Generate a puzzle with the thread-local generator
    pub fn generate(candidates: &[String], config: &GeneratorConfig) -> Puzzle {
        Self::generate_with_rng(candidates, config, &mut rand::rng())
    }

    /// Generate a puzzle from `candidates`, drawing all randomness from `rng`.
    ///
    /// Words that cannot be placed within `max_attempts` are dropped; the
    /// result may therefore hold fewer words than requested, possibly none.
    /// Candidates must already be uppercase ASCII letters; see
    /// [`WordPool`](crate::dictionary::WordPool).
    pub fn generate_with_rng(
        candidates: &[String],
        config: &GeneratorConfig,
        rng: &mut impl Rng,
    ) -> Puzzle {
        debug_assert!(
            candidates
                .iter()
                .all(|w| normalize_word(w).as_deref() == Some(w.as_str())),
            "candidate words must be non-empty uppercase ASCII letters"
        );

        let size = config.grid_size;
        let id = Builder::from_random_bytes(rng.random()).into_uuid();

        let mut pool: Vec<&String> = candidates.iter().collect();
        pool.shuffle(rng);

        let (min, max) = (*config.word_count.start(), *config.word_count.end());
        let count = if min > max {
            0
        } else {
            rng.random_range(min..=max).min(pool.len())
        };

        let mut draft: DraftGrid = vec![vec![None; size]; size];
        let mut words = Vec::with_capacity(count);

        for word in pool.into_iter().take(count) {
            match Self::place_word(&mut draft, word, config.max_attempts, rng) {
                Some(placed) => words.push(placed),
                None => tracing::debug!(
                    "Could not place {} after {} attempts, leaving it out",
                    word,
                    config.max_attempts
                ),
            }
        }

        let grid: Grid = draft
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|cell| cell.unwrap_or_else(|| random_letter(rng)))
                    .collect::<Vec<char>>()
            })
            .collect();

        tracing::info!(
            "Generated {}x{} puzzle {} with {}/{} words",
            size,
            size,
            id,
            words.len(),
            count
        );

        Puzzle {
            id,
            size,
            grid,
            words,
        }
    }

    fn place_word(
        draft: &mut DraftGrid,
        word: &str,
        max_attempts: usize,
        rng: &mut impl Rng,
    ) -> Option<PlacedWord> {
        let size = draft.len();
        if size == 0 {
            return None;
        }
        let letters: Vec<char> = word.chars().collect();

        for _ in 0..max_attempts {
            let direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
            let anchor = Position::new(rng.random_range(0..size), rng.random_range(0..size));

            let Some(cells) = Self::fit(draft, &letters, anchor, direction) else {
                continue;
            };
            debug_assert_eq!(cells.len(), letters.len());

            for (pos, &letter) in cells.iter().zip(&letters) {
                draft[pos.row][pos.col] = Some(letter);
            }

            return Some(PlacedWord {
                word: word.to_string(),
                direction,
                anchor,
                cells,
                found: false,
            });
        }

        None
    }

    /// Cells the word would occupy, if it stays in bounds and every cell is
    /// empty or already holds the letter it needs
    fn fit(
        draft: &DraftGrid,
        letters: &[char],
        anchor: Position,
        direction: Direction,
    ) -> Option<Vec<Position>> {
        let cells = direction.cells(anchor, letters.len(), draft.len())?;

        let clear = cells
            .iter()
            .zip(letters)
            .all(|(pos, &letter)| match draft[pos.row][pos.col] {
                None => true,
                Some(existing) => existing == letter,
            });

        clear.then_some(cells)
    }
}
