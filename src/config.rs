use anyhow::{Context, Result};
use std::env;

use crate::game::{grid::DEFAULT_MAX_ATTEMPTS, GeneratorConfig, Scorer};

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub puzzle: PuzzleConfig,
    pub scoring: ScoringConfig,
}

#[derive(Debug, Clone)]
pub struct PuzzleConfig {
    pub grid_size: usize,
    pub min_words: usize,
    pub max_words: usize,
    pub max_placement_attempts: usize,
    /// Word list to draw from instead of the built-in pool
    pub word_pool_path: Option<String>,
    /// Fixed seed for reproducible puzzles
    pub seed: Option<u64>,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            grid_size: 15,
            min_words: 8,
            max_words: 12,
            max_placement_attempts: DEFAULT_MAX_ATTEMPTS,
            word_pool_path: None,
            seed: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScoringConfig {
    pub points_per_letter: u32,
    pub time_bonus_window: u64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        let scorer = Scorer::default();
        Self {
            points_per_letter: scorer.points_per_letter,
            time_bonus_window: scorer.time_bonus_window,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let defaults = Config::default();

        let puzzle = PuzzleConfig {
            grid_size: parse_var("GRID_SIZE", defaults.puzzle.grid_size)?,
            min_words: parse_var("MIN_WORDS", defaults.puzzle.min_words)?,
            max_words: parse_var("MAX_WORDS", defaults.puzzle.max_words)?,
            max_placement_attempts: parse_var(
                "MAX_PLACEMENT_ATTEMPTS",
                defaults.puzzle.max_placement_attempts,
            )?,
            word_pool_path: env::var("WORD_POOL_PATH").ok(),
            seed: env::var("PUZZLE_SEED")
                .ok()
                .map(|s| s.parse())
                .transpose()
                .context("PUZZLE_SEED must be a number")?,
        };

        let scoring = ScoringConfig {
            points_per_letter: parse_var("POINTS_PER_LETTER", defaults.scoring.points_per_letter)?,
            time_bonus_window: parse_var("TIME_BONUS_WINDOW", defaults.scoring.time_bonus_window)?,
        };

        if puzzle.min_words > puzzle.max_words {
            anyhow::bail!(
                "MIN_WORDS ({}) must not exceed MAX_WORDS ({})",
                puzzle.min_words,
                puzzle.max_words
            );
        }

        Ok(Config { puzzle, scoring })
    }

    pub fn generator(&self) -> GeneratorConfig {
        GeneratorConfig {
            grid_size: self.puzzle.grid_size,
            word_count: self.puzzle.min_words..=self.puzzle.max_words,
            max_attempts: self.puzzle.max_placement_attempts,
        }
    }

    pub fn scorer(&self) -> Scorer {
        Scorer {
            points_per_letter: self.scoring.points_per_letter,
            time_bonus_window: self.scoring.time_bonus_window,
            ..Scorer::default()
        }
    }
}

fn parse_var<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(value) => value
            .parse()
            .with_context(|| format!("{} must be a number", key)),
        Err(_) => Ok(default),
    }
}
