//! Word-search engine for the renewable-energy escape room.
//!
//! [`GridGenerator`] hides words from a [`WordPool`] in a square letter
//! grid; [`WordValidator::submit_selection`] checks a traced drag path
//! against the hidden words. [`Round`] adds the clock and score of one
//! play-through and [`Progress`] tracks the whole game across levels.

pub mod config;
pub mod dictionary;
pub mod game;
pub mod models;
pub mod utils;

pub use dictionary::WordPool;
pub use game::{
    GeneratorConfig, GridGenerator, Round, RoundSummary, Scorer, SelectionError, SelectionPath,
    WordMatch, WordValidator,
};
pub use models::{Direction, Grid, Level, PlacedWord, Position, Progress, Puzzle};
