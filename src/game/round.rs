use serde::{Deserialize, Serialize};

use crate::{
    game::{validator::WordMatch, Scorer, WordValidator},
    models::{Position, Puzzle},
};

/// Outcome of a finished round
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundSummary {
    pub word_points: u64,
    pub time_bonus: u64,
    pub final_score: u64,
    pub elapsed_secs: u64,
    pub words_found: usize,
    pub words_total: usize,
}

/// One play-through of a puzzle: the puzzle itself plus the clock and score
/// that go with it
#[derive(Debug, Clone)]
pub struct Round {
    puzzle: Puzzle,
    scorer: Scorer,
    word_points: u64,
    elapsed_secs: u64,
    summary: Option<RoundSummary>,
}

impl Round {
    pub fn new(puzzle: Puzzle, scorer: Scorer) -> Self {
        Self {
            puzzle,
            scorer,
            word_points: 0,
            elapsed_secs: 0,
            summary: None,
        }
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Advance the round clock. Ignored once the round is finished.
    pub fn tick(&mut self, secs: u64) {
        if self.summary.is_none() {
            self.elapsed_secs += secs;
        }
    }

    /// Submit a finished drag gesture. Finding the last hidden word closes
    /// the round and fixes its summary.
    pub fn submit(&mut self, path: &[Position]) -> Option<WordMatch> {
        if self.summary.is_some() {
            return None;
        }

        let found = WordValidator::submit_selection(&mut self.puzzle, path, &self.scorer)?;
        self.word_points += u64::from(found.points);

        if self.puzzle.is_complete() {
            let time_bonus = self.scorer.time_bonus(self.elapsed_secs);
            let summary = RoundSummary {
                word_points: self.word_points,
                time_bonus,
                final_score: self.word_points + time_bonus,
                elapsed_secs: self.elapsed_secs,
                words_found: self.puzzle.found_count(),
                words_total: self.puzzle.words.len(),
            };

            tracing::info!(
                "Puzzle {} completed in {} with {} points",
                self.puzzle.id,
                format_time(self.elapsed_secs),
                summary.final_score
            );

            self.summary = Some(summary);
        }

        Some(found)
    }

    pub fn score(&self) -> u64 {
        self.word_points
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    pub fn found_count(&self) -> usize {
        self.puzzle.found_count()
    }

    pub fn is_finished(&self) -> bool {
        self.summary.is_some()
    }

    pub fn summary(&self) -> Option<&RoundSummary> {
        self.summary.as_ref()
    }

    pub fn into_puzzle(self) -> Puzzle {
        self.puzzle
    }
}

/// Format seconds as `m:ss`
pub fn format_time(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
