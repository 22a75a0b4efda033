use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Mini-games of the escape room. Each one reports its score to
/// [`Progress`] under a fixed numeric id.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Explore,
    Quiz,
    Circuit,
    Recycle,
    WordSearch,
}

impl Level {
    pub const ALL: [Level; 5] = [
        Level::Explore,
        Level::Quiz,
        Level::Circuit,
        Level::Recycle,
        Level::WordSearch,
    ];

    /// Numeric id stored in the progress blob
    pub fn id(self) -> u32 {
        match self {
            Level::Explore => 0,
            Level::Quiz => 1,
            Level::Circuit => 2,
            Level::Recycle => 3,
            Level::WordSearch => 4,
        }
    }

    pub fn from_id(id: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.id() == id)
    }
}

/// Progress shared between the mini-games. The host is responsible for
/// storing it; the JSON shape matches what the browser build keeps in
/// local storage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    pub current_level: u32,
    pub score: u64,
    /// Completed level ids in completion order, no duplicates
    pub completed_levels: Vec<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_name: Option<String>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub start_time: DateTime<Utc>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "chrono::serde::ts_milliseconds_option"
    )]
    pub end_time: Option<DateTime<Utc>>,
}

impl Progress {
    pub fn start(now: DateTime<Utc>) -> Self {
        Self {
            current_level: 0,
            score: 0,
            completed_levels: Vec::new(),
            player_name: None,
            start_time: now,
            end_time: None,
        }
    }

    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        self.player_name = Some(name.into());
        self
    }

    /// Record a finished level: advances the current level past it and adds
    /// its score. Completing the same level twice still adds the score but
    /// lists the level once.
    pub fn complete_level(&mut self, level_id: u32, score: u64) {
        self.current_level = level_id + 1;
        self.score += score;

        if !self.completed_levels.contains(&level_id) {
            self.completed_levels.push(level_id);
        }

        tracing::debug!(
            "Level {} completed with {} points (total {})",
            level_id,
            score,
            self.score
        );
    }

    pub fn is_level_completed(&self, level: Level) -> bool {
        self.completed_levels.contains(&level.id())
    }

    /// True once every mini-game has reported a score
    pub fn all_levels_completed(&self) -> bool {
        Level::ALL.iter().all(|level| self.is_level_completed(*level))
    }

    pub fn finish(&mut self, now: DateTime<Utc>) {
        self.end_time = Some(now);
    }

    pub fn is_finished(&self) -> bool {
        self.end_time.is_some()
    }

    /// Whole seconds played, up to the end stamp or `now` if still playing
    pub fn play_time_secs(&self, now: DateTime<Utc>) -> u64 {
        let end = self.end_time.unwrap_or(now);
        (end - self.start_time).num_seconds().max(0) as u64
    }
}
