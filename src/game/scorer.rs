use serde::{Deserialize, Serialize};

/// Point values for a word-search round
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Scorer {
    /// Points per letter of a found word
    pub points_per_letter: u32,
    /// Seconds after which finishing earns no time bonus
    pub time_bonus_window: u64,
    /// Bonus points per second left in the window
    pub time_bonus_rate: u64,
}

impl Default for Scorer {
    fn default() -> Self {
        Self {
            points_per_letter: 10,
            time_bonus_window: 300,
            time_bonus_rate: 2,
        }
    }
}

impl Scorer {
    /// Points for finding `word`
    pub fn word_score(&self, word: &str) -> u32 {
        word.chars().count() as u32 * self.points_per_letter
    }

    /// Bonus for completing the puzzle after `elapsed_secs`
    ///
    /// Finishing at or after the window earns nothing.
    pub fn time_bonus(&self, elapsed_secs: u64) -> u64 {
        self.time_bonus_window.saturating_sub(elapsed_secs) * self.time_bonus_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_score() {
        let scorer = Scorer::default();
        assert_eq!(scorer.word_score("SOL"), 30);
        assert_eq!(scorer.word_score("HIDRAULICA"), 100);
    }

    #[test]
    fn test_time_bonus() {
        let scorer = Scorer::default();
        assert_eq!(scorer.time_bonus(0), 600);
        assert_eq!(scorer.time_bonus(120), 360);
        assert_eq!(scorer.time_bonus(300), 0);
        assert_eq!(scorer.time_bonus(1_000), 0);
    }

    #[test]
    fn test_custom_rates() {
        let scorer = Scorer {
            points_per_letter: 5,
            time_bonus_window: 60,
            time_bonus_rate: 1,
        };
        assert_eq!(scorer.word_score("AGUA"), 20);
        assert_eq!(scorer.time_bonus(45), 15);
    }
}
