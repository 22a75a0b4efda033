use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::utils::letters::normalize_word;

/// Renewable-energy and recycling vocabulary hidden in the default puzzles
pub const DEFAULT_WORDS: &[&str] = &[
    "SOLAR", "EOLICA", "HIDRAULICA", "GEOTERMICA", "BIOMASA", "UNDIMOTRIZ", "BIOGAS",
    "REDUCIR", "REUTILIZAR", "RECICLAR", "PLANETA", "ENERGIA", "VERDE", "FUTURO",
    "LIMPIA", "VIENTO", "AGUA", "SOL", "TIERRA", "BABOSAS", "HARRY",
];

/// Candidate words a puzzle draws from: uppercase, letters only, unique
#[derive(Debug, Clone)]
pub struct WordPool {
    words: Vec<String>,
}

impl WordPool {
    /// Build a pool, skipping entries that are not purely alphabetic and
    /// repeats of an earlier word
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut pool: Vec<String> = Vec::new();
        for word in words {
            let Some(word) = normalize_word(word.as_ref()) else {
                continue;
            };
            if !pool.contains(&word) {
                pool.push(word);
            }
        }
        Self { words: pool }
    }

    /// Load a pool from a file with one word per line
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read word pool {}", path.display()))?;
        let pool = Self::from_words(content.lines());

        tracing::info!("Loaded {} words into pool from {}", pool.len(), path.display());

        Ok(pool)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w.eq_ignore_ascii_case(word))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for WordPool {
    fn default() -> Self {
        Self::from_words(DEFAULT_WORDS)
    }
}
