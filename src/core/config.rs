//! Session configuration.
//!
//! A round is fully described by:
//! - the board layout (rows of letters and spaces)
//! - the dictionary of candidate win words, bucketed by first letter
//! - the logic tick interval
//! - the seed used to pick the win word
//!
//! `SessionConfig::default()` is the stock board with the stock word list,
//! ticking every 500ms.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::grid::STOCK_LAYOUT;
use crate::words::stock_words;

/// Complete configuration for one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Milliseconds between logic ticks.
    pub tick_interval_ms: u64,

    /// Seed for win-word selection.
    pub seed: u64,

    /// Board rows, top to bottom. Space is an empty cell.
    pub layout: Vec<String>,

    /// Candidate win words keyed by their lower-case first letter.
    pub dictionary: BTreeMap<char, Vec<String>>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 500,
            seed: 42,
            layout: STOCK_LAYOUT.iter().map(|row| (*row).to_string()).collect(),
            dictionary: stock_words(),
        }
    }
}

impl SessionConfig {
    /// Set the tick interval in milliseconds.
    #[must_use]
    pub fn with_tick_interval_ms(mut self, ms: u64) -> Self {
        self.tick_interval_ms = ms;
        self
    }

    /// Set the win-word seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Replace the board layout.
    #[must_use]
    pub fn with_layout<S: Into<String>>(mut self, rows: impl IntoIterator<Item = S>) -> Self {
        self.layout = rows.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the whole dictionary.
    #[must_use]
    pub fn with_dictionary(mut self, dictionary: BTreeMap<char, Vec<String>>) -> Self {
        self.dictionary = dictionary;
        self
    }

    /// Set the candidate words for one starting letter.
    #[must_use]
    pub fn with_words<S: Into<String>>(
        mut self,
        letter: char,
        words: impl IntoIterator<Item = S>,
    ) -> Self {
        self.dictionary.insert(
            letter.to_ascii_lowercase(),
            words.into_iter().map(Into::into).collect(),
        );
        self
    }

    /// The tick interval as a `Duration`.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}
