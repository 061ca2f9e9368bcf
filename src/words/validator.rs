//! Win/lose decisions for the spelled prefix.

use serde::{Deserialize, Serialize};

/// Outcome of checking the snake's name against the win word.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Keep playing.
    Continue,
    /// The name spells the win word exactly.
    Won,
    /// Eating the next letter would spell something that is not a prefix
    /// of the win word.
    Misspelled { attempted: String },
}

/// Checks a snake's name against the round's win word.
///
/// The win check runs before the mismatch check: a completed word wins no
/// matter what lies in the next cell.
///
/// ```
/// use snake_words::words::{Verdict, WordValidator};
///
/// let validator = WordValidator::new("vince");
///
/// assert_eq!(validator.verdict("vi", Some('N')), Verdict::Continue);
/// assert_eq!(validator.verdict("vince", Some('Z')), Verdict::Won);
/// assert_eq!(
///     validator.verdict("vi", Some('z')),
///     Verdict::Misspelled { attempted: "viz".to_string() },
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordValidator {
    win_word: String,
}

impl WordValidator {
    /// Create a validator for `win_word` (lower-cased).
    pub fn new(win_word: impl Into<String>) -> Self {
        Self {
            win_word: win_word.into().to_ascii_lowercase(),
        }
    }

    /// The word the snake must spell.
    #[must_use]
    pub fn win_word(&self) -> &str {
        &self.win_word
    }

    /// True if `name` is exactly the win word.
    #[must_use]
    pub fn is_complete(&self, name: &str) -> bool {
        name == self.win_word
    }

    /// True if `name` can still be extended into the win word.
    #[must_use]
    pub fn is_prefix(&self, name: &str) -> bool {
        self.win_word.starts_with(name)
    }

    /// Decide the verdict for the current `name` when the head is about to
    /// enter a cell holding `next_letter` (`None` for an open cell).
    ///
    #[must_use]
    pub fn verdict(&self, name: &str, next_letter: Option<char>) -> Verdict {
        if self.is_complete(name) {
            return Verdict::Won;
        }

        match next_letter {
            Some(letter) => {
                let mut attempted = String::with_capacity(name.len() + 1);
                attempted.push_str(name);
                attempted.push(letter.to_ascii_lowercase());

                if self.is_prefix(&attempted) {
                    Verdict::Continue
                } else {
                    Verdict::Misspelled { attempted }
                }
            }
            None => Verdict::Continue,
        }
    }
}
