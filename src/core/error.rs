//! Error types.
//!
//! Only contract violations and bad setup data are errors. Dying and winning
//! are ordinary tick outcomes and are reported as events, never as `Err`.

use thiserror::Error;

/// Errors raised while building or querying a board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// A cell was accessed without bounds-checking it first.
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },

    /// A letter that can start a snake has no candidate words.
    #[error("no dictionary words start with '{0}'")]
    EmptyDictionaryBucket(char),

    /// The board layout could not be parsed.
    #[error("invalid board layout: {0}")]
    InvalidLayout(String),

    /// A dictionary entry that can never be spelled from its bucket.
    #[error("word {word:?} is not a valid entry for letter '{letter}'")]
    InvalidWord { letter: char, word: String },
}

/// Result alias for board construction and grid access.
pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = GameError::OutOfBounds {
            x: -1,
            y: 5,
            width: 15,
            height: 15,
        };
        assert_eq!(err.to_string(), "cell (-1, 5) is outside the 15x15 grid");

        let err = GameError::EmptyDictionaryBucket('q');
        assert_eq!(err.to_string(), "no dictionary words start with 'q'");

        let err = GameError::InvalidWord {
            letter: 'v',
            word: "snake".to_string(),
        };
        assert_eq!(err.to_string(), "word \"snake\" is not a valid entry for letter 'v'");
    }
}
