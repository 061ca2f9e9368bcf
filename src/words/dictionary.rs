//! Candidate win words bucketed by starting letter.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::core::{GameError, Result};

/// Most letters have a handful of candidates; keep them inline.
type Bucket = SmallVec<[String; 4]>;

/// Static word table mapping a lower-case letter to its candidate words.
///
/// Every bucket is non-empty and every word is made of ASCII letters,
/// lower-case, and starts with its bucket letter. A one-letter word is
/// already spelled when its start tile is selected.
///
/// ```
/// use std::collections::BTreeMap;
/// use snake_words::words::Dictionary;
///
/// let mut entries = BTreeMap::new();
/// entries.insert('v', vec!["venom".to_string(), "Viper".to_string()]);
/// let dict = Dictionary::new(&entries).unwrap();
///
/// assert_eq!(dict.candidates('V'), ["venom", "viper"]);
/// assert!(dict.candidates('x').is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Dictionary {
    buckets: FxHashMap<char, Bucket>,
}

impl Dictionary {
    /// Build and validate a dictionary.
    pub fn new(entries: &BTreeMap<char, Vec<String>>) -> Result<Self> {
        let mut buckets = FxHashMap::default();

        for (&key, words) in entries {
            let letter = key.to_ascii_lowercase();
            if words.is_empty() {
                return Err(GameError::EmptyDictionaryBucket(letter));
            }

            let mut bucket = Bucket::new();
            for word in words {
                let word = word.trim().to_ascii_lowercase();
                let well_formed = !word.is_empty()
                    && word.chars().all(|c| c.is_ascii_alphabetic())
                    && word.starts_with(letter);
                if !well_formed {
                    return Err(GameError::InvalidWord { letter, word });
                }
                bucket.push(word);
            }
            buckets.insert(letter, bucket);
        }

        Ok(Self { buckets })
    }

    /// Candidate words for `letter` (either case); empty if there are none.
    #[must_use]
    pub fn candidates(&self, letter: char) -> &[String] {
        self.buckets
            .get(&letter.to_ascii_lowercase())
            .map(SmallVec::as_slice)
            .unwrap_or(&[])
    }

    /// Fail with `EmptyDictionaryBucket` for the first letter that has no
    /// candidates.
    pub fn ensure_covers(&self, letters: impl IntoIterator<Item = char>) -> Result<()> {
        for letter in letters {
            if self.candidates(letter).is_empty() {
                return Err(GameError::EmptyDictionaryBucket(letter.to_ascii_lowercase()));
            }
        }
        Ok(())
    }

    /// Number of non-empty buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// True if there are no buckets at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// The stock word list.
///
/// Every letter on the stock board gets a bucket, and every word can be
/// spelled by walking neighbouring tiles from some tile with its first
/// letter.
#[must_use]
pub fn stock_words() -> BTreeMap<char, Vec<String>> {
    let table: [(char, &[&str]); 14] = [
        ('a', &["an"]),
        ('e', &["eh"]),
        ('h', &["he", "her"]),
        ('i', &["it"]),
        ('k', &["ka"]),
        ('l', &["lit", "lithe"]),
        ('m', &["mo"]),
        ('n', &["no"]),
        ('o', &["on", "one"]),
        ('p', &["pen", "pent"]),
        ('r', &["reptile", "repent"]),
        ('s', &["serpent", "snakes", "slither"]),
        ('t', &["the", "tile"]),
        ('v', &["venom", "vent"]),
    ];

    table
        .iter()
        .map(|(letter, words)| (*letter, words.iter().map(|w| (*w).to_string()).collect()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Direction, Position};
    use crate::grid::{Grid, STOCK_LAYOUT};

    fn entries(pairs: &[(char, &[&str])]) -> BTreeMap<char, Vec<String>> {
        pairs
            .iter()
            .map(|(c, ws)| (*c, ws.iter().map(|w| (*w).to_string()).collect()))
            .collect()
    }

    #[test]
    fn test_candidates_are_case_insensitive() {
        let dict = Dictionary::new(&entries(&[('S', &["Serpent", "snakes"])])).unwrap();
        assert_eq!(dict.candidates('s'), ["serpent", "snakes"]);
        assert_eq!(dict.candidates('S'), ["serpent", "snakes"]);
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn test_empty_bucket_rejected() {
        let err = Dictionary::new(&entries(&[('q', &[])])).unwrap_err();
        assert_eq!(err, GameError::EmptyDictionaryBucket('q'));
    }

    #[test]
    fn test_malformed_words_rejected() {
        for bad in ["snake", "", "v3nom", "ve nom"] {
            let err = Dictionary::new(&entries(&[('v', &[bad])])).unwrap_err();
            assert!(matches!(err, GameError::InvalidWord { letter: 'v', .. }), "{bad}");
        }
    }

    #[test]
    fn test_ensure_covers() {
        let dict = Dictionary::new(&entries(&[('v', &["vince"])])).unwrap();
        assert!(dict.ensure_covers(['V', 'v']).is_ok());
        assert_eq!(
            dict.ensure_covers(['v', 'I']),
            Err(GameError::EmptyDictionaryBucket('i'))
        );
    }

    #[test]
    fn test_empty_dictionary() {
        let dict = Dictionary::default();
        assert!(dict.is_empty());
        assert!(dict.candidates('a').is_empty());
    }

    /// True if `rest` can be spelled along a path of unvisited neighbours.
    fn spells_from(grid: &Grid, at: Position, rest: &[char], seen: &mut Vec<Position>) -> bool {
        let Some((&letter, tail)) = rest.split_first() else {
            return true;
        };
        Direction::ALL.iter().any(|&dir| {
            let next = at.step(dir);
            let matches = grid
                .tile_at(next)
                .is_some_and(|t| t.letter.eq_ignore_ascii_case(&letter));
            if !matches || seen.contains(&next) {
                return false;
            }
            seen.push(next);
            let found = spells_from(grid, next, tail, seen);
            seen.pop();
            found
        })
    }

    #[test]
    fn test_stock_words_are_spellable_on_stock_board() {
        let grid = Grid::from_rows(&STOCK_LAYOUT).unwrap();

        for (letter, words) in stock_words() {
            for word in words {
                let chars: Vec<char> = word.chars().collect();
                let spellable = grid
                    .tiles()
                    .filter(|t| t.letter.eq_ignore_ascii_case(&letter))
                    .any(|t| spells_from(&grid, t.position, &chars[1..], &mut vec![t.position]));
                assert!(spellable, "{word}");
            }
        }
    }

    #[test]
    fn test_stock_words_cover_stock_board() {
        let dict = Dictionary::new(&stock_words()).unwrap();
        let grid = Grid::from_rows(&STOCK_LAYOUT).unwrap();
        assert!(dict.ensure_covers(grid.tiles().map(|t| t.letter)).is_ok());
    }
}
