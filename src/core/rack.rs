//! Rack multiset representation
//!
//! A Rack stores how many of each letter are available, plus the distinct
//! letters in the order they first appear so searches branch deterministically.

use super::letter::{ALPHABET_SIZE, Letter};
use std::fmt;

/// Error type for rejected rack or lookup input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    Empty,
    NonAlphabetic(char),
    TooLong { len: usize, max: usize },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Input must not be empty"),
            Self::NonAlphabetic(c) => {
                write!(f, "Input must contain only letters, found {c:?}")
            }
            Self::TooLong { len, max } => {
                write!(f, "Input may have at most {max} letters, got {len}")
            }
        }
    }
}

impl std::error::Error for InputError {}

/// Uppercase and validate raw user input
///
/// Empty input is accepted here; callers that need a word reject it themselves.
///
/// # Errors
/// Returns `InputError` if the input contains a non-letter or has more than
/// `max_len` letters.
///
/// # Examples
/// ```
/// use rack_solver::core::{normalize, InputError};
///
/// assert_eq!(normalize("cat", 10).unwrap(), "CAT");
/// assert_eq!(normalize("c4t", 10), Err(InputError::NonAlphabetic('4')));
/// ```
pub fn normalize(raw: &str, max_len: usize) -> Result<String, InputError> {
    if let Some(bad) = raw.chars().find(|c| !c.is_ascii_alphabetic()) {
        return Err(InputError::NonAlphabetic(bad));
    }

    // All ASCII from here, so byte length is letter count
    if raw.len() > max_len {
        return Err(InputError::TooLong {
            len: raw.len(),
            max: max_len,
        });
    }

    Ok(raw.to_ascii_uppercase())
}

/// Multiset of letters available to a search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rack {
    text: String,
    counts: [u32; ALPHABET_SIZE],
    distinct: Vec<Letter>,
}

impl Rack {
    /// Build a rack from raw input
    ///
    /// # Errors
    /// Returns `InputError` if the input is not purely alphabetic or is longer
    /// than `max_len`. An empty rack is valid.
    ///
    /// # Examples
    /// ```
    /// use rack_solver::core::{Letter, Rack};
    ///
    /// let rack = Rack::new("aab", 10).unwrap();
    /// assert_eq!(rack.count(Letter::from_char('A').unwrap()), 2);
    /// assert_eq!(rack.len(), 3);
    /// assert!(Rack::new("abcdefghijk", 10).is_err());
    /// ```
    pub fn new(raw: &str, max_len: usize) -> Result<Self, InputError> {
        let text = normalize(raw, max_len)?;

        let mut counts = [0u32; ALPHABET_SIZE];
        let mut distinct = Vec::new();
        for letter in text.chars().filter_map(Letter::from_char) {
            if counts[letter.index()] == 0 {
                distinct.push(letter);
            }
            counts[letter.index()] += 1;
        }

        Ok(Self {
            text,
            counts,
            distinct,
        })
    }

    /// Normalized rack text
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// How many copies of `letter` the rack holds
    #[inline]
    #[must_use]
    pub const fn count(&self, letter: Letter) -> u32 {
        self.counts[letter.index()]
    }

    /// Distinct letters in first-occurrence order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.distinct
    }

    /// Total number of tiles
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check whether `word` can be spelled with these tiles
    ///
    /// Non-letters in `word` make it unspellable.
    #[must_use]
    pub fn can_spell(&self, word: &str) -> bool {
        let mut needed = [0u32; ALPHABET_SIZE];
        for c in word.chars() {
            let Some(letter) = Letter::from_char(c) else {
                return false;
            };
            needed[letter.index()] += 1;
            if needed[letter.index()] > self.counts[letter.index()] {
                return false;
            }
        }
        true
    }
}

impl fmt::Display for Rack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
