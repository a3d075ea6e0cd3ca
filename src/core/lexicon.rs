//! Dictionary and letter-value tables
//!
//! The Lexicon maps normalized (uppercase) words to scores and is read-only
//! once built. Scores come from a `LetterValues` table via [`score`].

use super::letter::{ALPHABET_SIZE, Letter};
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;

/// Error type for words that cannot be scored
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoringError {
    UnknownLetter(char),
}

impl fmt::Display for ScoringError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownLetter(c) => write!(f, "No value defined for letter {c:?}"),
        }
    }
}

impl std::error::Error for ScoringError {}

/// Error type for querying a word the Lexicon does not hold
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    NotPresent(String),
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotPresent(word) => write!(f, "Word '{word}' is not in the dictionary"),
        }
    }
}

impl std::error::Error for LookupError {}

/// Per-letter point values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterValues {
    values: [Option<u32>; ALPHABET_SIZE],
}

impl LetterValues {
    /// Build a table from `(letter, value)` pairs; later pairs overwrite earlier ones
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Letter, u32)>,
    {
        let mut values = [None; ALPHABET_SIZE];
        for (letter, value) in pairs {
            values[letter.index()] = Some(value);
        }
        Self { values }
    }

    #[inline]
    #[must_use]
    pub const fn value(&self, letter: Letter) -> Option<u32> {
        self.values[letter.index()]
    }

    /// Number of letters with a defined value
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.iter().flatten().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Score a word with this table; see [`score`]
    ///
    /// # Errors
    /// Returns `ScoringError` if any character has no value.
    pub fn score(&self, word: &str) -> Result<u32, ScoringError> {
        score(word, self)
    }
}

/// Sum of letter values across `word`
///
/// # Errors
/// Returns `ScoringError::UnknownLetter` for the first character that is not a
/// letter or has no entry in `values`.
///
/// # Examples
/// ```
/// use rack_solver::core::{score, Letter, LetterValues};
///
/// let values = LetterValues::from_pairs(
///     [('C', 3), ('A', 1), ('T', 1)]
///         .into_iter()
///         .filter_map(|(c, v)| Letter::from_char(c).map(|l| (l, v))),
/// );
/// assert_eq!(score("CAT", &values), Ok(5));
/// assert!(score("DOG", &values).is_err());
/// ```
pub fn score(word: &str, values: &LetterValues) -> Result<u32, ScoringError> {
    word.chars().try_fold(0u32, |total, c| {
        Letter::from_char(c)
            .and_then(|letter| values.value(letter))
            .map(|value| total.saturating_add(value))
            .ok_or(ScoringError::UnknownLetter(c))
    })
}

/// Immutable word-to-score dictionary
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    words: FxHashMap<String, u32>,
    prefixes: FxHashSet<String>,
}

impl Lexicon {
    /// Build a lexicon from `(word, score)` pairs
    ///
    /// Words are uppercased. Empty words, words longer than `max_word_length`
    /// and words with non-letter characters are skipped. When a word appears
    /// more than once the last score wins.
    ///
    /// # Examples
    /// ```
    /// use rack_solver::core::Lexicon;
    ///
    /// let lexicon = Lexicon::from_entries([("cat", 5), ("at", 2), ("c-t", 9)], 15);
    /// assert_eq!(lexicon.len(), 2);
    /// assert_eq!(lexicon.get("CAT"), Some(5));
    /// ```
    pub fn from_entries<I, S>(entries: I, max_word_length: usize) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: AsRef<str>,
    {
        let mut lexicon = Self::default();
        let mut skipped = 0usize;

        for (word, score) in entries {
            let word = word.as_ref();
            if is_valid_entry(word, max_word_length) {
                lexicon.insert(word.to_ascii_uppercase(), score);
            } else {
                skipped += 1;
            }
        }

        tracing::debug!(words = lexicon.len(), skipped, "built lexicon");
        lexicon
    }

    /// Build a lexicon from bare words, scoring each with `values`
    ///
    /// Filtering matches [`Lexicon::from_entries`].
    ///
    /// # Errors
    /// Returns `ScoringError` if a kept word contains a letter without a value.
    pub fn from_words<I, S>(
        words: I,
        values: &LetterValues,
        max_word_length: usize,
    ) -> Result<Self, ScoringError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = words
            .into_iter()
            .filter(|word| is_valid_entry(word.as_ref(), max_word_length))
            .map(|word| {
                let word = word.as_ref().to_ascii_uppercase();
                let points = score(&word, values)?;
                Ok((word, points))
            })
            .collect::<Result<Vec<_>, ScoringError>>()?;

        Ok(Self::from_entries(entries, max_word_length))
    }

    fn insert(&mut self, word: String, score: u32) {
        for end in 1..word.len() {
            if !self.prefixes.contains(&word[..end]) {
                self.prefixes.insert(word[..end].to_string());
            }
        }
        self.words.insert(word, score);
    }

    /// Check whether `word` is in the dictionary (no normalization)
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    /// Score for `word`, if present
    #[inline]
    #[must_use]
    pub fn get(&self, word: &str) -> Option<u32> {
        self.words.get(word).copied()
    }

    /// Score for a word known to be present
    ///
    /// # Errors
    /// Returns `LookupError::NotPresent` if the word is not in the dictionary.
    pub fn score_of(&self, word: &str) -> Result<u32, LookupError> {
        self.get(word)
            .ok_or_else(|| LookupError::NotPresent(word.to_string()))
    }

    /// Check whether some longer word starts with `prefix`
    ///
    /// The empty prefix extends to every word.
    #[inline]
    #[must_use]
    pub fn has_extension(&self, prefix: &str) -> bool {
        if prefix.is_empty() {
            !self.words.is_empty()
        } else {
            self.prefixes.contains(prefix)
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over `(word, score)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.words.iter().map(|(word, &score)| (word.as_str(), score))
    }
}

fn is_valid_entry(word: &str, max_word_length: usize) -> bool {
    !word.is_empty()
        && word.len() <= max_word_length
        && word.chars().all(|c| c.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard_values() -> LetterValues {
        LetterValues::from_pairs(
            [('A', 1), ('B', 3), ('C', 3), ('T', 1), ('Q', 10)]
                .into_iter()
                .map(|(c, v)| (Letter::from_char(c).unwrap(), v)),
        )
    }

    #[test]
    fn score_sums_letter_values() {
        let values = standard_values();
        assert_eq!(score("CAT", &values), Ok(5));
        assert_eq!(score("QAT", &values), Ok(12));
        assert_eq!(score("", &values), Ok(0));
    }

    #[test]
    fn score_fails_on_missing_letter() {
        let values = standard_values();
        assert_eq!(
            score("DOG", &values),
            Err(ScoringError::UnknownLetter('D'))
        );
        assert_eq!(
            values.score("CA-T"),
            Err(ScoringError::UnknownLetter('-'))
        );
    }

    #[test]
    fn letter_values_len() {
        assert_eq!(standard_values().len(), 5);
        assert!(LetterValues::default().is_empty());
    }

    #[test]
    fn lexicon_contains_and_get() {
        let lexicon = Lexicon::from_entries([("CAT", 5), ("AT", 2)], 15);
        assert!(lexicon.contains("CAT"));
        assert!(lexicon.contains("AT"));
        assert!(!lexicon.contains("CA"));
        assert_eq!(lexicon.get("AT"), Some(2));
        assert_eq!(lexicon.get("A"), None);
    }

    #[test]
    fn lexicon_does_not_normalize_queries() {
        let lexicon = Lexicon::from_entries([("cat", 5)], 15);
        assert!(lexicon.contains("CAT"));
        assert!(!lexicon.contains("cat"));
    }

    #[test]
    fn lexicon_score_of_missing_word() {
        let lexicon = Lexicon::from_entries([("CAT", 5)], 15);
        assert_eq!(lexicon.score_of("CAT"), Ok(5));
        assert_eq!(
            lexicon.score_of("DOG"),
            Err(LookupError::NotPresent("DOG".to_string()))
        );
    }

    #[test]
    fn lexicon_last_write_wins() {
        let lexicon = Lexicon::from_entries([("CAT", 5), ("cat", 7), ("AT", 2)], 15);
        assert_eq!(lexicon.len(), 2);
        assert_eq!(lexicon.get("CAT"), Some(7));
    }

    #[test]
    fn lexicon_skips_invalid_entries() {
        let lexicon = Lexicon::from_entries(
            [
                ("", 1),
                ("DON'T", 4),
                ("TWO WORDS", 9),
                ("ÉTÉ", 3),
                ("ABCDEFGHIJKLMNOP", 30),
                ("ABCDEFGHIJKLMNO", 29),
            ],
            15,
        );
        assert_eq!(lexicon.len(), 1);
        assert!(lexicon.contains("ABCDEFGHIJKLMNO"));
    }

    #[test]
    fn lexicon_from_words_scores_with_values() {
        let values = standard_values();
        let lexicon = Lexicon::from_words(["cat", "tab", "a1"], &values, 15).unwrap();
        assert_eq!(lexicon.len(), 2);
        assert_eq!(lexicon.get("CAT"), Some(5));
        assert_eq!(lexicon.get("TAB"), Some(5));
    }

    #[test]
    fn lexicon_from_words_fails_on_unscorable_word() {
        let values = standard_values();
        let result = Lexicon::from_words(["cat", "dog"], &values, 15);
        assert_eq!(result.unwrap_err(), ScoringError::UnknownLetter('D'));
    }

    #[test]
    fn lexicon_prefixes() {
        let lexicon = Lexicon::from_entries([("CATS", 6)], 15);
        assert!(lexicon.has_extension(""));
        assert!(lexicon.has_extension("C"));
        assert!(lexicon.has_extension("CAT"));
        assert!(!lexicon.has_extension("CATS"));
        assert!(!lexicon.has_extension("AT"));
    }

    #[test]
    fn empty_lexicon_has_no_extensions() {
        let lexicon = Lexicon::default();
        assert!(lexicon.is_empty());
        assert!(!lexicon.has_extension(""));
    }

    #[test]
    fn lexicon_iter_yields_all_entries() {
        let lexicon = Lexicon::from_entries([("CAT", 5), ("AT", 2)], 15);
        let mut entries: Vec<_> = lexicon.iter().collect();
        entries.sort_unstable();
        assert_eq!(entries, vec![("AT", 2), ("CAT", 5)]);
    }
}
