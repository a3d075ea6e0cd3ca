//! Table loading utilities
//!
//! Parses letter values and word lists from files or embedded constants.
//! Letter-value files are strict: any malformed line aborts loading. Word
//! lists are lenient: lines that are not usable words are skipped.

use super::{LETTER_VALUES, SAMPLE_WORDS};
use crate::core::{Letter, LetterValues, Lexicon, ScoringError};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Error type for table ingestion
#[derive(Debug)]
pub enum IngestionError {
    Io { path: PathBuf, source: io::Error },
    MissingDelimiter { line: usize },
    InvalidLetter { line: usize, text: String },
    InvalidValue { line: usize, text: String },
    Scoring(ScoringError),
}

impl fmt::Display for IngestionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Failed to read {}: {source}", path.display())
            }
            Self::MissingDelimiter { line } => {
                write!(f, "Line {line}: expected LETTER,VALUE")
            }
            Self::InvalidLetter { line, text } => {
                write!(f, "Line {line}: '{text}' is not a single letter")
            }
            Self::InvalidValue { line, text } => {
                write!(f, "Line {line}: '{text}' is not a non-negative integer")
            }
            Self::Scoring(e) => write!(f, "Failed to score dictionary: {e}"),
        }
    }
}

impl std::error::Error for IngestionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Scoring(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ScoringError> for IngestionError {
    fn from(e: ScoringError) -> Self {
        Self::Scoring(e)
    }
}

fn read_file(path: &Path) -> Result<String, IngestionError> {
    fs::read_to_string(path).map_err(|source| IngestionError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse `LETTER,VALUE` lines into a letter-value table
///
/// Blank lines are ignored. Line numbers in errors are 1-based.
///
/// # Errors
///
/// Returns `IngestionError` for a line without a comma, a left field that is
/// not exactly one ASCII letter, or a value that is not a non-negative integer.
///
/// # Examples
/// ```
/// use rack_solver::core::Letter;
/// use rack_solver::tables::loader::parse_letter_values;
///
/// let values = parse_letter_values(["A,1", "q, 10"]).unwrap();
/// assert_eq!(values.value(Letter::from_char('Q').unwrap()), Some(10));
/// assert!(parse_letter_values(["A 1"]).is_err());
/// ```
pub fn parse_letter_values<'a, I>(lines: I) -> Result<LetterValues, IngestionError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut pairs = Vec::new();

    for (i, raw) in lines.into_iter().enumerate() {
        let line = i + 1;
        if raw.trim().is_empty() {
            continue;
        }

        let (letter_text, value_text) = raw
            .split_once(',')
            .ok_or(IngestionError::MissingDelimiter { line })?;
        let (letter_text, value_text) = (letter_text.trim(), value_text.trim());

        let mut chars = letter_text.chars();
        let letter = match (chars.next().and_then(Letter::from_char), chars.next()) {
            (Some(letter), None) => letter,
            _ => {
                return Err(IngestionError::InvalidLetter {
                    line,
                    text: letter_text.to_string(),
                });
            }
        };

        let value = value_text
            .parse::<u32>()
            .map_err(|_| IngestionError::InvalidValue {
                line,
                text: value_text.to_string(),
            })?;

        pairs.push((letter, value));
    }

    Ok(LetterValues::from_pairs(pairs))
}

/// Load a letter-value table from a file
///
/// # Errors
///
/// Returns `IngestionError` if the file cannot be read or a line is malformed.
pub fn load_letter_values<P: AsRef<Path>>(path: P) -> Result<LetterValues, IngestionError> {
    let path = path.as_ref();
    let values = parse_letter_values(read_file(path)?.lines())?;
    tracing::info!(path = %path.display(), letters = values.len(), "loaded letter values");
    Ok(values)
}

/// Letter values compiled into the binary
///
/// # Errors
///
/// Returns `IngestionError` if the embedded table is malformed.
pub fn builtin_letter_values() -> Result<LetterValues, IngestionError> {
    parse_letter_values(LETTER_VALUES.iter().copied())
}

/// Build a Lexicon from word-list lines, scoring each word with `values`
///
/// Lines are trimmed; blank, over-long and non-alphabetic lines are skipped.
///
/// # Errors
///
/// Returns `IngestionError::Scoring` if a kept word has a letter without a value.
///
/// # Examples
/// ```
/// use rack_solver::tables::loader::{builtin_letter_values, lexicon_from_lines};
///
/// let values = builtin_letter_values().unwrap();
/// let lexicon = lexicon_from_lines(["cat", " at ", "", "it's"], &values, 15).unwrap();
/// assert_eq!(lexicon.len(), 2);
/// assert_eq!(lexicon.get("CAT"), Some(5));
/// ```
pub fn lexicon_from_lines<'a, I>(
    lines: I,
    values: &LetterValues,
    max_word_length: usize,
) -> Result<Lexicon, IngestionError>
where
    I: IntoIterator<Item = &'a str>,
{
    let lexicon = Lexicon::from_words(lines.into_iter().map(str::trim), values, max_word_length)?;
    Ok(lexicon)
}

/// Load a dictionary file, one word per line
///
/// # Errors
///
/// Returns `IngestionError` if the file cannot be read or a word cannot be scored.
///
/// # Examples
/// ```no_run
/// use rack_solver::tables::loader::{builtin_letter_values, load_dictionary};
///
/// let values = builtin_letter_values().unwrap();
/// let lexicon = load_dictionary("EnglishDictionary.txt", &values, 15).unwrap();
/// println!("Loaded {} words", lexicon.len());
/// ```
pub fn load_dictionary<P: AsRef<Path>>(
    path: P,
    values: &LetterValues,
    max_word_length: usize,
) -> Result<Lexicon, IngestionError> {
    let path = path.as_ref();
    let content = read_file(path)?;
    let total = content.lines().count();
    let lexicon = lexicon_from_lines(content.lines(), values, max_word_length)?;

    tracing::info!(
        path = %path.display(),
        words = lexicon.len(),
        lines = total,
        "loaded dictionary"
    );
    if lexicon.len() < total {
        tracing::warn!(
            skipped = total - lexicon.len(),
            "some dictionary lines were blank, invalid, too long or duplicated"
        );
    }

    Ok(lexicon)
}

/// Lexicon built from the embedded sample word list
///
/// # Errors
///
/// Returns `IngestionError::Scoring` if `values` lacks a letter the samples use.
pub fn sample_lexicon(
    values: &LetterValues,
    max_word_length: usize,
) -> Result<Lexicon, IngestionError> {
    lexicon_from_lines(SAMPLE_WORDS.iter().copied(), values, max_word_length)
}
