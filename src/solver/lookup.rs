//! Single-word dictionary lookup

use crate::core::{InputError, Lexicon, Match, normalize};

/// Look up a raw word in the dictionary
///
/// The word is uppercased before the query. A word that is well formed but
/// absent yields `Ok(None)`.
///
/// # Errors
/// Returns `InputError` if the word is empty, contains non-letters or is longer
/// than `max_word_length`.
///
/// # Examples
/// ```
/// use rack_solver::core::Lexicon;
/// use rack_solver::solver::lookup;
///
/// let lexicon = Lexicon::from_entries([("CAT", 5)], 15);
/// assert_eq!(lookup(&lexicon, "cat", 15).unwrap().unwrap().score(), 5);
/// assert!(lookup(&lexicon, "zzz", 15).unwrap().is_none());
/// ```
pub fn lookup(
    lexicon: &Lexicon,
    raw: &str,
    max_word_length: usize,
) -> Result<Option<Match>, InputError> {
    if raw.is_empty() {
        return Err(InputError::Empty);
    }

    let word = normalize(raw, max_word_length)?;
    Ok(lexicon.get(&word).map(|score| Match::new(word, score)))
}
