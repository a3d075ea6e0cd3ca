//! Word lookup command
//!
//! Checks whether a single word is in the dictionary and reports its score.

use crate::core::{InputError, Match};
use crate::solver::Solver;

/// Result of looking up a word
pub struct LookupResult {
    /// Normalized query
    pub word: String,
    /// The dictionary entry, or `None` for an unknown word
    pub found: Option<Match>,
}

impl LookupResult {
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.found.is_some()
    }
}

/// Look up a word with the given solver
///
/// # Errors
///
/// Returns `InputError` if the word is empty, contains non-letters or is
/// longer than the solver's maximum word length.
pub fn lookup_word(word: &str, solver: &Solver) -> Result<LookupResult, InputError> {
    let found = solver.lookup(word)?;

    Ok(LookupResult {
        word: word.to_ascii_uppercase(),
        found,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SolverConfig;
    use crate::tables::loader::{builtin_letter_values, sample_lexicon};

    #[test]
    fn lookup_known_word() {
        let values = builtin_letter_values().unwrap();
        let lexicon = sample_lexicon(&values, 15).unwrap();
        let solver = Solver::new(&lexicon, SolverConfig::default());

        let result = lookup_word("zebra", &solver).unwrap();
        assert_eq!(result.word, "ZEBRA");
        assert!(result.is_valid());
        assert_eq!(result.found, Some(Match::new("ZEBRA", 16)));
    }

    #[test]
    fn lookup_unknown_word() {
        let values = builtin_letter_values().unwrap();
        let lexicon = sample_lexicon(&values, 15).unwrap();
        let solver = Solver::new(&lexicon, SolverConfig::default());

        let result = lookup_word("zzz", &solver).unwrap();
        assert_eq!(result.word, "ZZZ");
        assert!(!result.is_valid());
    }

    #[test]
    fn lookup_invalid_word() {
        let lexicon = crate::core::Lexicon::default();
        let solver = Solver::new(&lexicon, SolverConfig::default());

        assert!(matches!(
            lookup_word("no way", &solver),
            Err(InputError::NonAlphabetic(' '))
        ));
        assert!(matches!(lookup_word("", &solver), Err(InputError::Empty)));
    }
}
