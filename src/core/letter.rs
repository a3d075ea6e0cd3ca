//! Alphabet letters as dense indices
//!
//! A `Letter` is one of the 26 ASCII letters, stored as its index (0-25) so
//! count tables can be plain arrays.

use std::fmt;

/// Number of letters in the alphabet
pub const ALPHABET_SIZE: usize = 26;

/// A case-normalized ASCII letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// Convert a character to a letter, folding case
    ///
    /// Returns `None` for anything that is not an ASCII letter.
    ///
    /// # Examples
    /// ```
    /// use rack_solver::core::Letter;
    ///
    /// assert_eq!(Letter::from_char('c'), Letter::from_char('C'));
    /// assert_eq!(Letter::from_char('C').unwrap().index(), 2);
    /// assert!(Letter::from_char('3').is_none());
    /// ```
    #[inline]
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_alphabetic() {
            Some(Self(c.to_ascii_uppercase() as u8 - b'A'))
        } else {
            None
        }
    }

    /// Create a letter from its index (0 = A)
    #[inline]
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < ALPHABET_SIZE {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Position in the alphabet (0-25)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Uppercase character for this letter
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        (b'A' + self.0) as char
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_from_char_folds_case() {
        assert_eq!(Letter::from_char('a'), Letter::from_char('A'));
        assert_eq!(Letter::from_char('z').unwrap().index(), 25);
    }

    #[test]
    fn letter_rejects_non_letters() {
        assert!(Letter::from_char('1').is_none());
        assert!(Letter::from_char(' ').is_none());
        assert!(Letter::from_char('é').is_none());
    }

    #[test]
    fn letter_index_round_trip() {
        for i in 0..ALPHABET_SIZE {
            let letter = Letter::from_index(i).unwrap();
            assert_eq!(letter.index(), i);
            assert_eq!(Letter::from_char(letter.to_char()), Some(letter));
        }
        assert!(Letter::from_index(ALPHABET_SIZE).is_none());
    }

    #[test]
    fn letter_display() {
        assert_eq!(format!("{}", Letter::from_char('q').unwrap()), "Q");
    }
}
