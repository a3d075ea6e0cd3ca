//! Scored dictionary matches

use std::cmp::Ordering;
use std::fmt;

/// A dictionary word reachable from a rack, with its score
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Match {
    word: String,
    score: u32,
}

impl Match {
    #[must_use]
    pub fn new(word: impl Into<String>, score: u32) -> Self {
        Self {
            word: word.into(),
            score,
        }
    }

    /// The matched word (uppercase)
    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Ranking order: higher score first, then alphabetical
    #[must_use]
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .cmp(&self.score)
            .then_with(|| self.word.cmp(&other.word))
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.word, self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn higher_score_ranks_first() {
        let cat = Match::new("CAT", 5);
        let at = Match::new("AT", 2);
        assert_eq!(cat.rank_cmp(&at), Ordering::Less);
        assert_eq!(at.rank_cmp(&cat), Ordering::Greater);
    }

    #[test]
    fn equal_scores_are_distinct_matches() {
        let act = Match::new("ACT", 5);
        let cat = Match::new("CAT", 5);
        assert_ne!(act.rank_cmp(&cat), Ordering::Equal);
        assert_eq!(act.rank_cmp(&act.clone()), Ordering::Equal);
    }

    #[test]
    fn match_display() {
        assert_eq!(Match::new("CAT", 5).to_string(), "CAT (5)");
    }
}
