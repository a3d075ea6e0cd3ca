//! Result ranking
//!
//! Orders matches by descending score. Equal scores fall back to alphabetical
//! order so output is stable between runs.

use crate::core::Match;

/// Sort matches by non-increasing score
///
/// # Examples
/// ```
/// use rack_solver::core::Match;
/// use rack_solver::solver::rank;
///
/// let ranked = rank(vec![Match::new("AT", 2), Match::new("CAT", 5)]);
/// assert_eq!(ranked[0].word(), "CAT");
/// ```
#[must_use]
pub fn rank(mut matches: Vec<Match>) -> Vec<Match> {
    matches.sort_unstable_by(Match::rank_cmp);
    matches
}

/// Rank matches and keep at most `limit` of them
#[must_use]
pub fn top(matches: Vec<Match>, limit: usize) -> Vec<Match> {
    let mut ranked = rank(matches);
    ranked.truncate(limit);
    ranked
}
