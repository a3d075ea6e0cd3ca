//! Main rack solver interface
//!
//! Depth-first backtracking over the rack multiset. Each node tests the
//! current path against the Lexicon, then branches on every letter that still
//! has unused copies in the rack.

use super::config::SolverConfig;
use super::lookup::lookup;
use super::ranker::rank;
use crate::core::{ALPHABET_SIZE, InputError, Lexicon, Match, Rack};
use rustc_hash::FxHashSet;
use std::time::Instant;

/// Unranked result of one search
#[derive(Debug, Clone, Default)]
pub struct SearchOutcome {
    /// Distinct matches in discovery order
    pub matches: Vec<Match>,
    /// Number of search-tree nodes visited
    pub nodes: usize,
}

/// Main rack solver
///
/// Holds a shared, read-only Lexicon. All mutable search state is created per
/// call, so one solver can serve any number of queries, including from several
/// threads at once.
#[derive(Debug, Clone, Copy)]
pub struct Solver<'a> {
    lexicon: &'a Lexicon,
    config: SolverConfig,
}

impl<'a> Solver<'a> {
    /// Create a solver over `lexicon` with the given limits
    #[must_use]
    pub const fn new(lexicon: &'a Lexicon, config: SolverConfig) -> Self {
        Self { lexicon, config }
    }

    #[must_use]
    pub const fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Find every dictionary word the rack can spell, best score first
    ///
    /// # Errors
    /// Returns `InputError` if the rack contains non-letters or exceeds the
    /// configured maximum length. An empty rack gives an empty result.
    ///
    /// # Examples
    /// ```
    /// use rack_solver::core::Lexicon;
    /// use rack_solver::solver::{Solver, SolverConfig};
    ///
    /// let lexicon = Lexicon::from_entries([("CAT", 5), ("AT", 2)], 15);
    /// let solver = Solver::new(&lexicon, SolverConfig::default());
    ///
    /// let matches = solver.solve("tac").unwrap();
    /// let words: Vec<&str> = matches.iter().map(|m| m.word()).collect();
    /// assert_eq!(words, ["CAT", "AT"]);
    /// ```
    pub fn solve(&self, raw_rack: &str) -> Result<Vec<Match>, InputError> {
        let rack = Rack::new(raw_rack, self.config.max_rack_length)?;
        Ok(rank(self.search(&rack).matches))
    }

    /// Run the backtracking search without ranking
    #[must_use]
    pub fn search(&self, rack: &Rack) -> SearchOutcome {
        if rack.is_empty() {
            return SearchOutcome::default();
        }

        let start = Instant::now();
        let mut state = SearchState::new(rack);
        state.explore(self.lexicon);

        tracing::debug!(
            rack = rack.text(),
            matches = state.found.len(),
            nodes = state.nodes,
            elapsed_us = start.elapsed().as_micros() as u64,
            "search complete"
        );

        SearchOutcome {
            matches: state.found,
            nodes: state.nodes,
        }
    }

    /// Look up a single raw word
    ///
    /// # Errors
    /// Returns `InputError` for empty, non-alphabetic or over-long words.
    pub fn lookup(&self, raw_word: &str) -> Result<Option<Match>, InputError> {
        lookup(self.lexicon, raw_word, self.config.max_word_length)
    }
}

/// Working state owned by a single search
struct SearchState<'r> {
    rack: &'r Rack,
    used: [u32; ALPHABET_SIZE],
    path: String,
    emitted: FxHashSet<String>,
    found: Vec<Match>,
    nodes: usize,
}

impl<'r> SearchState<'r> {
    fn new(rack: &'r Rack) -> Self {
        Self {
            rack,
            used: [0; ALPHABET_SIZE],
            path: String::with_capacity(rack.len()),
            emitted: FxHashSet::default(),
            found: Vec::new(),
            nodes: 0,
        }
    }

    fn explore(&mut self, lexicon: &Lexicon) {
        self.nodes += 1;

        if let Some(score) = lexicon.get(&self.path)
            && self.emitted.insert(self.path.clone())
        {
            self.found.push(Match::new(self.path.clone(), score));
        }

        // No dictionary word continues this path
        if !lexicon.has_extension(&self.path) {
            return;
        }

        let rack = self.rack;
        for &letter in rack.letters() {
            let i = letter.index();
            if self.used[i] >= rack.count(letter) {
                continue;
            }

            self.used[i] += 1;
            self.path.push(letter.to_char());
            self.explore(lexicon);
            self.path.pop();
            self.used[i] -= 1;
        }
    }
}
