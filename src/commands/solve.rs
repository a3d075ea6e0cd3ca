//! Rack solving command
//!
//! Solves one rack and returns the ranked matches with search statistics.

use crate::core::{InputError, Match, Rack};
use crate::solver::{Solver, rank};
use std::time::{Duration, Instant};

/// Configuration for solving a rack
pub struct SolveConfig {
    pub rack: String,
    /// Keep only the best `limit` matches
    pub limit: Option<usize>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(rack: String) -> Self {
        Self { rack, limit: None }
    }

    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Result of solving a rack
pub struct SolveResult {
    /// Normalized rack
    pub rack: String,
    /// Ranked matches, possibly truncated to the limit
    pub matches: Vec<Match>,
    /// Match count before truncation
    pub total_matches: usize,
    pub nodes: usize,
    pub duration: Duration,
}

/// Solve a rack with the given solver
///
/// # Errors
///
/// Returns `InputError` if the rack is not alphabetic or exceeds the solver's
/// maximum rack length.
pub fn solve_rack(config: SolveConfig, solver: &Solver) -> Result<SolveResult, InputError> {
    let start = Instant::now();
    let rack = Rack::new(&config.rack, solver.config().max_rack_length)?;

    let outcome = solver.search(&rack);
    let total_matches = outcome.matches.len();
    let mut matches = rank(outcome.matches);
    if let Some(limit) = config.limit {
        matches.truncate(limit);
    }

    Ok(SolveResult {
        rack: rack.text().to_string(),
        matches,
        total_matches,
        nodes: outcome.nodes,
        duration: start.elapsed(),
    })
}
