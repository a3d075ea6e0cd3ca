//! Benchmark command
//!
//! Solves many random racks in parallel. Each rack gets its own independent
//! search; only the Lexicon is shared.

use crate::core::{Letter, Match, Rack};
use crate::solver::{Solver, rank};
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_racks: usize,
    /// Racks rejected as invalid input
    pub rejected: usize,
    pub total_matches: usize,
    pub average_matches: f64,
    pub max_matches: usize,
    pub total_nodes: usize,
    /// Highest scoring match over all racks, with its rack
    pub best: Option<(String, Match)>,
    pub duration: Duration,
    pub racks_per_second: f64,
}

/// Generate `count` random racks of `length` letters
///
/// # Examples
/// ```
/// use rack_solver::commands::random_racks;
/// use rand::SeedableRng;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let racks = random_racks(3, 7, &mut rng);
/// assert_eq!(racks.len(), 3);
/// assert!(racks.iter().all(|r| r.len() == 7));
/// ```
pub fn random_racks<R: Rng + ?Sized>(count: usize, length: usize, rng: &mut R) -> Vec<String> {
    (0..count)
        .map(|_| {
            (0..length)
                .filter_map(|_| Letter::from_index(rng.random_range(0..26)))
                .map(Letter::to_char)
                .collect()
        })
        .collect()
}

struct RackStats {
    matches: usize,
    nodes: usize,
    best: Option<Match>,
}

/// Solve every rack and collect aggregate statistics
pub fn run_benchmark(solver: &Solver, racks: &[String]) -> BenchmarkResult {
    let pb = ProgressBar::new(racks.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let max_rack_length = solver.config().max_rack_length;

    let per_rack: Vec<(&String, Option<RackStats>)> = racks
        .par_iter()
        .map(|raw| {
            let stats = Rack::new(raw, max_rack_length).ok().map(|rack| {
                let outcome = solver.search(&rack);
                let matches = outcome.matches.len();
                RackStats {
                    matches,
                    nodes: outcome.nodes,
                    best: rank(outcome.matches).into_iter().next(),
                }
            });
            pb.inc(1);
            (raw, stats)
        })
        .collect();

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let mut total_matches = 0;
    let mut max_matches = 0;
    let mut total_nodes = 0;
    let mut rejected = 0;
    let mut best: Option<(String, Match)> = None;

    for (raw, stats) in per_rack {
        let Some(stats) = stats else {
            rejected += 1;
            continue;
        };

        total_matches += stats.matches;
        max_matches = max_matches.max(stats.matches);
        total_nodes += stats.nodes;

        if let Some(candidate) = stats.best
            && best
                .as_ref()
                .is_none_or(|(_, current)| candidate.score() > current.score())
        {
            best = Some((raw.to_ascii_uppercase(), candidate));
        }
    }

    let total_racks = racks.len();
    let solved = total_racks - rejected;

    BenchmarkResult {
        total_racks,
        rejected,
        total_matches,
        average_matches: if solved > 0 {
            total_matches as f64 / solved as f64
        } else {
            0.0
        },
        max_matches,
        total_nodes,
        best,
        duration,
        racks_per_second: total_racks as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SolverConfig;
    use crate::tables::loader::{builtin_letter_values, sample_lexicon};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn random_racks_are_valid() {
        let mut rng = StdRng::seed_from_u64(42);
        let racks = random_racks(20, 7, &mut rng);

        assert_eq!(racks.len(), 20);
        for rack in &racks {
            assert_eq!(rack.len(), 7);
            assert!(rack.chars().all(|c| c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn random_racks_are_reproducible_with_seed() {
        let a = random_racks(5, 7, &mut StdRng::seed_from_u64(1));
        let b = random_racks(5, 7, &mut StdRng::seed_from_u64(1));
        assert_eq!(a, b);
    }

    #[test]
    fn benchmark_runs() {
        let values = builtin_letter_values().unwrap();
        let lexicon = sample_lexicon(&values, 15).unwrap();
        let solver = Solver::new(&lexicon, SolverConfig::default());

        let racks = random_racks(10, 7, &mut StdRng::seed_from_u64(3));
        let result = run_benchmark(&solver, &racks);

        assert_eq!(result.total_racks, 10);
        assert_eq!(result.rejected, 0);
        assert!(result.total_nodes >= 10);
        assert!(result.max_matches <= result.total_matches);
        assert!(result.average_matches <= result.max_matches as f64);
    }

    #[test]
    fn benchmark_finds_best_match() {
        let values = builtin_letter_values().unwrap();
        let lexicon = sample_lexicon(&values, 15).unwrap();
        let solver = Solver::new(&lexicon, SolverConfig::default());

        let racks = vec!["tac".to_string(), "zebra".to_string()];
        let result = run_benchmark(&solver, &racks);

        let (rack, best) = result.best.unwrap();
        assert_eq!(rack, "ZEBRA");
        assert_eq!(best, Match::new("ZEBRA", 16));
    }

    #[test]
    fn benchmark_counts_rejected_racks() {
        let lexicon = crate::core::Lexicon::default();
        let solver = Solver::new(&lexicon, SolverConfig::default());

        let racks = vec!["ok".to_string(), "not ok".to_string()];
        let result = run_benchmark(&solver, &racks);

        assert_eq!(result.rejected, 1);
        assert_eq!(result.total_matches, 0);
        assert!(result.best.is_none());
    }

    #[test]
    fn benchmark_empty_rack_list() {
        let lexicon = crate::core::Lexicon::default();
        let solver = Solver::new(&lexicon, SolverConfig::default());

        let result = run_benchmark(&solver, &[]);
        assert_eq!(result.total_racks, 0);
        assert_eq!(result.average_matches, 0.0);
    }
}
