//! Command implementations

pub mod benchmark;
pub mod lookup;
pub mod simple;
pub mod solve;

pub use benchmark::{BenchmarkResult, random_racks, run_benchmark};
pub use lookup::{LookupResult, lookup_word};
pub use simple::{SessionSummary, run_session, run_simple};
pub use solve::{SolveConfig, SolveResult, solve_rack};
