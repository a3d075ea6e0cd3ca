//! Rack solving algorithms
//!
//! The backtracking search engine, result ranking and single-word lookup.

mod config;
mod engine;
mod lookup;
mod ranker;

pub use config::SolverConfig;
pub use engine::{SearchOutcome, Solver};
pub use lookup::lookup;
pub use ranker::{rank, top};
