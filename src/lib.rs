//! Rack Solver
//!
//! Finds every dictionary word that can be spelled from a rack of letters and
//! ranks them by score, Scrabble style.
//!
//! # Quick Start
//!
//! ```rust
//! use rack_solver::solver::{Solver, SolverConfig};
//! use rack_solver::tables::loader::{builtin_letter_values, lexicon_from_lines};
//!
//! let values = builtin_letter_values().unwrap();
//! let lexicon = lexicon_from_lines(["cat", "act", "at"], &values, 15).unwrap();
//! let solver = Solver::new(&lexicon, SolverConfig::default());
//!
//! for m in solver.solve("tca").unwrap() {
//!     println!("{} scores {}", m.word(), m.score());
//! }
//! ```

// Core domain types
pub mod core;

// Search engine, ranking and lookup
pub mod solver;

// Letter values and dictionaries
pub mod tables;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
