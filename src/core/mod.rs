//! Core domain types for rack solving
//!
//! Letters, racks, the dictionary and scored matches. These types carry no
//! I/O and are shared read-only across searches.

mod letter;
mod lexicon;
mod rack;
mod scored;

pub use letter::{ALPHABET_SIZE, Letter};
pub use lexicon::{LetterValues, Lexicon, LookupError, ScoringError, score};
pub use rack::{InputError, Rack, normalize};
pub use scored::Match;
