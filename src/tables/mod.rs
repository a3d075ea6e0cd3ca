//! Dictionary and letter-value tables
//!
//! Embedded defaults plus loaders that turn word lists and `LETTER,VALUE`
//! files into the core lookup tables.

mod embedded;
pub mod loader;

pub use embedded::{LETTER_VALUES, LETTER_VALUES_COUNT, SAMPLE_WORDS, SAMPLE_WORDS_COUNT};
pub use loader::IngestionError;
