//! Embedded tables
//!
//! Letter values and a sample dictionary compiled into the binary at build time.

// Include generated tables from build script
include!(concat!(env!("OUT_DIR"), "/letter_values.rs"));
include!(concat!(env!("OUT_DIR"), "/sample_words.rs"));
