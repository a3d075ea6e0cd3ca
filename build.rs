//! Build script to generate embedded lookup tables
//!
//! Reads the default letter values and sample dictionary and generates Rust
//! source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Standard English tile values, one `LETTER,VALUE` line each
    generate_line_table(
        "data/letter_values.txt",
        &Path::new(&out_dir).join("letter_values.rs"),
        "LETTER_VALUES",
        "Default letter values as `LETTER,VALUE` lines",
    );

    // Small dictionary so the binary works without external files
    generate_line_table(
        "data/sample_words.txt",
        &Path::new(&out_dir).join("sample_words.rs"),
        "SAMPLE_WORDS",
        "Sample dictionary words",
    );

    println!("cargo:rerun-if-changed=data/letter_values.txt");
    println!("cargo:rerun-if-changed=data/sample_words.txt");
}

fn generate_line_table(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let lines: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let count = lines.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated from {input_path}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment} ({count} entries)").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for line in lines {
        writeln!(output, "    {line:?},").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of entries in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
