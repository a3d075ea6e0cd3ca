//! Display functions for command results

use super::formatters::{format_match, score_bar};
use crate::commands::{BenchmarkResult, LookupResult, SolveResult};
use colored::Colorize;

/// Print the result of solving a rack
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Rack: {}", result.rack.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    if result.matches.is_empty() {
        println!("\n{}", "No words can be made from this rack.".red());
        return;
    }

    let best = result.matches.first().map_or(0, |m| m.score());
    let word_width = result
        .matches
        .iter()
        .map(|m| m.word().len())
        .max()
        .unwrap_or(0);

    println!();
    for (i, m) in result.matches.iter().enumerate() {
        println!(
            "{} {}",
            format_match(i + 1, m, word_width),
            score_bar(m.score(), best, 20).green()
        );
    }

    println!();
    if result.matches.len() < result.total_matches {
        println!(
            "Showing {} of {} words",
            result.matches.len(),
            result.total_matches
        );
    } else {
        println!(
            "{}",
            format!("✅ Found {} words", result.total_matches)
                .green()
                .bold()
        );
    }

    if verbose {
        println!("  Nodes visited: {}", result.nodes);
        println!("  Time taken:    {:.3}ms", result.duration.as_secs_f64() * 1000.0);
    }
}

/// Print the result of a word lookup
pub fn print_lookup_result(result: &LookupResult) {
    match &result.found {
        Some(m) => println!(
            "{} is a valid word with a score of {}!",
            m.word().bright_white().bold(),
            m.score().to_string().bright_yellow().bold()
        ),
        None => println!("{} {}", result.word.bright_white(), "is not a valid word!".red()),
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Racks solved:     {}", result.total_racks - result.rejected);
    if result.rejected > 0 {
        println!(
            "   Racks rejected:   {}",
            result.rejected.to_string().red()
        );
    }
    println!(
        "   Average words:    {}",
        format!("{:.2}", result.average_matches)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Most words:       {}",
        result.max_matches.to_string().green()
    );
    println!("   Nodes visited:    {}", result.total_nodes);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Racks/second:     {:.1}", result.racks_per_second);

    if let Some((rack, best)) = &result.best {
        println!("\n🏆 {}", "Best play:".bright_cyan().bold());
        println!(
            "   {} from {} scores {}",
            best.word().bright_white().bold(),
            rack.bright_yellow(),
            best.score().to_string().green().bold()
        );
    }
}
