//! Simple interactive CLI mode
//!
//! Line-based shell without TUI: `:C` solves a rack, `:L` looks up a word,
//! `:Q` quits.

use crate::output::formatters::format_match;
use crate::solver::Solver;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Counters for one shell session
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub racks_solved: usize,
    pub lookups: usize,
    pub words_found: usize,
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple(solver: &Solver) -> io::Result<SessionSummary> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_session(solver, stdin.lock(), &mut stdout)
}

/// Run a shell session over arbitrary input and output
///
/// The session ends on `:Q` or end of input.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_session<R: BufRead, W: Write>(
    solver: &Solver,
    mut input: R,
    output: &mut W,
) -> io::Result<SessionSummary> {
    writeln!(
        output,
        "\n{}",
        "Rack Solver - Interactive Mode".bright_cyan().bold()
    )?;
    writeln!(output, "Enter :C to solve a rack, :L to look up a word, :Q to quit.\n")?;

    let mut summary = SessionSummary::default();

    while let Some(command) = read_line(&mut input, output, "Command")? {
        match command.to_ascii_uppercase().as_str() {
            ":C" => cheat(solver, &mut input, output, &mut summary)?,
            ":L" => lookup(solver, &mut input, output, &mut summary)?,
            ":Q" => break,
            _ => writeln!(output, "{}", "Your input could not be understood!".red())?,
        }
        writeln!(output)?;
    }

    tracing::debug!(?summary, "session ended");
    writeln!(output, "👋 Goodbye!")?;
    Ok(summary)
}

fn cheat<R: BufRead, W: Write>(
    solver: &Solver,
    input: &mut R,
    output: &mut W,
    summary: &mut SessionSummary,
) -> io::Result<()> {
    let Some(rack) = read_line(input, output, "Please enter a character sequence")? else {
        return Ok(());
    };

    match solver.solve(&rack) {
        Ok(matches) if matches.is_empty() => {
            writeln!(output, "No words can be made from {}", rack.to_ascii_uppercase())?;
        }
        Ok(matches) => {
            let word_width = matches.iter().map(|m| m.word().len()).max().unwrap_or(0);
            for (i, m) in matches.iter().enumerate() {
                writeln!(output, "{}", format_match(i + 1, m, word_width))?;
            }
            summary.words_found += matches.len();
        }
        Err(e) => {
            writeln!(output, "{} {e}", "That is not a valid input!".red())?;
            return Ok(());
        }
    }

    summary.racks_solved += 1;
    Ok(())
}

fn lookup<R: BufRead, W: Write>(
    solver: &Solver,
    input: &mut R,
    output: &mut W,
    summary: &mut SessionSummary,
) -> io::Result<()> {
    let Some(word) = read_line(input, output, "Please enter a word")? else {
        return Ok(());
    };

    match solver.lookup(&word) {
        Ok(Some(m)) => writeln!(
            output,
            "{} is a valid word with a score of {}!",
            m.word(),
            m.score()
        )?,
        Ok(None) => writeln!(output, "{}", "Invalid word!".red())?,
        Err(e) => writeln!(output, "{} {e}", "That is not a valid input!".red())?,
    }

    summary.lookups += 1;
    Ok(())
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(output, "{prompt}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Lexicon;
    use crate::solver::SolverConfig;

    fn run(script: &str) -> (SessionSummary, String) {
        let lexicon = Lexicon::from_entries([("CAT", 5), ("AT", 2)], 15);
        let solver = Solver::new(&lexicon, SolverConfig::default());

        let mut output = Vec::new();
        let summary = run_session(&solver, script.as_bytes(), &mut output).unwrap();
        (summary, String::from_utf8(output).unwrap())
    }

    #[test]
    fn cheat_lists_ranked_words() {
        let (summary, output) = run(":C\ncat\n:Q\n");

        assert_eq!(summary.racks_solved, 1);
        assert_eq!(summary.words_found, 2);
        let cat = output.find("CAT ").unwrap();
        let at = output.find(" AT ").unwrap();
        assert!(cat < at);
    }

    #[test]
    fn commands_are_case_insensitive() {
        let (summary, _) = run(":c\ncat\n:l\nat\n:q\n");
        assert_eq!(summary.racks_solved, 1);
        assert_eq!(summary.lookups, 1);
    }

    #[test]
    fn lookup_reports_score() {
        let (summary, output) = run(":L\ncat\n:L\nzzz\n:Q\n");

        assert_eq!(summary.lookups, 2);
        assert!(output.contains("CAT is a valid word with a score of 5!"));
        assert!(output.contains("Invalid word!"));
    }

    #[test]
    fn invalid_rack_is_reported() {
        let (summary, output) = run(":C\nabcdefghijk\n:Q\n");

        assert_eq!(summary.racks_solved, 0);
        assert!(output.contains("That is not a valid input!"));
    }

    #[test]
    fn unknown_command_is_reported() {
        let (summary, output) = run("hello\n:Q\n");

        assert_eq!(summary, SessionSummary::default());
        assert!(output.contains("Your input could not be understood!"));
    }

    #[test]
    fn session_ends_at_end_of_input() {
        let (summary, output) = run(":C\n");

        assert_eq!(summary.racks_solved, 0);
        assert!(output.contains("Goodbye"));
    }
}
