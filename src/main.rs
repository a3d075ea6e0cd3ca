//! Rack Solver - CLI
//!
//! Word finder for letter racks with TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rack_solver::{
    commands::{SolveConfig, lookup_word, random_racks, run_benchmark, run_simple, solve_rack},
    core::{LetterValues, Lexicon},
    output::{print_benchmark_result, print_lookup_result, print_solve_result},
    solver::{Solver, SolverConfig},
    tables::loader::{builtin_letter_values, load_dictionary, load_letter_values, sample_lexicon},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "rack_solver",
    about = "Find every word a rack of letters can make, best score first",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary: 'sample' (default, built in) or path to a word-per-line file
    #[arg(short, long, global = true, default_value = "sample")]
    dictionary: String,

    /// Letter values: 'builtin' (default) or path to a LETTER,VALUE file
    #[arg(short, long, global = true, default_value = "builtin")]
    letter_values: String,

    /// Maximum rack length
    #[arg(long, global = true, default_value_t = SolverConfig::DEFAULT_MAX_RACK_LENGTH)]
    max_rack: usize,

    /// Maximum dictionary word length
    #[arg(long, global = true, default_value_t = SolverConfig::DEFAULT_MAX_WORD_LENGTH)]
    max_word_length: usize,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (:C to solve, :L to look up, :Q to quit)
    Simple,

    /// Solve a single rack
    Solve {
        /// Letters on the rack
        rack: String,

        /// Show only the best N words
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Check whether a word is in the dictionary
    Lookup {
        /// Word to look up
        word: String,
    },

    /// Benchmark solver performance on random racks
    Benchmark {
        /// Number of random racks
        #[arg(short = 'n', long, default_value = "200")]
        count: usize,

        /// Letters per rack
        #[arg(long, default_value = "7")]
        length: usize,

        /// RNG seed for reproducible racks
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

/// Load letter values based on the -l flag
fn load_values(source: &str) -> Result<LetterValues> {
    match source {
        "builtin" => builtin_letter_values().context("Built-in letter values are malformed"),
        path => load_letter_values(path)
            .with_context(|| format!("Failed to load letter values from {path}")),
    }
}

/// Load the dictionary based on the -d flag
fn load_lexicon(source: &str, values: &LetterValues, max_word_length: usize) -> Result<Lexicon> {
    match source {
        "sample" => sample_lexicon(values, max_word_length)
            .context("Built-in sample dictionary could not be scored"),
        path => load_dictionary(path, values, max_word_length)
            .with_context(|| format!("Failed to load dictionary from {path}")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = SolverConfig::new(cli.max_rack, cli.max_word_length);
    let values = load_values(&cli.letter_values)?;
    let lexicon = load_lexicon(&cli.dictionary, &values, config.max_word_length)?;
    tracing::info!(words = lexicon.len(), ?config, "tables ready");

    let solver = Solver::new(&lexicon, config);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(solver),
        Commands::Simple => {
            let summary = run_simple(&solver)?;
            tracing::info!(?summary, "simple mode finished");
            Ok(())
        }
        Commands::Solve { rack, limit } => run_solve_command(&solver, rack, limit, cli.verbose > 0),
        Commands::Lookup { word } => run_lookup_command(&solver, &word),
        Commands::Benchmark {
            count,
            length,
            seed,
        } => {
            run_benchmark_command(&solver, count, length, seed);
            Ok(())
        }
    }
}

fn run_solve_command(
    solver: &Solver,
    rack: String,
    limit: Option<usize>,
    verbose: bool,
) -> Result<()> {
    let mut config = SolveConfig::new(rack);
    if let Some(limit) = limit {
        config = config.with_limit(limit);
    }

    let result = solve_rack(config, solver).context("Invalid rack")?;
    print_solve_result(&result, verbose);
    Ok(())
}

fn run_lookup_command(solver: &Solver, word: &str) -> Result<()> {
    let result = lookup_word(word, solver).context("Invalid word")?;
    print_lookup_result(&result);
    Ok(())
}

fn run_benchmark_command(solver: &Solver, count: usize, length: usize, seed: Option<u64>) {
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let racks = random_racks(count, length, &mut rng);

    println!("Running benchmark on {count} random racks of {length} letters...");
    let result = run_benchmark(solver, &racks);
    print_benchmark_result(&result);
}

fn run_play_command(solver: Solver) -> Result<()> {
    use rack_solver::interactive::{App, run_tui};

    run_tui(App::new(solver))
}
