//! Boggle Word Search
//!
//! Finds every dictionary word that can be traced on a Boggle board by
//! stepping between neighboring cells (diagonals included) without reusing
//! a cell. Boards come from a text file or are rolled from the standard dice.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use boggle::{format_path, persistence, solve, Board, Discipline, SearchConfig, SearchOutcome};

/// Finds all dictionary words on a Boggle board.
#[derive(Parser)]
#[command(name = "boggle")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search a board for dictionary words.
    Solve(SolveArgs),
    /// Roll a random board and print it.
    Roll {
        /// Board dimension N for an NxN board.
        #[arg(long, default_value_t = 4)]
        size: usize,
        /// Seed for a reproducible roll.
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Args)]
struct SolveArgs {
    /// Board dimension N for an NxN board.
    #[arg(long, default_value_t = 4)]
    size: usize,
    /// Order in which generated paths are checked against the dictionary.
    #[arg(long, value_enum, default_value_t = Discipline::Stack)]
    storage: Discipline,
    /// Word list with one word per line.
    #[arg(long, default_value = "words.txt")]
    dictionary: PathBuf,
    /// Board file with one row of letters per line.
    #[arg(long, required_unless_present = "random", conflicts_with = "random")]
    board: Option<PathBuf>,
    /// Roll a random board instead of reading one.
    #[arg(long)]
    random: bool,
    /// Seed for the random board.
    #[arg(long, requires = "random")]
    seed: Option<u64>,
    /// Print each word's path under it.
    #[arg(long)]
    show_paths: bool,
    /// Also write the report to this file.
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("boggle=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Solve(args) => run_solve(args),
        Command::Roll { size, seed } => {
            let board = roll_board(size, seed)?;
            print!("{board}");
            Ok(())
        }
    }
}

/// Rolls a board, seeded when a seed is given.
fn roll_board(size: usize, seed: Option<u64>) -> Result<Board> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    Board::random(size, &mut rng).context("failed to roll board")
}

/// Loads the inputs, runs the search and prints the words found.
fn run_solve(args: SolveArgs) -> Result<()> {
    let board = match &args.board {
        Some(path) => persistence::load_board(path, args.size)
            .with_context(|| format!("failed to load board {}", path.display()))?,
        None => roll_board(args.size, args.seed)?,
    };
    let dictionary = persistence::load_dictionary(&args.dictionary)
        .context("failed to load dictionary")?;

    let config = SearchConfig {
        discipline: args.storage,
        ..SearchConfig::default()
    };

    println!("{board}");
    let outcome = solve(&board, &dictionary, &config).context("search failed")?;
    print!("{}", render(&outcome, args.show_paths));

    if let Some(path) = &args.output {
        persistence::save_report(path, &outcome)?;
        println!("Wrote {}", path.display());
    }

    Ok(())
}

/// Console listing: one word per line, optionally followed by its path grid.
fn render(outcome: &SearchOutcome, show_paths: bool) -> String {
    let mut output = String::new();
    for found in &outcome.words {
        output.push_str(found.word());
        output.push('\n');
        if show_paths {
            output.push_str(&format_path(found.path()));
            output.push('\n');
        }
    }
    output.push_str(&format!(
        "Total number of states: {}\n",
        outcome.states_generated
    ));
    output
}
