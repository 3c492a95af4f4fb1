//! CLI entry point for the Pyraminx scrambler.
//!
//! Usage:
//!   pyraminx scramble [COUNT] [options]
//!   pyraminx apply <ID>... [options]
//!
//! Options:
//!   --seed <n>            Seed for the random move selector (scramble only)
//!   --history-limit <n>   Keep at most n position-history entries per facelet
//!   --json                Print a JSON report instead of the unfolded puzzle
//!   --no-color            Disable ANSI colors in the text view
//!
//! When COUNT is omitted it is read from stdin. A negative count exits with 1.

use std::io::{self, BufRead, Write};
use std::process;

use clap::{Parser, Subcommand};
use log::info;
use serde::Serialize;

use pyraminx::render::render;
use pyraminx::{
    scramble, MoveSelector, Puzzle, PuzzleSnapshot, ScrambleConfig, ScrambleReport,
    SequenceSelector,
};

#[derive(Parser)]
#[command(name = "pyraminx")]
#[command(about = "Pyraminx scrambler with a misplaced-facelet heuristic")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply random moves to a solved puzzle
    Scramble {
        /// Number of random moves (read from stdin when omitted)
        #[arg(value_name = "COUNT", allow_negative_numbers = true)]
        count: Option<i64>,

        /// Seed for reproducible scrambles
        #[arg(long)]
        seed: Option<u64>,

        #[command(flatten)]
        args: RunArgs,
    },
    /// Apply an explicit sequence of move ids (0-31) to a solved puzzle
    Apply {
        /// Move ids, even = clockwise, odd = counter-clockwise
        #[arg(value_name = "ID", required = true)]
        ids: Vec<u32>,

        #[command(flatten)]
        args: RunArgs,
    },
}

#[derive(clap::Args)]
struct RunArgs {
    /// Maximum position-history entries kept per facelet
    #[arg(long)]
    history_limit: Option<usize>,

    /// Print a JSON report
    #[arg(long)]
    json: bool,

    /// Disable ANSI colors
    #[arg(long)]
    no_color: bool,
}

/// JSON report of a run
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RunOutput {
    #[serde(flatten)]
    report: ScrambleReport,
    solved: bool,
    puzzle: PuzzleSnapshot,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let code = match cli.command {
        Commands::Scramble {
            count,
            seed,
            args,
        } => {
            let count = match count {
                Some(count) => count,
                None => match prompt_count() {
                    Some(count) => count,
                    None => {
                        println!("Invalid input");
                        process::exit(1);
                    }
                },
            };
            let count = match usize::try_from(count) {
                Ok(count) => count,
                Err(_) => {
                    println!("Invalid input");
                    process::exit(1);
                }
            };

            let config = ScrambleConfig {
                count,
                seed,
                history_limit: args.history_limit,
            };
            info!("scrambling with {config:?}");
            run(&config, &mut config.selector(), "Random", &args)
        }

        Commands::Apply { ids, args } => {
            let config = ScrambleConfig {
                count: ids.len(),
                seed: None,
                history_limit: args.history_limit,
            };
            info!("applying {} explicit moves", ids.len());
            run(&config, &mut SequenceSelector::new(ids), "Move", &args)
        }
    };

    process::exit(code);
}

/// Ask for the move count on stdin. `None` if the line is not an integer.
fn prompt_count() -> Option<i64> {
    println!("Input the number of random rotations to perform:");
    io::stdout().flush().ok()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line).ok()?;
    line.trim().parse().ok()
}

/// Scramble a fresh puzzle and print it. Each applied id is printed as
/// `<label>: <id>` in text mode.
fn run<S: MoveSelector>(
    config: &ScrambleConfig,
    selector: &mut S,
    label: &str,
    args: &RunArgs,
) -> i32 {
    let mut puzzle = config.puzzle();
    let colored = !args.no_color;

    if !args.json {
        print!("{}", render(&puzzle, colored));
        println!("Heuristic: {}", puzzle.heuristic());
    }

    let report = match scramble(&mut puzzle, selector, config.count) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    if args.json {
        print_json(report, &puzzle)
    } else {
        for record in &report.moves {
            println!("{}: {}", label, record.id);
        }
        print!("{}", render(&puzzle, colored));
        println!("Heuristic: {}", report.heuristic_after);
        0
    }
}

fn print_json(report: ScrambleReport, puzzle: &Puzzle) -> i32 {
    let output = RunOutput {
        report,
        solved: puzzle.is_solved(),
        puzzle: puzzle.snapshot(),
    };
    match serde_json::to_string_pretty(&output) {
        Ok(json) => {
            println!("{}", json);
            0
        }
        Err(e) => {
            eprintln!("Error serializing report: {}", e);
            1
        }
    }
}
