use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use log::info;

use peasant_chess::board::{Setup, MAX_DEPTH, START_FEN};
use peasant_chess::perft::{run_perft, run_split_perft};
use peasant_chess::search::{SearchConfig, Solver, StdoutReporter, DEFAULT_TT_MB};
use peasant_chess::tt::DEFAULT_SLOTS_PER_BUCKET;

/// Solve peasant chess (pawns only) by exhaustive search, or count moves.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Position to analyse, in peasant FEN or `startpos`
    #[arg(long, default_value = START_FEN)]
    fen: String,

    /// Run in perft mode instead of solving
    #[arg(long)]
    perft: bool,

    /// Print per-move perft counts at this depth and exit
    #[arg(long, value_name = "DEPTH")]
    split: Option<usize>,

    /// Deepest iteration to run
    #[arg(long, default_value_t = MAX_DEPTH)]
    max_depth: usize,

    /// Transposition table size in megabytes (0 disables it)
    #[arg(long, default_value_t = DEFAULT_TT_MB)]
    hash_mb: usize,

    /// Entries per transposition table bucket
    #[arg(long, default_value_t = DEFAULT_SLOTS_PER_BUCKET)]
    slots: usize,

    /// Never answer a node from the transposition table
    #[arg(long)]
    no_tt_cutoffs: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn init_logging(debug: bool) {
    let log_level = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .format(|buf, record| writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args()))
    .init();
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let setup: Setup = args.fen.parse()?;
    info!("position {setup}");

    if let Some(depth) = args.split {
        let total = run_split_perft(&setup.position, setup.white_to_move, depth, &StdoutReporter);
        println!("total: {total}");
        return Ok(());
    }

    if args.perft {
        run_perft(&setup.position, args.max_depth, &StdoutReporter);
        return Ok(());
    }

    let config = SearchConfig {
        tt_cutoffs: !args.no_tt_cutoffs,
        max_depth: args.max_depth,
        ..SearchConfig::with_hash_mb(args.hash_mb, args.slots)
    };
    let mut solver = Solver::new(config);
    let solution = solver.solve(&setup, &StdoutReporter)?;

    match solution.verdict() {
        Some(verdict) => println!("{verdict}"),
        None => println!(
            "Unresolved after depth {}: score ({}, {})",
            solution.depth, solution.result.lower_bound, solution.result.upper_bound
        ),
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.debug);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERROR: {e}");
            ExitCode::FAILURE
        }
    }
}
