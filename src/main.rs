//! Command-line runner for the piece walk.
//!
//! Usage:
//! `cargo run --release -- --moves 20`
//! `cargo run --release -- --moves 20 --seed 42 --verbose --board`
//!
//! `WALK_MOVES` and `WALK_SEED` supply defaults; flags override them.

use chrono::Local;

use piece_walk::simulation::random_walk::RandomWalk;
use piece_walk::simulation::report::StdoutSink;
use piece_walk::utils::render_board::render_board;

const DEFAULT_MOVES: u32 = 10;

struct RunOptions {
    moves: u32,
    seed: Option<u64>,
    verbose: bool,
    board: bool,
}

fn parse_flag_value(args: &[String], flag: &str) -> Option<String> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return Some(args[i + 1].clone());
        }
    }
    None
}

fn parse_number<T: std::str::FromStr>(
    args: &[String],
    flag: &str,
    env_key: &str,
) -> Result<Option<T>, String> {
    let raw = match parse_flag_value(args, flag) {
        Some(value) => Some(value),
        None => std::env::var(env_key).ok(),
    };
    match raw {
        Some(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| format!("invalid value for {flag}: {value}")),
        None => Ok(None),
    }
}

fn parse_options() -> Result<RunOptions, String> {
    let args: Vec<String> = std::env::args().collect();
    Ok(RunOptions {
        moves: parse_number(&args, "--moves", "WALK_MOVES")?.unwrap_or(DEFAULT_MOVES),
        seed: parse_number(&args, "--seed", "WALK_SEED")?,
        verbose: args.iter().any(|a| a == "--verbose" || a == "-v"),
        board: args.iter().any(|a| a == "--board"),
    })
}

fn main() -> Result<(), String> {
    let options = parse_options()?;

    let mut walk = match options.seed {
        Some(seed) => RandomWalk::from_seed(seed),
        None => RandomWalk::from_entropy(),
    };

    if options.verbose {
        eprintln!(
            "[walk] started {} moves={} seed={}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            options.moves,
            options
                .seed
                .map_or_else(|| "entropy".to_string(), |s| s.to_string())
        );
    }

    walk.setup().map_err(|e| e.to_string())?;
    let summary = walk
        .play(options.moves, &mut StdoutSink)
        .map_err(|e| e.to_string())?;

    if options.verbose {
        for line in &summary.info_lines {
            eprintln!("[walk] {line}");
        }
        eprintln!("[walk] {}", summary.report());
    }
    if options.board {
        eprintln!("{}", render_board(walk.register()));
    }

    Ok(())
}
