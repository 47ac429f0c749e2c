//! Spades table CLI - headless driver for the `spades` engine.
//!
//! Runs computer-only matches in bulk and writes one metrics record per match,
//! or plays one interactive match with a human at seat 0.

mod interactive;
mod metrics;
mod output;
mod simulator;
mod types;

use std::io;
use std::time::Instant;

use clap::Parser;
use interactive::Session;
use metrics::{build_match_metrics, summarize, RunSummary};
use output::OutputWriter;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use simulator::{MatchResult, Simulator};
use spades::config::table::{parse_ai_config, parse_seed};
use spades::domain::rules::PLAYERS;
use spades::{AiConfig, AppError, TableConfig};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use types::{AiType, OutputFormat};

#[derive(Parser)]
#[command(name = "spades-sim")]
#[command(about = "Headless Spades table: bulk AI matches or one interactive game")]
struct Args {
    /// Play one match against three computer seats instead of simulating
    #[arg(long)]
    play: bool,

    /// Number of matches to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// AI type for all seats (shortcut to set all 4 seats to the same AI)
    #[arg(long, conflicts_with_all = ["seat0", "seat1", "seat2", "seat3"])]
    seats: Option<AiType>,

    /// AI type for seat 0
    #[arg(long, default_value = "heuristic")]
    seat0: AiType,

    /// AI type for seat 1
    #[arg(long, default_value = "heuristic")]
    seat1: AiType,

    /// AI type for seat 2
    #[arg(long, default_value = "heuristic")]
    seat2: AiType,

    /// AI type for seat 3
    #[arg(long, default_value = "heuristic")]
    seat3: AiType,

    /// Opponent AI in play mode (overrides SPADES_OPPONENT_AI)
    #[arg(long)]
    opponents: Option<AiType>,

    /// Your name in play mode (overrides SPADES_PLAYER_NAME)
    #[arg(long)]
    name: Option<String>,

    /// Run seed, decimal or 0x-hex (overrides SPADES_SEED)
    #[arg(long, value_parser = seed_arg)]
    seed: Option<u64>,

    /// JSON config for computer seats (overrides SPADES_AI_CONFIG)
    #[arg(long, value_parser = ai_config_arg)]
    ai_config: Option<AiConfig>,

    /// Abandon a simulated match after this many rounds
    #[arg(long, default_value = "200")]
    max_rounds: u16,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Log as JSON lines
    #[arg(long)]
    log_json: bool,

    /// Show output summary and file paths
    #[arg(long)]
    show_output: bool,

    /// Output directory for results
    #[arg(long, default_value = "./simulation-results")]
    output_dir: String,

    /// Output format
    #[arg(long, default_value = "jsonl")]
    output_format: OutputFormat,
}

fn seed_arg(raw: &str) -> Result<u64, String> {
    parse_seed(raw).map_err(|e| e.to_string())
}

fn ai_config_arg(raw: &str) -> Result<AiConfig, String> {
    parse_ai_config(raw).map_err(|e| e.to_string())
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();
    init_logging(&args);

    let mut config = TableConfig::from_env()?;
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(name) = args.name.clone() {
        config.player_name = name;
    }
    if let Some(ai) = args.opponents {
        config.opponent_ai = ai.kind();
    }
    if let Some(ai_config) = args.ai_config.clone() {
        config.ai_config = ai_config;
    }
    let run_seed = config.seed_or_random(&mut rand::rng());
    info!(run_seed, play = args.play, "Starting spades-sim");

    if args.play {
        let stdin = io::stdin();
        let mut session = Session::new(config, run_seed, stdin.lock(), io::stdout());
        if session.run()?.is_none() {
            info!("Match abandoned");
        }
        return Ok(());
    }
    simulate(&args, run_seed, config.ai_config)
}

fn init_logging(args: &Args) {
    if args.log_json {
        spades::telemetry::init_tracing();
        return;
    }
    // Silent by default, only show warnings/errors
    let level = if args.verbose {
        "debug"
    } else if args.show_output {
        "info"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn simulate(args: &Args, run_seed: u64, ai_config: AiConfig) -> Result<(), AppError> {
    let seat_types: [AiType; PLAYERS] = match args.seats {
        Some(ai) => [ai; PLAYERS],
        None => [args.seat0, args.seat1, args.seat2, args.seat3],
    };
    let ai_types = seat_types.map(|ai| ai.name().to_string());
    info!(?ai_types, games = args.games, "Simulating");

    let mut output_writer = OutputWriter::new(&args.output_dir, args.output_format, run_seed)?;
    let simulator = Simulator::new(args.max_rounds).with_ai_config(ai_config);
    // Per-match seeds come from the run seed so a whole run replays.
    let mut seeds = StdRng::seed_from_u64(run_seed);

    let start = Instant::now();
    let mut results = Vec::new();
    let mut errors = 0;

    for game_num in 1..=args.games {
        let game_start = Instant::now();
        let seed: u64 = seeds.random();

        match simulator.simulate_match(seed, seat_types) {
            Ok(result) => {
                let duration_ms = game_start.elapsed().as_secs_f64() * 1000.0;
                let metrics = build_match_metrics(
                    game_num,
                    ai_types.clone(),
                    args.games,
                    args.max_rounds,
                    &result,
                    duration_ms,
                );
                if let Err(e) = output_writer.write_match(&metrics) {
                    warn!(game_num, error = %e, "Failed to write metrics");
                }
                if args.verbose {
                    info!(game_num, scores = ?result.final_scores, "Match completed");
                }
                results.push(result);
            }
            Err(e) => {
                errors += 1;
                warn!(game_num, seed, error = %e, code = e.code(), "Match failed");
            }
        }
    }

    let elapsed = start.elapsed();
    let path = output_writer.finish()?;

    if args.show_output {
        info!("Detailed results written to: {}", path.display());
        print_summary(&summarize(&results), &results, errors, elapsed);
    }
    Ok(())
}

fn print_summary(
    summary: &RunSummary,
    results: &[MatchResult],
    errors: u32,
    elapsed: std::time::Duration,
) {
    println!("\n=== Simulation Summary ===");
    println!("Matches completed: {}", summary.games);
    if errors > 0 {
        println!("Errors: {errors}");
    }
    println!("Total time: {elapsed:?}");
    if results.is_empty() {
        return;
    }
    println!(
        "Average time per match: {:?}",
        elapsed / results.len() as u32
    );
    println!("Average rounds: {:.1}", summary.avg_rounds);

    println!("\n=== Results by Team ===");
    for team in 0..summary.wins.len() {
        let win_rate = summary.wins[team] as f64 / summary.games as f64 * 100.0;
        println!(
            "Team {team} (seats {} & {}): avg={:.1}, wins={} ({win_rate:.1}%)",
            team,
            team + 2,
            summary.avg_score[team],
            summary.wins[team]
        );
    }
    if summary.draws > 0 {
        println!("Draws: {}", summary.draws);
    }
    if summary.capped > 0 {
        println!("Capped at max rounds: {}", summary.capped);
    }
}
