//! Random vs heuristic playouts, logged to CSV
//!
//! Usage: `cargo run --release --example experiment -- [OUTPUT] [GAMES]`
//!
//! Set `RUST_LOG=info` to follow the games as they finish.

use std::time::Duration;

use pmcts_connect_four::{experiment::collect_random_vs_heuristic, DecisionConfig, DecisionCutoff};

fn main() {
    // Initialize logging
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let output = args.next().unwrap_or_else(|| "rvh_data.csv".to_string());
    let games = match args.next().map(|s| s.parse::<u32>()) {
        Some(Ok(games)) => games,
        Some(Err(e)) => {
            eprintln!("Invalid game count: {}", e);
            std::process::exit(2);
        }
        None => 10,
    };

    let config = DecisionConfig::default()
        .with_cutoff(DecisionCutoff::Time)
        .with_max_time(Duration::from_secs(1));

    let mut rng = rand::thread_rng();
    match collect_random_vs_heuristic(&output, games, &config, &mut rng) {
        Ok(tally) => {
            println!(
                "Random: {}, Heuristic: {}, Draw: {}",
                tally.random, tally.heuristic, tally.draws
            );
            println!("Decisions written to {}", output);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
