//! Interactive Connect Four against the pure Monte Carlo engine
//!
//! You play X, the computer plays O.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use pmcts_connect_four::{
    console::{ask_bounded_f64, ask_choice},
    ConnectFourState, DecisionConfig, DecisionCutoff, PlaythroughMode, Player, Pmcts,
};

const DEFAULT_ITERATIONS: u64 = 20_000;

fn main() {
    // Initialize logging
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    println!("Pure MCTS Connect Four");
    println!("======================");
    println!();

    let mode = match ask_choice(
        &mut input,
        &mut output,
        "Set computer playthrough to pure random or heuristics? (r/h)",
        &["r", "h"],
    )?
    .as_str()
    {
        "r" => PlaythroughMode::Random,
        _ => PlaythroughMode::Heuristic,
    };
    println!();

    let cutoff = match ask_choice(
        &mut input,
        &mut output,
        "Hard limit computer decision by time, or playthrough iterations? (t/i)",
        &["t", "i"],
    )?
    .as_str()
    {
        "t" => DecisionCutoff::Time,
        _ => DecisionCutoff::Iterations,
    };

    let mut config = DecisionConfig::default()
        .with_mode(mode)
        .with_cutoff(cutoff)
        .with_max_time(Duration::from_secs(1))
        .with_min_iterations(DEFAULT_ITERATIONS)
        .with_print_statistics(true);

    if cutoff == DecisionCutoff::Time {
        let seconds = ask_bounded_f64(
            &mut input,
            &mut output,
            "How many seconds can the computer take to decide? [0.1, 100]",
            0.1,
            100.0,
        )?;
        config = config.with_max_time(Duration::from_secs_f64(seconds));
    } else {
        println!("Defaulting to {} playthroughs per possible move.", DEFAULT_ITERATIONS);
    }
    println!();

    let mut engine = Pmcts::new(config);
    let mut game = ConnectFourState::new();
    let mut turn = 1;

    println!("{}\n", game);
    println!("{}", "-".repeat(40));

    while !game.is_over() {
        println!("<Turn {}>", turn);

        let column = if game.current_player() == Player::X {
            let legal: Vec<String> = game.legal_moves().iter().map(|c| c.to_string()).collect();
            let options: Vec<&str> = legal.iter().map(String::as_str).collect();
            ask_choice(&mut input, &mut output, "Select a column", &options)?.parse::<usize>()?
        } else {
            print!("Deciding...\r");
            io::stdout().flush()?;

            let mut decision = engine.decide_column(&game)?;
            decision.set_turn(turn);
            println!("Computer O ({:?}) chose column {}", mode, decision.column());
            decision.column()
        };

        game.play_column(column)?;
        turn += 1;

        println!("\n{}\n", game);
        println!("{}", "-".repeat(40));
    }

    match game.first_winner() {
        Some(player) => println!("Player {} Won", player),
        None => println!("Draw"),
    }

    print!("Enter any key to quit: ");
    io::stdout().flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;

    Ok(())
}
