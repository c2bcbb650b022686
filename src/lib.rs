//! # pmcts-connect-four
//!
//! Connect Four with a computer opponent driven by *pure* Monte Carlo Tree Search:
//! every legal move from the current position is scored by playing many complete
//! games from it, and the best scoring move wins. No tree is kept between moves.
//!
//! ## Features
//!
//! - Compact 7x6 board with an O(1) win check scoped to the last placed disc
//! - Two playout strategies: uniformly random, and a cheap tactical heuristic
//! - Time or round based cutoffs
//! - Decision records with CSV export for experiments
//!
//! ## Basic Usage
//!
//! ```
//! use pmcts_connect_four::{ConnectFourState, DecisionConfig, DecisionCutoff, PlaythroughMode, Pmcts};
//!
//! fn main() -> Result<(), pmcts_connect_four::PmctsError> {
//!     // X opens in the centre, the computer answers as O
//!     let state = ConnectFourState::new().apply_move(3)?;
//!
//!     let config = DecisionConfig::default()
//!         .with_mode(PlaythroughMode::Heuristic)
//!         .with_cutoff(DecisionCutoff::Iterations)
//!         .with_min_iterations(50);
//!
//!     let mut engine = Pmcts::seeded(config, 7);
//!     let decision = engine.decide_column(&state)?;
//!
//!     assert!(state.legal_moves().contains(&decision.column()));
//!     assert_eq!(decision.playthroughs(), 50 * 7);
//!     println!("{}", engine.statistics().summary());
//!     Ok(())
//! }
//! ```
//!
//! ## How It Works
//!
//! 1. **Candidates**: the legal moves of the root are enumerated once, and the
//!    child state of each is computed up front.
//!
//! 2. **Rounds**: every round runs exactly one playout from every candidate. A
//!    playout that ends in a win for the deciding player scores `+1`, a loss
//!    scores `-1` and a draw scores `+1` (see [`ScoringPolicy`]).
//!
//! 3. **Cutoff**: rounds repeat until the wall-clock budget is spent or the
//!    requested number of rounds is reached. The cutoff is only checked between
//!    rounds, so every candidate always has the same number of playouts.
//!
//! 4. **Selection**: the highest scoring candidate is chosen, ties broken at
//!    random (see [`TieBreak`]).
//!
//! ## Examples
//!
//! ```bash
//! cargo run --example connect_four
//! cargo run --example experiment -- data/rvh.csv 10
//! ```

pub mod config;
pub mod console;
pub mod decision;
pub mod decision_log;
pub mod experiment;
pub mod game_state;
pub mod pmcts;
pub mod policy;
pub mod stats;
pub mod utils;

pub use config::{DecisionConfig, DecisionCutoff, PlaythroughMode, ScoringPolicy, TieBreak};
pub use decision::Decision;
pub use decision_log::DecisionLog;
pub use game_state::{ConnectFourState, Player, COLUMNS, ROWS};
pub use pmcts::Pmcts;
pub use stats::SearchStatistics;

/// Error types for the game and the decision engine
#[derive(thiserror::Error, Debug)]
pub enum PmctsError {
    /// The column is already full
    #[error("column {column} is not playable: it is full")]
    IllegalMove { column: usize },

    /// The column does not exist on the board
    #[error("column {column} is out of range (0-6)")]
    ColumnOutOfRange { column: usize },

    /// A decision was requested for a finished game
    #[error("the game cannot be played further: it is already over")]
    GameAlreadyOver,

    /// The search budget cannot produce a meaningful decision
    #[error("invalid budget: {0}")]
    InvalidBudget(String),

    /// A random choice was requested from an empty set of options
    #[error("cannot choose from an empty set of options")]
    EmptyChoice,

    /// A textual value could not be parsed
    #[error("parse error: {0}")]
    Parse(String),

    /// The decision log could not be opened or written
    #[error("failed to access '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for game and decision operations
pub type Result<T> = std::result::Result<T, PmctsError>;
