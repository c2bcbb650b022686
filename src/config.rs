//! Configuration options for the decision engine
//!
//! This module defines the parameters that control how much work a decision
//! may spend, how playouts are run and how their outcomes are scored.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::{game_state::Player, PmctsError, Result};

/// Smallest time budget a decision may be given
pub const MIN_DECISION_TIME: Duration = Duration::from_millis(100);

/// How a playout picks its moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaythroughMode {
    /// Every move is drawn uniformly from the legal moves
    Random,

    /// Take an immediate win if there is one, otherwise block an immediate
    /// loss, otherwise play at random
    Heuristic,
}

/// Which budget ends a decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecisionCutoff {
    /// Keep running rounds while the elapsed time is within `max_time`
    Time,

    /// Run exactly `min_iterations` rounds
    Iterations,
}

/// How tied candidates are resolved when picking the best move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TieBreak {
    /// Scan the candidates once and replace the incumbent with probability 1/2
    /// on every tie
    ///
    /// This favours later columns when more than two candidates tie.
    Streaming,

    /// Pick uniformly among all candidates sharing the best score
    Uniform,
}

/// Points added to a candidate's score for each playout outcome
///
/// The defaults count a draw the same as a win: a move that does not lose is
/// worth as much as one that wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringPolicy {
    /// Score when the deciding player wins the playout
    pub win: i64,
    /// Score when the opponent wins the playout
    pub loss: i64,
    /// Score when the playout ends in a draw
    pub draw: i64,
}

impl ScoringPolicy {
    /// Creates a scoring policy
    pub fn new(win: i64, loss: i64, draw: i64) -> Self {
        ScoringPolicy { win, loss, draw }
    }

    /// Scores a terminal outcome from the point of view of `decider`
    pub fn score(&self, winner: Option<Player>, decider: Player) -> i64 {
        match winner {
            Some(player) if player == decider => self.win,
            Some(_) => self.loss,
            None => self.draw,
        }
    }
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        ScoringPolicy::new(1, -1, 1)
    }
}

/// Configuration for a single decision
///
/// # Example
///
/// ```
/// use pmcts_connect_four::{DecisionConfig, DecisionCutoff, PlaythroughMode};
/// use std::time::Duration;
///
/// let config = DecisionConfig::default()
///     .with_mode(PlaythroughMode::Heuristic)
///     .with_cutoff(DecisionCutoff::Time)
///     .with_max_time(Duration::from_millis(1500))
///     .with_print_statistics(true);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct DecisionConfig {
    /// Playout strategy
    pub mode: PlaythroughMode,

    /// Which budget ends the search
    pub cutoff: DecisionCutoff,

    /// Wall-clock budget for the Time cutoff
    ///
    /// A round that starts within the budget always finishes, so a decision
    /// may overrun by up to one round.
    pub max_time: Duration,

    /// Number of rounds for the Iterations cutoff
    pub min_iterations: u64,

    /// Print playouts, playouts per second and elapsed time after deciding
    pub print_statistics: bool,

    /// Points per playout outcome
    pub scoring: ScoringPolicy,

    /// Resolution of equal best scores
    pub tie_break: TieBreak,
}

impl Default for DecisionConfig {
    fn default() -> Self {
        DecisionConfig {
            mode: PlaythroughMode::Random,
            cutoff: DecisionCutoff::Time,
            max_time: Duration::from_secs(5),
            min_iterations: 20_000,
            print_statistics: false,
            scoring: ScoringPolicy::default(),
            tie_break: TieBreak::Streaming,
        }
    }
}

impl DecisionConfig {
    /// Sets the playout strategy
    pub fn with_mode(mut self, mode: PlaythroughMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the cutoff policy
    pub fn with_cutoff(mut self, cutoff: DecisionCutoff) -> Self {
        self.cutoff = cutoff;
        self
    }

    /// Sets the wall-clock budget
    pub fn with_max_time(mut self, duration: Duration) -> Self {
        self.max_time = duration;
        self
    }

    /// Sets the number of rounds for the Iterations cutoff
    pub fn with_min_iterations(mut self, iterations: u64) -> Self {
        self.min_iterations = iterations;
        self
    }

    /// Sets whether statistics are printed after each decision
    pub fn with_print_statistics(mut self, print: bool) -> Self {
        self.print_statistics = print;
        self
    }

    /// Sets the scoring policy
    pub fn with_scoring(mut self, scoring: ScoringPolicy) -> Self {
        self.scoring = scoring;
        self
    }

    /// Sets the tie-break rule
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Checks that the budget can produce a decision
    pub fn validate(&self) -> Result<()> {
        if self.max_time < MIN_DECISION_TIME {
            return Err(PmctsError::InvalidBudget(format!(
                "the maximum time must be at least {} seconds, got {}",
                MIN_DECISION_TIME.as_secs_f64(),
                self.max_time.as_secs_f64()
            )));
        }
        if self.cutoff == DecisionCutoff::Iterations && self.min_iterations == 0 {
            return Err(PmctsError::InvalidBudget(
                "the iteration cutoff needs at least one round".to_string(),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for PlaythroughMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaythroughMode::Random => write!(f, "RANDOM"),
            PlaythroughMode::Heuristic => write!(f, "HEURISTIC"),
        }
    }
}

impl FromStr for PlaythroughMode {
    type Err = PmctsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "RANDOM" => Ok(PlaythroughMode::Random),
            "HEURISTIC" => Ok(PlaythroughMode::Heuristic),
            other => Err(PmctsError::Parse(format!("unknown playthrough mode '{}'", other))),
        }
    }
}

impl fmt::Display for DecisionCutoff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecisionCutoff::Time => write!(f, "TIME"),
            DecisionCutoff::Iterations => write!(f, "ITERATIONS"),
        }
    }
}

impl FromStr for DecisionCutoff {
    type Err = PmctsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "TIME" => Ok(DecisionCutoff::Time),
            "ITERATIONS" => Ok(DecisionCutoff::Iterations),
            other => Err(PmctsError::Parse(format!("unknown decision cutoff '{}'", other))),
        }
    }
}
