//! Pure Monte Carlo move selection
//!
//! This module contains the decision engine. Unlike full MCTS it grows no
//! tree: each legal move of the root is a candidate, every candidate is played
//! out the same number of times, and the move with the best total score is
//! chosen.

use std::time::{Duration, Instant};

use log::{debug, warn};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    config::{DecisionConfig, DecisionCutoff},
    decision::Decision,
    game_state::ConnectFourState,
    policy::selection::select_best,
    stats::SearchStatistics,
    PmctsError, Result,
};

/// A legal move of the root together with the state it leads to
#[derive(Debug, Clone)]
struct Candidate {
    column: usize,
    state: ConnectFourState,
    score: i64,
}

/// The pure Monte Carlo decision engine
///
/// The engine owns its random generator, so two engines seeded alike make
/// identical choices under the Iterations cutoff.
pub struct Pmcts<R: Rng = StdRng> {
    /// Configuration used for every decision
    config: DecisionConfig,

    /// Source of randomness for playouts and tie-breaks
    rng: R,

    /// Statistics of the most recent decision
    statistics: SearchStatistics,
}

impl Pmcts<StdRng> {
    /// Creates an engine with a generator seeded from system entropy
    pub fn new(config: DecisionConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Creates an engine with a reproducible generator
    pub fn seeded(config: DecisionConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Pmcts<R> {
    /// Creates an engine that draws from the given generator
    pub fn with_rng(config: DecisionConfig, rng: R) -> Self {
        Pmcts {
            config,
            rng,
            statistics: SearchStatistics::new(),
        }
    }

    /// Returns the configuration
    pub fn config(&self) -> &DecisionConfig {
        &self.config
    }

    /// Replaces the configuration used by later decisions
    pub fn set_config(&mut self, config: DecisionConfig) {
        self.config = config;
    }

    /// Returns the statistics of the most recent decision
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Chooses a column for the player to move in `state`
    ///
    /// # Errors
    ///
    /// * [`PmctsError::GameAlreadyOver`] if `state` is won or drawn
    /// * [`PmctsError::InvalidBudget`] if the configured budget is too small
    ///
    /// Both are reported before any playout runs.
    pub fn decide_column(&mut self, state: &ConnectFourState) -> Result<Decision> {
        if state.is_over() {
            return Err(PmctsError::GameAlreadyOver);
        }
        self.config.validate()?;

        let decider = state.current_player();
        let mut candidates = state
            .legal_moves()
            .into_iter()
            .map(|column| {
                Ok(Candidate {
                    column,
                    state: state.apply_move(column)?,
                    score: 0,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        self.statistics = SearchStatistics::new();
        self.statistics.candidates = candidates.len();

        let start_time = Instant::now();
        let mut playouts: u64 = 0;
        let mut rounds: u64 = 0;

        while self.within_budget(start_time.elapsed(), rounds) {
            for candidate in candidates.iter_mut() {
                let terminal = self.config.mode.playout(&candidate.state, &mut self.rng)?;
                candidate.score += self.config.scoring.score(terminal.first_winner(), decider);
                playouts += 1;
            }
            rounds += 1;
        }

        let elapsed = start_time.elapsed();
        self.statistics.playouts = playouts;
        self.statistics.rounds = rounds;
        self.statistics.total_time = elapsed;

        if self.config.cutoff == DecisionCutoff::Time && elapsed > self.config.max_time.mul_f64(1.1) {
            warn!(
                "decision overran its {:.3}s budget: {:.3}s",
                self.config.max_time.as_secs_f64(),
                elapsed.as_secs_f64()
            );
        }

        let scores: Vec<i64> = candidates.iter().map(|c| c.score).collect();
        let best = select_best(&scores, self.config.tie_break, &mut self.rng)
            .map(|index| &candidates[index])
            .ok_or(PmctsError::EmptyChoice)?;

        debug!(
            "player {} chose column {} (score {}) after {} playouts over {} candidates in {:.3}s",
            decider,
            best.column,
            best.score,
            playouts,
            candidates.len(),
            elapsed.as_secs_f64()
        );

        if self.config.print_statistics {
            println!("{}", self.statistics.summary());
        }

        Ok(Decision::new(
            decider,
            self.config.mode,
            self.config.cutoff,
            best.column,
            candidates.len(),
            best.score,
            playouts,
            elapsed.as_secs_f64(),
        ))
    }

    /// Returns true if another round may start
    fn within_budget(&self, elapsed: Duration, rounds: u64) -> bool {
        match self.config.cutoff {
            DecisionCutoff::Time => elapsed <= self.config.max_time,
            DecisionCutoff::Iterations => rounds < self.config.min_iterations,
        }
    }
}
