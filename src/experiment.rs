//! Computer-vs-computer experiments
//!
//! Pits the random playout policy against the heuristic one and records every
//! decision to a [`DecisionLog`], so the two can be compared on strength and
//! playout throughput.

use std::path::Path;

use log::{debug, info};
use rand::Rng;

use crate::{
    config::{DecisionConfig, PlaythroughMode},
    decision::Decision,
    decision_log::DecisionLog,
    game_state::{ConnectFourState, Player},
    pmcts::Pmcts,
    Result,
};

/// Everything that happened in one computer-vs-computer game
#[derive(Debug, Clone)]
pub struct MatchRecord {
    /// Mode used by X
    pub x_mode: PlaythroughMode,
    /// Mode used by O
    pub o_mode: PlaythroughMode,
    /// Terminal position
    pub final_state: ConnectFourState,
    /// One decision per move, turns numbered from 1
    pub decisions: Vec<Decision>,
}

impl MatchRecord {
    /// Returns the winner, or `None` for a draw
    pub fn winner(&self) -> Option<Player> {
        self.final_state.first_winner()
    }

    /// Returns the playout mode of the winner, or `None` for a draw
    pub fn winning_mode(&self) -> Option<PlaythroughMode> {
        self.winner().map(|player| match player {
            Player::X => self.x_mode,
            Player::O => self.o_mode,
        })
    }
}

/// Results of a random-vs-heuristic series
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// Games won by the random policy
    pub random: u32,
    /// Games won by the heuristic policy
    pub heuristic: u32,
    /// Drawn games
    pub draws: u32,
}

impl Tally {
    /// Counts the outcome of one game
    pub fn record(&mut self, game: &MatchRecord) {
        match game.winning_mode() {
            Some(PlaythroughMode::Random) => self.random += 1,
            Some(PlaythroughMode::Heuristic) => self.heuristic += 1,
            None => self.draws += 1,
        }
    }

    /// Number of games counted
    pub fn games(&self) -> u32 {
        self.random + self.heuristic + self.draws
    }

    /// Summary line appended to the decision log
    pub fn summary_line(&self) -> String {
        format!(
            "Random:{},Heuristic:{},Draw:{}",
            self.random, self.heuristic, self.draws
        )
    }
}

/// Plays one game between two engines configured like `base`
///
/// Each side gets its own engine seeded from `rng`, and uses `x_mode` or
/// `o_mode` for its playouts.
pub fn play_match<R: Rng>(
    x_mode: PlaythroughMode,
    o_mode: PlaythroughMode,
    base: &DecisionConfig,
    rng: &mut R,
) -> Result<MatchRecord> {
    let mut x_engine = Pmcts::seeded(base.clone().with_mode(x_mode), rng.gen());
    let mut o_engine = Pmcts::seeded(base.clone().with_mode(o_mode), rng.gen());

    let mut state = ConnectFourState::new();
    let mut decisions = Vec::new();
    let mut turn = 1;

    while !state.is_over() {
        let engine = match state.current_player() {
            Player::X => &mut x_engine,
            Player::O => &mut o_engine,
        };

        let mut decision = engine.decide_column(&state)?;
        decision.set_turn(turn);
        state.play_column(decision.column())?;

        debug!(
            "turn {}: {} ({}) played column {}\n{}",
            turn,
            decision.player(),
            decision.mode(),
            decision.column(),
            state
        );

        decisions.push(decision);
        turn += 1;
    }

    Ok(MatchRecord {
        x_mode,
        o_mode,
        final_state: state,
        decisions,
    })
}

/// Plays `games` random-vs-heuristic games and logs every decision to `path`
///
/// Sides are assigned at random for each game. The log is truncated, starts
/// with the CSV header, is flushed after every game and ends with the tally
/// line.
pub fn collect_random_vs_heuristic<P: AsRef<Path>, R: Rng>(
    path: P,
    games: u32,
    base: &DecisionConfig,
    rng: &mut R,
) -> Result<Tally> {
    let mut log = DecisionLog::create(path, false)?;
    log.write_header()?;

    let mut tally = Tally::default();

    for game in 0..games {
        let (x_mode, o_mode) = if rng.gen_bool(0.5) {
            (PlaythroughMode::Random, PlaythroughMode::Heuristic)
        } else {
            (PlaythroughMode::Heuristic, PlaythroughMode::Random)
        };

        let record = play_match(x_mode, o_mode, base, rng)?;
        tally.record(&record);

        for decision in &record.decisions {
            log.write_decision(decision)?;
        }
        log.flush()?;

        match record.winning_mode() {
            Some(mode) => info!(
                "game {}: {} ({}) won after {} moves",
                game + 1,
                record.winner().map_or_else(String::new, |p| p.to_string()),
                mode,
                record.decisions.len()
            ),
            None => info!("game {}: draw", game + 1),
        }
        info!("{}", tally.summary_line());
    }

    log.write_line("")?;
    log.write_line(&tally.summary_line())?;
    log.flush()?;

    Ok(tally)
}
