//! Simulation policies for the decision engine
//!
//! A playout takes a copy of a state and plays it to the end. Both policies
//! only draw on the random generator they are handed, so a seeded generator
//! makes a playout reproducible.

use rand::Rng;

use crate::{config::PlaythroughMode, game_state::ConnectFourState, utils::random_element, Result};

/// Plays uniformly random legal moves until the game is over
pub fn random_playout<R: Rng + ?Sized>(start: &ConnectFourState, rng: &mut R) -> Result<ConnectFourState> {
    let mut state = *start;

    while !state.is_over() {
        let column = random_element(&state.legal_moves(), rng)?;
        state.play_column(column)?;
    }

    Ok(state)
}

/// Plays a game to the end using cheap tactical checks
///
/// For the player to move, in order of preference:
/// 1. a move that wins immediately,
/// 2. a move that blocks an immediate win of the opponent,
/// 3. any legal move.
///
/// Ties within a rule are broken uniformly at random. Nothing deeper is
/// looked at, so a playout costs little more than a random one.
pub fn heuristic_playout<R: Rng + ?Sized>(
    start: &ConnectFourState,
    rng: &mut R,
) -> Result<ConnectFourState> {
    let mut state = *start;

    while !state.is_over() {
        let mover = state.current_player();

        let wins = state.potential_wins(mover);
        let column = if !wins.is_empty() {
            random_element(&wins, rng)?
        } else {
            let denials = state.potential_wins(mover.opponent());
            if !denials.is_empty() {
                random_element(&denials, rng)?
            } else {
                random_element(&state.legal_moves(), rng)?
            }
        };

        state.play_column(column)?;
    }

    Ok(state)
}

impl PlaythroughMode {
    /// Plays `start` to a terminal state with this mode's policy
    pub fn playout<R: Rng + ?Sized>(self, start: &ConnectFourState, rng: &mut R) -> Result<ConnectFourState> {
        match self {
            PlaythroughMode::Random => random_playout(start, rng),
            PlaythroughMode::Heuristic => heuristic_playout(start, rng),
        }
    }
}
