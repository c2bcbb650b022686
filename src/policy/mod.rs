//! Policies for the two phases of a pure Monte Carlo decision
//!
//! - Simulation policies: how a game is played out from a candidate
//! - Selection policies: how the final move is picked from the scores

pub mod selection;
pub mod simulation;

pub use selection::select_best;
pub use simulation::{heuristic_playout, random_playout};
