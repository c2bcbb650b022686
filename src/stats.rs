//! Statistics collection for decisions
//!
//! This module provides structures for collecting and reporting statistics
//! about a single decision.

use std::time::Duration;

use crate::utils::per_second;

/// Statistics collected while making a decision
#[derive(Debug, Clone)]
pub struct SearchStatistics {
    /// Number of playouts run across all candidates
    pub playouts: u64,

    /// Number of completed rounds (one playout per candidate each)
    pub rounds: u64,

    /// Number of candidate moves considered
    pub candidates: usize,

    /// Time spent in the playout loop
    pub total_time: Duration,
}

impl SearchStatistics {
    /// Creates a new, empty statistics object
    pub fn new() -> Self {
        SearchStatistics {
            playouts: 0,
            rounds: 0,
            candidates: 0,
            total_time: Duration::from_secs(0),
        }
    }

    /// Returns the number of playouts per second
    pub fn playouts_per_second(&self) -> f64 {
        per_second(self.playouts, self.total_time.as_secs_f64())
    }

    /// Returns the playouts each candidate received
    pub fn playouts_per_candidate(&self) -> u64 {
        if self.candidates == 0 {
            return 0;
        }
        self.playouts / self.candidates as u64
    }

    /// Returns a summary of the statistics as a string
    pub fn summary(&self) -> String {
        let rule = "=".repeat(40);
        format!(
            "{rule}\n\
             Playthroughs:     {}\n\
             Playthroughs/sec: {:.1}\n\
             Time:             {:.3}s\n\
             Rounds:           {}\n\
             Candidates:       {}\n\
             {rule}",
            self.playouts,
            self.playouts_per_second(),
            self.total_time.as_secs_f64(),
            self.rounds,
            self.candidates,
        )
    }
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}
