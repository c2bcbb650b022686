//! The record produced by every decision
//!
//! A [`Decision`] carries the chosen column and the numbers behind it. It can
//! be written as one CSV line of the experiment log and read back again.

use std::fmt;

use crate::{
    config::{DecisionCutoff, PlaythroughMode},
    game_state::Player,
    utils::per_second,
    PmctsError, Result,
};

/// Column header of the experiment log
pub const CSV_HEADER: &str =
    "turn,player,mode,cutoff,column,possible_columns,score,playthroughs,time,playthroughs_per_second";

const CSV_FIELDS: usize = 10;

/// Outcome of a single decision
#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    player: Player,
    mode: PlaythroughMode,
    cutoff: DecisionCutoff,
    column: usize,
    possible_columns: usize,
    score: i64,
    playthroughs: u64,
    time: f64,
    turn: Option<u32>,
}

impl Decision {
    /// Creates a decision record with no turn number
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        player: Player,
        mode: PlaythroughMode,
        cutoff: DecisionCutoff,
        column: usize,
        possible_columns: usize,
        score: i64,
        playthroughs: u64,
        time: f64,
    ) -> Self {
        Decision {
            player,
            mode,
            cutoff,
            column,
            possible_columns,
            score,
            playthroughs,
            time,
            turn: None,
        }
    }

    /// The player who asked for the decision
    pub fn player(&self) -> Player {
        self.player
    }

    /// Playout strategy used
    pub fn mode(&self) -> PlaythroughMode {
        self.mode
    }

    /// Cutoff policy used
    pub fn cutoff(&self) -> DecisionCutoff {
        self.cutoff
    }

    /// The chosen column
    pub fn column(&self) -> usize {
        self.column
    }

    /// Number of legal columns that were scored
    pub fn possible_columns(&self) -> usize {
        self.possible_columns
    }

    /// Score of the chosen column
    pub fn score(&self) -> i64 {
        self.score
    }

    /// Total number of playouts
    pub fn playthroughs(&self) -> u64 {
        self.playthroughs
    }

    /// Seconds spent in the playout loop
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Playouts per second, 0 when no time was measured
    pub fn playthroughs_per_second(&self) -> f64 {
        per_second(self.playthroughs, self.time)
    }

    /// Turn number assigned by the caller, if any
    pub fn turn(&self) -> Option<u32> {
        self.turn
    }

    /// Records the turn this decision was made on
    pub fn set_turn(&mut self, turn: u32) {
        self.turn = Some(turn);
    }

    /// Renders the decision as one line of the experiment log (no newline)
    pub fn to_csv(&self) -> String {
        let turn = self.turn.map_or(-1, i64::from);
        format!(
            "{},{},{},{},{},{},{},{},{:.6},{:.6}",
            turn,
            self.player,
            self.mode,
            self.cutoff,
            self.column,
            self.possible_columns,
            self.score,
            self.playthroughs,
            self.time,
            self.playthroughs_per_second()
        )
    }

    /// Parses a line produced by [`Decision::to_csv`]
    ///
    /// The trailing rate column is derived data and is only checked for being
    /// a number.
    pub fn from_csv(line: &str) -> Result<Self> {
        let fields: Vec<&str> = line.trim().split(',').collect();
        if fields.len() != CSV_FIELDS {
            return Err(PmctsError::Parse(format!(
                "expected {} fields, got {} in '{}'",
                CSV_FIELDS,
                fields.len(),
                line.trim()
            )));
        }

        let turn: i64 = parse_field(fields[0], "turn")?;
        let turn = match turn {
            -1 => None,
            value => Some(u32::try_from(value).map_err(|_| {
                PmctsError::Parse(format!("turn {} is out of range", value))
            })?),
        };
        let _rate: f64 = parse_field(fields[9], "playthroughs_per_second")?;

        Ok(Decision {
            player: fields[1].parse()?,
            mode: fields[2].parse()?,
            cutoff: fields[3].parse()?,
            column: parse_field(fields[4], "column")?,
            possible_columns: parse_field(fields[5], "possible_columns")?,
            score: parse_field(fields[6], "score")?,
            playthroughs: parse_field(fields[7], "playthroughs")?,
            time: parse_field(fields[8], "time")?,
            turn,
        })
    }
}

fn parse_field<T: std::str::FromStr>(value: &str, name: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| PmctsError::Parse(format!("invalid {} '{}'", name, value.trim())))
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let turn = self.turn.map_or_else(|| "-".to_string(), |t| t.to_string());
        write!(
            f,
            "Decision:\n\
             \tTurn:             {}\n\
             \tPlayer:           {}\n\
             \tMode:             {}\n\
             \tCutoff:           {}\n\
             \tColumn:           {}\n\
             \tPossible Columns: {}\n\
             \tScore:            {}\n\
             \tPlaythroughs:     {}\n\
             \tTime (seconds):   {:.6}\n\
             \tPlaythroughs/sec: {:.1}",
            turn,
            self.player,
            self.mode,
            self.cutoff,
            self.column,
            self.possible_columns,
            self.score,
            self.playthroughs,
            self.time,
            self.playthroughs_per_second()
        )
    }
}
