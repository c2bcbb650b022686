//! Connect Four board representation.
//!
//! [`ConnectFourState`] is a small `Copy` value: a flat 7x6 grid plus the
//! player to move, the first winner and the coordinates of the last placed
//! disc. Search code never shares a state for mutation; every playout works on
//! its own copy.
//!
//! Rows are numbered from the top, so a disc dropped into an empty column lands
//! in row `ROWS - 1`.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::{PmctsError, Result};

/// Number of columns on the board
pub const COLUMNS: usize = 7;

/// Number of rows on the board
pub const ROWS: usize = 6;

/// Number of cells on the board
pub const CELLS: usize = ROWS * COLUMNS;

const REQUIRED_CONSECUTIVE: usize = 4;

/// Scan axes as (column step, row step): horizontal, vertical,
/// diagonal down-right, diagonal up-right.
const SCAN_DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// The two sides of a game. X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Returns the other player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    fn code(self) -> u64 {
        match self {
            Player::X => 1,
            Player::O => 2,
        }
    }

    fn mark(self) -> u8 {
        match self {
            Player::X => b'X',
            Player::O => b'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mark() as char)
    }
}

impl FromStr for Player {
    type Err = PmctsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "X" | "x" => Ok(Player::X),
            "O" | "o" => Ok(Player::O),
            other => Err(PmctsError::Parse(format!("unknown player '{}'", other))),
        }
    }
}

/// A Connect Four position
///
/// Two states are equal when their grids, players to move and last placed
/// coordinates match. The first winner is a function of the move history and
/// does not take part in comparisons.
#[derive(Debug, Clone, Copy)]
pub struct ConnectFourState {
    cells: [Option<Player>; CELLS],
    current_player: Player,
    first_winner: Option<Player>,
    /// (column, row) of the most recent placement
    last_placed: Option<(usize, usize)>,
}

impl ConnectFourState {
    /// Creates an empty board with X to move
    pub fn new() -> Self {
        ConnectFourState {
            cells: [None; CELLS],
            current_player: Player::X,
            first_winner: None,
            last_placed: None,
        }
    }

    /// Plays the given columns in order from an empty board
    ///
    /// # Example
    ///
    /// ```
    /// use pmcts_connect_four::{ConnectFourState, Player};
    ///
    /// let state = ConnectFourState::from_moves(&[3, 4, 3, 4, 3, 4, 3]).unwrap();
    /// assert_eq!(state.first_winner(), Some(Player::X));
    /// ```
    pub fn from_moves(columns: &[usize]) -> Result<Self> {
        let mut state = Self::new();
        for &column in columns {
            state.play_column(column)?;
        }
        Ok(state)
    }

    #[inline]
    fn index(column: usize, row: usize) -> usize {
        row * COLUMNS + column
    }

    /// Returns the disc at the given cell, if any
    ///
    /// # Panics
    ///
    /// Panics if `row >= ROWS` or `column >= COLUMNS`.
    pub fn cell(&self, row: usize, column: usize) -> Option<Player> {
        assert!(row < ROWS && column < COLUMNS, "cell ({row}, {column}) is off the board");
        self.cells[Self::index(column, row)]
    }

    /// Returns the raw grid in row-major order, top row first
    pub fn cells(&self) -> &[Option<Player>; CELLS] {
        &self.cells
    }

    /// Returns the player to move
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the player who completed the first four in a row, if any
    pub fn first_winner(&self) -> Option<Player> {
        self.first_winner
    }

    /// Column of the most recent placement
    pub fn last_placed_column(&self) -> Option<usize> {
        self.last_placed.map(|(column, _)| column)
    }

    /// Row of the most recent placement
    pub fn last_placed_row(&self) -> Option<usize> {
        self.last_placed.map(|(_, row)| row)
    }

    /// Returns true if a disc can still be dropped into `column`
    pub fn is_column_playable(&self, column: usize) -> bool {
        column < COLUMNS && self.cells[Self::index(column, 0)].is_none()
    }

    /// Returns the playable columns in ascending order
    ///
    /// The list is empty exactly when the board is full.
    pub fn legal_moves(&self) -> Vec<usize> {
        (0..COLUMNS)
            .filter(|&column| self.is_column_playable(column))
            .collect()
    }

    /// Returns true if every column is full
    pub fn is_full(&self) -> bool {
        (0..COLUMNS).all(|column| !self.is_column_playable(column))
    }

    /// Returns true if somebody has four in a row
    pub fn is_won(&self) -> bool {
        self.first_winner.is_some()
    }

    /// Returns true if the board is full and nobody has won
    pub fn is_draw(&self) -> bool {
        !self.is_won() && self.is_full()
    }

    /// Returns true if the game is won or drawn
    pub fn is_over(&self) -> bool {
        self.is_won() || self.is_full()
    }

    /// Drops a disc for the player to move into `column`, in place
    ///
    /// On error the state is left untouched.
    pub fn play_column(&mut self, column: usize) -> Result<()> {
        let player = self.current_player;
        self.place(column, player)?;
        self.current_player = player.opponent();
        Ok(())
    }

    /// Returns the state reached by playing `column`, leaving `self` unchanged
    pub fn apply_move(&self, column: usize) -> Result<Self> {
        let mut next = *self;
        next.play_column(column)?;
        Ok(next)
    }

    /// Returns the legal columns where a disc of `player` would win at once
    ///
    /// The check ignores whose turn it is, so it also reports the threats of
    /// the player who is not to move.
    pub fn potential_wins(&self, player: Player) -> Vec<usize> {
        self.legal_moves()
            .into_iter()
            .filter(|&column| {
                let mut probe = *self;
                probe.place(column, player).is_ok() && probe.first_winner == Some(player)
            })
            .collect()
    }

    /// Returns a 64-bit hash combining the grid, the player to move and the
    /// last placed coordinates
    pub fn hash_code(&self) -> u64 {
        let mut seed = ROWS as u64;
        for &cell in &self.cells {
            let code = cell.map_or(b' ', Player::mark) as u64;
            seed ^= code
                .wrapping_add(0x9e37_79b9)
                .wrapping_add(seed << 6)
                .wrapping_add(seed >> 2);
        }

        let (column, row) = self
            .last_placed
            .map_or((0, 0), |(column, row)| (column as u64 + 1, row as u64 + 1));

        seed.wrapping_add(self.current_player.code())
            .wrapping_add(column)
            .wrapping_add(row)
    }

    fn lowest_open_row(&self, column: usize) -> Option<usize> {
        (0..ROWS)
            .rev()
            .find(|&row| self.cells[Self::index(column, row)].is_none())
    }

    /// Drops a disc of `player` into `column` and records a win
    fn place(&mut self, column: usize, player: Player) -> Result<usize> {
        if column >= COLUMNS {
            return Err(PmctsError::ColumnOutOfRange { column });
        }
        let row = self
            .lowest_open_row(column)
            .ok_or(PmctsError::IllegalMove { column })?;

        self.cells[Self::index(column, row)] = Some(player);
        self.last_placed = Some((column, row));

        if self.first_winner.is_none() && self.wins_through(column, row) {
            self.first_winner = Some(player);
        }

        Ok(row)
    }

    fn mark_at(&self, column: isize, row: isize) -> Option<Player> {
        if column < 0 || row < 0 || column >= COLUMNS as isize || row >= ROWS as isize {
            return None;
        }
        self.cells[Self::index(column as usize, row as usize)]
    }

    /// Checks the four lines through (column, row) for four in a row
    fn wins_through(&self, column: usize, row: usize) -> bool {
        let Some(mark) = self.cells[Self::index(column, row)] else {
            return false;
        };

        SCAN_DIRECTIONS.iter().any(|&(dc, dr)| {
            let (mut c, mut r) = (column as isize, row as isize);

            // Back up to the first matching cell on this axis
            while self.mark_at(c - dc, r - dr) == Some(mark) {
                c -= dc;
                r -= dr;
            }

            let mut consecutive = 1;
            while self.mark_at(c + dc, r + dr) == Some(mark) {
                c += dc;
                r += dr;
                consecutive += 1;
                if consecutive >= REQUIRED_CONSECUTIVE {
                    return true;
                }
            }
            false
        })
    }
}

impl Default for ConnectFourState {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for ConnectFourState {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
            && self.current_player == other.current_player
            && self.last_placed == other.last_placed
    }
}

impl Eq for ConnectFourState {}

impl Hash for ConnectFourState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.cells.hash(state);
        self.current_player.hash(state);
        self.last_placed.hash(state);
    }
}

impl fmt::Display for ConnectFourState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for column in 0..COLUMNS {
            if column > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", column)?;
        }

        for row in 0..ROWS {
            writeln!(f)?;
            for column in 0..COLUMNS {
                if column > 0 {
                    write!(f, " ")?;
                }
                let symbol = self.cells[Self::index(column, row)].map_or('-', |p| p.mark() as char);
                write!(f, "{}", symbol)?;
            }
        }
        Ok(())
    }
}
