use serde::{Deserialize, Serialize};

/// Position at the table. `First` always opens a round of turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    pub fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }

    pub fn other(self) -> Seat {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }
}

/// One side of a match and its running totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    is_human: bool,
    total_score: u32,
    round_count: u32,
}

impl Player {
    /// `name` must already be non-empty; the prompts enforce that.
    pub fn new(name: impl Into<String>, is_human: bool) -> Self {
        let name = name.into();
        debug_assert!(!name.is_empty(), "player names are never empty");
        Self {
            name,
            is_human,
            total_score: 0,
            round_count: 0,
        }
    }

    pub fn human(name: impl Into<String>) -> Self {
        Self::new(name, true)
    }

    pub fn computer(name: impl Into<String>) -> Self {
        Self::new(name, false)
    }

    /// Start the player with points already on the board, e.g. a handicap.
    pub fn with_score(mut self, total_score: u32) -> Self {
        self.total_score = total_score;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_human(&self) -> bool {
        self.is_human
    }

    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    /// Rolls taken so far, busting rolls included.
    pub fn round_count(&self) -> u32 {
        self.round_count
    }

    pub(crate) fn next_round(&mut self) -> u32 {
        self.round_count += 1;
        self.round_count
    }

    pub(crate) fn bank(&mut self, points: u32) {
        self.total_score += points;
    }
}
