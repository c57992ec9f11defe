//! Narration events emitted while a match is played.
//!
//! The rules never print anything. Every fact a spectator could be told
//! (who rolled what, what the turn is worth, who won) is published as a
//! [`GameEvent`] to an [`EventSink`], and presentation subscribes to those.

use serde::{Deserialize, Serialize};

use super::dice::DieRoll;
use super::player::Seat;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A player begins a turn.
    TurnStarted {
        seat: Seat,
        name: String,
        human: bool,
        total: u32,
    },
    /// The dice were thrown. `round` is the player's roll counter after the throw.
    Rolled {
        seat: Seat,
        name: String,
        round: u32,
        roll: DieRoll,
    },
    /// A 1 came up; `forfeited` points of the current turn are lost.
    Busted {
        seat: Seat,
        name: String,
        forfeited: u32,
    },
    /// A non-busting roll was added to the turn.
    Scored {
        seat: Seat,
        name: String,
        turn_score: u32,
    },
    /// The player chose to keep rolling.
    RollingAgain { seat: Seat, name: String },
    /// The turn is over and `earned` points were banked.
    TurnEnded {
        seat: Seat,
        name: String,
        earned: u32,
        total: u32,
    },
    /// The match is decided. `scores` is indexed by seat.
    MatchFinished {
        winner: Seat,
        name: String,
        scores: [u32; 2],
    },
}

/// Consumer of narration events.
pub trait EventSink {
    fn emit(&mut self, event: GameEvent);
}

/// Records every event, in order.
impl EventSink for Vec<GameEvent> {
    fn emit(&mut self, event: GameEvent) {
        self.push(event);
    }
}

/// Discards every event.
impl EventSink for () {
    fn emit(&mut self, _event: GameEvent) {}
}
