//! Rules of Two-Dice Pig
//!
//! This module holds the scoring state machine and nothing else: dice,
//! players, the turn engine and the match controller. It never reads from
//! or writes to the terminal; everything it has to say goes out as
//! [`GameEvent`]s.

pub mod config;
pub mod dice;
pub mod event;
pub mod game;
pub mod player;
pub mod turn;

// Re-export commonly used types
pub use config::*;
pub use dice::{Dice, DiceSource, DieRoll, LoadedDice};
pub use event::{EventSink, GameEvent};
pub use game::{Match, MatchStatus};
pub use player::{Player, Seat};
pub use turn::{take_turn, TurnOutcome};
