//! Commonly used types and utilities for ease of import.

pub use crate::{
    take_turn, AiDecider, Console, Decider, Dice, DiceSource, DieRoll, EventSink, GameEvent,
    Match, MatchStatus, Narrator, Player, Seat,
};
