//! Decider trait and implementations
//!
//! A Decider answers the one question a turn asks: roll again or stop?
//! - AiDecider: fixed threshold policy used by the computer
//! - ScriptedDecider: replays canned answers
//! - Console (see `crate::console`): asks a human at the terminal

use crate::core::Player;

/// Source of "roll again?" answers for one player.
pub trait Decider {
    /// Decide whether `player` keeps rolling with `turn_score` points at
    /// stake. `turn_score` never includes a busted roll.
    fn roll_again(&mut self, player: &Player, turn_score: u32) -> anyhow::Result<bool>;
}

pub mod ai;
pub use ai::AiDecider;

pub mod scripted;
pub use scripted::ScriptedDecider;
