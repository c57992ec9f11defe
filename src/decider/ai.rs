use crate::core::{config::AI_HOLD_SCORE, Player};

use super::Decider;

/// Computer policy: keep rolling until the turn is worth `AI_HOLD_SCORE`.
#[derive(Debug, Default, Clone, Copy)]
pub struct AiDecider;

impl AiDecider {
    pub fn new() -> Self {
        Self
    }
}

impl Decider for AiDecider {
    fn roll_again(&mut self, player: &Player, turn_score: u32) -> anyhow::Result<bool> {
        let again = turn_score < AI_HOLD_SCORE;
        log::trace!(
            "{} holds at {}: turn score {}, rolling again = {}",
            player.name(),
            AI_HOLD_SCORE,
            turn_score,
            again
        );
        Ok(again)
    }
}
