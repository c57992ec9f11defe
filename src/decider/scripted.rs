use std::collections::VecDeque;

use crate::core::Player;

use super::Decider;

/// Replays a fixed list of answers, then stops rolling once they run out.
#[derive(Debug, Default, Clone)]
pub struct ScriptedDecider {
    answers: VecDeque<bool>,
    asked: usize,
}

impl ScriptedDecider {
    pub fn new<I>(answers: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        Self {
            answers: answers.into_iter().collect(),
            asked: 0,
        }
    }

    /// How many times the decider has been consulted.
    pub fn asked(&self) -> usize {
        self.asked
    }
}

impl Decider for ScriptedDecider {
    fn roll_again(&mut self, _player: &Player, _turn_score: u32) -> anyhow::Result<bool> {
        self.asked += 1;
        Ok(self.answers.pop_front().unwrap_or(false))
    }
}
