//! Dice: the only source of randomness in a match.

use std::collections::VecDeque;

use rand::{seq::index, Rng};
use serde::{Deserialize, Serialize};

use super::config::DIE_SIDES;

/// A throw of two dice, stored lowest face first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DieRoll {
    low: u8,
    high: u8,
}

impl DieRoll {
    /// Build a roll from two faces in any order.
    pub fn new(a: u8, b: u8) -> Self {
        Self {
            low: a.min(b),
            high: a.max(b),
        }
    }

    pub fn low(&self) -> u8 {
        self.low
    }

    pub fn high(&self) -> u8 {
        self.high
    }

    /// A 1 on either die ends the turn. Since `low <= high`, checking `low`
    /// covers both dice, double 1s included.
    pub fn is_bust(&self) -> bool {
        self.low == 1
    }

    /// Points the roll adds to the turn when it does not bust.
    pub fn points(&self) -> u32 {
        u32::from(self.low) + u32::from(self.high)
    }
}

/// Anything that can produce the next roll of the dice.
pub trait DiceSource {
    fn roll(&mut self) -> DieRoll;
}

/// Pair of dice backed by a random generator.
///
/// Faces are drawn without replacement from `1..DIE_SIDES`, so the two dice
/// never match and the top face never comes up: a "six-sided" die shows 1
/// to 5. Seeded games rely on this distribution.
pub struct Dice<R> {
    sides: u8,
    rng: R,
}

impl<R: Rng> Dice<R> {
    pub fn new(rng: R) -> Self {
        Self {
            sides: DIE_SIDES,
            rng,
        }
    }

    /// Face count the dice were configured with.
    pub fn sides(&self) -> u8 {
        self.sides
    }
}

impl<R: Rng> DiceSource for Dice<R> {
    fn roll(&mut self) -> DieRoll {
        let faces = index::sample(&mut self.rng, usize::from(self.sides - 1), 2);
        let first = faces.index(0) as u8 + 1;
        let second = faces.index(1) as u8 + 1;
        log::trace!("dice landed on {} and {}", first, second);
        DieRoll::new(first, second)
    }
}

/// Dice that replay a fixed sequence of rolls, starting over once the
/// sequence runs out. Useful for replays and scripted turns.
pub struct LoadedDice {
    rolls: VecDeque<DieRoll>,
}

impl LoadedDice {
    /// Load the dice with `rolls`, replayed in order.
    ///
    /// # Panics
    ///
    /// Panics if `rolls` is empty: there would be nothing to roll.
    pub fn new<I>(rolls: I) -> Self
    where
        I: IntoIterator<Item = (u8, u8)>,
    {
        let rolls: VecDeque<DieRoll> = rolls
            .into_iter()
            .map(|(a, b)| DieRoll::new(a, b))
            .collect();
        assert!(!rolls.is_empty(), "loaded dice need at least one roll");
        Self { rolls }
    }
}

impl DiceSource for LoadedDice {
    fn roll(&mut self) -> DieRoll {
        let roll = self.rolls[0];
        self.rolls.rotate_left(1);
        roll
    }
}
