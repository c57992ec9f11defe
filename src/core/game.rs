use anyhow::ensure;

use crate::decider::Decider;

use super::{
    config::WINNING_SCORE,
    dice::DiceSource,
    event::{EventSink, GameEvent},
    player::{Player, Seat},
    turn::{take_turn, TurnOutcome},
};

/// Current status of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    InProgress,
    Finished { winner: Seat },
}

/// Two players taking turns until one reaches `WINNING_SCORE`.
#[derive(Debug, Clone)]
pub struct Match {
    players: [Player; 2],
    turns: u32,
    status: MatchStatus,
}

impl Match {
    pub fn new(first: Player, second: Player) -> Self {
        let mut game = Self {
            players: [first, second],
            turns: 0,
            status: MatchStatus::InProgress,
        };
        game.update_status();
        game
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn status(&self) -> MatchStatus {
        self.status
    }

    /// Turns played so far by both players together.
    pub fn turns_taken(&self) -> u32 {
        self.turns
    }

    /// Seat that would win if the match ended now. The first seat needs a
    /// strictly higher total; a tie goes to the second seat.
    pub fn leader(&self) -> Seat {
        if self.players[0].total_score() > self.players[1].total_score() {
            Seat::First
        } else {
            Seat::Second
        }
    }

    /// Play the match to the end and return the winner.
    pub fn play(
        &mut self,
        dice: &mut dyn DiceSource,
        first: &mut dyn Decider,
        second: &mut dyn Decider,
        sink: &mut dyn EventSink,
    ) -> anyhow::Result<Seat> {
        log::info!(
            "match started: {} vs {}",
            self.players[0].name(),
            self.players[1].name()
        );
        while self.status == MatchStatus::InProgress {
            self.play_round(dice, first, second, sink)?;
        }

        let winner = self.leader();
        log::info!(
            "match finished after {} turns: {} wins {} to {}",
            self.turns,
            self.player(winner).name(),
            self.player(winner).total_score(),
            self.player(winner.other()).total_score()
        );
        sink.emit(GameEvent::MatchFinished {
            winner,
            name: self.player(winner).name().to_owned(),
            scores: [
                self.players[0].total_score(),
                self.players[1].total_score(),
            ],
        });
        Ok(winner)
    }

    /// Play one round: the first seat's turn, then the second seat's reply.
    ///
    /// The second seat plays whenever its own total is still below
    /// `WINNING_SCORE`, so reaching the threshold first does not deny the
    /// opponent its turn. The match status is only re-evaluated once the
    /// round is complete.
    pub fn play_round(
        &mut self,
        dice: &mut dyn DiceSource,
        first: &mut dyn Decider,
        second: &mut dyn Decider,
        sink: &mut dyn EventSink,
    ) -> anyhow::Result<MatchStatus> {
        ensure!(
            self.status == MatchStatus::InProgress,
            "match is already finished"
        );
        self.play_turn(Seat::First, dice, first, sink)?;
        if self.player(Seat::Second).total_score() < WINNING_SCORE {
            self.play_turn(Seat::Second, dice, second, sink)?;
        }
        self.update_status();
        Ok(self.status)
    }

    fn play_turn(
        &mut self,
        seat: Seat,
        dice: &mut dyn DiceSource,
        decider: &mut dyn Decider,
        sink: &mut dyn EventSink,
    ) -> anyhow::Result<TurnOutcome> {
        let outcome = take_turn(seat, &mut self.players[seat.index()], dice, decider, sink)?;
        self.turns += 1;
        Ok(outcome)
    }

    fn update_status(&mut self) {
        if self
            .players
            .iter()
            .any(|p| p.total_score() >= WINNING_SCORE)
        {
            self.status = MatchStatus::Finished {
                winner: self.leader(),
            };
        }
    }
}
