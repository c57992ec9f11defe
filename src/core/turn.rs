use crate::decider::Decider;

use super::{
    dice::DiceSource,
    event::{EventSink, GameEvent},
    player::{Player, Seat},
};

/// What a single turn amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnOutcome {
    /// Points added to the player's total. Zero after a bust.
    pub earned: u32,
    /// Number of rolls taken, the busting roll included.
    pub rolls: u32,
    pub busted: bool,
}

/// Play one full turn for `player`.
///
/// Rolls until the dice bust or `decider` says stop, then banks the turn.
/// A bust forfeits only the points of this turn; the player's total is
/// never reduced. Every roll advances the player's round counter.
pub fn take_turn(
    seat: Seat,
    player: &mut Player,
    dice: &mut dyn DiceSource,
    decider: &mut dyn Decider,
    sink: &mut dyn EventSink,
) -> anyhow::Result<TurnOutcome> {
    sink.emit(GameEvent::TurnStarted {
        seat,
        name: player.name().to_owned(),
        human: player.is_human(),
        total: player.total_score(),
    });

    let mut turn_score = 0;
    let mut rolls = 0;
    let mut busted = false;

    loop {
        let round = player.next_round();
        rolls += 1;
        let roll = dice.roll();
        log::debug!(
            "{} rolled {} and {} (round {})",
            player.name(),
            roll.low(),
            roll.high(),
            round
        );
        sink.emit(GameEvent::Rolled {
            seat,
            name: player.name().to_owned(),
            round,
            roll,
        });

        if roll.is_bust() {
            sink.emit(GameEvent::Busted {
                seat,
                name: player.name().to_owned(),
                forfeited: turn_score,
            });
            turn_score = 0;
            busted = true;
            break;
        }

        turn_score += roll.points();
        sink.emit(GameEvent::Scored {
            seat,
            name: player.name().to_owned(),
            turn_score,
        });

        if !decider.roll_again(player, turn_score)? {
            break;
        }
        sink.emit(GameEvent::RollingAgain {
            seat,
            name: player.name().to_owned(),
        });
    }

    player.bank(turn_score);
    log::debug!(
        "{} ends the turn with {} points ({} total)",
        player.name(),
        turn_score,
        player.total_score()
    );
    sink.emit(GameEvent::TurnEnded {
        seat,
        name: player.name().to_owned(),
        earned: turn_score,
        total: player.total_score(),
    });

    Ok(TurnOutcome {
        earned: turn_score,
        rolls,
        busted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dice::{DieRoll, LoadedDice};
    use crate::decider::{AiDecider, ScriptedDecider};

    #[test]
    fn human_stops_after_one_roll() {
        let mut player = Player::human("Ada");
        let mut dice = LoadedDice::new([(3, 4)]);
        let mut decider = ScriptedDecider::new([false]);
        let mut events: Vec<GameEvent> = Vec::new();

        let outcome =
            take_turn(Seat::First, &mut player, &mut dice, &mut decider, &mut events).unwrap();

        assert_eq!(outcome.earned, 7);
        assert_eq!(outcome.rolls, 1);
        assert!(!outcome.busted);
        assert_eq!(player.total_score(), 7);
        assert_eq!(player.round_count(), 1);
        assert_eq!(decider.asked(), 1);
    }

    #[test]
    fn bust_forfeits_turn_only() {
        let mut player = Player::human("Ada").with_score(40);
        let mut dice = LoadedDice::new([(5, 4), (3, 2), (1, 4)]);
        let mut decider = ScriptedDecider::new([true, true, true]);
        let mut events: Vec<GameEvent> = Vec::new();

        let outcome =
            take_turn(Seat::First, &mut player, &mut dice, &mut decider, &mut events).unwrap();

        assert_eq!(outcome.earned, 0);
        assert!(outcome.busted);
        assert_eq!(outcome.rolls, 3);
        assert_eq!(player.total_score(), 40);
        assert_eq!(player.round_count(), 3);
        // No question is asked after the busting roll.
        assert_eq!(decider.asked(), 2);
        assert!(events.contains(&GameEvent::Busted {
            seat: Seat::First,
            name: "Ada".into(),
            forfeited: 14,
        }));
    }

    #[test]
    fn computer_holds_once_turn_reaches_twenty() {
        let mut player = Player::computer("AI-Bob123");
        let mut dice = LoadedDice::new([(2, 3), (4, 5), (3, 3), (5, 5)]);
        let mut events: Vec<GameEvent> = Vec::new();

        let outcome =
            take_turn(Seat::Second, &mut player, &mut dice, &mut AiDecider, &mut events).unwrap();

        // 5, 14, 20: stops on the third roll.
        assert_eq!(outcome.earned, 20);
        assert_eq!(outcome.rolls, 3);
        assert_eq!(player.round_count(), 3);
    }

    #[test]
    fn events_follow_the_turn() {
        let mut player = Player::human("Ada");
        let mut dice = LoadedDice::new([(2, 3), (1, 1)]);
        let mut decider = ScriptedDecider::new([true]);
        let mut events: Vec<GameEvent> = Vec::new();

        take_turn(Seat::First, &mut player, &mut dice, &mut decider, &mut events).unwrap();

        let name = String::from("Ada");
        let seat = Seat::First;
        assert_eq!(
            events,
            vec![
                GameEvent::TurnStarted { seat, name: name.clone(), human: true, total: 0 },
                GameEvent::Rolled { seat, name: name.clone(), round: 1, roll: DieRoll::new(2, 3) },
                GameEvent::Scored { seat, name: name.clone(), turn_score: 5 },
                GameEvent::RollingAgain { seat, name: name.clone() },
                GameEvent::Rolled { seat, name: name.clone(), round: 2, roll: DieRoll::new(1, 1) },
                GameEvent::Busted { seat, name: name.clone(), forfeited: 5 },
                GameEvent::TurnEnded { seat, name, earned: 0, total: 0 },
            ]
        );
    }
}
