use std::io::Write;

use crate::core::{EventSink, GameEvent, Seat};

const RULE: &str = "-----------------------";

/// Prints narration events as text for a terminal.
pub struct Narrator<W> {
    out: W,
    names: [String; 2],
    humans: [bool; 2],
}

impl<W: Write> Narrator<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            names: [String::new(), String::new()],
            humans: [false; 2],
        }
    }

    /// Give back the writer, e.g. to inspect what was printed.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Welcome banner shown before a match starts.
    pub fn greet(&mut self, player: &str, opponent: &str) {
        self.write(&format!(
            "\n\nWelcome to Two-Dice Pig Match!\n\nYour Name: {}\n{}\nOpponent's Name: {}\n",
            player, RULE, opponent
        ));
    }

    fn write(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text) {
            log::warn!("failed to write narration: {}", e);
        }
    }

    fn render(&mut self, event: &GameEvent) -> Option<String> {
        let text = match event {
            GameEvent::TurnStarted {
                seat, name, human, ..
            } => {
                self.names[seat.index()] = name.clone();
                self.humans[seat.index()] = *human;
                return None;
            }
            GameEvent::Rolled { name, round, roll, .. } => format!(
                "\n\n[Round {}] {} rolled a {} and {}.",
                round,
                name,
                roll.low(),
                roll.high()
            ),
            GameEvent::Busted { name, forfeited, .. } if *forfeited > 0 => format!(
                "\n{} rolled a 1 and lost the {} {} of this turn.",
                name,
                forfeited,
                points(*forfeited)
            ),
            GameEvent::Busted { name, .. } => format!("\n{} rolled a 1.", name),
            GameEvent::Scored {
                name, turn_score, ..
            } => format!(
                "\n{} scored {} {} in this round.\n\n{}",
                name,
                turn_score,
                points(*turn_score),
                RULE
            ),
            // a human already answered the prompt
            GameEvent::RollingAgain { seat, .. } if self.humans[seat.index()] => return None,
            GameEvent::RollingAgain { name, .. } => {
                format!("\n{} will roll the dice again.", name)
            }
            GameEvent::TurnEnded { name, earned, total, .. } => format!(
                "\n{}'s turn ends with {} {}.\n\n({}) Total Score: {}\n\n{}",
                name,
                earned,
                points(*earned),
                name,
                total,
                RULE
            ),
            GameEvent::MatchFinished {
                winner,
                name,
                scores,
            } => {
                let loser = winner.other();
                format!(
                    "\n{} wins!\n\nFinal Score: {} {} - {} {}",
                    name,
                    self.seat_name(*winner, name),
                    scores[winner.index()],
                    self.seat_name(loser, "opponent"),
                    scores[loser.index()]
                )
            }
        };
        Some(text)
    }

    fn seat_name(&self, seat: Seat, fallback: &str) -> String {
        let name = &self.names[seat.index()];
        if name.is_empty() {
            fallback.to_owned()
        } else {
            name.clone()
        }
    }
}

fn points(n: u32) -> &'static str {
    if n <= 1 {
        "point"
    } else {
        "points"
    }
}

impl<W: Write> EventSink for Narrator<W> {
    fn emit(&mut self, event: GameEvent) {
        if let Some(text) = self.render(&event) {
            self.write(&text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DieRoll;

    fn narrate(events: Vec<GameEvent>) -> String {
        let mut narrator = Narrator::new(Vec::new());
        for event in events {
            narrator.emit(event);
        }
        String::from_utf8(narrator.into_inner()).unwrap()
    }

    #[test]
    fn narrates_a_scoring_turn() {
        let seat = Seat::First;
        let name = String::from("Ada");
        let out = narrate(vec![
            GameEvent::TurnStarted { seat, name: name.clone(), human: true, total: 0 },
            GameEvent::Rolled { seat, name: name.clone(), round: 1, roll: DieRoll::new(4, 3) },
            GameEvent::Scored { seat, name: name.clone(), turn_score: 7 },
            GameEvent::TurnEnded { seat, name, earned: 7, total: 7 },
        ]);
        assert!(out.contains("[Round 1] Ada rolled a 3 and 4."));
        assert!(out.contains("Ada scored 7 points in this round."));
        assert!(out.contains("(Ada) Total Score: 7"));
    }

    #[test]
    fn narrates_a_bust_and_the_winner() {
        let out = narrate(vec![
            GameEvent::TurnStarted { seat: Seat::First, name: "Ada".into(), human: true, total: 0 },
            GameEvent::TurnStarted { seat: Seat::Second, name: "Hal".into(), human: false, total: 0 },
            GameEvent::Busted { seat: Seat::Second, name: "Hal".into(), forfeited: 0 },
            GameEvent::MatchFinished {
                winner: Seat::Second,
                name: "Hal".into(),
                scores: [98, 101],
            },
        ]);
        assert!(out.contains("Hal rolled a 1."));
        assert!(out.contains("Hal wins!"));
        assert!(out.contains("Final Score: Hal 101 - Ada 98"));
    }

    #[test]
    fn only_the_computer_announces_another_roll() {
        let out = narrate(vec![
            GameEvent::TurnStarted { seat: Seat::First, name: "Ada".into(), human: true, total: 0 },
            GameEvent::RollingAgain { seat: Seat::First, name: "Ada".into() },
            GameEvent::TurnStarted { seat: Seat::Second, name: "Hal".into(), human: false, total: 0 },
            GameEvent::RollingAgain { seat: Seat::Second, name: "Hal".into() },
        ]);
        assert!(!out.contains("Ada will roll the dice again."));
        assert!(out.contains("Hal will roll the dice again."));
    }

    #[test]
    fn singular_point() {
        assert_eq!(points(0), "point");
        assert_eq!(points(1), "point");
        assert_eq!(points(2), "points");
    }
}
