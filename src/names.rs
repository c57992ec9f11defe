//! Player names: prompting the human and inventing one for the computer.

use std::io::{BufRead, Write};

use rand::{seq::index, Rng};

use crate::{console::Console, core::config::AI_NAME_PREFIX};

const FIRST_NAMES: [&str; 40] = [
    "Alice", "Bruno", "Carla", "Dmitri", "Elena", "Felix", "Greta", "Hugo", "Ines", "Jonas",
    "Keiko", "Liam", "Marta", "Nils", "Olga", "Pablo", "Quinn", "Rosa", "Stefan", "Tara",
    "Ulrich", "Vera", "Walter", "Xenia", "Yusuf", "Zoe", "Arthur", "Beatrice", "Cyrus", "Daphne",
    "Emil", "Frida", "Gustav", "Hazel", "Ivan", "Judith", "Kurt", "Lena", "Milo", "Nora",
];

/// Invent a computer name such as `AI-Greta514`.
///
/// The digits are the first three characters of two distinct numbers from
/// 10 to 999 written one after the other.
pub fn random_ai_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let first = FIRST_NAMES[rng.random_range(0..FIRST_NAMES.len())];
    let picks = index::sample(rng, 990, 2);
    let digits: String = format!("{}{}", picks.index(0) + 10, picks.index(1) + 10)
        .chars()
        .take(3)
        .collect();
    format!("{}{}{}", AI_NAME_PREFIX, first, digits)
}

/// Resolve both display names, asking only for the ones not given.
///
/// Returns `(human, computer)`. When the player declines to name the
/// computer, a random name is generated.
pub fn prompt_names<R, W, G>(
    console: &mut Console<R, W>,
    rng: &mut G,
    human: Option<String>,
    computer: Option<String>,
) -> anyhow::Result<(String, String)>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    let human = match human.filter(|n| !n.is_empty()) {
        Some(name) => name,
        None => console.ask_required("\n\nEnter a name: ", "\nPlayer Name Required!")?,
    };

    let computer = match computer.filter(|n| !n.is_empty()) {
        Some(name) => name,
        None if console.ask_yes_no("\nWould you like to give the AI a name? (Y/N): ")? => {
            console.ask_required("\nEnter AI's name: ", "\nAI Name Required!")?
        }
        None => {
            console.say("\n\nA random name has been generated for the AI.")?;
            random_ai_name(rng)
        }
    };

    Ok((human, computer))
}
