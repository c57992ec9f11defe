//! Line-oriented prompts for the human player.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::{core::Player, decider::Decider};

const CHOICE_YES: [&str; 2] = ["yes", "y"];
const CHOICE_NO: [&str; 2] = ["no", "n"];

/// Errors returned by console prompts.
#[derive(Debug)]
pub enum ConsoleError {
    /// Input reached end of file while an answer was still required.
    Closed,
    /// Reading or writing the terminal failed.
    Io(io::Error),
}

impl From<io::Error> for ConsoleError {
    fn from(err: io::Error) -> Self {
        ConsoleError::Io(err)
    }
}

impl std::fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConsoleError::Closed => write!(f, "Input closed before an answer was given"),
            ConsoleError::Io(e) => write!(f, "Console I/O error: {}", e),
        }
    }
}

impl std::error::Error for ConsoleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConsoleError::Closed => None,
            ConsoleError::Io(e) => Some(e),
        }
    }
}

/// Prompts written to `output`, answers read from `input`.
///
/// Invalid answers are never an error: the question is simply asked again
/// until the player gives a usable one.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output, e.g. to inspect what was printed.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print a line of text.
    pub fn say(&mut self, text: &str) -> Result<(), ConsoleError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::Closed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_owned())
    }

    /// Ask until the answer is one of yes/y or no/n, in any case.
    pub fn ask_yes_no(&mut self, prompt: &str) -> Result<bool, ConsoleError> {
        loop {
            let answer = self.read_line(prompt)?.to_lowercase();
            if CHOICE_YES.contains(&answer.as_str()) {
                return Ok(true);
            }
            if CHOICE_NO.contains(&answer.as_str()) {
                return Ok(false);
            }
            log::debug!("rejected yes/no answer {:?}", answer);
            self.say("\nInvalid Input. Try again.")?;
        }
    }

    /// Ask until a non-empty answer is given, printing `missing` after
    /// each empty one.
    pub fn ask_required(&mut self, prompt: &str, missing: &str) -> Result<String, ConsoleError> {
        loop {
            let answer = self.read_line(prompt)?;
            if !answer.is_empty() {
                return Ok(answer);
            }
            self.say(missing)?;
        }
    }
}

impl<R: BufRead, W: Write> Decider for Console<R, W> {
    fn roll_again(&mut self, _player: &Player, _turn_score: u32) -> anyhow::Result<bool> {
        Ok(self.ask_yes_no("\nRoll again? (Y/N): ")?)
    }
}
