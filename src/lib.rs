pub mod console;
pub mod core;
pub mod decider;
mod logging;
pub mod names;
pub mod prelude;
pub mod ui;

pub use crate::core::*;
pub use console::{Console, ConsoleError};
pub use decider::{AiDecider, Decider, ScriptedDecider};
pub use logging::init_logging;
pub use names::{prompt_names, random_ai_name};
pub use ui::Narrator;
