/// Number of faces on each die.
pub const DIE_SIDES: u8 = 6;

/// Total score that ends the match.
pub const WINNING_SCORE: u32 = 100;

/// The computer keeps rolling while its turn score is below this.
pub const AI_HOLD_SCORE: u32 = 20;

/// Prefix of generated computer names.
pub const AI_NAME_PREFIX: &str = "AI-";
