//! Game configuration and the numeric rules of the galaxy.
//!
//! Every tunable the turn engine consults lives here: board size, collapse
//! cadence, victory threshold, sabotage reach, the claim reward table.

use serde::{Deserialize, Serialize};

/// Planets on a fresh board.
pub const INITIAL_GALAXY_SIZE: usize = 12;

/// The galaxy collapses every this many resolved turns.
pub const SHRINK_INTERVAL: u32 = 5;

/// Planets removed from the tail per collapse.
pub const SHRINK_COUNT: usize = 2;

/// MacGuffins needed for a race victory.
pub const WINNING_MACGUFFINS: u32 = 7;

/// Inclusive ship distance within which sabotage can find a target.
pub const SABOTAGE_RANGE: usize = 2;

/// A player can owe at most this many skipped turns.
pub const MAX_SKIPPED_TURNS: u8 = 3;

/// Ceiling on a single claim's payout, perfect-claim doubling included.
pub const MAX_REWARD_PER_CLAIM: u32 = 8;

/// Bounded turn-log length.
pub const LOG_CAP: usize = 20;

/// Bounded resolution-history length.
pub const HISTORY_CAP: usize = 20;

/// MacGuffin payout for claiming a planet of the given face.
///
/// Faces 1 and 2 pay nothing: claim dice can "succeed" against them, but a
/// zero reward never marks the planet claimed.
#[must_use]
pub fn reward_for_face(face: u8) -> u32 {
    match face {
        3 => 1,
        4 => 2,
        5 => 3,
        6 => 4,
        _ => 0,
    }
}

/// How players share the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// One human against AI opponents.
    Single,
    /// Humans passing the device around.
    Hotseat,
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameMode::Single => write!(f, "single"),
            GameMode::Hotseat => write!(f, "hotseat"),
        }
    }
}

/// AI difficulty. Affects how often the allocator ignores its priorities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
}

impl Difficulty {
    /// Chance per die that the AI picks an action uniformly at random
    /// instead of following its priorities.
    #[must_use]
    pub fn off_priority_chance(self) -> f64 {
        match self {
            Difficulty::Easy => 0.2,
            Difficulty::Medium => 0.1,
        }
    }
}

/// Payload for the init-game command.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSetup {
    pub mode: GameMode,
    pub human_names: Vec<String>,
    pub ai_count: usize,
    pub difficulty: Difficulty,
    pub debug_enabled: bool,
}
