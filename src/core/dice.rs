//! Dice identity and the fixed per-player pool.
//!
//! Every player owns the same pool for the whole game: six dice, two of each
//! color, created once at game start. Die ids are scoped to the owning
//! player (0..6), so a `DieId` only means something next to a player's pool.

use serde::{Deserialize, Serialize};

/// Number of dice in every player's pool.
pub const DICE_PER_PLAYER: usize = 6;

/// Pool composition in creation order: two red, two blue, two green.
pub const POOL_COLORS: [DieColor; DICE_PER_PLAYER] = [
    DieColor::Red,
    DieColor::Red,
    DieColor::Blue,
    DieColor::Blue,
    DieColor::Green,
    DieColor::Green,
];

/// Die color. Determines the affinity modifier when rolled for an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DieColor {
    Red,
    Blue,
    Green,
}

impl std::fmt::Display for DieColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DieColor::Red => write!(f, "red"),
            DieColor::Blue => write!(f, "blue"),
            DieColor::Green => write!(f, "green"),
        }
    }
}

/// Die identifier, unique within its owner's pool (0..6).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DieId(pub u8);

impl DieId {
    /// Create a new die ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw index into the owner's pool.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A single die: identity plus color. Immutable once created.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Die {
    pub id: DieId,
    pub color: DieColor,
}

/// Build the fixed six-die pool for one player.
#[must_use]
pub fn make_pool() -> [Die; DICE_PER_PLAYER] {
    let mut pool = [Die {
        id: DieId::new(0),
        color: DieColor::Red,
    }; DICE_PER_PLAYER];
    for (index, color) in POOL_COLORS.iter().enumerate() {
        pool[index] = Die {
            id: DieId::new(index as u8),
            color: *color,
        };
    }
    pool
}
