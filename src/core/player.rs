//! Player identity and per-game player state.

use serde::{Deserialize, Serialize};

use super::allocation::Allocation;
use super::dice::{make_pool, Die, DieColor, DieId, DICE_PER_PLAYER};

/// Starting sabotage defense for every player.
pub const DEFAULT_DEFENSE: u32 = 1;

/// Player identifier. Indexes into the game's player list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// One participant: ship, MacGuffins, skip state, and the fixed dice pool.
///
/// The pool never changes size or composition across a game. `allocation`
/// holds a human's pending dice assignment between the allocate command and
/// turn resolution; it is cleared once the turn resolves.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub is_ai: bool,
    /// AI persona slug, for the roster-driven opponents in single mode.
    pub persona: Option<String>,
    /// Ship position: 0 is the start marker, `n` sits on planet `n`.
    pub ship_pos: usize,
    pub mac_guffins: u32,
    /// Forced passes still owed, 0..=3.
    pub skipped_turns: u8,
    /// Set when a skip turn is consumed; lapses the next time this player
    /// actually acts.
    pub skip_immunity: bool,
    /// Subtracted from incoming sabotage totals.
    pub defense: u32,
    pub dice_pool: [Die; DICE_PER_PLAYER],
    pub allocation: Option<Allocation>,
}

impl Player {
    /// Create a player at the start marker with a fresh pool.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>, is_ai: bool, persona: Option<String>) -> Self {
        Self {
            id,
            name: name.into(),
            is_ai,
            persona,
            ship_pos: 0,
            mac_guffins: 0,
            skipped_turns: 0,
            skip_immunity: false,
            defense: DEFAULT_DEFENSE,
            dice_pool: make_pool(),
            allocation: None,
        }
    }

    /// Look up a die in this player's pool.
    #[must_use]
    pub fn die(&self, id: DieId) -> Option<&Die> {
        self.dice_pool.get(id.index()).filter(|die| die.id == id)
    }

    /// Die ids of the given color, in pool order.
    pub fn dice_of_color(&self, color: DieColor) -> impl Iterator<Item = DieId> + '_ {
        self.dice_pool
            .iter()
            .filter(move |die| die.color == color)
            .map(|die| die.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_defaults() {
        let player = Player::new(PlayerId::new(2), "Posey", true, Some("posey".into()));

        assert_eq!(player.ship_pos, 0);
        assert_eq!(player.mac_guffins, 0);
        assert_eq!(player.skipped_turns, 0);
        assert!(!player.skip_immunity);
        assert_eq!(player.defense, DEFAULT_DEFENSE);
        assert_eq!(player.dice_pool.len(), DICE_PER_PLAYER);
        assert!(player.allocation.is_none());
    }

    #[test]
    fn test_die_lookup() {
        let player = Player::new(PlayerId::new(0), "Tester", false, None);

        let die = player.die(DieId::new(2)).unwrap();
        assert_eq!(die.color, DieColor::Blue);
        assert!(player.die(DieId::new(6)).is_none());
    }

    #[test]
    fn test_dice_of_color_in_pool_order() {
        let player = Player::new(PlayerId::new(0), "Tester", false, None);

        let blue: Vec<_> = player.dice_of_color(DieColor::Blue).collect();
        assert_eq!(blue, vec![DieId::new(2), DieId::new(3)]);

        let green: Vec<_> = player.dice_of_color(DieColor::Green).collect();
        assert_eq!(green, vec![DieId::new(4), DieId::new(5)]);
    }

    #[test]
    fn test_player_id_display() {
        assert_eq!(format!("{}", PlayerId::new(1)), "Player 1");
    }
}
