//! Die-to-action allocation: the three buckets and their validation.
//!
//! An allocation partitions a player's six die ids across Move, Claim and
//! Sabotage. Human input is validated strictly at the command boundary;
//! inside the engine a partial allocation is completed, never rejected,
//! by dumping unassigned dice into the movement bucket.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::dice::{DieId, DICE_PER_PLAYER};
use super::player::Player;

/// Bucket storage: at most six ids, no heap allocation.
pub type DieIdList = SmallVec<[DieId; DICE_PER_PLAYER]>;

/// The three action categories a die can be spent on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Movement,
    Claim,
    Sabotage,
}

impl ActionKind {
    /// All actions in priority-tie-break order.
    pub const ALL: [ActionKind; 3] = [ActionKind::Movement, ActionKind::Claim, ActionKind::Sabotage];
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionKind::Movement => write!(f, "move"),
            ActionKind::Claim => write!(f, "claim"),
            ActionKind::Sabotage => write!(f, "sabotage"),
        }
    }
}

/// A proposed partition of a player's dice across the three actions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    pub movement: DieIdList,
    pub claim: DieIdList,
    pub sabotage: DieIdList,
}

impl Allocation {
    /// An allocation with every bucket empty.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Borrow one bucket.
    #[must_use]
    pub fn bucket(&self, action: ActionKind) -> &DieIdList {
        match action {
            ActionKind::Movement => &self.movement,
            ActionKind::Claim => &self.claim,
            ActionKind::Sabotage => &self.sabotage,
        }
    }

    /// Mutably borrow one bucket.
    pub fn bucket_mut(&mut self, action: ActionKind) -> &mut DieIdList {
        match action {
            ActionKind::Movement => &mut self.movement,
            ActionKind::Claim => &mut self.claim,
            ActionKind::Sabotage => &mut self.sabotage,
        }
    }

    /// Total dice assigned across all buckets.
    #[must_use]
    pub fn assigned_count(&self) -> usize {
        self.movement.len() + self.claim.len() + self.sabotage.len()
    }

    /// Validation contract: the union of the three buckets, as a multiset,
    /// equals the player's full die-id set — no duplicates, no omissions,
    /// no unknown ids.
    #[must_use]
    pub fn is_valid_for(&self, player: &Player) -> bool {
        let mut seen: FxHashSet<DieId> = FxHashSet::default();

        for action in ActionKind::ALL {
            for &die in self.bucket(action) {
                if player.die(die).is_none() || !seen.insert(die) {
                    return false;
                }
            }
        }

        seen.len() == player.dice_pool.len()
    }

    /// Complete a partial allocation by assigning every unallocated die to
    /// the movement bucket. Deterministic fallback: a die is never dropped.
    #[must_use]
    pub fn with_all_dice(&self, player: &Player) -> Allocation {
        if self.assigned_count() == player.dice_pool.len() {
            return self.clone();
        }

        let assigned: FxHashSet<DieId> = ActionKind::ALL
            .iter()
            .flat_map(|action| self.bucket(*action).iter().copied())
            .collect();

        let mut completed = self.clone();
        for die in &player.dice_pool {
            if !assigned.contains(&die.id) {
                completed.movement.push(die.id);
            }
        }

        completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::player::PlayerId;

    fn test_player() -> Player {
        Player::new(PlayerId::new(0), "Tester", false, None)
    }

    fn full_allocation() -> Allocation {
        let mut alloc = Allocation::empty();
        alloc.movement.extend([DieId::new(0), DieId::new(1)]);
        alloc.claim.extend([DieId::new(2), DieId::new(3)]);
        alloc.sabotage.extend([DieId::new(4), DieId::new(5)]);
        alloc
    }

    #[test]
    fn test_full_partition_is_valid() {
        let player = test_player();
        assert!(full_allocation().is_valid_for(&player));
    }

    #[test]
    fn test_duplicate_die_is_invalid() {
        let player = test_player();
        let mut alloc = full_allocation();
        alloc.claim[0] = DieId::new(0); // Already in movement.
        assert!(!alloc.is_valid_for(&player));
    }

    #[test]
    fn test_unknown_die_is_invalid() {
        let player = test_player();
        let mut alloc = full_allocation();
        alloc.sabotage[1] = DieId::new(9);
        assert!(!alloc.is_valid_for(&player));
    }

    #[test]
    fn test_omission_is_invalid() {
        let player = test_player();
        let mut alloc = full_allocation();
        alloc.sabotage.pop();
        assert!(!alloc.is_valid_for(&player));
    }

    #[test]
    fn test_with_all_dice_fills_movement() {
        let player = test_player();
        let mut alloc = Allocation::empty();
        alloc.claim.push(DieId::new(4));

        let completed = alloc.with_all_dice(&player);
        assert_eq!(completed.assigned_count(), DICE_PER_PLAYER);
        assert_eq!(completed.claim.len(), 1);
        assert_eq!(completed.movement.len(), 5);
        assert!(completed.is_valid_for(&player));
    }

    #[test]
    fn test_with_all_dice_keeps_complete_allocation() {
        let player = test_player();
        let alloc = full_allocation();
        assert_eq!(alloc.with_all_dice(&player), alloc);
    }
}
