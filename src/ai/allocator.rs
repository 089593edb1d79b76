//! Heuristic dice allocation for AI players.
//!
//! Priority-weighted, not search-based: three running scores seeded with
//! base weights, nudged by the board situation, consumed die by die with a
//! small difficulty-dependent chance of ignoring them entirely. Produces
//! plausible, tunable, non-optimal play — and always a complete, valid
//! six-die allocation, which the engine also leans on as the fallback when
//! a player offers none.

use crate::core::allocation::{ActionKind, Allocation};
use crate::core::config::{Difficulty, SABOTAGE_RANGE};
use crate::core::dice::DieColor;
use crate::core::player::Player;
use crate::core::rng::DiceRoller;
use crate::core::state::Planet;

const BASE_MOVEMENT: f64 = 2.8;
const BASE_CLAIM: f64 = 3.2;
const BASE_SABOTAGE: f64 = 1.0;

/// Unclaimed planets at or ahead of the ship considered "reachable".
const REACHABLE_WINDOW: usize = 4;

#[derive(Clone, Copy, Debug)]
struct Priorities {
    movement: f64,
    claim: f64,
    sabotage: f64,
}

impl Priorities {
    fn get(&self, action: ActionKind) -> f64 {
        match action {
            ActionKind::Movement => self.movement,
            ActionKind::Claim => self.claim,
            ActionKind::Sabotage => self.sabotage,
        }
    }

    /// Highest-priority action; ties break in [`ActionKind::ALL`] order.
    fn top(&self) -> ActionKind {
        let mut best = ActionKind::ALL[0];
        for action in &ActionKind::ALL[1..] {
            if self.get(*action) > self.get(best) {
                best = *action;
            }
        }
        best
    }

    /// Spread dice across actions: each assignment makes the chosen action
    /// slightly less attractive.
    fn decay(&mut self, action: ActionKind) {
        match action {
            ActionKind::Movement => self.movement -= 0.4,
            ActionKind::Claim => self.claim -= 0.3,
            ActionKind::Sabotage => self.sabotage -= 0.5,
        }
    }
}

fn nearest_rival_distance(player: &Player, all_players: &[Player]) -> Option<usize> {
    all_players
        .iter()
        .filter(|candidate| candidate.id != player.id)
        .map(|candidate| candidate.ship_pos.abs_diff(player.ship_pos))
        .min()
}

fn unclaimed_reachable_ahead(player: &Player, galaxy: &[Planet]) -> usize {
    galaxy
        .iter()
        .filter(|planet| !planet.claimed && planet.id as usize >= player.ship_pos)
        .take(REACHABLE_WINDOW)
        .count()
}

fn choose_action<R: DiceRoller + ?Sized>(
    priorities: &Priorities,
    difficulty: Difficulty,
    rng: &mut R,
) -> ActionKind {
    if rng.chance(difficulty.off_priority_chance()) {
        return ActionKind::ALL[rng.pick(ActionKind::ALL.len())];
    }
    priorities.top()
}

/// Compute a full six-die allocation for the acting player.
///
/// Dice are assigned one at a time in fixed color order — all blue, then
/// green, then red — so the affinity-matched dice of whichever action wins
/// early get spoken for first.
#[must_use]
pub fn compute_allocation<R: DiceRoller + ?Sized>(
    player: &Player,
    all_players: &[Player],
    galaxy: &[Planet],
    turn: u32,
    difficulty: Difficulty,
    rng: &mut R,
) -> Allocation {
    let mut priorities = Priorities {
        movement: BASE_MOVEMENT,
        claim: BASE_CLAIM,
        sabotage: BASE_SABOTAGE,
    };

    // Short on MacGuffins: keep moving toward fresh planets.
    if player.mac_guffins < 3 {
        priorities.movement += 0.3;
    }

    // A rival in sabotage range makes skip turns tempting.
    if nearest_rival_distance(player, all_players).is_some_and(|distance| distance <= SABOTAGE_RANGE) {
        priorities.sabotage += 1.5;
    }

    // Late game, shrinking board, or claimable planets ahead: go claiming.
    if turn >= 6 || galaxy.len() <= 9 || unclaimed_reachable_ahead(player, galaxy) > 0 {
        priorities.claim += 2.0;
    }

    if player.mac_guffins >= 2 {
        priorities.claim += 0.8;
    }

    let ordered_dice: Vec<_> = [DieColor::Blue, DieColor::Green, DieColor::Red]
        .iter()
        .flat_map(|color| player.dice_of_color(*color))
        .collect();

    let mut allocation = Allocation::empty();
    for die in ordered_dice {
        let action = choose_action(&priorities, difficulty, rng);
        allocation.bucket_mut(action).push(die);
        priorities.decay(action);
    }

    allocation
}
