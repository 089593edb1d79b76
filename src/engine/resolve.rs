//! The turn resolution engine.
//!
//! One call resolves one full turn for the active player, atomically:
//! skip check, allocation normalization, affinity rolls, movement, claim,
//! sabotage, then the shared post-effects (turn counter, galaxy collapse,
//! win evaluation) and a structured snapshot. The input state is never
//! mutated; the caller receives a complete replacement.
//!
//! There are no suspension points and no partial outcomes: by the time
//! this returns, the turn happened.

use crate::ai;
use crate::core::allocation::{ActionKind, Allocation};
use crate::core::config::{reward_for_face, MAX_REWARD_PER_CLAIM, MAX_SKIPPED_TURNS, SABOTAGE_RANGE};
use crate::core::player::Player;
use crate::core::rng::DiceRoller;
use crate::core::snapshot::{
    BeforeAfter, ClaimOutcome, DebugTurnRecord, DieRoll, RollSet, SabotageApplication,
    TurnSnapshot, TurnTotals,
};
use crate::core::state::GameState;

use super::affinity;
use super::galaxy;
use super::winner;

/// Resolve the active player's turn, returning the replacement state.
///
/// No-op (a plain clone) when there is no active player or a winner is
/// already decided — the reducer guards these too, but the engine stays
/// total on its own.
#[must_use]
pub fn resolve_turn<R: DiceRoller + ?Sized>(state: &GameState, rng: &mut R) -> GameState {
    let Some(actor) = state.current_player().cloned() else {
        return state.clone();
    };
    if state.winner.is_some() {
        return state.clone();
    }

    if actor.skipped_turns > 0 {
        resolve_skipped(state, &actor)
    } else {
        resolve_active(state, &actor, rng)
    }
}

/// 1-based round number: one round is every player acting once.
fn round_of(turn: u32, player_count: usize) -> u32 {
    (turn - 1) / (player_count.max(1) as u32) + 1
}

/// Finals of a bucket for the log line, `-` when no dice were assigned.
fn finals_for_log(rolls: &[DieRoll]) -> String {
    if rolls.is_empty() {
        return "-".into();
    }
    rolls
        .iter()
        .map(|roll| roll.final_value.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Nearest rival within sabotage range of the source's position.
///
/// Strict `<` on distance: ties go to the first candidate in seating
/// order. Immune and skipped players are still valid targets here;
/// immunity is handled at application time.
fn find_nearest_target(players: &[Player], source_index: usize) -> Option<usize> {
    let source_pos = players.get(source_index)?.ship_pos;
    let mut best: Option<(usize, usize)> = None;

    for (index, candidate) in players.iter().enumerate() {
        if index == source_index {
            continue;
        }
        let distance = candidate.ship_pos.abs_diff(source_pos);
        if distance <= SABOTAGE_RANGE && best.map_or(true, |(_, closest)| distance < closest) {
            best = Some((index, distance));
        }
    }

    best.map(|(index, _)| index)
}

/// A turn consumed by a pending skip: no dice, zeroed totals, immunity
/// granted, post-effects still run.
fn resolve_skipped(state: &GameState, actor: &Player) -> GameState {
    let mut next = state.clone();
    let actor_index = state.current_player_index;

    {
        let player = &mut next.players[actor_index];
        player.skipped_turns -= 1;
        player.skip_immunity = true;
        player.allocation = None;
    }

    next.turn += 1;
    next.push_log(format!(
        "{} is skipped this turn and gains temporary skip immunity until their next playable turn.",
        actor.name
    ));

    galaxy::apply_collapse(&mut next);
    winner::evaluate(&mut next);

    let record = DebugTurnRecord {
        turn: next.turn,
        round: round_of(next.turn, state.players.len()),
        player: actor.id,
        player_name: actor.name.clone(),
        skipped: true,
        allocation: Allocation::empty(),
        rolls: RollSet::default(),
        totals: TurnTotals::default(),
        position: BeforeAfter::unchanged(actor.ship_pos),
        skips: BeforeAfter::new(actor.skipped_turns, actor.skipped_turns.saturating_sub(1)),
        sabotage: None,
        galaxy: BeforeAfter::new(state.galaxy.len(), next.galaxy.len()),
        winner_after: next.winner,
        notes: vec!["Turn skipped due to sabotage effect.".into()],
    };

    next.record_resolution(TurnSnapshot {
        record,
        sabotage_message: "No sabotage attempts.".into(),
        claim: ClaimOutcome::default(),
    });
    next
}

fn resolve_active<R: DiceRoller + ?Sized>(
    state: &GameState,
    actor: &Player,
    rng: &mut R,
) -> GameState {
    let actor_index = state.current_player_index;

    // A stored allocation is only honored for humans; AI players (and a
    // human somehow arriving without one) get a fresh heuristic allocation.
    let allocation = match (&actor.allocation, actor.is_ai) {
        (Some(stored), false) => stored.clone(),
        _ => ai::compute_allocation(
            actor,
            &state.players,
            &state.galaxy,
            state.turn,
            state.difficulty,
            rng,
        ),
    };
    let allocation = allocation.with_all_dice(actor);

    let move_rolls = affinity::roll_bucket(&allocation.movement, ActionKind::Movement, actor, rng);
    let claim_rolls = affinity::roll_bucket(&allocation.claim, ActionKind::Claim, actor, rng);
    let sabotage_rolls =
        affinity::roll_bucket(&allocation.sabotage, ActionKind::Sabotage, actor, rng);

    let move_total = affinity::total(&move_rolls);
    let sabotage_total = affinity::total(&sabotage_rolls);

    // Movement. At the frontier with the last planet already harvested,
    // movement reverses instead of stalling the ship at the edge.
    let max_position = state.galaxy.len();
    let frontier_claimed = state.galaxy.last().is_some_and(|planet| planet.claimed);
    let move_backward = max_position > 0 && actor.ship_pos == max_position && frontier_claimed;
    let moved_to = if move_backward {
        actor.ship_pos.saturating_sub(move_total as usize)
    } else {
        max_position.min(actor.ship_pos + move_total as usize)
    };

    let mut next = state.clone();

    // Claim. Landing reveals the planet whatever happens; the reward table
    // and the perfect-claim bonus decide whether it is actually harvested.
    let mut gained = 0u32;
    let mut successes = 0usize;
    let mut perfect = false;
    let mut landed: Option<(u32, u8)> = None;

    if moved_to >= 1 && moved_to <= next.galaxy.len() {
        let planet = &mut next.galaxy[moved_to - 1];
        landed = Some((planet.id, planet.face));
        planet.revealed = true;

        if !planet.claimed && !claim_rolls.is_empty() {
            successes = claim_rolls
                .iter()
                .filter(|roll| roll.final_value >= planet.face)
                .count();
            if successes > 0 {
                let base = reward_for_face(planet.face);
                let all_succeeded = successes == claim_rolls.len();
                if base > 0 {
                    perfect = all_succeeded;
                    gained = if all_succeeded {
                        (base * 2).min(MAX_REWARD_PER_CLAIM)
                    } else {
                        base
                    };
                }
                // A zero reward leaves the planet unclaimed and retryable.
                if gained > 0 {
                    planet.claimed = true;
                }
            }
        }
    }

    {
        let player = &mut next.players[actor_index];
        player.ship_pos = moved_to;
        player.mac_guffins += gained;
        // Acting ends the one-turn protection from having been skipped.
        player.skip_immunity = false;
    }

    // Sabotage, against positions as they stand after movement.
    let mut sabotage_message = String::from("No sabotage attempts.");
    let mut sabotage_applied: Option<SabotageApplication> = None;

    if sabotage_total > 0 {
        match find_nearest_target(&next.players, actor_index) {
            None => {
                sabotage_message = format!(
                    "{} rolled {sabotage_total} sabotage but had no target in range.",
                    actor.name
                );
            }
            Some(target_index) => {
                let target = &next.players[target_index];
                let target_id = target.id;
                let target_name = target.name.clone();
                let before = target.skipped_turns;

                if target.skip_immunity {
                    // Fully blocked; the block does not consume immunity.
                    sabotage_message = format!(
                        "Immunity: {target_name} resisted sabotage from {} this turn.",
                        actor.name
                    );
                    sabotage_applied = Some(SabotageApplication {
                        target: target_id,
                        target_name,
                        amount: 0,
                        before,
                        after: before,
                        blocked_by_immunity: true,
                    });
                } else {
                    let skips = sabotage_total.saturating_sub(target.defense);
                    let after =
                        (u32::from(before) + skips).min(u32::from(MAX_SKIPPED_TURNS)) as u8;
                    next.players[target_index].skipped_turns = after;
                    let amount = after - before;
                    sabotage_message = format!(
                        "{} sabotaged {target_name} for {amount} skip turn(s) (max {MAX_SKIPPED_TURNS}).",
                        actor.name
                    );
                    sabotage_applied = Some(SabotageApplication {
                        target: target_id,
                        target_name,
                        amount,
                        before,
                        after,
                        blocked_by_immunity: false,
                    });
                }
            }
        }
    }

    next.players[actor_index].allocation = None;
    next.turn += 1;

    let perfect_summary = if perfect && gained > 0 {
        format!(" Perfect Claim bonus applied (reward doubled, cap {MAX_REWARD_PER_CLAIM}).")
    } else {
        String::new()
    };
    next.push_log(format!(
        "{}: move [{}] ({move_total}), claim [{}], sabotage [{}] ({sabotage_total}), +{gained} MacGuffins.{perfect_summary}",
        actor.name,
        finals_for_log(&move_rolls),
        finals_for_log(&claim_rolls),
        finals_for_log(&sabotage_rolls),
    ));
    next.push_log(sabotage_message.clone());

    galaxy::apply_collapse(&mut next);
    winner::evaluate(&mut next);

    let mut notes = vec![
        "Affinity applied to every die: +1 on matching color/action, -1 otherwise (minimum 1)."
            .to_string(),
        "Players are immune to new skip-turn sabotage until their next playable turn after being skipped."
            .to_string(),
    ];
    if perfect {
        notes.push(format!(
            "Perfect Claim bonus: all claim dice succeeded; reward doubled (capped at {MAX_REWARD_PER_CLAIM})."
        ));
    }

    let record = DebugTurnRecord {
        turn: next.turn,
        round: round_of(next.turn, state.players.len()),
        player: actor.id,
        player_name: actor.name.clone(),
        skipped: false,
        allocation,
        rolls: RollSet {
            movement: move_rolls,
            claim: claim_rolls,
            sabotage: sabotage_rolls,
        },
        totals: TurnTotals {
            movement: move_total,
            sabotage: sabotage_total,
            gained_mac_guffins: gained,
        },
        position: BeforeAfter::new(actor.ship_pos, moved_to),
        skips: BeforeAfter::unchanged(actor.skipped_turns),
        sabotage: sabotage_applied,
        galaxy: BeforeAfter::new(state.galaxy.len(), next.galaxy.len()),
        winner_after: next.winner,
        notes,
    };

    next.record_resolution(TurnSnapshot {
        record,
        sabotage_message,
        claim: ClaimOutcome {
            planet: landed.map(|(id, _)| id),
            face: landed.map(|(_, face)| face),
            successes,
            perfect,
        },
    });
    next
}
