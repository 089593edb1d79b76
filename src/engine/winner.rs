//! Win evaluation, run once per resolved turn after the collapse check.

use std::cmp::Ordering;

use crate::core::config::WINNING_MACGUFFINS;
use crate::core::player::Player;
use crate::core::snapshot::{WinReason, Winner};
use crate::core::state::GameState;

/// Survival tie-break: MacGuffins desc, ship position desc, pending skips
/// asc, name asc. The final name comparison makes the ordering total and
/// deterministic.
fn survival_order(a: &Player, b: &Player) -> Ordering {
    b.mac_guffins
        .cmp(&a.mac_guffins)
        .then(b.ship_pos.cmp(&a.ship_pos))
        .then(a.skipped_turns.cmp(&b.skipped_turns))
        .then(a.name.cmp(&b.name))
}

/// Set the winner if either victory condition holds. Idempotent no-op once
/// a winner exists.
pub fn evaluate(state: &mut GameState) {
    if state.winner.is_some() {
        return;
    }

    // Race: first player in seating order past the threshold.
    if let Some(racer) = state
        .players
        .iter()
        .find(|player| player.mac_guffins >= WINNING_MACGUFFINS)
    {
        state.winner = Some(Winner {
            player: racer.id,
            reason: WinReason::Race,
        });
        return;
    }

    // Survival: only once the galaxy is fully exhausted.
    if state.galaxy.is_empty() {
        let mut standing: Vec<&Player> = state.players.iter().collect();
        standing.sort_by(|a, b| survival_order(a, b));
        if let Some(best) = standing.first() {
            state.winner = Some(Winner {
                player: best.id,
                reason: WinReason::Survival,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::player::PlayerId;
    use crate::core::state::Planet;

    fn player(id: u8, name: &str) -> Player {
        Player::new(PlayerId::new(id), name, false, None)
    }

    fn started_state(players: Vec<Player>, galaxy_len: usize) -> GameState {
        let mut state = GameState::new();
        state.started = true;
        state.players = players;
        state.galaxy = (1..=galaxy_len as u32).map(|id| Planet::new(id, 4)).collect();
        state
    }

    #[test]
    fn test_race_win_at_threshold() {
        let mut a = player(0, "Alpha");
        a.mac_guffins = 7;
        let mut state = started_state(vec![a, player(1, "Beta")], 12);

        evaluate(&mut state);

        let winner = state.winner.unwrap();
        assert_eq!(winner.player, PlayerId::new(0));
        assert_eq!(winner.reason, WinReason::Race);
    }

    #[test]
    fn test_no_win_below_threshold_with_planets_left() {
        let mut a = player(0, "Alpha");
        a.mac_guffins = 6;
        let mut state = started_state(vec![a], 1);

        evaluate(&mut state);
        assert!(state.winner.is_none());
    }

    #[test]
    fn test_race_takes_first_in_seating_order() {
        let mut a = player(0, "Alpha");
        a.mac_guffins = 7;
        let mut b = player(1, "Beta");
        b.mac_guffins = 9;
        let mut state = started_state(vec![a, b], 12);

        evaluate(&mut state);
        assert_eq!(state.winner.unwrap().player, PlayerId::new(0));
    }

    #[test]
    fn test_survival_tie_break_chain() {
        let mut a = player(0, "Zed");
        a.mac_guffins = 3;
        a.ship_pos = 2;
        let mut b = player(1, "Ada");
        b.mac_guffins = 3;
        b.ship_pos = 2;
        b.skipped_turns = 1;
        let mut c = player(2, "Ada2");
        c.mac_guffins = 3;
        c.ship_pos = 1;

        let mut state = started_state(vec![a, b, c], 0);
        evaluate(&mut state);

        // Same MacGuffins; position drops c; fewer skips beats b.
        let winner = state.winner.unwrap();
        assert_eq!(winner.player, PlayerId::new(0));
        assert_eq!(winner.reason, WinReason::Survival);
    }

    #[test]
    fn test_survival_name_tie_break() {
        let a = player(0, "Zed");
        let b = player(1, "Ada");
        let mut state = started_state(vec![a, b], 0);

        evaluate(&mut state);
        assert_eq!(state.winner.unwrap().player, PlayerId::new(1));
    }

    #[test]
    fn test_winner_is_sticky() {
        let mut a = player(0, "Alpha");
        a.mac_guffins = 7;
        let mut state = started_state(vec![a], 12);
        evaluate(&mut state);

        state.players[0].mac_guffins = 0;
        state.players.push(player(1, "Beta"));
        evaluate(&mut state);

        assert_eq!(state.winner.unwrap().player, PlayerId::new(0));
    }
}
