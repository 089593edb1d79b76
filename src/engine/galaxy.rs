//! Galaxy lifecycle: the periodic board collapse.
//!
//! Runs after each resolution, against the already-incremented turn
//! counter. Every [`SHRINK_INTERVAL`]th turn the galaxy loses up to
//! [`SHRINK_COUNT`] planets from the far end, ships beyond the new edge are
//! pulled back, and if anyone was pulled back the new frontier planet is
//! revealed — the collapse showed everyone where the edge now is.

use crate::core::config::{SHRINK_COUNT, SHRINK_INTERVAL};
use crate::core::state::GameState;

/// Apply the periodic collapse to a freshly resolved state.
pub fn apply_collapse(state: &mut GameState) {
    if state.turn % SHRINK_INTERVAL != 0 || state.galaxy.is_empty() {
        return;
    }

    let lost = SHRINK_COUNT.min(state.galaxy.len());
    state.galaxy.truncate(state.galaxy.len() - lost);
    let max_position = state.galaxy.len();

    let clamped_any = state
        .players
        .iter()
        .any(|player| player.ship_pos > max_position);

    if clamped_any && max_position > 0 {
        // The clamped ships land exactly on the new last planet.
        state.galaxy[max_position - 1].revealed = true;
    }

    for player in &mut state.players {
        player.ship_pos = player.ship_pos.min(max_position);
    }

    state.push_log(format!("Galaxy collapse! {lost} planets were lost."));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::player::{Player, PlayerId};
    use crate::core::state::Planet;

    fn state_with_galaxy(len: usize, turn: u32) -> GameState {
        let mut state = GameState::new();
        state.started = true;
        state.turn = turn;
        state.galaxy = (1..=len as u32).map(|id| Planet::new(id, 4)).collect();
        state
    }

    #[test]
    fn test_no_collapse_off_interval() {
        let mut state = state_with_galaxy(12, 4);
        apply_collapse(&mut state);
        assert_eq!(state.galaxy.len(), 12);
        assert!(state.log.is_empty());
    }

    #[test]
    fn test_collapse_removes_tail_planets() {
        let mut state = state_with_galaxy(12, 5);
        apply_collapse(&mut state);

        assert_eq!(state.galaxy.len(), 10);
        assert_eq!(state.galaxy.last().unwrap().id, 10);
        assert_eq!(state.log[0].message, "Galaxy collapse! 2 planets were lost.");
    }

    #[test]
    fn test_collapse_clamps_ships_and_reveals_frontier() {
        let mut state = state_with_galaxy(12, 10);
        let mut far = Player::new(PlayerId::new(0), "Far", false, None);
        far.ship_pos = 12;
        let mut near = Player::new(PlayerId::new(1), "Near", false, None);
        near.ship_pos = 3;
        state.players = vec![far, near];

        apply_collapse(&mut state);

        assert_eq!(state.players[0].ship_pos, 10);
        assert_eq!(state.players[1].ship_pos, 3);
        assert!(state.galaxy[9].revealed);
    }

    #[test]
    fn test_no_reveal_when_nobody_clamped() {
        let mut state = state_with_galaxy(12, 5);
        let mut player = Player::new(PlayerId::new(0), "Safe", false, None);
        player.ship_pos = 5;
        state.players = vec![player];

        apply_collapse(&mut state);

        assert!(state.galaxy.iter().all(|planet| !planet.revealed));
    }

    #[test]
    fn test_collapse_on_single_planet_board() {
        let mut state = state_with_galaxy(1, 5);
        apply_collapse(&mut state);

        assert!(state.galaxy.is_empty());
        assert_eq!(state.log[0].message, "Galaxy collapse! 1 planets were lost.");
    }

    #[test]
    fn test_empty_galaxy_is_untouched() {
        let mut state = state_with_galaxy(0, 5);
        apply_collapse(&mut state);
        assert!(state.galaxy.is_empty());
        assert!(state.log.is_empty());
    }
}
