//! Commands accepted by the reducer.
//!
//! Each command transforms `State -> State`. Invalid commands return the
//! state unchanged, at most with an explanatory log entry — there are no
//! fatal errors anywhere on this surface.

use serde::{Deserialize, Serialize};

use super::allocation::Allocation;
use super::config::GameSetup;

/// The full command surface of the game store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// (Re)create players and a fresh galaxy, reset counters, seed the log.
    InitGame(GameSetup),
    /// Store the current human player's pending dice assignment.
    AllocateDice(Allocation),
    /// Raise the advisory resolve gate while a caller stages presentation.
    BeginResolution,
    /// Lower the advisory resolve gate.
    EndResolution,
    /// Resolve the active player's turn atomically.
    ResolveTurn,
    /// Advance to the next player in seating order.
    NextPlayer,
    /// Back to the pristine initial state.
    NewGame,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{Difficulty, GameMode};

    #[test]
    fn test_command_serialization() {
        let command = Command::InitGame(GameSetup {
            mode: GameMode::Single,
            human_names: vec!["Captain".into()],
            ai_count: 2,
            difficulty: Difficulty::Medium,
            debug_enabled: true,
        });

        let json = serde_json::to_string(&command).unwrap();
        let back: Command = serde_json::from_str(&json).unwrap();
        assert_eq!(command, back);
    }
}
