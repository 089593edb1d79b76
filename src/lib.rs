//! # dice-odyssey
//!
//! Deterministic turn-resolution engine for the Dice Odyssey board game:
//! players split six color-affine dice across Move, Claim and Sabotage each
//! turn; the engine rolls with affinity modifiers, advances ships, resolves
//! planet claims for MacGuffins, applies sabotage skip turns, collapses the
//! galaxy over time and decides the winner — emitting a fully reproducible
//! structured snapshot of every turn.
//!
//! ## Design Principles
//!
//! 1. **State as a value**: the reducer maps `(State, Command)` to a new
//!    state; the caller owns the single instance and its lifecycle.
//!
//! 2. **Injectable randomness**: dice go through the `DiceRoller` trait.
//!    Production wires a seeded ChaCha8 generator; tests script exact faces.
//!
//! 3. **No fatal errors**: invalid commands are no-ops with a log note.
//!    Every engine branch is a total function over its inputs.
//!
//! ## Modules
//!
//! - `core`: dice, players, planets, allocations, commands, snapshots,
//!   game state, RNG
//! - `ai`: persona roster and the heuristic allocator
//! - `engine`: affinity rolling, turn resolution, galaxy collapse, win
//!   evaluation
//! - `reducer`: the command dispatch and the `GameStore` owner
//!
//! ## Quick start
//!
//! ```
//! use dice_odyssey::{Command, Difficulty, GameMode, GameSetup, GameStore};
//!
//! let mut store = GameStore::new(42);
//! store.dispatch(Command::InitGame(GameSetup {
//!     mode: GameMode::Single,
//!     human_names: vec!["Captain".into()],
//!     ai_count: 2,
//!     difficulty: Difficulty::Medium,
//!     debug_enabled: true,
//! }));
//!
//! assert_eq!(store.state().players.len(), 3);
//! ```

pub mod ai;
pub mod core;
pub mod engine;
pub mod reducer;

// Re-export commonly used types
pub use crate::core::{
    ActionKind, Allocation, BeforeAfter, ClaimOutcome, Command, DebugTurnRecord, DiceRoller, Die,
    DieColor, DieId, DieRoll, Difficulty, GameExport, GameMode, GameRng, GameSetup, GameState,
    Planet, Player, PlayerId, PlayerSummary, ResolveGate, RollSet, SabotageApplication,
    ScriptedDice, TurnEvent, TurnSnapshot, TurnTotals, WinReason, Winner, DICE_PER_PLAYER,
};

pub use crate::ai::{compute_allocation, Persona, PERSONAS};
pub use crate::engine::{affinity_color, resolve_turn};
pub use crate::reducer::{reduce, GameStore};
