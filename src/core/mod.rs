//! Core data model: dice, players, planets, allocations, commands,
//! snapshots, game state, RNG.
//!
//! Everything here is plain serializable data plus small helpers; the rules
//! that mutate it live in `engine` and `reducer`.

pub mod allocation;
pub mod command;
pub mod config;
pub mod dice;
pub mod player;
pub mod rng;
pub mod snapshot;
pub mod state;

pub use allocation::{ActionKind, Allocation, DieIdList};
pub use command::Command;
pub use config::{Difficulty, GameMode, GameSetup};
pub use dice::{Die, DieColor, DieId, DICE_PER_PLAYER};
pub use player::{Player, PlayerId};
pub use rng::{DiceRoller, GameRng, ScriptedDice};
pub use snapshot::{
    BeforeAfter, ClaimOutcome, DebugTurnRecord, DieRoll, GameExport, PlayerSummary, RollSet,
    SabotageApplication, TurnSnapshot, TurnTotals, WinReason, Winner,
};
pub use state::{GameState, Planet, ResolveGate, TurnEvent};
