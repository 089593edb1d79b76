//! The full game state value.
//!
//! `GameState` is pure data: the reducer computes a new state from the old
//! one, and the caller owns the single instance. Bounded buffers (turn log,
//! resolution history) use `im` persistent vectors so each full-state
//! replacement shares structure with its predecessor.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::config::{Difficulty, GameMode, HISTORY_CAP, LOG_CAP};
use super::player::Player;
use super::snapshot::{DebugTurnRecord, GameExport, PlayerSummary, TurnSnapshot, Winner};

/// One stop on the galaxy board.
///
/// The face (1..=6) is the hidden claim difficulty, fixed at creation.
/// `claimed` never reverts once set; `revealed` is set by landing or by a
/// collapse clamping someone onto the planet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Planet {
    /// 1-based position on the board.
    pub id: u32,
    pub face: u8,
    pub claimed: bool,
    pub revealed: bool,
}

impl Planet {
    /// A fresh, unclaimed, unrevealed planet.
    #[must_use]
    pub fn new(id: u32, face: u8) -> Self {
        Self {
            id,
            face,
            claimed: false,
            revealed: false,
        }
    }
}

/// One human-readable log entry. Entries are prepended and capped.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnEvent {
    /// Monotonic entry id, stable across the bounded buffer.
    pub id: u64,
    /// Turn counter at the time the entry was written.
    pub turn: u32,
    pub message: String,
}

/// Advisory resolve gate.
///
/// Set by the caller around an atomic resolve so re-entrant resolution
/// commands can be fenced off while staged presentation catches up. The
/// engine itself never suspends; by the time this reads `Resolving` the
/// computation is already done.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolveGate {
    #[default]
    Idle,
    Resolving,
}

/// Everything the game knows between two commands.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    pub started: bool,
    pub mode: GameMode,
    pub players: Vec<Player>,
    /// Index of the active player in `players`.
    pub current_player_index: usize,
    /// Monotonic turn counter; +1 per resolved turn, skips included.
    pub turn: u32,
    /// The board, tail-shrunk over time.
    pub galaxy: Vec<Planet>,
    pub difficulty: Difficulty,
    pub winner: Option<Winner>,
    /// Bounded human-readable log, newest first.
    pub log: Vector<TurnEvent>,
    pub debug_enabled: bool,
    /// Unbounded structured records; only populated when debug is on.
    pub debug_log: Vector<DebugTurnRecord>,
    pub gate: ResolveGate,
    pub latest_resolution: Option<TurnSnapshot>,
    /// Bounded snapshot history, newest first.
    pub resolution_history: Vector<TurnSnapshot>,
    next_event_id: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// The pristine, not-yet-started state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            started: false,
            mode: GameMode::Single,
            players: Vec::new(),
            current_player_index: 0,
            turn: 1,
            galaxy: Vec::new(),
            difficulty: Difficulty::Medium,
            winner: None,
            log: Vector::new(),
            debug_enabled: false,
            debug_log: Vector::new(),
            gate: ResolveGate::Idle,
            latest_resolution: None,
            resolution_history: Vector::new(),
            next_event_id: 0,
        }
    }

    /// The active player, if the game has one.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_player_index)
    }

    /// Prepend a log entry tagged with the current turn counter; the buffer
    /// keeps the newest [`LOG_CAP`] entries.
    pub fn push_log(&mut self, message: impl Into<String>) {
        let event = TurnEvent {
            id: self.next_event_id,
            turn: self.turn,
            message: message.into(),
        };
        self.next_event_id += 1;
        self.log.push_front(event);
        self.log = self.log.take(LOG_CAP.min(self.log.len()));
    }

    /// Store a resolution snapshot: latest, bounded history, and — when
    /// debug mode is on — the unbounded debug record list.
    pub fn record_resolution(&mut self, snapshot: TurnSnapshot) {
        if self.debug_enabled {
            self.debug_log.push_back(snapshot.record.clone());
        }
        self.resolution_history.push_front(snapshot.clone());
        self.resolution_history = self
            .resolution_history
            .take(HISTORY_CAP.min(self.resolution_history.len()));
        self.latest_resolution = Some(snapshot);
    }

    /// Structured dump for the debug/export collaborator.
    #[must_use]
    pub fn export(&self) -> GameExport {
        GameExport {
            winner: self.winner,
            turn: self.turn,
            players: self
                .players
                .iter()
                .map(|player| PlayerSummary {
                    id: player.id,
                    name: player.name.clone(),
                    is_ai: player.is_ai,
                    mac_guffins: player.mac_guffins,
                    ship_pos: player.ship_pos,
                    skipped_turns: player.skipped_turns,
                })
                .collect(),
            debug_log: self.debug_log.iter().cloned().collect(),
        }
    }
}
