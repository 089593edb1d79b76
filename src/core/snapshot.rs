//! Structured per-turn audit records.
//!
//! Every resolved turn produces a [`TurnSnapshot`] — full roll detail,
//! before/after deltas, claim and sabotage outcomes — so any narrative or
//! debug layer consumes structured fields instead of re-parsing log text.
//! [`DebugTurnRecord`]s additionally accumulate, unbounded, while debug
//! mode is on, and [`GameExport`] is the JSON-serializable dump handed to
//! the external debug/export collaborator.

use serde::{Deserialize, Serialize};

use super::allocation::Allocation;
use super::dice::{DieColor, DieId};
use super::player::PlayerId;

/// One die rolled for an action: raw face, affinity modifier, final value.
///
/// `final_value = max(1, raw + modifier)`; the floor keeps a mismatched
/// color from ever zeroing a die.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DieRoll {
    pub die: DieId,
    pub color: DieColor,
    pub raw: u8,
    pub modifier: i8,
    pub final_value: u8,
}

/// All rolls of one resolution, bucket by bucket.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollSet {
    pub movement: Vec<DieRoll>,
    pub claim: Vec<DieRoll>,
    pub sabotage: Vec<DieRoll>,
}

/// Summed outcomes of one resolution.
///
/// Claim rolls are deliberately not summed: claim dice succeed or fail
/// individually against the planet face.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnTotals {
    pub movement: u32,
    pub sabotage: u32,
    pub gained_mac_guffins: u32,
}

/// A value observed before and after a resolution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeforeAfter<T> {
    pub before: T,
    pub after: T,
}

impl<T: Copy> BeforeAfter<T> {
    #[must_use]
    pub fn new(before: T, after: T) -> Self {
        Self { before, after }
    }

    /// Both sides the same value (skipped turns, untouched counters).
    #[must_use]
    pub fn unchanged(value: T) -> Self {
        Self {
            before: value,
            after: value,
        }
    }
}

/// Sabotage landing on (or bouncing off) a target.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SabotageApplication {
    pub target: PlayerId,
    pub target_name: String,
    /// Skip turns actually applied, after defense and the cap.
    pub amount: u8,
    pub before: u8,
    pub after: u8,
    pub blocked_by_immunity: bool,
}

/// Claim outcome of one resolution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimOutcome {
    /// Planet landed on, if the ship ended on one.
    pub planet: Option<u32>,
    pub face: Option<u8>,
    /// Claim dice whose final value met the planet face.
    pub successes: usize,
    /// Every claim die succeeded and the reward was doubled.
    pub perfect: bool,
}

/// Why the game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WinReason {
    /// Reached the MacGuffin threshold.
    Race,
    /// Best standing when the galaxy ran out.
    Survival,
}

/// The decided winner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Winner {
    pub player: PlayerId,
    pub reason: WinReason,
}

/// Full structured record of one resolved turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebugTurnRecord {
    /// Turn counter after this resolution.
    pub turn: u32,
    /// 1-based round: one round is every player acting once.
    pub round: u32,
    pub player: PlayerId,
    pub player_name: String,
    /// True when the turn was consumed by a pending skip; totals are zeroed
    /// and no dice were rolled.
    pub skipped: bool,
    pub allocation: Allocation,
    pub rolls: RollSet,
    pub totals: TurnTotals,
    pub position: BeforeAfter<usize>,
    /// The acting player's own skip count.
    pub skips: BeforeAfter<u8>,
    pub sabotage: Option<SabotageApplication>,
    /// Galaxy length around the post-turn collapse check.
    pub galaxy: BeforeAfter<usize>,
    pub winner_after: Option<Winner>,
    pub notes: Vec<String>,
}

/// A [`DebugTurnRecord`] plus the presentation-facing claim and sabotage
/// summary. The latest snapshot and a bounded history are always kept,
/// debug mode or not.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnSnapshot {
    pub record: DebugTurnRecord,
    pub sabotage_message: String,
    pub claim: ClaimOutcome,
}

/// Final per-player stats for the export dump.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub id: PlayerId,
    pub name: String,
    pub is_ai: bool,
    pub mac_guffins: u32,
    pub ship_pos: usize,
    pub skipped_turns: u8,
}

/// Structured dump for the external debug/export UI: winner, final stats,
/// and one record per resolved turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameExport {
    pub winner: Option<Winner>,
    pub turn: u32,
    pub players: Vec<PlayerSummary>,
    pub debug_log: Vec<DebugTurnRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_before_after_unchanged() {
        let span = BeforeAfter::unchanged(4usize);
        assert_eq!(span.before, 4);
        assert_eq!(span.after, 4);
    }

    #[test]
    fn test_win_reason_serialization() {
        assert_eq!(serde_json::to_string(&WinReason::Race).unwrap(), "\"race\"");
        assert_eq!(
            serde_json::to_string(&WinReason::Survival).unwrap(),
            "\"survival\""
        );
    }

    #[test]
    fn test_snapshot_round_trips() {
        let record = DebugTurnRecord {
            turn: 2,
            round: 1,
            player: PlayerId::new(0),
            player_name: "Tester".into(),
            skipped: false,
            allocation: Allocation::empty(),
            rolls: RollSet::default(),
            totals: TurnTotals::default(),
            position: BeforeAfter::new(0, 3),
            skips: BeforeAfter::unchanged(0),
            sabotage: None,
            galaxy: BeforeAfter::unchanged(12),
            winner_after: None,
            notes: vec!["note".into()],
        };
        let snapshot = TurnSnapshot {
            record,
            sabotage_message: "No sabotage attempts.".into(),
            claim: ClaimOutcome::default(),
        };

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: TurnSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, back);
    }
}
