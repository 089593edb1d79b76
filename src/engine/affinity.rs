//! Color-affinity dice rolling.
//!
//! Each action category favors one die color: movement runs on blue, claims
//! on green, sabotage on red. A matching die rolls at +1, anything else at
//! −1, floored at 1 so a bad pairing still contributes. This asymmetry is
//! what makes the allocation layer a real decision.

use crate::core::allocation::ActionKind;
use crate::core::dice::{DieColor, DieId};
use crate::core::player::Player;
use crate::core::rng::DiceRoller;
use crate::core::snapshot::DieRoll;

/// The color an action favors.
#[must_use]
pub fn affinity_color(action: ActionKind) -> DieColor {
    match action {
        ActionKind::Movement => DieColor::Blue,
        ActionKind::Claim => DieColor::Green,
        ActionKind::Sabotage => DieColor::Red,
    }
}

/// Roll every die assigned to one action, applying the affinity modifier.
///
/// A die id missing from the pool cannot survive validation or
/// normalization, but the function stays total: such a die rolls unmodified.
#[must_use]
pub fn roll_bucket<R: DiceRoller + ?Sized>(
    dice: &[DieId],
    action: ActionKind,
    player: &Player,
    rng: &mut R,
) -> Vec<DieRoll> {
    let affinity = affinity_color(action);

    dice.iter()
        .map(|&id| {
            let raw = rng.roll_face();
            match player.die(id) {
                Some(die) => {
                    let modifier: i8 = if die.color == affinity { 1 } else { -1 };
                    DieRoll {
                        die: id,
                        color: die.color,
                        raw,
                        modifier,
                        final_value: (i16::from(raw) + i16::from(modifier)).max(1) as u8,
                    }
                }
                None => DieRoll {
                    die: id,
                    color: affinity,
                    raw,
                    modifier: 0,
                    final_value: raw,
                },
            }
        })
        .collect()
}

/// Sum of final values, for the move and sabotage buckets.
#[must_use]
pub fn total(rolls: &[DieRoll]) -> u32 {
    rolls.iter().map(|roll| u32::from(roll.final_value)).sum()
}
