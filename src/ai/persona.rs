//! The AI opponent roster.
//!
//! Eight fixed personas from the Odyssey cast. Flavor text, portraits and
//! bios belong to the presentation layer; the engine only needs a stable
//! slug (referenced from `Player::persona`) and a display name.

use crate::core::rng::DiceRoller;

/// One roster entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Persona {
    pub slug: &'static str,
    pub short_name: &'static str,
}

/// The full roster, in canonical order.
pub const PERSONAS: [Persona; 8] = [
    Persona { slug: "odys", short_name: "Odys" },
    Persona { slug: "athena", short_name: "Athena" },
    Persona { slug: "posey", short_name: "Posey" },
    Persona { slug: "zeus", short_name: "Zeus" },
    Persona { slug: "hermes", short_name: "Hermes" },
    Persona { slug: "circe", short_name: "Circe" },
    Persona { slug: "calyp", short_name: "Calyp" },
    Persona { slug: "poly", short_name: "Poly" },
];

/// Pick `count` distinct personas at random.
///
/// Returns fewer than `count` when the roster runs out; callers fall back
/// to a generic name for the surplus.
#[must_use]
pub fn pick_unique<R: DiceRoller + ?Sized>(count: usize, rng: &mut R) -> Vec<Persona> {
    let mut remaining: Vec<Persona> = PERSONAS.to_vec();
    let mut picked = Vec::with_capacity(count.min(remaining.len()));

    while picked.len() < count && !remaining.is_empty() {
        let index = rng.pick(remaining.len());
        picked.push(remaining.swap_remove(index));
    }

    picked
}
