//! Deterministic random number generation behind an injectable seam.
//!
//! The engine never calls a global RNG. Everything random — die faces,
//! planet faces, the AI's off-priority rolls, persona selection — goes
//! through the [`DiceRoller`] trait so tests can supply fixed sequences.
//!
//! Production wiring uses [`GameRng`]: same seed, same game, every time.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;

/// Injectable randomness source.
///
/// `roll_face` is the dice roller proper; `chance` and `pick` cover the AI
/// allocator's randomized decisions and persona selection at init.
pub trait DiceRoller {
    /// Roll one die face, uniform in `1..=6`, with no memory of prior rolls.
    fn roll_face(&mut self) -> u8;

    /// Return true with the given probability.
    fn chance(&mut self, probability: f64) -> bool;

    /// Uniform index in `0..bound`. `bound` must be non-zero.
    fn pick(&mut self, bound: usize) -> usize;
}

/// Deterministic production RNG.
///
/// Uses ChaCha8 for speed while maintaining high-quality randomness.
/// The same seed produces an identical game given identical commands.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from OS entropy (normal gameplay wiring).
    #[must_use]
    pub fn from_entropy() -> Self {
        let seed = rand::thread_rng().gen();
        Self::new(seed)
    }

    /// The seed this RNG was created with, for reproducing a game.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl DiceRoller for GameRng {
    fn roll_face(&mut self) -> u8 {
        self.inner.gen_range(1..=6)
    }

    fn chance(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    fn pick(&mut self, bound: usize) -> usize {
        self.inner.gen_range(0..bound)
    }
}

/// Scripted dice source for tests.
///
/// Replays a fixed queue of faces; once exhausted, every roll is 1.
/// `chance` always declines and `pick` always chooses 0, so AI decisions
/// driven by a scripted source are fully deterministic.
#[derive(Clone, Debug, Default)]
pub struct ScriptedDice {
    faces: VecDeque<u8>,
}

impl ScriptedDice {
    /// Create a scripted source from the faces to roll, in order.
    #[must_use]
    pub fn new(faces: &[u8]) -> Self {
        debug_assert!(faces.iter().all(|face| (1..=6).contains(face)));
        Self {
            faces: faces.iter().copied().collect(),
        }
    }

    /// Number of scripted faces not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.faces.len()
    }
}

impl DiceRoller for ScriptedDice {
    fn roll_face(&mut self) -> u8 {
        self.faces.pop_front().unwrap_or(1)
    }

    fn chance(&mut self, _probability: f64) -> bool {
        false
    }

    fn pick(&mut self, _bound: usize) -> usize {
        0
    }
}
