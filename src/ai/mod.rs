//! AI opponents: the persona roster and the heuristic dice allocator.

pub mod allocator;
pub mod persona;

pub use allocator::compute_allocation;
pub use persona::{pick_unique, Persona, PERSONAS};
