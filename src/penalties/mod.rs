//! Entropy penalty functions.
//!
//! Each penalty is a pure transformation `(entropy, password) -> entropy`.
//! The pipeline applies them in order, so every function receives the value
//! already adjusted by the ones before it. The two built-ins run first;
//! caller-supplied functions follow in the order they were configured.

mod blacklist;
mod structure;

pub use blacklist::blacklist_penalty;
pub use structure::{STRUCTURE_PENALTY_BITS, has_weak_structure, weak_structure_penalty};

/// A pure entropy adjustment: takes the current entropy estimate and the
/// password, returns the adjusted estimate.
///
/// Functions must be deterministic and side-effect-free; the pipeline applies
/// whatever they return without validation.
pub type PenaltyFn = Box<dyn Fn(f64, &str) -> f64 + Send + Sync>;
