//! Monotonic timing of solver phases.

#[allow(clippy::module_inception)]
mod timers;
pub use timers::*;
