//! Constructive heuristics for building driver schedules.
//!
//! - [`nearest_neighbor`] — Greedy nearest-pickup assignment, O(n²)
//! - [`build_schedules`] — Validates loads, then runs [`nearest_neighbor`]
//! - [`SelectionPolicy`] — How the next candidate is chosen each step

mod nearest_neighbor;
mod policy;
mod schedules;

pub use nearest_neighbor::nearest_neighbor;
pub use policy::SelectionPolicy;
pub use schedules::build_schedules;
