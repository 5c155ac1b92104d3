//! Domain model types for shift scheduling.
//!
//! Provides the core abstractions: points in the plane, delivery loads with
//! precomputed distances, driver schedules as ordered sequences of stops,
//! and the solution that collects them.

mod load;
mod point;
mod schedule;
mod solution;

pub use load::Load;
pub use point::Point;
pub use schedule::{Schedule, Stop};
pub use solution::{Solution, Violation, ViolationType};
