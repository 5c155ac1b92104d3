//! Drive-time feasibility and schedule auditing.
//!
//! - [`can_pickup`] — the per-step test the scheduler applies
//! - [`ScheduleEvaluator`] — rebuilds schedules and checks completeness and
//!   prefix feasibility of a whole solution

mod evaluator;
mod feasibility;

pub use evaluator::ScheduleEvaluator;
pub use feasibility::{can_pickup, leg_cost};
