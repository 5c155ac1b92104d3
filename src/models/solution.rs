//! Solution and violation types.

use serde::Serialize;

use super::Schedule;

/// A type of problem found while auditing a solution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ViolationType {
    /// A schedule prefix plus its return allowance runs past the shift.
    ShiftExceeded {
        /// Schedule index in the solution.
        schedule_index: usize,
        /// Load whose acceptance broke the limit.
        load_number: u32,
        /// Drive time through this load, including the return allowance.
        drive_time: f64,
        /// Shift length.
        max_drive_time: f64,
    },
    /// A load appears more than once across schedules.
    DuplicateLoad {
        /// Offending load number.
        load_number: u32,
    },
    /// A load appears in no schedule and is not listed as unassigned.
    MissingLoad {
        /// Offending load number.
        load_number: u32,
    },
    /// A schedule references a load number that is not in the load set.
    UnknownLoad {
        /// Offending load number.
        load_number: u32,
    },
}

/// A problem found in a solution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    /// The type of violation.
    pub kind: ViolationType,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationType) -> Self {
        Self { kind }
    }
}

/// The drivers' schedules for one run.
///
/// Schedules are kept in creation order. Loads that could not be placed
/// even by a fresh driver are listed separately.
///
/// # Examples
///
/// ```
/// use shift_routing::models::{Schedule, Solution};
///
/// let mut sol = Solution::new();
/// sol.add_schedule(Schedule::new(0));
/// assert_eq!(sol.num_drivers(), 1);
/// assert_eq!(sol.num_unassigned(), 0);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Solution {
    schedules: Vec<Schedule>,
    unassigned: Vec<u32>,
}

impl Solution {
    /// Creates an empty solution.
    pub fn new() -> Self {
        Self {
            schedules: Vec::new(),
            unassigned: Vec::new(),
        }
    }

    /// Adds a schedule to this solution.
    pub fn add_schedule(&mut self, schedule: Schedule) {
        self.schedules.push(schedule);
    }

    /// Marks a load as unassigned.
    pub fn add_unassigned(&mut self, load_number: u32) {
        self.unassigned.push(load_number);
    }

    /// Returns the schedules in creation order.
    pub fn schedules(&self) -> &[Schedule] {
        &self.schedules
    }

    /// Number of drivers used.
    pub fn num_drivers(&self) -> usize {
        self.schedules.len()
    }

    /// Load numbers that were not placed.
    pub fn unassigned(&self) -> &[u32] {
        &self.unassigned
    }

    /// Number of loads that were not placed.
    pub fn num_unassigned(&self) -> usize {
        self.unassigned.len()
    }

    /// Total number of loads placed across all schedules.
    pub fn num_assigned(&self) -> usize {
        self.schedules.iter().map(|s| s.len()).sum()
    }

    /// Load numbers per schedule, in assignment order.
    pub fn load_numbers(&self) -> Vec<Vec<u32>> {
        self.schedules.iter().map(|s| s.load_numbers()).collect()
    }

    /// Drive time across all schedules, return legs included.
    pub fn total_drive_time(&self) -> f64 {
        self.schedules.iter().map(|s| s.total_drive_time()).sum()
    }
}

impl Default for Solution {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Stop;

    #[test]
    fn test_solution_empty() {
        let sol = Solution::new();
        assert_eq!(sol.num_drivers(), 0);
        assert_eq!(sol.num_unassigned(), 0);
        assert_eq!(sol.num_assigned(), 0);
        assert_eq!(sol.total_drive_time(), 0.0);
        assert!(sol.load_numbers().is_empty());
    }

    #[test]
    fn test_solution_with_schedules() {
        let mut sol = Solution::new();

        let mut s1 = Schedule::new(0);
        s1.push_stop(Stop {
            load_number: 1,
            pickup_leg: 0.0,
            delivery_distance: 10.0,
            drive_time_after: 10.0,
        });
        s1.set_return_distance(10.0);

        let mut s2 = Schedule::new(1);
        s2.push_stop(Stop {
            load_number: 2,
            pickup_leg: 5.0,
            delivery_distance: 5.0,
            drive_time_after: 10.0,
        });
        s2.push_stop(Stop {
            load_number: 3,
            pickup_leg: 1.0,
            delivery_distance: 4.0,
            drive_time_after: 15.0,
        });
        s2.set_return_distance(5.0);

        sol.add_schedule(s1);
        sol.add_schedule(s2);
        sol.add_unassigned(4);

        assert_eq!(sol.num_drivers(), 2);
        assert_eq!(sol.num_assigned(), 3);
        assert_eq!(sol.num_unassigned(), 1);
        assert_eq!(sol.load_numbers(), vec![vec![1], vec![2, 3]]);
        assert!((sol.total_drive_time() - 40.0).abs() < 1e-10);
    }

    #[test]
    fn test_violation_types() {
        let v = Violation::new(ViolationType::ShiftExceeded {
            schedule_index: 0,
            load_number: 9,
            drive_time: 730.0,
            max_drive_time: 720.0,
        });
        assert!(matches!(
            v.kind,
            ViolationType::ShiftExceeded { load_number: 9, .. }
        ));
    }

    #[test]
    fn test_solution_serializes() {
        let mut sol = Solution::default();
        sol.add_schedule(Schedule::new(0));
        let json = serde_json::to_value(&sol).expect("serializable");
        assert!(json["schedules"].is_array());
        assert!(json["unassigned"].as_array().expect("array").is_empty());
    }
}
