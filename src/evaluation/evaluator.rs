//! Schedule evaluator that computes drive times, feasibility, and coverage.

use std::collections::{HashMap, HashSet};

use crate::config::SchedulerConfig;
use crate::distance::euclidean;
use crate::models::{Load, Schedule, Solution, Stop, Violation, ViolationType};

/// Evaluates schedules by recomputing every leg, checking that each prefix
/// plus its return allowance fits the shift, and checking that a solution
/// accounts for every load exactly once.
///
/// Return legs are measured from each dropoff to the configured origin, not
/// taken from the load's stored allowance.
///
/// # Examples
///
/// ```
/// use shift_routing::config::SchedulerConfig;
/// use shift_routing::evaluation::ScheduleEvaluator;
/// use shift_routing::models::{Load, Point};
///
/// let loads = vec![
///     Load::new(1, Point::new(0.0, 0.0), Point::new(10.0, 0.0)),
///     Load::new(2, Point::new(10.0, 0.0), Point::new(20.0, 0.0)),
/// ];
/// let config = SchedulerConfig::new(100.0);
///
/// let evaluator = ScheduleEvaluator::new(&loads, &config);
/// let (schedule, violations) = evaluator.build_schedule(0, &[1, 2]);
/// assert!(violations.is_empty());
/// assert!((schedule.total_drive_time() - 40.0).abs() < 1e-10);
/// ```
pub struct ScheduleEvaluator<'a> {
    loads: &'a [Load],
    index: HashMap<u32, usize>,
    config: &'a SchedulerConfig,
}

impl<'a> ScheduleEvaluator<'a> {
    /// Creates a new evaluator for the given loads and shift parameters.
    ///
    /// If load numbers repeat, lookups resolve to the first occurrence.
    pub fn new(loads: &'a [Load], config: &'a SchedulerConfig) -> Self {
        let mut index = HashMap::with_capacity(loads.len());
        for (i, load) in loads.iter().enumerate() {
            index.entry(load.load_number()).or_insert(i);
        }
        Self {
            loads,
            index,
            config,
        }
    }

    /// Looks up a load by number.
    pub fn load(&self, load_number: u32) -> Option<&'a Load> {
        self.index.get(&load_number).map(|&i| &self.loads[i])
    }

    /// Builds a schedule from a sequence of load numbers, computing every leg.
    ///
    /// Returns the constructed schedule and any violations found. Unknown
    /// load numbers are reported and skipped.
    pub fn build_schedule(
        &self,
        driver_id: usize,
        load_numbers: &[u32],
    ) -> (Schedule, Vec<Violation>) {
        let mut violations = Vec::new();
        let mut loads = Vec::with_capacity(load_numbers.len());
        for &number in load_numbers {
            match self.load(number) {
                Some(load) => loads.push(load),
                None => violations.push(Violation::new(ViolationType::UnknownLoad {
                    load_number: number,
                })),
            }
        }

        let (schedule, mut shift_violations) = self.schedule_loads(driver_id, loads);
        violations.append(&mut shift_violations);
        (schedule, violations)
    }

    /// Builds a schedule from loads in driving order.
    ///
    /// Unlike [`build_schedule`](Self::build_schedule), this takes the loads
    /// themselves, so repeated load numbers keep their own geometry.
    pub fn schedule_loads<'l>(
        &self,
        driver_id: usize,
        loads: impl IntoIterator<Item = &'l Load>,
    ) -> (Schedule, Vec<Violation>) {
        let mut schedule = Schedule::new(driver_id);
        let mut violations = Vec::new();
        let origin = self.config.origin();
        let max_drive_time = self.config.max_drive_time();
        let mut current = origin;
        let mut drive_time = 0.0;
        let mut return_distance = 0.0;

        for load in loads {
            let pickup_leg = euclidean(&current, &load.pickup());
            return_distance = euclidean(&load.dropoff(), &origin);

            // Summed in the same order as `leg_cost`, so the audit agrees with
            // `can_pickup` at the boundary.
            let committed = drive_time + (pickup_leg + load.distance() + return_distance);
            drive_time += pickup_leg + load.distance();

            schedule.push_stop(Stop {
                load_number: load.load_number(),
                pickup_leg,
                delivery_distance: load.distance(),
                drive_time_after: drive_time,
            });

            if committed.is_nan() || committed > max_drive_time {
                violations.push(Violation::new(ViolationType::ShiftExceeded {
                    schedule_index: 0,
                    load_number: load.load_number(),
                    drive_time: committed,
                    max_drive_time,
                }));
            }

            current = load.dropoff();
        }

        schedule.set_return_distance(return_distance);
        (schedule, violations)
    }

    /// Evaluates an entire solution, returning total drive time (return legs
    /// included) and every violation found.
    pub fn evaluate_solution(&self, solution: &Solution) -> (f64, Vec<Violation>) {
        let mut total_drive_time = 0.0;
        let mut all_violations = Vec::new();
        let mut seen: HashSet<u32> = HashSet::with_capacity(self.loads.len());

        for (idx, schedule) in solution.schedules().iter().enumerate() {
            let load_numbers = schedule.load_numbers();
            let (rebuilt, mut violations) =
                self.build_schedule(schedule.driver_id(), &load_numbers);

            for v in &mut violations {
                if let ViolationType::ShiftExceeded { schedule_index, .. } = &mut v.kind {
                    *schedule_index = idx;
                }
            }

            for &number in &load_numbers {
                if !seen.insert(number) {
                    violations.push(Violation::new(ViolationType::DuplicateLoad {
                        load_number: number,
                    }));
                }
            }

            total_drive_time += rebuilt.total_drive_time();
            all_violations.append(&mut violations);
        }

        for &number in solution.unassigned() {
            if !seen.insert(number) {
                all_violations.push(Violation::new(ViolationType::DuplicateLoad {
                    load_number: number,
                }));
            }
        }

        for load in self.loads {
            if !seen.contains(&load.load_number()) {
                all_violations.push(Violation::new(ViolationType::MissingLoad {
                    load_number: load.load_number(),
                }));
            }
        }

        (total_drive_time, all_violations)
    }
}
