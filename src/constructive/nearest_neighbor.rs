//! Nearest-neighbor constructive heuristic.
//!
//! Builds schedules greedily: starting from the origin, a driver keeps
//! taking the undelivered load whose pickup is nearest to where they are,
//! as long as the load still leaves room to return to the origin within the
//! shift. When nothing more fits, the next driver starts.
//!
//! # Complexity
//!
//! O(n²) where n = number of loads.
//!
//! # Reference
//!
//! A direct analogue of the nearest-neighbor tour construction for VRP.
//! It makes no attempt at a minimum driver count.

use std::cmp::Ordering;

use tracing::{debug, info, warn};

use super::SelectionPolicy;
use crate::config::SchedulerConfig;
use crate::distance::euclidean;
use crate::evaluation::{can_pickup, ScheduleEvaluator};
use crate::models::{Load, Point, Solution};

/// Constructs driver schedules using the nearest-neighbor heuristic.
///
/// Candidates are ranked by distance from the driver's current location to
/// their pickup, ties going to the lowest load number. The configured
/// [`SelectionPolicy`] decides whether infeasible nearer candidates are
/// skipped or end the schedule.
///
/// Loads that a fresh driver cannot take are moved to the solution's
/// unassigned list so that the run always terminates. Under
/// `FirstFeasible` that means every load still left; under `StrictNearest`
/// only the nearest one, after which the next driver starts.
///
/// # Arguments
///
/// * `loads` — All loads, built against `config.origin()`
/// * `config` — Origin, shift length, and selection policy
///
/// # Examples
///
/// ```
/// use shift_routing::config::SchedulerConfig;
/// use shift_routing::constructive::nearest_neighbor;
/// use shift_routing::models::{Load, Point};
///
/// let loads = vec![
///     Load::new(1, Point::new(0.0, 0.0), Point::new(10.0, 0.0)),
///     Load::new(2, Point::new(10.0, 0.0), Point::new(20.0, 0.0)),
/// ];
/// let solution = nearest_neighbor(&loads, &SchedulerConfig::new(100.0));
/// assert_eq!(solution.load_numbers(), vec![vec![1, 2]]);
/// ```
pub fn nearest_neighbor(loads: &[Load], config: &SchedulerConfig) -> Solution {
    let n = loads.len();
    let mut solution = Solution::new();
    if n == 0 {
        return solution;
    }

    let evaluator = ScheduleEvaluator::new(loads, config);
    let origin = config.origin();
    let max_drive_time = config.max_drive_time();
    let policy = config.policy();

    let mut delivered = vec![false; n];
    let mut remaining = n;

    while remaining > 0 {
        let mut current = origin;
        let mut drive_time = 0.0;
        let mut picked = Vec::new();

        while let Some(next) =
            select_next(loads, &delivered, &current, drive_time, max_drive_time, policy)
        {
            let load = &loads[next];
            delivered[next] = true;
            remaining -= 1;

            drive_time += euclidean(&current, &load.pickup()) + load.distance();
            current = load.dropoff();
            picked.push(next);

            debug!(
                driver = solution.num_drivers(),
                load = load.load_number(),
                drive_time,
                "assigned load"
            );
        }

        if picked.is_empty() {
            remaining -= drop_unroutable(loads, &mut delivered, &origin, policy, &mut solution);
            continue;
        }

        let (schedule, _) =
            evaluator.schedule_loads(solution.num_drivers(), picked.iter().map(|&i| &loads[i]));
        info!(
            driver = schedule.driver_id(),
            loads = schedule.len(),
            drive_time = schedule.total_drive_time(),
            "closed schedule"
        );
        solution.add_schedule(schedule);
    }

    solution
}

/// Picks the next load for a driver at `current`, or `None` to end the shift.
fn select_next(
    loads: &[Load],
    delivered: &[bool],
    current: &Point,
    drive_time: f64,
    max_drive_time: f64,
    policy: SelectionPolicy,
) -> Option<usize> {
    match policy {
        SelectionPolicy::FirstFeasible => nearest_undelivered(loads, delivered, current, |load| {
            can_pickup(current, drive_time, load, max_drive_time)
        }),
        SelectionPolicy::StrictNearest => nearest_undelivered(loads, delivered, current, |_| true)
            .filter(|&i| can_pickup(current, drive_time, &loads[i], max_drive_time)),
    }
}

/// Index of the undelivered load nearest to `from` among those `accept`
/// lets through. Equal distances go to the lowest load number.
fn nearest_undelivered(
    loads: &[Load],
    delivered: &[bool],
    from: &Point,
    mut accept: impl FnMut(&Load) -> bool,
) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, load) in loads.iter().enumerate() {
        if delivered[i] || !accept(load) {
            continue;
        }
        let d = euclidean(from, &load.pickup());
        let closer = best.is_none_or(|(b, best_d)| match d.total_cmp(&best_d) {
            Ordering::Less => true,
            Ordering::Equal => load.load_number() < loads[b].load_number(),
            Ordering::Greater => false,
        });
        if closer {
            best = Some((i, d));
        }
    }
    best.map(|(i, _)| i)
}

/// Handles a fresh driver that could take nothing. Returns how many loads
/// were moved to the unassigned list.
fn drop_unroutable(
    loads: &[Load],
    delivered: &mut [bool],
    origin: &Point,
    policy: SelectionPolicy,
    solution: &mut Solution,
) -> usize {
    let dropped: Vec<usize> = match policy {
        // Nothing is feasible from the origin, and nothing else will become so.
        SelectionPolicy::FirstFeasible => (0..loads.len()).filter(|&i| !delivered[i]).collect(),
        SelectionPolicy::StrictNearest => nearest_undelivered(loads, delivered, origin, |_| true)
            .into_iter()
            .collect(),
    };

    for &i in &dropped {
        delivered[i] = true;
        warn!(
            load = loads[i].load_number(),
            "load cannot be served within one shift, leaving it unassigned"
        );
        solution.add_unassigned(loads[i].load_number());
    }
    dropped.len()
}
