//! Schedule and stop types.

use serde::Serialize;

/// A single assigned load within a schedule.
///
/// Tracks the load number along with the drive time spent reaching and
/// delivering it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stop {
    /// Load being delivered.
    pub load_number: u32,
    /// Travel from the previous location to the pickup.
    pub pickup_leg: f64,
    /// Pickup to dropoff distance.
    pub delivery_distance: f64,
    /// Cumulative drive time after the dropoff.
    pub drive_time_after: f64,
}

/// An ordered sequence of loads assigned to one driver for one shift.
///
/// The shift starts and ends at the origin; the closing leg is stored as
/// `return_distance` rather than as a stop.
///
/// # Examples
///
/// ```
/// use shift_routing::models::{Schedule, Stop};
///
/// let mut schedule = Schedule::new(0);
/// schedule.push_stop(Stop {
///     load_number: 3,
///     pickup_leg: 5.0,
///     delivery_distance: 10.0,
///     drive_time_after: 15.0,
/// });
/// assert_eq!(schedule.load_numbers(), vec![3]);
/// assert_eq!(schedule.drive_time(), 15.0);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Schedule {
    driver_id: usize,
    stops: Vec<Stop>,
    drive_time: f64,
    return_distance: f64,
}

impl Schedule {
    /// Creates an empty schedule for the given driver.
    pub fn new(driver_id: usize) -> Self {
        Self {
            driver_id,
            stops: Vec::new(),
            drive_time: 0.0,
            return_distance: 0.0,
        }
    }

    /// Appends a stop to the end of this schedule.
    pub fn push_stop(&mut self, stop: Stop) {
        self.drive_time = stop.drive_time_after;
        self.stops.push(stop);
    }

    /// Driver index (0-based, in creation order).
    pub fn driver_id(&self) -> usize {
        self.driver_id
    }

    /// Returns the ordered stops.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Number of loads in this schedule.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns `true` if no load is assigned.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Returns the load numbers in assignment order.
    pub fn load_numbers(&self) -> Vec<u32> {
        self.stops.iter().map(|s| s.load_number).collect()
    }

    /// Drive time up to the last dropoff.
    pub fn drive_time(&self) -> f64 {
        self.drive_time
    }

    /// Distance from the last dropoff back to the origin.
    pub fn return_distance(&self) -> f64 {
        self.return_distance
    }

    /// Drive time including the return to origin.
    pub fn total_drive_time(&self) -> f64 {
        self.drive_time + self.return_distance
    }

    /// Sets the return distance (used by evaluator).
    pub fn set_return_distance(&mut self, d: f64) {
        self.return_distance = d;
    }
}
