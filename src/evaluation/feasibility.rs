//! Per-step feasibility test.

use crate::distance::euclidean;
use crate::models::{Load, Point};

/// Drive time needed to take `load` from `current` and still get home:
/// the approach to the pickup, the delivery, and the return allowance.
pub fn leg_cost(current: &Point, load: &Load) -> f64 {
    euclidean(current, &load.pickup()) + load.distance() + load.distance_to_origin()
}

/// Returns `true` if a driver at `current` with `drive_time` already spent
/// can accept `load` and still return to the origin within `max_drive_time`.
///
/// The return allowance is always reserved, even though the driver may go
/// on to another load instead of heading home. NaN distances make every
/// load infeasible.
///
/// # Examples
///
/// ```
/// use shift_routing::evaluation::can_pickup;
/// use shift_routing::models::{Load, Point};
///
/// let load = Load::new(1, Point::new(0.0, 0.0), Point::new(10.0, 0.0));
/// assert!(can_pickup(&Point::ORIGIN, 0.0, &load, 20.0));
/// assert!(!can_pickup(&Point::ORIGIN, 0.0, &load, 5.0));
/// ```
pub fn can_pickup(current: &Point, drive_time: f64, load: &Load, max_drive_time: f64) -> bool {
    drive_time + leg_cost(current, load) <= max_drive_time
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load() -> Load {
        // approach 5 from origin, delivery 10, return 5
        Load::new(1, Point::new(3.0, 4.0), Point::new(-3.0, -4.0))
    }

    #[test]
    fn test_leg_cost() {
        assert!((leg_cost(&Point::ORIGIN, &load()) - 20.0).abs() < 1e-10);
        assert!((leg_cost(&Point::new(3.0, 4.0), &load()) - 15.0).abs() < 1e-10);
    }

    #[test]
    fn test_can_pickup_boundary_inclusive() {
        assert!(can_pickup(&Point::ORIGIN, 0.0, &load(), 20.0));
        assert!(!can_pickup(&Point::ORIGIN, 0.0, &load(), 19.999));
    }

    #[test]
    fn test_can_pickup_accounts_for_spent_time() {
        assert!(can_pickup(&Point::ORIGIN, 700.0, &load(), 720.0));
        assert!(!can_pickup(&Point::ORIGIN, 700.5, &load(), 720.0));
    }

    #[test]
    fn test_can_pickup_nan_infeasible() {
        let bad = Load::new(2, Point::new(f64::NAN, 0.0), Point::new(1.0, 0.0));
        assert!(!can_pickup(&Point::ORIGIN, 0.0, &bad, f64::MAX));
    }
}
