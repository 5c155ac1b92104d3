//! Euclidean distance between points.

use crate::models::Point;

/// Where every shift starts and is reserved to end, unless configured otherwise.
pub const ORIGIN: Point = Point::ORIGIN;

/// Straight-line distance `sqrt((x2-x1)^2 + (y2-y1)^2)`.
///
/// Non-finite coordinates are not special-cased; NaN and infinity propagate.
///
/// # Examples
///
/// ```
/// use shift_routing::distance::{euclidean, ORIGIN};
/// use shift_routing::models::Point;
///
/// assert!((euclidean(&ORIGIN, &Point::new(6.0, 8.0)) - 10.0).abs() < 1e-10);
/// ```
pub fn euclidean(p1: &Point, p2: &Point) -> f64 {
    p1.distance_to(p2)
}
