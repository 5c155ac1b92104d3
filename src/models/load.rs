//! Delivery load type.

use serde::Serialize;

use super::Point;
use crate::distance::euclidean;

/// A single pickup-to-dropoff delivery job.
///
/// Distances are derived once at construction and never recomputed:
/// the pickup-to-dropoff `distance`, the dropoff-to-origin return
/// allowance, and the origin-to-pickup approach.
///
/// # Examples
///
/// ```
/// use shift_routing::models::{Load, Point};
///
/// let load = Load::new(1, Point::new(0.0, 0.0), Point::new(3.0, 4.0));
/// assert_eq!(load.load_number(), 1);
/// assert!((load.distance() - 5.0).abs() < 1e-10);
/// assert!((load.distance_to_origin() - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Load {
    load_number: u32,
    pickup: Point,
    dropoff: Point,
    distance: f64,
    distance_to_origin: f64,
    distance_from_origin: f64,
}

impl Load {
    /// Creates a load whose return allowance is measured to `(0, 0)`.
    pub fn new(load_number: u32, pickup: Point, dropoff: Point) -> Self {
        Self::with_origin(load_number, pickup, dropoff, Point::ORIGIN)
    }

    /// Creates a load whose return allowance is measured to `origin`.
    pub fn with_origin(load_number: u32, pickup: Point, dropoff: Point, origin: Point) -> Self {
        Self {
            load_number,
            pickup,
            dropoff,
            distance: euclidean(&pickup, &dropoff),
            distance_to_origin: euclidean(&dropoff, &origin),
            distance_from_origin: euclidean(&origin, &pickup),
        }
    }

    /// Load number, used only to label output.
    pub fn load_number(&self) -> u32 {
        self.load_number
    }

    /// Pickup location.
    pub fn pickup(&self) -> Point {
        self.pickup
    }

    /// Dropoff location.
    pub fn dropoff(&self) -> Point {
        self.dropoff
    }

    /// Pickup to dropoff distance.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Dropoff to origin distance (the return allowance).
    pub fn distance_to_origin(&self) -> f64 {
        self.distance_to_origin
    }

    /// Origin to pickup distance.
    pub fn distance_from_origin(&self) -> f64 {
        self.distance_from_origin
    }

    /// Returns `true` if both points have finite coordinates.
    pub fn is_finite(&self) -> bool {
        self.pickup.is_finite() && self.dropoff.is_finite()
    }
}
