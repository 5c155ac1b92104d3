//! Input validation for load sets.
//!
//! Checks loads before scheduling. Detects:
//! - Load number 0
//! - Duplicate load numbers
//! - Non-finite coordinates
//! - Loads whose return allowance was measured to a different origin
//! - Loads that not even a fresh driver can serve within one shift

use std::collections::HashSet;

use crate::config::SchedulerConfig;
use crate::distance::euclidean;
use crate::evaluation::{can_pickup, leg_cost};
use crate::models::Load;

/// Relative tolerance when comparing a load's stored return allowance with
/// the distance to the configured origin.
const ORIGIN_TOLERANCE: f64 = 1e-9;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Load the error refers to.
    pub load_number: u32,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Load numbers must be positive.
    InvalidLoadNumber,
    /// Two loads share the same number.
    DuplicateLoadNumber,
    /// A pickup or dropoff coordinate is NaN or infinite.
    NonFiniteCoordinate,
    /// The load was built against a different origin than the scheduler's.
    OriginMismatch,
    /// Origin to pickup, delivery, and return exceed the shift.
    Unroutable,
}

impl ValidationError {
    pub(crate) fn new(
        kind: ValidationErrorKind,
        load_number: u32,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            load_number,
            message: message.into(),
        }
    }
}

/// Validates the loads for a scheduling run.
///
/// Checks:
/// 1. Every load number is positive
/// 2. No load number repeats
/// 3. All coordinates are finite
/// 4. Every load's return allowance is measured to `config.origin()`
/// 5. Every load fits a shift on its own, starting from the origin
///
/// Loads failing check 3 or 4 are not checked for routability.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
///
/// # Examples
///
/// ```
/// use shift_routing::config::SchedulerConfig;
/// use shift_routing::models::{Load, Point};
/// use shift_routing::validation::{validate_loads, ValidationErrorKind};
///
/// let loads = vec![
///     Load::new(1, Point::new(0.0, 0.0), Point::new(10.0, 0.0)),
///     Load::new(1, Point::new(5.0, 0.0), Point::new(6.0, 0.0)),
/// ];
/// let errors = validate_loads(&loads, &SchedulerConfig::default()).unwrap_err();
/// assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateLoadNumber);
/// ```
pub fn validate_loads(loads: &[Load], config: &SchedulerConfig) -> ValidationResult {
    let mut errors = Vec::new();
    let mut numbers = HashSet::with_capacity(loads.len());
    let origin = config.origin();
    let max_drive_time = config.max_drive_time();

    for load in loads {
        let number = load.load_number();

        if number == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidLoadNumber,
                number,
                "load number must be positive, got 0",
            ));
        }

        if !numbers.insert(number) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateLoadNumber,
                number,
                format!("duplicate load number {number}"),
            ));
        }

        if !load.is_finite() {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonFiniteCoordinate,
                number,
                format!(
                    "load {number} has non-finite coordinates: {} -> {}",
                    load.pickup(),
                    load.dropoff()
                ),
            ));
            continue;
        }

        let expected = euclidean(&load.dropoff(), &origin);
        if (load.distance_to_origin() - expected).abs() > ORIGIN_TOLERANCE * expected.max(1.0) {
            errors.push(ValidationError::new(
                ValidationErrorKind::OriginMismatch,
                number,
                format!(
                    "load {number} returns {:.2} to its origin, expected {expected:.2}",
                    load.distance_to_origin()
                ),
            ));
            continue;
        }

        if !can_pickup(&origin, 0.0, load, max_drive_time) {
            errors.push(ValidationError::new(
                ValidationErrorKind::Unroutable,
                number,
                format!(
                    "load {number} needs {:.2} drive time from the origin, shift is {}",
                    leg_cost(&origin, load),
                    max_drive_time
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
