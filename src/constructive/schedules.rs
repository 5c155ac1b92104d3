//! Validated entry point for schedule construction.

use tracing::info;

use super::nearest_neighbor;
use crate::config::SchedulerConfig;
use crate::error::{Error, Result};
use crate::models::{Load, Solution};
use crate::validation::validate_loads;

/// Partitions `loads` into driver schedules.
///
/// The configuration and the loads are validated first, so every load in a
/// successful result appears in exactly one schedule and every schedule fits
/// the shift. Empty input yields an empty solution.
///
/// # Errors
///
/// * [`Error::Config`] — unusable shift length or origin
/// * [`Error::Validation`] — duplicate or zero load numbers, non-finite
///   coordinates, loads built against another origin, or loads no driver
///   can serve within one shift
///
/// # Examples
///
/// ```
/// use shift_routing::config::SchedulerConfig;
/// use shift_routing::constructive::build_schedules;
/// use shift_routing::models::{Load, Point};
///
/// let loads = vec![Load::new(1, Point::new(0.0, 0.0), Point::new(10.0, 0.0))];
///
/// let ok = build_schedules(&loads, &SchedulerConfig::new(100.0)).unwrap();
/// assert_eq!(ok.load_numbers(), vec![vec![1]]);
///
/// assert!(build_schedules(&loads, &SchedulerConfig::new(5.0)).is_err());
/// ```
pub fn build_schedules(loads: &[Load], config: &SchedulerConfig) -> Result<Solution> {
    config.validate()?;
    validate_loads(loads, config).map_err(Error::Validation)?;

    let solution = nearest_neighbor(loads, config);
    info!(
        loads = loads.len(),
        drivers = solution.num_drivers(),
        policy = %config.policy(),
        "scheduling finished"
    );
    Ok(solution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Point;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_build_empty() {
        let sol = build_schedules(&[], &SchedulerConfig::default()).expect("empty is fine");
        assert_eq!(sol.num_drivers(), 0);
    }

    #[test]
    fn test_build_rejects_unroutable() {
        let loads = vec![Load::new(1, Point::new(0.0, 0.0), Point::new(10.0, 0.0))];
        let err = build_schedules(&loads, &SchedulerConfig::new(5.0)).unwrap_err();
        match err {
            Error::Validation(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].kind, ValidationErrorKind::Unroutable);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_build_rejects_load_built_for_other_origin() {
        // would otherwise be scheduled as 100 out and 0 back under a 150 shift
        let loads = vec![Load::new(1, Point::new(100.0, 0.0), Point::new(0.0, 0.0))];
        let config = SchedulerConfig::new(150.0).with_origin(Point::new(100.0, 0.0));
        match build_schedules(&loads, &config).unwrap_err() {
            Error::Validation(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].kind, ValidationErrorKind::OriginMismatch);
            }
            other => panic!("unexpected error: {other}"),
        }

        let rebuilt = vec![Load::with_origin(
            1,
            Point::new(100.0, 0.0),
            Point::new(0.0, 0.0),
            config.origin(),
        )];
        assert!(build_schedules(&rebuilt, &config).is_err());
        assert!(build_schedules(&rebuilt, &config.clone().with_max_drive_time(200.0)).is_ok());
    }

    #[test]
    fn test_build_rejects_bad_config() {
        let err = build_schedules(&[], &SchedulerConfig::new(-1.0)).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_build_assigns_everything() {
        let loads = vec![
            Load::new(1, Point::new(0.0, 0.0), Point::new(10.0, 0.0)),
            Load::new(2, Point::new(0.0, 50.0), Point::new(0.0, 60.0)),
            Load::new(3, Point::new(-40.0, 0.0), Point::new(-45.0, 5.0)),
        ];
        let sol = build_schedules(&loads, &SchedulerConfig::new(130.0)).expect("routable");
        assert_eq!(sol.num_assigned(), 3);
        assert_eq!(sol.num_unassigned(), 0);
    }
}
