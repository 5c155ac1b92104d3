//! Scheduler configuration.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::constructive::SelectionPolicy;
use crate::error::{Error, Result};
use crate::models::Point;

/// Default shift length: 12 hours in input distance units.
pub const DEFAULT_MAX_DRIVE_TIME: f64 = 720.0;

/// Parameters shared by every driver in a run.
///
/// # Examples
///
/// ```
/// use shift_routing::config::SchedulerConfig;
/// use shift_routing::constructive::SelectionPolicy;
/// use shift_routing::models::Point;
///
/// let config = SchedulerConfig::default()
///     .with_max_drive_time(100.0)
///     .with_policy(SelectionPolicy::StrictNearest);
/// assert_eq!(config.max_drive_time(), 100.0);
/// assert_eq!(config.origin(), Point::ORIGIN);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SchedulerConfig {
    origin: Point,
    max_drive_time: f64,
    policy: SelectionPolicy,
}

impl SchedulerConfig {
    /// Creates a configuration with the default origin and policy.
    pub fn new(max_drive_time: f64) -> Self {
        Self {
            max_drive_time,
            ..Self::default()
        }
    }

    /// Reads a configuration from a JSON file. Missing fields take defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the origin.
    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    /// Sets the shift length.
    pub fn with_max_drive_time(mut self, max_drive_time: f64) -> Self {
        self.max_drive_time = max_drive_time;
        self
    }

    /// Sets the candidate selection policy.
    pub fn with_policy(mut self, policy: SelectionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Where shifts start and end.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Shift length in drive time units.
    pub fn max_drive_time(&self) -> f64 {
        self.max_drive_time
    }

    /// Candidate selection policy.
    pub fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    /// Rejects a non-positive or non-finite shift length and a non-finite origin.
    pub fn validate(&self) -> Result<()> {
        if !self.max_drive_time.is_finite() || self.max_drive_time <= 0.0 {
            return Err(Error::Config(format!(
                "max_drive_time must be a positive finite number, got {}",
                self.max_drive_time
            )));
        }
        if !self.origin.is_finite() {
            return Err(Error::Config(format!(
                "origin must have finite coordinates, got {}",
                self.origin
            )));
        }
        Ok(())
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            origin: Point::ORIGIN,
            max_drive_time: DEFAULT_MAX_DRIVE_TIME,
            policy: SelectionPolicy::default(),
        }
    }
}
