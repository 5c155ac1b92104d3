//! Candidate selection policies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How a driver picks the next load among undelivered candidates ordered
/// by pickup distance (ties by lowest load number).
///
/// The two policies are not interchangeable: when the nearest load is
/// infeasible but a farther one fits, `StrictNearest` ends the schedule
/// while `FirstFeasible` skips ahead and keeps going.
///
/// # Examples
///
/// ```
/// use shift_routing::constructive::SelectionPolicy;
///
/// let p: SelectionPolicy = "strict-nearest".parse().unwrap();
/// assert_eq!(p, SelectionPolicy::StrictNearest);
/// assert_eq!(SelectionPolicy::default().to_string(), "first-feasible");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionPolicy {
    /// Take the nearest load that passes the feasibility check.
    #[default]
    FirstFeasible,
    /// Consider only the nearest load; end the schedule if it does not fit.
    StrictNearest,
}

impl SelectionPolicy {
    /// Kebab-case name, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionPolicy::FirstFeasible => "first-feasible",
            SelectionPolicy::StrictNearest => "strict-nearest",
        }
    }
}

impl fmt::Display for SelectionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SelectionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first-feasible" => Ok(SelectionPolicy::FirstFeasible),
            "strict-nearest" => Ok(SelectionPolicy::StrictNearest),
            other => Err(format!(
                "unknown policy '{other}' (expected first-feasible or strict-nearest)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_parse() {
        assert_eq!("first-feasible".parse(), Ok(SelectionPolicy::FirstFeasible));
        assert_eq!("strict-nearest".parse(), Ok(SelectionPolicy::StrictNearest));
        assert!("nearest".parse::<SelectionPolicy>().is_err());
    }

    #[test]
    fn test_policy_display_round_trip() {
        for p in [SelectionPolicy::FirstFeasible, SelectionPolicy::StrictNearest] {
            assert_eq!(p.to_string().parse::<SelectionPolicy>(), Ok(p));
        }
    }
}
