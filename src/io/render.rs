//! Schedule renderers.

use crate::error::Result;
use crate::models::Solution;

/// Formats one schedule as a bracketed, comma-separated list: `[3,1,7]`.
///
/// # Examples
///
/// ```
/// use shift_routing::io::format_schedule;
///
/// assert_eq!(format_schedule(&[3, 1, 7]), "[3,1,7]");
/// assert_eq!(format_schedule(&[]), "[]");
/// ```
pub fn format_schedule(load_numbers: &[u32]) -> String {
    let items: Vec<String> = load_numbers.iter().map(|n| n.to_string()).collect();
    format!("[{}]", items.join(","))
}

/// Renders every schedule on its own line, in creation order.
pub fn render_plain(solution: &Solution) -> String {
    solution
        .schedules()
        .iter()
        .map(|s| format_schedule(&s.load_numbers()) + "\n")
        .collect()
}

/// Renders the whole solution, stops and drive times included, as JSON.
pub fn render_json(solution: &Solution) -> Result<String> {
    Ok(serde_json::to_string_pretty(solution)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SchedulerConfig;
    use crate::evaluation::ScheduleEvaluator;
    use crate::models::{Load, Point};

    fn solution() -> Solution {
        let loads = vec![
            Load::new(1, Point::new(0.0, 0.0), Point::new(10.0, 0.0)),
            Load::new(2, Point::new(10.0, 0.0), Point::new(20.0, 0.0)),
            Load::new(3, Point::new(0.0, 5.0), Point::new(0.0, 6.0)),
        ];
        let config = SchedulerConfig::default();
        let eval = ScheduleEvaluator::new(&loads, &config);
        let mut sol = Solution::new();
        sol.add_schedule(eval.build_schedule(0, &[3, 1]).0);
        sol.add_schedule(eval.build_schedule(1, &[2]).0);
        sol
    }

    #[test]
    fn test_render_plain() {
        assert_eq!(render_plain(&solution()), "[3,1]\n[2]\n");
        assert_eq!(render_plain(&Solution::new()), "");
    }

    #[test]
    fn test_render_json() {
        let json = render_json(&solution()).expect("serializable");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        let schedules = value["schedules"].as_array().expect("array");
        assert_eq!(schedules.len(), 2);
        assert_eq!(schedules[0]["stops"][0]["load_number"], 3);
        assert_eq!(schedules[1]["driver_id"], 1);
    }
}
