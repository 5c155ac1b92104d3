use std::fs;

use shift_routing::config::SchedulerConfig;
use shift_routing::constructive::{build_schedules, SelectionPolicy};
use shift_routing::evaluation::ScheduleEvaluator;
use shift_routing::fixtures::seeded_loads;
use shift_routing::io::{parse_loads, read_loads, render_plain};
use shift_routing::models::Point;
use shift_routing::validation::ValidationErrorKind;
use shift_routing::Error;

const PROBLEM: &str = "\
loadNumber pickup dropoff
1 (-50.1,80.0) (90.1,12.2)
2 (-24.5,-19.2) (98.5,1.8)
3 (0.3,8.9) (40.9,55.0)
4 (5.3,-61.1) (77.8,-5.4)
5 (-2.0,-1.0) (-3.0,-4.0)
";

#[test]
fn test_parse_schedule_render() {
    let loads = parse_loads(PROBLEM, Point::ORIGIN).expect("valid file");
    assert_eq!(loads.len(), 5);

    let config = SchedulerConfig::default();
    let solution = build_schedules(&loads, &config).expect("routable");
    let rendered = render_plain(&solution);

    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), solution.num_drivers());
    for line in &lines {
        assert!(line.starts_with('[') && line.ends_with(']'));
    }
    // load 5 has the nearest pickup to the origin
    assert!(lines[0].starts_with("[5"));

    let mut numbers: Vec<u32> = lines
        .iter()
        .flat_map(|l| l.trim_matches(|c| c == '[' || c == ']').split(','))
        .map(|n| n.parse().expect("number"))
        .collect();
    numbers.sort_unstable();
    assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_short_shift_needs_more_drivers() {
    let loads = parse_loads(PROBLEM, Point::ORIGIN).expect("valid file");
    let long = build_schedules(&loads, &SchedulerConfig::new(2000.0)).expect("routable");
    let short = build_schedules(&loads, &SchedulerConfig::new(400.0)).expect("routable");
    assert_eq!(long.num_drivers(), 1);
    assert!(short.num_drivers() > 1);
}

#[test]
fn test_read_from_file() {
    let path = std::env::temp_dir().join(format!("shift-routing-{}.txt", std::process::id()));
    fs::write(&path, PROBLEM).expect("writable temp dir");
    let loads = read_loads(&path, Point::ORIGIN);
    fs::remove_file(&path).ok();
    assert_eq!(loads.expect("valid file").len(), 5);
}

#[test]
fn test_unroutable_load_is_rejected() {
    let text = "header\n1 (0,0) (10,0)\n";
    let loads = parse_loads(text, Point::ORIGIN).expect("valid file");
    match build_schedules(&loads, &SchedulerConfig::new(5.0)) {
        Err(Error::Validation(errors)) => {
            assert_eq!(errors[0].kind, ValidationErrorKind::Unroutable);
            assert_eq!(errors[0].load_number, 1);
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn test_malformed_line_reports_line_number() {
    let text = "header\n1 (0,0) (10,0)\n\n3 (0,0) 10,0\n";
    match parse_loads(text, Point::ORIGIN) {
        Err(Error::Parse { line, .. }) => assert_eq!(line, 4),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn test_seeded_instances_are_feasible_under_both_policies() {
    for seed in 0..5 {
        let loads = seeded_loads(200, 120.0, seed);
        for policy in [SelectionPolicy::FirstFeasible, SelectionPolicy::StrictNearest] {
            let config = SchedulerConfig::default().with_policy(policy);
            let solution = build_schedules(&loads, &config).expect("routable");
            let evaluator = ScheduleEvaluator::new(&loads, &config);
            let (_, violations) = evaluator.evaluate_solution(&solution);
            assert!(violations.is_empty(), "seed {seed}, {policy}: {violations:?}");
            assert_eq!(solution.num_assigned(), 200);
        }
    }
}
