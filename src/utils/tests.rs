use std::time::Duration;

use crate::utils::{
    UtilsError, format_elapsed, parse_number, parse_numbers, parse_numbers_lenient, summary_line,
};

#[test]
fn test_parse_number() {
    assert_eq!(parse_number("24"), Ok(24.0));
    assert_eq!(parse_number(" -1.5 "), Ok(-1.5));
    assert_eq!(
        parse_number("five"),
        Err(UtilsError::InvalidNumber("five".to_string()))
    );
}

#[test]
fn test_parse_number_rejects_non_finite() {
    assert_eq!(
        parse_number("inf"),
        Err(UtilsError::NonFiniteNumber("inf".to_string()))
    );
    assert!(parse_number("NaN").is_err());
}

#[test]
fn test_parse_numbers_stops_at_first_bad_token() {
    let result = parse_numbers(&["1", "5", "x", "y"]);
    assert_eq!(result, Err(UtilsError::InvalidNumber("x".to_string())));

    let result = parse_numbers(&["1", "5", "5", "5"]);
    assert_eq!(result, Ok(vec![1.0, 5.0, 5.0, 5.0]));
}

#[test]
fn test_parse_numbers_lenient() {
    assert_eq!(parse_numbers_lenient(&["4", "6"]), vec![4.0, 6.0]);
    assert!(parse_numbers_lenient(&["4", "six"]).is_empty());
}

#[test]
fn test_format_elapsed_units() {
    assert_eq!(
        format_elapsed(Duration::from_millis(12)),
        "(milliseconds): 12"
    );
    assert_eq!(
        format_elapsed(Duration::from_micros(450)),
        "(microseconds): 450"
    );
    assert_eq!(format_elapsed(Duration::from_nanos(80)), "(nanoseconds): 80");
}

#[test]
fn test_summary_line() {
    let elapsed = Duration::from_millis(3);
    assert_eq!(
        summary_line(0, elapsed),
        "-=- No solution, time taken (milliseconds): 3 -=-"
    );
    assert_eq!(
        summary_line(1, elapsed),
        "-=- 1 solution, time taken (milliseconds): 3 -=-"
    );
    assert_eq!(
        summary_line(42, elapsed),
        "-=- 42 solutions, time taken (milliseconds): 3 -=-"
    );
}
