//! UI domain: tests for HUD text.

use super::{EMPTY_SLOT, best_time_line, last_run_line};

#[test]
fn test_best_time_line_numbers_from_one() {
    assert_eq!(best_time_line(0, Some(65.5)), "1. 01:05.500");
    assert_eq!(best_time_line(2, Some(9.004)), "3. 00:09.004");
}

#[test]
fn test_empty_best_time_slot() {
    assert_eq!(best_time_line(1, None), format!("2. {}", EMPTY_SLOT));
}

#[test]
fn test_last_run_line_marks_new_best() {
    assert_eq!(last_run_line(12.5, None), "Last 00:12.500");
    assert_eq!(last_run_line(12.5, Some(0)), "Last 00:12.500  new best #1");
}
