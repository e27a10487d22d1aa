//! Greedy maximum-count activity selection.
//!
//! Recommends the largest set of mutually non-overlapping activities
//! from a candidate list.
//!
//! # Algorithm
//!
//! Classic earliest-finish-time interval scheduling. Sort by end time
//! ascending (stable, so ties keep input order), then scan once: accept
//! an activity when it starts at or after the last accepted end.
//! Optimal for the count of selected activities.
//!
//! Known, intentional limitations: the selection ignores `priority`
//! (carried through for display only) and does not maximize total
//! covered time. Do not "fix" either without changing the contract.
//!
//! # Reference
//! Kleinberg & Tardos (2006), "Algorithm Design", Ch. 4.1

use crate::models::{Activity, Schedule, TimeOfDay};

/// Selects a maximal-count non-overlapping subset of `activities`.
///
/// Never fails; empty input yields an empty schedule. Input order is
/// irrelevant except for tie-breaking among equal end times. Running
/// `select` on its own output returns it unchanged.
///
/// # Example
///
/// ```
/// use campus_nav::models::{Activity, TimeOfDay};
/// use campus_nav::scheduler::select;
///
/// let activities = vec![
///     Activity::new("Algorithms", "ECS", TimeOfDay::new(9, 0), TimeOfDay::new(10, 0)),
///     Activity::new("Club", "TSU", TimeOfDay::new(9, 30), TimeOfDay::new(10, 30)),
///     Activity::new("Gym", "SRC", TimeOfDay::new(10, 0), TimeOfDay::new(11, 0)),
/// ];
///
/// let schedule = select(&activities);
/// assert_eq!(schedule.activity_count(), 2);
/// ```
pub fn select(activities: &[Activity]) -> Schedule {
    let mut sorted: Vec<Activity> = activities.to_vec();
    sorted.sort_by_key(|a| a.end);

    let mut selected = Vec::new();
    let mut last_end: Option<TimeOfDay> = None;

    for activity in sorted {
        let fits = match last_end {
            None => true,
            Some(end) => activity.start >= end,
        };
        if fits {
            last_end = Some(activity.end);
            selected.push(activity);
        }
    }

    Schedule {
        activities: selected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;

    fn activity(title: &str, start: (u16, u16), end: (u16, u16)) -> Activity {
        Activity::new(
            title,
            "TSU",
            TimeOfDay::new(start.0, start.1),
            TimeOfDay::new(end.0, end.1),
        )
    }

    fn titles(schedule: &Schedule) -> Vec<&str> {
        schedule.iter().map(|a| a.title.as_str()).collect()
    }

    #[test]
    fn test_empty_input() {
        let s = select(&[]);
        assert!(s.is_empty());
    }

    #[test]
    fn test_single_activity() {
        let s = select(&[activity("A", (9, 0), (10, 0))]);
        assert_eq!(titles(&s), vec!["A"]);
    }

    #[test]
    fn test_reference_scenario() {
        // Middle activity overlaps both others; greedy takes the outer two.
        let input = vec![
            activity("First", (9, 0), (10, 0)),
            activity("Middle", (9, 30), (10, 30)),
            activity("Last", (10, 0), (11, 0)),
        ];
        let s = select(&input);
        assert_eq!(titles(&s), vec!["First", "Last"]);
    }

    #[test]
    fn test_input_order_irrelevant() {
        let mut input = vec![
            activity("Last", (10, 0), (11, 0)),
            activity("Middle", (9, 30), (10, 30)),
            activity("First", (9, 0), (10, 0)),
        ];
        let s = select(&input);
        assert_eq!(titles(&s), vec!["First", "Last"]);

        input.reverse();
        assert_eq!(select(&input), s);
    }

    #[test]
    fn test_back_to_back_both_accepted() {
        let input = vec![
            activity("A", (9, 0), (10, 0)),
            activity("B", (10, 0), (11, 0)),
        ];
        let s = select(&input);
        assert_eq!(s.activity_count(), 2);
    }

    #[test]
    fn test_identical_intervals_keep_one() {
        let input = vec![
            activity("A", (9, 0), (10, 0)),
            activity("A", (9, 0), (10, 0)),
        ];
        let s = select(&input);
        assert_eq!(s.activity_count(), 1);
    }

    #[test]
    fn test_priority_never_influences_selection() {
        // The high-priority activity loses because it overlaps two others.
        let input = vec![
            activity("First", (9, 0), (10, 0)),
            activity("Important", (9, 30), (10, 30)).with_priority(Priority::High),
            activity("Last", (10, 0), (11, 0)),
        ];
        let s = select(&input);
        assert_eq!(titles(&s), vec!["First", "Last"]);
    }

    #[test]
    fn test_priority_carried_through() {
        let input = vec![activity("Solo", (9, 0), (10, 0)).with_priority(Priority::High)];
        let s = select(&input);
        assert_eq!(s.activities[0].priority, Priority::High);
    }

    #[test]
    fn test_equal_end_times_keep_input_order() {
        // Both end at 10:00 and overlap; the stable sort keeps "A" first
        // and the scan accepts it.
        let input = vec![
            activity("A", (9, 0), (10, 0)),
            activity("B", (9, 15), (10, 0)),
        ];
        let s = select(&input);
        assert_eq!(titles(&s), vec!["A"]);
    }

    #[test]
    fn test_idempotent_on_own_output() {
        let input = vec![
            activity("A", (8, 0), (9, 30)),
            activity("B", (9, 0), (10, 0)),
            activity("C", (9, 45), (11, 0)),
            activity("D", (11, 0), (12, 0)),
            activity("E", (11, 30), (12, 30)),
        ];
        let once = select(&input);
        let twice = select(&once.activities);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_result_is_non_overlapping_and_end_sorted() {
        let input = vec![
            activity("A", (13, 0), (14, 0)),
            activity("B", (8, 0), (12, 0)),
            activity("C", (9, 0), (9, 30)),
            activity("D", (9, 15), (13, 30)),
            activity("E", (14, 0), (15, 0)),
        ];
        let s = select(&input);
        for pair in s.activities.windows(2) {
            assert!(pair[0].end <= pair[1].start, "overlap in result");
            assert!(pair[0].end <= pair[1].end, "result not end-sorted");
        }
    }

    #[test]
    fn test_maximizes_count_not_duration() {
        // One long activity vs three short ones that fit together.
        let input = vec![
            activity("Long", (9, 0), (17, 0)),
            activity("S1", (9, 0), (10, 0)),
            activity("S2", (10, 0), (11, 0)),
            activity("S3", (11, 0), (12, 0)),
        ];
        let s = select(&input);
        assert_eq!(titles(&s), vec!["S1", "S2", "S3"]);
    }
}
