//! Schedule (recommendation) model.
//!
//! A schedule is the output of greedy interval selection: activities
//! sorted by end time, pairwise non-overlapping.

use serde::{Deserialize, Serialize};

use super::Activity;

/// An ordered, non-overlapping subset of activities.
///
/// Produced fresh by each `scheduler::select` call; owned by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Selected activities, sorted by end time ascending.
    pub activities: Vec<Activity>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of selected activities.
    pub fn activity_count(&self) -> usize {
        self.activities.len()
    }

    /// Whether no activities were selected.
    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Iterates over the selected activities in end-time order.
    pub fn iter(&self) -> std::slice::Iter<'_, Activity> {
        self.activities.iter()
    }

    /// Total committed time in minutes across all selected activities.
    pub fn total_minutes(&self) -> u32 {
        self.activities
            .iter()
            .map(|a| u32::from(a.duration_minutes()))
            .sum()
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a Activity;
    type IntoIter = std::slice::Iter<'a, Activity>;

    fn into_iter(self) -> Self::IntoIter {
        self.activities.iter()
    }
}
