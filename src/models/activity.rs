//! Activity model.
//!
//! An activity is a single time-bounded commitment at a campus location:
//! a class, a club meeting, a gym slot. Activities are the input to the
//! greedy scheduler; the scheduler only looks at start and end times.

use serde::{Deserialize, Serialize};

use super::TimeOfDay;

/// A time-bounded activity at a named campus location.
///
/// Invariant (enforced at ingestion, see `validation`): `end` is strictly
/// after `start`, and `location` names a building in the campus graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Display title (e.g. course or event name).
    pub title: String,
    /// Building where the activity takes place.
    pub location: String,
    /// Start time of day.
    pub start: TimeOfDay,
    /// End time of day. Strictly after `start` for valid records.
    pub end: TimeOfDay,
    /// Importance for display purposes only. Never consulted by the
    /// scheduler, which maximizes activity count.
    #[serde(default)]
    pub priority: Priority,
}

impl Activity {
    /// Creates an activity with the default (`Medium`) priority.
    pub fn new(
        title: impl Into<String>,
        location: impl Into<String>,
        start: TimeOfDay,
        end: TimeOfDay,
    ) -> Self {
        Self {
            title: title.into(),
            location: location.into(),
            start,
            end,
            priority: Priority::default(),
        }
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Duration in minutes. Zero for inverted records.
    pub fn duration_minutes(&self) -> u16 {
        self.end.minutes().saturating_sub(self.start.minutes())
    }

    /// Whether this activity's time range overlaps another's.
    ///
    /// Back-to-back activities (one ends exactly when the other starts)
    /// do not overlap.
    pub fn overlaps(&self, other: &Activity) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Display importance of an activity.
///
/// Carried through scheduling untouched; selection order is determined
/// purely by end times.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}
