//! Ingestion checks for activity records.
//!
//! Activity records arrive from an external source (a parsed task file)
//! and may reference buildings that do not exist or carry inverted time
//! ranges. These checks run at ingestion, before records ever reach the
//! scheduler; the scheduler itself has no error conditions.
//!
//! Detects:
//! - Unknown locations (not present in the campus graph)
//! - Inverted or empty time ranges (end not strictly after start)

use crate::graph::Graph;
use crate::models::Activity;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error for one activity record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of activity record errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The record's location is not a building in the graph.
    UnknownLocation,
    /// The record's end time is not strictly after its start time.
    InvalidTimeRange,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates activity records against the campus graph.
///
/// Checks every record and reports all problems, not just the first:
/// 1. The location names a building in `graph`.
/// 2. The end time is strictly after the start time.
///
/// # Returns
/// `Ok(())` if all records are valid, `Err(errors)` with every issue.
pub fn validate_activities(activities: &[Activity], graph: &Graph) -> ValidationResult {
    let mut errors = Vec::new();

    for activity in activities {
        if !graph.contains(&activity.location) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownLocation,
                format!(
                    "Activity '{}' references unknown location '{}'",
                    activity.title, activity.location
                ),
            ));
        }
        if activity.end <= activity.start {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidTimeRange,
                format!(
                    "Activity '{}' must end after it starts ({} - {})",
                    activity.title, activity.start, activity.end
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Splits records into valid activities and the errors for the rest.
///
/// Ingestion keeps going past bad records: valid ones are kept in their
/// original order, invalid ones are dropped and reported. A record with
/// multiple problems contributes one error per problem.
pub fn partition_valid(
    activities: Vec<Activity>,
    graph: &Graph,
) -> (Vec<Activity>, Vec<ValidationError>) {
    let mut valid = Vec::with_capacity(activities.len());
    let mut errors = Vec::new();

    for activity in activities {
        match validate_activities(std::slice::from_ref(&activity), graph) {
            Ok(()) => valid.push(activity),
            Err(mut errs) => errors.append(&mut errs),
        }
    }

    (valid, errors)
}
