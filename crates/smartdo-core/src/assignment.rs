//! Priority assignment: turning raw user input into a [`Task`].
//!
//! This is the only place a priority is ever computed. The resulting task
//! keeps that priority even after `days_left` goes stale.

use chrono::NaiveDate;
use tracing::debug;

use crate::classifier::Classifier;
use crate::error::{CoreError, Result};
use crate::task::{normalize_category, Importance, Recurrence, Task, TaskInput};

/// Date format accepted for due dates.
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` due date.
pub fn parse_due_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DUE_DATE_FORMAT).map_err(|e| {
        CoreError::invalid("due_date", format!("'{}' is not a YYYY-MM-DD date ({e})", raw.trim()))
    })
}

/// Parse a positive number of minutes.
pub fn parse_estimated_time(raw: &str) -> Result<u32> {
    let raw = raw.trim();
    let minutes: i64 = raw
        .parse()
        .map_err(|_| CoreError::invalid("estimated_time", format!("'{raw}' is not a whole number of minutes")))?;
    if minutes <= 0 {
        return Err(CoreError::invalid("estimated_time", "must be greater than zero"));
    }
    u32::try_from(minutes).map_err(|_| CoreError::invalid("estimated_time", format!("{minutes} is too large")))
}

/// Parse `low`, `medium` or `high` in any case.
pub fn parse_importance(raw: &str) -> Result<Importance> {
    Importance::parse(raw).ok_or_else(|| {
        CoreError::invalid("importance", format!("'{}' is not one of Low, Medium, High", raw.trim()))
    })
}

/// Validate `input` and build a task whose priority comes from `classifier`.
///
/// `today` anchors `days_left`; a due date in the past is accepted and
/// yields a negative `days_left`.
///
/// # Errors
///
/// Returns `InvalidInput` naming the first offending field. The classifier
/// is not consulted unless every field is valid.
pub fn create_task(input: &TaskInput, today: NaiveDate, classifier: &dyn Classifier) -> Result<Task> {
    let title = input.title.trim();
    if title.is_empty() {
        return Err(CoreError::invalid("title", "must not be empty"));
    }

    let due_date = parse_due_date(&input.due_date)?;
    let days_left = (due_date - today).num_days();
    let estimated_time = parse_estimated_time(&input.estimated_time)?;
    let importance = parse_importance(&input.importance)?;

    let priority = classifier.classify(estimated_time, days_left, importance.score());
    debug!(
        title,
        estimated_time,
        days_left,
        importance = importance.score(),
        %priority,
        "classified task"
    );

    Ok(Task {
        title: title.to_string(),
        description: input.description.trim().to_string(),
        due_date,
        estimated_time,
        importance,
        priority,
        category: normalize_category(&input.category),
        recurrence: Recurrence::normalize(&input.recurrence),
    })
}
