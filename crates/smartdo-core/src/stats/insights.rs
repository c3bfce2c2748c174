//! Productivity insights.
//!
//! Completed tasks carry no completion timestamp, so weekdays are taken from
//! the due date. All counts keep first-seen order, and the most productive
//! weekday is the first one to reach the highest count.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::task::Task;

/// Descriptive statistics over completed tasks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InsightsReport {
    /// Number of completed tasks
    pub total_completed: usize,
    /// Full weekday name ("Monday") with the most completed due dates
    pub most_productive_weekday: String,
    /// Completed tasks per weekday, first-seen order
    pub counts_by_weekday: IndexMap<String, usize>,
    /// Completed tasks per category, first-seen order
    pub counts_by_category: IndexMap<String, usize>,
}

fn tally(keys: impl Iterator<Item = String>) -> IndexMap<String, usize> {
    let mut counts = IndexMap::new();
    for key in keys {
        *counts.entry(key).or_insert(0) += 1;
    }
    counts
}

/// Summarize `completed` tasks.
///
/// # Errors
///
/// Returns `EmptyCollection` when no tasks have been completed.
pub fn aggregate(completed: &[Task]) -> Result<InsightsReport> {
    if completed.is_empty() {
        return Err(CoreError::EmptyCollection("no completed tasks yet".into()));
    }

    let counts_by_weekday = tally(completed.iter().map(|t| t.due_date.format("%A").to_string()));
    let counts_by_category = tally(completed.iter().map(|t| t.category.clone()));

    let mut most_productive: Option<(&String, usize)> = None;
    for (day, &count) in &counts_by_weekday {
        if most_productive.map_or(true, |(_, best)| count > best) {
            most_productive = Some((day, count));
        }
    }
    let most_productive_weekday = most_productive
        .map(|(day, _)| day.clone())
        .unwrap_or_default();

    Ok(InsightsReport {
        total_completed: completed.len(),
        most_productive_weekday,
        counts_by_weekday,
        counts_by_category,
    })
}
