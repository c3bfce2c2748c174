//! Suggestion ranking.
//!
//! Tasks are ordered by priority (High first), then by due date (earliest
//! first). The sort is stable so tasks with equal keys keep store order.

use crate::error::{CoreError, Result};
use crate::task::Task;

/// Return the tasks in suggestion order without touching the input.
pub fn rank(tasks: &[Task]) -> Vec<&Task> {
    let mut ranked: Vec<&Task> = tasks.iter().collect();
    ranked.sort_by_key(|t| (t.priority.rank(), t.due_date));
    ranked
}

/// The task to work on next.
///
/// # Errors
///
/// Returns `EmptyCollection` when there are no tasks.
pub fn suggest(tasks: &[Task]) -> Result<&Task> {
    rank(tasks)
        .into_iter()
        .next()
        .ok_or_else(|| CoreError::EmptyCollection("no active tasks to suggest".into()))
}
