//! In-memory task store.
//!
//! Owns the ordered active and completed collections. A task lives in
//! exactly one of them; [`TaskStore::complete`] moves it across.

use tracing::info;

use crate::error::{CoreError, Result};
use crate::task::Task;

/// Active and completed tasks for one session.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    active: Vec<Task>,
    completed: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a task to the end of the active list.
    pub fn add(&mut self, task: Task) {
        self.active.push(task);
    }

    pub fn active(&self) -> &[Task] {
        &self.active
    }

    pub fn completed(&self) -> &[Task] {
        &self.completed
    }

    /// Move the task at 1-based `index` from the active list to the end of
    /// the completed list and return it.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `index` is 0 or past the end; neither
    /// list is touched in that case.
    pub fn complete(&mut self, index: usize) -> Result<&Task> {
        let len = self.active.len();
        if index == 0 || index > len {
            return Err(CoreError::IndexOutOfRange { index, len });
        }

        let task = self.active.remove(index - 1);
        info!(title = %task.title, index, "task completed");
        self.completed.push(task);
        self.completed
            .last()
            .ok_or_else(|| CoreError::EmptyCollection("completed tasks".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{Importance, PriorityLabel, Recurrence};
    use chrono::NaiveDate;

    fn task(title: &str) -> Task {
        Task {
            title: title.into(),
            description: String::new(),
            due_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            estimated_time: 30,
            importance: Importance::Medium,
            priority: PriorityLabel::Medium,
            category: "Work".into(),
            recurrence: Recurrence::None,
        }
    }

    fn titles(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.title.as_str()).collect()
    }

    fn store_of(names: &[&str]) -> TaskStore {
        let mut store = TaskStore::new();
        for name in names {
            store.add(task(name));
        }
        store
    }

    #[test]
    fn add_preserves_order() {
        let store = store_of(&["T1", "T2", "T3"]);
        assert_eq!(titles(store.active()), ["T1", "T2", "T3"]);
        assert!(store.completed().is_empty());
    }

    #[test]
    fn complete_moves_exactly_one_task() {
        let mut store = store_of(&["T1", "T2", "T3"]);
        let done = store.complete(2).unwrap();
        assert_eq!(done.title, "T2");
        assert_eq!(titles(store.active()), ["T1", "T3"]);
        assert_eq!(titles(store.completed()), ["T2"]);
    }

    #[test]
    fn completed_tasks_append_at_end() {
        let mut store = store_of(&["T1", "T2", "T3"]);
        store.complete(3).unwrap();
        let last = store.complete(1).unwrap().title.clone();
        assert_eq!(last, "T1");
        assert_eq!(titles(store.active()), ["T2"]);
        assert_eq!(titles(store.completed()), ["T3", "T1"]);
    }

    #[test]
    fn out_of_range_leaves_store_unchanged() {
        let mut store = store_of(&["T1", "T2", "T3"]);
        for index in [0, 4, 100] {
            let err = store.complete(index).unwrap_err();
            assert!(matches!(err, CoreError::IndexOutOfRange { len: 3, .. }));
        }
        assert_eq!(titles(store.active()), ["T1", "T2", "T3"]);
        assert!(store.completed().is_empty());
    }

    #[test]
    fn complete_on_empty_store() {
        let mut store = TaskStore::new();
        assert!(matches!(
            store.complete(1),
            Err(CoreError::IndexOutOfRange { index: 1, len: 0 })
        ));
    }
}
