//! Task types.
//!
//! A [`Task`] is created once by [`crate::assignment::create_task`] and is
//! never edited afterwards. Its priority is a snapshot of the classifier's
//! verdict at creation time.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Computed urgency label.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PriorityLabel {
    Low,
    Medium,
    High,
}

impl PriorityLabel {
    /// All labels, most urgent first.
    pub const ALL: [PriorityLabel; 3] = [PriorityLabel::High, PriorityLabel::Medium, PriorityLabel::Low];

    /// Sort rank used by the suggestion engine (High=1, Medium=2, Low=3).
    pub fn rank(&self) -> u8 {
        match self {
            PriorityLabel::High => 1,
            PriorityLabel::Medium => 2,
            PriorityLabel::Low => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PriorityLabel::Low => "Low",
            PriorityLabel::Medium => "Medium",
            PriorityLabel::High => "High",
        }
    }
}

impl fmt::Display for PriorityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User-declared importance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Importance {
    Low,
    Medium,
    High,
}

impl Importance {
    /// Case-insensitive parse of `low`, `medium` or `high`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "low" => Some(Importance::Low),
            "medium" => Some(Importance::Medium),
            "high" => Some(Importance::High),
            _ => None,
        }
    }

    /// Classifier input score: Low=1, Medium=2, High=3.
    pub fn score(&self) -> u8 {
        match self {
            Importance::Low => 1,
            Importance::Medium => 2,
            Importance::High => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Importance::Low => "Low",
            Importance::Medium => "Medium",
            Importance::High => "High",
        }
    }
}

impl fmt::Display for Importance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declared recurrence. Stored for display only; nothing expands it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Recurrence {
    #[default]
    None,
    Daily,
    Weekly,
}

impl Recurrence {
    /// Normalize free text: `daily` and `weekly` (any case) are kept,
    /// everything else collapses to [`Recurrence::None`].
    pub fn normalize(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "daily" => Recurrence::Daily,
            "weekly" => Recurrence::Weekly,
            _ => Recurrence::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Recurrence::None => "none",
            Recurrence::Daily => "daily",
            Recurrence::Weekly => "weekly",
        }
    }
}

impl fmt::Display for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capitalize the first character and lower-case the rest ("wORK" -> "Work").
pub fn normalize_category(raw: &str) -> String {
    let mut chars = raw.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Raw, unvalidated task fields as typed by the user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskInput {
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub estimated_time: String,
    pub importance: String,
    pub category: String,
    pub recurrence: String,
}

/// One unit of work.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    /// Task title (not necessarily unique)
    pub title: String,
    /// Free text, may be empty
    pub description: String,
    /// Calendar due date
    pub due_date: NaiveDate,
    /// Estimated effort in minutes, always positive
    pub estimated_time: u32,
    /// User-declared importance
    pub importance: Importance,
    /// Priority assigned at creation; never recomputed
    pub priority: PriorityLabel,
    /// Capitalized category name
    pub category: String,
    pub recurrence: Recurrence,
}

impl Task {
    /// Signed number of days from `today` until the due date.
    pub fn days_left(&self, today: NaiveDate) -> i64 {
        (self.due_date - today).num_days()
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.days_left(today) < 0
    }
}
