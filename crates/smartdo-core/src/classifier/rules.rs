//! Rule-table priority classifier.
//!
//! Score = urgency + 2 * importance - effort penalty, where
//!
//! - urgency: 3 when due within a day (or overdue), 2 within three days, else 1
//! - effort penalty: 1 when the task needs more than `long_task_minutes`
//!
//! The score is then bucketed: `>= high_threshold` is High,
//! `>= medium_threshold` is Medium, anything lower is Low.

use serde::{Deserialize, Serialize};

use super::Classifier;
use crate::task::PriorityLabel;

/// Fixed scoring rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleClassifier {
    /// Minimum score for High (default 8)
    pub high_threshold: i64,
    /// Minimum score for Medium (default 6)
    pub medium_threshold: i64,
    /// Tasks longer than this lose a point (default 120)
    pub long_task_minutes: u32,
}

impl Default for RuleClassifier {
    fn default() -> Self {
        Self {
            high_threshold: 8,
            medium_threshold: 6,
            long_task_minutes: 120,
        }
    }
}

impl RuleClassifier {
    fn urgency(days_left: i64) -> i64 {
        if days_left <= 1 {
            3
        } else if days_left <= 3 {
            2
        } else {
            1
        }
    }

    /// Raw score before bucketing.
    pub fn score(&self, estimated_time: u32, days_left: i64, importance_score: u8) -> i64 {
        let mut score = Self::urgency(days_left) + 2 * i64::from(importance_score);
        if estimated_time > self.long_task_minutes {
            score -= 1;
        }
        score
    }
}

impl Classifier for RuleClassifier {
    fn classify(&self, estimated_time: u32, days_left: i64, importance_score: u8) -> PriorityLabel {
        let score = self.score(estimated_time, days_left, importance_score);
        if score >= self.high_threshold {
            PriorityLabel::High
        } else if score >= self.medium_threshold {
            PriorityLabel::Medium
        } else {
            PriorityLabel::Low
        }
    }
}
