//! Month calendar data.
//!
//! Produces Monday-first week rows for one month with the days that have
//! active tasks due marked. Rendering is left to the caller.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::task::Task;

/// One day cell.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalendarDay {
    pub day: u32,
    /// At least one task is due on this day
    pub has_tasks: bool,
}

/// A month laid out in weeks of seven cells; `None` pads days outside the month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonthView {
    pub year: i32,
    pub month: u32,
    /// Full month name ("January")
    pub month_name: String,
    pub weeks: Vec<[Option<CalendarDay>; 7]>,
}

impl MonthView {
    /// Days in this month that have tasks due.
    pub fn marked_days(&self) -> Vec<u32> {
        self.weeks
            .iter()
            .flatten()
            .flatten()
            .filter(|d| d.has_tasks)
            .map(|d| d.day)
            .collect()
    }
}

/// Lay out `month` of `year`, marking days on which any of `tasks` is due.
///
/// # Errors
///
/// Returns `InvalidInput` if `year`/`month` does not name a calendar month.
pub fn month_view(year: i32, month: u32, tasks: &[Task]) -> Result<MonthView> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| CoreError::invalid("month", format!("{year}-{month} is not a calendar month")))?;

    let due_days: Vec<u32> = tasks
        .iter()
        .filter(|t| t.due_date.year() == year && t.due_date.month() == month)
        .map(|t| t.due_date.day())
        .collect();

    let mut weeks = Vec::new();
    let mut week: [Option<CalendarDay>; 7] = [None; 7];
    let mut column = first.weekday().num_days_from_monday() as usize;

    for date in first.iter_days().take_while(|d| d.month() == month) {
        week[column] = Some(CalendarDay {
            day: date.day(),
            has_tasks: due_days.contains(&date.day()),
        });
        column += 1;
        if column == 7 {
            weeks.push(week);
            week = [None; 7];
            column = 0;
        }
    }
    if column > 0 {
        weeks.push(week);
    }

    Ok(MonthView {
        year,
        month,
        month_name: first.format("%B").to_string(),
        weeks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{Importance, PriorityLabel, Recurrence};

    fn due(y: i32, m: u32, d: u32) -> Task {
        Task {
            title: "t".into(),
            description: String::new(),
            due_date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            estimated_time: 10,
            importance: Importance::Low,
            priority: PriorityLabel::Low,
            category: String::new(),
            recurrence: Recurrence::None,
        }
    }

    #[test]
    fn january_2024_starts_on_monday() {
        let view = month_view(2024, 1, &[]).unwrap();
        assert_eq!(view.month_name, "January");
        assert_eq!(view.weeks.len(), 5);
        assert_eq!(view.weeks[0][0].map(|d| d.day), Some(1));
        assert_eq!(view.weeks[4][2].map(|d| d.day), Some(31));
        assert_eq!(view.weeks[4][3], None);
    }

    #[test]
    fn leading_padding() {
        // 2024-02-01 is a Thursday.
        let view = month_view(2024, 2, &[]).unwrap();
        assert!(view.weeks[0][..3].iter().all(Option::is_none));
        assert_eq!(view.weeks[0][3].map(|d| d.day), Some(1));
        let days: usize = view.weeks.iter().flatten().flatten().count();
        assert_eq!(days, 29);
    }

    #[test]
    fn marks_only_days_in_the_month() {
        let tasks = vec![due(2024, 3, 5), due(2024, 3, 20), due(2024, 4, 5), due(2023, 3, 7)];
        let view = month_view(2024, 3, &tasks).unwrap();
        assert_eq!(view.marked_days(), [5, 20]);
    }

    #[test]
    fn invalid_month() {
        assert!(month_view(2024, 13, &[]).unwrap_err().is_invalid_input());
        assert!(month_view(2024, 0, &[]).is_err());
    }
}
