//! Plain-text rendering of tasks, calendars and insights.

use chrono::NaiveDate;
use smartdo_core::{InsightsReport, MonthView, Task};

const HEADERS: [&str; 8] = [
    "#",
    "Title",
    "Due",
    "Est (min)",
    "Importance",
    "Priority",
    "Category",
    "Recurrence",
];

/// Format `date` with a user-supplied pattern, falling back to ISO 8601 when
/// the pattern is invalid.
pub fn format_date(date: NaiveDate, date_format: &str) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    if write!(out, "{}", date.format(date_format)).is_err() {
        return date.to_string();
    }
    out
}

fn row(index: usize, task: &Task, date_format: &str) -> [String; 8] {
    [
        index.to_string(),
        task.title.clone(),
        format_date(task.due_date, date_format),
        task.estimated_time.to_string(),
        task.importance.to_string(),
        task.priority.to_string(),
        task.category.clone(),
        task.recurrence.to_string(),
    ]
}

/// Fixed-width table, one numbered row per task (numbers start at 1).
pub fn task_table<'a>(tasks: impl IntoIterator<Item = &'a Task>, date_format: &str) -> String {
    let rows: Vec<[String; 8]> = tasks
        .into_iter()
        .enumerate()
        .map(|(i, t)| row(i + 1, t, date_format))
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for r in &rows {
        for (w, cell) in widths.iter_mut().zip(r) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let line = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(widths)
            .map(|(c, w)| format!("{c:<w$}"))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };
    let separator = widths.map(|w| "-".repeat(w)).join("-+-");

    let mut out = String::new();
    out.push_str(&line(&HEADERS.map(String::from)));
    out.push('\n');
    out.push_str(&separator);
    out.push('\n');
    for r in &rows {
        out.push_str(&line(r));
        out.push('\n');
    }
    out
}

/// Month grid. Days with tasks due are prefixed `*`; today is prefixed `>`
/// when `mark_today` is set and nothing is due.
pub fn calendar(view: &MonthView, today: Option<NaiveDate>, mark_today: bool) -> String {
    use chrono::Datelike;

    let today_day = today
        .filter(|d| mark_today && d.year() == view.year && d.month() == view.month)
        .map(|d| d.day());

    let mut out = format!("{} {}\n", view.month_name, view.year);
    out.push_str("  Mo  Tu  We  Th  Fr  Sa  Su\n");
    for week in &view.weeks {
        let mut line = String::new();
        for cell in week {
            match cell {
                None => line.push_str("    "),
                Some(day) if day.has_tasks => line.push_str(&format!(" *{:2}", day.day)),
                Some(day) if Some(day.day) == today_day => line.push_str(&format!(" >{:2}", day.day)),
                Some(day) => line.push_str(&format!("  {:2}", day.day)),
            }
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

pub fn insights(report: &InsightsReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("Total Completed Tasks: {}\n", report.total_completed));
    out.push_str(&format!("Most Productive Day: {}\n", report.most_productive_weekday));
    out.push_str("Tasks by Category:\n");
    for (category, count) in &report.counts_by_category {
        out.push_str(&format!("- {category}: {count}\n"));
    }
    out
}
