//! Interactive menu session.
//!
//! Holds the task store for the lifetime of the process. Input is read line
//! by line; invalid fields are re-prompted until they parse. End of input
//! ends the session.

use chrono::NaiveDate;
use std::io::{self, BufRead, Write};
use tracing::debug;

use smartdo_core::assignment::{parse_due_date, parse_estimated_time, parse_importance};
use smartdo_core::{
    aggregate, create_task, month_view, suggest, Classifier, CoreError, DisplayConfig, TaskInput,
    TaskStore,
};

use crate::render;

const MENU: &str = "\n--- SMART TO-DO ---
1. Add Task
2. Show Tasks
3. Suggest Task
4. Calendar View
5. Productivity Insights
6. Mark Task as Completed
7. Exit
";

pub struct Session<'a, R, W> {
    input: R,
    output: W,
    classifier: &'a dyn Classifier,
    store: TaskStore,
    today: NaiveDate,
    display: DisplayConfig,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(
        input: R,
        output: W,
        classifier: &'a dyn Classifier,
        today: NaiveDate,
        display: DisplayConfig,
    ) -> Self {
        Self {
            input,
            output,
            classifier,
            store: TaskStore::new(),
            today,
            display,
        }
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Run the menu loop until the user exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            write!(self.output, "{MENU}")?;
            let Some(choice) = self.prompt("Choose an option: ")? else {
                return Ok(());
            };
            debug!(choice = %choice, "menu selection");
            let keep_going = match choice.as_str() {
                "1" => self.add_task()?,
                "2" => self.show_tasks()?,
                "3" => self.suggest_task()?,
                "4" => self.calendar_view()?,
                "5" => self.insights()?,
                "6" => self.mark_completed()?,
                "7" => {
                    writeln!(self.output, "Goodbye!")?;
                    false
                }
                _ => {
                    writeln!(self.output, "Invalid choice.")?;
                    true
                }
            };
            if !keep_going {
                return Ok(());
            }
        }
    }

    /// Print `label` and read one trimmed line; `None` at end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Re-prompt until `check` accepts the answer.
    fn prompt_until<T>(
        &mut self,
        label: &str,
        check: impl Fn(&str) -> smartdo_core::Result<T>,
    ) -> io::Result<Option<String>> {
        loop {
            let Some(answer) = self.prompt(label)? else {
                return Ok(None);
            };
            match check(&answer) {
                Ok(_) => return Ok(Some(answer)),
                Err(e) => writeln!(self.output, "error: {e}")?,
            }
        }
    }

    // Each handler returns whether the session continues.

    fn add_task(&mut self) -> io::Result<bool> {
        let non_empty = |s: &str| {
            if s.is_empty() {
                Err(CoreError::InvalidInput {
                    field: "title".into(),
                    message: "must not be empty".into(),
                })
            } else {
                Ok(())
            }
        };
        let Some(title) = self.prompt_until("Task Title: ", non_empty)? else {
            return Ok(false);
        };
        let Some(description) = self.prompt("Description: ")? else {
            return Ok(false);
        };
        let Some(due_date) = self.prompt_until("Due Date (YYYY-MM-DD): ", parse_due_date)? else {
            return Ok(false);
        };
        let Some(estimated_time) = self.prompt_until("Estimated time (in minutes): ", parse_estimated_time)? else {
            return Ok(false);
        };
        let Some(importance) = self.prompt_until("Importance (Low/Medium/High): ", parse_importance)? else {
            return Ok(false);
        };
        let Some(category) = self.prompt("Category (Work/Study/Fitness/etc): ")? else {
            return Ok(false);
        };
        let Some(recurrence) = self.prompt("Recurring? (none/daily/weekly): ")? else {
            return Ok(false);
        };

        let input = TaskInput {
            title,
            description,
            due_date,
            estimated_time,
            importance,
            category,
            recurrence,
        };
        match create_task(&input, self.today, self.classifier) {
            Ok(task) => {
                writeln!(self.output, "\nTask '{}' added with {} priority.", task.title, task.priority)?;
                self.store.add(task);
            }
            Err(e) => writeln!(self.output, "error: {e}")?,
        }
        Ok(true)
    }

    fn show_tasks(&mut self) -> io::Result<bool> {
        if self.store.active().is_empty() {
            writeln!(self.output, "No tasks added.")?;
        } else {
            let table = render::task_table(self.store.active(), &self.display.date_format);
            write!(self.output, "{table}")?;
        }
        Ok(true)
    }

    fn suggest_task(&mut self) -> io::Result<bool> {
        match suggest(self.store.active()) {
            Ok(task) => {
                let table = render::task_table([task], &self.display.date_format);
                write!(self.output, "\nSuggested Task:\n{table}")?;
            }
            Err(_) => writeln!(self.output, "No tasks available to suggest.")?,
        }
        Ok(true)
    }

    fn calendar_view(&mut self) -> io::Result<bool> {
        use chrono::Datelike;

        if self.store.active().is_empty() {
            writeln!(self.output, "No tasks to display in calendar.")?;
            return Ok(true);
        }
        match month_view(self.today.year(), self.today.month(), self.store.active()) {
            Ok(view) => {
                let text = render::calendar(&view, Some(self.today), self.display.mark_today);
                write!(self.output, "\n{text}")?;
            }
            Err(e) => writeln!(self.output, "error: {e}")?,
        }
        Ok(true)
    }

    fn insights(&mut self) -> io::Result<bool> {
        match aggregate(self.store.completed()) {
            Ok(report) => write!(self.output, "\nProductivity Insights:\n{}", render::insights(&report))?,
            Err(_) => writeln!(self.output, "No tasks completed yet.")?,
        }
        Ok(true)
    }

    fn mark_completed(&mut self) -> io::Result<bool> {
        if self.store.active().is_empty() {
            writeln!(self.output, "No tasks to mark as completed.")?;
            return Ok(true);
        }

        writeln!(self.output, "\nTasks:")?;
        for (i, task) in self.store.active().iter().enumerate() {
            let due = render::format_date(task.due_date, &self.display.date_format);
            writeln!(self.output, "{}. {} (Due: {due})", i + 1, task.title)?;
        }

        let Some(answer) = self.prompt("Enter the task number to mark as completed: ")? else {
            return Ok(false);
        };
        let Ok(index) = answer.parse::<usize>() else {
            writeln!(self.output, "Please enter a valid number.")?;
            return Ok(true);
        };
        match self.store.complete(index) {
            Ok(task) => writeln!(self.output, "\nTask '{}' marked as completed.", task.title)?,
            Err(_) => writeln!(self.output, "Invalid task number.")?,
        }
        Ok(true)
    }
}
