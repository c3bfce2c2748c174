//! # SmartDo Core Library
//!
//! This library provides the core logic of the SmartDo personal task
//! manager. The `smartdo` CLI is a thin interactive layer over it.
//!
//! ## Architecture
//!
//! - **Classifier**: one-method trait mapping (effort, days left, importance)
//!   to a priority label; rule-table and nearest-neighbour providers
//! - **Assignment**: validates raw input and assigns the priority once
//! - **Store**: in-memory active and completed task lists
//! - **Ranking**: suggestion order (priority, then due date)
//! - **Stats**: productivity insights over completed tasks
//! - **Calendar**: month grid data with due days marked
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`Classifier`]: Priority provider injected into [`create_task`]
//! - [`TaskStore`]: Owner of the active and completed collections
//! - [`Config`]: Application configuration management

pub mod assignment;
pub mod calendar;
pub mod classifier;
pub mod error;
pub mod ranking;
pub mod stats;
pub mod storage;
pub mod store;
pub mod task;

pub use assignment::create_task;
pub use calendar::{month_view, CalendarDay, MonthView};
pub use classifier::{
    build_classifier, Classifier, ClassifierKind, NearestNeighbourClassifier, RuleClassifier,
    TrainingSample, TrainingSet,
};
pub use error::{ConfigError, CoreError, Result};
pub use ranking::{rank, suggest};
pub use stats::{aggregate, InsightsReport};
pub use storage::{ClassifierConfig, Config, DisplayConfig};
pub use store::TaskStore;
pub use task::{Importance, PriorityLabel, Recurrence, Task, TaskInput};
