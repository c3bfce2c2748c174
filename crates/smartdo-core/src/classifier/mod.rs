//! Priority classifiers.
//!
//! The task core only ever talks to the [`Classifier`] trait. Two providers
//! ship with the crate:
//!
//! - [`RuleClassifier`]: a fixed scoring table
//! - [`NearestNeighbourClassifier`]: majority vote over a labelled
//!   [`TrainingSet`]
//!
//! Any `Fn(u32, i64, u8) -> PriorityLabel` is also a classifier, which keeps
//! tests free of model setup.

mod nearest;
mod rules;
mod training;

pub use nearest::NearestNeighbourClassifier;
pub use rules::RuleClassifier;
pub use training::{TrainingSample, TrainingSet};

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

use crate::error::Result;
use crate::storage::ClassifierConfig;
use crate::task::PriorityLabel;

/// Maps task features to a priority label.
///
/// Implementations must be total: every input within the domain yields a
/// label, and the same inputs always yield the same label.
pub trait Classifier {
    /// * `estimated_time` - effort in minutes (positive)
    /// * `days_left` - days until the due date, negative when overdue
    /// * `importance_score` - 1 (low) to 3 (high)
    fn classify(&self, estimated_time: u32, days_left: i64, importance_score: u8) -> PriorityLabel;
}

impl<F> Classifier for F
where
    F: Fn(u32, i64, u8) -> PriorityLabel,
{
    fn classify(&self, estimated_time: u32, days_left: i64, importance_score: u8) -> PriorityLabel {
        self(estimated_time, days_left, importance_score)
    }
}

/// Which classifier implementation to build.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ClassifierKind {
    Rules,
    #[default]
    NearestNeighbour,
}

impl fmt::Display for ClassifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassifierKind::Rules => f.write_str("rules"),
            ClassifierKind::NearestNeighbour => f.write_str("nearest_neighbour"),
        }
    }
}

/// Build the classifier selected by configuration.
///
/// A configured training file that does not exist yet is created from
/// [`TrainingSet::seed`]; one that cannot be parsed is ignored in favour of
/// the seed. A training set that cannot train (empty, or `k` of zero) is an
/// error.
pub fn build_classifier(config: &ClassifierConfig) -> Result<Box<dyn Classifier>> {
    match config.kind {
        ClassifierKind::Rules => Ok(Box::new(RuleClassifier::default())),
        ClassifierKind::NearestNeighbour => {
            let training = match &config.training_file {
                Some(path) if !path.exists() => {
                    let seed = TrainingSet::seed();
                    if let Err(e) = seed.save(path) {
                        warn!(path = %path.display(), error = %e, "could not write seed training set");
                    }
                    seed
                }
                Some(path) => TrainingSet::load(path).unwrap_or_else(|e| {
                    warn!(path = %path.display(), error = %e, "falling back to seed training set");
                    TrainingSet::seed()
                }),
                None => TrainingSet::seed(),
            };
            let model = NearestNeighbourClassifier::train(&training, config.neighbours)?;
            Ok(Box::new(model))
        }
    }
}
