//! Nearest-neighbour priority classifier.
//!
//! Features are min-max scaled by the spread observed in the training set so
//! that minutes do not drown out days and importance. A query takes the `k`
//! closest samples (training order breaks distance ties) and returns the
//! majority label; a split vote goes to the label of the closest sample among
//! the tied labels.

use tracing::debug;

use super::{Classifier, TrainingSample, TrainingSet};
use crate::error::{CoreError, Result};
use crate::task::PriorityLabel;

#[derive(Debug, Clone, Copy)]
struct Scale {
    estimated_time: f64,
    days_left: f64,
    importance: f64,
}

/// Trained nearest-neighbour model. Only [`NearestNeighbourClassifier::train`]
/// builds one.
#[derive(Debug, Clone)]
pub struct NearestNeighbourClassifier {
    samples: Vec<TrainingSample>,
    neighbours: usize,
    scale: Scale,
}

fn spread(values: impl Iterator<Item = f64>) -> f64 {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    let range = max - min;
    if range > 0.0 {
        range
    } else {
        1.0
    }
}

impl NearestNeighbourClassifier {
    /// Fit the model on `training` using `neighbours` votes per query.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the training set is empty or `neighbours`
    /// is zero.
    pub fn train(training: &TrainingSet, neighbours: usize) -> Result<Self> {
        if training.is_empty() {
            return Err(CoreError::invalid("training_set", "at least one sample is required"));
        }
        if neighbours == 0 {
            return Err(CoreError::invalid("neighbours", "must be at least 1"));
        }

        let samples = training.samples.clone();
        let scale = Scale {
            estimated_time: spread(samples.iter().map(|s| f64::from(s.estimated_time))),
            days_left: spread(samples.iter().map(|s| s.days_left as f64)),
            importance: spread(samples.iter().map(|s| f64::from(s.importance))),
        };
        debug!(samples = samples.len(), neighbours, "trained nearest-neighbour classifier");

        Ok(Self {
            neighbours: neighbours.min(samples.len()),
            samples,
            scale,
        })
    }

    pub fn neighbours(&self) -> usize {
        self.neighbours
    }

    fn distance(&self, sample: &TrainingSample, estimated_time: u32, days_left: i64, importance: u8) -> f64 {
        let dt = (f64::from(sample.estimated_time) - f64::from(estimated_time)) / self.scale.estimated_time;
        let dd = (sample.days_left as f64 - days_left as f64) / self.scale.days_left;
        let di = (f64::from(sample.importance) - f64::from(importance)) / self.scale.importance;
        dt * dt + dd * dd + di * di
    }
}

impl Classifier for NearestNeighbourClassifier {
    fn classify(&self, estimated_time: u32, days_left: i64, importance_score: u8) -> PriorityLabel {
        let mut ranked: Vec<(f64, PriorityLabel)> = self
            .samples
            .iter()
            .map(|s| (self.distance(s, estimated_time, days_left, importance_score), s.priority))
            .collect();
        // Stable: equal distances keep training order.
        ranked.sort_by(|a, b| a.0.total_cmp(&b.0));

        // Votes in order of first (closest) appearance.
        let mut votes: Vec<(PriorityLabel, usize)> = Vec::with_capacity(3);
        for (_, label) in ranked.iter().take(self.neighbours) {
            match votes.iter_mut().find(|(l, _)| l == label) {
                Some((_, count)) => *count += 1,
                None => votes.push((*label, 1)),
            }
        }

        // Strictly greater keeps the closest label on a split vote.
        votes
            .into_iter()
            .reduce(|best, next| if next.1 > best.1 { next } else { best })
            .map_or(PriorityLabel::Low, |(label, _)| label)
    }
}
