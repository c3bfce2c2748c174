//! Labelled samples for the nearest-neighbour classifier.
//!
//! Training sets are stored as pretty-printed JSON.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;
use crate::task::PriorityLabel;

/// One labelled example.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrainingSample {
    pub estimated_time: u32,
    pub days_left: i64,
    pub importance: u8,
    pub priority: PriorityLabel,
}

impl TrainingSample {
    pub fn new(estimated_time: u32, days_left: i64, importance: u8, priority: PriorityLabel) -> Self {
        Self {
            estimated_time,
            days_left,
            importance,
            priority,
        }
    }
}

/// Ordered collection of labelled samples.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrainingSet {
    pub samples: Vec<TrainingSample>,
}

impl TrainingSet {
    /// Built-in samples used when no training file is configured.
    pub fn seed() -> Self {
        Self {
            samples: vec![
                TrainingSample::new(30, 1, 3, PriorityLabel::High),
                TrainingSample::new(120, 5, 1, PriorityLabel::Low),
                TrainingSample::new(15, 2, 2, PriorityLabel::Medium),
                TrainingSample::new(60, 3, 3, PriorityLabel::High),
                TrainingSample::new(45, 0, 1, PriorityLabel::Low),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn push(&mut self, sample: TrainingSample) {
        self.samples.push(sample);
    }

    /// Read a training set from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid
    /// training set.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Write the training set as JSON, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_every_label() {
        let seed = TrainingSet::seed();
        assert_eq!(seed.len(), 5);
        for label in PriorityLabel::ALL {
            assert!(seed.samples.iter().any(|s| s.priority == label));
        }
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("training.json");

        let mut set = TrainingSet::seed();
        set.push(TrainingSample::new(10, -2, 3, PriorityLabel::High));
        set.save(&path).unwrap();

        assert_eq!(TrainingSet::load(&path).unwrap(), set);
    }

    #[test]
    fn load_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("training.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(TrainingSet::load(&path).is_err());
    }
}
