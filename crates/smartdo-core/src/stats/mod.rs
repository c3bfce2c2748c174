//! Statistics over completed tasks.

mod insights;

pub use insights::{aggregate, InsightsReport};
