//! Record types flowing through the study pipeline.
//!
//! Every stage consumes the previous stage's records in full:
//! `Observation` (simulated) → `RankedObservation` (per-partition rank) →
//! `ComparisonRecord` (rank plus the algorithm's total rank). Records are
//! created once per run and never mutated afterwards.

use serde::{Deserialize, Serialize};

/// One simulated measurement: an algorithm's score for a given analyte,
/// dataset split, and error metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub algorithm: String,
    pub analyte: String,
    pub dataset_type: String,
    pub metric: String,
    /// Simulated performance score, uniform in [0, 1).
    pub value: f64,
}

/// An observation annotated with its rank inside the
/// (analyte, metric, dataset type) partition. Ranks run 1..=a where `a`
/// is the number of algorithms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedObservation {
    pub algorithm: String,
    pub analyte: String,
    pub dataset_type: String,
    pub metric: String,
    pub value: f64,
    pub rank: u32,
}

/// Sum of an algorithm's ranks across every partition it appears in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgorithmTotal {
    pub algorithm: String,
    pub total_rank: u32,
}

/// The full long-format row: ranked observation plus the algorithm's total
/// rank, broadcast to every row of that algorithm. This is what the chart,
/// the pivot, and the spreadsheet export consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRecord {
    pub algorithm: String,
    pub analyte: String,
    pub dataset_type: String,
    pub metric: String,
    pub value: f64,
    pub rank: u32,
    pub total_rank: u32,
}

impl RankedObservation {
    /// Annotate with the algorithm's total rank.
    pub fn with_total(self, total_rank: u32) -> ComparisonRecord {
        ComparisonRecord {
            algorithm: self.algorithm,
            analyte: self.analyte,
            dataset_type: self.dataset_type,
            metric: self.metric,
            value: self.value,
            rank: self.rank,
            total_rank,
        }
    }
}
