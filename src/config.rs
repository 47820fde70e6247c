//! Study configuration: the four enumerations and the random seed.
//!
//! The embedded defaults describe the reference study (17 dimension-reduction
//! algorithms, two analytes, calibration/test splits, four error metrics).
//! A YAML file with the same shape can replace any subset of the defaults.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Default random seed; reruns with the same seed are bit-identical.
pub const DEFAULT_SEED: u64 = 42;

/// Dimension-reduction algorithm labels compared by the reference study.
/// Labels only: none of these are ever executed.
pub const DEFAULT_ALGORITHMS: [&str; 17] = [
    "PCA", "IPCA", "KPCA", "SVD", "GRP", "SRP", "MDS", "Isomap", "LLE",
    "t-SNE", "UMAP", "ICA", "FA", "NMF", "LDA", "PLS", "AE",
];

/// Analytes the simulated calibration targets.
pub const DEFAULT_ANALYTES: [&str; 2] = ["DOX", "TYZ"];

/// Dataset splits.
pub const DEFAULT_DATASET_TYPES: [&str; 2] = ["Calibration", "Test"];

/// Error metrics. Direction (lower/higher is better) is not encoded; the
/// simulation draws every metric from the same uniform distribution.
pub const DEFAULT_METRICS: [&str; 4] = ["MSE", "MAE", "MedAE", "R2"];

/// Enumerations and seed for one study run.
///
/// The cartesian product of the four enumerations defines the observation
/// set. The nesting order is part of the contract: algorithm (outer), then
/// analyte, then dataset type, then metric (inner). Random draws are
/// consumed in exactly that order, so reordering an enumeration changes
/// which value lands on which row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudyConfig {
    pub algorithms: Vec<String>,
    pub analytes: Vec<String>,
    pub dataset_types: Vec<String>,
    pub metrics: Vec<String>,
    pub seed: u64,
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            algorithms: DEFAULT_ALGORITHMS.iter().map(ToString::to_string).collect(),
            analytes: DEFAULT_ANALYTES.iter().map(ToString::to_string).collect(),
            dataset_types: DEFAULT_DATASET_TYPES.iter().map(ToString::to_string).collect(),
            metrics: DEFAULT_METRICS.iter().map(ToString::to_string).collect(),
            seed: DEFAULT_SEED,
        }
    }
}

impl StudyConfig {
    /// Load a configuration from a YAML file. Fields left out of the file
    /// keep their embedded defaults.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| Error::Config {
            message: format!("cannot read {}: {e}", path.display()),
        })?;
        let config: Self = serde_yaml::from_str(&contents).map_err(|e| Error::Config {
            message: format!("cannot parse {}: {e}", path.display()),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every enumeration is non-empty and duplicate-free.
    /// Ranking is undefined otherwise.
    pub fn validate(&self) -> Result<()> {
        for (field, labels) in [
            ("algorithms", &self.algorithms),
            ("analytes", &self.analytes),
            ("dataset_types", &self.dataset_types),
            ("metrics", &self.metrics),
        ] {
            if labels.is_empty() {
                return Err(Error::EmptyEnumeration { field });
            }
            let mut seen = HashSet::with_capacity(labels.len());
            for label in labels {
                if !seen.insert(label.as_str()) {
                    return Err(Error::DuplicateLabel { field, label: label.clone() });
                }
            }
        }
        Ok(())
    }

    /// Number of rows in the full cartesian product.
    pub fn observation_count(&self) -> usize {
        self.algorithms.len()
            * self.analytes.len()
            * self.dataset_types.len()
            * self.metrics.len()
    }

    /// Number of (analyte, metric, dataset type) ranking partitions.
    pub fn partition_count(&self) -> usize {
        self.analytes.len() * self.metrics.len() * self.dataset_types.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_shape() {
        let config = StudyConfig::default();
        assert_eq!(config.algorithms.len(), 17);
        assert_eq!(config.analytes.len(), 2);
        assert_eq!(config.dataset_types.len(), 2);
        assert_eq!(config.metrics.len(), 4);
        assert_eq!(config.seed, DEFAULT_SEED);
        assert_eq!(config.observation_count(), 272);
        assert_eq!(config.partition_count(), 16);
    }

    #[test]
    fn test_default_config_validates() {
        assert!(StudyConfig::default().validate().is_ok());
    }

    #[test]
    fn test_empty_enumeration_rejected() {
        let config = StudyConfig { metrics: vec![], ..Default::default() };
        match config.validate() {
            Err(Error::EmptyEnumeration { field }) => assert_eq!(field, "metrics"),
            other => panic!("expected EmptyEnumeration, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_label_rejected() {
        let config = StudyConfig {
            analytes: vec!["DOX".into(), "TYZ".into(), "DOX".into()],
            ..Default::default()
        };
        match config.validate() {
            Err(Error::DuplicateLabel { field, label }) => {
                assert_eq!(field, "analytes");
                assert_eq!(label, "DOX");
            }
            other => panic!("expected DuplicateLabel, got {other:?}"),
        }
    }

    #[test]
    fn test_yaml_partial_override() {
        let yaml = "seed: 7\nanalytes: [\"A\", \"B\", \"C\"]\n";
        let config: StudyConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.analytes, vec!["A", "B", "C"]);
        // untouched fields keep the embedded defaults
        assert_eq!(config.algorithms.len(), 17);
        assert_eq!(config.metrics.len(), 4);
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = StudyConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let back: StudyConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    fn test_from_yaml_file_missing() {
        let err = StudyConfig::from_yaml_file("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }
}
