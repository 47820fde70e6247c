//! Simulated observation generation.
//!
//! One uniform draw per cartesian-product row. The generator is seeded once
//! before the first draw and never reseeded, so a given `StudyConfig`
//! always produces the same sequence.

use crate::config::StudyConfig;
use crate::error::Result;
use crate::observation::Observation;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generate one observation per element of the cartesian product of the
/// configured enumerations.
///
/// Rows are emitted in the documented nesting order (algorithm outer, then
/// analyte, dataset type, metric) and the draws are consumed in that order.
/// Each value is an independent uniform draw from [0, 1).
pub fn simulate(config: &StudyConfig) -> Result<Vec<Observation>> {
    config.validate()?;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut observations = Vec::with_capacity(config.observation_count());

    for algorithm in &config.algorithms {
        for analyte in &config.analytes {
            for dataset_type in &config.dataset_types {
                for metric in &config.metrics {
                    observations.push(Observation {
                        algorithm: algorithm.clone(),
                        analyte: analyte.clone(),
                        dataset_type: dataset_type.clone(),
                        metric: metric.clone(),
                        value: rng.random::<f64>(),
                    });
                }
            }
        }
    }

    Ok(observations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::collections::HashSet;

    #[test]
    fn test_default_study_has_272_rows() {
        let observations = simulate(&StudyConfig::default()).unwrap();
        assert_eq!(observations.len(), 272);
    }

    #[test]
    fn test_every_combination_appears_once() {
        let observations = simulate(&StudyConfig::default()).unwrap();
        let keys: HashSet<(&str, &str, &str, &str)> = observations
            .iter()
            .map(|o| {
                (
                    o.algorithm.as_str(),
                    o.analyte.as_str(),
                    o.dataset_type.as_str(),
                    o.metric.as_str(),
                )
            })
            .collect();
        assert_eq!(keys.len(), observations.len());
    }

    #[test]
    fn test_values_in_unit_interval() {
        let observations = simulate(&StudyConfig::default()).unwrap();
        assert!(observations.iter().all(|o| (0.0..1.0).contains(&o.value)));
    }

    #[test]
    fn test_same_seed_is_bit_identical() {
        let config = StudyConfig::default();
        let a = simulate(&config).unwrap();
        let b = simulate(&config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seed_changes_values() {
        let a = simulate(&StudyConfig::default()).unwrap();
        let b = simulate(&StudyConfig { seed: 43, ..Default::default() }).unwrap();
        assert_eq!(a.len(), b.len());
        assert!(a.iter().zip(&b).any(|(x, y)| x.value != y.value));
    }

    #[test]
    fn test_nesting_order_is_algorithm_outer_metric_inner() {
        let config = StudyConfig::default();
        let observations = simulate(&config).unwrap();
        // first block: all rows for the first algorithm, first analyte,
        // first dataset type, metrics in declaration order
        for (i, metric) in config.metrics.iter().enumerate() {
            assert_eq!(observations[i].algorithm, config.algorithms[0]);
            assert_eq!(observations[i].analyte, config.analytes[0]);
            assert_eq!(observations[i].dataset_type, config.dataset_types[0]);
            assert_eq!(&observations[i].metric, metric);
        }
        // the second analyte starts after dataset_types * metrics rows
        let stride = config.dataset_types.len() * config.metrics.len();
        assert_eq!(observations[stride].analyte, config.analytes[1]);
    }

    #[test]
    fn test_invalid_config_is_rejected_before_any_draw() {
        let config = StudyConfig { algorithms: vec![], ..Default::default() };
        assert!(matches!(
            simulate(&config),
            Err(Error::EmptyEnumeration { field: "algorithms" })
        ));
    }
}
