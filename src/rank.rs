//! Groupwise ranking and total-rank aggregation.
//!
//! Observations are partitioned by (analyte, metric, dataset type) and
//! ranked by value, ascending, within each partition. Ties keep their
//! sequence order: the stable sort hands the earlier row the lower rank.
//! Totals are a separate grouping over algorithm alone, then broadcast back
//! onto every row of that algorithm.

use crate::error::{Error, Result};
use crate::observation::{AlgorithmTotal, ComparisonRecord, Observation, RankedObservation};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Rank every observation within its (analyte, metric, dataset type)
/// partition, ascending by value, 1-based. Output rows keep the input
/// order; only the rank annotation is added.
pub fn assign_ranks(observations: &[Observation]) -> Vec<RankedObservation> {
    let mut partitions: HashMap<(&str, &str, &str), Vec<usize>> = HashMap::new();
    for (i, obs) in observations.iter().enumerate() {
        partitions
            .entry((&obs.analyte, &obs.metric, &obs.dataset_type))
            .or_default()
            .push(i);
    }

    let mut ranks = vec![0u32; observations.len()];
    for indices in partitions.values() {
        let mut ordered = indices.clone();
        // sort_by is stable: equal values keep first-encounter order
        ordered.sort_by(|&a, &b| {
            observations[a]
                .value
                .partial_cmp(&observations[b].value)
                .unwrap_or(Ordering::Equal)
        });
        for (position, &idx) in ordered.iter().enumerate() {
            ranks[idx] = position as u32 + 1;
        }
    }

    observations
        .iter()
        .zip(ranks)
        .map(|(obs, rank)| RankedObservation {
            algorithm: obs.algorithm.clone(),
            analyte: obs.analyte.clone(),
            dataset_type: obs.dataset_type.clone(),
            metric: obs.metric.clone(),
            value: obs.value,
            rank,
        })
        .collect()
}

/// Sum each algorithm's ranks across every partition it appears in.
/// Algorithms are reported in first-encounter order.
pub fn total_ranks(ranked: &[RankedObservation]) -> Vec<AlgorithmTotal> {
    let mut order: Vec<&str> = Vec::new();
    let mut sums: HashMap<&str, u32> = HashMap::new();
    for obs in ranked {
        let entry = sums.entry(&obs.algorithm).or_insert_with(|| {
            order.push(&obs.algorithm);
            0
        });
        *entry += obs.rank;
    }

    order
        .into_iter()
        .map(|algorithm| AlgorithmTotal {
            algorithm: algorithm.to_string(),
            total_rank: sums[algorithm],
        })
        .collect()
}

/// Broadcast-join the per-algorithm totals onto every ranked observation.
///
/// Every row of a given algorithm receives the same total. An algorithm
/// without a matching total cannot occur when the totals were computed from
/// the same rows, but the lookup still fails loudly instead of defaulting.
pub fn attach_total_ranks(
    ranked: Vec<RankedObservation>,
    totals: &[AlgorithmTotal],
) -> Result<Vec<ComparisonRecord>> {
    let by_algorithm: HashMap<&str, u32> = totals
        .iter()
        .map(|t| (t.algorithm.as_str(), t.total_rank))
        .collect();

    ranked
        .into_iter()
        .map(|obs| {
            let total = *by_algorithm.get(obs.algorithm.as_str()).ok_or_else(|| {
                Error::MissingGroupKey {
                    algorithm: obs.algorithm.clone(),
                    context: "total-rank join".to_string(),
                }
            })?;
            Ok(obs.with_total(total))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StudyConfig;
    use crate::simulate::simulate;

    fn observation(algorithm: &str, value: f64) -> Observation {
        Observation {
            algorithm: algorithm.into(),
            analyte: "X".into(),
            dataset_type: "T".into(),
            metric: "M".into(),
            value,
        }
    }

    #[test]
    fn test_single_partition_ranks_ascending() {
        // A=0.9, B=0.1, C=0.5 in one partition: ranks 3, 1, 2
        let observations = vec![
            observation("A", 0.9),
            observation("B", 0.1),
            observation("C", 0.5),
        ];
        let ranked = assign_ranks(&observations);
        assert_eq!(ranked[0].rank, 3);
        assert_eq!(ranked[1].rank, 1);
        assert_eq!(ranked[2].rank, 2);

        // with a single partition each total equals the rank itself
        let totals = total_ranks(&ranked);
        let records = attach_total_ranks(ranked, &totals).unwrap();
        assert_eq!(records[0].total_rank, 3);
        assert_eq!(records[1].total_rank, 1);
        assert_eq!(records[2].total_rank, 2);
    }

    #[test]
    fn test_ties_keep_sequence_order() {
        let observations = vec![
            observation("A", 0.5),
            observation("B", 0.5),
            observation("C", 0.2),
        ];
        let ranked = assign_ranks(&observations);
        // C is lowest; A appears before B, so A gets the lower rank of the tie
        assert_eq!(ranked[2].rank, 1);
        assert_eq!(ranked[0].rank, 2);
        assert_eq!(ranked[1].rank, 3);
    }

    #[test]
    fn test_ranks_are_a_permutation_per_partition() {
        let config = StudyConfig::default();
        let ranked = assign_ranks(&simulate(&config).unwrap());

        let mut partitions: HashMap<(&str, &str, &str), Vec<u32>> = HashMap::new();
        for obs in &ranked {
            partitions
                .entry((&obs.analyte, &obs.metric, &obs.dataset_type))
                .or_default()
                .push(obs.rank);
        }
        assert_eq!(partitions.len(), config.partition_count());
        for ranks in partitions.values() {
            let mut sorted = ranks.clone();
            sorted.sort_unstable();
            let expected: Vec<u32> = (1..=config.algorithms.len() as u32).collect();
            assert_eq!(sorted, expected);
        }
    }

    #[test]
    fn test_total_rank_conservation() {
        let config = StudyConfig::default();
        let ranked = assign_ranks(&simulate(&config).unwrap());
        let totals = total_ranks(&ranked);

        assert_eq!(totals.len(), config.algorithms.len());
        let a = config.algorithms.len() as u32;
        let grand_total: u32 = totals.iter().map(|t| t.total_rank).sum();
        let expected = config.partition_count() as u32 * (a * (a + 1) / 2);
        assert_eq!(grand_total, expected);
    }

    #[test]
    fn test_totals_follow_first_encounter_order() {
        let config = StudyConfig::default();
        let ranked = assign_ranks(&simulate(&config).unwrap());
        let totals = total_ranks(&ranked);
        let order: Vec<&str> = totals.iter().map(|t| t.algorithm.as_str()).collect();
        let declared: Vec<&str> = config.algorithms.iter().map(String::as_str).collect();
        assert_eq!(order, declared);
    }

    #[test]
    fn test_attach_broadcasts_one_total_per_algorithm() {
        let config = StudyConfig::default();
        let ranked = assign_ranks(&simulate(&config).unwrap());
        let totals = total_ranks(&ranked);
        let records = attach_total_ranks(ranked, &totals).unwrap();

        for total in &totals {
            let rows: Vec<_> = records
                .iter()
                .filter(|r| r.algorithm == total.algorithm)
                .collect();
            assert_eq!(rows.len(), 16);
            assert!(rows.iter().all(|r| r.total_rank == total.total_rank));
            let rank_sum: u32 = rows.iter().map(|r| r.rank).sum();
            assert_eq!(rank_sum, total.total_rank);
        }
    }

    #[test]
    fn test_attach_fails_on_missing_total() {
        let ranked = assign_ranks(&[observation("A", 0.4)]);
        let err = attach_total_ranks(ranked, &[]).unwrap_err();
        match err {
            Error::MissingGroupKey { algorithm, .. } => assert_eq!(algorithm, "A"),
            other => panic!("expected MissingGroupKey, got {other:?}"),
        }
    }
}
