//! Long-to-wide pivot of the comparison records.
//!
//! One wide row per (dataset type, analyte, algorithm) triple, with the
//! metric dimension pivoted into per-metric value and rank columns. Pure
//! reshape: no values are computed here.

use crate::config::StudyConfig;
use crate::error::{Error, Result};
use crate::observation::ComparisonRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One row of the wide comparison table. `values` and `ranks` are indexed
/// by the metric order of the owning [`WideTable`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WideRow {
    pub dataset_type: String,
    pub analyte: String,
    pub algorithm: String,
    pub values: Vec<f64>,
    pub ranks: Vec<u32>,
    pub total_rank: u32,
}

/// Wide-format comparison table: the pivoted records plus the metric order
/// shared by every row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WideTable {
    pub metrics: Vec<String>,
    pub rows: Vec<WideRow>,
}

impl WideTable {
    /// Column headers in table order: the three grouping columns, the
    /// per-metric value columns, the per-metric rank columns, TotalRank.
    pub fn column_headers(&self) -> Vec<String> {
        let mut headers = vec![
            "DatasetType".to_string(),
            "Analyte".to_string(),
            "Algorithm".to_string(),
        ];
        headers.extend(self.metrics.iter().map(|m| format!("Value_{m}")));
        headers.extend(self.metrics.iter().map(|m| format!("Rank_{m}")));
        headers.push("TotalRank".to_string());
        headers
    }
}

/// Pivot the long-format records into one row per
/// (dataset type, analyte, algorithm) triple.
///
/// Rows are ordered by dataset type, then analyte, then algorithm, each in
/// the declaration order of the corresponding configuration enumeration.
/// Exactly one record must exist per (triple, metric) cell: a second record
/// for the same cell is a [`Error::DuplicateKey`], an absent cell is a
/// [`Error::MissingGroupKey`].
pub fn pivot_wide(records: &[ComparisonRecord], config: &StudyConfig) -> Result<WideTable> {
    let mut cells: HashMap<(&str, &str, &str, &str), &ComparisonRecord> =
        HashMap::with_capacity(records.len());

    for record in records {
        for (field, label, declared) in [
            ("dataset_types", &record.dataset_type, &config.dataset_types),
            ("analytes", &record.analyte, &config.analytes),
            ("algorithms", &record.algorithm, &config.algorithms),
            ("metrics", &record.metric, &config.metrics),
        ] {
            if !declared.contains(label) {
                return Err(Error::UnknownLabel { field, label: label.clone() });
            }
        }

        let key = (
            record.dataset_type.as_str(),
            record.analyte.as_str(),
            record.algorithm.as_str(),
            record.metric.as_str(),
        );
        if cells.insert(key, record).is_some() {
            return Err(Error::DuplicateKey {
                dataset_type: record.dataset_type.clone(),
                analyte: record.analyte.clone(),
                algorithm: record.algorithm.clone(),
                metric: record.metric.clone(),
            });
        }
    }

    let mut rows = Vec::with_capacity(
        config.dataset_types.len() * config.analytes.len() * config.algorithms.len(),
    );
    for dataset_type in &config.dataset_types {
        for analyte in &config.analytes {
            for algorithm in &config.algorithms {
                let mut values = Vec::with_capacity(config.metrics.len());
                let mut ranks = Vec::with_capacity(config.metrics.len());
                let mut total_rank = None;
                for metric in &config.metrics {
                    let key = (
                        dataset_type.as_str(),
                        analyte.as_str(),
                        algorithm.as_str(),
                        metric.as_str(),
                    );
                    let record = cells.get(&key).ok_or_else(|| Error::MissingGroupKey {
                        algorithm: algorithm.clone(),
                        context: format!(
                            "pivot cell ({dataset_type}, {analyte}) metric '{metric}'"
                        ),
                    })?;
                    values.push(record.value);
                    ranks.push(record.rank);
                    total_rank.get_or_insert(record.total_rank);
                }
                rows.push(WideRow {
                    dataset_type: dataset_type.clone(),
                    analyte: analyte.clone(),
                    algorithm: algorithm.clone(),
                    values,
                    ranks,
                    total_rank: total_rank.unwrap_or_default(),
                });
            }
        }
    }

    Ok(WideTable { metrics: config.metrics.clone(), rows })
}

/// Reconstruct the long format from a wide table. Inverse of [`pivot_wide`];
/// the round-trip property tests lean on this.
pub fn unpivot(table: &WideTable) -> Vec<ComparisonRecord> {
    let mut records = Vec::with_capacity(table.rows.len() * table.metrics.len());
    for row in &table.rows {
        for (i, metric) in table.metrics.iter().enumerate() {
            records.push(ComparisonRecord {
                algorithm: row.algorithm.clone(),
                analyte: row.analyte.clone(),
                dataset_type: row.dataset_type.clone(),
                metric: metric.clone(),
                value: row.values[i],
                rank: row.ranks[i],
                total_rank: row.total_rank,
            });
        }
    }
    records
}
