//! Straight-line study pipeline.
//!
//! simulate → rank → total → join → pivot → render → export, each stage
//! consuming the previous stage's output in full. Single-threaded batch
//! execution; any stage failure aborts the run.

use crate::config::StudyConfig;
use crate::error::Result;
use crate::export::{self, SheetFormat};
use crate::rank::{assign_ranks, attach_total_ranks, total_ranks};
use crate::render;
use crate::reshape::pivot_wide;
use crate::simulate::simulate;
use std::path::PathBuf;

/// Where and under what names the artifacts land.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOptions {
    /// Directory the artifacts are written into; created if absent.
    pub output_dir: PathBuf,
    /// Artifact name prefix, e.g. `DimRed` → `DimRed_Comparison_Table.png`.
    pub prefix: String,
    /// Sheet export format.
    pub format: SheetFormat,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            prefix: "DimRed".to_string(),
            format: SheetFormat::default(),
        }
    }
}

/// Paths of the artifacts written by [`run_study`].
#[derive(Debug, Clone, PartialEq)]
pub struct RunArtifacts {
    pub table: PathBuf,
    pub chart: PathBuf,
    pub combined: PathBuf,
    pub sheet: PathBuf,
}

impl RunArtifacts {
    /// The artifact paths in write order.
    pub fn paths(&self) -> [&PathBuf; 4] {
        [&self.table, &self.chart, &self.combined, &self.sheet]
    }
}

/// Run the full study: generate, rank, reshape, render, export.
pub fn run_study(config: &StudyConfig, options: &RunOptions) -> Result<RunArtifacts> {
    config.validate()?;

    let observations = simulate(config)?;
    let ranked = assign_ranks(&observations);
    let totals = total_ranks(&ranked);
    let records = attach_total_ranks(ranked, &totals)?;
    let table = pivot_wide(&records, config)?;

    std::fs::create_dir_all(&options.output_dir)?;
    let artifact = |suffix: &str| {
        options.output_dir.join(format!("{}_{suffix}", options.prefix))
    };
    let artifacts = RunArtifacts {
        table: artifact("Comparison_Table.png"),
        chart: artifact("Comparison_Plot.png"),
        combined: artifact("Combined.png"),
        sheet: artifact(&format!("Simulated_Data.{}", options.format.extension())),
    };

    render::render_table(&artifacts.table, &table)?;
    render::render_chart(&artifacts.chart, &records, config)?;
    render::render_combined(&artifacts.combined, &table, &records, config)?;
    export::write_records(options.format, &artifacts.sheet, &records)?;

    Ok(artifacts)
}
