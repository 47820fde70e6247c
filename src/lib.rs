//! Comparar: Simulated Comparison Studies
//!
//! Generates a seeded synthetic comparison dataset for a roster of
//! dimension-reduction algorithms across analytes, dataset splits, and
//! error metrics; ranks every (analyte, metric, split) partition; sums the
//! ranks into a per-algorithm total; and renders the results as a table
//! image, a grouped bar chart, a combined figure, and a spreadsheet.
//!
//! The pipeline is a straight sequence over in-memory records:
//!
//! ```text
//! simulate → assign_ranks → total_ranks → attach_total_ranks → pivot_wide → render/export
//! ```
//!
//! # Example
//!
//! ```no_run
//! use comparar::{run_study, RunOptions, StudyConfig};
//!
//! # fn main() -> comparar::Result<()> {
//! let artifacts = run_study(&StudyConfig::default(), &RunOptions::default())?;
//! println!("table image at {}", artifacts.table.display());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod observation;
pub mod pipeline;
pub mod rank;
pub mod render;
pub mod reshape;
pub mod simulate;

pub use config::StudyConfig;
pub use error::{Error, Result};
pub use export::SheetFormat;
pub use observation::{AlgorithmTotal, ComparisonRecord, Observation, RankedObservation};
pub use pipeline::{run_study, RunArtifacts, RunOptions};
pub use rank::{assign_ranks, attach_total_ranks, total_ranks};
pub use render::{render_chart, render_combined, render_table};
pub use reshape::{pivot_wide, unpivot, WideRow, WideTable};
pub use simulate::simulate;
