//! Image artifacts: comparison table, grouped bar chart, combined figure.
//!
//! Thin sinks over plotters. They consume the data model and write PNGs;
//! nothing feeds back into the pipeline. Rendering failures propagate as
//! [`Error::Render`](crate::error::Error::Render).

mod chart;
mod table;

pub use chart::render_chart;
pub use table::render_table;

use crate::config::StudyConfig;
use crate::error::{Error, Result};
use crate::observation::ComparisonRecord;
use crate::reshape::WideTable;
use plotters::prelude::*;
use std::path::Path;

/// Width of every rendered image, in pixels.
pub(crate) const IMAGE_WIDTH: u32 = 1500;

/// Height of the chart image, in pixels.
pub(crate) const CHART_HEIGHT: u32 = 820;

/// Render the wide table above the grouped bar chart on a single canvas.
pub fn render_combined(
    path: &Path,
    table: &WideTable,
    records: &[ComparisonRecord],
    config: &StudyConfig,
) -> Result<()> {
    let table_height = table::table_pixel_height(table);
    let root = BitMapBackend::new(path, (IMAGE_WIDTH, table_height + CHART_HEIGHT))
        .into_drawing_area();
    root.fill(&WHITE).map_err(Error::render)?;

    let (top, bottom) = root.split_vertically(table_height);
    table::draw_table(&top, table)?;
    chart::draw_chart(&bottom, records, config)?;

    root.present().map_err(Error::render)?;
    Ok(())
}
