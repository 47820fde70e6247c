//! Grouped bar chart renderer.
//!
//! One facet panel per (dataset type, analyte) combination; within a panel,
//! bars are grouped by metric inside each algorithm slot, score on the Y
//! axis, algorithm labels rotated beneath the X axis.

use crate::config::StudyConfig;
use crate::error::{Error, Result};
use crate::observation::ComparisonRecord;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::FontTransform;
use std::collections::HashMap;
use std::path::Path;

use super::{CHART_HEIGHT, IMAGE_WIDTH};

/// Fraction of each algorithm slot left as spacing between groups.
const GROUP_GAP: f64 = 0.2;

/// Render the grouped bar chart to a standalone PNG.
pub fn render_chart(
    path: &Path,
    records: &[ComparisonRecord],
    config: &StudyConfig,
) -> Result<()> {
    let root = BitMapBackend::new(path, (IMAGE_WIDTH, CHART_HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(Error::render)?;
    draw_chart(&root, records, config)?;
    root.present().map_err(Error::render)?;
    Ok(())
}

/// Draw the faceted chart onto an existing drawing area.
pub(crate) fn draw_chart(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    records: &[ComparisonRecord],
    config: &StudyConfig,
) -> Result<()> {
    let algorithm_slot: HashMap<&str, usize> = config
        .algorithms
        .iter()
        .enumerate()
        .map(|(i, a)| (a.as_str(), i))
        .collect();
    let n_algorithms = config.algorithms.len();
    let n_metrics = config.metrics.len();
    let bar_width = (1.0 - GROUP_GAP) / n_metrics as f64;

    let y_max = records
        .iter()
        .map(|r| r.value)
        .fold(1.0f64, f64::max)
        * 1.05;

    // row-major facet grid: one panel per (dataset type, analyte)
    let panels = area.split_evenly((config.dataset_types.len(), config.analytes.len()));

    for (di, dataset_type) in config.dataset_types.iter().enumerate() {
        for (ai, analyte) in config.analytes.iter().enumerate() {
            let panel = &panels[di * config.analytes.len() + ai];
            let facet: Vec<&ComparisonRecord> = records
                .iter()
                .filter(|r| r.dataset_type == *dataset_type && r.analyte == *analyte)
                .collect();

            let mut chart = ChartBuilder::on(panel)
                .caption(
                    format!("{analyte} | {dataset_type}"),
                    ("sans-serif", 18),
                )
                .margin(8)
                .x_label_area_size(72)
                .y_label_area_size(46)
                .build_cartesian_2d(0.0f64..n_algorithms as f64, 0.0f64..y_max)
                .map_err(Error::render)?;

            chart
                .configure_mesh()
                .disable_x_mesh()
                .x_labels(0)
                .y_desc("Score")
                .draw()
                .map_err(Error::render)?;

            for (mi, metric) in config.metrics.iter().enumerate() {
                let color = Palette99::pick(mi).mix(0.85);
                let series = chart
                    .draw_series(
                        facet
                            .iter()
                            .filter(|r| r.metric == *metric)
                            .map(|r| {
                                let slot = algorithm_slot[r.algorithm.as_str()] as f64;
                                let x0 = slot + GROUP_GAP / 2.0 + mi as f64 * bar_width;
                                let x1 = x0 + bar_width * 0.92;
                                Rectangle::new([(x0, 0.0), (x1, r.value)], color.filled())
                            }),
                    )
                    .map_err(Error::render)?;
                // one legend is enough for the whole figure
                if di == 0 && ai == 0 {
                    series.label(metric.clone()).legend(move |(x, y)| {
                        Rectangle::new([(x, y - 4), (x + 12, y + 4)], color.filled())
                    });
                }
            }

            if di == 0 && ai == 0 {
                chart
                    .configure_series_labels()
                    .background_style(WHITE.mix(0.85))
                    .border_style(BLACK)
                    .position(SeriesLabelPosition::UpperRight)
                    .draw()
                    .map_err(Error::render)?;
            }

            draw_rotated_algorithm_labels(panel, &chart, config, n_algorithms)?;
        }
    }

    Ok(())
}

/// Algorithm labels rotated 90 degrees beneath each group slot. The X axis
/// is linear over 0..n, so the slot centers map linearly into the plotting
/// area's pixel range.
fn draw_rotated_algorithm_labels(
    panel: &DrawingArea<BitMapBackend<'_>, Shift>,
    chart: &ChartContext<'_, BitMapBackend<'_>, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    config: &StudyConfig,
    n_algorithms: usize,
) -> Result<()> {
    let label_style = TextStyle::from(("sans-serif", 12).into_font())
        .color(&BLACK)
        .transform(FontTransform::Rotate90)
        .pos(Pos::new(HPos::Left, VPos::Center));

    let (plot_x, plot_y) = chart.plotting_area().get_pixel_range();
    let (panel_x, panel_y) = panel.get_pixel_range();
    let plot_width = (plot_x.end - plot_x.start) as f64;

    for (slot, algorithm) in config.algorithms.iter().enumerate() {
        let center = (slot as f64 + 0.5) / n_algorithms as f64;
        let px = plot_x.start + (plot_width * center) as i32 - panel_x.start;
        let py = plot_y.end + 6 - panel_y.start;
        panel
            .draw(&Text::new(algorithm.clone(), (px, py), label_style.clone()))
            .map_err(Error::render)?;
    }

    Ok(())
}
