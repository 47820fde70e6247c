//! Wide-table renderer: a styled grid image of the comparison table.

use crate::error::{Error, Result};
use crate::reshape::WideTable;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

use super::IMAGE_WIDTH;

const MARGIN: u32 = 10;
const ROW_HEIGHT: u32 = 22;
const HEADER_HEIGHT: u32 = 28;
const HEADER_FILL: RGBColor = RGBColor(217, 225, 242);
const GRID: RGBColor = RGBColor(120, 120, 120);

/// Pixel height needed to draw `table` with the fixed row metrics.
pub(crate) fn table_pixel_height(table: &WideTable) -> u32 {
    HEADER_HEIGHT + table.rows.len() as u32 * ROW_HEIGHT + 2 * MARGIN
}

/// Render the wide comparison table to a standalone PNG.
pub fn render_table(path: &Path, table: &WideTable) -> Result<()> {
    let root = BitMapBackend::new(path, (IMAGE_WIDTH, table_pixel_height(table)))
        .into_drawing_area();
    root.fill(&WHITE).map_err(Error::render)?;
    draw_table(&root, table)?;
    root.present().map_err(Error::render)?;
    Ok(())
}

/// Draw the table grid onto an existing drawing area.
///
/// Header cells are highlighted; numeric cells are formatted to three
/// decimal places and centered, ranks as integers.
pub(crate) fn draw_table(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    table: &WideTable,
) -> Result<()> {
    let headers = table.column_headers();
    let columns = headers.len() as u32;
    let (width, _) = area.dim_in_pixel();
    let cell_width = (width - 2 * MARGIN) / columns;
    let n_metrics = table.metrics.len();

    let header_style = TextStyle::from(("sans-serif", 14).into_font())
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center));
    let cell_style = TextStyle::from(("sans-serif", 13).into_font())
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center));

    let x = |col: u32| (MARGIN + col * cell_width) as i32;
    let header_bottom = (MARGIN + HEADER_HEIGHT) as i32;

    for (col, header) in headers.iter().enumerate() {
        let col = col as u32;
        area.draw(&Rectangle::new(
            [(x(col), MARGIN as i32), (x(col + 1), header_bottom)],
            HEADER_FILL.filled(),
        ))
        .map_err(Error::render)?;
        area.draw(&Rectangle::new(
            [(x(col), MARGIN as i32), (x(col + 1), header_bottom)],
            GRID,
        ))
        .map_err(Error::render)?;
        area.draw(&Text::new(
            header.clone(),
            (x(col) + cell_width as i32 / 2, MARGIN as i32 + HEADER_HEIGHT as i32 / 2),
            header_style.clone(),
        ))
        .map_err(Error::render)?;
    }

    for (row_idx, row) in table.rows.iter().enumerate() {
        let y0 = header_bottom + row_idx as i32 * ROW_HEIGHT as i32;
        let y1 = y0 + ROW_HEIGHT as i32;

        let mut cells: Vec<String> = Vec::with_capacity(headers.len());
        cells.push(row.dataset_type.clone());
        cells.push(row.analyte.clone());
        cells.push(row.algorithm.clone());
        cells.extend(row.values.iter().map(|v| format!("{v:.3}")));
        cells.extend(row.ranks.iter().map(ToString::to_string));
        cells.push(row.total_rank.to_string());
        debug_assert_eq!(cells.len(), 3 + 2 * n_metrics + 1);

        for (col, cell) in cells.into_iter().enumerate() {
            let col = col as u32;
            area.draw(&Rectangle::new([(x(col), y0), (x(col + 1), y1)], GRID))
                .map_err(Error::render)?;
            area.draw(&Text::new(
                cell,
                (x(col) + cell_width as i32 / 2, y0 + ROW_HEIGHT as i32 / 2),
                cell_style.clone(),
            ))
            .map_err(Error::render)?;
        }
    }

    Ok(())
}
