//! Spreadsheet export via rust_xlsxwriter.

use crate::error::{Error, Result};
use crate::observation::ComparisonRecord;
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;

/// Write the long-format records to a single-sheet workbook.
pub fn write_xlsx(path: &Path, records: &[ComparisonRecord]) -> Result<()> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let sheet = workbook.add_worksheet();
    sheet.set_name("Simulated Data").map_err(Error::export)?;

    for (col, name) in super::SHEET_COLUMNS.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *name, &header_format)
            .map_err(Error::export)?;
    }

    for (i, record) in records.iter().enumerate() {
        let row = i as u32 + 1;
        sheet.write_string(row, 0, record.algorithm.as_str()).map_err(Error::export)?;
        sheet.write_string(row, 1, record.analyte.as_str()).map_err(Error::export)?;
        sheet
            .write_string(row, 2, record.dataset_type.as_str())
            .map_err(Error::export)?;
        sheet.write_string(row, 3, record.metric.as_str()).map_err(Error::export)?;
        sheet.write_number(row, 4, record.value).map_err(Error::export)?;
        sheet.write_number(row, 5, f64::from(record.rank)).map_err(Error::export)?;
        sheet
            .write_number(row, 6, f64::from(record.total_rank))
            .map_err(Error::export)?;
    }

    workbook.save(path).map_err(Error::export)?;
    Ok(())
}
