//! Csv export with the same column order as the spreadsheet sheet.

use crate::error::{Error, Result};
use crate::observation::ComparisonRecord;
use std::path::Path;

/// Write the long-format records as csv.
pub fn write_csv(path: &Path, records: &[ComparisonRecord]) -> Result<()> {
    let mut writer = ::csv::Writer::from_path(path).map_err(Error::export)?;

    writer.write_record(super::SHEET_COLUMNS).map_err(Error::export)?;
    for record in records {
        writer
            .write_record([
                record.algorithm.clone(),
                record.analyte.clone(),
                record.dataset_type.clone(),
                record.metric.clone(),
                record.value.to_string(),
                record.rank.to_string(),
                record.total_rank.to_string(),
            ])
            .map_err(Error::export)?;
    }
    writer.flush()?;

    Ok(())
}
