//! CSV sink for extracted records
//!
//! Appends record batches to the output file in a fixed column order. The
//! sink never writes a header row and never creates the file for an empty
//! batch; header placement is the caller's concern.

use crate::scrape::MovieRecord;
use std::fs::OpenOptions;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while writing records
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Appends a batch of records to the CSV file at `path`
///
/// An empty batch is a no-op: the file is not opened or created. Otherwise
/// the file is opened in append mode (created if missing), one row is
/// written per record in the column order `title,date,rating,plot`, and the
/// handle is flushed and released before returning. Embedded separators,
/// quotes, and newlines in field text are escaped, not rejected.
///
/// # Arguments
///
/// * `path` - Destination CSV file
/// * `records` - The records to append
///
/// # Returns
///
/// * `Ok(())` - All records written (or nothing to write)
/// * `Err(SinkError)` - Opening, writing, or flushing failed
pub fn append(path: &Path, records: &[MovieRecord]) -> Result<(), SinkError> {
    if records.is_empty() {
        return Ok(());
    }

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut writer = csv::Writer::from_writer(file);

    for record in records {
        writer.write_record([
            record.title.as_str(),
            record.date.as_str(),
            record.rating.as_str(),
            record.plot.as_str(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
