use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::domain::project_row::{CSV_COLUMNS, ProjectRow};
use crate::services::reporter::Reporter;
use crate::services::severity_source::{SeveritySource, SeveritySourceError};

#[derive(Error, Debug)]
pub enum UpdateError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("severity lookup failed: {0}")]
    Severity(#[from] SeveritySourceError),
    #[error("failed to replace csv: {0}")]
    Replace(#[from] tempfile::PersistError),
}

/// Streams the csv at `input_path` row by row, merging severity counts
/// from `source` into each data row, and atomically replaces the file
/// on full success. On any failure the original file is untouched.
pub fn rewrite(
    input_path: &Path,
    source: &dyn SeveritySource,
    reporter: &dyn Reporter,
) -> Result<(), UpdateError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .from_path(input_path)?;

    // The temp file must live next to the input so persist is a
    // same-filesystem atomic rename.
    let temp_dir = input_path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut temp_file = NamedTempFile::new_in(temp_dir)?;

    {
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_writer(temp_file.as_file_mut());

        for (index, record) in reader.deserialize::<ProjectRow>().enumerate() {
            let mut row = record?;

            // A literal header in the first row is regenerated, not
            // sent to the severity source.
            if index == 0 && row.name == "name" {
                writer.write_record(&CSV_COLUMNS)?;
                continue;
            }

            reporter.info(&format!("Updating csv for project {}", row.name));
            let tally = source.severity_counts(&row.id)?;
            row.apply_tally(&tally);
            writer.serialize(&row)?;
        }

        writer.flush()?;
    }

    temp_file.persist(input_path)?;
    Ok(())
}
