use std::fs::File;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::errors::BatchError;
use crate::table::{Record, RecordSource, Table};

/// Reads a headed CSV file into a [`Table`].
///
/// Rows shorter than the header simply lack the trailing columns, which the
/// batch processor reports as missing fields. A header naming the same column
/// twice is rejected, since records are keyed by column name.
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for CsvSource {
    fn read_table(&mut self) -> Result<Table, BatchError> {
        read_table_csv(&self.path)
    }
}

pub fn read_table_csv(path: &Path) -> Result<Table, BatchError> {
    let file = File::open(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => BatchError::InputNotFound(path.to_path_buf()),
        _ => BatchError::Io(err),
    })?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let columns = reader
        .headers()?
        .iter()
        .map(|header| header.to_string())
        .collect::<Vec<_>>();
    for (index, column) in columns.iter().enumerate() {
        if columns[..index].contains(column) {
            return Err(BatchError::DuplicateColumn(column.clone()));
        }
    }

    let mut table = Table::new(columns);
    for row in reader.records() {
        let row = row?;
        let record = table
            .columns
            .iter()
            .zip(row.iter())
            .map(|(column, value)| (column.as_str(), value))
            .collect::<Record>();
        table.records.push(record);
    }

    Ok(table)
}
