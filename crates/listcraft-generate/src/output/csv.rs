use std::fs::{File, create_dir_all, remove_file};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::errors::BatchError;
use crate::table::{RecordSink, Table};

/// Writes a [`Table`] as CSV, replacing the target atomically.
#[derive(Debug, Clone)]
pub struct CsvSink {
    path: PathBuf,
}

impl CsvSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSink for CsvSink {
    fn write_table(&mut self, table: &Table) -> Result<u64, BatchError> {
        write_table_csv(&self.path, table)
    }
}

/// Write `table` to `path` through a sibling `.tmp` file, returning bytes written.
///
/// The `.tmp` file is removed when any step before the rename fails.
pub fn write_table_csv(path: &Path, table: &Table) -> Result<u64, BatchError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent)?;
        }
    }

    let tmp_path = temp_path(path);
    let written = write_rows(&tmp_path, table).and_then(|bytes| {
        std::fs::rename(&tmp_path, path)?;
        Ok(bytes)
    });
    if written.is_err() {
        let _ = remove_file(&tmp_path);
    }
    written
}

fn write_rows(tmp_path: &Path, table: &Table) -> Result<u64, BatchError> {
    let writer = BufWriter::new(File::create(tmp_path)?);
    let counting = CountingWriter::new(writer);
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(counting);

    writer.write_record(&table.columns)?;
    for record in &table.records {
        let row: Vec<&str> = table
            .columns
            .iter()
            .map(|column| record.get(column).unwrap_or_default())
            .collect();
        writer.write_record(&row)?;
    }

    writer.flush()?;
    let counting = writer.into_inner().map_err(|err| err.into_error())?;
    let bytes = counting.bytes_written();
    counting.into_inner().into_inner().map_err(|err| err.into_error())?.sync_all()?;
    Ok(bytes)
}

fn temp_path(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output.csv".to_string());
    path.with_file_name(format!("{file_name}.tmp"))
}

struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.bytes
    }

    fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}
