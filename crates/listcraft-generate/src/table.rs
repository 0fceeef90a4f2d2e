//! Row-oriented table contract between the batch processor and storage.

use crate::errors::BatchError;

/// One row: ordered column/value pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    values: Vec<(String, String)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    /// Overwrite `column` in place, or append it.
    pub fn set(&mut self, column: &str, value: impl Into<String>) {
        let value = value.into();
        match self.values.iter_mut().find(|(name, _)| name == column) {
            Some((_, slot)) => *slot = value,
            None => self.values.push((column.to_string(), value)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (column, value) in iter {
            let column: String = column.into();
            record.set(&column, value);
        }
        record
    }
}

/// Column header plus rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub columns: Vec<String>,
    pub records: Vec<Record>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            records: Vec::new(),
        }
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|name| name == column)
    }

    /// Append `column` to the header unless it is already present.
    pub fn ensure_column(&mut self, column: &str) {
        if !self.has_column(column) {
            self.columns.push(column.to_string());
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Value of `column` in `row`, if both exist.
    pub fn value(&self, row: usize, column: &str) -> Option<&str> {
        self.records.get(row).and_then(|record| record.get(column))
    }
}

/// Supplies the input table.
pub trait RecordSource {
    fn read_table(&mut self) -> Result<Table, BatchError>;
}

/// Persists the output table; returns bytes written.
pub trait RecordSink {
    fn write_table(&mut self, table: &Table) -> Result<u64, BatchError>;
}

impl RecordSource for Table {
    fn read_table(&mut self) -> Result<Table, BatchError> {
        Ok(self.clone())
    }
}

/// Keeps the written table in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub table: Option<Table>,
}

impl RecordSink for MemorySink {
    fn write_table(&mut self, table: &Table) -> Result<u64, BatchError> {
        self.table = Some(table.clone());
        Ok(0)
    }
}
