use std::path::Path;
use std::time::Instant;

use tracing::{debug, info, warn};

use listcraft_core::{ContentConfig, MissingFieldPolicy, ProductInput};

use crate::engine::ContentGenerator;
use crate::errors::BatchError;
use crate::input::csv::CsvSource;
use crate::model::{BatchReport, OUTPUT_COLUMNS};
use crate::output::csv::CsvSink;
use crate::table::{Record, RecordSink, RecordSource, Table};

/// Columns every input table must carry.
pub const REQUIRED_COLUMNS: [&str; 4] = ["brand", "product_type", "attributes", "current_description"];

/// Result of processing a table.
#[derive(Debug, Clone)]
pub struct BatchResult {
    pub table: Table,
    pub report: BatchReport,
}

/// Runs the content generator over every row of a table.
#[derive(Debug, Clone)]
pub struct BatchProcessor {
    generator: ContentGenerator,
    on_missing_field: MissingFieldPolicy,
}

impl BatchProcessor {
    pub fn new(generator: ContentGenerator, on_missing_field: MissingFieldPolicy) -> Self {
        Self {
            generator,
            on_missing_field,
        }
    }

    pub fn from_config(config: &ContentConfig) -> Result<Self, BatchError> {
        Ok(Self::new(
            ContentGenerator::from_config(config)?,
            config.batch.on_missing_field,
        ))
    }

    pub fn generator(&self) -> &ContentGenerator {
        &self.generator
    }

    /// Generate content for every row of `input` in memory.
    pub fn process_table(&self, input: &Table) -> Result<BatchResult, BatchError> {
        let start = Instant::now();
        let run_id = uuid::Uuid::new_v4().to_string();
        let mut report = BatchReport::new(run_id.clone());

        for column in REQUIRED_COLUMNS {
            if !input.has_column(column) {
                return Err(BatchError::MissingColumn(column.to_string()));
            }
        }

        info!(run_id = %run_id, rows = input.len(), "batch started");

        let mut output = Table::new(input.columns.clone());
        for column in OUTPUT_COLUMNS {
            output.ensure_column(column);
        }

        for (index, record) in input.records.iter().enumerate() {
            let row = index + 1;
            report.rows_read += 1;
            let mut out_record = record.clone();

            match product_from_record(record, row) {
                Ok(product) => {
                    let content = self.generator.generate(&product);
                    debug!(row, violations = content.violations.len(), "record generated");
                    report.record_content(&content);
                    for (column, value) in OUTPUT_COLUMNS.iter().zip(content.column_values()) {
                        out_record.set(column, value);
                    }
                }
                Err(BatchError::MissingField { row, field })
                    if self.on_missing_field == MissingFieldPolicy::SkipRow =>
                {
                    warn!(row, field = %field, "row skipped");
                    report.record_skip();
                    for column in OUTPUT_COLUMNS {
                        out_record.set(column, "");
                    }
                    out_record.set(
                        "violations",
                        format!("Skipped: missing required field '{field}'"),
                    );
                }
                Err(err) => return Err(err),
            }

            output.records.push(out_record);
        }

        report.duration_ms = start.elapsed().as_millis() as u64;
        info!(
            run_id = %run_id,
            rows = report.rows_read,
            with_violations = report.rows_with_violations,
            skipped = report.rows_skipped,
            "batch generated"
        );

        Ok(BatchResult {
            table: output,
            report,
        })
    }

    /// Read all rows, generate, then write the output once.
    pub fn run(
        &self,
        source: &mut dyn RecordSource,
        sink: &mut dyn RecordSink,
    ) -> Result<BatchResult, BatchError> {
        let start = Instant::now();
        let input = source.read_table()?;
        let mut result = self.process_table(&input)?;
        result.report.bytes_written = sink.write_table(&result.table)?;
        result.report.duration_ms = start.elapsed().as_millis() as u64;
        info!(
            run_id = %result.report.run_id,
            bytes = result.report.bytes_written,
            duration_ms = result.report.duration_ms,
            "batch written"
        );
        Ok(result)
    }

    /// CSV in, CSV out.
    pub fn process_csv(&self, input: &Path, output: &Path) -> Result<BatchResult, BatchError> {
        let mut source = CsvSource::new(input);
        let mut sink = CsvSink::new(output);
        self.run(&mut source, &mut sink)
    }
}

fn required<'a>(record: &'a Record, field: &str, row: usize) -> Result<&'a str, BatchError> {
    record.get(field).ok_or_else(|| BatchError::MissingField {
        row,
        field: field.to_string(),
    })
}

/// Build a product from a row. Blank values are allowed; absent ones are not.
pub fn product_from_record(record: &Record, row: usize) -> Result<ProductInput, BatchError> {
    let brand = required(record, "brand", row)?;
    let product_type = required(record, "product_type", row)?;
    let attributes = required(record, "attributes", row)?;
    let current_description = required(record, "current_description", row)?;

    Ok(
        ProductInput::new(brand, product_type, attributes, current_description)
            .with_keywords(record.get("keywords").unwrap_or_default())
            .with_current_bullets(record.get("current_bullets").unwrap_or_default()),
    )
}
