use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use listcraft_core::ViolationLog;

/// Columns appended to every output row, in order.
pub const OUTPUT_COLUMNS: [&str; 6] = [
    "walmart_title",
    "html_bullets",
    "new_description",
    "meta_title",
    "meta_description",
    "violations",
];

/// Listing content generated for one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedContent {
    pub walmart_title: String,
    pub html_bullets: String,
    pub new_description: String,
    pub meta_title: String,
    pub meta_description: String,
    pub violations: ViolationLog,
}

impl GeneratedContent {
    /// Violations joined with `"; "`, or `None`.
    pub fn violations_display(&self) -> String {
        self.violations.render()
    }

    /// Values for [`OUTPUT_COLUMNS`], in the same order.
    pub fn column_values(&self) -> [String; 6] {
        [
            self.walmart_title.clone(),
            self.html_bullets.clone(),
            self.new_description.clone(),
            self.meta_title.clone(),
            self.meta_description.clone(),
            self.violations_display(),
        ]
    }
}

/// Summary of a batch run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub run_id: String,
    pub started_at: DateTime<Utc>,
    pub rows_read: u64,
    pub rows_generated: u64,
    pub rows_skipped: u64,
    pub rows_with_violations: u64,
    pub violations_by_code: BTreeMap<String, u64>,
    pub bytes_written: u64,
    pub duration_ms: u64,
}

impl BatchReport {
    pub fn new(run_id: String) -> Self {
        Self {
            run_id,
            started_at: Utc::now(),
            rows_read: 0,
            rows_generated: 0,
            rows_skipped: 0,
            rows_with_violations: 0,
            violations_by_code: BTreeMap::new(),
            bytes_written: 0,
            duration_ms: 0,
        }
    }

    pub fn record_content(&mut self, content: &GeneratedContent) {
        self.rows_generated += 1;
        if !content.violations.is_empty() {
            self.rows_with_violations += 1;
        }
        for violation in content.violations.iter() {
            *self
                .violations_by_code
                .entry(violation.kind.code().to_string())
                .or_insert(0) += 1;
        }
    }

    pub fn record_skip(&mut self) {
        self.rows_skipped += 1;
    }
}
