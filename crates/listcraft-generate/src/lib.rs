//! Listing content generation for listcraft.
//!
//! This crate turns product attribute rows into policy-checked listing
//! content (title, bullets, description, meta tags) and runs that transform
//! over whole tables, CSV being the reference storage format.

pub mod batch;
pub mod engine;
pub mod errors;
pub mod generators;
pub mod input;
pub mod model;
pub mod output;
pub mod table;

pub use batch::{BatchProcessor, BatchResult, REQUIRED_COLUMNS, product_from_record};
pub use engine::ContentGenerator;
pub use errors::BatchError;
pub use generators::FieldOutput;
pub use model::{BatchReport, GeneratedContent, OUTPUT_COLUMNS};
pub use table::{MemorySink, Record, RecordSink, RecordSource, Table};
