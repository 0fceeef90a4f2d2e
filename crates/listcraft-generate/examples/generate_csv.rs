use std::env;
use std::path::PathBuf;

use listcraft_core::ContentConfig;
use listcraft_generate::BatchProcessor;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = env::args().skip(1);
    let mut input: Option<PathBuf> = None;
    let mut output: Option<PathBuf> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--out" => output = args.next().map(PathBuf::from),
            _ => {
                if input.is_none() {
                    input = Some(PathBuf::from(arg));
                } else {
                    return Err("unexpected argument".into());
                }
            }
        }
    }

    let input = input.ok_or("missing input csv path")?;
    let output = output.unwrap_or_else(|| PathBuf::from("products_output.csv"));

    let processor = BatchProcessor::from_config(&ContentConfig::default())?;
    let result = processor.process_csv(&input, &output)?;

    println!(
        "rows={} with_violations={} out={}",
        result.report.rows_read,
        result.report.rows_with_violations,
        output.display()
    );
    Ok(())
}
