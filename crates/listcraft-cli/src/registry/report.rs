use std::fs::{OpenOptions, create_dir_all, remove_file};
use std::io::Write;
use std::path::{Path, PathBuf};

use listcraft_generate::BatchReport;

use super::RegistryResult;

/// Write the batch report as pretty JSON, replacing `path` atomically.
pub fn write_report(path: &Path, report: &BatchReport) -> RegistryResult<()> {
    let data = serde_json::to_vec_pretty(report)?;
    write_bytes_atomic(path, &data)
}

fn write_bytes_atomic(path: &Path, data: &[u8]) -> RegistryResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent)?;
        }
    }

    let tmp_path = temp_path(path);
    let written = write_synced(&tmp_path, data).and_then(|()| {
        std::fs::rename(&tmp_path, path)?;
        Ok(())
    });
    if written.is_err() {
        let _ = remove_file(&tmp_path);
    }
    written
}

fn write_synced(tmp_path: &Path, data: &[u8]) -> RegistryResult<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(tmp_path)?;
    file.write_all(data)?;
    file.sync_all()?;
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "report.json".to_string());
    path.with_file_name(format!("{file_name}.tmp"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_report_json() {
        let mut dir = std::env::temp_dir();
        dir.push(format!("listcraft_report_{}", uuid::Uuid::new_v4()));
        let path = dir.join("nested").join("report.json");

        let mut report = BatchReport::new("run-1".to_string());
        report.rows_read = 3;
        write_report(&path, &report).expect("write report");

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).expect("read report"))
                .expect("parse report");
        assert_eq!(json["run_id"], "run-1");
        assert_eq!(json["rows_read"], 3);
        assert!(!path.with_file_name("report.json.tmp").exists());
    }

    #[test]
    fn failed_rename_removes_temp_file() {
        let mut dir = std::env::temp_dir();
        dir.push(format!("listcraft_report_{}", uuid::Uuid::new_v4()));
        // A non-empty directory at the target path makes the rename fail.
        let path = dir.join("report.json");
        std::fs::create_dir_all(path.join("occupied")).expect("create blocking dir");

        let report = BatchReport::new("run-2".to_string());
        assert!(write_report(&path, &report).is_err());
        assert!(!dir.join("report.json.tmp").exists());
    }
}
