//! Report persistence - JSON report plus per-block CSV sheets.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::error::{Result, SieveError};
use crate::pipeline::QualityReport;
use crate::report::Block;

/// Persists whatever blocks are present in a report.
///
/// The output directory name is chosen by the caller (timestamped
/// directories are an orchestration concern); absent blocks are simply
/// not written, never treated as an error.
pub struct ReportWriter;

impl ReportWriter {
    /// Create a new writer.
    pub fn new() -> Self {
        Self
    }

    /// Write `report.json` and one `<block>.csv` sheet per block into
    /// `dir`, creating the directory if needed. Returns written paths.
    pub fn write(&self, report: &QualityReport, dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).map_err(|e| {
            SieveError::Persistence(format!(
                "Failed to create directory '{}': {}",
                dir.display(),
                e
            ))
        })?;

        let mut written = Vec::new();

        let json_path = dir.join("report.json");
        let file = File::create(&json_path).map_err(|e| {
            SieveError::Persistence(format!(
                "Failed to create file '{}': {}",
                json_path.display(),
                e
            ))
        })?;
        serde_json::to_writer_pretty(BufWriter::new(file), report)
            .map_err(|e| SieveError::Persistence(format!("Failed to serialize report: {}", e)))?;
        written.push(json_path);

        for block in &report.report.blocks {
            let path = dir.join(format!("{}.csv", block.name));
            self.write_sheet(block, &path)?;
            written.push(path);
        }

        Ok(written)
    }

    /// Write one block as a CSV sheet: header row of field names, one
    /// record per row label. Fields a row does not carry stay empty.
    fn write_sheet(&self, block: &Block, path: &Path) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)?;

        let field_names = block.field_names();
        let mut header = vec![""];
        header.extend(field_names.iter().copied());
        writer.write_record(&header)?;

        for (label, fields) in &block.rows {
            let mut record = vec![label.clone()];
            for name in &field_names {
                record.push(
                    fields
                        .get(*name)
                        .map(|f| f.render())
                        .unwrap_or_default(),
                );
            }
            writer.write_record(&record)?;
        }

        writer.flush().map_err(|e| {
            SieveError::Persistence(format!("Failed to flush '{}': {}", path.display(), e))
        })?;
        Ok(())
    }
}

impl Default for ReportWriter {
    fn default() -> Self {
        Self::new()
    }
}
