//! Tabular export of extraction records.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::ExportError;
use crate::models::record::ExtractionRecord;

/// Result type for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;

/// Output table format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Comma-separated values with a header row.
    #[default]
    Csv,
    /// JSON array of objects keyed by the column headers.
    Json,
}

impl ExportFormat {
    /// Infer the format from a file extension; anything but `.json` is CSV.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ExportFormat::Json,
            _ => ExportFormat::Csv,
        }
    }
}

/// What the exporter did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// Nothing to write; no file was created.
    Skipped,
    /// The table was written.
    Written { path: PathBuf, rows: usize },
}

/// Writes records as a labeled table to a single destination file.
#[derive(Debug, Clone)]
pub struct TabularExporter {
    path: PathBuf,
    format: ExportFormat,
}

impl TabularExporter {
    pub fn new(path: impl Into<PathBuf>, format: ExportFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    /// Exporter whose format follows the destination's extension.
    pub fn for_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = ExportFormat::from_path(&path);
        Self { path, format }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> ExportFormat {
        self.format
    }

    /// Write `records`, replacing any existing file at the destination.
    ///
    /// An empty record list is a no-op with a warning.
    pub fn export(&self, records: &[ExtractionRecord]) -> Result<ExportOutcome> {
        if records.is_empty() {
            warn!("No records to export; {} not written", self.path.display());
            return Ok(ExportOutcome::Skipped);
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }

        let file = File::create(&self.path).map_err(|source| self.io_error(source))?;

        match self.format {
            ExportFormat::Csv => write_csv(file, records)?,
            ExportFormat::Json => {
                let mut writer = BufWriter::new(file);
                serde_json::to_writer_pretty(&mut writer, records)?;
                writer.flush().map_err(|source| self.io_error(source))?;
            }
        }

        info!("Wrote {} records to {}", records.len(), self.path.display());
        Ok(ExportOutcome::Written {
            path: self.path.clone(),
            rows: records.len(),
        })
    }

    fn io_error(&self, source: std::io::Error) -> ExportError {
        ExportError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

/// Render records as CSV text, header row first.
pub fn render_csv(records: &[ExtractionRecord]) -> Result<String> {
    let mut buf = Vec::new();
    write_csv(&mut buf, records)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn write_csv<W: Write>(writer: W, records: &[ExtractionRecord]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(ExtractionRecord::HEADERS)?;
    for record in records {
        wtr.write_record(record.row())?;
    }

    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::{Arc, Mutex};

    fn records() -> Vec<ExtractionRecord> {
        vec![
            ExtractionRecord {
                source_identifier: "east.pdf".to_string(),
                constituency_name: "Example East".to_string(),
                total_electors: "45678".to_string(),
                valid_votes_polled: "38234".to_string(),
                nota_votes: "1234".to_string(),
            },
            ExtractionRecord::empty("west, old.pdf"),
        ]
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(ExportFormat::from_path(Path::new("out/data.JSON")), ExportFormat::Json);
        assert_eq!(ExportFormat::from_path(Path::new("out/data.csv")), ExportFormat::Csv);
        assert_eq!(ExportFormat::from_path(Path::new("out/data")), ExportFormat::Csv);
    }

    #[test]
    fn test_render_csv() {
        let csv = render_csv(&records()[..1]).unwrap();
        assert_eq!(
            csv,
            "Filename,Constituency Name,Total Electors,Valid Votes Polled,NOTA Votes\n\
             east.pdf,Example East,45678,38234,1234\n"
        );
    }

    /// Log sink shared between a test and its subscriber.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_empty_records_write_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("results.csv");

        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let outcome = tracing::subscriber::with_default(subscriber, || {
            TabularExporter::for_path(&path).export(&[]).unwrap()
        });

        assert_eq!(outcome, ExportOutcome::Skipped);
        assert!(!path.exists());
        assert!(!dir.path().join("out").exists());

        let logged = logs.contents();
        assert!(logged.contains("WARN"), "{logged}");
        assert!(logged.contains("No records to export"), "{logged}");
    }

    #[test]
    fn test_csv_export_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("results.csv");

        let outcome = TabularExporter::for_path(&path).export(&records()).unwrap();
        assert_eq!(outcome, ExportOutcome::Written { path: path.clone(), rows: 2 });

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "Filename,Constituency Name,Total Electors,Valid Votes Polled,NOTA Votes\n\
             east.pdf,Example East,45678,38234,1234\n\
             \"west, old.pdf\",,,,\n"
        );
    }

    #[test]
    fn test_export_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.csv");
        let stale = "stale content that is much longer than the new table ".repeat(20);
        fs::write(&path, stale).unwrap();

        TabularExporter::for_path(&path).export(&records()[..1]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(!content.contains("stale"));
        assert_eq!(content.lines().count(), 2);
    }

    #[test]
    fn test_json_export_uses_headers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");

        TabularExporter::new(&path, ExportFormat::Json).export(&records()).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value[0]["Constituency Name"], "Example East");
        assert_eq!(value[1]["NOTA Votes"], "");

        let back: Vec<ExtractionRecord> = serde_json::from_value(value).unwrap();
        assert_eq!(back, records());
    }

    #[test]
    fn test_unwritable_destination_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "x").unwrap();

        let err = TabularExporter::for_path(blocker.join("results.csv"))
            .export(&records())
            .unwrap_err();
        assert!(matches!(err, ExportError::Io { .. }));
    }
}
