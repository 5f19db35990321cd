//! CSV result sink.
//!
//! Stands in for the spreadsheet collaborator: writes one sheet per record
//! as `<output dir>/<sheet name>.csv` with the fixed header row the
//! spreadsheet uses.

use std::fs;
use std::path::PathBuf;
use tender_domain::RecordSink;
use tracing::info;

/// Fixed column titles of the output sheet
const HEADER: [&str; 2] = ["見出し", "内容"];

/// Writes records as two-column CSV sheets into a directory
pub struct CsvSink {
    output_dir: PathBuf,
}

impl CsvSink {
    /// Create a sink writing into the given directory
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Quote a CSV cell when it contains a delimiter, quote, or newline
    fn escape_cell(cell: &str) -> String {
        if cell.contains(',') || cell.contains('"') || cell.contains('\n') {
            format!("\"{}\"", cell.replace('"', "\"\""))
        } else {
            cell.to_string()
        }
    }

    /// Sheet names become file names; strip path-hostile characters
    fn sanitize_sheet_name(name: &str) -> String {
        let cleaned: String = name
            .chars()
            .map(|c| match c {
                '/' | '\\' | ':' | '\0' => '_',
                other => other,
            })
            .collect();
        let trimmed = cleaned.trim();
        if trimmed.is_empty() {
            "未名案件".to_string()
        } else {
            trimmed.to_string()
        }
    }
}

impl RecordSink for CsvSink {
    type Error = std::io::Error;

    fn write_record(&mut self, sheet_name: &str, rows: &[[String; 2]]) -> Result<(), Self::Error> {
        fs::create_dir_all(&self.output_dir)?;

        let path = self
            .output_dir
            .join(format!("{}.csv", Self::sanitize_sheet_name(sheet_name)));

        let mut lines = vec![format!("{},{}", HEADER[0], HEADER[1])];
        for row in rows {
            lines.push(format!(
                "{},{}",
                Self::escape_cell(&row[0]),
                Self::escape_cell(&row[1])
            ));
        }

        fs::write(&path, lines.join("\n") + "\n")?;
        info!("Wrote result sheet to {}", path.display());
        Ok(())
    }
}
