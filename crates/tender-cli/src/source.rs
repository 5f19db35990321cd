//! Local-directory document source.
//!
//! Stands in for the cloud drive collaborator: lists flat-text files in a
//! directory and reads them. Unsupported file types are skipped with a
//! warning and contribute empty text, the same soft-skip policy the drive
//! collaborator applies to unsupported exports.

use std::fs;
use std::path::{Path, PathBuf};
use tender_domain::{DocumentSource, SourceFile};
use tracing::{error, warn};

/// Reads tender documents from a local directory
pub struct DirSource {
    dir: PathBuf,
}

impl DirSource {
    /// Create a source over the given directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn mime_type_for(path: &Path) -> Option<&'static str> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("txt") | Some("text") => Some("text/plain"),
            Some("md") => Some("text/markdown"),
            _ => None,
        }
    }
}

impl DocumentSource for DirSource {
    type Error = std::io::Error;

    fn list_files(&self) -> Result<Vec<SourceFile>, Self::Error> {
        let mut files = Vec::new();

        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let name = entry.file_name().to_string_lossy().into_owned();
            match Self::mime_type_for(&path) {
                Some(mime_type) => files.push(SourceFile {
                    id: path.to_string_lossy().into_owned(),
                    name,
                    mime_type: mime_type.to_string(),
                }),
                None => warn!("Skipping unsupported file: {}", name),
            }
        }

        // Directory order is platform-dependent; keep runs reproducible.
        files.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(files)
    }

    fn read_text(&self, file: &SourceFile) -> Result<String, Self::Error> {
        fs::read_to_string(&file.id)
    }
}

/// Concatenate all readable documents with blank-line separators.
///
/// A file that fails to read contributes nothing; the run continues with
/// the remaining documents.
pub fn gather_text<S>(source: &S) -> Result<String, S::Error>
where
    S: DocumentSource,
    S::Error: std::fmt::Display,
{
    let files = source.list_files()?;

    let mut all_text = String::new();
    for file in &files {
        match source.read_text(file) {
            Ok(text) => {
                all_text.push_str(&text);
                all_text.push_str("\n\n");
            }
            Err(e) => error!("Failed to read {}: {}", file.name, e),
        }
    }

    Ok(all_text)
}
