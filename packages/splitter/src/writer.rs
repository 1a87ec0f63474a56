//! Writer for the directory-per-label corpus layout.

use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::config::output_file_name;
use crate::error::{Result, SplitterError};
use crate::types::Record;

/// Writes records as `<dest>/<label>/<index>.txt`.
///
/// The destination root is never created here. Label directories are created
/// one path segment deep the first time a label is written.
#[derive(Debug)]
pub struct CorpusWriter {
    dest: PathBuf,
    ready_labels: HashSet<String>,
}

impl CorpusWriter {
    /// Create a writer rooted at `dest`.
    #[must_use]
    pub fn new(dest: impl Into<PathBuf>) -> Self {
        Self {
            dest: dest.into(),
            ready_labels: HashSet::new(),
        }
    }

    /// Destination root.
    #[must_use]
    pub fn dest(&self) -> &Path {
        &self.dest
    }

    /// Write the content of `record` under the file name for `index`.
    ///
    /// An existing file with the same name is truncated and overwritten.
    ///
    /// # Returns
    /// Path of the written file.
    pub fn write_record(&mut self, index: usize, record: &Record<'_>) -> Result<PathBuf> {
        let dir = self.ensure_label_dir(record.label)?;
        let path = dir.join(output_file_name(index));

        fs::write(&path, record.content.as_bytes()).map_err(|source| {
            SplitterError::OutputUnwritable {
                path: path.clone(),
                source,
            }
        })?;

        tracing::debug!(index, label = record.label, path = %path.display(), "wrote record");
        Ok(path)
    }

    /// Make sure the directory for `label` exists, creating it if needed.
    fn ensure_label_dir(&mut self, label: &str) -> Result<PathBuf> {
        let dir = self.dest.join(label);
        if self.ready_labels.contains(label) {
            return Ok(dir);
        }

        match fs::create_dir(&dir) {
            Ok(()) => tracing::debug!(path = %dir.display(), "created label directory"),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {}
            Err(source) => {
                return Err(SplitterError::OutputUnwritable { path: dir, source });
            }
        }

        self.ready_labels.insert(label.to_string());
        Ok(dir)
    }
}
