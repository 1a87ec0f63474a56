//! Main splitter service that ties parsing and writing together.

use std::fs;
use std::path::Path;

use crate::error::{Result, SplitterError};
use crate::parse::{non_blank_lines, normalize_newlines, parse_record};
use crate::types::SplitSummary;
use crate::writer::CorpusWriter;

/// Split a tab-delimited source file into `<dest>/<label>/<index>.txt` files.
///
/// The whole source is read before anything is written, so an unreadable
/// source produces no output. Records are then written strictly in file
/// order. The first error aborts the run and files already written stay on
/// disk.
///
/// # Arguments
/// * `source` - Path to the tab-delimited input file
/// * `dest` - Existing destination root directory
///
/// # Returns
/// A `SplitSummary` with the record counts of the run
pub fn split_file(source: impl AsRef<Path>, dest: impl AsRef<Path>) -> Result<SplitSummary> {
    let source = source.as_ref();
    let text = fs::read_to_string(source).map_err(|e| SplitterError::from_read(source, e))?;

    tracing::debug!(path = %source.display(), bytes = text.len(), "read source file");
    split_text(&text, dest)
}

/// Split already loaded source text into `dest`.
///
/// Line terminators are normalized to `\n` before splitting into lines.
/// The global index starts at 0 and advances once per non-blank line,
/// independent of the label.
pub fn split_text(text: &str, dest: impl AsRef<Path>) -> Result<SplitSummary> {
    let text = normalize_newlines(text);
    let mut writer = CorpusWriter::new(dest.as_ref());
    let mut summary = SplitSummary::default();

    for (index, (line_number, line)) in non_blank_lines(&text).enumerate() {
        let record = parse_record(line_number, line)?;
        writer.write_record(index, &record)?;
        summary.record(record.label);
    }

    tracing::info!(
        records = summary.records_written,
        labels = summary.label_count(),
        dest = %writer.dest().display(),
        "split complete"
    );
    Ok(summary)
}
