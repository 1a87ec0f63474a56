//! Core data types for the splitter.

use std::collections::BTreeMap;

/// One labeled record parsed from a non-blank source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record<'a> {
    /// First field of the line, used verbatim as a directory name.
    pub label: &'a str,

    /// Remainder of the line after the first delimiter, including the line
    /// terminator when the source line had one.
    pub content: &'a str,
}

impl<'a> Record<'a> {
    /// Create a new record.
    #[must_use]
    pub fn new(label: &'a str, content: &'a str) -> Self {
        Self { label, content }
    }
}

/// Outcome of a completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitSummary {
    /// Number of files written, equal to the number of records.
    pub records_written: usize,

    /// Records written per label, ordered by label.
    pub per_label: BTreeMap<String, usize>,
}

impl SplitSummary {
    /// Account for one written record.
    pub fn record(&mut self, label: &str) {
        self.records_written += 1;
        *self.per_label.entry(label.to_string()).or_default() += 1;
    }

    /// Number of distinct labels seen.
    #[must_use]
    pub fn label_count(&self) -> usize {
        self.per_label.len()
    }
}
