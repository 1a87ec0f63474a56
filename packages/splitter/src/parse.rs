//! Line filtering and record parsing.

use std::borrow::Cow;

use crate::config::FIELD_DELIMITER;
use crate::error::{Result, SplitterError};
use crate::types::Record;

/// Convert every line terminator in `text` to `\n`.
///
/// Both `\r\n` and a lone `\r` end a line, the way text-mode readers treat
/// them. Borrows `text` when it already uses `\n` only.
pub fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Whether a line counts as blank.
///
/// Besides Unicode whitespace, the ASCII separators U+001C to U+001F are
/// stripped, so a line holding only those is blank too.
#[must_use]
pub fn is_blank(line: &str) -> bool {
    line.trim_matches(|c: char| c.is_whitespace() || ('\x1c'..='\x1f').contains(&c))
        .is_empty()
}

/// Iterate over the non-blank lines of `text` in file order.
///
/// Each item is `(line_number, line)` where `line_number` is 1-based and
/// counts every physical line, blank ones included. Lines keep their
/// terminator. `text` is expected to have gone through
/// [`normalize_newlines`] first.
pub fn non_blank_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.split_inclusive('\n')
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .filter(|(_, line)| !is_blank(line))
}

/// Parse one non-blank line into a [`Record`].
///
/// The line is split on the first tab only: everything before it is the
/// label and everything after it, further tabs included, is the content.
///
/// # Errors
/// Returns [`SplitterError::MalformedRecord`] when the line has no tab.
///
/// # Examples
/// ```
/// use corpus_splitter::parse::parse_record;
///
/// let record = parse_record(1, "cat\thello\tworld\n").unwrap();
/// assert_eq!(record.label, "cat");
/// assert_eq!(record.content, "hello\tworld\n");
/// ```
pub fn parse_record(line_number: usize, line: &str) -> Result<Record<'_>> {
    let (label, content) = line.split_once(FIELD_DELIMITER).ok_or_else(|| {
        SplitterError::MalformedRecord {
            line_number,
            line: line.trim_end_matches('\n').to_string(),
        }
    })?;

    Ok(Record::new(label, content))
}
