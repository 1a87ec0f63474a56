//! Configuration constants and output naming for the splitter.

/// Separator between the label and the content of a source line.
///
/// Only the first occurrence on a line separates the fields; any further
/// occurrences belong to the content.
pub const FIELD_DELIMITER: char = '\t';

/// Minimum number of digits in an output file name.
pub const FILE_NAME_WIDTH: usize = 4;

/// Extension of every output file.
pub const OUTPUT_EXTENSION: &str = "txt";

/// Build the output file name for a global record index.
///
/// The index is zero-padded to at least [`FILE_NAME_WIDTH`] digits. Larger
/// indexes simply produce a wider numeral.
///
/// # Examples
/// ```
/// use corpus_splitter::config::output_file_name;
///
/// assert_eq!(output_file_name(0), "0000.txt");
/// assert_eq!(output_file_name(42), "0042.txt");
/// assert_eq!(output_file_name(12345), "12345.txt");
/// ```
#[must_use]
pub fn output_file_name(index: usize) -> String {
    format!("{index:0FILE_NAME_WIDTH$}.{OUTPUT_EXTENSION}")
}
