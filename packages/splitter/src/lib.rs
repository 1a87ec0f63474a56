//! Corpus Splitter - Turn a labeled tab-delimited file into a directory-per-label corpus.
//!
//! Each non-blank `<label>\t<content>` line of the source file becomes one
//! file `<dest>/<label>/<NNNN>.txt`, where `NNNN` is a global zero-padded
//! index shared by all labels. The layout is the usual input for
//! text-classification tooling that expects one directory per class.
//!
//! # Example
//!
//! ```
//! use corpus_splitter::config::output_file_name;
//!
//! assert_eq!(output_file_name(7), "0007.txt");
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Delimiter and output naming constants
//! - [`types`]: Core data types (Record, SplitSummary)
//! - [`error`]: Error types and Result alias
//! - [`parse`]: Blank-line filtering and record parsing
//! - [`writer`]: Label directory and file output
//! - [`splitter`]: The split pipeline
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod parse;
pub mod splitter;
pub mod types;
pub mod writer;

// Re-export main functions
pub use splitter::{split_file, split_text};

// Re-export commonly used items
pub use error::{Result, SplitterError};
pub use types::{Record, SplitSummary};
pub use writer::CorpusWriter;
