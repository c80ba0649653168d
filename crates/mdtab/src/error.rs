//! Error types for table construction.

use std::io;
use std::path::PathBuf;

/// Error type for building a table from line input.
///
/// All errors are fatal to the single accumulate pass: no partial table is
/// rendered once one of these is raised.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// A data line arrived before any header line declared a column, so
    /// there is no current column to append to.
    #[error("line {line}: data line before any column header (expected a line starting with '#')")]
    DataBeforeHeader {
        /// 1-based input line number of the offending data line.
        line: usize,
    },

    /// The input file could not be opened.
    #[error("cannot read input file '{path}': {source}")]
    Unreadable {
        /// Path as given on the command line.
        path: PathBuf,
        /// Underlying open error.
        source: io::Error,
    },

    /// Reading from the input stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
