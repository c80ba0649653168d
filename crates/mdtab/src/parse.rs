//! Line classification and the accumulate pass.
//!
//! Input is strictly sequential: each header line appends a new column and
//! makes it current, each data line appends to the current column. The whole
//! stream is buffered into a [`Table`] before anything is rendered.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::TableError;
use crate::table::{Column, Table};

/// The two line classes of the input format.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Line {
    /// `#<sep><title>`: declares a new column.
    Header {
        /// Title text after the separator character.
        title: String,
    },
    /// Anything else: a data cell for the current column.
    Data {
        /// The full line content.
        text: String,
    },
}

impl Line {
    /// Classify one input line (without its line terminator).
    ///
    /// The single character right after `#` is a separator and is discarded,
    /// whatever it is. A bare `"#"` declares a column with an empty title.
    /// Data lines keep their content untouched, interior and trailing spaces
    /// included.
    pub fn classify(line: &str) -> Line {
        match line.strip_prefix('#') {
            Some(rest) => {
                let mut chars = rest.chars();
                chars.next();
                Line::Header {
                    title: chars.as_str().to_string(),
                }
            }
            None => Line::Data {
                text: line.to_string(),
            },
        }
    }
}

/// Accumulates columns from a sequence of input lines.
///
/// The only state beyond the columns themselves is which column is current;
/// that is always the most recently declared one.
#[derive(Debug, Default)]
pub struct TableBuilder {
    columns: Vec<Column>,
    line: usize,
}

impl TableBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        TableBuilder::default()
    }

    /// Consume one input line.
    ///
    /// Fails with [`TableError::DataBeforeHeader`] when a data line arrives
    /// while no column has been declared yet.
    pub fn push_line(&mut self, line: &str) -> Result<(), TableError> {
        self.line += 1;
        match Line::classify(line) {
            Line::Header { title } => self.columns.push(Column::new(title)),
            Line::Data { text } => match self.columns.last_mut() {
                Some(col) => col.push(text),
                None => return Err(TableError::DataBeforeHeader { line: self.line }),
            },
        }
        Ok(())
    }

    /// Finish the accumulate pass.
    pub fn finish(self) -> Table {
        debug!(columns = self.columns.len(), lines = self.line, "accumulated table");
        Table::new(self.columns)
    }
}

impl Table {
    /// Build a table by reading `reader` to the end.
    ///
    /// Empty input yields an empty table, not an error.
    pub fn from_reader(reader: impl BufRead) -> Result<Table, TableError> {
        let mut builder = TableBuilder::new();
        for line in reader.lines() {
            builder.push_line(&line?)?;
        }
        Ok(builder.finish())
    }

    /// Build a table from the file at `path`.
    ///
    /// A path that cannot be opened surfaces as [`TableError::Unreadable`]
    /// with the path in the message.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Table, TableError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| TableError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        Table::from_reader(BufReader::new(file))
    }
}
