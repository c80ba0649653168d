//! Convert a linear list of rows into a fixed-width markdown table.
//!
//! The input is a line-oriented stream with two line classes:
//!
//! - **header lines** start with `#`, followed by a single separator
//!   character (conventionally a space) and the column title. Each header
//!   declares a new column and makes it the current one.
//! - **data lines** are everything else; each becomes the next data cell of
//!   the current column.
//!
//! The whole input is accumulated into a [`Table`] in one forward pass, then
//! rendered as a padded, pipe-delimited markdown table:
//!
//! ```rust
//! use mdtab::Table;
//!
//! let input = "# A\n1\n2\n# B\n3\n";
//! let table = Table::from_reader(input.as_bytes()).unwrap();
//!
//! assert_eq!(
//!     table.render(),
//!     "| A | B |\n\
//!      | - | - |\n\
//!      | 1 | 3 |\n\
//!      | 2 |   |\n"
//! );
//! ```
//!
//! Column widths are fixed per column (the longest title or cell, counted in
//! `char`s) and consistent across every row; columns with fewer cells than
//! the longest one pad out with blank cells. A data line that arrives before
//! any header is a [`TableError::DataBeforeHeader`] rather than a silent
//! drop.

mod error;
mod parse;
mod render;
mod table;

pub use error::TableError;
pub use parse::{Line, TableBuilder};
pub use render::column_widths;
pub use table::{Column, Table};
