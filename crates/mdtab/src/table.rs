//! Core data model: columns and the accumulated table.

use serde::{Deserialize, Serialize};

/// One declared column: a title followed by its data cells in row order.
///
/// A column always has a title (possibly empty) and may have zero cells.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Column title, taken from the header line that declared it.
    pub title: String,
    /// Data cells in input order.
    pub cells: Vec<String>,
}

impl Column {
    /// Create a column with the given title and no cells.
    pub fn new(title: impl Into<String>) -> Self {
        Column {
            title: title.into(),
            cells: Vec::new(),
        }
    }

    /// Append a cell, fluent style.
    pub fn cell(mut self, cell: impl Into<String>) -> Self {
        self.cells.push(cell.into());
        self
    }

    /// Append a cell in place.
    pub fn push(&mut self, cell: impl Into<String>) {
        self.cells.push(cell.into());
    }

    /// Number of data cells (the title does not count).
    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    /// Display width: the longest `char` count among the title and all
    /// cells. Padding in the rendered table uses this width.
    pub fn width(&self) -> usize {
        self.cells
            .iter()
            .map(|cell| cell.chars().count())
            .fold(self.title.chars().count(), usize::max)
    }
}

/// Ordered collection of columns forming the output grid.
///
/// Column order is declaration order in the input and is also the rendered
/// order. The table is built once and read-only afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Columns in declaration order.
    pub columns: Vec<Column>,
}

impl Table {
    /// Create a table from pre-built columns.
    pub fn new(columns: Vec<Column>) -> Self {
        Table { columns }
    }

    /// Number of columns.
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// True when no column has been declared.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// The deepest column's cell count; the rendered table has exactly this
    /// many data rows.
    pub fn max_rows(&self) -> usize {
        self.columns
            .iter()
            .map(Column::num_cells)
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Column tests ---

    #[test]
    fn column_starts_with_title_only() {
        let col = Column::new("Name");
        assert_eq!(col.title, "Name");
        assert_eq!(col.num_cells(), 0);
    }

    #[test]
    fn column_fluent_cells_keep_order() {
        let col = Column::new("N").cell("one").cell("two");
        assert_eq!(col.cells, vec!["one", "two"]);
    }

    #[test]
    fn column_width_is_longest_of_title_and_cells() {
        let col = Column::new("ID").cell("12345").cell("7");
        assert_eq!(col.width(), 5);

        let title_wins = Column::new("Status").cell("ok");
        assert_eq!(title_wins.width(), 6);
    }

    #[test]
    fn column_width_counts_chars_not_bytes() {
        let col = Column::new("été").cell("ab");
        assert_eq!(col.width(), 3);
    }

    #[test]
    fn column_width_of_empty_title_no_cells_is_zero() {
        assert_eq!(Column::new("").width(), 0);
    }

    // --- Table tests ---

    #[test]
    fn table_default_is_empty() {
        let table = Table::default();
        assert!(table.is_empty());
        assert_eq!(table.num_columns(), 0);
        assert_eq!(table.max_rows(), 0);
    }

    #[test]
    fn table_max_rows_is_deepest_column() {
        let table = Table::new(vec![
            Column::new("A").cell("1").cell("2"),
            Column::new("B").cell("3"),
            Column::new("C"),
        ]);
        assert_eq!(table.num_columns(), 3);
        assert_eq!(table.max_rows(), 2);
    }

    #[test]
    fn table_serde_roundtrip() {
        let table = Table::new(vec![
            Column::new("A").cell("1"),
            Column::new("B"),
        ]);
        let json = serde_json::to_string(&table).unwrap();
        let parsed: Table = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, table);
    }
}
