//! The render pass: width resolution and markdown output.
//!
//! Widths are resolved once from the accumulated table, then every row is
//! emitted against those fixed widths so the `|` boundaries line up across
//! the whole output.

use tracing::debug;

use crate::table::{Column, Table};

/// Per-column display widths, in declaration order.
pub fn column_widths(table: &Table) -> Vec<usize> {
    table.columns.iter().map(Column::width).collect()
}

impl Table {
    /// Render as a pipe-delimited markdown table.
    ///
    /// One header row, one delimiter row of dashes sized to each column's
    /// width, then [`Table::max_rows`] data rows. Columns with fewer cells
    /// than the deepest one render blank cells in the remaining rows. An
    /// empty table (zero columns) renders as an empty string.
    ///
    /// Rendering is deterministic: the same table always produces the same
    /// bytes.
    pub fn render(&self) -> String {
        if self.is_empty() {
            return String::new();
        }

        let widths = column_widths(self);
        let max_rows = self.max_rows();
        debug!(columns = widths.len(), rows = max_rows, "rendering table");

        let mut out = String::new();

        push_row(
            &mut out,
            &widths,
            self.columns.iter().map(|col| col.title.as_str()),
        );

        let dashes: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        push_row(&mut out, &widths, dashes.iter().map(String::as_str));

        for row in 0..max_rows {
            push_row(
                &mut out,
                &widths,
                self.columns
                    .iter()
                    .map(move |col| col.cells.get(row).map(String::as_str).unwrap_or("")),
            );
        }

        out
    }
}

/// Emit one `| a | b |` row, padding each cell to its column width.
fn push_row<'a>(out: &mut String, widths: &[usize], cells: impl Iterator<Item = &'a str>) {
    out.push('|');
    for (cell, width) in cells.zip(widths) {
        out.push(' ');
        out.push_str(cell);
        let pad = width.saturating_sub(cell.chars().count());
        for _ in 0..pad {
            out.push(' ');
        }
        out.push(' ');
        out.push('|');
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(cols: &[(&str, &[&str])]) -> Table {
        Table::new(
            cols.iter()
                .map(|(title, cells)| {
                    let mut col = Column::new(*title);
                    for cell in *cells {
                        col.push(*cell);
                    }
                    col
                })
                .collect(),
        )
    }

    #[test]
    fn render_pads_short_columns_with_blank_cells() {
        let t = table(&[("A", &["1", "2"][..]), ("B", &["3"][..])]);
        assert_eq!(t.render(), "| A | B |\n| - | - |\n| 1 | 3 |\n| 2 |   |\n");
    }

    #[test]
    fn render_header_only_column() {
        let t = table(&[("Only", &[][..])]);
        assert_eq!(t.render(), "| Only |\n| ---- |\n");
    }

    #[test]
    fn render_empty_table_is_empty_string() {
        assert_eq!(Table::default().render(), "");
    }

    #[test]
    fn render_width_comes_from_longest_cell() {
        let t = table(&[("ID", &["12345"][..])]);
        assert_eq!(t.render(), "| ID    |\n| ----- |\n| 12345 |\n");
    }

    #[test]
    fn render_zero_width_column() {
        let t = table(&[("", &[][..])]);
        assert_eq!(t.render(), "|  |\n|  |\n");
    }

    #[test]
    fn render_every_row_same_length() {
        let t = table(&[
            ("Name", &["Alice", "Bob"][..]),
            ("Role", &["admin"][..]),
            ("Count", &["42", "17"][..]),
        ]);
        let rendered = t.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 2 + 2);
        let len = lines[0].chars().count();
        for line in &lines {
            assert_eq!(line.chars().count(), len);
        }
    }

    #[test]
    fn column_widths_in_declaration_order() {
        let t = table(&[("A", &["123"][..]), ("BB", &["1"][..])]);
        assert_eq!(column_widths(&t), vec![3, 2]);
    }
}
