//! Plain-text table for the console.

use super::ReportTable;

/// Every column right-aligned to its widest cell, joined by one space.
/// The index column has an empty header.
pub fn render_text(table: &ReportTable) -> String {
    if table.is_empty() {
        return "Empty report".to_string();
    }

    let widths = table.column_widths();
    let mut lines = Vec::with_capacity(table.rows.len() + 1);
    lines.push(render_line(&table.header, &widths));
    for row in &table.rows {
        lines.push(render_line(row, &widths));
    }
    lines.join("\n")
}

fn render_line(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, &w)| format!("{cell:>w$}"))
        .collect::<Vec<_>>()
        .join(" ")
}
