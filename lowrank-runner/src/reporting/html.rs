//! HTML table file.

use super::table::report_filename;
use super::{RenderError, ReportTable};
use std::path::{Path, PathBuf};
use tracing::info;

/// Structural HTML table without the index column.
pub fn render_html(table: &ReportTable) -> String {
    let mut html = String::from("<table border=\"1\" class=\"dataframe\">\n");

    html.push_str("  <thead>\n    <tr style=\"text-align: right;\">\n");
    for cell in table.header.iter().skip(1) {
        html.push_str(&format!("      <th>{}</th>\n", escape(cell)));
    }
    html.push_str("    </tr>\n  </thead>\n");

    html.push_str("  <tbody>\n");
    for row in &table.rows {
        html.push_str("    <tr>\n");
        for cell in row.iter().skip(1) {
            html.push_str(&format!("      <td>{}</td>\n", escape(cell)));
        }
        html.push_str("    </tr>\n");
    }
    html.push_str("  </tbody>\n</table>\n");

    html
}

/// Write `stocks_52w_low_<date>.html` into `dir`.
pub fn write_html(table: &ReportTable, dir: &Path) -> Result<PathBuf, RenderError> {
    let path = dir.join(report_filename(table.date, "html"));
    std::fs::write(&path, render_html(table)).map_err(|source| RenderError::Io {
        path: path.clone(),
        source,
    })?;
    info!("HTML file saved as {}", path.display());
    Ok(path)
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn table() -> ReportTable {
        ReportTable {
            date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            header: vec!["".into(), "ticker".into(), "current_pct_from_low".into()],
            rows: vec![
                vec!["0".into(), "AAAD".into(), "12.4%".into()],
                vec!["1".into(), "A&B<C>".into(), "20.0%".into()],
            ],
        }
    }

    #[test]
    fn index_column_is_omitted() {
        let html = render_html(&table());
        assert!(html.contains("<th>ticker</th>"));
        assert!(!html.contains("<th></th>"));
        assert!(!html.contains("<td>0</td>"));
        assert!(html.contains("<td>AAAD</td>"));
        assert!(html.contains("<td>12.4%</td>"));
    }

    #[test]
    fn one_row_per_record_plus_header() {
        let html = render_html(&table());
        assert_eq!(html.matches("<tr").count(), 3);
        assert!(html.starts_with("<table"));
        assert!(html.trim_end().ends_with("</table>"));
    }

    #[test]
    fn cells_are_escaped() {
        let html = render_html(&table());
        assert!(html.contains("<td>A&amp;B&lt;C&gt;</td>"));
    }

    #[test]
    fn writes_dated_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_html(&table(), dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), "stocks_52w_low_2024-03-15.html");
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, render_html(&table()));
    }
}
