//! Plain-text rendering of query results.

use sibyl_database::RowSet;

/// Render rows as an aligned text table.
///
/// Result columns carry no names (the statement was model-generated), so
/// there is no header row.
///
/// # Examples
///
/// ```
/// use sibyl::render::render_table;
/// use sibyl_database::{Row, RowSet, SqlValue};
///
/// let rows = RowSet::from(vec![
///     Row(vec![SqlValue::Integer(1), SqlValue::Text("Alice".into())]),
///     Row(vec![SqlValue::Integer(20), SqlValue::Text("Bo".into())]),
/// ]);
/// let table = render_table(&rows);
/// assert!(table.contains("| 1  | 'Alice' |"));
/// assert!(table.contains("| 20 | 'Bo'    |"));
/// ```
pub fn render_table(rows: &RowSet) -> String {
    if rows.is_empty() {
        return "(no rows)".to_string();
    }

    let rendered: Vec<Vec<String>> = rows
        .rows()
        .iter()
        .map(|row| row.values().iter().map(ToString::to_string).collect())
        .collect();

    let columns = rendered.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0usize; columns];
    for row in &rendered {
        for (idx, cell) in row.iter().enumerate() {
            widths[idx] = widths[idx].max(cell.len());
        }
    }

    let mut out = String::new();
    for row in &rendered {
        out.push('|');
        for (idx, width) in widths.iter().enumerate() {
            let cell = row.get(idx).map(String::as_str).unwrap_or("");
            let width = *width;
            out.push_str(&format!(" {cell:<width$} |"));
        }
        out.push('\n');
    }
    out
}
