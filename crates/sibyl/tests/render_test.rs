//! Tests for result-table rendering.

use sibyl::render::render_table;
use sibyl_database::{Row, RowSet, SqlValue};

#[test]
fn columns_align_across_rows() {
    let rows = RowSet::from(vec![
        Row(vec![SqlValue::Integer(1), SqlValue::Text("Alice".into())]),
        Row(vec![SqlValue::Integer(200), SqlValue::Text("Bo".into())]),
    ]);

    let table = render_table(&rows);
    let lines: Vec<&str> = table.lines().collect();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "| 1   | 'Alice' |");
    assert_eq!(lines[1], "| 200 | 'Bo'    |");
}

#[test]
fn ragged_rows_pad_with_empty_cells() {
    let rows = RowSet::from(vec![
        Row(vec![SqlValue::Integer(1), SqlValue::Text("Alice".into())]),
        Row(vec![SqlValue::Integer(2)]),
    ]);

    let table = render_table(&rows);
    let lines: Vec<&str> = table.lines().collect();

    assert_eq!(lines[0], "| 1 | 'Alice' |");
    assert_eq!(lines[1], "| 2 |         |");
}

#[test]
fn empty_result_renders_a_placeholder() {
    assert_eq!(render_table(&RowSet::default()), "(no rows)");
}
