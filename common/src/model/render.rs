//! Read-path projection of a table: search, sort and cell stringification.
//!
//! Kept free of any UI framework so the renderer's observable behavior is
//! covered by native tests. The component layer only decides how the
//! surviving rows are drawn.

use std::cmp::Ordering;

use serde_json::Value;

use crate::model::column::Column;
use crate::model::row::Row;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> SortDirection {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Flattens a cell to the text used for search matching and scalar display.
/// Null and missing cells flatten to the empty string.
pub fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(number)) => number.to_string(),
        Some(Value::Bool(true)) => "Yes".to_string(),
        Some(Value::Bool(false)) => "No".to_string(),
        Some(other) => other.to_string(),
    }
}

/// Simple value comparison: numeric when both sides parse as numbers, plain
/// string order otherwise. No locale-aware collation.
pub fn compare_cells(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    let left = cell_text(a);
    let right = cell_text(b);
    match (left.parse::<f64>(), right.parse::<f64>()) {
        (Ok(ln), Ok(rn)) => ln.partial_cmp(&rn).unwrap_or(Ordering::Equal),
        _ => left.cmp(&right),
    }
}

fn row_matches(row: &Row, query_lower: &str) -> bool {
    row.data
        .iter()
        .any(|value| cell_text(Some(value)).to_lowercase().contains(query_lower))
}

/// Projects the full row set into the visible one.
///
/// The filter always starts from the complete `rows` slice (never from a
/// previously sorted subset), then the single active sort key is applied to
/// the filtered result. With no search and no sort the rows come back in
/// stored order, which makes clearing the search restore the original view.
pub fn visible_rows<'a>(
    columns: &[Column],
    rows: &'a [Row],
    search: &str,
    sort: Option<(&str, SortDirection)>,
) -> Vec<&'a Row> {
    let query = search.trim().to_lowercase();
    let mut visible: Vec<&Row> = rows
        .iter()
        .filter(|row| query.is_empty() || row_matches(row, &query))
        .collect();

    if let Some((column_id, direction)) = sort {
        if let Some(index) = columns.iter().position(|column| column.id == column_id) {
            visible.sort_by(|a, b| {
                let ordering = compare_cells(a.data.get(index), b.data.get(index));
                match direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }
    }
    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::column::ColumnType;
    use serde_json::json;

    fn columns() -> Vec<Column> {
        vec![
            Column {
                id: "c1".into(),
                name: "University".into(),
                column_type: ColumnType::Text,
                width: None,
            },
            Column {
                id: "c2".into(),
                name: "Fee".into(),
                column_type: ColumnType::Number,
                width: None,
            },
        ]
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { id: "r1".into(), data: vec![json!("Oxford"), json!(39000)] },
            Row { id: "r2".into(), data: vec![json!("MIT"), json!(50000)] },
            Row { id: "r3".into(), data: vec![json!("ETH Zurich"), json!(1600)] },
        ]
    }

    fn ids(rows: &[&Row]) -> Vec<String> {
        rows.iter().map(|row| row.id.clone()).collect()
    }

    #[test]
    fn no_query_no_sort_keeps_stored_order() {
        let columns = columns();
        let rows = rows();
        let visible = visible_rows(&columns, &rows, "", None);
        assert_eq!(ids(&visible), vec!["r1", "r2", "r3"]);
    }

    #[test]
    fn descending_reverses_ascending_over_the_same_set() {
        let columns = columns();
        let rows = rows();
        let asc = visible_rows(&columns, &rows, "", Some(("c1", SortDirection::Ascending)));
        let desc = visible_rows(&columns, &rows, "", Some(("c1", SortDirection::Descending)));
        let mut reversed = ids(&asc);
        reversed.reverse();
        assert_eq!(ids(&desc), reversed);
        assert_eq!(ids(&asc), vec!["r3", "r2", "r1"]);
    }

    #[test]
    fn numeric_columns_sort_by_value_not_lexicographically() {
        let columns = columns();
        let rows = rows();
        let asc = visible_rows(&columns, &rows, "", Some(("c2", SortDirection::Ascending)));
        assert_eq!(ids(&asc), vec!["r3", "r1", "r2"]);
    }

    #[test]
    fn search_matches_any_cell_case_insensitively() {
        let columns = columns();
        let rows = rows();
        let visible = visible_rows(&columns, &rows, "zUrIcH", None);
        assert_eq!(ids(&visible), vec!["r3"]);

        // Numbers are matched through their string form.
        let by_fee = visible_rows(&columns, &rows, "50000", None);
        assert_eq!(ids(&by_fee), vec!["r2"]);
    }

    #[test]
    fn clearing_the_search_restores_the_full_pre_search_order() {
        let columns = columns();
        let rows = rows();
        let narrowed = visible_rows(&columns, &rows, "mit", None);
        assert_eq!(ids(&narrowed), vec!["r2"]);
        let cleared = visible_rows(&columns, &rows, "", None);
        assert_eq!(ids(&cleared), vec!["r1", "r2", "r3"]);
    }

    #[test]
    fn sort_applies_to_the_filtered_subset() {
        let columns = columns();
        let mut rows = rows();
        rows.push(Row { id: "r4".into(), data: vec![json!("Mittweida"), json!(900)] });
        let visible = visible_rows(&columns, &rows, "mit", Some(("c2", SortDirection::Ascending)));
        assert_eq!(ids(&visible), vec!["r4", "r2"]);
    }

    #[test]
    fn unknown_sort_key_leaves_filtered_order_alone() {
        let columns = columns();
        let rows = rows();
        let visible = visible_rows(&columns, &rows, "", Some(("missing", SortDirection::Ascending)));
        assert_eq!(ids(&visible), vec!["r1", "r2", "r3"]);
    }

    #[test]
    fn short_rows_sort_as_empty_cells() {
        let columns = columns();
        let rows = vec![
            Row { id: "r1".into(), data: vec![json!("Oxford")] },
            Row { id: "r2".into(), data: vec![json!("MIT"), json!(50000)] },
        ];
        let asc = visible_rows(&columns, &rows, "", Some(("c2", SortDirection::Ascending)));
        // Missing cell stringifies to "" and sorts first.
        assert_eq!(ids(&asc), vec!["r1", "r2"]);
    }

    #[test]
    fn cell_text_flattens_scalars() {
        assert_eq!(cell_text(Some(&json!("MIT"))), "MIT");
        assert_eq!(cell_text(Some(&json!(50000))), "50000");
        assert_eq!(cell_text(Some(&json!(true))), "Yes");
        assert_eq!(cell_text(Some(&Value::Null)), "");
        assert_eq!(cell_text(None), "");
    }
}
