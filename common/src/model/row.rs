use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::column::Column;

/// Storage/wire form of a table row.
///
/// `data` is positionally aligned to the owning table's column order; after
/// normalization it always has exactly one entry per column. The keyed form
/// used while editing lives in [`crate::model::draft::DraftRow`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub id: String,
    pub data: Vec<Value>,
}

impl Row {
    /// Cell for the column at `index`. `None` for both out-of-range and
    /// explicit nulls, which render identically.
    pub fn cell(&self, index: usize) -> Option<&Value> {
        self.data.get(index).filter(|value| !value.is_null())
    }
}

/// Reshapes loose row data into the canonical positional form.
///
/// Two shapes occur on the wire: a positional array (padded or truncated to
/// the column count) and a map keyed by column id. Anything else degrades to
/// an all-null row instead of an error, so the renderer never has to deal
/// with malformed cell data.
pub fn normalize_row_data(columns: &[Column], data: &Value) -> Vec<Value> {
    match data {
        Value::Array(items) => (0..columns.len())
            .map(|index| items.get(index).cloned().unwrap_or(Value::Null))
            .collect(),
        Value::Object(map) => columns
            .iter()
            .map(|column| map.get(&column.id).cloned().unwrap_or(Value::Null))
            .collect(),
        _ => vec![Value::Null; columns.len()],
    }
}

/// Normalizes every row in place, guaranteeing
/// `row.data.len() == columns.len()` afterwards.
pub fn normalize_rows(columns: &[Column], rows: &mut [Row]) {
    for row in rows {
        let data = Value::Array(std::mem::take(&mut row.data));
        row.data = normalize_row_data(columns, &data);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::column::ColumnType;
    use serde_json::json;

    fn columns() -> Vec<Column> {
        ["c1", "c2", "c3"]
            .into_iter()
            .map(|id| Column {
                id: id.to_string(),
                name: id.to_uppercase(),
                column_type: ColumnType::Text,
                width: None,
            })
            .collect()
    }

    #[test]
    fn short_arrays_are_padded_with_null() {
        let data = normalize_row_data(&columns(), &json!(["MIT"]));
        assert_eq!(data, vec![json!("MIT"), Value::Null, Value::Null]);
    }

    #[test]
    fn long_arrays_are_truncated() {
        let data = normalize_row_data(&columns(), &json!([1, 2, 3, 4, 5]));
        assert_eq!(data, vec![json!(1), json!(2), json!(3)]);
    }

    #[test]
    fn keyed_objects_resolve_by_column_id() {
        let data = normalize_row_data(&columns(), &json!({"c3": "last", "c1": "first"}));
        assert_eq!(data, vec![json!("first"), Value::Null, json!("last")]);
    }

    #[test]
    fn garbage_degrades_to_all_null() {
        let data = normalize_row_data(&columns(), &json!("not a row"));
        assert_eq!(data, vec![Value::Null; 3]);
    }

    #[test]
    fn normalize_rows_fixes_every_length() {
        let columns = columns();
        let mut rows = vec![
            Row { id: "r1".into(), data: vec![json!("a")] },
            Row { id: "r2".into(), data: vec![json!(1), json!(2), json!(3), json!(4)] },
        ];
        normalize_rows(&columns, &mut rows);
        for row in &rows {
            assert_eq!(row.data.len(), columns.len());
        }
    }

    #[test]
    fn cell_treats_null_as_missing() {
        let row = Row { id: "r1".into(), data: vec![json!("x"), Value::Null] };
        assert_eq!(row.cell(0), Some(&json!("x")));
        assert_eq!(row.cell(1), None);
        assert_eq!(row.cell(9), None);
    }
}
