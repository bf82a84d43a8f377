use serde::{Deserialize, Serialize};

use crate::model::column::Column;
use crate::model::row::Row;

/// A persisted dynamic table: operator-defined columns and rows attached to
/// one study-program detail page. The store replaces the whole definition on
/// every save; there are no partial updates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableDefinition {
    pub id: i64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    pub detail_page_id: i64,
    pub columns: Vec<Column>,
    pub rows: Vec<Row>,
    /// RFC 3339, assigned by the store.
    pub created_at: String,
    pub updated_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::column::ColumnType;
    use serde_json::json;

    #[test]
    fn wire_shape_is_camel_case() {
        let table = TableDefinition {
            id: 3,
            title: "Tuition Comparison".into(),
            description: None,
            icon_url: Some("https://cdn.example.com/fees.svg".into()),
            detail_page_id: 7,
            columns: vec![Column {
                id: "c1".into(),
                name: "University".into(),
                column_type: ColumnType::Text,
                width: Some(2),
            }],
            rows: vec![Row { id: "r1".into(), data: vec![json!("MIT")] }],
            created_at: "2026-08-07T10:00:00Z".into(),
            updated_at: "2026-08-07T10:00:00Z".into(),
        };

        let value = serde_json::to_value(&table).unwrap();
        assert_eq!(value["detailPageId"], json!(7));
        assert_eq!(value["iconUrl"], json!("https://cdn.example.com/fees.svg"));
        assert_eq!(value["createdAt"], json!("2026-08-07T10:00:00Z"));
        assert!(value.get("description").is_none());

        let back: TableDefinition = serde_json::from_value(value).unwrap();
        assert_eq!(back, table);
    }
}
