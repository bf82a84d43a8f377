//! # Dynamic Table Service Module
//!
//! Aggregates the API endpoints for managing dynamic tables: the
//! operator-defined comparison tables shown on study-program detail pages.
//! Requests under `/api/tables` are routed to the handler logic in the
//! sub-modules.
//!
//! ## Registered routes
//!
//! * **`POST /save`** — create-or-update. Expects a JSON `SaveTableRequest`;
//!   a payload without `id` creates a table, one with `id` replaces the
//!   stored definition wholesale. Returns the stored `TableDefinition`.
//! * **`GET /by_page/{detail_page_id}`** — every table attached to a detail
//!   page, in creation order. Used by the public rendering path.
//! * **`GET /{table_id}`** — a single table, used by the builder when editing.
//! * **`DELETE /{table_id}`** — removes a table. 404 when the id is unknown.

mod delete;
mod get;
mod list;
mod save;

use actix_web::web::{self, get, post, scope};
use actix_web::Scope;

/// The base path for all dynamic-table API endpoints.
const API_PATH: &str = "/api/tables";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/save", post().to(save::process))
        .route("/by_page/{detail_page_id}", get().to(list::process))
        .route("/{table_id}", get().to(get::process))
        .route("/{table_id}", web::delete().to(delete::process))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{self, StoreError};
    use common::model::column::{Column, ColumnType};
    use common::model::error::ValidationError;
    use common::requests::{RowPayload, SaveTableRequest};
    use rusqlite::Connection;
    use serde_json::{json, Value};

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        db::init_schema(&conn).unwrap();
        conn.execute(
            "INSERT INTO detail_pages (id, title, slug) VALUES (7, 'Masters in the US', 'masters-us')",
            [],
        )
        .unwrap();
        conn
    }

    fn column(id: &str, name: &str, column_type: ColumnType) -> Column {
        Column { id: id.into(), name: name.into(), column_type, width: None }
    }

    fn tuition_request() -> SaveTableRequest {
        SaveTableRequest {
            id: None,
            title: "Tuition Comparison".into(),
            description: None,
            icon_url: None,
            detail_page_id: 7,
            columns: vec![
                column("c1", "University", ColumnType::Text),
                column("c2", "Fee", ColumnType::Number),
            ],
            rows: vec![RowPayload { id: "r1".into(), data: json!(["MIT", 50000]) }],
        }
    }

    #[test]
    fn create_then_list_by_page_round_trips() {
        let conn = test_conn();
        let created = save::save_table(&conn, &tuition_request()).unwrap();
        assert!(created.id > 0);
        assert!(!created.created_at.is_empty());

        let tables = list::get_tables_by_page(&conn, 7).unwrap();
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].title, "Tuition Comparison");
        assert_eq!(tables[0].columns, created.columns);
        assert_eq!(tables[0].rows[0].data, vec![json!("MIT"), json!(50000)]);
    }

    #[test]
    fn listing_an_unknown_page_is_empty_not_an_error() {
        let conn = test_conn();
        assert!(list::get_tables_by_page(&conn, 999).unwrap().is_empty());
    }

    #[test]
    fn empty_title_is_rejected() {
        let conn = test_conn();
        let mut request = tuition_request();
        request.title = "   ".into();
        let err = save::save_table(&conn, &request).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Validation(ValidationError::EmptyTitle)
        ));
    }

    #[test]
    fn zero_columns_is_rejected() {
        let conn = test_conn();
        let mut request = tuition_request();
        request.columns.clear();
        let err = save::save_table(&conn, &request).unwrap_err();
        assert!(matches!(err, StoreError::Validation(ValidationError::NoColumns)));
    }

    #[test]
    fn duplicate_column_names_are_rejected_case_insensitively() {
        let conn = test_conn();
        let mut request = tuition_request();
        request.columns = vec![
            column("c1", "University", ColumnType::Text),
            column("c2", "university", ColumnType::Text),
        ];
        let err = save::save_table(&conn, &request).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Validation(ValidationError::DuplicateColumnName(_))
        ));
    }

    #[test]
    fn unknown_detail_page_is_rejected() {
        let conn = test_conn();
        let mut request = tuition_request();
        request.detail_page_id = 123;
        let err = save::save_table(&conn, &request).unwrap_err();
        assert!(matches!(err, StoreError::UnknownDetailPage(123)));
    }

    #[test]
    fn update_with_unknown_id_is_not_found() {
        let conn = test_conn();
        let mut request = tuition_request();
        request.id = Some(999);
        let err = save::save_table(&conn, &request).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(999)));
    }

    #[test]
    fn update_replaces_the_definition_wholesale() {
        let conn = test_conn();
        let created = save::save_table(&conn, &tuition_request()).unwrap();

        let replacement = SaveTableRequest {
            id: Some(created.id),
            title: "Living Costs".into(),
            description: Some("Monthly estimates".into()),
            icon_url: None,
            detail_page_id: 7,
            columns: vec![column("c9", "City", ColumnType::Text)],
            rows: vec![RowPayload { id: "r9".into(), data: json!(["Boston"]) }],
        };
        let updated = save::save_table(&conn, &replacement).unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "Living Costs");
        assert_eq!(updated.columns.len(), 1);
        assert_eq!(updated.rows[0].data, vec![json!("Boston")]);
        assert_eq!(updated.created_at, created.created_at);

        // No second table appeared.
        assert_eq!(list::get_tables_by_page(&conn, 7).unwrap().len(), 1);
    }

    #[test]
    fn keyed_object_rows_are_normalized_to_positional_form() {
        let conn = test_conn();
        let mut request = tuition_request();
        request.rows = vec![
            RowPayload { id: "r1".into(), data: json!({"c2": 30000, "c1": "Oxford"}) },
            RowPayload { id: "r2".into(), data: json!(["ETH Zurich"]) },
        ];
        let created = save::save_table(&conn, &request).unwrap();

        assert_eq!(created.rows[0].data, vec![json!("Oxford"), json!(30000)]);
        assert_eq!(created.rows[1].data, vec![json!("ETH Zurich"), Value::Null]);
        for row in &created.rows {
            assert_eq!(row.data.len(), created.columns.len());
        }
    }

    #[test]
    fn get_returns_the_stored_table_and_404_for_strangers() {
        let conn = test_conn();
        let created = save::save_table(&conn, &tuition_request()).unwrap();

        let fetched = get::get_table(&conn, created.id).unwrap();
        assert_eq!(fetched, created);

        let err = get::get_table(&conn, created.id + 1).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[test]
    fn delete_removes_and_repeat_delete_is_not_found() {
        let conn = test_conn();
        let created = save::save_table(&conn, &tuition_request()).unwrap();

        delete::delete_table(&conn, created.id).unwrap();
        assert!(list::get_tables_by_page(&conn, 7).unwrap().is_empty());

        let err = delete::delete_table(&conn, created.id).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }
}
