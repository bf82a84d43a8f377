use actix_web::{web, HttpResponse, Responder};
use common::model::column::Column;
use common::model::row::{normalize_rows, Row};
use common::model::table::TableDefinition;
use rusqlite::Connection;

use crate::db::{self, StoreError};
use crate::services::error_response;

pub(super) const SELECT_COLUMNS: &str =
    "id, title, description, icon_url, detail_page_id, columns, rows, created_at, updated_at";

pub(super) type RawTable = (
    i64,
    String,
    Option<String>,
    Option<String>,
    i64,
    String,
    String,
    String,
    String,
);

pub(super) fn map_raw(row: &rusqlite::Row) -> rusqlite::Result<RawTable> {
    Ok((
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
        row.get(5)?,
        row.get(6)?,
        row.get(7)?,
        row.get(8)?,
    ))
}

/// Decodes the JSON column/row blobs and re-normalizes rows on the way out,
/// so a table written by an older build still renders with one cell per
/// column.
pub(super) fn decode_table(raw: RawTable) -> Result<TableDefinition, StoreError> {
    let (id, title, description, icon_url, detail_page_id, columns_json, rows_json, created_at, updated_at) =
        raw;
    let columns: Vec<Column> = serde_json::from_str(&columns_json)?;
    let mut rows: Vec<Row> = serde_json::from_str(&rows_json)?;
    normalize_rows(&columns, &mut rows);
    Ok(TableDefinition {
        id,
        title,
        description,
        icon_url,
        detail_page_id,
        columns,
        rows,
        created_at,
        updated_at,
    })
}

/// Fetches a single table by id.
pub fn get_table(conn: &Connection, id: i64) -> Result<TableDefinition, StoreError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {SELECT_COLUMNS} FROM dynamic_tables WHERE id = ?1"
    ))?;
    let mut raw_rows = stmt.query_map([id], map_raw)?;
    match raw_rows.next() {
        Some(raw) => decode_table(raw?),
        None => Err(StoreError::NotFound(id)),
    }
}

/// Actix handler for `GET /api/tables/{table_id}`.
pub async fn process(table_id: web::Path<i64>) -> impl Responder {
    let result = db::open().and_then(|conn| get_table(&conn, *table_id));
    match result {
        Ok(table) => HttpResponse::Ok().json(table),
        Err(err) => error_response(err),
    }
}
