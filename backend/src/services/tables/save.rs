use actix_web::{web, HttpResponse, Responder};
use chrono::{SecondsFormat, Utc};
use common::model::column::validate_columns;
use common::model::error::ValidationError;
use common::model::row::{normalize_row_data, Row};
use common::model::table::TableDefinition;
use common::requests::SaveTableRequest;
use log::info;
use rusqlite::{params, Connection};

use crate::db::{self, StoreError};
use crate::services::error_response;

pub async fn process(payload: web::Json<SaveTableRequest>) -> impl Responder {
    let result = db::open().and_then(|conn| save_table(&conn, &payload));
    match result {
        Ok(table) => HttpResponse::Ok().json(table),
        Err(err) => error_response(err),
    }
}

/// Create-or-update against the definition store.
///
/// A payload without `id` inserts a fresh table; one with `id` replaces the
/// stored definition wholesale, keeping `created_at`. Rows are normalized to
/// the positional form before anything touches the database, so stored data
/// always satisfies `data.len() == columns.len()`.
pub fn save_table(
    conn: &Connection,
    payload: &SaveTableRequest,
) -> Result<TableDefinition, StoreError> {
    let title = payload.title.trim();
    if title.is_empty() {
        return Err(ValidationError::EmptyTitle.into());
    }
    if payload.columns.is_empty() {
        return Err(ValidationError::NoColumns.into());
    }
    validate_columns(&payload.columns)?;

    let page_exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM detail_pages WHERE id = ?1)",
        params![payload.detail_page_id],
        |row| row.get(0),
    )?;
    if !page_exists {
        return Err(StoreError::UnknownDetailPage(payload.detail_page_id));
    }

    let rows: Vec<Row> = payload
        .rows
        .iter()
        .map(|row| Row {
            id: row.id.clone(),
            data: normalize_row_data(&payload.columns, &row.data),
        })
        .collect();
    let columns_json = serde_json::to_string(&payload.columns)?;
    let rows_json = serde_json::to_string(&rows)?;
    let now = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);

    let id = match payload.id {
        Some(id) => {
            let updated = conn.execute(
                "UPDATE dynamic_tables
                 SET title = ?1, description = ?2, icon_url = ?3, detail_page_id = ?4,
                     columns = ?5, rows = ?6, updated_at = ?7
                 WHERE id = ?8",
                params![
                    title,
                    payload.description,
                    payload.icon_url,
                    payload.detail_page_id,
                    columns_json,
                    rows_json,
                    now,
                    id
                ],
            )?;
            if updated == 0 {
                return Err(StoreError::NotFound(id));
            }
            info!("updated table {id}");
            id
        }
        None => {
            conn.execute(
                "INSERT INTO dynamic_tables
                     (title, description, icon_url, detail_page_id, columns, rows, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    title,
                    payload.description,
                    payload.icon_url,
                    payload.detail_page_id,
                    columns_json,
                    rows_json,
                    now,
                    now
                ],
            )?;
            let id = conn.last_insert_rowid();
            info!("created table {id} for detail page {}", payload.detail_page_id);
            id
        }
    };

    super::get::get_table(conn, id)
}
