use actix_web::{web, HttpResponse, Responder};
use common::model::table::TableDefinition;
use rusqlite::Connection;

use crate::db::{self, StoreError};
use crate::services::error_response;

use super::get::{decode_table, map_raw, SELECT_COLUMNS};

/// Every table attached to a detail page, in creation order. An unknown page
/// simply has no tables; the public read path treats both the same.
pub fn get_tables_by_page(
    conn: &Connection,
    detail_page_id: i64,
) -> Result<Vec<TableDefinition>, StoreError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {SELECT_COLUMNS} FROM dynamic_tables WHERE detail_page_id = ?1 ORDER BY id"
    ))?;
    let raw_rows = stmt.query_map([detail_page_id], map_raw)?;

    let mut tables = Vec::new();
    for raw in raw_rows {
        tables.push(decode_table(raw?)?);
    }
    Ok(tables)
}

/// Actix handler for `GET /api/tables/by_page/{detail_page_id}`.
pub async fn process(detail_page_id: web::Path<i64>) -> impl Responder {
    let result = db::open().and_then(|conn| get_tables_by_page(&conn, *detail_page_id));
    match result {
        Ok(tables) => HttpResponse::Ok().json(tables),
        Err(err) => error_response(err),
    }
}
